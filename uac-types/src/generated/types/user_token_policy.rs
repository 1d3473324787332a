// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Describes one way a server will accept a client's identity (Part 4, 7.43).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.43/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserTokenPolicy {
    /// Identifier the client must echo back in the `policy_id` of its identity token.
    pub policy_id: opcua::types::string::UAString,
    /// The kind of token this policy describes.
    pub token_type: super::enums::UserTokenType,
    /// For issued tokens, the URI identifying the token profile.
    pub issued_token_type: opcua::types::string::UAString,
    /// Endpoint to contact to obtain an issued token, if applicable.
    pub issuer_endpoint_url: opcua::types::string::UAString,
    /// Security policy used to encrypt the token, or empty to use the secure channel's policy.
    pub security_policy_uri: opcua::types::string::UAString,
}
