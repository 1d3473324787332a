// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Describes one endpoint a server exposes, returned by `GetEndpoints` (Part 4, 7.10).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.10/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EndpointDescription {
    /// URL the client should use to connect to this endpoint.
    pub endpoint_url: opcua::types::string::UAString,
    /// Description of the server exposing this endpoint.
    pub server: super::application_description::ApplicationDescription,
    /// The server's application instance certificate.
    pub server_certificate: opcua::types::byte_string::ByteString,
    /// Security mode applied to messages sent over this endpoint.
    pub security_mode: super::enums::MessageSecurityMode,
    /// Security policy applied to messages sent over this endpoint.
    pub security_policy_uri: opcua::types::string::UAString,
    /// The identity token types this endpoint accepts.
    pub user_identity_tokens: Option<Vec<super::user_token_policy::UserTokenPolicy>>,
    /// The transport profile used by this endpoint, e.g. UA-TCP.
    pub transport_profile_uri: opcua::types::string::UAString,
    /// Relative ranking of this endpoint's security among the endpoints the server exposes.
    pub security_level: u8,
}
