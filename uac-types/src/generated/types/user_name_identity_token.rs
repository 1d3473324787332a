// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Identifies a user by a username and a (possibly encrypted) password (Part 4, 7.41.3).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.41.3/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserNameIdentityToken {
    /// Identifier of the `UserTokenPolicy` this token satisfies.
    pub policy_id: opcua::types::string::UAString,
    /// The user name.
    pub user_name: opcua::types::string::UAString,
    /// The password, plaintext or encrypted depending on `encryption_algorithm`.
    pub password: opcua::types::byte_string::ByteString,
    /// URI of the algorithm used to encrypt the password, or empty if it is plaintext.
    pub encryption_algorithm: opcua::types::string::UAString,
}
impl opcua::types::MessageInfo for UserNameIdentityToken {
    fn type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::UserNameIdentityToken_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::UserNameIdentityToken_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> opcua::types::ObjectId {
        opcua::types::ObjectId::UserNameIdentityToken_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> opcua::types::DataTypeId {
        opcua::types::DataTypeId::UserNameIdentityToken
    }
}
