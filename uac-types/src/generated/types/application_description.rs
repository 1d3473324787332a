// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Describes an application, identifying it and how clients may discover its endpoints
/// (Part 4, 7.1).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/7.1/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationDescription {
    /// Globally unique identifier for the application instance.
    pub application_uri: opcua::types::string::UAString,
    /// URI of the product, unique to the product vendor.
    pub product_uri: opcua::types::string::UAString,
    /// Human readable name of the application.
    pub application_name: opcua::types::localized_text::LocalizedText,
    /// Whether the application is a client, a server, or both.
    pub application_type: super::enums::ApplicationType,
    /// URI of the gateway server, if this description is for a server behind one.
    pub gateway_server_uri: opcua::types::string::UAString,
    /// URI identifying the discovery profile, for discovery servers.
    pub discovery_profile_uri: opcua::types::string::UAString,
    /// URLs at which the application's `GetEndpoints` service can be reached.
    pub discovery_urls: Option<Vec<opcua::types::string::UAString>>,
}
