// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}

#[opcua::types::ua_encodable]
/// Describes a server registering itself with a discovery server (Part 4, 5.4.5).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/5.4.5/#5.4.5.2
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisteredServer {
    /// Globally unique identifier for the server instance.
    pub server_uri: opcua::types::string::UAString,
    /// URI of the product, unique to the product vendor.
    pub product_uri: opcua::types::string::UAString,
    /// Human readable names of the server, one per locale.
    pub server_names: Option<Vec<opcua::types::localized_text::LocalizedText>>,
    /// Whether the server is a standard server, a discovery server, or both.
    pub server_type: super::enums::ApplicationType,
    /// URI of the gateway server, if this registration is for a server behind one.
    pub gateway_server_uri: opcua::types::string::UAString,
    /// URLs at which the server's `GetEndpoints` service can be reached.
    pub discovery_urls: Option<Vec<opcua::types::string::UAString>>,
    /// Path to a file the discovery server can check for existence to detect that
    /// the registering server has been uninstalled.
    pub semaphore_file_path: opcua::types::string::UAString,
    /// `true` to register the server, `false` to remove a previous registration.
    pub is_online: bool,
}
