// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}

#[opcua::types::ua_encodable]
/// One entry of the server list returned by `FindServersOnNetwork`, as advertised
/// over mDNS/DNS-SD (Part 12, 7.2).
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/5.5.3/#5.5.3.2
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerOnNetwork {
    /// Identifier of this record, monotonically increasing on the discovery server.
    pub record_id: u32,
    /// Human readable name of the server, as advertised on the network.
    pub server_name: opcua::types::string::UAString,
    /// URL at which the server's `GetEndpoints` service can be reached.
    pub discovery_url: opcua::types::string::UAString,
    /// Capability identifiers the server advertises, e.g. `LDS`, `DA`, `HD`.
    pub server_capabilities: Option<Vec<opcua::types::string::UAString>>,
}
