// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// Counts successful and failed invocations of a service (Part 5, 12.22).
/// https://reference.opcfoundation.org/v105/Core/docs/Part5/12.22/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceCounterDataType {
    /// Number of times the service was called, successfully or not.
    pub total_count: u32,
    /// Number of those calls that resulted in an error.
    pub error_count: u32,
}
