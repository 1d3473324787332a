// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock, Einar Omang
#[allow(unused)]
mod opcua {
    pub use crate as types;
}
#[opcua::types::ua_encodable]
/// The result of invoking a single method via the `Call` service.
/// https://reference.opcfoundation.org/v105/Core/docs/Part4/5.11.3/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallMethodResult {
    /// The overall result of the method call.
    pub status_code: opcua::types::StatusCode,
    /// Status of each input argument, in order.
    pub input_argument_results: Option<Vec<opcua::types::StatusCode>>,
    /// Diagnostics for each input argument, in order.
    pub input_argument_diagnostic_infos: Option<Vec<opcua::types::diagnostic_info::DiagnosticInfo>>,
    /// The output arguments returned by the method, in order.
    pub output_arguments: Option<Vec<opcua::types::Variant>>,
}
