// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "xml")]
mod xml;
