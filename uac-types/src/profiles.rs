// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Well-known user token policy ids used when a server or client doesn't
//! negotiate anything more specific.

/// Policy id of the anonymous user token policy offered by default.
pub const SECURITY_USER_TOKEN_POLICY_ANONYMOUS: &str = "anonymous";

/// Policy id of the default username/password user token policy.
pub const SECURITY_USER_TOKEN_POLICY_USERPASS: &str = "userpass";

/// Policy id of the default X.509 certificate user token policy.
pub const SECURITY_USER_TOKEN_POLICY_X509: &str = "x509";
