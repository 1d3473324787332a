// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

#![warn(missing_docs)]

//! Async OPC UA client: secure channel and session management, the request/response
//! services defined by the OPC UA specification, subscriptions and the address space
//! browser.

use std::path::PathBuf;

pub mod browser;
pub mod config;
pub mod custom_types;
pub mod retry;
pub mod session;
pub mod transport;

pub use config::ClientConfig;
pub use retry::{ExponentialBackoff, SessionRetryPolicy};
pub use session::{Client, RequestRetryPolicy, Session, UARequest};
pub use transport::AsyncSecureChannel;

/// The identity a client presents to the server when activating a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityToken {
    /// No identity, the session is activated anonymously.
    Anonymous,
    /// Username and password identity.
    UserName(String, String),
    /// X509 certificate identity, as paths to a DER certificate and PEM private key.
    X509(PathBuf, PathBuf),
}
