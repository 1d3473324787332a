// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

#![warn(missing_docs)]

//! Cryptographic primitives backing the OPC UA secure channel: security policies,
//! RSA key pairs, X.509 certificates and the on-disk certificate store used to
//! locate an application instance certificate and trust list.

pub mod aeskey;
pub mod certificate_store;
pub mod pkey;
pub mod random;
pub mod security_policy;
pub mod thumbprint;
pub mod x509;

pub use certificate_store::CertificateStore;
pub use pkey::{KeySize, PrivateKey, PublicKey};
pub use security_policy::{RsaPadding, SecurityPolicy};
pub use thumbprint::Thumbprint;
pub use x509::X509;
