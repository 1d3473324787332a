// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! RSA key pair wrappers used for asymmetric signing, verification, encryption and
//! decryption of secure channel messages.

use rand::rngs::OsRng;
use rsa::{traits::PublicKeyParts, RsaPrivateKey, RsaPublicKey};
use uac_types::{status_code::StatusCode, Error};

use crate::security_policy::RsaPadding;

/// Supported RSA key sizes for application instance certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// 1024 bit key. Deprecated, kept only for interop with legacy servers.
    Bits1024,
    /// 2048 bit key.
    Bits2048,
    /// 3072 bit key.
    Bits3072,
    /// 4096 bit key.
    Bits4096,
}

impl KeySize {
    /// Key size in bits.
    pub fn bits(&self) -> usize {
        match self {
            KeySize::Bits1024 => 1024,
            KeySize::Bits2048 => 2048,
            KeySize::Bits3072 => 3072,
            KeySize::Bits4096 => 4096,
        }
    }
}

/// An RSA private key, used to sign outgoing `OpenSecureChannel` requests and
/// decrypt data encrypted with our public key.
#[derive(Clone)]
pub struct PrivateKey(RsaPrivateKey);

/// An RSA public key, extracted from a peer's certificate.
#[derive(Clone)]
pub struct PublicKey(RsaPublicKey);

impl PrivateKey {
    /// Generate a new private key of the given size. Used by the certificate
    /// store when no key is present on disk and self-signed cert creation is enabled.
    pub fn generate(key_size: KeySize) -> Result<Self, Error> {
        let mut rng = OsRng;
        RsaPrivateKey::new(&mut rng, key_size.bits())
            .map(Self)
            .map_err(|e| Error::new(StatusCode::BadCertificateInvalid, e.to_string()))
    }

    /// Parse a private key from PEM, trying PKCS#8 then falling back to PKCS#1.
    pub fn from_pem(pem: &str) -> Result<Self, Error> {
        use rsa::pkcs8::DecodePrivateKey;
        if let Ok(key) = RsaPrivateKey::from_pkcs8_pem(pem) {
            return Ok(Self(key));
        }
        use rsa::pkcs1::DecodeRsaPrivateKey;
        RsaPrivateKey::from_pkcs1_pem(pem)
            .map(Self)
            .map_err(|e| Error::new(StatusCode::BadCertificateInvalid, e.to_string()))
    }

    /// Serialize this key as PKCS#8 PEM.
    pub fn to_pem(&self) -> Result<String, Error> {
        use rsa::pkcs8::{EncodePrivateKey, LineEnding};
        self.0
            .to_pkcs8_pem(LineEnding::LF)
            .map(|z| z.to_string())
            .map_err(|e| Error::new(StatusCode::BadCertificateInvalid, e.to_string()))
    }

    /// Size of the key modulus, in bytes.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// The public key matching this private key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.to_public_key())
    }

    pub(crate) fn inner(&self) -> &RsaPrivateKey {
        &self.0
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl PublicKey {
    pub(crate) fn from_rsa(key: RsaPublicKey) -> Self {
        Self(key)
    }

    /// Size of the key modulus, in bytes. Also the size of a single RSA block,
    /// plaintext or ciphertext.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Size of the ciphertext produced by encrypting `plain_text_size` bytes with this
    /// key under the given padding scheme.
    pub fn calculate_cipher_text_size(&self, plain_text_size: usize, padding: RsaPadding) -> usize {
        let block_size = self.plain_text_block_size(padding).max(1);
        let blocks = plain_text_size.div_ceil(block_size);
        blocks * self.size()
    }

    /// Maximum number of plaintext bytes that fit in a single RSA block under the
    /// given padding scheme.
    pub fn plain_text_block_size(&self, padding: RsaPadding) -> usize {
        let overhead = match padding {
            RsaPadding::Pkcs1V15 => 11,
            RsaPadding::OaepSha1 => 2 + 2 * 20,
            RsaPadding::OaepSha256 => 2 + 2 * 32,
        };
        self.size().saturating_sub(overhead)
    }

    pub(crate) fn inner(&self) -> &RsaPublicKey {
        &self.0
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PublicKey(..)")
    }
}
