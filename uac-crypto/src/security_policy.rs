// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Security policies defined by OPC UA Part 7, and the derived-key / PRF
//! computations from Part 6, 6.7.5.

use std::fmt;

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rsa::{
    pkcs1v15::{Signature, SigningKey, VerifyingKey},
    signature::{Signer, Verifier},
    Oaep, Pkcs1v15Encrypt,
};
use sha1::Sha1;
use sha2::Sha256;
use uac_types::{status_code::StatusCode, Error};

use crate::{
    aeskey::AesKey,
    pkey::{PrivateKey, PublicKey},
};

/// Padding scheme used for asymmetric (RSA) encryption and signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaPadding {
    /// PKCS#1 v1.5 padding, used by `Basic128Rsa15`.
    Pkcs1V15,
    /// OAEP padding with SHA-1, used by `Basic256`/`Basic256Sha256`.
    OaepSha1,
    /// OAEP padding with SHA-256, used by the `Aes*Sha256Rsa*` policies.
    OaepSha256,
}

const NONE_URI: &str = "http://opcfoundation.org/UA/SecurityPolicy#None";
const BASIC128RSA15_URI: &str = "http://opcfoundation.org/UA/SecurityPolicy#Basic128Rsa15";
const BASIC256_URI: &str = "http://opcfoundation.org/UA/SecurityPolicy#Basic256";
const BASIC256SHA256_URI: &str = "http://opcfoundation.org/UA/SecurityPolicy#Basic256Sha256";
const AES128SHA256RSAOAEP_URI: &str =
    "http://opcfoundation.org/UA/SecurityPolicy#Aes128_Sha256_RsaOaep";
const AES256SHA256RSAPSS_URI: &str =
    "http://opcfoundation.org/UA/SecurityPolicy#Aes256_Sha256_RsaPss";

/// The set of security policies a client may negotiate with a server.
///
/// See OPC UA Part 7 for the algorithm sets each policy implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityPolicy {
    /// No security at all. Messages are sent in the clear.
    #[default]
    None,
    /// `Basic128Rsa15`. Deprecated, kept for interop with legacy servers.
    Basic128Rsa15,
    /// `Basic256`. Deprecated, kept for interop with legacy servers.
    Basic256,
    /// `Basic256Sha256`.
    Basic256Sha256,
    /// `Aes128_Sha256_RsaOaep`.
    Aes128Sha256RsaOaep,
    /// `Aes256_Sha256_RsaPss`.
    Aes256Sha256RsaPss,
    /// A security policy URI which could not be recognized.
    Unknown,
}

impl std::str::FromStr for SecurityPolicy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_uri(s))
    }
}

impl fmt::Display for SecurityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_uri())
    }
}

impl SecurityPolicy {
    /// Parse a security policy from its URI, returning `Unknown` if unrecognized.
    pub fn from_uri(uri: &str) -> SecurityPolicy {
        match uri {
            NONE_URI | "" => SecurityPolicy::None,
            BASIC128RSA15_URI => SecurityPolicy::Basic128Rsa15,
            BASIC256_URI => SecurityPolicy::Basic256,
            BASIC256SHA256_URI => SecurityPolicy::Basic256Sha256,
            AES128SHA256RSAOAEP_URI => SecurityPolicy::Aes128Sha256RsaOaep,
            AES256SHA256RSAPSS_URI => SecurityPolicy::Aes256Sha256RsaPss,
            _ => SecurityPolicy::Unknown,
        }
    }

    /// Alias for [`SecurityPolicy::to_uri`].
    pub fn to_str(&self) -> &'static str {
        self.to_uri()
    }

    /// The URI identifying this security policy.
    pub fn to_uri(&self) -> &'static str {
        match self {
            SecurityPolicy::None => NONE_URI,
            SecurityPolicy::Basic128Rsa15 => BASIC128RSA15_URI,
            SecurityPolicy::Basic256 => BASIC256_URI,
            SecurityPolicy::Basic256Sha256 => BASIC256SHA256_URI,
            SecurityPolicy::Aes128Sha256RsaOaep => AES128SHA256RSAOAEP_URI,
            SecurityPolicy::Aes256Sha256RsaPss => AES256SHA256RSAPSS_URI,
            SecurityPolicy::Unknown => "",
        }
    }

    /// `true` if this policy is implemented and usable for secure communication.
    pub fn is_supported(&self) -> bool {
        !matches!(self, SecurityPolicy::Unknown)
    }

    /// Length, in bytes, of the nonce exchanged during `OpenSecureChannel`.
    pub fn secure_channel_nonce_length(&self) -> usize {
        match self {
            SecurityPolicy::None | SecurityPolicy::Unknown => 0,
            SecurityPolicy::Basic128Rsa15 | SecurityPolicy::Aes128Sha256RsaOaep => 16,
            SecurityPolicy::Basic256
            | SecurityPolicy::Basic256Sha256
            | SecurityPolicy::Aes256Sha256RsaPss => 32,
        }
    }

    /// Size, in bytes, of the symmetric signature appended to each chunk.
    pub fn symmetric_signature_size(&self) -> usize {
        match self {
            SecurityPolicy::None | SecurityPolicy::Unknown => 0,
            SecurityPolicy::Basic128Rsa15 | SecurityPolicy::Basic256 => 20,
            SecurityPolicy::Basic256Sha256
            | SecurityPolicy::Aes128Sha256RsaOaep
            | SecurityPolicy::Aes256Sha256RsaPss => 32,
        }
    }

    /// Plaintext block size used when computing symmetric padding, in bytes.
    pub fn plain_block_size(&self) -> usize {
        match self {
            SecurityPolicy::None | SecurityPolicy::Unknown => 0,
            _ => 16,
        }
    }

    /// The RSA padding scheme asymmetric operations use under this policy.
    pub fn asymmetric_encryption_padding(&self) -> RsaPadding {
        match self {
            SecurityPolicy::Basic128Rsa15 => RsaPadding::Pkcs1V15,
            SecurityPolicy::Basic256 | SecurityPolicy::Basic256Sha256 => RsaPadding::OaepSha1,
            SecurityPolicy::Aes128Sha256RsaOaep | SecurityPolicy::Aes256Sha256RsaPss => {
                RsaPadding::OaepSha256
            }
            SecurityPolicy::None | SecurityPolicy::Unknown => RsaPadding::Pkcs1V15,
        }
    }

    fn derived_signature_key_length(&self) -> usize {
        match self {
            SecurityPolicy::Basic128Rsa15 | SecurityPolicy::Basic256 => 160 / 8,
            SecurityPolicy::Basic256Sha256
            | SecurityPolicy::Aes128Sha256RsaOaep
            | SecurityPolicy::Aes256Sha256RsaPss => 256 / 8,
            SecurityPolicy::None | SecurityPolicy::Unknown => 0,
        }
    }

    fn encrypting_key_length(&self) -> usize {
        match self {
            SecurityPolicy::Basic128Rsa15 | SecurityPolicy::Aes128Sha256RsaOaep => 16,
            SecurityPolicy::Basic256
            | SecurityPolicy::Basic256Sha256
            | SecurityPolicy::Aes256Sha256RsaPss => 32,
            SecurityPolicy::None | SecurityPolicy::Unknown => 0,
        }
    }

    fn encrypting_block_size(&self) -> usize {
        match self {
            SecurityPolicy::None | SecurityPolicy::Unknown => 0,
            _ => 16,
        }
    }

    fn uses_sha256_prf(&self) -> bool {
        !matches!(self, SecurityPolicy::Basic128Rsa15 | SecurityPolicy::Basic256)
    }

    /// Part 6, 6.7.5 pseudo-random function (P_SHA1 / P_SHA256 per RFC 5246 5),
    /// used to derive the client/server signing key, encrypting key and
    /// initialization vector from a pair of nonces.
    fn prf(&self, secret: &[u8], seed: &[u8], length: usize, offset: usize) -> Vec<u8> {
        if length == 0 {
            return Vec::new();
        }
        let needed = offset + length;
        let mut result = Vec::with_capacity(needed + 32);
        let mut a = seed.to_vec();
        if self.uses_sha256_prf() {
            type HmacSha256 = Hmac<Sha256>;
            while result.len() < needed {
                let mut mac =
                    HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
                mac.update(&a);
                a = mac.finalize_reset().into_bytes().to_vec();

                let mut mac =
                    HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
                mac.update(&a);
                mac.update(seed);
                result.extend_from_slice(&mac.finalize().into_bytes());
            }
        } else {
            type HmacSha1 = Hmac<Sha1>;
            while result.len() < needed {
                let mut mac =
                    HmacSha1::new_from_slice(secret).expect("HMAC accepts keys of any length");
                mac.update(&a);
                a = mac.finalize_reset().into_bytes().to_vec();

                let mut mac =
                    HmacSha1::new_from_slice(secret).expect("HMAC accepts keys of any length");
                mac.update(&a);
                mac.update(seed);
                result.extend_from_slice(&mac.finalize().into_bytes());
            }
        }
        result[offset..needed].to_vec()
    }

    /// Derive the (signing key, encrypting key, initialization vector) triple used
    /// to secure messages in one direction of a secure channel, per Part 6 Table 33.
    pub fn make_secure_channel_keys(&self, secret: &[u8], seed: &[u8]) -> (Vec<u8>, AesKey, Vec<u8>) {
        let signing_key_length = self.derived_signature_key_length();
        let encrypting_key_length = self.encrypting_key_length();
        let encrypting_block_size = self.encrypting_block_size();

        let signing_key = self.prf(secret, seed, signing_key_length, 0);
        let encrypting_key = self.prf(secret, seed, encrypting_key_length, signing_key_length);
        let iv = self.prf(
            secret,
            seed,
            encrypting_block_size,
            signing_key_length + encrypting_key_length,
        );

        (signing_key, AesKey::new(*self, &encrypting_key), iv)
    }

    /// Sign `data` asymmetrically with `key`, writing the signature into `signature`.
    pub fn asymmetric_sign(
        &self,
        key: &PrivateKey,
        data: &[u8],
        signature: &mut [u8],
    ) -> Result<(), StatusCode> {
        let sig = if self.uses_sha256_prf() {
            SigningKey::<Sha256>::new(key.inner().clone())
                .try_sign(data)
                .map_err(|_| StatusCode::BadSecurityChecksFailed)?
                .to_vec()
        } else {
            SigningKey::<Sha1>::new(key.inner().clone())
                .try_sign(data)
                .map_err(|_| StatusCode::BadSecurityChecksFailed)?
                .to_vec()
        };
        if sig.len() != signature.len() {
            return Err(StatusCode::BadUnexpectedError);
        }
        signature.copy_from_slice(&sig);
        Ok(())
    }

    /// Verify an asymmetric signature produced by the peer's private key.
    ///
    /// `their_key` is accepted for parity with the forensic decrypt path but is not
    /// needed to verify a signature, which only requires the public key.
    pub fn asymmetric_verify_signature(
        &self,
        key: &PublicKey,
        data: &[u8],
        signature: &[u8],
        _their_key: Option<PrivateKey>,
    ) -> Result<(), Error> {
        let result = if self.uses_sha256_prf() {
            let verifying_key = VerifyingKey::<Sha256>::new(key.inner().clone());
            let sig = Signature::try_from(signature).map_err(|_| {
                Error::new(StatusCode::BadSecurityChecksFailed, "Invalid signature encoding")
            })?;
            verifying_key.verify(data, &sig)
        } else {
            let verifying_key = VerifyingKey::<Sha1>::new(key.inner().clone());
            let sig = Signature::try_from(signature).map_err(|_| {
                Error::new(StatusCode::BadSecurityChecksFailed, "Invalid signature encoding")
            })?;
            verifying_key.verify(data, &sig)
        };
        result.map_err(|_| {
            Error::new(
                StatusCode::BadSecurityChecksFailed,
                "Signature verification failed",
            )
        })
    }

    /// Encrypt `src` asymmetrically with `key`, writing into `dst`. Returns the
    /// number of bytes written.
    pub fn asymmetric_encrypt(
        &self,
        key: &PublicKey,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<usize, StatusCode> {
        let mut rng = OsRng;
        let padding = self.asymmetric_encryption_padding();
        let block_size = key.plain_text_block_size(padding).max(1);
        let key_size = key.size();
        let mut written = 0;
        for chunk in src.chunks(block_size) {
            let out = match padding {
                RsaPadding::Pkcs1V15 => key.inner().encrypt(&mut rng, Pkcs1v15Encrypt, chunk),
                RsaPadding::OaepSha1 => key.inner().encrypt(&mut rng, Oaep::new::<Sha1>(), chunk),
                RsaPadding::OaepSha256 => key.inner().encrypt(&mut rng, Oaep::new::<Sha256>(), chunk),
            }
            .map_err(|_| StatusCode::BadEncodingLimitsExceeded)?;
            dst[written..written + key_size].copy_from_slice(&out);
            written += key_size;
        }
        Ok(written)
    }

    /// Decrypt `src` asymmetrically with `key`, writing into `dst`. Returns the
    /// number of bytes written.
    pub fn asymmetric_decrypt(
        &self,
        key: &PrivateKey,
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<usize, Error> {
        let padding = self.asymmetric_encryption_padding();
        let key_size = key.size().max(1);
        let mut written = 0;
        for chunk in src.chunks(key_size) {
            let out = match padding {
                RsaPadding::Pkcs1V15 => key.inner().decrypt(Pkcs1v15Encrypt, chunk),
                RsaPadding::OaepSha1 => key.inner().decrypt(Oaep::new::<Sha1>(), chunk),
                RsaPadding::OaepSha256 => key.inner().decrypt(Oaep::new::<Sha256>(), chunk),
            }
            .map_err(|e| Error::new(StatusCode::BadSecurityChecksFailed, e.to_string()))?;
            dst[written..written + out.len()].copy_from_slice(&out);
            written += out.len();
        }
        Ok(written)
    }

    fn symmetric_mac(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, StatusCode> {
        if self.uses_sha256_prf() {
            let mut mac =
                Hmac::<Sha256>::new_from_slice(key).map_err(|_| StatusCode::BadUnexpectedError)?;
            mac.update(data);
            Ok(mac.finalize().into_bytes().to_vec())
        } else {
            let mut mac =
                Hmac::<Sha1>::new_from_slice(key).map_err(|_| StatusCode::BadUnexpectedError)?;
            mac.update(data);
            Ok(mac.finalize().into_bytes().to_vec())
        }
    }

    /// Sign `data` symmetrically (HMAC) with `key`, writing the result into `signature`.
    pub fn symmetric_sign(
        &self,
        key: &[u8],
        data: &[u8],
        signature: &mut [u8],
    ) -> Result<(), StatusCode> {
        let mac = self.symmetric_mac(key, data)?;
        if mac.len() != signature.len() {
            return Err(StatusCode::BadUnexpectedError);
        }
        signature.copy_from_slice(&mac);
        Ok(())
    }

    /// Verify a symmetric (HMAC) signature.
    pub fn symmetric_verify_signature(
        &self,
        key: &[u8],
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), Error> {
        let mac = self
            .symmetric_mac(key, data)
            .map_err(|e| Error::new(e, "Failed to compute HMAC"))?;
        if mac == signature {
            Ok(())
        } else {
            Err(Error::new(
                StatusCode::BadSecurityChecksFailed,
                "Symmetric signature mismatch",
            ))
        }
    }

    /// Encrypt `src` symmetrically with `key`/`iv`, writing into `dst`.
    pub fn symmetric_encrypt(
        &self,
        key: &AesKey,
        iv: &[u8],
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<usize, StatusCode> {
        key.encrypt(src, iv, dst).map_err(Into::into)
    }

    /// Decrypt `src` symmetrically with `key`/`iv`, writing into `dst`.
    pub fn symmetric_decrypt(
        &self,
        key: &AesKey,
        iv: &[u8],
        src: &[u8],
        dst: &mut [u8],
    ) -> Result<usize, Error> {
        key.decrypt(src, iv, dst)
    }
}
