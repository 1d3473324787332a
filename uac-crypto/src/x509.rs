// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! X.509 certificate wrapper built on `x509-cert`, used both as the wire
//! representation exchanged in security headers and to extract the RSA
//! public key used for asymmetric operations.

use std::time::Duration as StdDuration;

use chrono::{DateTime as ChronoDateTime, Utc};
use rand::RngCore;
use rsa::{pkcs1v15::SigningKey, pkcs8::EncodePublicKey};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use uac_types::{byte_string::ByteString, status_code::StatusCode, Error};
use x509_cert::{
    builder::{Builder, CertificateBuilder, Profile},
    der::{asn1::Ia5String, Decode, Encode},
    ext::pkix::{name::GeneralName, SubjectAltName},
    name::Name,
    serial_number::SerialNumber,
    spki::SubjectPublicKeyInfoOwned,
    time::Validity,
    Certificate,
};

use crate::{
    pkey::{PrivateKey, PublicKey},
    thumbprint::Thumbprint,
};

/// A DER-encoded X.509 certificate, as exchanged in OPC UA security headers.
#[derive(Clone)]
pub struct X509 {
    der: Vec<u8>,
}

impl std::fmt::Debug for X509 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("X509")
            .field("der_len", &self.der.len())
            .finish()
    }
}

impl PartialEq for X509 {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
    }
}

impl X509 {
    /// Wrap a DER-encoded certificate, validating that it parses.
    pub fn from_der(der: Vec<u8>) -> Result<Self, Error> {
        Certificate::from_der(&der)
            .map_err(|e| Error::new(StatusCode::BadCertificateInvalid, e.to_string()))?;
        Ok(Self { der })
    }

    /// Parse a certificate from the `ByteString` form used on the wire.
    pub fn from_byte_string(bytes: &ByteString) -> Result<Self, Error> {
        let der = bytes.value.clone().ok_or_else(|| {
            Error::new(
                StatusCode::BadCertificateInvalid,
                "Certificate byte string is null",
            )
        })?;
        Self::from_der(der)
    }

    /// The certificate as a `ByteString`, as transmitted in security headers.
    pub fn as_byte_string(&self) -> ByteString {
        ByteString::from(&self.der)
    }

    /// The raw DER encoding of the certificate.
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    fn parsed(&self) -> Result<Certificate, Error> {
        Certificate::from_der(&self.der)
            .map_err(|e| Error::new(StatusCode::BadCertificateInvalid, e.to_string()))
    }

    /// The SHA-1 thumbprint of the certificate, used to identify it in security headers.
    pub fn thumbprint(&self) -> Thumbprint {
        let mut hasher = Sha1::new();
        hasher.update(&self.der);
        Thumbprint::new(hasher.finalize().to_vec())
    }

    /// Extract the certificate's RSA public key.
    pub fn public_key(&self) -> Result<PublicKey, Error> {
        use rsa::pkcs8::DecodePublicKey;
        let cert = self.parsed()?;
        let spki_der = cert
            .tbs_certificate
            .subject_public_key_info
            .to_der()
            .map_err(|e| Error::new(StatusCode::BadCertificateInvalid, e.to_string()))?;
        rsa::RsaPublicKey::from_public_key_der(&spki_der)
            .map(PublicKey::from_rsa)
            .map_err(|e| Error::new(StatusCode::BadCertificateInvalid, e.to_string()))
    }

    /// `true` if `now` falls within the certificate's validity period.
    pub fn is_time_valid(&self, now: ChronoDateTime<Utc>) -> Result<bool, Error> {
        let cert = self.parsed()?;
        let validity = cert.tbs_certificate.validity;
        let to_chrono = |t: x509_cert::time::Time| -> ChronoDateTime<Utc> {
            let secs = t.to_unix_duration().as_secs() as i64;
            ChronoDateTime::from_timestamp(secs, 0).unwrap_or_else(|| {
                ChronoDateTime::from_timestamp(0, 0).expect("epoch is a valid timestamp")
            })
        };
        let not_before = to_chrono(validity.not_before);
        let not_after = to_chrono(validity.not_after);
        Ok(now >= not_before && now <= not_after)
    }

    /// Mint a self-signed application instance certificate for `key`, with subject
    /// `CN=<application_name>,DC=<host_name>` and `application_uri` carried as a
    /// `URI:` entry in the Subject Alternative Name extension (Part 6, 6.2.2).
    pub fn self_signed(
        key: &PrivateKey,
        application_name: &str,
        host_name: &str,
        application_uri: &str,
        validity_days: u32,
    ) -> Result<Self, Error> {
        let invalid = |e: impl std::fmt::Display| {
            Error::new(StatusCode::BadCertificateInvalid, e.to_string())
        };

        let subject_dn = format!(
            "CN={},DC={}",
            escape_dn_value(application_name),
            escape_dn_value(host_name)
        );
        let subject: Name = subject_dn.parse().map_err(invalid)?;

        let mut serial = [0u8; 16];
        rand::rngs::OsRng.try_fill_bytes(&mut serial).map_err(invalid)?;
        // Clear the top bit so the serial number is never interpreted as negative.
        serial[0] &= 0x7f;
        let serial_number = SerialNumber::new(&serial).map_err(invalid)?;

        let validity =
            Validity::from_now(StdDuration::from_secs(validity_days as u64 * 86_400))
                .map_err(invalid)?;

        let public_key_der = key
            .public_key()
            .inner()
            .to_public_key_der()
            .map_err(invalid)?;
        let public_key_info =
            SubjectPublicKeyInfoOwned::try_from(public_key_der.as_bytes()).map_err(invalid)?;

        let signer = SigningKey::<Sha256>::new(key.inner().clone());

        let mut builder = CertificateBuilder::new(
            Profile::Root,
            serial_number,
            validity,
            subject,
            public_key_info,
            &signer,
        )
        .map_err(invalid)?;

        let uri = Ia5String::new(application_uri).map_err(invalid)?;
        builder
            .add_extension(&SubjectAltName(vec![GeneralName::UniformResourceIdentifier(
                uri,
            )]))
            .map_err(invalid)?;

        let certificate = builder.build::<rsa::pkcs1v15::Signature>().map_err(invalid)?;
        let der = certificate.to_der().map_err(invalid)?;
        Ok(Self { der })
    }
}

/// Escapes the characters `RFC 4514` reserves in a distinguished name attribute value.
fn escape_dn_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, ',' | '=' | '+' | '<' | '>' | '#' | ';' | '\\' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
