// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! On-disk certificate store: locates this application's instance certificate
//! and private key, and holds the trust list used to validate peer certificates.
//!
//! Mirrors the directory layout described in OPC UA Part 12: `own/`, `private/`,
//! `trusted/certs/` and `rejected/certs/`, holding DER certificates and a PEM
//! private key.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};
use uac_types::{status_code::StatusCode, ApplicationDescription, Error};

use crate::{
    pkey::{KeySize, PrivateKey},
    x509::X509,
};

/// Certificates generated by [`CertificateStore::create_and_store_certificate`] are
/// valid for five years.
const GENERATED_CERT_VALIDITY_DAYS: u32 = 5 * 365;

/// Manages the application instance certificate, private key and trust list
/// used to secure a client's connections.
#[derive(Debug, Clone)]
pub struct CertificateStore {
    pki_dir: PathBuf,
    create_certificate_if_missing: bool,
    certificate_path: Option<PathBuf>,
    private_key_path: Option<PathBuf>,
    skip_verify_certs: bool,
    trust_unknown_certs: bool,
    application_description: Option<ApplicationDescription>,
}

impl CertificateStore {
    /// Create a store rooted at `pki_dir`. Call [`Self::ensure_directories`] before
    /// first use.
    pub fn new(pki_dir: impl Into<PathBuf>) -> Self {
        Self {
            pki_dir: pki_dir.into(),
            create_certificate_if_missing: false,
            certificate_path: None,
            private_key_path: None,
            skip_verify_certs: false,
            trust_unknown_certs: false,
            application_description: None,
        }
    }

    /// Create a store rooted at `pki_dir`, reading the instance certificate and private
    /// key from `certificate_path`/`private_key_path` if given, instead of the default
    /// `own/cert.der`/`private/private.pem` locations, optionally generating a
    /// self-signed pair from `application_description` if nothing is found.
    ///
    /// Returns the store along with whatever certificate and key were actually found, so
    /// the caller can warn if either is missing.
    pub fn new_with_x509_data(
        pki_dir: impl Into<PathBuf>,
        create_certificate_if_missing: bool,
        certificate_path: Option<&Path>,
        private_key_path: Option<&Path>,
        application_description: Option<ApplicationDescription>,
    ) -> (Self, Option<X509>, Option<PrivateKey>) {
        let mut store = Self::new(pki_dir)
            .with_create_certificate_if_missing(create_certificate_if_missing);
        store.certificate_path = certificate_path.map(Path::to_path_buf);
        store.private_key_path = private_key_path.map(Path::to_path_buf);
        store.application_description = application_description;

        if let Err(e) = store.ensure_directories() {
            warn!("Failed to create PKI directories: {e}");
        }

        let cert = store.read_own_cert().ok();
        let pkey = store.read_own_pkey().ok();

        (store, cert, pkey)
    }

    /// Enable generating a self-signed certificate and key pair the first time
    /// [`Self::read_own_cert`]/[`Self::read_own_pkey`] find nothing on disk.
    pub fn with_create_certificate_if_missing(mut self, create: bool) -> Self {
        self.create_certificate_if_missing = create;
        self
    }

    /// Skip validating peer certificates entirely. For testing only.
    pub fn set_skip_verify_certs(&mut self, skip: bool) {
        self.skip_verify_certs = skip;
    }

    /// Automatically trust any certificate not already found in the trust list.
    pub fn set_trust_unknown_certs(&mut self, trust: bool) {
        self.trust_unknown_certs = trust;
    }

    fn own_dir(&self) -> PathBuf {
        self.pki_dir.join("own")
    }

    fn private_dir(&self) -> PathBuf {
        self.pki_dir.join("private")
    }

    fn trusted_dir(&self) -> PathBuf {
        self.pki_dir.join("trusted").join("certs")
    }

    fn rejected_dir(&self) -> PathBuf {
        self.pki_dir.join("rejected").join("certs")
    }

    fn cert_path(&self) -> PathBuf {
        self.certificate_path
            .clone()
            .unwrap_or_else(|| self.own_dir().join("cert.der"))
    }

    fn key_path(&self) -> PathBuf {
        self.private_key_path
            .clone()
            .unwrap_or_else(|| self.private_dir().join("private.pem"))
    }

    /// Ensure all of the store's subdirectories exist.
    pub fn ensure_directories(&self) -> Result<(), Error> {
        for dir in [
            self.own_dir(),
            self.private_dir(),
            self.trusted_dir(),
            self.rejected_dir(),
        ] {
            fs::create_dir_all(&dir).map_err(|e| {
                Error::new(
                    StatusCode::BadCertificateInvalid,
                    format!("Failed to create {}: {e}", dir.display()),
                )
            })?;
        }
        Ok(())
    }

    /// Read this application's instance certificate, generating one if configured
    /// to do so and none is present on disk.
    pub fn read_own_cert(&self) -> Result<X509, Error> {
        let path = self.cert_path();
        if path.exists() {
            let der = fs::read(&path).map_err(|e| {
                Error::new(
                    StatusCode::BadCertificateInvalid,
                    format!("Failed to read {}: {e}", path.display()),
                )
            })?;
            X509::from_der(der)
        } else if self.create_certificate_if_missing {
            info!(
                "No application instance certificate found at {}, generating one",
                path.display()
            );
            self.create_and_store_certificate()
        } else {
            Err(Error::new(
                StatusCode::BadCertificateInvalid,
                format!("No application instance certificate found at {}", path.display()),
            ))
        }
    }

    /// Read this application's private key, generating one if configured to do
    /// so and none is present on disk.
    pub fn read_own_pkey(&self) -> Result<PrivateKey, Error> {
        let path = self.key_path();
        if path.exists() {
            let pem = fs::read_to_string(&path).map_err(|e| {
                Error::new(
                    StatusCode::BadCertificateInvalid,
                    format!("Failed to read {}: {e}", path.display()),
                )
            })?;
            PrivateKey::from_pem(&pem)
        } else if self.create_certificate_if_missing {
            self.create_and_store_certificate()?;
            self.read_own_pkey()
        } else {
            Err(Error::new(
                StatusCode::BadCertificateInvalid,
                format!("No private key found at {}", path.display()),
            ))
        }
    }

    fn create_and_store_certificate(&self) -> Result<X509, Error> {
        let application_name = self
            .application_description
            .as_ref()
            .and_then(|d| d.application_name.text.value().clone())
            .unwrap_or_else(|| "UAC Client".to_string());
        let application_uri = self
            .application_description
            .as_ref()
            .and_then(|d| d.application_uri.value().clone())
            .unwrap_or_else(|| "urn:uac:client".to_string());
        let host_name = gethostname::gethostname()
            .into_string()
            .unwrap_or_else(|_| "localhost".to_string());

        let key = PrivateKey::generate(KeySize::Bits2048)?;
        let cert = X509::self_signed(
            &key,
            &application_name,
            &host_name,
            &application_uri,
            GENERATED_CERT_VALIDITY_DAYS,
        )?;

        fs::create_dir_all(self.own_dir()).map_err(|e| {
            Error::new(StatusCode::BadCertificateInvalid, e.to_string())
        })?;
        fs::create_dir_all(self.private_dir()).map_err(|e| {
            Error::new(StatusCode::BadCertificateInvalid, e.to_string())
        })?;
        fs::write(self.cert_path(), cert.der()).map_err(|e| {
            Error::new(
                StatusCode::BadCertificateInvalid,
                format!("Failed to write {}: {e}", self.cert_path().display()),
            )
        })?;
        fs::write(self.key_path(), key.to_pem()?).map_err(|e| {
            Error::new(
                StatusCode::BadCertificateInvalid,
                format!("Failed to write {}: {e}", self.key_path().display()),
            )
        })?;

        info!(
            "Generated self-signed certificate for {application_name} at {}",
            self.cert_path().display()
        );

        Ok(cert)
    }

    /// Check whether `cert`'s thumbprint is present in the trusted certificates directory.
    pub fn is_trusted(&self, cert: &X509) -> bool {
        let thumbprint = cert.thumbprint();
        let Ok(entries) = fs::read_dir(self.trusted_dir()) else {
            return false;
        };
        for entry in entries.flatten() {
            let Ok(der) = fs::read(entry.path()) else {
                continue;
            };
            if let Ok(trusted) = X509::from_der(der) {
                if trusted.thumbprint() == thumbprint {
                    return true;
                }
            }
        }
        false
    }

    /// Store a certificate that failed validation in the rejected directory, so an
    /// operator can review it and move it to the trusted directory if appropriate.
    pub fn store_rejected_cert(&self, cert: &X509) -> Result<PathBuf, Error> {
        let dir = self.rejected_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| Error::new(StatusCode::BadCertificateInvalid, e.to_string()))?;
        let name: String = cert
            .thumbprint()
            .value()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        let path = dir.join(format!("{name}.der"));
        fs::write(&path, cert.der()).map_err(|e| {
            Error::new(
                StatusCode::BadCertificateInvalid,
                format!("Failed to write {}: {e}", path.display()),
            )
        })?;
        warn!("Stored rejected certificate at {}", path.display());
        Ok(path)
    }
}
