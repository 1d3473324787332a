//! Channel-level request/response correlation and secure-channel issuance/renewal.

use std::{
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
    time::Duration,
};

use arc_swap::ArcSwap;
use log::{debug, error};
use tokio::sync::oneshot;
use uac_core::{
    comms::secure_channel::SecureChannel, sync::RwLock, trace_write_lock, RequestMessage,
    ResponseMessage,
};
use uac_types::{
    IntegerId, NodeId, OpenSecureChannelRequest, OpenSecureChannelResponse, RequestHeader,
    SecurityTokenRequestType, StatusCode,
};

use super::OutgoingMessage;

/// Handle used to submit a request onto a running transport and await its response.
#[derive(Clone)]
pub(crate) struct RequestSend {
    sender: tokio::sync::mpsc::Sender<OutgoingMessage>,
}

impl RequestSend {
    pub(crate) fn new(sender: tokio::sync::mpsc::Sender<OutgoingMessage>) -> Self {
        Self { sender }
    }
}

/// A single in-flight request, paired with the channel used to deliver its response.
pub(crate) struct Request {
    message: RequestMessage,
    send: RequestSend,
    timeout: Duration,
}

impl Request {
    pub(crate) fn new(
        message: impl Into<RequestMessage>,
        send: RequestSend,
        timeout: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            send,
            timeout,
        }
    }

    /// Submit the request and wait for a matching response.
    pub(crate) async fn send(self) -> Result<ResponseMessage, StatusCode> {
        let (tx, rx) = oneshot::channel();
        self.send
            .sender
            .send(OutgoingMessage {
                message: self.message,
                response: Some(tx),
            })
            .await
            .map_err(|_| StatusCode::BadConnectionClosed)?;

        match tokio::time::timeout(self.timeout, rx).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(_)) => Err(StatusCode::BadConnectionClosed),
            Err(_) => Err(StatusCode::BadTimeout),
        }
    }

    /// Submit the request without waiting for a response (used on shutdown, where the
    /// transport may be torn down before a response can arrive).
    pub(crate) async fn send_no_response(self) -> Result<(), StatusCode> {
        self.send
            .sender
            .send(OutgoingMessage {
                message: self.message,
                response: None,
            })
            .await
            .map_err(|_| StatusCode::BadConnectionClosed)
    }
}

/// Tracks request-handle allocation and drives OPN issuance/renewal for a secure channel.
pub(crate) struct SecureChannelState {
    ignore_clock_skew: bool,
    secure_channel: Arc<RwLock<SecureChannel>>,
    auth_token: Arc<ArcSwap<NodeId>>,
    request_handle: AtomicU32,
}

impl SecureChannelState {
    pub(crate) fn new(
        ignore_clock_skew: bool,
        secure_channel: Arc<RwLock<SecureChannel>>,
        auth_token: Arc<ArcSwap<NodeId>>,
    ) -> Self {
        Self {
            ignore_clock_skew,
            secure_channel,
            auth_token,
            request_handle: AtomicU32::new(1),
        }
    }

    /// Allocate the next request handle, wrapping at `u32::MAX`.
    pub(crate) fn request_handle(&self) -> IntegerId {
        self.request_handle.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn make_request_header(&self, timeout: Duration) -> RequestHeader {
        RequestHeader {
            authentication_token: (**self.auth_token.load()).clone(),
            timestamp: uac_types::DateTime::now(),
            request_handle: self.request_handle(),
            return_diagnostics: 0,
            audit_entry_id: Default::default(),
            timeout_hint: timeout.as_millis() as u32,
            additional_header: Default::default(),
        }
    }

    /// Build the `OpenSecureChannelRequest` used to issue or renew the channel's security token.
    pub(crate) fn begin_issue_or_renew_secure_channel(
        &self,
        request_type: SecurityTokenRequestType,
        requested_lifetime: u32,
        timeout: Duration,
        send: RequestSend,
    ) -> Request {
        let (security_mode, client_nonce) = {
            let secure_channel = trace_write_lock!(self.secure_channel);
            (
                secure_channel.security_mode(),
                secure_channel.local_nonce_as_byte_string(),
            )
        };

        let request = OpenSecureChannelRequest {
            request_header: self.make_request_header(timeout),
            client_protocol_version: 0,
            request_type,
            security_mode,
            client_nonce,
            requested_lifetime,
        };

        Request::new(request, send, timeout)
    }

    /// Apply the server's response to a pending OPN request to the secure channel.
    pub(crate) fn end_issue_or_renew_secure_channel(
        &self,
        response: ResponseMessage,
    ) -> Result<(), StatusCode> {
        let ResponseMessage::OpenSecureChannel(response) = response else {
            error!("Received an unexpected response to OpenSecureChannel");
            return Err(StatusCode::BadUnknownResponse);
        };

        if response.response_header.service_result.is_bad() {
            return Err(response.response_header.service_result);
        }

        let OpenSecureChannelResponse {
            security_token,
            server_nonce,
            ..
        } = response;

        if !self.ignore_clock_skew {
            let server_time = response.response_header.timestamp;
            let now = uac_types::DateTime::now();
            let skew = now.duration_since(server_time);
            if skew.num_seconds().unsigned_abs() > 60 {
                debug!(
                    "Clock skew between client and server is large: {} seconds",
                    skew.num_seconds()
                );
            }
        }

        let mut secure_channel = trace_write_lock!(self.secure_channel);
        secure_channel.set_security_token(security_token);
        secure_channel.set_remote_nonce_from_byte_string(&server_nonce)?;
        secure_channel.create_random_nonce();
        secure_channel.derive_keys();

        Ok(())
    }
}
