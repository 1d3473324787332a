//! Secure channel lifecycle: connecting, issuing and renewing the security token, and
//! sending requests over whatever transport is currently active.

use std::{sync::Arc, time::Duration};

use arc_swap::{ArcSwap, ArcSwapOption};
use log::debug;
use uac_core::{
    comms::secure_channel::{Role, SecureChannel},
    sync::RwLock,
    trace_read_lock, trace_write_lock, RequestMessage, ResponseMessage,
};
use uac_crypto::{CertificateStore, SecurityPolicy};
use uac_types::{
    ByteString, CloseSecureChannelRequest, ContextOwned, NodeId, SecurityTokenRequestType,
    StatusCode,
};

use crate::{retry::SessionRetryPolicy, session::SessionInfo};

use super::{
    connect::{Connector, Transport},
    core::OutgoingMessage,
    state::{Request, RequestSend, SecureChannelState},
    tcp::{TcpTransport, TransportConfiguration},
    TransportPollResult,
};

/// Maximum number of outgoing messages that can be queued for a transport before
/// `send` starts to back up. Arbitrary, just large enough to never be the bottleneck.
const MAX_INFLIGHT_MESSAGES: usize = 1_000_000;

/// Owns a secure channel's state and drives connecting, issuing/renewing the security
/// token and sending requests over whatever transport is currently active.
pub struct AsyncSecureChannel {
    session_info: SessionInfo,
    session_retry_policy: SessionRetryPolicy,
    pub(crate) secure_channel: Arc<RwLock<SecureChannel>>,
    certificate_store: Arc<RwLock<CertificateStore>>,
    transport_config: TransportConfiguration,
    state: SecureChannelState,
    issue_channel_lock: tokio::sync::Mutex<()>,
    connector: Box<dyn Connector>,
    channel_lifetime: u32,
    request_send: ArcSwapOption<RequestSend>,
}

/// A connected channel's event loop. Call [`SecureChannelEventLoop::poll`] in a loop to
/// drive the underlying transport.
pub struct SecureChannelEventLoop {
    transport: TcpTransport,
}

impl SecureChannelEventLoop {
    /// Drive the transport forward by one step.
    pub async fn poll(&mut self) -> TransportPollResult {
        self.transport.poll().await
    }
}

impl AsyncSecureChannel {
    /// Create a new, not-yet-connected secure channel.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        certificate_store: Arc<RwLock<CertificateStore>>,
        session_info: SessionInfo,
        session_retry_policy: SessionRetryPolicy,
        ignore_clock_skew: bool,
        auth_token: Arc<ArcSwap<NodeId>>,
        transport_config: TransportConfiguration,
        connector: Box<dyn Connector>,
        channel_lifetime: u32,
        encoding_context: Arc<RwLock<ContextOwned>>,
    ) -> Self {
        let secure_channel = Arc::new(RwLock::new(SecureChannel::new(
            certificate_store.clone(),
            Role::Client,
            encoding_context,
        )));
        let state = SecureChannelState::new(ignore_clock_skew, secure_channel.clone(), auth_token);
        Self {
            session_info,
            session_retry_policy,
            secure_channel,
            certificate_store,
            transport_config,
            state,
            issue_channel_lock: tokio::sync::Mutex::new(()),
            connector,
            channel_lifetime,
            request_send: ArcSwapOption::empty(),
        }
    }

    /// Allocate a fresh request header with the channel's current authentication token.
    pub fn make_request_header(&self, timeout: Duration) -> uac_types::RequestHeader {
        self.state.make_request_header(timeout)
    }

    /// Allocate the next request handle.
    pub fn request_handle(&self) -> uac_types::IntegerId {
        self.state.request_handle()
    }

    /// The nonce this client generated for the currently active secure channel.
    pub fn client_nonce(&self) -> ByteString {
        trace_read_lock!(self.secure_channel).local_nonce_as_byte_string()
    }

    /// Record the server nonce and certificate returned by a just-created session.
    pub fn update_from_created_session(
        &self,
        nonce: &ByteString,
        certificate: &ByteString,
    ) -> Result<(), StatusCode> {
        let mut secure_channel = trace_write_lock!(self.secure_channel);
        secure_channel.set_remote_nonce_from_byte_string(nonce)?;
        secure_channel.set_remote_cert_from_byte_string(certificate)?;
        Ok(())
    }

    /// The security policy currently negotiated for this channel.
    pub fn security_policy(&self) -> SecurityPolicy {
        trace_read_lock!(self.secure_channel).security_policy()
    }

    /// Send `request` over the channel, renewing the secure channel's security token first
    /// if it is close to expiring.
    pub async fn send(
        &self,
        request: impl Into<RequestMessage>,
        timeout: Duration,
    ) -> Result<ResponseMessage, StatusCode> {
        let send = self
            .request_send
            .load_full()
            .ok_or(StatusCode::BadNotConnected)?;

        if trace_read_lock!(self.secure_channel).should_renew_security_token() {
            let _guard = self.issue_channel_lock.lock().await;
            if trace_read_lock!(self.secure_channel).should_renew_security_token() {
                let renew = self.state.begin_issue_or_renew_secure_channel(
                    SecurityTokenRequestType::Renew,
                    self.channel_lifetime,
                    Duration::from_secs(30),
                    (*send).clone(),
                );
                let resp = renew.send().await?;
                self.state.end_issue_or_renew_secure_channel(resp)?;
            }
        }

        Request::new(request, (*send).clone(), timeout).send().await
    }

    /// Connect to the configured endpoint, retrying with exponential backoff until a
    /// connection succeeds or the retry policy gives up.
    pub async fn connect(&self) -> Result<SecureChannelEventLoop, StatusCode> {
        self.request_send.store(None);
        let mut backoff = self.session_retry_policy.new_backoff();
        loop {
            match self.connect_no_retry().await {
                Ok(event_loop) => return Ok(event_loop),
                Err(e) => {
                    let Some(delay) = backoff.next() else {
                        return Err(e);
                    };
                    debug!("Failed to connect: {e}, retrying in {delay:?}");
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Connect once, without retrying on failure.
    async fn connect_no_retry(&self) -> Result<SecureChannelEventLoop, StatusCode> {
        {
            let mut secure_channel = trace_write_lock!(self.secure_channel);
            secure_channel.clear_security_token();
        }

        let (mut transport, send) = self.create_transport().await?;

        let issue = self.state.begin_issue_or_renew_secure_channel(
            SecurityTokenRequestType::Issue,
            self.channel_lifetime,
            Duration::from_secs(30),
            send.clone(),
        );
        let request_fut = issue.send();
        tokio::pin!(request_fut);

        let resp = loop {
            tokio::select! {
                resp = &mut request_fut => break resp?,
                poll = transport.poll() => {
                    if let TransportPollResult::Closed(e) = poll {
                        return Err(e);
                    }
                }
            }
        };

        self.request_send.store(Some(Arc::new(send)));
        self.state.end_issue_or_renew_secure_channel(resp)?;

        Ok(SecureChannelEventLoop { transport })
    }

    async fn create_transport(&self) -> Result<(TcpTransport, RequestSend), StatusCode> {
        let endpoint = &self.session_info.endpoint;
        let security_policy = SecurityPolicy::from_uri(endpoint.security_policy_uri.as_ref());
        if security_policy == SecurityPolicy::Unknown {
            return Err(StatusCode::BadSecurityPolicyRejected);
        }

        {
            let mut secure_channel = trace_write_lock!(self.secure_channel);
            secure_channel.set_security_policy(security_policy);
            secure_channel.set_security_mode(endpoint.security_mode);
            if !endpoint.server_certificate.is_null() {
                secure_channel.set_remote_cert_from_byte_string(&endpoint.server_certificate)?;
            }
        }

        let (tx, rx) = tokio::sync::mpsc::channel(MAX_INFLIGHT_MESSAGES);
        let transport = self
            .connector
            .connect(
                self.secure_channel.clone(),
                rx,
                self.transport_config.clone(),
                endpoint.endpoint_url.as_ref(),
            )
            .await?;

        Ok((transport, RequestSend::new(tx)))
    }

    /// Politely tell the server the channel is being closed, without waiting for or
    /// propagating any failure.
    pub async fn close_channel(&self) {
        let Some(send) = self.request_send.load_full() else {
            return;
        };
        let request = CloseSecureChannelRequest {
            request_header: self.make_request_header(Duration::from_secs(60)),
        };
        if let Err(e) = Request::new(request, (*send).clone(), Duration::from_secs(60))
            .send_no_response()
            .await
        {
            debug!("Failed to send CloseSecureChannelRequest: {e}");
        }
    }
}
