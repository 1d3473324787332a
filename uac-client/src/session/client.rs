use std::sync::Arc;

use chrono::TimeDelta;
use log::{debug, error};
use tokio::{pin, select};

use crate::{
    transport::{
        tcp::{TcpConnector, TransportConfiguration},
        TransportPollResult,
    },
    AsyncSecureChannel, ClientConfig, IdentityToken,
};
use uac_core::{
    comms::url::{
        hostname_from_url, is_opc_ua_binary_url, is_valid_opc_ua_url, server_url_from_endpoint_url,
        url_matches_except_host, url_with_replaced_hostname,
    },
    config::Config,
    sync::RwLock,
    ResponseMessage,
};
use uac_crypto::{CertificateStore, SecurityPolicy};
use uac_types::{
    ApplicationDescription, ContextOwned, DecodingOptions, EndpointDescription,
    FindServersOnNetworkRequest, FindServersOnNetworkResponse, FindServersRequest,
    GetEndpointsRequest, MessageSecurityMode, NamespaceMap, RegisterServerRequest,
    RegisteredServer, StatusCode, UAString,
};

use super::{
    connection::SessionBuilder, process_service_result, process_unexpected_response, Session,
    SessionEventLoop, SessionInfo,
};

/// Wrapper around common data for generating sessions and performing requests with
/// one-shot connections.
pub struct Client {
    /// Client configuration.
    pub(super) config: ClientConfig,
    certificate_store: Arc<RwLock<CertificateStore>>,
}

impl Client {
    /// Create a new client from config.
    ///
    /// Note that this does not make any connection to the server.
    pub fn new(config: ClientConfig) -> Self {
        let application_description = if config.create_sample_keypair {
            Some(config.application_description())
        } else {
            None
        };

        let (mut certificate_store, client_certificate, client_pkey) =
            CertificateStore::new_with_x509_data(
                &config.pki_dir,
                false,
                config.certificate_path.as_deref(),
                config.private_key_path.as_deref(),
                application_description,
            );
        if client_certificate.is_none() || client_pkey.is_none() {
            error!(
                "Client is missing its application instance certificate and/or its private key. \
                 Encrypted endpoints will not function correctly."
            );
        }

        certificate_store.set_skip_verify_certs(!config.verify_server_certs);
        certificate_store.set_trust_unknown_certs(config.trust_server_certs);

        Self {
            config,
            certificate_store: Arc::new(RwLock::new(certificate_store)),
        }
    }

    /// Get a new session builder that can be used to build a session dynamically.
    pub fn session_builder(&self) -> SessionBuilder<'_, (), ()> {
        SessionBuilder::<'_, (), ()>::new(&self.config)
    }

    /// Connects to a named endpoint that you have defined in the [`ClientConfig`] and creates
    /// a [`Session`] for that endpoint. Note that `GetEndpoints` is first called on the server
    /// and it is expected to support the endpoint you intend to connect to.
    pub async fn connect_to_endpoint_id(
        &mut self,
        endpoint_id: impl Into<String>,
    ) -> Result<(Arc<Session>, SessionEventLoop), StatusCode> {
        Ok(self
            .session_builder()
            .with_endpoints(self.get_server_endpoints().await?)
            .connect_to_endpoint_id(endpoint_id)
            .map_err(|e| {
                error!("{}", e);
                StatusCode::BadConfigurationError
            })?
            .build(self.certificate_store.clone()))
    }

    /// Connects to an ad-hoc server endpoint description.
    ///
    /// Returns both a reference to the session and a [`SessionEventLoop`]. You must run and
    /// poll the event loop in order to actually establish a connection.
    pub async fn connect_to_matching_endpoint(
        &mut self,
        endpoint: impl Into<EndpointDescription>,
        user_identity_token: IdentityToken,
    ) -> Result<(Arc<Session>, SessionEventLoop), StatusCode> {
        let endpoint = endpoint.into();
        let server_url = endpoint.endpoint_url.as_ref();

        Ok(self
            .session_builder()
            .with_endpoints(self.get_server_endpoints_from_url(server_url).await?)
            .connect_to_matching_endpoint(endpoint)?
            .user_identity_token(user_identity_token)
            .build(self.certificate_store.clone()))
    }

    /// Connects to a server directly using the provided [`EndpointDescription`].
    ///
    /// This will not attempt to create a session on the server, that only happens once you
    /// start polling the session event loop.
    pub fn connect_to_endpoint_directly(
        &mut self,
        endpoint: impl Into<EndpointDescription>,
        identity_token: IdentityToken,
    ) -> Result<(Arc<Session>, SessionEventLoop), String> {
        Ok(self
            .session_builder()
            .connect_to_endpoint_directly(endpoint)?
            .user_identity_token(identity_token)
            .build(self.certificate_store.clone()))
    }

    /// Creates a new [`Session`] using the default endpoint specified in the config. If there
    /// is no default, or the endpoint does not exist, this returns an error.
    pub async fn connect_to_default_endpoint(
        &mut self,
    ) -> Result<(Arc<Session>, SessionEventLoop), String> {
        Ok(self
            .session_builder()
            .with_endpoints(
                self.get_server_endpoints()
                    .await
                    .map_err(|e| format!("Failed to fetch server endpoints: {e}"))?,
            )
            .connect_to_default_endpoint()?
            .build(self.certificate_store.clone()))
    }

    /// Create a secure channel for the provided [`SessionInfo`]. Used for one-shot discovery
    /// connections; once a session is created, [`Session`] manages its own channel.
    fn channel_from_session_info(
        &self,
        session_info: SessionInfo,
        channel_lifetime: u32,
    ) -> AsyncSecureChannel {
        AsyncSecureChannel::new(
            self.certificate_store.clone(),
            session_info,
            self.config.session_retry_policy(),
            self.config.performance.ignore_clock_skew,
            Arc::default(),
            TransportConfiguration {
                max_pending_incoming: 5,
                send_buffer_size: self.config.decoding_options.max_chunk_size,
                recv_buffer_size: self.config.decoding_options.max_incoming_chunk_size,
                max_message_size: self.config.decoding_options.max_message_size,
                max_chunk_count: self.config.decoding_options.max_chunk_count,
            },
            Box::new(TcpConnector),
            channel_lifetime,
            Arc::new(RwLock::new(ContextOwned::new_default(
                NamespaceMap::new(),
                self.decoding_options(),
            ))),
        )
    }

    /// Gets the [`ClientEndpoint`](crate::config::ClientEndpoint) for the default endpoint, as
    /// defined by the configuration. If there is no default endpoint, returns an error.
    pub fn default_endpoint(&self) -> Result<crate::config::ClientEndpoint, String> {
        let default_endpoint_id = self.config.default_endpoint.clone();
        if default_endpoint_id.is_empty() {
            Err("No default endpoint has been specified".to_string())
        } else if let Some(endpoint) = self.config.endpoints.get(&default_endpoint_id) {
            Ok(endpoint.clone())
        } else {
            Err(format!(
                "Cannot find default endpoint with id {}",
                default_endpoint_id
            ))
        }
    }

    /// Get the list of endpoints for the server at the configured default endpoint.
    pub async fn get_server_endpoints(&self) -> Result<Vec<EndpointDescription>, StatusCode> {
        if let Ok(default_endpoint) = self.default_endpoint() {
            if let Ok(server_url) = server_url_from_endpoint_url(&default_endpoint.url) {
                self.get_server_endpoints_from_url(server_url).await
            } else {
                error!(
                    "Cannot create a server url from the specified endpoint url {}",
                    default_endpoint.url
                );
                Err(StatusCode::BadUnexpectedError)
            }
        } else {
            error!("There is no default endpoint, so cannot get endpoints");
            Err(StatusCode::BadUnexpectedError)
        }
    }

    fn decoding_options(&self) -> DecodingOptions {
        let decoding_options = &self.config.decoding_options;
        DecodingOptions {
            max_chunk_count: decoding_options.max_chunk_count,
            max_message_size: decoding_options.max_message_size,
            max_string_length: decoding_options.max_string_length,
            max_byte_string_length: decoding_options.max_byte_string_length,
            max_array_length: decoding_options.max_array_length,
            client_offset: TimeDelta::zero(),
            ..Default::default()
        }
    }

    async fn get_server_endpoints_inner(
        &self,
        endpoint: &EndpointDescription,
        channel: &AsyncSecureChannel,
        locale_ids: Option<Vec<UAString>>,
        profile_uris: Option<Vec<UAString>>,
    ) -> Result<Vec<EndpointDescription>, StatusCode> {
        let request = GetEndpointsRequest {
            request_header: channel.make_request_header(self.config.request_timeout),
            endpoint_url: endpoint.endpoint_url.clone(),
            locale_ids,
            profile_uris,
        };
        let response = channel.send(request, self.config.request_timeout).await?;
        if let ResponseMessage::GetEndpoints(response) = response {
            process_service_result(&response.response_header)?;
            match response.endpoints {
                None => Ok(Vec::new()),
                Some(endpoints) => Ok(endpoints),
            }
        } else {
            Err(process_unexpected_response(response))
        }
    }

    /// Get the list of endpoints for the server at the given URL.
    pub async fn get_server_endpoints_from_url(
        &self,
        server_url: impl Into<String>,
    ) -> Result<Vec<EndpointDescription>, StatusCode> {
        self.get_endpoints(server_url, &[], &[]).await
    }

    /// Get the list of endpoints for the server at the given URL, with optional locale and
    /// transport profile filters.
    pub async fn get_endpoints(
        &self,
        server_url: impl Into<String>,
        locale_ids: &[&str],
        profile_uris: &[&str],
    ) -> Result<Vec<EndpointDescription>, StatusCode> {
        let server_url = server_url.into();
        if !is_opc_ua_binary_url(&server_url) {
            return Err(StatusCode::BadTcpEndpointUrlInvalid);
        }
        let preferred_locales = Vec::new();
        let endpoint = EndpointDescription::from(server_url.as_ref());
        let session_info = SessionInfo {
            endpoint: endpoint.clone(),
            user_identity_token: IdentityToken::Anonymous,
            preferred_locales,
        };
        let channel = self.channel_from_session_info(session_info, self.config.channel_lifetime);

        let mut evt_loop = channel.connect().await?;

        let send_fut = self.get_server_endpoints_inner(
            &endpoint,
            &channel,
            if locale_ids.is_empty() {
                None
            } else {
                Some(locale_ids.iter().map(|i| (*i).into()).collect())
            },
            if profile_uris.is_empty() {
                None
            } else {
                Some(profile_uris.iter().map(|i| (*i).into()).collect())
            },
        );
        pin!(send_fut);

        let res = loop {
            select! {
                r = evt_loop.poll() => {
                    if let TransportPollResult::Closed(e) = r {
                        return Err(e);
                    }
                },
                res = &mut send_fut => break res
            }
        };

        channel.close_channel().await;

        loop {
            if matches!(evt_loop.poll().await, TransportPollResult::Closed(_)) {
                break;
            }
        }

        res
    }

    async fn find_servers_inner(
        &self,
        endpoint_url: String,
        channel: &AsyncSecureChannel,
        locale_ids: Option<Vec<UAString>>,
        server_uris: Option<Vec<UAString>>,
    ) -> Result<Vec<ApplicationDescription>, StatusCode> {
        let request = FindServersRequest {
            request_header: channel.make_request_header(self.config.request_timeout),
            endpoint_url: endpoint_url.into(),
            locale_ids,
            server_uris,
        };

        let response = channel.send(request, self.config.request_timeout).await?;
        if let ResponseMessage::FindServers(response) = response {
            process_service_result(&response.response_header)?;
            Ok(response.servers.unwrap_or_default())
        } else {
            Err(process_unexpected_response(response))
        }
    }

    /// Connects to a discovery server and asks the server for a list of available servers'
    /// [`ApplicationDescription`].
    pub async fn find_servers(
        &self,
        discovery_endpoint_url: impl Into<String>,
        locale_ids: Option<Vec<UAString>>,
        server_uris: Option<Vec<UAString>>,
    ) -> Result<Vec<ApplicationDescription>, StatusCode> {
        let discovery_endpoint_url = discovery_endpoint_url.into();
        debug!("find_servers, {}", discovery_endpoint_url);
        let endpoint = EndpointDescription::from(discovery_endpoint_url.as_ref());
        let session_info = SessionInfo {
            endpoint: endpoint.clone(),
            user_identity_token: IdentityToken::Anonymous,
            preferred_locales: Vec::new(),
        };
        let channel = self.channel_from_session_info(session_info, self.config.channel_lifetime);

        let mut evt_loop = channel.connect().await?;

        let send_fut =
            self.find_servers_inner(discovery_endpoint_url, &channel, locale_ids, server_uris);
        pin!(send_fut);

        let res = loop {
            select! {
                r = evt_loop.poll() => {
                    if let TransportPollResult::Closed(e) = r {
                        return Err(e);
                    }
                },
                res = &mut send_fut => break res
            }
        };

        channel.close_channel().await;

        loop {
            if matches!(evt_loop.poll().await, TransportPollResult::Closed(_)) {
                break;
            }
        }

        res
    }

    async fn find_servers_on_network_inner(
        &self,
        starting_record_id: u32,
        max_records_to_return: u32,
        server_capability_filter: Option<Vec<UAString>>,
        channel: &AsyncSecureChannel,
    ) -> Result<FindServersOnNetworkResponse, StatusCode> {
        let request = FindServersOnNetworkRequest {
            request_header: channel.make_request_header(self.config.request_timeout),
            starting_record_id,
            max_records_to_return,
            server_capability_filter,
        };

        let response = channel.send(request, self.config.request_timeout).await?;
        if let ResponseMessage::FindServersOnNetwork(response) = response {
            process_service_result(&response.response_header)?;
            Ok(*response)
        } else {
            Err(process_unexpected_response(response))
        }
    }

    /// Connects to a discovery server and asks for a list of available servers on the network.
    ///
    /// See OPC UA Part 4 - Services 5.5.3 for a complete description of the service.
    pub async fn find_servers_on_network(
        &self,
        discovery_endpoint_url: impl Into<String>,
        starting_record_id: u32,
        max_records_to_return: u32,
        server_capability_filter: Option<Vec<UAString>>,
    ) -> Result<FindServersOnNetworkResponse, StatusCode> {
        let discovery_endpoint_url = discovery_endpoint_url.into();
        debug!("find_servers, {}", discovery_endpoint_url);
        let endpoint = EndpointDescription::from(discovery_endpoint_url.as_ref());
        let session_info = SessionInfo {
            endpoint: endpoint.clone(),
            user_identity_token: IdentityToken::Anonymous,
            preferred_locales: Vec::new(),
        };
        let channel = self.channel_from_session_info(session_info, self.config.channel_lifetime);

        let mut evt_loop = channel.connect().await?;

        let send_fut = self.find_servers_on_network_inner(
            starting_record_id,
            max_records_to_return,
            server_capability_filter,
            &channel,
        );
        pin!(send_fut);

        let res = loop {
            select! {
                r = evt_loop.poll() => {
                    if let TransportPollResult::Closed(e) = r {
                        return Err(e);
                    }
                },
                res = &mut send_fut => break res
            }
        };

        channel.close_channel().await;

        loop {
            if matches!(evt_loop.poll().await, TransportPollResult::Closed(_)) {
                break;
            }
        }

        res
    }

    /// Find an endpoint supplied from the list of endpoints that matches the input criteria.
    pub fn find_matching_endpoint(
        endpoints: &[EndpointDescription],
        endpoint_url: &str,
        security_policy: SecurityPolicy,
        security_mode: MessageSecurityMode,
    ) -> Option<EndpointDescription> {
        if security_policy == SecurityPolicy::Unknown {
            panic!("Cannot match against unknown security policy");
        }

        let mut matching_endpoint = endpoints
            .iter()
            .find(|e| {
                security_mode == e.security_mode
                    && security_policy == SecurityPolicy::from_uri(e.security_policy_uri.as_ref())
                    && url_matches_except_host(endpoint_url, e.endpoint_url.as_ref())
            })
            .cloned()?;

        let hostname = hostname_from_url(endpoint_url).ok()?;
        let new_endpoint_url =
            url_with_replaced_hostname(matching_endpoint.endpoint_url.as_ref(), &hostname).ok()?;

        // The server may advertise an endpoint whose hostname is inaccessible to the client,
        // so substitute the advertised hostname with the one the client supplied.
        matching_endpoint.endpoint_url = new_endpoint_url.into();
        Some(matching_endpoint)
    }

    /// Determine if we recognize the security of this endpoint.
    pub fn is_supported_endpoint(&self, endpoint: &EndpointDescription) -> bool {
        !matches!(
            SecurityPolicy::from_uri(endpoint.security_policy_uri.as_ref()),
            SecurityPolicy::Unknown
        )
    }

    async fn register_server_inner(
        &self,
        server: RegisteredServer,
        channel: &AsyncSecureChannel,
    ) -> Result<(), StatusCode> {
        let request = RegisterServerRequest {
            request_header: channel.make_request_header(self.config.request_timeout),
            server,
        };
        let response = channel.send(request, self.config.request_timeout).await?;
        if let ResponseMessage::RegisterServer(response) = response {
            process_service_result(&response.response_header)?;
            Ok(())
        } else {
            Err(process_unexpected_response(response))
        }
    }

    /// Used by servers that wish to register themselves with a discovery server: the server
    /// sends a [`RegisterServerRequest`] to the discovery server to register itself. Servers
    /// are expected to re-register themselves periodically, at most every 10 minutes.
    ///
    /// See OPC UA Part 4 - Services 5.4.5 for a complete description of the service.
    pub async fn register_server(
        &mut self,
        discovery_endpoint_url: impl Into<String>,
        server: RegisteredServer,
    ) -> Result<(), StatusCode> {
        let discovery_endpoint_url = discovery_endpoint_url.into();
        if !is_valid_opc_ua_url(&discovery_endpoint_url) {
            error!(
                "Discovery endpoint url \"{}\" is not a valid OPC UA url",
                discovery_endpoint_url
            );
            return Err(StatusCode::BadTcpEndpointUrlInvalid);
        }

        debug!("register_server({}, {:?}", discovery_endpoint_url, server);
        let endpoints = self
            .get_server_endpoints_from_url(discovery_endpoint_url.clone())
            .await?;
        if endpoints.is_empty() {
            return Err(StatusCode::BadUnexpectedError);
        }

        let Some(endpoint) = endpoints
            .iter()
            .filter(|e| self.is_supported_endpoint(e))
            .max_by(|a, b| a.security_level.cmp(&b.security_level))
        else {
            error!("Cannot find an endpoint that we call register server on");
            return Err(StatusCode::BadUnexpectedError);
        };

        debug!(
            "Registering this server via discovery endpoint {:?}",
            endpoint
        );

        let session_info = SessionInfo {
            endpoint: endpoint.clone(),
            user_identity_token: IdentityToken::Anonymous,
            preferred_locales: Vec::new(),
        };
        let channel = self.channel_from_session_info(session_info, self.config.channel_lifetime);

        let mut evt_loop = channel.connect().await?;

        let send_fut = self.register_server_inner(server, &channel);
        pin!(send_fut);

        let res = loop {
            select! {
                r = evt_loop.poll() => {
                    if let TransportPollResult::Closed(e) = r {
                        return Err(e);
                    }
                },
                res = &mut send_fut => break res
            }
        };

        channel.close_channel().await;

        loop {
            if matches!(evt_loop.poll().await, TransportPollResult::Closed(_)) {
                break;
            }
        }

        res
    }

    /// Get the certificate store.
    pub fn certificate_store(&self) -> &Arc<RwLock<CertificateStore>> {
        &self.certificate_store
    }
}
