use std::sync::Arc;

use futures::StreamExt;
use log::{debug, error};
use tokio::io::{AsyncWriteExt, ReadHalf, WriteHalf};
use tokio::net::TcpStream;
use tokio_util::codec::FramedRead;
use uac_core::{
    comms::{
        buffer::SendBuffer,
        chunker::Chunker,
        message_chunk::{MessageChunk, MessageIsFinalType},
        secure_channel::SecureChannel,
        tcp_codec::{Message, TcpCodec},
        tcp_types::{AcknowledgeMessage, HelloMessage},
        url::hostname_port_from_url,
    },
    constants::DEFAULT_OPC_UA_SERVER_PORT,
    lifecycle::CommunicationState,
    sync::RwLock,
    trace_read_lock, trace_write_lock, RequestMessage, ResponseMessage,
};
use uac_types::StatusCode;

use super::{
    connect::{Connector, Transport},
    core::{OutgoingMessage, TransportPollResult, TransportState},
};

#[derive(Debug, Clone, Copy)]
enum TransportCloseState {
    Open,
    Closing(StatusCode),
    Closed(StatusCode),
}

/// Transport implementation for opc.tcp, driving the chunk-framed byte stream once a
/// connection has been established.
pub struct TcpTransport {
    state: TransportState,
    read: FramedRead<ReadHalf<TcpStream>, TcpCodec>,
    write: WriteHalf<TcpStream>,
    send_buffer: SendBuffer,
    pending_chunks: Vec<MessageChunk>,
    last_received_sequence_number: u32,
    should_close: bool,
    closed: TransportCloseState,
    lifecycle: CommunicationState,
}

/// Buffer sizes and limits negotiated for a connection.
#[derive(Debug, Clone)]
pub struct TransportConfiguration {
    /// Maximum number of requests awaiting a response before backpressure kicks in.
    pub max_pending_incoming: usize,
    /// Size in bytes this client will use to chunk outgoing messages.
    pub send_buffer_size: usize,
    /// Size in bytes this client asks the server to chunk messages to.
    pub recv_buffer_size: usize,
    /// Maximum total size of a message, 0 for no limit.
    pub max_message_size: usize,
    /// Maximum number of chunks per message, 0 for no limit.
    pub max_chunk_count: usize,
}

impl Default for TransportConfiguration {
    fn default() -> Self {
        Self {
            max_pending_incoming: 1024,
            send_buffer_size: 65536,
            recv_buffer_size: 65536,
            max_message_size: 0,
            max_chunk_count: 0,
        }
    }
}

/// Establishes a TCP connection and performs the HELLO/ACKNOWLEDGE handshake.
pub struct TcpConnector;

impl TcpConnector {
    async fn connect_inner(
        secure_channel: &RwLock<SecureChannel>,
        config: &TransportConfiguration,
        endpoint_url: &str,
    ) -> Result<
        (
            FramedRead<ReadHalf<TcpStream>, TcpCodec>,
            WriteHalf<TcpStream>,
            AcknowledgeMessage,
        ),
        StatusCode,
    > {
        let (host, port) = hostname_port_from_url(endpoint_url, DEFAULT_OPC_UA_SERVER_PORT)?;

        let addr = {
            let addr = format!("{}:{}", host, port);
            match tokio::net::lookup_host(addr).await {
                Ok(mut addrs) => addrs.next().ok_or_else(|| {
                    error!(
                        "Invalid address {}, does not resolve to any socket",
                        endpoint_url
                    );
                    StatusCode::BadTcpEndpointUrlInvalid
                })?,
                Err(e) => {
                    error!("Invalid address {}, cannot be parsed {:?}", endpoint_url, e);
                    return Err(StatusCode::BadTcpEndpointUrlInvalid);
                }
            }
        };

        debug!("Connecting to {} with url {}", addr, endpoint_url);

        let socket = TcpStream::connect(&addr).await.map_err(|err| {
            error!("Could not connect to host {}, {:?}", addr, err);
            StatusCode::BadCommunicationError
        })?;

        let (reader, mut writer) = tokio::io::split(socket);

        let hello = HelloMessage::new(
            endpoint_url,
            config.send_buffer_size,
            config.recv_buffer_size,
            config.max_message_size,
            config.max_chunk_count,
        );
        log::trace!("Send hello message: {hello:?}");
        let mut framed_read = {
            let secure_channel = trace_read_lock!(secure_channel);
            FramedRead::new(reader, TcpCodec::new(secure_channel.decoding_options()))
        };

        use uac_types::SimpleBinaryEncodable;
        writer
            .write_all(&hello.encode_to_vec())
            .await
            .map_err(|err| {
                error!("Cannot send hello to server, err = {}", err);
                StatusCode::BadCommunicationError
            })?;

        let ack = match framed_read.next().await {
            Some(Ok(Message::Acknowledge(ack))) => {
                if ack.send_buffer_size > hello.receive_buffer_size {
                    log::warn!(
                        "Acknowledged send buffer size is greater than receive buffer size in hello message!"
                    );
                }
                if ack.receive_buffer_size > hello.send_buffer_size {
                    log::warn!(
                        "Acknowledged receive buffer size is greater than send buffer size in hello message!"
                    );
                }
                log::trace!("Received acknowledgement: {:?}", ack);
                ack
            }
            other => {
                error!(
                    "Unexpected response while waiting for server ACK. Expected ACK, got {:?}",
                    other
                );
                return Err(StatusCode::BadConnectionClosed);
            }
        };

        Ok((framed_read, writer, ack))
    }
}

#[async_trait::async_trait]
impl Connector for TcpConnector {
    async fn connect(
        &self,
        channel: Arc<RwLock<SecureChannel>>,
        outgoing_recv: tokio::sync::mpsc::Receiver<OutgoingMessage>,
        config: TransportConfiguration,
        endpoint_url: &str,
    ) -> Result<TcpTransport, StatusCode> {
        let lifecycle = CommunicationState::new();
        lifecycle.open();

        let (framed_read, writer, ack) =
            match Self::connect_inner(&channel, &config, endpoint_url).await {
                Ok(connected) => connected,
                Err(e) => {
                    lifecycle.fault();
                    return Err(e);
                }
            };

        let mut buffer = SendBuffer::new(config.send_buffer_size, config.max_message_size, config.max_chunk_count);
        buffer.revise(
            ack.receive_buffer_size as usize,
            ack.max_message_size as usize,
            ack.max_chunk_count as usize,
        );

        lifecycle.opened();

        Ok(TcpTransport {
            state: TransportState::new(
                channel,
                outgoing_recv,
                config.max_pending_incoming,
                ack.send_buffer_size.min(config.recv_buffer_size as u32) as usize,
            ),
            read: framed_read,
            write: writer,
            send_buffer: buffer,
            pending_chunks: Vec::new(),
            last_received_sequence_number: 0,
            should_close: false,
            closed: TransportCloseState::Open,
            lifecycle,
        })
    }
}

impl TcpTransport {
    fn handle_incoming_message(
        &mut self,
        incoming: Option<Result<Message, std::io::Error>>,
    ) -> TransportPollResult {
        let Some(incoming) = incoming else {
            return TransportPollResult::Closed(StatusCode::BadCommunicationError);
        };
        let message = match incoming {
            Ok(message) => message,
            Err(err) => {
                error!("Error reading from stream {}", err);
                return TransportPollResult::Closed(StatusCode::BadConnectionClosed);
            }
        };

        match self.process_message(message) {
            Ok(None) => TransportPollResult::RecoverableError(StatusCode::Good),
            Ok(Some((request_id, response))) => {
                self.state.dispatch_response(request_id, response);
                TransportPollResult::IncomingMessage
            }
            Err(status) => {
                self.pending_chunks.clear();
                TransportPollResult::Closed(status)
            }
        }
    }

    /// Accumulate a chunk, returning the decoded response and its request id once the
    /// final chunk of a message has arrived.
    fn process_message(
        &mut self,
        message: Message,
    ) -> Result<Option<(u32, ResponseMessage)>, StatusCode> {
        let Message::Chunk(chunk) = message else {
            // A stray HEL/ACK/ERR after the handshake is a protocol violation.
            return Err(StatusCode::BadCommunicationError);
        };

        let decoding_options = trace_read_lock!(self.state.secure_channel).decoding_options();
        let header = chunk
            .message_header(&decoding_options)
            .map_err(|_| StatusCode::BadCommunicationError)?;

        if header.is_final == MessageIsFinalType::FinalError {
            self.pending_chunks.clear();
            return Ok(None);
        }

        let mut secure_channel = trace_write_lock!(self.state.secure_channel);
        let chunk = secure_channel
            .verify_and_remove_security(&chunk.data)
            .map_err(StatusCode::from)?;

        if self.send_buffer.max_chunk_count > 0
            && self.pending_chunks.len() >= self.send_buffer.max_chunk_count
        {
            self.pending_chunks.clear();
            return Err(StatusCode::BadEncodingLimitsExceeded);
        }
        self.pending_chunks.push(chunk);

        if header.is_final == MessageIsFinalType::Intermediate {
            return Ok(None);
        }

        let chunk_info = self.pending_chunks[0]
            .chunk_info(&secure_channel)
            .map_err(|_| StatusCode::BadCommunicationError)?;

        self.last_received_sequence_number = Chunker::validate_chunks(
            self.last_received_sequence_number + 1,
            &secure_channel,
            &self.pending_chunks,
        )
        .map_err(StatusCode::from)?;

        let response: ResponseMessage =
            Chunker::decode(&self.pending_chunks, &secure_channel, None).map_err(StatusCode::from)?;
        let request_id = chunk_info.sequence_header.request_id;
        self.pending_chunks.clear();

        Ok(Some((request_id, response)))
    }

    async fn poll_inner(&mut self) -> TransportPollResult {
        if self.send_buffer.should_encode_chunks() {
            let secure_channel = trace_read_lock!(self.state.secure_channel);
            if let Err(e) = self.send_buffer.encode_next_chunk(&secure_channel) {
                return TransportPollResult::Closed(e);
            }
        }

        if self.send_buffer.can_read() {
            tokio::select! {
                r = self.send_buffer.read_into_async(&mut self.write) => {
                    if let Err(e) = r {
                        error!("write bytes task failed: {}", e);
                        return TransportPollResult::Closed(StatusCode::BadCommunicationError);
                    }
                    TransportPollResult::OutgoingMessageSent
                }
                incoming = self.read.next() => {
                    self.handle_incoming_message(incoming)
                }
            }
        } else if self.should_close {
            debug!("Writer is setting the connection state to finished(good)");
            TransportPollResult::Closed(StatusCode::Good)
        } else {
            tokio::select! {
                outgoing = self.state.wait_for_outgoing_message(&mut self.send_buffer) => {
                    let Some((outgoing, request_id)) = outgoing else {
                        return TransportPollResult::Closed(StatusCode::Good);
                    };
                    let close_connection = matches!(outgoing, RequestMessage::CloseSecureChannel(_));
                    if close_connection {
                        self.should_close = true;
                        debug!("About to send a CloseSecureChannelRequest which means the transport should close shortly");
                    }
                    let secure_channel = trace_read_lock!(self.state.secure_channel);
                    match self.send_buffer.write(request_id, outgoing, &secure_channel) {
                        Ok(()) => TransportPollResult::OutgoingMessage,
                        Err(e) => {
                            drop(secure_channel);
                            let status = e.status();
                            error!("Failed to encode outgoing message: {status}");
                            self.state.message_send_failed(request_id, status);
                            TransportPollResult::RecoverableError(status)
                        }
                    }
                }
                incoming = self.read.next() => {
                    self.handle_incoming_message(incoming)
                }
            }
        }
    }
}

impl TcpTransport {
    /// The transport's position in its `Created -> Opening -> Opened -> Closing ->
    /// Closed`/`Faulted` lifecycle.
    pub fn lifecycle_state(&self) -> uac_core::lifecycle::CommunicationObjectState {
        self.lifecycle.get()
    }

    fn fault_or_close(&self, status: StatusCode) {
        self.lifecycle.close();
        if status.is_good() {
            self.lifecycle.closed();
        } else {
            self.lifecycle.fault();
        }
    }
}

impl Transport for TcpTransport {
    async fn poll(&mut self) -> TransportPollResult {
        match self.closed {
            TransportCloseState::Open => {}
            TransportCloseState::Closing(c) => {
                let r = self.state.close(c).await;
                self.closed = TransportCloseState::Closed(c);
                self.fault_or_close(r);
                return TransportPollResult::Closed(r);
            }
            TransportCloseState::Closed(c) => {
                return TransportPollResult::Closed(c);
            }
        }

        let r = self.poll_inner().await;
        if let TransportPollResult::Closed(status) = &r {
            self.closed = TransportCloseState::Closing(*status);
            let r = self.state.close(*status).await;
            self.closed = TransportCloseState::Closed(r);
            self.fault_or_close(r);
        }
        r
    }
}
