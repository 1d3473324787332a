//! Transport-level state shared by connectors: the outgoing message queue and the
//! result type returned from polling a connection.

use std::collections::HashMap;

use tokio::sync::oneshot;
use uac_core::{comms::buffer::SendBuffer, RequestMessage, ResponseMessage};
use uac_types::StatusCode;

/// A request submitted onto a transport, along with the channel used to deliver its
/// response (or `None` if the caller isn't waiting for one, e.g. on shutdown).
pub(crate) struct OutgoingMessage {
    pub(crate) message: RequestMessage,
    pub(crate) response: Option<oneshot::Sender<Result<ResponseMessage, StatusCode>>>,
}

/// Result of polling a client transport.
#[derive(Debug)]
pub enum TransportPollResult {
    /// An outgoing message was handed to the socket.
    OutgoingMessage,
    /// The outgoing message currently being sent was fully written.
    OutgoingMessageSent,
    /// A full incoming message was decoded and dispatched to its waiting caller.
    IncomingMessage,
    /// A request failed without closing the transport (e.g. its response couldn't be
    /// delivered because the caller stopped waiting).
    RecoverableError(StatusCode),
    /// The transport is closed; the connection should be torn down and, if desired,
    /// reconnected from scratch.
    Closed(StatusCode),
}

/// Tracks in-flight requests for a single transport connection: allocates request ids,
/// matches incoming responses back to their caller, and applies backpressure once too
/// many requests are awaiting a reply.
pub(crate) struct TransportState {
    pub(crate) secure_channel: std::sync::Arc<uac_core::sync::RwLock<uac_core::comms::secure_channel::SecureChannel>>,
    outgoing_recv: tokio::sync::mpsc::Receiver<OutgoingMessage>,
    max_pending_incoming: usize,
    next_request_id: u32,
    pending: HashMap<u32, oneshot::Sender<Result<ResponseMessage, StatusCode>>>,
}

impl TransportState {
    pub(crate) fn new(
        secure_channel: std::sync::Arc<uac_core::sync::RwLock<uac_core::comms::secure_channel::SecureChannel>>,
        outgoing_recv: tokio::sync::mpsc::Receiver<OutgoingMessage>,
        max_pending_incoming: usize,
        _initial_send_buffer_size: usize,
    ) -> Self {
        Self {
            secure_channel,
            outgoing_recv,
            max_pending_incoming,
            next_request_id: 1,
            pending: HashMap::new(),
        }
    }

    fn next_request_id(&mut self) -> u32 {
        let id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        id
    }

    /// Wait for the next outgoing message, assign it a request id, and register its
    /// response channel (if any) so the matching reply can be routed back.
    ///
    /// Returns `None` once the sending half has been dropped, meaning no more requests
    /// will ever be submitted.
    pub(crate) async fn wait_for_outgoing_message(
        &mut self,
        _send_buffer: &mut SendBuffer,
    ) -> Option<(RequestMessage, u32)> {
        loop {
            if self.pending.len() >= self.max_pending_incoming && self.max_pending_incoming > 0 {
                // Don't pull more work off the queue until some in-flight requests
                // have been answered.
                tokio::task::yield_now().await;
            }

            let outgoing = self.outgoing_recv.recv().await?;
            let request_id = self.next_request_id();
            if let Some(response) = outgoing.response {
                self.pending.insert(request_id, response);
            }
            return Some((outgoing.message, request_id));
        }
    }

    /// Mark a request as failed, delivering `status` to its waiting caller if it has one.
    pub(crate) fn message_send_failed(&mut self, request_id: u32, status: StatusCode) {
        if let Some(sender) = self.pending.remove(&request_id) {
            let _ = sender.send(Err(status));
        }
    }

    /// Deliver a decoded response to the caller that submitted its matching request.
    pub(crate) fn dispatch_response(&mut self, request_id: u32, response: ResponseMessage) {
        if let Some(sender) = self.pending.remove(&request_id) {
            let _ = sender.send(Ok(response));
        } else {
            log::warn!("Received a response for unknown request id {request_id}");
        }
    }

    /// Drain all pending requests with `status`, and drop any further outgoing messages.
    pub(crate) async fn close(&mut self, status: StatusCode) -> StatusCode {
        self.outgoing_recv.close();
        while let Ok(outgoing) = self.outgoing_recv.try_recv() {
            if let Some(response) = outgoing.response {
                let _ = response.send(Err(status));
            }
        }
        for (_, sender) in self.pending.drain() {
            let _ = sender.send(Err(status));
        }
        status
    }
}
