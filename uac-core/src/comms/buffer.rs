// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Outgoing message queue: turns whole request/response messages into secured wire
//! chunks and streams the resulting bytes out a byte at a time so a single
//! oversized message can't stall delivery of everything queued after it.

use std::collections::VecDeque;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use uac_types::{status_code::StatusCode, Error};

use super::{
    chunker::Chunker,
    message_chunk::MessageChunk,
    secure_channel::SecureChannel,
    tcp_types::ErrorMessage,
};
use crate::Message;

/// Buffers outgoing chunks for a single TCP connection.
pub struct SendBuffer {
    /// Negotiated size of a single chunk.
    pub send_buffer_size: usize,
    /// Negotiated maximum total size of a message, 0 for no limit.
    pub max_message_size: usize,
    /// Negotiated maximum number of chunks per message, 0 for no limit.
    pub max_chunk_count: usize,
    sequence_number: u32,
    /// Chunks that have been produced by `Chunker::encode` but not yet serialized
    /// into `data`.
    chunks: VecDeque<MessageChunk>,
    data: Vec<u8>,
    pos: usize,
}

impl SendBuffer {
    /// Create a new buffer with the given initial (pre-negotiation) limits.
    pub fn new(send_buffer_size: usize, max_message_size: usize, max_chunk_count: usize) -> Self {
        Self {
            send_buffer_size,
            max_message_size,
            max_chunk_count,
            sequence_number: 1,
            chunks: VecDeque::new(),
            data: Vec::new(),
            pos: 0,
        }
    }

    /// Apply the limits negotiated via HELLO/ACKNOWLEDGE.
    pub fn revise(&mut self, send_buffer_size: usize, max_message_size: usize, max_chunk_count: usize) {
        self.send_buffer_size = send_buffer_size;
        self.max_message_size = max_message_size;
        self.max_chunk_count = max_chunk_count;
    }

    /// Encode `message` into secured chunks and enqueue them for serialization.
    pub fn write(
        &mut self,
        request_id: u32,
        message: impl Message,
        secure_channel: &SecureChannel,
    ) -> Result<(), Error> {
        let chunks = Chunker::encode(
            self.sequence_number,
            request_id,
            self.max_message_size,
            self.send_buffer_size,
            secure_channel,
            &message,
        )?;

        if self.max_chunk_count > 0 && self.chunks.len() + chunks.len() > self.max_chunk_count {
            return Err(Error::new(
                StatusCode::BadEncodingLimitsExceeded,
                format!(
                    "Message requires {} chunks, exceeding the negotiated limit of {}",
                    self.chunks.len() + chunks.len(),
                    self.max_chunk_count
                ),
            ));
        }

        self.sequence_number = self.sequence_number.wrapping_add(chunks.len() as u32);
        self.chunks.extend(chunks);
        Ok(())
    }

    /// Queue a raw, unsecured error message for sending (used before a secure channel exists).
    pub fn write_error(&mut self, message: ErrorMessage) {
        use uac_types::SimpleBinaryEncodable;
        self.data.extend(message.encode_to_vec());
    }

    /// `true` if there are encoded chunks waiting to be serialized into the byte buffer.
    pub fn should_encode_chunks(&self) -> bool {
        !self.chunks.is_empty()
    }

    /// Serialize the next queued chunk into the byte buffer.
    pub fn encode_next_chunk(&mut self, _secure_channel: &SecureChannel) -> Result<(), StatusCode> {
        if let Some(chunk) = self.chunks.pop_front() {
            self.data.extend_from_slice(&chunk.data);
        }
        Ok(())
    }

    /// `true` if there are bytes ready to be written to the socket.
    pub fn can_read(&self) -> bool {
        self.pos < self.data.len()
    }

    /// Write whatever bytes are ready into `writer`, advancing as progress is made so the
    /// operation can be safely cancelled (e.g. by `tokio::select!`) and retried.
    pub async fn read_into_async<W: AsyncWrite + Unpin>(&mut self, writer: &mut W) -> std::io::Result<()> {
        while self.pos < self.data.len() {
            let n = writer.write(&self.data[self.pos..]).await?;
            if n == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "failed to write whole buffer",
                ));
            }
            self.pos += n;
        }
        self.data.clear();
        self.pos = 0;
        Ok(())
    }
}
