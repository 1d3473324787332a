// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! A `tokio_util` codec that frames the raw HEL/ACK/ERR/MSG/OPN/CLO byte stream into
//! whole messages, without attempting to decode chunk bodies (that requires a
//! secure channel, which the codec doesn't have access to).

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;
use uac_types::{DecodingOptions, SimpleBinaryDecodable};

use super::{
    message_chunk::{MessageChunk, MESSAGE_CHUNK_HEADER_SIZE, MESSAGE_SIZE_OFFSET},
    tcp_types::{AcknowledgeMessage, ErrorMessage, HelloMessage},
};

/// A single frame read off the wire: a handshake message, or a raw chunk awaiting
/// decryption once the caller has access to the relevant secure channel.
#[derive(Debug)]
pub enum Message {
    /// HELLO sent by a client opening a connection.
    Hello(HelloMessage),
    /// ACKNOWLEDGE sent by a server in response to HELLO.
    Acknowledge(AcknowledgeMessage),
    /// ERROR sent by either side to report a fatal failure.
    Error(ErrorMessage),
    /// A raw message chunk, still secured.
    Chunk(MessageChunk),
}

/// Frames the OPC UA TCP byte stream into [`Message`]s.
pub struct TcpCodec {
    decoding_options: DecodingOptions,
}

impl TcpCodec {
    /// Create a new codec that will enforce `decoding_options`'s message size limit.
    pub fn new(decoding_options: DecodingOptions) -> Self {
        Self { decoding_options }
    }
}

impl Decoder for TcpCodec {
    type Item = Message;
    type Error = std::io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Message>, Self::Error> {
        if src.len() < MESSAGE_SIZE_OFFSET + 4 {
            return Ok(None);
        }

        let message_size = u32::from_le_bytes(
            src[MESSAGE_SIZE_OFFSET..MESSAGE_SIZE_OFFSET + 4]
                .try_into()
                .expect("slice is exactly 4 bytes"),
        ) as usize;

        let max_message_size = self.decoding_options.max_message_size;
        if max_message_size > 0 && message_size > max_message_size {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "Message size {message_size} exceeds the maximum allowed size {max_message_size}"
                ),
            ));
        }
        if message_size < MESSAGE_CHUNK_HEADER_SIZE {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Message size {message_size} is smaller than the smallest possible header"),
            ));
        }

        if src.len() < message_size {
            src.reserve(message_size - src.len());
            return Ok(None);
        }

        let kind = [src[0], src[1], src[2]];
        let frame = src.split_to(message_size);

        let message = match &kind {
            b"HEL" => Message::Hello(
                HelloMessage::decode(&mut frame.reader(), &self.decoding_options)
                    .map_err(std::io::Error::from)?,
            ),
            b"ACK" => Message::Acknowledge(
                AcknowledgeMessage::decode(&mut frame.reader(), &self.decoding_options)
                    .map_err(std::io::Error::from)?,
            ),
            b"ERR" => Message::Error(
                ErrorMessage::decode(&mut frame.reader(), &self.decoding_options)
                    .map_err(std::io::Error::from)?,
            ),
            b"MSG" | b"OPN" | b"CLO" => Message::Chunk(MessageChunk {
                data: frame.to_vec(),
            }),
            _ => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Unrecognized message type {:?}", String::from_utf8_lossy(&kind)),
                ));
            }
        };

        Ok(Some(message))
    }
}
