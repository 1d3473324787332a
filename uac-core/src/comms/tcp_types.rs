// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The HEL/ACK/ERR messages exchanged before a secure channel is established,
//! per OPC UA Part 6, 7.1.

use std::io::{Read, Write};

use uac_types::{
    process_decode_io_result, read_u32, read_u8, status_code::StatusCode, write_u32, write_u8,
    DecodingOptions, EncodingResult, Error, SimpleBinaryDecodable, SimpleBinaryEncodable,
    UAString,
};

const HEADER_LEN: usize = 8;
const HELLO_MESSAGE: &[u8] = b"HEL";
const ACKNOWLEDGE_MESSAGE: &[u8] = b"ACK";
const ERROR_MESSAGE: &[u8] = b"ERR";
const CHUNK_FINAL: u8 = b'F';

fn write_header<S: Write + ?Sized>(stream: &mut S, kind: &[u8], body_len: usize) -> EncodingResult<()> {
    process_decode_io_result(stream.write_all(kind))?;
    write_u8(stream, CHUNK_FINAL)?;
    write_u32(stream, (HEADER_LEN + body_len) as u32)
}

fn read_header<S: Read + ?Sized>(stream: &mut S, expected: &[u8]) -> EncodingResult<usize> {
    let mut kind = [0u8; 3];
    process_decode_io_result(stream.read_exact(&mut kind))?;
    if kind != *expected {
        return Err(Error::decoding(format!(
            "Expected {:?} message, got {:?}",
            String::from_utf8_lossy(expected),
            String::from_utf8_lossy(&kind)
        )));
    }
    let _is_final = read_u8(stream)?;
    let message_size = read_u32(stream)? as usize;
    Ok(message_size - HEADER_LEN)
}

/// Sent by the client to open a TCP connection, negotiating buffer sizes and advertising
/// the endpoint it wants to talk to.
#[derive(Debug, Clone, PartialEq)]
pub struct HelloMessage {
    /// Protocol version requested by the client.
    pub protocol_version: u32,
    /// Client's own receive buffer size.
    pub receive_buffer_size: u32,
    /// Client's own send buffer size.
    pub send_buffer_size: u32,
    /// Maximum message size the client is willing to receive.
    pub max_message_size: u32,
    /// Maximum number of chunks the client is willing to receive per message.
    pub max_chunk_count: u32,
    /// The endpoint the client wants to connect to.
    pub endpoint_url: UAString,
}

impl HelloMessage {
    /// Build a hello message advertising `endpoint_url` and the given buffer limits.
    pub fn new(
        endpoint_url: &str,
        send_buffer_size: usize,
        receive_buffer_size: usize,
        max_message_size: usize,
        max_chunk_count: usize,
    ) -> Self {
        Self {
            protocol_version: 0,
            receive_buffer_size: receive_buffer_size as u32,
            send_buffer_size: send_buffer_size as u32,
            max_message_size: max_message_size as u32,
            max_chunk_count: max_chunk_count as u32,
            endpoint_url: UAString::from(endpoint_url),
        }
    }

    /// `true` if the negotiated buffer sizes are within the limits allowed by the spec.
    pub fn is_valid_buffer_sizes(&self) -> bool {
        self.receive_buffer_size >= crate::comms::message_chunk::MIN_CHUNK_SIZE as u32
            && self.send_buffer_size >= crate::comms::message_chunk::MIN_CHUNK_SIZE as u32
    }

    /// `true` if `endpoint_url` is present among the server's known endpoints, ignoring
    /// hostname differences (e.g. `localhost` vs `127.0.0.1`).
    pub fn is_endpoint_url_valid(&self, endpoints: &[String]) -> bool {
        let url: &str = self.endpoint_url.as_ref();
        endpoints
            .iter()
            .any(|e| crate::comms::url::url_matches_except_host(e, url))
    }
}

impl SimpleBinaryEncodable for HelloMessage {
    fn byte_len(&self) -> usize {
        HEADER_LEN + 4 + 4 + 4 + 4 + 4 + self.endpoint_url.byte_len()
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S) -> EncodingResult<()> {
        let body_len = self.byte_len() - HEADER_LEN;
        write_header(stream, HELLO_MESSAGE, body_len)?;
        write_u32(stream, self.protocol_version)?;
        write_u32(stream, self.receive_buffer_size)?;
        write_u32(stream, self.send_buffer_size)?;
        write_u32(stream, self.max_message_size)?;
        write_u32(stream, self.max_chunk_count)?;
        self.endpoint_url.encode(stream)
    }
}

impl SimpleBinaryDecodable for HelloMessage {
    fn decode<S: Read + ?Sized>(stream: &mut S, options: &DecodingOptions) -> EncodingResult<Self> {
        let _body_len = read_header(stream, HELLO_MESSAGE)?;
        let protocol_version = read_u32(stream)?;
        let receive_buffer_size = read_u32(stream)?;
        let send_buffer_size = read_u32(stream)?;
        let max_message_size = read_u32(stream)?;
        let max_chunk_count = read_u32(stream)?;
        let endpoint_url = UAString::decode(stream, options)?;
        Ok(Self {
            protocol_version,
            receive_buffer_size,
            send_buffer_size,
            max_message_size,
            max_chunk_count,
            endpoint_url,
        })
    }
}

/// Sent by the server in response to a `HelloMessage`, settling on the buffer sizes and
/// limits that will be used for the rest of the connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcknowledgeMessage {
    /// Protocol version the server has settled on.
    pub protocol_version: u32,
    /// Size of buffer the server will use to receive messages.
    pub receive_buffer_size: u32,
    /// Size of buffer the server expects the client to use to receive messages.
    pub send_buffer_size: u32,
    /// Maximum message size the server will accept.
    pub max_message_size: u32,
    /// Maximum number of chunks the server will accept per message.
    pub max_chunk_count: u32,
}

impl AcknowledgeMessage {
    /// Build a new acknowledge message.
    pub fn new(
        protocol_version: u32,
        receive_buffer_size: u32,
        send_buffer_size: u32,
        max_message_size: u32,
        max_chunk_count: u32,
    ) -> Self {
        Self {
            protocol_version,
            receive_buffer_size,
            send_buffer_size,
            max_message_size,
            max_chunk_count,
        }
    }
}

impl SimpleBinaryEncodable for AcknowledgeMessage {
    fn byte_len(&self) -> usize {
        HEADER_LEN + 4 + 4 + 4 + 4 + 4
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S) -> EncodingResult<()> {
        write_header(stream, ACKNOWLEDGE_MESSAGE, self.byte_len() - HEADER_LEN)?;
        write_u32(stream, self.protocol_version)?;
        write_u32(stream, self.receive_buffer_size)?;
        write_u32(stream, self.send_buffer_size)?;
        write_u32(stream, self.max_message_size)?;
        write_u32(stream, self.max_chunk_count)
    }
}

impl SimpleBinaryDecodable for AcknowledgeMessage {
    fn decode<S: Read + ?Sized>(stream: &mut S, _options: &DecodingOptions) -> EncodingResult<Self> {
        let _body_len = read_header(stream, ACKNOWLEDGE_MESSAGE)?;
        Ok(Self {
            protocol_version: read_u32(stream)?,
            receive_buffer_size: read_u32(stream)?,
            send_buffer_size: read_u32(stream)?,
            max_message_size: read_u32(stream)?,
            max_chunk_count: read_u32(stream)?,
        })
    }
}

/// Sent by either side to report a fatal error before or instead of a normal close, per
/// Part 6, 7.1.4.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMessage {
    /// The status code describing the failure.
    pub error: StatusCode,
    /// A human readable description of the failure, for diagnostics.
    pub reason: UAString,
}

impl ErrorMessage {
    /// Build a new error message from a status code and a diagnostic message.
    pub fn new(error: StatusCode, reason: &str) -> Self {
        Self {
            error,
            reason: UAString::from(reason),
        }
    }
}

impl SimpleBinaryEncodable for ErrorMessage {
    fn byte_len(&self) -> usize {
        HEADER_LEN + 4 + self.reason.byte_len()
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S) -> EncodingResult<()> {
        write_header(stream, ERROR_MESSAGE, self.byte_len() - HEADER_LEN)?;
        write_u32(stream, self.error.0)?;
        self.reason.encode(stream)
    }
}

impl SimpleBinaryDecodable for ErrorMessage {
    fn decode<S: Read + ?Sized>(stream: &mut S, options: &DecodingOptions) -> EncodingResult<Self> {
        let _body_len = read_header(stream, ERROR_MESSAGE)?;
        let error = StatusCode(read_u32(stream)?);
        let reason = UAString::decode(stream, options)?;
        Ok(Self { error, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_round_trip() {
        let hello = HelloMessage::new("opc.tcp://localhost:4840", 65536, 65536, 0, 0);
        let bytes = hello.encode_to_vec();
        let decoded = HelloMessage::decode(&mut bytes.as_slice(), &DecodingOptions::default())
            .expect("decode");
        assert_eq!(hello, decoded);
    }

    #[test]
    fn acknowledge_round_trip() {
        let ack = AcknowledgeMessage::new(0, 65536, 65536, 0, 0);
        let bytes = ack.encode_to_vec();
        let decoded = AcknowledgeMessage::decode(&mut bytes.as_slice(), &DecodingOptions::default())
            .expect("decode");
        assert_eq!(ack, decoded);
    }

    #[test]
    fn error_round_trip() {
        let err = ErrorMessage::new(StatusCode::BadTcpEndpointUrlInvalid, "bad url");
        let bytes = err.encode_to_vec();
        let decoded = ErrorMessage::decode(&mut bytes.as_slice(), &DecodingOptions::default())
            .expect("decode");
        assert_eq!(err, decoded);
    }
}
