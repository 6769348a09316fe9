// ABOUTME: Segments a reliable byte stream into whole SMPP PDUs
// ABOUTME: Buffers partial PDUs across reads so nothing is lost at chunk boundaries

use bytes::{Buf, BytesMut};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::codec::CodecError;
use crate::pdu::{HEADER_LENGTH, Pdu, length_of_next_pdu};

/// Size of the scratch buffer used for a single transport read
const READ_BUFFER_SIZE: usize = 65536;

/// Incremental PDU framer for one transport connection.
///
/// TCP delivers a byte stream with no respect for PDU boundaries: one read
/// may carry half a PDU, or several. The reader appends each read to a
/// pending buffer and drains as many whole PDUs as the buffer holds, keeping
/// any residual partial PDU for the next call.
///
/// A reader is single-writer: one task drives `read` at a time. Distinct
/// connections get distinct readers and share nothing.
#[derive(Debug)]
pub struct StreamReader<R> {
    transport: R,
    read_buffer: Box<[u8]>,
    pending: BytesMut,
}

impl<R: AsyncRead + Unpin> StreamReader<R> {
    /// Create a reader over an already-connected transport
    pub fn new(transport: R) -> StreamReader<R> {
        StreamReader {
            transport,
            read_buffer: vec![0u8; READ_BUFFER_SIZE].into_boxed_slice(),
            pending: BytesMut::with_capacity(READ_BUFFER_SIZE),
        }
    }

    /// Perform exactly one transport read and extract the whole PDUs it
    /// completes, in stream order.
    ///
    /// Returns the PDUs decoded by this call, paired with the error that
    /// stopped extraction, if any. A decode failure consumes the failing
    /// PDU's advertised octets so the connection stays usable; a transport
    /// failure (including EOF) is surfaced as
    /// [`CodecError::Transport`] and the caller should discard the reader.
    #[tracing::instrument(skip_all)]
    pub async fn read(&mut self) -> (Vec<Pdu>, Option<CodecError>) {
        let bytes_read = match self.transport.read(&mut self.read_buffer).await {
            Ok(0) => {
                let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "transport closed");
                return (Vec::new(), Some(CodecError::Transport(eof)));
            }
            Ok(n) => n,
            Err(source) => return (Vec::new(), Some(CodecError::Transport(source))),
        };

        self.pending.extend_from_slice(&self.read_buffer[..bytes_read]);
        tracing::trace!(bytes_read, pending = self.pending.len(), "transport read");

        let mut extracted = Vec::new();

        while self.pending.len() >= HEADER_LENGTH as usize {
            let advertised = length_of_next_pdu(&self.pending) as usize;

            // A degenerate advertised length still costs the stream its
            // 16-octet header; anything shorter could never advance.
            let frame_length = advertised.max(HEADER_LENGTH as usize);
            if frame_length > self.pending.len() {
                break;
            }

            match Pdu::decode(&self.pending[..frame_length]) {
                Ok(pdu) => {
                    self.pending.advance(frame_length);
                    extracted.push(pdu);
                }
                Err(error) => {
                    self.pending.advance(frame_length);
                    tracing::warn!(%error, frame_length, "dropping undecodable PDU");
                    return (extracted, Some(error));
                }
            }
        }

        (extracted, None)
    }

    /// Read repeatedly until at least one PDU arrives or an error occurs
    pub async fn extract_next_pdus(&mut self) -> Result<Vec<Pdu>, CodecError> {
        loop {
            let (pdus, error) = self.read().await;

            if let Some(error) = error {
                return Err(error);
            }

            if !pdus.is_empty() {
                return Ok(pdus);
            }
        }
    }

    /// Octets read from the transport but not yet consumed as a whole PDU
    pub fn buffered(&self) -> usize {
        self.pending.len()
    }
}
