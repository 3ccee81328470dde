//! Incremental UTF-8 decoding of the reply byte stream.

use futures::{Stream, StreamExt};

use crate::error::{ClientError, DecodeError};
use crate::transport::ReplyStream;

/// Stateful UTF-8 decoder for a chunked byte stream.
///
/// A multi-byte character split across a chunk boundary is carried over and
/// decoded once the rest of it arrives, instead of surfacing as two garbled
/// fragments. The carry-over is at most three bytes.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    pending: Vec<u8>,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk, returning the text it completes.
    pub fn decode(&mut self, chunk: &[u8]) -> Result<String, DecodeError> {
        if self.pending.is_empty() && chunk.is_empty() {
            return Ok(String::new());
        }

        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);

        match std::str::from_utf8(&bytes) {
            Ok(text) => Ok(text.to_string()),
            Err(err) => {
                let valid = err.valid_up_to();
                if err.error_len().is_some() {
                    return Err(DecodeError::Malformed { offset: valid });
                }
                // Incomplete trailing sequence: hold it for the next chunk.
                let text = String::from_utf8_lossy(&bytes[..valid]).into_owned();
                self.pending = bytes[valid..].to_vec();
                Ok(text)
            }
        }
    }

    /// Signal end-of-stream. Dangling partial bytes are malformed input.
    pub fn finish(self) -> Result<(), DecodeError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::Truncated)
        }
    }
}

/// Wrap a reply byte stream into a lazy, finite sequence of text increments.
///
/// Increments come out in arrival order and concatenate to exactly the text
/// the bytes represent. The stream terminates when the source does; it is not
/// restartable.
pub fn decode_stream(bytes: ReplyStream) -> impl Stream<Item = Result<String, ClientError>> + Send {
    async_stream::try_stream! {
        let mut decoder = StreamDecoder::new();
        let mut bytes = bytes;
        while let Some(chunk) = bytes.next().await {
            let chunk = chunk?;
            let text = decoder.decode(&chunk)?;
            if !text.is_empty() {
                yield text;
            }
        }
        decoder.finish()?;
    }
}
