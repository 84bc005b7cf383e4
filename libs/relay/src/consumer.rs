use log::{debug, trace};

use crate::buffer::ReceiveBuffer;
use crate::channel::ReadChannel;
use crate::error::Result;

/// Bytes requested per read call
///
/// Smaller values increase the call count; larger values increase how
/// long bytes sit in the channel before becoming visible.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Consumer role: drains the read end of a channel into a growing buffer
pub struct Consumer<R> {
    channel: R,
    chunk_size: usize,
}

impl<R: ReadChannel> Consumer<R> {
    /// Create a consumer over a read endpoint
    pub fn new(channel: R) -> Self {
        Self {
            channel,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Override the per-read chunk size
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = bytes.max(1);
        self
    }

    /// Read until end-of-stream, then close the read end and return the
    /// assembled payload
    ///
    /// Each iteration grows the buffer so a full chunk fits past the
    /// received prefix, reads into that window, and advances by exactly
    /// the bytes that arrived. A transport error or a failed growth
    /// aborts the transfer. A peer that never closes its write end stalls
    /// this loop indefinitely unless the endpoint carries a read timeout.
    pub async fn drain(mut self) -> Result<Vec<u8>> {
        let mut buffer = ReceiveBuffer::new();
        loop {
            let chunk = buffer.chunk_mut(self.chunk_size)?;
            let received = self.channel.read(chunk).await?;
            if received == 0 {
                break;
            }
            buffer.commit(received);
            trace!("{received} bytes received ({} total)", buffer.len());
        }
        self.channel.close().await?;
        debug!("consumer done: {} bytes assembled", buffer.len());
        Ok(buffer.into_bytes())
    }
}
