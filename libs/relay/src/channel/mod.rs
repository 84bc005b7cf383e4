use crate::error::Result;

pub mod memory;
pub mod pipe;

pub use self::memory::{MemoryReader, MemoryWriter};
pub use self::pipe::{PipeReader, PipeWriter};

/// Write end of a unidirectional byte channel
///
/// A call may accept fewer bytes than offered; partial acceptance is
/// success, and the caller resumes with the unsent suffix. `write`
/// suspends until the channel can take at least one byte, so a peer that
/// never drains blocks the caller indefinitely unless the endpoint was
/// built with a write timeout.
#[async_trait::async_trait]
pub trait WriteChannel: Send {
    /// Write bytes, returning how many the channel accepted
    async fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Release the endpoint
    ///
    /// Must be called exactly once; a second close reports
    /// `Error::EndpointClosed`. Closing the write end is what the peer
    /// observes as end-of-stream.
    async fn close(&mut self) -> Result<()>;
}

/// Read end of a unidirectional byte channel
///
/// A call may return fewer bytes than requested; partial delivery is
/// success. A return of zero means the peer closed its write end and the
/// buffered bytes are drained — end-of-stream, not an error. `read`
/// suspends until at least one byte is available or the stream ends.
#[async_trait::async_trait]
pub trait ReadChannel: Send {
    /// Read up to `buf.len()` bytes, returning how many arrived
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Release the endpoint
    ///
    /// Must be called exactly once; a second close reports
    /// `Error::EndpointClosed`.
    async fn close(&mut self) -> Result<()>;
}

#[async_trait::async_trait]
impl<T: WriteChannel + ?Sized> WriteChannel for &mut T {
    async fn write(&mut self, buf: &[u8]) -> Result<usize> {
        (**self).write(buf).await
    }

    async fn close(&mut self) -> Result<()> {
        (**self).close().await
    }
}

#[async_trait::async_trait]
impl<T: ReadChannel + ?Sized> ReadChannel for &mut T {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf).await
    }

    async fn close(&mut self) -> Result<()> {
        (**self).close().await
    }
}
