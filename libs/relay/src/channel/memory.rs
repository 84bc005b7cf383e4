use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt, ReadHalf, SimplexStream, WriteHalf};

use crate::channel::{ReadChannel, WriteChannel};
use crate::error::{Error, Result};

/// Write end of a bounded in-process byte channel
///
/// Backpressure matches a real pipe: once `capacity` unread bytes are
/// buffered, further writes suspend until the reader drains, and a write
/// larger than the remaining room is accepted partially.
pub struct MemoryWriter {
    writer: Option<WriteHalf<SimplexStream>>,
    write_timeout: Option<Duration>,
}

/// Read end of a bounded in-process byte channel
pub struct MemoryReader {
    reader: Option<ReadHalf<SimplexStream>>,
    read_timeout: Option<Duration>,
}

/// Create a connected in-process pair holding at most `capacity` unread bytes
pub fn bounded(capacity: usize) -> (MemoryWriter, MemoryReader) {
    MemoryBuilder::new().create(capacity)
}

#[async_trait::async_trait]
impl WriteChannel for MemoryWriter {
    async fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let writer = self.writer.as_mut().ok_or(Error::EndpointClosed)?;
        let write_op = writer.write(buf);

        if let Some(timeout) = self.write_timeout {
            tokio::time::timeout(timeout, write_op)
                .await
                .map_err(|_| Error::Custom("Write timeout exceeded".to_string()))?
                .map_err(Into::into)
        } else {
            write_op.await.map_err(Into::into)
        }
    }

    async fn close(&mut self) -> Result<()> {
        match self.writer.take() {
            Some(mut writer) => {
                writer.shutdown().await?;
                Ok(())
            }
            None => Err(Error::EndpointClosed),
        }
    }
}

#[async_trait::async_trait]
impl ReadChannel for MemoryReader {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let reader = self.reader.as_mut().ok_or(Error::EndpointClosed)?;
        let read_op = reader.read(buf);

        if let Some(timeout) = self.read_timeout {
            tokio::time::timeout(timeout, read_op)
                .await
                .map_err(|_| Error::Custom("Read timeout exceeded".to_string()))?
                .map_err(Into::into)
        } else {
            read_op.await.map_err(Into::into)
        }
    }

    async fn close(&mut self) -> Result<()> {
        match self.reader.take() {
            Some(reader) => {
                drop(reader);
                Ok(())
            }
            None => Err(Error::EndpointClosed),
        }
    }
}

/// Builder for configuring an in-process pair
#[derive(Default)]
pub struct MemoryBuilder {
    write_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl MemoryBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the write timeout
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = Some(timeout);
        self
    }

    /// Set the read timeout
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Create a connected pair with the configured settings
    pub fn create(self, capacity: usize) -> (MemoryWriter, MemoryReader) {
        let (reader, writer) = tokio::io::simplex(capacity);
        (
            MemoryWriter {
                writer: Some(writer),
                write_timeout: self.write_timeout,
            },
            MemoryReader {
                reader: Some(reader),
                read_timeout: self.read_timeout,
            },
        )
    }
}
