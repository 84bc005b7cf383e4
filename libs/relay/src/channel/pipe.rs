use std::os::fd::OwnedFd;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::unix::pipe;

use crate::channel::{ReadChannel, WriteChannel};
use crate::error::{Error, Result};

/// Write end of an anonymous OS pipe
///
/// The kernel buffer gives the pipe its bounded capacity: writes larger
/// than the remaining room are accepted partially, and writes against a
/// full pipe suspend until the peer drains.
pub struct PipeWriter {
    sender: Option<pipe::Sender>,
    write_timeout: Option<Duration>,
}

/// Read end of an anonymous OS pipe
pub struct PipeReader {
    receiver: Option<pipe::Receiver>,
    read_timeout: Option<Duration>,
}

/// Create a connected pipe pair with no timeouts
pub fn pair() -> Result<(PipeWriter, PipeReader)> {
    PipeBuilder::new().create()
}

impl PipeWriter {
    /// Wrap a write end supplied by an external process-spawning layer
    pub fn from_owned_fd(fd: OwnedFd) -> Result<Self> {
        Ok(Self {
            sender: Some(pipe::Sender::from_owned_fd(fd)?),
            write_timeout: None,
        })
    }
}

impl PipeReader {
    /// Wrap a read end supplied by an external process-spawning layer
    pub fn from_owned_fd(fd: OwnedFd) -> Result<Self> {
        Ok(Self {
            receiver: Some(pipe::Receiver::from_owned_fd(fd)?),
            read_timeout: None,
        })
    }
}

#[async_trait::async_trait]
impl WriteChannel for PipeWriter {
    async fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let sender = self.sender.as_mut().ok_or(Error::EndpointClosed)?;
        let write_op = sender.write(buf);

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
        // Dropping the descriptor is what the peer observes as end-of-stream.
        match self.sender.take() {
            Some(sender) => {
                drop(sender);
                Ok(())
            }
            None => Err(Error::EndpointClosed),
        }
    }
}

#[async_trait::async_trait]
impl ReadChannel for PipeReader {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let receiver = self.receiver.as_mut().ok_or(Error::EndpointClosed)?;
        let read_op = receiver.read(buf);

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
        match self.receiver.take() {
            Some(receiver) => {
                drop(receiver);
                Ok(())
            }
            None => Err(Error::EndpointClosed),
        }
    }
}

/// Builder for configuring a pipe pair
#[derive(Default)]
pub struct PipeBuilder {
    write_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl PipeBuilder {
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
    pub fn create(self) -> Result<(PipeWriter, PipeReader)> {
        let (sender, receiver) = pipe::pipe()?;
        Ok((
            PipeWriter {
                sender: Some(sender),
                write_timeout: self.write_timeout,
            },
            PipeReader {
                receiver: Some(receiver),
                read_timeout: self.read_timeout,
            },
        ))
    }
}
