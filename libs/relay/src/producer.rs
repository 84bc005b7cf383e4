use log::{debug, trace};

use crate::channel::WriteChannel;
use crate::error::{Error, Result};
use crate::record::Record;

/// Tracks how much of one record's wire form the channel has accepted
///
/// Drives the partial-write retry: the unsent suffix shrinks by exactly
/// the accepted count on every call, so bytes are never resent and never
/// skipped. Sending is complete when the remainder reaches zero.
#[derive(Debug, Clone, Copy)]
pub struct SendCursor {
    sent: usize,
    total: usize,
}

impl SendCursor {
    /// Start a cursor over `total` bytes, none of them sent yet
    pub fn new(total: usize) -> Self {
        Self { sent: 0, total }
    }

    /// Bytes the channel has accepted so far
    pub fn sent(&self) -> usize {
        self.sent
    }

    /// The unsent suffix of `data`
    pub fn remaining<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        debug_assert_eq!(data.len(), self.total);
        &data[self.sent..]
    }

    /// Advance past `accepted` bytes the channel took
    pub fn advance(&mut self, accepted: usize) {
        debug_assert!(self.sent + accepted <= self.total);
        self.sent += accepted;
    }

    pub fn is_complete(&self) -> bool {
        self.sent == self.total
    }
}

/// Producer role: pushes records onto the write end of a channel
pub struct Producer<W> {
    channel: W,
}

impl<W: WriteChannel> Producer<W> {
    /// Create a producer over a write endpoint
    pub fn new(channel: W) -> Self {
        Self { channel }
    }

    /// Transmit one record in full, resuming on partial acceptance
    ///
    /// A transport error aborts immediately; a zero-byte acceptance for a
    /// non-empty remainder means the peer is gone and is fatal too.
    pub async fn send(&mut self, record: &Record) -> Result<()> {
        let bytes = record.to_bytes();
        let mut cursor = SendCursor::new(bytes.len());
        while !cursor.is_complete() {
            let accepted = self.channel.write(cursor.remaining(&bytes)).await?;
            if accepted == 0 {
                return Err(Error::ChannelClosed);
            }
            cursor.advance(accepted);
            trace!(
                "record {:?}: {}/{} bytes accepted",
                record.text(),
                cursor.sent(),
                bytes.len()
            );
        }
        Ok(())
    }

    /// Close the write end — the sole termination signal the peer gets
    pub async fn finish(mut self) -> Result<()> {
        self.channel.close().await
    }

    /// Send every record in order, then close the write end
    pub async fn run(mut self, records: impl IntoIterator<Item = Record>) -> Result<()> {
        let mut count = 0usize;
        for record in records {
            self.send(&record).await?;
            count += 1;
        }
        debug!("producer done: {count} records sent");
        self.finish().await
    }
}
