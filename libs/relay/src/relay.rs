use crate::channel::{memory, pipe, ReadChannel, WriteChannel};
use crate::consumer::Consumer;
use crate::error::{Error, Result};
use crate::producer::Producer;
use crate::record::Record;

/// Run one complete transfer over an already-connected pair
///
/// The producer runs as its own task while the consumer drains inline.
/// The write end is released on every producer exit path, including the
/// fatal ones, so the drain always observes end-of-stream; the producer's
/// own error surfaces after the join.
pub async fn relay<W>(writer: W, reader: impl ReadChannel, records: Vec<Record>) -> Result<Vec<u8>>
where
    W: WriteChannel + 'static,
{
    let producer = tokio::spawn(Producer::new(writer).run(records));
    let payload = Consumer::new(reader).drain().await?;
    producer
        .await
        .map_err(|e| Error::Custom(format!("producer task failed: {e}")))??;
    Ok(payload)
}

/// One-off transfer over a fresh OS pipe
pub async fn relay_pipe(records: Vec<Record>) -> Result<Vec<u8>> {
    let (writer, reader) = pipe::pair()?;
    relay(writer, reader, records).await
}

/// One-off transfer over a fresh in-process channel of the given capacity
pub async fn relay_memory(capacity: usize, records: Vec<Record>) -> Result<Vec<u8>> {
    let (writer, reader) = memory::bounded(capacity);
    relay(writer, reader, records).await
}
