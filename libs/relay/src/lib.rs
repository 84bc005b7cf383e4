//! Culvert Relay - Reliable byte-stream relay over a bounded unidirectional channel
//!
//! A producer pushes null-terminated text records through a
//! bounded-capacity byte channel, resuming on partial writes; a consumer
//! drains the channel in fixed-size chunks into a dynamically growing
//! buffer until a zero-length read signals end-of-stream. The assembled
//! payload is the byte-for-byte concatenation of everything written, in
//! write order.
//!
//! # Example
//!
//! ```no_run
//! use culvert_relay::{channel::pipe, relay::relay_memory, Consumer, Producer, Record};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Five decimal numerals, each travelling with its null terminator
//! let records: Vec<Record> = (0u32..5).map(Record::from).collect();
//! let payload = relay_memory(64, records).await?;
//! assert_eq!(payload, b"0\x001\x002\x003\x004\x00");
//!
//! // Or wire the roles up by hand over a real OS pipe
//! let (writer, reader) = pipe::pair()?;
//! let records: Vec<Record> = (0u32..5).map(Record::from).collect();
//! let producer = tokio::spawn(Producer::new(writer).run(records));
//! let payload = Consumer::new(reader).drain().await?;
//! producer.await??;
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod channel;
pub mod consumer;
pub mod error;
pub mod producer;
pub mod record;
pub mod relay;

// Re-exports for convenience
pub use buffer::ReceiveBuffer;
pub use consumer::{Consumer, DEFAULT_CHUNK_SIZE};
pub use error::{Error, Result};
pub use producer::{Producer, SendCursor};
pub use record::{split_records, Record};
