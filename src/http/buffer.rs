//! Bounded accumulator for inbound response bytes.

use heapless::Vec;

use crate::net::error::Error;

/// Hard ceiling on buffered, not-yet-consumed response bytes.
///
/// An inbound delivery that would grow the buffer past this bound fails the
/// connection instead of growing further.
pub const RECV_CEILING: usize = 4096;

/// Receive buffer with a hard size ceiling.
///
/// Inbound deliveries are appended at the tail; the parser consumes from the
/// head and compacts the remainder down. Once an append has been refused the
/// buffer is discarded: the partial response it held must not be interpreted,
/// and every further operation fails.
#[derive(Debug)]
pub(crate) struct RecvBuffer {
    data: Vec<u8, RECV_CEILING>,
    discarded: bool,
}

impl RecvBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            data: Vec::new(),
            discarded: false,
        }
    }

    /// Append bytes at the tail.
    ///
    /// If the result would exceed the ceiling, existing content is left
    /// untouched, the buffer becomes discarded and `BufferOverflow` is
    /// returned.
    pub(crate) fn append(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if self.discarded || self.data.extend_from_slice(bytes).is_err() {
            self.discarded = true;
            return Err(Error::BufferOverflow);
        }
        Ok(())
    }

    /// Drop the first `n` bytes, moving the remainder to the front.
    pub(crate) fn consume(&mut self, n: usize) {
        let len = self.data.len();
        let n = n.min(len);
        self.data.copy_within(n..len, 0);
        self.data.truncate(len - n);
    }

    /// Drop the whole content, keeping the buffer usable.
    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
