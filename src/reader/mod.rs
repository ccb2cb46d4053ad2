//! Growable line reading.
//!
//! This module implements the line-reading loop over a buffer whose capacity
//! is grown to the next power of two whenever a line outgrows it.
//!
//! ## Algorithm Overview
//!
//! 1. Pull one byte at a time from the stream
//! 2. On the line terminator, replace it with a NUL and return the length
//! 3. Before storing a data byte, grow the buffer if the byte plus the
//!    trailing NUL would not fit
//! 4. On end-of-stream, NUL-terminate and report whether any bytes were read
//!
//! Growth requests round `capacity + 1` up to the next power of two, so a
//! line of n bytes reallocates O(log n) times regardless of the starting
//! capacity.
//!
//! Byte-at-a-time reads keep the loop simple and the buffer free of
//! overshoot; a chunked variant would need to hand unread bytes back to the
//! stream.
//!
//! ## Failure policy
//!
//! Out-of-memory and precondition violations are reported through the
//! caller's [`ErrorHook`] before the call returns an error, so one call site
//! can be strict (terminate) and another lenient (log and continue) with the
//! same read logic. See [`hook`](crate::hook).

mod alloc;

pub use alloc::{grow_zeroed, zeroed};

use crate::bits::round_up_pow2;
use crate::error::{Error, Result};
use crate::hook::{ErrorHook, ErrorKind, Report};
use std::io::{self, Read};
use tracing::trace;

/// Byte that ends a line. It is consumed, never stored.
const LINE_TERMINATOR: u8 = b'\n';

/// Outcome of a single [`LineBuffer::read_line`] call.
///
/// End-of-stream with buffered bytes and end-of-stream without are distinct
/// variants, so callers decide for themselves whether a missing trailing
/// terminator still counts as a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A terminator-delimited line of this many bytes
    Line(usize),
    /// The stream ended after this many bytes, with no terminator
    Unterminated(usize),
    /// The stream was already exhausted; no bytes were read
    Eof,
}

impl ReadOutcome {
    /// Number of line bytes now in the buffer, if any were read
    pub const fn len(&self) -> Option<usize> {
        match self {
            Self::Line(n) | Self::Unterminated(n) => Some(*n),
            Self::Eof => None,
        }
    }

    /// Returns true only for the exhausted-stream outcome
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }
}

/// A heap buffer whose capacity grows to the next power of two on demand.
///
/// The buffer tracks capacity only; line length is returned per call and not
/// retained. After [`read_line`](Self::read_line) returns, the first `len`
/// bytes hold the line and the byte at index `len` is NUL.
///
/// Capacity invariant: at least 1 once constructed non-empty, and a power of
/// two after any growth. Reads that fit never reallocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    /// Backing storage, kept zero-extended to the full capacity
    buf: Vec<u8>,
}

impl LineBuffer {
    /// Allocates a buffer with exactly the given capacity.
    ///
    /// A zero capacity is accepted but unusable: every read against it fails
    /// the non-empty precondition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] when the allocation fails, after reporting
    /// through `hook`.
    #[track_caller]
    pub fn with_capacity(capacity: usize, hook: &dyn ErrorHook) -> Result<Self> {
        Ok(Self {
            buf: zeroed(capacity, hook)?,
        })
    }

    /// Current capacity in bytes
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The whole buffer region, line bytes and zeroed tail alike.
    ///
    /// Slice with the length from [`ReadOutcome`] to get the line itself.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Reads one line from `stream` into the buffer, growing it as needed.
    ///
    /// The terminator is consumed and replaced by a NUL; the returned length
    /// excludes both. The buffer only ever grows — a long line leaves its
    /// capacity in place for subsequent calls.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the buffer has zero capacity, after an
    ///   [`ErrorKind::InvalidArgument`] report through `hook`
    /// - [`Error::Alloc`] if growth fails, after an [`ErrorKind::Alloc`]
    ///   report through `hook`
    /// - [`Error::Io`] if the stream fails with a real I/O error
    #[track_caller]
    pub fn read_line(&mut self, mut stream: impl Read, hook: &dyn ErrorHook) -> Result<ReadOutcome> {
        if self.buf.is_empty() {
            let details = "line buffer has zero capacity";
            hook.on_error(&Report::new(ErrorKind::InvalidArgument, Some(details)));
            return Err(Error::invalid_argument(details));
        }

        let mut len = 0;
        loop {
            let byte = match read_byte(&mut stream)? {
                Some(byte) => byte,
                None => {
                    self.buf[len] = 0;
                    return Ok(if len == 0 {
                        ReadOutcome::Eof
                    } else {
                        ReadOutcome::Unterminated(len)
                    });
                }
            };

            if byte == LINE_TERMINATOR {
                self.buf[len] = 0;
                return Ok(ReadOutcome::Line(len));
            }

            // Keep room for this byte plus the trailing NUL.
            if len + 2 > self.buf.len() {
                self.grow(hook)?;
            }
            self.buf[len] = byte;
            len += 1;
        }
    }

    /// Grows capacity to the next power of two above the current capacity.
    fn grow(&mut self, hook: &dyn ErrorHook) -> Result<()> {
        let new_capacity = round_up_pow2(self.buf.len() + 1);
        trace!(
            old = self.buf.len(),
            new = new_capacity,
            "growing line buffer"
        );
        grow_zeroed(&mut self.buf, new_capacity, hook)
    }
}

/// Pulls a single byte, retrying interrupted reads. `None` is end-of-stream.
fn read_byte(stream: &mut impl Read) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match stream.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}
