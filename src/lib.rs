//! # growline
//!
//! A library for reading lines from byte streams into a buffer that grows
//! on demand, with failure policy injected by the caller.
//!
//! This crate provides the core functionality for:
//! - Reading one line at a time from any [`std::io::Read`] stream
//! - Growing the destination buffer to the next power-of-two capacity
//! - Reporting allocation and precondition failures through a pluggable hook
//!   instead of panicking or aborting
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`reader`]: The growable line buffer and the read loop
//! - [`bits`]: Power-of-two rounding primitives
//! - [`hook`]: Error-report dispatch and stock hook implementations
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```
//! use growline::{LineBuffer, ReadOutcome, SilentHook};
//! use std::io::Cursor;
//!
//! let hook = SilentHook;
//! let mut buffer = LineBuffer::with_capacity(16, &hook)?;
//! let mut stream = Cursor::new(b"first line\nsecond\n");
//!
//! assert_eq!(buffer.read_line(&mut stream, &hook)?, ReadOutcome::Line(10));
//! assert_eq!(&buffer.as_bytes()[..10], b"first line");
//!
//! assert_eq!(buffer.read_line(&mut stream, &hook)?, ReadOutcome::Line(6));
//! assert_eq!(buffer.read_line(&mut stream, &hook)?, ReadOutcome::Eof);
//! # Ok::<(), growline::Error>(())
//! ```
//!
//! ## Extensibility
//!
//! Failure *policy* is decoupled from failure *detection*: every fallible
//! operation takes an [`ErrorHook`], so the same call site can be made strict
//! or lenient without changing the read logic. Implement the trait to plug in
//! custom policies:
//!
//! ```
//! use growline::{ErrorHook, Report};
//!
//! struct PanicHook;
//!
//! impl ErrorHook for PanicHook {
//!     fn on_error(&self, report: &Report<'_>) {
//!         panic!("{report}");
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod bits;
pub mod error;
pub mod hook;
pub mod reader;

// Re-export primary types for convenience
pub use error::{Error, Result};
pub use hook::{CountingHook, ErrorHook, ErrorKind, FatalHook, Report, SilentHook, StderrHook};
pub use reader::{LineBuffer, ReadOutcome};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
