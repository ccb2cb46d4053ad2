//! Error-report dispatch.
//!
//! Operations that can fail take an [`ErrorHook`] and invoke it with a
//! [`Report`] before returning an error, separating failure *detection* from
//! failure *policy*. The stock hooks cover the usual policies: ignore
//! ([`SilentHook`]), log ([`StderrHook`]), terminate ([`FatalHook`]), and
//! count ([`CountingHook`]).
//!
//! Hooks are passed explicitly; there is no process-wide sink. The library is
//! single-threaded by construction and never requires `Send + Sync` of a
//! hook. The core logic never terminates the process itself — only a hook
//! configured to do so may.

use std::cell::Cell;
use std::fmt;
use std::panic::Location;

/// Classes of failure reported through an [`ErrorHook`].
///
/// `Free` and `InvalidPath` are part of the taxonomy but are currently
/// reported by no operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorKind {
    /// Memory could not be allocated
    Alloc = 1,
    /// Memory could not be released
    Free = 2,
    /// Null or otherwise invalid argument
    InvalidArgument = 3,
    /// Malformed filesystem path
    InvalidPath = 4,
}

impl ErrorKind {
    /// Numeric code included in diagnostics
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Fixed description for this kind.
    ///
    /// Returns a static string so reporting never allocates, even when the
    /// failure being reported is an out-of-memory condition.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Alloc => "could not allocate memory",
            ErrorKind::Free => "could not free memory",
            ErrorKind::InvalidArgument => "invalid value passed to function expecting valid input",
            ErrorKind::InvalidPath => "bad path passed to function expecting valid filesystem path",
        }
    }
}

/// A single failure report: what went wrong, and where.
///
/// The source location is captured at the reporting call site via
/// `#[track_caller]`, so diagnostics point at the code that requested the
/// failing operation rather than at the hook machinery.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    kind: ErrorKind,
    detail: Option<&'a str>,
    location: &'static Location<'static>,
}

impl<'a> Report<'a> {
    /// Creates a report for the caller's source location
    #[track_caller]
    pub fn new(kind: ErrorKind, detail: Option<&'a str>) -> Self {
        Self {
            kind,
            detail,
            location: Location::caller(),
        }
    }

    /// The class of failure
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Optional free-form context supplied by the reporting site
    pub fn detail(&self) -> Option<&str> {
        self.detail
    }

    /// Source file of the reporting call site
    pub fn file(&self) -> &str {
        self.location.file()
    }

    /// Source line of the reporting call site
    pub fn line(&self) -> u32 {
        self.location.line()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}: {}] {}: {}",
            self.file(),
            self.line(),
            self.kind.code(),
            self.kind.message()
        )?;
        if let Some(detail) = self.detail {
            write!(f, " -- {detail}")?;
        }
        Ok(())
    }
}

/// Trait for receiving failure reports.
///
/// Implement this to customize what happens when an operation fails. The
/// return value of the operation itself is unaffected by the hook; a hook can
/// only add side effects, up to and including ending the process.
pub trait ErrorHook {
    /// Called synchronously at the point of failure
    fn on_error(&self, report: &Report<'_>);
}

/// A hook that discards all reports
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentHook;

impl ErrorHook for SilentHook {
    fn on_error(&self, _report: &Report<'_>) {}
}

/// A hook that writes a diagnostic line to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrHook;

impl ErrorHook for StderrHook {
    fn on_error(&self, report: &Report<'_>) {
        eprintln!("{report}");
    }
}

/// A hook that writes a diagnostic line to stderr, then ends the process.
///
/// The exit code defaults to `1` and can be chosen at construction, for
/// callers that fold library failures into their own exit-code conventions.
#[derive(Debug, Clone, Copy)]
pub struct FatalHook {
    code: i32,
}

impl FatalHook {
    /// Creates a hook that exits with code `1`
    pub fn new() -> Self {
        Self { code: 1 }
    }

    /// Creates a hook that exits with the given code
    pub fn with_code(code: i32) -> Self {
        Self { code }
    }
}

impl Default for FatalHook {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorHook for FatalHook {
    fn on_error(&self, report: &Report<'_>) {
        eprintln!("{report}");
        std::process::exit(self.code);
    }
}

/// A hook that counts reports per kind.
///
/// Useful in tests and as lightweight instrumentation when failures should be
/// tolerated but tallied.
#[derive(Debug, Default)]
pub struct CountingHook {
    alloc: Cell<usize>,
    free: Cell<usize>,
    invalid_argument: Cell<usize>,
    invalid_path: Cell<usize>,
}

impl CountingHook {
    /// Creates a hook with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reports seen for the given kind
    pub fn count(&self, kind: ErrorKind) -> usize {
        match kind {
            ErrorKind::Alloc => self.alloc.get(),
            ErrorKind::Free => self.free.get(),
            ErrorKind::InvalidArgument => self.invalid_argument.get(),
            ErrorKind::InvalidPath => self.invalid_path.get(),
        }
    }

    /// Total number of reports seen
    pub fn total(&self) -> usize {
        self.alloc.get() + self.free.get() + self.invalid_argument.get() + self.invalid_path.get()
    }
}

impl ErrorHook for CountingHook {
    fn on_error(&self, report: &Report<'_>) {
        let counter = match report.kind() {
            ErrorKind::Alloc => &self.alloc,
            ErrorKind::Free => &self.free,
            ErrorKind::InvalidArgument => &self.invalid_argument,
            ErrorKind::InvalidPath => &self.invalid_path,
        };
        counter.set(counter.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_are_distinct() {
        let kinds = [
            ErrorKind::Alloc,
            ErrorKind::Free,
            ErrorKind::InvalidArgument,
            ErrorKind::InvalidPath,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.code(), b.code());
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn test_report_captures_call_site() {
        let report = Report::new(ErrorKind::Alloc, None);
        assert!(report.file().ends_with("hook.rs"));
        assert!(report.line() > 0);
    }

    #[test]
    fn test_report_display() {
        let report = Report::new(ErrorKind::Alloc, Some("growing line buffer"));
        let text = report.to_string();
        assert!(text.contains("could not allocate memory"));
        assert!(text.contains("growing line buffer"));
        assert!(text.contains("hook.rs"));

        let bare = Report::new(ErrorKind::InvalidPath, None).to_string();
        assert!(!bare.contains("--"));
    }

    #[test]
    fn test_counting_hook() {
        let hook = CountingHook::new();
        hook.on_error(&Report::new(ErrorKind::Alloc, None));
        hook.on_error(&Report::new(ErrorKind::Alloc, None));
        hook.on_error(&Report::new(ErrorKind::InvalidArgument, None));

        assert_eq!(hook.count(ErrorKind::Alloc), 2);
        assert_eq!(hook.count(ErrorKind::InvalidArgument), 1);
        assert_eq!(hook.count(ErrorKind::Free), 0);
        assert_eq!(hook.total(), 3);
    }

    #[test]
    fn test_silent_hook_is_a_no_op() {
        SilentHook.on_error(&Report::new(ErrorKind::Free, Some("ignored")));
    }
}
