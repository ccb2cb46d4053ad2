//! Fallible allocation helpers.
//!
//! Plain `Vec` growth aborts the process when the allocator gives up. These
//! helpers reserve fallibly instead, invoke the caller's
//! [`ErrorHook`](crate::hook::ErrorHook) with [`ErrorKind::Alloc`] and the
//! requesting source location, and return an error the caller can act on.
//!
//! Source locations chain through `#[track_caller]`, so a report names the
//! code that asked for memory, not these helpers.

use crate::error::{Error, Result};
use crate::hook::{ErrorHook, ErrorKind, Report};

/// Allocates a zero-filled buffer of exactly `capacity` bytes.
///
/// A zero-byte request succeeds and returns an empty, unallocated vector.
///
/// # Errors
///
/// Returns [`Error::Alloc`] when the reservation fails, after reporting
/// through `hook`.
#[track_caller]
pub fn zeroed(capacity: usize, hook: &dyn ErrorHook) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    if buf.try_reserve_exact(capacity).is_err() {
        hook.on_error(&Report::new(ErrorKind::Alloc, None));
        return Err(Error::alloc(capacity));
    }
    buf.resize(capacity, 0);
    Ok(buf)
}

/// Grows `buf` to `new_capacity` bytes, zero-filling the added tail.
///
/// Does nothing when the buffer already holds at least `new_capacity` bytes.
/// Existing contents are preserved.
///
/// # Errors
///
/// Returns [`Error::Alloc`] when the reservation fails, after reporting
/// through `hook`. On failure `buf` is left unchanged.
#[track_caller]
pub fn grow_zeroed(buf: &mut Vec<u8>, new_capacity: usize, hook: &dyn ErrorHook) -> Result<()> {
    let Some(additional) = new_capacity.checked_sub(buf.len()) else {
        return Ok(());
    };
    if buf.try_reserve_exact(additional).is_err() {
        hook.on_error(&Report::new(ErrorKind::Alloc, None));
        return Err(Error::alloc(additional));
    }
    buf.resize(new_capacity, 0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::{CountingHook, SilentHook};

    #[test]
    fn test_zeroed_is_zero_filled() {
        let buf = zeroed(64, &SilentHook).unwrap();
        assert_eq!(buf.len(), 64);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zeroed_failure_reports_and_returns_error() {
        let hook = CountingHook::new();
        // An impossible reservation fails deterministically without OOM-ing
        // the test host.
        let err = zeroed(usize::MAX, &hook).unwrap_err();
        assert!(matches!(err, Error::Alloc { requested: usize::MAX }));
        assert_eq!(hook.count(ErrorKind::Alloc), 1);
    }

    #[test]
    fn test_grow_zeroed_preserves_contents() {
        let mut buf = vec![7u8; 4];
        grow_zeroed(&mut buf, 16, &SilentHook).unwrap();
        assert_eq!(buf.len(), 16);
        assert_eq!(&buf[..4], &[7, 7, 7, 7]);
        assert!(buf[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_grow_zeroed_smaller_target_is_a_no_op() {
        let mut buf = vec![7u8; 8];
        grow_zeroed(&mut buf, 4, &SilentHook).unwrap();
        assert_eq!(buf, vec![7u8; 8]);
    }

    #[test]
    fn test_grow_zeroed_failure_leaves_buffer_unchanged() {
        let hook = CountingHook::new();
        let mut buf = vec![1u8, 2, 3];
        assert!(grow_zeroed(&mut buf, usize::MAX - 8, &hook).is_err());
        assert_eq!(buf, vec![1, 2, 3]);
        assert_eq!(hook.count(ErrorKind::Alloc), 1);
    }
}
