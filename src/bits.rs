//! Power-of-two rounding primitives.
//!
//! The rounding works by propagating the highest set bit into every lower
//! position with a cascade of OR-shifts, then incrementing. Decrementing
//! first makes the operation a no-op for values that are already powers of
//! two:
//!
//! ```text
//! 5 -> 4 (0b100) -> 0b111 -> +1 -> 8
//! 8 -> 7 (0b111) -> 0b111 -> +1 -> 8
//! ```
//!
//! These feed the buffer-growth schedule in [`reader`](crate::reader), where
//! capacities stay powers of two so repeated growth touches the allocator
//! O(log n) times for an n-byte line.

/// Rounds a 32-bit value up to the next power of two.
///
/// Values that are already powers of two are returned unchanged; `0` rounds
/// to `1`. Values above `1 << 31` have no representable result and are
/// rejected in debug builds.
pub fn round_up_pow2_u32(v: u32) -> u32 {
    debug_assert!(v <= 1u32 << 31, "no power of two above {v} fits in a u32");
    if v == 0 {
        return 1;
    }
    let mut v = v - 1;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v + 1
}

/// Rounds a 64-bit value up to the next power of two.
///
/// Values that are already powers of two are returned unchanged; `0` rounds
/// to `1`. Values above `1 << 63` have no representable result and are
/// rejected in debug builds.
pub fn round_up_pow2_u64(v: u64) -> u64 {
    debug_assert!(v <= 1u64 << 63, "no power of two above {v} fits in a u64");
    if v == 0 {
        return 1;
    }
    let mut v = v - 1;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v |= v >> 32;
    v + 1
}

/// Rounds a pointer-width value up to the next power of two.
///
/// Dispatches to the matching fixed-width variant for the target.
#[cfg(target_pointer_width = "64")]
pub fn round_up_pow2(v: usize) -> usize {
    round_up_pow2_u64(v as u64) as usize
}

/// Rounds a pointer-width value up to the next power of two.
///
/// Dispatches to the matching fixed-width variant for the target.
#[cfg(target_pointer_width = "32")]
pub fn round_up_pow2(v: usize) -> usize {
    round_up_pow2_u32(v as u32) as usize
}
