//! Circular catalog navigation over `[1, size]`.

use urpg_core::constants::FIRST_DEXNO;

/// Successor of `dexno`; the last index wraps to the first.
pub fn next_dex(dexno: i32, size: i32) -> i32 {
    if dexno >= size {
        FIRST_DEXNO
    } else {
        dexno + 1
    }
}

/// Predecessor of `dexno`; the first index wraps to the last.
pub fn prev_dex(dexno: i32, size: i32) -> i32 {
    if dexno <= FIRST_DEXNO {
        size
    } else {
        dexno - 1
    }
}
