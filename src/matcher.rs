//! Trailing-character matcher.
//!
//! Independent of the sorting code; it shares no types or state with it.

/// Returns `true` if the input ends with the byte `b'a'`.
///
/// # Examples
///
/// ```
/// use pairsort::matcher::ends_with_a;
///
/// assert!(ends_with_a("banana"));
/// assert!(!ends_with_a("abc"));
/// assert!(!ends_with_a(""));
/// ```
pub fn ends_with_a<S: AsRef<[u8]> + ?Sized>(input: &S) -> bool {
    ends_with_byte(input, b'a')
}

/// Returns `true` if some position of the input holds `needle` and is also
/// the last position.
///
/// The scan stops at the first position that satisfies both conditions. An
/// embedded NUL byte is an ordinary byte, not a terminator.
pub fn ends_with_byte<S: AsRef<[u8]> + ?Sized>(input: &S, needle: u8) -> bool {
    let bytes = input.as_ref();
    let len = bytes.len();

    bytes
        .iter()
        .enumerate()
        .any(|(pos, &byte)| byte == needle && pos + 1 == len)
}
