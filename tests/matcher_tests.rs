use pairsort::matcher::{ends_with_a, ends_with_byte};

#[test]
fn test_matches_trailing_a() {
    assert!(ends_with_a("a"));
    assert!(ends_with_a("ba"));
    assert!(ends_with_a("aaa"));
    assert!(ends_with_a("banana"));
}

#[test]
fn test_rejects_other_endings() {
    assert!(!ends_with_a(""));
    assert!(!ends_with_a("b"));
    assert!(!ends_with_a("ab"));
    assert!(!ends_with_a("aaab"));
    assert!(!ends_with_a("A"));
}

#[test]
fn test_accepts_bytes_and_owned_strings() {
    assert!(ends_with_a(b"xyza".as_slice()));
    assert!(ends_with_a(&String::from("pasta")));
    assert!(!ends_with_a(&vec![b'a', b'b']));
}

#[test]
fn test_nul_is_an_ordinary_byte() {
    assert!(ends_with_a(b"b\0a".as_slice()));
    assert!(!ends_with_a(b"a\0".as_slice()));
}

#[test]
fn test_ends_with_byte() {
    assert!(ends_with_byte("hello", b'o'));
    assert!(!ends_with_byte("hello", b'l'));
    assert!(!ends_with_byte("", b'o'));
}
