use super::*;

#[test]
fn empty_set_has_no_members() {
    assert!(ByteSet::EMPTY.is_empty());
    assert_eq!(ByteSet::EMPTY.len(), 0);
    assert!((0..=u8::MAX).all(|b| !ByteSet::EMPTY.contains(b)));
}

#[test]
fn members_across_all_words() {
    // One byte per 64-bit lane, plus the extremes.
    let set = ByteSet::new(&[0x00, 0x3F, 0x40, 0x7F, 0x80, 0xC0, 0xFF]);
    for b in [0x00, 0x3F, 0x40, 0x7F, 0x80, 0xC0, 0xFF] {
        assert!(set.contains(b), "missing {b:#04x}");
    }
    assert!(!set.contains(0x01));
    assert!(!set.contains(0xFE));
    assert_eq!(set.len(), 7);
}

#[test]
fn duplicates_count_once() {
    let set = ByteSet::new(b"::==");
    assert_eq!(set.len(), 2);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![b':', b'=']);
}

#[test]
fn disjointness() {
    let digits = ByteSet::new(b"0123456789");
    let spaces = ByteSet::new(b" \t\r\n");
    let mixed = ByteSet::new(b"9 ");
    assert!(digits.is_disjoint(&spaces));
    assert!(!digits.is_disjoint(&mixed));
    assert!(!spaces.is_disjoint(&mixed));
    assert!(ByteSet::EMPTY.is_disjoint(&digits));
}

#[test]
fn usable_in_const_context() {
    const BRACES: ByteSet = ByteSet::new(b"{}");
    const HAS_OPEN: bool = BRACES.contains(b'{');
    assert!(HAS_OPEN);
    assert_eq!(BRACES.len(), 2);
}

#[test]
fn debug_lists_members() {
    assert_eq!(format!("{:?}", ByteSet::new(b"ba\n")), r#"ByteSet("\nab")"#);
}
