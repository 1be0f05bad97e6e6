//! Flat memory image tests.

use mipsim_core::common::SimError;
use mipsim_core::mem::Memory;

#[test]
fn test_new_memory_is_zero_filled() {
    let mem = Memory::new(64);
    assert_eq!(mem.len(), 64);
    for addr in 0..64 {
        assert_eq!(mem.read_byte(addr).unwrap(), 0);
    }
}

#[test]
fn test_word_roundtrip() {
    let mut mem = Memory::new(64);
    mem.write_word(8, 0xDEAD_BEEF).unwrap();
    assert_eq!(mem.read_word(8).unwrap(), 0xDEAD_BEEF);
}

#[test]
fn test_words_are_little_endian() {
    let mut mem = Memory::new(64);
    mem.write_word(0, 0x1122_3344).unwrap();
    assert_eq!(mem.read_byte(0).unwrap(), 0x44);
    assert_eq!(mem.read_byte(3).unwrap(), 0x11);
}

#[test]
fn test_word_access_must_fit_entirely() {
    let mut mem = Memory::new(64);
    assert!(matches!(
        mem.read_word(61),
        Err(SimError::AccessOutOfRange { addr: 61, len: 4, .. })
    ));
    assert!(mem.write_word(63, 1).is_err());
    // The last fully-contained word is fine.
    assert!(mem.write_word(60, 1).is_ok());
}

#[test]
fn test_byte_access_bounds() {
    let mut mem = Memory::new(64);
    assert!(mem.read_byte(63).is_ok());
    assert!(mem.read_byte(64).is_err());
    assert!(mem.write_byte(64, 1).is_err());
}

#[test]
fn test_load_at_places_bytes() {
    let mut mem = Memory::new(64);
    mem.load_at(10, &[1, 2, 3]).unwrap();
    assert_eq!(mem.read_byte(10).unwrap(), 1);
    assert_eq!(mem.read_byte(12).unwrap(), 3);
}

#[test]
fn test_load_at_rejects_overflow() {
    let mut mem = Memory::new(16);
    let err = mem.load_at(8, &[0; 9]).unwrap_err();
    assert!(matches!(err, SimError::ImageBounds { size: 9, base: 8, mem_size: 16 }));
}
