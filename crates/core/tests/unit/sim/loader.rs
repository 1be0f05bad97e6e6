//! Raw-image loader tests.

use std::io::Write;

use mipsim_core::common::SimError;
use mipsim_core::mem::Memory;
use mipsim_core::sim::loader;
use tempfile::NamedTempFile;

use crate::common::encode;
use crate::common::harness::{TestContext, TEXT_BASE};

fn temp_image(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_image_places_bytes_at_base() {
    let words = [encode::addiu(8, 0, 5), encode::syscall()];
    let mut bytes = Vec::new();
    for w in words {
        bytes.extend_from_slice(&w.to_le_bytes());
    }
    let file = temp_image(&bytes);

    let mut mem = Memory::new(0x0200_0000);
    let size = loader::load_image(&mut mem, file.path(), TEXT_BASE).unwrap();

    assert_eq!(size, 8);
    assert_eq!(mem.read_word(TEXT_BASE).unwrap(), words[0]);
    assert_eq!(mem.read_word(TEXT_BASE + 4).unwrap(), words[1]);
}

#[test]
fn test_loaded_program_runs() {
    let words = [
        encode::addiu(8, 0, 7),
        encode::addiu(2, 0, 10),
        encode::syscall(),
    ];
    let mut bytes = Vec::new();
    for w in words {
        bytes.extend_from_slice(&w.to_le_bytes());
    }
    let file = temp_image(&bytes);

    let mut ctx = TestContext::new();
    loader::load_image(&mut ctx.sim.mem, file.path(), TEXT_BASE).unwrap();
    ctx.run().unwrap();
    assert_eq!(ctx.reg(8), 7);
}

#[test]
fn test_missing_file_is_a_load_failure() {
    let mut mem = Memory::new(0x1000);
    assert!(matches!(
        loader::load_image(&mut mem, "/no/such/image", 0),
        Err(SimError::Image { .. })
    ));
}

#[test]
fn test_empty_image_is_a_load_failure() {
    let file = temp_image(&[]);
    let mut mem = Memory::new(0x1000);
    assert!(matches!(
        loader::load_image(&mut mem, file.path(), 0),
        Err(SimError::Image { .. })
    ));
}

#[test]
fn test_oversized_image_is_a_bounds_failure() {
    let file = temp_image(&[0u8; 32]);
    let mut mem = Memory::new(16);
    assert!(matches!(
        loader::load_image(&mut mem, file.path(), 0),
        Err(SimError::ImageBounds { .. })
    ));
}
