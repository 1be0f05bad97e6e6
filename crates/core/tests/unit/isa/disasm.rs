//! Disassembler tests.

use mipsim_core::isa::decode;
use mipsim_core::isa::disasm::disassemble;
use rstest::rstest;

use crate::common::encode;

#[rstest]
#[case(0x0000_0000, "nop")]
#[case(0x2408_0005, "addiu $t0, $zero, 5")]
#[case(0x3C08_1001, "lui $t0, 0x1001")]
#[case(0x0000_000C, "syscall")]
#[case(0x03E0_0008, "jr $ra")]
fn test_disassemble_literal_words(#[case] word: u32, #[case] expected: &str) {
    assert_eq!(disassemble(&decode(word).unwrap()), expected);
}

#[test]
fn test_disassemble_load_uses_offset_base_form() {
    let word = encode::lw(8, 29, -8);
    assert_eq!(disassemble(&decode(word).unwrap()), "lw $t0, -8($sp)");
}

#[test]
fn test_disassemble_jump_shows_word_aligned_target() {
    let word = encode::j(0x0010_0000);
    assert_eq!(disassemble(&decode(word).unwrap()), "j 0x00400000");
}
