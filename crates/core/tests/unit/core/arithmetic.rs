//! Arithmetic, logic, and comparison execution tests.

use proptest::prelude::*;

use crate::common::encode;
use crate::common::harness::{TestContext, TEXT_BASE};

/// Runs one instruction against preset registers and returns the context.
fn exec_one(word: u32, presets: &[(usize, u32)]) -> TestContext {
    let mut ctx = TestContext::new().load_words(TEXT_BASE, &[word]);
    for &(idx, val) in presets {
        ctx.set_reg(idx, val);
    }
    ctx.step().unwrap();
    ctx
}

#[test]
fn test_addu_wraps_on_overflow() {
    let ctx = exec_one(encode::addu(10, 8, 9), &[(8, 0xFFFF_FFFF), (9, 1)]);
    assert_eq!(ctx.reg(10), 0);
}

#[test]
fn test_add_is_identical_to_addu() {
    // The trapping form never traps in this subset.
    let ctx = exec_one(encode::add(10, 8, 9), &[(8, i32::MAX as u32), (9, 1)]);
    assert_eq!(ctx.reg(10), 0x8000_0000);
}

#[test]
fn test_sub_wraps_below_zero() {
    let ctx = exec_one(encode::sub(10, 8, 9), &[(8, 0), (9, 1)]);
    assert_eq!(ctx.reg(10), 0xFFFF_FFFF);
}

#[test]
fn test_sll_shifts_rt_by_shamt() {
    let ctx = exec_one(encode::sll(10, 8, 4), &[(8, 0x0000_00F1)]);
    assert_eq!(ctx.reg(10), 0x0000_0F10);
}

#[test]
fn test_or_combines_bits() {
    let ctx = exec_one(encode::or(10, 8, 9), &[(8, 0xF0F0_0000), (9, 0x0000_0F0F)]);
    assert_eq!(ctx.reg(10), 0xF0F0_0F0F);
}

#[test]
fn test_slt_uses_signed_comparison() {
    // -1 < 0 as signed values, even though 0xFFFFFFFF > 0 unsigned.
    let ctx = exec_one(encode::slt(10, 8, 9), &[(8, 0xFFFF_FFFF), (9, 0)]);
    assert_eq!(ctx.reg(10), 1);

    let ctx = exec_one(encode::slt(10, 8, 9), &[(8, 0), (9, 0xFFFF_FFFF)]);
    assert_eq!(ctx.reg(10), 0);
}

#[test]
fn test_mul_keeps_low_32_bits_and_leaves_hi_lo() {
    let ctx = exec_one(encode::mul(10, 8, 9), &[(8, 0x0001_0000), (9, 0x0001_0001)]);
    assert_eq!(ctx.reg(10), 0x0001_0000); // low half of 0x1_0001_0000
    assert_eq!(ctx.sim.cpu.hi, 0);
    assert_eq!(ctx.sim.cpu.lo, 0);
}

#[test]
fn test_mul_signed_operands() {
    let ctx = exec_one(encode::mul(10, 8, 9), &[(8, (-3i32) as u32), (9, 7)]);
    assert_eq!(ctx.reg(10) as i32, -21);
}

#[test]
fn test_addi_sign_extends_immediate() {
    let ctx = exec_one(encode::addi(9, 8, -5), &[(8, 3)]);
    assert_eq!(ctx.reg(9) as i32, -2);
}

#[test]
fn test_addiu_ignores_overflow_like_addi() {
    let ctx = exec_one(encode::addiu(9, 8, 1), &[(8, 0xFFFF_FFFF)]);
    assert_eq!(ctx.reg(9), 0);
}

#[test]
fn test_ori_zero_extends_immediate() {
    let ctx = exec_one(encode::ori(9, 8, 0x8000), &[(8, 0x0001_0000)]);
    assert_eq!(ctx.reg(9), 0x0001_8000);
}

#[test]
fn test_lui_places_immediate_in_upper_half() {
    let ctx = exec_one(encode::lui(8, 0x1001), &[]);
    assert_eq!(ctx.reg(8), 0x1001_0000);
}

#[test]
fn test_slti_signed_comparison() {
    let ctx = exec_one(encode::slti(9, 8, 0), &[(8, 0xFFFF_FFFF)]);
    assert_eq!(ctx.reg(9), 1);
}

#[test]
fn test_slti_write_to_register_zero_is_suppressed() {
    // The one instruction that refuses to write $zero.
    let ctx = exec_one(encode::slti(0, 8, 100), &[(8, 1)]);
    assert_eq!(ctx.reg(0), 0);
}

#[test]
fn test_other_writes_to_register_zero_take_effect() {
    let ctx = exec_one(encode::addiu(0, 0, 5), &[]);
    assert_eq!(ctx.reg(0), 5);
}

proptest! {
    #[test]
    fn prop_addu_matches_wrapping_add(a: u32, b: u32) {
        let mut ctx = TestContext::tiny().load_words(0, &[encode::addu(3, 1, 2)]);
        ctx.set_reg(1, a);
        ctx.set_reg(2, b);
        ctx.step().unwrap();
        prop_assert_eq!(ctx.reg(3), a.wrapping_add(b));
    }

    #[test]
    fn prop_sub_matches_wrapping_sub(a: u32, b: u32) {
        let mut ctx = TestContext::tiny().load_words(0, &[encode::sub(3, 1, 2)]);
        ctx.set_reg(1, a);
        ctx.set_reg(2, b);
        ctx.step().unwrap();
        prop_assert_eq!(ctx.reg(3), a.wrapping_sub(b));
    }

    #[test]
    fn prop_slt_matches_signed_less_than(a: u32, b: u32) {
        let mut ctx = TestContext::tiny().load_words(0, &[encode::slt(3, 1, 2)]);
        ctx.set_reg(1, a);
        ctx.set_reg(2, b);
        ctx.step().unwrap();
        prop_assert_eq!(ctx.reg(3), u32::from((a as i32) < (b as i32)));
    }
}
