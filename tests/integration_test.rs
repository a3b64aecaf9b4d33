//! End-to-end scenarios driven through the public API only, exercising
//! the concrete cycle-count/semantic scenarios and the supplementary
//! cases grown from the reference source.

mod common;

use common::{asm::assemble, cpu_running};
use mos6502::Cpu6502;

#[test]
fn lda_immediate() {
    let mut cpu = cpu_running("LDA #$42");
    let cycles = cpu.step(false);
    assert_eq!(cpu.a, 0x42);
    assert_eq!(cycles, 2);
}

#[test]
fn adc_binary_carry_and_overflow() {
    let mut cpu = cpu_running("ADC #$50");
    cpu.a = 0x50;
    cpu.step(false);
    assert_eq!(cpu.a, 0xA0);
    assert_eq!(cpu.p & 0b1100_0001, 0b1000_0000); // N set, V set, C clear
}

#[test]
fn adc_decimal_mode() {
    let mut cpu = cpu_running("SED\nADC #$27");
    cpu.step(false); // SED
    cpu.a = 0x15;
    cpu.step(false); // ADC
    assert_eq!(cpu.a, 0x42);
}

#[test]
fn sbc_binary_mode() {
    let mut cpu = cpu_running("SEC\nSBC #$01");
    cpu.step(false); // SEC: carry = 1, no borrow in
    cpu.a = 0x05;
    cpu.step(false); // SBC
    assert_eq!(cpu.a, 0x04);
}

#[test]
fn sbc_decimal_mode() {
    let mut cpu = cpu_running("SED\nSEC\nSBC #$27");
    cpu.step(false); // SED
    cpu.step(false); // SEC
    cpu.a = 0x42;
    cpu.step(false); // SBC
    assert_eq!(cpu.a, 0x15);
}

#[test]
fn branch_taken_with_page_cross() {
    let bytes = assemble("BNE $7F"); // encodes as relative +0x7F via $-prefixed immediate byte
    let mut cpu = Cpu6502::new();
    cpu.load_image(&bytes, 0x02F0);
    cpu.reset(0, 0, 0, 0xFD, 0b0010_0100, 0x02F0);
    let cycles = cpu.step(false);
    assert_eq!(cpu.pc, 0x0371);
    assert_eq!(cycles, 4);
}

#[test]
fn indirect_jmp_page_boundary_bug() {
    let mut cpu = Cpu6502::new();
    cpu.memory.write_u8(0x30FF, 0x34);
    cpu.memory.write_u8(0x3000, 0x12);
    cpu.memory.write_u8(0x3100, 0x80); // would be the high byte on real hardware, never read
    cpu.load_image(&[0x6C, 0xFF, 0x30], 0x0200);
    cpu.reset(0, 0, 0, 0xFD, 0b0010_0100, 0x0200);
    let cycles = cpu.step(false);
    assert_eq!(cpu.pc, 0x1234);
    assert_eq!(cycles, 5);
}

#[test]
fn jsr_rts_round_trip() {
    let mut cpu = cpu_running("JSR $1234");
    cpu.memory.write_u8(0x1234, 0x60); // RTS
    cpu.step(false); // JSR
    assert_eq!(cpu.pc, 0x1234);
    cpu.step(false); // RTS
    assert_eq!(cpu.pc, 0x0203);
}

#[test]
fn pha_pla_round_trip() {
    let mut cpu = cpu_running("PHA\nLDA #$00\nPLA");
    cpu.a = 0x77;
    cpu.step(false);
    cpu.step(false);
    cpu.step(false);
    assert_eq!(cpu.a, 0x77);
}

#[test]
fn php_plp_round_trip_sets_unused_and_clears_break() {
    let mut cpu = cpu_running("PHP\nPLP");
    cpu.p = 0b1111_1111;
    cpu.step(false);
    cpu.p = 0;
    cpu.step(false);
    assert_eq!(cpu.p & 0b0011_0000, 0b0010_0000);
}

#[test]
fn rol_ror_round_trip() {
    let mut cpu = cpu_running("ROL A\nROR A");
    cpu.a = 0b0101_0101;
    cpu.step(false);
    cpu.step(false);
    assert_eq!(cpu.a, 0b0101_0101);
}

#[test]
fn brk_rti_round_trip_through_the_stack() {
    let mut cpu = cpu_running("BRK");
    cpu.memory.write_u8(0x9000, 0x40); // RTI
    cpu.memory.write_u16(0xFFFE, 0x9000);
    cpu.p = 0b1010_0101;
    cpu.step(false); // BRK
    cpu.step(false); // RTI
    assert_eq!(cpu.pc, 0x0203); // one past BRK's two-byte form at $0200
    assert_eq!(cpu.p, 0b1010_0101);
}

#[test]
fn indirect_x_wraps_within_the_zero_page_at_0xff() {
    // LDA ($FF,X) with X=0: pointer byte is $FF, so the high byte must
    // wrap back to zero-page address $00 rather than spilling into $0100.
    let mut cpu = cpu_running("LDA ($FF,X)");
    cpu.memory.write_u8(0x00FF, 0x00); // low byte of the wrapped pointer
    cpu.memory.write_u8(0x0000, 0x30); // high byte of the wrapped pointer
    cpu.memory.write_u8(0x3000, 0x99);
    cpu.step(false);
    assert_eq!(cpu.a, 0x99);
}

#[test]
fn indirect_y_wraps_within_the_zero_page_at_0xff() {
    let mut cpu = cpu_running("LDA ($FF),Y");
    cpu.memory.write_u8(0x00FF, 0x00);
    cpu.memory.write_u8(0x0000, 0x30);
    cpu.y = 0x05;
    cpu.memory.write_u8(0x3005, 0x77);
    cpu.step(false);
    assert_eq!(cpu.a, 0x77);
}

#[test]
fn illegal_opcode_implied_width_behaves_as_a_one_byte_nop() {
    let mut cpu = Cpu6502::new();
    cpu.load_image(&[0x1A], 0x0200); // illegal, Implied
    cpu.reset(0, 0, 0, 0xFD, 0b0010_0100, 0x0200);
    let cycles = cpu.step(false);
    assert_eq!(cpu.pc, 0x0201);
    assert_eq!(cycles, 2);
}

#[test]
fn illegal_opcode_zero_page_width_behaves_as_a_two_byte_nop() {
    let mut cpu = Cpu6502::new();
    cpu.load_image(&[0x04, 0x99], 0x0200); // illegal, ZeroPage
    cpu.reset(0, 0, 0, 0xFD, 0b0010_0100, 0x0200);
    let cycles = cpu.step(false);
    assert_eq!(cpu.pc, 0x0202);
    assert_eq!(cycles, 3);
}

#[test]
fn illegal_opcode_absolute_width_behaves_as_a_three_byte_nop() {
    let mut cpu = Cpu6502::new();
    cpu.load_image(&[0x0C, 0x34, 0x12], 0x0200); // illegal, Absolute
    cpu.reset(0, 0, 0, 0xFD, 0b0010_0100, 0x0200);
    let cycles = cpu.step(false);
    assert_eq!(cpu.pc, 0x0203);
    assert_eq!(cycles, 4);
}

#[test]
fn illegal_opcode_absolute_indexed_width_pays_the_page_cross_penalty() {
    let mut cpu = Cpu6502::new();
    cpu.load_image(&[0x1C, 0xFF, 0x00], 0x0200); // illegal, AbsoluteX
    cpu.reset(0, 0, 0, 0xFD, 0b0010_0100, 0x0200);
    cpu.x = 0x01; // $00FF + 1 crosses into page $01
    let cycles = cpu.step(false);
    assert_eq!(cycles, 5);
}
