//! Data movement: loads, stores, register transfers, and the stack-backed
//! accumulator/status pushes.

use crate::constants::StatusFlag;
use crate::opcodes::Mode;
use crate::Cpu6502;

/// Load accumulator.
/// Function: A <- M
/// Flags: N, Z
pub fn lda(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    let (_, value) = cpu.read_operand(mode);
    cpu.a = value;
    cpu.update_nz(value);
}

/// Load X.
/// Function: X <- M
/// Flags: N, Z
pub fn ldx(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    let (_, value) = cpu.read_operand(mode);
    cpu.x = value;
    cpu.update_nz(value);
}

/// Load Y.
/// Function: Y <- M
/// Flags: N, Z
pub fn ldy(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    let (_, value) = cpu.read_operand(mode);
    cpu.y = value;
    cpu.update_nz(value);
}

/// Store accumulator.
/// Function: M <- A
/// Flags: none
pub fn sta(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    let operand = cpu.operand(mode);
    cpu.write_operand(operand, cpu.a);
    cpu.clear_store_page_cross_penalty();
}

/// Store X.
/// Function: M <- X
/// Flags: none
pub fn stx(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    let operand = cpu.operand(mode);
    cpu.write_operand(operand, cpu.x);
    cpu.clear_store_page_cross_penalty();
}

/// Store Y.
/// Function: M <- Y
/// Flags: none
pub fn sty(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    let operand = cpu.operand(mode);
    cpu.write_operand(operand, cpu.y);
    cpu.clear_store_page_cross_penalty();
}

/// Transfer A to X.
/// Function: X <- A
/// Flags: N, Z
pub fn tax(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.x = cpu.a;
    cpu.update_nz(cpu.x);
}

/// Transfer X to A.
/// Function: A <- X
/// Flags: N, Z
pub fn txa(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.a = cpu.x;
    cpu.update_nz(cpu.a);
}

/// Transfer A to Y.
/// Function: Y <- A
/// Flags: N, Z
pub fn tay(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.y = cpu.a;
    cpu.update_nz(cpu.y);
}

/// Transfer Y to A.
/// Function: A <- Y
/// Flags: N, Z
pub fn tya(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.a = cpu.y;
    cpu.update_nz(cpu.a);
}

/// Transfer SP to X.
/// Function: X <- SP
/// Flags: N, Z
pub fn tsx(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.x = cpu.sp;
    cpu.update_nz(cpu.x);
}

/// Transfer X to SP.
/// Function: SP <- X
/// Flags: none. Unlike every other register transfer, TXS does not touch
/// N or Z - the stack pointer's value isn't something programs branch on.
pub fn txs(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.sp = cpu.x;
}

/// Push accumulator.
/// Function: (SP) <- A, SP <- SP - 1
/// Flags: none
pub fn pha(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.push_u8(cpu.a);
}

/// Pull accumulator.
/// Function: SP <- SP + 1, A <- (SP)
/// Flags: N, Z
pub fn pla(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.a = cpu.pull_u8();
    cpu.update_nz(cpu.a);
}

/// Push processor status. The live P register is never altered; the copy
/// pushed to the stack has the break flag forced to 1, matching how a
/// software-initiated BRK's pushed status differs from a live one.
/// Function: (SP) <- P | Break, SP <- SP - 1
/// Flags: none
pub fn php(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    let pushed = cpu.p | (StatusFlag::Break as u8);
    cpu.push_u8(pushed);
}

/// Pull processor status. Bit 5 (Unused) always reads back as 1 and the
/// break flag is cleared regardless of what was on the stack - there is no
/// live "B" bit to restore, only the pushed snapshot's convention.
/// Function: P <- (SP), SP <- SP + 1
/// Flags: all, from the pulled byte
pub fn plp(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    let mut pulled = cpu.pull_u8();
    pulled |= StatusFlag::Unused as u8;
    pulled &= !(StatusFlag::Break as u8);
    cpu.p = pulled;
}
