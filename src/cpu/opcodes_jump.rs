//! Control flow: conditional branches, subroutine call/return, interrupts,
//! jumps, flag-clear/set instructions, and the explicit decode-only NOP.

use crate::constants::StatusFlag;
use crate::opcodes::{Mode, Operand};
use crate::Cpu6502;

/// Shared by all eight conditional branches. The operand decode always
/// computes the relative target (PC of the instruction after this one,
/// plus the signed displacement); only when `condition` holds does it
/// actually get taken, at which point the usual one-cycle "branch taken"
/// penalty applies, plus a second cycle if the branch crosses a page.
fn branch(cpu: &mut Cpu6502, mode: Mode, condition: bool) {
    let operand = cpu.operand(mode);
    let target = match operand {
        Operand::Memory(address) => address,
        Operand::Accumulator => unreachable!("branches are always Relative"),
    };

    if condition {
        let next_pc = cpu.pc.wrapping_add(2);
        if (target ^ next_pc) & 0xFF00 != 0 {
            cpu.extra_cycles += 1;
        }
        cpu.extra_cycles += 1;
        cpu.pc = target;
        cpu.jumping = true;
    }
}

/// Branch if plus (N clear).
pub fn bpl(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    branch(cpu, mode, !cpu.is_flag_set(StatusFlag::Negative));
}

/// Branch if minus (N set).
pub fn bmi(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    branch(cpu, mode, cpu.is_flag_set(StatusFlag::Negative));
}

/// Branch if overflow clear.
pub fn bvc(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    branch(cpu, mode, !cpu.is_flag_set(StatusFlag::Overflow));
}

/// Branch if overflow set.
pub fn bvs(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    branch(cpu, mode, cpu.is_flag_set(StatusFlag::Overflow));
}

/// Branch if carry clear.
pub fn bcc(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    branch(cpu, mode, !cpu.is_flag_set(StatusFlag::Carry));
}

/// Branch if carry set.
pub fn bcs(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    branch(cpu, mode, cpu.is_flag_set(StatusFlag::Carry));
}

/// Branch if not equal (Z clear).
pub fn bne(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    branch(cpu, mode, !cpu.is_flag_set(StatusFlag::Zero));
}

/// Branch if equal (Z set).
pub fn beq(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    branch(cpu, mode, cpu.is_flag_set(StatusFlag::Zero));
}

/// Force break. Advances PC past its own signature byte before pushing, so
/// the return address on the stack matches what a hardware IRQ would have
/// pushed, then loads PC from the IRQ/BRK vector.
/// Function: PC <- PC + 2, (SP) <- PC, (SP) <- P | Break, I <- 1,
///           PC <- (IRQ_BRK_VECTOR)
/// Flags: I
pub fn brk(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    let return_address = cpu.pc.wrapping_add(2);
    cpu.push_u16(return_address);
    let pushed = cpu.p | (StatusFlag::Break as u8);
    cpu.push_u8(pushed);
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    cpu.pc = cpu.memory.read_u16(crate::constants::IRQ_BRK_VECTOR);
    cpu.jumping = true;
}

/// Return from interrupt. Unlike RTS, the restored PC is used as-is - it
/// already points at the instruction to resume, not the one before it.
/// Function: P <- (SP), PC <- (SP)
/// Flags: all, from the pulled status byte
pub fn rti(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    let mut pulled = cpu.pull_u8();
    pulled |= StatusFlag::Unused as u8;
    pulled &= !(StatusFlag::Break as u8);
    cpu.p = pulled;
    cpu.pc = cpu.pull_u16();
    cpu.jumping = true;
}

/// Jump to subroutine. Pushes the address of the last byte of the JSR
/// instruction itself (not the next instruction); RTS accounts for the
/// difference by adding one after it pulls.
/// Function: (SP) <- PC + 2, PC <- M
pub fn jsr(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    let operand = cpu.operand(mode);
    let target = match operand {
        Operand::Memory(address) => address,
        Operand::Accumulator => unreachable!("JSR is always Absolute"),
    };
    let return_address = cpu.pc.wrapping_add(2);
    cpu.push_u16(return_address);
    cpu.pc = target;
    cpu.jumping = true;
}

/// Return from subroutine.
/// Function: PC <- (SP) + 1
pub fn rts(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    let return_address = cpu.pull_u16();
    cpu.pc = return_address.wrapping_add(1);
    cpu.jumping = true;
}

/// Jump. The addressing mode decoder already resolved both the plain
/// absolute form and the `$6C`-only indirect page-boundary bug down to a
/// final address, so this just loads PC with it.
/// Function: PC <- M
pub fn jmp(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    let operand = cpu.operand(mode);
    let target = match operand {
        Operand::Memory(address) => address,
        Operand::Accumulator => unreachable!("JMP is never Accumulator"),
    };
    cpu.pc = target;
    cpu.jumping = true;
}

/// Test bits. Reads but never writes the operand; N and V come straight
/// off the memory operand's own bits 7 and 6, not from the AND result.
/// Function: Z <- (A & M) == 0, N <- M bit 7, V <- M bit 6
pub fn bit(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    let (_, value) = cpu.read_operand(mode);
    cpu.set_flag(StatusFlag::Zero, value & cpu.a == 0);
    cpu.set_flag(StatusFlag::Negative, value & 0x80 != 0);
    cpu.set_flag(StatusFlag::Overflow, value & 0x40 != 0);
}

/// Clear carry.
pub fn clc(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.set_flag(StatusFlag::Carry, false);
}

/// Set carry.
pub fn sec(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.set_flag(StatusFlag::Carry, true);
}

/// Clear decimal mode.
pub fn cld(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.set_flag(StatusFlag::Decimal, false);
}

/// Set decimal mode.
pub fn sed(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.set_flag(StatusFlag::Decimal, true);
}

/// Clear interrupt disable.
pub fn cli(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.set_flag(StatusFlag::InterruptDisable, false);
}

/// Set interrupt disable.
pub fn sei(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.set_flag(StatusFlag::InterruptDisable, true);
}

/// Clear overflow.
pub fn clv(cpu: &mut Cpu6502, _mode: Mode, _opcode: u8) {
    cpu.set_flag(StatusFlag::Overflow, false);
}

/// No-op. Still runs the addressing-mode decode for its assigned mode so
/// its instruction length and any page-cross penalty come out the same as
/// a real instruction of that shape - this is also how every illegal/
/// undocumented opcode is modeled, as a differently-sized, differently-
/// timed NOP rather than with its own semantics.
pub fn nop(cpu: &mut Cpu6502, mode: Mode, _opcode: u8) {
    cpu.operand(mode);
}
