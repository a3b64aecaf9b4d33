//! The 256-entry opcode table: mnemonic, addressing mode, base cycle count,
//! and the function that carries out the semantic. Transcribed byte-for-byte
//! from `instructions[]` in the original C source so every entry traces back
//! to a single ground truth rather than a secondary reference.

use crate::cpu::Cpu6502;
use crate::cpu::opcodes_jump::*;
use crate::cpu::opcodes_logical::*;
use crate::cpu::opcodes_move::*;

/// Addressing mode assigned to an opcode. `JMP_IND_BUG` is its own variant
/// rather than a flavor of `Indirect` because only $6C exercises the
/// page-boundary hardware bug; a plain `Indirect` fetch is never otherwise
/// reachable on real 6502 opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
    IndirectJumpBug,
}

impl Mode {
    /// Length in bytes of an instruction using this mode, opcode byte
    /// included.
    pub fn instruction_length(self) -> u16 {
        match self {
            Mode::Implied | Mode::Accumulator => 1,
            Mode::Immediate
            | Mode::ZeroPage
            | Mode::ZeroPageX
            | Mode::ZeroPageY
            | Mode::Relative
            | Mode::IndirectX
            | Mode::IndirectY => 2,
            Mode::Absolute
            | Mode::AbsoluteX
            | Mode::AbsoluteY
            | Mode::Indirect
            | Mode::IndirectJumpBug => 3,
        }
    }
}

/// What an addressing mode resolved to. Read-modify-write semantics match on
/// this before writing their result back, instead of the raw-address
/// convention that silently clobbered address 0 whenever the mode was
/// actually `Accumulator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Memory(u16),
    Accumulator,
}

pub type OperationFn = fn(&mut Cpu6502, Mode, u8);

#[rustfmt::skip]
pub const CYCLES_TABLE: [u8; 256] = [
    7, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4,
    2, 6, 2, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5,
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4,
    2, 5, 2, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4,
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
];

#[rustfmt::skip]
pub const ADDRESSING_MODE_TABLE: [Mode; 256] = [
    Mode::Implied, Mode::IndirectX, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::Implied,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::Implied,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Implied,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPageX, Mode::ZeroPageX, Mode::Implied,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::Implied,
    Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::Implied,
    Mode::Absolute, Mode::IndirectX, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::Implied,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::Implied,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Implied,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPageX, Mode::ZeroPageX, Mode::Implied,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::Implied,
    Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::Implied,
    Mode::Implied, Mode::IndirectX, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::Implied,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::Implied,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Implied,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPageX, Mode::ZeroPageX, Mode::Implied,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::Implied,
    Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::Implied,
    Mode::Implied, Mode::IndirectX, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::Implied,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::Implied,
    Mode::IndirectJumpBug, Mode::Absolute, Mode::Absolute, Mode::Implied,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPageX, Mode::ZeroPageX, Mode::Implied,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::Implied,
    Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::Implied,
    Mode::Immediate, Mode::IndirectX, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::Implied,
    Mode::Implied, Mode::Implied, Mode::Implied, Mode::Implied,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Implied,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::Implied,
    Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageY, Mode::Implied,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::Implied,
    Mode::Implied, Mode::AbsoluteX, Mode::Implied, Mode::Implied,
    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::Implied,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Implied,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Implied,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::Implied,
    Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageY, Mode::Implied,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::Implied,
    Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteY, Mode::Implied,
    Mode::Immediate, Mode::IndirectX, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::Implied,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Implied,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Implied,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPageX, Mode::ZeroPageX, Mode::Implied,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::Implied,
    Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::Implied,
    Mode::Immediate, Mode::IndirectX, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::Implied,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Implied,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Implied,
    Mode::Relative, Mode::IndirectY, Mode::Implied, Mode::Implied,
    Mode::ZeroPage, Mode::ZeroPageX, Mode::ZeroPageX, Mode::Implied,
    Mode::Implied, Mode::AbsoluteY, Mode::Implied, Mode::Implied,
    Mode::AbsoluteX, Mode::AbsoluteX, Mode::AbsoluteX, Mode::Implied,
];

#[rustfmt::skip]
pub const MNEMONIC_TABLE: [&str; 256] = [
    "BRK", "ORA", "???", "???", "???", "ORA", "ASL", "???",
    "PHP", "ORA", "ASL", "???", "???", "ORA", "ASL", "???",
    "BPL", "ORA", "???", "???", "???", "ORA", "ASL", "???",
    "CLC", "ORA", "???", "???", "???", "ORA", "ASL", "???",
    "JSR", "AND", "???", "???", "BIT", "AND", "ROL", "???",
    "PLP", "AND", "ROL", "???", "BIT", "AND", "ROL", "???",
    "BMI", "AND", "???", "???", "???", "AND", "ROL", "???",
    "SEC", "AND", "???", "???", "???", "AND", "ROL", "???",
    "RTI", "EOR", "???", "???", "???", "EOR", "LSR", "???",
    "PHA", "EOR", "LSR", "???", "JMP", "EOR", "LSR", "???",
    "BVC", "EOR", "???", "???", "???", "EOR", "LSR", "???",
    "CLI", "EOR", "???", "???", "???", "EOR", "LSR", "???",
    "RTS", "ADC", "???", "???", "???", "ADC", "ROR", "???",
    "PLA", "ADC", "ROR", "???", "JMP", "ADC", "ROR", "???",
    "BVS", "ADC", "???", "???", "???", "ADC", "ROR", "???",
    "SEI", "ADC", "???", "???", "???", "ADC", "ROR", "???",
    "???", "STA", "???", "???", "STY", "STA", "STX", "???",
    "DEY", "???", "TXA", "???", "STY", "STA", "STX", "???",
    "BCC", "STA", "???", "???", "STY", "STA", "STX", "???",
    "TYA", "STA", "TXS", "???", "???", "STA", "???", "???",
    "LDY", "LDA", "LDX", "???", "LDY", "LDA", "LDX", "???",
    "TAY", "LDA", "TAX", "???", "LDY", "LDA", "LDX", "???",
    "BCS", "LDA", "???", "???", "LDY", "LDA", "LDX", "???",
    "CLV", "LDA", "TSX", "???", "LDY", "LDA", "LDX", "???",
    "CPY", "CMP", "???", "???", "CPY", "CMP", "DEC", "???",
    "INY", "CMP", "DEX", "???", "CPY", "CMP", "DEC", "???",
    "BNE", "CMP", "???", "???", "???", "CMP", "DEC", "???",
    "CLD", "CMP", "???", "???", "???", "CMP", "DEC", "???",
    "CPX", "SBC", "???", "???", "CPX", "SBC", "INC", "???",
    "INX", "SBC", "NOP", "???", "CPX", "SBC", "INC", "???",
    "BEQ", "SBC", "???", "???", "???", "SBC", "INC", "???",
    "SED", "SBC", "???", "???", "???", "SBC", "INC", "???",
];

#[rustfmt::skip]
pub const OPERATION_FN_TABLE: [OperationFn; 256] = [
    brk, ora, nop, nop,
    nop, ora, asl, nop,
    php, ora, asl, nop,
    nop, ora, asl, nop,
    bpl, ora, nop, nop,
    nop, ora, asl, nop,
    clc, ora, nop, nop,
    nop, ora, asl, nop,
    jsr, and, nop, nop,
    bit, and, rol, nop,
    plp, and, rol, nop,
    bit, and, rol, nop,
    bmi, and, nop, nop,
    nop, and, rol, nop,
    sec, and, nop, nop,
    nop, and, rol, nop,
    rti, eor, nop, nop,
    nop, eor, lsr, nop,
    pha, eor, lsr, nop,
    jmp, eor, lsr, nop,
    bvc, eor, nop, nop,
    nop, eor, lsr, nop,
    cli, eor, nop, nop,
    nop, eor, lsr, nop,
    rts, adc, nop, nop,
    nop, adc, ror, nop,
    pla, adc, ror, nop,
    jmp, adc, ror, nop,
    bvs, adc, nop, nop,
    nop, adc, ror, nop,
    sei, adc, nop, nop,
    nop, adc, ror, nop,
    nop, sta, nop, nop,
    sty, sta, stx, nop,
    dey, nop, txa, nop,
    sty, sta, stx, nop,
    bcc, sta, nop, nop,
    sty, sta, stx, nop,
    tya, sta, txs, nop,
    nop, sta, nop, nop,
    ldy, lda, ldx, nop,
    ldy, lda, ldx, nop,
    tay, lda, tax, nop,
    ldy, lda, ldx, nop,
    bcs, lda, nop, nop,
    ldy, lda, ldx, nop,
    clv, lda, tsx, nop,
    ldy, lda, ldx, nop,
    cpy, cmp, nop, nop,
    cpy, cmp, dec, nop,
    iny, cmp, dex, nop,
    cpy, cmp, dec, nop,
    bne, cmp, nop, nop,
    nop, cmp, dec, nop,
    cld, cmp, nop, nop,
    nop, cmp, dec, nop,
    cpx, sbc, nop, nop,
    cpx, sbc, inc, nop,
    inx, sbc, nop, nop,
    cpx, sbc, inc, nop,
    beq, sbc, nop, nop,
    nop, sbc, inc, nop,
    sed, sbc, nop, nop,
    nop, sbc, inc, nop,
];
