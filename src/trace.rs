//! Formatting for the step-by-step execution trace that `Cpu6502::step`
//! prints when run verbosely. Kept as a standalone pure function so the
//! format itself is testable without capturing stdout.

use crate::cpu::Cpu6502;
use crate::opcodes::{ADDRESSING_MODE_TABLE, MNEMONIC_TABLE};

/// Render one trace line for the instruction about to execute at `cpu`'s
/// current PC. `opcode` is the byte already fetched from that address.
///
/// `PPPP  B0 B1 B2  MNE                         A:AA X:XX Y:YY P:PP SP:SS CYC:CCC`
///
/// The opcode byte column is padded out to three bytes regardless of the
/// instruction's actual length, the mnemonic field is left-padded to 10
/// characters followed by the same fixed 22-space gap the reference trace
/// prints before the register dump (so column position matches a
/// golden-file comparison even though this design never disassembles
/// operands into that gap), and CYC reports the cycle count on its usual
/// 0-340 sawtooth (three pixel-clocks per CPU cycle, wrapped at one
/// scanline).
pub fn trace_line(cpu: &Cpu6502, opcode: usize) -> String {
    let mode = ADDRESSING_MODE_TABLE[opcode];
    let mnemonic = MNEMONIC_TABLE[opcode];
    let length = mode.instruction_length();

    let b0 = cpu.memory.read_u8(cpu.pc);
    let bytes_column = match length {
        1 => format!("{:02X}      ", b0),
        2 => {
            let b1 = cpu.memory.read_u8(cpu.pc.wrapping_add(1));
            format!("{:02X} {:02X}   ", b0, b1)
        }
        3 => {
            let b1 = cpu.memory.read_u8(cpu.pc.wrapping_add(1));
            let b2 = cpu.memory.read_u8(cpu.pc.wrapping_add(2));
            format!("{:02X} {:02X} {:02X}", b0, b1, b2)
        }
        _ => unreachable!("instruction_length only returns 1, 2, or 3"),
    };

    let cyc = (cpu.total_cycles * 3) % 341;

    // The reference trace (6502.c's step printer) leaves this exact
    // 22-space gap between the mnemonic field and the register dump,
    // where a full disassembler would otherwise print the operand.
    const REGISTER_GAP: &str = "                      ";

    format!(
        "{:04X}  {}  {:<10}{}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{:>3}",
        cpu.pc, bytes_column, mnemonic, REGISTER_GAP, cpu.a, cpu.x, cpu.y, cpu.p, cpu.sp, cyc
    )
}
