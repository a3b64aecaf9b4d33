pub mod asm;

use mos6502::Cpu6502;

/// A CPU loaded with an assembled program at $0200, registers zeroed, SP
/// at its post-reset default, and P at the standard reset value
/// (I=1, bit5=1).
pub fn cpu_running(source: &str) -> Cpu6502 {
    let bytes = asm::assemble(source);
    let mut cpu = Cpu6502::new();
    cpu.load_image(&bytes, 0x0200);
    cpu.reset(0, 0, 0, 0xFD, 0b0010_0100, 0x0200);
    cpu
}
