//! A cycle-accounting interpreter for the MOS 6502. Owns a flat 64 KiB
//! memory image and the processor state, decodes and executes one
//! instruction at a time, and reports exactly how many cycles each one
//! cost - including the page-crossing and branch-taken penalties real
//! hardware pays.
//!
//! ```
//! use mos6502::Cpu6502;
//!
//! let mut cpu = Cpu6502::new();
//! cpu.load_image(&[0xA9, 0x42], 0x0200); // LDA #$42
//! cpu.reset(0, 0, 0, 0xFD, 0b0010_0100, 0x0200);
//! let cycles = cpu.step(false);
//! assert_eq!(cpu.a, 0x42);
//! assert_eq!(cycles, 2);
//! ```

pub mod bus;
pub mod constants;
pub mod cpu;
pub mod opcodes;
pub mod trace;

pub use bus::Memory;
pub use cpu::Cpu6502;
