//! A small mnemonic assembler for test fixtures. Supports exactly the
//! operand syntaxes exercised by the integration scenarios below; it is
//! not a general-purpose assembler (no labels, no directives) — just
//! enough text-to-bytes convenience to keep test programs readable.

use mos6502::opcodes::{Mode, ADDRESSING_MODE_TABLE, MNEMONIC_TABLE};

fn find_opcode(mnemonic: &str, mode: Mode) -> u8 {
    for (index, (&mne, &m)) in MNEMONIC_TABLE.iter().zip(ADDRESSING_MODE_TABLE.iter()).enumerate() {
        if mne == mnemonic && m == mode {
            return index as u8;
        }
    }
    panic!("no opcode for {} in mode {:?}", mnemonic, mode);
}

fn parse_hex(text: &str) -> u32 {
    u32::from_str_radix(text.trim_start_matches('$'), 16).expect("bad hex literal")
}

/// Assemble one instruction per line into its encoded bytes. Blank lines
/// and lines starting with `;` are ignored.
pub fn assemble(source: &str) -> Vec<u8> {
    let mut bytes = Vec::new();

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let mnemonic = parts.next().unwrap().to_uppercase();
        let operand = parts.next().unwrap_or("").trim();

        if operand.is_empty() {
            let mode = Mode::Implied;
            bytes.push(find_opcode(&mnemonic, mode));
            continue;
        }

        if operand == "A" {
            bytes.push(find_opcode(&mnemonic, Mode::Accumulator));
            continue;
        }

        const BRANCHES: &[&str] = &["BPL", "BMI", "BVC", "BVS", "BCC", "BCS", "BNE", "BEQ"];
        if BRANCHES.contains(&mnemonic.as_str()) {
            bytes.push(find_opcode(&mnemonic, Mode::Relative));
            bytes.push(parse_hex(operand) as u8);
            continue;
        }

        if let Some(rest) = operand.strip_prefix('#') {
            bytes.push(find_opcode(&mnemonic, Mode::Immediate));
            bytes.push(parse_hex(rest) as u8);
            continue;
        }

        if let Some(rest) = operand.strip_prefix("($").and_then(|r| r.strip_suffix(",X)")) {
            bytes.push(find_opcode(&mnemonic, Mode::IndirectX));
            bytes.push(parse_hex(rest) as u8);
            continue;
        }

        if let Some(rest) = operand.strip_prefix("($").and_then(|r| r.strip_suffix("),Y")) {
            bytes.push(find_opcode(&mnemonic, Mode::IndirectY));
            bytes.push(parse_hex(rest) as u8);
            continue;
        }

        let (body, index_reg) = if let Some(prefix) = operand.strip_suffix(",X") {
            (prefix, Some('X'))
        } else if let Some(prefix) = operand.strip_suffix(",Y") {
            (prefix, Some('Y'))
        } else {
            (operand, None)
        };

        let value = parse_hex(body);
        let is_zero_page = body.trim_start_matches('$').len() <= 2;

        let mode = match (is_zero_page, index_reg) {
            (true, None) => Mode::ZeroPage,
            (true, Some('X')) => Mode::ZeroPageX,
            (true, Some('Y')) => Mode::ZeroPageY,
            (false, None) => Mode::Absolute,
            (false, Some('X')) => Mode::AbsoluteX,
            (false, Some('Y')) => Mode::AbsoluteY,
            _ => unreachable!(),
        };

        bytes.push(find_opcode(&mnemonic, mode));
        if is_zero_page {
            bytes.push(value as u8);
        } else {
            bytes.extend_from_slice(&(value as u16).to_le_bytes());
        }
    }

    bytes
}
