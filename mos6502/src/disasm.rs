use crate::cpu::Cpu;
use crate::opcodes::{Mode, MNEMONICS, MODE_TABLE};

/// Render the instruction at `addr` into `text` and return the buffer's
/// final length. Known opcodes replace the buffer's contents; an opcode
/// with no assembler form leaves the buffer exactly as the caller handed
/// it in. Only the bus is read, never written, and no register changes.
pub fn disassemble(cpu: &Cpu, addr: u16, text: &mut String) -> usize {
    let bus = cpu.bus.borrow();
    let opcode = bus.read_u8(addr);

    let mnemonic = MNEMONICS[opcode as usize];
    if mnemonic.is_empty() {
        return text.len();
    }

    text.clear();
    text.push_str(mnemonic);

    match MODE_TABLE[opcode as usize] {
        Mode::Implied => {}
        Mode::Accumulator => text.push_str(" A"),
        Mode::Immediate => {
            text.push_str(&format!(" #${:02X}", bus.read_u8(addr.wrapping_add(1))));
        }
        Mode::ZeroPage => {
            text.push_str(&format!(" ${:02X}", bus.read_u8(addr.wrapping_add(1))));
        }
        Mode::ZeroPageX => {
            text.push_str(&format!(" ${:02X},X", bus.read_u8(addr.wrapping_add(1))));
        }
        Mode::ZeroPageY => {
            text.push_str(&format!(" ${:02X},Y", bus.read_u8(addr.wrapping_add(1))));
        }
        Mode::Absolute => {
            text.push_str(&format!(" ${:04X}", bus.read_u16(addr.wrapping_add(1))));
        }
        Mode::AbsoluteX => {
            text.push_str(&format!(" ${:04X},X", bus.read_u16(addr.wrapping_add(1))));
        }
        Mode::AbsoluteY => {
            text.push_str(&format!(" ${:04X},Y", bus.read_u16(addr.wrapping_add(1))));
        }
        Mode::Indirect => {
            text.push_str(&format!(" (${:04X})", bus.read_u16(addr.wrapping_add(1))));
        }
        Mode::IndirectX => {
            text.push_str(&format!(" (${:02X},X)", bus.read_u8(addr.wrapping_add(1))));
        }
        Mode::IndirectY => {
            text.push_str(&format!(" (${:02X}),Y", bus.read_u8(addr.wrapping_add(1))));
        }
        Mode::Relative => {
            let offset = bus.read_u8(addr.wrapping_add(1)) as i8;
            // The branch target is based on the live pc, not on `addr`:
            // listings taken away from the pc show shifted targets. Kept
            // for compatibility with existing callers, which only ever
            // disassemble at the pc.
            let target = cpu.pc.wrapping_add(2).wrapping_add(offset as u16);
            text.push_str(&format!(" ${:04X}", target));
        }
    }

    text.len()
}

/// Instruction length in bytes (opcode plus operands), for walking a
/// listing. Slots with no assigned operation count as one byte, as does
/// VMCALL's opcode (its selector byte is an operand only the step engine
/// knows about).
pub fn instruction_length(opcode: u8) -> u16 {
    match MODE_TABLE[opcode as usize] {
        Mode::Implied | Mode::Accumulator => 1,
        Mode::Immediate
        | Mode::ZeroPage
        | Mode::ZeroPageX
        | Mode::ZeroPageY
        | Mode::IndirectX
        | Mode::IndirectY
        | Mode::Relative => 2,
        Mode::Absolute | Mode::AbsoluteX | Mode::AbsoluteY | Mode::Indirect => 3,
    }
}
