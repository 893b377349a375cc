use crate::cpu::{Cpu, StatusFlag};
use crate::opcodes::Mode;

/// Load the accumulator from memory.
/// Function: A:={adr}
/// Flags: N Z
pub fn lda(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    cpu.a = operand;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Load register X from memory.
/// Function: X:={adr}
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    cpu.x = operand;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Load register Y from memory.
/// Function: Y:={adr}
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    cpu.y = operand;
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Store the accumulator.
/// Function: {adr}:=A
/// Flags:
pub fn sta(cpu: &mut Cpu, mode: Mode) {
    let address = cpu.get_operand_address(mode);
    let value = cpu.a;
    cpu.bus.borrow_mut().write_u8(address, value);
}

/// Store register X.
/// Function: {adr}:=X
/// Flags:
pub fn stx(cpu: &mut Cpu, mode: Mode) {
    let address = cpu.get_operand_address(mode);
    let value = cpu.x;
    cpu.bus.borrow_mut().write_u8(address, value);
}

/// Store register Y.
/// Function: {adr}:=Y
/// Flags:
pub fn sty(cpu: &mut Cpu, mode: Mode) {
    let address = cpu.get_operand_address(mode);
    let value = cpu.y;
    cpu.bus.borrow_mut().write_u8(address, value);
}

/// Transfer A to X
/// Function: X:=A
/// Flags: N Z
pub fn tax(cpu: &mut Cpu, _mode: Mode) {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Transfer A to Y
/// Function: Y:=A
/// Flags: N Z
pub fn tay(cpu: &mut Cpu, _mode: Mode) {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Transfer X to A
/// Function: A:=X
/// Flags: N Z
pub fn txa(cpu: &mut Cpu, _mode: Mode) {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Transfer Y to A
/// Function: A:=Y
/// Flags: N Z
pub fn tya(cpu: &mut Cpu, _mode: Mode) {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Transfer the stack pointer to X
/// Function: X:=S
/// Flags: N Z
pub fn tsx(cpu: &mut Cpu, _mode: Mode) {
    cpu.x = cpu.sp;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Transfer X to the stack pointer. The only transfer with no flag
/// effect.
/// Function: S:=X
/// Flags:
pub fn txs(cpu: &mut Cpu, _mode: Mode) {
    cpu.sp = cpu.x;
}

/// Push the accumulator.
/// Function: (S)-:=A
/// Flags:
pub fn pha(cpu: &mut Cpu, _mode: Mode) {
    let value = cpu.a;
    cpu.push_u8(value);
}

/// Pull the accumulator.
/// Function: A:=+(S)
/// Flags: N Z
pub fn pla(cpu: &mut Cpu, _mode: Mode) {
    cpu.a = cpu.pull_u8();
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Push the status register with B and the unused bit forced on, the same
/// layout BRK pushes.
/// Function: (S)-:=P
/// Flags:
pub fn php(cpu: &mut Cpu, _mode: Mode) {
    let value = cpu.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8;
    cpu.push_u8(value);
}

/// Pull the status register. Bits 4 and 5 keep their live values; the
/// stacked copies of them are discarded.
/// Function: P:=+(S)
/// Flags: N V D I Z C
pub fn plp(cpu: &mut Cpu, _mode: Mode) {
    let pulled = cpu.pull_u8();
    let preserved = StatusFlag::Break as u8 | StatusFlag::Unused as u8;
    cpu.p = (pulled & !preserved) | (cpu.p & preserved);
}
