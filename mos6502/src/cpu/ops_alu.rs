use crate::cpu::{Cpu, StatusFlag};
use crate::opcodes::Mode;

/// Apply the logical "or" operator on the accumulator.
/// Function: A:=A or {adr}
/// Flags: N Z
pub fn ora(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    cpu.a |= operand;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Apply the logical "and" operator on the accumulator.
/// Function: A:=A&{adr}
/// Flags: N Z
pub fn and(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    cpu.a &= operand;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Logical exclusive or.
/// Function: A:=A exor {adr}
/// Flags: N Z
pub fn eor(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    cpu.a ^= operand;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Add with carry. The add runs in u16 space so the ninth bit lands in
/// the carry flag. The decimal flag is tracked in the status register but
/// has no effect on the result.
/// Function: A:=A+{adr}+C
/// Flags: N V Z C
pub fn adc(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    let sum = cpu.a as u16 + operand as u16 + cpu.carry() as u16;
    let result = sum as u8;
    cpu.set_status_flag(StatusFlag::Carry, sum > 0xFF);
    // Signed overflow: the inputs agree on the sign bit and the result
    // disagrees with them.
    cpu.set_status_flag(
        StatusFlag::Overflow,
        !(cpu.a ^ operand) & (cpu.a ^ result) & 0x80 != 0,
    );
    cpu.a = result;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Subtract with carry; the borrow is the carry bit inverted. Runs in u16
/// space so a borrow out leaves the difference above 0xFF. Decimal mode
/// is ignored, as in adc.
/// Function: A:=A-{adr}-(1-C)
/// Flags: N V Z C
pub fn sbc(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    let borrow = (1 - cpu.carry()) as u16;
    let difference = (cpu.a as u16)
        .wrapping_sub(operand as u16)
        .wrapping_sub(borrow);
    let result = difference as u8;
    cpu.set_status_flag(
        StatusFlag::Overflow,
        (cpu.a ^ operand) & (cpu.a ^ result) & 0x80 != 0,
    );
    cpu.set_status_flag(StatusFlag::Carry, difference <= 0xFF);
    cpu.a = result;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// The three compare instructions share one flag recipe; the register is
/// never modified.
/// http://6502.org/tutorials/compare_instructions.html
fn compare(cpu: &mut Cpu, register: u8, operand: u8) {
    cpu.set_status_flag(StatusFlag::Carry, register >= operand);
    cpu.update_zero_and_negative_flag(register.wrapping_sub(operand));
}

/// Compare A with memory.
/// Function: A-{adr}
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    let register = cpu.a;
    compare(cpu, register, operand);
}

/// Compare X with memory.
/// Function: X-{adr}
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    let register = cpu.x;
    compare(cpu, register, operand);
}

/// Compare Y with memory.
/// Function: Y-{adr}
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    let register = cpu.y;
    compare(cpu, register, operand);
}

/// Increment at an address.
/// Function: {adr}:={adr}+1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu, mode: Mode) {
    let (address, operand) = cpu.get_operand(mode);
    let result = operand.wrapping_add(1);
    cpu.bus.borrow_mut().write_u8(address, result);
    cpu.update_zero_and_negative_flag(result);
}

/// Decrement at an address.
/// Function: {adr}:={adr}-1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu, mode: Mode) {
    let (address, operand) = cpu.get_operand(mode);
    let result = operand.wrapping_sub(1);
    cpu.bus.borrow_mut().write_u8(address, result);
    cpu.update_zero_and_negative_flag(result);
}

/// Increment X
/// Function: X:=X+1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu, _mode: Mode) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Increment Y
/// Function: Y:=Y+1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu, _mode: Mode) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Decrement X
/// Function: X:=X-1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu, _mode: Mode) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Decrement Y
/// Function: Y:=Y-1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu, _mode: Mode) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Arithmetic shift left, on memory or on the accumulator.
/// Function: {adr}:={adr}*2
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu, mode: Mode) {
    let (target, operand) = cpu.get_operand_or_accumulator(mode);
    let result = operand << 1;
    cpu.write_operand(target, result);
    // Carry picks up the bit shifted out.
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b1000_0000 != 0);
    cpu.update_zero_and_negative_flag(result);
}

/// Logical shift right. The negative flag always clears: the top bit of
/// the result is zero by construction.
/// Function: {adr}:={adr}/2
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu, mode: Mode) {
    let (target, operand) = cpu.get_operand_or_accumulator(mode);
    let result = operand >> 1;
    cpu.write_operand(target, result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b0000_0001 != 0);
    cpu.update_zero_and_negative_flag(result);
}

/// Rotate left through the carry.
/// Function: {adr}:={adr}*2+C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu, mode: Mode) {
    let (target, operand) = cpu.get_operand_or_accumulator(mode);
    let result = (operand << 1) | cpu.carry();
    cpu.write_operand(target, result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b1000_0000 != 0);
    cpu.update_zero_and_negative_flag(result);
}

/// Rotate right through the carry.
/// Function: {adr}:={adr}/2+C*128
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu, mode: Mode) {
    let (target, operand) = cpu.get_operand_or_accumulator(mode);
    let result = (operand >> 1) | (cpu.carry() << 7);
    cpu.write_operand(target, result);
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b0000_0001 != 0);
    cpu.update_zero_and_negative_flag(result);
}

/// Bit test: the zero flag reflects the masked accumulator while N and V
/// are copied straight out of the memory byte. A itself is untouched.
/// Function: N:=b7 V:=b6 Z:=A&{adr}
/// Flags: N V Z
pub fn bit(cpu: &mut Cpu, mode: Mode) {
    let (_, operand) = cpu.get_operand(mode);
    cpu.set_status_flag(StatusFlag::Zero, cpu.a & operand == 0);
    cpu.set_status_flag(StatusFlag::Overflow, operand & 0b0100_0000 != 0);
    cpu.set_status_flag(StatusFlag::Negative, operand & 0b1000_0000 != 0);
}
