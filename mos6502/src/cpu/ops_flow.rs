use crate::constants::InterruptVectors;
use crate::cpu::{Cpu, StatusFlag};
use crate::opcodes::Mode;

/// Every branch reads its signed offset; the pc only retargets when the
/// condition holds.
fn branch_on(cpu: &mut Cpu, mode: Mode, condition: bool) {
    let target = cpu.get_operand_address(mode);
    if condition {
        cpu.pc = target;
    }
}

/// Branch if plus
/// Function: branch on N=0
pub fn bpl(cpu: &mut Cpu, mode: Mode) {
    let condition = !cpu.is_status_flag_set(StatusFlag::Negative);
    branch_on(cpu, mode, condition);
}

/// Branch if minus
/// Function: branch on N=1
pub fn bmi(cpu: &mut Cpu, mode: Mode) {
    let condition = cpu.is_status_flag_set(StatusFlag::Negative);
    branch_on(cpu, mode, condition);
}

/// Branch if overflow clear
/// Function: branch on V=0
pub fn bvc(cpu: &mut Cpu, mode: Mode) {
    let condition = !cpu.is_status_flag_set(StatusFlag::Overflow);
    branch_on(cpu, mode, condition);
}

/// Branch if overflow set
/// Function: branch on V=1
pub fn bvs(cpu: &mut Cpu, mode: Mode) {
    let condition = cpu.is_status_flag_set(StatusFlag::Overflow);
    branch_on(cpu, mode, condition);
}

/// Branch if carry clear
/// Function: branch on C=0
pub fn bcc(cpu: &mut Cpu, mode: Mode) {
    let condition = !cpu.is_status_flag_set(StatusFlag::Carry);
    branch_on(cpu, mode, condition);
}

/// Branch if carry set
/// Function: branch on C=1
pub fn bcs(cpu: &mut Cpu, mode: Mode) {
    let condition = cpu.is_status_flag_set(StatusFlag::Carry);
    branch_on(cpu, mode, condition);
}

/// Branch if not equal
/// Function: branch on Z=0
pub fn bne(cpu: &mut Cpu, mode: Mode) {
    let condition = !cpu.is_status_flag_set(StatusFlag::Zero);
    branch_on(cpu, mode, condition);
}

/// Branch if equal
/// Function: branch on Z=1
pub fn beq(cpu: &mut Cpu, mode: Mode) {
    let condition = cpu.is_status_flag_set(StatusFlag::Zero);
    branch_on(cpu, mode, condition);
}

/// Jump. The indirect form goes through the decode table's Indirect mode,
/// which carries the page-wrap quirk.
/// Function: PC:={adr}
pub fn jmp(cpu: &mut Cpu, mode: Mode) {
    cpu.pc = cpu.get_operand_address(mode);
}

/// Jump to subroutine. The pushed return address is the address of the
/// instruction's own last byte; rts puts back the missing 1.
/// Function: (S)-:=PC PC:={adr}
pub fn jsr(cpu: &mut Cpu, mode: Mode) {
    let target = cpu.get_operand_address(mode);
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_u16(return_address);
    cpu.pc = target;
}

/// Return from subroutine.
/// Function: PC:=+(S)+1
pub fn rts(cpu: &mut Cpu, _mode: Mode) {
    cpu.pc = cpu.pull_u16().wrapping_add(1);
}

/// Software interrupt through the IRQ/BRK vector. The byte after the
/// opcode is padding: the pushed pc points past it. The pushed status has
/// B and the unused bit forced on.
/// Function: (S)-:=PC+1,P PC:=($FFFE)
/// Flags: I
pub fn brk(cpu: &mut Cpu, _mode: Mode) {
    cpu.pc = cpu.pc.wrapping_add(1);
    let return_address = cpu.pc;
    cpu.push_u16(return_address);
    let status = cpu.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8;
    cpu.push_u8(status);
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
    cpu.pc = cpu
        .bus
        .borrow()
        .read_u16(InterruptVectors::IrqBrkVector as u16);
}

/// Return from interrupt. The stacked status replaces everything except
/// the live B flag, and the pc comes back without the rts-style +1.
/// Function: P,PC:=+(S)
/// Flags: N V D I Z C
pub fn rti(cpu: &mut Cpu, _mode: Mode) {
    let pulled = cpu.pull_u8();
    cpu.p = (pulled & !(StatusFlag::Break as u8)) | (cpu.p & StatusFlag::Break as u8);
    cpu.pc = cpu.pull_u16();
}

/// Clear carry flag
/// Function: C:=0
pub fn clc(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::Carry, false);
}

/// Set carry flag
/// Function: C:=1
pub fn sec(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::Carry, true);
}

/// Clear decimal flag
/// Function: D:=0
pub fn cld(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::Decimal, false);
}

/// Set decimal flag
/// Function: D:=1
pub fn sed(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::Decimal, true);
}

/// Clear interrupt disable
/// Function: I:=0
pub fn cli(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, false);
}

/// Set interrupt disable
/// Function: I:=1
pub fn sei(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
}

/// Clear overflow flag
/// Function: V:=0
pub fn clv(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_status_flag(StatusFlag::Overflow, false);
}

/// No operation beyond the fetch and the cycle charge.
pub fn nop(_cpu: &mut Cpu, _mode: Mode) {}

/// Unassigned opcode slots fall through without touching any state; the
/// cycle table still charges them.
pub fn ill(_cpu: &mut Cpu, _mode: Mode) {}

/// Host-call bridge on opcode 0x80, which is not part of the 6502 set.
/// The byte after the opcode selects the host routine; with no host
/// installed the instruction is inert.
pub fn vmcall(cpu: &mut Cpu, _mode: Mode) {
    let selector = cpu.next_u8();
    if let Some(host) = cpu.vmcall.clone() {
        host.borrow_mut().vmcall(cpu, selector);
    }
}
