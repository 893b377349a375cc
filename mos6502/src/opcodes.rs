use crate::cpu::ops_alu::*;
use crate::cpu::ops_flow::*;
use crate::cpu::ops_move::*;
use crate::cpu::Cpu;

/// The addressing modes of the 6502. `Implied` also fills the table slots
/// with no assigned operation, so the decode tables are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Absolute,    // abs
    AbsoluteX,   // abx
    AbsoluteY,   // aby
    Accumulator, // a
    Immediate,   // imm
    Implied,     // imp
    Indirect,    // ind - JMP only
    IndirectX,   // izx
    IndirectY,   // izy
    Relative,    // rel
    ZeroPage,    // zp
    ZeroPageX,   // zpx
    ZeroPageY,   // zpy
}

/// Base cycle cost per opcode. This is the whole cycle model: there are no
/// page-crossing or branch-taken surcharges, and unassigned slots charge
/// their table value like any other opcode.
#[rustfmt::skip]
pub const CYCLE_TABLE: [u8; 256] = [
    7, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 2, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 2, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    6, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4,
    2, 6, 2, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5,
    2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2, 4, 4, 4, 4,
    2, 5, 2, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4,
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6,
    2, 5, 2, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
];

#[rustfmt::skip]
pub const MODE_TABLE: [Mode; 256] = {
    use Mode::{
        Absolute as Abs, AbsoluteX as Abx, AbsoluteY as Aby, Accumulator as Acc,
        Immediate as Imm, Implied as Imp, Indirect as Ind, IndirectX as Izx,
        IndirectY as Izy, Relative as Rel, ZeroPage as Zp, ZeroPageX as Zpx,
        ZeroPageY as Zpy,
    };
    [
        Imp, Izx, Imp, Imp, Imp, Zp,  Zp,  Imp, Imp, Imm, Acc, Imp, Imp, Abs, Abs, Imp, // 0x00
        Rel, Izy, Imp, Imp, Imp, Zpx, Zpx, Imp, Imp, Aby, Imp, Imp, Imp, Abx, Abx, Imp, // 0x10
        Abs, Izx, Imp, Imp, Zp,  Zp,  Zp,  Imp, Imp, Imm, Acc, Imp, Abs, Abs, Abs, Imp, // 0x20
        Rel, Izy, Imp, Imp, Imp, Zpx, Zpx, Imp, Imp, Aby, Imp, Imp, Imp, Abx, Abx, Imp, // 0x30
        Imp, Izx, Imp, Imp, Imp, Zp,  Zp,  Imp, Imp, Imm, Acc, Imp, Abs, Abs, Abs, Imp, // 0x40
        Rel, Izy, Imp, Imp, Imp, Zpx, Zpx, Imp, Imp, Aby, Imp, Imp, Imp, Abx, Abx, Imp, // 0x50
        Imp, Izx, Imp, Imp, Imp, Zp,  Zp,  Imp, Imp, Imm, Acc, Imp, Ind, Abs, Abs, Imp, // 0x60
        Rel, Izy, Imp, Imp, Imp, Zpx, Zpx, Imp, Imp, Aby, Imp, Imp, Imp, Abx, Abx, Imp, // 0x70
        Imp, Izx, Imp, Imp, Zp,  Zp,  Zp,  Imp, Imp, Imp, Imp, Imp, Abs, Abs, Abs, Imp, // 0x80
        Rel, Izy, Imp, Imp, Zpx, Zpx, Zpy, Imp, Imp, Aby, Imp, Imp, Imp, Abx, Imp, Imp, // 0x90
        Imm, Izx, Imm, Imp, Zp,  Zp,  Zp,  Imp, Imp, Imm, Imp, Imp, Abs, Abs, Abs, Imp, // 0xA0
        Rel, Izy, Imp, Imp, Zpx, Zpx, Zpy, Imp, Imp, Aby, Imp, Imp, Abx, Abx, Aby, Imp, // 0xB0
        Imm, Izx, Imp, Imp, Zp,  Zp,  Zp,  Imp, Imp, Imm, Imp, Imp, Abs, Abs, Abs, Imp, // 0xC0
        Rel, Izy, Imp, Imp, Imp, Zpx, Zpx, Imp, Imp, Aby, Imp, Imp, Imp, Abx, Abx, Imp, // 0xD0
        Imm, Izx, Imp, Imp, Zp,  Zp,  Zp,  Imp, Imp, Imm, Imp, Imp, Abs, Abs, Abs, Imp, // 0xE0
        Rel, Izy, Imp, Imp, Imp, Zpx, Zpx, Imp, Imp, Aby, Imp, Imp, Imp, Abx, Abx, Imp, // 0xF0
    ]
};

type OperationFn = fn(&mut Cpu, Mode);

/// The documented instruction set plus the VMCALL bridge at 0x80; `ill`
/// absorbs everything else.
#[rustfmt::skip]
pub const OP_TABLE: [OperationFn; 256] = [
    brk,    ora, ill, ill, ill, ora, asl, ill, php, ora, asl, ill, ill, ora, asl, ill, // 0x00
    bpl,    ora, ill, ill, ill, ora, asl, ill, clc, ora, ill, ill, ill, ora, asl, ill, // 0x10
    jsr,    and, ill, ill, bit, and, rol, ill, plp, and, rol, ill, bit, and, rol, ill, // 0x20
    bmi,    and, ill, ill, ill, and, rol, ill, sec, and, ill, ill, ill, and, rol, ill, // 0x30
    rti,    eor, ill, ill, ill, eor, lsr, ill, pha, eor, lsr, ill, jmp, eor, lsr, ill, // 0x40
    bvc,    eor, ill, ill, ill, eor, lsr, ill, cli, eor, ill, ill, ill, eor, lsr, ill, // 0x50
    rts,    adc, ill, ill, ill, adc, ror, ill, pla, adc, ror, ill, jmp, adc, ror, ill, // 0x60
    bvs,    adc, ill, ill, ill, adc, ror, ill, sei, adc, ill, ill, ill, adc, ror, ill, // 0x70
    vmcall, sta, ill, ill, sty, sta, stx, ill, dey, ill, txa, ill, sty, sta, stx, ill, // 0x80
    bcc,    sta, ill, ill, sty, sta, stx, ill, tya, sta, txs, ill, ill, sta, ill, ill, // 0x90
    ldy,    lda, ldx, ill, ldy, lda, ldx, ill, tay, lda, tax, ill, ldy, lda, ldx, ill, // 0xA0
    bcs,    lda, ill, ill, ldy, lda, ldx, ill, clv, lda, tsx, ill, ldy, lda, ldx, ill, // 0xB0
    cpy,    cmp, ill, ill, cpy, cmp, dec, ill, iny, cmp, dex, ill, cpy, cmp, dec, ill, // 0xC0
    bne,    cmp, ill, ill, ill, cmp, dec, ill, cld, cmp, ill, ill, ill, cmp, dec, ill, // 0xD0
    cpx,    sbc, ill, ill, cpx, sbc, inc, ill, inx, sbc, nop, ill, cpx, sbc, inc, ill, // 0xE0
    beq,    sbc, ill, ill, ill, sbc, inc, ill, sed, sbc, ill, ill, ill, sbc, inc, ill, // 0xF0
];

/// Canonical assembler mnemonics for the disassembler. An empty string
/// marks a slot with no assembler form: the unassigned opcodes and the
/// VMCALL bridge.
#[rustfmt::skip]
pub const MNEMONICS: [&str; 256] = [
    "BRK", "ORA", "",    "",    "",    "ORA", "ASL", "", "PHP", "ORA", "ASL", "", "",    "ORA", "ASL", "", // 0x00
    "BPL", "ORA", "",    "",    "",    "ORA", "ASL", "", "CLC", "ORA", "",    "", "",    "ORA", "ASL", "", // 0x10
    "JSR", "AND", "",    "",    "BIT", "AND", "ROL", "", "PLP", "AND", "ROL", "", "BIT", "AND", "ROL", "", // 0x20
    "BMI", "AND", "",    "",    "",    "AND", "ROL", "", "SEC", "AND", "",    "", "",    "AND", "ROL", "", // 0x30
    "RTI", "EOR", "",    "",    "",    "EOR", "LSR", "", "PHA", "EOR", "LSR", "", "JMP", "EOR", "LSR", "", // 0x40
    "BVC", "EOR", "",    "",    "",    "EOR", "LSR", "", "CLI", "EOR", "",    "", "",    "EOR", "LSR", "", // 0x50
    "RTS", "ADC", "",    "",    "",    "ADC", "ROR", "", "PLA", "ADC", "ROR", "", "JMP", "ADC", "ROR", "", // 0x60
    "BVS", "ADC", "",    "",    "",    "ADC", "ROR", "", "SEI", "ADC", "",    "", "",    "ADC", "ROR", "", // 0x70
    "",    "STA", "",    "",    "STY", "STA", "STX", "", "DEY", "",    "TXA", "", "STY", "STA", "STX", "", // 0x80
    "BCC", "STA", "",    "",    "STY", "STA", "STX", "", "TYA", "STA", "TXS", "", "",    "STA", "",    "", // 0x90
    "LDY", "LDA", "LDX", "",    "LDY", "LDA", "LDX", "", "TAY", "LDA", "TAX", "", "LDY", "LDA", "LDX", "", // 0xA0
    "BCS", "LDA", "",    "",    "LDY", "LDA", "LDX", "", "CLV", "LDA", "TSX", "", "LDY", "LDA", "LDX", "", // 0xB0
    "CPY", "CMP", "",    "",    "CPY", "CMP", "DEC", "", "INY", "CMP", "DEX", "", "CPY", "CMP", "DEC", "", // 0xC0
    "BNE", "CMP", "",    "",    "",    "CMP", "DEC", "", "CLD", "CMP", "",    "", "",    "CMP", "DEC", "", // 0xD0
    "CPX", "SBC", "",    "",    "CPX", "SBC", "INC", "", "INX", "SBC", "NOP", "", "CPX", "SBC", "INC", "", // 0xE0
    "BEQ", "SBC", "",    "",    "",    "SBC", "INC", "", "SED", "SBC", "",    "", "",    "SBC", "INC", "", // 0xF0
];
