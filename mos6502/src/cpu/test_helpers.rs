use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::FlatRam;
use crate::clock::CycleCounter;
use crate::cpu::{Cpu, StatusFlag};

/// Test programs load and start here unless a test says otherwise.
pub const ORIGIN: u16 = 0x8000;

/// The power-on status byte: interrupt disable plus the always-set unused
/// bit.
pub const P: u8 = 0b0010_0100;

pub const C: u8 = StatusFlag::Carry as u8;
pub const Z: u8 = StatusFlag::Zero as u8;
pub const I: u8 = StatusFlag::InterruptDisable as u8;
pub const D: u8 = StatusFlag::Decimal as u8;
pub const B: u8 = StatusFlag::Break as u8;
pub const U: u8 = StatusFlag::Unused as u8;
pub const V: u8 = StatusFlag::Overflow as u8;
pub const N: u8 = StatusFlag::Negative as u8;

/// Build a machine with the program bytes at ORIGIN and the pc pointing at
/// them. The cycle counter handle comes back alongside so tests can check
/// the charge.
pub fn machine(program: &[u8]) -> (Cpu, Rc<RefCell<CycleCounter>>) {
    let mut ram = FlatRam::new();
    ram.load_at(ORIGIN, program);
    let clock = Rc::new(RefCell::new(CycleCounter::new()));
    let mut cpu = Cpu::new(Rc::new(RefCell::new(ram)), clock.clone());
    cpu.pc = ORIGIN;
    (cpu, clock)
}

/// Step until the pc walks past the end of the program. Linear programs
/// and forward branches end this way; tests that need finer control step
/// explicitly.
pub fn run_program(program: &[u8]) -> Cpu {
    let (mut cpu, _) = machine(program);
    let end = ORIGIN + program.len() as u16;
    let mut steps = 0;
    while cpu.pc < end {
        cpu.step();
        steps += 1;
        assert!(steps < 10_000, "the test program failed to terminate");
    }
    cpu
}

/// Check the whole status byte at once, reporting each mismatched flag by
/// name.
pub fn assert_status(cpu: &Cpu, expected: u8) {
    if cpu.p == expected {
        return;
    }
    let named_flags = [
        ("Carry", C),
        ("Zero", Z),
        ("InterruptDisable", I),
        ("Decimal", D),
        ("Break", B),
        ("Unused", U),
        ("Overflow", V),
        ("Negative", N),
    ];
    let mut mismatches = String::new();
    for (name, mask) in named_flags {
        let expected_bit = expected & mask != 0;
        let actual_bit = cpu.p & mask != 0;
        if expected_bit != actual_bit {
            mismatches.push_str(&format!(
                "Expected {} to be {} but it was {}\n",
                name, expected_bit, actual_bit
            ));
        }
    }
    panic!(
        "\nExpected cpu status 0b{:08b} to match 0b{:08b}\n{}",
        cpu.p, expected, mismatches
    );
}

/// Run a byte program and check the accumulator and the status byte.
macro_rules! register_a {
    ($name:ident, $a:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            let cpu = run_program(&$program);
            assert_eq!(cpu.a, $a, "register A");
            assert_status(&cpu, $p);
        }
    };
}
pub(crate) use register_a;

macro_rules! register_x {
    ($name:ident, $x:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            let cpu = run_program(&$program);
            assert_eq!(cpu.x, $x, "register X");
            assert_status(&cpu, $p);
        }
    };
}
pub(crate) use register_x;

macro_rules! register_y {
    ($name:ident, $y:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            let cpu = run_program(&$program);
            assert_eq!(cpu.y, $y, "register Y");
            assert_status(&cpu, $p);
        }
    };
}
pub(crate) use register_y;

/// Run a byte program and check only the status byte.
macro_rules! status {
    ($name:ident, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            let cpu = run_program(&$program);
            assert_status(&cpu, $p);
        }
    };
}
pub(crate) use status;

/// Run a byte program and check one byte of memory.
macro_rules! memory {
    ($name:ident, [$addr:expr, $expected:expr], $program:expr) => {
        #[test]
        fn $name() {
            let cpu = run_program(&$program);
            let actual = cpu.bus.borrow().read_u8($addr);
            assert_eq!(actual, $expected, "memory at {:#06X}", $addr);
        }
    };
}
pub(crate) use memory;
