use std::cell::RefCell;
use std::rc::Rc;

/// Receives the base cycle cost of every retired instruction, exactly once
/// per step. The count only ever moves forward.
pub trait Timekeeper {
    fn advance(&mut self, cycles: u32);
}

pub type SharedClock = Rc<RefCell<dyn Timekeeper>>;

/// A timekeeper that just accumulates the running total.
pub struct CycleCounter {
    pub total: u64,
}

impl CycleCounter {
    pub fn new() -> CycleCounter {
        CycleCounter { total: 0 }
    }
}

impl Timekeeper for CycleCounter {
    fn advance(&mut self, cycles: u32) {
        self.total += cycles as u64;
    }
}
