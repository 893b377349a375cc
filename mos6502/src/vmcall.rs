use std::cell::RefCell;
use std::rc::Rc;

use crate::cpu::Cpu;

/// Host side of the opcode 0x80 bridge. The byte after the opcode selects
/// the host routine; what each selector means is entirely up to the host,
/// which is free to mutate the CPU and its bus.
pub trait VmHost {
    fn vmcall(&mut self, cpu: &mut Cpu, selector: u8);
}

pub type SharedVmHost = Rc<RefCell<dyn VmHost>>;
