use std::cell::RefCell;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::path::PathBuf;
use std::rc::Rc;

use colored::Colorize;
use structopt::StructOpt;

use mos6502::bus::FlatRam;
use mos6502::clock::CycleCounter;
use mos6502::constants::InterruptVectors;
use mos6502::cpu::Cpu;
use mos6502::disasm;
use mos6502::vmcall::VmHost;

/// Load a raw 6502 image into a flat 64 KiB memory and step it.
#[derive(StructOpt)]
#[structopt(name = "mos6502-mon")]
struct Options {
    /// Raw binary image to load.
    image: PathBuf,

    /// Address the image is loaded at.
    #[structopt(long, default_value = "0x8000", parse(try_from_str = parse_address))]
    origin: u16,

    /// Entry point; defaults to the reset vector at $FFFC.
    #[structopt(long, parse(try_from_str = parse_address))]
    entry: Option<u16>,

    /// Stop after this many instructions.
    #[structopt(long, default_value = "100000")]
    steps: u64,

    /// Print every instruction along with the register file.
    #[structopt(long)]
    trace: bool,
}

fn parse_address(text: &str) -> Result<u16, ParseIntError> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix('$')) {
        u16::from_str_radix(hex, 16)
    } else {
        text.parse()
    }
}

/// A minimal host for the VMCALL bridge. Selector 0 writes the byte in A
/// to stdout, selector 1 dumps the register file to stderr.
struct MonitorHost;

impl VmHost for MonitorHost {
    fn vmcall(&mut self, cpu: &mut Cpu, selector: u8) {
        match selector {
            0x00 => {
                print!("{}", cpu.a as char);
                let _ = io::stdout().flush();
            }
            0x01 => eprintln!(
                "A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{:02X} PC:{:04X}",
                cpu.a, cpu.x, cpu.y, cpu.sp, cpu.p, cpu.pc
            ),
            _ => eprintln!("vmcall: unknown selector ${:02X}", selector),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = Options::from_args();
    let image = fs::read(&options.image)?;

    let mut ram = FlatRam::new();
    ram.load_at(options.origin, &image);
    let bus = ram.into_shared();

    let clock = Rc::new(RefCell::new(CycleCounter::new()));
    let mut cpu = Cpu::new(bus, clock.clone());
    cpu.install_vmcall_host(Rc::new(RefCell::new(MonitorHost)));

    cpu.pc = match options.entry {
        Some(entry) => entry,
        None => cpu
            .bus
            .borrow()
            .read_u16(InterruptVectors::ResetVector as u16),
    };

    let mut text = String::new();
    for _ in 0..options.steps {
        // Stopping at BRK is monitor policy, not core semantics; the core
        // itself would run on through the vector.
        if cpu.peek_u8() == 0x00 {
            break;
        }
        if options.trace {
            text.clear();
            disasm::disassemble(&cpu, cpu.pc, &mut text);
            if text.is_empty() {
                text = format!(".byte ${:02X}", cpu.peek_u8());
            }
            println!(
                "{} {:<14} {}",
                format!("${:04X}", cpu.pc).dimmed(),
                text,
                format!(
                    "A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{:02X}",
                    cpu.a, cpu.x, cpu.y, cpu.sp, cpu.p
                )
                .dimmed(),
            );
        }
        cpu.step();
    }

    eprintln!("{}", format!("{} cycles", clock.borrow().total).bold());
    Ok(())
}
