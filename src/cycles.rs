//! The cycle-cost calculator: a list of conditional cycle deltas summed
//! against the current CPU state. Every opcode family builds its own
//! `Vec<CycleMod>` and defers the arithmetic to `calc_cycles`.

use crate::addressing::{indexed, IndexReg};
use crate::cpu::Cpu;
use crate::numeric::{EmuMode, Width};

/// One conditional cycle delta: `cycles` is added to the total iff
/// `predicate(cpu)` holds. The predicate is a boxed closure rather than a
/// bare function pointer because the page-boundary constructors close over
/// a runtime-computed address, carrying their `initial_addr` by value.
pub struct CycleMod {
    cycles: i32,
    predicate: Box<dyn Fn(&Cpu) -> bool>,
}

impl CycleMod {
    /// Always contributes `n`.
    pub fn constant(n: i32) -> CycleMod {
        CycleMod {
            cycles: n,
            predicate: Box::new(|_cpu| true),
        }
    }

    /// Contributes `n` iff the accumulator is currently 16-bit.
    pub fn acc_is_16_bit(n: i32) -> CycleMod {
        CycleMod {
            cycles: n,
            predicate: Box::new(|cpu| cpu.acc_size() == Width::Bit16),
        }
    }

    /// Contributes `n` iff the index registers are currently 16-bit.
    pub fn index_is_16_bit(n: i32) -> CycleMod {
        CycleMod {
            cycles: n,
            predicate: Box::new(|cpu| cpu.index_size() == Width::Bit16),
        }
    }

    /// Contributes `n` iff the CPU is in native mode.
    pub fn native_mode(n: i32) -> CycleMod {
        CycleMod {
            cycles: n,
            predicate: Box::new(|cpu| cpu.emu_mode() == EmuMode::Native),
        }
    }

    /// Contributes `n` iff the low byte of the direct-page register is
    /// nonzero (the extra cycle direct-page modes pay when D isn't
    /// page-aligned).
    pub fn low_direct_page_is_not_zero(n: i32) -> CycleMod {
        CycleMod {
            cycles: n,
            predicate: Box::new(|cpu| cpu.direct_page() & 0xFF != 0),
        }
    }

    /// Contributes `n` iff indexing `initial24` by `reg` crosses a
    /// 256-byte page boundary (the high 16 bits of the 24-bit address
    /// change).
    pub fn check_page_boundary(n: i32, initial24: u32, reg: IndexReg) -> CycleMod {
        CycleMod {
            cycles: n,
            predicate: Box::new(move |cpu| {
                let new24 = indexed(initial24, cpu, reg);
                (initial24 & 0xFFFF00) != (new24 & 0xFFFF00)
            }),
        }
    }

    /// Contributes `n` iff the CPU is in emulation mode AND `initial24` and
    /// `new24` differ in their high 16 bits.
    pub fn check_page_boundary_and_emulation_mode(n: i32, initial24: u32, new24: u32) -> CycleMod {
        CycleMod {
            cycles: n,
            predicate: Box::new(move |cpu| {
                cpu.emu_mode() == EmuMode::Emulation && (initial24 >> 8) != (new24 >> 8)
            }),
        }
    }
}

/// Sums the `cycles` of every `CycleMod` whose predicate holds against
/// `cpu`.
pub fn calc_cycles(cpu: &Cpu, mods: &[CycleMod]) -> i32 {
    mods.iter()
        .filter(|m| (m.predicate)(cpu))
        .map(|m| m.cycles)
        .sum()
}
