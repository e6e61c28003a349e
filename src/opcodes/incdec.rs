//! INC/DEC and their dedicated register forms INX/INY/DEX/DEY. The
//! accumulator and memory forms operate at the accumulator
//! width; the X/Y register forms operate at the index-register width -
//! both are `Register` addressing-mode variants, so `width_for` is the only
//! place that distinction lives.

use crate::addressing::{AddressingMode, BankKind, IndexReg, RegisterOperand};
use crate::cpu::Cpu;
use crate::cycles::{calc_cycles, CycleMod};
use crate::numeric::Width;
use crate::opcodes::OpcodeInstance;
use crate::status::check_flags_for_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecOp {
    Inc,
    Dec,
}

pub struct IncDec {
    op: IncDecOp,
    opcode: u8,
    mode: AddressingMode,
    mnemonic_override: Option<&'static str>,
}

impl IncDec {
    pub fn from_opcode(opcode: u8, _cpu: &Cpu) -> Option<IncDec> {
        use AddressingMode::*;
        use IncDecOp::*;

        let (op, mode, mnemonic_override) = match opcode {
            0x1A => (Inc, Register(RegisterOperand::A), None),
            0xEE => (Inc, Absolute(BankKind::Data), None),
            0xE6 => (Inc, DirectPage, None),
            0xFE => (Inc, Indexed(Box::new(Absolute(BankKind::Data)), IndexReg::X), None),
            0xF6 => (Inc, Indexed(Box::new(DirectPage), IndexReg::X), None),
            0xE8 => (Inc, Register(RegisterOperand::X), Some("INX")),
            0xC8 => (Inc, Register(RegisterOperand::Y), Some("INY")),
            0x3A => (Dec, Register(RegisterOperand::A), None),
            0xCE => (Dec, Absolute(BankKind::Data), None),
            0xC6 => (Dec, DirectPage, None),
            0xDE => (Dec, Indexed(Box::new(Absolute(BankKind::Data)), IndexReg::X), None),
            0xD6 => (Dec, Indexed(Box::new(DirectPage), IndexReg::X), None),
            0xCA => (Dec, Register(RegisterOperand::X), Some("DEX")),
            0x88 => (Dec, Register(RegisterOperand::Y), Some("DEY")),
            _ => return None,
        };
        Some(IncDec {
            op,
            opcode,
            mode,
            mnemonic_override,
        })
    }

    fn width_for(&self, cpu: &Cpu) -> Width {
        match self.mode {
            AddressingMode::Register(RegisterOperand::X) | AddressingMode::Register(RegisterOperand::Y) => {
                cpu.index_size()
            }
            _ => cpu.acc_size(),
        }
    }
}

impl OpcodeInstance for IncDec {
    fn byte_size(&self, cpu: &Cpu) -> u8 {
        self.mode.byte_size(cpu) + 1
    }

    fn total_cycles(&self, cpu: &Cpu) -> i32 {
        use CycleMod as M;
        match self.opcode {
            0x1A | 0x3A | 0xE8 | 0xC8 | 0xCA | 0x88 => calc_cycles(cpu, &[M::constant(2)]),
            0xEE | 0xCE => calc_cycles(cpu, &[M::constant(6), M::acc_is_16_bit(2)]),
            0xE6 | 0xC6 => calc_cycles(
                cpu,
                &[M::constant(5), M::acc_is_16_bit(2), M::low_direct_page_is_not_zero(1)],
            ),
            0xFE | 0xDE => calc_cycles(cpu, &[M::constant(7), M::acc_is_16_bit(2)]),
            0xF6 | 0xD6 => calc_cycles(
                cpu,
                &[M::constant(6), M::acc_is_16_bit(2), M::low_direct_page_is_not_zero(1)],
            ),
            _ => unreachable!("opcode {:#04X} not an IncDec instance", self.opcode),
        }
    }

    fn execute(&self, cpu: &mut Cpu) {
        let width = self.width_for(cpu);
        let value = self.mode.fetch(cpu);
        let new_value = match self.op {
            IncDecOp::Inc => (value.wrapping_add(1)) & width.mask(),
            IncDecOp::Dec => {
                if value == 0 {
                    width.mask()
                } else {
                    (value.wrapping_sub(1)) & width.mask()
                }
            }
        };
        let flags = check_flags_for_value(new_value, width);
        self.mode.store(cpu, new_value);
        cpu.set_negative(flags.negative);
        cpu.set_zero(flags.zero);
    }

    fn disasm(&self, cpu: &Cpu) -> String {
        if let Some(name) = self.mnemonic_override {
            name.to_string()
        } else {
            let mnemonic = match self.op {
                IncDecOp::Inc => "INC",
                IncDecOp::Dec => "DEC",
            };
            format!("{} {}", mnemonic, self.mode.disasm(cpu))
        }
    }
}
