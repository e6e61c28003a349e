//! ORA and AND: bitwise-OR/AND the accumulator with a fetched value across
//! all 15 addressing-mode variants the 65C816 offers either mnemonic.

use crate::addressing::{AddressingMode, BankKind, IndexReg};
use crate::cpu::Cpu;
use crate::cycles::{calc_cycles, CycleMod};
use crate::opcodes::OpcodeInstance;
use crate::status::check_flags_for_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    Ora,
    And,
}

pub struct Logical {
    op: LogicalOp,
    opcode: u8,
    mode: AddressingMode,
}

impl Logical {
    pub fn from_opcode(opcode: u8, _cpu: &Cpu) -> Option<Logical> {
        use AddressingMode::*;
        use LogicalOp::*;

        let (op, mode) = match opcode {
            0x09 => (Ora, Immediate),
            0x29 => (And, Immediate),
            0x0D => (Ora, Absolute(BankKind::Data)),
            0x2D => (And, Absolute(BankKind::Data)),
            0x0F => (Ora, Absolute(BankKind::Long)),
            0x2F => (And, Absolute(BankKind::Long)),
            0x05 => (Ora, DirectPage),
            0x25 => (And, DirectPage),
            0x12 => (Ora, Indirect(Box::new(DirectPage), BankKind::Data)),
            0x32 => (And, Indirect(Box::new(DirectPage), BankKind::Data)),
            0x07 => (Ora, Indirect(Box::new(DirectPage), BankKind::Long)),
            0x27 => (And, Indirect(Box::new(DirectPage), BankKind::Long)),
            0x1D => (
                Ora,
                Indexed(Box::new(Absolute(BankKind::Data)), IndexReg::X),
            ),
            0x3D => (
                And,
                Indexed(Box::new(Absolute(BankKind::Data)), IndexReg::X),
            ),
            0x1F => (
                Ora,
                Indexed(Box::new(Absolute(BankKind::Long)), IndexReg::X),
            ),
            0x3F => (
                And,
                Indexed(Box::new(Absolute(BankKind::Long)), IndexReg::X),
            ),
            0x19 => (
                Ora,
                Indexed(Box::new(Absolute(BankKind::Data)), IndexReg::Y),
            ),
            0x39 => (
                And,
                Indexed(Box::new(Absolute(BankKind::Data)), IndexReg::Y),
            ),
            0x15 => (Ora, Indexed(Box::new(DirectPage), IndexReg::X)),
            0x35 => (And, Indexed(Box::new(DirectPage), IndexReg::X)),
            0x01 => (
                Ora,
                Indirect(Box::new(Indexed(Box::new(DirectPage), IndexReg::X)), BankKind::Data),
            ),
            0x21 => (
                And,
                Indirect(Box::new(Indexed(Box::new(DirectPage), IndexReg::X)), BankKind::Data),
            ),
            0x11 => (
                Ora,
                Indexed(Box::new(Indirect(Box::new(DirectPage), BankKind::Data)), IndexReg::Y),
            ),
            0x31 => (
                And,
                Indexed(Box::new(Indirect(Box::new(DirectPage), BankKind::Data)), IndexReg::Y),
            ),
            0x17 => (
                Ora,
                Indexed(Box::new(Indirect(Box::new(DirectPage), BankKind::Long)), IndexReg::Y),
            ),
            0x37 => (
                And,
                Indexed(Box::new(Indirect(Box::new(DirectPage), BankKind::Long)), IndexReg::Y),
            ),
            0x03 => (Ora, Stack),
            0x23 => (And, Stack),
            0x13 => (
                Ora,
                Indexed(Box::new(Indirect(Box::new(Stack), BankKind::Data)), IndexReg::Y),
            ),
            0x33 => (
                And,
                Indexed(Box::new(Indirect(Box::new(Stack), BankKind::Data)), IndexReg::Y),
            ),
            _ => return None,
        };
        Some(Logical { op, opcode, mode })
    }
}

impl OpcodeInstance for Logical {
    fn byte_size(&self, cpu: &Cpu) -> u8 {
        self.mode.byte_size(cpu) + 1
    }

    fn total_cycles(&self, cpu: &Cpu) -> i32 {
        use CycleMod as M;
        match self.opcode {
            0x09 | 0x29 => calc_cycles(cpu, &[M::constant(2), M::acc_is_16_bit(1)]),
            0x0D | 0x2D => calc_cycles(cpu, &[M::constant(4), M::acc_is_16_bit(1)]),
            0x0F | 0x2F => calc_cycles(cpu, &[M::constant(5), M::acc_is_16_bit(1)]),
            0x05 | 0x25 => calc_cycles(
                cpu,
                &[M::constant(3), M::acc_is_16_bit(1), M::low_direct_page_is_not_zero(1)],
            ),
            0x12 | 0x32 => calc_cycles(
                cpu,
                &[M::constant(5), M::acc_is_16_bit(1), M::low_direct_page_is_not_zero(1)],
            ),
            0x07 | 0x27 => calc_cycles(
                cpu,
                &[M::constant(6), M::acc_is_16_bit(1), M::low_direct_page_is_not_zero(1)],
            ),
            0x1D | 0x3D => {
                let pre_index = AddressingMode::Absolute(BankKind::Data);
                let initial = pre_index.address(cpu);
                calc_cycles(
                    cpu,
                    &[
                        M::constant(4),
                        M::acc_is_16_bit(1),
                        M::check_page_boundary(1, initial, IndexReg::X),
                    ],
                )
            }
            0x1F | 0x3F => calc_cycles(cpu, &[M::constant(5), M::acc_is_16_bit(1)]),
            0x19 | 0x39 => {
                let pre_index = AddressingMode::Absolute(BankKind::Data);
                let initial = pre_index.address(cpu);
                calc_cycles(
                    cpu,
                    &[
                        M::constant(4),
                        M::acc_is_16_bit(1),
                        M::check_page_boundary(1, initial, IndexReg::Y),
                    ],
                )
            }
            0x15 | 0x35 => calc_cycles(
                cpu,
                &[M::constant(4), M::acc_is_16_bit(1), M::low_direct_page_is_not_zero(1)],
            ),
            0x01 | 0x21 => calc_cycles(
                cpu,
                &[M::constant(6), M::acc_is_16_bit(1), M::low_direct_page_is_not_zero(1)],
            ),
            0x11 | 0x31 => calc_cycles(
                cpu,
                &[M::constant(5), M::acc_is_16_bit(1), M::low_direct_page_is_not_zero(1)],
            ),
            0x17 | 0x37 => calc_cycles(
                cpu,
                &[M::constant(6), M::acc_is_16_bit(1), M::low_direct_page_is_not_zero(1)],
            ),
            0x03 | 0x23 => calc_cycles(cpu, &[M::constant(4), M::acc_is_16_bit(1)]),
            0x13 | 0x33 => calc_cycles(cpu, &[M::constant(7), M::acc_is_16_bit(1)]),
            _ => unreachable!("opcode {:#04X} not a Logical instance", self.opcode),
        }
    }

    fn execute(&self, cpu: &mut Cpu) {
        let data = self.mode.fetch(cpu);
        let acc = cpu.acc();
        let result = match self.op {
            LogicalOp::Ora => acc | data,
            LogicalOp::And => acc & data,
        };
        let flags = check_flags_for_value(result, cpu.acc_size());
        cpu.set_acc(result);
        cpu.set_negative(flags.negative);
        cpu.set_zero(flags.zero);
    }

    fn disasm(&self, cpu: &Cpu) -> String {
        let mnemonic = match self.op {
            LogicalOp::Ora => "ORA",
            LogicalOp::And => "AND",
        };
        format!("{} {}", mnemonic, self.mode.disasm(cpu))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Memory;
    use crate::numeric::{EmuMode, Width};
    use crate::status::StatusReg;

    fn cpu_with(mem: Memory, acc: u16) -> Cpu {
        let mut cpu = Cpu::with_state(
            acc,
            0,
            0,
            0x01FF,
            0,
            0,
            0,
            0,
            StatusReg::new(0),
            EmuMode::Emulation,
            mem,
        );
        cpu.set_acc(acc);
        cpu
    }

    #[test]
    fn s1_ora_immediate_emulation_mode() {
        let mem = Memory::new(vec![0x09, 0xF0]);
        let mut cpu = cpu_with(mem, 0x0F);
        let instr = Logical::from_opcode(0x09, &cpu).expect("ORA immediate decodes");
        assert_eq!(instr.byte_size(&cpu), 2);
        assert_eq!(instr.total_cycles(&cpu), 2);
        instr.execute(&mut cpu);
        assert_eq!(cpu.acc(), 0xFF);
        assert!(cpu.negative());
        assert!(!cpu.zero());
    }

    #[test]
    fn s2_and_absolute_native_16_bit() {
        let mem = Memory::zeroed(0x1100)
            .write_byte(0, 0x2D)
            .write_word(1, 0x1000)
            .write_word(0x1000, 0xF00F);
        let mut cpu = cpu_with(mem, 0);
        cpu.set_emu_mode(EmuMode::Native);
        cpu.set_acc_size(Width::Bit16);
        cpu.set_acc(0xFF00);
        let instr = Logical::from_opcode(0x2D, &cpu).expect("AND absolute decodes");
        assert_eq!(instr.total_cycles(&cpu), 5);
        instr.execute(&mut cpu);
        assert_eq!(cpu.acc(), 0xF000);
        assert!(cpu.negative());
        assert!(!cpu.zero());
    }

    #[test]
    fn indexed_absolute_pays_page_crossing_penalty() {
        let mem = Memory::zeroed(0x11100)
            .write_byte(0, 0x1D)
            .write_word(1, 0x10FF);
        let mut cpu = cpu_with(mem, 0);
        cpu.set_emu_mode(EmuMode::Native);
        cpu.set_acc_size(Width::Bit8);
        cpu.set_x(0x0001); // 0x10FF + 1 crosses into 0x1100: page penalty applies
        let instr = Logical::from_opcode(0x1D, &cpu).expect("ORA abs,x decodes");
        assert_eq!(instr.total_cycles(&cpu), 5);
    }

    #[test]
    fn unknown_opcode_byte_is_not_claimed() {
        let mem = Memory::zeroed(4);
        let cpu = cpu_with(mem, 0);
        assert!(Logical::from_opcode(0xFF, &cpu).is_none());
    }

    #[test]
    fn disasm_matches_mnemonic_and_mode() {
        let mem = Memory::zeroed(4).write_byte(1, 0x42);
        let cpu = cpu_with(mem, 0);
        let instr = Logical::from_opcode(0x29, &cpu).unwrap();
        assert_eq!(instr.disasm(&cpu), "AND #$42");
    }
}
