//! BIT, TRB (test-and-reset bits), TSB (test-and-set bits). All three
//! inspect `acc & data`; BIT additionally copies bits 7/6
//! (or 15/14) of the fetched data straight into N/V, a quirk unique to this
//! family (every other logical op derives N from the *result*, not the
//! operand).

use crate::addressing::{AddressingMode, BankKind, IndexReg};
use crate::cpu::Cpu;
use crate::cycles::{calc_cycles, CycleMod};
use crate::opcodes::OpcodeInstance;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitVariant {
    Bit,
    Trb,
    Tsb,
}

pub struct BitOp {
    variant: BitVariant,
    opcode: u8,
    mode: AddressingMode,
}

impl BitOp {
    pub fn from_opcode(opcode: u8, _cpu: &Cpu) -> Option<BitOp> {
        use AddressingMode::*;
        use BitVariant::*;

        let (variant, mode) = match opcode {
            0x89 => (Bit, Immediate),
            0x2C => (Bit, Absolute(BankKind::Data)),
            0x24 => (Bit, DirectPage),
            0x3C => (Bit, Indexed(Box::new(Absolute(BankKind::Data)), IndexReg::X)),
            0x34 => (Bit, Indexed(Box::new(DirectPage), IndexReg::X)),
            0x1C => (Trb, Absolute(BankKind::Data)),
            0x14 => (Trb, DirectPage),
            0x0C => (Tsb, Absolute(BankKind::Data)),
            0x04 => (Tsb, DirectPage),
            _ => return None,
        };
        Some(BitOp { variant, opcode, mode })
    }
}

impl OpcodeInstance for BitOp {
    fn byte_size(&self, cpu: &Cpu) -> u8 {
        self.mode.byte_size(cpu) + 1
    }

    fn total_cycles(&self, cpu: &Cpu) -> i32 {
        use CycleMod as M;
        match self.opcode {
            0x89 => calc_cycles(cpu, &[M::constant(2), M::acc_is_16_bit(1)]),
            0x2C => calc_cycles(cpu, &[M::constant(4), M::acc_is_16_bit(1)]),
            0x24 => calc_cycles(
                cpu,
                &[M::constant(3), M::acc_is_16_bit(1), M::low_direct_page_is_not_zero(1)],
            ),
            0x3C => {
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
            0x34 => calc_cycles(
                cpu,
                &[M::constant(4), M::acc_is_16_bit(1), M::low_direct_page_is_not_zero(1)],
            ),
            0x1C => calc_cycles(cpu, &[M::constant(6), M::acc_is_16_bit(2)]),
            0x14 => calc_cycles(
                cpu,
                &[M::constant(5), M::acc_is_16_bit(2), M::low_direct_page_is_not_zero(1)],
            ),
            0x0C => calc_cycles(cpu, &[M::constant(6), M::acc_is_16_bit(2)]),
            0x04 => calc_cycles(
                cpu,
                &[M::constant(5), M::acc_is_16_bit(2), M::low_direct_page_is_not_zero(1)],
            ),
            _ => unreachable!("opcode {:#04X} not a BitOp instance", self.opcode),
        }
    }

    fn execute(&self, cpu: &mut Cpu) {
        let data = self.mode.fetch(cpu);
        let acc = cpu.acc();
        match self.variant {
            BitVariant::Bit => {
                cpu.set_negative(data & cpu.acc_size().sign_bit() != 0);
                cpu.set_overflow(data & cpu.acc_size().overflow_bit() != 0);
                cpu.set_zero(acc & data == 0);
            }
            BitVariant::Trb => {
                let result = acc & (!data & cpu.acc_size().mask());
                cpu.set_zero(acc & data == 0);
                self.mode.store(cpu, result);
            }
            BitVariant::Tsb => {
                let result = acc | data;
                cpu.set_zero(acc & data == 0);
                self.mode.store(cpu, result);
            }
        }
    }

    fn disasm(&self, cpu: &Cpu) -> String {
        let mnemonic = match self.variant {
            BitVariant::Bit => "BIT",
            BitVariant::Trb => "TRB",
            BitVariant::Tsb => "TSB",
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
            0,
            0,
            0,
            0x01FF,
            0,
            0x0010,
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
    fn s6_tsb_direct_page() {
        let mem = Memory::zeroed(0x30).write_byte(1, 0x05).write_byte(0x0015, 0xAA);
        let mut cpu = cpu_with(mem, 0x55);
        let instr = BitOp::from_opcode(0x04, &cpu).expect("TSB dp decodes");
        instr.execute(&mut cpu);
        assert_eq!(cpu.memory.read_byte(0x0015), 0xFF);
        assert!(cpu.zero());
    }

    #[test]
    fn trb_clears_bits_set_in_data() {
        let mem = Memory::zeroed(0x30).write_byte(1, 0x05).write_byte(0x0015, 0xAA);
        let mut cpu = cpu_with(mem, 0xFF);
        let instr = BitOp::from_opcode(0x14, &cpu).expect("TRB dp decodes");
        instr.execute(&mut cpu);
        assert_eq!(cpu.memory.read_byte(0x0015), 0x55);
        assert!(!cpu.zero());
    }

    #[test]
    fn bit_copies_operand_high_bits_into_flags() {
        let mem = Memory::zeroed(4).write_word(1, 0xC000);
        let mut cpu = cpu_with(mem, 0x0001);
        cpu.set_emu_mode(EmuMode::Native);
        cpu.set_acc_size(Width::Bit16);
        let instr = BitOp::from_opcode(0x89, &cpu).expect("BIT immediate decodes");
        instr.execute(&mut cpu);
        assert!(cpu.negative());
        assert!(cpu.overflow());
        assert!(cpu.zero()); // acc & data == 0
    }
}
