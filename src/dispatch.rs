// The single entry point the CPU interpreter calls on an SWI instruction.
// Decodes the immediate, checks full-BIOS mode, and routes to a handler:
// one big match over an opcode-like value, each arm a short delegation to
// a leaf module.

use crate::affine;
use crate::arith;
use crate::checksum;
use crate::codec::{self, Width};
use crate::cpu::{Access, GbaCpu, LogLevel};

const R0: usize = 0;
const R1: usize = 1;
const R2: usize = 2;
const R3: usize = 3;

/// Dispatches an 8-bit SWI immediate as ARM's `SWI #imm` encodes it.
pub fn invoke(cpu: &mut dyn GbaCpu, immediate: u32) {
    if cpu.full_bios() {
        cpu.raise_swi();
        return;
    }

    match immediate & 0xFF {
        0x01 => cpu.log(LogLevel::Stub, "RegisterRamReset: not emulated"),
        0x02 => cpu.halt(),
        0x04 | 0x05 => cpu.raise_swi(),
        0x06 => {
            let (a, b) = (cpu.reg(R0) as i32, cpu.reg(R1) as i32);
            do_div(cpu, a, b)
        }
        0x07 => {
            let (a, b) = (cpu.reg(R1) as i32, cpu.reg(R0) as i32);
            do_div(cpu, a, b)
        }
        0x08 => {
            let result = arith::isqrt(cpu.reg(R0));
            cpu.set_reg(R0, result as u32);
        }
        0x0A => {
            let angle = arith::arctan2(cpu.reg(R0) as i32, cpu.reg(R1) as i32);
            cpu.set_reg(R0, angle as u32);
        }
        0x0B | 0x0C => cpu.raise_swi(),
        0x0D => {
            do_checksum(cpu);
            do_bg_affine_set(cpu);
        }
        0x0E => do_bg_affine_set(cpu),
        0x0F => do_obj_affine_set(cpu),
        0x11 => do_lz77(cpu, Width::Byte),
        0x12 => do_lz77(cpu, Width::Halfword),
        0x13 => do_huffman(cpu),
        0x14 => do_rle(cpu, Width::Byte),
        0x15 => do_rle(cpu, Width::Halfword),
        0x16 => do_unfilter8(cpu, Width::Byte),
        0x17 => do_unfilter8(cpu, Width::Halfword),
        0x18 => do_unfilter16(cpu),
        0x1F => do_midi_key_to_freq(cpu),
        other => cpu.log(LogLevel::Stub, &format!("SWI {other:#04x}: not emulated")),
    }
}

/// Thumb's `SWI #imm8` reaches here via a 32-bit immediate already shifted
/// into the upper half by the caller's decode; undo that before routing.
pub fn invoke32(cpu: &mut dyn GbaCpu, immediate: u32) {
    invoke(cpu, immediate >> 16);
}

fn do_div(cpu: &mut dyn GbaCpu, n: i32, d: i32) {
    if d == 0 {
        cpu.log(LogLevel::GameError, &format!("Div: division by zero (n={n})"));
    }
    let (q, r, aq) = arith::div(n, d);
    cpu.set_reg(R0, q as u32);
    cpu.set_reg(R1, r as u32);
    cpu.set_reg(R3, aq as u32);
}

fn do_checksum(cpu: &mut dyn GbaCpu) {
    let sum = checksum::word_sum(cpu.bios_rom());
    cpu.set_reg(R0, sum);
}

fn do_bg_affine_set(cpu: &mut dyn GbaCpu) {
    let (source, dest, count) = (cpu.reg(R0), cpu.reg(R1), cpu.reg(R2));
    let (new_src, new_dst) = affine::bg_affine_set(cpu, source, dest, count);
    cpu.set_reg(R0, new_src);
    cpu.set_reg(R1, new_dst);
}

fn do_obj_affine_set(cpu: &mut dyn GbaCpu) {
    let (source, dest, count, stride) = (cpu.reg(R0), cpu.reg(R1), cpu.reg(R2), cpu.reg(R3));
    let (new_src, new_dst) = affine::obj_affine_set(cpu, source, dest, count, stride);
    cpu.set_reg(R0, new_src);
    cpu.set_reg(R1, new_dst);
}

fn do_lz77(cpu: &mut dyn GbaCpu, width: Width) {
    let (source, dest) = (cpu.reg(R0), cpu.reg(R1));
    let (new_src, new_dst) = codec::lz77::decompress(cpu, source, dest, width);
    cpu.set_reg(R0, new_src);
    cpu.set_reg(R1, new_dst);
    cpu.set_reg(R3, 0);
}

fn do_huffman(cpu: &mut dyn GbaCpu) {
    let (source, dest) = (cpu.reg(R0), cpu.reg(R1));
    match codec::huffman::decompress(cpu, source, dest) {
        Ok((new_src, new_dst)) => {
            cpu.set_reg(R0, new_src);
            cpu.set_reg(R1, new_dst);
        }
        Err(err) => cpu.log(LogLevel::GameError, &format!("HuffUnComp: {err}")),
    }
}

fn do_rle(cpu: &mut dyn GbaCpu, width: Width) {
    let (source, dest) = (cpu.reg(R0), cpu.reg(R1));
    let (new_src, new_dst) = codec::rle::decompress(cpu, source, dest, width);
    cpu.set_reg(R0, new_src);
    cpu.set_reg(R1, new_dst);
}

fn do_unfilter8(cpu: &mut dyn GbaCpu, width: Width) {
    let (source, dest) = (cpu.reg(R0), cpu.reg(R1));
    let (new_src, new_dst) = codec::unfilter::diff8_unfilter(cpu, source, dest, width);
    cpu.set_reg(R0, new_src);
    cpu.set_reg(R1, new_dst);
}

fn do_unfilter16(cpu: &mut dyn GbaCpu) {
    let (source, dest) = (cpu.reg(R0), cpu.reg(R1));
    let (new_src, new_dst) = codec::unfilter::diff16_unfilter(cpu, source, dest);
    cpu.set_reg(R0, new_src);
    cpu.set_reg(R1, new_dst);
}

fn do_midi_key_to_freq(cpu: &mut dyn GbaCpu) {
    let struct_ptr = cpu.reg(R0);
    let base_freq = cpu.load32(struct_ptr + 4, Access::Data);
    let semitone = cpu.reg(R1) as i32;
    let frac = cpu.reg(R2) as i32;
    let freq = arith::midi_key_to_freq(base_freq, semitone, frac);
    cpu.set_reg(R0, freq);
}
