// SWIs 0x16 (Diff8bitUnFilterWram), 0x17 (Diff8bitUnFilterVram) and 0x18
// (Diff16bitUnFilter), §4.8. Not compression: each output unit is the
// running sum of the input stream, first unit passed through unchanged.

use super::{precheck, read_header, DestWriter, Width};
use crate::cpu::{Access, GbaCpu};

/// Diff8bitUnFilterWram (`width = Width::Byte`) and Diff8bitUnFilterVram
/// (`width = Width::Halfword`). Input is always a raw byte stream; the width
/// only controls how output bytes are committed to `dest` (direct stores vs.
/// the halfword-merging discipline VRAM requires).
pub fn diff8_unfilter(cpu: &mut dyn GbaCpu, source: u32, dest: u32, width: Width) -> (u32, u32) {
    precheck(cpu, "Diff8bitUnFilter", source, dest);

    let header = read_header(cpu, source);
    let mut src = source + 4;
    let mut writer = DestWriter::new(width, dest);
    let mut remaining = header.remaining;
    let mut running: u8 = 0;

    let mut first = true;
    while remaining > 0 {
        let delta = cpu.load_u8(src, Access::Data);
        src += 1;
        running = if first { delta } else { running.wrapping_add(delta) };
        first = false;
        writer.write_byte(cpu, running);
        remaining -= 1;
    }

    (src, writer.dest())
}

/// Diff16bitUnFilter. Both the input stream and the output are 16-bit units;
/// there is no VRAM-safe variant to special-case, so output goes straight
/// through `store16`.
pub fn diff16_unfilter(cpu: &mut dyn GbaCpu, source: u32, dest: u32) -> (u32, u32) {
    precheck(cpu, "Diff16bitUnFilter", source, dest);

    let header = read_header(cpu, source);
    let mut src = source + 4;
    let mut dst = dest;
    let mut remaining_bytes = header.remaining;
    let mut running: u16 = 0;

    let mut first = true;
    while remaining_bytes >= 2 {
        let delta = cpu.load_u16(src, Access::Data);
        src += 2;
        running = if first { delta } else { running.wrapping_add(delta) };
        first = false;
        cpu.store16(dst, running, Access::Data);
        dst += 2;
        remaining_bytes -= 2;
    }

    (src, dst)
}
