// BgAffineSet / ObjAffineSet (SWIs 0x0E, 0x0F): compose scale + rotation
// (+ translation, for backgrounds) into the 2x2 (or 2x3) fixed-point
// matrices the PPU's affine layers consume.

use crate::cpu::{Access, GbaCpu};
use std::f64::consts::PI;

const BG_INPUT_BLOCK: u32 = 20;
const BG_OUTPUT_BLOCK: u32 = 16;
const OBJ_INPUT_BLOCK: u32 = 8;

fn cell(value: f64) -> i16 {
    (value * 256.0) as i32 as i16
}

/// Returns (A, B, C, D) in 8.8 fixed point for the given scale and angle.
fn matrix_cells(sx: i16, sy: i16, theta_raw: u16) -> (i16, i16, i16, i16) {
    let angle = (theta_raw >> 8) as f64 * (PI / 128.0);
    let (sin, cos) = angle.sin_cos();
    let sx = sx as f64 / 256.0;
    let sy = sy as f64 / 256.0;
    let a = cell(sx * cos);
    let b = cell(-sx * sin);
    let c = cell(sy * sin);
    let d = cell(sy * cos);
    (a, b, c, d)
}

/// Reads `count` 20-byte input blocks from `source`, writes `count` 16-byte
/// output blocks to `dest`. Returns the advanced (source, dest) pointers.
pub fn bg_affine_set(cpu: &mut dyn GbaCpu, source: u32, dest: u32, count: u32) -> (u32, u32) {
    let mut src = source;
    let mut dst = dest;
    for _ in 0..count {
        let ox = cpu.load32(src, Access::Data) as i32;
        let oy = cpu.load32(src + 4, Access::Data) as i32;
        let cx = cpu.load16(src + 8, Access::Data);
        let cy = cpu.load16(src + 10, Access::Data);
        let sx = cpu.load16(src + 12, Access::Data);
        let sy = cpu.load16(src + 14, Access::Data);
        let theta_raw = cpu.load_u16(src + 16, Access::Data);
        // src + 18..20 is the alignment pad, deliberately unread.

        let (a, b, c, d) = matrix_cells(sx, sy, theta_raw);
        // a/b/c/d are 8.8 fixed; multiplying by the plain-integer cx/cy and
        // shifting back down by 8 yields an 8.8 product, matching ox/oy.
        let rx = ox as i64 - ((a as i64 * cx as i64 + b as i64 * cy as i64) >> 8);
        let ry = oy as i64 - ((c as i64 * cx as i64 + d as i64 * cy as i64) >> 8);

        cpu.store16(dst, a as u16, Access::Data);
        cpu.store16(dst + 2, b as u16, Access::Data);
        cpu.store16(dst + 4, c as u16, Access::Data);
        cpu.store16(dst + 6, d as u16, Access::Data);
        cpu.store32(dst + 8, rx as i32 as u32, Access::Data);
        cpu.store32(dst + 12, ry as i32 as u32, Access::Data);

        src += BG_INPUT_BLOCK;
        dst += BG_OUTPUT_BLOCK;
    }
    (src, dst)
}

/// Reads `count` 8-byte input blocks from `source`, writes A/B/C/D cells to
/// `dest` at offsets `0, stride, 2*stride, 3*stride`.
pub fn obj_affine_set(cpu: &mut dyn GbaCpu, source: u32, dest: u32, count: u32, stride: u32) -> (u32, u32) {
    let mut src = source;
    let mut dst = dest;
    for _ in 0..count {
        let sx = cpu.load16(src, Access::Data);
        let sy = cpu.load16(src + 2, Access::Data);
        let theta_raw = cpu.load_u16(src + 4, Access::Data);
        // src + 6..8 is padding.

        let (a, b, c, d) = matrix_cells(sx, sy, theta_raw);
        cpu.store16(dst, a as u16, Access::Data);
        cpu.store16(dst + stride, b as u16, Access::Data);
        cpu.store16(dst + 2 * stride, c as u16, Access::Data);
        cpu.store16(dst + 3 * stride, d as u16, Access::Data);

        src += OBJ_INPUT_BLOCK;
        dst += 4 * stride;
    }
    (src, dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockCpu;

    #[test]
    fn bg_affine_identity_at_zero_angle() {
        let mut cpu = MockCpu::new();
        let src = 0x0200_0000;
        let dst = 0x0300_0000;
        cpu.store32(src, 0, Access::Data); // ox
        cpu.store32(src + 4, 0, Access::Data); // oy
        cpu.store16(src + 8, 0, Access::Data); // cx
        cpu.store16(src + 10, 0, Access::Data); // cy
        cpu.store16(src + 12, 0x0100, Access::Data); // sx
        cpu.store16(src + 14, 0x0100, Access::Data); // sy
        cpu.store16(src + 16, 0, Access::Data); // theta

        let (new_src, new_dst) = bg_affine_set(&mut cpu, src, dst, 1);
        assert_eq!(new_src, src + 20);
        assert_eq!(new_dst, dst + 16);

        assert_eq!(cpu.load_u16(dst, Access::Data), 0x0100); // A
        assert_eq!(cpu.load_u16(dst + 2, Access::Data), 0); // B
        assert_eq!(cpu.load_u16(dst + 4, Access::Data), 0); // C
        assert_eq!(cpu.load_u16(dst + 6, Access::Data), 0x0100); // D
        assert_eq!(cpu.load32(dst + 8, Access::Data), 0); // rx
        assert_eq!(cpu.load32(dst + 12, Access::Data), 0); // ry
    }

    #[test]
    fn bg_affine_translation_tracks_origin() {
        let mut cpu = MockCpu::new();
        let src = 0x0200_0000;
        let dst = 0x0300_0000;
        cpu.store32(src, 100 << 8, Access::Data); // ox = 100.0
        cpu.store32(src + 4, 50 << 8, Access::Data); // oy = 50.0
        cpu.store16(src + 8, 0, Access::Data);
        cpu.store16(src + 10, 0, Access::Data);
        cpu.store16(src + 12, 0x0100, Access::Data);
        cpu.store16(src + 14, 0x0100, Access::Data);
        cpu.store16(src + 16, 0, Access::Data);

        bg_affine_set(&mut cpu, src, dst, 1);
        assert_eq!(cpu.load32(dst + 8, Access::Data), 100 << 8);
        assert_eq!(cpu.load32(dst + 12, Access::Data), 50 << 8);
    }

    #[test]
    fn obj_affine_respects_stride() {
        let mut cpu = MockCpu::new();
        let src = 0x0200_0000;
        let dst = 0x0300_0000;
        cpu.store16(src, 0x0100, Access::Data);
        cpu.store16(src + 2, 0x0100, Access::Data);
        cpu.store16(src + 4, 0, Access::Data);

        let (new_src, new_dst) = obj_affine_set(&mut cpu, src, dst, 1, 8);
        assert_eq!(new_src, src + 8);
        assert_eq!(new_dst, dst + 32);
        assert_eq!(cpu.load_u16(dst, Access::Data), 0x0100);
        assert_eq!(cpu.load_u16(dst + 8, Access::Data), 0);
        assert_eq!(cpu.load_u16(dst + 16, Access::Data), 0);
        assert_eq!(cpu.load_u16(dst + 24, Access::Data), 0x0100);
    }
}
