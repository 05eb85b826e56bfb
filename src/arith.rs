// Division, integer square root, arctangent and MIDI-key/frequency helpers
// backing SWIs 0x06/0x07/0x08/0x0A/0x1F. None of these touch guest memory
// directly; the dispatcher reads registers (and, for MidiKey2Freq, the one
// extra memory word) and hands plain integers in.

use std::f64::consts::PI;

/// Division result: (quotient, remainder, |quotient|).
///
/// `d == 0` takes the BIOS's defined divide-by-zero fallback rather than
/// panicking: quotient is the sign of the dividend (+1 for zero or positive),
/// remainder is the dividend itself, and the absolute-quotient slot is 1.
pub fn div(n: i32, d: i32) -> (i32, i32, i32) {
    if d != 0 {
        let q = n.wrapping_div(d);
        let r = n.wrapping_rem(d);
        (q, r, q.wrapping_abs())
    } else {
        let sign = if n >= 0 { 1 } else { -1 };
        (sign, n, 1)
    }
}

/// Bit-by-bit integer square root; GBA's BIOS result always fits in 16 bits
/// since the input is a 32-bit unsigned value.
pub fn isqrt(value: u32) -> u16 {
    let mut result: u32 = 0;
    let mut bit: u32 = 1 << 30;
    while bit > value {
        bit >>= 2;
    }
    let mut remaining = value;
    while bit != 0 {
        if remaining >= result + bit {
            remaining -= result + bit;
            result = (result >> 1) + bit;
        } else {
            result >>= 1;
        }
        bit >>= 2;
    }
    result as u16
}

/// ArcTan2: r0 <- atan2(r1/16384, r0/16384) * 0x10000 / (2*pi), wrapped into
/// an unsigned 16-bit angle.
pub fn arctan2(r0: i32, r1: i32) -> u16 {
    let x = r0 as f64 / 16384.0;
    let y = r1 as f64 / 16384.0;
    let angle = y.atan2(x);
    let scaled = (angle * 0x10000 as f64 / (2.0 * PI)).round() as i32;
    scaled as i16 as u16
}

/// r0 <- base / 2^((180 - semitone - frac/256) / 12)
pub fn midi_key_to_freq(base_freq: u32, semitone: i32, frac: i32) -> u32 {
    let exponent = (180.0 - semitone as f64 - frac as f64 / 256.0) / 12.0;
    (base_freq as f64 / 2f64.powf(exponent)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_scenarios_from_spec() {
        assert_eq!(div(100, 7), (14, 2, 14));
        assert_eq!(div(-100, 7), (-14, -2, 14));
        assert_eq!(div(5, 0), (1, 5, 1));
    }

    #[test]
    fn div_by_zero_sign_of_dividend() {
        assert_eq!(div(0, 0), (1, 0, 1));
        assert_eq!(div(-1, 0), (-1, -1, 1));
    }

    #[test]
    fn div_identity_holds() {
        for n in [-1000, -7, -1, 0, 1, 7, 1000] {
            for d in [-13, -1, 1, 13, 100] {
                let (q, r, aq) = div(n, d);
                assert_eq!(q.wrapping_mul(d).wrapping_add(r), n);
                assert_eq!(aq, q.wrapping_abs());
                if r != 0 {
                    assert_eq!(r.signum(), n.signum());
                }
            }
        }
    }

    #[test]
    fn isqrt_perfect_squares() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(144), 12);
        assert_eq!(isqrt(0xFFFF_FFFF), 65535);
    }

    #[test]
    fn isqrt_rounds_down() {
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(8), 2);
        assert_eq!(isqrt(15), 3);
    }

    #[test]
    fn arctan2_cardinal_directions() {
        // Pointing straight along +x: angle 0.
        assert_eq!(arctan2(16384, 0), 0);
    }

    #[test]
    fn midi_key_to_freq_octave_down() {
        // 12 semitones down should roughly halve the frequency.
        let freq = midi_key_to_freq(440_000, -12, 0);
        assert!((freq as i64 - 220_000).abs() < 50);
    }
}
