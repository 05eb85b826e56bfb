//! High-level emulation of the Game Boy Advance BIOS software-interrupt
//! layer: division, square root, arctangent, the affine-matrix solvers, the
//! BIOS checksum, and the four memory-to-memory codecs (LZ77, Huffman, RLE,
//! differential UnFilter) that real games lean on for graphics and audio
//! data decompression.
//!
//! The crate has no state of its own. Every entry point takes a `&mut dyn
//! GbaCpu` supplied by the embedding emulator, which owns the register file,
//! the memory bus, and the BIOS ROM image.

pub mod affine;
pub mod arith;
pub mod checksum;
pub mod codec;
pub mod cpu;
pub mod dispatch;
pub mod error;
pub mod memory;

#[cfg(test)]
pub(crate) mod testutil;

pub use cpu::{Access, GbaCpu, LogLevel};
pub use dispatch::{invoke, invoke32};
pub use error::HleError;
