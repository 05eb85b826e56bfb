// SWI 0x0D reads this directly off the BIOS ROM image the embedder owns
// (`GbaCpu::bios_rom`), not through the general bus -- the checksum exists to
// let guest code identify which BIOS variant is resident.

/// Wrapping 32-bit little-endian word-sum over `rom`. Any trailing bytes that
/// don't make up a full word are ignored, matching a fixed-size BIOS image
/// whose length is always a multiple of 4.
pub fn word_sum(rom: &[u8]) -> u32 {
    rom.chunks_exact(4)
        .fold(0u32, |acc, word| acc.wrapping_add(u32::from_le_bytes([word[0], word[1], word[2], word[3]])))
}
