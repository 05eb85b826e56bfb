// The collaborator contract the dispatcher and codecs are written against. An
// embedding emulator supplies one concrete `GbaCpu` per guest CPU instance;
// nothing in this crate keeps state of its own across calls.

/// Access-type hint threaded through to the bus so a real implementation can
/// still do wait-state accounting. HLE never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Code,
    Data,
}

/// Severity for the one diagnostic channel this crate uses (see `GbaCpu::log`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// An SWI (or a variant of one) is not emulated at all.
    Stub,
    /// Guest code passed something malformed; a defined fallback was taken.
    GameError,
    /// Routine informational trace, no guest misbehavior implied.
    Info,
}

/// The guest CPU as seen by the BIOS HLE core: a register file and a
/// byte/halfword/word addressable bus, plus a handful of control hooks.
pub trait GbaCpu {
    fn reg(&self, index: usize) -> u32;
    fn set_reg(&mut self, index: usize, value: u32);

    fn load8(&mut self, addr: u32, access: Access) -> i8 {
        self.load_u8(addr, access) as i8
    }
    fn load_u8(&mut self, addr: u32, access: Access) -> u8;
    fn load16(&mut self, addr: u32, access: Access) -> i16 {
        self.load_u16(addr, access) as i16
    }
    fn load_u16(&mut self, addr: u32, access: Access) -> u16;
    fn load32(&mut self, addr: u32, access: Access) -> u32;

    fn store8(&mut self, addr: u32, value: u8, access: Access);
    fn store16(&mut self, addr: u32, value: u16, access: Access);
    fn store32(&mut self, addr: u32, value: u32, access: Access);

    /// True when the embedder wants real-BIOS passthrough rather than HLE.
    fn full_bios(&self) -> bool;

    /// Synthesize a real SWI exception (full-BIOS mode, or an SWI that isn't HLE'd).
    fn raise_swi(&mut self);

    /// SWI 0x02, delegated entirely to the embedder.
    fn halt(&mut self);

    /// The BIOS ROM image, for the checksum SWI. Read-only; owned by the embedder.
    fn bios_rom(&self) -> &[u8];

    fn log(&mut self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Stub => tracing::debug!(target: "gba_bios_hle::stub", "{message}"),
            LogLevel::GameError => tracing::warn!(target: "gba_bios_hle::game_error", "{message}"),
            LogLevel::Info => tracing::trace!(target: "gba_bios_hle::info", "{message}"),
        }
    }
}
