use thiserror::Error;

/// The one internal fallible path in the core: Huffman decode can refuse to
/// run at all when the symbol width doesn't evenly divide a 32-bit word.
/// Every other handler is infallible by construction (see §7).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HleError {
    #[error("unimplemented unaligned Huffman symbol width: {0} bits")]
    UnalignedHuffmanWidth(u8),
}
