//! Lossless compression codecs.
//!
//! Three encode/decode pairs, each a pure function of its input:
//!
//! - [`rle`] — run-length encoding over text
//! - [`huffman`] — Huffman coding over text, with an owned code tree
//! - [`lzw`] — LZW dictionary coding over raw bytes
//!
//! Every encoder reports a compression ratio as a percentage of the input
//! size saved. Decoders are strict: structurally malformed input is an
//! [`Error::InvalidInput`](crate::Error::InvalidInput) rather than garbage
//! output, so round-tripping self-produced data never errors while foreign
//! data fails loudly.

pub mod huffman;
pub mod lzw;
pub mod rle;

pub use huffman::{HuffmanEncoded, HuffmanNode};
pub use lzw::LzwEncoded;
pub use rle::RleEncoded;
