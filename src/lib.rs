//! lzhuff - a small data compression toolkit.
//!
//! Offers two independent codecs over a byte stream: an LZ77 sliding-window
//! compressor that rewrites a buffer in place with 3 byte back-reference
//! tokens, and a Huffman frequency-tree builder with code lookup.
//!
//! The two codecs share no state; each can be used on its own. Basic usage to
//! compress a file:
//!
//! `$> lzhuff test.txt`
//!
//! This will compress the file and create test.txt.lz77. The original file is
//! deleted unless -k is given. `lzhuff --codes test.txt` instead prints the
//! Huffman prefix code for every byte value in the file.
//!
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod lz77;
pub mod tools;
