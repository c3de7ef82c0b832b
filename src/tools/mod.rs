//! The tools module provides helper functions shared by the lzhuff compression toolkit.
//!
//! The tools are:
//! - cli: Command line interface for the lzhuff binary.
//! - freq_count: Byte frequency count used to weight the Huffman tree leaves.
//!
pub mod cli;
pub mod freq_count;
