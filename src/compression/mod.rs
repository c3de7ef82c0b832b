//! The compression module holds the file-level drivers for the lzhuff toolkit.
//!
//! The drivers read whole files, hand the bytes to the lz77 or huffman_coding
//! modules, and write or print the results. No container header, magic number,
//! or length prefix is produced - the compressed bytes are written verbatim, so
//! a future decoder must learn the original and compressed sizes out of band.
//!
pub mod compress;
