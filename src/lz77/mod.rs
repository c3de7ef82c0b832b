//! The lz77 module is the dictionary half of the lzhuff compression toolkit.
//!
//! The match engine slides a bounded window over the buffer, greedily takes the
//! first repeated run it sees, and folds the repeat out of the buffer in place
//! by overwriting it with a 3 byte back-reference token. No second buffer is
//! allocated and no container header is written; the caller must carry the
//! original and compressed sizes out of band.
//!
//! Two token encodings exist: ShortJump spends a full byte on each of offset
//! and length, LongJump trades length range for a 12 bit offset.
//!
pub mod compress;
pub mod config;
pub mod token;
