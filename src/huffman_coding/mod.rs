//! The huffman_coding module builds prefix-code trees for the lzhuff compression toolkit.
//!
//! A tree is built bottom-up from a byte frequency count: the two lowest-weight
//! nodes are merged until a single root remains, so that frequent byte values end
//! up closer to the root and receive shorter codes. Merging is driven by a binary
//! min-heap rather than re-sorting the working set after every merge.
//!
//! Each build owns its own node arena, addressed by integer handles. Trees may
//! therefore coexist and move between threads freely.
//!
//! The module resolves codes back to symbols (from a '0'/'1' string or from a
//! packed integer) and produces the full symbol-to-code table. Emitting an
//! encoded bitstream is out of scope here.
//!
pub mod resolve;
pub mod tree;
