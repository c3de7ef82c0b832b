//! Walks a frequency tree to turn prefix codes back into byte values, and the
//! other way around.
//!
//! The traversal convention is fixed for compatibility with existing output:
//! a '0' (or a 0 bit) steps to the RIGHT child, a '1' (or a 1 bit) to the LEFT
//! child. Packed integer codes are consumed least-significant-bit first.

use rustc_hash::FxHashMap;

use super::tree::{NodeData, NodeId, Tree};
use crate::error::{Error, Result};

impl Tree {
    /// Resolve a '0'/'1' code string to the byte value it encodes. Characters
    /// past the leaf are ignored; a code that ends at an internal node is an
    /// error rather than a garbage answer.
    pub fn resolve_str(&self, code: &str) -> Result<u8> {
        let mut node = self.root();
        let mut depth = 0;
        for c in code.chars() {
            let (left, right) = match node.node_data {
                NodeData::Leaf(_) => break,
                NodeData::Kids(left, right) => (left, right),
            };
            node = match c {
                '0' => self.node(right),
                '1' => self.node(left),
                other => return Err(Error::BadCodeChar(other)),
            };
            depth += 1;
        }
        match node.node_data {
            NodeData::Leaf(value) => Ok(value),
            NodeData::Kids(..) => Err(Error::CodeTruncated { depth_reached: depth }),
        }
    }

    /// Resolve a packed integer code of `len` valid bits, consumed from the
    /// least significant bit up. The walk stops at the first leaf, so trailing
    /// bits beyond the leaf's depth are ignored. Running out of bits while
    /// still at an internal node is an error.
    pub fn resolve_bits(&self, code: u64, len: u32) -> Result<u8> {
        let mut node = self.root();
        let mut offset = 0;
        loop {
            let (left, right) = match node.node_data {
                NodeData::Leaf(value) => return Ok(value),
                NodeData::Kids(left, right) => (left, right),
            };
            if offset >= len {
                return Err(Error::CodeTruncated {
                    depth_reached: offset as usize,
                });
            }
            node = if (code >> offset) & 1 == 0 {
                self.node(right)
            } else {
                self.node(left)
            };
            offset += 1;
        }
    }

    /// Produce the code string for every symbol in the tree with one pre-order
    /// walk. A single-leaf tree maps its symbol to the empty code.
    pub fn code_table(&self) -> FxHashMap<u8, String> {
        let mut table = FxHashMap::default();
        let mut code = String::new();
        self.collect_codes(self.root_id(), &mut code, &mut table);
        table
    }

    fn collect_codes(&self, id: NodeId, code: &mut String, table: &mut FxHashMap<u8, String>) {
        match self.node(id).node_data {
            NodeData::Leaf(value) => {
                table.insert(value, code.clone());
            }
            NodeData::Kids(left, right) => {
                code.push('1');
                self.collect_codes(left, code, table);
                code.pop();
                code.push('0');
                self.collect_codes(right, code, table);
                code.pop();
            }
        }
    }
}
