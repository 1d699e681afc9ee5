//! Code table generation.
//!
//! Codes are the root to leaf paths of the tree: 0 for every step left, 1 for every
//! step right. Because every internal node has two children, no code is a prefix of
//! another.

use std::fmt;

use rustc_hash::FxHashMap;

use super::huffman::{Node, NodeData};
use crate::tools::freq_count::Histogram;

/// A variable length bit code, first bit first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn from_bits(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// True when this code is the leading part of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }

    fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    fn pop(&mut self) {
        self.bits.pop();
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Byte value to code mapping for every byte present in a tree.
#[derive(Clone, Debug, Default)]
pub struct CodeTable {
    codes: FxHashMap<u8, Code>,
}

impl CodeTable {
    /// Walk the tree and record the path to every leaf.
    ///
    /// A tree that is a single leaf gets the one bit code `0`, since an empty code
    /// could not be written to or read back from the payload.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = FxHashMap::default();
        match root.node_data {
            NodeData::Leaf(sym) => {
                codes.insert(sym, Code::from_bits(&[false]));
            }
            NodeData::Kids(..) => {
                let mut path = Code::default();
                collect_codes(root, &mut path, &mut codes);
            }
        }
        Self { codes }
    }

    pub fn get(&self, sym: u8) -> Option<&Code> {
        self.codes.get(&sym)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending byte order.
    pub fn entries(&self) -> Vec<(u8, &Code)> {
        let mut entries: Vec<(u8, &Code)> = self.codes.iter().map(|(&s, c)| (s, c)).collect();
        entries.sort_unstable_by_key(|&(s, _)| s);
        entries
    }

    /// Total bits needed to encode a histogram with this table. Bytes with no code
    /// contribute nothing.
    pub fn encoded_bits(&self, freqs: &Histogram) -> u64 {
        self.codes
            .iter()
            .map(|(&sym, code)| freqs[sym as usize] * code.len() as u64)
            .sum()
    }
}

/// Recursively walk the tree, extending `path` on the way down and trimming it on the way up.
fn collect_codes(node: &Node, path: &mut Code, codes: &mut FxHashMap<u8, Code>) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            path.push(false);
            collect_codes(left, path, codes);
            path.pop();
            path.push(true);
            collect_codes(right, path, codes);
            path.pop();
        }
        NodeData::Leaf(sym) => {
            codes.insert(*sym, path.clone());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::freqs;

    fn assert_prefix_free(table: &CodeTable) {
        let entries = table.entries();
        for (a, code_a) in &entries {
            for (b, code_b) in &entries {
                if a != b {
                    assert!(
                        !code_a.is_prefix_of(code_b),
                        "{} ({}) is a prefix of {} ({})",
                        code_a,
                        a,
                        code_b,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn small_table_test() {
        let table = CodeTable::from_tree(&build_tree(&freqs(&[0x41, 0x41, 0x42, 0x43])).unwrap());
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0x41).unwrap().to_string(), "0");
        assert_eq!(table.get(0x42).unwrap().to_string(), "10");
        assert_eq!(table.get(0x43).unwrap().to_string(), "11");
        assert!(table.get(0x44).is_none());
        assert_prefix_free(&table);
    }

    #[test]
    fn single_leaf_gets_one_bit_test() {
        let table = CodeTable::from_tree(&build_tree(&freqs(&[0x41; 1000])).unwrap());
        assert_eq!(table.len(), 1);
        let code = table.get(0x41).unwrap();
        assert_eq!(code.len(), 1);
        assert_eq!(code.to_string(), "0");
    }

    #[test]
    fn skewed_alphabet_test() {
        // Every byte value, with counts doubling every 32 values.
        let mut data = vec![];
        for sym in 0..=255_u8 {
            for _ in 0..(1 << (sym / 32)) {
                data.push(sym);
            }
        }
        let f = freqs(&data);
        let table = CodeTable::from_tree(&build_tree(&f).unwrap());
        assert_eq!(table.len(), 256);
        assert!(table.entries().iter().all(|(_, c)| !c.is_empty()));
        assert!(table.get(0).unwrap().len() >= table.get(255).unwrap().len());
        assert_prefix_free(&table);
    }

    #[test]
    fn encoded_bits_test() {
        let f = freqs(&[0x41, 0x41, 0x42, 0x43]);
        let table = CodeTable::from_tree(&build_tree(&f).unwrap());
        assert_eq!(table.encoded_bits(&f), 6);
    }

    #[test]
    fn entries_sorted_test() {
        let f = freqs("the quick brown fox".as_bytes());
        let table = CodeTable::from_tree(&build_tree(&f).unwrap());
        let syms: Vec<u8> = table.entries().iter().map(|&(s, _)| s).collect();
        let mut sorted = syms.clone();
        sorted.sort_unstable();
        assert_eq!(syms, sorted);
    }

    #[test]
    fn prefix_test() {
        let a = Code::from_bits(&[true, false]);
        let b = Code::from_bits(&[true, false, true]);
        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
        assert_eq!(b.to_string(), "101");
    }
}
