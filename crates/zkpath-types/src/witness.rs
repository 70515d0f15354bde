// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::Digest;

/// Depth of the reference circuit (two compression steps).
pub const DEFAULT_TREE_DEPTH: usize = 2;

/// Private inputs of the Merkle path circuit.
///
/// `directions[i] == 1` means the running node is the LEFT child at level `i`
/// (it is hashed as `compress(current, siblings[i])`); `0` means it is the
/// right child. Directions are kept as raw integers so that a non-boolean
/// value reaches the selector and is rejected there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleWitness {
    pub leaf: Digest,
    pub siblings: Vec<Digest>,
    pub directions: Vec<u8>,
}

impl MerkleWitness {
    pub fn new(leaf: Digest, siblings: Vec<Digest>, directions: Vec<u8>) -> Self {
        Self {
            leaf,
            siblings,
            directions,
        }
    }

    pub fn depth(&self) -> usize {
        self.siblings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let w = MerkleWitness::new(Digest([1u8; 32]), vec![Digest([2u8; 32])], vec![1]);
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["directions"], serde_json::json!([1]));
        assert_eq!(json["leaf"].as_str().unwrap().len(), 66);
        let back: MerkleWitness = serde_json::from_value(json).unwrap();
        assert_eq!(back, w);
        assert_eq!(back.depth(), 1);
    }
}
