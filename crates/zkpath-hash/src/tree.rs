// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use zkpath_types::{Digest, MerkleWitness};

use crate::{compress, PathError};

/// Fixed-depth, append-only Merkle tree padded with zero leaves.
pub struct SparseMerkleTree {
    depth: usize,
    leaves: Vec<Digest>,
    zeros: Vec<Digest>,
}

impl SparseMerkleTree {
    pub fn new(depth: usize) -> Self {
        let mut zeros = vec![Digest::ZERO; depth + 1];
        for i in 1..=depth {
            zeros[i] = compress(&zeros[i - 1], &zeros[i - 1]);
        }
        Self {
            depth,
            leaves: Vec::new(),
            zeros,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `2^depth` leaves, saturating at `usize::MAX` for deep trees.
    pub fn capacity(&self) -> usize {
        u32::try_from(self.depth)
            .ok()
            .and_then(|d| 1usize.checked_shl(d))
            .unwrap_or(usize::MAX)
    }

    pub fn insert(&mut self, leaf: Digest) -> Result<usize, PathError> {
        if self.leaves.len() >= self.capacity() {
            return Err(PathError::TreeFull { depth: self.depth });
        }
        let idx = self.leaves.len();
        self.leaves.push(leaf);
        Ok(idx)
    }

    pub fn leaves(&self) -> &[Digest] {
        &self.leaves
    }

    pub fn root(&self) -> Digest {
        if self.leaves.is_empty() {
            return self.zeros[self.depth];
        }
        let mut layer = self.leaves.clone();
        for level in 0..self.depth {
            layer = self.next_layer(&layer, level);
        }
        layer[0]
    }

    /// Witness for the leaf at `index`, in the left-child-is-1 direction
    /// convention of [`MerkleWitness`].
    pub fn witness(&self, index: usize) -> Result<MerkleWitness, PathError> {
        if index >= self.leaves.len() {
            return Err(PathError::IndexOutOfRange {
                index,
                leaves: self.leaves.len(),
            });
        }
        let mut siblings = Vec::with_capacity(self.depth);
        let mut directions = Vec::with_capacity(self.depth);
        let mut layer = self.leaves.clone();
        let mut idx = index;

        for level in 0..self.depth {
            let is_left = idx & 1 == 0;
            directions.push(u8::from(is_left));

            let sibling_idx = if is_left { idx + 1 } else { idx - 1 };
            siblings.push(
                layer
                    .get(sibling_idx)
                    .copied()
                    .unwrap_or(self.zeros[level]),
            );

            layer = self.next_layer(&layer, level);
            idx /= 2;
        }

        Ok(MerkleWitness::new(self.leaves[index], siblings, directions))
    }

    fn next_layer(&self, layer: &[Digest], level: usize) -> Vec<Digest> {
        let zero = self.zeros[level];
        layer
            .chunks(2)
            .map(|pair| {
                let right = pair.get(1).unwrap_or(&zero);
                compress(&pair[0], right)
            })
            .collect()
    }
}
