// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Native Merkle path semantics for zkpath.
//!
//! This crate is the out-of-circuit mirror of `MerklePathCircuit`: the same
//! selector, the same SHA-256 compression and the same counter and root
//! assertions, evaluated on plain bytes. Witness builders use it to compute
//! the public root, and tests use it as the oracle for the constraint system.

pub mod random;
pub mod tree;

use sha2::{Digest as _, Sha256};
use zkpath_types::{Digest, MerkleWitness};

pub use random::random_path;
pub use tree::SparseMerkleTree;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PathError {
    #[error("direction bit at level {level} is {value}, expected 0 or 1")]
    NonBooleanDirection { level: usize, value: u8 },

    #[error("{siblings} siblings but {directions} direction bits")]
    LengthMismatch { siblings: usize, directions: usize },

    #[error("step counter is {counter}, expected {expected}")]
    CounterMismatch { counter: usize, expected: usize },

    #[error("computed root {computed} does not match {expected}")]
    RootMismatch { computed: Digest, expected: Digest },

    #[error("leaf index {index} out of range for {leaves} leaves")]
    IndexOutOfRange { index: usize, leaves: usize },

    #[error("tree of depth {depth} is full")]
    TreeFull { depth: usize },
}

/// `SHA256(lhs ‖ rhs)`.
pub fn compress(lhs: &Digest, rhs: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(lhs.as_bytes());
    hasher.update(rhs.as_bytes());
    Digest(hasher.finalize().into())
}

/// `l` if `bit == 1`, `r` if `bit == 0`. Anything else violates
/// `bit·(1 - bit) = 0` and is rejected.
pub fn select(bit: u8, l: &Digest, r: &Digest) -> Result<Digest, PathError> {
    match bit {
        1 => Ok(*l),
        0 => Ok(*r),
        value => Err(PathError::NonBooleanDirection { level: 0, value }),
    }
}

/// Result of walking a witness up to its root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathEvaluation {
    pub root: Digest,
    /// Starts at 1 and is incremented once per level.
    pub counter: usize,
}

/// Run the level-by-level state machine on `witness`.
pub fn evaluate_path(witness: &MerkleWitness) -> Result<PathEvaluation, PathError> {
    if witness.siblings.len() != witness.directions.len() {
        return Err(PathError::LengthMismatch {
            siblings: witness.siblings.len(),
            directions: witness.directions.len(),
        });
    }

    let mut current = witness.leaf;
    let mut counter = 1usize;
    for (level, (sibling, &dir)) in witness
        .siblings
        .iter()
        .zip(witness.directions.iter())
        .enumerate()
    {
        let lhs = select(dir, &current, sibling).map_err(|e| at_level(e, level))?;
        let rhs = select(1 - dir, &current, sibling).map_err(|e| at_level(e, level))?;
        current = compress(&lhs, &rhs);
        counter += 1;
    }

    Ok(PathEvaluation {
        root: current,
        counter,
    })
}

/// Check every terminal assertion of a depth-`depth` path against `root`.
pub fn check_path(witness: &MerkleWitness, depth: usize, root: &Digest) -> Result<(), PathError> {
    let eval = evaluate_path(witness)?;
    if eval.counter != depth + 1 {
        return Err(PathError::CounterMismatch {
            counter: eval.counter,
            expected: depth + 1,
        });
    }
    if eval.root != *root {
        tracing::debug!(computed = %eval.root, expected = %root, "merkle root mismatch");
        return Err(PathError::RootMismatch {
            computed: eval.root,
            expected: *root,
        });
    }
    Ok(())
}

fn at_level(err: PathError, level: usize) -> PathError {
    match err {
        PathError::NonBooleanDirection { value, .. } => {
            PathError::NonBooleanDirection { level, value }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA256 of 64 zero bytes, then of two copies of that.
    const ZERO_H1: &str = "f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b";
    const ZERO_H2: &str = "db56114e00fdd4c1f85c892bf35ac9a89289aaecb1ebd0a96cde606a748b5d71";

    fn d(byte: u8) -> Digest {
        Digest([byte; 32])
    }

    fn sha(lhs: &Digest, rhs: &Digest) -> Digest {
        let mut buf = Vec::with_capacity(64);
        buf.extend_from_slice(&lhs.0);
        buf.extend_from_slice(&rhs.0);
        Digest(Sha256::digest(&buf).into())
    }

    fn depth2_witness() -> MerkleWitness {
        MerkleWitness::new(d(0x11), vec![d(0x22), d(0x33)], vec![1, 0])
    }

    #[test]
    fn compress_known_vector() {
        let h1 = compress(&Digest::ZERO, &Digest::ZERO);
        assert_eq!(h1.to_hex(), ZERO_H1);
        assert_eq!(compress(&h1, &h1).to_hex(), ZERO_H2);
    }

    #[test]
    fn compress_order_matters() {
        assert_ne!(compress(&d(1), &d(2)), compress(&d(2), &d(1)));
    }

    #[test]
    fn select_picks_by_bit() {
        assert_eq!(select(1, &d(1), &d(2)).unwrap(), d(1));
        assert_eq!(select(0, &d(1), &d(2)).unwrap(), d(2));
    }

    #[test]
    fn select_rejects_non_boolean() {
        assert_eq!(
            select(2, &d(1), &d(2)),
            Err(PathError::NonBooleanDirection { level: 0, value: 2 })
        );
    }

    #[test]
    fn zero_path_reaches_known_root() {
        let w = MerkleWitness::new(
            Digest::ZERO,
            vec![Digest::ZERO, compress(&Digest::ZERO, &Digest::ZERO)],
            vec![1, 0],
        );
        let eval = evaluate_path(&w).unwrap();
        assert_eq!(eval.root.to_hex(), ZERO_H2);
        assert_eq!(eval.counter, 3);
    }

    #[test]
    fn depth2_chain_matches_manual_hashing() {
        let w = depth2_witness();
        // level 0: dir=1, leaf is left; level 1: dir=0, node is right
        let expected = sha(&d(0x33), &sha(&d(0x11), &d(0x22)));
        assert_eq!(evaluate_path(&w).unwrap().root, expected);
        assert!(check_path(&w, 2, &expected).is_ok());
    }

    #[test]
    fn single_bit_flips_change_root() {
        let w = depth2_witness();
        let root = evaluate_path(&w).unwrap().root;

        for bit in [0usize, 77, 255] {
            let mut t = w.clone();
            t.leaf = t.leaf.flip_bit(bit);
            assert_ne!(evaluate_path(&t).unwrap().root, root, "leaf bit {bit}");

            for s in 0..2 {
                let mut t = w.clone();
                t.siblings[s] = t.siblings[s].flip_bit(bit);
                assert_ne!(evaluate_path(&t).unwrap().root, root, "sibling {s} bit {bit}");
            }
        }
        for level in 0..2 {
            let mut t = w.clone();
            t.directions[level] ^= 1;
            assert_ne!(evaluate_path(&t).unwrap().root, root, "direction {level}");
        }
    }

    #[test]
    fn check_path_reports_failures() {
        let w = depth2_witness();
        let root = evaluate_path(&w).unwrap().root;

        assert!(matches!(
            check_path(&w, 2, &d(0)),
            Err(PathError::RootMismatch { .. })
        ));
        assert_eq!(
            check_path(&w, 3, &root),
            Err(PathError::CounterMismatch { counter: 3, expected: 4 })
        );

        let mut short = w.clone();
        short.directions.pop();
        assert_eq!(
            check_path(&short, 2, &root),
            Err(PathError::LengthMismatch { siblings: 2, directions: 1 })
        );

        let mut bad = w;
        bad.directions[1] = 3;
        assert_eq!(
            check_path(&bad, 2, &root),
            Err(PathError::NonBooleanDirection { level: 1, value: 3 })
        );
    }
}
