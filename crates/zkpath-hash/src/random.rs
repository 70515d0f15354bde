// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_std::rand::Rng;
use zkpath_types::{Digest, MerkleWitness};

use crate::compress;

/// Random leaf, siblings and directions, together with the root they hash to.
pub fn random_path<R: Rng>(depth: usize, rng: &mut R) -> (MerkleWitness, Digest) {
    let mut random_digest = || {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Digest(bytes)
    };
    let leaf = random_digest();
    let siblings: Vec<Digest> = (0..depth).map(|_| random_digest()).collect();
    let directions: Vec<u8> = (0..depth).map(|_| u8::from(rng.gen::<bool>())).collect();

    let mut root = leaf;
    for (sibling, dir) in siblings.iter().zip(&directions) {
        root = if *dir == 1 {
            compress(&root, sibling)
        } else {
            compress(sibling, &root)
        };
    }
    (MerkleWitness::new(leaf, siblings, directions), root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check_path;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_path_is_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        for depth in [1, 2, 5] {
            let (w, root) = random_path(depth, &mut rng);
            assert_eq!(w.depth(), depth);
            assert!(w.directions.iter().all(|d| *d <= 1));
            assert!(check_path(&w, depth, &root).is_ok());
        }
    }

    #[test]
    fn random_path_is_seeded() {
        let a = random_path(2, &mut StdRng::seed_from_u64(7));
        let b = random_path(2, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
