// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Shared types for zkpath: fixed-width digests and Merkle witnesses.

pub mod digest;
pub mod witness;

pub use digest::{Digest, DigestError, DIGEST_LEN};
pub use witness::{MerkleWitness, DEFAULT_TREE_DEPTH};
