// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zkpath-verifier: Groth16 verification over BN254.
//!
//! A [`Verifier`] owns an immutable [`VerifyingKey`] loaded once at startup
//! and checks constant-size [`Proof`]s against public inputs. Malformed input
//! (off-curve points, wrong input count, inputs outside the scalar field) is
//! an error; a proof that simply does not verify is `Ok(false)`.

mod error;
pub mod json;
mod types;
mod verifier;
pub mod wire;

pub use error::{VerifierError, VerifierResult};
pub use types::{FieldInteger, Proof, VerifyingKey};
pub use verifier::{prepare_inputs, verify_groth16, Verifier};
