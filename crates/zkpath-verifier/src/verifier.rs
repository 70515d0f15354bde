// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verification.
//!
//! Given `vk_x = ic[0] + Σ ic[i+1]·xᵢ`, a proof `(A, B, C)` is accepted iff
//!
//! ```text
//! e(A, B) · e(-vk_x, γ) · e(-C, δ) · e(-α, β) == 1
//! ```
//!
//! Input count and range are checked before any curve arithmetic runs.

use zkpath_curve::{multi_pairing_check, Fr, G1Point, G2Point, WORD_LEN};

use crate::error::{VerifierError, VerifierResult};
use crate::types::{FieldInteger, Proof, VerifyingKey};

/// Holds a verifying key for the lifetime of the process and checks proofs
/// against it.
#[derive(Clone, Debug)]
pub struct Verifier {
    vk: VerifyingKey,
}

impl Verifier {
    pub fn new(vk: VerifyingKey) -> Self {
        tracing::debug!(
            key_id = %hex::encode(vk.key_id()),
            public_inputs = vk.num_public_inputs(),
            "verifier loaded key"
        );
        Self { vk }
    }

    pub fn vk(&self) -> &VerifyingKey {
        &self.vk
    }

    /// Check a parsed proof against wire-encoded public inputs.
    pub fn verify_proof(&self, proof: &Proof, inputs: &[FieldInteger]) -> VerifierResult<bool> {
        check_input_count(&self.vk, inputs.len())?;
        let scalars = inputs
            .iter()
            .enumerate()
            .map(|(index, x)| {
                x.to_scalar().ok_or_else(|| {
                    tracing::warn!(index, value = %x.to_hex(), "public input out of range");
                    VerifierError::InputOutOfRange { index }
                })
            })
            .collect::<VerifierResult<Vec<Fr>>>()?;
        verify_groth16(&self.vk, proof, &scalars)
    }

    /// Raw entrypoint over wire words.
    ///
    /// `a` and `c` are `[x, y]`; `b` is `[[x.c1, x.c0], [y.c1, y.c0]]`, the
    /// same component order as the binary point encoding. Every point is
    /// checked on-curve (and, for `b`, in-subgroup) before use.
    pub fn verify(
        &self,
        a: [FieldInteger; 2],
        b: [[FieldInteger; 2]; 2],
        c: [FieldInteger; 2],
        input: &[FieldInteger],
    ) -> VerifierResult<bool> {
        let proof = Proof {
            a: parse_g1("a", &a)?,
            b: parse_g2("b", &b)?,
            c: parse_g1("c", &c)?,
        };
        self.verify_proof(&proof, input)
    }
}

fn check_input_count(vk: &VerifyingKey, inputs: usize) -> VerifierResult<()> {
    if inputs + 1 != vk.ic.len() {
        tracing::warn!(inputs, ic_len = vk.ic.len(), "public input count mismatch");
        return Err(VerifierError::InputLengthMismatch {
            inputs,
            ic_len: vk.ic.len(),
        });
    }
    Ok(())
}

fn concat_words<const N: usize>(words: &[FieldInteger]) -> Vec<u8> {
    let mut out = Vec::with_capacity(N * WORD_LEN);
    for w in words.iter().take(N) {
        out.extend_from_slice(&w.0);
    }
    out
}

fn parse_g1(field: &str, words: &[FieldInteger; 2]) -> VerifierResult<G1Point> {
    G1Point::from_be_bytes(&concat_words::<2>(words)).map_err(|e| VerifierError::point(field, e))
}

fn parse_g2(field: &str, words: &[[FieldInteger; 2]; 2]) -> VerifierResult<G2Point> {
    let flat: Vec<FieldInteger> = words.iter().flatten().copied().collect();
    G2Point::from_be_bytes(&concat_words::<4>(&flat)).map_err(|e| VerifierError::point(field, e))
}

/// `vk_x = ic[0] + Σ ic[i+1]·xᵢ`.
///
/// The caller has already checked `inputs.len() + 1 == vk.ic.len()`.
pub fn prepare_inputs(vk: &VerifyingKey, inputs: &[Fr]) -> VerifierResult<G1Point> {
    let Some((first, rest)) = vk.ic.split_first() else {
        return Err(VerifierError::InputLengthMismatch {
            inputs: inputs.len(),
            ic_len: 0,
        });
    };
    let mut acc = *first;
    for (base, x) in rest.iter().zip(inputs) {
        acc = acc.add(&base.mul(x)?)?;
    }
    Ok(acc)
}

/// Groth16 check over already-validated points and field-element inputs.
///
/// `Ok(false)` means the proof does not verify; errors are reserved for
/// malformed input.
pub fn verify_groth16(vk: &VerifyingKey, proof: &Proof, inputs: &[Fr]) -> VerifierResult<bool> {
    check_input_count(vk, inputs.len())?;
    let vk_x = prepare_inputs(vk, inputs)?;

    let ok = multi_pairing_check(&[
        (proof.a, proof.b),
        (vk_x.neg(), vk.gamma),
        (proof.c.neg(), vk.delta),
        (vk.alpha.neg(), vk.beta),
    ]);
    if ok {
        tracing::debug!(inputs = inputs.len(), "proof accepted");
    } else {
        tracing::debug!(inputs = inputs.len(), "proof rejected");
    }
    Ok(ok)
}
