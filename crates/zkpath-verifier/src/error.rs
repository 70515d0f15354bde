// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for proof verification.
//!
//! Every variant is a hard failure. A proof that fails the pairing check is
//! not represented here: it is `Ok(false)`.

use zkpath_curve::{ArithmeticError, PointError};

#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    #[error("malformed point `{field}`: {source}")]
    MalformedPoint {
        field: String,
        #[source]
        source: PointError,
    },

    #[error("got {inputs} public inputs for a key with {ic_len} IC points")]
    InputLengthMismatch { inputs: usize, ic_len: usize },

    #[error("public input {index} is not below the scalar field modulus")]
    InputOutOfRange { index: usize },

    #[error("internal arithmetic invariant violated: {0}")]
    Arithmetic(#[from] ArithmeticError),

    #[error("encoding: {0}")]
    Encoding(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl VerifierError {
    /// Boundary rejection of a decoded point; logged at `warn`.
    pub(crate) fn point(field: impl Into<String>, source: PointError) -> Self {
        let field = field.into();
        tracing::warn!(field = %field, error = %source, "rejected curve point");
        Self::MalformedPoint { field, source }
    }
}

pub type VerifierResult<T> = Result<T, VerifierError>;
