// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Binary encodings of verifying keys and proofs.
//!
//! ```text
//! VerifyingKey: alpha(64) ‖ beta(128) ‖ gamma(128) ‖ delta(128) ‖ n: u32 BE ‖ ic[0..n](64 each)
//! Proof:        a(64) ‖ b(128) ‖ c(64)                                       256 bytes
//! ```
//!
//! Points use the fixed-width layout of `zkpath_curve::encoding`.

use zkpath_curve::{G1Point, G2Point, G1_ENCODED_LEN, G2_ENCODED_LEN};

use crate::error::{VerifierError, VerifierResult};
use crate::types::{Proof, VerifyingKey};

pub const PROOF_ENCODED_LEN: usize = 2 * G1_ENCODED_LEN + G2_ENCODED_LEN;
const VK_HEADER_LEN: usize = G1_ENCODED_LEN + 3 * G2_ENCODED_LEN + 4;

/// Sequential reader that names each field it decodes.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize, field: &str) -> VerifierResult<&'a [u8]> {
        let end = self.pos + len;
        let chunk = self.bytes.get(self.pos..end).ok_or_else(|| {
            VerifierError::Encoding(format!(
                "truncated at `{field}`: need {end} bytes, have {}",
                self.bytes.len()
            ))
        })?;
        self.pos = end;
        Ok(chunk)
    }

    fn g1(&mut self, field: &str) -> VerifierResult<G1Point> {
        let chunk = self.take(G1_ENCODED_LEN, field)?;
        G1Point::from_be_bytes(chunk).map_err(|e| VerifierError::point(field, e))
    }

    fn g2(&mut self, field: &str) -> VerifierResult<G2Point> {
        let chunk = self.take(G2_ENCODED_LEN, field)?;
        G2Point::from_be_bytes(chunk).map_err(|e| VerifierError::point(field, e))
    }

    fn u32(&mut self, field: &str) -> VerifierResult<u32> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4, field)?);
        Ok(u32::from_be_bytes(buf))
    }

    fn finish(self) -> VerifierResult<()> {
        if self.pos != self.bytes.len() {
            return Err(VerifierError::Encoding(format!(
                "{} trailing bytes",
                self.bytes.len() - self.pos
            )));
        }
        Ok(())
    }
}

impl VerifyingKey {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(VK_HEADER_LEN + self.ic.len() * G1_ENCODED_LEN);
        out.extend_from_slice(&self.alpha.to_be_bytes());
        for p in [&self.beta, &self.gamma, &self.delta] {
            out.extend_from_slice(&p.to_be_bytes());
        }
        out.extend_from_slice(&(self.ic.len() as u32).to_be_bytes());
        for p in &self.ic {
            out.extend_from_slice(&p.to_be_bytes());
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> VerifierResult<Self> {
        let mut cur = Cursor::new(bytes);
        let alpha = cur.g1("alpha")?;
        let beta = cur.g2("beta")?;
        let gamma = cur.g2("gamma")?;
        let delta = cur.g2("delta")?;
        let n = cur.u32("ic_len")? as usize;
        if n == 0 {
            return Err(VerifierError::Encoding("empty IC vector".into()));
        }
        let remaining = bytes.len().saturating_sub(VK_HEADER_LEN);
        if remaining != n * G1_ENCODED_LEN {
            return Err(VerifierError::Encoding(format!(
                "IC vector declares {n} points but {remaining} bytes follow"
            )));
        }
        let ic = (0..n)
            .map(|i| cur.g1(&format!("ic[{i}]")))
            .collect::<VerifierResult<Vec<_>>>()?;
        cur.finish()?;
        Ok(Self {
            alpha,
            beta,
            gamma,
            delta,
            ic,
        })
    }
}

impl Proof {
    pub fn to_bytes(&self) -> [u8; PROOF_ENCODED_LEN] {
        let mut out = [0u8; PROOF_ENCODED_LEN];
        out[..G1_ENCODED_LEN].copy_from_slice(&self.a.to_be_bytes());
        out[G1_ENCODED_LEN..G1_ENCODED_LEN + G2_ENCODED_LEN].copy_from_slice(&self.b.to_be_bytes());
        out[G1_ENCODED_LEN + G2_ENCODED_LEN..].copy_from_slice(&self.c.to_be_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> VerifierResult<Self> {
        if bytes.len() != PROOF_ENCODED_LEN {
            return Err(VerifierError::Encoding(format!(
                "proof must be {PROOF_ENCODED_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let mut cur = Cursor::new(bytes);
        let proof = Self {
            a: cur.g1("a")?,
            b: cur.g2("b")?,
            c: cur.g1("c")?,
        };
        cur.finish()?;
        Ok(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Fr, G1Affine, G2Affine};
    use ark_ec::AffineRepr;
    use std::sync::{Arc, Mutex};

    fn sample_vk() -> VerifyingKey {
        let g1 = G1Point::from(G1Affine::generator());
        let g2 = G2Point::from(G2Affine::generator());
        VerifyingKey {
            alpha: g1.mul(&Fr::from(2u64)).unwrap(),
            beta: g2.mul(&Fr::from(3u64)).unwrap(),
            gamma: g2,
            delta: g2.mul(&Fr::from(5u64)).unwrap(),
            ic: vec![g1, g1.mul(&Fr::from(7u64)).unwrap(), G1Point::infinity()],
        }
    }

    #[test]
    fn vk_round_trip() {
        let vk = sample_vk();
        let bytes = vk.to_bytes();
        assert_eq!(bytes.len(), VK_HEADER_LEN + 3 * G1_ENCODED_LEN);
        let parsed = VerifyingKey::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, vk);
        assert_eq!(parsed.key_id(), vk.key_id());
    }

    #[test]
    fn key_id_changes_with_content() {
        let vk = sample_vk();
        let mut other = vk.clone();
        other.ic.pop();
        assert_ne!(vk.key_id(), other.key_id());
    }

    #[test]
    fn vk_rejects_truncation_and_trailing_bytes() {
        let bytes = sample_vk().to_bytes();
        assert!(matches!(
            VerifyingKey::from_bytes(&bytes[..bytes.len() - 1]),
            Err(VerifierError::Encoding(_))
        ));
        let mut long = bytes.clone();
        long.push(0);
        assert!(matches!(
            VerifyingKey::from_bytes(&long),
            Err(VerifierError::Encoding(_))
        ));
    }

    #[test]
    fn vk_names_the_bad_point() {
        let mut bytes = sample_vk().to_bytes();
        // corrupt gamma's last word
        let at = G1_ENCODED_LEN + 2 * G2_ENCODED_LEN - 1;
        bytes[at] ^= 1;
        match VerifyingKey::from_bytes(&bytes) {
            Err(VerifierError::MalformedPoint { field, .. }) => assert_eq!(field, "gamma"),
            other => panic!("expected malformed gamma, got {other:?}"),
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured_warnings(f: impl FnOnce()) -> String {
        let buf = LogBuffer::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn decoders_warn_on_rejected_points() {
        let mut bytes = sample_vk().to_bytes();
        bytes[G1_ENCODED_LEN - 1] ^= 1;
        let logs = captured_warnings(|| {
            assert!(VerifyingKey::from_bytes(&bytes).is_err());
        });
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("rejected curve point"), "{logs}");
        assert!(logs.contains("alpha"), "{logs}");

        let mut vk_json = crate::json::VerificationKeyJson::from(&sample_vk());
        vk_json.delta[1][1].0[31] ^= 1;
        let logs = captured_warnings(|| {
            assert!(VerifyingKey::try_from(&vk_json).is_err());
        });
        assert!(logs.contains("rejected curve point"), "{logs}");
        assert!(logs.contains("delta"), "{logs}");

        let valid = sample_vk().to_bytes();
        let logs = captured_warnings(|| {
            assert!(VerifyingKey::from_bytes(&valid).is_ok());
        });
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn proof_round_trip() {
        let vk = sample_vk();
        let proof = Proof {
            a: vk.alpha,
            b: vk.beta,
            c: vk.ic[1],
        };
        let bytes = proof.to_bytes();
        assert_eq!(Proof::from_bytes(&bytes).unwrap(), proof);
        assert!(Proof::from_bytes(&bytes[1..]).is_err());
    }
}
