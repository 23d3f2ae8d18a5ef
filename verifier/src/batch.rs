//! Batched cell proof verification.
//!
//! The naive batch check runs one pairing product per cell. This verifier
//! folds the whole batch into a single two-pairing check with a random
//! linear combination: a Fiat-Shamir challenge `r` is derived from every
//! public input, and entry `k` is weighted by `r^k`. A batch that contains
//! even one invalid entry then survives only with probability about `n/r`.
//!
//! The fold relies on the coset structure of the cells. Every coset is
//! `h * <w>` for a `FIELD_ELEMENTS_PER_CELL`-th root of unity `w`, so its
//! vanishing polynomial collapses to `x^W - h^W` and every entry can share
//! the single G2 point `[tau^W]_2`:
//!
//! `e(sum_k r^k Q_k, [tau^W]_2) == e(sum_k r^k (C_k - I_k + h_k^W Q_k), [1]_2)`

use ark_bls12_381::Fr;
use ark_std::vec::Vec;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use rust_peerdas_kzg_primitives::{
    consts::{
        BYTES_PER_CELL, BYTES_PER_COMMITMENT, BYTES_PER_PROOF, FIELD_ELEMENTS_PER_CELL,
        RANDOM_CHALLENGE_KZG_CELL_BATCH_DOMAIN,
    },
    domain::validate_cell_index,
    errors::KzgError,
    helpers,
    polynomial::interpolate,
    srs::SRS,
    types::{CellIndex, CellRef, RowIndex},
};

use crate::verify::Verifier;

impl Verifier {
    /// Verifies a batch of cells, each against the row commitment its
    /// `row_indices` entry selects and the coset its `column_indices` entry
    /// selects.
    ///
    /// Accepts exactly when every entry would pass
    /// [crate::verify::Verifier::verify_cell_kzg_proof] on its own (up to
    /// the `n/r` soundness slack of the random fold). Malformed input is an
    /// error, a cryptographically invalid entry makes the whole batch
    /// return `Ok(false)`. An empty batch is vacuously valid.
    pub fn verify_cell_kzg_proof_batch(
        &self,
        row_commitments_bytes: &[[u8; BYTES_PER_COMMITMENT]],
        row_indices: &[RowIndex],
        column_indices: &[CellIndex],
        cells: &[CellRef],
        proofs_bytes: &[[u8; BYTES_PER_PROOF]],
        srs: &SRS,
    ) -> Result<bool, KzgError> {
        let n = cells.len();
        if row_indices.len() != n || column_indices.len() != n || proofs_bytes.len() != n {
            return Err(KzgError::LengthMismatch(format!(
                "cells: {}, rows: {}, columns: {}, proofs: {}",
                n,
                row_indices.len(),
                column_indices.len(),
                proofs_bytes.len()
            )));
        }
        for &row_index in row_indices {
            if row_index >= row_commitments_bytes.len() as u64 {
                return Err(KzgError::IndexOutOfRange {
                    index: row_index,
                    bound: row_commitments_bytes.len() as u64,
                });
            }
        }
        for &column_index in column_indices {
            validate_cell_index(column_index)?;
        }

        let row_commitments = row_commitments_bytes
            .iter()
            .map(helpers::read_g1_point_from_bytes_be)
            .collect::<Result<Vec<_>, _>>()?;

        if n == 0 {
            return Ok(true);
        }

        let proofs = proofs_bytes
            .iter()
            .map(helpers::read_g1_point_from_bytes_be)
            .collect::<Result<Vec<_>, _>>()?;

        let coset_evals = cells
            .iter()
            .map(|cell| helpers::cell_to_coset_evals(cell))
            .collect::<Result<Vec<_>, _>>()?;

        let r_powers = compute_r_powers(
            row_commitments_bytes,
            row_indices,
            column_indices,
            cells,
            proofs_bytes,
        );

        // Interpolation commitments are the per-entry cost; they only
        // depend on their own cell, so compute them in parallel.
        let interpolation_g1 = (0..n)
            .into_par_iter()
            .map(|k| {
                let coset = self.ext_domain.coset_for_cell(column_indices[k])?;
                let interpolation = interpolate(coset, &coset_evals[k])?;
                helpers::g1_lincomb(&srs.g1_monomial[..interpolation.len()], interpolation.coeffs())
            })
            .collect::<Result<Vec<_>, KzgError>>()?;

        // Left side: sum_k r^k Q_k paired with [tau^W]_2.
        let proof_lincomb = helpers::g1_lincomb(&proofs, &r_powers)?;
        let tau_pow_w_g2 = srs.g2_monomial[FIELD_ELEMENTS_PER_CELL];

        // Right side: sum_k r^k (C_k - I_k + h_k^W Q_k), one MSM over 3n
        // points.
        let mut bases = Vec::with_capacity(3 * n);
        let mut scalars = Vec::with_capacity(3 * n);
        for k in 0..n {
            let coset_shift_pow = self.ext_domain.coset_shift_pow(column_indices[k])?;
            bases.push(row_commitments[row_indices[k] as usize]);
            scalars.push(r_powers[k]);
            bases.push(interpolation_g1[k]);
            scalars.push(-r_powers[k]);
            bases.push(proofs[k]);
            scalars.push(r_powers[k] * coset_shift_pow);
        }
        let rhs_lincomb = helpers::g1_lincomb(&bases, &scalars)?;

        Ok(helpers::pairings_verify(
            proof_lincomb,
            tau_pow_w_g2,
            rhs_lincomb,
            srs.g2_monomial[0],
        ))
    }
}

/// Derives the Fiat-Shamir weights for the batch: a Sha256 transcript over
/// the domain separator, the cell width, both array lengths and every
/// public input, hashed into the challenge `r`, then expanded into
/// `[r^0, ..., r^(n-1)]`.
fn compute_r_powers(
    row_commitments_bytes: &[[u8; BYTES_PER_COMMITMENT]],
    row_indices: &[u64],
    column_indices: &[u64],
    cells: &[CellRef],
    proofs_bytes: &[[u8; BYTES_PER_PROOF]],
) -> Vec<Fr> {
    let n = cells.len();
    let input_size = RANDOM_CHALLENGE_KZG_CELL_BATCH_DOMAIN.len()
        + 3 * 8
        + row_commitments_bytes.len() * BYTES_PER_COMMITMENT
        + n * (8 + 8 + BYTES_PER_CELL + BYTES_PER_PROOF);

    let mut data = Vec::with_capacity(input_size);
    data.extend_from_slice(RANDOM_CHALLENGE_KZG_CELL_BATCH_DOMAIN);
    data.extend_from_slice(&helpers::usize_to_be_bytes(FIELD_ELEMENTS_PER_CELL));
    data.extend_from_slice(&helpers::usize_to_be_bytes(row_commitments_bytes.len()));
    data.extend_from_slice(&helpers::usize_to_be_bytes(n));

    for commitment in row_commitments_bytes {
        data.extend_from_slice(commitment);
    }
    for row_index in row_indices {
        data.extend_from_slice(&row_index.to_be_bytes());
    }
    for column_index in column_indices {
        data.extend_from_slice(&column_index.to_be_bytes());
    }
    for cell in cells {
        data.extend_from_slice(*cell);
    }
    for proof in proofs_bytes {
        data.extend_from_slice(proof);
    }
    debug_assert_eq!(data.len(), input_size);

    let r = helpers::hash_to_field_element(&data);
    helpers::compute_powers(&r, n)
}
