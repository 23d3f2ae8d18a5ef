//! Recovering an extended blob from a partial set of its cells.
//!
//! The extended blob is a 2x Reed-Solomon encoding, so any half of its
//! cells determines the rest. Recovery never touches a curve point: it runs
//! entirely on field arithmetic and FFTs.
//!
//! The construction works around the holes instead of interpolating through
//! them. With `E` the evaluation vector that is correct on the known cells
//! and zero elsewhere, and `Z` the polynomial vanishing exactly on the
//! missing cells' positions, `E * Z` agrees with `P * Z` on the whole
//! domain, hence as polynomials. Dividing pointwise by `Z` would divide by
//! zero on the missing positions, so both sides are first moved to a coset
//! `k * H` of the domain, where `Z` has no roots; there the quotient is `P`
//! evaluated on the coset, and shifting back recovers `P` itself.

use ark_bls12_381::Fr;
use ark_ff::{batch_inversion, Field};
use ark_std::{vec, vec::Vec, Zero};
use std::collections::BTreeSet;

use rust_peerdas_kzg_primitives::{
    consts::{
        CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_CELL, FIELD_ELEMENTS_PER_EXT_BLOB,
        PRIMITIVE_ROOT_OF_UNITY,
    },
    domain::{bit_reversal_permutation, validate_cell_index, Domain},
    errors::KzgError,
    helpers,
    polynomial::{vanishing_poly, PolynomialCoeffForm},
    types::{Cell, CellIndex, CellRef},
};

/// The recovery context: the cell-count and extended evaluation domains
/// plus the coset shift factor. Construct once and share; immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct Recovery {
    cells_domain: Domain,
    ext_domain: Domain,
    shift_factor: Fr,
    inv_shift_factor: Fr,
}

impl Recovery {
    pub fn new() -> Result<Self, KzgError> {
        let shift_factor = Fr::from(PRIMITIVE_ROOT_OF_UNITY);
        let inv_shift_factor = shift_factor
            .inverse()
            .ok_or_else(|| KzgError::InternalInvariantViolation(
                "coset shift factor is not invertible".to_string(),
            ))?;
        Ok(Self {
            cells_domain: Domain::new(CELLS_PER_EXT_BLOB)?,
            ext_domain: Domain::new(FIELD_ELEMENTS_PER_EXT_BLOB)?,
            shift_factor,
            inv_shift_factor,
        })
    }

    /// Recovers all `CELLS_PER_EXT_BLOB` cells from any subset of at least
    /// half of them, preserving the supplied cells byte for byte.
    ///
    /// `cell_indices[i]` names the position of `cells[i]`. Indices must be
    /// distinct and in range, and at least `CELLS_PER_EXT_BLOB / 2` cells
    /// must be supplied.
    pub fn recover_all_cells(
        &self,
        cell_indices: &[CellIndex],
        cells: &[CellRef],
    ) -> Result<Vec<Cell>, KzgError> {
        if cell_indices.len() != cells.len() {
            return Err(KzgError::LengthMismatch(format!(
                "{} cell indices for {} cells",
                cell_indices.len(),
                cells.len()
            )));
        }

        let mut present = BTreeSet::new();
        for &cell_index in cell_indices {
            validate_cell_index(cell_index)?;
            if !present.insert(cell_index) {
                return Err(KzgError::DuplicateCellId(cell_index));
            }
        }

        let required = CELLS_PER_EXT_BLOB / 2;
        if cells.len() < required {
            return Err(KzgError::InsufficientData {
                given: cells.len(),
                required,
            });
        }

        // Decoding validates that every element is canonical.
        let decoded = cells
            .iter()
            .map(|cell| helpers::cell_to_coset_evals(cell))
            .collect::<Result<Vec<_>, _>>()?;

        let missing: Vec<u64> =
            (0..CELLS_PER_EXT_BLOB as u64).filter(|index| !present.contains(index)).collect();

        let (zero_poly_coeffs, zero_poly_evals) = self.zero_polynomial(&missing)?;
        self.check_zero_polynomial(&zero_poly_evals, &present)?;

        // Scatter the known evaluations into a bit-reversed buffer, then
        // undo the bit-reversal to line up with the FFT order.
        let mut extended_evals_brp = vec![Fr::zero(); FIELD_ELEMENTS_PER_EXT_BLOB];
        for (&cell_index, evals) in cell_indices.iter().zip(&decoded) {
            let start = cell_index as usize * FIELD_ELEMENTS_PER_CELL;
            extended_evals_brp[start..start + FIELD_ELEMENTS_PER_CELL].copy_from_slice(evals);
        }
        let extended_evals = bit_reversal_permutation(&extended_evals_brp)?;

        // (E * Z) agrees with (P * Z) everywhere: on known positions E is P,
        // on missing positions Z is zero.
        let product_evals: Vec<Fr> = extended_evals
            .iter()
            .zip(&zero_poly_evals)
            .map(|(eval, zero)| *eval * zero)
            .collect();
        let product_coeffs = self.ext_domain.ifft(&product_evals)?;

        // Move both factors onto the shifted domain, where Z has no roots.
        let shifted_product_evals = self
            .ext_domain
            .fft(PolynomialCoeffForm::new(product_coeffs)?
                .shift(&self.shift_factor)?
                .coeffs())?;
        let shifted_zero_evals = self
            .ext_domain
            .fft(PolynomialCoeffForm::new(zero_poly_coeffs)?
                .shift(&self.shift_factor)?
                .coeffs())?;

        let mut inverse_denominators = shifted_zero_evals;
        if inverse_denominators.iter().any(|d| d.is_zero()) {
            return Err(KzgError::InternalInvariantViolation(
                "vanishing polynomial has a root on the shifted domain".to_string(),
            ));
        }
        batch_inversion(&mut inverse_denominators);

        let shifted_poly_evals: Vec<Fr> = shifted_product_evals
            .iter()
            .zip(&inverse_denominators)
            .map(|(num, inv_den)| *num * inv_den)
            .collect();

        // The quotient is P on the shifted domain; shift its coefficients
        // back and re-evaluate over the extended domain.
        let shifted_poly_coeffs = self.ext_domain.ifft(&shifted_poly_evals)?;
        let poly_coeffs = PolynomialCoeffForm::new(shifted_poly_coeffs)?
            .shift(&self.inv_shift_factor)?;

        let recovered_evals = self.ext_domain.fft(poly_coeffs.coeffs())?;
        let recovered_evals_brp = bit_reversal_permutation(&recovered_evals)?;

        let recovered_cells = recovered_evals_brp
            .chunks(FIELD_ELEMENTS_PER_CELL)
            .map(helpers::coset_evals_to_cell)
            .collect::<Result<Vec<Cell>, _>>()?;

        // Every supplied cell must round-trip untouched; anything else means
        // the inputs were not a consistent codeword.
        for (&cell_index, original) in cell_indices.iter().zip(cells) {
            if *recovered_cells[cell_index as usize] != **original {
                return Err(KzgError::ReconstructionMismatch);
            }
        }

        Ok(recovered_cells)
    }

    /// The vanishing polynomial of the missing cells, over the full extended
    /// domain: coefficients and evaluations in natural order.
    ///
    /// The roots are whole cosets, so the polynomial is `Z_small(x^W)` for
    /// the small-domain vanishing polynomial of the missing cells' shifted
    /// roots. Injecting the small coefficients at stride `W` builds it
    /// directly.
    fn zero_polynomial(&self, missing: &[u64]) -> Result<(Vec<Fr>, Vec<Fr>), KzgError> {
        let missing_points: Vec<Fr> = missing
            .iter()
            .map(|&index| self.cells_domain.roots_brp()[index as usize])
            .collect();
        let short_zero_poly = vanishing_poly(&missing_points)?;

        let mut coeffs = vec![Fr::zero(); FIELD_ELEMENTS_PER_EXT_BLOB];
        for (i, coeff) in short_zero_poly.coeffs().iter().enumerate() {
            coeffs[i * FIELD_ELEMENTS_PER_CELL] = *coeff;
        }

        let evals = self.ext_domain.fft(&coeffs)?;
        Ok((coeffs, evals))
    }

    /// The constructed vanishing polynomial must vanish on exactly the
    /// missing cells. This can only fail through an implementation bug, so
    /// a violation is not recoverable.
    fn check_zero_polynomial(
        &self,
        zero_poly_evals: &[Fr],
        present: &BTreeSet<u64>,
    ) -> Result<(), KzgError> {
        let zero_poly_evals_brp = bit_reversal_permutation(zero_poly_evals)?;
        for cell_index in 0..CELLS_PER_EXT_BLOB as u64 {
            let start = cell_index as usize * FIELD_ELEMENTS_PER_CELL;
            let slice = &zero_poly_evals_brp[start..start + FIELD_ELEMENTS_PER_CELL];
            let zero_count = slice.iter().filter(|eval| eval.is_zero()).count();
            let expected = if present.contains(&cell_index) {
                0
            } else {
                FIELD_ELEMENTS_PER_CELL
            };
            if zero_count != expected {
                return Err(KzgError::InternalInvariantViolation(format!(
                    "vanishing polynomial has {zero_count} roots on cell {cell_index}, \
                     expected {expected}"
                )));
            }
        }
        Ok(())
    }
}
