use ark_bls12_381::{Fr, G1Affine};
use ark_std::{vec::Vec, Zero};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use rust_peerdas_kzg_primitives::{
    blob::Blob,
    consts::{CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL,
             FIELD_ELEMENTS_PER_EXT_BLOB},
    domain::{bit_reversal_permutation, Domain},
    errors::KzgError,
    helpers,
    polynomial::{interpolate, vanishing_poly, PolynomialCoeffForm},
    srs::SRS,
    types::{Cell, KzgCommitment, KzgProof},
};

/// The prover context: commits to blobs and produces the extended cells with
/// their multi-point opening proofs.
///
/// Holds the precomputed evaluation domains; the curve points come from the
/// [SRS] passed explicitly into each method. Construct once and share, the
/// struct is immutable afterwards.
#[derive(Debug, Clone)]
pub struct KZG {
    blob_domain: Domain,
    ext_domain: Domain,
}

impl KZG {
    pub fn new() -> Result<Self, KzgError> {
        Ok(Self {
            blob_domain: Domain::new(FIELD_ELEMENTS_PER_BLOB)?,
            ext_domain: Domain::new(FIELD_ELEMENTS_PER_EXT_BLOB)?,
        })
    }

    /// The extended (doubled) evaluation domain whose bit-reversed slices
    /// are the cell cosets.
    pub fn extended_domain(&self) -> &Domain {
        &self.ext_domain
    }

    /// Commits to the blob's polynomial: an MSM of its coefficients against
    /// the G1 monomial basis.
    pub fn blob_to_kzg_commitment(&self, blob: &Blob, srs: &SRS) -> Result<KzgCommitment, KzgError> {
        let poly = self.blob_to_polynomial_coeff(blob)?;
        if poly.len() > srs.g1_monomial.len() {
            return Err(KzgError::InvalidInputLength);
        }
        let commitment = helpers::g1_lincomb(&srs.g1_monomial[..poly.len()], poly.coeffs())?;
        Ok(helpers::g1_point_to_bytes_be(&commitment))
    }

    /// Extends the blob onto the doubled domain and slices it into
    /// `CELLS_PER_EXT_BLOB` cells, without computing any proofs.
    pub fn compute_cells(&self, blob: &Blob) -> Result<Vec<Cell>, KzgError> {
        let poly = self.blob_to_polynomial_coeff(blob)?;
        let evals_brp = self.extended_evaluations_brp(&poly)?;
        evals_brp
            .chunks(FIELD_ELEMENTS_PER_CELL)
            .map(helpers::coset_evals_to_cell)
            .collect()
    }

    /// Produces all cells of the extended blob together with one opening
    /// proof per cell, in cell-index order.
    pub fn compute_cells_and_kzg_proofs(
        &self,
        blob: &Blob,
        srs: &SRS,
    ) -> Result<(Vec<Cell>, Vec<KzgProof>), KzgError> {
        let poly = self.blob_to_polynomial_coeff(blob)?;
        let evals_brp = self.extended_evaluations_brp(&poly)?;

        let cells = evals_brp
            .chunks(FIELD_ELEMENTS_PER_CELL)
            .map(helpers::coset_evals_to_cell)
            .collect::<Result<Vec<_>, _>>()?;

        // Each cell's evaluations are a slice of the one extended FFT above,
        // which agrees point for point with evaluating the polynomial over
        // the coset directly. Cells are independent, so prove them in
        // parallel.
        let proofs = (0..CELLS_PER_EXT_BLOB as u64)
            .into_par_iter()
            .map(|cell_index| {
                let coset = self.ext_domain.coset_for_cell(cell_index)?;
                let start = cell_index as usize * FIELD_ELEMENTS_PER_CELL;
                let ys = &evals_brp[start..start + FIELD_ELEMENTS_PER_CELL];
                let proof = self.open_at_coset(&poly, coset, ys, srs)?;
                Ok(helpers::g1_point_to_bytes_be(&proof))
            })
            .collect::<Result<Vec<KzgProof>, KzgError>>()?;

        Ok((cells, proofs))
    }

    /// Opens `poly` over an arbitrary coset: evaluates it at every coset
    /// point and commits to the quotient `(p - I) / Z`, where `I`
    /// interpolates the evaluations and `Z` vanishes on the coset.
    ///
    /// Returns the proof together with the evaluations.
    pub fn compute_kzg_proof_multi(
        &self,
        poly: &PolynomialCoeffForm,
        coset: &[Fr],
        srs: &SRS,
    ) -> Result<(G1Affine, Vec<Fr>), KzgError> {
        let ys: Vec<Fr> = coset.iter().map(|z| poly.evaluate(z)).collect();
        let proof = self.open_at_coset(poly, coset, &ys, srs)?;
        Ok((proof, ys))
    }

    fn open_at_coset(
        &self,
        poly: &PolynomialCoeffForm,
        coset: &[Fr],
        ys: &[Fr],
        srs: &SRS,
    ) -> Result<G1Affine, KzgError> {
        if coset.is_empty() {
            return Err(KzgError::EmptyPointSet);
        }

        // p - I vanishes on the whole coset, so dividing by Z is exact and
        // the quotient commits to a valid opening proof.
        let interpolation = interpolate(coset, ys)?;
        let numerator = poly.add(&interpolation.neg());
        let vanishing = vanishing_poly(coset)?;
        let quotient = numerator.div(&vanishing)?;

        if quotient.len() > srs.g1_monomial.len() {
            return Err(KzgError::InvalidInputLength);
        }
        helpers::g1_lincomb(&srs.g1_monomial[..quotient.len()], quotient.coeffs())
    }

    fn blob_to_polynomial_coeff(&self, blob: &Blob) -> Result<PolynomialCoeffForm, KzgError> {
        Ok(blob.to_polynomial_eval_form().to_coeff_form(&self.blob_domain)?)
    }

    /// Zero-pads the coefficients to the extended width, evaluates them over
    /// the doubled domain and bit-reverses the result, so that cell `i` is
    /// the `i`-th contiguous chunk.
    fn extended_evaluations_brp(&self, poly: &PolynomialCoeffForm) -> Result<Vec<Fr>, KzgError> {
        let mut padded = poly.coeffs().to_vec();
        padded.resize(FIELD_ELEMENTS_PER_EXT_BLOB, Fr::zero());
        let evals = self.ext_domain.fft(&padded)?;
        Ok(bit_reversal_permutation(&evals)?)
    }
}
