use ark_bls12_381::{Fr, G1Affine};
use ark_ec::{AffineRepr, CurveGroup};

use rust_peerdas_kzg_primitives::{
    consts::{BYTES_PER_COMMITMENT, BYTES_PER_PROOF, FIELD_ELEMENTS_PER_EXT_BLOB},
    domain::{validate_cell_index, Domain},
    errors::KzgError,
    helpers,
    polynomial::{interpolate, vanishing_poly},
    srs::SRS,
    types::{CellIndex, CellRef},
};

/// The verifier context, holding the extended evaluation domain the cell
/// cosets are sliced from. Construct once and share; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Verifier {
    pub(crate) ext_domain: Domain,
}

impl Verifier {
    pub fn new() -> Result<Self, KzgError> {
        Ok(Self {
            ext_domain: Domain::new(FIELD_ELEMENTS_PER_EXT_BLOB)?,
        })
    }

    /// The extended (doubled) evaluation domain whose bit-reversed slices
    /// are the cell cosets.
    pub fn extended_domain(&self) -> &Domain {
        &self.ext_domain
    }

    /// Verifies one cell against a blob commitment.
    ///
    /// Malformed input (bad point or field element encodings, an
    /// out-of-range cell index) is an error; a well-formed proof that does
    /// not check out returns `Ok(false)`.
    pub fn verify_cell_kzg_proof(
        &self,
        commitment_bytes: &[u8; BYTES_PER_COMMITMENT],
        cell_index: CellIndex,
        cell: CellRef,
        proof_bytes: &[u8; BYTES_PER_PROOF],
        srs: &SRS,
    ) -> Result<bool, KzgError> {
        validate_cell_index(cell_index)?;
        let commitment = helpers::read_g1_point_from_bytes_be(commitment_bytes)?;
        let proof = helpers::read_g1_point_from_bytes_be(proof_bytes)?;
        let coset_evals = helpers::cell_to_coset_evals(cell)?;
        let coset = self.ext_domain.coset_for_cell(cell_index)?;
        verify_kzg_proof_multi(&commitment, coset, &coset_evals, &proof, srs)
    }
}

/// Verifies a multi-point opening: that the polynomial behind `commitment`
/// takes the values `ys` over the points of `coset`.
///
/// The check is the quotient identity `Q(x) * Z(x) = p(x) - I(x)` lifted to
/// one pairing product:
///
/// `e(proof, [Z(tau)]_2) * e(commitment - [I(tau)]_1, -[1]_2) == 1`
///
/// where `Z` vanishes on the coset and `I` interpolates the claimed values.
pub fn verify_kzg_proof_multi(
    commitment: &G1Affine,
    coset: &[Fr],
    ys: &[Fr],
    proof: &G1Affine,
    srs: &SRS,
) -> Result<bool, KzgError> {
    if coset.is_empty() {
        return Err(KzgError::EmptyPointSet);
    }
    if coset.len() != ys.len() {
        return Err(KzgError::LengthMismatch(format!(
            "coset has {} points but {} evaluations were supplied",
            coset.len(),
            ys.len()
        )));
    }

    let vanishing = vanishing_poly(coset)?;
    if vanishing.len() > srs.g2_monomial.len() {
        return Err(KzgError::InvalidInputLength);
    }
    let vanishing_g2 = helpers::g2_lincomb(&srs.g2_monomial[..vanishing.len()], vanishing.coeffs())?;

    let interpolation = interpolate(coset, ys)?;
    let interpolation_g1 =
        helpers::g1_lincomb(&srs.g1_monomial[..interpolation.len()], interpolation.coeffs())?;

    let commitment_minus_interpolation =
        (commitment.into_group() - interpolation_g1).into_affine();

    Ok(helpers::pairings_verify(
        *proof,
        vanishing_g2,
        commitment_minus_interpolation,
        srs.g2_monomial[0],
    ))
}
