use ark_bls12_381::{G1Affine, G2Affine};
use ark_ec::short_weierstrass::Affine;
use ark_ec::AffineRepr;

use crate::consts::{BYTES_PER_G1_POINT, BYTES_PER_G2_POINT};
use crate::errors::KzgError;
use crate::helpers;

/// Reads a curve point from its big-endian compressed encoding. Lets the
/// trusted setup loader process G1 and G2 files through the same worker
/// pipeline.
pub trait ReadPointFromBytes: AffineRepr {
    /// The size of one serialized point in bytes.
    const POINT_SIZE: usize;

    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<Self, KzgError>;
}

// Implemented against the concrete `ark_bls12_381::g1`/`g2` config paths
// rather than the `G1Affine`/`G2Affine` type aliases: both aliases resolve
// through the same `Bls12Config` associated-type projection, which rustc's
// coherence checker does not normalize, so writing the impls via the
// aliases makes it see two impls for the same type.
impl ReadPointFromBytes for Affine<ark_bls12_381::g1::Config> {
    const POINT_SIZE: usize = BYTES_PER_G1_POINT;

    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<G1Affine, KzgError> {
        let bytes: &[u8; BYTES_PER_G1_POINT] = bytes
            .try_into()
            .map_err(|_| KzgError::InvalidInputLength)?;
        helpers::read_g1_point_from_bytes_be(bytes)
    }
}

impl ReadPointFromBytes for Affine<ark_bls12_381::g2::Config> {
    const POINT_SIZE: usize = BYTES_PER_G2_POINT;

    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<G2Affine, KzgError> {
        let bytes: &[u8; BYTES_PER_G2_POINT] = bytes
            .try_into()
            .map_err(|_| KzgError::InvalidInputLength)?;
        helpers::read_g2_point_from_bytes_be(bytes)
    }
}
