use ark_bls12_381::{Bls12_381, Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{BigInt, BigInteger, Field, PrimeField};
use ark_std::{vec::Vec, One, Zero};
use sha2::{Digest, Sha256};

use crate::consts::{
    BYTES_PER_CELL, BYTES_PER_FIELD_ELEMENT, BYTES_PER_G1_POINT, BYTES_PER_G2_POINT,
    FIELD_ELEMENTS_PER_CELL,
};
use crate::errors::KzgError;
use crate::types::Cell;

// Flag bits of the first byte of a compressed point encoding.
const COMPRESSION_FLAG: u8 = 0b1000_0000;
const INFINITY_FLAG: u8 = 0b0100_0000;
const Y_SORT_FLAG: u8 = 0b0010_0000;
const FLAG_MASK: u8 = COMPRESSION_FLAG | INFINITY_FLAG | Y_SORT_FLAG;

/// Decodes a canonical big-endian scalar field element. Fails on any
/// encoding whose integer is not below the field modulus.
pub fn fr_from_bytes_be(data: &[u8]) -> Result<Fr, KzgError> {
    if data.len() != BYTES_PER_FIELD_ELEMENT {
        return Err(KzgError::InvalidInputLength);
    }
    let mut limbs: [u64; 4] = Default::default();
    for (i, chunk) in data.chunks(8).enumerate() {
        limbs[i] = u64::from_be_bytes(chunk.try_into().expect("chunks of exactly 8 bytes"));
    }
    limbs.reverse();
    Fr::from_bigint(BigInt::new(limbs)).ok_or_else(|| {
        KzgError::InvalidFieldElement("field element is not below the modulus".to_string())
    })
}

/// Serializes a scalar field element in canonical big-endian form.
pub fn fr_to_bytes_be(element: &Fr) -> [u8; BYTES_PER_FIELD_ELEMENT] {
    let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
    out.copy_from_slice(&element.into_bigint().to_bytes_be());
    out
}

/// Decodes big-endian bytes into a scalar, reducing modulo the field order.
/// Only for data whose canonicity has already been established (or that is
/// allowed to wrap, like hash output).
pub fn set_bytes_canonical(data: &[u8]) -> Fr {
    Fr::from_be_bytes_mod_order(data)
}

/// Parses a byte string into field elements, 32 bytes at a time.
pub fn to_fr_array(data: &[u8]) -> Vec<Fr> {
    data.chunks(BYTES_PER_FIELD_ELEMENT)
        .map(set_bytes_canonical)
        .collect()
}

/// Serializes field elements into a contiguous big-endian byte string.
pub fn to_byte_array(elements: &[Fr]) -> Vec<u8> {
    let mut out = Vec::with_capacity(elements.len() * BYTES_PER_FIELD_ELEMENT);
    for element in elements {
        out.extend_from_slice(&fr_to_bytes_be(element));
    }
    out
}

/// Validates that every 32-byte chunk of `data` is a canonical field
/// element. The data length must be a multiple of the element size.
pub fn validate_bytes_as_canonical_field_elements(data: &[u8]) -> Result<(), KzgError> {
    if data.len() % BYTES_PER_FIELD_ELEMENT != 0 {
        return Err(KzgError::InvalidInputLength);
    }
    for (i, chunk) in data.chunks(BYTES_PER_FIELD_ELEMENT).enumerate() {
        fr_from_bytes_be(chunk).map_err(|_| {
            KzgError::InvalidFieldElement(format!("field element at position {i} is not canonical"))
        })?;
    }
    Ok(())
}

/// Splits a serialized cell into its coset evaluations, validating that each
/// element is canonical. This is the adversary-facing entry point for cell
/// bytes and must always validate.
pub fn cell_to_coset_evals(cell: &[u8; BYTES_PER_CELL]) -> Result<Vec<Fr>, KzgError> {
    let mut evals = Vec::with_capacity(FIELD_ELEMENTS_PER_CELL);
    for (i, chunk) in cell.chunks(BYTES_PER_FIELD_ELEMENT).enumerate() {
        let element = fr_from_bytes_be(chunk).map_err(|_| {
            KzgError::InvalidFieldElement(format!("cell element at position {i} is not canonical"))
        })?;
        evals.push(element);
    }
    Ok(evals)
}

/// Serializes coset evaluations into cell bytes.
pub fn coset_evals_to_cell(evals: &[Fr]) -> Result<Cell, KzgError> {
    if evals.len() != FIELD_ELEMENTS_PER_CELL {
        return Err(KzgError::InvalidInputLength);
    }
    let mut out = Box::new([0u8; BYTES_PER_CELL]);
    for (chunk, eval) in out.chunks_mut(BYTES_PER_FIELD_ELEMENT).zip(evals) {
        chunk.copy_from_slice(&fr_to_bytes_be(eval));
    }
    Ok(out)
}

fn fq_from_bytes_be(data: &[u8; 48]) -> Result<Fq, KzgError> {
    let mut limbs: [u64; 6] = Default::default();
    for (i, chunk) in data.chunks(8).enumerate() {
        limbs[i] = u64::from_be_bytes(chunk.try_into().expect("chunks of exactly 8 bytes"));
    }
    limbs.reverse();
    Fq::from_bigint(BigInt::new(limbs)).ok_or_else(|| {
        KzgError::SerializationError("coordinate is not below the base field modulus".to_string())
    })
}

fn fq_to_bytes_be(element: &Fq) -> [u8; 48] {
    let mut out = [0u8; 48];
    out.copy_from_slice(&element.into_bigint().to_bytes_be());
    out
}

/// Whether `z` is strictly greater than its negation, comparing canonical
/// integer representatives. This is the tie-break the compressed encoding
/// uses to pick between the two square roots of `y^2`.
pub fn lexicographically_largest(z: &Fq) -> bool {
    z.into_bigint() > Fq::MODULUS_MINUS_ONE_DIV_TWO
}

/// The same tie-break lifted to the quadratic extension: compare the `c1`
/// component first and fall back to `c0` when `c1` is its own negation.
pub fn lexicographically_largest_fq2(z: &Fq2) -> bool {
    if z.c1.is_zero() {
        lexicographically_largest(&z.c0)
    } else {
        lexicographically_largest(&z.c1)
    }
}

pub fn is_zeroed(first_byte: u8, rest: &[u8]) -> bool {
    first_byte == 0 && rest.iter().all(|byte| *byte == 0)
}

/// Decodes a 48-byte compressed G1 point (big-endian x coordinate, flag
/// bits in the top three bits of the first byte).
///
/// The point at infinity is legal here: the commitment and the opening
/// proof of the zero polynomial are both the identity. Off-curve points,
/// wrong-subgroup points and inconsistent flag bits are rejected.
pub fn read_g1_point_from_bytes_be(bytes: &[u8; BYTES_PER_G1_POINT]) -> Result<G1Affine, KzgError> {
    let flags = bytes[0] & FLAG_MASK;

    if flags & COMPRESSION_FLAG == 0 {
        return Err(KzgError::SerializationError(
            "G1 point is not in compressed form".to_string(),
        ));
    }
    if flags & INFINITY_FLAG != 0 {
        if flags & Y_SORT_FLAG != 0 || !is_zeroed(bytes[0] & !FLAG_MASK, &bytes[1..]) {
            return Err(KzgError::SerializationError(
                "G1 point at infinity is not canonically encoded".to_string(),
            ));
        }
        return Ok(G1Affine::zero());
    }

    let mut x_bytes = *bytes;
    x_bytes[0] &= !FLAG_MASK;
    let x = fq_from_bytes_be(&x_bytes)?;

    let y_squared = x * x * x + Fq::from(4u64);
    let mut y = y_squared
        .sqrt()
        .ok_or_else(|| KzgError::NotOnCurveError("G1 point is not on the curve".to_string()))?;
    if lexicographically_largest(&y) != (flags & Y_SORT_FLAG != 0) {
        y = -y;
    }

    let point = G1Affine::new_unchecked(x, y);
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point is not in the prime-order subgroup".to_string(),
        ));
    }
    Ok(point)
}

/// Serializes a G1 point into the 48-byte compressed encoding that
/// [read_g1_point_from_bytes_be] accepts.
pub fn g1_point_to_bytes_be(point: &G1Affine) -> [u8; BYTES_PER_G1_POINT] {
    if point.is_zero() {
        let mut out = [0u8; BYTES_PER_G1_POINT];
        out[0] = COMPRESSION_FLAG | INFINITY_FLAG;
        return out;
    }
    let mut out = fq_to_bytes_be(&point.x);
    out[0] |= COMPRESSION_FLAG;
    if lexicographically_largest(&point.y) {
        out[0] |= Y_SORT_FLAG;
    }
    out
}

/// Decodes a 96-byte compressed G2 point: `x.c1` with flag bits first, then
/// `x.c0`, both big-endian.
pub fn read_g2_point_from_bytes_be(bytes: &[u8; BYTES_PER_G2_POINT]) -> Result<G2Affine, KzgError> {
    let flags = bytes[0] & FLAG_MASK;

    if flags & COMPRESSION_FLAG == 0 {
        return Err(KzgError::SerializationError(
            "G2 point is not in compressed form".to_string(),
        ));
    }
    if flags & INFINITY_FLAG != 0 {
        if flags & Y_SORT_FLAG != 0 || !is_zeroed(bytes[0] & !FLAG_MASK, &bytes[1..]) {
            return Err(KzgError::SerializationError(
                "G2 point at infinity is not canonically encoded".to_string(),
            ));
        }
        return Ok(G2Affine::zero());
    }

    let mut c1_bytes = [0u8; 48];
    c1_bytes.copy_from_slice(&bytes[..48]);
    c1_bytes[0] &= !FLAG_MASK;
    let mut c0_bytes = [0u8; 48];
    c0_bytes.copy_from_slice(&bytes[48..]);

    let x = Fq2::new(fq_from_bytes_be(&c0_bytes)?, fq_from_bytes_be(&c1_bytes)?);

    // The twist curve is y^2 = x^3 + 4(u + 1).
    let b_twist = Fq2::new(Fq::from(4u64), Fq::from(4u64));
    let y_squared = x * x * x + b_twist;
    let mut y = y_squared
        .sqrt()
        .ok_or_else(|| KzgError::NotOnCurveError("G2 point is not on the curve".to_string()))?;
    if lexicographically_largest_fq2(&y) != (flags & Y_SORT_FLAG != 0) {
        y = -y;
    }

    let point = G2Affine::new_unchecked(x, y);
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point is not in the prime-order subgroup".to_string(),
        ));
    }
    Ok(point)
}

/// Computes the linear combination `scalars[0] * points[0] + ... +
/// scalars[n-1] * points[n-1]` with a multi-scalar multiplication.
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Affine, KzgError> {
    let lincomb =
        G1Projective::msm(points, scalars).map_err(|e| KzgError::MsmError(format!("{e:?}")))?;
    Ok(lincomb.into_affine())
}

/// The G2 counterpart of [g1_lincomb], used to commit to a coset's
/// vanishing polynomial.
pub fn g2_lincomb(points: &[G2Affine], scalars: &[Fr]) -> Result<G2Affine, KzgError> {
    let lincomb =
        G2Projective::msm(points, scalars).map_err(|e| KzgError::MsmError(format!("{e:?}")))?;
    Ok(lincomb.into_affine())
}

/// Checks `e(a1, a2) == e(b1, b2)` with a single product of two pairings.
pub fn pairings_verify(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    let neg_b1 = -b1;
    let p = [a1, neg_b1];
    let q = [a2, b2];
    Bls12_381::multi_pairing(p, q).is_zero()
}

/// Computes `[1, base, base^2, ..., base^(count-1)]`.
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

/// Maps a byte string to a field element via Sha256, reducing the digest
/// modulo the field order.
pub fn hash_to_field_element(msg: &[u8]) -> Fr {
    let digest = Sha256::digest(msg);
    Fr::from_be_bytes_mod_order(digest.as_slice())
}

/// Converts a usize to a big-endian byte array, always 8 bytes.
pub fn usize_to_be_bytes(number: usize) -> [u8; 8] {
    (number as u64).to_be_bytes()
}
