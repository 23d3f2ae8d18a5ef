//! Evaluation domains: roots-of-unity tables and the bit-reversal
//! permutation.
//!
//! Three domain sizes are in play: the cell count, the blob size, and the
//! extended blob size. Each context struct builds its [Domain]s once at
//! construction and shares them read-only afterwards.

use ark_bls12_381::Fr;
use ark_ff::{FftField, Field};
use ark_std::{vec::Vec, One};

use crate::consts::{CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_CELL};
use crate::errors::{KzgError, PolynomialError};
use crate::fft;

/// Largest power of two for which the scalar field has roots of unity.
const MAX_TWO_ADICITY: u32 = 32;

/// A power-of-two evaluation domain over the scalar field.
///
/// Holds the roots of unity `1, w, w^2, ..., w^(n-1)` in natural order, the
/// reversed table used by inverse transforms, and the bit-reversed table
/// that defines the cell cosets.
#[derive(Debug, Clone)]
pub struct Domain {
    size: usize,
    roots: Vec<Fr>,
    inv_roots: Vec<Fr>,
    roots_brp: Vec<Fr>,
    inv_size: Fr,
}

impl Domain {
    /// Builds the domain of the given power-of-two size.
    ///
    /// The generator is the canonical one: arkworks derives it from the
    /// field generator 7, the same primitive root the EIP-4844 domain is
    /// defined with, so `roots()[i]` agrees with the consensus-layer
    /// `compute_roots_of_unity`.
    pub fn new(size: usize) -> Result<Self, KzgError> {
        if !size.is_power_of_two() {
            return Err(PolynomialError::NotPowerOfTwo(size).into());
        }
        if size.trailing_zeros() > MAX_TWO_ADICITY {
            return Err(KzgError::GenericError(format!(
                "domain size {size} exceeds the two-adicity of the scalar field"
            )));
        }

        let root = Fr::get_root_of_unity(size as u64).ok_or_else(|| {
            KzgError::GenericError(format!("no root of unity for domain size {size}"))
        })?;
        let roots = expand_root_of_unity(&root, size)?;

        // Inverse transforms walk the table backwards: 1, w^(n-1), ..., w.
        let mut inv_roots = Vec::with_capacity(size);
        inv_roots.push(roots[0]);
        inv_roots.extend(roots[1..].iter().rev());

        let roots_brp = bit_reversal_permutation(&roots)?;

        let inv_size = Fr::from(size as u64)
            .inverse()
            .ok_or(PolynomialError::DivisionByZero)?;

        Ok(Self {
            size,
            roots,
            inv_roots,
            roots_brp,
            inv_size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The roots of unity in natural order.
    pub fn roots(&self) -> &[Fr] {
        &self.roots
    }

    /// The roots of unity in bit-reversed order.
    pub fn roots_brp(&self) -> &[Fr] {
        &self.roots_brp
    }

    /// Forward FFT: coefficients to evaluations on this domain.
    pub fn fft(&self, values: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
        fft::fft(values, &self.roots)
    }

    /// Inverse FFT: evaluations on this domain back to coefficients.
    pub fn ifft(&self, values: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
        let mut out = fft::fft(values, &self.inv_roots)?;
        for value in &mut out {
            *value *= self.inv_size;
        }
        Ok(out)
    }

    /// The evaluation points of the cell at `cell_index`: the bit-reversed
    /// slice `[cell_index * W, (cell_index + 1) * W)` of this domain, with
    /// `W = FIELD_ELEMENTS_PER_CELL`.
    ///
    /// Only meaningful on the extended domain. The `CELLS_PER_EXT_BLOB`
    /// slices partition the domain, and each is a multiplicative coset
    /// `h * <w^CELLS_PER_EXT_BLOB>` whose shift `h` is the slice's first
    /// element.
    pub fn coset_for_cell(&self, cell_index: u64) -> Result<&[Fr], KzgError> {
        let bound = (self.size / FIELD_ELEMENTS_PER_CELL) as u64;
        if cell_index >= bound {
            return Err(KzgError::IndexOutOfRange {
                index: cell_index,
                bound,
            });
        }
        let start = cell_index as usize * FIELD_ELEMENTS_PER_CELL;
        Ok(&self.roots_brp[start..start + FIELD_ELEMENTS_PER_CELL])
    }

    /// `h^W` for the coset shift `h` of the cell at `cell_index`. All `W`
    /// points of the coset share this power, which is why the coset's
    /// vanishing polynomial has the closed form `x^W - h^W`.
    pub fn coset_shift_pow(&self, cell_index: u64) -> Result<Fr, KzgError> {
        let coset = self.coset_for_cell(cell_index)?;
        Ok(coset[0].pow([FIELD_ELEMENTS_PER_CELL as u64]))
    }
}

/// Expands a primitive root of unity into the full table `1, w, ..., w^(n-1)`.
fn expand_root_of_unity(root: &Fr, size: usize) -> Result<Vec<Fr>, KzgError> {
    let mut roots = Vec::with_capacity(size);
    let mut current = Fr::one();
    for _ in 0..size {
        roots.push(current);
        current *= root;
    }
    // The element must cycle back to one exactly now, or the root was not
    // primitive for this order.
    if !current.is_one() || (size > 1 && roots[size / 2].is_one()) {
        return Err(KzgError::InternalInvariantViolation(format!(
            "root of unity is not primitive for order {size}"
        )));
    }
    Ok(roots)
}

/// Reorders a power-of-two-length sequence so that the element at index `i`
/// moves to the index given by reversing the `log2(n)` bits of `i`.
///
/// The permutation is an involution: applying it twice is the identity.
pub fn bit_reversal_permutation<T: Clone>(values: &[T]) -> Result<Vec<T>, PolynomialError> {
    let n = values.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(PolynomialError::NotPowerOfTwo(n));
    }
    let log_n = n.trailing_zeros();
    let mut out = values.to_vec();
    for i in 0..n {
        let j = fft::reverse_bits(i, log_n);
        if i < j {
            out.swap(i, j);
        }
    }
    Ok(out)
}

/// Checks that a value can index a cell of the extended blob.
pub fn validate_cell_index(cell_index: u64) -> Result<(), KzgError> {
    if cell_index >= CELLS_PER_EXT_BLOB as u64 {
        return Err(KzgError::IndexOutOfRange {
            index: cell_index,
            bound: CELLS_PER_EXT_BLOB as u64,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIELD_ELEMENTS_PER_EXT_BLOB;
    use ark_std::collections::BTreeSet;
    use ark_std::UniformRand;

    #[test]
    fn brp_is_an_involution() {
        let values: Vec<u32> = (0..64).collect();
        let once = bit_reversal_permutation(&values).unwrap();
        let twice = bit_reversal_permutation(&once).unwrap();
        assert_ne!(values, once);
        assert_eq!(values, twice);
    }

    #[test]
    fn brp_rejects_non_power_of_two() {
        assert!(matches!(
            bit_reversal_permutation(&[1u8, 2, 3]),
            Err(PolynomialError::NotPowerOfTwo(3))
        ));
        assert!(matches!(
            bit_reversal_permutation::<u8>(&[]),
            Err(PolynomialError::NotPowerOfTwo(0))
        ));
    }

    #[test]
    fn fft_round_trips() {
        let mut rng = ark_std::test_rng();
        let domain = Domain::new(256).unwrap();
        let values: Vec<Fr> = (0..256).map(|_| Fr::rand(&mut rng)).collect();
        let transformed = domain.fft(&values).unwrap();
        let back = domain.ifft(&transformed).unwrap();
        assert_eq!(values, back);
    }

    #[test]
    fn matches_ark_poly_domain() {
        use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};

        let mut rng = ark_std::test_rng();
        let n = 512;
        let domain = Domain::new(n).unwrap();
        let reference = GeneralEvaluationDomain::<Fr>::new(n).unwrap();

        for (i, root) in domain.roots().iter().enumerate().take(16) {
            assert_eq!(*root, reference.element(i));
        }

        let coeffs: Vec<Fr> = (0..n).map(|_| Fr::rand(&mut rng)).collect();
        assert_eq!(domain.fft(&coeffs).unwrap(), reference.fft(&coeffs));
        assert_eq!(domain.ifft(&coeffs).unwrap(), reference.ifft(&coeffs));
    }

    #[test]
    fn cosets_partition_the_extended_domain() {
        let ext = Domain::new(FIELD_ELEMENTS_PER_EXT_BLOB).unwrap();
        let mut seen = BTreeSet::new();
        for cell_index in 0..CELLS_PER_EXT_BLOB as u64 {
            let coset = ext.coset_for_cell(cell_index).unwrap();
            assert_eq!(coset.len(), FIELD_ELEMENTS_PER_CELL);
            for point in coset {
                assert!(seen.insert(point.to_string()), "coset points overlap");
            }
        }
        assert_eq!(seen.len(), FIELD_ELEMENTS_PER_EXT_BLOB);
    }

    #[test]
    fn coset_shift_pow_is_shared_by_the_whole_coset() {
        let ext = Domain::new(FIELD_ELEMENTS_PER_EXT_BLOB).unwrap();
        for cell_index in [0u64, 1, 63, 127] {
            let coset = ext.coset_for_cell(cell_index).unwrap();
            let shift_pow = ext.coset_shift_pow(cell_index).unwrap();
            for point in coset {
                assert_eq!(point.pow([FIELD_ELEMENTS_PER_CELL as u64]), shift_pow);
            }
        }
    }

    #[test]
    fn coset_index_out_of_range() {
        let ext = Domain::new(FIELD_ELEMENTS_PER_EXT_BLOB).unwrap();
        assert!(matches!(
            ext.coset_for_cell(CELLS_PER_EXT_BLOB as u64),
            Err(KzgError::IndexOutOfRange { .. })
        ));
    }
}
