//! Iterative radix-2 FFT over the scalar field.
//!
//! The transform is the classic decimation-in-time Cooley-Tukey butterfly
//! against a caller-supplied table of roots of unity. Keeping the table
//! explicit (instead of hiding it behind an evaluation domain object) is what
//! lets the recovery path run forward and inverse transforms of the same
//! data against the shared, precomputed tables in [crate::domain::Domain].

use ark_bls12_381::Fr;
use ark_std::vec::Vec;

use crate::errors::PolynomialError;

/// Reverses the lowest `bits` bits of `index`.
pub(crate) fn reverse_bits(index: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}

/// Computes the discrete Fourier transform of `values` against `roots`, the
/// table `[1, w, w^2, ..., w^(n-1)]` for a primitive n-th root of unity `w`.
///
/// Output index `i` holds the evaluation at `roots[i]`. Passing the table in
/// reversed order (`1, w^(n-1), ..., w`) and scaling the output by `1/n`
/// yields the inverse transform; [crate::domain::Domain::ifft] does exactly
/// that.
pub(crate) fn fft(values: &[Fr], roots: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
    let n = values.len();
    if n != roots.len() {
        return Err(PolynomialError::FFTError(format!(
            "values length {} does not match roots table length {}",
            n,
            roots.len()
        )));
    }
    if !n.is_power_of_two() {
        return Err(PolynomialError::NotPowerOfTwo(n));
    }
    if n == 1 {
        return Ok(values.to_vec());
    }

    let log_n = n.trailing_zeros();
    let mut out = values.to_vec();

    // Reorder the inputs into bit-reversed positions so every butterfly pass
    // can work on adjacent blocks.
    for i in 0..n {
        let j = reverse_bits(i, log_n);
        if i < j {
            out.swap(i, j);
        }
    }

    // Butterfly passes: blocks of `len` combine two half-blocks using the
    // twiddle factors w^(k * n/len), read at a stride from the shared table.
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let stride = n / len;
        for start in (0..n).step_by(len) {
            for k in 0..half {
                let t = roots[k * stride] * out[start + half + k];
                let u = out[start + k];
                out[start + k] = u + t;
                out[start + half + k] = u - t;
            }
        }
        len <<= 1;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::FftField;

    fn roots_table(n: usize) -> Vec<Fr> {
        let root = Fr::get_root_of_unity(n as u64).unwrap();
        let mut table = Vec::with_capacity(n);
        let mut cur = Fr::one();
        for _ in 0..n {
            table.push(cur);
            cur *= root;
        }
        table
    }

    use ark_std::{One, UniformRand};

    #[test]
    fn matches_naive_evaluation() {
        let mut rng = ark_std::test_rng();
        for n in [1usize, 2, 4, 8, 32] {
            let roots = roots_table(n);
            let coeffs: Vec<Fr> = (0..n).map(|_| Fr::rand(&mut rng)).collect();
            let evals = fft(&coeffs, &roots).unwrap();
            for (i, root) in roots.iter().enumerate() {
                let naive = coeffs
                    .iter()
                    .rev()
                    .fold(Fr::from(0u64), |acc, c| acc * root + c);
                assert_eq!(evals[i], naive, "mismatch at index {i} for size {n}");
            }
        }
    }

    #[test]
    fn rejects_mismatched_table() {
        let roots = roots_table(8);
        let vals = vec![Fr::one(); 4];
        assert!(matches!(
            fft(&vals, &roots),
            Err(PolynomialError::FFTError(_))
        ));
    }

    #[test]
    fn rejects_non_power_of_two() {
        let vals = vec![Fr::one(); 3];
        let roots = vec![Fr::one(); 3];
        assert!(matches!(
            fft(&vals, &roots),
            Err(PolynomialError::NotPowerOfTwo(3))
        ));
    }
}
