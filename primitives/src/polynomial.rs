use ark_bls12_381::Fr;
use ark_ff::Field;
use ark_std::{vec, vec::Vec, One, Zero};

use crate::consts::{FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_EXT_BLOB};
use crate::domain::{bit_reversal_permutation, Domain};
use crate::errors::PolynomialError;

/// A blob's polynomial in evaluation form: `FIELD_ELEMENTS_PER_BLOB`
/// evaluations over the blob-sized domain, stored in bit-reversed order
/// (the EIP-4844 convention, which makes a cell a contiguous slice).
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialEvalForm {
    evaluations: Vec<Fr>,
}

impl PolynomialEvalForm {
    /// Wraps evaluations that are already in bit-reversed order. The count
    /// must be exactly the blob width.
    pub fn new(evaluations: Vec<Fr>) -> Result<Self, PolynomialError> {
        if evaluations.len() != FIELD_ELEMENTS_PER_BLOB {
            return Err(PolynomialError::FFTError(format!(
                "evaluation form requires {} evaluations, got {}",
                FIELD_ELEMENTS_PER_BLOB,
                evaluations.len()
            )));
        }
        Ok(Self { evaluations })
    }

    pub(crate) fn from_evaluations_unchecked(evaluations: Vec<Fr>) -> Self {
        Self { evaluations }
    }

    pub fn evaluations(&self) -> &[Fr] {
        &self.evaluations
    }

    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    /// Converts to coefficient form: undo the bit-reversal to get the
    /// natural domain order, then run an inverse FFT over the blob domain.
    pub fn to_coeff_form(&self, blob_domain: &Domain) -> Result<PolynomialCoeffForm, PolynomialError> {
        let natural_order = bit_reversal_permutation(&self.evaluations)?;
        let coeffs = blob_domain.ifft(&natural_order)?;
        Ok(PolynomialCoeffForm { coeffs })
    }
}

/// A polynomial in coefficient form. Index 0 is the constant term; trailing
/// zero coefficients are permitted and preserved.
///
/// The length is capped at `FIELD_ELEMENTS_PER_EXT_BLOB`. The cap is not
/// cosmetic: recovery multiplies a degree `< FIELD_ELEMENTS_PER_BLOB`
/// polynomial by a vanishing polynomial of degree up to
/// `FIELD_ELEMENTS_PER_BLOB` and the product must still fit one extended
/// FFT.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialCoeffForm {
    coeffs: Vec<Fr>,
}

impl PolynomialCoeffForm {
    pub fn new(coeffs: Vec<Fr>) -> Result<Self, PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::EmptyPolynomial);
        }
        if coeffs.len() > FIELD_ELEMENTS_PER_EXT_BLOB {
            return Err(PolynomialError::DegreeOverflow { len: coeffs.len() });
        }
        Ok(Self { coeffs })
    }

    pub fn coeffs(&self) -> &[Fr] {
        &self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficient-wise sum. The result has the length of the longer input.
    pub fn add(&self, other: &Self) -> Self {
        let (longer, shorter) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut coeffs = longer.coeffs.clone();
        for (out, rhs) in coeffs.iter_mut().zip(&shorter.coeffs) {
            *out += rhs;
        }
        Self { coeffs }
    }

    /// Coefficient-wise negation.
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -*c).collect(),
        }
    }

    /// Convolution product. Fails with `DegreeOverflow` when the combined
    /// length would exceed the extended blob capacity.
    pub fn mul(&self, other: &Self) -> Result<Self, PolynomialError> {
        let combined = self.len() + other.len();
        if combined > FIELD_ELEMENTS_PER_EXT_BLOB {
            return Err(PolynomialError::DegreeOverflow { len: combined });
        }
        let mut coeffs = vec![Fr::zero(); combined - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += *a * b;
            }
        }
        Ok(Self { coeffs })
    }

    /// Long division, returning the quotient and discarding the remainder.
    ///
    /// Callers only divide when the division is exact (the remainder, when
    /// one exists conceptually, has already been subtracted out), which the
    /// debug assertion below checks. Fails with `DivisionByZero` when the
    /// divisor's leading coefficient is zero.
    pub fn div(&self, divisor: &Self) -> Result<Self, PolynomialError> {
        let b = &divisor.coeffs;
        let lead = match b.last() {
            Some(lead) if !lead.is_zero() => lead,
            _ => return Err(PolynomialError::DivisionByZero),
        };

        if self.len() < b.len() {
            return Ok(Self {
                coeffs: vec![Fr::zero()],
            });
        }

        let lead_inv = lead.inverse().ok_or(PolynomialError::DivisionByZero)?;
        let mut rem = self.coeffs.clone();
        let mut quotient = vec![Fr::zero(); self.len() - b.len() + 1];

        for i in (0..quotient.len()).rev() {
            let factor = rem[i + b.len() - 1] * lead_inv;
            if factor.is_zero() {
                continue;
            }
            quotient[i] = factor;
            for (j, b_j) in b.iter().enumerate() {
                rem[i + j] -= factor * b_j;
            }
        }

        debug_assert!(
            rem[..b.len() - 1].iter().all(Fr::is_zero),
            "polynomial division left a nonzero remainder"
        );

        Ok(Self { coeffs: quotient })
    }

    /// Rescales the evaluation domain: returns `g` with `g(x) = p(k * x)`,
    /// i.e. coefficient `i` scaled by `k^i`. Fails when `k` is zero.
    pub fn shift(&self, factor: &Fr) -> Result<Self, PolynomialError> {
        if factor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        let mut power = Fr::one();
        let coeffs = self
            .coeffs
            .iter()
            .map(|c| {
                let scaled = *c * power;
                power *= factor;
                scaled
            })
            .collect();
        Ok(Self { coeffs })
    }

    /// Horner evaluation at `z`.
    pub fn evaluate(&self, z: &Fr) -> Fr {
        self.coeffs
            .iter()
            .rev()
            .fold(Fr::zero(), |acc, coeff| acc * z + coeff)
    }
}

/// The monic polynomial whose roots are exactly `points`:
/// `(x - points[0]) * ... * (x - points[n-1])`, length `n + 1`.
pub fn vanishing_poly(points: &[Fr]) -> Result<PolynomialCoeffForm, PolynomialError> {
    if points.len() + 1 > FIELD_ELEMENTS_PER_EXT_BLOB {
        return Err(PolynomialError::DegreeOverflow {
            len: points.len() + 1,
        });
    }
    let mut coeffs = vec![Fr::one()];
    for point in points {
        // Multiply the accumulator by (x - point) in place.
        coeffs.push(Fr::zero());
        for k in (1..coeffs.len()).rev() {
            let scaled = *point * coeffs[k];
            coeffs[k] = coeffs[k - 1] - scaled;
        }
        coeffs[0] *= -*point;
    }
    Ok(PolynomialCoeffForm { coeffs })
}

/// Lagrange interpolation through `(xs[i], ys[i])`.
///
/// The points must be pairwise distinct. The result has `xs.len()`
/// coefficients; the leading one may be zero.
///
/// Built from the vanishing polynomial: for each point the basis numerator
/// `Z(x) / (x - xs[i])` comes out of one synthetic division, and its value at
/// `xs[i]` is the barycentric denominator.
pub fn interpolate(xs: &[Fr], ys: &[Fr]) -> Result<PolynomialCoeffForm, PolynomialError> {
    if xs.len() != ys.len() {
        return Err(PolynomialError::PointCountMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(PolynomialError::EmptyPolynomial);
    }

    let vanishing = vanishing_poly(xs)?;
    let mut coeffs = vec![Fr::zero(); xs.len()];

    for (x_i, y_i) in xs.iter().zip(ys) {
        let basis = divide_out_linear_factor(vanishing.coeffs(), x_i);
        let denominator = horner(&basis, x_i);
        let weight = *y_i
            * denominator
                .inverse()
                .ok_or(PolynomialError::DuplicateEvaluationPoint)?;
        for (out, basis_coeff) in coeffs.iter_mut().zip(&basis) {
            *out += weight * basis_coeff;
        }
    }

    Ok(PolynomialCoeffForm { coeffs })
}

/// Synthetic division of a monic polynomial by `(x - root)`; the division is
/// exact when `root` is a root of the polynomial.
fn divide_out_linear_factor(coeffs: &[Fr], root: &Fr) -> Vec<Fr> {
    let n = coeffs.len() - 1;
    let mut quotient = vec![Fr::zero(); n];
    quotient[n - 1] = coeffs[n];
    for k in (0..n - 1).rev() {
        quotient[k] = coeffs[k + 1] + *root * quotient[k + 1];
    }
    quotient
}

fn horner(coeffs: &[Fr], z: &Fr) -> Fr {
    coeffs
        .iter()
        .rev()
        .fold(Fr::zero(), |acc, coeff| acc * z + coeff)
}
