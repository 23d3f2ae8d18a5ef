//! Shared primitives for the PeerDAS (EIP-7594) KZG cell-proof pipeline.
//!
//! The main data pipeline goes:
//! > [blob::Blob] -> [polynomial::PolynomialEvalForm]/[polynomial::PolynomialCoeffForm]
//! > -> cells + KZG commitments / multi-point proofs
//!
//! - Blob: an opaque byte payload holding `FIELD_ELEMENTS_PER_BLOB` canonical
//!   BLS12-381 scalar field elements, interpreted as a polynomial in
//!   evaluation form (bit-reversed order, the EIP-4844 convention).
//! - Polynomial: field elements interpreted as evaluations or coefficients.
//!   Coefficient form carries the algebra (quotients, vanishing polynomials,
//!   interpolation) that the cell-proof and recovery paths are built on.
//! - Cell: one coset's worth of evaluations of the extended (Reed-Solomon
//!   doubled) polynomial, the smallest independently provable unit.
//!
//! Everything in this crate is pure CPU work over immutable inputs. The only
//! long-lived state is the [srs::SRS] (loaded once at startup) and the
//! [domain::Domain] tables (computed once per context); both are shared
//! read-only, so all entry points are safe to call concurrently.

pub mod blob;
pub mod consts;
pub mod domain;
pub mod errors;
mod fft;
pub mod helpers;
pub mod polynomial;
pub mod srs;
pub mod traits;
pub mod types;
