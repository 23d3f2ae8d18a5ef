//! ## Library Design / Architecture
//!
//! The purpose of this library is the cryptographic core of PeerDAS
//! (EIP-7594): turning a blob into a Reed-Solomon extended set of *cells*,
//! each carried by a KZG multi-point opening proof, verifying cells one at a
//! time or in batches, and rebuilding the whole extended blob from any half
//! of its cells.
//!
//! ### Data Types
//!
//! The main data pipeline goes:
//! > blob bytes -> [Blob] -> polynomial (evaluation/coefficient form) ->
//! > cells + KZG commitment / proofs
//!
//! - [Blob]: `BYTES_PER_BLOB` opaque bytes, `FIELD_ELEMENTS_PER_BLOB`
//!   canonical field elements in bit-reversed evaluation order.
//! - Cell: one coset's worth of evaluations of the extended polynomial,
//!   serialized to `BYTES_PER_CELL` bytes.
//! - Commitments and proofs: 48 byte compressed G1 points.
//!
//! ### Contexts
//!
//! The interesting work happens in three context structs, each constructed
//! once and shared read-only:
//!
//! - [KZG] (prover): blob commitment, cell computation, cell proofs.
//! - [Verifier]: single-cell checks and the batched, randomly-combined
//!   check the gossip layer runs per data column sidecar.
//! - [Recovery]: erasure recovery of all cells from any half.
//!
//! The trusted setup is loaded once into an [SRS] and passed explicitly
//! into every entry point that touches curve points; nothing is process
//! global, so multiple setups can coexist in one process.
//!
//! ### Example
//!
//! ```no_run
//! use rust_peerdas_kzg::{Blob, KZG, SRS, Verifier};
//!
//! let srs = SRS::from_files("g1.points", "g2.points").unwrap();
//! let prover = KZG::new().unwrap();
//! let verifier = Verifier::new().unwrap();
//!
//! let blob = Blob::from_raw_data(b"some rollup data").unwrap();
//! let commitment = prover.blob_to_kzg_commitment(&blob, &srs).unwrap();
//! let (cells, proofs) = prover.compute_cells_and_kzg_proofs(&blob, &srs).unwrap();
//!
//! let ok = verifier
//!     .verify_cell_kzg_proof(&commitment, 0, &cells[0], &proofs[0], &srs)
//!     .unwrap();
//! assert!(ok);
//! ```

pub mod das;

pub use rust_peerdas_kzg_primitives::{
    blob::Blob,
    consts,
    domain,
    errors::{KzgError, PolynomialError},
    helpers, polynomial,
    srs::SRS,
    types::{Cell, CellIndex, CellRef, KzgCommitment, KzgProof, RowIndex},
};
pub use rust_peerdas_kzg_prover::kzg::KZG;
pub use rust_peerdas_kzg_recovery::Recovery;
pub use rust_peerdas_kzg_verifier::{verify::verify_kzg_proof_multi, Verifier};
