use crate::consts::{BYTES_PER_CELL, BYTES_PER_COMMITMENT, BYTES_PER_PROOF};

/// A serialized cell: one coset's worth of field element evaluations in
/// canonical big-endian form.
///
/// Cells are heap allocated; the library takes references in and hands
/// owned instances back.
pub type Cell = Box<[u8; BYTES_PER_CELL]>;

/// A reference to a serialized cell.
pub type CellRef<'a> = &'a [u8; BYTES_PER_CELL];

/// A 48 byte compressed G1 point committing to a blob's polynomial.
pub type KzgCommitment = [u8; BYTES_PER_COMMITMENT];

/// A 48 byte compressed G1 point committing to the quotient polynomial of a
/// multi-point opening.
pub type KzgProof = [u8; BYTES_PER_PROOF];

/// Index of a cell (equivalently, of its coset) within the extended blob.
pub type CellIndex = u64;

/// Index of a row commitment within a batch verification.
pub type RowIndex = u64;
