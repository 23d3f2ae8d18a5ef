//! Data column sidecar helpers.
//!
//! A data column sidecar carries one column of the cell matrix: the cell at
//! the same column index out of every blob in a block, with the matching
//! commitments and proofs. SSZ encoding, the signed header signature and
//! the commitment inclusion proof are the network layer's business; this
//! module consumes already-parsed structures and supplies the two pure
//! pieces gossip validation needs from the cryptographic core: the subnet
//! mapping and the batched proof check.

use serde::{Deserialize, Serialize};

use rust_peerdas_kzg_primitives::{
    consts::{DATA_COLUMN_SIDECAR_SUBNET_COUNT, KZG_COMMITMENTS_INCLUSION_PROOF_DEPTH},
    errors::KzgError,
    srs::SRS,
    types::{Cell, KzgCommitment, KzgProof},
};
use rust_peerdas_kzg_verifier::Verifier;

/// Uniquely identifies a data column within a block.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataColumnIdentifier {
    pub block_root: [u8; 32],
    pub index: u64,
}

/// One column of a block's extended blob matrix, as gossiped on the column
/// subnets.
///
/// `column[i]`, `kzg_commitments[i]` and `kzg_proofs[i]` all refer to the
/// block's `i`-th blob. The signed block header is carried opaquely; the
/// inclusion proof branch is carried for the caller's Merkle check. The
/// wire encoding of the whole sidecar is SSZ and lives with the network
/// layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataColumnSidecar {
    pub index: u64,
    pub column: Vec<Cell>,
    pub kzg_commitments: Vec<KzgCommitment>,
    pub kzg_proofs: Vec<KzgProof>,
    pub signed_block_header: Vec<u8>,
    pub kzg_commitments_inclusion_proof: [[u8; 32]; KZG_COMMITMENTS_INCLUSION_PROOF_DEPTH],
}

/// The subnet a data column sidecar is gossiped on.
pub fn compute_subnet_for_data_column_sidecar(column_index: u64) -> u64 {
    column_index % DATA_COLUMN_SIDECAR_SUBNET_COUNT
}

/// The cryptographic half of gossip validation: checks every cell of the
/// sidecar's column against its blob's commitment, in one batched pairing
/// check.
///
/// Row `i` of the batch is `(commitment[i], column_index, column[i],
/// proof[i])`. Mismatched column/commitment/proof counts are an error;
/// a column that fails cryptographically returns `Ok(false)`.
pub fn verify_data_column_sidecar_kzg_proofs(
    verifier: &Verifier,
    sidecar: &DataColumnSidecar,
    srs: &SRS,
) -> Result<bool, KzgError> {
    let n = sidecar.column.len();
    if sidecar.kzg_commitments.len() != n || sidecar.kzg_proofs.len() != n {
        return Err(KzgError::LengthMismatch(format!(
            "column of {} cells with {} commitments and {} proofs",
            n,
            sidecar.kzg_commitments.len(),
            sidecar.kzg_proofs.len()
        )));
    }

    let row_indices: Vec<u64> = (0..n as u64).collect();
    let column_indices = vec![sidecar.index; n];
    let cell_refs: Vec<_> = sidecar.column.iter().map(|cell| &**cell).collect();

    verifier.verify_cell_kzg_proof_batch(
        &sidecar.kzg_commitments,
        &row_indices,
        &column_indices,
        &cell_refs,
        &sidecar.kzg_proofs,
        srs,
    )
}
