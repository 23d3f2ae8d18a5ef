/// Number of bytes in the big-endian encoding of a scalar field element.
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

/// Number of field elements in a blob.
///
/// Ref: https://github.com/ethereum/EIPs/blob/master/EIPS/eip-4844.md
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

/// Number of field elements in an extended blob, after the 2x Reed-Solomon
/// extension onto the doubled evaluation domain.
pub const FIELD_ELEMENTS_PER_EXT_BLOB: usize = 2 * FIELD_ELEMENTS_PER_BLOB;

/// Number of field elements in a single cell, i.e. the size of the coset each
/// opening proof covers.
pub const FIELD_ELEMENTS_PER_CELL: usize = 64;

/// Number of cells in an extended blob.
pub const CELLS_PER_EXT_BLOB: usize = FIELD_ELEMENTS_PER_EXT_BLOB / FIELD_ELEMENTS_PER_CELL;

/// Number of bytes in a blob.
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

/// Number of bytes in the serialized form of a cell.
pub const BYTES_PER_CELL: usize = FIELD_ELEMENTS_PER_CELL * BYTES_PER_FIELD_ELEMENT;

/// Number of bytes in a compressed G1 point.
pub const BYTES_PER_G1_POINT: usize = 48;

/// Number of bytes in a compressed G2 point.
pub const BYTES_PER_G2_POINT: usize = 96;

/// Number of bytes in a KZG commitment (a compressed G1 point).
pub const BYTES_PER_COMMITMENT: usize = BYTES_PER_G1_POINT;

/// Number of bytes in a KZG proof (a compressed G1 point).
pub const BYTES_PER_PROOF: usize = BYTES_PER_G1_POINT;

/// Generator of the multiplicative group of the scalar field, used as the
/// coset shift factor during erasure recovery. Shifting the evaluation
/// domain by this factor moves the zeros of a vanishing polynomial off the
/// roots-of-unity subgroup, so no pointwise division ever hits a zero
/// denominator.
pub const PRIMITIVE_ROOT_OF_UNITY: u64 = 7;

/// Domain separator for the Fiat-Shamir challenge of the batched cell-proof
/// verifier.
///
/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/_features/eip7594/polynomial-commitments-sampling.md
pub const RANDOM_CHALLENGE_KZG_CELL_BATCH_DOMAIN: &[u8] = b"RCKZGCBATCH__V1_";

/// Number of gossip subnets data column sidecars are distributed over.
pub const DATA_COLUMN_SIDECAR_SUBNET_COUNT: u64 = 32;

/// Depth of the Merkle branch proving inclusion of the KZG commitments in
/// the beacon block body. The branch is carried opaquely; checking it is the
/// caller's job.
pub const KZG_COMMITMENTS_INCLUSION_PROOF_DEPTH: usize = 4;
