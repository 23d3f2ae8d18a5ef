use serde::{Deserialize, Serialize};

use crate::consts::{BYTES_PER_BLOB, BYTES_PER_FIELD_ELEMENT, FIELD_ELEMENTS_PER_BLOB};
use crate::errors::KzgError;
use crate::helpers;
use crate::polynomial::PolynomialEvalForm;

/// A blob: `BYTES_PER_BLOB` bytes holding `FIELD_ELEMENTS_PER_BLOB`
/// canonical field elements in big-endian form, interpreted as a polynomial
/// in evaluation form over the blob domain (bit-reversed order).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    blob_data: Vec<u8>,
}

impl Blob {
    /// Creates a new `Blob` from bytes that already follow the blob layout.
    ///
    /// Validates the exact length and that every 32-byte chunk is a
    /// canonical field element (i.e. below the field modulus).
    pub fn new(blob_data: &[u8]) -> Result<Self, KzgError> {
        if blob_data.len() != BYTES_PER_BLOB {
            return Err(KzgError::InvalidInputLength);
        }
        helpers::validate_bytes_as_canonical_field_elements(blob_data)?;
        Ok(Blob {
            blob_data: blob_data.to_vec(),
        })
    }

    /// Builds a blob from arbitrary user bytes by prepending a zero byte to
    /// every 31-byte chunk, which keeps each 32-byte group below the field
    /// modulus, and zero-filling up to the full blob size. Fails when the
    /// padded data would not fit a blob.
    pub fn from_raw_data(raw_data: &[u8]) -> Result<Self, KzgError> {
        let bytes_per_chunk = BYTES_PER_FIELD_ELEMENT - 1;
        let chunk_count = raw_data.len().div_ceil(bytes_per_chunk);
        if chunk_count > FIELD_ELEMENTS_PER_BLOB {
            return Err(KzgError::InvalidInputLength);
        }

        let mut blob_data = vec![0u8; BYTES_PER_BLOB];
        for chunk_index in 0..chunk_count {
            let input_start = chunk_index * bytes_per_chunk;
            let input_end = usize::min(input_start + bytes_per_chunk, raw_data.len());
            let output_start = chunk_index * BYTES_PER_FIELD_ELEMENT + 1;
            blob_data[output_start..output_start + (input_end - input_start)]
                .copy_from_slice(&raw_data[input_start..input_end]);
        }

        Ok(Blob { blob_data })
    }

    /// Returns the blob bytes.
    pub fn data(&self) -> &[u8] {
        &self.blob_data
    }

    pub fn len(&self) -> usize {
        self.blob_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blob_data.is_empty()
    }

    /// Parses the blob into its polynomial in evaluation form. The
    /// canonicity of every element was established on construction.
    pub fn to_polynomial_eval_form(&self) -> PolynomialEvalForm {
        PolynomialEvalForm::from_evaluations_unchecked(helpers::to_fr_array(&self.blob_data))
    }
}
