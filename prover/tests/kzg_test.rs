#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rust_peerdas_kzg_primitives::{
        blob::Blob,
        consts::{BYTES_PER_BLOB, CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_BLOB},
        domain::Domain,
        helpers,
        srs::SRS,
        types::{Cell, KzgProof},
    };
    use rust_peerdas_kzg_prover::kzg::KZG;

    lazy_static! {
        static ref SRS_INSTANCE: SRS =
            SRS::insecure_random_setup(&mut StdRng::seed_from_u64(1234));
        static ref KZG_INSTANCE: KZG = KZG::new().unwrap();
        static ref TEST_BLOB: Blob = {
            let mut rng = StdRng::seed_from_u64(0xb10b);
            let raw: Vec<u8> = (0..100_000).map(|_| rng.gen()).collect();
            Blob::from_raw_data(&raw).unwrap()
        };
        static ref CELLS_AND_PROOFS: (Vec<Cell>, Vec<KzgProof>) = KZG_INSTANCE
            .compute_cells_and_kzg_proofs(&TEST_BLOB, &SRS_INSTANCE)
            .unwrap();
    }

    #[test]
    fn test_counts() {
        let (cells, proofs) = &*CELLS_AND_PROOFS;
        assert_eq!(cells.len(), CELLS_PER_EXT_BLOB);
        assert_eq!(proofs.len(), CELLS_PER_EXT_BLOB);
    }

    #[test]
    fn test_compute_cells_agrees_with_proof_path() {
        let cells = KZG_INSTANCE.compute_cells(&TEST_BLOB).unwrap();
        assert_eq!(cells, CELLS_AND_PROOFS.0);
    }

    #[test]
    fn test_first_half_of_cells_is_the_blob() {
        // The extension is systematic: the original blob occupies the first
        // half of the bit-reversed extended evaluations, so concatenating
        // the first half of the cells gives back the blob bytes.
        let (cells, _) = &*CELLS_AND_PROOFS;
        let mut first_half = Vec::with_capacity(BYTES_PER_BLOB);
        for cell in cells.iter().take(CELLS_PER_EXT_BLOB / 2) {
            first_half.extend_from_slice(&cell[..]);
        }
        assert_eq!(first_half.as_slice(), TEST_BLOB.data());
    }

    #[test]
    fn test_proof_multi_agrees_with_extended_fft() {
        // The per-coset Horner evaluations must agree with the slices of
        // the one extended FFT that compute_cells_and_kzg_proofs uses.
        let blob_domain = Domain::new(FIELD_ELEMENTS_PER_BLOB).unwrap();
        let poly = TEST_BLOB
            .to_polynomial_eval_form()
            .to_coeff_form(&blob_domain)
            .unwrap();

        let (cells, proofs) = &*CELLS_AND_PROOFS;
        for cell_index in [0u64, 89] {
            let coset = KZG_INSTANCE
                .extended_domain()
                .coset_for_cell(cell_index)
                .unwrap();
            let (proof, ys) = KZG_INSTANCE
                .compute_kzg_proof_multi(&poly, coset, &SRS_INSTANCE)
                .unwrap();
            assert_eq!(
                ys,
                helpers::cell_to_coset_evals(&cells[cell_index as usize]).unwrap()
            );
            assert_eq!(
                helpers::g1_point_to_bytes_be(&proof),
                proofs[cell_index as usize]
            );
        }
    }

    #[test]
    fn test_zero_blob() {
        let blob = Blob::new(&[0u8; BYTES_PER_BLOB]).unwrap();
        let commitment = KZG_INSTANCE
            .blob_to_kzg_commitment(&blob, &SRS_INSTANCE)
            .unwrap();

        let mut infinity = [0u8; 48];
        infinity[0] = 0xc0;
        assert_eq!(commitment, infinity);

        let (cells, proofs) = KZG_INSTANCE
            .compute_cells_and_kzg_proofs(&blob, &SRS_INSTANCE)
            .unwrap();
        assert!(cells.iter().all(|cell| cell.iter().all(|byte| *byte == 0)));
        assert!(proofs.iter().all(|proof| *proof == infinity));
    }

    #[test]
    fn test_commitment_is_deterministic() {
        let one = KZG_INSTANCE
            .blob_to_kzg_commitment(&TEST_BLOB, &SRS_INSTANCE)
            .unwrap();
        let two = KZG_INSTANCE
            .blob_to_kzg_commitment(&TEST_BLOB, &SRS_INSTANCE)
            .unwrap();
        assert_eq!(one, two);
    }
}
