#[cfg(test)]
mod tests {
    use ark_bls12_381::{G1Affine, G2Affine};
    use ark_ec::AffineRepr;
    use lazy_static::lazy_static;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_peerdas_kzg_primitives::{
        errors::KzgError,
        helpers,
        srs::{MIN_G1_POINTS, MIN_G2_POINTS, SRS},
    };

    lazy_static! {
        static ref SRS_INSTANCE: SRS = SRS::insecure_random_setup(&mut StdRng::seed_from_u64(99));
    }

    #[test]
    fn test_insecure_setup_has_minimum_counts() {
        assert_eq!(SRS_INSTANCE.g1_monomial.len(), MIN_G1_POINTS);
        assert_eq!(SRS_INSTANCE.g2_monomial.len(), MIN_G2_POINTS);
        assert_eq!(SRS_INSTANCE.g1_monomial[0], G1Affine::generator());
        assert_eq!(SRS_INSTANCE.g2_monomial[0], G2Affine::generator());
    }

    #[test]
    fn test_setup_points_share_the_secret() {
        use ark_bls12_381::Bls12_381;
        use ark_ec::pairing::Pairing;

        // e(tau * G1, G2) == e(G1, tau * G2) pins both bases to one tau.
        let lhs = Bls12_381::pairing(SRS_INSTANCE.g1_monomial[1], SRS_INSTANCE.g2_monomial[0]);
        let rhs = Bls12_381::pairing(SRS_INSTANCE.g1_monomial[0], SRS_INSTANCE.g2_monomial[1]);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_new_rejects_short_point_vectors() {
        let g1 = SRS_INSTANCE.g1_monomial[..MIN_G1_POINTS - 1].to_vec();
        let g2 = SRS_INSTANCE.g2_monomial.clone();
        assert!(matches!(
            SRS::new(g1, g2),
            Err(KzgError::InvalidInputLength)
        ));
    }

    #[test]
    fn test_from_files_missing_file() {
        assert!(SRS::from_files("does/not/exist.g1", "does/not/exist.g2").is_err());
    }

    #[test]
    fn test_setup_points_survive_the_wire_format() {
        for point in SRS_INSTANCE.g1_monomial.iter().take(4) {
            let bytes = helpers::g1_point_to_bytes_be(point);
            assert_eq!(helpers::read_g1_point_from_bytes_be(&bytes).unwrap(), *point);
        }
    }
}
