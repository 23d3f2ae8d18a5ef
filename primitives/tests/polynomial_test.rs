#[cfg(test)]
mod tests {
    use ark_bls12_381::Fr;
    use ark_std::{One, UniformRand, Zero};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_peerdas_kzg_primitives::{
        consts::{FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_EXT_BLOB},
        domain::{bit_reversal_permutation, Domain},
        errors::PolynomialError,
        polynomial::{interpolate, vanishing_poly, PolynomialCoeffForm, PolynomialEvalForm},
    };

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn random_poly(len: usize, rng: &mut StdRng) -> PolynomialCoeffForm {
        PolynomialCoeffForm::new((0..len).map(|_| Fr::rand(rng)).collect()).unwrap()
    }

    #[test]
    fn test_add_takes_longer_length() {
        let a = PolynomialCoeffForm::new(vec![Fr::from(1u64), Fr::from(2u64)]).unwrap();
        let b = PolynomialCoeffForm::new(vec![Fr::from(5u64), Fr::from(6u64), Fr::from(7u64)])
            .unwrap();
        let sum = a.add(&b);
        assert_eq!(
            sum.coeffs(),
            &[Fr::from(6u64), Fr::from(8u64), Fr::from(7u64)]
        );
        assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn test_neg_cancels() {
        let mut rng = rng();
        let a = random_poly(17, &mut rng);
        let sum = a.add(&a.neg());
        assert!(sum.coeffs().iter().all(Fr::is_zero));
    }

    #[test]
    fn test_mul_agrees_with_evaluation() {
        let mut rng = rng();
        let a = random_poly(9, &mut rng);
        let b = random_poly(14, &mut rng);
        let product = a.mul(&b).unwrap();
        assert_eq!(product.len(), 9 + 14 - 1);
        for _ in 0..8 {
            let z = Fr::rand(&mut rng);
            assert_eq!(product.evaluate(&z), a.evaluate(&z) * b.evaluate(&z));
        }
    }

    #[test]
    fn test_mul_degree_overflow() {
        let mut rng = rng();
        let a = random_poly(FIELD_ELEMENTS_PER_EXT_BLOB / 2 + 1, &mut rng);
        let b = random_poly(FIELD_ELEMENTS_PER_EXT_BLOB / 2, &mut rng);
        assert!(matches!(
            a.mul(&b),
            Err(PolynomialError::DegreeOverflow { .. })
        ));
    }

    #[test]
    fn test_div_inverts_mul() {
        let mut rng = rng();
        let a = random_poly(33, &mut rng);
        let b = random_poly(12, &mut rng);
        let product = a.mul(&b).unwrap();
        let quotient = product.div(&b).unwrap();
        assert_eq!(quotient.coeffs(), a.coeffs());
    }

    #[test]
    fn test_div_quotient_of_shorter_dividend_is_zero() {
        let mut rng = rng();
        let a = random_poly(5, &mut rng);
        let b = random_poly(9, &mut rng);
        let quotient = a.div(&b).unwrap();
        assert!(quotient.coeffs().iter().all(Fr::is_zero));
    }

    #[test]
    fn test_div_rejects_zero_leading_coefficient() {
        let mut rng = rng();
        let a = random_poly(8, &mut rng);
        let b = PolynomialCoeffForm::new(vec![Fr::one(), Fr::zero()]).unwrap();
        assert_eq!(a.div(&b), Err(PolynomialError::DivisionByZero));
    }

    #[test]
    fn test_shift_rescales_the_argument() {
        let mut rng = rng();
        let p = random_poly(21, &mut rng);
        let k = Fr::rand(&mut rng);
        let shifted = p.shift(&k).unwrap();
        for _ in 0..8 {
            let x = Fr::rand(&mut rng);
            assert_eq!(shifted.evaluate(&x), p.evaluate(&(k * x)));
        }
    }

    #[test]
    fn test_shift_round_trips_through_the_inverse() {
        use ark_ff::Field;
        let mut rng = rng();
        let p = random_poly(30, &mut rng);
        let k = Fr::rand(&mut rng);
        let back = p.shift(&k).unwrap().shift(&k.inverse().unwrap()).unwrap();
        assert_eq!(back.coeffs(), p.coeffs());
    }

    #[test]
    fn test_shift_rejects_zero_factor() {
        let mut rng = rng();
        let p = random_poly(4, &mut rng);
        assert_eq!(p.shift(&Fr::zero()), Err(PolynomialError::DivisionByZero));
    }

    #[test]
    fn test_vanishing_poly_is_monic_and_vanishes() {
        let mut rng = rng();
        let points: Vec<Fr> = (0..20).map(|_| Fr::rand(&mut rng)).collect();
        let vanishing = vanishing_poly(&points).unwrap();
        assert_eq!(vanishing.len(), points.len() + 1);
        assert_eq!(*vanishing.coeffs().last().unwrap(), Fr::one());
        for point in &points {
            assert!(vanishing.evaluate(point).is_zero());
        }
        let somewhere_else = Fr::rand(&mut rng);
        assert!(!vanishing.evaluate(&somewhere_else).is_zero());
    }

    #[test]
    fn test_interpolate_recovers_the_polynomial() {
        let mut rng = rng();
        let p = random_poly(16, &mut rng);
        let xs: Vec<Fr> = (0..16).map(|_| Fr::rand(&mut rng)).collect();
        let ys: Vec<Fr> = xs.iter().map(|x| p.evaluate(x)).collect();
        let interpolated = interpolate(&xs, &ys).unwrap();
        assert_eq!(interpolated.coeffs(), p.coeffs());
    }

    #[test]
    fn test_interpolate_rejects_duplicate_points() {
        let mut rng = rng();
        let mut xs: Vec<Fr> = (0..6).map(|_| Fr::rand(&mut rng)).collect();
        xs[4] = xs[1];
        let ys: Vec<Fr> = (0..6).map(|_| Fr::rand(&mut rng)).collect();
        assert_eq!(
            interpolate(&xs, &ys),
            Err(PolynomialError::DuplicateEvaluationPoint)
        );
    }

    #[test]
    fn test_interpolate_rejects_mismatched_lengths() {
        let xs = vec![Fr::one(); 3];
        let ys = vec![Fr::one(); 4];
        assert_eq!(
            interpolate(&xs, &ys),
            Err(PolynomialError::PointCountMismatch { xs: 3, ys: 4 })
        );
    }

    #[test]
    fn test_coeff_form_capacity() {
        assert!(matches!(
            PolynomialCoeffForm::new(vec![Fr::zero(); FIELD_ELEMENTS_PER_EXT_BLOB + 1]),
            Err(PolynomialError::DegreeOverflow { .. })
        ));
        assert_eq!(
            PolynomialCoeffForm::new(vec![]),
            Err(PolynomialError::EmptyPolynomial)
        );
    }

    #[test]
    fn test_eval_form_round_trips_to_coeff_form() {
        let mut rng = rng();
        let blob_domain = Domain::new(FIELD_ELEMENTS_PER_BLOB).unwrap();
        let evals: Vec<Fr> = (0..FIELD_ELEMENTS_PER_BLOB)
            .map(|_| Fr::rand(&mut rng))
            .collect();
        let eval_form = PolynomialEvalForm::new(evals.clone()).unwrap();
        let coeff_form = eval_form.to_coeff_form(&blob_domain).unwrap();

        // Forward FFT plus bit-reversal must land back on the evaluations.
        let natural = blob_domain.fft(coeff_form.coeffs()).unwrap();
        let back = bit_reversal_permutation(&natural).unwrap();
        assert_eq!(back, evals);
    }

    #[test]
    fn test_eval_form_requires_blob_width() {
        assert!(PolynomialEvalForm::new(vec![Fr::one(); 8]).is_err());
    }
}
