use std::sync::Arc;

use rand::{rngs::StdRng, Rng, SeedableRng};
use unigcd::{
    domains::{crt::chinese_remainder, integer::Integer, integer::Z, Ring},
    poly::{
        gcd::{
            heuristic_gcd, interpolate, modular_gcd, polynomial_gcd, subresultant_gcd,
            HeuristicGCDOutcome, HeuristicGCDSettings, IntegerPolynomial, LARGE_U32_PRIMES,
        },
        univariate::UnivariatePolynomial,
        Variable,
    },
};

fn var() -> Arc<Variable> {
    Arc::new(Variable::new("x"))
}

fn poly(c: &[i64]) -> IntegerPolynomial {
    UnivariatePolynomial::from_coefficients(&Z, c.iter().map(|x| Integer::from(*x)).collect(), var())
}

fn random_poly(rng: &mut StdRng, max_degree: usize) -> IntegerPolynomial {
    let degree = rng.gen_range(0..=max_degree);
    let coefficients = (0..=degree).map(|_| Z.sample(rng, (-20, 21))).collect();
    UnivariatePolynomial::from_coefficients(&Z, coefficients, var())
}

fn random_nonzero_poly(rng: &mut StdRng, max_degree: usize) -> IntegerPolynomial {
    loop {
        let p = random_poly(rng, max_degree);
        if !p.is_zero() {
            return p;
        }
    }
}

fn positive_lcoeff(p: IntegerPolynomial) -> IntegerPolynomial {
    if p.coefficients.last().is_some_and(|l| l.is_negative()) {
        -p
    } else {
        p
    }
}

#[test]
fn divides_both_inputs() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..50 {
        let d = random_nonzero_poly(&mut rng, 3);
        let a = &d * &random_poly(&mut rng, 4);
        let b = &d * &random_poly(&mut rng, 4);

        let g = polynomial_gcd(&a, &b).unwrap();
        if a.is_zero() && b.is_zero() {
            assert!(g.is_zero());
            continue;
        }

        assert!(a.divides(&g).is_some(), "{} does not divide {}", g, a);
        assert!(b.divides(&g).is_some(), "{} does not divide {}", g, b);
        assert!(g.divides(&d).is_some(), "{} does not divide {}", d, g);
    }
}

#[test]
fn common_factor_is_maximal() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..50 {
        let d = random_nonzero_poly(&mut rng, 4);
        let c1 = rng.gen_range(-50..50);
        let c2 = loop {
            let c = rng.gen_range(-50..50);
            if c != c1 {
                break c;
            }
        };

        // x + c1 and x + c2 are coprime and primitive
        let a = &d * &poly(&[c1, 1]);
        let b = &d * &poly(&[c2, 1]);

        assert_eq!(polynomial_gcd(&a, &b).unwrap(), positive_lcoeff(d));
    }
}

#[test]
fn commutative() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let d = random_poly(&mut rng, 2);
        let a = &d * &random_poly(&mut rng, 5);
        let b = &d * &random_poly(&mut rng, 5);

        assert_eq!(
            polynomial_gcd(&a, &b).unwrap(),
            polynomial_gcd(&b, &a).unwrap()
        );
    }
}

#[test]
fn zero_inputs() {
    let b = poly(&[6, 0, -3]);
    assert_eq!(polynomial_gcd(&poly(&[]), &b).unwrap(), poly(&[-6, 0, 3]));
    assert_eq!(modular_gcd(&b, &poly(&[])).unwrap(), poly(&[-6, 0, 3]));
    assert!(polynomial_gcd(&poly(&[]), &poly(&[])).unwrap().is_zero());
}

#[test]
fn algorithms_agree() {
    let mut rng = StdRng::seed_from_u64(4);
    let settings = HeuristicGCDSettings::default();

    for _ in 0..50 {
        let d = random_nonzero_poly(&mut rng, 4);
        let a = (&d * &random_nonzero_poly(&mut rng, 5)).mul_coeff(&Z.sample(&mut rng, (1, 10)));
        let b = (&d * &random_nonzero_poly(&mut rng, 5)).mul_coeff(&Z.sample(&mut rng, (1, 10)));

        let prs = subresultant_gcd(&a, &b, None).unwrap();
        assert_eq!(modular_gcd(&a, &b).unwrap(), prs);

        if let HeuristicGCDOutcome::Gcd(g) = heuristic_gcd(&a, &b, &settings).unwrap() {
            assert_eq!(g, prs);
        }
    }
}

#[test]
fn crt_round_trip() {
    let mut rng = StdRng::seed_from_u64(5);
    let moduli: Vec<_> = LARGE_U32_PRIMES[..4]
        .iter()
        .map(|p| Integer::from(*p))
        .collect();

    for _ in 0..50 {
        // up to about 2^120 in absolute value
        let hi = Integer::from(rng.gen_range(-(1i64 << 56)..(1i64 << 56)));
        let lo = Integer::from(rng.gen_range(0..(1i64 << 62)));
        let u = &(&hi * &Integer::from(1i64 << 62)) + &lo;

        let residues: Vec<_> = moduli
            .iter()
            .map(|m| (u.symmetric_mod(m), m.clone()))
            .collect();
        assert_eq!(chinese_remainder(&residues).unwrap(), u);
    }
}

#[test]
fn interpolation_inverts_evaluation() {
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..50 {
        let xi = rng.gen_range(2..1000i64);
        let degree = rng.gen_range(0..8usize);
        let coefficients = (0..=degree)
            .map(|_| Z.sample(&mut rng, (-(xi - 1) / 2, xi / 2 + 1)))
            .collect();
        let g = UnivariatePolynomial::from_coefficients(&Z, coefficients, var());

        let xi = Integer::from(xi);
        assert_eq!(
            interpolate(g.evaluate(&xi), &xi, degree, var()).unwrap(),
            g
        );
    }
}

/// Substitute integer values for extra variables, so that every extra
/// variable contributes a linear shift of `x`.
fn shift(values: &[i64]) -> i64 {
    values.iter().sum()
}

#[test]
fn coprime_with_substituted_shifts() {
    for n in 1..=5 {
        let y: Vec<i64> = (1..=n).map(|i| 10 * i + 3).collect();
        let e1 = shift(&y);
        let e2 = e1 + 7;

        let a = &(&poly(&[1, 1]) * &poly(&[2, 1])) * &poly(&[e1, 1]);
        let b = &poly(&[e2, 1]) * &poly(&[-5, 1]);

        assert_eq!(polynomial_gcd(&a, &b).unwrap(), poly(&[1]), "n = {}", n);
    }
}

#[test]
fn square_with_substituted_shifts() {
    for n in 1..=5 {
        let y: Vec<i64> = (2..n + 2).collect();
        let s = shift(&y);
        let t: i64 = y.iter().map(|v| v * v).sum();

        // e1 = x + s, e2 = x + t
        let e1_plus_1 = poly(&[s + 1, 1]);
        let d = &e1_plus_1 * &e1_plus_1;
        let a = &d * &poly(&[t - 2, 1]);
        let b = &d * &poly(&[s + 2, 1]);

        assert_eq!(polynomial_gcd(&a, &b).unwrap(), d, "n = {}", n);
        assert_eq!(subresultant_gcd(&a, &b, None).unwrap(), d, "n = {}", n);
    }
}
