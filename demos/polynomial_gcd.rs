use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};
use unigcd::{
    domains::integer::{Integer, Z},
    poly::{
        gcd::{
            gcd_with_cofactors, modular_gcd, polynomial_gcd_with_options, GCDOptions,
            IntegerPolynomial,
        },
        univariate::UnivariatePolynomial,
        Variable,
    },
};

fn parse_terms(terms: &[(usize, &str)], x: &Arc<Variable>) -> IntegerPolynomial {
    let terms: Vec<_> = terms
        .iter()
        .map(|(e, c)| (*e, c.parse::<Integer>().unwrap()))
        .collect();
    UnivariatePolynomial::from_terms(&Z, x.clone(), &terms)
}

fn gcd_integer_poly() {
    let x = Arc::new(Variable::new("x"));

    // (3*x^2 - 5*x + 12345678901234567890) * (x^3 + 2) and (3*x^2 - 5*x + 12345678901234567890) * (2*x - 7)
    let d = parse_terms(&[(0, "12345678901234567890"), (1, "-5"), (2, "3")], &x);
    let a = &d * &parse_terms(&[(0, "2"), (3, "1")], &x);
    let b = &d * &parse_terms(&[(0, "-7"), (1, "2")], &x);

    println!("> Polynomial gcd of {} and {} =", a, b);
    let (g, a_cofactor, b_cofactor) = gcd_with_cofactors(&a, &b).unwrap();
    println!("\t{}", g);
    println!("\tcofactors: {} and {}", a_cofactor, b_cofactor);

    println!("> Modular gcd =");
    println!("\t{}", modular_gcd(&a, &b).unwrap());
}

fn gcd_without_heuristic() {
    let x = Arc::new(Variable::new("x"));

    let a = parse_terms(
        &[(8, "1"), (6, "1"), (4, "-3"), (3, "-3"), (2, "8"), (1, "2"), (0, "-5")],
        &x,
    );
    let b = parse_terms(&[(6, "3"), (4, "5"), (2, "-4"), (1, "-9"), (0, "21")], &x);

    let options = GCDOptions {
        use_heuristic: false,
        ..Default::default()
    };

    println!("> Subresultant gcd of {} and {} =", a, b);
    println!("\t{}", polynomial_gcd_with_options(&a, &b, &options).unwrap());
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("UNIGCD_LOG"))
        .init();

    gcd_integer_poly();
    gcd_without_heuristic();
}
