//! Exact greatest common divisors of univariate polynomials with integer coefficients.
//!
//! The gcd is computed with a heuristic evaluation/interpolation algorithm (GCDHEU),
//! falling back to the subresultant pseudo-remainder sequence when the heuristic is
//! inconclusive. A modular algorithm that combines images modulo large primes with
//! Garner's Chinese remainder reconstruction is available as well.
//!
//! For example:
//!
//! ```
//! use std::sync::Arc;
//! use unigcd::{
//!     domains::integer::{Integer, Z},
//!     poly::{gcd::polynomial_gcd, univariate::UnivariatePolynomial, Variable},
//! };
//!
//! let x = Arc::new(Variable::new("x"));
//! // (x+1)*(x+2) and (x+1)*(x+3)
//! let a = UnivariatePolynomial::from_coefficients(&Z, vec![2.into(), 3.into(), 1.into()], x.clone());
//! let b = UnivariatePolynomial::from_coefficients(&Z, vec![3.into(), 4.into(), 1.into()], x);
//!
//! let g = polynomial_gcd(&a, &b).unwrap();
//! assert_eq!(g.to_string(), "1+x");
//! assert_eq!(g.evaluate(&Integer::from(-1)), 0);
//! ```
//!
//! All algorithms return the gcd of the contents times the primitive gcd
//! with a positive leading coefficient, so their results can be compared directly.

pub mod domains;
pub mod poly;
pub mod utils;
