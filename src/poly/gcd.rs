use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    sync::Arc,
};

use tracing::{debug, error, instrument, warn};

use crate::domains::{
    crt::{chinese_remainder, CrtError},
    integer::{Integer, IntegerRing, Z},
    integer_mod::IntegerMod,
};

use super::{
    univariate::{PolynomialError, UnivariatePolynomial},
    Variable,
};

/// Large primes that fit in a `u32`, used for the modular gcd.
pub const LARGE_U32_PRIMES: [u32; 40] = [
    4293490987, 4293491603, 4293492277, 4293492857, 4293491017, 4293491621, 4293492283, 4293492881,
    4293491023, 4293491639, 4293492293, 4293492893, 4293491051, 4293491659, 4293492331, 4293492941,
    4293491149, 4293491701, 4293492349, 4293492977, 4293491171, 4293491711, 4293492383, 4293493037,
    4293491221, 4293491747, 4293492403, 4293493049, 4293491261, 4293491779, 4293492421, 4293493069,
    4293491269, 4293491791, 4293492431, 4293493081, 4293491273, 4293491819, 4293492487, 4293493091,
];

/// A dense univariate polynomial with integer coefficients.
pub type IntegerPolynomial = UnivariatePolynomial<IntegerRing>;

/// An error that prevents a gcd from being computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GCDError {
    Polynomial(PolynomialError),
    /// The subresultant sequence did not terminate within the allowed number of steps.
    IterationLimit { iterations: usize },
    /// No combination of the available primes produced a gcd.
    PrimesExhausted,
    Crt(CrtError),
}

impl Display for GCDError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GCDError::Polynomial(e) => write!(f, "{}", e),
            GCDError::IterationLimit { iterations } => write!(
                f,
                "Subresultant sequence did not terminate after {} iterations",
                iterations
            ),
            GCDError::PrimesExhausted => write!(f, "Ran out of primes for the modular gcd"),
            GCDError::Crt(e) => write!(f, "Reconstruction failed: {}", e),
        }
    }
}

impl std::error::Error for GCDError {}

impl From<PolynomialError> for GCDError {
    fn from(e: PolynomialError) -> Self {
        GCDError::Polynomial(e)
    }
}

impl From<CrtError> for GCDError {
    fn from(e: CrtError) -> Self {
        GCDError::Crt(e)
    }
}

/// The reason a heuristic gcd attempt gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicFailure {
    RetriesExhausted { tries: usize },
    /// The evaluated polynomials would have more bits than allowed.
    MaxSizeExceeded { bits: u64 },
}

impl Display for HeuristicFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HeuristicFailure::RetriesExhausted { tries } => {
                write!(f, "no evaluation point worked in {} tries", tries)
            }
            HeuristicFailure::MaxSizeExceeded { bits } => {
                write!(f, "evaluations would need {} bits", bits)
            }
        }
    }
}

/// The result of a heuristic gcd computation. An inconclusive result
/// says nothing about the gcd: another algorithm must be used.
#[derive(Clone, Debug, PartialEq)]
pub enum HeuristicGCDOutcome {
    Gcd(IntegerPolynomial),
    Inconclusive(HeuristicFailure),
}

/// Tuning of the heuristic gcd.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeuristicGCDSettings {
    /// The number of evaluation points that are tried.
    pub max_tries: usize,
    /// The next evaluation point is `xi * isqrt(isqrt(xi)) * xi_multiplier / xi_divisor`.
    pub xi_multiplier: u64,
    pub xi_divisor: u64,
    /// Bound on `bits(xi) * degree`, the size of the evaluated polynomials.
    pub max_eval_bits: Option<u64>,
}

impl Default for HeuristicGCDSettings {
    fn default() -> Self {
        HeuristicGCDSettings {
            max_tries: 66,
            xi_multiplier: 73794,
            xi_divisor: 27011,
            max_eval_bits: Some(100_000),
        }
    }
}

/// Options for [polynomial_gcd_with_options].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GCDOptions {
    /// Try the heuristic gcd before the subresultant algorithm.
    pub use_heuristic: bool,
    pub heuristic: HeuristicGCDSettings,
    /// Give up on the subresultant algorithm after this many pseudo-divisions.
    pub max_prs_iterations: Option<usize>,
}

impl Default for GCDOptions {
    fn default() -> Self {
        GCDOptions {
            use_heuristic: true,
            heuristic: HeuristicGCDSettings::default(),
            max_prs_iterations: None,
        }
    }
}

/// Split off the content, returning `(content, primitive part)`.
fn split_content(p: &IntegerPolynomial) -> (Integer, IntegerPolynomial) {
    let c = p.content();
    if c.is_zero() || c.is_one() {
        return (c, p.clone());
    }

    let pp = p.clone().make_primitive();
    (c, pp)
}

/// Multiply by the unit that makes the leading coefficient positive.
fn unit_normal(p: &IntegerPolynomial) -> IntegerPolynomial {
    match p.coefficients.last() {
        Some(l) if l.is_negative() => -p.clone(),
        _ => p.clone(),
    }
}

/// The gcd when at least one of the inputs is zero.
fn gcd_with_zero(a: &IntegerPolynomial, b: &IntegerPolynomial) -> Option<IntegerPolynomial> {
    if a.is_zero() {
        Some(unit_normal(b))
    } else if b.is_zero() {
        Some(unit_normal(a))
    } else {
        None
    }
}

fn exact_quotient(a: &Integer, b: &Integer) -> Result<Integer, GCDError> {
    let (q, r) = a.iquo_rem(b);
    if !r.is_zero() {
        error!("Inexact division of {} by {}", a, b);
        return Err(PolynomialError::InexactDivision {
            dividend: a.to_string(),
            divisor: b.to_string(),
        }
        .into());
    }
    Ok(q)
}

fn exact_div_coeff(p: &IntegerPolynomial, c: &Integer) -> Result<IntegerPolynomial, GCDError> {
    p.exact_div_coeff(c).map_err(|e| {
        error!("Inexact division in gcd computation: {}", e);
        e.into()
    })
}

/// Reconstruct the polynomial `g` with coefficients in `(-xi/2, xi/2]` for which
/// `g(xi) = gamma`, by extracting the `xi`-adic digits of `gamma` in the symmetric range.
/// The base `xi` must be at least 2.
pub fn interpolate(
    mut gamma: Integer,
    xi: &Integer,
    degree_hint: usize,
    variable: Arc<Variable>,
) -> Result<IntegerPolynomial, GCDError> {
    if *xi <= Integer::one() {
        return Err(PolynomialError::InvalidInterpolationBase(xi.to_string()).into());
    }

    let mut coefficients = Vec::with_capacity(degree_hint + 1);
    while !gamma.is_zero() {
        let g_i = gamma.symmetric_mod(xi);
        gamma = exact_quotient(&(&gamma - &g_i), xi)?;
        coefficients.push(g_i);
    }

    Ok(UnivariatePolynomial::from_coefficients(
        &Z,
        coefficients,
        variable,
    ))
}

/// Compute the gcd using the subresultant pseudo-remainder sequence.
/// The result is the gcd of the contents times the normalized gcd of the primitive parts.
#[instrument(level = "debug", skip_all)]
pub fn subresultant_gcd(
    a: &IntegerPolynomial,
    b: &IntegerPolynomial,
    max_iterations: Option<usize>,
) -> Result<IntegerPolynomial, GCDError> {
    if let Some(g) = gcd_with_zero(a, b) {
        return Ok(g);
    }

    let (a, b) = if a.deg() < b.deg() { (b, a) } else { (a, b) };

    let (a_content, mut a) = split_content(a);
    let (b_content, mut b) = split_content(b);
    let gamma = a_content.gcd(&b_content);

    debug!("content={}", gamma);

    if b.is_constant() {
        return Ok(a.constant(gamma));
    }

    let mut ri = Integer::one();
    let mut psi = Integer::one();
    let mut iterations = 0;

    loop {
        if max_iterations.is_some_and(|m| iterations >= m) {
            return Err(GCDError::IterationLimit { iterations });
        }
        iterations += 1;

        let delta = a.deg() - b.deg();
        let r = a.pseudo_remainder(&b)?;

        if r.is_zero() {
            debug!("Remainder sequence ended at degree {}", b.deg());
            return Ok(b.normalize().mul_coeff(&gamma));
        }

        debug!("deg(a)={}, deg(b)={}, deg(r)={}", a.deg(), b.deg(), r.deg());

        a = b;
        b = exact_div_coeff(&r, &(&ri * &psi.pow(delta as u64)))?;

        // the division preserves the degree, so both the divisor
        // and the remainder are constant
        if b.is_constant() {
            return Ok(a.constant(gamma));
        }

        ri = a.lcoeff()?;
        match delta {
            0 => {}
            1 => psi = ri.clone(),
            _ => psi = exact_quotient(&ri.pow(delta as u64), &psi.pow(delta as u64 - 1))?,
        }
    }
}

/// Compute the gcd by evaluating the polynomials at a large integer `xi`,
/// computing the integer gcd of the values and reconstructing a polynomial
/// from its `xi`-adic expansion. A candidate is only accepted when it divides
/// both inputs. If no evaluation point yields a valid candidate, the result is
/// [HeuristicGCDOutcome::Inconclusive].
#[instrument(level = "debug", skip_all)]
pub fn heuristic_gcd(
    a: &IntegerPolynomial,
    b: &IntegerPolynomial,
    settings: &HeuristicGCDSettings,
) -> Result<HeuristicGCDOutcome, GCDError> {
    if let Some(g) = gcd_with_zero(a, b) {
        return Ok(HeuristicGCDOutcome::Gcd(g));
    }

    debug!("a={}; b={}", a, b);

    let (a_content, a) = split_content(a);
    let (b_content, b) = split_content(b);
    let gamma = a_content.gcd(&b_content);

    debug!("content={}", gamma);

    if a.is_constant() || b.is_constant() {
        return Ok(HeuristicGCDOutcome::Gcd(a.constant(gamma)));
    }

    let max_a = a.max_coeff()?;
    let max_b = b.max_coeff()?;
    let min = if max_a.abs_cmp(&max_b) == Ordering::Greater {
        max_b
    } else {
        max_a
    };

    let degree = a.deg().max(b.deg());
    let multiplier = Integer::from(settings.xi_multiplier);
    let divisor = Integer::from(settings.xi_divisor);
    let mut xi = &(&min * &Integer::new(2)) + &Integer::new(2);

    for t in 0..settings.max_tries {
        let bits = xi.bits() * degree as u64;
        if settings.max_eval_bits.is_some_and(|m| bits > m) {
            debug!("Evaluation point {} too large", xi);
            return Ok(HeuristicGCDOutcome::Inconclusive(
                HeuristicFailure::MaxSizeExceeded { bits },
            ));
        }

        let av = a.evaluate(&xi);
        let bv = b.evaluate(&xi);
        let g = av.gcd(&bv);

        debug!("round {}, xi={}, gcd={}", t, xi, g);

        if !g.is_zero() {
            let candidate = interpolate(g.clone(), &xi, degree, a.get_vars())?.normalize();
            if a.divides(&candidate).is_some() && b.divides(&candidate).is_some() {
                debug!("match {}", candidate);
                return Ok(HeuristicGCDOutcome::Gcd(candidate.mul_coeff(&gamma)));
            }

            // try the reconstructed cofactors
            let a_cofactor = interpolate(exact_quotient(&av, &g)?, &xi, degree, a.get_vars())?;
            if !a_cofactor.is_zero() {
                if let Some(q) = a.divides(&a_cofactor) {
                    if b.divides(&q).is_some() {
                        debug!("cofactor match {}", a_cofactor);
                        return Ok(HeuristicGCDOutcome::Gcd(q.normalize().mul_coeff(&gamma)));
                    }
                }
            }

            let b_cofactor = interpolate(exact_quotient(&bv, &g)?, &xi, degree, b.get_vars())?;
            if !b_cofactor.is_zero() {
                if let Some(q) = b.divides(&b_cofactor) {
                    if a.divides(&q).is_some() {
                        debug!("cofactor match {}", b_cofactor);
                        return Ok(HeuristicGCDOutcome::Gcd(q.normalize().mul_coeff(&gamma)));
                    }
                }
            }
        }

        xi = (&(&xi * &xi.isqrt().isqrt()) * &multiplier).iquo(&divisor);
    }

    Ok(HeuristicGCDOutcome::Inconclusive(
        HeuristicFailure::RetriesExhausted {
            tries: settings.max_tries,
        },
    ))
}

/// Compute the gcd from images modulo large primes, combined with
/// Garner's algorithm. Primes that divide a leading coefficient are skipped
/// and images of too high degree are discarded.
#[instrument(level = "debug", skip_all)]
pub fn modular_gcd(
    a: &IntegerPolynomial,
    b: &IntegerPolynomial,
) -> Result<IntegerPolynomial, GCDError> {
    if let Some(g) = gcd_with_zero(a, b) {
        return Ok(g);
    }

    let (a_content, a) = split_content(a);
    let (b_content, b) = split_content(b);
    let gamma = a_content.gcd(&b_content);

    if a.is_constant() || b.is_constant() {
        return Ok(a.constant(gamma));
    }

    // the leading coefficient of the gcd divides this
    let lcoeff_gcd = a.lcoeff()?.gcd(&b.lcoeff()?);

    let mut bound = a.deg().min(b.deg());
    let mut images: Vec<(Integer, UnivariatePolynomial<IntegerMod>)> = vec![];

    for p in LARGE_U32_PRIMES {
        let p = Integer::from(p);
        let field = IntegerMod::new(p.clone());

        let a_p = a.to_modular(&field);
        let b_p = b.to_modular(&field);
        if a_p.deg() != a.deg() || b_p.deg() != b.deg() {
            debug!("Leading coefficient vanishes modulo {}", p);
            continue;
        }

        let g_p = a_p.gcd(&b_p);
        let d = g_p.deg();

        match d.cmp(&bound) {
            Ordering::Greater => {
                debug!("Unlucky prime {}: degree {} vs {}", p, d, bound);
                continue;
            }
            Ordering::Less => {
                debug!("Degree bound lowered to {}: restarting", d);
                bound = d;
                images.clear();
            }
            Ordering::Equal => {}
        }

        if d == 0 {
            return Ok(a.constant(gamma));
        }

        images.push((p, g_p.mul_coeff(&field.to_element(&lcoeff_gcd))));

        let mut coefficients = Vec::with_capacity(d + 1);
        for i in 0..=d {
            let residues: Vec<_> = images
                .iter()
                .map(|(p, g)| (g.coefficients[i].clone(), p.clone()))
                .collect();
            coefficients.push(chinese_remainder(&residues)?);
        }

        let candidate =
            UnivariatePolynomial::from_coefficients(&Z, coefficients, a.get_vars()).normalize();

        debug!("Candidate from {} primes: {}", images.len(), candidate);

        if candidate.deg() == d && a.divides(&candidate).is_some() && b.divides(&candidate).is_some()
        {
            return Ok(candidate.mul_coeff(&gamma));
        }
    }

    Err(GCDError::PrimesExhausted)
}

/// Compute the gcd of two integer polynomials. The result is zero if both
/// inputs are zero and otherwise has a positive leading coefficient.
pub fn polynomial_gcd(
    a: &IntegerPolynomial,
    b: &IntegerPolynomial,
) -> Result<IntegerPolynomial, GCDError> {
    polynomial_gcd_with_options(a, b, &GCDOptions::default())
}

/// Compute the gcd of two integer polynomials, trying the heuristic gcd
/// first if enabled and falling back to the subresultant algorithm.
#[instrument(level = "debug", skip_all)]
pub fn polynomial_gcd_with_options(
    a: &IntegerPolynomial,
    b: &IntegerPolynomial,
    options: &GCDOptions,
) -> Result<IntegerPolynomial, GCDError> {
    assert_eq!(a.variable, b.variable, "Polynomials have different variables");

    debug!("gcd of {} and {}", a, b);

    if options.use_heuristic {
        match heuristic_gcd(a, b, &options.heuristic)? {
            HeuristicGCDOutcome::Gcd(g) => {
                debug!("Heuristic gcd succeeded: {}", g);
                return Ok(g);
            }
            HeuristicGCDOutcome::Inconclusive(reason) => {
                warn!("Heuristic gcd inconclusive: {}; using subresultant PRS", reason);
            }
        }
    }

    subresultant_gcd(a, b, options.max_prs_iterations)
}

/// Compute `(g, a / g, b / g)` with `g` the gcd of `a` and `b`.
/// If both inputs are zero, all three are zero.
pub fn gcd_with_cofactors(
    a: &IntegerPolynomial,
    b: &IntegerPolynomial,
) -> Result<(IntegerPolynomial, IntegerPolynomial, IntegerPolynomial), GCDError> {
    let g = polynomial_gcd(a, b)?;
    if g.is_zero() {
        return Ok((g.clone(), g.clone(), g));
    }

    let cofactor = |p: &IntegerPolynomial| {
        p.divides(&g).ok_or_else(|| {
            error!("gcd {} does not divide {}", g, p);
            GCDError::from(PolynomialError::InexactDivision {
                dividend: p.to_string(),
                divisor: g.to_string(),
            })
        })
    };

    let a_cofactor = cofactor(a)?;
    let b_cofactor = cofactor(b)?;
    Ok((g, a_cofactor, b_cofactor))
}
