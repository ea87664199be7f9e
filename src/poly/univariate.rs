use std::{
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
    sync::Arc,
};

use crate::domains::{
    integer::{Integer, IntegerRing},
    integer_mod::IntegerMod,
    EuclideanDomain, Field, Ring,
};

use super::Variable;

/// An error in a polynomial operation whose preconditions are not met.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolynomialError {
    /// The operation is undefined for the zero polynomial.
    EmptyPolynomial,
    /// A division that must be exact left a remainder.
    InexactDivision { dividend: String, divisor: String },
    /// Interpolation needs a base of at least 2.
    InvalidInterpolationBase(String),
}

impl Display for PolynomialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PolynomialError::EmptyPolynomial => {
                write!(f, "Operation is undefined for the zero polynomial")
            }
            PolynomialError::InexactDivision { dividend, divisor } => {
                write!(f, "Division of {} by {} is not exact", dividend, divisor)
            }
            PolynomialError::InvalidInterpolationBase(xi) => {
                write!(f, "Interpolation base must be larger than 1, got {}", xi)
            }
        }
    }
}

impl std::error::Error for PolynomialError {}

/// A dense univariate polynomial. The coefficient at index `i` belongs to `x^i`.
/// The coefficient list is empty for the zero polynomial and otherwise
/// its last element is non-zero.
#[derive(Clone)]
pub struct UnivariatePolynomial<F: Ring> {
    pub coefficients: Vec<F::Element>,
    pub variable: Arc<Variable>,
    pub field: F,
}

impl<F: Ring> std::fmt::Debug for UnivariatePolynomial<F> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "[]");
        }
        let mut first = true;
        write!(f, "[ ")?;
        for c in self.coefficients.iter() {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{{ {:?} }}", c)?;
        }
        write!(f, " ]")
    }
}

impl<F: Ring> Display for UnivariatePolynomial<F> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (e, c) in self.coefficients.iter().enumerate() {
            if F::is_zero(c) {
                continue;
            }

            let c = c.to_string();
            if !first && !c.starts_with('-') {
                write!(f, "+")?;
            }
            first = false;

            if e == 0 {
                write!(f, "{}", c)?;
                continue;
            }

            match c.as_str() {
                "1" => write!(f, "{}", self.variable)?,
                "-1" => write!(f, "-{}", self.variable)?,
                _ => write!(f, "{}*{}", c, self.variable)?,
            }

            if e > 1 {
                write!(f, "^{}", e)?;
            }
        }
        Ok(())
    }
}

impl<F: Ring> UnivariatePolynomial<F> {
    /// Constructs a zero polynomial. Instead of using this constructor,
    /// prefer to create new polynomials from existing ones, so that the
    /// variable and field are inherited.
    #[inline]
    pub fn new(field: &F, cap: Option<usize>, variable: Arc<Variable>) -> Self {
        Self {
            coefficients: Vec::with_capacity(cap.unwrap_or(0)),
            field: field.clone(),
            variable,
        }
    }

    /// Constructs a polynomial from a dense list of coefficients, ordered
    /// from low to high degree.
    pub fn from_coefficients(
        field: &F,
        coefficients: Vec<F::Element>,
        variable: Arc<Variable>,
    ) -> Self {
        let mut p = Self {
            coefficients,
            field: field.clone(),
            variable,
        };
        p.canonicalize(None);
        p
    }

    /// Constructs a polynomial from a list of `(exponent, coefficient)` pairs.
    /// Coefficients of repeated exponents are added.
    pub fn from_terms(field: &F, variable: Arc<Variable>, terms: &[(usize, F::Element)]) -> Self {
        let mut p = Self::new(field, None, variable);

        if let Some(d) = terms.iter().map(|(e, _)| *e).max() {
            p.coefficients = vec![field.zero(); d + 1];
            for (e, c) in terms {
                field.add_assign(&mut p.coefficients[*e], c);
            }
        }

        p.canonicalize(None);
        p
    }

    /// Get the non-zero terms as `(exponent, coefficient)` pairs.
    pub fn to_terms(&self) -> Vec<(usize, F::Element)> {
        self.coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| !F::is_zero(c))
            .map(|(e, c)| (e, c.clone()))
            .collect()
    }

    /// Constructs a zero polynomial, inheriting the field and variable from `self`.
    #[inline]
    pub fn zero(&self) -> Self {
        Self {
            coefficients: vec![],
            field: self.field.clone(),
            variable: self.variable.clone(),
        }
    }

    /// Constructs a zero polynomial with the given capacity,
    /// inheriting the field and variable from `self`.
    #[inline]
    pub fn zero_with_capacity(&self, cap: usize) -> Self {
        Self {
            coefficients: Vec::with_capacity(cap),
            field: self.field.clone(),
            variable: self.variable.clone(),
        }
    }

    /// Constructs a constant polynomial,
    /// inheriting the field and variable from `self`.
    #[inline]
    pub fn constant(&self, coeff: F::Element) -> Self {
        if F::is_zero(&coeff) {
            return self.zero();
        }

        Self {
            coefficients: vec![coeff],
            field: self.field.clone(),
            variable: self.variable.clone(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns true if the polynomial is constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coefficients.len() <= 1
    }

    /// Get the constant term of the polynomial.
    #[inline]
    pub fn get_constant(&self) -> F::Element {
        if self.is_zero() {
            return self.field.zero();
        }

        self.coefficients[0].clone()
    }

    /// Get a copy of the variable.
    pub fn get_vars(&self) -> Arc<Variable> {
        self.variable.clone()
    }

    /// Get the degree of the polynomial. The degree of the zero polynomial is undefined.
    pub fn degree(&self) -> Result<usize, PolynomialError> {
        if self.is_zero() {
            return Err(PolynomialError::EmptyPolynomial);
        }

        Ok(self.coefficients.len() - 1)
    }

    /// The degree, where the zero polynomial is treated as having degree 0.
    #[inline]
    pub(crate) fn deg(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Get the leading coefficient.
    pub fn lcoeff(&self) -> Result<F::Element, PolynomialError> {
        self.coefficients
            .last()
            .cloned()
            .ok_or(PolynomialError::EmptyPolynomial)
    }

    /// Strip the zero coefficients of the highest powers. If `hint` is
    /// provided, the caller guarantees that all coefficients beyond `x^hint` are zero.
    pub fn canonicalize(&mut self, hint: Option<usize>) {
        let mut end = hint.map_or(self.coefficients.len(), |h| {
            (h + 1).min(self.coefficients.len())
        });

        debug_assert!(
            self.coefficients[end..].iter().all(|c| F::is_zero(c)),
            "Non-zero coefficient beyond degree hint {:?}",
            hint
        );

        while end > 0 && F::is_zero(&self.coefficients[end - 1]) {
            end -= 1;
        }

        self.coefficients.truncate(end);
    }

    /// Multiply every coefficient by `coeff`.
    pub fn scale_in_place(&mut self, coeff: &F::Element) {
        if F::is_zero(coeff) {
            self.coefficients.clear();
            return;
        }

        if self.field.is_one(coeff) {
            return;
        }

        for c in &mut self.coefficients {
            self.field.mul_assign(c, coeff);
        }

        self.canonicalize(None);
    }

    pub fn mul_coeff(mut self, coeff: &F::Element) -> Self {
        self.scale_in_place(coeff);
        self
    }

    /// Evaluate the polynomial at `x` using Horner's scheme.
    pub fn evaluate(&self, x: &F::Element) -> F::Element {
        let Some((lcoeff, rest)) = self.coefficients.split_last() else {
            return self.field.zero();
        };

        let mut res = lcoeff.clone();
        for c in rest.iter().rev() {
            self.field.mul_assign(&mut res, x);
            self.field.add_assign(&mut res, c);
        }

        res
    }

    /// Compute the pseudo-remainder `r` of `self` divided by `div`, which satisfies
    /// `lcoeff(div)^(deg(self)-deg(div)+1) * self = q * div + r` with `deg(r) < deg(div)`.
    pub fn pseudo_remainder(&self, div: &Self) -> Result<Self, PolynomialError> {
        let m = div.degree()?;
        let b_lcoeff = div.lcoeff()?;

        if self.is_zero() {
            return Ok(self.zero());
        }

        let n = self.deg();
        if n < m {
            return Ok(self.clone());
        }

        let mut r = self.clone();
        let mut l = n - m + 1;
        while !r.is_zero() && r.deg() >= m {
            let k = r.deg() - m;
            let r_lcoeff = r.coefficients[r.deg()].clone();

            for c in &mut r.coefficients {
                self.field.mul_assign(c, &b_lcoeff);
            }

            for (i, c) in div.coefficients.iter().enumerate() {
                self.field
                    .sub_mul_assign(&mut r.coefficients[i + k], &r_lcoeff, c);
            }

            r.canonicalize(Some(k + m));
            l -= 1;
        }

        if l > 0 {
            r.scale_in_place(&self.field.pow(&b_lcoeff, l as u64));
        }

        Ok(r)
    }
}

impl<F: Ring> PartialEq for UnivariatePolynomial<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.variable == other.variable && self.coefficients == other.coefficients
    }
}

impl<F: Ring> Add for UnivariatePolynomial<F> {
    type Output = Self;

    fn add(mut self, mut other: Self) -> Self::Output {
        assert_eq!(self.field, other.field);
        assert_eq!(self.variable, other.variable);

        if self.is_zero() {
            return other;
        }
        if other.is_zero() {
            return self;
        }

        if self.coefficients.len() < other.coefficients.len() {
            std::mem::swap(&mut self, &mut other);
        }

        for (i, c) in other.coefficients.iter().enumerate() {
            self.field.add_assign(&mut self.coefficients[i], c);
        }

        self.canonicalize(None);

        self
    }
}

impl<'a, 'b, F: Ring> Add<&'a UnivariatePolynomial<F>> for &'b UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    fn add(self, other: &'a UnivariatePolynomial<F>) -> Self::Output {
        (self.clone()).add(other.clone())
    }
}

impl<F: Ring> Sub for UnivariatePolynomial<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.add(other.neg())
    }
}

impl<'a, 'b, F: Ring> Sub<&'a UnivariatePolynomial<F>> for &'b UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    fn sub(self, other: &'a UnivariatePolynomial<F>) -> Self::Output {
        (self.clone()).add(other.clone().neg())
    }
}

impl<F: Ring> Neg for UnivariatePolynomial<F> {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        // Negate coefficients of all terms.
        for c in &mut self.coefficients {
            *c = self.field.neg(c);
        }
        self
    }
}

impl<'a, 'b, F: Ring> Mul<&'a UnivariatePolynomial<F>> for &'b UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    #[inline]
    fn mul(self, rhs: &'a UnivariatePolynomial<F>) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return self.zero();
        }

        let mut res = self.zero();
        res.coefficients = vec![self.field.zero(); self.coefficients.len() + rhs.coefficients.len() - 1];

        for (e1, c1) in self.coefficients.iter().enumerate() {
            if F::is_zero(c1) {
                continue;
            }

            for (e2, c2) in rhs.coefficients.iter().enumerate() {
                if !F::is_zero(c2) {
                    self.field
                        .add_mul_assign(&mut res.coefficients[e1 + e2], c1, c2);
                }
            }
        }

        res.canonicalize(None);
        res
    }
}

impl<'a, F: Ring> Mul<&'a UnivariatePolynomial<F>> for UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    #[inline]
    fn mul(self, rhs: &'a UnivariatePolynomial<F>) -> Self::Output {
        (&self) * rhs
    }
}

impl<F: EuclideanDomain> UnivariatePolynomial<F> {
    /// Get the content from the coefficients.
    pub fn content(&self) -> F::Element {
        let mut c = self.field.zero();
        for cc in &self.coefficients {
            // early return if possible
            if F::one_is_gcd_unit() && self.field.is_one(&c) {
                break;
            }

            c = self.field.gcd(&c, cc);
        }
        c
    }

    /// Divide every coefficient by `other`, which must divide all of them.
    fn div_coeff(mut self, other: &F::Element) -> Self {
        for c in &mut self.coefficients {
            let (quot, rem) = self.field.quot_rem(c, other);
            debug_assert!(F::is_zero(&rem));
            *c = quot;
        }
        self
    }

    /// Divide every coefficient by `other`, yielding an error
    /// that carries the operands if any division leaves a remainder.
    pub fn exact_div_coeff(&self, other: &F::Element) -> Result<Self, PolynomialError> {
        let mut res = self.zero_with_capacity(self.coefficients.len());
        for c in &self.coefficients {
            let (quot, rem) = self.field.quot_rem(c, other);
            if !F::is_zero(&rem) {
                return Err(PolynomialError::InexactDivision {
                    dividend: self.to_string(),
                    divisor: other.to_string(),
                });
            }
            res.coefficients.push(quot);
        }

        res.canonicalize(None);
        Ok(res)
    }

    /// Make the polynomial primitive by removing the content.
    pub fn make_primitive(self) -> Self {
        if self.is_zero() {
            return self;
        }

        let c = self.content();
        self.div_coeff(&c)
    }

    /// Return `Some(self / div)` if `div` divides `self` exactly.
    pub fn divides(&self, div: &UnivariatePolynomial<F>) -> Option<UnivariatePolynomial<F>> {
        if div.is_zero() {
            panic!("Cannot divide by 0 polynomial");
        }

        if self.is_zero() {
            return Some(self.clone());
        }

        if self.deg() < div.deg() {
            return None;
        }

        // check if the leading coefficients divide
        if !F::is_zero(&self.field.rem(&self.coefficients[self.deg()], &div.coefficients[div.deg()]))
        {
            return None;
        }

        if self.field.is_characteristic_zero() {
            // test division of constant term (evaluation at x = 0)
            let c = div.get_constant();
            if !F::is_zero(&c)
                && !self.field.is_one(&c)
                && !F::is_zero(&self.field.rem(&self.get_constant(), &c))
            {
                return None;
            }

            // test division at x = 1
            let num = self.evaluate(&self.field.one());
            let den = div.evaluate(&self.field.one());

            if !F::is_zero(&den)
                && !self.field.is_one(&den)
                && !F::is_zero(&self.field.rem(&num, &den))
            {
                return None;
            }
        }

        let (a, b) = self.quot_rem(div);
        if b.is_zero() {
            Some(a)
        } else {
            None
        }
    }

    /// Compute the remainder `self % div`.
    pub fn rem(&self, div: &UnivariatePolynomial<F>) -> Self {
        self.quot_rem(div).1
    }

    /// Divide `self` by `div` in the coefficient ring. If a leading coefficient
    /// cannot be divided, the partial remainder is returned with a zero quotient.
    pub fn quot_rem(&self, div: &Self) -> (Self, Self) {
        if div.is_zero() {
            panic!("Cannot divide by 0");
        }

        if self.is_zero() {
            return (self.clone(), self.clone());
        }

        let mut n = self.deg();
        let m = div.deg();

        if n < m {
            return (self.zero(), self.clone());
        }

        let mut q = self.zero();
        q.coefficients = vec![self.field.zero(); n - m + 1];

        let mut r = self.clone();

        while n >= m {
            let (qq, rr) = self
                .field
                .quot_rem(&r.coefficients[n], &div.coefficients[m]);
            if !F::is_zero(&rr) {
                return (self.zero(), r);
            }

            for (i, c) in div.coefficients.iter().enumerate() {
                self.field
                    .sub_mul_assign(&mut r.coefficients[n - m + i], &qq, c);
            }
            r.canonicalize(Some(n));
            q.coefficients[n - m] = qq;

            if r.is_zero() {
                break;
            }

            n = r.deg();
        }

        q.canonicalize(None);

        (q, r)
    }
}

impl<F: Field> UnivariatePolynomial<F> {
    /// Compute the univariate GCD using Euclid's algorithm. The result is normalized to 1.
    pub fn gcd(&self, b: &Self) -> Self {
        if self.is_zero() {
            return b.clone().make_monic();
        }
        if b.is_zero() {
            return self.clone().make_monic();
        }

        let mut c = self.clone();
        let mut d = b.clone();
        if c.deg() < d.deg() {
            std::mem::swap(&mut c, &mut d);
        }

        let mut r = c.rem(&d);
        while !r.is_zero() {
            c = d;
            d = r;
            r = c.rem(&d);
        }

        d.make_monic()
    }

    /// Divide by the leading coefficient.
    pub fn make_monic(self) -> Self {
        let Some(l) = self.coefficients.last() else {
            return self;
        };

        let inv = self.field.inv(l);
        self.mul_coeff(&inv)
    }
}

impl UnivariatePolynomial<IntegerRing> {
    /// Get the largest coefficient in absolute value.
    pub fn max_coeff(&self) -> Result<Integer, PolynomialError> {
        self.coefficients
            .iter()
            .max_by(|a, b| a.abs_cmp(b))
            .map(|c| c.abs())
            .ok_or(PolynomialError::EmptyPolynomial)
    }

    /// Return the primitive part with a positive leading coefficient.
    pub fn normalize(self) -> Self {
        let p = self.make_primitive();
        if p.coefficients.last().is_some_and(|l| l.is_negative()) {
            -p
        } else {
            p
        }
    }

    /// Reduce every coefficient modulo the prime of `field`. The degree
    /// drops when the prime divides the leading coefficient.
    pub fn to_modular(&self, field: &IntegerMod) -> UnivariatePolynomial<IntegerMod> {
        let coefficients = self
            .coefficients
            .iter()
            .map(|c| field.to_element(c))
            .collect();
        UnivariatePolynomial::from_coefficients(field, coefficients, self.variable.clone())
    }
}

impl UnivariatePolynomial<IntegerMod> {
    /// Lift to the integers, using the symmetric representatives of the coefficients.
    pub fn to_symmetric_integer(&self) -> UnivariatePolynomial<IntegerRing> {
        UnivariatePolynomial {
            coefficients: self.coefficients.clone(),
            variable: self.variable.clone(),
            field: IntegerRing::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::{
        domains::{
            integer::{Integer, Z},
            integer_mod::IntegerMod,
        },
        poly::Variable,
    };

    use super::{PolynomialError, UnivariatePolynomial};

    fn poly(c: &[i64]) -> UnivariatePolynomial<crate::domains::integer::IntegerRing> {
        UnivariatePolynomial::from_coefficients(
            &Z,
            c.iter().map(|x| Integer::from(*x)).collect(),
            Arc::new(Variable::new("x")),
        )
    }

    #[test]
    fn canonical_form() {
        let p = poly(&[1, 2, 0, 0]);
        assert_eq!(p.coefficients.len(), 2);
        assert_eq!(p.degree(), Ok(1));

        let z = poly(&[0, 0, 0]);
        assert!(z.is_zero());
        assert_eq!(z.degree(), Err(PolynomialError::EmptyPolynomial));
        assert_eq!(z.lcoeff(), Err(PolynomialError::EmptyPolynomial));
        assert_eq!(z.max_coeff(), Err(PolynomialError::EmptyPolynomial));

        let mut q = poly(&[3, 1]);
        q.coefficients.extend([Integer::zero(), Integer::zero()]);
        q.canonicalize(Some(3));
        assert_eq!(q, poly(&[3, 1]));
    }

    #[test]
    fn scaling() {
        let mut p = poly(&[1, -2, 3]);
        p.scale_in_place(&Integer::one());
        assert_eq!(p, poly(&[1, -2, 3]));
        p.scale_in_place(&Integer::from(-2));
        assert_eq!(p, poly(&[-2, 4, -6]));
        p.scale_in_place(&Integer::zero());
        assert!(p.is_zero());
    }

    #[test]
    fn horner() {
        let p = poly(&[5, -3, 0, 2]);
        assert_eq!(p.evaluate(&Integer::from(2)), 15);
        assert_eq!(p.evaluate(&Integer::zero()), 5);
        assert_eq!(poly(&[7]).evaluate(&Integer::from(100)), 7);
        assert_eq!(poly(&[]).evaluate(&Integer::from(3)), 0);

        let big: Integer = "100000000000000000000".parse().unwrap();
        assert_eq!(
            poly(&[1, 1]).evaluate(&big),
            "100000000000000000001".parse::<Integer>().unwrap()
        );
    }

    #[test]
    fn pseudo_remainder_identity() {
        let a = poly(&[-5, 2, 8, -3, -3, 0, 1, 0, 1]);
        let b = poly(&[21, -9, -4, 0, 5, 0, 3]);

        let r = a.pseudo_remainder(&b).unwrap();
        assert!(r.deg() < b.deg());

        // lcoeff(b)^3 * a - r must be divisible by b
        let scaled = a.clone().mul_coeff(&Integer::from(27));
        assert!((&scaled - &r).divides(&b).is_some());
        assert_eq!(r, poly(&[-9, 0, 3, 0, -15]));
    }

    #[test]
    fn pseudo_remainder_edge_cases() {
        let b = poly(&[1, 1]);
        assert_eq!(
            b.pseudo_remainder(&poly(&[])),
            Err(PolynomialError::EmptyPolynomial)
        );
        assert!(poly(&[]).pseudo_remainder(&b).unwrap().is_zero());
        assert_eq!(poly(&[4]).pseudo_remainder(&b).unwrap(), poly(&[4]));

        // (2x+1) * (x+3) has zero pseudo-remainder
        let a = &poly(&[1, 2]) * &poly(&[3, 1]);
        assert!(a.pseudo_remainder(&poly(&[1, 2])).unwrap().is_zero());
    }

    #[test]
    fn exact_division() {
        let p = poly(&[6, -12, 18]);
        assert_eq!(p.exact_div_coeff(&Integer::from(-6)).unwrap(), poly(&[-1, 2, -3]));
        assert_eq!(
            p.exact_div_coeff(&Integer::from(4)),
            Err(PolynomialError::InexactDivision {
                dividend: "6-12*x+18*x^2".to_owned(),
                divisor: "4".to_owned()
            })
        );
    }

    #[test]
    fn content_and_normalization() {
        let p = poly(&[-6, 0, -9]);
        assert_eq!(p.content(), 3);
        assert_eq!(p.clone().normalize(), poly(&[2, 0, 3]));
        assert_eq!(poly(&[-7]).content(), 7);
        assert_eq!(p.max_coeff(), Ok(Integer::from(9)));
    }

    #[test]
    fn division() {
        let a = &poly(&[1, 1]) * &poly(&[-2, 0, 3]);
        assert_eq!(a.divides(&poly(&[1, 1])), Some(poly(&[-2, 0, 3])));
        assert_eq!(a.divides(&poly(&[1, 2])), None);
        assert_eq!(poly(&[1, 2, 1]).quot_rem(&poly(&[1, 1])).1, poly(&[]));
        assert_eq!(poly(&[2, 0, 1]).rem(&poly(&[1, 1])), poly(&[3]));
    }

    #[test]
    fn modular_reduction() {
        let field = IntegerMod::new(Integer::from(5));
        let p = poly(&[7, 3, 10]);
        let m = p.to_modular(&field);
        assert_eq!(m.coefficients, vec![Integer::from(2), Integer::from(-2)]);
        assert_eq!(m.degree(), Ok(1));

        assert!(poly(&[5, -10]).to_modular(&field).is_zero());
        assert_eq!(m.to_symmetric_integer(), poly(&[2, -2]));
    }

    #[test]
    fn field_gcd() {
        let field = IntegerMod::new(Integer::from(101));
        let g = &poly(&[3, 1]) * &poly(&[1, 0, 1]);
        let a = (&g * &poly(&[-1, 2])).to_modular(&field);
        let b = (&g * &poly(&[5, 0, 0, 1])).to_modular(&field);

        assert_eq!(a.gcd(&b), g.to_modular(&field));
    }

    #[test]
    fn terms_and_display() {
        let x = Arc::new(Variable::new("x"));
        let p = UnivariatePolynomial::from_terms(
            &Z,
            x,
            &[
                (2, Integer::from(3)),
                (0, Integer::from(-1)),
                (2, Integer::from(1)),
                (1, Integer::from(-1)),
            ],
        );

        assert_eq!(p, poly(&[-1, -1, 4]));
        assert_eq!(
            p.to_terms(),
            vec![
                (0, Integer::from(-1)),
                (1, Integer::from(-1)),
                (2, Integer::from(4))
            ]
        );
        assert_eq!(p.to_string(), "-1-x+4*x^2");
        assert_eq!(poly(&[0, 1]).to_string(), "x");
        assert_eq!(poly(&[]).to_string(), "0");
    }
}
