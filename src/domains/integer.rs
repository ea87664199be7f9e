use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rand::Rng;
use rug::{ops::Pow, Integer as MultiPrecisionInteger};

use crate::utils;

use super::{EuclideanDomain, Ring};

/// The integer ring.
pub type Z = IntegerRing;
/// The integer ring.
pub const Z: IntegerRing = IntegerRing::new();

/// The integer ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IntegerRing;

impl Default for IntegerRing {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerRing {
    pub const fn new() -> IntegerRing {
        IntegerRing
    }
}

/// An arbitrary-precision integer. Numbers that fit in an `i64` are always
/// stored as [Integer::Natural], so that structural equality is numerical equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Integer {
    Natural(i64),
    Large(MultiPrecisionInteger),
}

impl From<i64> for Integer {
    #[inline]
    fn from(value: i64) -> Self {
        Integer::Natural(value)
    }
}

impl From<i32> for Integer {
    #[inline]
    fn from(value: i32) -> Self {
        Integer::Natural(value as i64)
    }
}

impl From<u32> for Integer {
    #[inline]
    fn from(value: u32) -> Self {
        Integer::Natural(value as i64)
    }
}

impl From<u64> for Integer {
    #[inline]
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Integer::Natural(value as i64)
        } else {
            Integer::Large(MultiPrecisionInteger::from(value))
        }
    }
}

impl From<MultiPrecisionInteger> for Integer {
    /// Convert a multi-precision integer, downgrading it to
    /// a machine word when possible.
    #[inline]
    fn from(n: MultiPrecisionInteger) -> Self {
        if let Some(n) = n.to_i64() {
            Integer::Natural(n)
        } else {
            Integer::Large(n)
        }
    }
}

impl FromStr for Integer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Integer::Natural(n));
        }

        MultiPrecisionInteger::from_str(s)
            .map(Integer::from)
            .map_err(|e| format!("Could not parse integer {}: {}", s, e))
    }
}

impl std::fmt::Debug for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Integer::Natural(n) => n.fmt(f),
            Integer::Large(r) => r.fmt(f),
        }
    }
}

impl Display for IntegerRing {
    fn fmt(&self, _: &mut Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl Integer {
    pub fn new(num: i64) -> Integer {
        Integer::Natural(num)
    }

    #[inline]
    pub fn zero() -> Integer {
        Integer::Natural(0)
    }

    #[inline]
    pub fn one() -> Integer {
        Integer::Natural(1)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Natural(n) => *n == 0,
            Integer::Large(_) => false,
        }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        match self {
            Integer::Natural(n) => *n == 1,
            Integer::Large(_) => false,
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Integer::Natural(n) => *n < 0,
            Integer::Large(r) => r.is_negative(),
        }
    }

    #[inline]
    fn to_large(&self) -> MultiPrecisionInteger {
        match self {
            Integer::Natural(n) => MultiPrecisionInteger::from(*n),
            Integer::Large(l) => l.clone(),
        }
    }

    pub fn abs(&self) -> Integer {
        match self {
            Integer::Natural(n) => {
                if *n == i64::MIN {
                    Integer::Large(MultiPrecisionInteger::from(*n).abs())
                } else {
                    Integer::Natural(n.abs())
                }
            }
            Integer::Large(n) => Integer::Large(n.clone().abs()),
        }
    }

    /// Compare the absolute values of two integers.
    pub fn abs_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                n1.unsigned_abs().cmp(&n2.unsigned_abs())
            }
            // a large integer is always larger in absolute value than any natural
            (Integer::Natural(_), Integer::Large(_)) => Ordering::Less,
            (Integer::Large(_), Integer::Natural(_)) => Ordering::Greater,
            (Integer::Large(n1), Integer::Large(n2)) => n1.cmp_abs(n2),
        }
    }

    /// The number of bits of the absolute value.
    pub fn bits(&self) -> u64 {
        match self {
            Integer::Natural(n) => 64 - n.unsigned_abs().leading_zeros() as u64,
            Integer::Large(r) => r.significant_bits() as u64,
        }
    }

    pub fn pow(&self, e: u64) -> Integer {
        if e > u32::MAX as u64 {
            panic!("Power of exponentation is larger than 2^32: {}", e);
        }
        let e = e as u32;

        if e == 0 {
            return Integer::one();
        }

        match self {
            Integer::Natural(n1) => {
                if let Some(pn) = n1.checked_pow(e) {
                    Integer::Natural(pn)
                } else {
                    Integer::from(MultiPrecisionInteger::from(*n1).pow(e))
                }
            }
            Integer::Large(r) => Integer::from(r.clone().pow(e)),
        }
    }

    /// Euclidean division: the remainder is always non-negative.
    pub fn quot_rem(&self, b: &Integer) -> (Integer, Integer) {
        if b.is_zero() {
            panic!("Cannot divide by zero");
        }

        match (self, b) {
            (Integer::Natural(aa), Integer::Natural(bb)) => {
                if let (Some(q), Some(r)) = (aa.checked_div_euclid(*bb), aa.checked_rem_euclid(*bb))
                {
                    (Integer::Natural(q), Integer::Natural(r))
                } else {
                    // i64::MIN / -1
                    (Integer::Natural(i64::MIN).neg(), Integer::zero())
                }
            }
            _ => {
                let (q, r) = self.to_large().div_rem_euc(b.to_large());
                (Integer::from(q), Integer::from(r))
            }
        }
    }

    /// Truncating division: the quotient is rounded towards zero and
    /// the remainder has the sign of the dividend.
    pub fn iquo_rem(&self, b: &Integer) -> (Integer, Integer) {
        if b.is_zero() {
            panic!("Cannot divide by zero");
        }

        match (self, b) {
            (Integer::Natural(aa), Integer::Natural(bb)) => {
                if let (Some(q), Some(r)) = (aa.checked_div(*bb), aa.checked_rem(*bb)) {
                    (Integer::Natural(q), Integer::Natural(r))
                } else {
                    (Integer::Natural(i64::MIN).neg(), Integer::zero())
                }
            }
            _ => {
                let (q, r) = self.to_large().div_rem(b.to_large());
                (Integer::from(q), Integer::from(r))
            }
        }
    }

    /// The truncated quotient of `self` and `b`, e.g. `iquo(-23, 4) = -5`.
    pub fn iquo(&self, b: &Integer) -> Integer {
        self.iquo_rem(b).0
    }

    /// The remainder of truncated division, e.g. `irem(-23, 4) = -3`.
    pub fn irem(&self, b: &Integer) -> Integer {
        self.iquo_rem(b).1
    }

    /// The non-negative greatest common divisor.
    pub fn gcd(&self, b: &Integer) -> Integer {
        match (self, b) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                Integer::from(utils::gcd_signed(*n1, *n2))
            }
            _ => Integer::from(self.to_large().gcd(&b.to_large())),
        }
    }

    /// Perform the symmetric mod `p` on `self`, yielding
    /// a representative in `(-p/2, p/2]`.
    #[inline]
    pub fn symmetric_mod(&self, p: &Integer) -> Integer {
        let c = self.quot_rem(p).1;

        if &c + &c > *p {
            &c - p
        } else {
            c
        }
    }

    /// Compute the modular inverse of `self` in the ring with size `n`,
    /// if `self` and `n` are coprime.
    pub fn try_mod_inverse(&self, n: &Integer) -> Option<Integer> {
        let mut t0 = Integer::zero();
        let mut t1 = Integer::one();
        let mut r0 = n.clone();
        let mut r1 = self.quot_rem(n).1;

        while !r1.is_zero() {
            let (q, r) = r0.quot_rem(&r1);
            (t1, t0) = (&t0 - &(&q * &t1), t1);
            (r1, r0) = (r, r1);
        }

        if !r0.is_one() {
            return None;
        }
        if t0.is_negative() {
            t0 += n;
        }

        Some(t0)
    }

    /// Compute the modular inverse of `self` in the ring with size `n`.
    /// `self` and `n` must be coprime.
    pub fn mod_inverse(&self, n: &Integer) -> Integer {
        self.try_mod_inverse(n)
            .unwrap_or_else(|| panic!("{} is not invertible in ring {}", self, n))
    }

    /// The integer square root, rounded down.
    pub fn isqrt(&self) -> Integer {
        if self.is_negative() {
            panic!("Cannot take the square root of negative number {}", self);
        }

        Integer::from(self.to_large().sqrt())
    }
}

impl PartialEq<i64> for Integer {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        match self {
            Integer::Natural(n) => n == other,
            Integer::Large(_) => false,
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Integer::Natural(n1), Integer::Natural(n2)) => n1.cmp(n2),
            (Integer::Natural(n1), Integer::Large(n2)) => n2
                .partial_cmp(n1)
                .map(Ordering::reverse)
                .unwrap_or(Ordering::Equal),
            (Integer::Large(n1), Integer::Natural(n2)) => {
                n1.partial_cmp(n2).unwrap_or(Ordering::Equal)
            }
            (Integer::Large(n1), Integer::Large(n2)) => n1.cmp(n2),
        }
    }
}

impl Ring for IntegerRing {
    type Element = Integer;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    #[inline]
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a += b;
    }

    #[inline]
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a -= b;
    }

    #[inline]
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a *= b;
    }

    #[inline]
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a += &(b * c);
    }

    #[inline]
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a -= &(b * c);
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        -a
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        Integer::zero()
    }

    #[inline]
    fn one(&self) -> Self::Element {
        Integer::one()
    }

    #[inline]
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        b.pow(e)
    }

    #[inline]
    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn one_is_gcd_unit() -> bool {
        true
    }

    fn is_characteristic_zero(&self) -> bool {
        true
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        let r = rng.gen_range(range.0..range.1);
        Integer::Natural(r)
    }
}

impl EuclideanDomain for IntegerRing {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.quot_rem(b).1
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        a.quot_rem(b)
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.gcd(b)
    }
}

impl<'a, 'b> Add<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline(always)]
    fn add(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(num) = n1.checked_add(*n2) {
                    Integer::Natural(num)
                } else {
                    Integer::from(MultiPrecisionInteger::from(*n1) + *n2)
                }
            }
            (Integer::Natural(n1), Integer::Large(r2))
            | (Integer::Large(r2), Integer::Natural(n1)) => Integer::from(r2.clone() + *n1),
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from(r1.clone() + r2),
        }
    }
}

impl<'a, 'b> Sub<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline(always)]
    fn sub(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(num) = n1.checked_sub(*n2) {
                    Integer::Natural(num)
                } else {
                    Integer::from(MultiPrecisionInteger::from(*n1) - *n2)
                }
            }
            (Integer::Natural(n1), Integer::Large(r2)) => {
                Integer::from(MultiPrecisionInteger::from(*n1) - r2)
            }
            (Integer::Large(r1), Integer::Natural(n2)) => Integer::from(r1.clone() - *n2),
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from(r1.clone() - r2),
        }
    }
}

impl<'a, 'b> Mul<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline(always)]
    fn mul(self, rhs: &'b Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(num) = n1.checked_mul(*n2) {
                    Integer::Natural(num)
                } else {
                    Integer::from(MultiPrecisionInteger::from(*n1) * *n2)
                }
            }
            (Integer::Natural(n1), Integer::Large(r2))
            | (Integer::Large(r2), Integer::Natural(n1)) => Integer::from(r2.clone() * *n1),
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from(r1.clone() * r2),
        }
    }
}

/// Truncating division.
impl<'a, 'b> Div<&'b Integer> for &'a Integer {
    type Output = Integer;

    #[inline(always)]
    fn div(self, rhs: &'b Integer) -> Integer {
        self.iquo(rhs)
    }
}

macro_rules! forward_owned_bin_op {
    ($tr: ident, $op: ident) => {
        impl $tr<Integer> for Integer {
            type Output = Integer;

            #[inline(always)]
            fn $op(self, rhs: Integer) -> Integer {
                (&self).$op(&rhs)
            }
        }

        impl<'a> $tr<&'a Integer> for Integer {
            type Output = Integer;

            #[inline(always)]
            fn $op(self, rhs: &'a Integer) -> Integer {
                (&self).$op(rhs)
            }
        }

        impl<'a> $tr<Integer> for &'a Integer {
            type Output = Integer;

            #[inline(always)]
            fn $op(self, rhs: Integer) -> Integer {
                self.$op(&rhs)
            }
        }
    };
}

forward_owned_bin_op!(Add, add);
forward_owned_bin_op!(Sub, sub);
forward_owned_bin_op!(Mul, mul);
forward_owned_bin_op!(Div, div);

impl<'a> AddAssign<&'a Integer> for Integer {
    #[inline]
    fn add_assign(&mut self, rhs: &'a Integer) {
        if let (Integer::Large(r1), Integer::Large(r2)) = (&mut *self, rhs) {
            *r1 += r2;
            if r1.to_i64().is_some() {
                *self = Integer::from(std::mem::take(r1));
            }
            return;
        }

        *self = &*self + rhs;
    }
}

impl<'a> SubAssign<&'a Integer> for Integer {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a Integer) {
        *self = &*self - rhs;
    }
}

impl<'a> MulAssign<&'a Integer> for Integer {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a Integer) {
        *self = &*self * rhs;
    }
}

impl<'a> Neg for &'a Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        match self {
            Integer::Natural(n) => {
                if let Some(neg) = n.checked_neg() {
                    Integer::Natural(neg)
                } else {
                    Integer::Large(-MultiPrecisionInteger::from(*n))
                }
            }
            Integer::Large(r) => Integer::from(-r.clone()),
        }
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        (&self).neg()
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use super::Integer;

    fn int(s: &str) -> Integer {
        s.parse().unwrap()
    }

    #[test]
    fn binary_ops() {
        let a = Integer::from(5);
        let b: Integer = 7.into();

        assert_eq!(&a + &b, 12);
        assert_eq!(&a - &b, -2);
        assert_eq!(&a * &b, 35);
        assert_eq!(&a / &b, 0);
        assert!(a < b);

        let a = Integer::from(5123123132i64).pow(5);
        let b = Integer::from(-312223132i64).pow(5);

        assert_eq!(
            &a + &b,
            int("3529178341193418202448766865967598093745792000000")
        );
        assert_eq!(
            &a - &b,
            int("3529184275300451286008027827753913822719081764864")
        );
        assert_eq!(&a / &b, -1189456);
        assert!(b < a);
        assert_eq!(a.abs_cmp(&b), Ordering::Greater);
    }

    #[test]
    fn overflow_promotes_and_demotes() {
        let max = Integer::from(i64::MAX);
        let sum = &max + &Integer::one();
        assert!(matches!(sum, Integer::Large(_)));

        let back = &sum - &Integer::one();
        assert_eq!(back, Integer::Natural(i64::MAX));

        let mut acc = sum.clone();
        acc += &(-&sum);
        assert_eq!(acc, Integer::zero());

        assert_eq!(-Integer::from(i64::MIN), int("9223372036854775808"));
        assert_eq!(Integer::from(i64::MIN).abs(), int("9223372036854775808"));
    }

    #[test]
    fn truncating_division() {
        let cases: [(i64, i64, i64, i64); 4] = [
            (23, 4, 3, 5),
            (23, -4, 3, -5),
            (-23, 4, -3, -5),
            (-23, -4, -3, 5),
        ];

        for (a, b, r, q) in cases {
            let (a, b) = (Integer::from(a), Integer::from(b));
            assert_eq!(a.irem(&b), r, "irem({}, {})", a, b);
            assert_eq!(a.iquo(&b), q, "iquo({}, {})", a, b);
        }

        let big = int("-100000000000000000000023");
        assert_eq!(big.irem(&Integer::from(4)), -3);
        assert_eq!(
            big.iquo(&Integer::from(4)),
            int("-25000000000000000000005")
        );
    }

    #[test]
    fn euclidean_division() {
        let (q, r) = Integer::from(-23).quot_rem(&Integer::from(4));
        assert_eq!((q, r), (Integer::from(-6), Integer::from(1)));

        let (q, r) = Integer::from(i64::MIN).quot_rem(&Integer::from(-1));
        assert_eq!(q, int("9223372036854775808"));
        assert!(r.is_zero());
    }

    #[test]
    fn symmetric_mod() {
        let p = Integer::from(7);
        assert_eq!(Integer::from(4).symmetric_mod(&p), -3);
        assert_eq!(Integer::from(3).symmetric_mod(&p), 3);
        assert_eq!(Integer::from(-4).symmetric_mod(&p), 3);

        // the upper bound of the range is inclusive for even moduli
        let p = Integer::from(10);
        assert_eq!(Integer::from(5).symmetric_mod(&p), 5);
        assert_eq!(Integer::from(-5).symmetric_mod(&p), 5);
        assert_eq!(Integer::from(6).symmetric_mod(&p), -4);
    }

    #[test]
    fn gcd_and_inverse() {
        assert_eq!(Integer::from(-12).gcd(&Integer::from(18)), 6);
        assert_eq!(Integer::zero().gcd(&Integer::zero()), 0);

        let a = int("1267650600228229401496703205376"); // 2^100
        assert_eq!(a.gcd(&Integer::from(-48)), 16);

        let inv = Integer::from(3).mod_inverse(&Integer::from(7));
        assert_eq!(inv, 5);
        assert_eq!(Integer::from(-3).mod_inverse(&Integer::from(7)), 2);
        assert_eq!(Integer::from(4).try_mod_inverse(&Integer::from(8)), None);
    }

    #[test]
    fn isqrt_and_bits() {
        assert_eq!(Integer::from(99).isqrt(), 9);
        assert_eq!(Integer::from(100).isqrt(), 10);
        assert_eq!(int("1267650600228229401496703205376").isqrt(), 1125899906842624i64);
        assert_eq!(Integer::from(255).bits(), 8);
        assert_eq!(Integer::from(-256).bits(), 9);
        assert_eq!(Integer::zero().bits(), 0);
    }
}
