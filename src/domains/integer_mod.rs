use std::fmt::{Display, Formatter};

use super::{
    integer::{Integer, IntegerRing},
    EuclideanDomain, Field, Ring,
};

/// The modular ring `Z / pZ`. Elements are stored as [Integer]s
/// in the symmetric range `(-p/2, p/2]`.
///
/// This ring also implements `Field`. The user *must* make sure
/// to only use field features such as inverses when `p` is prime
/// or the input is coprime to `p`.
#[derive(Clone, PartialEq, Debug)]
pub struct IntegerMod(Integer);

impl IntegerMod {
    pub fn new(p: Integer) -> IntegerMod {
        assert!(p > Integer::one(), "Modulus must be larger than 1, got {}", p);
        IntegerMod(p)
    }

    /// Map an integer to its symmetric representative in the ring.
    pub fn to_element(&self, a: &Integer) -> Integer {
        a.symmetric_mod(&self.0)
    }
}

impl Display for IntegerMod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, " % {}", self.0)
    }
}

impl Ring for IntegerMod {
    type Element = Integer;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (a + b).symmetric_mod(&self.0)
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (a - b).symmetric_mod(&self.0)
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (a * b).symmetric_mod(&self.0)
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, b);
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = (&*a + &(b * c)).symmetric_mod(&self.0);
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = (&*a - &(b * c)).symmetric_mod(&self.0);
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        (-a).symmetric_mod(&self.0)
    }

    fn zero(&self) -> Self::Element {
        Integer::zero()
    }

    fn one(&self) -> Self::Element {
        // the symmetric representative of 1 is 1 for any modulus larger than 1
        Integer::one()
    }

    fn pow(&self, b: &Self::Element, mut e: u64) -> Self::Element {
        let mut x = b.symmetric_mod(&self.0);
        let mut y = self.one();
        while e != 0 {
            if e % 2 == 1 {
                y = self.mul(&y, &x);
            }

            x = self.mul(&x, &x);
            e /= 2;
        }

        y
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn one_is_gcd_unit() -> bool {
        true
    }

    fn is_characteristic_zero(&self) -> bool {
        false
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        IntegerRing::new().sample(rng, range).symmetric_mod(&self.0)
    }
}

impl EuclideanDomain for IntegerMod {
    fn rem(&self, _: &Self::Element, _: &Self::Element) -> Self::Element {
        Integer::zero()
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (self.mul(a, &self.inv(b)), Integer::zero())
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        if a.is_zero() && b.is_zero() {
            Integer::zero()
        } else {
            Integer::one()
        }
    }
}

impl Field for IntegerMod {
    #[inline]
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.mul(a, &self.inv(b))
    }

    #[inline]
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, &self.inv(b));
    }

    /// Compute the inverse when `a` and the modulus are coprime,
    /// otherwise panic.
    fn inv(&self, a: &Self::Element) -> Self::Element {
        assert!(!a.is_zero(), "0 is not invertible");
        self.to_element(&a.mod_inverse(&self.0))
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{integer::Integer, Field, Ring};

    use super::IntegerMod;

    #[test]
    fn symmetric_arithmetic() {
        let field = IntegerMod::new(Integer::from(17));

        assert_eq!(field.add(&Integer::from(8), &Integer::from(8)), -1);
        assert_eq!(field.mul(&Integer::from(5), &Integer::from(7)), 1);
        assert_eq!(field.neg(&Integer::from(8)), -8);
        assert_eq!(field.pow(&Integer::from(3), 16), 1);
    }

    #[test]
    fn inverse() {
        let field = IntegerMod::new(Integer::from(4294967291u64));
        for a in [-5i64, 2, 1234567, -2147483645] {
            let a = Integer::from(a);
            let inv = field.inv(&a);
            assert!(field.is_one(&field.mul(&a, &inv)));
        }
    }

    #[test]
    #[should_panic]
    fn zero_is_not_invertible() {
        IntegerMod::new(Integer::from(7)).inv(&Integer::zero());
    }
}
