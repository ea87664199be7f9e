//! Chinese remainder reconstruction over a list of moduli.

use std::fmt::{Display, Formatter};

use ahash::{HashSet, HashSetExt};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use super::integer::Integer;

/// An error in the input of a Chinese remainder reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrtError {
    NoResidues,
    NonPositiveModulus(Integer),
    DuplicateModulus(Integer),
    NotCoprime(Integer, Integer),
}

impl Display for CrtError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CrtError::NoResidues => write!(f, "No residues supplied"),
            CrtError::NonPositiveModulus(m) => write!(f, "Modulus {} is not positive", m),
            CrtError::DuplicateModulus(m) => write!(f, "Modulus {} appears more than once", m),
            CrtError::NotCoprime(m1, m2) => write!(f, "Moduli {} and {} are not coprime", m1, m2),
        }
    }
}

impl std::error::Error for CrtError {}

/// Use Garner's algorithm to reconstruct the unique `u` with `u = r_i mod m_i`
/// for all pairs `(r_i, m_i)` in `residues`. The result is in the
/// symmetric range `(-M/2, M/2]` with `M` the product of all moduli.
///
/// The moduli must be positive, distinct and pairwise coprime.
pub fn chinese_remainder(residues: &[(Integer, Integer)]) -> Result<Integer, CrtError> {
    let Some(((r0, m0), rest)) = residues.split_first() else {
        return Err(CrtError::NoResidues);
    };

    let mut seen = HashSet::with_capacity(residues.len());
    for (_, m) in residues {
        if m.is_negative() || m.is_zero() {
            return Err(CrtError::NonPositiveModulus(m.clone()));
        }
        if !seen.insert(m) {
            return Err(CrtError::DuplicateModulus(m.clone()));
        }
    }

    // mixed-radix digits, each in the symmetric range of its modulus
    let mut digits: SmallVec<[Integer; 8]> = smallvec![r0.symmetric_mod(m0)];
    let mut moduli: SmallVec<[&Integer; 8]> = smallvec![m0];

    for (r, m) in rest {
        // reciprocal of the product of the previous moduli in Z/m
        let mut prod = Integer::one();
        for mi in &moduli {
            if !mi.gcd(m).is_one() {
                return Err(CrtError::NotCoprime((*mi).clone(), m.clone()));
            }
            prod = (&prod * *mi).symmetric_mod(m);
        }

        // a product of units is a unit
        let recip = prod.mod_inverse(m);

        // evaluate the mixed-radix representation so far in Z/m
        let mut partial = Integer::zero();
        for (d, mi) in digits.iter().zip(&moduli).rev() {
            partial = (&(&partial * *mi) + d).symmetric_mod(m);
        }

        let v = (&(r - &partial) * &recip).symmetric_mod(m);
        digits.push(v);
        moduli.push(m);
    }

    // convert to standard representation
    let mut u = Integer::zero();
    let mut total = Integer::one();
    for (d, mi) in digits.iter().zip(&moduli).rev() {
        u = &(&u * *mi) + d;
        total = &total * *mi;
    }

    debug!("Reconstructed {} from {} residues", u, residues.len());

    Ok(u.symmetric_mod(&total))
}
