use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use auto_impl_ops::auto_ops;
use num_bigint::BigInt;
use num_traits::Pow;

use crate::{Error, Integer, IntOps, QuadRing};

#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct QuadInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    ring: QuadRing<I>,
    rat: I,
    irr: I,
}

// An element of Z[x] is stored as the pair (a, b) of
//
//   z = a + bx,
//
// where x satisfies x^2 = Px - Q in the parent ring.

impl<I> QuadInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    pub(crate) fn new(ring: QuadRing<I>, rat: I, irr: I) -> Self {
        Self { ring, rat, irr }
    }

    pub fn ring(&self) -> &QuadRing<I> {
        &self.ring
    }

    pub fn rat(&self) -> &I {
        &self.rat
    }

    pub fn irr(&self) -> &I {
        &self.irr
    }

    pub fn pair(&self) -> (&I, &I) {
        (&self.rat, &self.irr)
    }

    pub fn pair_into(self) -> (I, I) {
        (self.rat, self.irr)
    }

    pub fn to_int(&self) -> I {
        self.rat.clone()
    }

    pub fn is_rational(&self) -> bool {
        self.irr.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.rat.is_zero() && self.irr.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.rat.is_one() && self.irr.is_zero()
    }

    pub fn same_ring(&self, other: &Self) -> bool {
        self.ring == other.ring
    }

    fn check_ring(&self, other: &Self) -> Result<(), Error> {
        if self.same_ring(other) {
            Ok(())
        } else {
            Err(Error::IncompatibleRings {
                lhs: format!("{:?}", self.ring),
                rhs: format!("{:?}", other.ring),
            })
        }
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_ring(rhs)?;
        Ok(self.add_raw(rhs))
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_ring(rhs)?;
        Ok(self.sub_raw(rhs))
    }

    pub fn try_mul(&self, rhs: &Self) -> Result<Self, Error> {
        self.check_ring(rhs)?;
        Ok(self.mul_raw(rhs))
    }

    pub fn try_eq(&self, rhs: &Self) -> Result<bool, Error> {
        self.check_ring(rhs)?;
        Ok(self.rat == rhs.rat && self.irr == rhs.irr)
    }

    pub fn try_pow(&self, n: i64) -> Result<Self, Error> {
        if n < 0 {
            return Err(Error::NegativeExponent { exp: n })
        }
        Ok(self.pow_unsigned(n as u64))
    }

    fn add_raw(&self, rhs: &Self) -> Self {
        let (a, b) = self.pair();
        let (c, d) = rhs.pair();
        Self::new(self.ring.clone(), a + c, b + d)
    }

    fn sub_raw(&self, rhs: &Self) -> Self {
        let (a, b) = self.pair();
        let (c, d) = rhs.pair();
        Self::new(self.ring.clone(), a - c, b - d)
    }

    // x^2 = Px - Q gives
    //
    //    (a + bx)(c + dx)
    //  = ac + (ad + bc)x + bd x^2
    //  = (ac - bdQ) + (ad + bc + bdP)x.

    fn mul_raw(&self, rhs: &Self) -> Self {
        let (a, b) = self.pair();
        let (c, d) = rhs.pair();

        if b.is_zero() {
            return Self::new(self.ring.clone(), a * c, a * d)
        } else if d.is_zero() {
            return Self::new(self.ring.clone(), a * c, b * c)
        }

        let (p, q) = (self.ring.p(), self.ring.q());
        let x = a * c - b * d * q;
        let y = a * d + b * c + b * d * p;
        Self::new(self.ring.clone(), x, y)
    }

    // binary exponentiation, skipping the final squaring
    fn pow_unsigned(&self, n: u64) -> Self {
        if n == 0 {
            return self.ring.one()
        }

        let mut n = n;
        let mut base = self.clone();

        while n % 2 == 0 {
            base = base.mul_raw(&base);
            n /= 2;
        }

        let mut res = base.clone();
        while n > 1 {
            n /= 2;
            base = base.mul_raw(&base);
            if n % 2 == 1 {
                res = res.mul_raw(&base);
            }
        }
        res
    }

    // conjugation swaps x with the other root P - x of X^2 - PX + Q:
    //
    //   bar(a + bx) = a + b(P - x) = (a + bP) - bx.

    pub fn conj(&self) -> Self {
        let (a, b) = self.pair();
        let p = self.ring.p();
        Self::new(self.ring.clone(), a + b * p, -b)
    }

    //   N(z) = bar(z) z = (a + bP - bx)(a + bx) = a^2 + abP + b^2 Q,
    //
    // the x-part cancelling by the defining relation.

    pub fn norm(&self) -> I {
        let (a, b) = self.pair();
        let (p, q) = (self.ring.p(), self.ring.q());
        a * a + a * b * p + b * b * q
    }

    pub fn is_unit(&self) -> bool {
        self.norm().abs().is_one()
    }

    // z bar(z) = N(z), so z is invertible iff N(z) = ±1, with z^-1 = ±bar(z)
    pub fn inv(&self) -> Option<Self> {
        let n = self.norm();
        if n.is_one() {
            Some(self.conj())
        } else if (-&n).is_one() {
            Some(-self.conj())
        } else {
            None
        }
    }
}

impl<I> Display for QuadInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (a, b) = self.pair();

        if b.is_zero() {
            return write!(f, "{a}")
        }

        let m = b.abs();
        let x = self.ring.symbol();
        let irr = if m.is_one() {
            x.to_string()
        } else {
            format!("{m}*{x}")
        };

        if a.is_zero() {
            let sgn = if b.is_negative() { "-" } else { "" };
            write!(f, "{sgn}{irr}")
        } else {
            let sgn = if b.is_negative() { "-" } else { "+" };
            write!(f, "{a} {sgn} {irr}")
        }
    }
}

impl<I> Debug for QuadInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {:?}", self, self.ring)
    }
}

impl<I> Neg for QuadInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let Self { ring, rat, irr } = self;
        Self::new(ring, -rat, -irr)
    }
}

impl<I> Neg for &QuadInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Output = QuadInt<I>;

    fn neg(self) -> Self::Output {
        let (a, b) = self.pair();
        QuadInt::new(self.ring.clone(), -a, -b)
    }
}

macro_rules! impl_bin_op {
    ($trait:ident, $method:ident, $try_method:ident) => {
        #[auto_ops]
        impl<'a, 'b, I> $trait<&'b QuadInt<I>> for &'a QuadInt<I>
        where I: Integer, for<'x> &'x I: IntOps<I> {
            type Output = QuadInt<I>;

            fn $method(self, rhs: &'b QuadInt<I>) -> Self::Output {
                match self.$try_method(rhs) {
                    Ok(z) => z,
                    Err(e) => panic!("{e}"),
                }
            }
        }
    };
}

impl_bin_op!(Add, add, try_add);
impl_bin_op!(Sub, sub, try_sub);
impl_bin_op!(Mul, mul, try_mul);

#[auto_ops]
impl<I> AddAssign<&I> for QuadInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn add_assign(&mut self, rhs: &I) {
        self.rat += rhs;
    }
}

#[auto_ops]
impl<I> SubAssign<&I> for QuadInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn sub_assign(&mut self, rhs: &I) {
        self.rat -= rhs;
    }
}

#[auto_ops]
impl<I> MulAssign<&I> for QuadInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn mul_assign(&mut self, rhs: &I) {
        self.rat *= rhs;
        self.irr *= rhs;
    }
}

impl<I> PartialEq<I> for QuadInt<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn eq(&self, other: &I) -> bool {
        self.irr.is_zero() && &self.rat == other
    }
}

macro_rules! impl_int_lhs {
    ($t:ty) => {
        impl Add<QuadInt<$t>> for $t {
            type Output = QuadInt<$t>;

            fn add(self, rhs: QuadInt<$t>) -> Self::Output {
                rhs + self
            }
        }

        impl Sub<QuadInt<$t>> for $t {
            type Output = QuadInt<$t>;

            fn sub(self, rhs: QuadInt<$t>) -> Self::Output {
                -rhs + self
            }
        }

        impl Mul<QuadInt<$t>> for $t {
            type Output = QuadInt<$t>;

            fn mul(self, rhs: QuadInt<$t>) -> Self::Output {
                rhs * self
            }
        }

        impl PartialEq<QuadInt<$t>> for $t {
            fn eq(&self, other: &QuadInt<$t>) -> bool {
                other == self
            }
        }
    };
}

impl_int_lhs!(i32);
impl_int_lhs!(i64);
impl_int_lhs!(i128);
impl_int_lhs!(BigInt);

macro_rules! impl_pow_unsigned {
    ($t:ty) => {
        impl<I> Pow<$t> for &QuadInt<I>
        where I: Integer, for<'x> &'x I: IntOps<I> {
            type Output = QuadInt<I>;

            fn pow(self, n: $t) -> Self::Output {
                self.pow_unsigned(n as u64)
            }
        }
    };
}

impl_pow_unsigned!(u32);
impl_pow_unsigned!(u64);
impl_pow_unsigned!(usize);

macro_rules! impl_pow_signed {
    ($t:ty) => {
        impl<I> Pow<$t> for &QuadInt<I>
        where I: Integer, for<'x> &'x I: IntOps<I> {
            type Output = QuadInt<I>;

            fn pow(self, n: $t) -> Self::Output {
                match self.try_pow(n as i64) {
                    Ok(z) => z,
                    Err(e) => panic!("{e}"),
                }
            }
        }
    };
}

impl_pow_signed!(i32);
impl_pow_signed!(i64);
impl_pow_signed!(isize);
