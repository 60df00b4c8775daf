use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use crate::{Error, Integer, IntOps, IsSquare, QuadInt};

// The ring Z[x], where x is a root of X^2 - P X + Q.
//
// By the rational roots theorem any rational root of the polynomial is an
// integer, so it is irreducible over Z iff its discriminant
//
//   D = P^2 - 4Q
//
// is not a perfect square. Only then does Z[x] extend Z.

#[derive(Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::Debug)]
#[display("Z[{}]", symbol)]
#[debug("Z[{}; P = {}, Q = {}]", symbol, p, q)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
struct RingRepr<I> {
    p: I,
    q: I,
    symbol: String,
}

#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RingRepr<I>", into = "RingRepr<I>"))]
pub struct QuadRing<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    repr: Arc<RingRepr<I>>,
}

impl<I> QuadRing<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    pub fn new(p: impl Into<I>, q: impl Into<I>) -> Result<Self, Error> {
        Self::with_symbol(p, q, "x")
    }

    pub fn with_symbol(p: impl Into<I>, q: impl Into<I>, symbol: &str) -> Result<Self, Error> {
        let (p, q) = (p.into(), q.into());
        let disc = Self::disc(&p, &q);

        if disc.is_square() {
            return Err(Error::Reducible {
                p: p.to_string(),
                q: q.to_string(),
                disc: disc.to_string(),
            })
        }

        let repr = RingRepr { p, q, symbol: symbol.to_string() };
        Ok(Self { repr: Arc::new(repr) })
    }

    fn disc(p: &I, q: &I) -> I {
        p * p - I::from(4) * q
    }

    pub fn p(&self) -> &I {
        &self.repr.p
    }

    pub fn q(&self) -> &I {
        &self.repr.q
    }

    pub fn symbol(&self) -> &str {
        &self.repr.symbol
    }

    pub fn discriminant(&self) -> I {
        Self::disc(self.p(), self.q())
    }

    pub fn elem(&self, a: impl Into<I>, b: impl Into<I>) -> QuadInt<I> {
        QuadInt::new(self.clone(), a.into(), b.into())
    }

    pub fn embed(&self, n: impl Into<I>) -> QuadInt<I> {
        self.elem(n, I::zero())
    }

    pub fn gen(&self) -> QuadInt<I> {
        self.elem(I::zero(), I::one())
    }

    pub fn zero(&self) -> QuadInt<I> {
        self.elem(I::zero(), I::zero())
    }

    pub fn one(&self) -> QuadInt<I> {
        self.elem(I::one(), I::zero())
    }

    pub fn parse(&self, s: &str) -> Result<QuadInt<I>, Error>
    where I: FromStr {
        let s = s.trim();

        if let Ok(a) = s.parse::<I>() {
            return Ok(self.embed(a))
        }

        let r = regex::Regex::new(r"^\((.+),\s*(.+)\)$").unwrap();
        if let Some(c) = r.captures(s) {
            if let (Ok(a), Ok(b)) = (c[1].trim().parse::<I>(), c[2].trim().parse::<I>()) {
                return Ok(self.elem(a, b))
            }
        }

        Err(Error::Parse {
            input: s.to_string(),
            ring: format!("{self:?}"),
        })
    }
}

impl<I> PartialEq for QuadRing<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.repr, &other.repr) || self.repr == other.repr
    }
}

impl<I> Eq for QuadRing<I>
where I: Integer, for<'x> &'x I: IntOps<I> {}

impl<I> Hash for QuadRing<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state)
    }
}

impl<I> Display for QuadRing<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.repr, f)
    }
}

impl<I> Debug for QuadRing<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.repr, f)
    }
}

#[cfg(feature = "serde")]
impl<I> TryFrom<RingRepr<I>> for QuadRing<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    type Error = Error;

    fn try_from(repr: RingRepr<I>) -> Result<Self, Error> {
        Self::with_symbol(repr.p, repr.q, &repr.symbol)
    }
}

#[cfg(feature = "serde")]
impl<I> From<QuadRing<I>> for RingRepr<I>
where I: Integer, for<'x> &'x I: IntOps<I> {
    fn from(ring: QuadRing<I>) -> Self {
        ring.repr.as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use super::*;

    #[test]
    fn validate() {
        assert!(QuadRing::<i32>::new(1, -1).is_ok()); // D = 5
        assert!(QuadRing::<i32>::new(0, 1).is_ok());  // D = -4
        assert!(QuadRing::<i32>::new(0, -2).is_ok()); // D = 8
        assert!(QuadRing::<i32>::new(2, 1).is_err()); // D = 0
        assert!(QuadRing::<i32>::new(3, 2).is_err()); // D = 1
        assert!(QuadRing::<i32>::new(0, -1).is_err()); // D = 4
    }

    #[test]
    fn validate_err() {
        let e = QuadRing::<i32>::new(2, 1).unwrap_err();
        assert_eq!(e, Error::Reducible {
            p: "2".to_string(),
            q: "1".to_string(),
            disc: "0".to_string(),
        });
        assert_eq!(
            e.to_string(),
            "x^2 - P*x + Q with P = 2, Q = 1 is not irreducible (discriminant 0 is a square)"
        );
    }

    #[test]
    fn validate_bigint() {
        assert!(QuadRing::<BigInt>::new(0, 1).is_ok());
        assert!(QuadRing::<BigInt>::new(2, 1).is_err());
    }

    #[test]
    fn discriminant() {
        let r = QuadRing::<i32>::new(1, -1).unwrap();
        assert_eq!(r.discriminant(), 5);

        let r = QuadRing::<i32>::new(0, 1).unwrap();
        assert_eq!(r.discriminant(), -4);
    }

    #[test]
    fn eq() {
        let r1 = QuadRing::<i32>::new(1, -1).unwrap();
        let r2 = r1.clone();
        let r3 = QuadRing::<i32>::new(1, -1).unwrap();
        let r4 = QuadRing::<i32>::new(0, 1).unwrap();
        let r5 = QuadRing::<i32>::with_symbol(1, -1, "y").unwrap();

        assert_eq!(r1, r2);
        assert_eq!(r1, r3);
        assert_ne!(r1, r4);
        assert_ne!(r1, r5);
    }

    #[test]
    fn hash() {
        use std::collections::HashSet;

        let s: HashSet<_> = [
            QuadRing::<i32>::new(1, -1).unwrap(),
            QuadRing::<i32>::new(1, -1).unwrap(),
            QuadRing::<i32>::new(0, 1).unwrap(),
        ].into_iter().collect();

        assert_eq!(s.len(), 2);
    }

    #[test]
    fn display() {
        let r = QuadRing::<i32>::new(0, 1).unwrap();
        assert_eq!(format!("{r}"), "Z[x]");

        let r = QuadRing::<i32>::with_symbol(1, -1, "phi").unwrap();
        assert_eq!(format!("{r}"), "Z[phi]");
    }

    #[test]
    fn debug() {
        let r = QuadRing::<i32>::new(1, -1).unwrap();
        assert_eq!(format!("{r:?}"), "Z[x; P = 1, Q = -1]");
    }

    #[test]
    fn factory() {
        let r = QuadRing::<i64>::new(0, 1).unwrap();
        assert_eq!(r.zero().pair(), (&0, &0));
        assert_eq!(r.one().pair(), (&1, &0));
        assert_eq!(r.gen().pair(), (&0, &1));
        assert_eq!(r.embed(7).pair(), (&7, &0));
        assert_eq!(r.elem(3, -2).pair(), (&3, &-2));
    }

    #[test]
    fn parse() {
        let r = QuadRing::<i32>::new(0, 1).unwrap();

        assert_eq!(r.parse("5"), Ok(r.embed(5)));
        assert_eq!(r.parse("-5"), Ok(r.embed(-5)));
        assert_eq!(r.parse("(3, -2)"), Ok(r.elem(3, -2)));
        assert_eq!(r.parse("(3,-2)"), Ok(r.elem(3, -2)));
        assert!(r.parse("x").is_err());
        assert!(r.parse("(1, 2, 3)").is_err());
        assert!(r.parse("").is_err());
    }

    #[test]
    fn parse_bigint() {
        let r = QuadRing::<BigInt>::new(0, -2).unwrap();
        let z = r.parse("(340282366920938463463374607431768211456, -1)").unwrap(); // 2^128
        let want: BigInt = "340282366920938463463374607431768211456".parse().unwrap();
        assert_eq!(z.pair(), (&want, &BigInt::from(-1)));
    }

    #[test]
    fn check_send_sync() {
        fn check<T: Send + Sync>() {}
        check::<QuadRing<i64>>();
        check::<QuadRing<BigInt>>();
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() {
        let r = QuadRing::<i32>::new(1, -1).unwrap();
        let ser = serde_json::to_string(&r).unwrap();
        let des = serde_json::from_str(&ser).unwrap();
        assert_eq!(r, des);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserialize_validates() {
        let des = serde_json::from_str::<QuadRing<i32>>(r#"{"p":2,"q":1,"symbol":"x"}"#);
        assert!(des.is_err());
    }
}
