use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::Signed;

pub trait IntOps<T = Self>:
    Sized +
    Add<T, Output = T> + for<'a> Add<&'a T, Output = T> +
    Sub<T, Output = T> + for<'a> Sub<&'a T, Output = T> +
    Mul<T, Output = T> + for<'a> Mul<&'a T, Output = T> +
    Neg<Output = T>
{}

pub trait Integer:
    IntOps +
    AddAssign + for<'a> AddAssign<&'a Self> +
    SubAssign + for<'a> SubAssign<&'a Self> +
    MulAssign + for<'a> MulAssign<&'a Self> +
    Clone + Default + Eq + Ord + Hash + Debug + Display +
    Signed + Roots + From<i32> +
    Send + Sync + 'static
where for<'a> &'a Self: IntOps<Self> {}

pub trait IsSquare {
    fn is_square(&self) -> bool;
}

impl<T> IsSquare for T
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn is_square(&self) -> bool {
        if self.is_negative() {
            false
        } else if self.is_zero() {
            true
        } else {
            // r = floor(√n), so n is a square iff r^2 = n
            let r = self.sqrt();
            &r * &r == *self
        }
    }
}

macro_rules! impl_ops {
    ($trait:ident, $type:ty) => {
        impl $trait for $type {}
        impl<'a> $trait<$type> for &'a $type {}
    };
}

macro_rules! impl_integer {
    ($type:ident) => {
        impl_ops!(IntOps, $type);
        impl Integer for $type {}
    }
}

impl_integer!(i32);
impl_integer!(i64);
impl_integer!(i128);
impl_integer!(BigInt);
