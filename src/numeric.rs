use crate::errors::VectorError;
use num::traits::AsPrimitive;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Element types a [`FixedVector`](crate::vector::FixedVector) can hold.
///
/// Every numeric type can be cast to every other one with `as` semantics,
/// which is what the supertrait list spells out.
pub trait Numeric:
    num::Num
    + Copy
    + PartialOrd
    + Default
    + Debug
    + Display
    + FromStr
    + Send
    + Sync
    + AsPrimitive<i8>
    + AsPrimitive<i16>
    + AsPrimitive<i32>
    + AsPrimitive<i64>
    + AsPrimitive<i128>
    + AsPrimitive<u8>
    + AsPrimitive<u16>
    + AsPrimitive<u32>
    + AsPrimitive<u64>
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + 'static
{
    fn cast_from<S: Numeric>(value: S) -> Self;

    fn cast<U: Numeric>(self) -> U {
        U::cast_from(self)
    }

    /// Checked arithmetic. Integer types report overflow and zero divisors,
    /// floating point types follow IEEE 754 and never fail.
    fn try_add(self, rhs: Self) -> Result<Self, VectorError>;

    fn try_sub(self, rhs: Self) -> Result<Self, VectorError>;

    fn try_mul(self, rhs: Self) -> Result<Self, VectorError>;

    fn try_div(self, rhs: Self) -> Result<Self, VectorError>;
}

macro_rules! integer_numeric {
    ( $( $t:ty ),* ) => {
        $(
            impl Numeric for $t {
                fn cast_from<S: Numeric>(value: S) -> Self {
                    AsPrimitive::<$t>::as_(value)
                }

                fn try_add(self, rhs: Self) -> Result<Self, VectorError> {
                    self.checked_add(rhs).ok_or(VectorError::Overflow)
                }

                fn try_sub(self, rhs: Self) -> Result<Self, VectorError> {
                    self.checked_sub(rhs).ok_or(VectorError::Overflow)
                }

                fn try_mul(self, rhs: Self) -> Result<Self, VectorError> {
                    self.checked_mul(rhs).ok_or(VectorError::Overflow)
                }

                fn try_div(self, rhs: Self) -> Result<Self, VectorError> {
                    if rhs == 0 {
                        return Err(VectorError::DivideByZero);
                    }
                    self.checked_div(rhs).ok_or(VectorError::DivisionOverflow)
                }
            }
        )*
    };
}

macro_rules! float_numeric {
    ( $( $t:ty ),* ) => {
        $(
            impl Numeric for $t {
                fn cast_from<S: Numeric>(value: S) -> Self {
                    AsPrimitive::<$t>::as_(value)
                }

                fn try_add(self, rhs: Self) -> Result<Self, VectorError> {
                    Ok(self + rhs)
                }

                fn try_sub(self, rhs: Self) -> Result<Self, VectorError> {
                    Ok(self - rhs)
                }

                fn try_mul(self, rhs: Self) -> Result<Self, VectorError> {
                    Ok(self * rhs)
                }

                fn try_div(self, rhs: Self) -> Result<Self, VectorError> {
                    Ok(self / rhs)
                }
            }
        )*
    };
}

integer_numeric!(i8, i16, i32, i64, i128, u8, u16, u32, u64);
float_numeric!(f32, f64);
