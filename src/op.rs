//! Arithmetic operators for [`FixedVector`].
//!
//! Both operands are cast to their promoted element type before the
//! operation. Division returns a `Result` for every element type: integer
//! division reports zero divisors and overflow, floating point division
//! follows IEEE 754 and never fails. `+ - *` use the primitive operators;
//! `try_add`, `try_sub`, `try_mul` and `try_mul_scalar` report integer
//! overflow instead.

use crate::{
    errors::VectorError,
    numeric::Numeric,
    promote::{Promote, Promoted},
    vector::FixedVector,
};
use std::ops::{Add, Div, Mul, Sub};

impl<T: Numeric, const N: usize> FixedVector<T, N> {
    pub fn add_scalar<S: Numeric>(self, rhs: S) -> FixedVector<Promoted<T, S>, N>
    where
        T: Promote<S>,
    {
        let rhs: Promoted<T, S> = rhs.cast();
        self.map(|x| x.cast::<Promoted<T, S>>() + rhs)
    }

    pub fn sub_scalar<S: Numeric>(self, rhs: S) -> FixedVector<Promoted<T, S>, N>
    where
        T: Promote<S>,
    {
        let rhs: Promoted<T, S> = rhs.cast();
        self.map(|x| x.cast::<Promoted<T, S>>() - rhs)
    }

    pub fn mul_scalar<S: Numeric>(self, rhs: S) -> FixedVector<Promoted<T, S>, N>
    where
        T: Promote<S>,
    {
        let rhs: Promoted<T, S> = rhs.cast();
        self.map(|x| x.cast::<Promoted<T, S>>() * rhs)
    }

    pub fn div_scalar<S: Numeric>(
        self,
        rhs: S,
    ) -> Result<FixedVector<Promoted<T, S>, N>, VectorError>
    where
        T: Promote<S>,
    {
        self.try_scalar_map(rhs, Numeric::try_div)
    }

    pub fn try_mul_scalar<S: Numeric>(
        self,
        rhs: S,
    ) -> Result<FixedVector<Promoted<T, S>, N>, VectorError>
    where
        T: Promote<S>,
    {
        self.try_scalar_map(rhs, Numeric::try_mul)
    }

    pub fn try_add<U: Numeric>(
        self,
        rhs: FixedVector<U, N>,
    ) -> Result<FixedVector<Promoted<T, U>, N>, VectorError>
    where
        T: Promote<U>,
    {
        self.try_zip_map(rhs, Numeric::try_add)
    }

    pub fn try_sub<U: Numeric>(
        self,
        rhs: FixedVector<U, N>,
    ) -> Result<FixedVector<Promoted<T, U>, N>, VectorError>
    where
        T: Promote<U>,
    {
        self.try_zip_map(rhs, Numeric::try_sub)
    }

    pub fn try_mul<U: Numeric>(
        self,
        rhs: FixedVector<U, N>,
    ) -> Result<FixedVector<Promoted<T, U>, N>, VectorError>
    where
        T: Promote<U>,
    {
        self.try_zip_map(rhs, Numeric::try_mul)
    }

    fn try_scalar_map<S: Numeric>(
        self,
        rhs: S,
        mut f: impl FnMut(Promoted<T, S>, Promoted<T, S>) -> Result<Promoted<T, S>, VectorError>,
    ) -> Result<FixedVector<Promoted<T, S>, N>, VectorError>
    where
        T: Promote<S>,
    {
        let rhs: Promoted<T, S> = rhs.cast();
        let mut out = FixedVector::<Promoted<T, S>, N>::zeros();
        for (slot, x) in out.iter_mut().zip(self) {
            *slot = f(x.cast::<Promoted<T, S>>(), rhs)?;
        }

        Ok(out)
    }
}

impl<T, U, const N: usize> Add<FixedVector<U, N>> for FixedVector<T, N>
where
    T: Promote<U>,
    U: Numeric,
{
    type Output = FixedVector<Promoted<T, U>, N>;

    fn add(self, rhs: FixedVector<U, N>) -> Self::Output {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<T, U, const N: usize> Sub<FixedVector<U, N>> for FixedVector<T, N>
where
    T: Promote<U>,
    U: Numeric,
{
    type Output = FixedVector<Promoted<T, U>, N>;

    fn sub(self, rhs: FixedVector<U, N>) -> Self::Output {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<T, U, const N: usize> Mul<FixedVector<U, N>> for FixedVector<T, N>
where
    T: Promote<U>,
    U: Numeric,
{
    type Output = FixedVector<Promoted<T, U>, N>;

    fn mul(self, rhs: FixedVector<U, N>) -> Self::Output {
        self.zip_map(rhs, |a, b| a * b)
    }
}

impl<T, U, const N: usize> Div<FixedVector<U, N>> for FixedVector<T, N>
where
    T: Promote<U>,
    U: Numeric,
{
    type Output = Result<FixedVector<Promoted<T, U>, N>, VectorError>;

    fn div(self, rhs: FixedVector<U, N>) -> Self::Output {
        self.try_zip_map(rhs, Numeric::try_div)
    }
}

macro_rules! scalar_ops {
    ( $( $s:ty ),* ) => {
        $(
            impl<T, const N: usize> Add<$s> for FixedVector<T, N>
            where
                T: Promote<$s>,
            {
                type Output = FixedVector<Promoted<T, $s>, N>;

                fn add(self, rhs: $s) -> Self::Output {
                    self.add_scalar(rhs)
                }
            }

            impl<T, const N: usize> Sub<$s> for FixedVector<T, N>
            where
                T: Promote<$s>,
            {
                type Output = FixedVector<Promoted<T, $s>, N>;

                fn sub(self, rhs: $s) -> Self::Output {
                    self.sub_scalar(rhs)
                }
            }

            impl<T, const N: usize> Mul<$s> for FixedVector<T, N>
            where
                T: Promote<$s>,
            {
                type Output = FixedVector<Promoted<T, $s>, N>;

                fn mul(self, rhs: $s) -> Self::Output {
                    self.mul_scalar(rhs)
                }
            }

            impl<T, const N: usize> Div<$s> for FixedVector<T, N>
            where
                T: Promote<$s>,
            {
                type Output = Result<FixedVector<Promoted<T, $s>, N>, VectorError>;

                fn div(self, rhs: $s) -> Self::Output {
                    self.div_scalar(rhs)
                }
            }
        )*
    };
}

scalar_ops!(i8, i16, i32, i64, i128, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promote::same_type;

    #[test]
    fn test_vector_arithmetic() {
        let v1 = FixedVector::from([1i32, 2, 3]);
        let v2 = FixedVector::from([4i32, 5, 6]);

        assert_eq!(v1 + v2, FixedVector::from([5, 7, 9]));
        assert_eq!(v1 - v2, FixedVector::from([-3, -3, -3]));
        assert_eq!(v1 * v2, FixedVector::from([4, 10, 18]));
        assert_eq!(v2 / v1, Ok(FixedVector::from([4, 2, 2])));
    }

    #[test]
    fn test_scalar_arithmetic() {
        let v1 = FixedVector::from([1i32, 2, 3]);

        assert_eq!(v1 * 2i32, FixedVector::from([2, 4, 6]));
        assert_eq!(v1 + 1i32, FixedVector::from([2, 3, 4]));
        assert_eq!(v1 - 1i32, FixedVector::from([0, 1, 2]));
        assert_eq!(v1 / 2i32, Ok(FixedVector::from([0, 1, 1])));
    }

    #[test]
    fn test_promotion() {
        let v = FixedVector::from([1i32, 2, 3]);

        let halves = (v / 2.0f64).unwrap();
        assert_eq!(halves, FixedVector::from([0.5, 1.0, 1.5]));

        let w = v + FixedVector::from([0.5f32, 0.5, 0.5]);
        assert!(same_type::<FixedVector<f32, 3>, FixedVector<Promoted<i32, f32>, 3>>());
        assert_eq!(w, FixedVector::from([1.5f32, 2.5, 3.5]));

        let u: FixedVector<i16, 2> = FixedVector::from([200u8, 255]) - FixedVector::from([-1i8, 100]);
        assert_eq!(u, FixedVector::from([201, 155]));

        let big: FixedVector<i64, 1> = FixedVector::from([u32::MAX]) + 1i32;
        assert_eq!(big, FixedVector::from([u32::MAX as i64 + 1]));
    }

    #[test]
    fn test_integer_division_by_zero() {
        let v = FixedVector::from([1i32, 2, 3]);

        assert_eq!(v / 0i32, Err(VectorError::DivideByZero));
        assert_eq!(v / FixedVector::from([1i32, 0, 1]), Err(VectorError::DivideByZero));
        assert_eq!(
            FixedVector::from([i32::MIN]) / -1i32,
            Err(VectorError::DivisionOverflow)
        );
    }

    #[test]
    fn test_float_division_by_zero() {
        let v = FixedVector::from([1.0f64, -1.0, 0.0]);
        let r = (v / 0.0f64).unwrap();

        assert_eq!(r[0], f64::INFINITY);
        assert_eq!(r[1], f64::NEG_INFINITY);
        assert!(r[2].is_nan());

        // integer vector, float divisor: the float policy applies
        let r = (FixedVector::from([1i32]) / 0.0f32).unwrap();
        assert_eq!(r[0], f32::INFINITY);
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = FixedVector::from([i64::MAX, 0, 1]);
        let one = FixedVector::from([1i64, 0, 1]);

        assert_eq!(big.try_add(one), Err(VectorError::Overflow));
        assert_eq!(big.try_sub(one), Ok(FixedVector::from([i64::MAX - 1, 0, 0])));
        assert_eq!(
            FixedVector::from([i64::MIN]).try_sub(FixedVector::from([1i64])),
            Err(VectorError::Overflow)
        );
        assert_eq!(big.try_mul(one), Ok(big));
        assert_eq!(big.try_mul_scalar(2i64), Err(VectorError::Overflow));
        assert_eq!(one.try_mul_scalar(-3i8), Ok(FixedVector::from([-3i64, 0, -3])));

        // promotion happens before the check, so u8 + u8 past 255 only
        // overflows when the promoted type is still u8
        let bytes = FixedVector::from([200u8]);
        assert_eq!(bytes.try_add(FixedVector::from([100u8])), Err(VectorError::Overflow));
        assert_eq!(bytes.try_add(FixedVector::from([100i8])), Ok(FixedVector::from([300i16])));

        let floats = FixedVector::from([f64::MAX]);
        assert_eq!(floats.try_add(floats), Ok(FixedVector::from([f64::INFINITY])));
    }

    #[test]
    fn test_scalar_methods() {
        let v = FixedVector::from([2u8, 4]);

        assert_eq!(v.mul_scalar(-1i8), FixedVector::<i16, 2>::from([-2, -4]));
        assert_eq!(v.add_scalar(0.5f64), FixedVector::from([2.5, 4.5]));
        assert_eq!(v.div_scalar(2u8), Ok(FixedVector::from([1u8, 2])));
    }
}
