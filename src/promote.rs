//! Type-level numeric promotion.
//!
//! `Promote<B> for A` picks the least element type that can hold every value
//! of both `A` and `B`. The element types form a lattice (signed and unsigned
//! integers ordered by range, then `f32`, then `f64`) and the promoted type
//! is its join, so promotion is commutative and associative and a fold over
//! any number of types is order-independent.

use crate::numeric::Numeric;

pub trait Promote<Rhs: Numeric>: Numeric {
    type Output: Numeric;
}

/// The common type of `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

/// Left fold of [`Promote`] over a tuple of element types.
pub trait PromoteFold {
    type Output: Numeric;
}

/// The common type of every element type in the tuple `Ts`.
pub type PromotedAll<Ts> = <Ts as PromoteFold>::Output;

macro_rules! promote_row {
    ( $lhs:ident; $( $rhs:ident : $out:ident ),* ) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
            }
        )*
    };
}

macro_rules! promote_table {
    ( $( $lhs:ident => { $( $rhs:ident : $out:ident ),* } ),* $(,)? ) => {
        $( promote_row!($lhs; $( $rhs: $out ),*); )*
    };
}

#[rustfmt::skip]
promote_table! {
    i8 => {i8: i8, i16: i16, i32: i32, i64: i64, i128: i128, u8: i16, u16: i32, u32: i64, u64: i128, f32: f32, f64: f64},
    i16 => {i8: i16, i16: i16, i32: i32, i64: i64, i128: i128, u8: i16, u16: i32, u32: i64, u64: i128, f32: f32, f64: f64},
    i32 => {i8: i32, i16: i32, i32: i32, i64: i64, i128: i128, u8: i32, u16: i32, u32: i64, u64: i128, f32: f32, f64: f64},
    i64 => {i8: i64, i16: i64, i32: i64, i64: i64, i128: i128, u8: i64, u16: i64, u32: i64, u64: i128, f32: f32, f64: f64},
    i128 => {i8: i128, i16: i128, i32: i128, i64: i128, i128: i128, u8: i128, u16: i128, u32: i128, u64: i128, f32: f32, f64: f64},
    u8 => {i8: i16, i16: i16, i32: i32, i64: i64, i128: i128, u8: u8, u16: u16, u32: u32, u64: u64, f32: f32, f64: f64},
    u16 => {i8: i32, i16: i32, i32: i32, i64: i64, i128: i128, u8: u16, u16: u16, u32: u32, u64: u64, f32: f32, f64: f64},
    u32 => {i8: i64, i16: i64, i32: i64, i64: i64, i128: i128, u8: u32, u16: u32, u32: u32, u64: u64, f32: f32, f64: f64},
    u64 => {i8: i128, i16: i128, i32: i128, i64: i128, i128: i128, u8: u64, u16: u64, u32: u64, u64: u64, f32: f32, f64: f64},
    f32 => {i8: f32, i16: f32, i32: f32, i64: f32, i128: f32, u8: f32, u16: f32, u32: f32, u64: f32, f32: f32, f64: f64},
    f64 => {i8: f64, i16: f64, i32: f64, i64: f64, i128: f64, u8: f64, u16: f64, u32: f64, u64: f64, f32: f64, f64: f64},
}

impl<A: Numeric> PromoteFold for (A,) {
    type Output = A;
}

impl<A: Promote<B>, B: Numeric> PromoteFold for (A, B) {
    type Output = Promoted<A, B>;
}

macro_rules! promote_fold {
    ( $( $prev:ident ),+ ; $last:ident ) => {
        impl<$( $prev, )+ $last> PromoteFold for ($( $prev, )+ $last,)
        where
            ($( $prev, )+): PromoteFold,
            PromotedAll<($( $prev, )+)>: Promote<$last>,
            $last: Numeric,
        {
            type Output = Promoted<PromotedAll<($( $prev, )+)>, $last>;
        }
    };
}

promote_fold!(A, B; C);
promote_fold!(A, B, C; D);
promote_fold!(A, B, C, D; E);
promote_fold!(A, B, C, D, E; F);
promote_fold!(A, B, C, D, E, F; G);
promote_fold!(A, B, C, D, E, F, G; H);

#[cfg(test)]
pub(crate) fn same_type<A: 'static, B: 'static>() -> bool {
    std::any::TypeId::of::<A>() == std::any::TypeId::of::<B>()
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_commutes {
        ( @row $a:ident; [ $( $b:ident ),* ] ) => {
            $(
                assert!(
                    same_type::<Promoted<$a, $b>, Promoted<$b, $a>>(),
                    "{} and {} do not commute",
                    stringify!($a),
                    stringify!($b),
                );
            )*
        };
        ( $( $a:ident ),* ; $b:tt ) => {
            $( assert_commutes!(@row $a; $b); )*
        };
    }

    #[test]
    fn test_pairs() {
        assert!(same_type::<Promoted<i32, i32>, i32>());
        assert!(same_type::<Promoted<i32, f64>, f64>());
        assert!(same_type::<Promoted<u8, i8>, i16>());
        assert!(same_type::<Promoted<u32, i32>, i64>());
        assert!(same_type::<Promoted<u64, i8>, i128>());
        assert!(same_type::<Promoted<u16, u64>, u64>());
        assert!(same_type::<Promoted<i64, f32>, f32>());
        assert!(same_type::<Promoted<f32, f64>, f64>());
    }

    #[test]
    #[rustfmt::skip]
    fn test_commutative() {
        assert_commutes!(
            i8, i16, i32, i64, i128, u8, u16, u32, u64, f32, f64;
            [i8, i16, i32, i64, i128, u8, u16, u32, u64, f32, f64]
        );
    }

    #[test]
    fn test_fold() {
        assert!(same_type::<PromotedAll<(u8,)>, u8>());
        assert!(same_type::<PromotedAll<(u8, i8, u16)>, i32>());
        assert!(same_type::<PromotedAll<(i32, u32, u64)>, i128>());
        assert!(same_type::<PromotedAll<(u8, u8, u8, u8, u8, u8, u8, f32)>, f32>());
    }

    #[test]
    fn test_fold_order_independent() {
        assert!(same_type::<PromotedAll<(i8, u32, f32)>, PromotedAll<(f32, u32, i8)>>());
        assert!(same_type::<PromotedAll<(u8, i8, u16)>, PromotedAll<(u16, u8, i8)>>());
        assert!(same_type::<
            Promoted<Promoted<u16, i8>, u32>,
            Promoted<u16, Promoted<i8, u32>>,
        >());
        assert!(same_type::<
            PromotedAll<(u64, i16, f32, i128)>,
            PromotedAll<(i128, f32, i16, u64)>,
        >());
    }
}
