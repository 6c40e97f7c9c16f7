use crate::{
    numeric::Numeric,
    promote::{Promote, PromoteFold, Promoted, PromotedAll},
    vector::FixedVector,
};

/// Element type of [`weighted_sum`]: `T1` with `U1`, then `T2` with `U2`,
/// then the two results.
pub type WeightedSum<T1, U1, T2, U2> = Promoted<Promoted<T1, U1>, Promoted<T2, U2>>;

/// Computes `alpha * v1 + beta * v2` in the common type of all four
/// operand types.
pub fn weighted_sum<T1, U1, T2, U2, const N: usize>(
    v1: FixedVector<T1, N>,
    alpha: U1,
    v2: FixedVector<T2, N>,
    beta: U2,
) -> FixedVector<WeightedSum<T1, U1, T2, U2>, N>
where
    T1: Promote<U1>,
    T2: Promote<U2>,
    U1: Numeric,
    U2: Numeric,
    Promoted<T1, U1>: Promote<Promoted<T2, U2>>,
{
    let alpha: WeightedSum<T1, U1, T2, U2> = alpha.cast();
    let beta: WeightedSum<T1, U1, T2, U2> = beta.cast();
    let (v1, v2) = (v1.into_array(), v2.into_array());
    FixedVector::from_fn(|i| {
        alpha * v1[i].cast::<WeightedSum<T1, U1, T2, U2>>()
            + beta * v2[i].cast::<WeightedSum<T1, U1, T2, U2>>()
    })
}

/// A tuple of two or more vectors that can be concatenated.
pub trait VectorList {
    type Elem: Numeric;
    const DIMENSION: usize;

    /// Writes every element, in argument order, into `out`, which must hold
    /// exactly `DIMENSION` elements.
    fn write_into(self, out: &mut [Self::Elem]);
}

macro_rules! vector_list {
    ( $( $t:ident $n:ident $idx:tt ),+ ) => {
        impl<$( $t: Numeric, const $n: usize ),+> VectorList for ($( FixedVector<$t, $n>, )+)
        where
            ($( $t, )+): PromoteFold,
        {
            type Elem = PromotedAll<($( $t, )+)>;
            const DIMENSION: usize = 0 $( + $n )+;

            fn write_into(self, out: &mut [Self::Elem]) {
                let mut slots = out.iter_mut();
                $(
                    for (val, slot) in self.$idx.into_iter().zip(slots.by_ref()) {
                        *slot = val.cast();
                    }
                )+
                debug_assert!(slots.next().is_none());
            }
        }
    };
}

vector_list!(A NA 0, B NB 1);
vector_list!(A NA 0, B NB 1, C NC 2);
vector_list!(A NA 0, B NB 1, C NC 2, D ND 3);
vector_list!(A NA 0, B NB 1, C NC 2, D ND 3, E NE 4);
vector_list!(A NA 0, B NB 1, C NC 2, D ND 3, E NE 4, F NF 5);
vector_list!(A NA 0, B NB 1, C NC 2, D ND 3, E NE 4, F NF 5, G NG 6);
vector_list!(A NA 0, B NB 1, C NC 2, D ND 3, E NE 4, F NF 5, G NG 6, H NH 7);

/// Concatenates a tuple of vectors end to end. The element type is the
/// common type of all inputs; `M` must be the sum of their dimensions.
pub fn concat<L: VectorList, const M: usize>(vectors: L) -> FixedVector<L::Elem, M> {
    const {
        assert!(
            L::DIMENSION == M,
            "concatenated dimension must be the sum of the inputs"
        );
    };
    let mut out = FixedVector::<L::Elem, M>::zeros();
    vectors.write_into(out.as_mut_slice());
    out
}

/// A tuple of scalars that becomes one vector element per tuple field.
pub trait VectorArgs: PromoteFold {
    type Vector<V: Numeric>;

    fn cast_all<V: Numeric>(self) -> Self::Vector<V>;
}

macro_rules! vector_args {
    ( $len:literal; $( $t:ident $idx:tt ),+ ) => {
        impl<$( $t: Numeric ),+> VectorArgs for ($( $t, )+)
        where
            ($( $t, )+): PromoteFold,
        {
            type Vector<V: Numeric> = FixedVector<V, $len>;

            fn cast_all<V: Numeric>(self) -> Self::Vector<V> {
                FixedVector::from_array([$( self.$idx.cast() ),+])
            }
        }
    };
}

vector_args!(1; A 0);
vector_args!(2; A 0, B 1);
vector_args!(3; A 0, B 1, C 2);
vector_args!(4; A 0, B 1, C 2, D 3);
vector_args!(5; A 0, B 1, C 2, D 3, E 4);
vector_args!(6; A 0, B 1, C 2, D 3, E 4, F 5);
vector_args!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
vector_args!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

/// Builds a vector from a tuple of scalars, casting each one to `T`.
pub fn make_vector<T: Numeric, A: VectorArgs>(args: A) -> A::Vector<T> {
    args.cast_all()
}

/// Builds a vector from a tuple of scalars using their common type.
pub fn build_vector<A: VectorArgs>(args: A) -> A::Vector<PromotedAll<A>> {
    args.cast_all()
}

/// `make_vector!(f64; 1, 2u8, 3.5f32)` builds a `FixedVector<f64, 3>`.
#[macro_export]
macro_rules! make_vector {
    ( $t:ty; $( $x:expr ),+ $(,)? ) => {
        $crate::combine::make_vector::<$t, _>(($( $x, )+))
    };
}

/// `build_vector!(1i32, 2.5f64)` builds a `FixedVector<f64, 2>`.
#[macro_export]
macro_rules! build_vector {
    ( $( $x:expr ),+ $(,)? ) => {
        $crate::combine::build_vector(($( $x, )+))
    };
}
