use crate::{
    errors::{normalize_index, VectorError},
    numeric::Numeric,
    promote::{Promote, Promoted},
};
use log::trace;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

/// A vector of `N` numeric elements, `N` being part of the type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedVector<T, const N: usize> {
    storage: [T; N],
}

impl<T: Numeric, const N: usize> FixedVector<T, N> {
    pub const DIMENSION: usize = N;

    pub const fn from_array(vals: [T; N]) -> Self {
        Self { storage: vals }
    }

    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            storage: std::array::from_fn(f),
        }
    }

    pub fn repeat(val: T) -> Self {
        Self { storage: [val; N] }
    }

    pub fn zeros() -> Self {
        Self::repeat(T::zero())
    }

    pub fn ones() -> Self {
        Self::repeat(T::one())
    }

    pub fn rand(d: impl Distribution<T>, rng: &mut impl Rng) -> Self {
        Self::from_fn(|_| rng.sample(&d))
    }

    pub fn randn(rng: &mut impl Rng) -> Self
    where
        StandardNormal: Distribution<T>,
    {
        Self::rand(StandardNormal, rng)
    }

    /// Builds a vector by casting every element of `other` to `T`.
    pub fn cast_from<U: Numeric>(other: &FixedVector<U, N>) -> Self {
        Self::from_fn(|i| other.storage[i].cast())
    }

    pub const fn dimension(&self) -> usize {
        N
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the element at `idx`, counting from the back when `idx` is
    /// negative.
    pub fn get(&self, idx: isize) -> Result<T, VectorError> {
        let i = normalize_index(idx, N)?;
        Ok(self.storage[i])
    }

    pub fn set(&mut self, idx: isize, val: T) -> Result<(), VectorError> {
        let i = normalize_index(idx, N)?;
        self.storage[i] = val;
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage
    }

    pub fn into_array(self) -> [T; N] {
        self.storage
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.storage.iter_mut()
    }

    pub fn map<R: Numeric>(self, mut f: impl FnMut(T) -> R) -> FixedVector<R, N> {
        FixedVector::from_fn(|i| f(self.storage[i]))
    }

    /// Applies `f` pairwise after casting both operands to the promoted
    /// element type.
    pub fn zip_map<U>(
        self,
        rhs: FixedVector<U, N>,
        mut f: impl FnMut(Promoted<T, U>, Promoted<T, U>) -> Promoted<T, U>,
    ) -> FixedVector<Promoted<T, U>, N>
    where
        T: Promote<U>,
        U: Numeric,
    {
        FixedVector::from_fn(|i| f(self.storage[i].cast(), rhs.storage[i].cast()))
    }

    pub fn try_zip_map<U>(
        self,
        rhs: FixedVector<U, N>,
        mut f: impl FnMut(Promoted<T, U>, Promoted<T, U>) -> Result<Promoted<T, U>, VectorError>,
    ) -> Result<FixedVector<Promoted<T, U>, N>, VectorError>
    where
        T: Promote<U>,
        U: Numeric,
    {
        let mut out = FixedVector::<Promoted<T, U>, N>::zeros();
        for (i, slot) in out.storage.iter_mut().enumerate() {
            *slot = f(self.storage[i].cast(), rhs.storage[i].cast())?;
        }

        Ok(out)
    }

    /// Truncates or zero-pads to `M` elements, keeping the leading ones.
    pub fn resize<const M: usize>(&self) -> FixedVector<T, M> {
        if M < N {
            trace!("resize from {} to {} drops {} elements", N, M, N - M);
        }
        FixedVector::from_fn(|i| if i < N { self.storage[i] } else { T::zero() })
    }

    pub fn convert<U: Numeric>(&self) -> FixedVector<U, N> {
        FixedVector::cast_from(self)
    }

    /// Takes the inclusive range `START..=END` (negative bounds count from the
    /// back). When `START > END` the elements come out in reverse order.
    ///
    /// Out-of-range bounds, or an `M` that differs from the length of the
    /// range, fail to compile.
    pub fn slice<const START: isize, const END: isize, const M: usize>(&self) -> FixedVector<T, M> {
        let (start, end) = const {
            let start = slice_bound(N, START);
            let end = slice_bound(N, END);
            assert!(
                slice_len(start, end) == M,
                "slice length does not match the output dimension"
            );
            (start, end)
        };
        self.take_range(start, end)
    }

    /// Like [`FixedVector::slice`] with bounds only known at runtime.
    pub fn try_slice<const M: usize>(
        &self,
        start: isize,
        end: isize,
    ) -> Result<FixedVector<T, M>, VectorError> {
        let start = normalize_index(start, N)?;
        let end = normalize_index(end, N)?;
        let len = slice_len(start, end);
        if len != M {
            return Err(VectorError::DimensionMismatch {
                expected: M,
                found: len,
            });
        }

        Ok(self.take_range(start, end))
    }

    fn take_range<const M: usize>(&self, start: usize, end: usize) -> FixedVector<T, M> {
        debug_assert!(slice_len(start, end) == M);
        FixedVector::from_fn(|i| {
            if start <= end {
                self.storage[start + i]
            } else {
                self.storage[start - i]
            }
        })
    }

    /// Appends `other`, promoting both element types. `M` must be `N + N2`.
    pub fn concat<U, const N2: usize, const M: usize>(
        self,
        other: FixedVector<U, N2>,
    ) -> FixedVector<Promoted<T, U>, M>
    where
        T: Promote<U>,
        U: Numeric,
    {
        const {
            assert!(N + N2 == M, "concatenated dimension must be the sum of the inputs");
        };
        FixedVector::from_fn(|i| {
            if i < N {
                self.storage[i].cast()
            } else {
                other.storage[i - N].cast()
            }
        })
    }
}

const fn slice_bound(dimension: usize, idx: isize) -> usize {
    let i = if idx < 0 { dimension as isize + idx } else { idx };
    assert!(i >= 0 && i < dimension as isize, "slice bound out of range");
    i as usize
}

const fn slice_len(start: usize, end: usize) -> usize {
    if start <= end {
        end - start + 1
    } else {
        start - end + 1
    }
}

impl<T: Numeric, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Numeric, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(vals: [T; N]) -> Self {
        Self::from_array(vals)
    }
}

impl<T: Numeric, const N: usize> TryFrom<&[T]> for FixedVector<T, N> {
    type Error = VectorError;

    fn try_from(vals: &[T]) -> Result<Self, Self::Error> {
        if vals.len() != N {
            return Err(VectorError::DimensionMismatch {
                expected: N,
                found: vals.len(),
            });
        }

        Ok(Self::from_fn(|i| vals[i]))
    }
}

impl<T: Numeric, const N: usize> TryFrom<Vec<T>> for FixedVector<T, N> {
    type Error = VectorError;

    fn try_from(vals: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from(vals.as_slice())
    }
}

/// Takes at most `N` items and zero-fills whatever the iterator doesn't
/// provide.
impl<T: Numeric, const N: usize> FromIterator<T> for FixedVector<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::zeros();
        for (slot, val) in out.storage.iter_mut().zip(iter) {
            *slot = val;
        }

        out
    }
}

impl<T, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<T, const N: usize> Index<isize> for FixedVector<T, N> {
    type Output = T;

    fn index(&self, idx: isize) -> &Self::Output {
        match normalize_index(idx, N) {
            Ok(i) => &self.storage[i],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T, const N: usize> IndexMut<isize> for FixedVector<T, N> {
    fn index_mut(&mut self, idx: isize) -> &mut Self::Output {
        match normalize_index(idx, N) {
            Ok(i) => &mut self.storage[i],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Display, const N: usize> Display for FixedVector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for (i, val) in self.storage.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", val)?;
        }
        write!(f, "]")
    }
}
