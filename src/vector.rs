//! Fixed-dimension vectors.

use crate::num::{Element, Sqrt};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use core::fmt;
use std::mem;
use std::ops::{Index, IndexMut, Neg};
use thiserror::Error;

/// A vector with a fixed dimension of `N` elements of numeric type `T`.
///
/// The elements are stored contiguously on the stack and the dimension is
/// part of the type, so no operation can ever change it. Equality is
/// pointwise over the full element sequence. The ordering operators compare
/// lexicographically with the first index most significant; they deliberately
/// do not compare norms.
///
/// Arithmetic inherits the element type's own overflow, division-by-zero and
/// precision behavior; the vector type never masks or alters it.
#[repr(transparent)]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FixedVector<T, const N: usize> {
    elements: [T; N],
}

/// A 3-dimensional vector with named component accessors and a cross product.
pub type Vector3<T> = FixedVector<T, 3>;

/// The error produced by the checked element accessors when the index is
/// outside the vector's dimension.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of bounds for vector of dimension {dim}")]
pub struct IndexOutOfRange {
    /// The rejected index.
    pub index: usize,
    /// The dimension of the vector.
    pub dim: usize,
}

impl<T: Element, const N: usize> FixedVector<T, N> {
    /// Creates a new vector with every element set to the default value of
    /// `T` (zero for the built-in numeric types).
    #[inline]
    pub fn zeros() -> Self {
        Self::same(T::default())
    }

    /// Creates a new vector with the same value for all elements.
    #[inline]
    pub fn same(value: T) -> Self {
        Self {
            elements: [value; N],
        }
    }

    /// Returns the value of the element at the given index, or an
    /// [`IndexOutOfRange`] error if the index is outside the vector. The
    /// vector is never modified.
    #[inline]
    pub fn at(&self, index: usize) -> Result<T, IndexOutOfRange> {
        if index < N {
            Ok(self.elements[index])
        } else {
            Err(IndexOutOfRange { index, dim: N })
        }
    }

    /// Returns a mutable reference to the element at the given index, or an
    /// [`IndexOutOfRange`] error if the index is outside the vector.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        if index < N {
            Ok(&mut self.elements[index])
        } else {
            Err(IndexOutOfRange { index, dim: N })
        }
    }

    /// Returns the value of the element at the given index without bounds
    /// checking.
    ///
    /// # Safety
    /// `index` must be smaller than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        unsafe { *self.elements.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at the given index without
    /// bounds checking.
    ///
    /// # Safety
    /// `index` must be smaller than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.elements.get_unchecked_mut(index) }
    }

    /// Sets every element to the given value.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.elements.fill(value);
    }

    /// Exchanges the full contents of this vector and another. Neither
    /// vector is observable in a partially exchanged state.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        let mut product = T::default();
        for i in 0..N {
            product += self.elements[i] * other.elements[i];
        }
        product
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Computes the sum of all elements, starting from the default value of
    /// `T`.
    #[inline]
    pub fn component_sum(&self) -> T {
        let mut sum = T::default();
        for &element in &self.elements {
            sum += element;
        }
        sum
    }

    /// Computes the product of all elements, using the first element as the
    /// seed of the fold.
    ///
    /// # Panics
    /// If `N` is zero.
    #[inline]
    pub fn component_product(&self) -> T {
        let mut product = self.elements[0];
        for &element in &self.elements[1..] {
            product *= element;
        }
        product
    }

    /// Computes the mean of all elements using `T`'s own division, which
    /// truncates for integer elements.
    ///
    /// # Panics
    /// If the dimension `N` is not representable in `T`.
    #[inline]
    pub fn component_mean(&self) -> T {
        let dim =
            T::from_usize(N).expect("vector dimension not representable in the element type");
        self.component_sum() / dim
    }

    /// Returns the smallest element in the vector.
    ///
    /// # Panics
    /// If `N` is zero.
    #[inline]
    pub fn min_component(&self) -> T {
        let mut min = self.elements[0];
        for &element in &self.elements[1..] {
            if element < min {
                min = element;
            }
        }
        min
    }

    /// Returns the largest element in the vector.
    ///
    /// # Panics
    /// If `N` is zero.
    #[inline]
    pub fn max_component(&self) -> T {
        let mut max = self.elements[0];
        for &element in &self.elements[1..] {
            if element > max {
                max = element;
            }
        }
        max
    }
}

impl<T: Element + Sqrt, const N: usize> FixedVector<T, N> {
    /// Computes the normalized version of the vector.
    ///
    /// If the norm is zero, each element gets the result of the element
    /// type's own division by zero (NaN for the floating-point types).
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }

    /// Computes the norm (length) of the vector.
    ///
    /// For integer elements the square root truncates; see [`Sqrt`].
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Normalizes the vector in place by dividing every element by the norm.
    ///
    /// If the norm is zero, each element gets the result of the element
    /// type's own division by zero (NaN for the floating-point types).
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        *self /= norm;
    }
}

impl<T: Element> FixedVector<T, 3> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self {
            elements: [x, y, z],
        }
    }

    /// The x-axis unit vector.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::default(), T::default())
    }

    /// The y-axis unit vector.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::default(), T::one(), T::default())
    }

    /// The z-axis unit vector.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::default(), T::default(), T::one())
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> T {
        self.elements[0]
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> T {
        self.elements[1]
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> T {
        self.elements[2]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.elements[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.elements[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.elements[2]
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

/// Computes the dot product of the two vectors.
#[inline]
pub fn dot<T: Element, const N: usize>(a: &FixedVector<T, N>, b: &FixedVector<T, N>) -> T {
    a.dot(b)
}

/// Returns the normalized version of the given vector.
///
/// Takes the vector by value, so the caller's own binding is left untouched,
/// in contrast to [`FixedVector::normalize`].
#[inline]
pub fn normalize<T: Element + Sqrt, const N: usize>(
    mut vector: FixedVector<T, N>,
) -> FixedVector<T, N> {
    vector.normalize();
    vector
}

impl<T: Element, const N: usize> Default for FixedVector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<FixedVector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: FixedVector<T, N>) -> Self {
        vector.elements
    }
}

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

// SAFETY: `FixedVector` is `repr(transparent)` over `[T; N]`, which is
// zeroable when `T` is.
unsafe impl<T: Zeroable, const N: usize> Zeroable for FixedVector<T, N> {}

// SAFETY: `FixedVector` is `repr(transparent)` over `[T; N]`, which has no
// padding and allows any bit pattern when `T` is `Pod`.
unsafe impl<T: Pod, const N: usize> Pod for FixedVector<T, N> {}

impl_binop!(
    [T: Element, const N: usize],
    Add, add, FixedVector<T, N>, FixedVector<T, N>, FixedVector<T, N>,
    |a, b| {
        let mut sum = *a;
        sum += b;
        sum
    }
);

impl_binop!(
    [T: Element, const N: usize],
    Sub, sub, FixedVector<T, N>, FixedVector<T, N>, FixedVector<T, N>,
    |a, b| {
        let mut difference = *a;
        difference -= b;
        difference
    }
);

impl_binop!(
    [T: Element, const N: usize],
    Mul, mul, FixedVector<T, N>, FixedVector<T, N>, FixedVector<T, N>,
    |a, b| {
        let mut product = *a;
        product *= b;
        product
    }
);

impl_binop!(
    [T: Element, const N: usize],
    Div, div, FixedVector<T, N>, FixedVector<T, N>, FixedVector<T, N>,
    |a, b| {
        let mut quotient = *a;
        quotient /= b;
        quotient
    }
);

impl_binop!(
    [T: Element, const N: usize],
    Mul, mul, FixedVector<T, N>, T, FixedVector<T, N>,
    |a, b| {
        let mut scaled = *a;
        scaled *= b;
        scaled
    }
);

impl_binop!(
    [T: Element, const N: usize],
    Div, div, FixedVector<T, N>, T, FixedVector<T, N>,
    |a, b| {
        let mut scaled = *a;
        scaled /= b;
        scaled
    }
);

macro_rules! impl_left_scalar_mul {
    ($t:tt) => {
        impl_binop!(
            [const N: usize],
            Mul, mul, $t, FixedVector<$t, N>, FixedVector<$t, N>,
            |a, b| { b.mul(*a) }
        );
    };
}

impl_left_scalar_mul!(i8);
impl_left_scalar_mul!(i16);
impl_left_scalar_mul!(i32);
impl_left_scalar_mul!(i64);
impl_left_scalar_mul!(i128);
impl_left_scalar_mul!(isize);
impl_left_scalar_mul!(u8);
impl_left_scalar_mul!(u16);
impl_left_scalar_mul!(u32);
impl_left_scalar_mul!(u64);
impl_left_scalar_mul!(u128);
impl_left_scalar_mul!(usize);
impl_left_scalar_mul!(f32);
impl_left_scalar_mul!(f64);

impl_binop_assign!(
    [T: Element, const N: usize],
    AddAssign, add_assign, FixedVector<T, N>, FixedVector<T, N>,
    |a, b| {
        for i in 0..N {
            a.elements[i] += b.elements[i];
        }
    }
);

impl_binop_assign!(
    [T: Element, const N: usize],
    SubAssign, sub_assign, FixedVector<T, N>, FixedVector<T, N>,
    |a, b| {
        for i in 0..N {
            a.elements[i] -= b.elements[i];
        }
    }
);

impl_binop_assign!(
    [T: Element, const N: usize],
    MulAssign, mul_assign, FixedVector<T, N>, FixedVector<T, N>,
    |a, b| {
        for i in 0..N {
            a.elements[i] *= b.elements[i];
        }
    }
);

impl_binop_assign!(
    [T: Element, const N: usize],
    DivAssign, div_assign, FixedVector<T, N>, FixedVector<T, N>,
    |a, b| {
        for i in 0..N {
            a.elements[i] /= b.elements[i];
        }
    }
);

impl_binop_assign!(
    [T: Element, const N: usize],
    MulAssign, mul_assign, FixedVector<T, N>, T,
    |a, b| {
        for element in &mut a.elements {
            *element *= *b;
        }
    }
);

impl_binop_assign!(
    [T: Element, const N: usize],
    DivAssign, div_assign, FixedVector<T, N>, T,
    |a, b| {
        for element in &mut a.elements {
            *element /= *b;
        }
    }
);

impl_unary_op!(
    [T: Element + Neg<Output = T>, const N: usize],
    Neg, neg, FixedVector<T, N>, FixedVector<T, N>,
    |val| {
        let mut negated = *val;
        for element in &mut negated.elements {
            *element = -*element;
        }
        negated
    }
);

impl<T: Element + AbsDiffEq, const N: usize> AbsDiffEq for FixedVector<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T: Element + RelativeEq, const N: usize> RelativeEq for FixedVector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedVector").field(&self.elements).finish()
    }
}
