use core::fmt;

use crate::{
    data::{Left, Right},
    error::{Side, WrongSide},
};

/// A value that is exactly one of a left `L` or a right `R`.
///
/// By convention the left side carries a failure or alternative value and the
/// right side carries a success value.
///
/// Methods taking `&self` leave the value alone and clone whatever payload they
/// carry into their result. Their `into_*` counterparts take `self` and move
/// the payload instead, so they need no `Clone` bound.
#[derive(derive_more::IsVariant, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// A value of type `L`.
    Left(L),
    /// A value of type `R`.
    Right(R),
}

impl<L, R> From<Left<L>> for Either<L, R> {
    fn from(Left(value): Left<L>) -> Self {
        Self::Left(value)
    }
}

impl<L, R> From<Right<R>> for Either<L, R> {
    fn from(Right(value): Right<R>) -> Self {
        Self::Right(value)
    }
}

/// `true` exactly when the value holds its right side.
impl<L, R> From<&Either<L, R>> for bool {
    fn from(either: &Either<L, R>) -> Self {
        either.is_right()
    }
}

impl<L, R> Either<L, R> {
    pub const fn left_of(value: L) -> Self {
        Self::Left(value)
    }

    pub const fn right_of(value: R) -> Self {
        Self::Right(value)
    }

    pub const fn side(&self) -> Side {
        match self {
            Self::Left(_) => Side::Left,
            Self::Right(_) => Side::Right,
        }
    }

    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Collapse into `T`, moving out whichever payload is live.
    ///
    /// ```
    /// use neither::Either;
    ///
    /// let e = Either::<&str, String>::left_of("borrowed");
    /// let s: String = e.into_join();
    /// assert_eq!(s, "borrowed");
    /// ```
    pub fn into_join<T>(self) -> T
    where
        L: Into<T>,
        R: Into<T>,
    {
        match self {
            Self::Left(l) => l.into(),
            Self::Right(r) => r.into(),
        }
    }

    /// Fold by reference: exactly one of `on_left` or `on_right` runs.
    pub fn join_with<X>(
        &self,
        on_left: impl FnOnce(&L) -> X,
        on_right: impl FnOnce(&R) -> X,
    ) -> X {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    pub fn into_join_with<X>(
        self,
        on_left: impl FnOnce(L) -> X,
        on_right: impl FnOnce(R) -> X,
    ) -> X {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    pub fn into_left_map<L2>(self, f: impl FnOnce(L) -> L2) -> Either<L2, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    pub fn into_right_map<R2>(self, f: impl FnOnce(R) -> R2) -> Either<L, R2> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    pub fn bimap<L2, R2>(
        &self,
        on_left: impl FnOnce(&L) -> L2,
        on_right: impl FnOnce(&R) -> R2,
    ) -> Either<L2, R2> {
        self.as_ref().into_bimap(on_left, on_right)
    }

    pub fn into_bimap<L2, R2>(
        self,
        on_left: impl FnOnce(L) -> L2,
        on_right: impl FnOnce(R) -> R2,
    ) -> Either<L2, R2> {
        match self {
            Self::Left(l) => Either::Left(on_left(l)),
            Self::Right(r) => Either::Right(on_right(r)),
        }
    }

    /// Replace a left value with whatever `f` makes of it. A right value is
    /// moved across and `f` is never called.
    pub fn into_left_flat_map<L2>(self, f: impl FnOnce(L) -> Either<L2, R>) -> Either<L2, R> {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Replace a right value with whatever `f` makes of it. A left value is
    /// moved across and `f` is never called.
    pub fn into_right_flat_map<R2>(self, f: impl FnOnce(R) -> Either<L, R2>) -> Either<L, R2> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => f(r),
        }
    }

    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }

    pub fn left_or(self, default: L) -> L {
        self.left_or_else(|_| default)
    }

    pub fn left_or_else(self, f: impl FnOnce(R) -> L) -> L {
        match self {
            Self::Left(l) => l,
            Self::Right(r) => f(r),
        }
    }

    pub fn right_or(self, default: R) -> R {
        self.right_or_else(|_| default)
    }

    pub fn right_or_else(self, f: impl FnOnce(L) -> R) -> R {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => r,
        }
    }

    /// # Errors
    ///
    /// Returns [`WrongSide`] carrying `self` back when the value is right.
    pub fn try_into_left(self) -> Result<L, WrongSide<L, R>> {
        match self {
            Self::Left(l) => Ok(l),
            right @ Self::Right(_) => Err(WrongSide::new(Side::Left, right)),
        }
    }

    /// # Errors
    ///
    /// Returns [`WrongSide`] carrying `self` back when the value is left.
    pub fn try_into_right(self) -> Result<R, WrongSide<L, R>> {
        match self {
            Self::Right(r) => Ok(r),
            left @ Self::Left(_) => Err(WrongSide::new(Side::Right, left)),
        }
    }

    /// Right becomes `Ok`, left becomes `Err`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(l) => Err(l),
            Self::Right(r) => Ok(r),
        }
    }
}

impl<L: Clone, R> Either<L, R> {
    pub fn left_of_cloned(value: &L) -> Self {
        Self::Left(value.clone())
    }

    /// A copy of the left payload, or `None` when the value is right.
    pub fn left(&self) -> Option<L> {
        self.as_ref().into_left().cloned()
    }

    pub fn right_map<R2>(&self, f: impl FnOnce(&R) -> R2) -> Either<L, R2> {
        match self {
            Self::Left(l) => Either::Left(l.clone()),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    pub fn right_flat_map<R2>(&self, f: impl FnOnce(&R) -> Either<L, R2>) -> Either<L, R2> {
        match self {
            Self::Left(l) => Either::Left(l.clone()),
            Self::Right(r) => f(r),
        }
    }
}

impl<L, R: Clone> Either<L, R> {
    pub fn right_of_cloned(value: &R) -> Self {
        Self::Right(value.clone())
    }

    /// A copy of the right payload, or `None` when the value is left.
    pub fn right(&self) -> Option<R> {
        self.as_ref().into_right().cloned()
    }

    pub fn left_map<L2>(&self, f: impl FnOnce(&L) -> L2) -> Either<L2, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r.clone()),
        }
    }

    pub fn left_flat_map<L2>(&self, f: impl FnOnce(&L) -> Either<L2, R>) -> Either<L2, R> {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => Either::Right(r.clone()),
        }
    }
}

impl<L: Clone, R: Clone> Either<L, R> {
    /// Collapse into `T` without giving up `self`.
    pub fn join<T>(&self) -> T
    where
        L: Into<T>,
        R: Into<T>,
    {
        self.clone().into_join()
    }
}

impl<T> Either<T, T> {
    /// Collapse an `Either` whose sides share a type.
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> TryFrom<Either<L, R>> for Left<L> {
    type Error = WrongSide<L, R>;

    fn try_from(either: Either<L, R>) -> Result<Self, Self::Error> {
        either.try_into_left().map(Left)
    }
}

impl<L, R> TryFrom<Either<L, R>> for Right<R> {
    type Error = WrongSide<L, R>;

    fn try_from(either: Either<L, R>) -> Result<Self, Self::Error> {
        either.try_into_right().map(Right)
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(l) => fmt::Display::fmt(l, f),
            Self::Right(r) => fmt::Display::fmt(r, f),
        }
    }
}
