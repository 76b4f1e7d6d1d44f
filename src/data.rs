//! Construction tokens that name the side an [`Either`](crate::Either) is built on.

/// A value headed for the left side of an [`Either`](crate::Either).
#[repr(transparent)]
#[derive(
    derive_more::AsRef,
    derive_more::Constructor,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct Left<T>(pub T);

/// A value headed for the right side of an [`Either`](crate::Either).
#[repr(transparent)]
#[derive(
    derive_more::AsRef,
    derive_more::Constructor,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub struct Right<T>(pub T);

impl<T> Left<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Right<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Tag `value` for the left side.
///
/// ```
/// use neither::{left, Either};
///
/// let e: Either<u8, u8> = left(1_u8).into();
/// assert!(e.is_left());
/// ```
pub const fn left<T>(value: T) -> Left<T> {
    Left(value)
}

/// Tag `value` for the right side.
pub const fn right<T>(value: T) -> Right<T> {
    Right(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_constructors_match_new() {
        assert_eq!(left(3), Left::new(3));
        assert_eq!(right("x"), Right::new("x"));
    }

    #[test]
    fn tokens_hand_back_their_value() {
        let token = left(String::from("moved"));
        let inner: &String = token.as_ref();
        assert_eq!(inner, "moved");
        assert_eq!(token.into_inner(), "moved");
        assert_eq!(right(vec![1, 2]).into_inner(), vec![1, 2]);
    }
}
