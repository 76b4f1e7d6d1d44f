use core::fmt;

use crate::Either;

/// One of the two branches of an [`Either`].
#[derive(derive_more::IsVariant, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A side was requested from an [`Either`] holding the other one.
///
/// The value is handed back untouched, so a failed extraction loses nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongSide<L, R> {
    pub expected: Side,
    pub either: Either<L, R>,
}

impl<L, R> WrongSide<L, R> {
    pub(crate) fn new(expected: Side, either: Either<L, R>) -> Self {
        log::trace!("expected {expected} value, found {}", either.side());

        Self { expected, either }
    }

    /// The side actually held
    pub const fn found(&self) -> Side {
        self.either.side()
    }

    pub fn into_inner(self) -> Either<L, R> {
        self.either
    }
}

impl<L, R> fmt::Display for WrongSide<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} value, found {}", self.expected, self.found())
    }
}

#[cfg(feature = "std")]
impl<L: fmt::Debug, R: fmt::Debug> std::error::Error for WrongSide<L, R> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_swaps() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert!(Side::Right.opposite().is_left());
    }

    #[test]
    fn wrong_side_reports_both_sides() {
        let err = Either::<i32, &str>::right_of("ok").try_into_left().unwrap_err();

        assert_eq!(err.expected, Side::Left);
        assert_eq!(err.found(), Side::Right);
        assert_eq!(err.to_string(), "expected left value, found right");
        assert_eq!(err.into_inner(), Either::right_of("ok"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn wrong_side_is_an_error() {
        fn boxed(err: WrongSide<u8, u8>) -> Box<dyn std::error::Error> {
            Box::new(err)
        }

        let err = Either::<u8, u8>::left_of(1).try_into_right().unwrap_err();
        assert_eq!(boxed(err).to_string(), "expected right value, found left");
    }
}
