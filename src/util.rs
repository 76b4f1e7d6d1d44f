//! Point-free helpers for use with iterator adaptors.

use crate::{
    data::{Left, Right},
    Either,
};

pub fn from_right<T>(x: Right<T>) -> T {
    x.0
}

pub fn from_left<T>(x: Left<T>) -> T {
    x.0
}

pub fn map_left<A, B, C>(f: impl Fn(A) -> B) -> impl Fn(Either<A, C>) -> Either<B, C> {
    move |e| e.into_left_map(&f)
}

pub fn map_right<A, B, C>(f: impl Fn(A) -> B) -> impl Fn(Either<C, A>) -> Either<C, B> {
    move |e| e.into_right_map(&f)
}

/// Curried fold: `either(f, g)(e)` is `e.into_join_with(f, g)`.
pub fn either<A, B, C>(
    on_left: impl Fn(A) -> C,
    on_right: impl Fn(B) -> C,
) -> impl Fn(Either<A, B>) -> C {
    move |e| e.into_join_with(&on_left, &on_right)
}

pub fn is_left<A, B>(e: &Either<A, B>) -> bool {
    e.is_left()
}

pub fn is_right<A, B>(e: &Either<A, B>) -> bool {
    e.is_right()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{left, right};

    #[test]
    fn unwraps_tokens() {
        assert_eq!(from_left(left('l')), 'l');
        assert_eq!(from_right(right("r")), "r");
    }

    #[test]
    fn maps_over_a_stream() {
        let stream = vec![
            Either::<u32, String>::left_of(2),
            Either::right_of(String::from("s")),
        ];

        let doubled: Vec<_> = stream.into_iter().map(map_left(|x: u32| x * 2)).collect();
        assert_eq!(doubled, [Either::left_of(4), Either::right_of(String::from("s"))]);

        let lengths: Vec<_> = doubled.into_iter().map(map_right(|s: String| s.len())).collect();
        assert_eq!(lengths, [Either::left_of(4), Either::right_of(1)]);
    }

    #[test]
    fn folds_and_filters() {
        let stream = [
            Either::<i32, bool>::left_of(-3),
            Either::right_of(true),
            Either::left_of(5),
        ];

        let flatten = either(|x: i32| x, |b: bool| i32::from(b));
        let flat: Vec<i32> = stream.iter().copied().map(flatten).collect();
        assert_eq!(flat, [-3, 1, 5]);

        assert_eq!(stream.iter().filter(|e| is_left(e)).count(), 2);
        assert_eq!(stream.iter().filter(|e| is_right(e)).count(), 1);
    }
}
