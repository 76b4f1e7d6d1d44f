//! Iterating over an [`Either`] of iterators, and splitting streams of them.

use core::iter::FusedIterator;

use itertools::Itertools;

use crate::Either;

/// Iterator over whichever side of an [`Either`] is live.
///
/// Built by [`IntoIterator`] on an `Either` whose sides iterate over the same
/// item type.
#[derive(Debug, Clone)]
pub struct IntoIter<L, R> {
    inner: Either<L, R>,
}

impl<L, R> IntoIterator for Either<L, R>
where
    L: IntoIterator,
    R: IntoIterator<Item = L::Item>,
{
    type Item = L::Item;
    type IntoIter = IntoIter<L::IntoIter, R::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_bimap(IntoIterator::into_iter, IntoIterator::into_iter),
        }
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R>
where
    &'a L: IntoIterator,
    &'a R: IntoIterator<Item = <&'a L as IntoIterator>::Item>,
{
    type Item = <&'a L as IntoIterator>::Item;
    type IntoIter = IntoIter<<&'a L as IntoIterator>::IntoIter, <&'a R as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self
                .as_ref()
                .into_bimap(IntoIterator::into_iter, IntoIterator::into_iter),
        }
    }
}

impl<L, R> Iterator for IntoIter<L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Either::Left(l) => l.next(),
            Either::Right(r) => r.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.join_with(Iterator::size_hint, Iterator::size_hint)
    }
}

impl<L, R> DoubleEndedIterator for IntoIter<L, R>
where
    L: DoubleEndedIterator,
    R: DoubleEndedIterator<Item = L::Item>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Either::Left(l) => l.next_back(),
            Either::Right(r) => r.next_back(),
        }
    }
}

impl<L, R> ExactSizeIterator for IntoIter<L, R>
where
    L: ExactSizeIterator,
    R: ExactSizeIterator<Item = L::Item>,
{
}

impl<L, R> FusedIterator for IntoIter<L, R>
where
    L: FusedIterator,
    R: FusedIterator<Item = L::Item>,
{
}

/// Split a stream of `Either` into its lefts and its rights, keeping order
/// within each side.
pub fn partition<L, R, A, B>(iter: impl IntoIterator<Item = Either<L, R>>) -> (A, B)
where
    A: Default + Extend<L>,
    B: Default + Extend<R>,
{
    iter.into_iter().partition_map(itertools::Either::from)
}

pub fn lefts<L, R>(iter: impl IntoIterator<Item = Either<L, R>>) -> impl Iterator<Item = L> {
    iter.into_iter().filter_map(Either::into_left)
}

pub fn rights<L, R>(iter: impl IntoIterator<Item = Either<L, R>>) -> impl Iterator<Item = R> {
    iter.into_iter().filter_map(Either::into_right)
}

impl<L, R> From<itertools::Either<L, R>> for Either<L, R> {
    fn from(either: itertools::Either<L, R>) -> Self {
        match either {
            itertools::Either::Left(l) => Self::Left(l),
            itertools::Either::Right(r) => Self::Right(r),
        }
    }
}

impl<L, R> From<Either<L, R>> for itertools::Either<L, R> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Self::Left(l),
            Either::Right(r) => Self::Right(r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> Vec<Either<i32, &'static str>> {
        vec![
            Either::left_of(1),
            Either::right_of("a"),
            Either::left_of(2),
            Either::right_of("b"),
        ]
    }

    #[test]
    fn iterates_live_side() {
        let l = Either::<Vec<u8>, [u8; 2]>::left_of(vec![1, 2, 3]);
        let r = Either::<Vec<u8>, [u8; 2]>::right_of([7, 8]);

        assert_eq!(l.into_iter().collect::<Vec<_>>(), [1, 2, 3]);

        let mut iter = r.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next_back(), Some(8));
        assert_eq!(iter.next(), Some(7));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn iterates_by_reference() {
        let e = Either::<Vec<i32>, Vec<i32>>::right_of(vec![4, 5]);
        let sum: i32 = (&e).into_iter().sum();

        assert_eq!(sum, 9);
        assert_eq!(e.right(), Some(vec![4, 5]));
    }

    #[test]
    fn partition_keeps_order() {
        let (ls, rs): (Vec<i32>, Vec<&str>) = partition(mixed());

        assert_eq!(ls, [1, 2]);
        assert_eq!(rs, ["a", "b"]);
    }

    #[test]
    fn lefts_and_rights_filter() {
        assert_eq!(lefts(mixed()).collect::<Vec<_>>(), [1, 2]);
        assert_eq!(rights(mixed()).collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn converts_with_itertools_either() {
        let ours = Either::<u8, char>::right_of('x');
        let theirs = itertools::Either::from(ours);

        assert_eq!(theirs, itertools::Either::Right('x'));
        assert_eq!(Either::from(theirs), ours);
    }
}
