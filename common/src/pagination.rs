//! Abstractions for page-number pagination.

use std::{num::NonZeroUsize, ops::RangeInclusive};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of pages shown around the current one by [`Page::numbers()`].
const NEIGHBOURHOOD: usize = 2;

/// 1-based number of a page.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Number(NonZeroUsize);

impl Number {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Creates a new [`Number`], if the provided `number` is not zero.
    #[must_use]
    pub fn new(number: usize) -> Option<Self> {
        NonZeroUsize::new(number).map(Self)
    }

    /// Returns this [`Number`] as a plain [`usize`].
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<Number> for usize {
    fn from(number: Number) -> Self {
        number.get()
    }
}

impl From<NonZeroUsize> for Number {
    fn from(number: NonZeroUsize) -> Self {
        Self(number)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Arguments {
    /// [`Number`] of the requested page.
    pub number: Number,

    /// Maximum number of items on a page.
    pub size: NonZeroUsize,
}

impl Arguments {
    /// Returns the index of the first item on the requested page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.number.get() - 1).saturating_mul(self.size.get())
    }
}

/// Returns the slice of `items` falling onto the page requested by the
/// provided [`Arguments`].
///
/// An empty slice is returned if the page starts past the end of `items`.
#[must_use]
pub fn window<T>(items: &[T], args: Arguments) -> &[T] {
    let start = args.offset();
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(args.size.get()).min(items.len());
    &items[start..end]
}

/// Returns the total number of pages needed to show `total` items by `size`
/// items per page.
///
/// There is always at least one (possibly empty) page.
#[must_use]
pub fn total_pages(total: usize, size: NonZeroUsize) -> usize {
    total.div_ceil(size.get()).max(1)
}

/// A page of items.
#[derive(Clone, Debug)]
pub struct Page<I> {
    /// Items on this [`Page`].
    pub items: Vec<I>,

    /// [`Arguments`] this [`Page`] was selected with.
    pub arguments: Arguments,

    /// Total number of items on all the pages.
    pub total: usize,
}

impl<I> Page<I> {
    /// Creates a new [`Page`] by windowing the provided `items`.
    #[must_use]
    pub fn new(items: &[I], args: Arguments) -> Self
    where
        I: Clone,
    {
        Self {
            items: window(items, args).to_vec(),
            arguments: args,
            total: items.len(),
        }
    }

    /// Returns the total number of pages.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.arguments.size)
    }

    /// Indicates whether there is a page after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.arguments.number.get() < self.total_pages()
    }

    /// Indicates whether there is a page before this one.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.arguments.number > Number::FIRST
    }

    /// Returns the 1-based positions of the first and the last items shown
    /// on this [`Page`].
    ///
    /// [`None`] is returned if this [`Page`] is empty.
    #[must_use]
    pub fn shown(&self) -> Option<RangeInclusive<usize>> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.arguments.offset() + 1;
        Some(first..=first + self.items.len() - 1)
    }

    /// Returns page number [`Marker`]s to render around this [`Page`].
    ///
    /// The first and the last pages are always present, along with a
    /// couple of pages around the current one. Skipped pages collapse into
    /// a [`Marker::Gap`].
    #[must_use]
    pub fn numbers(&self) -> Vec<Marker> {
        let current = self.arguments.number.get();
        let last = self.total_pages();

        let mut markers = vec![Marker::Number(Number::FIRST)];
        if current > NEIGHBOURHOOD + 2 {
            markers.push(Marker::Gap);
        }

        let from = current.saturating_sub(NEIGHBOURHOOD).max(2);
        let to = current.saturating_add(NEIGHBOURHOOD).min(last - 1);
        markers.extend(
            (from..=to).filter_map(Number::new).map(Marker::Number),
        );

        if current.saturating_add(NEIGHBOURHOOD + 1) < last {
            markers.push(Marker::Gap);
        }
        if last > 1 {
            markers.extend(Number::new(last).map(Marker::Number));
        }
        markers
    }
}

/// Page number marker rendered by a pager.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Marker {
    /// Link to a page.
    Number(Number),

    /// Elided range of pages.
    Gap,
}

/// Pagination selector.
#[derive(Clone, Debug)]
pub struct Selector<F> {
    /// Pagination [`Arguments`].
    pub arguments: Arguments,

    /// Additional filter being applied to the result.
    pub filter: F,
}

/// Defines pagination types.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_pagination {
    ($node:ty, $filter:ty) => {
        #[doc = "A [`Page`] of nodes."]
        pub type Page = $crate::pagination::Page<$node>;

        #[doc = "Arguments for selecting a [`Page`]."]
        pub type Arguments = $crate::pagination::Arguments;

        #[doc = "[`Page`] selector."]
        pub type Selector = $crate::pagination::Selector<$filter>;
    };
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroUsize;

    use super::{total_pages, window, Arguments, Marker, Number, Page};

    fn args(number: usize, size: usize) -> Arguments {
        Arguments {
            number: Number::new(number).unwrap(),
            size: NonZeroUsize::new(size).unwrap(),
        }
    }

    fn numbers(markers: &[Marker]) -> Vec<Option<usize>> {
        markers
            .iter()
            .map(|m| match m {
                Marker::Number(n) => Some(n.get()),
                Marker::Gap => None,
            })
            .collect()
    }

    #[test]
    fn rejects_zero_page_number() {
        assert!(Number::new(0).is_none());
        assert_eq!(Number::new(1), Some(Number::FIRST));
        assert_eq!(Number::default(), Number::FIRST);
    }

    #[test]
    fn windows_are_clipped() {
        let items = (1..=25).collect::<Vec<_>>();

        assert_eq!(window(&items, args(1, 12)), &items[0..12]);
        assert_eq!(window(&items, args(2, 12)), &items[12..24]);
        assert_eq!(window(&items, args(3, 12)), &[25]);
        assert!(window(&items, args(4, 12)).is_empty());
        assert!(window(&items, args(usize::MAX, 12)).is_empty());
        assert!(window::<u8>(&[], args(1, 12)).is_empty());
    }

    #[test]
    fn counts_at_least_one_page() {
        let twelve = NonZeroUsize::new(12).unwrap();

        assert_eq!(total_pages(0, twelve), 1);
        assert_eq!(total_pages(1, twelve), 1);
        assert_eq!(total_pages(12, twelve), 1);
        assert_eq!(total_pages(13, twelve), 2);
        assert_eq!(total_pages(25, twelve), 3);
    }

    #[test]
    fn pages_reconstruct_the_whole_list() {
        let items = (0..97).collect::<Vec<_>>();
        for size in [1, 5, 12, 24, 48, 97, 100] {
            let pages =
                total_pages(items.len(), NonZeroUsize::new(size).unwrap());
            let joined = (1..=pages)
                .flat_map(|n| window(&items, args(n, size)).iter().copied())
                .collect::<Vec<_>>();

            assert_eq!(joined, items, "page size {size}");
        }
    }

    #[test]
    fn reports_shown_range() {
        let items = (1..=25).collect::<Vec<_>>();

        assert_eq!(Page::new(&items, args(1, 12)).shown(), Some(1..=12));
        assert_eq!(Page::new(&items, args(3, 12)).shown(), Some(25..=25));
        assert_eq!(Page::new(&items, args(4, 12)).shown(), None);
        assert_eq!(Page::new(&items, args(usize::MAX, 12)).shown(), None);
        assert_eq!(Page::new(&Vec::<u8>::new(), args(1, 12)).shown(), None);
    }

    #[test]
    fn reports_neighbours() {
        let items = (1..=25).collect::<Vec<_>>();

        let first = Page::new(&items, args(1, 12));
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = Page::new(&items, args(3, 12));
        assert!(!last.has_next());
        assert!(last.has_previous());
        assert_eq!(last.total_pages(), 3);
        assert_eq!(last.total, 25);
    }

    #[test]
    fn numbers_collapse_far_pages() {
        let items = (1..=100).collect::<Vec<_>>();

        assert_eq!(
            numbers(&Page::new(&items, args(1, 10)).numbers()),
            [Some(1), Some(2), Some(3), None, Some(10)],
        );
        assert_eq!(
            numbers(&Page::new(&items, args(5, 10)).numbers()),
            [
                Some(1),
                None,
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                None,
                Some(10),
            ],
        );
        assert_eq!(
            numbers(&Page::new(&items, args(10, 10)).numbers()),
            [Some(1), None, Some(8), Some(9), Some(10)],
        );
        assert_eq!(
            numbers(&Page::new(&items, args(4, 10)).numbers()),
            [
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                None,
                Some(10),
            ],
        );
    }

    #[test]
    fn numbers_of_tiny_lists() {
        let items = (1..=30).collect::<Vec<_>>();

        assert_eq!(
            numbers(&Page::new(&items, args(1, 12)).numbers()),
            [Some(1), Some(2), Some(3)],
        );
        assert_eq!(
            numbers(&Page::new(&items, args(usize::MAX, 12)).numbers()),
            [Some(1), None, Some(3)],
        );
        assert_eq!(
            numbers(&Page::new(&items[..5], args(1, 12)).numbers()),
            [Some(1)],
        );
        assert_eq!(
            numbers(&Page::new(&Vec::<u8>::new(), args(1, 12)).numbers()),
            [Some(1)],
        );
    }
}
