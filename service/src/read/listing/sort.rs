//! Ordering of [`Listing`]s by a [`SortKey`].

use std::{borrow::Borrow, cmp::Ordering};

use crate::domain::Listing;

use super::SortKey;

/// Compares two [`Listing`]s according to the provided [`SortKey`].
///
/// [`SortKey::Relevance`] considers all [`Listing`]s equal.
#[must_use]
pub fn compare(key: SortKey, a: &Listing, b: &Listing) -> Ordering {
    match key {
        SortKey::Relevance => Ordering::Equal,
        SortKey::PriceLow => a.price.amount().cmp(&b.price.amount()),
        SortKey::PriceHigh => b.price.amount().cmp(&a.price.amount()),
        SortKey::Newest => b.available_from.cmp(&a.available_from),
        SortKey::Rating => b.rating.cmp(&a.rating),
    }
}

/// Sorts the provided `listings` in place according to the provided
/// [`SortKey`].
///
/// The sort is stable: [`Listing`]s comparing equal keep their relative
/// order.
pub fn sort<L: Borrow<Listing>>(listings: &mut [L], key: SortKey) {
    if key == SortKey::Relevance {
        return;
    }
    listings.sort_by(|a, b| compare(key, a.borrow(), b.borrow()));
}

#[cfg(test)]
mod spec {
    use common::{Date, Money, Rating};
    use rust_decimal::Decimal;

    use crate::{
        domain::{listing, Listing},
        read::listing::{fixture, SortKey},
    };

    use super::sort;

    fn priced(id: &str, amount: i64) -> Listing {
        Listing {
            price: Money::new(Decimal::from(amount), common::money::Currency::Kes)
                .unwrap(),
            ..fixture::listing(id)
        }
    }

    fn ids(listings: &[Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.to_string()).collect()
    }

    #[test]
    fn relevance_keeps_order() {
        let mut listings = vec![
            priced("c", 300),
            priced("a", 100),
            priced("b", 200),
        ];

        sort(&mut listings, SortKey::Relevance);

        assert_eq!(ids(&listings), ["c", "a", "b"]);
    }

    #[test]
    fn price_low_and_high_are_stable() {
        let listings = vec![
            priced("p1", 50_000),
            priced("p2", 30_000),
            priced("p3", 50_000),
            priced("p4", 10_000),
        ];

        let mut low = listings.clone();
        sort(&mut low, SortKey::PriceLow);
        assert_eq!(ids(&low), ["p4", "p2", "p1", "p3"]);

        let mut high = listings;
        sort(&mut high, SortKey::PriceHigh);
        assert_eq!(ids(&high), ["p1", "p3", "p2", "p4"]);
    }

    #[test]
    fn newest_puts_latest_availability_first() {
        let available = |id: &str, day: u8| Listing {
            available_from: Date::from_calendar_date(2025, 3, day)
                .unwrap()
                .coerce(),
            ..fixture::listing(id)
        };
        let mut listings = vec![
            available("a", 1),
            available("b", 20),
            available("c", 1),
            available("d", 10),
        ];

        sort(&mut listings, SortKey::Newest);

        assert_eq!(ids(&listings), ["b", "d", "a", "c"]);
    }

    #[test]
    fn rating_puts_best_first() {
        let rated = |id: &str, score: i64| Listing {
            rating: Rating::new(Decimal::new(score, 1)).unwrap(),
            review_count: 10,
            ..fixture::listing(id)
        };
        let mut listings = vec![
            rated("a", 35),
            rated("b", 48),
            rated("c", 41),
            rated("d", 48),
        ];

        sort(&mut listings, SortKey::Rating);

        assert_eq!(ids(&listings), ["b", "d", "c", "a"]);
    }

    #[test]
    fn sorts_shared_listings() {
        let mut listings = vec![
            std::sync::Arc::new(priced("a", 3)),
            std::sync::Arc::new(priced("b", 1)),
        ];

        sort(&mut listings, SortKey::PriceLow);

        assert_eq!(listings[0].id, listing::Id::new("b").unwrap());
    }
}
