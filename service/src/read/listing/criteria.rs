//! [`Criteria`] of a [`Listing`] search.

use std::{collections::BTreeSet, ops::RangeInclusive};

use common::define_kind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

#[cfg(doc)]
use crate::domain::Listing;
use crate::domain::listing::{Amenity, Area};

/// Property type meaning "no constraint on the property type".
pub const ANY_TYPE: &str = "Any Type";

/// Default bounds of the [`Criteria::price_range`].
pub const PRICE_RANGE: RangeInclusive<Decimal> =
    Decimal::ZERO..=Decimal::from_parts(200_000, 0, 0, false, 0);

/// Default bounds of the [`Criteria::area_range`].
pub const AREA_RANGE: RangeInclusive<Area> = 0..=5000;

/// Search intent of a user browsing [`Listing`]s.
///
/// Replaced as a whole on every edit. Empty strings, `false` toggles and
/// [`Furnished::Any`] impose no constraint.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, SmartDefault)]
#[serde(default, rename_all = "camelCase")]
pub struct Criteria {
    /// Free text to look for in titles, descriptions and locations.
    pub search_text: String,

    /// Part of a location to look for.
    pub location: String,

    /// Exact name of a property type, or [`ANY_TYPE`].
    pub property_type: String,

    /// Inclusive bounds of the monthly rent amount.
    #[default(PRICE_RANGE)]
    pub price_range: RangeInclusive<Decimal>,

    /// Amenities every matching listing must offer.
    pub amenities: BTreeSet<Amenity>,

    /// Whether only verified listings match.
    pub verified_only: bool,

    /// Whether only listings offering [`Amenity::PARKING`] match.
    pub parking_available: bool,

    /// Furnishing requirement.
    pub furnished: Furnished,

    /// Whether only pet friendly listings match.
    pub pet_friendly: bool,

    /// Inclusive bounds of the floor area.
    #[default(AREA_RANGE)]
    pub area_range: RangeInclusive<Area>,

    /// Order of the matching listings.
    pub sort_by: SortKey,
}

impl Criteria {
    /// Adds the provided [`Amenity`] to the required ones, or removes it if
    /// it's required already.
    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if !self.amenities.remove(&amenity) {
            _ = self.amenities.insert(amenity);
        }
    }

    /// Returns the number of active constraints of these [`Criteria`].
    ///
    /// [`Criteria::sort_by`] is never counted.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            !self.search_text.is_empty(),
            !self.location.is_empty(),
            self.constrains_property_type(),
            self.price_range.start() > PRICE_RANGE.start()
                || self.price_range.end() < PRICE_RANGE.end(),
            !self.amenities.is_empty(),
            self.verified_only,
            self.parking_available,
            self.furnished != Furnished::Any,
            self.pet_friendly,
            self.area_range.start() > AREA_RANGE.start()
                || self.area_range.end() < AREA_RANGE.end(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Indicates whether these [`Criteria`] constrain the property type.
    #[must_use]
    pub fn constrains_property_type(&self) -> bool {
        !self.property_type.is_empty() && self.property_type != ANY_TYPE
    }
}

define_kind! {
    #[case = "lowercase"]
    #[doc = "Furnishing requirement of [`Criteria`]."]
    #[derive(SmartDefault)]
    enum Furnished {
        #[doc = "Furnished and unfurnished listings match."]
        #[default]
        Any,

        #[doc = "Only furnished listings match."]
        Furnished,

        #[doc = "Only unfurnished listings match."]
        Unfurnished,
    }
}

define_kind! {
    #[case = "kebab-case"]
    #[doc = "Order of the [`Listing`]s matching [`Criteria`]."]
    #[derive(SmartDefault)]
    enum SortKey {
        #[doc = "Order of the underlying dataset."]
        #[default]
        Relevance,

        #[doc = "Cheapest first."]
        PriceLow,

        #[doc = "Most expensive first."]
        PriceHigh,

        #[doc = "Latest availability date first."]
        Newest,

        #[doc = "Highest rating first."]
        Rating,
    }
}

impl SortKey {
    /// Parses a [`SortKey`], falling back to [`SortKey::Relevance`] for
    /// unrecognized input.
    #[must_use]
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::domain::listing::Amenity;

    use super::{Criteria, Furnished, SortKey, ANY_TYPE};

    #[test]
    fn defaults_impose_no_constraint() {
        let criteria = Criteria::default();

        assert_eq!(criteria.active_count(), 0);
        assert_eq!(*criteria.price_range.start(), Decimal::ZERO);
        assert_eq!(*criteria.price_range.end(), Decimal::from(200_000));
        assert_eq!(criteria.area_range, 0..=5000);
        assert_eq!(criteria.furnished, Furnished::Any);
        assert_eq!(criteria.sort_by, SortKey::Relevance);
    }

    #[test]
    fn counts_every_active_constraint_once() {
        let mut criteria = Criteria {
            search_text: "garden".into(),
            location: "Karen".into(),
            property_type: "Villa".into(),
            price_range: Decimal::from(30_000)..=Decimal::from(100_000),
            verified_only: true,
            parking_available: true,
            furnished: Furnished::Unfurnished,
            pet_friendly: true,
            area_range: 0..=1200,
            sort_by: SortKey::Rating,
            ..Criteria::default()
        };
        criteria.toggle_amenity(Amenity::new("WiFi").unwrap());
        criteria.toggle_amenity(Amenity::new("Gym").unwrap());

        assert_eq!(criteria.active_count(), 10);

        criteria.property_type = ANY_TYPE.into();
        assert_eq!(criteria.active_count(), 9);
    }

    #[test]
    fn toggles_amenities() {
        let mut criteria = Criteria::default();
        let parking = Amenity::new("Parking").unwrap();

        criteria.toggle_amenity(parking.clone());
        assert!(criteria.amenities.contains(&parking));

        criteria.toggle_amenity(parking.clone());
        assert!(criteria.amenities.is_empty());
    }

    #[test]
    fn sort_keys_fall_back_to_relevance() {
        assert_eq!(SortKey::parse_lossy("price-low"), SortKey::PriceLow);
        assert_eq!(SortKey::parse_lossy("price-high"), SortKey::PriceHigh);
        assert_eq!(SortKey::parse_lossy("newest"), SortKey::Newest);
        assert_eq!(SortKey::parse_lossy("rating"), SortKey::Rating);
        assert_eq!(SortKey::parse_lossy("relevance"), SortKey::Relevance);
        assert_eq!(SortKey::parse_lossy("cheapest"), SortKey::Relevance);
        assert_eq!(SortKey::parse_lossy(""), SortKey::Relevance);
    }

    #[test]
    fn deserializes_partial_criteria() {
        let criteria = serde_json::from_str::<Criteria>(
            r#"{"location": "Westlands", "furnished": "unfurnished", "sortBy": "price-high"}"#,
        )
        .unwrap();

        assert_eq!(criteria.location, "Westlands");
        assert_eq!(criteria.furnished, Furnished::Unfurnished);
        assert_eq!(criteria.sort_by, SortKey::PriceHigh);
        assert_eq!(criteria.price_range, Criteria::default().price_range);
    }
}
