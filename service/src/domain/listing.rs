//! [`Listing`] definitions.

use std::{collections::BTreeSet, str::FromStr};

#[cfg(doc)]
use common::Date;
use common::{define_kind, unit, DateOf, Money, Rating};
use derive_more::{AsRef, Display, Into};
use serde::{Deserialize, Serialize};

/// Property offered for rent on the marketplace.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Title`] of this [`Listing`].
    pub title: Title,

    /// [`Description`] of this [`Listing`].
    pub description: Description,

    /// [`Location`] of this [`Listing`].
    pub location: Location,

    /// [`PropertyType`] of this [`Listing`].
    pub property_type: PropertyType,

    /// Monthly rent of this [`Listing`].
    pub price: Money,

    /// [`Area`] of this [`Listing`].
    pub area: Area,

    /// Average review [`Rating`] of this [`Listing`].
    pub rating: Rating,

    /// Number of reviews the [`rating`] is averaged over.
    ///
    /// [`rating`]: Listing::rating
    pub review_count: ReviewCount,

    /// Indicator whether this [`Listing`] was verified by a scout.
    pub verified: bool,

    /// Indicator whether this [`Listing`] is rented out furnished.
    pub furnished: bool,

    /// Indicator whether pets are allowed in this [`Listing`].
    pub pet_friendly: bool,

    /// [`Amenity`]s of this [`Listing`].
    pub amenities: BTreeSet<Amenity>,

    /// [`Date`] since which this [`Listing`] is available.
    pub available_from: AvailabilityDate,
}

impl Listing {
    /// Indicates whether this [`Listing`] offers the provided amenity.
    ///
    /// Amenities are compared case-insensitively.
    #[must_use]
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a.matches(amenity))
    }
}

/// Defines a validated text newtype stored as a trimmed non-empty [`String`]
/// of a bounded length.
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        $name:ident(max = $max:literal)
    ) => {
        #[doc = $doc]
        #[derive(
            AsRef,
            Clone,
            Debug,
            Deserialize,
            Display,
            Eq,
            Hash,
            Into,
            Ord,
            PartialEq,
            PartialOrd,
            Serialize,
        )]
        #[as_ref(forward)]
        #[serde(into = "String", try_from = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new [`", stringify!($name), "`] if the given `text` is valid.")]
            #[must_use]
            pub fn new(text: impl Into<String>) -> Option<Self> {
                let text = text.into();
                Self::check(&text).then_some(Self(text))
            }

            #[doc = concat!("Checks whether the given `text` is a valid [`", stringify!($name), "`].")]
            fn check(text: impl AsRef<str>) -> bool {
                let text = text.as_ref();
                text.trim() == text && !text.is_empty() && text.len() <= $max
            }
        }

        impl FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
                    .ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }

        impl TryFrom<String> for $name {
            type Error = &'static str;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
                    .ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    };
}

define_text! {
    #[doc = "ID of a [`Listing`]."]
    Id(max = 128)
}

define_text! {
    #[doc = "Title of a [`Listing`]."]
    Title(max = 256)
}

define_text! {
    #[doc = "Free-form description of a [`Listing`]."]
    Description(max = 4096)
}

define_text! {
    #[doc = "Human-readable location of a [`Listing`] (neighbourhood and \
             city)."]
    Location(max = 512)
}

define_text! {
    #[doc = "Amenity offered by a [`Listing`] (`WiFi`, `Parking`, etc)."]
    Amenity(max = 128)
}

impl Amenity {
    /// Name of the amenity required by the parking toggle of the search
    /// criteria.
    pub const PARKING: &'static str = "Parking";

    /// Indicates whether this [`Amenity`] is the provided one, ignoring the
    /// case.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0
            .chars()
            .flat_map(char::to_lowercase)
            .eq(other.chars().flat_map(char::to_lowercase))
    }
}

define_kind! {
    #[case = "PascalCase"]
    #[doc = "Type of a [`Listing`] property."]
    enum PropertyType {
        #[doc = "An apartment in a residential building."]
        Apartment,

        #[doc = "A standalone house."]
        House,

        #[doc = "A single-room unit with a kitchenette."]
        Studio,

        #[doc = "A single room with a shared or attached bathroom."]
        Bedsitter,

        #[doc = "A multi-storey unit sharing walls with neighbours."]
        Maisonette,

        #[doc = "A detached luxury house."]
        Villa,

        #[doc = "A terraced house in a gated compound."]
        Townhouse,
    }
}

/// Floor area of a [`Listing`], in square feet.
pub type Area = u32;

/// Number of reviews of a [`Listing`].
pub type ReviewCount = u32;

/// [`Date`] since which a [`Listing`] is available.
pub type AvailabilityDate = DateOf<(Listing, unit::Availability)>;

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Amenity, Id, PropertyType, Title};

    #[test]
    fn text_is_trimmed_and_non_empty() {
        assert!(Title::new("Beautiful Villa in Karen").is_some());

        assert!(Title::new("").is_none());
        assert!(Title::new(" Villa").is_none());
        assert!(Title::new("Villa ").is_none());
        assert!(Title::new("x".repeat(257)).is_none());

        assert_eq!(Id::from_str("property-7").unwrap().to_string(), "property-7");
        assert!(Id::from_str("").is_err());
    }

    #[test]
    fn amenities_match_ignoring_case() {
        let wifi = Amenity::new("WiFi").unwrap();

        assert!(wifi.matches("WiFi"));
        assert!(wifi.matches("wifi"));
        assert!(wifi.matches("WIFI"));
        assert!(!wifi.matches("Wi-Fi"));
        assert!(!wifi.matches("WiFi "));
    }

    #[test]
    fn property_types_use_pascal_case_names() {
        assert_eq!(PropertyType::Apartment.as_ref(), "Apartment");
        assert_eq!(PropertyType::Townhouse.to_string(), "Townhouse");
        assert_eq!(
            PropertyType::from_str("Bedsitter"),
            Ok(PropertyType::Bedsitter),
        );
        assert!(PropertyType::from_str("bedsitter").is_err());
        assert_eq!(PropertyType::all().count(), 7);
    }
}
