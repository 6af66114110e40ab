//! Predicate deciding whether a [`Listing`] matches [`Criteria`].

use crate::domain::{listing::Amenity, Listing};

use super::{Criteria, Furnished};

/// Named constraint of [`Criteria`].
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Name of this [`Rule`].
    pub name: &'static str,

    /// Checks whether a [`Listing`] satisfies this [`Rule`].
    pub check: fn(&Listing, &Criteria) -> bool,
}

/// All the [`Rule`]s a [`Listing`] must satisfy to match [`Criteria`].
pub const RULES: &[Rule] = &[
    Rule {
        name: "search_text",
        check: search_text,
    },
    Rule {
        name: "location",
        check: location,
    },
    Rule {
        name: "property_type",
        check: property_type,
    },
    Rule {
        name: "price_range",
        check: price_range,
    },
    Rule {
        name: "amenities",
        check: amenities,
    },
    Rule {
        name: "verified_only",
        check: verified_only,
    },
    Rule {
        name: "parking_available",
        check: parking_available,
    },
    Rule {
        name: "furnished",
        check: furnished,
    },
    Rule {
        name: "pet_friendly",
        check: pet_friendly,
    },
    Rule {
        name: "area_range",
        check: area_range,
    },
];

/// Checks whether the provided [`Listing`] satisfies every [`Rule`] of the
/// provided [`Criteria`].
#[must_use]
pub fn matches(listing: &Listing, criteria: &Criteria) -> bool {
    RULES.iter().all(|rule| (rule.check)(listing, criteria))
}

/// Returns names of the [`Rule`]s the provided [`Listing`] fails to satisfy.
pub fn failed_rules<'c>(
    listing: &'c Listing,
    criteria: &'c Criteria,
) -> impl Iterator<Item = &'static str> + 'c {
    RULES
        .iter()
        .filter(|rule| !(rule.check)(listing, criteria))
        .map(|rule| rule.name)
}

/// Checks whether `needle` occurs in `haystack`, ignoring the case.
fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn search_text(listing: &Listing, criteria: &Criteria) -> bool {
    let text = criteria.search_text.as_str();
    text.is_empty()
        || contains_ignoring_case(listing.title.as_ref(), text)
        || contains_ignoring_case(listing.description.as_ref(), text)
        || contains_ignoring_case(listing.location.as_ref(), text)
}

fn location(listing: &Listing, criteria: &Criteria) -> bool {
    criteria.location.is_empty()
        || contains_ignoring_case(listing.location.as_ref(), &criteria.location)
}

// Case-sensitive, unlike the text rules.
fn property_type(listing: &Listing, criteria: &Criteria) -> bool {
    !criteria.constrains_property_type()
        || listing.property_type.as_ref() == criteria.property_type
}

fn price_range(listing: &Listing, criteria: &Criteria) -> bool {
    criteria.price_range.contains(&listing.price.amount())
}

fn amenities(listing: &Listing, criteria: &Criteria) -> bool {
    criteria
        .amenities
        .iter()
        .all(|required| listing.has_amenity(required.as_ref()))
}

fn verified_only(listing: &Listing, criteria: &Criteria) -> bool {
    !criteria.verified_only || listing.verified
}

fn parking_available(listing: &Listing, criteria: &Criteria) -> bool {
    !criteria.parking_available || listing.has_amenity(Amenity::PARKING)
}

fn furnished(listing: &Listing, criteria: &Criteria) -> bool {
    match criteria.furnished {
        Furnished::Any => true,
        Furnished::Furnished => listing.furnished,
        Furnished::Unfurnished => !listing.furnished,
    }
}

fn pet_friendly(listing: &Listing, criteria: &Criteria) -> bool {
    !criteria.pet_friendly || listing.pet_friendly
}

fn area_range(listing: &Listing, criteria: &Criteria) -> bool {
    criteria.area_range.contains(&listing.area)
}
