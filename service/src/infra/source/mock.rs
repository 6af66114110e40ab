//! Mock [`Listing`]s dataset.

use std::collections::BTreeSet;

use common::{money::Currency, Date, Money, Rating};
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use rust_decimal::Decimal;

use crate::domain::{
    listing::{self, PropertyType},
    Listing,
};

/// [`PropertyType`]s the generated [`Listing`]s cycle through.
const TYPES: [PropertyType; 6] = [
    PropertyType::Apartment,
    PropertyType::House,
    PropertyType::Studio,
    PropertyType::Bedsitter,
    PropertyType::Maisonette,
    PropertyType::Villa,
];

/// Neighbourhoods the generated [`Listing`]s cycle through.
const NEIGHBOURHOODS: [&str; 8] = [
    "Westlands",
    "Karen",
    "Kilimani",
    "Lavington",
    "Runda",
    "Muthaiga",
    "Kileleshwa",
    "Parklands",
];

/// Amenities the generated [`Listing`]s take a prefix of.
const AMENITIES: [&str; 8] = [
    "WiFi",
    "Parking",
    "Security",
    "Swimming Pool",
    "Gym",
    "Laundry",
    "Balcony",
    "Garden",
];

/// Default number of generated [`Listing`]s.
pub const COUNT: usize = 100;

/// Generates `count` [`Listing`]s with IDs `property-1`, `property-2`, etc.
///
/// Types, neighbourhoods and the verified/furnished/pet friendly flags are
/// derived from the position. Prices, areas, ratings, amenities and
/// availability dates (within 90 days after `today`) are drawn from a
/// random generator seeded with the provided `seed`, so the same `seed`
/// always yields the same dataset.
#[must_use]
pub fn generate(count: usize, seed: u64, today: Date) -> Vec<Listing> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .filter_map(|i| listing(i, &mut rng, today))
        .collect()
}

/// Generates the `i`th [`Listing`].
///
/// [`None`] is only returned if the availability date overflows.
fn listing(i: usize, rng: &mut StdRng, today: Date) -> Option<Listing> {
    let ty = TYPES[i % TYPES.len()];
    let place = NEIGHBOURHOODS[i % NEIGHBOURHOODS.len()];
    let amenities = &AMENITIES[..rng.gen_range(2..=5)];

    Some(Listing {
        id: listing::Id::new(format!("property-{}", i + 1))?,
        title: listing::Title::new(format!("Beautiful {ty} in {place}"))?,
        description: listing::Description::new(format!(
            "This is a wonderful {} located in the heart of {place}.",
            ty.as_ref().to_lowercase(),
        ))?,
        location: listing::Location::new(format!("{place}, Nairobi"))?,
        property_type: ty,
        price: Money::new(
            Decimal::from(rng.gen_range(20_000..170_000_u32)),
            Currency::Kes,
        )?,
        area: rng.gen_range(500..2500),
        rating: Rating::new(Decimal::new(rng.gen_range(30..=50), 1))?,
        review_count: rng.gen_range(5..105),
        verified: i % 3 == 0,
        furnished: i % 2 == 0,
        pet_friendly: i % 4 == 0,
        amenities: amenities
            .iter()
            .copied()
            .map(listing::Amenity::new)
            .collect::<Option<BTreeSet<_>>>()?,
        available_from: today.add_days(rng.gen_range(0..90))?.coerce(),
    })
}
