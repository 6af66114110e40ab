//! [`Args`] definitions.

use std::num::NonZeroUsize;

use clap::Parser;
use rust_decimal::Decimal;
use service::{
    domain::listing,
    read::listing::{criteria, list::PageSize, Criteria, Furnished, SortKey},
};

/// Browser of the rental listings.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Search filters.
    #[command(flatten)]
    pub filters: Filters,

    /// Page to show.
    #[arg(short, long, default_value = "1")]
    pub page: NonZeroUsize,

    /// Number of listings on a page (12, 24 or 48).
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<PageSize>,

    /// IDs of listings to like (or unlike, if liked already).
    #[arg(long = "like", value_name = "ID")]
    pub likes: Vec<listing::Id>,

    /// Show the liked listings instead of the search results.
    #[arg(long)]
    pub liked: bool,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Search filters of [`Args`].
#[derive(Clone, Debug, Default, clap::Args)]
pub struct Filters {
    /// Text to look for in titles, descriptions and locations.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Part of a location to look for.
    #[arg(short, long)]
    pub location: Option<String>,

    /// Exact property type (`Apartment`, `House`, `Villa`, etc).
    #[arg(long = "type", value_name = "TYPE")]
    pub property_type: Option<String>,

    /// Lowest monthly rent.
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Highest monthly rent.
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Required amenities.
    #[arg(long = "amenity", value_name = "AMENITY")]
    pub amenities: Vec<listing::Amenity>,

    /// Show only verified listings.
    #[arg(long)]
    pub verified: bool,

    /// Show only listings with parking.
    #[arg(long)]
    pub parking: bool,

    /// Furnishing requirement (`any`, `furnished` or `unfurnished`).
    #[arg(long)]
    pub furnished: Option<Furnished>,

    /// Show only pet friendly listings.
    #[arg(long)]
    pub pet_friendly: bool,

    /// Smallest floor area, in square feet.
    #[arg(long)]
    pub min_area: Option<listing::Area>,

    /// Largest floor area, in square feet.
    #[arg(long)]
    pub max_area: Option<listing::Area>,

    /// Order of the results (`relevance`, `price-low`, `price-high`,
    /// `newest` or `rating`).
    #[arg(long)]
    pub sort: Option<String>,
}

impl From<Filters> for Criteria {
    fn from(filters: Filters) -> Self {
        let Filters {
            search,
            location,
            property_type,
            min_price,
            max_price,
            amenities,
            verified,
            parking,
            furnished,
            pet_friendly,
            min_area,
            max_area,
            sort,
        } = filters;

        Self {
            search_text: search.unwrap_or_default(),
            location: location.unwrap_or_default(),
            property_type: property_type.unwrap_or_default(),
            price_range: min_price
                .unwrap_or(*criteria::PRICE_RANGE.start())
                ..=max_price.unwrap_or(*criteria::PRICE_RANGE.end()),
            amenities: amenities.into_iter().collect(),
            verified_only: verified,
            parking_available: parking,
            furnished: furnished.unwrap_or_default(),
            pet_friendly,
            area_range: min_area.unwrap_or(*criteria::AREA_RANGE.start())
                ..=max_area.unwrap_or(*criteria::AREA_RANGE.end()),
            sort_by: sort.as_deref().map(SortKey::parse_lossy).unwrap_or_default(),
        }
    }
}

/// Parses a [`PageSize`] out of the provided command line value.
fn parse_page_size(value: &str) -> Result<PageSize, String> {
    let size = value.parse::<usize>().map_err(|e| e.to_string())?;
    PageSize::try_from(size).map_err(|e| e.to_string())
}
