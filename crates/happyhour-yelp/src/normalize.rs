//! Flattening of raw search results into the fixed record written to disk.

use serde::{Deserialize, Serialize};

use crate::types::{Coordinates, RawBusiness};

/// Price written when the service gives none.
pub const PRICE_UNKNOWN: &str = "N/A";

/// A business reduced to the fields persisted in the output file.
///
/// Absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBusiness {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
    /// `display_address` lines joined with `", "`.
    pub address: String,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub coordinates: Option<Coordinates>,
    /// One entry per category; `None` where the category had no title.
    pub categories: Vec<Option<String>>,
    /// `"N/A"` when the service omitted the price, `None` when it sent `null`.
    pub price: Option<String>,
}

#[must_use]
pub fn normalize_business(raw: &RawBusiness) -> NormalizedBusiness {
    let location = raw.location.as_ref();

    NormalizedBusiness {
        name: raw.name.clone(),
        rating: raw.rating,
        review_count: raw.review_count,
        address: location
            .map(|l| l.display_address.join(", "))
            .unwrap_or_default(),
        city: location.and_then(|l| l.city.clone()),
        zip_code: location.and_then(|l| l.zip_code.clone()),
        phone: raw.phone.clone(),
        website: raw.url.clone(),
        coordinates: raw.coordinates,
        categories: raw.categories.iter().map(|c| c.title.clone()).collect(),
        price: raw
            .price
            .clone()
            .unwrap_or_else(|| Some(PRICE_UNKNOWN.to_string())),
    }
}

/// Normalizes every business, preserving order and length.
#[must_use]
pub fn normalize_businesses(raw: &[RawBusiness]) -> Vec<NormalizedBusiness> {
    raw.iter().map(normalize_business).collect()
}
