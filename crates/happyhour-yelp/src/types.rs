//! Yelp Fusion `businesses/search` response types.
//!
//! Only the fields the extractor consumes are modelled. Every field is
//! optional on the wire; unknown fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of a successful `businesses/search` response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub businesses: Vec<RawBusiness>,
    /// Total matches the service reports for the query, across all pages.
    #[serde(default)]
    pub total: u64,
}

/// One business as returned by the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBusiness {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u64>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Price tier such as `"$$"`. Outer `None` means the key was absent,
    /// `Some(None)` means it was present as `null`.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub price: Option<Option<String>>,
}

/// Wraps any value that is present on the wire, `null` included, in `Some`,
/// leaving absent keys to `#[serde(default)]`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub display_address: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
}

/// Geographic point, passed through to the output unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_tolerates_missing_fields() {
        let page: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(page.businesses.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn raw_business_parses_full_record() {
        let json = serde_json::json!({
            "id": "abc",
            "name": "Tipsy Cow",
            "rating": 4.0,
            "review_count": 312,
            "location": {
                "address1": "123 Main St",
                "display_address": ["123 Main St", "Madison, WI 53703"],
                "city": "Madison",
                "zip_code": "53703"
            },
            "phone": "+16085551234",
            "url": "https://www.yelp.com/biz/tipsy-cow",
            "coordinates": { "latitude": 43.07, "longitude": -89.38 },
            "categories": [{ "alias": "bars", "title": "Bars" }],
            "price": "$$"
        });
        let business: RawBusiness = serde_json::from_value(json).unwrap();
        assert_eq!(business.name.as_deref(), Some("Tipsy Cow"));
        assert_eq!(business.review_count, Some(312));
        let location = business.location.unwrap();
        assert_eq!(location.display_address.len(), 2);
        assert_eq!(location.zip_code.as_deref(), Some("53703"));
        assert_eq!(business.categories[0].title.as_deref(), Some("Bars"));
        assert_eq!(business.price, Some(Some("$$".to_string())));
    }

    #[test]
    fn price_distinguishes_absent_from_null() {
        let absent: RawBusiness = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.price, None);

        let null: RawBusiness = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert_eq!(null.price, Some(None));
    }
}
