//! Catalogue records as served by the backend.
//!
//! These mirror the wire shape (camelCase JSON) and carry no display logic;
//! see [`crate::domain::normalizer`] for the view-model transformations.

use serde::{Deserialize, Serialize};

/// Backend identifier for a product.
pub type ProductId = u64;

/// Categorical partition of travel products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    /// Trips abroad.
    Overseas,
    /// Trips within the country.
    Domestic,
    /// Any value the client does not recognise.
    #[serde(other)]
    Unknown,
}

/// Travel product listing.
///
/// `curr_price <= prev_price` is expected but not enforced. Prices and the
/// discount rate are plain JSON numbers and may carry a fractional part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier.
    pub id: ProductId,
    /// Overseas or domestic.
    pub trip_type: TripType,
    /// Primary image; may be origin-relative (`/uploads/...`).
    #[serde(default)]
    pub img_src: Option<String>,
    /// Discount percentage, when discounted.
    #[serde(default)]
    pub discount_rate: Option<f64>,
    /// Listing title.
    pub title: String,
    /// Short descriptive tags.
    #[serde(default)]
    pub info_group: Vec<String>,
    /// Price before discount.
    pub prev_price: f64,
    /// Current price.
    pub curr_price: f64,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
    /// Units sold; drives popularity ranking.
    pub sold: u64,
    /// Introduction heading on the detail page.
    #[serde(default)]
    pub intro_title: Option<String>,
    /// Introduction body on the detail page.
    #[serde(default)]
    pub intro_text: Option<String>,
    /// Secondary introduction image; may be origin-relative.
    #[serde(default)]
    pub intro_img_src: Option<String>,
    /// Creation timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the backend.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Promotional carousel entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideItem {
    /// Backend identifier.
    pub id: u64,
    /// Link target when the slide is clicked.
    pub url: String,
    /// Background image path.
    pub bg_src: String,
    /// Slide title.
    pub title: String,
    /// Headline copy.
    pub headline: String,
    /// Promotion period label.
    pub date: String,
    /// Foreground image path.
    pub img_src: String,
    /// Alternative text for the foreground image.
    pub img_alt: String,
    /// Creation timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the backend.
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    //! Wire-format coverage for catalogue records.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("overseas", TripType::Overseas)]
    #[case("domestic", TripType::Domestic)]
    #[case("cruise", TripType::Unknown)]
    fn trip_type_decodes_known_and_unknown_values(#[case] raw: &str, #[case] expected: TripType) {
        let decoded: TripType = serde_json::from_value(json!(raw)).expect("trip type decodes");
        assert_eq!(decoded, expected);
    }

    #[test]
    fn product_decodes_camel_case_payload_with_optional_fields_missing() {
        let payload = json!({
            "id": 7,
            "tripType": "overseas",
            "imgSrc": "/uploads/paris.png",
            "title": "Paris in four days",
            "infoGroup": ["guided", "hotel"],
            "prevPrice": 1_200_000,
            "currPrice": 990_000,
            "rating": 4.7,
            "sold": 321,
            "createdAt": "2025-05-01T09:00:00",
            "updatedAt": "2025-05-02T09:00:00"
        });

        let product: Product = serde_json::from_value(payload).expect("product decodes");
        assert_eq!(product.id, 7);
        assert_eq!(product.trip_type, TripType::Overseas);
        assert_eq!(product.img_src.as_deref(), Some("/uploads/paris.png"));
        assert!(product.discount_rate.is_none());
        assert!(product.intro_img_src.is_none());
        assert_eq!(product.info_group, vec!["guided", "hotel"]);
    }

    #[test]
    fn product_accepts_null_image() {
        let payload = json!({
            "id": 1,
            "tripType": "domestic",
            "imgSrc": null,
            "title": "Jeju",
            "prevPrice": 10,
            "currPrice": 9,
            "rating": 3.0,
            "sold": 0
        });

        let product: Product = serde_json::from_value(payload).expect("product decodes");
        assert!(product.img_src.is_none());
        assert!(product.info_group.is_empty());
    }

    #[test]
    fn listing_accepts_fractional_prices_and_discounts() {
        let payload = json!([
            {
                "id": 1,
                "tripType": "overseas",
                "title": "Lisbon",
                "discountRate": 12.5,
                "prevPrice": 100000.0,
                "currPrice": 87_500,
                "rating": 4.0,
                "sold": 5
            },
            {
                "id": 2,
                "tripType": "domestic",
                "title": "Busan",
                "discountRate": 10,
                "prevPrice": 50_000,
                "currPrice": 45_000,
                "rating": 3.5,
                "sold": 2
            }
        ]);

        let listing: Vec<Product> = serde_json::from_value(payload).expect("listing decodes");

        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].discount_rate, Some(12.5));
        assert_eq!(listing[0].prev_price, 100_000.0);
        assert_eq!(listing[0].curr_price, 87_500.0);
        assert_eq!(listing[1].discount_rate, Some(10.0));
    }
}
