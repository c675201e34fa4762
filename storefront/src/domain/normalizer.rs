//! Pure reshaping of catalogue records into display-ready form.
//!
//! Nothing here performs I/O or depends on the gateway; every function is
//! deterministic in its inputs.

use thiserror::Error;

use super::catalogue::{Product, TripType};

/// Path prefix for backend-hosted assets that must be made absolute.
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Number of symbols produced by [`star_buckets`].
pub const STAR_COUNT: usize = 5;

/// Highest valid rating.
pub const MAX_RATING: f64 = 5.0;

/// One rendered rating star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarKind {
    /// Filled star.
    Full,
    /// Half-filled star.
    Half,
    /// Outline star.
    Empty,
}

/// Precondition failure for [`star_buckets`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RatingError {
    /// Rating is NaN or outside `[0, 5]`.
    #[error("rating {rating} is outside [0, 5]")]
    OutOfRange {
        /// Offending rating.
        rating: f64,
    },
}

/// Order products by units sold, most popular first.
///
/// The sort is stable: products with equal `sold` keep their input order.
///
/// # Examples
/// ```
/// use storefront::domain::normalizer::rank_by_popularity;
/// # use storefront::domain::Product;
/// # fn product(id: u64, sold: u64) -> Product {
/// #     serde_json::from_value(serde_json::json!({
/// #         "id": id, "tripType": "overseas", "title": "t",
/// #         "prevPrice": 1, "currPrice": 1, "rating": 4.0, "sold": sold
/// #     })).unwrap()
/// # }
///
/// let ranked = rank_by_popularity(vec![product(1, 5), product(2, 9), product(3, 5)]);
/// let ids: Vec<u64> = ranked.iter().map(|p| p.id).collect();
/// assert_eq!(ids, vec![2, 1, 3]);
/// ```
pub fn rank_by_popularity(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(|left, right| right.sold.cmp(&left.sold));
    products
}

/// Products whose trip type equals `trip_type`, in their original order.
pub fn partition_by_trip_type(products: &[Product], trip_type: TripType) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.trip_type == trip_type)
        .cloned()
        .collect()
}

/// Make a backend asset path absolute.
///
/// - `None` or an empty path yields `None` (no image).
/// - Paths starting with [`UPLOADS_PREFIX`] are prefixed with `base_origin`
///   (a trailing `/` on the origin is ignored).
/// - Anything else is returned unchanged.
///
/// # Examples
/// ```
/// use storefront::domain::normalizer::resolve_asset_url;
///
/// let base = "http://h:8080";
/// assert_eq!(resolve_asset_url(None, base), None);
/// assert_eq!(
///     resolve_asset_url(Some("/uploads/x.png"), base).as_deref(),
///     Some("http://h:8080/uploads/x.png")
/// );
/// assert_eq!(
///     resolve_asset_url(Some("https://cdn/x.png"), base).as_deref(),
///     Some("https://cdn/x.png")
/// );
/// ```
pub fn resolve_asset_url(path: Option<&str>, base_origin: &str) -> Option<String> {
    let path = path.filter(|value| !value.is_empty())?;
    if path.starts_with(UPLOADS_PREFIX) {
        Some(format!("{}{path}", base_origin.trim_end_matches('/')))
    } else {
        Some(path.to_owned())
    }
}

/// Bucket a rating into five star symbols.
///
/// `floor(rating)` full stars, then one half star when the fractional part is
/// at least `0.5`, then empty stars up to five.
///
/// # Errors
///
/// Returns [`RatingError::OutOfRange`] for NaN or values outside `[0, 5]`.
///
/// # Examples
/// ```
/// use storefront::domain::normalizer::{star_buckets, StarKind::*};
///
/// assert_eq!(star_buckets(4.7).unwrap(), [Full, Full, Full, Full, Half]);
/// assert_eq!(star_buckets(3.2).unwrap(), [Full, Full, Full, Empty, Empty]);
/// assert!(star_buckets(5.5).is_err());
/// ```
pub fn star_buckets(rating: f64) -> Result<[StarKind; STAR_COUNT], RatingError> {
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(RatingError::OutOfRange { rating });
    }

    let whole = rating.floor();
    // Bounded by the range check above, so the cast cannot truncate.
    let full = whole as usize;
    let half = usize::from(rating - whole >= 0.5);

    let mut stars = [StarKind::Empty; STAR_COUNT];
    for (index, star) in stars.iter_mut().enumerate() {
        if index < full {
            *star = StarKind::Full;
        } else if index < full + half {
            *star = StarKind::Half;
        }
    }
    Ok(stars)
}
