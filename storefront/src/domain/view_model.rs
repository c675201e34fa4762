//! Display-ready shapes consumed by presentation code.
//!
//! Each constructor is pure and takes the backend origin explicitly so asset
//! paths can be rewritten without reaching for configuration.

use tracing::warn;

use super::catalogue::{Product, ProductId, SlideItem, TripType};
use super::normalizer::{
    STAR_COUNT, StarKind, partition_by_trip_type, rank_by_popularity, resolve_asset_url,
    star_buckets,
};

/// Number of monthly installments offered on the detail page.
pub const INSTALLMENT_MONTHS: f64 = 5.0;

/// Product tile shown in home page carousels.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Backend identifier, used for the detail link.
    pub id: ProductId,
    /// Trip category.
    pub trip_type: TripType,
    /// Absolute image URL, or `None` when the product has no image.
    pub img_src: Option<String>,
    /// Discount percentage, when discounted.
    pub discount_rate: Option<f64>,
    /// Listing title.
    pub title: String,
    /// Short descriptive tags.
    pub info_group: Vec<String>,
    /// Price before discount.
    pub prev_price: f64,
    /// Current price.
    pub curr_price: f64,
    /// Average rating.
    pub rating: f64,
    /// Units sold.
    pub sold: u64,
}

impl ProductCard {
    /// Build a card, resolving the primary image against `base_origin`.
    pub fn from_product(product: Product, base_origin: &str) -> Self {
        let img_src = resolve_asset_url(product.img_src.as_deref(), base_origin);
        Self {
            id: product.id,
            trip_type: product.trip_type,
            img_src,
            discount_rate: product.discount_rate,
            title: product.title,
            info_group: product.info_group,
            prev_price: product.prev_price,
            curr_price: product.curr_price,
            rating: product.rating,
            sold: product.sold,
        }
    }
}

/// Home page product sections, each ranked by popularity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeFeed {
    /// Overseas trips ("real-time popular").
    pub overseas: Vec<ProductCard>,
    /// Domestic trips ("nationwide popular").
    pub domestic: Vec<ProductCard>,
}

impl HomeFeed {
    /// Rank, partition and resolve a raw product listing.
    ///
    /// Products with an unrecognised trip type appear in neither section.
    pub fn from_products(products: Vec<Product>, base_origin: &str) -> Self {
        let ranked = rank_by_popularity(products);
        let cards = |trip_type| {
            partition_by_trip_type(&ranked, trip_type)
                .into_iter()
                .map(|product| ProductCard::from_product(product, base_origin))
                .collect::<Vec<_>>()
        };
        Self {
            overseas: cards(TripType::Overseas),
            domestic: cards(TripType::Domestic),
        }
    }
}

/// Carousel slide with absolute image URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    /// Backend identifier.
    pub id: u64,
    /// Link target.
    pub url: String,
    /// Absolute background image URL.
    pub bg_src: Option<String>,
    /// Slide title.
    pub title: String,
    /// Headline copy.
    pub headline: String,
    /// Promotion period label.
    pub date: String,
    /// Absolute foreground image URL.
    pub img_src: Option<String>,
    /// Alternative text for the foreground image.
    pub img_alt: String,
}

impl SlideView {
    /// Build a slide view, resolving both images against `base_origin`.
    pub fn from_slide(slide: SlideItem, base_origin: &str) -> Self {
        Self {
            id: slide.id,
            url: slide.url,
            bg_src: resolve_asset_url(Some(slide.bg_src.as_str()), base_origin),
            title: slide.title,
            headline: slide.headline,
            date: slide.date,
            img_src: resolve_asset_url(Some(slide.img_src.as_str()), base_origin),
            img_alt: slide.img_alt,
        }
    }
}

/// Everything the product detail page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailView {
    /// Backend identifier.
    pub id: ProductId,
    /// Trip category.
    pub trip_type: TripType,
    /// Listing title.
    pub title: String,
    /// Absolute primary image URL.
    pub img_src: Option<String>,
    /// `#tag` line built from the info group.
    pub hash_tags: String,
    /// Discount percentage, when discounted.
    pub discount_rate: Option<f64>,
    /// Price before discount.
    pub prev_price: f64,
    /// Current price.
    pub curr_price: f64,
    /// Current price split over [`INSTALLMENT_MONTHS`], unrounded.
    pub monthly_installment: f64,
    /// Average rating.
    pub rating: f64,
    /// Rating with one decimal place.
    pub rating_label: String,
    /// Star symbols for the rating.
    pub stars: [StarKind; STAR_COUNT],
    /// Units sold.
    pub sold: u64,
    /// Introduction heading.
    pub intro_title: Option<String>,
    /// Introduction body.
    pub intro_text: Option<String>,
    /// Absolute introduction image URL.
    pub intro_img_src: Option<String>,
}

impl ProductDetailView {
    /// Build the detail view, resolving the primary and introduction images
    /// independently.
    ///
    /// A rating outside `[0, 5]` renders as five empty stars and is logged.
    pub fn from_product(product: Product, base_origin: &str) -> Self {
        let stars = star_buckets(product.rating).unwrap_or_else(|error| {
            warn!(product_id = product.id, %error, "rendering invalid rating as empty stars");
            [StarKind::Empty; STAR_COUNT]
        });
        let hash_tags = product
            .info_group
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            id: product.id,
            trip_type: product.trip_type,
            img_src: resolve_asset_url(product.img_src.as_deref(), base_origin),
            intro_img_src: resolve_asset_url(product.intro_img_src.as_deref(), base_origin),
            hash_tags,
            discount_rate: product.discount_rate,
            prev_price: product.prev_price,
            curr_price: product.curr_price,
            monthly_installment: product.curr_price / INSTALLMENT_MONTHS,
            rating: product.rating,
            rating_label: format!("{:.1}", product.rating),
            stars,
            sold: product.sold,
            title: product.title,
            intro_title: product.intro_title,
            intro_text: product.intro_text,
        }
    }
}
