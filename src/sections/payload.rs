//! Typed section payloads as stored in page documents.
//!
//! Every field is optional: editors leave most of them blank and the renderer
//! falls back to static strings. Text slots accept a plain string or any
//! localized shape.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::i18n::Text;
use crate::sections::variant::SubTag;

// ==================== Lenient Field Decoding ====================
//
// A field holding the wrong JSON type reads as absent, so a known section
// always decodes and reaches its handler.

/// Decode as `T`, or `T::default()` when the value has another shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(&value).unwrap_or_default())
}

/// Decode a list, dropping the elements that do not decode as `T`.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// A JSON number or a numeric string such as `"29"` or `"4.5"`.
fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    n.filter(|n: &f64| n.is_finite())
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value))
}

/// Ratings are rounded to a whole star.
fn lenient_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value)
        .map(f64::round)
        .filter(|r| (0.0..=f64::from(u8::MAX)).contains(r))
        .map(|r| r as u8))
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.trunc() as usize))
}

/// RFC 3339 timestamps, or a bare `YYYY-MM-DD` date read as midnight UTC.
fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(parse_date))
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0)?))
}

// ==================== Shared Building Blocks ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Button {
    pub label: Text,
    #[serde(deserialize_with = "lenient")]
    pub href: Option<String>,
    /// Visual style hint ("primary", "secondary", "link")
    #[serde(deserialize_with = "lenient")]
    pub style: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub open_in_new_tab: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    #[serde(deserialize_with = "lenient")]
    pub url: Option<String>,
    pub alt: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkItem {
    pub label: Text,
    #[serde(deserialize_with = "lenient")]
    pub href: Option<String>,
}

// ==================== Hero ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub badge: Text,
    pub heading: Text,
    pub subheading: Text,
    #[serde(deserialize_with = "lenient_list")]
    pub buttons: Vec<Button>,
    #[serde(deserialize_with = "lenient_list")]
    pub images: Vec<Image>,
    #[serde(deserialize_with = "lenient")]
    pub video_url: Option<String>,
}

// ==================== CTA ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    #[serde(deserialize_with = "lenient_list")]
    pub buttons: Vec<Button>,
    #[serde(deserialize_with = "lenient")]
    pub image: Option<Image>,
}

// ==================== Feature ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureItem {
    /// Icon name from the site's icon set
    #[serde(deserialize_with = "lenient")]
    pub icon: Option<String>,
    pub title: Text,
    pub description: Text,
    #[serde(deserialize_with = "lenient")]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    #[serde(deserialize_with = "lenient_list")]
    pub features: Vec<FeatureItem>,
}

// ==================== Cases ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseStudy {
    pub title: Text,
    pub client: Text,
    pub summary: Text,
    #[serde(deserialize_with = "lenient")]
    pub image: Option<Image>,
    #[serde(deserialize_with = "lenient")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CasesSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    #[serde(deserialize_with = "lenient_list")]
    pub cases: Vec<CaseStudy>,
}

// ==================== Testimonials ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    pub quote: Text,
    pub author: Text,
    pub role: Text,
    pub company: Text,
    #[serde(deserialize_with = "lenient")]
    pub avatar: Option<Image>,
    /// Star rating, 1-5
    #[serde(deserialize_with = "lenient_rating")]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialsSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    #[serde(deserialize_with = "lenient_list")]
    pub testimonials: Vec<Testimonial>,
}

// ==================== Pricing ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: Text,
    pub description: Text,
    #[serde(deserialize_with = "lenient_price")]
    pub monthly_price: Option<f64>,
    #[serde(deserialize_with = "lenient_price")]
    pub yearly_price: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub features: Vec<Text>,
    #[serde(deserialize_with = "lenient")]
    pub button: Option<Button>,
    #[serde(deserialize_with = "lenient")]
    pub highlighted: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    #[serde(deserialize_with = "lenient_list")]
    pub plans: Vec<PricingPlan>,
}

// ==================== Compare Features ====================

/// One cell of the comparison table: a check mark or free text.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareCell {
    Included(bool),
    Text(Text),
}

impl<'de> Deserialize<'de> for CompareCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(included) => CompareCell::Included(included),
            other => CompareCell::Text(Text::from_value(&other)),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareRow {
    pub feature: Text,
    #[serde(deserialize_with = "lenient_list")]
    pub values: Vec<CompareCell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareFeaturesSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    /// Column headers, one per plan
    #[serde(deserialize_with = "lenient_list")]
    pub plans: Vec<Text>,
    #[serde(deserialize_with = "lenient_list")]
    pub rows: Vec<CompareRow>,
}

// ==================== Stats ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stat {
    /// Display value such as "99%" or "10k+"
    pub value: Text,
    pub label: Text,
    pub description: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    #[serde(deserialize_with = "lenient_list")]
    pub stats: Vec<Stat>,
}

// ==================== FAQ ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqItem {
    pub question: Text,
    pub answer: Text,
    pub category: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    #[serde(deserialize_with = "lenient_list")]
    pub faqs: Vec<FaqItem>,
}

// ==================== Blog ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    pub title: Text,
    #[serde(deserialize_with = "lenient")]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostSummary {
    pub title: Text,
    #[serde(deserialize_with = "lenient")]
    pub slug: Option<String>,
    pub excerpt: Text,
    #[serde(deserialize_with = "lenient_date")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient")]
    pub author: Option<Author>,
    #[serde(deserialize_with = "lenient_list")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with = "lenient")]
    pub cover: Option<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    /// Posts already dereferenced by the content source
    #[serde(deserialize_with = "lenient_list")]
    pub posts: Vec<PostSummary>,
    /// Maximum number of posts to show
    #[serde(deserialize_with = "lenient_count")]
    pub limit: Option<usize>,
}

// ==================== Contact ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
    pub address: Text,
    pub submit_label: Text,
    #[serde(deserialize_with = "lenient")]
    pub map_embed_url: Option<String>,
}

// ==================== Newsletter ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsletterSection {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub heading: Text,
    pub description: Text,
    pub placeholder: Text,
    pub button_label: Text,
    pub disclaimer: Text,
}
