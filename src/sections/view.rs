//! Resolved view models handed to presentational renderers.
//!
//! Nothing in here carries translation wrappers: every string is already
//! resolved for one language, and each view records the layout it was routed
//! to.

use serde::Serialize;

use crate::sections::kind::SectionKind;
use crate::sections::variant::{
    BlogVariant, CasesVariant, CompareFeaturesVariant, ContactVariant, CtaVariant, FaqVariant,
    FeatureVariant, HeroVariant, NewsletterVariant, PricingVariant, StatsVariant,
    TestimonialsVariant,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonView {
    pub label: String,
    pub href: String,
    pub style: String,
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

// ==================== Section Views ====================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub layout: HeroVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    pub buttons: Vec<ButtonView>,
    pub images: Vec<ImageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaView {
    pub layout: CtaVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub buttons: Vec<ButtonView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureItemView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureView {
    pub layout: FeatureVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub features: Vec<FeatureItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseView {
    pub title: String,
    pub client: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasesView {
    pub layout: CasesVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cases: Vec<CaseView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialView {
    pub quote: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsView {
    pub layout: TestimonialsVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub testimonials: Vec<TestimonialView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_price: Option<f64>,
    pub currency: String,
    pub features: Vec<String>,
    pub button: ButtonView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingToggleView {
    pub monthly: String,
    pub yearly: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingView {
    pub layout: PricingVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_toggle: Option<BillingToggleView>,
    pub plans: Vec<PlanView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRowView {
    pub feature: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareFeaturesView {
    pub layout: CompareFeaturesVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub plans: Vec<String>,
    pub rows: Vec<CompareRowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatView {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub layout: StatsVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub stats: Vec<StatView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItemView {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqGroupView {
    /// Empty for questions without a category
    pub category: String,
    pub items: Vec<FaqItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqView {
    pub layout: FaqVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A single unnamed group unless the layout groups by category
    pub groups: Vec<FaqGroupView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byline: Option<String>,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageView>,
    pub read_more: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogView {
    pub layout: BlogVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<PostView>,
    pub posts: Vec<PostView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub layout: ContactVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_embed_url: Option<String>,
    pub submit_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterView {
    pub layout: NewsletterVariant,
    pub heading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub placeholder: String,
    pub button_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

/// One rendered section, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum SectionView {
    #[serde(rename = "heroSection")]
    Hero(HeroView),
    #[serde(rename = "ctaSection")]
    Cta(CtaView),
    #[serde(rename = "featureSection")]
    Feature(FeatureView),
    #[serde(rename = "casesSection")]
    Cases(CasesView),
    #[serde(rename = "testimonialsSection")]
    Testimonials(TestimonialsView),
    #[serde(rename = "pricingSection")]
    Pricing(PricingView),
    #[serde(rename = "compareFeaturesSection")]
    CompareFeatures(CompareFeaturesView),
    #[serde(rename = "statsSection")]
    Stats(StatsView),
    #[serde(rename = "faqSection")]
    Faq(FaqView),
    #[serde(rename = "blogSection")]
    Blog(BlogView),
    #[serde(rename = "contactSection")]
    Contact(ContactView),
    #[serde(rename = "newsletterSection")]
    Newsletter(NewsletterView),
}

impl SectionView {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionView::Hero(_) => SectionKind::Hero,
            SectionView::Cta(_) => SectionKind::Cta,
            SectionView::Feature(_) => SectionKind::Feature,
            SectionView::Cases(_) => SectionKind::Cases,
            SectionView::Testimonials(_) => SectionKind::Testimonials,
            SectionView::Pricing(_) => SectionKind::Pricing,
            SectionView::CompareFeatures(_) => SectionKind::CompareFeatures,
            SectionView::Stats(_) => SectionKind::Stats,
            SectionView::Faq(_) => SectionKind::Faq,
            SectionView::Blog(_) => SectionKind::Blog,
            SectionView::Contact(_) => SectionKind::Contact,
            SectionView::Newsletter(_) => SectionKind::Newsletter,
        }
    }

    /// Layout tag the section was routed to.
    pub fn layout(&self) -> &'static str {
        use crate::sections::variant::SectionVariant;

        match self {
            SectionView::Hero(v) => v.layout.tag(),
            SectionView::Cta(v) => v.layout.tag(),
            SectionView::Feature(v) => v.layout.tag(),
            SectionView::Cases(v) => v.layout.tag(),
            SectionView::Testimonials(v) => v.layout.tag(),
            SectionView::Pricing(v) => v.layout.tag(),
            SectionView::CompareFeatures(v) => v.layout.tag(),
            SectionView::Stats(v) => v.layout.tag(),
            SectionView::Faq(v) => v.layout.tag(),
            SectionView::Blog(v) => v.layout.tag(),
            SectionView::Contact(v) => v.layout.tag(),
            SectionView::Newsletter(v) => v.layout.tag(),
        }
    }
}
