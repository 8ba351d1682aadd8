use serde::Serialize;
use std::fmt;

/// Discriminator of a page section (the document's `_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    #[serde(rename = "heroSection")]
    Hero,
    #[serde(rename = "ctaSection")]
    Cta,
    #[serde(rename = "featureSection")]
    Feature,
    #[serde(rename = "casesSection")]
    Cases,
    #[serde(rename = "testimonialsSection")]
    Testimonials,
    #[serde(rename = "pricingSection")]
    Pricing,
    #[serde(rename = "compareFeaturesSection")]
    CompareFeatures,
    #[serde(rename = "statsSection")]
    Stats,
    #[serde(rename = "faqSection")]
    Faq,
    #[serde(rename = "blogSection")]
    Blog,
    #[serde(rename = "contactSection")]
    Contact,
    #[serde(rename = "newsletterSection")]
    Newsletter,
}

impl SectionKind {
    pub const ALL: [SectionKind; 12] = [
        SectionKind::Hero,
        SectionKind::Cta,
        SectionKind::Feature,
        SectionKind::Cases,
        SectionKind::Testimonials,
        SectionKind::Pricing,
        SectionKind::CompareFeatures,
        SectionKind::Stats,
        SectionKind::Faq,
        SectionKind::Blog,
        SectionKind::Contact,
        SectionKind::Newsletter,
    ];

    /// Document `_type` tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            SectionKind::Hero => "heroSection",
            SectionKind::Cta => "ctaSection",
            SectionKind::Feature => "featureSection",
            SectionKind::Cases => "casesSection",
            SectionKind::Testimonials => "testimonialsSection",
            SectionKind::Pricing => "pricingSection",
            SectionKind::CompareFeatures => "compareFeaturesSection",
            SectionKind::Stats => "statsSection",
            SectionKind::Faq => "faqSection",
            SectionKind::Blog => "blogSection",
            SectionKind::Contact => "contactSection",
            SectionKind::Newsletter => "newsletterSection",
        }
    }

    /// Look up a kind by its `_type` tag; `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<SectionKind> {
        SectionKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
