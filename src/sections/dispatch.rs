//! Section dispatch: route each raw section to the handler for its kind.
//!
//! A section whose `_type` is not one of the known kinds is logged and
//! dropped; the rest of the page still renders.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::metrics::RenderMetrics;
use crate::sections::kind::SectionKind;
use crate::sections::payload::{
    BlogSection, CasesSection, CompareFeaturesSection, ContactSection, CtaSection, FaqSection,
    FeatureSection, HeroSection, NewsletterSection, PricingSection, StatsSection,
    TestimonialsSection,
};

/// Why a raw section could not be turned into a typed `Section`.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error("section has no _type")]
    MissingKind,

    #[error("unknown section type '{0}'")]
    UnknownKind(String),
}

/// A typed section, one variant per known kind.
#[derive(Debug, Clone)]
pub enum Section {
    Hero(HeroSection),
    Cta(CtaSection),
    Feature(FeatureSection),
    Cases(CasesSection),
    Testimonials(TestimonialsSection),
    Pricing(PricingSection),
    CompareFeatures(CompareFeaturesSection),
    Stats(StatsSection),
    Faq(FaqSection),
    Blog(BlogSection),
    Contact(ContactSection),
    Newsletter(NewsletterSection),
}

impl Section {
    /// Classify and decode a raw section document.
    ///
    /// Only the `_type` tag can fail: payload fields that hold the wrong
    /// shape read as absent and the section still reaches its handler.
    pub fn from_value(value: &Value) -> Result<Section, SectionError> {
        let tag = value
            .get("_type")
            .and_then(Value::as_str)
            .ok_or(SectionError::MissingKind)?;
        let kind =
            SectionKind::from_tag(tag).ok_or_else(|| SectionError::UnknownKind(tag.to_string()))?;

        Ok(match kind {
            SectionKind::Hero => Section::Hero(decode(kind, value)),
            SectionKind::Cta => Section::Cta(decode(kind, value)),
            SectionKind::Feature => Section::Feature(decode(kind, value)),
            SectionKind::Cases => Section::Cases(decode(kind, value)),
            SectionKind::Testimonials => Section::Testimonials(decode(kind, value)),
            SectionKind::Pricing => Section::Pricing(decode(kind, value)),
            SectionKind::CompareFeatures => Section::CompareFeatures(decode(kind, value)),
            SectionKind::Stats => Section::Stats(decode(kind, value)),
            SectionKind::Faq => Section::Faq(decode(kind, value)),
            SectionKind::Blog => Section::Blog(decode(kind, value)),
            SectionKind::Contact => Section::Contact(decode(kind, value)),
            SectionKind::Newsletter => Section::Newsletter(decode(kind, value)),
        })
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Hero(_) => SectionKind::Hero,
            Section::Cta(_) => SectionKind::Cta,
            Section::Feature(_) => SectionKind::Feature,
            Section::Cases(_) => SectionKind::Cases,
            Section::Testimonials(_) => SectionKind::Testimonials,
            Section::Pricing(_) => SectionKind::Pricing,
            Section::CompareFeatures(_) => SectionKind::CompareFeatures,
            Section::Stats(_) => SectionKind::Stats,
            Section::Faq(_) => SectionKind::Faq,
            Section::Blog(_) => SectionKind::Blog,
            Section::Contact(_) => SectionKind::Contact,
            Section::Newsletter(_) => SectionKind::Newsletter,
        }
    }
}

fn decode<T: for<'de> Deserialize<'de> + Default>(kind: SectionKind, value: &Value) -> T {
    T::deserialize(value).unwrap_or_else(|e| {
        debug!("Rendering {} with default payload: {}", kind, e);
        T::default()
    })
}

/// Handler table: one entry per section kind.
pub trait SectionHandlers {
    type Output;

    fn hero(&mut self, section: &HeroSection) -> Self::Output;
    fn cta(&mut self, section: &CtaSection) -> Self::Output;
    fn feature(&mut self, section: &FeatureSection) -> Self::Output;
    fn cases(&mut self, section: &CasesSection) -> Self::Output;
    fn testimonials(&mut self, section: &TestimonialsSection) -> Self::Output;
    fn pricing(&mut self, section: &PricingSection) -> Self::Output;
    fn compare_features(&mut self, section: &CompareFeaturesSection) -> Self::Output;
    fn stats(&mut self, section: &StatsSection) -> Self::Output;
    fn faq(&mut self, section: &FaqSection) -> Self::Output;
    fn blog(&mut self, section: &BlogSection) -> Self::Output;
    fn contact(&mut self, section: &ContactSection) -> Self::Output;
    fn newsletter(&mut self, section: &NewsletterSection) -> Self::Output;
}

/// Invoke the handler registered for the section's kind.
pub fn dispatch<H: SectionHandlers>(handlers: &mut H, section: &Section) -> H::Output {
    match section {
        Section::Hero(s) => handlers.hero(s),
        Section::Cta(s) => handlers.cta(s),
        Section::Feature(s) => handlers.feature(s),
        Section::Cases(s) => handlers.cases(s),
        Section::Testimonials(s) => handlers.testimonials(s),
        Section::Pricing(s) => handlers.pricing(s),
        Section::CompareFeatures(s) => handlers.compare_features(s),
        Section::Stats(s) => handlers.stats(s),
        Section::Faq(s) => handlers.faq(s),
        Section::Blog(s) => handlers.blog(s),
        Section::Contact(s) => handlers.contact(s),
        Section::Newsletter(s) => handlers.newsletter(s),
    }
}

/// Render one raw section.
///
/// # Returns
/// * `Some(output)` when the section has a known kind
/// * `None` otherwise, after logging a warning
pub fn render_section<H: SectionHandlers>(handlers: &mut H, raw: &Value) -> Option<H::Output> {
    match Section::from_value(raw) {
        Ok(section) => {
            RenderMetrics::global().record_section_rendered();
            Some(dispatch(handlers, &section))
        }
        Err(e) => {
            RenderMetrics::global().record_section_skipped();
            match &e {
                SectionError::UnknownKind(kind) => {
                    warn!(kind = %kind, "Skipping section with unknown type '{}'", kind)
                }
                other => warn!("Skipping section: {}", other),
            }
            None
        }
    }
}

/// Render raw sections in order, dropping the ones that cannot be handled.
pub fn render_sections<H: SectionHandlers>(handlers: &mut H, sections: &[Value]) -> Vec<H::Output> {
    sections
        .iter()
        .filter_map(|raw| render_section(handlers, raw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Records which handler was called for each section.
    #[derive(Default)]
    struct SpyHandlers {
        calls: Vec<&'static str>,
    }

    impl SpyHandlers {
        fn hit(&mut self, name: &'static str) -> &'static str {
            self.calls.push(name);
            name
        }
    }

    impl SectionHandlers for SpyHandlers {
        type Output = &'static str;

        fn hero(&mut self, _: &HeroSection) -> Self::Output {
            self.hit("hero")
        }
        fn cta(&mut self, _: &CtaSection) -> Self::Output {
            self.hit("cta")
        }
        fn feature(&mut self, _: &FeatureSection) -> Self::Output {
            self.hit("feature")
        }
        fn cases(&mut self, _: &CasesSection) -> Self::Output {
            self.hit("cases")
        }
        fn testimonials(&mut self, _: &TestimonialsSection) -> Self::Output {
            self.hit("testimonials")
        }
        fn pricing(&mut self, _: &PricingSection) -> Self::Output {
            self.hit("pricing")
        }
        fn compare_features(&mut self, _: &CompareFeaturesSection) -> Self::Output {
            self.hit("compare_features")
        }
        fn stats(&mut self, _: &StatsSection) -> Self::Output {
            self.hit("stats")
        }
        fn faq(&mut self, _: &FaqSection) -> Self::Output {
            self.hit("faq")
        }
        fn blog(&mut self, _: &BlogSection) -> Self::Output {
            self.hit("blog")
        }
        fn contact(&mut self, _: &ContactSection) -> Self::Output {
            self.hit("contact")
        }
        fn newsletter(&mut self, _: &NewsletterSection) -> Self::Output {
            self.hit("newsletter")
        }
    }

    fn expected_handler(kind: SectionKind) -> &'static str {
        match kind {
            SectionKind::Hero => "hero",
            SectionKind::Cta => "cta",
            SectionKind::Feature => "feature",
            SectionKind::Cases => "cases",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Pricing => "pricing",
            SectionKind::CompareFeatures => "compare_features",
            SectionKind::Stats => "stats",
            SectionKind::Faq => "faq",
            SectionKind::Blog => "blog",
            SectionKind::Contact => "contact",
            SectionKind::Newsletter => "newsletter",
        }
    }

    // ==================== Routing Tests ====================

    #[test]
    fn test_each_known_kind_routes_to_its_handler_only() {
        for kind in SectionKind::ALL {
            let mut spy = SpyHandlers::default();
            let output = render_section(&mut spy, &json!({ "_type": kind.tag(), "heading": "x" }));

            assert_eq!(output, Some(expected_handler(kind)), "{kind}");
            assert_eq!(spy.calls, vec![expected_handler(kind)], "{kind}");
        }
    }

    #[test]
    fn test_section_kind_matches_tag() {
        for kind in SectionKind::ALL {
            let section = Section::from_value(&json!({ "_type": kind.tag() })).unwrap();
            assert_eq!(section.kind(), kind);
        }
    }

    // ==================== Skip Tests ====================

    #[test]
    fn test_unknown_kind_is_skipped() {
        let mut spy = SpyHandlers::default();
        let output = render_section(&mut spy, &json!({ "_type": "unknownThing" }));

        assert_eq!(output, None);
        assert!(spy.calls.is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unknown_kind_emits_one_warning() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let output = tracing::subscriber::with_default(subscriber, || {
            render_section(&mut SpyHandlers::default(), &json!({ "_type": "unknownThing" }))
        });

        let captured = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output, None);
        assert_eq!(captured.lines().count(), 1, "{captured}");
        assert!(captured.contains("WARN"));
        assert!(captured.contains("unknownThing"));
    }

    #[test]
    fn test_unknown_kind_error_names_the_kind() {
        let err = Section::from_value(&json!({ "_type": "unknownThing" })).unwrap_err();
        assert!(matches!(err, SectionError::UnknownKind(ref k) if k == "unknownThing"));
        assert!(err.to_string().contains("unknownThing"));
    }

    #[test]
    fn test_missing_or_non_string_kind() {
        assert!(matches!(
            Section::from_value(&json!({ "heading": "x" })),
            Err(SectionError::MissingKind)
        ));
        assert!(matches!(
            Section::from_value(&json!({ "_type": 5 })),
            Err(SectionError::MissingKind)
        ));
        assert!(matches!(
            Section::from_value(&json!("heroSection")),
            Err(SectionError::MissingKind)
        ));
    }

    #[test]
    fn test_known_kind_with_malformed_fields_still_renders() {
        let sections = [
            json!({ "_type": "pricingSection", "heading": "Plans", "plans": "not a list" }),
            json!({ "_type": "testimonialsSection", "testimonials": [{ "rating": 4.5 }] }),
            json!({ "_type": "blogSection", "posts": [{ "publishedAt": "2024-03-05" }], "limit": "x" }),
            json!({ "_type": "heroSection", "buttons": { "label": "not a list" }, "videoUrl": 3 }),
        ];

        let mut spy = SpyHandlers::default();
        let outputs = render_sections(&mut spy, &sections);

        assert_eq!(outputs, vec!["pricing", "testimonials", "blog", "hero"]);
    }

    #[test]
    fn test_render_sections_keeps_order_and_drops_unknown() {
        let sections = vec![
            json!({ "_type": "statsSection" }),
            json!({ "_type": "mystery" }),
            json!({ "_type": "heroSection" }),
            json!({ "_type": "faqSection" }),
        ];

        let mut spy = SpyHandlers::default();
        let outputs = render_sections(&mut spy, &sections);

        assert_eq!(outputs, vec!["stats", "hero", "faq"]);
    }
}
