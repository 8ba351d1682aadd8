//! Layout variants per section kind.
//!
//! Each kind reads an optional `variant` (or `layout`) tag. An absent or
//! unrecognized tag selects the kind's default variant without complaint;
//! most documents omit the tag on purpose.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Closed set of layouts for one section kind.
pub trait SectionVariant: Copy + Sized + 'static {
    /// Layout used when the tag is absent or unrecognized.
    const DEFAULT: Self;

    /// Every layout, in declaration order.
    const ALL: &'static [Self];

    /// Document tag for this layout.
    fn tag(self) -> &'static str;

    /// Exact tag lookup.
    fn parse(tag: &str) -> Option<Self>;

    /// Tag lookup with the per-kind default.
    fn from_tag(tag: Option<&str>) -> Self {
        tag.and_then(Self::parse).unwrap_or(Self::DEFAULT)
    }
}

/// The `variant` / `layout` pair carried by sections and layout documents.
///
/// `variant` wins when it holds a string; `layout` is read otherwise.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubTag {
    #[serde(default)]
    pub variant: Option<Value>,
    #[serde(default)]
    pub layout: Option<Value>,
}

impl SubTag {
    pub fn new(tag: &str) -> Self {
        Self {
            variant: Some(Value::String(tag.to_string())),
            layout: None,
        }
    }

    /// Raw tag string, if any.
    pub fn raw(&self) -> Option<&str> {
        self.variant
            .as_ref()
            .and_then(Value::as_str)
            .or_else(|| self.layout.as_ref().and_then(Value::as_str))
    }

    /// Selected layout for `V`.
    pub fn select<V: SectionVariant>(&self) -> V {
        V::from_tag(self.raw())
    }

    /// Whether the raw tag names a layout of `V` (false means the default
    /// was substituted).
    pub fn is_explicit<V: SectionVariant>(&self) -> bool {
        self.raw().and_then(V::parse).is_some()
    }
}

macro_rules! section_variants {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl SectionVariant for $name {
            const DEFAULT: Self = $name::$default;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn tag(self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }

            fn parse(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <$name as SectionVariant>::DEFAULT
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = Value::deserialize(deserializer)?;
                Ok(<$name as SectionVariant>::from_tag(value.as_str()))
            }
        }
    };
}

section_variants! {
    /// Hero layouts.
    HeroVariant, default = ButtonBanner {
        ButtonBanner => "buttonBanner",
        BadgeBanner => "badgeBanner",
        GridPic => "gridPic",
        SideImage => "sideImage",
        ImageGallery => "imageGallery",
        VideoBackground => "videoBackground",
        Centered => "centered",
    }
}

section_variants! {
    CtaVariant, default = Default {
        Default => "default",
        Centered => "centered",
        Split => "split",
        Banner => "banner",
    }
}

section_variants! {
    FeatureVariant, default = Default {
        Default => "default",
        Grid => "grid",
        Icons => "icons",
        ImageLeft => "imageLeft",
        ImageRight => "imageRight",
        Tabs => "tabs",
        Bento => "bento",
    }
}

section_variants! {
    CasesVariant, default = Grid {
        Grid => "grid",
        Carousel => "carousel",
        List => "list",
    }
}

section_variants! {
    TestimonialsVariant, default = Carousel {
        Carousel => "carousel",
        Grid => "grid",
        Masonry => "masonry",
        Single => "single",
    }
}

section_variants! {
    PricingVariant, default = Default {
        Default => "default",
        Toggle => "toggle",
        Comparison => "comparison",
        Single => "single",
    }
}

section_variants! {
    CompareFeaturesVariant, default = Table {
        Table => "table",
        Cards => "cards",
    }
}

section_variants! {
    StatsVariant, default = Grid {
        Grid => "grid",
        Inline => "inline",
        Cards => "cards",
    }
}

section_variants! {
    FaqVariant, default = Accordion {
        Accordion => "accordion",
        TwoColumn => "twoColumn",
        Categories => "categories",
    }
}

section_variants! {
    BlogVariant, default = Grid {
        Grid => "grid",
        List => "list",
        Featured => "featured",
        Carousel => "carousel",
    }
}

section_variants! {
    ContactVariant, default = Default {
        Default => "default",
        Split => "split",
        Map => "map",
        Form => "form",
    }
}

section_variants! {
    NewsletterVariant, default = Default {
        Default => "default",
        Inline => "inline",
        Banner => "banner",
        Card => "card",
    }
}

section_variants! {
    /// Site header layouts.
    HeaderVariant, default = Default {
        Default => "default",
        Centered => "centered",
        Transparent => "transparent",
        Mega => "mega",
    }
}

section_variants! {
    /// Site footer layouts.
    FooterVariant, default = Default {
        Default => "default",
        Simple => "simple",
        Columns => "columns",
        Minimal => "minimal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_roundtrip<V: SectionVariant + PartialEq + std::fmt::Debug>() {
        for variant in V::ALL {
            assert_eq!(V::parse(variant.tag()), Some(*variant));
        }
        assert!(V::ALL.contains(&V::DEFAULT));
    }

    #[test]
    fn test_all_variant_tags_roundtrip() {
        assert_roundtrip::<HeroVariant>();
        assert_roundtrip::<CtaVariant>();
        assert_roundtrip::<FeatureVariant>();
        assert_roundtrip::<CasesVariant>();
        assert_roundtrip::<TestimonialsVariant>();
        assert_roundtrip::<PricingVariant>();
        assert_roundtrip::<CompareFeaturesVariant>();
        assert_roundtrip::<StatsVariant>();
        assert_roundtrip::<FaqVariant>();
        assert_roundtrip::<BlogVariant>();
        assert_roundtrip::<ContactVariant>();
        assert_roundtrip::<NewsletterVariant>();
        assert_roundtrip::<HeaderVariant>();
        assert_roundtrip::<FooterVariant>();
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_documented_defaults() {
        assert_eq!(HeroVariant::DEFAULT, HeroVariant::ButtonBanner);
        assert_eq!(CtaVariant::DEFAULT, CtaVariant::Default);
        assert_eq!(FeatureVariant::DEFAULT, FeatureVariant::Default);
        assert_eq!(CasesVariant::DEFAULT, CasesVariant::Grid);
        assert_eq!(TestimonialsVariant::DEFAULT, TestimonialsVariant::Carousel);
        assert_eq!(PricingVariant::DEFAULT, PricingVariant::Default);
        assert_eq!(CompareFeaturesVariant::DEFAULT, CompareFeaturesVariant::Table);
        assert_eq!(StatsVariant::DEFAULT, StatsVariant::Grid);
        assert_eq!(FaqVariant::DEFAULT, FaqVariant::Accordion);
        assert_eq!(BlogVariant::DEFAULT, BlogVariant::Grid);
        assert_eq!(ContactVariant::DEFAULT, ContactVariant::Default);
        assert_eq!(NewsletterVariant::DEFAULT, NewsletterVariant::Default);
        assert_eq!(HeaderVariant::DEFAULT, HeaderVariant::Default);
        assert_eq!(FooterVariant::DEFAULT, FooterVariant::Default);
    }

    #[test]
    fn test_absent_and_unknown_fall_back_to_default() {
        assert_eq!(FeatureVariant::from_tag(None), FeatureVariant::Default);
        assert_eq!(FeatureVariant::from_tag(Some("bogus")), FeatureVariant::Default);
        assert_eq!(
            FeatureVariant::from_tag(Some("default")),
            FeatureVariant::from_tag(None)
        );
        assert_eq!(TestimonialsVariant::from_tag(Some("")), TestimonialsVariant::Carousel);
    }

    // ==================== SubTag Tests ====================

    #[test]
    fn test_sub_tag_prefers_variant() {
        let tag: SubTag =
            serde_json::from_value(json!({ "variant": "grid", "layout": "list" })).unwrap();
        assert_eq!(tag.select::<BlogVariant>(), BlogVariant::Grid);
    }

    #[test]
    fn test_sub_tag_reads_layout_when_variant_absent() {
        let tag: SubTag = serde_json::from_value(json!({ "layout": "list" })).unwrap();
        assert_eq!(tag.select::<BlogVariant>(), BlogVariant::List);
        assert!(tag.is_explicit::<BlogVariant>());
    }

    #[test]
    fn test_sub_tag_non_string_variant_ignored() {
        let tag: SubTag = serde_json::from_value(json!({ "variant": 3, "layout": "list" })).unwrap();
        assert_eq!(tag.raw(), Some("list"));

        let tag: SubTag = serde_json::from_value(json!({ "variant": null })).unwrap();
        assert_eq!(tag.select::<CasesVariant>(), CasesVariant::Grid);
        assert!(!tag.is_explicit::<CasesVariant>());
    }

    #[test]
    fn test_variant_deserialize_is_lenient() {
        let v: StatsVariant = serde_json::from_value(json!("cards")).unwrap();
        assert_eq!(v, StatsVariant::Cards);
        let v: StatsVariant = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(v, StatsVariant::Grid);
    }

    #[test]
    fn test_variant_serializes_as_tag() {
        assert_eq!(
            serde_json::to_string(&HeroVariant::GridPic).unwrap(),
            "\"gridPic\""
        );
    }
}
