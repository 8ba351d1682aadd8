//! Default handler table: turns typed payloads into resolved view models.
//!
//! Every text slot goes through the localized resolver with the static
//! strings of the active language as the last fallback tier.

use std::collections::BTreeMap;

use crate::i18n::{Language, LanguageStrings, Text};
use crate::metrics::RenderMetrics;
use crate::sections::dispatch::SectionHandlers;
use crate::sections::payload::{
    BlogSection, Button, CasesSection, CompareCell, CompareFeaturesSection, ContactSection,
    CtaSection, FaqSection, FeatureSection, HeroSection, Image, NewsletterSection, PostSummary,
    PricingPlan, PricingSection, StatsSection, TestimonialsSection,
};
use crate::sections::variant::{
    BlogVariant, FaqVariant, HeroVariant, PricingVariant, SectionVariant, SubTag,
    TestimonialsVariant,
};
use crate::sections::view::{
    BillingToggleView, BlogView, ButtonView, CaseView, CasesView, CompareFeaturesView,
    CompareRowView, ContactView, CtaView, FaqGroupView, FaqItemView, FaqView, FeatureItemView,
    FeatureView, HeroView, ImageView, LinkView, NewsletterView, PlanView, PostView, PricingView,
    SectionView, StatView, StatsView, TestimonialView, TestimonialsView,
};

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_BUTTON_STYLE: &str = "primary";

/// Pick the layout for a section, counting default substitutions.
pub(crate) fn select_layout<V: SectionVariant>(sub_tag: &SubTag) -> V {
    if !sub_tag.is_explicit::<V>() {
        RenderMetrics::global().record_variant_default();
    }
    sub_tag.select::<V>()
}

/// Resolves sections into `SectionView`s for one language.
#[derive(Debug, Clone, Copy)]
pub struct ViewRenderer {
    language: Language,
}

impl ViewRenderer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn lang(&self) -> &'static str {
        self.language.code()
    }

    fn strings(&self) -> &'static LanguageStrings {
        self.language.strings()
    }

    fn text(&self, text: &Text) -> String {
        text.resolve_string(self.lang())
    }

    fn text_or(&self, text: &Text, fallback: &str) -> String {
        text.resolve_string_or(fallback, self.lang())
    }

    fn opt(&self, text: &Text) -> Option<String> {
        text.resolve_opt(self.lang())
    }

    pub(crate) fn button(&self, button: &Button) -> ButtonView {
        ButtonView {
            label: self.text_or(&button.label, self.strings().get_started),
            href: button.href.clone().unwrap_or_else(|| "#".to_string()),
            style: button
                .style
                .clone()
                .unwrap_or_else(|| DEFAULT_BUTTON_STYLE.to_string()),
            external: button.open_in_new_tab.unwrap_or(false),
        }
    }

    /// Images without a URL are dropped.
    pub(crate) fn image(&self, image: &Image) -> Option<ImageView> {
        let url = image.url.as_deref().filter(|u| !u.is_empty())?;
        Some(ImageView {
            url: url.to_string(),
            alt: self.text(&image.alt),
        })
    }

    pub(crate) fn link(&self, label: &Text, href: Option<&str>) -> Option<LinkView> {
        let href = href.filter(|h| !h.is_empty())?;
        Some(LinkView {
            label: self.text_or(label, self.strings().read_more),
            href: href.to_string(),
        })
    }

    fn buttons(&self, buttons: &[Button]) -> Vec<ButtonView> {
        buttons.iter().map(|b| self.button(b)).collect()
    }

    fn images(&self, images: &[Image]) -> Vec<ImageView> {
        images.iter().filter_map(|i| self.image(i)).collect()
    }

    fn plan(&self, plan: &PricingPlan, layout: PricingVariant) -> PlanView {
        let strings = self.strings();
        let (monthly_price, yearly_price) = match layout {
            PricingVariant::Toggle | PricingVariant::Comparison => {
                (plan.monthly_price, plan.yearly_price)
            }
            PricingVariant::Default | PricingVariant::Single => {
                (plan.monthly_price.or(plan.yearly_price), None)
            }
        };

        PlanView {
            name: self.text(&plan.name),
            description: self.opt(&plan.description),
            monthly_price,
            yearly_price,
            currency: plan
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            features: plan
                .features
                .iter()
                .filter_map(|f| self.opt(f))
                .collect(),
            button: plan
                .button
                .as_ref()
                .map(|b| self.button(b))
                .unwrap_or_else(|| self.button(&Button::default())),
            badge: plan
                .highlighted
                .unwrap_or(false)
                .then(|| strings.pricing_most_popular.to_string()),
        }
    }

    fn post(&self, post: &PostSummary) -> PostView {
        let strings = self.strings();
        PostView {
            title: self.text(&post.title),
            href: post
                .slug
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| format!("/blog/{}", s)),
            excerpt: self.opt(&post.excerpt),
            published: post
                .published_at
                .map(|at| at.format(strings.date_format).to_string()),
            byline: post
                .author
                .as_ref()
                .filter(|a| !a.name.is_empty())
                .map(|a| format!("{} {}", strings.blog_by, a.name)),
            categories: post
                .categories
                .iter()
                .filter_map(|c| self.opt(&c.title))
                .collect(),
            cover: post.cover.as_ref().and_then(|c| self.image(c)),
            read_more: strings.read_more.to_string(),
        }
    }

    fn compare_cell(&self, cell: &CompareCell) -> String {
        let strings = self.strings();
        match cell {
            CompareCell::Included(true) => strings.compare_included.to_string(),
            CompareCell::Included(false) => strings.compare_not_included.to_string(),
            CompareCell::Text(text) => self.text(text),
        }
    }
}

impl SectionHandlers for ViewRenderer {
    type Output = SectionView;

    fn hero(&mut self, section: &HeroSection) -> SectionView {
        let layout: HeroVariant = select_layout(&section.sub_tag);
        let images = self.images(&section.images);

        let (badge, images, video_url) = match layout {
            HeroVariant::ButtonBanner => (None, Vec::new(), None),
            HeroVariant::BadgeBanner | HeroVariant::Centered => {
                (self.opt(&section.badge), Vec::new(), None)
            }
            HeroVariant::GridPic | HeroVariant::ImageGallery => (None, images, None),
            HeroVariant::SideImage => (None, images.into_iter().take(1).collect(), None),
            HeroVariant::VideoBackground => (None, Vec::new(), section.video_url.clone()),
        };

        SectionView::Hero(HeroView {
            layout,
            badge,
            heading: self.text(&section.heading),
            subheading: self.opt(&section.subheading),
            buttons: self.buttons(&section.buttons),
            images,
            video_url,
        })
    }

    fn cta(&mut self, section: &CtaSection) -> SectionView {
        SectionView::Cta(CtaView {
            layout: select_layout(&section.sub_tag),
            heading: self.text(&section.heading),
            description: self.opt(&section.description),
            buttons: self.buttons(&section.buttons),
            image: section.image.as_ref().and_then(|i| self.image(i)),
        })
    }

    fn feature(&mut self, section: &FeatureSection) -> SectionView {
        let features = section
            .features
            .iter()
            .map(|item| FeatureItemView {
                icon: item.icon.clone(),
                title: self.text(&item.title),
                description: self.text(&item.description),
                image: item.image.as_ref().and_then(|i| self.image(i)),
            })
            .collect();

        SectionView::Feature(FeatureView {
            layout: select_layout(&section.sub_tag),
            heading: self.text(&section.heading),
            description: self.opt(&section.description),
            features,
        })
    }

    fn cases(&mut self, section: &CasesSection) -> SectionView {
        let cases = section
            .cases
            .iter()
            .map(|case| CaseView {
                title: self.text(&case.title),
                client: self.text(&case.client),
                summary: self.text(&case.summary),
                image: case.image.as_ref().and_then(|i| self.image(i)),
                link: self.link(&Text::Empty, case.href.as_deref()),
            })
            .collect();

        SectionView::Cases(CasesView {
            layout: select_layout(&section.sub_tag),
            heading: self.text(&section.heading),
            description: self.opt(&section.description),
            cases,
        })
    }

    fn testimonials(&mut self, section: &TestimonialsSection) -> SectionView {
        let layout: TestimonialsVariant = select_layout(&section.sub_tag);
        let take = match layout {
            TestimonialsVariant::Single => 1,
            _ => usize::MAX,
        };

        let testimonials = section
            .testimonials
            .iter()
            .take(take)
            .map(|t| {
                let role = match (self.opt(&t.role), self.opt(&t.company)) {
                    (Some(role), Some(company)) => Some(format!("{}, {}", role, company)),
                    (role, company) => role.or(company),
                };
                TestimonialView {
                    quote: self.text(&t.quote),
                    author: self.text(&t.author),
                    role,
                    avatar: t.avatar.as_ref().and_then(|i| self.image(i)),
                    rating: t.rating.map(|r| r.clamp(1, 5)),
                }
            })
            .collect();

        SectionView::Testimonials(TestimonialsView {
            layout,
            heading: self.text_or(&section.heading, self.strings().testimonials_heading),
            description: self.opt(&section.description),
            testimonials,
        })
    }

    fn pricing(&mut self, section: &PricingSection) -> SectionView {
        let layout: PricingVariant = select_layout(&section.sub_tag);
        let strings = self.strings();

        let plans: Vec<PlanView> = match layout {
            PricingVariant::Single => section
                .plans
                .iter()
                .find(|p| p.highlighted.unwrap_or(false))
                .or_else(|| section.plans.first())
                .map(|p| vec![self.plan(p, layout)])
                .unwrap_or_default(),
            _ => section.plans.iter().map(|p| self.plan(p, layout)).collect(),
        };

        let billing_toggle = (layout == PricingVariant::Toggle).then(|| BillingToggleView {
            monthly: strings.pricing_monthly.to_string(),
            yearly: strings.pricing_yearly.to_string(),
        });

        SectionView::Pricing(PricingView {
            layout,
            heading: self.text(&section.heading),
            description: self.opt(&section.description),
            billing_toggle,
            plans,
        })
    }

    fn compare_features(&mut self, section: &CompareFeaturesSection) -> SectionView {
        let plans: Vec<String> = section.plans.iter().map(|p| self.text(p)).collect();
        let rows = section
            .rows
            .iter()
            .map(|row| {
                // Short rows are padded so every row has one cell per plan
                let mut cells: Vec<String> =
                    row.values.iter().map(|c| self.compare_cell(c)).collect();
                if cells.len() < plans.len() {
                    cells.resize(plans.len(), self.strings().compare_not_included.to_string());
                }
                CompareRowView {
                    feature: self.text(&row.feature),
                    cells,
                }
            })
            .collect();

        SectionView::CompareFeatures(CompareFeaturesView {
            layout: select_layout(&section.sub_tag),
            heading: self.text(&section.heading),
            description: self.opt(&section.description),
            plans,
            rows,
        })
    }

    fn stats(&mut self, section: &StatsSection) -> SectionView {
        let stats = section
            .stats
            .iter()
            .map(|stat| StatView {
                value: self.text(&stat.value),
                label: self.text(&stat.label),
                description: self.opt(&stat.description),
            })
            .collect();

        SectionView::Stats(StatsView {
            layout: select_layout(&section.sub_tag),
            heading: self.text(&section.heading),
            description: self.opt(&section.description),
            stats,
        })
    }

    fn faq(&mut self, section: &FaqSection) -> SectionView {
        let layout: FaqVariant = select_layout(&section.sub_tag);

        let groups = match layout {
            FaqVariant::Categories => {
                // Groups keep the order in which their category first appears
                let mut order: Vec<String> = Vec::new();
                let mut grouped: BTreeMap<String, Vec<FaqItemView>> = BTreeMap::new();
                for item in &section.faqs {
                    let category = self.text(&item.category);
                    if !grouped.contains_key(&category) {
                        order.push(category.clone());
                    }
                    grouped.entry(category).or_default().push(FaqItemView {
                        question: self.text(&item.question),
                        answer: self.text(&item.answer),
                    });
                }
                order
                    .into_iter()
                    .filter_map(|category| {
                        let items = grouped.remove(&category)?;
                        Some(FaqGroupView { category, items })
                    })
                    .collect()
            }
            FaqVariant::Accordion | FaqVariant::TwoColumn => vec![FaqGroupView {
                category: String::new(),
                items: section
                    .faqs
                    .iter()
                    .map(|item| FaqItemView {
                        question: self.text(&item.question),
                        answer: self.text(&item.answer),
                    })
                    .collect(),
            }],
        };

        SectionView::Faq(FaqView {
            layout,
            heading: self.text_or(&section.heading, self.strings().faq_heading),
            description: self.opt(&section.description),
            groups,
        })
    }

    fn blog(&mut self, section: &BlogSection) -> SectionView {
        let layout: BlogVariant = select_layout(&section.sub_tag);
        let limit = section.limit.unwrap_or(usize::MAX);

        let mut posts: Vec<PostView> = section
            .posts
            .iter()
            .take(limit)
            .map(|p| self.post(p))
            .collect();

        let featured = if layout == BlogVariant::Featured && !posts.is_empty() {
            Some(posts.remove(0))
        } else {
            None
        };

        let empty_message = (posts.is_empty() && featured.is_none())
            .then(|| self.strings().blog_empty.to_string());

        SectionView::Blog(BlogView {
            layout,
            heading: self.text_or(&section.heading, self.strings().blog_heading),
            description: self.opt(&section.description),
            featured,
            posts,
            empty_message,
        })
    }

    fn contact(&mut self, section: &ContactSection) -> SectionView {
        let strings = self.strings();
        SectionView::Contact(ContactView {
            layout: select_layout(&section.sub_tag),
            heading: self.text_or(&section.heading, strings.contact_heading),
            description: self.opt(&section.description),
            email: section.email.clone(),
            phone: section.phone.clone(),
            address: self.opt(&section.address),
            map_embed_url: section.map_embed_url.clone(),
            submit_label: self.text_or(&section.submit_label, strings.contact_submit),
        })
    }

    fn newsletter(&mut self, section: &NewsletterSection) -> SectionView {
        let strings = self.strings();
        SectionView::Newsletter(NewsletterView {
            layout: select_layout(&section.sub_tag),
            heading: self.text(&section.heading),
            description: self.opt(&section.description),
            placeholder: self.text_or(&section.placeholder, strings.newsletter_placeholder),
            button_label: self.text_or(&section.button_label, strings.newsletter_button),
            disclaimer: self.opt(&section.disclaimer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::dispatch::render_section;
    use crate::sections::variant::{CtaVariant, NewsletterVariant};
    use serde_json::json;

    fn render(language: Language, raw: serde_json::Value) -> SectionView {
        render_section(&mut ViewRenderer::new(language), &raw).expect("Should render")
    }

    // ==================== Hero Tests ====================

    #[test]
    fn test_hero_default_layout_is_button_banner() {
        let view = render(
            Language::ENGLISH,
            json!({
                "_type": "heroSection",
                "heading": "Ship faster",
                "badge": "New",
                "buttons": [{ "label": "Try it", "href": "/signup" }]
            }),
        );

        let SectionView::Hero(hero) = view else {
            panic!("Expected hero view");
        };
        assert_eq!(hero.layout, HeroVariant::ButtonBanner);
        assert_eq!(hero.badge, None);
        assert_eq!(hero.buttons[0].label, "Try it");
        assert_eq!(hero.buttons[0].style, "primary");
        assert!(!hero.buttons[0].external);
    }

    #[test]
    fn test_hero_badge_banner_keeps_badge() {
        let view = render(
            Language::PORTUGUESE,
            json!({
                "_type": "heroSection",
                "variant": "badgeBanner",
                "badge": { "en": "New", "pt_BR": "Novo" }
            }),
        );

        let SectionView::Hero(hero) = view else {
            panic!("Expected hero view");
        };
        assert_eq!(hero.badge.as_deref(), Some("Novo"));
    }

    #[test]
    fn test_hero_side_image_keeps_first_image() {
        let view = render(
            Language::ENGLISH,
            json!({
                "_type": "heroSection",
                "variant": "sideImage",
                "images": [{ "url": "/a.png" }, { "url": "" }, { "url": "/c.png" }]
            }),
        );

        let SectionView::Hero(hero) = view else {
            panic!("Expected hero view");
        };
        assert_eq!(hero.images.len(), 1);
        assert_eq!(hero.images[0].url, "/a.png");
    }

    #[test]
    fn test_hero_gallery_drops_images_without_url() {
        let view = render(
            Language::ENGLISH,
            json!({
                "_type": "heroSection",
                "layout": "imageGallery",
                "images": [{ "url": "/a.png" }, { "alt": "missing" }, { "url": "/c.png" }]
            }),
        );

        let SectionView::Hero(hero) = view else {
            panic!("Expected hero view");
        };
        assert_eq!(hero.images.len(), 2);
    }

    #[test]
    fn test_button_label_falls_back_to_static_string() {
        let view = render(
            Language::PORTUGUESE,
            json!({ "_type": "ctaSection", "buttons": [{ "href": "/go" }] }),
        );

        let SectionView::Cta(cta) = view else {
            panic!("Expected cta view");
        };
        assert_eq!(cta.layout, CtaVariant::Default);
        assert_eq!(cta.buttons[0].label, "Comece agora");
    }

    // ==================== Pricing Tests ====================

    fn pricing(variant: &str) -> PricingView {
        let view = render(
            Language::ENGLISH,
            json!({
                "_type": "pricingSection",
                "variant": variant,
                "plans": [
                    { "name": "Starter", "monthlyPrice": 9, "yearlyPrice": 90 },
                    { "name": "Pro", "monthlyPrice": 29, "yearlyPrice": 290, "highlighted": true }
                ]
            }),
        );
        match view {
            SectionView::Pricing(p) => p,
            other => panic!("Expected pricing view, got {other:?}"),
        }
    }

    #[test]
    fn test_pricing_toggle_has_both_prices() {
        let view = pricing("toggle");
        assert_eq!(view.billing_toggle.as_ref().unwrap().monthly, "Monthly");
        assert_eq!(view.plans[0].yearly_price, Some(90.0));
        assert_eq!(view.plans[1].badge.as_deref(), Some("Most popular"));
    }

    #[test]
    fn test_pricing_single_picks_highlighted_plan() {
        let view = pricing("single");
        assert_eq!(view.plans.len(), 1);
        assert_eq!(view.plans[0].name, "Pro");
        assert!(view.billing_toggle.is_none());
    }

    #[test]
    fn test_pricing_default_shows_monthly_only() {
        let view = pricing("default");
        assert_eq!(view.plans.len(), 2);
        assert_eq!(view.plans[0].monthly_price, Some(9.0));
        assert_eq!(view.plans[0].yearly_price, None);
        assert_eq!(view.plans[0].currency, "USD");
    }

    // ==================== Compare Features Tests ====================

    #[test]
    fn test_compare_cells_use_static_strings_and_pad() {
        let view = render(
            Language::PORTUGUESE,
            json!({
                "_type": "compareFeaturesSection",
                "plans": ["Free", "Pro", "Team"],
                "rows": [{ "feature": "SSO", "values": [false, true] }]
            }),
        );

        let SectionView::CompareFeatures(compare) = view else {
            panic!("Expected compare view");
        };
        assert_eq!(
            compare.rows[0].cells,
            vec!["Não incluído", "Incluído", "Não incluído"]
        );
    }

    // ==================== FAQ Tests ====================

    #[test]
    fn test_faq_categories_group_in_first_seen_order() {
        let view = render(
            Language::ENGLISH,
            json!({
                "_type": "faqSection",
                "variant": "categories",
                "faqs": [
                    { "question": "Q1", "answer": "A1", "category": "Billing" },
                    { "question": "Q2", "answer": "A2", "category": "Account" },
                    { "question": "Q3", "answer": "A3", "category": "Billing" }
                ]
            }),
        );

        let SectionView::Faq(faq) = view else {
            panic!("Expected faq view");
        };
        assert_eq!(faq.heading, "Frequently asked questions");
        assert_eq!(faq.groups.len(), 2);
        assert_eq!(faq.groups[0].category, "Billing");
        assert_eq!(faq.groups[0].items.len(), 2);
        assert_eq!(faq.groups[1].category, "Account");
    }

    #[test]
    fn test_faq_accordion_single_group() {
        let view = render(
            Language::ENGLISH,
            json!({ "_type": "faqSection", "faqs": [{ "question": "Q", "category": "X" }] }),
        );

        let SectionView::Faq(faq) = view else {
            panic!("Expected faq view");
        };
        assert_eq!(faq.layout, FaqVariant::Accordion);
        assert_eq!(faq.groups.len(), 1);
        assert_eq!(faq.groups[0].category, "");
    }

    // ==================== Blog Tests ====================

    #[test]
    fn test_blog_featured_takes_first_post() {
        let view = render(
            Language::ENGLISH,
            json!({
                "_type": "blogSection",
                "variant": "featured",
                "limit": 2,
                "posts": [
                    { "title": "One", "slug": "one", "author": { "name": "Ana" },
                      "publishedAt": "2024-03-05T10:00:00Z" },
                    { "title": "Two" },
                    { "title": "Three" }
                ]
            }),
        );

        let SectionView::Blog(blog) = view else {
            panic!("Expected blog view");
        };
        let featured = blog.featured.expect("Should feature first post");
        assert_eq!(featured.title, "One");
        assert_eq!(featured.href.as_deref(), Some("/blog/one"));
        assert_eq!(featured.byline.as_deref(), Some("By Ana"));
        assert_eq!(featured.published.as_deref(), Some("Mar 5, 2024"));
        assert_eq!(blog.posts.len(), 1);
        assert_eq!(blog.empty_message, None);
    }

    #[test]
    fn test_blog_empty_message_localized() {
        let view = render(Language::PORTUGUESE, json!({ "_type": "blogSection" }));

        let SectionView::Blog(blog) = view else {
            panic!("Expected blog view");
        };
        assert_eq!(blog.heading, "Últimos artigos");
        assert_eq!(blog.empty_message.as_deref(), Some("Nenhuma publicação ainda."));
    }

    #[test]
    fn test_blog_date_format_per_language() {
        let view = render(
            Language::PORTUGUESE,
            json!({
                "_type": "blogSection",
                "posts": [{ "title": "Um", "publishedAt": "2024-03-05T10:00:00Z" }]
            }),
        );

        let SectionView::Blog(blog) = view else {
            panic!("Expected blog view");
        };
        assert_eq!(blog.posts[0].published.as_deref(), Some("05/03/2024"));
        assert_eq!(blog.posts[0].read_more, "Leia mais");
    }

    // ==================== Testimonials Tests ====================

    #[test]
    fn test_testimonials_single_and_role() {
        let view = render(
            Language::ENGLISH,
            json!({
                "_type": "testimonialsSection",
                "variant": "single",
                "testimonials": [
                    { "quote": "Great", "author": "Bo", "role": "CTO", "company": "Acme", "rating": 9 },
                    { "quote": "Fine", "author": "Cy" }
                ]
            }),
        );

        let SectionView::Testimonials(t) = view else {
            panic!("Expected testimonials view");
        };
        assert_eq!(t.testimonials.len(), 1);
        assert_eq!(t.testimonials[0].role.as_deref(), Some("CTO, Acme"));
        assert_eq!(t.testimonials[0].rating, Some(5));
        assert_eq!(t.heading, "What our customers say");
    }

    // ==================== Newsletter / Contact Tests ====================

    #[test]
    fn test_newsletter_unknown_variant_uses_default_and_static_labels() {
        let view = render(
            Language::ENGLISH,
            json!({ "_type": "newsletterSection", "variant": "bogus" }),
        );

        let SectionView::Newsletter(n) = view else {
            panic!("Expected newsletter view");
        };
        assert_eq!(n.layout, NewsletterVariant::Default);
        assert_eq!(n.placeholder, "Enter your email");
        assert_eq!(n.button_label, "Subscribe");
    }

    #[test]
    fn test_contact_localized_submit_label() {
        let view = render(
            Language::PORTUGUESE,
            json!({
                "_type": "contactSection",
                "email": "hi@example.com",
                "submitLabel": [{ "language": "en", "value": "Send" }]
            }),
        );

        let SectionView::Contact(c) = view else {
            panic!("Expected contact view");
        };
        // Only an English entry exists, so the base language wins over the static label
        assert_eq!(c.submit_label, "Send");
        assert_eq!(c.heading, "Fale conosco");
        assert_eq!(c.email.as_deref(), Some("hi@example.com"));
    }

    // ==================== Loose Field Tests ====================

    #[test]
    fn test_fractional_rating_keeps_testimonials() {
        let view = render(
            Language::ENGLISH,
            json!({
                "_type": "testimonialsSection",
                "heading": { "en": "Loved by teams", "pt_BR": "Amado por times" },
                "testimonials": [{ "quote": "Great", "author": "Bo", "rating": 4.5 }]
            }),
        );

        let SectionView::Testimonials(t) = view else {
            panic!("Expected testimonials view");
        };
        assert_eq!(t.heading, "Loved by teams");
        assert_eq!(t.testimonials[0].rating, Some(5));
    }

    #[test]
    fn test_date_only_published_at_keeps_blog() {
        let view = render(
            Language::ENGLISH,
            json!({
                "_type": "blogSection",
                "heading": "News",
                "posts": [{ "title": "Launch", "slug": "launch", "publishedAt": "2024-03-05" }]
            }),
        );

        let SectionView::Blog(blog) = view else {
            panic!("Expected blog view");
        };
        assert_eq!(blog.heading, "News");
        assert_eq!(blog.posts[0].published.as_deref(), Some("Mar 5, 2024"));
    }

    #[test]
    fn test_string_price_keeps_pricing() {
        let view = render(
            Language::ENGLISH,
            json!({
                "_type": "pricingSection",
                "heading": "Plans",
                "plans": [
                    { "name": "Pro", "monthlyPrice": "29" },
                    { "name": "Custom", "monthlyPrice": "talk to us" }
                ]
            }),
        );

        let SectionView::Pricing(p) = view else {
            panic!("Expected pricing view");
        };
        assert_eq!(p.heading, "Plans");
        assert_eq!(p.plans[0].monthly_price, Some(29.0));
        assert_eq!(p.plans[1].name, "Custom");
        assert_eq!(p.plans[1].monthly_price, None);
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_view_serializes_kind_and_layout() {
        let view = render(
            Language::ENGLISH,
            json!({ "_type": "statsSection", "variant": "cards", "stats": [{ "value": "99%" }] }),
        );

        assert_eq!(view.layout(), "cards");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "statsSection");
        assert_eq!(json["layout"], "cards");
        assert_eq!(json["stats"][0]["value"], "99%");
        assert!(json["stats"][0].get("description").is_none());
    }
}
