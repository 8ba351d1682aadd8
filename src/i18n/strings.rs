/// Static UI strings for a language
///
/// These are the last tier of every lookup: handlers pass them as the
/// fallback when a content field is missing or holds no usable translation.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Site ====================
    /// Site name used for page titles when a page has none
    pub site_name: &'static str,

    /// Label for the navigation menu toggle
    pub menu_label: &'static str,

    /// Copyright suffix appended after the year and site name
    pub copyright_suffix: &'static str,

    // ==================== Generic Actions ====================
    /// Label for "read more" links on cards and posts
    pub read_more: &'static str,

    /// Default label for call-to-action buttons
    pub get_started: &'static str,

    // ==================== Section Headings ====================
    /// Heading shown on FAQ sections without one
    pub faq_heading: &'static str,

    /// Heading shown on testimonial sections without one
    pub testimonials_heading: &'static str,

    /// Heading shown on contact sections without one
    pub contact_heading: &'static str,

    /// Heading shown on blog sections without one
    pub blog_heading: &'static str,

    // ==================== Pricing ====================
    /// Label for the monthly billing toggle
    pub pricing_monthly: &'static str,

    /// Label for the yearly billing toggle
    pub pricing_yearly: &'static str,

    /// Badge shown on the highlighted plan
    pub pricing_most_popular: &'static str,

    // ==================== Compare Features ====================
    /// Cell text for an included feature
    pub compare_included: &'static str,

    /// Cell text for a feature that is not included
    pub compare_not_included: &'static str,

    // ==================== Blog ====================
    /// Prefix before an author name (e.g., "By Jane")
    pub blog_by: &'static str,

    /// Message shown when a blog section has no posts
    pub blog_empty: &'static str,

    /// `chrono` format for post publication dates
    pub date_format: &'static str,

    // ==================== Forms ====================
    /// Placeholder for the newsletter email input
    pub newsletter_placeholder: &'static str,

    /// Label for the newsletter submit button
    pub newsletter_button: &'static str,

    /// Label for the contact form submit button
    pub contact_submit: &'static str,
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    site_name: "Launchpad",
    menu_label: "Menu",
    copyright_suffix: "All rights reserved.",

    read_more: "Read more",
    get_started: "Get started",

    faq_heading: "Frequently asked questions",
    testimonials_heading: "What our customers say",
    contact_heading: "Get in touch",
    blog_heading: "Latest articles",

    pricing_monthly: "Monthly",
    pricing_yearly: "Yearly",
    pricing_most_popular: "Most popular",

    compare_included: "Included",
    compare_not_included: "Not included",

    blog_by: "By",
    blog_empty: "No posts published yet.",
    date_format: "%b %-d, %Y",

    newsletter_placeholder: "Enter your email",
    newsletter_button: "Subscribe",
    contact_submit: "Send message",
};

// ==================== Portuguese Strings ====================

/// Brazilian Portuguese language strings
pub const PORTUGUESE_STRINGS: LanguageStrings = LanguageStrings {
    site_name: "Launchpad",
    menu_label: "Menu",
    copyright_suffix: "Todos os direitos reservados.",

    read_more: "Leia mais",
    get_started: "Comece agora",

    faq_heading: "Perguntas frequentes",
    testimonials_heading: "O que nossos clientes dizem",
    contact_heading: "Fale conosco",
    blog_heading: "Últimos artigos",

    pricing_monthly: "Mensal",
    pricing_yearly: "Anual",
    pricing_most_popular: "Mais popular",

    compare_included: "Incluído",
    compare_not_included: "Não incluído",

    blog_by: "Por",
    blog_empty: "Nenhuma publicação ainda.",
    date_format: "%d/%m/%Y",

    newsletter_placeholder: "Digite seu e-mail",
    newsletter_button: "Inscrever-se",
    contact_submit: "Enviar mensagem",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn all_fields(strings: &LanguageStrings) -> Vec<&'static str> {
        vec![
            strings.site_name,
            strings.menu_label,
            strings.copyright_suffix,
            strings.read_more,
            strings.get_started,
            strings.faq_heading,
            strings.testimonials_heading,
            strings.contact_heading,
            strings.blog_heading,
            strings.pricing_monthly,
            strings.pricing_yearly,
            strings.pricing_most_popular,
            strings.compare_included,
            strings.compare_not_included,
            strings.blog_by,
            strings.blog_empty,
            strings.date_format,
            strings.newsletter_placeholder,
            strings.newsletter_button,
            strings.contact_submit,
        ]
    }

    #[test]
    fn test_english_strings_not_empty() {
        assert!(all_fields(&ENGLISH_STRINGS).iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_portuguese_strings_not_empty() {
        assert!(all_fields(&PORTUGUESE_STRINGS).iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_site_name_shared_across_languages() {
        assert_eq!(ENGLISH_STRINGS.site_name, PORTUGUESE_STRINGS.site_name);
    }

    #[test]
    fn test_portuguese_strings_are_translated() {
        assert_ne!(ENGLISH_STRINGS.read_more, PORTUGUESE_STRINGS.read_more);
        assert_ne!(
            ENGLISH_STRINGS.newsletter_button,
            PORTUGUESE_STRINGS.newsletter_button
        );
        assert_ne!(
            ENGLISH_STRINGS.copyright_suffix,
            PORTUGUESE_STRINGS.copyright_suffix
        );
    }
}
