//! Section component tags.

/// Page section kinds known to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Logos,
    About,
    Services,
    Stats,
    VideoIntro,
    Portfolio,
    WorkProcess,
    WhyChooseUs,
    Team,
    Testimonials,
    Pricing,
    Faq,
    CallToAction,
    /// Newsletter signup and contact details.
    Footer,
}

impl SectionKind {
    /// Every kind, in the order the site usually lays them out.
    pub const ALL: [SectionKind; 15] = [
        SectionKind::Hero,
        SectionKind::Logos,
        SectionKind::About,
        SectionKind::Services,
        SectionKind::Stats,
        SectionKind::VideoIntro,
        SectionKind::Portfolio,
        SectionKind::WorkProcess,
        SectionKind::WhyChooseUs,
        SectionKind::Team,
        SectionKind::Testimonials,
        SectionKind::Pricing,
        SectionKind::Faq,
        SectionKind::CallToAction,
        SectionKind::Footer,
    ];

    /// The CMS component tag.
    pub fn component(&self) -> &'static str {
        match self {
            SectionKind::Hero => "sections.hero-section",
            SectionKind::Logos => "sections.client-logos",
            SectionKind::About => "sections.about-agency",
            SectionKind::Services => "sections.core-services",
            SectionKind::Stats => "sections.stats-counter",
            SectionKind::VideoIntro => "sections.video-intro",
            SectionKind::Portfolio => "sections.portfolio-showcase",
            SectionKind::WorkProcess => "sections.work-process",
            SectionKind::WhyChooseUs => "sections.why-choose-us",
            SectionKind::Team => "sections.team-members",
            SectionKind::Testimonials => "sections.testimonials",
            SectionKind::Pricing => "sections.pricing-plans",
            SectionKind::Faq => "sections.faq",
            SectionKind::CallToAction => "sections.cta-banner-call-to-action",
            SectionKind::Footer => "sections.newsletter-and-contact-info",
        }
    }

    /// Look up a kind by component tag.
    pub fn from_component(component: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.component() == component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_lookup() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_component(kind.component()), Some(kind));
        }
        assert_eq!(SectionKind::from_component("sections.faqs"), None);
        assert_eq!(SectionKind::from_component("faq"), None);
    }
}
