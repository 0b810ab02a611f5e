//! The fixed three-tier package catalog. Loaded once, looked up by slug.

#[derive(Clone, PartialEq)]
pub struct Package {
    pub slug: &'static str,
    pub name: &'static str,
    /// Base price in whole dollars.
    pub price: u32,
    pub display_price: &'static str,
    /// Typical delivery timeline in days.
    pub days: u32,
    /// Expedited timeline in days when rush is requested.
    pub rush_days: u32,
    /// Flat fee in whole dollars added when rush is requested.
    pub rush_fee: u32,
    pub blurb: &'static str,
    pub perfect_for: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlight: bool,
}

impl Package {
    /// Derived total shown on the brief and payment pages. Both pages use
    /// this same rule so their figures never drift apart.
    pub fn total(&self, rush: bool) -> u32 {
        self.price + if rush { self.rush_fee } else { 0 }
    }
}

pub const PACKAGES: &[Package] = &[
    Package {
        slug: "starter",
        name: "Starter",
        price: 900,
        display_price: "$900",
        days: 4,
        rush_days: 2,
        rush_fee: 200,
        blurb: "2–3 pages, modern motion, responsive. Fast launch.",
        perfect_for: "Cafés, barbers, freelancers",
        features: &[
            "2–3 custom pages",
            "Responsive + performance pass",
            "Simple lead/contact form",
            "Launch in days",
        ],
        cta: "Start Starter",
        highlight: false,
    },
    Package {
        slug: "growth",
        name: "Growth",
        price: 2300,
        display_price: "$2,300",
        days: 8,
        rush_days: 6,
        rush_fee: 400,
        blurb: "5–7 pages, SEO + schema, booking, Maps, integrations.",
        perfect_for: "Dentists, gyms, restaurants, small firms",
        features: &[
            "5–7 custom pages",
            "On-page SEO + schema",
            "Booking & Maps",
            "3rd-party integrations",
            "Content guidance",
        ],
        cta: "Grow with Growth",
        highlight: true,
    },
    Package {
        slug: "scale",
        name: "Scale",
        price: 7000,
        display_price: "$7,000",
        days: 14,
        rush_days: 10,
        rush_fee: 800,
        blurb: "10+ pages, strategy, advanced SEO + analytics, CRM/e-com.",
        perfect_for: "Law, real estate, healthcare, e-com",
        features: &[
            "10+ pages",
            "Strategy + funnel mapping",
            "Advanced SEO + analytics",
            "Booking / e-com / CRM",
            "Copy support",
        ],
        cta: "Scale with Scale",
        highlight: false,
    },
];

pub fn lookup(slug: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_every_tier() {
        for slug in ["starter", "growth", "scale"] {
            assert!(lookup(slug).is_some(), "missing package {slug}");
        }
        assert!(lookup("unknown").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn totals_with_and_without_rush() {
        for p in PACKAGES {
            assert_eq!(p.total(false), p.price);
            assert_eq!(p.total(true), p.price + p.rush_fee);
        }
        let growth = lookup("growth").unwrap();
        assert_eq!(growth.total(true), 2700);
    }

    #[test]
    fn rush_always_shortens_the_timeline() {
        for p in PACKAGES {
            assert!(p.rush_days < p.days, "{}: rush must be faster", p.slug);
        }
    }
}
