//! Selected-work gallery entries. Images live in /public/showcase.

#[derive(Clone, PartialEq)]
pub struct ShowcaseItem {
    pub key: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub src: &'static str,
}

pub const SHOWCASE: &[ShowcaseItem] = &[
    ShowcaseItem {
        key: "law",
        title: "Harbor & Sage Law — Scale",
        blurb: "Editorial architecture for business law.",
        src: "/showcase/harbor-sage-law.png",
    },
    ShowcaseItem {
        key: "vigor-hero",
        title: "Vigor Lab — Growth",
        blurb: "High-energy hero + programs grid.",
        src: "/showcase/vigor-lab-hero.png",
    },
    ShowcaseItem {
        key: "vigor-prog",
        title: "Vigor Lab — Programs",
        blurb: "Frictionless matrix to act fast.",
        src: "/showcase/vigor-lab-programs.png",
    },
    ShowcaseItem {
        key: "barber",
        title: "Urban Barber — Starter",
        blurb: "Warm tones, craft-led booking.",
        src: "/showcase/urban-barber.png",
    },
    ShowcaseItem {
        key: "ai",
        title: "SentienceWorks — Growth",
        blurb: "Futuristic palette, clear copy.",
        src: "/showcase/sentienceworks-ai.png",
    },
    ShowcaseItem {
        key: "museum",
        title: "Meridian Museum — Concept",
        blurb: "Editorial mood-first concept.",
        src: "/showcase/meridian-museum.png",
    },
];
