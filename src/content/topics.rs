/// Detail text shown for one technology card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TopicDetail {
    pub(crate) title: &'static str,
    pub(crate) body: &'static str,
    /// (label, text) pairs
    pub(crate) points: &'static [(&'static str, &'static str)],
}

pub(crate) const TOPIC_SLUGS: [&str; 4] = ["smart-solar", "ev", "ewaste", "green-arch"];

static SMART_SOLAR: TopicDetail = TopicDetail {
    title: "Smart Solar Grids — how they work",
    body: "Smart inverters and tiny neighbourhood batteries match supply with demand. \
           An AI brain shifts power where it is needed and stores the rest.",
    points: &[
        (
            "Impact:",
            "lowers peak-hour demand and reduces backups to fossil fuel plants.",
        ),
        (
            "Try:",
            "measure your household consumption for a day and propose 1 appliance to shift to off-peak hours.",
        ),
    ],
};

static EV: TopicDetail = TopicDetail {
    title: "Electric Mobility — silent, efficient, human",
    body: "Electric vehicles cut local air pollution and are more efficient than petrol engines. \
           Shared e-bikes reduce short trips and traffic.",
    points: &[],
};

static EWASTE: TopicDetail = TopicDetail {
    title: "E-waste Recycling — treasure in trash",
    body: "Phones and motherboards hold small quantities of metals like gold and copper. \
           Recycling recovers them and prevents toxic leaching.",
    points: &[],
};

static GREEN_ARCH: TopicDetail = TopicDetail {
    title: "Green Architecture — design that breathes",
    body: "Green roofs, shade trees and smart ventilation reduce energy use \
           and make cities cooler and healthier.",
    points: &[],
};

static FALLBACK: TopicDetail = TopicDetail {
    title: "EcoTech",
    body: "Explore the idea to learn more.",
    points: &[],
};

/// Detail for `slug`; unknown slugs get the generic card
pub(crate) fn topic_detail(slug: &str) -> &'static TopicDetail {
    match slug.trim() {
        "smart-solar" => &SMART_SOLAR,
        "ev" => &EV,
        "ewaste" => &EWASTE,
        "green-arch" => &GREEN_ARCH,
        _ => &FALLBACK,
    }
}
