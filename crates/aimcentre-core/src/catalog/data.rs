//! Built-in course data for the fixed catalogs and the academic templates.

use super::models::{CatalogItem, Category, Price};

/// Compile-time course record
pub(crate) struct StaticItem {
    pub name: &'static str,
    pub price: Option<Price>,
    pub description: &'static str,
    pub features: [&'static str; 3],
    pub tag: &'static str,
}

impl StaticItem {
    pub fn to_item(&self) -> CatalogItem {
        CatalogItem {
            name: self.name.to_string(),
            price: self.price,
            description: self.description.to_string(),
            features: self.features.iter().map(|f| f.to_string()).collect(),
            tag: self.tag.to_string(),
        }
    }
}

const fn item(
    name: &'static str,
    price: Option<Price>,
    description: &'static str,
    features: [&'static str; 3],
    tag: &'static str,
) -> StaticItem {
    StaticItem {
        name,
        price,
        description,
        features,
        tag,
    }
}

/// Feature template shared by every item of an academic category
pub(crate) fn academic_features(category: Category) -> &'static [&'static str] {
    match category {
        Category::EnglishMedium => &[
            "Cambridge Curriculum",
            "Intl. Exams",
            "Lab Access",
            "Debate Club",
            "Robotics",
        ],
        Category::EnglishVersion => &[
            "NCTB English",
            "Creative Method",
            "Digital Aid",
            "Science Fair",
            "Math Olympiad",
        ],
        Category::BanglaMedium => &[
            "Creative Method",
            "Cultural Activities",
            "ICT Education",
            "Language Club",
            "Scouts",
        ],
        _ => &[],
    }
}

/// Overview pricing: general track costs `GENERAL_BASE + class * CLASS_STEP`
pub(crate) const GENERAL_BASE: u32 = 3000;
/// Overview pricing: science track costs `SCIENCE_BASE + class * CLASS_STEP`
pub(crate) const SCIENCE_BASE: u32 = 3500;
pub(crate) const CLASS_STEP: u32 = 200;
/// First class that also gets a science track in the overview
pub(crate) const SCIENCE_FROM_CLASS: u8 = 6;

pub(crate) static TINY_EXPLORERS: [StaticItem; 5] = [
    item(
        "Toddler Play",
        Some(Price::monthly(5000)),
        "Sensory-rich environment for early development.",
        ["Sensory Play", "Social Skills", "Music & Art"],
        "Age 2-3",
    ),
    item(
        "Kindergarten Prep",
        Some(Price::monthly(5500)),
        "School readiness program focusing on literacy and numeracy.",
        ["Phonics", "Basic Math", "Storytelling"],
        "Age 4-5",
    ),
    item(
        "Early Art",
        Some(Price::monthly(4000)),
        "Creative expression for young minds.",
        ["Painting", "Crafts", "Colors"],
        "Age 3-5",
    ),
    item(
        "Little Musicians",
        Some(Price::monthly(4500)),
        "Introduction to rhythm and melody.",
        ["Instruments", "Singing", "Rhythm"],
        "Age 3-6",
    ),
    item(
        "Story Time",
        Some(Price::monthly(3000)),
        "Interactive storytelling sessions.",
        ["Reading", "Puppets", "Imagination"],
        "Age 2-5",
    ),
];

pub(crate) static IELTS: [StaticItem; 5] = [
    item(
        "Express Prep",
        Some(Price::one_time(10000)),
        "Intensive 1-month crash course for quick improvement.",
        ["Mock Tests", "Speaking Drills", "Writing Feedback"],
        "1 Month",
    ),
    item(
        "Comprehensive",
        Some(Price::one_time(18000)),
        "3-month in-depth preparation for band 7+.",
        ["Unlimited Mocks", "Private Session", "Study Pattern"],
        "3 Months",
    ),
    item(
        "Weekend Batch",
        Some(Price::one_time(12000)),
        "Classes on weekends for working professionals.",
        ["Flexible Timing", "Recorded Classes", "Support"],
        "2 Months",
    ),
    item(
        "Speaking Focus",
        Some(Price::one_time(8000)),
        "Dedicated module for speaking band score boost.",
        ["1-on-1 Speaking", "Accent Training", "Fluency"],
        "1 Month",
    ),
    item(
        "Writing Masterclass",
        Some(Price::one_time(8000)),
        "Advanced writing techniques for Task 1 & 2.",
        ["Essay Correction", "Vocab Building", "Structure"],
        "1 Month",
    ),
];

pub(crate) static SPOKEN_ENGLISH: [StaticItem; 5] = [
    item(
        "Beginner Fluency",
        Some(Price::monthly(3000)),
        "Build confidence in daily conversation.",
        ["Vocabulary", "Basic Grammar", "Role Play"],
        "Level 1",
    ),
    item(
        "Business Pro",
        Some(Price::monthly(5000)),
        "Professional communication skills for corporate environments.",
        ["Presentations", "Email Writing", "Negotiation"],
        "Professional",
    ),
    item(
        "Kids Spoken",
        Some(Price::monthly(3500)),
        "Fun interactive english for children.",
        ["Games", "Songs", "Stories"],
        "Kids",
    ),
    item(
        "Accent Training",
        Some(Price::monthly(4000)),
        "Neutralize accent and improve pronunciation.",
        ["Phonetics", "Intonation", "Drills"],
        "Advanced",
    ),
    item(
        "Public Speaking",
        Some(Price::monthly(6000)),
        "Master the art of speaking in front of crowds.",
        ["Confidence", "Body Language", "Speech Writing"],
        "Advanced",
    ),
];

// Support tiers are not priced per item.
pub(crate) static AUTISM_LEVEL_1: [StaticItem; 3] = [
    item(
        "Social Integration",
        None,
        "Support for mild social and communication challenges.",
        ["Group Therapy", "Skill Building", "Academic Aid"],
        "Level 1",
    ),
    item(
        "Academic Focus",
        None,
        "Tailored learning strategies for academic success.",
        ["IEP Plans", "Visual Aids", "Quiet Zones"],
        "Level 1",
    ),
    item(
        "Art Therapy",
        None,
        "Expressive therapy for emotional regulation.",
        ["Painting", "Drawing", "Expression"],
        "Level 1",
    ),
];

pub(crate) static AUTISM_LEVEL_2: [StaticItem; 3] = [
    item(
        "Behavioral Support",
        None,
        "Substantial support for social and behavioral needs.",
        ["ABA Therapy", "Speech Therapy", "Sensory Breaks"],
        "Level 2",
    ),
    item(
        "Life Skills",
        None,
        "Focus on daily living and independence.",
        ["Self-Care", "Routine Building", "Safety Skills"],
        "Level 2",
    ),
    item(
        "Sensory Integration",
        None,
        "Managing sensory processing differences.",
        ["Sensory Gym", "Tactile Play", "Calming"],
        "Level 2",
    ),
];

pub(crate) static AUTISM_LEVEL_3: [StaticItem; 3] = [
    item(
        "Intensive Care",
        None,
        "Very substantial support for daily life and learning.",
        ["1-on-1 Aide", "Communication Devices", "Sensory Integration"],
        "Level 3",
    ),
    item(
        "Therapeutic Play",
        None,
        "Engagement through specialized play therapy.",
        ["Music Therapy", "Tactile Activities", "Calming Techniques"],
        "Level 3",
    ),
    item(
        "Daily Living",
        None,
        "Hands-on support for basic needs.",
        ["Feeding", "Hygiene", "Mobility"],
        "Level 3",
    ),
];

/// Static list for one autism support level (1..=3)
pub(crate) fn autism_level(level: u8) -> &'static [StaticItem] {
    match level {
        1 => &AUTISM_LEVEL_1,
        2 => &AUTISM_LEVEL_2,
        3 => &AUTISM_LEVEL_3,
        _ => &[],
    }
}
