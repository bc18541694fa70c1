//! The static pillar catalog.
//!
//! Ten fixed life domains, defined once and never mutated at runtime. The
//! `id` is the stable cross-reference key between the catalog, the
//! assessment store, and the persisted snapshot - display names may change,
//! ids must not.

/// Number of pillars in the catalog.
pub const PILLAR_COUNT: usize = 10;

/// One entry of the pillar catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarDefinition {
    /// Stable unique key. Used everywhere a pillar is referenced.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Candidate practices the user can select for this pillar. May be
    /// empty, in which case the practices screen simply offers nothing.
    pub practices: &'static [&'static str],
}

static CATALOG: [PillarDefinition; PILLAR_COUNT] = [
    PillarDefinition {
        id: "health_phys",
        name: "Physical health & energy",
        description: "Vitality, sleep, nutrition and movement.",
        practices: &["Walk in the sun", "Fixed sleep schedule", "Whole foods"],
    },
    PillarDefinition {
        id: "health_ment",
        name: "Mental & emotional health",
        description: "Handling emotions, mental peace and clarity.",
        practices: &["Journaling", "Meditation", "Therapy"],
    },
    PillarDefinition {
        id: "relationships",
        name: "Relationships & support",
        description: "Quality of bonds with family and friends.",
        practices: &["Screen-free dinners", "Call a friend", "Social activity"],
    },
    PillarDefinition {
        id: "purpose",
        name: "Purpose & meaning",
        description: "Spiritual connection and reason for being.",
        practices: &["Spiritual reading", "Visualization", "Gratitude"],
    },
    PillarDefinition {
        id: "work",
        name: "Work & contribution",
        description: "Professional impact and meeting your goals.",
        practices: &["Define objectives", "Deep work blocks", "Mentoring"],
    },
    PillarDefinition {
        id: "economy",
        name: "Personal finances",
        description: "Financial health, saving and investing.",
        practices: &["Review spending", "Automate savings", "Emergency fund"],
    },
    PillarDefinition {
        id: "growth",
        name: "Growth & learning",
        description: "Intellectual development and new skills.",
        practices: &["Read a book", "Online course", "Learn a language"],
    },
    PillarDefinition {
        id: "environment",
        name: "Environment & lifestyle",
        description: "The physical space and atmosphere around you.",
        practices: &["Declutter", "Tidy your desk", "Time in nature"],
    },
    PillarDefinition {
        id: "values",
        name: "Values & character",
        description: "Integrity and coherence with who you are.",
        practices: &["Review your values", "Radical honesty", "Keep promises"],
    },
    PillarDefinition {
        id: "play",
        name: "Play & rest",
        description: "Leisure, hobbies and switching off.",
        practices: &["Creative hobby", "Digital detox", "Play actively"],
    },
];

/// The full pillar catalog, in presentation order.
#[must_use]
pub fn catalog() -> &'static [PillarDefinition] {
    &CATALOG
}

/// Look up a pillar definition by id.
#[must_use]
pub fn find_pillar(id: &str) -> Option<&'static PillarDefinition> {
    CATALOG.iter().find(|p| p.id == id)
}
