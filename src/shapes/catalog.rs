//! Static names, descriptions and keywords for each pattern.

use crate::core::{PatternSubType, PatternType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

const BUNDLE: PatternDescriptor = PatternDescriptor {
    name: "Bundle",
    description: "All bodies gather within a third of the wheel. Energy is concentrated and \
                  specialised, with strong focus on a narrow range of life experience.",
    keywords: &["concentration", "focus", "specialisation", "self-containment"],
};

const BUCKET: PatternDescriptor = PatternDescriptor {
    name: "Bucket",
    description: "A bowl of bodies with one or two isolated handles across the empty side. \
                  The handle channels the energy of the rim toward a single purpose.",
    keywords: &["direction", "channelling", "purpose", "leverage"],
};

const BUCKET_SINGLETON: PatternDescriptor = PatternDescriptor {
    name: "Bucket (Singleton handle)",
    description: "A bowl of bodies with one isolated handle across the empty side. A single \
                  body carries the whole drive of the rim.",
    keywords: &["direction", "channelling", "single focus", "leverage"],
};

const BUCKET_DOUBLE: PatternDescriptor = PatternDescriptor {
    name: "Bucket (Double handle)",
    description: "A bowl of bodies with a close pair forming the handle. The channelled energy \
                  is shared between two cooperating outlets.",
    keywords: &["direction", "channelling", "partnership", "shared outlet"],
};

const BOWL: PatternDescriptor = PatternDescriptor {
    name: "Bowl",
    description: "All bodies fit within half of the wheel, leaving the other half empty. A \
                  self-contained outlook that reaches toward what it lacks.",
    keywords: &["containment", "self-sufficiency", "mission", "awareness of lack"],
};

const BOWL_LEADING: PatternDescriptor = PatternDescriptor {
    name: "Bowl (Leading)",
    description: "A half-wheel bowl whose empty side lies in the northern half. The leading \
                  body sets the tone for initiative.",
    keywords: &["containment", "initiative", "mission", "leading edge"],
};

const BOWL_TRAILING: PatternDescriptor = PatternDescriptor {
    name: "Bowl (Trailing)",
    description: "A half-wheel bowl whose empty side lies in the southern half. Experience is \
                  gathered and consolidated behind the trailing body.",
    keywords: &["containment", "consolidation", "mission", "trailing edge"],
};

const BOWL_EASTERN: PatternDescriptor = PatternDescriptor {
    name: "Bowl (Eastern)",
    description: "A bowl weighted heavily toward the eastern side. Self-directed and driven by \
                  personal initiative.",
    keywords: &["containment", "self-direction", "independence", "initiative"],
};

const BOWL_WESTERN: PatternDescriptor = PatternDescriptor {
    name: "Bowl (Western)",
    description: "A bowl weighted heavily toward the western side. Oriented toward others and \
                  shaped by relationships.",
    keywords: &["containment", "relationship", "responsiveness", "cooperation"],
};

const LOCOMOTIVE: PatternDescriptor = PatternDescriptor {
    name: "Locomotive",
    description: "Bodies occupy about two thirds of the wheel with a single empty third. A \
                  self-driving, persistent pattern with strong momentum.",
    keywords: &["momentum", "drive", "persistence", "executive power"],
};

const LOCOMOTIVE_CLOCKWISE: PatternDescriptor = PatternDescriptor {
    name: "Locomotive (Clockwise)",
    description: "A locomotive whose empty third faces east. Momentum is turned outward toward \
                  the world.",
    keywords: &["momentum", "drive", "outward push", "executive power"],
};

const LOCOMOTIVE_COUNTERCLOCKWISE: PatternDescriptor = PatternDescriptor {
    name: "Locomotive (Counterclockwise)",
    description: "A locomotive whose empty third faces west. Momentum is turned inward toward \
                  personal goals.",
    keywords: &["momentum", "drive", "inner purpose", "executive power"],
};

const SEESAW: PatternDescriptor = PatternDescriptor {
    name: "Seesaw",
    description: "Two groups of bodies face each other across the wheel. Life is experienced \
                  through balancing opposing viewpoints.",
    keywords: &["balance", "polarity", "perspective", "weighing options"],
};

const SPLASH: PatternDescriptor = PatternDescriptor {
    name: "Splash",
    description: "Bodies are spread evenly around the whole wheel. Wide-ranging interests and \
                  a universal outlook.",
    keywords: &["versatility", "breadth", "universality", "scattered energy"],
};

const SPLAY: PatternDescriptor = PatternDescriptor {
    name: "Splay",
    description: "Irregular groupings with no dominant structure. A strongly individual \
                  pattern that resists categories.",
    keywords: &["individuality", "independence", "unconventional", "purposeful"],
};

/// Descriptor for a pattern, refined by sub-type when one applies.
pub const fn describe(pattern: PatternType, sub_type: Option<PatternSubType>) -> PatternDescriptor {
    match (pattern, sub_type) {
        (PatternType::Bundle, _) => BUNDLE,
        (PatternType::Bucket, Some(PatternSubType::Singleton)) => BUCKET_SINGLETON,
        (PatternType::Bucket, Some(PatternSubType::Double)) => BUCKET_DOUBLE,
        (PatternType::Bucket, _) => BUCKET,
        (PatternType::Bowl, Some(PatternSubType::Leading)) => BOWL_LEADING,
        (PatternType::Bowl, Some(PatternSubType::Trailing)) => BOWL_TRAILING,
        (PatternType::Bowl, Some(PatternSubType::Eastern)) => BOWL_EASTERN,
        (PatternType::Bowl, Some(PatternSubType::Western)) => BOWL_WESTERN,
        (PatternType::Bowl, _) => BOWL,
        (PatternType::Locomotive, Some(PatternSubType::Clockwise)) => LOCOMOTIVE_CLOCKWISE,
        (PatternType::Locomotive, Some(PatternSubType::Counterclockwise)) => {
            LOCOMOTIVE_COUNTERCLOCKWISE
        }
        (PatternType::Locomotive, _) => LOCOMOTIVE,
        (PatternType::Seesaw, _) => SEESAW,
        (PatternType::Splash, _) => SPLASH,
        (PatternType::Splay, _) => SPLAY,
    }
}
