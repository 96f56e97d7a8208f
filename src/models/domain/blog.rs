use serde::{Deserialize, Serialize};

use crate::constants::prompts::{
    AUDIENCE_DESCRIPTIONS, BALANCED_STRUCTURE, CONCISE_STRUCTURE, DETAILED_STRUCTURE,
    TONE_DESCRIPTIONS,
};

pub const CONCISE_LIMIT: u32 = 400;
pub const DETAILED_LIMIT: u32 = 800;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Humorous,
    Inspirational,
    Educational,
    Conversational,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Humorous,
        Tone::Inspirational,
        Tone::Educational,
        Tone::Conversational,
    ];

    pub fn description(self) -> &'static str {
        lookup(&TONE_DESCRIPTIONS, self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    General,
    Beginners,
    Intermediate,
    Experts,
    Professionals,
    Students,
}

impl Audience {
    pub const ALL: [Audience; 6] = [
        Audience::General,
        Audience::Beginners,
        Audience::Intermediate,
        Audience::Experts,
        Audience::Professionals,
        Audience::Students,
    ];

    pub fn description(self) -> &'static str {
        lookup(&AUDIENCE_DESCRIPTIONS, self)
    }
}

fn lookup<K: PartialEq>(table: &[(K, &'static str)], key: K) -> &'static str {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, description)| *description)
        .unwrap_or_default()
}

/// Structure instruction selected by the requested word count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthBand {
    Concise,
    Balanced,
    Detailed,
}

impl LengthBand {
    pub fn for_length(length: u32) -> Self {
        if length < CONCISE_LIMIT {
            LengthBand::Concise
        } else if length > DETAILED_LIMIT {
            LengthBand::Detailed
        } else {
            LengthBand::Balanced
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            LengthBand::Concise => CONCISE_STRUCTURE,
            LengthBand::Balanced => BALANCED_STRUCTURE,
            LengthBand::Detailed => DETAILED_STRUCTURE,
        }
    }
}
