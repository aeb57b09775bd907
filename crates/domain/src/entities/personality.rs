//! Personality catalog - personality types and moral alignments.

use serde::{Deserialize, Serialize};

/// A named personality type with a reference link describing it.
///
/// Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityType {
    pub name: String,
    pub link: String,
}

impl PersonalityType {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

/// Everything a personality is drawn from.
///
/// Wire format: `{"personalityType": [{"name", "link"}], "alignment": ["..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityCatalog {
    #[serde(rename = "personalityType", default)]
    pub personality_types: Vec<PersonalityType>,
    #[serde(rename = "alignment", default)]
    pub alignments: Vec<String>,
}

impl PersonalityCatalog {
    pub fn new(personality_types: Vec<PersonalityType>, alignments: Vec<String>) -> Self {
        Self {
            personality_types,
            alignments,
        }
    }

    /// True when both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.personality_types.is_empty() && self.alignments.is_empty()
    }
}
