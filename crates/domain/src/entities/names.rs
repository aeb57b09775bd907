//! Names dataset - first names keyed by sex, plus shared last names.

use serde::{Deserialize, Serialize};

use crate::value_objects::Sex;

/// First and last names a character can be given.
///
/// The data file nests first names under `firstName`:
///
/// ```json
/// { "firstName": { "male": ["Sam"], "female": ["Alex"] }, "lastNames": ["Doe"] }
/// ```
///
/// Any missing list deserializes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NamesFile", into = "NamesFile")]
pub struct Names {
    pub male_first_names: Vec<String>,
    pub female_first_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl Names {
    pub fn new(
        male_first_names: Vec<String>,
        female_first_names: Vec<String>,
        last_names: Vec<String>,
    ) -> Self {
        Self {
            male_first_names,
            female_first_names,
            last_names,
        }
    }

    /// First names matching the given sex.
    pub fn first_names_for(&self, sex: Sex) -> &[String] {
        match sex {
            Sex::Male => &self.male_first_names,
            Sex::Female => &self.female_first_names,
        }
    }

    /// True when every list is empty.
    pub fn is_empty(&self) -> bool {
        self.male_first_names.is_empty()
            && self.female_first_names.is_empty()
            && self.last_names.is_empty()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NamesFile {
    #[serde(default)]
    first_name: FirstNamesFile,
    #[serde(default)]
    last_names: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FirstNamesFile {
    #[serde(default)]
    male: Vec<String>,
    #[serde(default)]
    female: Vec<String>,
}

impl From<NamesFile> for Names {
    fn from(file: NamesFile) -> Self {
        Self {
            male_first_names: file.first_name.male,
            female_first_names: file.first_name.female,
            last_names: file.last_names,
        }
    }
}

impl From<Names> for NamesFile {
    fn from(names: Names) -> Self {
        Self {
            first_name: FirstNamesFile {
                male: names.male_first_names,
                female: names.female_first_names,
            },
            last_names: names.last_names,
        }
    }
}
