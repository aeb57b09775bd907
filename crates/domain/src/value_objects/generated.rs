//! Records returned to clients. Built fresh per request and never stored.

use serde::Serialize;

use super::Sex;
use crate::entities::PersonalityType;

/// A randomly chosen name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedName {
    pub first_name: String,
    pub last_name: String,
    pub sex: Sex,
}

/// A randomly chosen personality type and alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPersonality {
    pub personality_type: PersonalityType,
    pub alignment: String,
}

/// A full character: name fields and personality fields side by side.
///
/// Serializes flat, as
/// `{"sex", "firstName", "lastName", "personalityType": {"name", "link"}, "alignment"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCharacter {
    #[serde(flatten)]
    pub name: GeneratedName,
    #[serde(flatten)]
    pub personality: GeneratedPersonality,
}

impl GeneratedCharacter {
    pub fn new(name: GeneratedName, personality: GeneratedPersonality) -> Self {
        Self { name, personality }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn character() -> GeneratedCharacter {
        GeneratedCharacter::new(
            GeneratedName {
                first_name: "Alex".into(),
                last_name: "Doe".into(),
                sex: Sex::Female,
            },
            GeneratedPersonality {
                personality_type: PersonalityType::new("ENFP", "https://example.com/enfp"),
                alignment: "Chaotic Good".into(),
            },
        )
    }

    #[test]
    fn test_name_uses_camel_case_fields() {
        let value = serde_json::to_value(&character().name).unwrap();
        assert_eq!(
            value,
            json!({ "firstName": "Alex", "lastName": "Doe", "sex": "Female" })
        );
    }

    #[test]
    fn test_character_serializes_exactly_five_fields() {
        let value = serde_json::to_value(character()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 5);
        assert_eq!(
            value,
            json!({
                "sex": "Female",
                "firstName": "Alex",
                "lastName": "Doe",
                "personalityType": { "name": "ENFP", "link": "https://example.com/enfp" },
                "alignment": "Chaotic Good"
            })
        );
    }
}
