use serde::{Deserialize, Serialize};
use std::fmt;

/// Sex of a generated character. Selects which first-name list is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), r#""Male""#);
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), r#""Female""#);
        assert_eq!(Sex::Female.to_string(), "Female");
    }
}
