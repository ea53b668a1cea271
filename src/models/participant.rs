use serde::{Deserialize, Serialize};

/// A directory user who can be invited to an event.
///
/// Sourced from the external participant directory; this crate only reads
/// participants, it never creates or mutates them. The directory documents
/// carry more profile fields than these; only what event scheduling needs is
/// decoded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Participant {
    /// Display name used by participant pickers.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let p = Participant {
            id: "u1".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Lima".to_string(),
            email: "maria@example.com".to_string(),
        };
        assert_eq!(p.full_name(), "Maria Lima");
    }

    #[test]
    fn test_wire_fields_are_camel_case() {
        let json = r#"{"id":"u2","firstName":"João","lastName":"Prado","email":"joao@example.com"}"#;
        let p: Participant = serde_json::from_str(json).unwrap();
        assert_eq!(p.first_name, "João");
        assert_eq!(p.last_name, "Prado");

        let out = serde_json::to_string(&p).unwrap();
        assert!(out.contains("\"firstName\""));
        assert!(out.contains("\"lastName\""));
    }
}
