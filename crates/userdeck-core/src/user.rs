use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// One entry of the remote user directory. Extra fields in the payload
/// (address, company, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl UserRecord {
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}

pub fn decode_users(body: &[u8]) -> Result<Vec<UserRecord>, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_placeholder_payload_ignoring_extra_fields() {
        let body = br#"[
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": { "street": "Kulas Light", "city": "Gwenborough" },
                "phone": "1-770-736-8031 x56442",
                "website": "hildegard.org",
                "company": { "name": "Romaguera-Crona" }
            }
        ]"#;
        let users = decode_users(body).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[0].website, "hildegard.org");
    }

    #[test]
    fn empty_array_is_a_valid_collection() {
        assert_eq!(decode_users(b"[]").unwrap(), Vec::new());
    }

    #[test]
    fn object_instead_of_array_is_a_decode_error() {
        let err = decode_users(br#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let err = decode_users(br#"[{"id": 1, "name": "A", "email": "a@x", "phone": "1"}]"#).unwrap_err();
        match err {
            FetchError::Decode(msg) => assert!(msg.contains("website"), "unexpected message: {msg}"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        assert!(matches!(decode_users(b"<html>oops</html>"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn match_is_case_insensitive_over_name_and_email() {
        let user = UserRecord {
            id: 7,
            name: "Kurtis Weissnat".into(),
            email: "Telly.Hoeger@billy.biz".into(),
            phone: "210.067.6132".into(),
            website: "elvis.io".into(),
        };
        assert!(user.matches_lowercase("kurtis"));
        assert!(user.matches_lowercase("telly.hoeger"));
        assert!(!user.matches_lowercase("elvis"));
        assert!(!user.matches_lowercase("210"));
    }
}
