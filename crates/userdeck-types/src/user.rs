use serde::{Deserialize, Serialize};

/// One synthetic profile as returned by the random user endpoint.
///
/// Fields the endpoint sends beyond these are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub uid: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Label/value pairs in the order a profile card lists them.
    pub fn fields(&self) -> [(&'static str, String); 8] {
        [
            ("ID", self.id.to_string()),
            ("UID", self.uid.clone()),
            ("Password", self.password.clone()),
            ("First Name", self.first_name.clone()),
            ("Last Name", self.last_name.clone()),
            ("Username", self.username.clone()),
            ("Email", self.email.clone()),
            ("Avatar", self.avatar.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 4242,
        "uid": "1f0c3a2e-8f4b-4f5e-9d1a-2b3c4d5e6f70",
        "password": "Xy7#pQ2!",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "username": "ada.lovelace",
        "email": "ada.lovelace@email.com",
        "avatar": "https://robohash.org/ada.png?size=300x300&set=set1",
        "gender": "Female",
        "phone_number": "+1 555 0100",
        "address": {"city": "London"}
    }"#;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.id, 4242);
        assert_eq!(user.username, "ada.lovelace");
        assert_eq!(user.avatar, "https://robohash.org/ada.png?size=300x300&set=set1");
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let result: Result<User, _> = serde_json::from_str(r#"{"id": 1, "uid": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_full_name_and_fields() {
        let user: User = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(user.full_name(), "Ada Lovelace");

        let fields = user.fields();
        let labels: Vec<_> = fields.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["ID", "UID", "Password", "First Name", "Last Name", "Username", "Email", "Avatar"]
        );
        assert_eq!(fields[0].1, "4242");
        assert_eq!(fields[6].1, "ada.lovelace@email.com");
    }
}
