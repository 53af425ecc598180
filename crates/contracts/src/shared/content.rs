use serde::{Deserialize, Serialize};

/// Content shown for one demo perspective: static, supplied at
/// construction, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoContent {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// One entry of the features grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Icon name resolved by `frontend::shared::icons`
    pub icon: String,
}

/// One card of the mission/objectives grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Cascading transition delay in milliseconds
    pub delay_ms: u32,
}

/// External social profile link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Echo DTO for the contact form. The form performs no validation and no
/// persistence; submissions are logged to the console and the form resets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub role: String,
    pub message: String,
    pub newsletter: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_submission_echo_shape() {
        let submission = ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "coach".to_string(),
            message: "Hi".to_string(),
            newsletter: true,
        };
        let json = serde_json::to_string(&submission).unwrap();
        let back: ContactSubmission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, submission);
    }

    #[test]
    fn test_contact_submission_default_is_empty() {
        let blank = ContactSubmission::default();
        assert!(blank.name.is_empty());
        assert!(!blank.newsletter);
    }
}
