use serde::{Deserialize, Serialize};

/// A single extracurricular offering. The activity's name is the registry
/// key, so it is not repeated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Signup order is preserved; each email appears at most once.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_registered() {
        let activity = Activity {
            description: "Debate practice".to_string(),
            schedule: "Wednesdays, 4:00 PM".to_string(),
            max_participants: 10,
            participants: vec!["alice@mergington.edu".to_string()],
        };

        assert!(activity.is_registered("alice@mergington.edu"));
        assert!(!activity.is_registered("bob@mergington.edu"));
    }

    #[test]
    fn test_activity_serializes_with_participants() {
        let activity = Activity {
            description: "Debate practice".to_string(),
            schedule: "Wednesdays, 4:00 PM".to_string(),
            max_participants: 10,
            participants: vec!["alice@mergington.edu".to_string()],
        };

        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(value["max_participants"], 10);
        assert_eq!(value["participants"][0], "alice@mergington.edu");
    }
}
