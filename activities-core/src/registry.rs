use std::collections::BTreeMap;

use dashmap::DashMap;
use tracing::debug;

use crate::errors::{RegistryError, RegistryResult};
use crate::models::Activity;

/// In-memory catalog of activities, keyed by name.
///
/// Seeded once at construction and never resized afterwards; only the
/// participant lists mutate. Each signup/unregister runs under the entry's
/// lock, so the membership check and the mutation are a single critical
/// section per activity.
pub struct ActivityRegistry {
    activities: DashMap<String, Activity>,
}

impl ActivityRegistry {
    /// Registry pre-loaded with the school's fixed catalog.
    pub fn new() -> Self {
        let activities = DashMap::new();
        for (name, activity) in seed_catalog() {
            activities.insert(name, activity);
        }
        Self { activities }
    }

    /// Name-sorted copy of the full catalog, current participants included.
    pub fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Appends `email` to the activity's participant list.
    ///
    /// Capacity is informational only and never checked here.
    pub fn sign_up(&self, activity: &str, email: &str) -> RegistryResult<()> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity.to_string()))?;

        if entry.is_registered(email) {
            return Err(RegistryError::DuplicateSignup {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        entry.participants.push(email.to_string());
        debug!(activity, email, "participant signed up");
        Ok(())
    }

    /// Removes `email` from the activity's participant list.
    pub fn unregister(&self, activity: &str, email: &str) -> RegistryResult<()> {
        let mut entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity.to_string()))?;

        let Some(position) = entry.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };

        entry.participants.remove(position);
        debug!(activity, email, "participant unregistered");
        Ok(())
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_catalog() -> Vec<(String, Activity)> {
    let catalog: [(&str, &str, &str, u32, &[&str]); 3] = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    ];

    catalog
        .into_iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
