//! Profiles - the user's own profile and generated candidates

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Goal;

/// Minimum age accepted during onboarding
pub const MIN_AGE: u32 = 18;

/// The user's own profile, filled in during onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub goal: Goal,
}

/// A generated candidate profile. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub avatar: String,
    /// Distinct tags in draw order (1 to 3 entries)
    pub tags: Vec<String>,
    pub desc: String,
}

impl Profile {
    /// Build a profile, collapsing duplicate tags while keeping draw order
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        avatar: impl Into<String>,
        tags: impl IntoIterator<Item = String>,
        desc: impl Into<String>,
    ) -> Self {
        let mut distinct: Vec<String> = Vec::with_capacity(3);
        for tag in tags {
            if !distinct.contains(&tag) {
                distinct.push(tag);
            }
        }

        Self {
            id: id.into(),
            name: name.into(),
            age,
            avatar: avatar.into(),
            tags: distinct,
            desc: desc.into(),
        }
    }

    /// Identifier of the one chat kept for this profile
    pub fn chat_id(&self) -> String {
        chat_id_for(&self.id)
    }
}

/// Chat identifiers are derived from the profile id, one chat per profile.
pub fn chat_id_for(profile_id: &str) -> String {
    format!("c_{}", profile_id)
}
