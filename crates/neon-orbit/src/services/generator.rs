//! Profile Generator - randomized candidate profiles
//!
//! Draws every field from fixed vocabularies through a [`RandomSource`].
//! The user's goal picks the opening line of the description.

use std::collections::BTreeSet;

use uuid::Builder;

use crate::domain::{Goal, Profile, State};
use crate::ports::RandomSource;

/// Attempts made to find a profile that is not blocked
pub const MAX_ATTEMPTS: usize = 20;

/// Inclusive age range of generated candidates
pub const AGE_RANGE: (u32, u32) = (18, 34);

const NAMES: [&str; 10] = [
    "Nova", "Orion", "Luna", "Vega", "Mira", "Sirius", "Astra", "Zen", "Kira", "Nox",
];

const AVATARS: [&str; 10] = ["★", "✦", "☾", "☄", "⚡", "✶", "✧", "❖", "✺", "◎"];

const INTERESTS: [&str; 10] = [
    "музыка",
    "спорт",
    "кино",
    "игры",
    "путешествия",
    "еды",
    "мемы",
    "сериалы",
    "техно",
    "книги",
];

const VIBES: [&str; 6] = [
    "спокойный вайб",
    "дерзкий вайб",
    "уютный вайб",
    "ночной вайб",
    "лайтовый вайб",
    "смешной вайб",
];

const QUALIFIERS: [&str; 6] = [
    "без токсика",
    "с юмором",
    "чуть стеснительно",
    "на расслабоне",
    "люблю честность",
    "за взаимный вайб",
];

fn openers(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::Chat => &["пообщаемся?", "ищу собеседника", "давай болтать"],
        Goal::Dating => &["хочу знакомиться", "ищу симпатию", "давай на волну"],
        Goal::Friends => &["ищу друзей", "хочу компанию", "новые знакомства"],
    }
}

/// Fresh random identifier: `p_` + 32 hex digits
pub fn new_profile_id<R: RandomSource>(rng: &mut R) -> String {
    let id = Builder::from_random_bytes(rng.bytes16()).into_uuid();
    format!("p_{}", id.simple())
}

/// Generate one candidate profile
pub fn generate<R: RandomSource>(goal: Goal, rng: &mut R) -> Profile {
    let id = new_profile_id(rng);
    let age = rng.int_in(AGE_RANGE.0, AGE_RANGE.1);
    let name = format!("{}_{}", rng.pick(&NAMES), rng.int_in(1, 99));

    let tags = [
        rng.pick(&INTERESTS).to_string(),
        rng.pick(&INTERESTS).to_string(),
        rng.pick(&VIBES).to_string(),
    ];
    let desc = format!("{}. {}.", rng.pick(openers(goal)), rng.pick(&QUALIFIERS));
    let avatar = rng.pick(&AVATARS).to_string();

    Profile::new(id, name, age, avatar, tags, desc)
}

/// Generate until the id is not blocked, giving up after `max_attempts`.
///
/// When every attempt is blocked the last profile is returned anyway so
/// browsing can always move forward.
pub fn next_unblocked<R: RandomSource>(
    goal: Goal,
    blocked: &BTreeSet<String>,
    rng: &mut R,
    max_attempts: usize,
) -> Profile {
    let mut profile = generate(goal, rng);
    let mut attempts = 1;

    while blocked.contains(&profile.id) && attempts < max_attempts {
        profile = generate(goal, rng);
        attempts += 1;
    }

    if blocked.contains(&profile.id) {
        tracing::warn!(
            "Gave up after {} attempts, showing blocked profile {}",
            attempts,
            profile.id
        );
    }

    profile
}

/// Replace the displayed candidate with a new unblocked one
pub fn advance<R: RandomSource>(state: &mut State, rng: &mut R, max_attempts: usize) {
    let goal = state.me.as_ref().map(|me| me.goal).unwrap_or_default();
    let profile = next_unblocked(goal, &state.blocked, rng, max_attempts);

    tracing::debug!("Next candidate: {} ({})", profile.name, profile.id);

    state.current_profile = Some(profile);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RngSource;
    use crate::testing::ScriptedRandom;

    #[test]
    fn test_generated_fields_in_range() {
        let mut rng = RngSource::seeded(11);
        for _ in 0..200 {
            let p = generate(Goal::Dating, &mut rng);
            assert!(p.id.starts_with("p_"));
            assert_eq!(p.id.len(), 34);
            assert!((18..=34).contains(&p.age));
            assert!(!p.tags.is_empty() && p.tags.len() <= 3);
            assert!(AVATARS.contains(&p.avatar.as_str()));

            let (base, suffix) = p.name.split_once('_').unwrap();
            assert!(NAMES.contains(&base));
            assert!((1..=99).contains(&suffix.parse::<u32>().unwrap()));
        }
    }

    #[test]
    fn test_description_follows_goal() {
        let mut rng = RngSource::seeded(5);
        for goal in Goal::ALL {
            let p = generate(goal, &mut rng);
            assert!(openers(goal).iter().any(|o| p.desc.starts_with(o)));
            assert!(QUALIFIERS.iter().any(|q| p.desc.ends_with(&format!("{}.", q))));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut rng = RngSource::seeded(9);
        let ids: BTreeSet<String> = (0..100)
            .map(|_| generate(Goal::Chat, &mut rng).id)
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_next_unblocked_skips_blocked() {
        // The first id drawn is blocked, the second is not.
        let mut probe = ScriptedRandom::seeded(3);
        let first = generate(Goal::Chat, &mut probe);

        let mut rng = ScriptedRandom::seeded(3);
        let blocked = BTreeSet::from([first.id.clone()]);
        let p = next_unblocked(Goal::Chat, &blocked, &mut rng, MAX_ATTEMPTS);
        assert_ne!(p.id, first.id);
    }

    #[test]
    fn test_next_unblocked_gives_up() {
        let mut rng = ScriptedRandom::seeded(1).with_fixed_bytes([7; 16]);
        let blocked_id = new_profile_id(&mut ScriptedRandom::seeded(1).with_fixed_bytes([7; 16]));
        let blocked = BTreeSet::from([blocked_id.clone()]);

        let p = next_unblocked(Goal::Friends, &blocked, &mut rng, MAX_ATTEMPTS);
        assert_eq!(p.id, blocked_id);
        assert_eq!(rng.bytes_drawn(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_advance_uses_goal_and_blocked_set() {
        let mut state = State::default();
        let mut rng = RngSource::seeded(2);
        advance(&mut state, &mut rng, MAX_ATTEMPTS);
        let p = state.current_profile.as_ref().unwrap();
        assert!(openers(Goal::Chat).iter().any(|o| p.desc.starts_with(o)));
    }
}
