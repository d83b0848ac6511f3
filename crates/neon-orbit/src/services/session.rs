//! Session State Machine
//!
//! Owns the [`State`], the active [`Screen`] and the engines, and exposes the
//! user-facing actions. Each action checks that it applies to the current
//! screen, runs the engines, and saves the state.
//!
//! ```text
//! onboarding ─▶ discover ⇄ match ─▶ chat ─▶ discover
//!                   ▲                 │
//!                   └─────────────────┘   (back / block)
//! settings: from any other screen, closes to discover or onboarding
//! ```

use tokio::time::Instant;

use crate::domain::{
    DomainError, Goal, Message, Profile, SafetyMode, Screen, Sender, State, Theme, UserProfile,
    MIN_AGE,
};
use crate::ports::{KeyValueStore, RandomSource};
use crate::services::chat::{self, ChatEngine, ReplyConfig, ReplyTrigger};
use crate::services::matching::{LikeOutcome, MatchConfig, MatchingEngine};
use crate::services::persistence::StatePersistence;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Energy restored when onboarding completes on an empty tank
    pub starting_energy: u32,
    /// Drop pending replies of a chat when its profile gets blocked
    pub cancel_replies_on_block: bool,
    pub matching: MatchConfig,
    pub replies: ReplyConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_energy: crate::domain::DEFAULT_ENERGY,
            cancel_replies_on_block: false,
            matching: MatchConfig::default(),
            replies: ReplyConfig::default(),
        }
    }
}

/// Read-only snapshot for the view
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub screen: Screen,
    pub me: Option<&'a UserProfile>,
    pub energy: u32,
    pub theme: Theme,
    pub mode: SafetyMode,
    pub current_profile: Option<&'a Profile>,
    pub current_match: Option<&'a Profile>,
    /// Transcript of the active match, empty without one
    pub transcript: &'a [Message],
    /// A reply is pending for the active match's chat
    pub typing: bool,
}

pub struct Session<S: KeyValueStore, R: RandomSource> {
    state: State,
    screen: Screen,
    persistence: StatePersistence<S>,
    rng: R,
    matching: MatchingEngine,
    chat: ChatEngine,
    config: SessionConfig,
}

impl<S: KeyValueStore, R: RandomSource> Session<S, R> {
    /// Load the stored state and pick the starting screen
    pub fn new(store: S, rng: R, config: Option<SessionConfig>) -> Self {
        let config = config.unwrap_or_default();
        let persistence = StatePersistence::new(store);
        let state = persistence.load();

        let mut session = Self {
            state,
            screen: Screen::Onboarding,
            persistence,
            rng,
            matching: MatchingEngine::new(Some(config.matching.clone())),
            chat: ChatEngine::new(Some(config.replies.clone())),
            config,
        };
        session.restore();
        session
    }

    fn restore(&mut self) {
        if self.state.me.is_none() {
            tracing::info!("Starting on onboarding");
            return;
        }

        self.screen = Screen::Discover;
        if self.state.current_profile.is_none() {
            self.matching.advance(&mut self.state, &mut self.rng);
            self.persist();
        }
        tracing::info!("Restored session on discover");
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        self.persistence.store()
    }

    /// Snapshot of everything the view renders
    pub fn view(&self) -> SessionView<'_> {
        let current_match = self.state.current_match.as_ref();
        let (transcript, typing) = match current_match {
            Some(profile) => {
                let chat_id = profile.chat_id();
                (
                    chat::render(&self.state, &chat_id),
                    self.chat.is_pending(&chat_id),
                )
            }
            None => (&[][..], false),
        };

        SessionView {
            screen: self.screen,
            me: self.state.me.as_ref(),
            energy: self.state.energy,
            theme: self.state.theme,
            mode: self.state.mode,
            current_profile: self.state.current_profile.as_ref(),
            current_match,
            transcript,
            typing,
        }
    }

    // ============================================
    // Actions
    // ============================================

    /// Complete onboarding. A blank name gets a generated pilot name and a
    /// missing age counts as the minimum.
    pub fn start_onboarding(
        &mut self,
        name: &str,
        age: Option<i64>,
        goal: Goal,
    ) -> Result<(), DomainError> {
        self.require("start", &[Screen::Onboarding])?;

        let age = age.unwrap_or(MIN_AGE as i64);
        if age < MIN_AGE as i64 {
            return Err(DomainError::Validation(format!("Only {}+.", MIN_AGE)));
        }
        let age = u32::try_from(age)
            .map_err(|_| DomainError::Validation(format!("Age {} is out of range", age)))?;

        let name = match name.trim() {
            "" => format!("Pilot_{}", self.rng.int_in(10, 99)),
            trimmed => trimmed.to_string(),
        };

        tracing::info!("Onboarding complete for {} ({}, {})", name, age, goal);

        self.state.me = Some(UserProfile { name, age, goal });
        if self.state.energy == 0 {
            self.state.set_energy(self.config.starting_energy as i64);
        }
        self.go_to(Screen::Discover);
        self.matching.advance(&mut self.state, &mut self.rng);
        self.persist();
        Ok(())
    }

    /// Show the next candidate
    pub fn skip(&mut self) -> Result<(), DomainError> {
        self.require("skip", &[Screen::Discover])?;
        self.matching.skip(&mut self.state, &mut self.rng);
        self.persist();
        Ok(())
    }

    /// Like the displayed candidate. `OutOfEnergy` leaves everything as is.
    pub fn like(&mut self) -> Result<LikeOutcome, DomainError> {
        self.require("like", &[Screen::Discover])?;

        let outcome = self.matching.like(&mut self.state, &mut self.rng)?;
        match outcome {
            LikeOutcome::OutOfEnergy => {
                tracing::info!("Like rejected: out of energy");
                return Ok(outcome);
            }
            LikeOutcome::Matched => self.go_to(Screen::Match),
            LikeOutcome::NoMatch => {}
        }
        self.persist();
        Ok(outcome)
    }

    /// Open the chat with the active match and schedule a greeting reply
    pub fn open_chat(&mut self) -> Result<(), DomainError> {
        self.require("open_chat", &[Screen::Match])?;
        let chat_id = self.active_chat_id()?;

        self.go_to(Screen::Chat);
        self.chat.simulate_reply(
            &chat_id,
            ReplyTrigger::ChatOpened,
            &mut self.rng,
            Instant::now(),
        );
        self.persist();
        Ok(())
    }

    /// Send a message to the active match. Blank text is ignored.
    pub fn send_message(&mut self, text: &str) -> Result<Option<Message>, DomainError> {
        self.require("send", &[Screen::Chat])?;
        let chat_id = self.active_chat_id()?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let message = chat::send(&mut self.state, &chat_id, Sender::Me, text);
        self.chat.simulate_reply(
            &chat_id,
            ReplyTrigger::UserMessage,
            &mut self.rng,
            Instant::now(),
        );
        self.persist();
        Ok(Some(message))
    }

    /// Leave the match or chat screen and browse on
    pub fn go_back_to_discover(&mut self) -> Result<(), DomainError> {
        self.require("back", &[Screen::Match, Screen::Chat])?;
        self.go_to(Screen::Discover);
        self.matching.advance(&mut self.state, &mut self.rng);
        self.persist();
        Ok(())
    }

    /// Block the active match, delete its chat and return to discover
    pub fn block_current_match(&mut self) -> Result<(), DomainError> {
        self.require("block", &[Screen::Chat])?;
        let profile_id = self
            .state
            .current_match
            .as_ref()
            .map(|p| p.id.clone())
            .ok_or(DomainError::NoActiveMatch)?;

        self.matching
            .block(&mut self.state, &profile_id, &mut self.rng);
        if self.config.cancel_replies_on_block {
            let dropped = self.chat.cancel(&crate::domain::chat_id_for(&profile_id));
            tracing::debug!("Cancelled {} pending replies", dropped);
        }
        self.go_to(Screen::Discover);
        self.persist();
        Ok(())
    }

    pub fn open_settings(&mut self) -> Result<(), DomainError> {
        if self.screen == Screen::Settings {
            return Err(DomainError::invalid_action("open_settings", self.screen));
        }
        self.go_to(Screen::Settings);
        Ok(())
    }

    /// Close settings: discover once a profile exists, onboarding before
    pub fn close_settings(&mut self) -> Result<(), DomainError> {
        self.require("close_settings", &[Screen::Settings])?;

        if self.state.me.is_none() {
            self.go_to(Screen::Onboarding);
            return Ok(());
        }

        self.go_to(Screen::Discover);
        if self.state.current_profile.is_none() {
            self.matching.advance(&mut self.state, &mut self.rng);
            self.persist();
        }
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), DomainError> {
        self.require("set_theme", &[Screen::Settings])?;
        self.state.theme = theme;
        self.persist();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: SafetyMode) -> Result<(), DomainError> {
        self.require("set_mode", &[Screen::Settings])?;
        self.state.mode = mode;
        self.persist();
        Ok(())
    }

    /// Destroy all stored data and pending replies, back to onboarding
    pub fn reset_all(&mut self) {
        if let Err(e) = self.persistence.clear() {
            tracing::warn!("Could not clear stored state: {}", e);
        }
        self.chat.clear();
        self.state = self.persistence.load();
        self.go_to(Screen::Onboarding);
        tracing::info!("Session reset");
    }

    // ============================================
    // Timer-driven replies
    // ============================================

    /// When the next pending reply is due
    pub fn next_reply_due(&self) -> Option<Instant> {
        self.chat.next_due()
    }

    /// Append replies due at `now`. Returns how many landed.
    pub fn deliver_due_replies(&mut self, now: Instant) -> usize {
        let delivered = self.chat.deliver_due(&mut self.state, now);
        if !delivered.is_empty() {
            tracing::debug!("Delivered {} replies", delivered.len());
            self.persist();
        }
        delivered.len()
    }

    /// Wait for the next pending reply and deliver it. `None` when idle.
    pub async fn wait_for_reply(&mut self) -> Option<usize> {
        let due = self.next_reply_due()?;
        tokio::time::sleep_until(due).await;
        Some(self.deliver_due_replies(Instant::now()))
    }

    /// Deliver every pending reply, waiting out the delays
    pub async fn settle(&mut self) -> usize {
        let mut total = 0;
        while let Some(delivered) = self.wait_for_reply().await {
            total += delivered;
        }
        total
    }

    // ============================================
    // Helpers
    // ============================================

    fn require(&self, action: &'static str, allowed: &[Screen]) -> Result<(), DomainError> {
        if allowed.contains(&self.screen) {
            Ok(())
        } else {
            Err(DomainError::invalid_action(action, self.screen))
        }
    }

    fn active_chat_id(&self) -> Result<String, DomainError> {
        self.state
            .current_match
            .as_ref()
            .map(Profile::chat_id)
            .ok_or(DomainError::NoActiveMatch)
    }

    fn go_to(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::info!("Screen {} -> {}", self.screen, screen);
            self.screen = screen;
        }
    }

    /// Save after a mutation. Write failures are logged, never fatal.
    fn persist(&mut self) {
        if let Err(e) = self.persistence.save(&self.state) {
            tracing::warn!("Failed to save state: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryStore, RngSource};
    use crate::domain::{chat_id_for, DEFAULT_ENERGY};
    use crate::services::matching::MATCH_GREETING;
    use crate::services::persistence::STATE_KEY;
    use crate::testing::ScriptedRandom;
    use std::time::Duration;

    type TestSession = Session<MemoryStore, ScriptedRandom>;

    fn session(seed: u64, force_match: bool) -> TestSession {
        let rng = ScriptedRandom::seeded(seed).with_forced_chance(force_match);
        Session::new(MemoryStore::new(), rng, None)
    }

    fn onboarded(seed: u64, force_match: bool) -> TestSession {
        let mut session = session(seed, force_match);
        session
            .start_onboarding("Ava", Some(20), Goal::Dating)
            .unwrap();
        session
    }

    /// Onboard, match and open the chat
    fn in_chat(seed: u64, config: Option<SessionConfig>) -> TestSession {
        let rng = ScriptedRandom::seeded(seed).with_forced_chance(true);
        let mut session = Session::new(MemoryStore::new(), rng, config);
        session.start_onboarding("Ava", Some(20), Goal::Chat).unwrap();
        assert_eq!(session.like().unwrap(), LikeOutcome::Matched);
        session.open_chat().unwrap();
        session
    }

    /// What a fresh load of the store would see
    fn stored(session: &TestSession) -> State {
        StatePersistence::new(session.store().clone()).load()
    }

    #[test]
    fn test_fresh_session_starts_on_onboarding() {
        let session = session(1, false);
        assert_eq!(session.screen(), Screen::Onboarding);
        assert!(session.view().current_profile.is_none());
    }

    #[test]
    fn test_onboarding_scenario() {
        let session = onboarded(1, false);
        let view = session.view();

        assert_eq!(view.screen, Screen::Discover);
        assert!(view.current_profile.is_some());
        assert_eq!(view.energy, 10);
        assert_eq!(view.me.unwrap().name, "Ava");
        assert_eq!(view.me.unwrap().goal, Goal::Dating);
        assert!(session.store().get(STATE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_underage_onboarding_is_rejected() {
        let mut session = session(1, false);
        let result = session.start_onboarding("Kid", Some(17), Goal::Chat);

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(session.screen(), Screen::Onboarding);
        assert!(session.state().me.is_none());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_blank_name_and_missing_age_default() {
        let mut session = session(2, false);
        session.start_onboarding("   ", None, Goal::Friends).unwrap();

        let me = session.state().me.clone().unwrap();
        assert!(me.name.starts_with("Pilot_"));
        let suffix: u32 = me.name["Pilot_".len()..].parse().unwrap();
        assert!((10..=99).contains(&suffix));
        assert_eq!(me.age, MIN_AGE);
    }

    #[test]
    fn test_onboarding_refills_empty_tank() {
        let mut store = MemoryStore::new();
        store.set(STATE_KEY, r#"{"energy":0}"#).unwrap();
        let mut session = Session::new(store, ScriptedRandom::seeded(3), None);

        session.start_onboarding("Ava", Some(30), Goal::Chat).unwrap();
        assert_eq!(session.state().energy, DEFAULT_ENERGY);
    }

    #[test]
    fn test_actions_outside_their_screen_are_rejected() {
        let mut session = session(4, false);
        assert_eq!(
            session.like(),
            Err(DomainError::invalid_action("like", Screen::Onboarding))
        );
        assert!(session.skip().is_err());
        assert!(session.set_theme(Theme::Mono).is_err());

        let mut session = onboarded(4, false);
        assert!(session.open_chat().is_err());
        assert!(session.send_message("hi").is_err());
        assert!(session.go_back_to_discover().is_err());
        assert!(session.start_onboarding("Again", Some(40), Goal::Chat).is_err());
        assert_eq!(session.screen(), Screen::Discover);
    }

    #[test]
    fn test_skip_keeps_discover_and_energy() {
        let mut session = onboarded(5, false);
        let shown = session.view().current_profile.unwrap().id.clone();

        session.skip().unwrap();
        assert_eq!(session.screen(), Screen::Discover);
        assert_eq!(session.state().energy, 10);
        assert_ne!(session.view().current_profile.unwrap().id, shown);
    }

    #[test]
    fn test_like_without_match_stays_on_discover() {
        let mut session = onboarded(6, false);
        assert_eq!(session.like().unwrap(), LikeOutcome::NoMatch);
        assert_eq!(session.screen(), Screen::Discover);
        assert_eq!(session.state().energy, 9);
    }

    #[test]
    fn test_like_out_of_energy_is_a_notice() {
        let mut session = onboarded(7, false);
        for _ in 0..10 {
            session.like().unwrap();
        }
        let before = session.state().clone();
        let saved = session.store().get(STATE_KEY).unwrap();

        assert_eq!(session.like().unwrap(), LikeOutcome::OutOfEnergy);
        assert_eq!(session.state(), &before);
        assert_eq!(session.store().get(STATE_KEY).unwrap(), saved);
        assert_eq!(session.screen(), Screen::Discover);
    }

    #[test]
    fn test_match_then_continue_browsing() {
        let mut session = onboarded(8, true);
        let liked = session.view().current_profile.unwrap().clone();

        assert_eq!(session.like().unwrap(), LikeOutcome::Matched);
        assert_eq!(session.screen(), Screen::Match);
        assert_eq!(session.view().current_match, Some(&liked));
        assert_eq!(session.view().transcript[0].text, MATCH_GREETING);

        session.go_back_to_discover().unwrap();
        assert_eq!(session.screen(), Screen::Discover);
        assert_ne!(session.view().current_profile.unwrap().id, liked.id);
    }

    #[test]
    fn test_open_chat_schedules_one_short_reply() {
        let before = Instant::now();
        let mut session = in_chat(9, None);
        let after = Instant::now();

        assert_eq!(session.screen(), Screen::Chat);
        assert!(session.view().typing);
        assert_eq!(session.view().transcript.len(), 1);

        assert_eq!(
            session.deliver_due_replies(before + Duration::from_millis(299)),
            0
        );
        assert_eq!(
            session.deliver_due_replies(after + Duration::from_millis(900)),
            1
        );

        let view = session.view();
        assert!(!view.typing);
        assert_eq!(view.transcript.len(), 2);
        assert!(view.transcript.iter().all(|m| m.from == Sender::Them));
    }

    #[test]
    fn test_send_hello_is_stored_verbatim_and_answered() {
        let mut session = in_chat(10, None);
        session.deliver_due_replies(Instant::now() + Duration::from_secs(1));

        let sent = session.send_message("  hello ").unwrap().unwrap();
        assert_eq!(sent.text, "hello");
        assert_eq!(sent.from, Sender::Me);

        assert_eq!(
            session.deliver_due_replies(Instant::now() + Duration::from_millis(1600)),
            1
        );
        let transcript = session.view().transcript;
        assert_eq!(transcript[transcript.len() - 2].text, "hello");
        assert_eq!(transcript[transcript.len() - 1].from, Sender::Them);
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let mut session = in_chat(11, None);
        let len = session.view().transcript.len();
        assert_eq!(session.send_message("   ").unwrap(), None);
        assert_eq!(session.view().transcript.len(), len);
    }

    #[test]
    fn test_send_redacts_in_safe_mode() {
        let mut session = in_chat(12, None);
        let sent = session.send_message("не убей меня").unwrap().unwrap();
        assert_eq!(sent.text, "не •••• меня");
    }

    #[test]
    fn test_block_current_match() {
        let mut session = in_chat(13, None);
        let matched = session.state().current_match.clone().unwrap();

        session.block_current_match().unwrap();

        let state = session.state();
        assert_eq!(session.screen(), Screen::Discover);
        assert!(state.is_blocked(&matched.id));
        assert!(!state.chats.contains_key(&matched.chat_id()));
        assert!(state.current_match.is_none());
        assert_ne!(state.current_profile.as_ref().unwrap().id, matched.id);
    }

    #[test]
    fn test_reply_after_block_still_lands() {
        let mut session = in_chat(14, None);
        let matched = session.state().current_match.clone().unwrap();
        session.block_current_match().unwrap();

        session.deliver_due_replies(Instant::now() + Duration::from_secs(1));
        assert_eq!(session.state().transcript(&matched.chat_id()).len(), 1);
    }

    #[test]
    fn test_reply_after_block_cancelled_when_configured() {
        let config = SessionConfig {
            cancel_replies_on_block: true,
            ..SessionConfig::default()
        };
        let mut session = in_chat(15, Some(config));
        let matched = session.state().current_match.clone().unwrap();
        session.block_current_match().unwrap();

        assert!(session.next_reply_due().is_none());
        session.deliver_due_replies(Instant::now() + Duration::from_secs(1));
        assert!(!session.state().chats.contains_key(&chat_id_for(&matched.id)));
    }

    #[test]
    fn test_back_from_chat_advances_candidate() {
        let mut session = in_chat(16, None);
        let matched = session.state().current_match.clone().unwrap();

        session.go_back_to_discover().unwrap();
        assert_eq!(session.screen(), Screen::Discover);
        assert_ne!(session.view().current_profile.unwrap().id, matched.id);
        // The match and its chat are kept.
        assert!(session.state().chats.contains_key(&matched.chat_id()));
    }

    #[test]
    fn test_settings_round_trip() {
        let mut session = session(17, false);
        session.open_settings().unwrap();
        session.set_theme(Theme::Sunset).unwrap();
        session.set_mode(SafetyMode::Open).unwrap();
        assert!(session.open_settings().is_err());
        session.close_settings().unwrap();
        assert_eq!(session.screen(), Screen::Onboarding);

        session.start_onboarding("Ava", Some(20), Goal::Chat).unwrap();
        session.open_settings().unwrap();
        session.close_settings().unwrap();
        assert_eq!(session.screen(), Screen::Discover);

        let view = session.view();
        assert_eq!(view.theme, Theme::Sunset);
        assert_eq!(view.mode, SafetyMode::Open);
    }

    #[test]
    fn test_settings_from_chat_closes_to_discover() {
        let mut session = in_chat(18, None);
        session.open_settings().unwrap();
        session.close_settings().unwrap();
        assert_eq!(session.screen(), Screen::Discover);
    }

    #[test]
    fn test_settings_are_saved_immediately() {
        let mut session = onboarded(23, false);
        session.open_settings().unwrap();

        session.set_mode(SafetyMode::Open).unwrap();
        let raw = session.store().get(STATE_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""mode":"open""#));
        assert_eq!(stored(&session).mode, SafetyMode::Open);

        session.set_theme(Theme::Mono).unwrap();
        assert_eq!(stored(&session).theme, Theme::Mono);
        assert_eq!(&stored(&session), session.state());
    }

    #[test]
    fn test_browsing_is_saved() {
        let mut session = onboarded(24, false);

        session.skip().unwrap();
        assert_eq!(&stored(&session), session.state());

        session.like().unwrap();
        let saved = stored(&session);
        assert_eq!(saved.energy, DEFAULT_ENERGY - 1);
        assert_eq!(&saved, session.state());
    }

    #[test]
    fn test_chat_and_block_are_saved() {
        let mut session = in_chat(25, None);
        session.send_message("hello").unwrap();
        assert_eq!(&stored(&session), session.state());

        assert_eq!(
            session.deliver_due_replies(Instant::now() + Duration::from_secs(2)),
            2
        );
        let saved = stored(&session);
        let chat_id = session.state().current_match.as_ref().unwrap().chat_id();
        assert_eq!(saved.transcript(&chat_id).len(), 4);
        assert_eq!(&saved, session.state());

        session.block_current_match().unwrap();
        let saved = stored(&session);
        assert!(saved.current_match.is_none());
        assert!(!saved.chats.contains_key(&chat_id));
        assert_eq!(&saved, session.state());
    }

    #[test]
    fn test_reset_all() {
        let mut session = in_chat(19, None);
        session.reset_all();

        assert_eq!(session.screen(), Screen::Onboarding);
        assert_eq!(session.state(), &State::default());
        assert!(session.store().is_empty());
        assert!(session.next_reply_due().is_none());
    }

    #[test]
    fn test_restore_from_store() {
        let mut first = onboarded(20, false);
        first.skip().unwrap();
        let shown = first.state().current_profile.clone();
        let store = first.persistence.into_inner();

        let restored = Session::new(store, RngSource::seeded(99), None);
        assert_eq!(restored.screen(), Screen::Discover);
        assert_eq!(restored.state().current_profile, shown);
        assert_eq!(restored.state().me.as_ref().unwrap().name, "Ava");
    }

    #[test]
    fn test_restore_generates_missing_candidate() {
        let mut store = MemoryStore::new();
        store
            .set(STATE_KEY, r#"{"me":{"name":"Ava","age":20,"goal":"chat"}}"#)
            .unwrap();

        let restored = Session::new(store, RngSource::seeded(21), None);
        assert_eq!(restored.screen(), Screen::Discover);
        assert!(restored.state().current_profile.is_some());
        assert_eq!(
            StatePersistence::new(restored.store().clone()).load().current_profile,
            restored.state().current_profile
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_waits_for_replies() {
        let mut session = in_chat(22, None);
        session.send_message("hello").unwrap();

        assert_eq!(session.settle().await, 2);
        assert!(session.next_reply_due().is_none());
        assert_eq!(session.view().transcript.len(), 4);
    }
}
