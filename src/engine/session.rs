//! The game session facade.
//!
//! [`GameSession`] owns every piece of per-session state and exposes the
//! handful of entry points the presentation layer calls: request a flip,
//! tick the clock forward, activate a power-up, select a style, drain
//! notifications. All mutation flows through these methods; views read
//! snapshots via the accessor methods and never hold references into the
//! session across a mutation.
//!
//! ## Time
//!
//! Nothing blocks. A flip request schedules its resolution on the internal
//! queue and returns immediately; [`tick`](GameSession::tick) drains
//! whatever has come due. The host drives `tick` from its own loop (a
//! frame callback, an interval timer) and the session stays correct no
//! matter how late a tick arrives.
//!
//! ## Determinism
//!
//! A session built with [`with_seed`](GameSession::with_seed) and a
//! [`ManualClock`](crate::core::ManualClock) replays the identical
//! outcome sequence, which is how the scenario tests pin exact flip
//! sequences without stubbing the RNG.

use rustc_hash::FxHashMap;

use crate::catalog::{
    AchievementId, AchievementState, Catalog, ChallengeKind, ChallengeState, CoinStyleId,
    PowerUpKind, PowerUpState,
};
use crate::core::{
    Clock, EngineConfig, FlipOutcome, FlipRng, SessionStats, SystemClock, Timestamp,
};
use crate::events::{DanceKind, Notification, SoundCue};

use super::achievements::{self, MetricSnapshot};
use super::challenges::{self, FlipRecord};
use super::combo::ComboMeter;
use super::scheduler::{Deferred, Scheduler};

/// Result of a flip request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipRequest {
    /// The flip started and will resolve after `duration_ms`.
    Started { duration_ms: u64 },
    /// A flip is already in flight; the request was ignored.
    InProgress,
}

/// Result of a power-up activation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The power-up is now active.
    Activated,
    /// The effect is still live; ignored.
    AlreadyActive,
    /// The cooldown has not elapsed; ignored.
    OnCooldown,
    /// No such power-up in the catalog.
    Unknown,
}

/// Result of a coin style selection attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleSelection {
    /// The style is now selected.
    Selected,
    /// The style exists but its unlock threshold has not been reached.
    Locked,
    /// No such style in the catalog.
    UnknownStyle,
}

/// All per-session state behind the coin-flip widget.
#[derive(Clone, Debug)]
pub struct GameSession<C: Clock = SystemClock> {
    config: EngineConfig,
    catalog: Catalog,
    clock: C,
    rng: FlipRng,
    stats: SessionStats,
    achievements: FxHashMap<AchievementId, AchievementState>,
    power_ups: FxHashMap<PowerUpKind, PowerUpState>,
    challenges: FxHashMap<ChallengeKind, ChallengeState>,
    selected_style: CoinStyleId,
    sound_enabled: bool,
    flip_in_progress: bool,
    scheduler: Scheduler,
    combo: ComboMeter,
    history: im::Vector<FlipRecord>,
    notifications: Vec<Notification>,
    next_upkeep_at: Timestamp,
}

impl GameSession<SystemClock> {
    /// A live session: wall clock, entropy-seeded RNG, standard catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            EngineConfig::default(),
            Catalog::standard(),
            SystemClock,
            FlipRng::from_entropy(),
        )
    }

    /// A live session with a fixed RNG seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_parts(
            EngineConfig::default(),
            Catalog::standard(),
            SystemClock,
            FlipRng::new(seed),
        )
    }
}

impl Default for GameSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> GameSession<C> {
    /// Assemble a session from explicit parts.
    ///
    /// This is the constructor tests use, pairing a
    /// [`ManualClock`](crate::core::ManualClock) with a seeded RNG.
    #[must_use]
    pub fn with_parts(config: EngineConfig, catalog: Catalog, clock: C, rng: FlipRng) -> Self {
        let now = clock.now();
        let lifetime = config.challenge_lifetime_ms;

        let achievements = catalog
            .achievements
            .iter()
            .map(|def| (def.id, AchievementState::default()))
            .collect();
        let power_ups = catalog
            .power_ups
            .iter()
            .map(|def| (def.kind, PowerUpState::default()))
            .collect();
        let challenges = catalog
            .challenges
            .iter()
            .map(|def| (def.kind, ChallengeState::new(now, lifetime)))
            .collect();

        let next_upkeep_at = now.plus_millis(config.upkeep_interval_ms);

        Self {
            config,
            catalog,
            clock,
            rng,
            stats: SessionStats::new(),
            achievements,
            power_ups,
            challenges,
            selected_style: crate::catalog::style::CLASSIC,
            sound_enabled: true,
            flip_in_progress: false,
            scheduler: Scheduler::new(),
            combo: ComboMeter::new(),
            history: im::Vector::new(),
            notifications: Vec::new(),
            next_upkeep_at,
        }
    }

    // ------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------

    /// Request a flip.
    ///
    /// Ignored while a flip is in flight. Otherwise the power-up effects
    /// that apply are captured now, the combo meter updates, and the
    /// resolution is queued for one flip-duration later.
    pub fn request_flip(&mut self) -> FlipRequest {
        if self.flip_in_progress {
            return FlipRequest::InProgress;
        }

        let now = self.clock.now();
        let double = self.power_up_active(PowerUpKind::DoubleFlip);
        let lucky = self.power_up_active(PowerUpKind::LuckyStreak);
        let time_warp = self.power_up_active(PowerUpKind::TimeWarp);
        let duration_ms = self.config.flip_duration_for(time_warp);

        self.combo
            .on_flip_started(now, self.config.combo_window_ms, self.config.combo_cap);
        self.flip_in_progress = true;
        self.scheduler.schedule(
            now.plus_millis(duration_ms),
            Deferred::ResolveFlip {
                started_at: now,
                duration_ms,
                double,
                lucky,
            },
        );

        self.push_audio(SoundCue::FlipStart);
        self.push_audio(SoundCue::Spinning);

        FlipRequest::Started { duration_ms }
    }

    /// Advance the session to the clock's current time.
    ///
    /// Fires every deferred event that has come due (flip resolutions,
    /// power-up expiries) and, once per upkeep interval, resets expired
    /// challenges. Safe to call at any frequency; a late tick fires
    /// everything that accumulated.
    pub fn tick(&mut self) {
        let now = self.clock.now();

        for event in self.scheduler.due(now) {
            match event {
                Deferred::ResolveFlip {
                    started_at,
                    duration_ms,
                    double,
                    lucky,
                } => self.resolve_flip(started_at, duration_ms, double, lucky),
                Deferred::ExpirePowerUp(kind) => {
                    if let Some(state) = self.power_ups.get_mut(&kind) {
                        state.expire();
                    }
                }
            }
        }

        if now >= self.next_upkeep_at {
            self.run_upkeep(now);
            self.next_upkeep_at = now.plus_millis(self.config.upkeep_interval_ms);
        }
    }

    /// Attempt to activate a power-up.
    pub fn activate_power_up(&mut self, kind: PowerUpKind) -> Activation {
        let now = self.clock.now();
        let Some(def) = self.catalog.power_up(kind) else {
            return Activation::Unknown;
        };
        let (duration_ms, cooldown_ms) = (def.duration_ms, def.cooldown_ms);
        let toast = Notification::toast_with(
            format!("{} {} Activated!", def.icon, def.name),
            def.description.clone(),
        );

        let state = self.power_ups.entry(kind).or_default();
        if state.active {
            return Activation::AlreadyActive;
        }
        if !state.can_activate(now, cooldown_ms) {
            return Activation::OnCooldown;
        }

        state.activate(now);
        self.scheduler
            .schedule(now.plus_millis(duration_ms), Deferred::ExpirePowerUp(kind));
        self.push_audio(SoundCue::Achievement);
        self.notifications.push(toast);

        Activation::Activated
    }

    /// Attempt to select a coin style.
    pub fn select_coin_style(&mut self, id: CoinStyleId) -> StyleSelection {
        let Some(def) = self.catalog.styles.get(id) else {
            return StyleSelection::UnknownStyle;
        };
        if !def.is_unlocked(self.stats.total_flips()) {
            return StyleSelection::Locked;
        }
        self.selected_style = id;
        StyleSelection::Selected
    }

    /// Toggle audio notifications.
    ///
    /// While disabled, no [`Notification::Audio`] events are emitted at
    /// all; visual notifications are unaffected.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Remove and return all queued notifications, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn resolve_flip(&mut self, started_at: Timestamp, duration_ms: u64, double: bool, lucky: bool) {
        self.flip_in_progress = false;
        let resolved_at = started_at.plus_millis(duration_ms);
        let draws = if double { 2 } else { 1 };

        for _ in 0..draws {
            // A lucky draw is biased toward repeating the previous outcome,
            // so in a double flip the second draw sees the first.
            let outcome = match (lucky, self.stats.last_outcome()) {
                (true, Some(last)) => self.rng.draw_biased(last, self.config.lucky_bias),
                _ => self.rng.draw_fair(),
            };
            self.stats.record(outcome);
            self.history.push_back(FlipRecord {
                outcome,
                resolved_at,
            });
            self.emit_result(outcome);
        }

        // One animation regardless of how many outcomes it produced
        self.stats.add_flip_duration(duration_ms as f64 / 1_000.0);

        self.update_challenges(resolved_at);
        self.evaluate_achievements();
    }

    fn emit_result(&mut self, outcome: FlipOutcome) {
        let streak = self.stats.current_streak();

        self.push_audio(SoundCue::for_outcome(outcome));

        if streak >= self.config.particle_streak {
            self.notifications
                .push(Notification::ParticleBurst { streak, outcome });
        }
        if streak >= self.config.celebration_streak {
            self.notifications
                .push(Notification::Confetti { streak, outcome });
            self.notifications.push(Notification::Dance {
                kind: DanceKind::for_outcome(outcome),
            });
            self.push_audio(SoundCue::Streak);
        }

        let title = match outcome {
            FlipOutcome::Heads => "HEADS!",
            FlipOutcome::Tails => "TAILS!",
        };
        if streak > 1 {
            self.notifications.push(Notification::toast_with(
                title,
                format!("{streak}x Streak! \u{1f525}"),
            ));
        } else {
            self.notifications.push(Notification::toast(title));
        }
    }

    fn update_challenges(&mut self, now: Timestamp) {
        let mut completed: Vec<(String, String)> = Vec::new();

        for def in &self.catalog.challenges {
            let Some(state) = self.challenges.get_mut(&def.kind) else {
                continue;
            };
            let result = challenges::evaluate(
                def.kind,
                &self.history,
                now,
                state.period_start,
                self.config.speed_window_ms,
                self.config.balance_window,
                def.target,
            );
            if state.update(result.progress, result.complete, def.target) {
                completed.push((def.name.clone(), def.reward.clone()));
            }
        }

        for (name, reward) in completed {
            self.notifications.push(Notification::toast_with(
                format!("\u{1f3af} Challenge Complete: {name}"),
                reward,
            ));
            self.push_audio(SoundCue::Achievement);
        }
    }

    fn evaluate_achievements(&mut self) {
        let snap = MetricSnapshot {
            total_flips: self.stats.total_flips(),
            current_streak: self.stats.current_streak(),
            alternations: self.stats.alternations(),
            total_flip_secs: self.stats.total_flip_seconds(),
            styles_unlocked: self.catalog.styles.unlocked_count(self.stats.total_flips()),
            speed_window_secs: self.config.speed_window_ms as f64 / 1_000.0,
        };

        let unlocked =
            achievements::evaluate(&self.catalog.achievements, &mut self.achievements, &snap);

        let details: Vec<_> = unlocked
            .iter()
            .filter_map(|id| self.catalog.achievement(*id))
            .map(|def| (def.id, def.name.clone(), def.description.clone()))
            .collect();
        for (id, name, description) in details {
            self.notifications.push(Notification::AchievementUnlocked {
                id,
                name,
                description,
            });
            self.push_audio(SoundCue::Achievement);
        }
    }

    fn run_upkeep(&mut self, now: Timestamp) {
        for state in self.challenges.values_mut() {
            if state.expired(now) {
                state.reset(now, self.config.challenge_lifetime_ms);
            }
        }
    }

    fn push_audio(&mut self, cue: SoundCue) {
        if self.sound_enabled {
            self.notifications.push(Notification::Audio(cue));
        }
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The static catalog this session was seeded with.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Session statistics.
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Resolved flips, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<FlipRecord> {
        &self.history
    }

    /// The RNG seed, for session replay.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether a flip is currently in flight.
    #[must_use]
    pub fn flip_in_progress(&self) -> bool {
        self.flip_in_progress
    }

    /// The current combo multiplier.
    #[must_use]
    pub fn combo_multiplier(&self) -> u32 {
        self.combo.multiplier()
    }

    /// The selected coin style.
    #[must_use]
    pub fn selected_style(&self) -> CoinStyleId {
        self.selected_style
    }

    /// Whether audio notifications are enabled.
    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Progress for one achievement.
    #[must_use]
    pub fn achievement_state(&self, id: AchievementId) -> AchievementState {
        self.achievements.get(&id).copied().unwrap_or_default()
    }

    /// Activation state for one power-up.
    #[must_use]
    pub fn power_up_state(&self, kind: PowerUpKind) -> PowerUpState {
        self.power_ups.get(&kind).copied().unwrap_or_default()
    }

    /// Period state for one challenge, if it exists in the catalog.
    #[must_use]
    pub fn challenge_state(&self, kind: ChallengeKind) -> Option<ChallengeState> {
        self.challenges.get(&kind).copied()
    }

    /// Whether a power-up's effect is live right now.
    ///
    /// Checks the definition's duration against the clock as well as the
    /// active flag, so the answer is correct even between ticks.
    #[must_use]
    pub fn power_up_active(&self, kind: PowerUpKind) -> bool {
        let Some(state) = self.power_ups.get(&kind) else {
            return false;
        };
        if !state.active {
            return false;
        }
        match (state.last_activated_at, self.catalog.power_up(kind)) {
            (Some(at), Some(def)) => self.clock.now().millis_since(at) < def.duration_ms,
            _ => false,
        }
    }

    /// Whether a style's unlock threshold has been reached.
    #[must_use]
    pub fn style_unlocked(&self, id: CoinStyleId) -> bool {
        self.catalog
            .styles
            .get(id)
            .is_some_and(|def| def.is_unlocked(self.stats.total_flips()))
    }
}
