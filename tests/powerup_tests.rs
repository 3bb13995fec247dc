//! Power-up integration tests.
//!
//! Duration, cooldown, and effect capture, driven through the session with
//! a manual clock.

use flipcore::core::ManualClock;
use flipcore::{
    Activation, Catalog, EngineConfig, FlipRequest, FlipRng, GameSession, Notification,
    PowerUpKind,
};

fn session_at(seed: u64) -> (GameSession<ManualClock>, ManualClock) {
    let clock = ManualClock::new(0);
    let session = GameSession::with_parts(
        EngineConfig::default(),
        Catalog::standard(),
        clock.clone(),
        FlipRng::new(seed),
    );
    (session, clock)
}

fn flip_once(session: &mut GameSession<ManualClock>, clock: &ManualClock) {
    match session.request_flip() {
        FlipRequest::Started { duration_ms } => {
            clock.advance(duration_ms);
            session.tick();
        }
        FlipRequest::InProgress => panic!("flip unexpectedly in flight"),
    }
}

#[test]
fn test_activation_toast_and_sound() {
    let (mut session, _clock) = session_at(42);
    session.drain_notifications();

    assert_eq!(
        session.activate_power_up(PowerUpKind::LuckyStreak),
        Activation::Activated
    );

    let notifications = session.drain_notifications();
    assert!(notifications.iter().any(Notification::is_audio));
    assert!(notifications.iter().any(|n| matches!(
        n,
        Notification::Toast { title, .. } if title.contains("Lucky Streak")
    )));
}

#[test]
fn test_each_power_up_has_independent_cooldown() {
    let (mut session, _clock) = session_at(42);

    // Activating one power-up never blocks the others
    assert_eq!(
        session.activate_power_up(PowerUpKind::DoubleFlip),
        Activation::Activated
    );
    assert_eq!(
        session.activate_power_up(PowerUpKind::LuckyStreak),
        Activation::Activated
    );
    assert_eq!(
        session.activate_power_up(PowerUpKind::TimeWarp),
        Activation::Activated
    );
}

#[test]
fn test_expiry_happens_on_tick() {
    let (mut session, clock) = session_at(42);

    session.activate_power_up(PowerUpKind::TimeWarp);
    assert!(session.power_up_active(PowerUpKind::TimeWarp));

    // Duration is 15s; the active query is clock-accurate even before
    // the expiry event has ticked
    clock.advance(15_000);
    assert!(!session.power_up_active(PowerUpKind::TimeWarp));
    assert!(session.power_up_state(PowerUpKind::TimeWarp).active);

    session.tick();
    assert!(!session.power_up_state(PowerUpKind::TimeWarp).active);
}

#[test]
fn test_double_flip_stacks_with_time_warp() {
    let (mut session, clock) = session_at(42);

    session.activate_power_up(PowerUpKind::DoubleFlip);
    session.activate_power_up(PowerUpKind::TimeWarp);

    assert_eq!(
        session.request_flip(),
        FlipRequest::Started { duration_ms: 375 }
    );
    clock.advance(375);
    session.tick();

    // One halved animation, two recorded outcomes
    assert_eq!(session.stats().total_flips(), 2);
    assert!((session.stats().total_flip_seconds() - 0.375).abs() < 1e-9);
}

#[test]
fn test_double_flip_outcomes_flow_through_streak_logic() {
    let clock = ManualClock::new(0);
    // Full bias: with lucky active, the double flip's second draw repeats
    // the first draw's outcome
    let config = EngineConfig::default().with_lucky_bias(1.0);
    let mut session = GameSession::with_parts(
        config,
        Catalog::standard(),
        clock.clone(),
        FlipRng::new(42),
    );

    flip_once(&mut session, &clock);
    let first = session.stats().last_outcome().unwrap();

    session.activate_power_up(PowerUpKind::DoubleFlip);
    session.activate_power_up(PowerUpKind::LuckyStreak);
    flip_once(&mut session, &clock);

    assert_eq!(session.stats().total_flips(), 3);
    assert_eq!(session.stats().last_outcome(), Some(first));
    assert_eq!(session.stats().current_streak(), 3);
}

#[test]
fn test_cooldown_survives_expiry() {
    let (mut session, clock) = session_at(42);

    session.activate_power_up(PowerUpKind::LuckyStreak);

    // Effect lapses at 20s; cooldown runs to 90s from activation
    clock.advance(20_000);
    session.tick();
    assert_eq!(
        session.activate_power_up(PowerUpKind::LuckyStreak),
        Activation::OnCooldown
    );

    clock.advance(69_999);
    session.tick();
    assert_eq!(
        session.activate_power_up(PowerUpKind::LuckyStreak),
        Activation::OnCooldown
    );

    clock.advance(1);
    session.tick();
    assert_eq!(
        session.activate_power_up(PowerUpKind::LuckyStreak),
        Activation::Activated
    );
}
