//! End-to-end match session tests using the presets.
//!
//! These tests run whole matches through `MatchSession::tick`:
//! - Deterministic replay from seed plus input trace
//! - Turn alternation on picks and timeouts
//! - Round clock expiry, result evaluation, and post-expiry freezing
//! - The weather clear policy at the session level

use conveyor_draft::core::PlayerId;
use conveyor_draft::lanes::{WeatherClearPolicy, WeatherFlags};
use conveyor_draft::presets::{battlefield, color_rush, forces};
use conveyor_draft::session::{InputEvent, MatchResult, MatchSession, Snapshot};

const FRAME: f32 = 1.0 / 60.0;

/// Run a session with a scripted input trace: pick on every Nth tick,
/// alternating the picking player with the active player.
fn run_scripted(mut session: MatchSession, ticks: usize, pick_every: usize) -> Snapshot {
    let mut last = session.snapshot(false);
    for i in 0..ticks {
        let events = if i % pick_every == 0 {
            vec![InputEvent::Pick(session.active_player())]
        } else {
            vec![]
        };
        last = session.tick(FRAME, &events);
    }
    last
}

// =============================================================================
// Determinism
// =============================================================================

/// Same catalog, config, seed, and input trace: identical snapshots.
#[test]
fn test_replay_determinism() {
    let (catalog_a, config_a) = battlefield();
    let (catalog_b, config_b) = battlefield();

    let a = run_scripted(MatchSession::new(catalog_a, config_a, 2024).unwrap(), 600, 45);
    let b = run_scripted(MatchSession::new(catalog_b, config_b, 2024).unwrap(), 600, 45);

    let json_a = serde_json::to_string(&a).unwrap();
    let json_b = serde_json::to_string(&b).unwrap();
    assert_eq!(json_a, json_b);
}

/// Different seeds draft different queues.
#[test]
fn test_seed_changes_draft() {
    let (catalog_a, config_a) = battlefield();
    let (catalog_b, config_b) = battlefield();

    let a = MatchSession::new(catalog_a, config_a, 1).unwrap().snapshot(false);
    let b = MatchSession::new(catalog_b, config_b, 2).unwrap().snapshot(false);

    let ids_a: Vec<_> = a.queue.iter().map(|s| s.item).collect();
    let ids_b: Vec<_> = b.queue.iter().map(|s| s.item).collect();
    assert_ne!(ids_a, ids_b);
}

// =============================================================================
// Turn Flow
// =============================================================================

/// With no input, turns alternate on the timeout alone.
#[test]
fn test_timeout_alternation() {
    let (catalog, config) = color_rush();
    let mut session = MatchSession::new(catalog, config, 5).unwrap();

    assert_eq!(session.active_player(), PlayerId::ONE);

    // 6 s turn limit: run just past it with no events
    let ticks = (6.5 / FRAME) as usize;
    for _ in 0..ticks {
        session.tick(FRAME, &[]);
    }
    assert_eq!(session.active_player(), PlayerId::TWO);

    for _ in 0..ticks {
        session.tick(FRAME, &[]);
    }
    assert_eq!(session.active_player(), PlayerId::ONE);
}

/// A pick switches the turn immediately; the timer starts over for
/// the opponent.
#[test]
fn test_pick_switches_turn() {
    let (catalog, config) = color_rush();
    let mut session = MatchSession::new(catalog, config, 5).unwrap();

    let snapshot = session.tick(FRAME, &[InputEvent::Pick(PlayerId::ONE)]);
    assert_eq!(snapshot.turn.active, PlayerId::TWO);
    assert!(snapshot.last_resolution.is_some());

    // A pick from the now-inactive P1 does nothing
    let snapshot = session.tick(FRAME, &[InputEvent::Pick(PlayerId::ONE)]);
    assert_eq!(snapshot.turn.active, PlayerId::TWO);
}

/// Scripted picks keep the queue at capacity for the whole match.
#[test]
fn test_queue_capacity_through_match() {
    let (catalog, config) = color_rush();
    let session = MatchSession::new(catalog, config, 11).unwrap();

    let last = run_scripted(session, 2000, 30);
    assert_eq!(last.queue.len(), 48);
}

// =============================================================================
// Match End
// =============================================================================

/// The match ends when the round clock runs out, and the result
/// matches the terminal totals.
#[test]
fn test_match_ends_with_result() {
    let (catalog, config) = color_rush();
    let config = config.with_match_duration(10.0);
    let mut session = MatchSession::new(catalog, config, 77).unwrap();

    let mut last = session.snapshot(false);
    let ticks = (11.0 / FRAME) as usize;
    for i in 0..ticks {
        let events = if i % 40 == 0 {
            vec![InputEvent::Pick(session.active_player())]
        } else {
            vec![]
        };
        last = session.tick(FRAME, &events);
    }

    assert!(last.ended);
    let result = last.result.expect("expired match must carry a result");
    assert_eq!(result, MatchResult::evaluate(&session.totals()));

    let p1 = last.players[PlayerId::ONE].total;
    let p2 = last.players[PlayerId::TWO].total;
    match result {
        MatchResult::Winner(PlayerId::ONE) => assert!(p1 > p2),
        MatchResult::Winner(_) => assert!(p2 > p1),
        MatchResult::Draw => assert_eq!(p1, p2),
    }
}

/// After expiry every tick is a no-op: picks resolve nothing, the
/// queue stops moving, the result never changes.
#[test]
fn test_post_expiry_is_frozen() {
    let (catalog, config) = color_rush();
    let config = config.with_match_duration(5.0);
    let mut session = MatchSession::new(catalog, config, 3).unwrap();

    let ticks = (6.0 / FRAME) as usize;
    for _ in 0..ticks {
        session.tick(FRAME, &[]);
    }
    assert!(session.is_ended());

    let frozen = serde_json::to_string(&session.snapshot(false)).unwrap();
    for _ in 0..120 {
        session.tick(FRAME, &[InputEvent::Pick(session.active_player())]);
    }
    let after = serde_json::to_string(&session.snapshot(false)).unwrap();
    assert_eq!(frozen, after);
}

/// Quit is surfaced, never acted on: the session keeps ticking.
#[test]
fn test_quit_is_advisory() {
    let (catalog, config) = color_rush();
    let mut session = MatchSession::new(catalog, config, 3).unwrap();

    let snapshot = session.tick(FRAME, &[InputEvent::Quit]);
    assert!(snapshot.quit_requested);
    assert!(!snapshot.ended);

    let snapshot = session.tick(FRAME, &[]);
    assert!(!snapshot.quit_requested);
}

// =============================================================================
// Weather Clear Policy
// =============================================================================

/// With `OnTurnSwitch`, weather set by a pick survives the opponent's
/// turn and clears at the next switch.
#[test]
fn test_weather_clears_on_next_switch() {
    let (catalog, config) = battlefield();
    let config = config.with_weather_clear(WeatherClearPolicy::OnTurnSwitch);
    let mut session = MatchSession::new(catalog, config, 41).unwrap();

    // Tick until a weather item is the active slot, then pick it
    let mut set = false;
    for _ in 0..20_000 {
        let active = session.active_player();
        let snapshot = session.tick(FRAME, &[]);
        if snapshot.ended {
            break;
        }
        if let Some(index) = snapshot.active_index {
            if snapshot.queue[index].category == forces::WEATHER {
                let snapshot = session.tick(FRAME, &[InputEvent::Pick(active)]);
                if snapshot.weather != WeatherFlags::new() {
                    set = true;

                    // Survives ticks within the opponent's turn
                    let snapshot = session.tick(FRAME, &[]);
                    assert_ne!(snapshot.weather, WeatherFlags::new());

                    // The opponent's pick clears it; only weather set
                    // by that very pick can remain afterwards
                    let active = session.active_player();
                    let snapshot = session.tick(FRAME, &[InputEvent::Pick(active)]);
                    let reset = snapshot
                        .last_resolution
                        .as_ref()
                        .and_then(|r| r.weather_set);
                    match reset {
                        None => assert_eq!(snapshot.weather, WeatherFlags::new()),
                        Some(kind) => {
                            let mut expected = WeatherFlags::new();
                            expected.set(kind);
                            assert_eq!(snapshot.weather, expected);
                        }
                    }
                    break;
                }
            }
        }
    }
    assert!(set, "no weather item scrolled into the active slot");
}
