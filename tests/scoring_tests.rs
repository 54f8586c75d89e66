//! Resolution engine integration tests.
//!
//! These tests exercise the table-driven scoring path with a
//! realistic catalog: score effects, the shield lifecycle across turn
//! switches, placement, and weather interaction with lane power.

use conveyor_draft::catalog::{Category, ItemCatalog, ItemDefinition, ItemId, ItemInstance, Lane};
use conveyor_draft::core::{MatchConfig, PlayerId, PlayerPair};
use conveyor_draft::lanes::{LaneBoard, WeatherFlags};
use conveyor_draft::scoring::{CategoryEffect, PlayerState, ScoreTable, ScoringEngine};
use conveyor_draft::session::TurnController;

const RED: Category = Category::new(0);
const BLUE: Category = Category::new(1);
const GREEN: Category = Category::new(2);
const BLACK: Category = Category::new(3);
const UNIT: Category = Category::new(4);
const HERO: Category = Category::new(5);
const WEATHER: Category = Category::new(6);

struct Match {
    engine: ScoringEngine,
    catalog: ItemCatalog,
    players: PlayerPair<PlayerState>,
    boards: PlayerPair<LaneBoard>,
    turn: TurnController,
    weather: WeatherFlags,
}

fn build() -> Match {
    let mut catalog = ItemCatalog::new();
    catalog.register(ItemDefinition::new(ItemId::new(0), "Red", RED, Lane::Global));
    catalog.register(ItemDefinition::new(ItemId::new(1), "Blue", BLUE, Lane::Global));
    catalog.register(ItemDefinition::new(ItemId::new(2), "Green", GREEN, Lane::Global));
    catalog.register(ItemDefinition::new(ItemId::new(3), "Black", BLACK, Lane::Global));
    catalog.register(
        ItemDefinition::new(ItemId::new(4), "Pikeman", UNIT, Lane::Melee).with_power(3),
    );
    catalog.register(
        ItemDefinition::new(ItemId::new(5), "Catapult", UNIT, Lane::Siege).with_power(8),
    );
    catalog.register(
        ItemDefinition::new(ItemId::new(6), "Champion", HERO, Lane::Melee)
            .with_power(15)
            .weather_immune(),
    );
    catalog.register(
        ItemDefinition::new(ItemId::new(7), "Frost Wraith", WEATHER, Lane::Global).with_tier(1),
    );

    let table = ScoreTable::new()
        .with_effect(RED, CategoryEffect::OpponentPenalty(5))
        .with_effect(BLUE, CategoryEffect::ActiveBonus(15))
        .with_effect(GREEN, CategoryEffect::MutualPenalty(3))
        .with_effect(BLACK, CategoryEffect::Shield)
        .with_effect(WEATHER, CategoryEffect::Weather);

    let config = MatchConfig::new()
        .with_score_table(table)
        .with_lane_capacity(8)
        .with_collection_cap(80);

    Match {
        engine: ScoringEngine::from_config(&config),
        catalog,
        players: PlayerPair::new(PlayerState::new),
        boards: PlayerPair::with_default(),
        turn: TurnController::new(),
        weather: WeatherFlags::new(),
    }
}

impl Match {
    /// Resolve an item for the current active player, then switch.
    fn pick(&mut self, id: u32) {
        let item = ItemInstance::of(self.catalog.get_unchecked(ItemId::new(id)));
        self.engine.resolve(
            item,
            self.turn.active(),
            &mut self.players,
            self.turn.shield_mut(),
            &mut self.boards,
            &mut self.weather,
            &self.catalog,
        );
        self.turn.switch();
    }

    fn points(&self, player: PlayerId) -> i64 {
        self.players[player].points
    }

    fn total(&self, player: PlayerId) -> i64 {
        self.points(player) + self.boards[player].total_power(&self.weather, &self.catalog)
    }
}

// =============================================================================
// Score Effects Over Alternating Turns
// =============================================================================

/// A short scripted exchange: bonus, penalty, mutual penalty.
#[test]
fn test_scripted_exchange() {
    let mut m = build();

    m.pick(1); // P1 blue: +15
    m.pick(0); // P2 red: P1 -5
    m.pick(2); // P1 green: both -3

    assert_eq!(m.points(PlayerId::ONE), 15 - 5 - 3);
    assert_eq!(m.points(PlayerId::TWO), -3);
}

/// The shield lasts exactly until the next turn switch, so it never
/// survives to protect its holder on a later turn.
#[test]
fn test_shield_expires_on_switch() {
    let mut m = build();

    m.pick(3); // P1 takes the shield; switch clears it
    assert_eq!(m.turn.shield(), None);

    m.pick(2); // P2 green: nobody is shielded anymore
    assert_eq!(m.points(PlayerId::ONE), -3);
    assert_eq!(m.points(PlayerId::TWO), -3);
}

/// A shield picked on the same resolution as its test: the grant
/// precedes the score delta, so a shield item alone never costs its
/// picker anything (and a green pick by a shielded player is checked
/// at engine level in the unit tests).
#[test]
fn test_shield_pick_is_free() {
    let mut m = build();
    m.pick(3);

    assert_eq!(m.points(PlayerId::ONE), 0);
    assert_eq!(m.points(PlayerId::TWO), 0);
}

// =============================================================================
// Placement And Weather
// =============================================================================

/// Placed units accrue to their owner's lanes only.
#[test]
fn test_placement_is_per_player() {
    let mut m = build();

    m.pick(4); // P1 pikeman -> melee
    m.pick(5); // P2 catapult -> siege
    m.pick(6); // P1 champion -> melee

    assert_eq!(m.boards[PlayerId::ONE].lane_len(Lane::Melee), 2);
    assert_eq!(m.boards[PlayerId::ONE].lane_len(Lane::Siege), 0);
    assert_eq!(m.boards[PlayerId::TWO].lane_len(Lane::Siege), 1);

    assert_eq!(m.total(PlayerId::ONE), 3 + 15);
    assert_eq!(m.total(PlayerId::TWO), 8);
}

/// Weather suppresses both players' lanes symmetrically; immune items
/// keep their power.
#[test]
fn test_weather_hits_both_players() {
    let mut m = build();

    m.pick(4); // P1 pikeman (melee, 3)
    m.pick(4); // P2 pikeman (melee, 3)
    m.pick(6); // P1 champion (melee, 15, immune)
    m.pick(7); // P2 frost

    assert!(m.weather.frost);
    assert_eq!(m.total(PlayerId::ONE), 1 + 15);
    assert_eq!(m.total(PlayerId::TWO), 1);
}

/// Weather set before placement still applies: power is computed at
/// query time, not at placement time.
#[test]
fn test_weather_applies_to_later_placements() {
    let mut m = build();

    m.pick(7); // P1 frost first
    m.pick(4); // P2 pikeman placed under active frost

    assert_eq!(m.total(PlayerId::TWO), 1);
}

/// Points and lane power combine into the terminal total.
#[test]
fn test_total_combines_points_and_power() {
    let mut m = build();

    m.pick(1); // P1 blue: +15
    m.pick(4); // P2 pikeman: 3 power
    m.pick(4); // P1 pikeman: 3 power
    m.pick(1); // P2 blue: +15

    assert_eq!(m.total(PlayerId::ONE), 15 + 3);
    assert_eq!(m.total(PlayerId::TWO), 15 + 3);
}
