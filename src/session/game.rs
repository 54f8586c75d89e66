//! The match session: one tick loop over every component.
//!
//! A session owns all match state and advances it in a fixed order
//! each tick: conveyor advance, selection query, at most one pick
//! resolution (or the turn-timeout check), round clock, and - at
//! expiry - result evaluation. Input events are sampled once per tick;
//! the first pick attributed to the active player wins and everything
//! else that tick is ignored.
//!
//! Once the round clock expires, every mutating sub-operation is a
//! no-op; `tick` keeps returning snapshots so a renderer can show the
//! result screen.

use serde::{Deserialize, Serialize};

use super::clock::RoundClock;
use super::result::MatchResult;
use super::turn::TurnController;
use crate::catalog::{Category, ItemCatalog, ItemId, Lane};
use crate::conveyor::{Conveyor, DraftSource};
use crate::core::{ConfigError, DraftRng, MatchConfig, PlayerId, PlayerPair};
use crate::lanes::{LaneBoard, WeatherClearPolicy, WeatherFlags};
use crate::scoring::{PlayerState, Resolution, ScoringEngine};

use rustc_hash::FxHashMap;

/// Discrete input sampled once per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A pick attributed to a player. Only the active player's pick
    /// resolves; at most one resolution happens per tick.
    Pick(PlayerId),
    /// Renderer concern; the core ignores it.
    ToggleFullscreen,
    /// Surfaced on the snapshot as `quit_requested`.
    Quit,
}

/// One queue slot as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
    /// The item definition in this slot.
    pub item: ItemId,
    /// The item's category.
    pub category: Category,
    /// The item's lane.
    pub lane: Lane,
    /// Current power of the instance.
    pub power: i64,
    /// Position along the scroll axis.
    pub position: f32,
}

/// One placed item with its weather-adjusted power.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedView {
    /// The placed item definition.
    pub item: ItemId,
    /// Effective power under the current weather.
    pub power: i64,
}

/// One lane's contents and total power.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneView {
    /// Which lane.
    pub lane: Lane,
    /// Placed items in placement order.
    pub placed: Vec<PlacedView>,
    /// Total effective power of the lane.
    pub power: i64,
}

/// One player's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Which player.
    pub id: PlayerId,
    /// Effect points (may be negative).
    pub points: i64,
    /// Total effective lane power.
    pub lane_power: i64,
    /// Terminal total: points plus lane power.
    pub total: i64,
    /// Collected counts per category.
    pub collected: FxHashMap<Category, u32>,
    /// The three placement lanes.
    pub lanes: Vec<LaneView>,
}

/// Turn state as the renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnView {
    /// The player whose turn it is.
    pub active: PlayerId,
    /// Time left before a timeout switch.
    pub remaining: f32,
    /// Current shield holder.
    pub shield: Option<PlayerId>,
}

/// Everything a rendering layer needs to draw one frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Queue contents with positions, in queue order.
    pub queue: Vec<SlotView>,
    /// Index of the active slot, if any.
    pub active_index: Option<usize>,
    /// Both players' visible state.
    pub players: PlayerPair<PlayerView>,
    /// Turn state.
    pub turn: TurnView,
    /// Active global weather flags.
    pub weather: WeatherFlags,
    /// Match time remaining.
    pub clock_remaining: f32,
    /// Whether the match has ended.
    pub ended: bool,
    /// Final result, present once ended.
    pub result: Option<MatchResult>,
    /// Most recent resolution, if any pick has resolved.
    pub last_resolution: Option<Resolution>,
    /// A quit event was sampled this tick.
    pub quit_requested: bool,
}

/// A running match.
pub struct MatchSession {
    catalog: ItemCatalog,
    config: MatchConfig,
    rng: DraftRng,
    draft: DraftSource,
    conveyor: Conveyor,
    engine: ScoringEngine,
    players: PlayerPair<PlayerState>,
    boards: PlayerPair<LaneBoard>,
    weather: WeatherFlags,
    turn: TurnController,
    clock: RoundClock,
    result: Option<MatchResult>,
    last_resolution: Option<Resolution>,
}

impl MatchSession {
    /// Create a session, validating the configuration against the
    /// catalog first.
    pub fn new(catalog: ItemCatalog, config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate(&catalog)?;

        let mut rng = DraftRng::new(seed);
        let draft = DraftSource::from_config(&config);
        let conveyor = Conveyor::new(&config, &mut rng, &draft, &catalog);
        let engine = ScoringEngine::from_config(&config);
        let clock = RoundClock::new(config.match_duration);

        Ok(Self {
            catalog,
            config,
            rng,
            draft,
            conveyor,
            engine,
            players: PlayerPair::new(PlayerState::new),
            boards: PlayerPair::with_default(),
            weather: WeatherFlags::new(),
            turn: TurnController::new(),
            clock,
            result: None,
            last_resolution: None,
        })
    }

    /// The item catalog.
    #[must_use]
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The conveyor queue.
    #[must_use]
    pub fn conveyor(&self) -> &Conveyor {
        &self.conveyor
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active()
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.clock.is_expired()
    }

    /// The result, once the match has ended.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    /// Both players' terminal totals: points plus effective lane
    /// power.
    #[must_use]
    pub fn totals(&self) -> PlayerPair<i64> {
        PlayerPair::new(|p| {
            self.players[p].points + self.boards[p].total_power(&self.weather, &self.catalog)
        })
    }

    /// Advance the match by one tick.
    ///
    /// `dt` is the discrete time delta; `events` are the inputs
    /// sampled since the last tick. Returns the frame snapshot.
    pub fn tick(&mut self, dt: f32, events: &[InputEvent]) -> Snapshot {
        let quit_requested = events.iter().any(|e| matches!(e, InputEvent::Quit));

        if !self.clock.is_expired() {
            self.conveyor
                .advance(dt, &mut self.rng, &self.draft, &self.catalog);

            let active_index = self.config.selection.active_index(&self.conveyor);
            let active_player = self.turn.active();
            let pick = events
                .iter()
                .find(|e| matches!(e, InputEvent::Pick(p) if *p == active_player));

            if let (Some(index), Some(_)) = (active_index, pick) {
                if let Some(item) =
                    self.conveyor
                        .take_at(index, &mut self.rng, &self.draft, &self.catalog)
                {
                    // The clear precedes the resolution, so weather
                    // set by this pick survives the opponent's turn
                    if self.config.weather_clear == WeatherClearPolicy::OnTurnSwitch {
                        self.weather.clear_all();
                    }
                    let resolution = self.engine.resolve(
                        item,
                        active_player,
                        &mut self.players,
                        self.turn.shield_mut(),
                        &mut self.boards,
                        &mut self.weather,
                        &self.catalog,
                    );
                    self.last_resolution = Some(resolution);
                    self.turn.switch();
                }
            } else if self.turn.advance(dt, self.config.turn_time_limit)
                && self.config.weather_clear == WeatherClearPolicy::OnTurnSwitch
            {
                self.weather.clear_all();
            }

            self.clock.tick(dt);
            if self.clock.is_expired() {
                self.result = Some(MatchResult::evaluate(&self.totals()));
            }
        }

        self.snapshot(quit_requested)
    }

    /// Build the current frame snapshot.
    #[must_use]
    pub fn snapshot(&self, quit_requested: bool) -> Snapshot {
        let queue = self
            .conveyor
            .iter()
            .enumerate()
            .map(|(i, instance)| {
                let def = self.catalog.get_unchecked(instance.def);
                SlotView {
                    item: def.id,
                    category: def.category,
                    lane: def.lane,
                    power: instance.current_power,
                    position: self.conveyor.slot_position(i),
                }
            })
            .collect();

        let players = PlayerPair::new(|p| self.player_view(p));

        Snapshot {
            queue,
            active_index: self.config.selection.active_index(&self.conveyor),
            players,
            turn: TurnView {
                active: self.turn.active(),
                remaining: self.turn.remaining(self.config.turn_time_limit),
                shield: self.turn.shield(),
            },
            weather: self.weather,
            clock_remaining: self.clock.remaining(),
            ended: self.clock.is_expired(),
            result: self.result,
            last_resolution: self.last_resolution.clone(),
            quit_requested,
        }
    }

    fn player_view(&self, player: PlayerId) -> PlayerView {
        let board = &self.boards[player];
        let lanes: Vec<LaneView> = Lane::PLACEMENT
            .iter()
            .map(|&lane| LaneView {
                lane,
                placed: board
                    .slots(lane)
                    .iter()
                    .map(|item| PlacedView {
                        item: item.def,
                        power: LaneBoard::effective_power(
                            item,
                            lane,
                            &self.weather,
                            &self.catalog,
                        ),
                    })
                    .collect(),
                power: board.lane_power(lane, &self.weather, &self.catalog),
            })
            .collect();

        let lane_power = lanes.iter().map(|l| l.power).sum::<i64>();
        let state = &self.players[player];

        PlayerView {
            id: player,
            points: state.points,
            lane_power,
            total: state.points + lane_power,
            collected: state.collected.clone(),
            lanes,
        }
    }
}
