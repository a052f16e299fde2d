// --- File: config.rs ---
//! Simulation configuration, loadable from YAML with defaults for every field.

use crate::constants::*;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dimensions of the wraparound plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Per-agent movement and lifecycle parameters shared by every snake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    /// Units travelled per tick.
    pub speed: f32,
    /// Ticks an agent stays dead before it is revived.
    pub death_ticks: u32,
    /// Maximum random offset applied to each food dropped by a corpse.
    pub corpse_jitter: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed: AGENT_SPEED,
            death_ticks: DEATH_TICKS,
            corpse_jitter: CORPSE_JITTER,
        }
    }
}

/// Decision engine tuning: radii, cadence and ignore-timer durations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecisionConfig {
    /// Decisions are taken on ticks where `tick % interval_ticks == 0`.
    pub interval_ticks: u64,
    pub avoid_radius: f32,
    pub flee_scale: f32,
    pub attack_radius: f32,
    /// Head-adjacent segments of other agents ignored by the avoidance scan.
    pub avoid_excluded_segments: usize,
    pub food_ignore_ticks: u32,
    pub attack_ignore_ticks: u32,
    pub food_ignore_match_distance: f32,
    pub attack_ignore_match_distance: f32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            interval_ticks: DECISION_INTERVAL_TICKS,
            avoid_radius: AVOID_RADIUS,
            flee_scale: FLEE_SCALE,
            attack_radius: ATTACK_RADIUS,
            avoid_excluded_segments: OTHER_BODY_EXCLUDED_SEGMENTS,
            food_ignore_ticks: FOOD_IGNORE_TICKS,
            attack_ignore_ticks: ATTACK_IGNORE_TICKS,
            food_ignore_match_distance: FOOD_IGNORE_MATCH_DISTANCE,
            attack_ignore_match_distance: ATTACK_IGNORE_MATCH_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CollisionConfig {
    pub contact_radius: f32,
    pub other_excluded_segments: usize,
    pub self_collision: bool,
    pub self_excluded_segments: usize,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            contact_radius: CONTACT_RADIUS,
            other_excluded_segments: OTHER_BODY_EXCLUDED_SEGMENTS,
            self_collision: true,
            self_excluded_segments: SELF_BODY_EXCLUDED_SEGMENTS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FoodConfig {
    pub initial_count: usize,
    pub eat_radius: f32,
    /// One queued food is released on ticks where `tick % respawn_interval_ticks == 0`.
    pub respawn_interval_ticks: u64,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            initial_count: INITIAL_FOOD_COUNT,
            eat_radius: EAT_RADIUS,
            respawn_interval_ticks: RESPAWN_INTERVAL_TICKS,
        }
    }
}

/// One snake in the starting line-up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterEntry {
    pub name: String,
    /// RGBA, each channel in `0.0..=1.0`.
    pub color: [f32; 4],
    #[serde(default)]
    pub player: bool,
}

impl RosterEntry {
    pub fn autonomous(name: &str, color: [f32; 4]) -> Self {
        Self {
            name: name.to_string(),
            color,
            player: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RosterConfig {
    /// Prepends a white, player-steered snake named "Player".
    pub include_player: bool,
    pub agents: Vec<RosterEntry>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            include_player: false,
            agents: vec![
                RosterEntry::autonomous("Red", [1.0, 0.0, 0.0, 1.0]),
                RosterEntry::autonomous("Cyan", [0.0, 1.0, 1.0, 1.0]),
                RosterEntry::autonomous("Purple", [1.0, 0.0, 1.0, 1.0]),
                RosterEntry::autonomous("Blue", [0.0, 0.0, 1.0, 1.0]),
                RosterEntry::autonomous("Green", [0.0, 1.0, 0.0, 1.0]),
            ],
        }
    }
}

impl RosterConfig {
    /// Final line-up, player first when enabled.
    pub fn entries(&self) -> Vec<RosterEntry> {
        let mut entries = Vec::with_capacity(self.agents.len() + 1);
        if self.include_player {
            entries.push(RosterEntry {
                name: "Player".to_string(),
                color: [1.0, 1.0, 1.0, 1.0],
                player: true,
            });
        }
        entries.extend(self.agents.iter().cloned());
        entries
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub arena: ArenaConfig,
    pub agents: AgentConfig,
    pub decision: DecisionConfig,
    pub collision: CollisionConfig,
    pub food: FoodConfig,
    pub roster: RosterConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: SimulationConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |value: f32| value.is_finite() && value > 0.0;
        let non_negative = |value: f32| value.is_finite() && value >= 0.0;

        if !positive(self.arena.width) || !positive(self.arena.height) {
            return Err(ConfigError::Invalid("arena dimensions must be positive"));
        }
        if !positive(self.agents.speed) {
            return Err(ConfigError::Invalid("agent speed must be positive"));
        }
        if self.agents.death_ticks == 0 {
            return Err(ConfigError::Invalid("death_ticks must be > 0"));
        }
        if self.decision.interval_ticks == 0 {
            return Err(ConfigError::Invalid("decision interval must be > 0"));
        }
        if self.food.respawn_interval_ticks == 0 {
            return Err(ConfigError::Invalid("respawn interval must be > 0"));
        }
        let radii = [
            self.agents.corpse_jitter,
            self.decision.avoid_radius,
            self.decision.flee_scale,
            self.decision.attack_radius,
            self.decision.food_ignore_match_distance,
            self.decision.attack_ignore_match_distance,
            self.collision.contact_radius,
            self.food.eat_radius,
        ];
        if !radii.iter().copied().all(non_negative) {
            return Err(ConfigError::Invalid("radii and distances must be non-negative"));
        }
        if self.roster.entries().is_empty() {
            return Err(ConfigError::Invalid("roster must contain at least one agent"));
        }
        Ok(())
    }
}

// --- End of File: config.rs ---
