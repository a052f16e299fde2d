// --- File: constants.rs ---
// --- Global Simulation Defaults ---
// Every value here seeds a field of `SimulationConfig`; the simulation itself reads the config.

pub const ARENA_WIDTH: f32 = 600.0;
pub const ARENA_HEIGHT: f32 = 600.0;

pub const INITIAL_FOOD_COUNT: usize = 100;

// --- Agent movement ---
pub const AGENT_SPEED: f32 = 2.2;
pub const INITIAL_TARGET_LENGTH: usize = 1;

// --- Decision engine ---
pub const DECISION_INTERVAL_TICKS: u64 = 15;
pub const AVOID_RADIUS: f32 = 30.0;
// Scales the summed repulsion vector into a flee point.
pub const FLEE_SCALE: f32 = 80.0;
pub const ATTACK_RADIUS: f32 = 80.0;
pub const FOOD_IGNORE_TICKS: u32 = 120;
pub const ATTACK_IGNORE_TICKS: u32 = 60;
pub const FOOD_IGNORE_MATCH_DISTANCE: f32 = 1.0;
pub const ATTACK_IGNORE_MATCH_DISTANCE: f32 = 5.0;

// --- Eating / collisions ---
pub const EAT_RADIUS: f32 = 10.0;
pub const CONTACT_RADIUS: f32 = 8.0;
// Head-adjacent segments skipped when another agent's body is scanned (1 = head only).
pub const OTHER_BODY_EXCLUDED_SEGMENTS: usize = 1;
// Most recent own segments skipped for self-collision, so a gently curving body never kills itself.
pub const SELF_BODY_EXCLUDED_SEGMENTS: usize = 10;

// --- Lifecycle ---
pub const DEATH_TICKS: u32 = 300;
pub const CORPSE_JITTER: f32 = 2.0;

// --- Respawn scheduler ---
pub const RESPAWN_INTERVAL_TICKS: u64 = 15;

// --- Driver ---
pub const DEFAULT_REPORT_INTERVAL: u64 = 600;
// Ticks per simulated second when converting survival time for display.
pub const TICKS_PER_SECOND: f32 = 60.0;

// --- End of File: constants.rs ---
