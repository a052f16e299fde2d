// --- File: agent.rs ---
use crate::arena::Arena;
use crate::config::RosterEntry;
use crate::constants::INITIAL_TARGET_LENGTH;
use glam::{Vec2, Vec4};
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// Stable index of an agent inside its world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AgentId(pub usize);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMode {
    #[default]
    Idle,
    Avoidance,
    Attack,
    Food,
}

impl ActionMode {
    pub fn label(self) -> &'static str {
        match self {
            ActionMode::Idle => "idle",
            ActionMode::Avoidance => "avoidance",
            ActionMode::Attack => "attack",
            ActionMode::Food => "food",
        }
    }
}

/// Who chooses where the agent goes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    /// Steered by the decision engine.
    Autonomous,
    /// Steered by an externally supplied direction vector.
    Player,
}

#[derive(Debug, Clone)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub color: Vec4,
    pub controller: Controller,
    /// Oldest segment at the front, head at the back.
    pub body: VecDeque<Vec2>,
    pub target_length: usize,
    pub speed: f32,
    pub current_target: Option<Vec2>,
    pub last_action: ActionMode,
    pub alive: bool,
    pub death_timer: u32,
    pub ignored_food: Option<Vec2>,
    pub ignored_food_timer: u32,
    pub ignored_attack: Option<Vec2>,
    pub ignored_attack_timer: u32,
    // Latest direction supplied for a player-controlled agent.
    pub steer: Option<Vec2>,
    pub food_eaten: u32,
    pub alive_ticks: u64,
    // Set on the tick of revival; a freshly revived agent sits that tick out.
    pub(crate) resting: bool,
}

impl Agent {
    pub fn spawn<R: Rng + ?Sized>(
        id: AgentId,
        entry: &RosterEntry,
        speed: f32,
        arena: &Arena,
        rng: &mut R,
    ) -> Self {
        let controller = if entry.player {
            Controller::Player
        } else {
            Controller::Autonomous
        };
        let mut body = VecDeque::with_capacity(16);
        body.push_back(arena.random_position(rng));
        Self {
            id,
            name: entry.name.clone(),
            color: Vec4::from(entry.color),
            controller,
            body,
            target_length: INITIAL_TARGET_LENGTH,
            speed,
            current_target: None,
            last_action: ActionMode::Idle,
            alive: true,
            death_timer: 0,
            ignored_food: None,
            ignored_food_timer: 0,
            ignored_attack: None,
            ignored_attack_timer: 0,
            steer: None,
            food_eaten: 0,
            alive_ticks: 0,
            resting: false,
        }
    }

    #[inline]
    pub fn head(&self) -> Option<Vec2> {
        self.body.back().copied()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.controller == Controller::Player
    }

    /// Alive and not sitting out its revival tick.
    #[inline]
    pub fn is_acting(&self) -> bool {
        self.alive && !self.resting
    }

    pub fn state_label(&self) -> &'static str {
        if self.alive {
            self.last_action.label()
        } else {
            "dead"
        }
    }

    /// Replaces the body (oldest first, head last), raising `target_length` to fit.
    pub fn set_body<I: IntoIterator<Item = Vec2>>(&mut self, segments: I) {
        self.body = segments.into_iter().collect();
        self.target_length = self.target_length.max(self.body.len()).max(1);
    }

    pub fn food_is_ignored(&self, position: Vec2, match_distance: f32) -> bool {
        self.ignored_food_timer > 0
            && self
                .ignored_food
                .is_some_and(|ignored| ignored.distance(position) < match_distance)
    }

    pub fn attack_is_ignored(&self, position: Vec2, match_distance: f32) -> bool {
        self.ignored_attack_timer > 0
            && self
                .ignored_attack
                .is_some_and(|ignored| ignored.distance(position) < match_distance)
    }

    /// Counts both ignore-timers down by one tick, forgetting the target once a timer hits zero.
    pub fn decay_ignore_timers(&mut self) {
        if self.ignored_food_timer > 0 {
            self.ignored_food_timer -= 1;
            if self.ignored_food_timer == 0 {
                self.ignored_food = None;
            }
        }
        if self.ignored_attack_timer > 0 {
            self.ignored_attack_timer -= 1;
            if self.ignored_attack_timer == 0 {
                self.ignored_attack = None;
            }
        }
    }

    pub(crate) fn eat(&mut self) {
        self.target_length += 1;
        self.food_eaten += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn agent() -> Agent {
        let mut rng = StdRng::seed_from_u64(1);
        let arena = Arena::new(600.0, 600.0);
        Agent::spawn(
            AgentId(0),
            &RosterEntry::autonomous("Red", [1.0, 0.0, 0.0, 1.0]),
            2.2,
            &arena,
            &mut rng,
        )
    }

    #[test]
    fn spawns_alive_with_single_segment() {
        let agent = agent();
        assert!(agent.is_alive());
        assert_eq!(agent.body.len(), 1);
        assert_eq!(agent.target_length, 1);
        assert_eq!(agent.death_timer, 0);
        assert_eq!(agent.state_label(), "idle");
        assert!(agent.current_target.is_none());
    }

    #[test]
    fn ignore_timers_clear_their_target_at_zero() {
        let mut agent = agent();
        agent.ignored_food = Some(Vec2::new(5.0, 5.0));
        agent.ignored_food_timer = 2;
        agent.ignored_attack = Some(Vec2::new(9.0, 9.0));
        agent.ignored_attack_timer = 1;

        agent.decay_ignore_timers();
        assert_eq!(agent.ignored_attack, None);
        assert_eq!(agent.ignored_attack_timer, 0);
        assert!(agent.food_is_ignored(Vec2::new(5.2, 5.0), 1.0));

        agent.decay_ignore_timers();
        assert_eq!(agent.ignored_food, None);
        assert!(!agent.food_is_ignored(Vec2::new(5.0, 5.0), 1.0));

        agent.decay_ignore_timers();
        assert_eq!(agent.ignored_food_timer, 0);
    }

    #[test]
    fn set_body_grows_target_length() {
        let mut agent = agent();
        agent.set_body([Vec2::ZERO, Vec2::X, Vec2::new(2.0, 0.0)]);
        assert_eq!(agent.target_length, 3);
        assert_eq!(agent.head(), Some(Vec2::new(2.0, 0.0)));
    }
}
// --- End of File: agent.rs ---
