// --- File: decision.rs ---
//! Priority ladder that picks where an autonomous agent heads next.
//!
//! Tiers are consulted in order and the first one that yields a result wins:
//! avoidance of nearby bodies, attack on a nearby head, then the nearest food.
//! [`decide`] is pure; [`apply_intent`] writes the outcome back onto the agent and
//! records the ignore-timers that stop an agent from darting straight back to
//! whatever it just fled from.

use crate::agent::{ActionMode, Agent};
use crate::config::DecisionConfig;
use crate::utils::nearest_point;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Run for a point pushed away from nearby bodies.
    Avoid(Vec2),
    Attack(Vec2),
    Food(Vec2),
    /// No tier produced a candidate; keep whatever target was set before.
    Idle,
}

impl Intent {
    pub fn mode(&self) -> ActionMode {
        match self {
            Intent::Avoid(_) => ActionMode::Avoidance,
            Intent::Attack(_) => ActionMode::Attack,
            Intent::Food(_) => ActionMode::Food,
            Intent::Idle => ActionMode::Idle,
        }
    }
}

pub fn decide(agent: &Agent, agents: &[Agent], food: &[Vec2], config: &DecisionConfig) -> Intent {
    let Some(head) = agent.head() else {
        return Intent::Idle;
    };
    if let Some(push) = avoidance_vector(agent, agents, config) {
        return Intent::Avoid(head + push * config.flee_scale);
    }
    if let Some(enemy_head) = attack_target(agent, agents, config) {
        return Intent::Attack(enemy_head);
    }
    if let Some(position) = food_target(agent, food, config) {
        return Intent::Food(position);
    }
    Intent::Idle
}

/// Sum of inverse-distance repulsions from every other live body segment inside the
/// avoidance radius, or `None` when nothing is close enough to matter.
pub fn avoidance_vector(agent: &Agent, agents: &[Agent], config: &DecisionConfig) -> Option<Vec2> {
    let head = agent.head()?;
    let mut push = Vec2::ZERO;
    for other in agents {
        if other.id == agent.id || !other.is_alive() {
            continue;
        }
        let scanned = other.body.len().saturating_sub(config.avoid_excluded_segments);
        for &segment in other.body.range(..scanned) {
            let away = head - segment;
            let dist = away.length();
            if dist < config.avoid_radius && dist > f32::EPSILON {
                push += away / (dist * dist);
            }
        }
    }
    (push.length_squared() > 0.0).then_some(push)
}

/// Nearest live enemy head inside the attack radius, skipping a head still under suppression.
pub fn attack_target(agent: &Agent, agents: &[Agent], config: &DecisionConfig) -> Option<Vec2> {
    let head = agent.head()?;
    let mut best: Option<(Vec2, f32)> = None;
    for other in agents {
        if other.id == agent.id || !other.is_alive() {
            continue;
        }
        let Some(enemy_head) = other.head() else {
            continue;
        };
        if agent.attack_is_ignored(enemy_head, config.attack_ignore_match_distance) {
            continue;
        }
        let dist = head.distance(enemy_head);
        if dist < config.attack_radius && best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((enemy_head, dist));
        }
    }
    best.map(|(position, _)| position)
}

pub fn food_target(agent: &Agent, food: &[Vec2], config: &DecisionConfig) -> Option<Vec2> {
    let head = agent.head()?;
    nearest_point(head, food, |position| {
        !agent.food_is_ignored(position, config.food_ignore_match_distance)
    })
    .map(|(index, _)| food[index])
}

pub fn apply_intent(agent: &mut Agent, intent: Intent, config: &DecisionConfig) {
    match intent {
        Intent::Avoid(flee_to) => {
            if let Some(previous) = agent.current_target {
                match agent.last_action {
                    ActionMode::Food if config.food_ignore_ticks > 0 => {
                        agent.ignored_food = Some(previous);
                        agent.ignored_food_timer = config.food_ignore_ticks;
                    }
                    ActionMode::Attack if config.attack_ignore_ticks > 0 => {
                        agent.ignored_attack = Some(previous);
                        agent.ignored_attack_timer = config.attack_ignore_ticks;
                    }
                    _ => {}
                }
            }
            agent.current_target = Some(flee_to);
        }
        Intent::Attack(position) | Intent::Food(position) => {
            agent.current_target = Some(position);
        }
        Intent::Idle => {}
    }
    agent.last_action = intent.mode();
}

// --- End of File: decision.rs ---
