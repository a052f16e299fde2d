// --- File: snapshot.rs ---
// Read-only view of a completed tick, handed to whatever draws or reports the world.

use crate::agent::{Agent, AgentId, Controller};
use crate::constants::TICKS_PER_SECOND;
use glam::Vec2;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AgentView {
    pub id: AgentId,
    pub name: String,
    pub color: [f32; 4],
    pub controller: Controller,
    pub alive: bool,
    pub state: &'static str,
    /// Oldest segment first, head last. Empty while dead.
    pub body: Vec<Vec2>,
    pub target_length: usize,
    pub target: Option<Vec2>,
    pub food_eaten: u32,
    pub alive_ticks: u64,
    pub death_timer: u32,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            name: agent.name.clone(),
            color: agent.color.to_array(),
            controller: agent.controller,
            alive: agent.alive,
            state: agent.state_label(),
            body: agent.body.iter().copied().collect(),
            target_length: agent.target_length,
            target: agent.current_target,
            food_eaten: agent.food_eaten,
            alive_ticks: agent.alive_ticks,
            death_timer: agent.death_timer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub name: String,
    pub alive: bool,
    pub alive_seconds: f32,
    pub length: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: f32,
    pub height: f32,
    pub agents: Vec<AgentView>,
    pub food: Vec<Vec2>,
    pub respawn_queue_len: usize,
}

impl WorldSnapshot {
    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    /// Agents ordered by survival time, longest first; ties keep roster order.
    pub fn scoreboard(&self) -> Vec<ScoreEntry> {
        let mut ranked: Vec<&AgentView> = self.agents.iter().collect();
        ranked.sort_by(|a, b| b.alive_ticks.cmp(&a.alive_ticks));
        ranked
            .into_iter()
            .map(|agent| ScoreEntry {
                name: agent.name.clone(),
                alive: agent.alive,
                alive_seconds: agent.alive_ticks as f32 / TICKS_PER_SECOND,
                length: agent.body.len(),
            })
            .collect()
    }
}
// --- End of File: snapshot.rs ---
