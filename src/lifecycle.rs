// --- File: lifecycle.rs ---
// Alive -> Dead -> Alive. No other states.

use crate::agent::{ActionMode, Agent};
use crate::arena::Arena;
use crate::constants::INITIAL_TARGET_LENGTH;
use crate::utils::jitter;
use glam::Vec2;
use rand::Rng;

/// Kills a live agent: every body segment becomes a food (jittered and wrapped), the body
/// is emptied and the death timer starts. Returns how many foods were dropped; killing an
/// already dead agent drops nothing.
pub fn kill<R: Rng + ?Sized>(
    agent: &mut Agent,
    food: &mut Vec<Vec2>,
    death_ticks: u32,
    corpse_jitter: f32,
    arena: &Arena,
    rng: &mut R,
) -> usize {
    if !agent.alive {
        return 0;
    }
    let dropped = agent.body.len();
    food.reserve(dropped);
    for segment in agent.body.drain(..) {
        food.push(arena.wrap(segment + jitter(rng, corpse_jitter)));
    }
    agent.alive = false;
    agent.death_timer = death_ticks.max(1);
    agent.current_target = None;
    agent.steer = None;
    log::debug!(
        "{} {} died with {} segments ({} food eaten)",
        agent.name,
        agent.id,
        dropped,
        agent.food_eaten
    );
    dropped
}

/// Brings a dead agent back at a fresh random position with length 1 and all counters reset.
pub fn revive<R: Rng + ?Sized>(agent: &mut Agent, arena: &Arena, rng: &mut R) {
    agent.body.clear();
    agent.body.push_back(arena.random_position(rng));
    agent.target_length = INITIAL_TARGET_LENGTH;
    agent.current_target = None;
    agent.last_action = ActionMode::Idle;
    agent.alive = true;
    agent.death_timer = 0;
    agent.ignored_food = None;
    agent.ignored_food_timer = 0;
    agent.ignored_attack = None;
    agent.ignored_attack_timer = 0;
    agent.food_eaten = 0;
    agent.alive_ticks = 0;
    agent.resting = true;
    log::debug!("{} {} revived", agent.name, agent.id);
}

/// One tick of the death countdown. Returns true when the agent was revived this tick.
pub fn count_down<R: Rng + ?Sized>(agent: &mut Agent, arena: &Arena, rng: &mut R) -> bool {
    if agent.alive {
        return false;
    }
    agent.death_timer = agent.death_timer.saturating_sub(1);
    if agent.death_timer == 0 {
        revive(agent, arena, rng);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentId;
    use crate::config::RosterEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (Agent, Arena, StdRng) {
        let mut rng = StdRng::seed_from_u64(21);
        let arena = Arena::new(600.0, 600.0);
        let agent = Agent::spawn(
            AgentId(0),
            &RosterEntry::autonomous("Green", [0.0, 1.0, 0.0, 1.0]),
            2.2,
            &arena,
            &mut rng,
        );
        (agent, arena, rng)
    }

    #[test]
    fn kill_scatters_body_into_food() {
        let (mut agent, arena, mut rng) = setup();
        let body = [Vec2::new(100.0, 100.0), Vec2::new(102.0, 100.0), Vec2::new(104.0, 100.0)];
        agent.set_body(body);
        let mut food = vec![Vec2::new(1.0, 1.0)];

        assert_eq!(kill(&mut agent, &mut food, 300, 2.0, &arena, &mut rng), 3);
        assert!(!agent.is_alive());
        assert!(agent.body.is_empty());
        assert_eq!(agent.death_timer, 300);
        assert_eq!(food.len(), 4);
        for (dropped, original) in food[1..].iter().zip(body) {
            assert!(dropped.distance(original) < 2.0 + 1e-4);
        }

        // second kill is a no-op
        assert_eq!(kill(&mut agent, &mut food, 300, 2.0, &arena, &mut rng), 0);
        assert_eq!(food.len(), 4);
    }

    #[test]
    fn countdown_revives_on_the_last_tick() {
        let (mut agent, arena, mut rng) = setup();
        agent.target_length = 7;
        agent.food_eaten = 6;
        agent.ignored_food = Some(Vec2::ONE);
        agent.ignored_food_timer = 50;
        kill(&mut agent, &mut Vec::new(), 3, 0.0, &arena, &mut rng);

        assert!(!count_down(&mut agent, &arena, &mut rng));
        assert!(!count_down(&mut agent, &arena, &mut rng));
        assert_eq!(agent.death_timer, 1);
        assert!(count_down(&mut agent, &arena, &mut rng));

        assert!(agent.is_alive());
        assert!(!agent.is_acting());
        assert_eq!(agent.body.len(), 1);
        assert_eq!(agent.target_length, 1);
        assert_eq!(agent.food_eaten, 0);
        assert_eq!(agent.death_timer, 0);
        assert!(agent.ignored_food.is_none());
        assert_eq!(agent.ignored_food_timer, 0);
        assert!(arena.contains(agent.head().unwrap()));
    }

    #[test]
    fn countdown_ignores_live_agents() {
        let (mut agent, arena, mut rng) = setup();
        let head = agent.head();
        assert!(!count_down(&mut agent, &arena, &mut rng));
        assert_eq!(agent.head(), head);
    }
}
// --- End of File: lifecycle.rs ---
