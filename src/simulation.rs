// --- File: simulation.rs ---
// File: simulation.rs
use crate::agent::{Agent, AgentId};
use crate::arena::Arena;
use crate::collision::{find_contact, touches_self};
use crate::config::SimulationConfig;
use crate::decision::{apply_intent, decide};
use crate::error::WorldError;
use crate::lifecycle;
use crate::movement::move_agent;
use crate::respawn::RespawnQueue;
use crate::snapshot::{AgentView, WorldSnapshot};
use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub type SimRng = StdRng;

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub tick: u64,
    pub food_eaten: usize,
    pub deaths: Vec<AgentId>,
    pub revivals: Vec<AgentId>,
    pub food_released: bool,
}

/// Owns every agent, the active food, the respawn queue and the arena.
///
/// `step` runs the phases in a fixed order: revival countdown, decisions, movement,
/// eating, collisions, respawn release. Each phase is also exposed on its own so it can be
/// driven in isolation.
pub struct World {
    pub agents: Vec<Agent>,
    pub food: Vec<Vec2>,
    pub respawn_queue: RespawnQueue,
    pub arena: Arena,
    pub config: SimulationConfig,
    tick: u64,
    rng: SimRng,
    seed: Option<u64>,
}

impl World {
    pub fn new(config: SimulationConfig) -> Result<Self, WorldError> {
        Self::build(config, SimRng::from_entropy(), None)
    }

    pub fn new_with_seed(config: SimulationConfig, seed: u64) -> Result<Self, WorldError> {
        Self::build(config, SimRng::seed_from_u64(seed), Some(seed))
    }

    fn build(config: SimulationConfig, mut rng: SimRng, seed: Option<u64>) -> Result<Self, WorldError> {
        config.validate()?;
        let arena = Arena::from(&config.arena);

        let agents = config
            .roster
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Agent::spawn(AgentId(index), entry, config.agents.speed, &arena, &mut rng)
            })
            .collect();
        let initial_food = config.food.initial_count;

        let mut world = Self {
            agents,
            food: Vec::with_capacity(initial_food),
            respawn_queue: RespawnQueue::new(),
            arena,
            config,
            tick: 0,
            rng,
            seed,
        };
        world.spawn_food(initial_food);
        Ok(world)
    }

    /// Advances the world by exactly one tick.
    pub fn step(&mut self) -> TickEvents {
        self.tick += 1;
        let mut events = TickEvents {
            tick: self.tick,
            ..TickEvents::default()
        };

        events.revivals = self.advance_lifecycle();
        self.run_decisions();
        self.move_agents();
        events.food_eaten = self.consume_food();
        events.deaths = self.resolve_collisions();
        events.food_released = self.release_respawn();

        log::trace!(
            "tick {}: eaten={} deaths={} revivals={} food={} queued={}",
            self.tick,
            events.food_eaten,
            events.deaths.len(),
            events.revivals.len(),
            self.food.len(),
            self.respawn_queue.len()
        );
        events
    }

    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Counts down dead agents (reviving those that reach zero) and credits a tick of
    /// survival to everyone else. A revived agent sits the rest of its revival tick out.
    pub fn advance_lifecycle(&mut self) -> Vec<AgentId> {
        let mut revived = Vec::new();
        for agent in &mut self.agents {
            if agent.alive {
                agent.resting = false;
                agent.alive_ticks += 1;
            } else if lifecycle::count_down(agent, &self.arena, &mut self.rng) {
                revived.push(agent.id);
            }
        }
        revived
    }

    /// Re-evaluates intents on decision ticks, then decays every acting agent's ignore-timers.
    /// An interval of zero never fires.
    pub fn run_decisions(&mut self) {
        let decision_config = &self.config.decision;
        let interval = decision_config.interval_ticks;
        if interval > 0 && self.tick % interval == 0 {
            // every intent is computed from the same pre-decision state
            let intents: Vec<_> = self
                .agents
                .iter()
                .map(|agent| {
                    (agent.is_acting() && !agent.is_player())
                        .then(|| decide(agent, &self.agents, &self.food, decision_config))
                })
                .collect();
            for (agent, intent) in self.agents.iter_mut().zip(intents) {
                if let Some(intent) = intent {
                    apply_intent(agent, intent, decision_config);
                }
            }
        }
        for agent in self.agents.iter_mut().filter(|agent| agent.is_acting()) {
            agent.decay_ignore_timers();
        }
    }

    pub fn move_agents(&mut self) {
        for agent in &mut self.agents {
            move_agent(agent, &self.arena);
        }
    }

    /// Every acting head eats all food within the eat radius, in agent order, so a food
    /// reached by two heads in the same tick goes to the first. Each eaten food queues
    /// one fresh random position for later release.
    pub fn consume_food(&mut self) -> usize {
        let eat_radius = self.config.food.eat_radius;
        let mut eaten = 0;
        for agent in self.agents.iter_mut().filter(|agent| agent.is_acting()) {
            let Some(head) = agent.head() else {
                continue;
            };
            // back to front so swap_remove never skips an unvisited item
            for index in (0..self.food.len()).rev() {
                if head.distance(self.food[index]) < eat_radius {
                    self.food.swap_remove(index);
                    agent.eat();
                    self.respawn_queue
                        .enqueue(self.arena.random_position(&mut self.rng));
                    eaten += 1;
                }
            }
        }
        eaten
    }

    /// Kills every acting agent whose head touches another live body, then checks
    /// self-contact for the survivors. An agent dies at most once per tick.
    pub fn resolve_collisions(&mut self) -> Vec<AgentId> {
        let collision = self.config.collision.clone();
        let mut deaths = Vec::new();

        for index in 0..self.agents.len() {
            if !self.agents[index].is_acting() {
                continue;
            }
            if let Some(victim) = find_contact(&self.agents, index, &collision) {
                log::debug!(
                    "{} ran into {}",
                    self.agents[index].name,
                    self.agents[victim].name
                );
                self.kill(index);
                deaths.push(AgentId(index));
            }
        }

        if collision.self_collision {
            for index in 0..self.agents.len() {
                let agent = &self.agents[index];
                if agent.is_acting() && touches_self(agent, &collision) {
                    log::debug!("{} ran into itself", agent.name);
                    self.kill(index);
                    deaths.push(AgentId(index));
                }
            }
        }
        deaths
    }

    pub fn release_respawn(&mut self) -> bool {
        match self
            .respawn_queue
            .release(self.tick, self.config.food.respawn_interval_ticks)
        {
            Some(position) => {
                self.food.push(position);
                true
            }
            None => false,
        }
    }

    fn kill(&mut self, index: usize) -> usize {
        let agents_config = &self.config.agents;
        lifecycle::kill(
            &mut self.agents[index],
            &mut self.food,
            agents_config.death_ticks,
            agents_config.corpse_jitter,
            &self.arena,
            &mut self.rng,
        )
    }

    /// Sets the travel direction of a player-controlled agent. A zero vector stops it.
    pub fn set_player_direction(&mut self, id: AgentId, direction: Vec2) -> Result<(), WorldError> {
        let agent = self
            .agents
            .get_mut(id.0)
            .ok_or(WorldError::UnknownAgent(id.0))?;
        if !agent.is_player() {
            return Err(WorldError::NotPlayerControlled(id.0));
        }
        if !direction.is_finite() {
            log::warn!("ignoring non-finite direction {direction:?} for {}", agent.name);
            return Ok(());
        }
        agent.steer = (direction != Vec2::ZERO).then_some(direction);
        Ok(())
    }

    /// Points a player-controlled agent at `pointer`, as a mouse cursor would.
    pub fn steer_player_toward(&mut self, id: AgentId, pointer: Vec2) -> Result<(), WorldError> {
        let head = self
            .agents
            .get(id.0)
            .ok_or(WorldError::UnknownAgent(id.0))?
            .head();
        match head {
            Some(head) => self.set_player_direction(id, pointer - head),
            // dead: keep validating the id but there is nothing to steer
            None => self.set_player_direction(id, Vec2::ZERO),
        }
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            width: self.arena.width,
            height: self.arena.height,
            agents: self.agents.iter().map(AgentView::from).collect(),
            food: self.food.clone(),
            respawn_queue_len: self.respawn_queue.len(),
        }
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|agent| agent.alive).count()
    }

    pub fn player_id(&self) -> Option<AgentId> {
        self.agents.iter().find(|agent| agent.is_player()).map(|agent| agent.id)
    }

    /// Scatters `count` extra food at random positions.
    pub fn spawn_food(&mut self, count: usize) {
        for _ in 0..count {
            let position = self.arena.random_position(&mut self.rng);
            self.food.push(position);
        }
    }
}

// --- End of File: simulation.rs ---
