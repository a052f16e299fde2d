use crate::agent::{Agent, Controller};
use crate::arena::Arena;
use glam::Vec2;

/// Direction the agent wants to travel this tick, if any.
///
/// Autonomous agents head for `current_target`; player agents follow `steer`.
pub fn desired_direction(agent: &Agent) -> Option<Vec2> {
    let head = agent.head()?;
    let direction = match agent.controller {
        Controller::Autonomous => agent.current_target? - head,
        Controller::Player => agent.steer?,
    };
    Some(direction)
}

/// Advances the head `speed` units along `direction`, wraps it into the arena and trims the
/// tail down to `target_length`. Returns false when the agent held position.
pub fn advance(agent: &mut Agent, direction: Vec2, arena: &Arena) -> bool {
    let Some(head) = agent.head() else {
        return false;
    };
    let unit = direction.normalize_or_zero();
    if unit == Vec2::ZERO {
        return false;
    }
    let new_head = arena.wrap(head + unit * agent.speed);
    agent.body.push_back(new_head);
    while agent.body.len() > agent.target_length {
        agent.body.pop_front();
    }
    true
}

/// Moves a live agent along its desired direction; a no-op when there is none.
pub fn move_agent(agent: &mut Agent, arena: &Arena) -> bool {
    if !agent.is_acting() {
        return false;
    }
    match desired_direction(agent) {
        Some(direction) => advance(agent, direction, arena),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentId;
    use crate::config::RosterEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn agent_at(position: Vec2, speed: f32) -> Agent {
        let mut rng = StdRng::seed_from_u64(11);
        let arena = Arena::new(600.0, 600.0);
        let mut agent = Agent::spawn(
            AgentId(0),
            &RosterEntry::autonomous("Blue", [0.0, 0.0, 1.0, 1.0]),
            speed,
            &arena,
            &mut rng,
        );
        agent.set_body([position]);
        agent
    }

    #[test]
    fn wraps_across_the_right_and_bottom_edges() {
        let arena = Arena::new(600.0, 600.0);

        let mut agent = agent_at(Vec2::new(599.0, 300.0), 1.0);
        agent.current_target = Some(Vec2::new(700.0, 300.0));
        assert!(move_agent(&mut agent, &arena));
        assert_eq!(agent.head(), Some(Vec2::new(0.0, 300.0)));

        let mut agent = agent_at(Vec2::new(300.0, 599.0), 1.0);
        agent.current_target = Some(Vec2::new(300.0, 900.0));
        assert!(move_agent(&mut agent, &arena));
        assert_eq!(agent.head(), Some(Vec2::new(300.0, 0.0)));
    }

    #[test]
    fn steps_exactly_speed_units_toward_target() {
        let arena = Arena::new(600.0, 600.0);
        let mut agent = agent_at(Vec2::new(100.0, 100.0), 2.0);
        agent.current_target = Some(Vec2::new(100.0, 50.0));
        move_agent(&mut agent, &arena);
        assert_eq!(agent.head(), Some(Vec2::new(100.0, 98.0)));
        // length 1: the old head is dropped
        assert_eq!(agent.body.len(), 1);
    }

    #[test]
    fn body_never_exceeds_target_length() {
        let arena = Arena::new(600.0, 600.0);
        let mut agent = agent_at(Vec2::new(10.0, 10.0), 2.2);
        agent.target_length = 4;
        agent.current_target = Some(Vec2::new(500.0, 10.0));
        for _ in 0..10 {
            move_agent(&mut agent, &arena);
            assert!(agent.body.len() <= agent.target_length);
        }
        assert_eq!(agent.body.len(), 4);
    }

    #[test]
    fn holds_position_without_target() {
        let arena = Arena::new(600.0, 600.0);
        let mut agent = agent_at(Vec2::new(42.0, 42.0), 2.2);
        assert!(!move_agent(&mut agent, &arena));
        assert_eq!(agent.head(), Some(Vec2::new(42.0, 42.0)));

        // target on the head itself gives a zero direction
        agent.current_target = Some(Vec2::new(42.0, 42.0));
        assert!(!move_agent(&mut agent, &arena));
        assert_eq!(agent.body.len(), 1);
    }

    #[test]
    fn player_follows_steering_not_target() {
        let arena = Arena::new(600.0, 600.0);
        let mut agent = agent_at(Vec2::new(50.0, 50.0), 1.0);
        agent.controller = Controller::Player;
        agent.current_target = Some(Vec2::new(0.0, 50.0));
        assert!(!move_agent(&mut agent, &arena));

        agent.steer = Some(Vec2::new(0.0, 3.0));
        assert!(move_agent(&mut agent, &arena));
        assert_eq!(agent.head(), Some(Vec2::new(50.0, 51.0)));
    }
}
