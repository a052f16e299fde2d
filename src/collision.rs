use crate::agent::Agent;
use crate::config::CollisionConfig;
use glam::Vec2;
use std::collections::VecDeque;

/// True when `head` lies strictly within `radius` of any segment of `body`, ignoring the
/// `excluded` most recent segments. Segments are scanned oldest first and the scan stops
/// at the first hit.
pub fn head_touches_body(head: Vec2, body: &VecDeque<Vec2>, excluded: usize, radius: f32) -> bool {
    let scanned = body.len().saturating_sub(excluded);
    body.range(..scanned)
        .any(|&segment| head.distance(segment) < radius)
}

/// Index of the first live agent (other than `index`) whose body the head of `agents[index]`
/// runs into.
pub fn find_contact(agents: &[Agent], index: usize, config: &CollisionConfig) -> Option<usize> {
    let head = agents.get(index)?.head()?;
    agents.iter().enumerate().find_map(|(other_index, other)| {
        let hit = other_index != index
            && other.is_alive()
            && head_touches_body(
                head,
                &other.body,
                config.other_excluded_segments,
                config.contact_radius,
            );
        hit.then_some(other_index)
    })
}

pub fn touches_self(agent: &Agent, config: &CollisionConfig) -> bool {
    match agent.head() {
        Some(head) => head_touches_body(
            head,
            &agent.body,
            config.self_excluded_segments,
            config.contact_radius,
        ),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentId;
    use crate::arena::Arena;
    use crate::config::RosterEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn body(points: &[(f32, f32)]) -> VecDeque<Vec2> {
        points.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
    }

    fn agent(id: usize, points: &[(f32, f32)]) -> Agent {
        let mut rng = StdRng::seed_from_u64(5);
        let arena = Arena::new(600.0, 600.0);
        let mut agent = Agent::spawn(
            AgentId(id),
            &RosterEntry::autonomous("Snake", [1.0; 4]),
            2.2,
            &arena,
            &mut rng,
        );
        agent.set_body(points.iter().map(|&(x, y)| Vec2::new(x, y)));
        agent
    }

    #[test]
    fn contact_is_strictly_inside_radius() {
        let segments = body(&[(14.0, 10.0), (40.0, 10.0)]);
        assert!(head_touches_body(Vec2::new(10.0, 10.0), &segments, 1, 8.0));
        assert!(!head_touches_body(Vec2::new(6.0, 10.0), &segments, 1, 8.0));
    }

    #[test]
    fn excluded_head_segments_never_match() {
        let segments = body(&[(100.0, 100.0), (10.0, 10.0)]);
        assert!(!head_touches_body(Vec2::new(10.0, 10.0), &segments, 1, 8.0));
        assert!(head_touches_body(Vec2::new(10.0, 10.0), &segments, 0, 8.0));
    }

    #[test]
    fn empty_body_never_matches() {
        assert!(!head_touches_body(Vec2::ZERO, &VecDeque::new(), 0, 8.0));
        assert!(!head_touches_body(Vec2::ZERO, &VecDeque::new(), 5, 8.0));
    }

    #[test]
    fn finds_first_live_victim_body() {
        let config = CollisionConfig::default();
        let mut dead = agent(1, &[(12.0, 10.0), (50.0, 50.0)]);
        dead.alive = false;
        let agents = vec![
            agent(0, &[(10.0, 10.0)]),
            dead,
            agent(2, &[(14.0, 10.0), (20.0, 10.0), (26.0, 10.0)]),
        ];
        assert_eq!(find_contact(&agents, 0, &config), Some(2));
        // agent 2's head is outside agent 0's (excluded) single segment
        assert_eq!(find_contact(&agents, 2, &config), None);
    }

    #[test]
    fn self_collision_skips_recent_segments() {
        let config = CollisionConfig::default();
        // a loop: the head returns next to the oldest segment
        let mut points: Vec<(f32, f32)> = (0..12).map(|i| (i as f32 * 5.0, 0.0)).collect();
        points.push((2.0, 3.0));
        assert!(touches_self(&agent(0, &points), &config));

        // a short straight body cannot reach its own older segments
        let straight: Vec<(f32, f32)> = (0..10).map(|i| (i as f32 * 2.0, 0.0)).collect();
        assert!(!touches_self(&agent(0, &straight), &config));
    }
}
