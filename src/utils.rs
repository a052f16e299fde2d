use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

// --- Helper Functions ---

pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::from_angle(rng.gen_range(0.0..TAU))
}

// Random direction, random length in [0, max_offset).
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, max_offset: f32) -> Vec2 {
    if max_offset <= 0.0 {
        return Vec2::ZERO;
    }
    random_unit_vector(rng) * rng.gen_range(0.0..max_offset)
}

/// Index and distance of the point nearest to `origin`, skipping any point rejected by `keep`.
pub fn nearest_point<'a, I, F>(origin: Vec2, points: I, mut keep: F) -> Option<(usize, f32)>
where
    I: IntoIterator<Item = &'a Vec2>,
    F: FnMut(Vec2) -> bool,
{
    let mut best: Option<(usize, f32)> = None;
    for (index, &point) in points.into_iter().enumerate() {
        if !keep(point) {
            continue;
        }
        let dist = origin.distance(point);
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((index, dist));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn jitter_is_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            assert!(jitter(&mut rng, 2.0).length() < 2.0 + 1e-4);
        }
        assert_eq!(jitter(&mut rng, 0.0), Vec2::ZERO);
    }

    #[test]
    fn nearest_point_respects_filter() {
        let points = [Vec2::new(1.0, 0.0), Vec2::new(5.0, 0.0), Vec2::new(3.0, 0.0)];
        assert_eq!(nearest_point(Vec2::ZERO, &points, |_| true).map(|(i, _)| i), Some(0));
        let picked = nearest_point(Vec2::ZERO, &points, |p| p.x > 1.5);
        assert_eq!(picked.map(|(i, _)| i), Some(2));
        assert!(nearest_point(Vec2::ZERO, &points, |_| false).is_none());
    }
}
