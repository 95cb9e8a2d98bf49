//! Floating background particles

use rand::Rng;

/// A decorative dot. Positions are percentages of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(2.0..6.0),
            speed: rng.gen_range(0.1..0.4),
            opacity: rng.gen_range(0.3..0.8),
        }
    }

    /// Drift for one tick at `clock_ms`; vertical position wraps at 100
    pub fn drift(&mut self, clock_ms: u64) {
        self.y = (self.y + self.speed * 0.01).rem_euclid(100.0);
        self.x += (clock_ms as f64 * 0.0001 + self.id as f64).sin() * 0.02;
    }
}

/// Fixed-size set of particles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            particles: (0..count).map(|id| Particle::random(id, rng)).collect(),
        }
    }

    pub fn tick(&mut self, clock_ms: u64) {
        for particle in &mut self.particles {
            particle.drift(clock_ms);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::rngs::SmallRng;
    use rstest::rstest;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = ParticleField::generate(20, &mut SmallRng::seed_from_u64(42));
        let b = ParticleField::generate(20, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
    }

    #[test]
    fn test_initial_ranges() {
        let field = ParticleField::generate(200, &mut SmallRng::seed_from_u64(1));
        for p in field.particles() {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((2.0..6.0).contains(&p.size));
            assert!((0.1..0.4).contains(&p.speed));
            assert!((0.3..0.8).contains(&p.opacity));
        }
    }

    #[test]
    fn test_vertical_wrap() {
        let mut particle = Particle {
            id: 0,
            x: 50.0,
            y: 99.999,
            size: 3.0,
            speed: 0.3,
            opacity: 0.5,
        };
        particle.drift(0);
        assert!(particle.y < 1.0, "y = {}", particle.y);
        // sin(0) == 0, so particle 0 does not drift sideways at clock 0
        assert_eq!(particle.x, 50.0);
    }

    #[rstest]
    #[case(3, 10_000, 49.984_863_950_093_84)]
    #[case(1, 5_000, 50.019_949_899_732_08)]
    #[case(7, 20_000, 50.008_242_369_704_84)]
    fn test_horizontal_drift(#[case] id: usize, #[case] clock_ms: u64, #[case] expected_x: f64) {
        let mut particle = Particle {
            id,
            x: 50.0,
            y: 10.0,
            size: 3.0,
            speed: 0.2,
            opacity: 0.5,
        };
        particle.drift(clock_ms);
        assert!(
            (particle.x - expected_x).abs() < 1e-9,
            "x = {}, expected {}",
            particle.x,
            expected_x
        );
        assert!((particle.y - 10.002).abs() < 1e-9, "y = {}", particle.y);
    }

    #[test]
    fn test_tick_keeps_field_in_bounds() {
        let mut field = ParticleField::generate(20, &mut SmallRng::seed_from_u64(9));
        for step in 0..10_000u64 {
            field.tick(step * 2000);
        }
        assert!(field.particles().iter().all(|p| (0.0..100.0).contains(&p.y)));
    }
}
