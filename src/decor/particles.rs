use rand::Rng;

/// Placement and timing of one floating particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal offset, percent of the container width.
    pub left: f64,
    /// Seconds.
    pub delay: f64,
    /// Seconds.
    pub duration: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..15.0),
            duration: 10.0 + rng.gen_range(0.0..10.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; animation-delay: {:.3}s; animation-duration: {:.3}s;",
            self.left, self.delay, self.duration
        )
    }
}

pub fn scatter_particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn particles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = scatter_particles(&mut rng, 500);
        assert_eq!(particles.len(), 500);
        for particle in particles {
            assert!((0.0..100.0).contains(&particle.left));
            assert!((0.0..15.0).contains(&particle.delay));
            assert!((10.0..20.0).contains(&particle.duration));
        }
    }

    #[test]
    fn style_lists_all_properties() {
        let spec = ParticleSpec {
            left: 12.5,
            delay: 3.0,
            duration: 14.25,
        };
        assert_eq!(
            spec.style(),
            "left: 12.500%; animation-delay: 3.000s; animation-duration: 14.250s;"
        );
    }
}
