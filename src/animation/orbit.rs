//! Spherical-orbit body animation.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};
use rand::Rng;

use crate::options::OrbitOptions;
use crate::util::angles::wrap_tau;

/// One body on a spherical trajectory around the scene center.
///
/// Longitude `theta` and latitude `phi` are radians in `[0, 2π)`; both wrap
/// modulo 2π on every step. Latitude is deliberately *not* renormalized into
/// `[0, π]`: the Cartesian mapping stays continuous either way, it is just
/// not injective, and the wrapped form matches the observed trajectories.
/// The self-spin angle is degrees and unbounded; it is only ever used as a
/// rotation argument.
#[derive(Debug, Clone)]
pub struct OrbitBody {
    /// Longitude angle in radians.
    pub theta: f32,
    /// Latitude angle in radians.
    pub phi: f32,
    /// Longitude angular rate in radians per second.
    pub theta_rate: f32,
    /// Latitude angular rate in radians per second.
    pub phi_rate: f32,
    /// Self-rotation angle in degrees, unbounded.
    pub spin: f32,
    /// Self-rotation rate in degrees per second.
    pub spin_rate: f32,
    /// Orbit radius.
    pub radius: f32,
    /// Body RGB color.
    pub color: [f32; 3],
}

impl OrbitBody {
    /// Integrate the body's angles by `dt` seconds (simple Euler step).
    pub fn advance(&mut self, dt: f32) {
        self.theta = wrap_tau(self.theta + self.theta_rate * dt);
        self.phi = wrap_tau(self.phi + self.phi_rate * dt);
        self.spin += self.spin_rate * dt;
    }

    /// Cartesian position for the current angles, offset vertically by
    /// `vertical_bias`.
    ///
    /// position = (r·sin φ·cos θ, r·cos φ, r·sin φ·sin θ) + (0, bias, 0).
    /// A pure function of the current state; no history is retained.
    #[must_use]
    pub fn position(&self, vertical_bias: f32) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(
            self.radius * sin_phi * cos_theta,
            self.radius * cos_phi + vertical_bias,
            self.radius * sin_phi * sin_theta,
        )
    }

    /// Model transform: orbit translation composed with the self-spin
    /// rotation about the body's local Y axis.
    #[must_use]
    pub fn model_matrix(&self, vertical_bias: f32) -> Mat4 {
        Mat4::from_translation(self.position(vertical_bias))
            * Mat4::from_rotation_y(self.spin.to_radians())
    }
}

/// Advances a set of [`OrbitBody`] values along their trajectories.
///
/// Bodies are created once with randomized rates, radii, and colors, and
/// live until the animator is dropped.
#[derive(Debug, Clone)]
pub struct OrbitAnimator {
    bodies: Vec<OrbitBody>,
    vertical_bias: f32,
}

impl OrbitAnimator {
    /// Spawn `opts.body_count` randomized bodies using the thread RNG.
    #[must_use]
    pub fn new(opts: &OrbitOptions) -> Self {
        Self::with_rng(opts, &mut rand::rng())
    }

    /// Spawn randomized bodies from a caller-provided RNG.
    pub fn with_rng<R: Rng + ?Sized>(opts: &OrbitOptions, rng: &mut R) -> Self {
        let bodies = (0..opts.body_count)
            .map(|_| OrbitBody {
                theta: rng.random_range(0.0..TAU),
                phi: rng.random_range(0.0..TAU),
                theta_rate: rng.random_range(opts.rate_min..=opts.rate_max),
                phi_rate: rng.random_range(opts.rate_min..=opts.rate_max),
                spin: 0.0,
                spin_rate: opts.spin_rate,
                radius: rng.random_range(opts.radius_min..=opts.radius_max),
                color: [
                    rng.random_range(0.2..1.0),
                    rng.random_range(0.2..1.0),
                    rng.random_range(0.2..1.0),
                ],
            })
            .collect();
        Self {
            bodies,
            vertical_bias: opts.vertical_bias,
        }
    }

    /// Advance every body by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for body in &mut self.bodies {
            body.advance(dt);
        }
    }

    /// The animated bodies.
    #[must_use]
    pub fn bodies(&self) -> &[OrbitBody] {
        &self.bodies
    }

    /// The fixed vertical offset applied to every body position.
    #[must_use]
    pub fn vertical_bias(&self) -> f32 {
        self.vertical_bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn body() -> OrbitBody {
        OrbitBody {
            theta: 0.5,
            phi: 1.0,
            theta_rate: 0.8,
            phi_rate: 0.3,
            spin: 0.0,
            spin_rate: 90.0,
            radius: 2.0,
            color: [1.0, 0.5, 0.25],
        }
    }

    #[test]
    fn half_steps_compose_to_full_step() {
        let dt = 0.32;
        let mut whole = body();
        whole.advance(dt);

        let mut halved = body();
        halved.advance(dt / 2.0);
        halved.advance(dt / 2.0);

        assert!((whole.theta - halved.theta).abs() < 1e-5);
        assert!((whole.phi - halved.phi).abs() < 1e-5);
        assert!((whole.spin - halved.spin).abs() < 1e-4);
    }

    #[test]
    fn angles_wrap_modulo_tau() {
        let mut b = body();
        b.theta_rate = 3.0;
        b.phi_rate = -2.0;
        for _ in 0..1000 {
            b.advance(0.1);
            assert!(b.theta >= 0.0 && b.theta < TAU);
            assert!(b.phi >= 0.0 && b.phi < TAU);
        }
    }

    #[test]
    fn spin_accumulates_unbounded() {
        let mut b = body();
        for _ in 0..100 {
            b.advance(0.1);
        }
        // 90°/s for 10 s.
        assert!((b.spin - 900.0).abs() < 1e-2);
    }

    #[test]
    fn position_is_pure_and_matches_formula() {
        let b = body();
        let bias = 1.0;
        let p1 = b.position(bias);
        let p2 = b.position(bias);
        assert_eq!(p1, p2);

        let expected = Vec3::new(
            b.radius * b.phi.sin() * b.theta.cos(),
            b.radius * b.phi.cos() + bias,
            b.radius * b.phi.sin() * b.theta.sin(),
        );
        assert!((p1 - expected).length() < 1e-6);
    }

    #[test]
    fn position_stays_on_biased_sphere() {
        let mut b = body();
        for _ in 0..50 {
            b.advance(0.07);
            let p = b.position(1.5) - Vec3::new(0.0, 1.5, 0.0);
            assert!((p.length() - b.radius).abs() < 1e-4);
        }
    }

    #[test]
    fn animator_spawns_configured_body_count() {
        let opts = OrbitOptions::default();
        let mut rng = StdRng::seed_from_u64(7);
        let animator = OrbitAnimator::with_rng(&opts, &mut rng);
        assert_eq!(animator.bodies().len(), opts.body_count);
        for b in animator.bodies() {
            assert!(b.radius >= opts.radius_min && b.radius <= opts.radius_max);
            assert!(
                b.theta_rate >= opts.rate_min && b.theta_rate <= opts.rate_max
            );
        }
    }

    #[test]
    fn seeded_spawn_is_reproducible() {
        let opts = OrbitOptions::default();
        let a = OrbitAnimator::with_rng(&opts, &mut StdRng::seed_from_u64(42));
        let b = OrbitAnimator::with_rng(&opts, &mut StdRng::seed_from_u64(42));
        for (x, y) in a.bodies().iter().zip(b.bodies()) {
            assert_eq!(x.theta, y.theta);
            assert_eq!(x.radius, y.radius);
            assert_eq!(x.color, y.color);
        }
    }
}
