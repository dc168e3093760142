//! Semi-implicit (symplectic) Euler integration.

use crate::core::Vec2;
use crate::domain::RigidBody;

/// Advance one body by `dt` seconds.
///
/// Velocity integrates first, position uses the *updated* velocity. That
/// ordering is what distinguishes semi-implicit Euler from explicit Euler
/// and is required for stability; do not "fix" it.
///
/// Static bodies (`inv_mass == 0`) are skipped entirely.
pub fn integrate(body: &mut RigidBody, gravity: Vec2, dt: f32) {
    if body.inv_mass == 0.0 {
        return;
    }

    let acceleration = body.force * body.inv_mass + gravity;
    body.velocity.add_scaled(acceleration, dt);
    body.position.add_scaled(body.velocity, dt);

    body.angular_velocity += body.torque * body.inv_inertia * dt;
    body.angle += body.angular_velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Shape;

    fn unit_circle(mass: f32) -> RigidBody {
        RigidBody::new(Vec2::zero(), Shape::Circle { radius: 1.0 }, mass).unwrap()
    }

    #[test]
    fn static_body_ignores_gravity_and_force() {
        let mut body = unit_circle(0.0);
        body.apply_force(Vec2::new(100.0, 100.0));
        integrate(&mut body, Vec2::new(0.0, 9.81), 1.0 / 60.0);
        assert_eq!(body.position, Vec2::zero());
        assert_eq!(body.velocity, Vec2::zero());
    }

    #[test]
    fn velocity_updates_before_position() {
        let mut body = unit_circle(1.0);
        let dt = 0.5;
        let g = Vec2::new(0.0, 10.0);
        integrate(&mut body, g, dt);
        // Semi-implicit: v = g*dt first, then x = v*dt (not 0.5*g*dt^2).
        assert!((body.velocity.y - 5.0).abs() < 1e-6);
        assert!((body.position.y - 2.5).abs() < 1e-6);
    }

    #[test]
    fn force_contributes_through_inverse_mass() {
        let mut body = unit_circle(2.0);
        body.apply_force(Vec2::new(4.0, 0.0));
        integrate(&mut body, Vec2::zero(), 1.0);
        // a = F/m = 2
        assert!((body.velocity.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn torque_spins_body() {
        let mut body = unit_circle(1.0);
        body.apply_torque(1.0);
        integrate(&mut body, Vec2::zero(), 1.0);
        // I = 0.5 for unit circle of mass 1 -> alpha = 2
        assert!((body.angular_velocity - 2.0).abs() < 1e-5);
        assert!((body.angle - 2.0).abs() < 1e-5);
    }
}
