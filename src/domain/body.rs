use crate::core::{Aabb, Vec2};

use super::shape::Shape;

/// Rigid body - complete physical state of one simulated object.
///
/// Static bodies are modeled purely through `inv_mass == 0.0` and
/// `inv_inertia == 0.0`; there is no flag anywhere, integration and the
/// resolver multiply by the inverses and static bodies fall out naturally.
#[derive(Clone, Debug)]
pub struct RigidBody {
    /// Unique ID, assigned by the simulation, stable for the body's lifetime.
    pub id: u32,

    // === Linear state ===
    pub position: Vec2,
    pub velocity: Vec2,
    /// Accumulated force, cleared at the end of every step.
    pub force: Vec2,

    // === Angular state ===
    /// Orientation (radians)
    pub angle: f32,
    /// Angular velocity (radians per second)
    pub angular_velocity: f32,
    /// Accumulated torque, cleared at the end of every step.
    pub torque: f32,

    // === Mass properties ===
    pub mass: f32,
    pub inv_mass: f32,
    pub inertia: f32,
    pub inv_inertia: f32,

    // === Material ===
    /// Bounciness, clamped to [0, 1].
    pub restitution: f32,
    pub static_friction: f32,
    pub dynamic_friction: f32,

    pub shape: Shape,
}

impl RigidBody {
    /// Create a body at `position`. `mass == 0.0` means static (immovable).
    ///
    /// The shape is validated here; a degenerate shape is a registration
    /// error, never a collision-time surprise.
    pub fn new(position: Vec2, shape: Shape, mass: f32) -> Result<Self, String> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(format!("mass must be finite and >= 0, got {}", mass));
        }
        if !position.is_finite() {
            return Err("position must be finite".to_string());
        }
        let shape = shape.into_valid()?;

        let (inv_mass, inertia, inv_inertia) = if mass == 0.0 {
            (0.0, f32::INFINITY, 0.0)
        } else {
            let inertia = shape.inertia(mass);
            (1.0 / mass, inertia, 1.0 / inertia)
        };

        Ok(Self {
            id: 0,
            position,
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            angle: 0.0,
            angular_velocity: 0.0,
            torque: 0.0,
            mass,
            inv_mass,
            inertia,
            inv_inertia,
            restitution: 0.2,
            static_friction: 0.5,
            dynamic_friction: 0.3,
            shape,
        })
    }

    /// Accumulate a force for the next step.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Accumulate a torque for the next step.
    pub fn apply_torque(&mut self, torque: f32) {
        self.torque += torque;
    }

    /// Instantaneous momentum change at the center of mass.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.add_scaled(impulse, self.inv_mass);
    }

    /// Instantaneous momentum change at contact offset `r` from the center.
    /// Also spins the body (r x j drives the angular part).
    pub fn apply_impulse_at(&mut self, impulse: Vec2, r: Vec2) {
        self.velocity.add_scaled(impulse, self.inv_mass);
        self.angular_velocity += r.cross(impulse) * self.inv_inertia;
    }

    /// Velocity of the material point at world-space `point`.
    pub fn velocity_at(&self, point: Vec2) -> Vec2 {
        self.velocity + Vec2::cross_scalar(self.angular_velocity, point - self.position)
    }

    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }

    pub fn set_friction(&mut self, static_friction: f32, dynamic_friction: f32) {
        self.static_friction = static_friction.max(0.0);
        self.dynamic_friction = dynamic_friction.max(0.0);
    }

    pub fn clear_forces(&mut self) {
        self.force = Vec2::zero();
        self.torque = 0.0;
    }

    /// Current world-space bounding box.
    pub fn aabb(&self) -> Aabb {
        self.shape.aabb(self.position, self.angle)
    }
}
