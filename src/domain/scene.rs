use serde::Deserialize;

use crate::core::Vec2;

use super::body::RigidBody;
use super::config::WorldConfig;
use super::shape::Shape;

/// Declarative scene document: optional config plus a list of bodies.
///
/// This is how a host sets up a whole simulation in one call instead of
/// issuing spawn commands one by one.
#[derive(Deserialize)]
pub struct SceneRoot {
    #[serde(default)]
    pub config: Option<WorldConfig>,
    #[serde(default)]
    pub bodies: Vec<SceneBody>,
}

#[derive(Deserialize)]
pub struct SceneBody {
    pub shape: SceneShape,
    pub position: [f32; 2],
    #[serde(default)]
    pub velocity: [f32; 2],
    #[serde(default)]
    pub angle: f32,
    #[serde(default)]
    pub angular_velocity: f32,
    /// 0 = static body.
    #[serde(default)]
    pub mass: f32,
    #[serde(default)]
    pub restitution: Option<f32>,
    #[serde(default)]
    pub static_friction: Option<f32>,
    #[serde(default)]
    pub dynamic_friction: Option<f32>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SceneShape {
    Circle { radius: f32 },
    Box { width: f32, height: f32 },
    Polygon { vertices: Vec<[f32; 2]> },
}

impl SceneRoot {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let scene: SceneRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        if let Some(config) = &scene.config {
            config.validate()?;
        }
        Ok(scene)
    }
}

impl SceneBody {
    /// Build the runtime body. Shape validation happens inside
    /// `RigidBody::new`, so a malformed scene fails here, before anything
    /// is registered.
    pub fn build(&self) -> Result<RigidBody, String> {
        let shape = match &self.shape {
            SceneShape::Circle { radius } => Shape::Circle { radius: *radius },
            SceneShape::Box { width, height } => Shape::new_box(*width, *height),
            SceneShape::Polygon { vertices } => Shape::Polygon {
                vertices: vertices.iter().map(|v| Vec2::new(v[0], v[1])).collect(),
            },
        };

        let mut body = RigidBody::new(
            Vec2::new(self.position[0], self.position[1]),
            shape,
            self.mass,
        )?;
        body.velocity = Vec2::new(self.velocity[0], self.velocity[1]);
        body.angle = self.angle;
        body.angular_velocity = self.angular_velocity;
        if let Some(r) = self.restitution {
            body.set_restitution(r);
        }
        let sf = self.static_friction.unwrap_or(body.static_friction);
        let df = self.dynamic_friction.unwrap_or(body.dynamic_friction);
        body.set_friction(sf, df);
        Ok(body)
    }
}
