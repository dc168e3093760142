use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Global simulation parameters.
///
/// Loaded from JSON by the host (`World::load_config`) or adjusted through
/// the scalar setters on the facade. All fields have working defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Uniform acceleration applied to every dynamic body (m/s^2, y down).
    pub gravity: Vec2,
    /// Seconds advanced per physics step. The driver never varies this.
    pub fixed_dt: f32,
    /// Fraction of the residual penetration corrected per step. Fully
    /// correcting in one step overshoots and oscillates.
    pub correction_percent: f32,
    /// Penetration below this is left alone to avoid resting jitter.
    pub correction_slop: f32,
    /// Catch-up bound for `tick`: at most this many fixed steps per host tick.
    pub max_steps_per_tick: u32,
    /// Broad-phase cell size. 0 = derive from the average body bounds.
    pub cell_size: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 9.81),
            fixed_dt: 1.0 / 60.0,
            correction_percent: 0.4,
            correction_slop: 0.01,
            max_steps_per_tick: 5,
            cell_size: 0.0,
        }
    }
}

impl WorldConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: WorldConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.fixed_dt.is_finite() || self.fixed_dt <= 0.0 {
            return Err(format!("fixed_dt must be > 0, got {}", self.fixed_dt));
        }
        if !(0.0..=1.0).contains(&self.correction_percent) {
            return Err(format!(
                "correction_percent must be in [0, 1], got {}",
                self.correction_percent
            ));
        }
        if !self.correction_slop.is_finite() || self.correction_slop < 0.0 {
            return Err(format!(
                "correction_slop must be >= 0, got {}",
                self.correction_slop
            ));
        }
        if self.max_steps_per_tick == 0 {
            return Err("max_steps_per_tick must be >= 1".to_string());
        }
        if !self.cell_size.is_finite() || self.cell_size < 0.0 {
            return Err(format!("cell_size must be >= 0, got {}", self.cell_size));
        }
        if !self.gravity.is_finite() {
            return Err("gravity must be finite".to_string());
        }
        Ok(())
    }
}
