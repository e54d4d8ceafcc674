use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbiting-body spawn and animation parameters.
pub struct OrbitOptions {
    /// Number of bodies spawned at scene init.
    #[schemars(title = "Bodies", range(min = 1, max = 64))]
    pub body_count: usize,
    /// Minimum orbit radius.
    #[schemars(title = "Min Radius", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub radius_min: f32,
    /// Maximum orbit radius.
    #[schemars(title = "Max Radius", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub radius_max: f32,
    /// Minimum angular rate in radians per second.
    #[schemars(skip)]
    pub rate_min: f32,
    /// Maximum angular rate in radians per second.
    #[schemars(skip)]
    pub rate_max: f32,
    /// Self-rotation rate in degrees per second.
    #[schemars(title = "Spin Rate", range(min = 0.0, max = 360.0), extend("step" = 5.0))]
    pub spin_rate: f32,
    /// Fixed vertical offset applied to every body position.
    #[schemars(skip)]
    pub vertical_bias: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            body_count: 6,
            radius_min: 1.5,
            radius_max: 3.5,
            rate_min: 0.2,
            rate_max: 1.2,
            spin_rate: 90.0,
            vertical_bias: 1.0,
        }
    }
}
