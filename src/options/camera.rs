use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Look sensitivity: degrees of rotation per pixel of pointer motion.
    #[schemars(title = "Look Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub sensitivity: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// Flip the vertical look direction.
    ///
    /// The original control scheme's two pointer entry points disagreed on
    /// this sign, so it is explicit: unset, downward pointer motion pitches
    /// the view down; set, it pitches up.
    #[schemars(title = "Invert Vertical Look")]
    pub invert_look_y: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            sensitivity: 0.1,
            move_speed: 2.5,
            invert_look_y: false,
        }
    }
}
