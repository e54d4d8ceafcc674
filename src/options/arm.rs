use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Arm", inline)]
#[serde(default)]
/// Arm chain layout and grab parameters.
pub struct ArmOptions {
    /// Chain root position.
    #[schemars(skip)]
    pub root: [f32; 2],
    /// Segment lengths, base first. The chain has one link per entry.
    #[schemars(skip)]
    pub segment_lengths: Vec<f32>,
    /// Initial joint angles in degrees; missing entries default to zero.
    #[schemars(skip)]
    pub initial_angles: Vec<f32>,
    /// Maximum effector-to-grab-point distance for a grab to succeed
    /// (exclusive).
    #[schemars(title = "Grab Threshold", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub grab_threshold: f32,
    /// Degrees added per joint-step command.
    #[schemars(title = "Joint Step", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub joint_step: f32,
    /// Target object root position while free-standing.
    #[schemars(skip)]
    pub target_position: [f32; 2],
    /// Grab point in target-local coordinates.
    #[schemars(skip)]
    pub grab_offset: [f32; 2],
    /// Target root offset from the effector while attached.
    #[schemars(skip)]
    pub attach_offset: [f32; 2],
}

impl Default for ArmOptions {
    fn default() -> Self {
        Self {
            root: [0.0, -0.4],
            segment_lengths: vec![0.3, 0.2],
            initial_angles: vec![0.0, 30.0],
            grab_threshold: 0.2,
            joint_step: 10.0,
            target_position: [0.5, 0.0],
            grab_offset: [0.0, -0.05],
            attach_offset: [0.0, 0.15],
        }
    }
}
