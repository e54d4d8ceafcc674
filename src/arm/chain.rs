//! Planar joint-chain forward kinematics.

use glam::Vec2;

/// One link of a planar chain: a joint angle plus the rigid segment it
/// carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Joint angle in degrees, relative to the previous link.
    pub angle: f32,
    /// Segment length.
    pub length: f32,
}

/// Transform of one link for rendering: where the segment starts and the
/// absolute direction it points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkTransform {
    /// Segment origin in world space.
    pub origin: Vec2,
    /// Cumulative angle in degrees (sum of all joint angles up to and
    /// including this link).
    pub angle: f32,
    /// Segment length.
    pub length: f32,
}

/// Ordered sequence of (angle, length) links rooted at a fixed position.
///
/// The end effector is the forward-kinematic result of walking the chain:
/// each link contributes `length·(cos Σ, sin Σ)` where Σ is the cumulative
/// angle sum through that link.
#[derive(Debug, Clone, PartialEq)]
pub struct JointChain {
    root: Vec2,
    links: Vec<Link>,
}

impl JointChain {
    /// Create a chain from a root position and its links.
    #[must_use]
    pub fn new(root: Vec2, links: Vec<Link>) -> Self {
        Self { root, links }
    }

    /// Number of links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain has no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Root position.
    #[must_use]
    pub fn root(&self) -> Vec2 {
        self.root
    }

    /// Joint angle in degrees, if the joint exists.
    #[must_use]
    pub fn angle(&self, joint: usize) -> Option<f32> {
        self.links.get(joint).map(|l| l.angle)
    }

    /// Set a joint angle in degrees. Out-of-range joints are ignored.
    pub fn set_angle(&mut self, joint: usize, degrees: f32) {
        if let Some(link) = self.links.get_mut(joint) {
            link.angle = degrees;
        }
    }

    /// Add `delta` degrees to a joint angle. Out-of-range joints are ignored.
    pub fn step_angle(&mut self, joint: usize, delta: f32) {
        if let Some(link) = self.links.get_mut(joint) {
            link.angle += delta;
        }
    }

    /// Sum of all joint angles in degrees (the effector's absolute
    /// orientation).
    #[must_use]
    pub fn total_angle(&self) -> f32 {
        self.links.iter().map(|l| l.angle).sum()
    }

    /// Forward-kinematic end-effector position.
    #[must_use]
    pub fn end_effector_position(&self) -> Vec2 {
        let mut position = self.root;
        let mut cumulative = 0.0f32;
        for link in &self.links {
            cumulative += link.angle;
            let rad = cumulative.to_radians();
            position += link.length * Vec2::new(rad.cos(), rad.sin());
        }
        position
    }

    /// Per-link transforms (origin, absolute angle, length) for rendering.
    #[must_use]
    pub fn link_transforms(&self) -> Vec<LinkTransform> {
        let mut transforms = Vec::with_capacity(self.links.len());
        let mut position = self.root;
        let mut cumulative = 0.0f32;
        for link in &self.links {
            cumulative += link.angle;
            transforms.push(LinkTransform {
                origin: position,
                angle: cumulative,
                length: link.length,
            });
            let rad = cumulative.to_radians();
            position += link.length * Vec2::new(rad.cos(), rad.sin());
        }
        transforms
    }
}
