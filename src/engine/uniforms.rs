//! Per-object uniform packing for the rendering backend.
//!
//! Each drawable is described by one [`ObjectUniform`] packed by a
//! [`ShadeMode`] variant. The mode is a closed enum with one packing
//! function arm per variant; backends dispatch on the packed `mode` tag
//! rather than on strings.

use glam::{Mat4, Vec3};

/// Phong material and light constants for lit shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient reflection coefficient.
    pub ambient: f32,
    /// Diffuse reflection coefficient.
    pub diffuse: f32,
    /// Specular reflection coefficient.
    pub specular: f32,
    /// Specular exponent.
    pub shininess: f32,
    /// World-space point light position.
    pub light_position: Vec3,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            diffuse: 0.7,
            specular: 0.5,
            shininess: 32.0,
            light_position: Vec3::new(5.0, 5.0, 5.0),
        }
    }
}

/// How an object's uniforms are packed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadeMode {
    /// Phong-lit surface; packs the normal matrix and material terms.
    Lit(Material),
    /// Flat color, no lighting terms.
    Unlit,
    /// Sky pass: drawn at infinity, color acts as a tint.
    Sky,
}

/// Packed `mode` tag for [`ShadeMode::Lit`].
pub const MODE_LIT: u32 = 0;
/// Packed `mode` tag for [`ShadeMode::Unlit`].
pub const MODE_UNLIT: u32 = 1;
/// Packed `mode` tag for [`ShadeMode::Sky`].
pub const MODE_SKY: u32 = 2;

/// Packed per-object uniform data for the rendering backend.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    /// Combined model-view-projection matrix.
    pub mvp: [[f32; 4]; 4],
    /// Inverse-transpose of the model matrix (identity for unlit modes).
    pub normal_matrix: [[f32; 4]; 4],
    /// Object RGB color.
    pub color: [f32; 3],
    /// Shade mode tag ([`MODE_LIT`], [`MODE_UNLIT`], [`MODE_SKY`]).
    pub mode: u32,
    /// World-space light position (lit mode only).
    pub light_position: [f32; 3],
    /// Specular exponent (lit mode only).
    pub shininess: f32,
    /// Ambient coefficient (lit mode only).
    pub ambient: f32,
    /// Diffuse coefficient (lit mode only).
    pub diffuse: f32,
    /// Specular coefficient (lit mode only).
    pub specular: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl ShadeMode {
    /// Pack one object's uniforms: mvp = view_proj · model, plus whatever
    /// the variant needs.
    #[must_use]
    pub fn pack(
        &self,
        model: Mat4,
        view_proj: Mat4,
        color: Vec3,
    ) -> ObjectUniform {
        let mvp = (view_proj * model).to_cols_array_2d();
        match self {
            Self::Lit(material) => ObjectUniform {
                mvp,
                normal_matrix: model
                    .inverse()
                    .transpose()
                    .to_cols_array_2d(),
                color: color.to_array(),
                mode: MODE_LIT,
                light_position: material.light_position.to_array(),
                shininess: material.shininess,
                ambient: material.ambient,
                diffuse: material.diffuse,
                specular: material.specular,
                _pad: 0.0,
            },
            Self::Unlit => ObjectUniform {
                mvp,
                normal_matrix: Mat4::IDENTITY.to_cols_array_2d(),
                color: color.to_array(),
                mode: MODE_UNLIT,
                light_position: [0.0; 3],
                shininess: 0.0,
                ambient: 0.0,
                diffuse: 0.0,
                specular: 0.0,
                _pad: 0.0,
            },
            Self::Sky => ObjectUniform {
                mvp,
                normal_matrix: Mat4::IDENTITY.to_cols_array_2d(),
                color: color.to_array(),
                mode: MODE_SKY,
                light_position: [0.0; 3],
                shininess: 0.0,
                ambient: 0.0,
                diffuse: 0.0,
                specular: 0.0,
                _pad: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_mode_packs_material_and_normal_matrix() {
        let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let uniform = ShadeMode::Lit(Material::default()).pack(
            model,
            Mat4::IDENTITY,
            Vec3::ONE,
        );
        assert_eq!(uniform.mode, MODE_LIT);
        assert_eq!(uniform.light_position, [5.0, 5.0, 5.0]);
        assert_eq!(uniform.shininess, 32.0);
        assert_eq!(uniform.ambient, 0.2);
        // Inverse-transpose of a pure translation is the identity in the
        // rotational block but carries the offset in the last row.
        let expected = model.inverse().transpose().to_cols_array_2d();
        assert_eq!(uniform.normal_matrix, expected);
    }

    #[test]
    fn unlit_mode_zeroes_lighting_terms() {
        let uniform = ShadeMode::Unlit.pack(
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            Vec3::new(0.8, 0.3, 0.2),
        );
        assert_eq!(uniform.mode, MODE_UNLIT);
        assert_eq!(uniform.light_position, [0.0; 3]);
        assert_eq!(uniform.shininess, 0.0);
        assert_eq!(uniform.color, [0.8, 0.3, 0.2]);
        assert_eq!(
            uniform.normal_matrix,
            Mat4::IDENTITY.to_cols_array_2d()
        );
    }

    #[test]
    fn mvp_composes_view_proj_and_model() {
        let model = Mat4::from_rotation_z(1.0);
        let view_proj = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
        let uniform = ShadeMode::Sky.pack(model, view_proj, Vec3::ONE);
        assert_eq!(uniform.mode, MODE_SKY);
        assert_eq!(uniform.mvp, (view_proj * model).to_cols_array_2d());
    }
}
