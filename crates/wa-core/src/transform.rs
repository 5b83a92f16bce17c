//! Local-to-world transforms.
//!
//! A `Transform` is translation, rotation and (possibly non-uniform) scale
//! relative to a parent.  World matrices are built by chaining
//! [`Transform::to_affine`] products from the scene root down, the same way
//! a scene graph composes them; non-uniform scale under rotation is not
//! representable as a single TRS, so composition happens on `Affine3A`.

use glam::{Affine3A, Quat, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub translation: Vec3,
    pub rotation:    Quat,
    pub scale:       Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation:    Quat::IDENTITY,
        scale:       Vec3::ONE,
    };

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    /// Rotate about the world up axis (+Y) by `degrees`.
    #[inline]
    pub fn with_yaw_deg(mut self, degrees: f32) -> Self {
        self.rotation = Quat::from_rotation_y(degrees.to_radians());
        self
    }

    #[inline]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local-to-parent matrix.
    #[inline]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Map a point from local space into parent space.
    #[inline]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.to_affine().transform_point3(local)
    }

    /// Map a point from parent space back into local space.
    ///
    /// Meaningless when any scale component is zero.
    #[inline]
    pub fn inverse_transform_point(&self, parent: Vec3) -> Vec3 {
        self.to_affine().inverse().transform_point3(parent)
    }
}
