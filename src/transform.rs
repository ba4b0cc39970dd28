//! Host-owned transform value type.
//!
//! The controller never owns a transform — the host scene graph does. A
//! [`Transform`] is handed to the controller by `&mut` reference at commit
//! and reset time, mirroring a non-owning component binding.

use glam::{EulerRot, Mat3, Quat, Vec3};

/// Local position and rotation of a scene entity.
///
/// Rotation is stored as Euler angles in radians (`x` pitch, `y` yaw,
/// `z` roll), applied in YXZ order. The orbit controller writes only the
/// yaw component during normal operation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Position relative to the parent entity.
    pub local_position: Vec3,
    /// Euler rotation in radians (pitch, yaw, roll), applied YXZ.
    pub local_rotation: Vec3,
}

impl Transform {
    /// The identity transform: zero position, zero rotation.
    pub const IDENTITY: Self = Self {
        local_position: Vec3::ZERO,
        local_rotation: Vec3::ZERO,
    };

    /// Create a transform at `position` with zero rotation.
    #[must_use]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            local_position: position,
            local_rotation: Vec3::ZERO,
        }
    }

    /// Rotation as a quaternion (YXZ application order).
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.local_rotation.y,
            self.local_rotation.x,
            self.local_rotation.z,
        )
    }

    /// Forward direction (`-Z` rotated by the current rotation).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation_quat() * Vec3::NEG_Z
    }

    /// Re-orient so the forward axis points from `local_position` toward
    /// `target`, with `up` as the vertical reference.
    ///
    /// Degenerate inputs (target at the current position, or a view
    /// direction parallel to `up`) leave the rotation unchanged.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = (target - self.local_position).normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }
        let right = forward.cross(up).normalize_or_zero();
        if right == Vec3::ZERO {
            return;
        }
        let true_up = right.cross(forward);

        // Basis columns follow the -Z-forward convention.
        let rotation =
            Quat::from_mat3(&Mat3::from_cols(right, true_up, -forward));
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        self.local_rotation = Vec3::new(pitch, yaw, roll);
    }
}
