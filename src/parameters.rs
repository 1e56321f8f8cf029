use crate::intrinsic::PinholeCameraIntrinsic;
use nalgebra::Matrix4;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A posed pinhole camera.
///
/// Pairs an intrinsic calibration with the world-to-camera transform. The
/// extrinsic is not checked for orthonormality.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinholeCameraParameters {
    /// Intrinsic calibration of the camera.
    pub intrinsic: PinholeCameraIntrinsic,

    /// Homogeneous transform taking world coordinates into camera coordinates.
    #[cfg_attr(feature = "serde", serde(with = "crate::matrix::row_major"))]
    pub extrinsic: Matrix4<f64>,
}

impl PinholeCameraParameters {
    /// Create a posed camera from an intrinsic and a world-to-camera transform.
    pub fn new(intrinsic: PinholeCameraIntrinsic, extrinsic: Matrix4<f64>) -> Self {
        Self {
            intrinsic,
            extrinsic,
        }
    }
}

impl Default for PinholeCameraParameters {
    fn default() -> Self {
        Self::new(PinholeCameraIntrinsic::default(), Matrix4::identity())
    }
}

impl fmt::Display for PinholeCameraParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PinholeCameraParameters class.")?;
        write!(f, "Access its data via intrinsic and extrinsic.")
    }
}
