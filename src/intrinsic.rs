use crate::preset::PinholeCameraIntrinsicPreset;
use nalgebra::Matrix3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intrinsic calibration of an ideal pinhole camera.
///
/// Stores the image extent in pixels and the 3x3 intrinsic matrix
///
/// ```text
/// [ fx   s  cx ]
/// [  0  fy  cy ]
/// [  0   0   1 ]
/// ```
///
/// where `s` is the skew. Every constructor produces zero skew, but the matrix
/// is a public field so calibration code can refine individual entries.
///
/// Extents are signed and never checked at construction. A camera with a
/// non-positive width or height is representable and reports itself through
/// [`PinholeCameraIntrinsic::is_valid`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinholeCameraIntrinsic {
    /// Width of the image in pixels.
    pub width: i32,

    /// Height of the image in pixels.
    pub height: i32,

    /// Intrinsic camera matrix `[[fx, 0, cx], [0, fy, cy], [0, 0, 1]]`.
    #[cfg_attr(feature = "serde", serde(with = "crate::matrix::row_major"))]
    pub intrinsic_matrix: Matrix3<f64>,
}

impl PinholeCameraIntrinsic {
    /// Create a camera with zero skew from its extent, focal lengths and principal point.
    pub fn new(width: i32, height: i32, fx: f64, fy: f64, cx: f64, cy: f64) -> Self {
        let mut intrinsic = Self::default();
        intrinsic.set_intrinsics(width, height, fx, fy, cx, cy);
        intrinsic
    }

    /// Create a camera from the factory calibration of `preset`.
    pub fn from_preset(preset: PinholeCameraIntrinsicPreset) -> Self {
        preset.to_intrinsic()
    }

    /// Overwrite the extent and the intrinsic matrix in place.
    ///
    /// Any skew previously written into the matrix is reset to zero.
    pub fn set_intrinsics(&mut self, width: i32, height: i32, fx: f64, fy: f64, cx: f64, cy: f64) {
        self.width = width;
        self.height = height;
        self.intrinsic_matrix = Matrix3::new(
            fx, 0.0, cx, //
            0.0, fy, cy, //
            0.0, 0.0, 1.0,
        );
    }

    /// Returns the X-axis and Y-axis focal lengths in pixels.
    pub fn focal_length(&self) -> (f64, f64) {
        (self.intrinsic_matrix[(0, 0)], self.intrinsic_matrix[(1, 1)])
    }

    /// Returns the X-axis and Y-axis principal point in pixels.
    pub fn principal_point(&self) -> (f64, f64) {
        (self.intrinsic_matrix[(0, 2)], self.intrinsic_matrix[(1, 2)])
    }

    /// Returns the skew, the `(0, 1)` entry of the intrinsic matrix.
    pub fn skew(&self) -> f64 {
        self.intrinsic_matrix[(0, 1)]
    }

    /// Returns `true` iff both the width and height are greater than zero.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for PinholeCameraIntrinsic {
    /// An invalid camera with zero extent and an identity matrix.
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            intrinsic_matrix: Matrix3::identity(),
        }
    }
}

impl From<PinholeCameraIntrinsicPreset> for PinholeCameraIntrinsic {
    fn from(preset: PinholeCameraIntrinsicPreset) -> Self {
        Self::from_preset(preset)
    }
}

impl fmt::Display for PinholeCameraIntrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PinholeCameraIntrinsic with width = {} and height = {}.",
            self.width, self.height
        )?;
        write!(f, "Access intrinsics with intrinsic_matrix.")
    }
}
