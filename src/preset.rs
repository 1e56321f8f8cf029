use crate::{
    error::{Error, Result},
    intrinsic::PinholeCameraIntrinsic,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Add, str::FromStr};

/// Factory calibrations for well-known depth sensors.
///
/// The discriminant is a small integer so that callers can index tables keyed
/// on the preset. Use [`i32::from`] and [`PinholeCameraIntrinsicPreset::try_from`]
/// to move between the two, or [`PinholeCameraIntrinsicPreset::ALL`] to iterate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum PinholeCameraIntrinsicPreset {
    /// Default camera intrinsic parameter for PrimeSense.
    PrimeSenseDefault = 0,

    /// Default camera intrinsic parameter for the Kinect2 depth camera.
    Kinect2DepthCameraDefault = 1,

    /// Default camera intrinsic parameter for the Kinect2 color camera.
    Kinect2ColorCameraDefault = 2,
}

impl PinholeCameraIntrinsicPreset {
    /// Every preset in discriminant order.
    pub const ALL: [Self; 3] = [
        Self::PrimeSenseDefault,
        Self::Kinect2DepthCameraDefault,
        Self::Kinect2ColorCameraDefault,
    ];

    /// Returns the variant name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrimeSenseDefault => "PrimeSenseDefault",
            Self::Kinect2DepthCameraDefault => "Kinect2DepthCameraDefault",
            Self::Kinect2ColorCameraDefault => "Kinect2ColorCameraDefault",
        }
    }

    /// Returns the frozen `(width, height, fx, fy, cx, cy)` of the preset.
    fn calibration(&self) -> (i32, i32, f64, f64, f64, f64) {
        match self {
            Self::PrimeSenseDefault => (640, 480, 525.0, 525.0, 319.5, 239.5),
            Self::Kinect2DepthCameraDefault => (512, 424, 365.456, 365.456, 254.878, 205.395),
            Self::Kinect2ColorCameraDefault => (1920, 1080, 1059.9413, 1059.9413, 959.5, 539.5),
        }
    }

    /// Build the [`PinholeCameraIntrinsic`] described by this preset.
    pub fn to_intrinsic(&self) -> PinholeCameraIntrinsic {
        let (width, height, fx, fy, cx, cy) = self.calibration();
        PinholeCameraIntrinsic::new(width, height, fx, fy, cx, cy)
    }
}

impl fmt::Display for PinholeCameraIntrinsicPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PinholeCameraIntrinsicPreset {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| Error::UnknownPreset { name: name.into() })
    }
}

impl From<PinholeCameraIntrinsicPreset> for i32 {
    fn from(preset: PinholeCameraIntrinsicPreset) -> Self {
        preset as i32
    }
}

impl TryFrom<i32> for PinholeCameraIntrinsicPreset {
    type Error = Error;

    fn try_from(tag: i32) -> Result<Self> {
        usize::try_from(tag)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(Error::UnknownPresetTag { tag })
    }
}

impl Add for PinholeCameraIntrinsicPreset {
    type Output = i32;

    fn add(self, other: Self) -> Self::Output {
        i32::from(self) + i32::from(other)
    }
}

/// Adds `other` to the tag, wrapping on overflow.
impl Add<i32> for PinholeCameraIntrinsicPreset {
    type Output = i32;

    fn add(self, other: i32) -> Self::Output {
        i32::from(self).wrapping_add(other)
    }
}
