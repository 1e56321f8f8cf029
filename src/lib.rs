// #![warn(missing_docs)]

//! Pinhole Camera Model
//!
//! Value types describing an ideal pinhole camera: the intrinsic calibration
//! ([`PinholeCameraIntrinsic`]), factory calibrations for common depth sensors
//! ([`PinholeCameraIntrinsicPreset`]) and a posed camera
//! ([`PinholeCameraParameters`]).
//!
//! ```
//! use pinhole::prelude::*;
//!
//! let intrinsic = PinholeCameraIntrinsic::from(PinholeCameraIntrinsicPreset::PrimeSenseDefault);
//! assert!(intrinsic.is_valid());
//! assert_eq!(intrinsic.focal_length(), (525.0, 525.0));
//!
//! let params = PinholeCameraParameters::new(intrinsic, nalgebra::Matrix4::identity());
//! assert_eq!(params.intrinsic.principal_point(), (319.5, 239.5));
//! ```

#[allow(missing_docs)]
pub mod error;

pub mod intrinsic;
#[cfg(feature = "serde")]
pub mod io;
#[cfg(feature = "serde")]
mod matrix;
pub mod parameters;
pub mod preset;

pub use intrinsic::PinholeCameraIntrinsic;
pub use parameters::PinholeCameraParameters;
pub use preset::PinholeCameraIntrinsicPreset;

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::intrinsic::PinholeCameraIntrinsic;
    pub use crate::parameters::PinholeCameraParameters;
    pub use crate::preset::PinholeCameraIntrinsicPreset;

    #[cfg(feature = "serde")]
    pub use crate::io::{
        read_pinhole_camera_intrinsic, read_pinhole_camera_parameters,
        write_pinhole_camera_intrinsic, write_pinhole_camera_parameters,
    };
}
