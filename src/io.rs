//! Reading and writing camera records as JSON files.
//!
//! Matrices are stored row-major:
//!
//! ```json
//! {
//!   "intrinsic": {
//!     "width": 640,
//!     "height": 480,
//!     "intrinsic_matrix": [525.0, 0.0, 319.5, 0.0, 525.0, 239.5, 0.0, 0.0, 1.0]
//!   },
//!   "extrinsic": [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
//! }
//! ```

use crate::{error::Result, intrinsic::PinholeCameraIntrinsic, parameters::PinholeCameraParameters};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Serializes `value` before touching `path`, so a record that cannot be
/// encoded leaves no file behind.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read a [`PinholeCameraIntrinsic`] from the JSON file at `path`.
///
/// An invalid camera is returned as is; only a missing file or a malformed
/// record is an error.
pub fn read_pinhole_camera_intrinsic(path: impl AsRef<Path>) -> Result<PinholeCameraIntrinsic> {
    let path = path.as_ref();
    let intrinsic: PinholeCameraIntrinsic = read_json(path)?;
    log::debug!(
        "read intrinsic {}x{} from {}",
        intrinsic.width,
        intrinsic.height,
        path.display()
    );
    if !intrinsic.is_valid() {
        log::warn!("intrinsic read from {} is invalid", path.display());
    }

    Ok(intrinsic)
}

pub fn write_pinhole_camera_intrinsic(
    path: impl AsRef<Path>,
    intrinsic: &PinholeCameraIntrinsic,
) -> Result<()> {
    let path = path.as_ref();
    if !intrinsic.is_valid() {
        log::warn!("writing invalid intrinsic to {}", path.display());
    }
    write_json(path, intrinsic)?;
    log::debug!(
        "wrote intrinsic {}x{} to {}",
        intrinsic.width,
        intrinsic.height,
        path.display()
    );

    Ok(())
}

/// Read a [`PinholeCameraParameters`] from the JSON file at `path`.
pub fn read_pinhole_camera_parameters(path: impl AsRef<Path>) -> Result<PinholeCameraParameters> {
    let path = path.as_ref();
    let parameters: PinholeCameraParameters = read_json(path)?;
    log::debug!(
        "read camera parameters {}x{} from {}",
        parameters.intrinsic.width,
        parameters.intrinsic.height,
        path.display()
    );
    if !parameters.intrinsic.is_valid() {
        log::warn!("camera parameters read from {} have an invalid intrinsic", path.display());
    }

    Ok(parameters)
}

pub fn write_pinhole_camera_parameters(
    path: impl AsRef<Path>,
    parameters: &PinholeCameraParameters,
) -> Result<()> {
    let path = path.as_ref();
    if !parameters.intrinsic.is_valid() {
        log::warn!("writing camera parameters with an invalid intrinsic to {}", path.display());
    }
    write_json(path, parameters)?;
    log::debug!(
        "wrote camera parameters {}x{} to {}",
        parameters.intrinsic.width,
        parameters.intrinsic.height,
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, preset::PinholeCameraIntrinsicPreset};

    #[test]
    fn intrinsic_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intrinsic.json");
        let intrinsic: PinholeCameraIntrinsic =
            PinholeCameraIntrinsicPreset::Kinect2DepthCameraDefault.into();

        write_pinhole_camera_intrinsic(&path, &intrinsic).unwrap();
        assert_eq!(read_pinhole_camera_intrinsic(&path).unwrap(), intrinsic);
    }

    #[test]
    fn invalid_intrinsic_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intrinsic.json");

        write_pinhole_camera_intrinsic(&path, &PinholeCameraIntrinsic::default()).unwrap();
        let result = read_pinhole_camera_intrinsic(&path).unwrap();

        assert!(!result.is_valid());
        assert_eq!(result, PinholeCameraIntrinsic::default());
    }

    #[test]
    fn non_finite_entry_fails_the_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intrinsic.json");
        let mut intrinsic: PinholeCameraIntrinsic =
            PinholeCameraIntrinsicPreset::PrimeSenseDefault.into();
        intrinsic.intrinsic_matrix[(0, 1)] = f64::NAN;

        assert!(matches!(
            write_pinhole_camera_intrinsic(&path, &intrinsic),
            Err(Error::Json(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_pinhole_camera_parameters(dir.path().join("missing.json"));

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intrinsic.json");
        std::fs::write(&path, r#"{"width": 640, "height": 480}"#).unwrap();

        assert!(matches!(
            read_pinhole_camera_intrinsic(&path),
            Err(Error::Json(_))
        ));
    }
}
