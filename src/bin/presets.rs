use pinhole::prelude::*;
use serde_json::{Map, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut presets = Map::new();
    for preset in PinholeCameraIntrinsicPreset::ALL {
        log::debug!("dumping preset {preset} with tag {}", i32::from(preset));
        presets.insert(
            preset.name().into(),
            serde_json::to_value(preset.to_intrinsic())?,
        );
    }

    println!("{}", serde_json::to_string_pretty(&Value::Object(presets))?);
    Ok(())
}
