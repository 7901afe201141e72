use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Block parameters as they arrive from a flowgraph or deployment file.
///
/// Values are validated at construction, not here: out-of-range requests go
/// through the same clamping as the runtime setters.
#[derive(Debug, Clone, Deserialize)]
pub struct MovingAvgParams {
    #[serde(default = "default_window_len")]
    pub window_len: i32,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

impl Default for MovingAvgParams {
    fn default() -> Self {
        Self {
            window_len: default_window_len(),
            scale: default_scale(),
        }
    }
}

fn default_window_len() -> i32 {
    8
}

fn default_scale() -> f32 {
    1.0
}

pub fn load_from_file(path: &Path) -> anyhow::Result<MovingAvgParams> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let params: MovingAvgParams =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(params)
}
