/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! RON-based process configuration, in the spirit of the `load_config`
//! helper used by the N5 downloader binary, but without its XDG/embedded-
//! resource machinery — one file, one region, read once at startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wt_terrain::DEFAULT_SAMPLE_RADIUS_M;

use wt_common::grid::DEFAULT_SPAN_DEG;
use wt_common::Result;

use crate::collaborators::{FALLBACK_CANOPY_FRACTION, FALLBACK_ROAD_DISTANCE_M};

/// Process-wide settings; everything here is a fixed configuration input,
/// never guessed at request time (see SPEC_FULL.md time-handling note).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// IANA timezone name for the hunting region, e.g. "America/New_York".
    pub region_timezone: String,
    /// Directories scanned for DEM/hillshade raster tiles at startup.
    pub dem_directories: Vec<PathBuf>,
    pub grid_span_deg: f64,
    pub sample_radius_m: f64,
    pub fallback_canopy_fraction: f64,
    pub fallback_road_distance_m: f64,
    /// Path to the stand-profile file (RON), if any.
    pub stand_profiles_path: Option<PathBuf>,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        PredictionConfig {
            region_timezone: "America/New_York".to_string(),
            dem_directories: Vec::new(),
            grid_span_deg: DEFAULT_SPAN_DEG,
            sample_radius_m: DEFAULT_SAMPLE_RADIUS_M,
            fallback_canopy_fraction: FALLBACK_CANOPY_FRACTION,
            fallback_road_distance_m: FALLBACK_ROAD_DISTANCE_M,
            stand_profiles_path: None,
        }
    }
}

/// Loads a RON config file, falling back to defaults when the file does not
/// exist (a fresh checkout with no config is a valid, if minimal, setup).
pub fn load_config(path: &Path) -> Result<PredictionConfig> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(ron::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("no config at {}, using defaults", path.display());
            Ok(PredictionConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_yields_defaults() {
        let cfg = load_config(Path::new("/nonexistent/wt_predict.ron")).unwrap();
        assert_eq!(cfg.region_timezone, "America/New_York");
    }
}
