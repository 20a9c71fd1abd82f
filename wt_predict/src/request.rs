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

use serde::{Deserialize, Serialize};
use wt_common::time::HuntingPressureLevel;

/// The wire request, per §6. `date_time` is parsed against the configured
/// region timezone, never the process's local clock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub lat: f64,
    pub lon: f64,
    pub date_time: String,
    pub season: String,
    #[serde(default)]
    pub hunting_pressure_level: Option<HuntingPressureLevel>,
    #[serde(default)]
    pub fast_mode: bool,
}
