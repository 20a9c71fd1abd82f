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
use wt_common::bearing::Bearing;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalDirectionTag {
    Upslope,
    Downslope,
    Neutral,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct ThermalState {
    pub active: bool,
    pub direction_tag: ThermalDirectionTag,
    pub strength_0_10: f64,
}

impl ThermalState {
    pub fn inactive() -> Self {
        ThermalState { active: false, direction_tag: ThermalDirectionTag::Neutral, strength_0_10: 0.0 }
    }
}

/// Significance threshold below which the thermal component is ignored and
/// the effective wind equals the prevailing wind.
pub const THERMAL_SIGNIFICANCE_THRESHOLD: f64 = 3.0;

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct WindField {
    pub prevailing_from_deg: Bearing,
    pub prevailing_speed_mph: f64,
    pub thermal_active_flag: bool,
    pub thermal_direction_tag: ThermalDirectionTag,
    pub thermal_strength_0_10: f64,
    pub effective_from_deg: Bearing,
    pub effective_speed_mph: f64,
    pub scent_to_deg: Bearing,
    pub optimal_approach_from_deg: Bearing,
    pub quality_rating_0_10: f64,
}
