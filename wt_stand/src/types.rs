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
use wt_common::{bearing::Bearing, geo::GeoPoint};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandStrategy {
    Evening,
    Morning,
    AllDay,
}

/// Thermal input as already computed by the Wind/Thermal Analyzer (C2); C3
/// treats it as an opaque directional hint, not a raw wx reading.
#[derive(Copy, Clone, Debug)]
pub struct ThermalInput {
    pub active: bool,
    pub bearing: Bearing,
    pub strength_0_1: f64,
    /// true when the caller has classified the current thermal phase as
    /// part of the evening-downslope family (see wt_huntwindow::ThermalPhase)
    pub is_evening_family: bool,
}

impl ThermalInput {
    pub fn inactive() -> Self {
        ThermalInput { active: false, bearing: Bearing::from_degrees(0.0), strength_0_1: 0.0, is_evening_family: false }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandPosition {
    pub anchor_bedding_point: GeoPoint,
    pub bearing_from_bedding_deg: Bearing,
    pub distance_m: f64,
    pub wind_aware_flag: bool,
    pub crosswind_bearing_deg: Option<Bearing>,
    pub strategy_tag: StandStrategy,
    pub primary_reason: String,
    pub adjustments: Vec<String>,
    /// Set at construction time to `true` (no check performed yet); the
    /// caller owns the full bedding-zone list the bearing calculators don't
    /// see, so it must call `apply_scent_validation` with the real
    /// `validate_scent` result before this flag is trustworthy.
    pub scent_safe_flag: bool,
}

impl StandPosition {
    /// Applies a real `validate_scent` result: `scent_safe_flag` becomes
    /// `violating_zone_count == 0`, and a violation note is appended to
    /// `adjustments` when it isn't.
    pub fn apply_scent_validation(&mut self, violating_zone_count: usize, total_zone_count: usize) {
        self.scent_safe_flag = violating_zone_count == 0;
        if violating_zone_count > 0 {
            self.adjustments.push(format!(
                "{violating_zone_count} of {total_zone_count} bedding zone(s) fall within the scent cone of the effective wind"
            ));
        }
    }
}
