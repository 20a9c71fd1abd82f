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

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use wt_common::bearing::Bearing;

use crate::errors::{HuntWindowError, Result};

/// One hour of the weather provider's forecast, per the canonical schema in
/// SPEC_FULL.md / DESIGN.md Open Question 3.
#[derive(Copy, Clone, Debug)]
pub struct ForecastHour {
    pub time: DateTime<Tz>,
    pub temperature_f: f64,
    pub pressure_inhg: f64,
    pub wind_speed_mph: f64,
    pub wind_gust_mph: f64,
    pub wind_direction_deg: Bearing,
}

/// A wind direction this stand likes, with a tolerance in degrees.
#[derive(Copy, Clone, Debug)]
pub struct PreferredWind {
    pub compass_label: Bearing,
    pub tolerance_deg: f64,
}

pub const DEFAULT_TOLERANCE_DEG: f64 = 25.0;

/// User-configured stand, loaded read-only from the stand-profile file.
#[derive(Clone, Debug)]
pub struct StandProfile {
    pub id: String,
    pub display_name: String,
    pub preferred_winds: Vec<PreferredWind>,
    pub max_gust_mph: Option<f64>,
    pub strategy_match: Option<String>,
    pub notes: Option<String>,
}

impl StandProfile {
    /// Validates the load-time invariant: `preferred_winds` non-empty.
    /// Malformed records are skipped by the caller with a warning, not here.
    pub fn validate(&self) -> Result<()> {
        if self.preferred_winds.is_empty() {
            return Err(HuntWindowError::ProfileInvalid(format!(
                "stand '{}' has no preferred winds",
                self.id
            )));
        }
        Ok(())
    }

    fn alignment_at(&self, wind_direction: Bearing) -> f64 {
        self.preferred_winds
            .iter()
            .map(|pw| {
                let diff = wind_direction.angular_diff(pw.compass_label);
                if diff <= pw.tolerance_deg {
                    1.0 - (diff / pw.tolerance_deg)
                } else {
                    0.0
                }
            })
            .fold(0.0_f64, f64::max)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalPhase {
    PeakMorningUpslope,
    MidMorningTransition,
    PeakEveningDownslope,
    PostSunsetMaximum,
    Neutral,
}

#[derive(Copy, Clone, Debug)]
pub struct ThermalAnalysis {
    pub phase: ThermalPhase,
    pub strength_0_1: f64,
    pub is_active: bool,
}

impl ThermalAnalysis {
    pub fn inactive() -> Self {
        ThermalAnalysis { phase: ThermalPhase::Neutral, strength_0_1: 0.0, is_active: false }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerTag {
    ColdFront,
    WindAlignment,
    ThermalStability,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HuntWindow {
    pub stand_id: String,
    pub window_start: String,
    pub window_end: String,
    pub priority_boost: f64,
    pub confidence_0_1: f64,
    pub trigger_tags: Vec<TriggerTag>,
    pub dominant_wind_label: String,
    pub notes: Vec<String>,
}

/// Go/no-go status for a single profile evaluated at "now".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandWindStatus {
    pub stand_id: String,
    /// The profile's `strategy_match`, used by the orchestrator to couple
    /// this status to a generated stand point's `strategy` tag.
    pub match_key: Option<String>,
    pub go_now: bool,
    pub priority_boost: f64,
    pub alignment_0_1: f64,
}

impl StandProfile {
    pub(crate) fn alignment(&self, wind_direction: Bearing) -> f64 {
        self.alignment_at(wind_direction)
    }
}

pub(crate) fn exceeds_gust(profile: &StandProfile, gust_mph: f64) -> bool {
    profile.max_gust_mph.map(|max| gust_mph > max).unwrap_or(false)
}

pub(crate) fn window_length() -> Duration {
    Duration::hours(2)
}
