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

//! Derives the site's thermal state from terrain slope and local solar
//! position (step 5 of the orchestrator pipeline), absent a collaborator
//! override. Grounded on the sunrise/sunset table already used by the
//! context analyzer (§4.8) and the thermal-phase taxonomy used by the
//! hunt-window scanner (§4.7).

use wt_common::time::LocalDateTime;
use wt_context::sunrise_sunset_minutes;
use wt_huntwindow::{ThermalAnalysis, ThermalPhase};
use wt_wind::{ThermalDirectionTag, ThermalState};

const MORNING_PEAK_MINUTES: i64 = 90;
const MORNING_TRANSITION_MINUTES: i64 = 180;
const EVENING_PEAK_LEAD_MINUTES: i64 = 60;
const POST_SUNSET_MINUTES: i64 = 120;

fn phase_and_base_strength(minutes: i64, sunrise: i64, sunset: i64) -> (ThermalPhase, f64) {
    if minutes >= sunrise && minutes < sunrise + MORNING_PEAK_MINUTES {
        (ThermalPhase::PeakMorningUpslope, 0.8)
    } else if minutes >= sunrise + MORNING_PEAK_MINUTES && minutes < sunrise + MORNING_TRANSITION_MINUTES {
        (ThermalPhase::MidMorningTransition, 0.4)
    } else if minutes >= sunset - EVENING_PEAK_LEAD_MINUTES && minutes < sunset {
        (ThermalPhase::PeakEveningDownslope, 0.8)
    } else if minutes >= sunset && minutes < sunset + POST_SUNSET_MINUTES {
        (ThermalPhase::PostSunsetMaximum, 0.9)
    } else {
        (ThermalPhase::Neutral, 0.0)
    }
}

fn direction_tag(phase: ThermalPhase) -> ThermalDirectionTag {
    match phase {
        ThermalPhase::PeakMorningUpslope | ThermalPhase::MidMorningTransition => ThermalDirectionTag::Upslope,
        ThermalPhase::PeakEveningDownslope | ThermalPhase::PostSunsetMaximum => ThermalDirectionTag::Downslope,
        ThermalPhase::Neutral => ThermalDirectionTag::Neutral,
    }
}

/// Steeper slopes drive a stronger thermal column; flat ground still gets a
/// minor convective component rather than a hard zero.
fn slope_factor(slope_deg: f64) -> f64 {
    (slope_deg / 30.0).clamp(0.2, 1.0)
}

/// The two representations thermal state is consumed in downstream: the
/// wind-fusion vector (C2, C3) and the hunt-window scanner's phase tag (C7).
pub struct DerivedThermal {
    pub wind_state: ThermalState,
    pub window_analysis: ThermalAnalysis,
}

pub fn derive(now: LocalDateTime, slope_deg: f64) -> DerivedThermal {
    let minutes = now.hour() as i64 * 60 + now.minute() as i64;
    let (sunrise_hm, sunset_hm) = sunrise_sunset_minutes(now.month());
    let sunrise = sunrise_hm.0 as i64 * 60 + sunrise_hm.1 as i64;
    let sunset = sunset_hm.0 as i64 * 60 + sunset_hm.1 as i64;

    let (phase, base_strength) = phase_and_base_strength(minutes, sunrise, sunset);
    let strength_0_1 = base_strength * slope_factor(slope_deg);
    let is_active = strength_0_1 > 0.0;

    DerivedThermal {
        wind_state: ThermalState {
            active: is_active,
            direction_tag: direction_tag(phase),
            strength_0_10: strength_0_1 * 10.0,
        },
        window_analysis: ThermalAnalysis { phase, strength_0_1, is_active },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    fn tz() -> Tz {
        "America/New_York".parse().unwrap()
    }

    #[test]
    fn dawn_on_a_moderate_slope_is_upslope_and_active() {
        let now = LocalDateTime::parse("2025-08-26T06:00:00", tz()).unwrap();
        let d = derive(now, 20.0);
        assert!(d.window_analysis.is_active);
        assert_eq!(d.wind_state.direction_tag, ThermalDirectionTag::Upslope);
    }

    #[test]
    fn post_sunset_is_downslope_and_the_strongest_phase() {
        let now = LocalDateTime::parse("2025-08-26T20:30:00", tz()).unwrap();
        let d = derive(now, 20.0);
        assert_eq!(d.window_analysis.phase, ThermalPhase::PostSunsetMaximum);
        assert_eq!(d.wind_state.direction_tag, ThermalDirectionTag::Downslope);
    }

    #[test]
    fn flat_ground_never_reaches_full_strength() {
        let now = LocalDateTime::parse("2025-08-26T20:30:00", tz()).unwrap();
        let d = derive(now, 0.0);
        assert!(d.window_analysis.strength_0_1 < 0.9 * 0.2 + 0.001);
    }

    #[test]
    fn midday_is_neutral_and_inactive() {
        let now = LocalDateTime::parse("2025-08-26T13:00:00", tz()).unwrap();
        let d = derive(now, 20.0);
        assert_eq!(d.window_analysis.phase, ThermalPhase::Neutral);
        assert!(!d.window_analysis.is_active);
    }
}
