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

//! Scans an hourly forecast for cold-front-aligned, thermally stable hours
//! and emits per-stand hunt windows and go/no-go status.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use tracing::{info, warn};

use crate::types::{
    exceeds_gust, window_length, ForecastHour, HuntWindow, StandProfile, StandWindStatus,
    ThermalAnalysis, TriggerTag,
};

const COLD_FRONT_TEMP_DROP_F: f64 = 10.0;
const COLD_FRONT_PRESSURE_RISE_INHG: f64 = 0.15;
const COLD_FRONT_LOOKBACK: i64 = 6;
const COLD_FRONT_LOOKAHEAD: i64 = 12;
const THERMAL_STABLE_WIND_MPH: f64 = 5.0;
const THERMAL_STABLE_TEMP_DELTA_F: f64 = 4.0;
const THERMAL_FRIENDLY_HOURS: [(u32, u32); 2] = [(5, 9), (17, 21)];
const THERMAL_CONFIRM_STRENGTH: f64 = 0.4;

/// Cold-front detection over the next 24h of forecast, relative to `now`'s
/// conditions (the first forecast hour at or after `now`).
fn detect_cold_front(forecast: &[ForecastHour], now: DateTime<Tz>) -> Option<DateTime<Tz>> {
    let current = forecast.iter().find(|h| h.time >= now)?;
    let horizon = now + Duration::hours(24);

    forecast
        .iter()
        .filter(|h| h.time >= now && h.time <= horizon)
        .filter(|h| {
            (current.temperature_f - h.temperature_f) >= COLD_FRONT_TEMP_DROP_F
                || (h.pressure_inhg - current.pressure_inhg) >= COLD_FRONT_PRESSURE_RISE_INHG
        })
        .map(|h| h.time)
        .min()
}

fn cold_front_ready(hour_time: DateTime<Tz>, earliest_event: Option<DateTime<Tz>>) -> bool {
    match earliest_event {
        None => false,
        Some(event) => {
            hour_time >= event - Duration::hours(COLD_FRONT_LOOKBACK)
                && hour_time <= event + Duration::hours(COLD_FRONT_LOOKAHEAD)
        }
    }
}

fn is_thermal_friendly_hour(hour: u32) -> bool {
    THERMAL_FRIENDLY_HOURS.iter().any(|(start, end)| (*start..*end).contains(&hour))
}

fn thermal_stable(
    current: &ForecastHour,
    previous: Option<&ForecastHour>,
    thermal: Option<&ThermalAnalysis>,
) -> bool {
    use chrono::Timelike;

    let temp_delta_ok = previous
        .map(|p| (current.temperature_f - p.temperature_f).abs() <= THERMAL_STABLE_TEMP_DELTA_F)
        .unwrap_or(true);

    let base = current.wind_speed_mph <= THERMAL_STABLE_WIND_MPH
        && temp_delta_ok
        && is_thermal_friendly_hour(current.time.hour());

    let confirmed = thermal
        .map(|t| t.is_active && t.strength_0_1 >= THERMAL_CONFIRM_STRENGTH)
        .unwrap_or(false);

    base || confirmed
}

struct Candidate {
    hour: ForecastHour,
    alignment: f64,
}

fn best_candidate(
    profile: &StandProfile,
    forecast: &[ForecastHour],
    earliest_cold_front: Option<DateTime<Tz>>,
    thermal: Option<&ThermalAnalysis>,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (idx, hour) in forecast.iter().enumerate() {
        if exceeds_gust(profile, hour.wind_gust_mph) {
            continue;
        }
        let alignment = profile.alignment(hour.wind_direction_deg);
        if alignment <= 0.0 {
            continue;
        }
        if !cold_front_ready(hour.time, earliest_cold_front) {
            continue;
        }
        let previous = idx.checked_sub(1).map(|i| &forecast[i]);
        if !thermal_stable(hour, previous, thermal) {
            continue;
        }

        let better = match &best {
            None => true,
            Some(b) => {
                alignment > b.alignment
                    || (alignment == b.alignment && hour.wind_speed_mph < b.hour.wind_speed_mph)
            }
        };
        if better {
            best = Some(Candidate { hour: *hour, alignment });
        }
    }

    best
}

/// Scans one profile's forecast window and returns its HuntWindow, if any.
pub fn scan_profile(
    profile: &StandProfile,
    forecast: &[ForecastHour],
    thermal: Option<&ThermalAnalysis>,
) -> Option<HuntWindow> {
    if forecast.is_empty() {
        return None;
    }
    let now = forecast[0].time;
    let earliest_cold_front = detect_cold_front(forecast, now);

    let candidate = best_candidate(profile, forecast, earliest_cold_front, thermal)?;

    let priority_boost = 8.0 * candidate.alignment;
    let confidence = (0.55 + 0.3 * candidate.alignment).clamp(0.65, 0.95);

    let mut trigger_tags = vec![TriggerTag::WindAlignment];
    if earliest_cold_front.is_some() {
        trigger_tags.push(TriggerTag::ColdFront);
    }
    if thermal.map(|t| t.is_active).unwrap_or(false) {
        trigger_tags.push(TriggerTag::ThermalStability);
    }

    let window_end = candidate.hour.time + window_length();
    info!(
        stand_id = %profile.id,
        alignment = candidate.alignment,
        "hunt window identified"
    );

    Some(HuntWindow {
        stand_id: profile.id.clone(),
        window_start: candidate.hour.time.to_rfc3339(),
        window_end: window_end.to_rfc3339(),
        priority_boost,
        confidence_0_1: confidence,
        trigger_tags,
        dominant_wind_label: candidate.hour.wind_direction_deg.compass_label().to_string(),
        notes: vec![format!(
            "wind alignment {:.0}% with {}",
            candidate.alignment * 100.0,
            profile.display_name
        )],
    })
}

/// Scans every profile's forecast and returns the non-empty hunt windows
/// plus a go/no-go status for "now" (the forecast's first hour) per profile.
pub fn scan_all(
    profiles: &[StandProfile],
    forecast: &[ForecastHour],
    thermal: Option<&ThermalAnalysis>,
) -> (Vec<HuntWindow>, Vec<StandWindStatus>) {
    if profiles.is_empty() {
        warn!("no stand profiles configured; hunt-window pipeline disabled");
        return (Vec::new(), Vec::new());
    }
    if forecast.is_empty() {
        warn!("forecast unavailable; hunt-window pipeline disabled");
        return (Vec::new(), Vec::new());
    }

    let mut windows = Vec::new();
    let mut statuses = Vec::new();
    let now = forecast[0];

    for profile in profiles {
        let window = scan_profile(profile, forecast, thermal);
        let alignment_now = profile.alignment(now.wind_direction_deg);
        statuses.push(StandWindStatus {
            stand_id: profile.id.clone(),
            match_key: profile.strategy_match.clone(),
            go_now: alignment_now > 0.0 && !exceeds_gust(profile, now.wind_gust_mph),
            priority_boost: window.as_ref().map(|w| w.priority_boost).unwrap_or(0.0),
            alignment_0_1: alignment_now,
        });
        if let Some(w) = window {
            windows.push(w);
        }
    }

    (windows, statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wt_common::bearing::Bearing;
    use crate::types::PreferredWind;

    fn tz() -> Tz {
        "America/New_York".parse().unwrap()
    }

    fn hour(tz: Tz, h: u32, temp: f64, pressure: f64, wind_speed: f64, wind_dir: f64) -> ForecastHour {
        ForecastHour {
            time: tz.with_ymd_and_hms(2025, 8, 26, h, 0, 0).unwrap(),
            temperature_f: temp,
            pressure_inhg: pressure,
            wind_speed_mph: wind_speed,
            wind_gust_mph: wind_speed + 5.0,
            wind_direction_deg: Bearing::from_degrees(wind_dir),
        }
    }

    fn north_profile() -> StandProfile {
        StandProfile {
            id: "north_ridge".to_string(),
            display_name: "North Ridge".to_string(),
            preferred_winds: vec![PreferredWind { compass_label: Bearing::from_degrees(0.0), tolerance_deg: 25.0 }],
            max_gust_mph: None,
            strategy_match: None,
            notes: None,
        }
    }

    #[test]
    fn cold_front_detected_when_temp_drops_ten_degrees() {
        let tz = tz();
        let forecast = vec![
            hour(tz, 6, 50.0, 30.0, 3.0, 0.0),
            hour(tz, 7, 38.0, 30.1, 2.0, 0.0),
        ];
        let event = detect_cold_front(&forecast, forecast[0].time);
        assert!(event.is_some());
    }

    #[test]
    fn no_cold_front_when_neither_threshold_met() {
        let tz = tz();
        let forecast = vec![
            hour(tz, 6, 50.0, 30.0, 3.0, 0.0),
            hour(tz, 7, 47.0, 30.05, 2.0, 0.0),
        ];
        assert!(detect_cold_front(&forecast, forecast[0].time).is_none());
    }

    #[test]
    fn priority_boost_and_confidence_bounds_hold() {
        let tz = tz();
        let forecast = vec![
            hour(tz, 6, 50.0, 30.0, 3.0, 5.0),
            hour(tz, 7, 38.0, 30.2, 2.0, 5.0),
            hour(tz, 8, 38.0, 30.2, 2.0, 5.0),
        ];
        let profile = north_profile();
        let window = scan_profile(&profile, &forecast, None).expect("expected a hunt window");
        assert!((0.65..=0.95).contains(&window.confidence_0_1));
        let expected_alignment = 1.0 - (5.0_f64 / 25.0);
        assert!((window.priority_boost - 8.0 * expected_alignment).abs() < 1e-9);
    }

    #[test]
    fn misaligned_wind_never_produces_a_window() {
        let tz = tz();
        let forecast = vec![
            hour(tz, 6, 50.0, 30.0, 3.0, 180.0),
            hour(tz, 7, 38.0, 30.2, 2.0, 180.0),
        ];
        let profile = north_profile();
        assert!(scan_profile(&profile, &forecast, None).is_none());
    }

    #[test]
    fn gust_ceiling_excludes_every_candidate_hour() {
        let tz = tz();
        let mut forecast = vec![
            hour(tz, 6, 50.0, 30.0, 3.0, 0.0),
            hour(tz, 7, 38.0, 30.2, 2.0, 0.0),
        ];
        forecast[0].wind_gust_mph = 25.0;
        forecast[1].wind_gust_mph = 40.0;
        let mut profile = north_profile();
        profile.max_gust_mph = Some(20.0);
        assert!(scan_profile(&profile, &forecast, None).is_none());
    }
}
