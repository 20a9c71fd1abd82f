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

//! Adjusts activity, movement direction, and confidence from time of day,
//! season, weather, and hunting pressure. Every function here is a pure
//! function of its inputs: identical inputs always produce identical notes.

use serde::{Deserialize, Serialize};
use wt_common::time::{HuntingPressureLevel, Season};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    High,
    Moderate,
    Low,
}

/// Activity curve by local hour; a pure function of `hour` alone.
pub fn activity_level(hour: u32) -> ActivityLevel {
    match hour {
        6..=8 => ActivityLevel::High,
        9..=11 => ActivityLevel::Moderate,
        12..=15 => ActivityLevel::Low,
        16..=19 => ActivityLevel::High,
        20..=23 => ActivityLevel::Moderate,
        _ => ActivityLevel::Moderate, // 0-5
    }
}

/// Movement-direction note by local hour. Hours 5-8 must never be reversed:
/// this is the return-from-night-feeding leg.
pub fn movement_direction(hour: u32) -> &'static str {
    match hour {
        5..=8 => "feeding areas → bedding areas (returning from night feeding)",
        9..=11 => "minimal movement, deer remain in bedding areas",
        12..=15 => "bedded, seeking thermal cover",
        16..=17 => "bedding areas → feeding areas (pre-feeding movement)",
        18..=20 => "bedding areas → feeding areas (prime feeding movement)",
        _ => "feeding areas, inter-food travel", // 21-23, 0-4
    }
}

#[derive(Copy, Clone, Debug)]
pub struct WeatherSnapshot {
    pub temperature_f: f64,
    pub pressure_inhg: f64,
    pub wind_speed_mph: f64,
}

pub struct WeatherInfluence {
    pub notes: Vec<String>,
    pub confidence_delta: f64,
    pub cold_front: bool,
}

/// Cold-front condition: `pressure < 29.9 AND temperature < 45` -> increased
/// movement, +0.30 confidence. High pressure (>30.2) -> stable, +0.10.
pub fn weather_triggers(w: &WeatherSnapshot) -> WeatherInfluence {
    let mut notes = Vec::new();
    let mut delta = 0.0;
    let cold_front = w.pressure_inhg < 29.9 && w.temperature_f < 45.0;

    if cold_front {
        notes.push("cold front conditions: increased deer movement expected".to_string());
        delta += 0.30;
    }
    if w.pressure_inhg > 30.2 {
        notes.push("high pressure: stable, predictable movement patterns".to_string());
        delta += 0.10;
    }
    if w.wind_speed_mph > 15.0 {
        notes.push("wind above 15 mph reduces open-area use".to_string());
    }
    if w.wind_speed_mph < 5.0 {
        notes.push("wind below 5 mph gives good scent control for the hunter".to_string());
    }

    WeatherInfluence { notes, confidence_delta: delta, cold_front }
}

pub struct PressureResponse {
    pub notes: Vec<String>,
    pub confidence_penalty: f64,
}

/// `high`+daytime(6-18) -> shift to nocturnal, -0.20; `high`+nighttime ->
/// increased nocturnal activity note, no penalty; `moderate` -> delay 30-60
/// min, -0.10; `low` -> normal patterns, 0.
pub fn pressure_response(level: HuntingPressureLevel, hour: u32) -> PressureResponse {
    let daytime = (6..=18).contains(&hour);
    match level {
        HuntingPressureLevel::High if daytime => PressureResponse {
            notes: vec!["reduced daytime activity; deer shift to nocturnal movement".to_string()],
            confidence_penalty: 0.20,
        },
        HuntingPressureLevel::High => PressureResponse {
            notes: vec!["increased nocturnal activity under hunting pressure".to_string()],
            confidence_penalty: 0.0,
        },
        HuntingPressureLevel::Moderate => PressureResponse {
            notes: vec!["movement delayed 30-60 minutes under moderate pressure".to_string()],
            confidence_penalty: 0.10,
        },
        HuntingPressureLevel::Low => PressureResponse {
            notes: vec!["normal movement patterns, low hunting pressure".to_string()],
            confidence_penalty: 0.0,
        },
    }
}

pub fn seasonal_food_notes(season: Season) -> Vec<&'static str> {
    match season {
        Season::EarlySeason => vec!["mast", "beechnuts", "soft-mast", "browse"],
        Season::Rut => vec!["standing corn", "high-energy mast"],
        Season::LateSeason => vec!["corn stubble", "woody browse", "waste grain"],
    }
}

/// Enhanced confidence score: base adjusted by weather, hunting pressure,
/// and the current activity level.
pub fn enhanced_confidence(
    base_confidence: f64,
    weather: &WeatherInfluence,
    pressure: &PressureResponse,
    activity: ActivityLevel,
) -> f64 {
    let activity_boost = match activity {
        ActivityLevel::High => 0.2,
        ActivityLevel::Moderate => 0.1,
        ActivityLevel::Low => 0.0,
    };
    (base_confidence + weather.confidence_delta - pressure.confidence_penalty + activity_boost)
        .clamp(0.0, 1.0)
}

/// 30% more cautious language, preference for thicker cover, delayed
/// movement under suboptimal conditions — applied over the general notes.
pub fn mature_buck_general_notes(movement_note: &str) -> Vec<String> {
    vec![
        format!("mature buck: {movement_note}, favoring thicker cover than the general pattern"),
        "mature buck: delays movement further under suboptimal or pressured conditions".to_string(),
        "mature buck: treat all timing as 30% more conservative than average-age deer".to_string(),
    ]
}

/// Flattens the movement/weather/pressure notes into an actionable list.
pub fn hunting_recommendations(
    movement_note: &str,
    weather: &WeatherInfluence,
    pressure: &PressureResponse,
) -> Vec<String> {
    let mut out = vec![format!("movement pattern: {movement_note}")];
    out.extend(weather.notes.iter().cloned());
    out.extend(pressure.notes.iter().cloned());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_is_a_pure_function_of_hour() {
        assert_eq!(activity_level(7), ActivityLevel::High);
        assert_eq!(activity_level(7), activity_level(7));
        assert_eq!(activity_level(13), ActivityLevel::Low);
    }

    #[test]
    fn am_movement_never_reverses() {
        for hour in 5..=8 {
            assert!(movement_direction(hour).contains("feeding areas → bedding areas"));
        }
    }

    #[test]
    fn cold_front_predicate_matches_invariant() {
        let w = WeatherSnapshot { temperature_f: 38.0, pressure_inhg: 29.6, wind_speed_mph: 12.0 };
        let influence = weather_triggers(&w);
        assert!(influence.cold_front);
        assert!(influence.confidence_delta >= 0.30);

        let warm = WeatherSnapshot { temperature_f: 50.0, pressure_inhg: 29.6, wind_speed_mph: 12.0 };
        assert!(!weather_triggers(&warm).cold_front);
    }

    #[test]
    fn high_pressure_daytime_reduces_confidence() {
        let r = pressure_response(HuntingPressureLevel::High, 13);
        assert_eq!(r.confidence_penalty, 0.20);
    }

    #[test]
    fn enhanced_confidence_is_clamped() {
        let weather = WeatherInfluence { notes: vec![], confidence_delta: 0.9, cold_front: false };
        let pressure = PressureResponse { notes: vec![], confidence_penalty: 0.0 };
        let conf = enhanced_confidence(0.9, &weather, &pressure, ActivityLevel::High);
        assert_eq!(conf, 1.0);
    }
}
