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
#![allow(unused)]

//! End-to-end pipeline runs against the lettered scenarios, using in-memory
//! fake collaborators so no network or filesystem access is required.

use wt_biology::WeatherSnapshot;
use wt_common::bearing::Bearing;
use wt_common::geo::GeoPoint;
use wt_common::grid::CoordinateGrid;
use wt_common::time::HuntingPressureLevel;
use wt_huntwindow::{ForecastHour, PreferredWind, StandProfile};
use wt_predict::collaborators::{
    CanopyProvider, Collaborators, FallbackCollaborators, FallbackDemProvider, LandCoverProvider,
    RoadsTrailsProvider, SecurityProvider, StandProfileSource, ThermalProvider, WeatherProvider,
};
use wt_predict::{predict, PredictionConfig, PredictionRequest};
use wt_scoremap::landcover::LandCoverGrid;
use wt_terrain::DemRegistry;

struct FixedWeather {
    current: WeatherSnapshot,
    forecast: Vec<ForecastHour>,
}

impl WeatherProvider for FixedWeather {
    fn current(&self, _point: &GeoPoint) -> Option<WeatherSnapshot> {
        Some(self.current)
    }
    fn hourly_forecast(&self, _point: &GeoPoint) -> Vec<ForecastHour> {
        self.forecast.clone()
    }
}

fn forecast_hour(raw_time: &str, temperature_f: f64, pressure_inhg: f64, wind_speed_mph: f64, wind_direction_deg: f64) -> ForecastHour {
    let tz: chrono_tz::Tz = "America/New_York".parse().unwrap();
    let time = wt_common::time::LocalDateTime::parse(raw_time, tz).unwrap().inner();
    ForecastHour {
        time,
        temperature_f,
        pressure_inhg,
        wind_speed_mph,
        wind_gust_mph: wind_speed_mph,
        wind_direction_deg: Bearing::from_degrees(wind_direction_deg),
    }
}

fn collaborators_with_weather(weather: FixedWeather) -> Collaborators {
    Collaborators {
        fallback_dem: Box::new(FallbackCollaborators),
        canopy: Box::new(FallbackCollaborators),
        roads: Box::new(FallbackCollaborators),
        weather: Box::new(weather),
        land_cover: Box::new(FallbackCollaborators),
        stand_profiles: Box::new(FallbackCollaborators),
        thermal: None,
        security: Box::new(FallbackCollaborators),
    }
}

fn request(date_time: &str, season: &str, pressure: Option<HuntingPressureLevel>) -> PredictionRequest {
    PredictionRequest {
        lat: 43.3127,
        lon: -73.2271,
        date_time: date_time.to_string(),
        season: season.to_string(),
        hunting_pressure_level: pressure,
        fast_mode: false,
    }
}

#[tokio::test]
async fn scenario_a_am_correctness() {
    let weather = FixedWeather {
        current: WeatherSnapshot { temperature_f: 45.0, pressure_inhg: 30.1, wind_speed_mph: 5.0 },
        forecast: vec![forecast_hour("2025-08-26T07:00:00", 45.0, 30.1, 5.0, 270.0)],
    };
    let collaborators = collaborators_with_weather(weather);
    let config = PredictionConfig::default();
    let dem = DemRegistry::empty();

    let req = request("2025-08-26T07:00:00", "early_season", Some(HuntingPressureLevel::Moderate));
    let resp = predict(&req, &config, &dem, &collaborators).await.unwrap();

    assert!(resp.biological_analysis.movement_direction.contains("feeding areas → bedding areas"));
    assert_eq!(resp.biological_analysis.activity_level, "high");
    assert!(resp.biological_analysis.enhanced_confidence > 0.55);
}

#[tokio::test]
async fn scenario_b_cold_front_raises_confidence_and_schedules_a_window() {
    let weather = FixedWeather {
        current: WeatherSnapshot { temperature_f: 38.0, pressure_inhg: 29.6, wind_speed_mph: 12.0 },
        forecast: vec![
            forecast_hour("2025-08-26T14:00:00", 50.0, 29.5, 10.0, 90.0),
            forecast_hour("2025-08-26T20:00:00", 38.0, 29.6, 12.0, 90.0),
        ],
    };
    let mut collaborators = collaborators_with_weather(weather);
    collaborators.stand_profiles = Box::new(SingleStand);
    let config = PredictionConfig::default();
    let dem = DemRegistry::empty();

    let req = request("2025-08-26T14:00:00", "early_season", Some(HuntingPressureLevel::Low));
    let resp = predict(&req, &config, &dem, &collaborators).await.unwrap();

    assert!(resp.biological_analysis.weather_notes.iter().any(|n| n.contains("increased deer movement")));
    assert!(resp.biological_analysis.enhanced_confidence > 0.70);

    assert!(!resp.hunt_schedule.is_empty(), "cold front + aligned wind should schedule a hunt window");
    assert!(!resp.stand_wind_status.is_empty());

    let matched = resp
        .stand_recommendations
        .iter()
        .find(|r| r.point.strategy == "primary_multi_activity")
        .expect("primary multi-activity stand should be generated");
    let credibility = matched.wind_credibility.as_ref().expect("coupled stand should carry wind_credibility");
    assert_eq!(credibility.match_key.as_deref(), Some("primary_multi_activity"));
    if credibility.priority_boost > 0.0 {
        assert!(matched.point.confidence_0_1 <= 0.99);
        assert_eq!(matched.point.extra_attributes.get("hunt_window_priority").map(String::as_str), Some("true"));
    }
}

struct SingleStand;
impl StandProfileSource for SingleStand {
    fn profiles(&self) -> Vec<StandProfile> {
        vec![StandProfile {
            id: "ridge-stand".to_string(),
            display_name: "Ridge Stand".to_string(),
            preferred_winds: vec![PreferredWind { compass_label: Bearing::from_degrees(90.0), tolerance_deg: 25.0 }],
            max_gust_mph: None,
            strategy_match: Some("primary_multi_activity".to_string()),
            notes: None,
        }]
    }
}

#[tokio::test]
async fn scenario_c_high_pressure_midday() {
    let weather = FixedWeather {
        current: WeatherSnapshot { temperature_f: 55.0, pressure_inhg: 30.3, wind_speed_mph: 8.0 },
        forecast: vec![forecast_hour("2025-08-26T13:00:00", 55.0, 30.3, 8.0, 270.0)],
    };
    let collaborators = collaborators_with_weather(weather);
    let config = PredictionConfig::default();
    let dem = DemRegistry::empty();

    let req = request("2025-08-26T13:00:00", "early_season", Some(HuntingPressureLevel::High));
    let resp = predict(&req, &config, &dem, &collaborators).await.unwrap();

    assert!(resp.biological_analysis.pressure_notes.iter().any(|n| n.contains("reduced daytime")));
    assert_eq!(resp.biological_analysis.activity_level, "low");
    assert!(resp.biological_analysis.enhanced_confidence < 0.45);
}

#[tokio::test]
async fn scenario_d_post_hunt_or_end_of_day_context_override() {
    let collaborators = Collaborators::fallback_only();
    let config = PredictionConfig::default();
    let dem = DemRegistry::empty();

    let mut req = request("2025-09-03T19:19:00", "early_season", None);
    req.lat = 43.3140;
    req.lon = -73.2306;
    let resp = predict(&req, &config, &dem, &collaborators).await.unwrap();

    let guidance = &resp.hunting_context.recommendations.primary;
    assert!(
        guidance.contains("STAY PUT") || guidance.contains("LAST CHANCE"),
        "got: {guidance}"
    );
}

#[tokio::test]
async fn fallback_only_collaborators_still_produce_a_full_response() {
    let collaborators = Collaborators::fallback_only();
    let config = PredictionConfig::default();
    let dem = DemRegistry::empty();

    let req = request("2025-08-26T07:00:00", "rut", None);
    let resp = predict(&req, &config, &dem, &collaborators).await.unwrap();

    assert_eq!(resp.terrain_features.lidar_coverage_ratio, 0.0);
    assert!(resp.five_best_stands.len() <= 5);
    assert!(resp.overall_confidence >= 0.0 && resp.overall_confidence <= 1.0);
}
