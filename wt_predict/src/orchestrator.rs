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

//! The thirteen-step prediction pipeline (§4.9): validate, grid, terrain,
//! collaborators, thermal, score maps, wind, biology, points, stand
//! refinement, hunt windows, context override, assemble.

use tracing::{info, warn};

use wt_biology::{
    activity_level, enhanced_confidence, hunting_recommendations, mature_buck_general_notes,
    movement_direction, pressure_response, seasonal_food_notes, weather_triggers, WeatherSnapshot,
};
use wt_common::bearing::Bearing;
use wt_common::geo::GeoPoint;
use wt_common::grid::{CoordinateGrid, GRID_SIDE};
use wt_common::time::{HuntingPressureLevel, LocalDateTime, Season};
use wt_common::Result;
use wt_huntwindow::scan_all;
use wt_points::{
    generate_bedding_sites, generate_camera_placements, generate_feeding_sites, generate_stand_sites,
    OptimizedPoint,
};
use wt_scoremap::{build_score_grid, combined_primary, CellTerrain, LandCoverMask, SecurityAnalysis};
use wt_stand::{
    calculate_allday_stand, calculate_evening_stand, calculate_morning_stand, validate_scent,
    TerrainContext, ThermalInput, WindContext,
};
use wt_terrain::DemRegistry;
use wt_wind::{analyze_location, analyze_wind_field, LocationType};

use crate::collaborators::Collaborators;
use crate::config::PredictionConfig;
use crate::request::PredictionRequest;
use crate::response::{
    points_to_feature_collection, BiologicalAnalysis, DataQuality, MatureBuckAnalysis,
    PredictionResponse, StandRecommendation, TerrainFeatures, WindAnalysisSection,
};
use crate::thermal;

/// A fallback weather snapshot used only when the collaborator has no
/// current reading: calm, seasonal Vermont conditions.
fn fallback_weather() -> WeatherSnapshot {
    WeatherSnapshot { temperature_f: 45.0, pressure_inhg: 30.0, wind_speed_mph: 5.0 }
}

/// Westerly prevailing wind is the Vermont norm absent a live forecast.
const FALLBACK_WIND_DIRECTION_DEG: f64 = 270.0;

fn cell_terrain(dem: &DemRegistry, point: &GeoPoint, sample_radius_m: f64, road_distance_m: f64) -> CellTerrain {
    let tp = dem.extract_point(point, sample_radius_m);
    CellTerrain { slope_deg: tp.slope_deg, aspect_deg: tp.aspect_deg, road_distance_m }
}

/// Overlays the canopy provider onto cells the land-cover provider left
/// unclassified, so a live canopy feed still sharpens a stale/fallback
/// land-cover grid instead of being silently dropped.
fn augment_land_cover(
    base: &wt_scoremap::LandCoverGrid,
    coords: &CoordinateGrid,
    collaborators: &Collaborators,
) -> wt_scoremap::LandCoverGrid {
    let mut cells = [[LandCoverMask::default(); GRID_SIDE]; GRID_SIDE];
    for (row, col, point) in coords.iter_cells() {
        let mut mask = base.at(row, col);
        if !mask.forest && !mask.deep_forest {
            if let Some(frac) = collaborators.canopy.treecover_fraction(&point) {
                if frac > 0.8 {
                    mask.deep_forest = true;
                } else if frac > 0.6 {
                    mask.forest = true;
                }
            }
        }
        cells[row][col] = mask;
    }
    wt_scoremap::LandCoverGrid::from_cells(cells)
}

fn nearest_point<'a>(from: &GeoPoint, candidates: &'a [OptimizedPoint]) -> Option<&'a OptimizedPoint> {
    candidates.iter().min_by(|a, b| {
        from.haversine_distance_m(&a.location)
            .partial_cmp(&from.haversine_distance_m(&b.location))
            .unwrap()
    })
}

/// Refines one stand's bearing against its nearest bedding anchor (C3) and
/// validates scent against every selected bedding zone. Returns all three
/// strategy variants' scent check applied, with the variant matching the
/// stand's own time-of-day tags selected as the representative refinement;
/// `None` only when no bedding zone exists to refine against.
fn refine_stand(
    stand: &OptimizedPoint,
    bedding_points: &[OptimizedPoint],
    dem: &DemRegistry,
    sample_radius_m: f64,
    wind_effective_from: Bearing,
    wind_effective_speed: f64,
    thermal: &thermal::DerivedThermal,
) -> Option<wt_stand::StandPosition> {
    let anchor = nearest_point(&stand.location, bedding_points)?;
    let anchor_terrain = dem.extract_point(&anchor.location, sample_radius_m);
    let terrain_ctx = TerrainContext {
        downhill_direction: Bearing::from_degrees(anchor_terrain.aspect_deg).opposite(),
        uphill_direction: Bearing::from_degrees(anchor_terrain.aspect_deg),
        slope_deg: anchor_terrain.slope_deg,
    };
    let wind_ctx = WindContext { wind_direction: wind_effective_from, wind_speed_mph: wind_effective_speed };
    let is_evening_family = matches!(
        thermal.window_analysis.phase,
        wt_huntwindow::ThermalPhase::PeakEveningDownslope | wt_huntwindow::ThermalPhase::PostSunsetMaximum
    );
    let thermal_bearing = wt_wind::analyzer::thermal_bearing(
        thermal.wind_state.direction_tag,
        Bearing::from_degrees(anchor_terrain.aspect_deg),
    );
    let thermal_input = ThermalInput {
        active: thermal.wind_state.active,
        bearing: thermal_bearing,
        strength_0_1: thermal.window_analysis.strength_0_1,
        is_evening_family,
    };
    let reference_distance_m = anchor.location.haversine_distance_m(&stand.location).max(50.0);

    let mut evening = calculate_evening_stand(anchor.location, &terrain_ctx, &wind_ctx, &thermal_input, reference_distance_m);
    let mut morning = calculate_morning_stand(anchor.location, &terrain_ctx, &wind_ctx, &thermal_input, reference_distance_m);
    let mut allday = calculate_allday_stand(anchor.location, &terrain_ctx, &wind_ctx, morning.bearing_from_bedding_deg, reference_distance_m);

    let bedding_bearings_from_stand: Vec<Bearing> = bedding_points
        .iter()
        .map(|b| Bearing::from_degrees(stand.location.bearing_to(&b.location)))
        .collect();
    let total_zones = bedding_bearings_from_stand.len();
    for position in [&mut evening, &mut morning, &mut allday] {
        let violations = validate_scent(position.bearing_from_bedding_deg, wind_effective_from, &bedding_bearings_from_stand);
        position.apply_scent_validation(violations.len(), total_zones);
    }

    let selected = if stand.optimal_time_tags.iter().any(|t| t == "evening") {
        evening
    } else if stand.optimal_time_tags.iter().any(|t| t == "morning") {
        morning
    } else {
        allday
    };
    Some(selected)
}

/// Runs the full pipeline for one request.
pub async fn predict(
    request: &PredictionRequest,
    config: &PredictionConfig,
    dem: &DemRegistry,
    collaborators: &Collaborators,
) -> Result<PredictionResponse> {
    // 1. validate
    let center = GeoPoint::new(request.lat, request.lon)?;
    let region_tz: chrono_tz::Tz = config
        .region_timezone
        .parse()
        .map_err(|_| wt_common::errors::input_invalid(format!("bad region timezone '{}'", config.region_timezone)))?;
    let now = LocalDateTime::parse(&request.date_time, region_tz)?;
    let season = Season::parse(&request.season)?;
    let pressure_level = request.hunting_pressure_level.unwrap_or(HuntingPressureLevel::Moderate);

    // 2. coordinate grid
    let span_deg = if request.fast_mode { config.grid_span_deg / 2.0 } else { config.grid_span_deg };
    let coords = CoordinateGrid::centered_on(&center, span_deg);
    let grid_points: Vec<GeoPoint> = coords.iter_cells().map(|(_, _, p)| p).collect();

    // 3. terrain
    let coverage_ratio = dem.coverage_ratio(&grid_points, config.sample_radius_m);
    let center_terrain = dem.extract_point(&center, config.sample_radius_m);
    info!(coverage_ratio, "terrain extraction complete");

    // 4. collaborators: land cover, roads, weather (concurrently)
    let (land_cover_raw, weather_snapshot, forecast) = tokio::join!(
        async { collaborators.land_cover.masks(&coords) },
        async { collaborators.weather.current(&center) },
        async { collaborators.weather.hourly_forecast(&center) },
    );
    let land_cover = augment_land_cover(&land_cover_raw, &coords, collaborators);

    let mut terrain_grid = [[CellTerrain { slope_deg: 0.0, aspect_deg: 0.0, road_distance_m: config.fallback_road_distance_m }; GRID_SIDE]; GRID_SIDE];
    for (row, col, point) in coords.iter_cells() {
        let road_distance_m = collaborators
            .roads
            .distance_to_nearest_road_m(&point)
            .unwrap_or(config.fallback_road_distance_m);
        terrain_grid[row][col] = cell_terrain(dem, &point, config.sample_radius_m, road_distance_m);
    }

    // 5. thermal state
    let derived_thermal = thermal::derive(now, center_terrain.slope_deg);

    // 6. score maps
    let security = collaborators.security.security(&center).unwrap_or_else(SecurityAnalysis::unknown);
    let score_grid = build_score_grid(&land_cover, &terrain_grid, None);
    let combined = combined_primary(
        &score_grid,
        &security,
        derived_thermal.wind_state.active,
        derived_thermal.wind_state.strength_0_10,
    );

    // 7. wind analysis
    let now_forecast_hour = forecast.iter().find(|h| h.time >= now.inner()).or_else(|| forecast.first());
    let wind_direction = now_forecast_hour
        .map(|h| h.wind_direction_deg)
        .unwrap_or_else(|| Bearing::from_degrees(FALLBACK_WIND_DIRECTION_DEG));
    let wind_speed = weather_snapshot
        .as_ref()
        .map(|w| w.wind_speed_mph)
        .or_else(|| now_forecast_hour.map(|h| h.wind_speed_mph))
        .unwrap_or(fallback_weather().wind_speed_mph);
    let site_wind_field = analyze_wind_field(
        wind_direction,
        wind_speed,
        derived_thermal.wind_state,
        Bearing::from_degrees(center_terrain.aspect_deg),
    );
    let stand_wind_analysis = analyze_location(
        LocationType::Stand,
        &site_wind_field,
        Bearing::from_degrees(center_terrain.aspect_deg),
        center_terrain.slope_deg,
    );
    let bedding_wind_analysis = analyze_location(
        LocationType::Bedding,
        &site_wind_field,
        Bearing::from_degrees(center_terrain.aspect_deg),
        center_terrain.slope_deg,
    );
    let feeding_wind_analysis = analyze_location(
        LocationType::Feeding,
        &site_wind_field,
        Bearing::from_degrees(center_terrain.aspect_deg),
        center_terrain.slope_deg,
    );

    // 8. biological overlay
    let weather = weather_snapshot.clone().unwrap_or_else(fallback_weather);
    let activity = activity_level(now.hour());
    let movement = movement_direction(now.hour());
    let weather_influence = weather_triggers(&weather);
    let pressure = pressure_response(pressure_level, now.hour());
    let seasonal_notes: Vec<String> = seasonal_food_notes(season).into_iter().map(String::from).collect();
    let enhanced_conf = enhanced_confidence(0.5, &weather_influence, &pressure, activity);
    let mature_buck_notes = mature_buck_general_notes(movement);
    let biology_recs = hunting_recommendations(movement, &weather_influence, &pressure);
    let biological_data_quality = if weather_snapshot.is_some() { DataQuality::Full } else { DataQuality::Degraded };

    // 9. points generator
    let stand_points = generate_stand_sites(
        &score_grid,
        &coords,
        &security,
        &combined,
        derived_thermal.wind_state.active,
        derived_thermal.wind_state.direction_tag,
        derived_thermal.wind_state.strength_0_10,
    );
    let bedding_points = generate_bedding_sites(
        &score_grid,
        &coords,
        &security,
        derived_thermal.wind_state.active,
        derived_thermal.wind_state.direction_tag,
        derived_thermal.wind_state.strength_0_10,
    );
    let feeding_points = generate_feeding_sites(&score_grid, &coords, &security);
    let camera_points = generate_camera_placements(&score_grid, &coords, &security);

    // 10. stand refinement + scent validation
    let stand_recommendations: Vec<StandRecommendation> = stand_points
        .iter()
        .map(|stand| {
            let refined_stand = refine_stand(
                stand,
                &bedding_points,
                dem,
                config.sample_radius_m,
                site_wind_field.effective_from_deg,
                site_wind_field.effective_speed_mph,
                &derived_thermal,
            );
            if let Some(r) = &refined_stand {
                if !r.scent_safe_flag {
                    warn!(strategy = %stand.strategy, "stand has a bedding zone in its scent cone");
                }
            }
            StandRecommendation { point: stand.clone(), refined_stand, wind_credibility: None }
        })
        .collect();

    // 11. hunt-window scan, coupled back onto the matching stand recommendation
    let all_profiles = collaborators.stand_profiles.profiles();
    let valid_profiles: Vec<_> = all_profiles
        .into_iter()
        .filter(|p| match p.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("skipping malformed stand profile: {e}");
                false
            }
        })
        .collect();
    let (hunt_windows, stand_statuses) = if valid_profiles.is_empty() || forecast.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        scan_all(&valid_profiles, &forecast, Some(&derived_thermal.window_analysis))
    };

    const PRIORITY_BOOST_SCALE: f64 = 100.0;
    const MAX_BOOSTED_CONFIDENCE: f64 = 0.99;
    let stand_recommendations: Vec<StandRecommendation> = {
        let status_by_match: std::collections::BTreeMap<&str, &wt_huntwindow::StandWindStatus> = stand_statuses
            .iter()
            .filter_map(|s| s.match_key.as_deref().map(|k| (k, s)))
            .collect();
        stand_recommendations
            .into_iter()
            .map(|mut r| {
                if let Some(status) = status_by_match.get(r.point.strategy.as_str()) {
                    if status.priority_boost > 0.0 {
                        r.point.confidence_0_1 =
                            (r.point.confidence_0_1 + status.priority_boost / PRIORITY_BOOST_SCALE).min(MAX_BOOSTED_CONFIDENCE);
                        r.point.extra_attributes.insert("hunt_window_priority".to_string(), "true".to_string());
                    }
                    r.wind_credibility = Some((*status).clone());
                }
                r
            })
            .collect()
    };

    // 12. context override
    let hunting_context = wt_context::analyze(now);

    // 13. assemble
    let mean_slope_deg = {
        let mut sum = 0.0;
        for row in terrain_grid.iter() {
            for cell in row.iter() {
                sum += cell.slope_deg;
            }
        }
        sum / (GRID_SIDE * GRID_SIDE) as f64
    };
    let terrain_data_quality = if coverage_ratio >= 1.0 {
        DataQuality::Full
    } else if coverage_ratio > 0.0 {
        DataQuality::Degraded
    } else {
        DataQuality::Unavailable
    };

    let mut all_points: Vec<OptimizedPoint> = Vec::new();
    all_points.extend(stand_points.iter().cloned());
    all_points.extend(bedding_points.iter().cloned());
    all_points.extend(feeding_points.iter().cloned());
    all_points.extend(camera_points.iter().cloned());
    all_points.sort_by(|a, b| b.score_0_10.partial_cmp(&a.score_0_10).unwrap());
    all_points.truncate(5);

    let stand_suggestions: Vec<String> = stand_points
        .iter()
        .map(|p| format!("{} ({})", p.description, p.strategy))
        .collect();

    Ok(PredictionResponse {
        stand_recommendations,
        bedding_zones: points_to_feature_collection(&bedding_points),
        feeding_areas: points_to_feature_collection(&feeding_points),
        travel_corridors: points_to_feature_collection(&stand_points),
        five_best_stands: all_points,
        camera_placements: camera_points,
        terrain_features: TerrainFeatures {
            elevation_m: center_terrain.elevation_m,
            mean_slope_deg,
            dominant_aspect_deg: center_terrain.aspect_deg,
            lidar_coverage_ratio: coverage_ratio,
            data_quality: terrain_data_quality,
        },
        wind_analysis: WindAnalysisSection {
            site: site_wind_field,
            stand: stand_wind_analysis.into(),
            bedding: bedding_wind_analysis.into(),
            feeding: feeding_wind_analysis.into(),
        },
        biological_analysis: BiologicalAnalysis {
            movement_direction: movement.to_string(),
            activity_level: format!("{activity:?}").to_lowercase(),
            weather_notes: weather_influence.notes.clone(),
            pressure_notes: pressure.notes.clone(),
            seasonal_food_notes: seasonal_notes,
            enhanced_confidence: enhanced_conf,
            data_quality: biological_data_quality,
        },
        mature_buck_analysis: MatureBuckAnalysis { general_notes: mature_buck_notes, stand_suggestions },
        hunt_schedule: hunt_windows,
        stand_wind_status: stand_statuses,
        hunting_context,
        hunting_recommendations: biology_recs,
        overall_confidence: enhanced_conf,
    })
}
