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

//! Selects the final twelve ranked locations (3 stands, 3 bedding, 3
//! feeding, 3 cameras) from the score grids and the security analysis.

use std::collections::BTreeMap;

use tracing::warn;
use wt_common::grid::{CoordinateGrid, Grid};
use wt_scoremap::{publish_score, ScoreGrid, SecurityAnalysis};
use wt_wind::ThermalDirectionTag;

use crate::types::OptimizedPoint;

/// Minimum haversine separation enforced between any two stand sites.
pub const MIN_DIST_M: f64 = 100.0;

fn zero_within(grid: &Grid, coords: &CoordinateGrid, center_row: usize, center_col: usize, min_dist_m: f64) -> Grid {
    let center = coords.at(center_row, center_col);
    let mut out = grid.clone();
    for (r, c, p) in coords.iter_cells() {
        if center.haversine_distance_m(&p) < min_dist_m {
            out.set(r, c, 0.0);
        }
    }
    out
}

fn security_tier_multiplier(security: &SecurityAnalysis) -> f64 {
    let mut m = if security.overall_security_score > 70.0 {
        1.5
    } else if security.overall_security_score > 50.0 {
        1.2
    } else {
        0.8
    };
    if security.access_pressure_pct < 30.0 {
        m *= 1.3;
    }
    if security.road_proximity_pct < 40.0 {
        m *= 1.2;
    }
    m
}

fn optimal_time_tags(thermal_direction: ThermalDirectionTag) -> Vec<String> {
    match thermal_direction {
        ThermalDirectionTag::Downslope => vec!["morning".to_string()],
        ThermalDirectionTag::Upslope => vec!["evening".to_string()],
        ThermalDirectionTag::Neutral => vec!["dawn".to_string(), "dusk".to_string()],
    }
}

fn make_point(
    coords: &CoordinateGrid,
    row: usize,
    col: usize,
    raw_score: f64,
    description: &str,
    strategy: &str,
    time_tags: Vec<String>,
    confidence: f64,
    sources: &[&str],
) -> OptimizedPoint {
    OptimizedPoint {
        location: coords.at(row, col),
        score_0_10: publish_score(raw_score),
        description: description.to_string(),
        strategy: strategy.to_string(),
        optimal_time_tags: time_tags,
        confidence_0_1: confidence,
        data_source_tags: sources.iter().map(|s| s.to_string()).collect(),
        extra_attributes: BTreeMap::new(),
    }
}

/// Three stand sites: primary multi-activity, thermal-advantage,
/// maximum-security. Enforces `MIN_DIST_M` separation between them.
pub fn generate_stand_sites(
    grid: &ScoreGrid,
    coords: &CoordinateGrid,
    security: &SecurityAnalysis,
    combined_primary: &Grid,
    thermal_active: bool,
    thermal_direction: ThermalDirectionTag,
    thermal_strength_0_10: f64,
) -> Vec<OptimizedPoint> {
    let mut out = Vec::new();

    let Some((p_row, p_col, p_val)) = combined_primary.argmax() else {
        warn!("combined primary grid is entirely zero; no stand sites selected");
        return out;
    };
    out.push(make_point(
        coords, p_row, p_col, p_val,
        "Primary multi-activity stand: best blend of travel, bedding, and feeding access",
        "primary_multi_activity",
        optimal_time_tags(thermal_direction),
        0.9,
        &["USGS_Terrain", "OSM_Security", "Thermal_Analysis", "Behavioral_Rules"],
    ));

    let thermal_bonus_mult = if thermal_active { 1.0 + thermal_strength_0_10 / 10.0 } else { 1.0 };
    let thermal_travel = grid.travel.map(|v| v * thermal_bonus_mult);
    let thermal_travel = zero_within(&thermal_travel, coords, p_row, p_col, MIN_DIST_M);
    if let Some((row, col, val)) = thermal_travel.argmax() {
        out.push(make_point(
            coords, row, col, val,
            "Thermal-advantage stand: travel corridor boosted by the active thermal direction",
            "thermal_advantage",
            optimal_time_tags(thermal_direction),
            0.85,
            &["USGS_Terrain", "Thermal_Analysis"],
        ));
    }

    let tier = security_tier_multiplier(security);
    let mut security_travel = grid.travel.map(|v| v * tier);
    for p in &out {
        let (row, col) = nearest_cell(coords, &p.location);
        security_travel = zero_within(&security_travel, coords, row, col, MIN_DIST_M);
    }
    if let Some((row, col, val)) = security_travel.argmax() {
        out.push(make_point(
            coords, row, col, val,
            "Maximum-security stand: lowest access pressure and road proximity",
            "maximum_security",
            vec!["all_day".to_string(), "high_pressure_periods".to_string()],
            0.8,
            &["USGS_Terrain", "OSM_Security"],
        ));
    }

    out
}

fn nearest_cell(coords: &CoordinateGrid, point: &wt_common::geo::GeoPoint) -> (usize, usize) {
    coords
        .iter_cells()
        .min_by(|(_, _, a), (_, _, b)| {
            point
                .haversine_distance_m(a)
                .partial_cmp(&point.haversine_distance_m(b))
                .unwrap()
        })
        .map(|(r, c, _)| (r, c))
        .unwrap_or((0, 0))
}

/// Three bedding sites: security-weighted, thermal-weighted, dense-cover.
pub fn generate_bedding_sites(
    grid: &ScoreGrid,
    coords: &CoordinateGrid,
    security: &SecurityAnalysis,
    thermal_active: bool,
    thermal_direction: ThermalDirectionTag,
    thermal_strength_0_10: f64,
) -> Vec<OptimizedPoint> {
    let mut out = Vec::new();

    let security_weighted = grid.bedding.map(|v| v * (1.0 + security.overall_security_score / 100.0));
    if let Some((r, c, v)) = security_weighted.argmax() {
        out.push(make_point(
            coords, r, c, v,
            "Security-weighted bedding zone",
            "security_bedding",
            vec!["all_day".to_string()],
            0.85,
            &["OSM_Security", "Behavioral_Rules"],
        ));
    }

    let thermal_bonus = if thermal_active {
        match thermal_direction {
            ThermalDirectionTag::Downslope => 1.5 * (thermal_strength_0_10 / 10.0),
            ThermalDirectionTag::Upslope => 1.0 * (thermal_strength_0_10 / 10.0),
            ThermalDirectionTag::Neutral => 0.0,
        }
    } else {
        0.0
    };
    let thermal_weighted = grid.bedding.map(|v| v + thermal_bonus);
    if let Some((r, c, v)) = thermal_weighted.argmax() {
        out.push(make_point(
            coords, r, c, v,
            "Thermal-weighted bedding zone",
            "thermal_bedding",
            vec!["morning".to_string(), "evening".to_string()],
            0.8,
            &["Thermal_Analysis", "USGS_Terrain"],
        ));
    }

    let cover_weighted = grid.bedding.map(|v| v * 1.3);
    if let Some((r, c, v)) = cover_weighted.argmax() {
        out.push(make_point(
            coords, r, c, v,
            "Dense-cover bedding zone",
            "cover_bedding",
            vec!["all_day".to_string()],
            0.75,
            &["GEE_Vegetation", "USGS_Terrain"],
        ));
    }

    out
}

/// Three feeding sites: primary, security-focused, evening-activity.
pub fn generate_feeding_sites(
    grid: &ScoreGrid,
    coords: &CoordinateGrid,
    security: &SecurityAnalysis,
) -> Vec<OptimizedPoint> {
    let mut out = Vec::new();

    let primary = grid.feeding.map(|v| v * (0.9 + security.overall_security_score / 200.0));
    if let Some((r, c, v)) = primary.argmax() {
        out.push(make_point(
            coords, r, c, v,
            "Primary feeding site",
            "primary_feeding",
            vec!["evening".to_string()],
            0.9,
            &["GEE_Vegetation", "Behavioral_Rules"],
        ));
    }

    let security_focused = grid.feeding.map(|v| v * (1.2 + security.overall_security_score / 100.0));
    if let Some((r, c, v)) = security_focused.argmax() {
        out.push(make_point(
            coords, r, c, v,
            "Security-focused feeding site",
            "security_feeding",
            vec!["evening".to_string()],
            0.85,
            &["OSM_Security", "GEE_Vegetation"],
        ));
    }

    let evening_weighted = grid.feeding.map(|v| v * 1.2);
    if let Some((r, c, v)) = evening_weighted.argmax() {
        out.push(make_point(
            coords, r, c, v,
            "Evening-activity feeding site",
            "evening_feeding",
            vec!["evening".to_string()],
            0.8,
            &["Behavioral_Rules"],
        ));
    }

    out
}

/// Three camera placements: travel corridor, food source, remote security.
pub fn generate_camera_placements(
    grid: &ScoreGrid,
    coords: &CoordinateGrid,
    security: &SecurityAnalysis,
) -> Vec<OptimizedPoint> {
    let mut out = Vec::new();

    let travel_mult = if security.overall_security_score > 60.0 { 1.3 } else { 1.0 };
    let travel_corridor = grid.travel.map(|v| v * travel_mult);
    if let Some((r, c, v)) = travel_corridor.argmax() {
        out.push(make_point(
            coords, r, c, v,
            "Travel-corridor camera",
            "travel_camera",
            vec!["all_day".to_string()],
            0.85,
            &["USGS_Terrain"],
        ));
    }

    let food_mult = if security.overall_security_score > 50.0 { 1.2 } else { 1.0 };
    let food_source = grid.feeding.map(|v| v * food_mult);
    if let Some((r, c, v)) = food_source.argmax() {
        out.push(make_point(
            coords, r, c, v,
            "Food-source camera",
            "food_camera",
            vec!["evening".to_string()],
            0.8,
            &["GEE_Vegetation"],
        ));
    }

    let mature_buck_bonus = 1.2;
    let security_camera = grid
        .bedding
        .map(|v| v * (1.0 + security.overall_security_score / 100.0) * mature_buck_bonus);
    if let Some((r, c, v)) = security_camera.argmax() {
        out.push(make_point(
            coords, r, c, v,
            "Remote-security camera",
            "security_camera",
            vec!["all_day".to_string()],
            0.9,
            &["OSM_Security", "Behavioral_Rules"],
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wt_common::geo::GeoPoint;
    use wt_common::grid::GRID_SIDE;
    use wt_scoremap::ScoreGrid;

    fn uniform_grid(value: f64) -> ScoreGrid {
        let mut g = Grid::zeroed();
        for r in 0..GRID_SIDE {
            for c in 0..GRID_SIDE {
                g.set(r, c, value);
            }
        }
        ScoreGrid { travel: g.clone(), bedding: g.clone(), feeding: g }
    }

    #[test]
    fn entirely_zero_bucket_reports_no_points_not_panics() {
        let grid = uniform_grid(0.0);
        let coords = CoordinateGrid::centered_on(&GeoPoint::new(43.0, -73.0).unwrap(), wt_common::grid::DEFAULT_SPAN_DEG);
        let security = SecurityAnalysis::unknown();
        let combined = Grid::zeroed();
        let stands = generate_stand_sites(&grid, &coords, &security, &combined, false, ThermalDirectionTag::Neutral, 0.0);
        assert!(stands.is_empty());
    }

    #[test]
    fn full_pipeline_emits_twelve_points_when_grids_are_non_zero() {
        let grid = uniform_grid(3.0);
        let coords = CoordinateGrid::centered_on(&GeoPoint::new(43.3, -73.2).unwrap(), wt_common::grid::DEFAULT_SPAN_DEG);
        let security = SecurityAnalysis::unknown();
        let combined = grid.travel.combine(&grid.bedding, |t, b| t * 0.5 + b * 0.3).combine(&grid.feeding, |tb, f| tb + f * 0.2);

        let stands = generate_stand_sites(&grid, &coords, &security, &combined, false, ThermalDirectionTag::Neutral, 0.0);
        let bedding = generate_bedding_sites(&grid, &coords, &security, false, ThermalDirectionTag::Neutral, 0.0);
        let feeding = generate_feeding_sites(&grid, &coords, &security);
        let cameras = generate_camera_placements(&grid, &coords, &security);

        assert_eq!(stands.len(), 3);
        assert_eq!(bedding.len(), 3);
        assert_eq!(feeding.len(), 3);
        assert_eq!(cameras.len(), 3);
    }

    #[test]
    fn stand_sites_respect_minimum_separation() {
        let grid = uniform_grid(3.0);
        let coords = CoordinateGrid::centered_on(&GeoPoint::new(43.3, -73.2).unwrap(), wt_common::grid::DEFAULT_SPAN_DEG);
        let security = SecurityAnalysis::unknown();
        let combined = grid.travel.combine(&grid.bedding, |t, b| t * 0.5 + b * 0.3).combine(&grid.feeding, |tb, f| tb + f * 0.2);
        let stands = generate_stand_sites(&grid, &coords, &security, &combined, false, ThermalDirectionTag::Neutral, 0.0);
        for i in 0..stands.len() {
            for j in (i + 1)..stands.len() {
                let d = stands[i].location.haversine_distance_m(&stands[j].location);
                assert!(d >= MIN_DIST_M - 1.0, "stands {i} and {j} only {d}m apart");
            }
        }
    }
}
