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

//! Places evening, morning, and all-day stands relative to a dominant
//! bedding zone, under crosswind, thermal, or terrain-dominant regimes, and
//! validates each against scent contamination of bedding.

use tracing::warn;
use wt_common::{bearing::Bearing, geo::GeoPoint};

use crate::types::{StandPosition, StandStrategy, ThermalInput};

pub const WIND_THRESHOLD_MPH: f64 = 10.0;
pub const STRONG_WIND_MPH: f64 = 20.0;

const EVENING_DISTANCE_MULTIPLIER: f64 = 1.5;
const MORNING_DISTANCE_MULTIPLIER: f64 = 1.3;
const ALLDAY_DISTANCE_MULTIPLIER: f64 = 1.0;

fn crosswind_options(wind_direction: Bearing) -> (Bearing, Bearing) {
    (
        Bearing::from_degrees(wind_direction.degrees() + 90.0),
        Bearing::from_degrees(wind_direction.degrees() - 90.0),
    )
}

fn closer_option(target: Bearing, a: Bearing, b: Bearing) -> Bearing {
    if target.angular_diff(a) <= target.angular_diff(b) { a } else { b }
}

pub struct TerrainContext {
    pub downhill_direction: Bearing,
    pub uphill_direction: Bearing,
    pub slope_deg: f64,
}

pub struct WindContext {
    pub wind_direction: Bearing,
    pub wind_speed_mph: f64,
}

fn evening_bearing(terrain: &TerrainContext, wind: &WindContext, thermal: &ThermalInput) -> (Bearing, bool, Option<Bearing>, String) {
    let downwind = wind.wind_direction.opposite();

    if wind.wind_speed_mph > WIND_THRESHOLD_MPH {
        let (opt_a, opt_b) = crosswind_options(wind.wind_direction);
        let chosen = closer_option(terrain.downhill_direction, opt_a, opt_b);
        return (chosen, true, Some(chosen), "crosswind option closest to deer movement (downhill)".into());
    }

    if thermal.active && (thermal.is_evening_family || thermal.strength_0_1 > 0.05) && wind.wind_speed_mph < STRONG_WIND_MPH {
        let interim = Bearing::combine(thermal.bearing, terrain.downhill_direction, 0.6, 0.4);
        let downwind_weight = if wind.wind_speed_mph < 5.0 {
            0.0
        } else if wind.wind_speed_mph < 10.0 {
            0.05
        } else {
            0.15
        };
        let bearing = Bearing::combine(interim, downwind, 1.0 - downwind_weight, downwind_weight);
        return (bearing, false, None, "thermal-dominant evening descent blended toward downhill".into());
    }

    if wind.wind_speed_mph >= STRONG_WIND_MPH {
        let bearing = Bearing::combine(terrain.downhill_direction, downwind, 0.4, 0.6);
        return (bearing, false, None, "strong wind overrides thermal influence".into());
    }

    let wind_weight = (wind.wind_speed_mph / 50.0).min(0.4);
    let bearing = Bearing::combine(terrain.downhill_direction, downwind, 1.0 - wind_weight, wind_weight);
    (bearing, false, None, "terrain-dominant evening descent toward downhill".into())
}

fn morning_bearing(terrain: &TerrainContext, wind: &WindContext, thermal: &ThermalInput) -> (Bearing, bool, Option<Bearing>, String) {
    if wind.wind_speed_mph > WIND_THRESHOLD_MPH {
        let (opt_a, opt_b) = crosswind_options(wind.wind_direction);
        let chosen = if terrain.slope_deg > 5.0 {
            closer_option(terrain.uphill_direction, opt_a, opt_b)
        } else {
            opt_a
        };
        return (chosen, true, Some(chosen), "crosswind option closest to deer destination (uphill)".into());
    }

    if terrain.slope_deg > 5.0 {
        if thermal.strength_0_1 > 0.3 {
            let bearing = Bearing::combine(
                terrain.uphill_direction,
                Bearing::from_degrees(terrain.uphill_direction.degrees() + 30.0),
                0.8,
                0.2,
            );
            return (bearing, false, None, "thermal-adjusted uphill intercept".into());
        }
        return (terrain.uphill_direction, false, None, "uphill intercept of returning deer".into());
    }

    let wind_plus_90 = Bearing::from_degrees(wind.wind_direction.degrees() + 90.0);
    let downwind = wind.wind_direction.opposite();
    let bearing = Bearing::combine(downwind, wind_plus_90, 0.7, 0.3);
    (bearing, false, None, "flat terrain, light-wind default position".into())
}

fn allday_bearing(terrain: &TerrainContext, wind: &WindContext, morning: Bearing) -> (Bearing, bool, Option<Bearing>, String) {
    if wind.wind_speed_mph > WIND_THRESHOLD_MPH {
        let (opt_a, opt_b) = crosswind_options(wind.wind_direction);
        let chosen = if morning.angular_diff(opt_a) >= morning.angular_diff(opt_b) { opt_a } else { opt_b };
        return (chosen, true, Some(chosen), "crosswind option furthest from the morning stand for diversity".into());
    }

    if terrain.slope_deg > 5.0 {
        let bearing = Bearing::from_degrees(terrain.uphill_direction.degrees() + 45.0);
        return (bearing, false, None, "uphill-offset all-day vantage".into());
    }

    if terrain.slope_deg > 15.0 {
        let downwind = wind.wind_direction.opposite();
        let bearing = Bearing::from_degrees(downwind.degrees() + 45.0);
        return (bearing, false, None, "downwind-offset all-day vantage on moderate slope".into());
    }

    (wind.wind_direction.opposite(), false, None, "pure downwind all-day vantage on flat terrain".into())
}

/// Reference distance is supplied by the caller (chosen from score maps by
/// C6); the calculator only applies the per-strategy multiplier.
pub fn calculate_evening_stand(
    anchor: GeoPoint,
    terrain: &TerrainContext,
    wind: &WindContext,
    thermal: &ThermalInput,
    reference_distance_m: f64,
) -> StandPosition {
    let (bearing, wind_aware, crosswind, reason) = evening_bearing(terrain, wind, thermal);
    StandPosition {
        anchor_bedding_point: anchor,
        bearing_from_bedding_deg: bearing,
        distance_m: reference_distance_m * EVENING_DISTANCE_MULTIPLIER,
        wind_aware_flag: wind_aware,
        crosswind_bearing_deg: crosswind,
        strategy_tag: StandStrategy::Evening,
        primary_reason: reason,
        adjustments: Vec::new(),
        scent_safe_flag: true,
    }
}

pub fn calculate_morning_stand(
    anchor: GeoPoint,
    terrain: &TerrainContext,
    wind: &WindContext,
    thermal: &ThermalInput,
    reference_distance_m: f64,
) -> StandPosition {
    let (bearing, wind_aware, crosswind, reason) = morning_bearing(terrain, wind, thermal);
    StandPosition {
        anchor_bedding_point: anchor,
        bearing_from_bedding_deg: bearing,
        distance_m: reference_distance_m * MORNING_DISTANCE_MULTIPLIER,
        wind_aware_flag: wind_aware,
        crosswind_bearing_deg: crosswind,
        strategy_tag: StandStrategy::Morning,
        primary_reason: reason,
        adjustments: Vec::new(),
        scent_safe_flag: true,
    }
}

pub fn calculate_allday_stand(
    anchor: GeoPoint,
    terrain: &TerrainContext,
    wind: &WindContext,
    morning_bearing_deg: Bearing,
    reference_distance_m: f64,
) -> StandPosition {
    let (bearing, wind_aware, crosswind, reason) = allday_bearing(terrain, wind, morning_bearing_deg);
    StandPosition {
        anchor_bedding_point: anchor,
        bearing_from_bedding_deg: bearing,
        distance_m: reference_distance_m * ALLDAY_DISTANCE_MULTIPLIER,
        wind_aware_flag: wind_aware,
        crosswind_bearing_deg: crosswind,
        strategy_tag: StandStrategy::AllDay,
        primary_reason: reason,
        adjustments: Vec::new(),
        scent_safe_flag: true,
    }
}

/// Validates a stand bearing (from bedding to stand) against scent
/// contamination of a list of bedding zone bearings (also from the stand).
/// Returns the violating zone indices; the stand is scent-safe iff empty.
pub fn validate_scent(
    stand_bearing_from_bedding: Bearing,
    wind_direction: Bearing,
    bedding_zone_bearings_from_stand: &[Bearing],
) -> Vec<usize> {
    let scent_bearing = wind_direction.opposite();
    let violations: Vec<usize> = bedding_zone_bearings_from_stand
        .iter()
        .enumerate()
        .filter(|(_, b)| b.angular_diff(scent_bearing) <= 45.0)
        .map(|(i, _)| i)
        .collect();

    if !violations.is_empty() {
        warn!(
            "scent validation: {} of {} bedding zones in the scent cone of bearing {:?}",
            violations.len(),
            bedding_zone_bearings_from_stand.len(),
            stand_bearing_from_bedding
        );
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terrain(slope: f64) -> TerrainContext {
        TerrainContext {
            downhill_direction: Bearing::from_degrees(180.0),
            uphill_direction: Bearing::from_degrees(0.0),
            slope_deg: slope,
        }
    }

    #[test]
    fn evening_strong_crosswind_picks_option_closer_to_downhill() {
        let wind = WindContext { wind_direction: Bearing::from_degrees(270.0), wind_speed_mph: 15.0 };
        let anchor = GeoPoint::new(43.0, -73.0).unwrap();
        let sp = calculate_evening_stand(anchor, &terrain(15.0), &wind, &ThermalInput::inactive(), 200.0);
        assert!(sp.wind_aware_flag);
        assert_eq!(sp.bearing_from_bedding_deg.degrees(), 180.0);
    }

    #[test]
    fn morning_stand_not_wind_aware_below_threshold_on_slope() {
        let wind = WindContext { wind_direction: Bearing::from_degrees(90.0), wind_speed_mph: 4.0 };
        let anchor = GeoPoint::new(43.0, -73.0).unwrap();
        let sp = calculate_morning_stand(anchor, &terrain(10.0), &wind, &ThermalInput::inactive(), 200.0);
        assert!(!sp.wind_aware_flag);
    }

    #[test]
    fn allday_differs_from_morning_by_more_than_90_degrees_in_crosswind() {
        let wind = WindContext { wind_direction: Bearing::from_degrees(270.0), wind_speed_mph: 15.0 };
        let anchor = GeoPoint::new(43.0, -73.0).unwrap();
        let morning = calculate_morning_stand(anchor, &terrain(15.0), &wind, &ThermalInput::inactive(), 200.0);
        let allday = calculate_allday_stand(anchor, &terrain(15.0), &wind, morning.bearing_from_bedding_deg, 200.0);
        assert!(allday.bearing_from_bedding_deg.angular_diff(morning.bearing_from_bedding_deg) > 90.0);
    }

    #[test]
    fn scent_violation_detected_for_downwind_bedding_zone() {
        let stand_bearing = Bearing::from_degrees(90.0);
        let wind_from = Bearing::from_degrees(270.0); // scent bearing = 90
        let zones = vec![Bearing::from_degrees(90.0)];
        let violations = validate_scent(stand_bearing, wind_from, &zones);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn no_violation_when_bedding_outside_scent_cone() {
        let stand_bearing = Bearing::from_degrees(90.0);
        let wind_from = Bearing::from_degrees(270.0);
        let zones = vec![Bearing::from_degrees(0.0)];
        let violations = validate_scent(stand_bearing, wind_from, &zones);
        assert!(violations.is_empty());
    }
}
