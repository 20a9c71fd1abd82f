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

//! Fuses a prevailing wind field with a terrain-driven thermal field into an
//! effective wind vector, scent cone, and per-location-type advantages.

use wt_common::bearing::Bearing;

use crate::field::{ThermalDirectionTag, ThermalState, WindField, THERMAL_SIGNIFICANCE_THRESHOLD};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LocationType {
    Bedding,
    Stand,
    Feeding,
}

#[derive(Clone, Debug, Default)]
pub struct LocationWindAnalysis {
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

/// `upslope -> aspect`; `downslope -> aspect + 180`; `neutral -> aspect`.
pub fn thermal_bearing(tag: ThermalDirectionTag, slope_aspect: Bearing) -> Bearing {
    match tag {
        ThermalDirectionTag::Upslope | ThermalDirectionTag::Neutral => slope_aspect,
        ThermalDirectionTag::Downslope => slope_aspect.opposite(),
    }
}

/// Thermal speed capped at ~8 mph for strength 10.
pub fn thermal_speed_mph(strength_0_10: f64) -> f64 {
    (strength_0_10 * 0.8).clamp(0.0, 8.0)
}

/// Combines two wind vectors (speed, from-bearing) via Cartesian sum.
fn vector_sum_wind(s1: f64, b1: Bearing, s2: f64, b2: Bearing) -> (f64, Bearing) {
    let x = s1 * b1.degrees().to_radians().sin() + s2 * b2.degrees().to_radians().sin();
    let y = s1 * b1.degrees().to_radians().cos() + s2 * b2.degrees().to_radians().cos();
    (x.hypot(y), Bearing::from_degrees(x.atan2(y).to_degrees()))
}

fn quality_rating(effective_speed: f64, prevailing_speed: f64, thermal_strength: f64) -> f64 {
    let mut q = 5.0;
    if (3.0..=12.0).contains(&effective_speed) {
        q += 2.0;
    }
    if effective_speed < 5.0 {
        q -= 1.0;
    }
    if effective_speed > 15.0 {
        q -= 2.0;
    }
    if thermal_strength > 5.0 {
        q += 1.5;
    } else if thermal_strength > 3.0 {
        q += 0.5;
    }
    if (effective_speed - prevailing_speed).abs() < 2.0 {
        q += 0.5;
    }
    q.clamp(0.0, 10.0)
}

/// Produces the site's WindField from a prevailing wind and a terrain-driven
/// thermal state (slope aspect taken from the Terrain Extractor's output).
pub fn analyze_wind_field(
    prevailing_from_deg: Bearing,
    prevailing_speed_mph: f64,
    thermal: ThermalState,
    slope_aspect: Bearing,
) -> WindField {
    let (effective_speed, effective_from) = if thermal.strength_0_10 < THERMAL_SIGNIFICANCE_THRESHOLD {
        (prevailing_speed_mph, prevailing_from_deg)
    } else {
        let t_bearing = thermal_bearing(thermal.direction_tag, slope_aspect);
        let t_speed = thermal_speed_mph(thermal.strength_0_10);
        vector_sum_wind(prevailing_speed_mph, prevailing_from_deg, t_speed, t_bearing)
    };

    let scent_to_deg = effective_from.opposite();
    let quality = quality_rating(effective_speed, prevailing_speed_mph, thermal.strength_0_10);

    WindField {
        prevailing_from_deg,
        prevailing_speed_mph,
        thermal_active_flag: thermal.active,
        thermal_direction_tag: thermal.direction_tag,
        thermal_strength_0_10: thermal.strength_0_10,
        effective_from_deg: effective_from,
        effective_speed_mph: effective_speed,
        scent_to_deg,
        optimal_approach_from_deg: effective_from,
        quality_rating_0_10: quality,
    }
}

/// Location-specific advantages/disadvantages compared against slope aspect.
pub fn analyze_location(
    location: LocationType,
    field: &WindField,
    slope_aspect: Bearing,
    slope_deg: f64,
) -> LocationWindAnalysis {
    let mut out = LocationWindAnalysis::default();
    let leeward_deg = slope_aspect.angular_diff(field.effective_from_deg.opposite());

    match location {
        LocationType::Bedding => {
            if leeward_deg < 90.0 {
                out.advantages.push("leeward slope shelters bedding from the effective wind".into());
            }
            if field.effective_speed_mph > 10.0 {
                out.disadvantages.push("strong wind (>10 mph) may prevent bedding use".into());
            }
        }
        LocationType::Stand => {
            let upwind_diff = field.effective_from_deg.angular_diff(slope_aspect);
            if upwind_diff < 45.0 {
                out.advantages.push("upwind approach available relative to slope aspect".into());
            }
            if (5.0..=12.0).contains(&field.effective_speed_mph) {
                out.advantages.push("optimal wind speed for scent control".into());
            }
            if field.effective_speed_mph < 3.0 {
                out.disadvantages.push("light wind caution: scent may pool rather than carry".into());
            }
        }
        LocationType::Feeding => {
            if slope_deg > 15.0 {
                out.advantages.push("multiple approach options from varied aspects".into());
            }
            if field.effective_speed_mph > 12.0 {
                out.disadvantages.push("strong wind (>12 mph) caution near feeding area".into());
            }
        }
    }

    out
}

/// Entry-route / scent-tip recommendations for the site.
pub fn recommendations(field: &WindField) -> Vec<String> {
    let mut out = Vec::new();

    if field.thermal_active_flag {
        match field.thermal_direction_tag {
            ThermalDirectionTag::Downslope => {
                out.push("morning approach from upper elevations".into())
            }
            ThermalDirectionTag::Upslope => {
                out.push("evening approach from lower elevations".into())
            }
            ThermalDirectionTag::Neutral => {}
        }
        out.push("plan timing around thermal phase shifts".into());
    }

    out.push(format!(
        "primary upwind direction: {}",
        field.optimal_approach_from_deg.compass_label()
    ));

    if field.effective_speed_mph < 3.0 {
        out.push("light wind: use scent-elimination precautions".into());
    }

    out.push(format!(
        "scent cone travels toward {}",
        field.scent_to_deg.compass_label()
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scent_bearing_is_opposite_of_effective_from() {
        let thermal = ThermalState { active: false, direction_tag: ThermalDirectionTag::Neutral, strength_0_10: 0.0 };
        let field = analyze_wind_field(Bearing::from_degrees(270.0), 8.0, thermal, Bearing::from_degrees(90.0));
        assert_eq!(field.scent_to_deg.degrees(), (field.effective_from_deg.degrees() + 180.0) % 360.0);
    }

    #[test]
    fn weak_thermal_leaves_effective_equal_to_prevailing() {
        let thermal = ThermalState { active: true, direction_tag: ThermalDirectionTag::Upslope, strength_0_10: 2.0 };
        let field = analyze_wind_field(Bearing::from_degrees(200.0), 6.0, thermal, Bearing::from_degrees(90.0));
        assert_eq!(field.effective_from_deg.degrees(), 200.0);
        assert_eq!(field.effective_speed_mph, 6.0);
    }

    #[test]
    fn quality_rating_is_bounded() {
        let thermal = ThermalState { active: true, direction_tag: ThermalDirectionTag::Downslope, strength_0_10: 9.0 };
        let field = analyze_wind_field(Bearing::from_degrees(0.0), 20.0, thermal, Bearing::from_degrees(180.0));
        assert!((0.0..=10.0).contains(&field.quality_rating_0_10));
    }
}
