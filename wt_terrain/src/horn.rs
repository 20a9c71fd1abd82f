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

//! Horn's method: a 3x3 finite-difference slope/aspect estimator. Kept as a
//! pure function of a 3x3 elevation neighborhood so it can be property
//! tested without any raster I/O.

/// Row-major 3x3 neighborhood: `[[a,b,c],[d,e,f],[g,h,i]]`, `e` = center.
pub type Neighborhood = [[f64; 3]; 3];

pub struct SlopeAspect {
    pub slope_deg: f64,
    pub aspect_deg: f64,
}

pub fn calculate_slope_aspect(win: &Neighborhood, resolution_m: f64) -> SlopeAspect {
    let [[a, b, c], [d, _e, f], [g, h, i]] = *win;

    let dz_dx = ((c + 2.0 * f + i) - (a + 2.0 * d + g)) / (8.0 * resolution_m);
    let dz_dy = ((g + 2.0 * h + i) - (a + 2.0 * b + c)) / (8.0 * resolution_m);

    let slope_deg = (dz_dx.hypot(dz_dy)).atan().to_degrees().clamp(0.0, 90.0);

    let aspect_deg = if dz_dx.abs() < 0.001 && dz_dy.abs() < 0.001 {
        0.0
    } else {
        let aspect_raw = (-dz_dy).atan2(dz_dx).to_degrees();
        let raw = 90.0 - aspect_raw;
        let wrapped = raw % 360.0;
        if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
    };

    SlopeAspect { slope_deg, aspect_deg }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_terrain_is_zero_slope_and_zero_aspect() {
        let flat = [[100.0; 3]; 3];
        let r = calculate_slope_aspect(&flat, 0.35);
        assert_eq!(r.slope_deg, 0.0);
        assert_eq!(r.aspect_deg, 0.0);
    }

    #[test]
    fn slope_is_always_in_0_90() {
        let steep = [[200.0, 190.0, 180.0], [150.0, 140.0, 130.0], [100.0, 90.0, 80.0]];
        let r = calculate_slope_aspect(&steep, 0.35);
        assert!((0.0..=90.0).contains(&r.slope_deg));
    }

    #[test]
    fn near_flat_gradient_reports_exact_zero_aspect() {
        let win = [[100.0005, 100.0, 100.0], [100.0, 100.0, 100.0], [100.0, 100.0, 99.9995]];
        let r = calculate_slope_aspect(&win, 30.0);
        assert_eq!(r.aspect_deg, 0.0);
    }

    #[test]
    fn aspect_is_always_in_0_360() {
        let win = [[110.0, 105.0, 100.0], [108.0, 100.0, 92.0], [106.0, 95.0, 84.0]];
        let r = calculate_slope_aspect(&win, 0.35);
        assert!((0.0..360.0).contains(&r.aspect_deg));
    }
}
