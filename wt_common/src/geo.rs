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

//! Geographic point type built on top of the `geo` crate, following the
//! same newtype-over-`geo::Point` pattern used elsewhere for CRS-aware
//! coordinates, but trimmed to just what the prediction pipeline needs:
//! no ECEF, no navigation-grade distance variants.

use geo::algorithm::line_measures::metric_spaces::Haversine;
use geo::algorithm::line_measures::Distance;
use geo::Point;
use serde::{Deserialize, Serialize};

use crate::errors::{input_invalid, PredictionError};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self, PredictionError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(input_invalid(format!("latitude out of range: {lat}")));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(input_invalid(format!("longitude out of range: {lon}")));
        }
        Ok(GeoPoint { lat, lon })
    }

    fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }

    /// Great-circle distance in meters.
    pub fn haversine_distance_m(&self, other: &GeoPoint) -> f64 {
        Haversine.distance(self.point(), other.point())
    }

    /// Initial bearing (degrees, compass convention) from this point to
    /// `other`, via the standard spherical bearing formula.
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlon = (other.lon - self.lon).to_radians();
        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
        let deg = y.atan2(x).to_degrees();
        if deg < 0.0 { deg + 360.0 } else { deg }
    }

    /// Offsets this point by a bearing (degrees) and a distance (meters),
    /// using a local equirectangular approximation — adequate at the
    /// ~750 m cell spacing this pipeline works at.
    pub fn offset(&self, bearing_deg: f64, distance_m: f64) -> GeoPoint {
        const EARTH_RADIUS_M: f64 = 6_371_000.0;
        let brg = bearing_deg.to_radians();
        let dlat = (distance_m * brg.cos() / EARTH_RADIUS_M).to_degrees();
        let dlon = (distance_m * brg.sin() / EARTH_RADIUS_M / self.lat.to_radians().cos())
            .to_degrees();
        GeoPoint {
            lat: self.lat + dlat,
            lon: self.lon + dlon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 181.0).is_err());
        assert!(GeoPoint::new(43.3, -73.2).is_ok());
    }

    #[test]
    fn haversine_distance_is_zero_for_identical_points() {
        let p = GeoPoint::new(43.3127, -73.2271).unwrap();
        assert_eq!(p.haversine_distance_m(&p), 0.0);
    }

    #[test]
    fn bearing_to_due_east_is_roughly_ninety() {
        let p = GeoPoint::new(43.3127, -73.2271).unwrap();
        let q = p.offset(90.0, 1000.0);
        assert!((p.bearing_to(&q) - 90.0).abs() < 1.0);
    }

    #[test]
    fn offset_then_distance_roughly_matches_requested_distance() {
        let p = GeoPoint::new(43.3127, -73.2271).unwrap();
        let q = p.offset(90.0, 500.0);
        let d = p.haversine_distance_m(&q);
        assert!((d - 500.0).abs() < 5.0, "distance was {d}");
    }
}
