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

//! A small value type for compass bearings, wrapping the modulo-360 invariant
//! so every callsite gets `angular_diff` and `combine_bearings` for free
//! instead of re-deriving them.

use std::{cmp, fmt, ops};

#[inline]
fn normalize_360(d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { x + 360.0 } else { x }
}

#[derive(Copy, Clone, PartialEq)]
pub struct Bearing(f64);

impl Bearing {
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Bearing(normalize_360(deg))
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn opposite(&self) -> Bearing {
        Bearing::from_degrees(self.0 + 180.0)
    }

    /// Smallest angular difference in [0, 180].
    pub fn angular_diff(&self, other: Bearing) -> f64 {
        let d = (self.0 - other.0).abs() % 360.0;
        if d > 180.0 { 360.0 - d } else { d }
    }

    pub fn is_within(&self, other: Bearing, tolerance_deg: f64) -> bool {
        self.angular_diff(other) <= tolerance_deg
    }

    /// Weighted vector average of two bearings, handling the 0/360 wrap.
    pub fn combine(a: Bearing, b: Bearing, w1: f64, w2: f64) -> Bearing {
        let x = w1 * a.0.to_radians().sin() + w2 * b.0.to_radians().sin();
        let y = w1 * a.0.to_radians().cos() + w2 * b.0.to_radians().cos();
        Bearing::from_degrees(x.atan2(y).to_degrees())
    }

    /// 16-point compass label, e.g. "NNE".
    pub fn compass_label(&self) -> &'static str {
        const LABELS: [&str; 16] = [
            "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
            "NW", "NNW",
        ];
        let idx = ((self.0 / 22.5) + 0.5).floor() as usize % 16;
        LABELS[idx]
    }

    /// Parses a 16-point compass label (case-insensitive) to a Bearing, or
    /// accepts a numeric degree string directly.
    pub fn parse_compass(label: &str) -> Option<Bearing> {
        const LABELS: [(&str, f64); 16] = [
            ("N", 0.0), ("NNE", 22.5), ("NE", 45.0), ("ENE", 67.5),
            ("E", 90.0), ("ESE", 112.5), ("SE", 135.0), ("SSE", 157.5),
            ("S", 180.0), ("SSW", 202.5), ("SW", 225.0), ("WSW", 247.5),
            ("W", 270.0), ("WNW", 292.5), ("NW", 315.0), ("NNW", 337.5),
        ];
        let upper = label.trim().to_uppercase();
        if let Ok(deg) = upper.parse::<f64>() {
            return Some(Bearing::from_degrees(deg));
        }
        LABELS
            .iter()
            .find(|(l, _)| *l == upper)
            .map(|(_, d)| Bearing::from_degrees(*d))
    }
}

impl fmt::Debug for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.0)
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl cmp::PartialOrd for Bearing {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl ops::Add for Bearing {
    type Output = Bearing;
    fn add(self, rhs: Bearing) -> Bearing {
        Bearing::from_degrees(self.0 + rhs.0)
    }
}

impl ops::Sub for Bearing {
    type Output = Bearing;
    fn sub(self, rhs: Bearing) -> Bearing {
        Bearing::from_degrees(self.0 - rhs.0)
    }
}

impl serde::Serialize for Bearing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Bearing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Bearing::from_degrees(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_is_in_range_and_handles_wrap() {
        let b = Bearing::combine(
            Bearing::from_degrees(350.0),
            Bearing::from_degrees(10.0),
            0.5,
            0.5,
        );
        let d = b.degrees();
        assert!((340.0..360.0).contains(&d) || (0.0..20.0).contains(&d));
    }

    #[test]
    fn angular_diff_is_symmetric_and_bounded() {
        let a = Bearing::from_degrees(10.0);
        let b = Bearing::from_degrees(350.0);
        assert_eq!(a.angular_diff(b), b.angular_diff(a));
        assert!(a.angular_diff(b) <= 180.0);
        assert_eq!(a.angular_diff(b), 20.0);
    }

    #[test]
    fn opposite_is_scent_bearing_identity() {
        let wind_from = Bearing::from_degrees(270.0);
        assert_eq!(wind_from.opposite().degrees(), 90.0);
    }

    #[test]
    fn compass_label_round_trips_cardinal_points() {
        assert_eq!(Bearing::from_degrees(0.0).compass_label(), "N");
        assert_eq!(Bearing::from_degrees(90.0).compass_label(), "E");
        assert_eq!(Bearing::parse_compass("NE").unwrap().degrees(), 45.0);
    }
}
