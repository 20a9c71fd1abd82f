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

//! Monthly sunrise/sunset approximations for Vermont (Montpelier), used to
//! derive the legal hunting window. A monthly lookup table is adequate at
//! the precision this system needs; true ephemeris computation is not.

/// (hour, minute) of sunrise, indexed by month (1-12).
const SUNRISE_TIMES: [(u32, u32); 12] = [
    (7, 26), (7, 8), (6, 27), (6, 31), (5, 41), (5, 9),
    (5, 10), (5, 38), (6, 13), (6, 48), (7, 28), (7, 6),
];

/// (hour, minute) of sunset, indexed by month (1-12).
const SUNSET_TIMES: [(u32, u32); 12] = [
    (16, 22), (17, 0), (17, 39), (19, 18), (19, 54), (20, 27),
    (20, 38), (20, 14), (19, 26), (18, 31), (16, 40), (16, 13),
];

const FALLBACK_SUNRISE: (u32, u32) = (6, 30);
const FALLBACK_SUNSET: (u32, u32) = (18, 30);

/// Minutes since midnight for the given month's sunrise and sunset.
pub fn sunrise_sunset_minutes(month: u32) -> ((u32, u32), (u32, u32)) {
    let idx = month.checked_sub(1).map(|i| i as usize);
    let sunrise = idx.and_then(|i| SUNRISE_TIMES.get(i)).copied().unwrap_or(FALLBACK_SUNRISE);
    let sunset = idx.and_then(|i| SUNSET_TIMES.get(i)).copied().unwrap_or(FALLBACK_SUNSET);
    (sunrise, sunset)
}

/// Legal hunting hours as minutes-since-midnight: 30 min before sunrise to
/// 30 min after sunset.
pub fn legal_hunting_window_minutes(month: u32) -> (i64, i64) {
    let ((sr_h, sr_m), (ss_h, ss_m)) = sunrise_sunset_minutes(month);
    let sunrise = sr_h as i64 * 60 + sr_m as i64;
    let sunset = ss_h as i64 * 60 + ss_m as i64;
    (sunrise - 30, sunset + 30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn august_window_matches_the_configured_table() {
        let (earliest, latest) = legal_hunting_window_minutes(8);
        assert_eq!(earliest, 5 * 60 + 38 - 30);
        assert_eq!(latest, 20 * 60 + 14 + 30);
    }

    #[test]
    fn unknown_month_falls_back_to_default_table_entry() {
        let (earliest, latest) = legal_hunting_window_minutes(13);
        assert_eq!(earliest, 6 * 60 + 30 - 30);
        assert_eq!(latest, 18 * 60 + 30 + 30);
    }
}
