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

//! "Local time" is explicit at the interface: the core never compares a
//! naive timestamp against an aware one. The region's timezone is a
//! configuration input (see `wt_predict::config`), not a runtime guess.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::{input_invalid, PredictionError};

/// A datetime known to be in the configured region's local clock. Produced
/// either from an offset-aware ISO-8601 string (converted) or a naive one
/// (assumed already local), per spec §6's request parsing rule.
#[derive(Copy, Clone, Debug)]
pub struct LocalDateTime(DateTime<Tz>);

impl LocalDateTime {
    pub fn parse(raw: &str, region_tz: Tz) -> Result<Self, PredictionError> {
        if let Ok(aware) = DateTime::parse_from_rfc3339(raw) {
            return Ok(LocalDateTime(aware.with_timezone(&region_tz)));
        }
        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
            .map_err(|e| input_invalid(format!("malformed date_time '{raw}': {e}")))?;
        match region_tz.from_local_datetime(&naive).single() {
            Some(dt) => Ok(LocalDateTime(dt)),
            None => Err(input_invalid(format!("ambiguous local date_time '{raw}'"))),
        }
    }

    pub fn hour(&self) -> u32 {
        use chrono::Timelike;
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        use chrono::Timelike;
        self.0.minute()
    }

    pub fn inner(&self) -> DateTime<Tz> {
        self.0
    }

    pub fn month(&self) -> u32 {
        use chrono::Datelike;
        self.0.month()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    EarlySeason,
    Rut,
    LateSeason,
}

impl Season {
    pub fn parse(raw: &str) -> Result<Self, PredictionError> {
        match raw {
            "early_season" => Ok(Season::EarlySeason),
            "rut" => Ok(Season::Rut),
            "late_season" => Ok(Season::LateSeason),
            other => Err(input_invalid(format!("unknown season '{other}'"))),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HuntingPressureLevel {
    Low,
    Moderate,
    High,
}

impl Default for HuntingPressureLevel {
    fn default() -> Self {
        HuntingPressureLevel::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offset_aware_and_naive_date_times() {
        let tz: Tz = "America/New_York".parse().unwrap();
        let aware = LocalDateTime::parse("2025-08-26T07:00:00-04:00", tz).unwrap();
        assert_eq!(aware.hour(), 7);

        let naive = LocalDateTime::parse("2025-08-26T07:00:00", tz).unwrap();
        assert_eq!(naive.hour(), 7);
    }

    #[test]
    fn rejects_unknown_season() {
        assert!(Season::parse("mid_season").is_err());
        assert_eq!(Season::parse("rut").unwrap(), Season::Rut);
    }
}
