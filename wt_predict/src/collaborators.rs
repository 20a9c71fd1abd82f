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

//! External-collaborator interfaces (§6). The core never reaches for a
//! network client or a filesystem path directly: everything outside the
//! LIDAR registry is one of these traits, supplied by the caller.

use wt_biology::WeatherSnapshot;
use wt_common::geo::GeoPoint;
use wt_common::grid::CoordinateGrid;
use wt_huntwindow::{ForecastHour, StandProfile};
use wt_scoremap::landcover::LandCoverGrid;
use wt_wind::ThermalState;

/// Published fallback when the canopy provider is unavailable (Vermont
/// forest average).
pub const FALLBACK_CANOPY_FRACTION: f64 = 0.65;
/// Published fallback distance-to-road when the roads/trails provider is
/// unavailable.
pub const FALLBACK_ROAD_DISTANCE_M: f64 = 500.0;

/// Elevations at ~30 m resolution for points no LIDAR tile covers. The
/// source's own fallback-DEM implementation is not specified; it is an
/// abstract collaborator here (see DESIGN.md Open Question 1).
pub trait FallbackDemProvider: Send + Sync {
    fn elevations_m(&self, points: &[GeoPoint]) -> Vec<Option<f64>>;
}

/// Point query returning treecover fraction in `[0, 1]`.
pub trait CanopyProvider: Send + Sync {
    fn treecover_fraction(&self, point: &GeoPoint) -> Option<f64>;
}

/// Bounding-box query for polylines; the core computes distance client-side.
/// Implementations may instead answer the distance query directly.
pub trait RoadsTrailsProvider: Send + Sync {
    fn distance_to_nearest_road_m(&self, point: &GeoPoint) -> Option<f64>;
}

/// Current conditions plus the next-24h hourly forecast.
pub trait WeatherProvider: Send + Sync {
    fn current(&self, point: &GeoPoint) -> Option<WeatherSnapshot>;
    fn hourly_forecast(&self, point: &GeoPoint) -> Vec<ForecastHour>;
}

/// Per-grid-cell land-cover masks for the categories in §3.
pub trait LandCoverProvider: Send + Sync {
    fn masks(&self, coords: &CoordinateGrid) -> LandCoverGrid;
}

/// Read-only, process-wide list of user-configured stands.
pub trait StandProfileSource: Send + Sync {
    fn profiles(&self) -> Vec<StandProfile>;
}

/// Optional: a collaborator-supplied thermal state, bypassing the built-in
/// terrain-and-solar-position derivation described in spec step 5.
pub trait ThermalProvider: Send + Sync {
    fn thermal_state(&self, point: &GeoPoint) -> Option<ThermalState>;
}

/// An opaque 0-100 external security score (see DESIGN.md Open Question 2).
pub trait SecurityProvider: Send + Sync {
    fn security(&self, point: &GeoPoint) -> Option<wt_scoremap::SecurityAnalysis>;
}

/// Bundles every collaborator the orchestrator needs for one request. Held
/// behind `Arc` so a single set of handles serves many requests.
pub struct Collaborators {
    pub fallback_dem: Box<dyn FallbackDemProvider>,
    pub canopy: Box<dyn CanopyProvider>,
    pub roads: Box<dyn RoadsTrailsProvider>,
    pub weather: Box<dyn WeatherProvider>,
    pub land_cover: Box<dyn LandCoverProvider>,
    pub stand_profiles: Box<dyn StandProfileSource>,
    pub thermal: Option<Box<dyn ThermalProvider>>,
    pub security: Box<dyn SecurityProvider>,
}

/// Always-available fallbacks: every provider answers with the published
/// default, so a request never fails purely for lack of live collaborators.
pub struct FallbackCollaborators;

impl FallbackDemProvider for FallbackCollaborators {
    fn elevations_m(&self, points: &[GeoPoint]) -> Vec<Option<f64>> {
        points.iter().map(|_| None).collect()
    }
}

impl CanopyProvider for FallbackCollaborators {
    fn treecover_fraction(&self, _point: &GeoPoint) -> Option<f64> {
        None
    }
}

impl RoadsTrailsProvider for FallbackCollaborators {
    fn distance_to_nearest_road_m(&self, _point: &GeoPoint) -> Option<f64> {
        None
    }
}

impl WeatherProvider for FallbackCollaborators {
    fn current(&self, _point: &GeoPoint) -> Option<WeatherSnapshot> {
        None
    }
    fn hourly_forecast(&self, _point: &GeoPoint) -> Vec<ForecastHour> {
        Vec::new()
    }
}

impl LandCoverProvider for FallbackCollaborators {
    fn masks(&self, _coords: &CoordinateGrid) -> LandCoverGrid {
        LandCoverGrid::fallback()
    }
}

impl StandProfileSource for FallbackCollaborators {
    fn profiles(&self) -> Vec<StandProfile> {
        Vec::new()
    }
}

impl SecurityProvider for FallbackCollaborators {
    fn security(&self, _point: &GeoPoint) -> Option<wt_scoremap::SecurityAnalysis> {
        None
    }
}

impl Collaborators {
    /// An all-fallback collaborator set: every external read degrades to
    /// the published default. Useful for `fast_mode` and for callers with
    /// no live providers configured.
    pub fn fallback_only() -> Self {
        Collaborators {
            fallback_dem: Box::new(FallbackCollaborators),
            canopy: Box::new(FallbackCollaborators),
            roads: Box::new(FallbackCollaborators),
            weather: Box::new(FallbackCollaborators),
            land_cover: Box::new(FallbackCollaborators),
            stand_profiles: Box::new(FallbackCollaborators),
            thermal: None,
            security: Box::new(FallbackCollaborators),
        }
    }
}
