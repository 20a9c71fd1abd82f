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

//! The assembled response document (§6) and the GeoJSON projection of each
//! point bucket.

use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number};

use wt_context::ContextOverride;
use wt_huntwindow::{HuntWindow, StandWindStatus};
use wt_points::OptimizedPoint;
use wt_stand::StandPosition;
use wt_wind::{LocationWindAnalysis, WindField};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    Full,
    Degraded,
    Unavailable,
}

/// A stand recommendation with its C3 refinement and hunt-window
/// credibility folded in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandRecommendation {
    #[serde(flatten)]
    pub point: OptimizedPoint,
    /// The stand-calculator position matching this point's time-of-day
    /// strategy, refined against its dominant bedding anchor. `None` only
    /// when no bedding zone was generated to refine against.
    pub refined_stand: Option<StandPosition>,
    pub wind_credibility: Option<StandWindStatus>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerrainFeatures {
    pub elevation_m: f64,
    pub mean_slope_deg: f64,
    pub dominant_aspect_deg: f64,
    pub lidar_coverage_ratio: f64,
    pub data_quality: DataQuality,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WindAnalysisSection {
    pub site: WindField,
    pub stand: LocationAdvice,
    pub bedding: LocationAdvice,
    pub feeding: LocationAdvice,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LocationAdvice {
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

impl From<LocationWindAnalysis> for LocationAdvice {
    fn from(a: LocationWindAnalysis) -> Self {
        LocationAdvice { advantages: a.advantages, disadvantages: a.disadvantages }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BiologicalAnalysis {
    pub movement_direction: String,
    pub activity_level: String,
    pub weather_notes: Vec<String>,
    pub pressure_notes: Vec<String>,
    pub seasonal_food_notes: Vec<String>,
    pub enhanced_confidence: f64,
    pub data_quality: DataQuality,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatureBuckAnalysis {
    pub general_notes: Vec<String>,
    pub stand_suggestions: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub stand_recommendations: Vec<StandRecommendation>,
    pub bedding_zones: FeatureCollection,
    pub feeding_areas: FeatureCollection,
    pub travel_corridors: FeatureCollection,
    pub five_best_stands: Vec<OptimizedPoint>,
    pub camera_placements: Vec<OptimizedPoint>,
    pub terrain_features: TerrainFeatures,
    pub wind_analysis: WindAnalysisSection,
    pub biological_analysis: BiologicalAnalysis,
    pub mature_buck_analysis: MatureBuckAnalysis,
    pub hunt_schedule: Vec<HuntWindow>,
    pub stand_wind_status: Vec<StandWindStatus>,
    pub hunting_context: ContextOverride,
    pub hunting_recommendations: Vec<String>,
    pub overall_confidence: f64,
}

/// Projects a point bucket into a GeoJSON FeatureCollection, carrying the
/// score/strategy/confidence fields as feature properties.
pub fn points_to_feature_collection(points: &[OptimizedPoint]) -> FeatureCollection {
    let features = points
        .iter()
        .map(|p| {
            let geometry = Geometry::new(Value::Point(vec![p.location.lon, p.location.lat]));
            let mut properties = Map::new();
            properties.insert("score_0_10".to_string(), serde_json::Value::Number(
                Number::from_f64(p.score_0_10).unwrap_or_else(|| Number::from(0)),
            ));
            properties.insert("description".to_string(), serde_json::Value::String(p.description.clone()));
            properties.insert("strategy".to_string(), serde_json::Value::String(p.strategy.clone()));
            properties.insert(
                "confidence_0_1".to_string(),
                serde_json::Value::Number(
                    Number::from_f64(p.confidence_0_1).unwrap_or_else(|| Number::from(0)),
                ),
            );
            Feature { bbox: None, geometry: Some(geometry), id: None, properties: Some(properties), foreign_members: None }
        })
        .collect();
    FeatureCollection { bbox: None, features, foreign_members: None }
}
