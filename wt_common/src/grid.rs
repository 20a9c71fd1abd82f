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

//! Score grids are tiny (6x6 by default) and allocated once per request; a
//! dense row-major array is the natural representation, and a fixed size
//! keeps cell-index arithmetic infallible.

use crate::geo::GeoPoint;

pub const GRID_SIDE: usize = 6;
pub const DEFAULT_SPAN_DEG: f64 = 0.04;

/// A square `GRID_SIDE` x `GRID_SIDE` grid of `f64` cells, row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: [[f64; GRID_SIDE]; GRID_SIDE],
}

impl Grid {
    pub fn zeroed() -> Self {
        Grid { cells: [[0.0; GRID_SIDE]; GRID_SIDE] }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row][col] = value;
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..GRID_SIDE).flat_map(move |r| (0..GRID_SIDE).map(move |c| (r, c, self.cells[r][c])))
    }

    pub fn is_all_zero(&self) -> bool {
        self.iter_cells().all(|(_, _, v)| v == 0.0)
    }

    /// Coordinates of the argmax cell, or `None` if every cell is zero.
    pub fn argmax(&self) -> Option<(usize, usize, f64)> {
        self.iter_cells()
            .filter(|(_, _, v)| *v > 0.0)
            .fold(None, |best, cand| match best {
                None => Some(cand),
                Some(b) if cand.2 > b.2 => Some(cand),
                Some(b) => Some(b),
            })
    }

    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Grid {
        let mut out = Grid::zeroed();
        for (r, c, v) in self.iter_cells() {
            out.set(r, c, f(v));
        }
        out
    }

    pub fn combine<F: Fn(f64, f64) -> f64>(&self, other: &Grid, f: F) -> Grid {
        let mut out = Grid::zeroed();
        for (r, c, v) in self.iter_cells() {
            out.set(r, c, f(v, other.get(r, c)));
        }
        out
    }
}

/// Coordinate grid: the lat/lon of every cell, centered on a request point.
#[derive(Clone, Debug)]
pub struct CoordinateGrid {
    points: [[GeoPoint; GRID_SIDE]; GRID_SIDE],
}

impl CoordinateGrid {
    pub fn centered_on(center: &GeoPoint, span_deg: f64) -> Self {
        let half = span_deg / 2.0;
        let step = span_deg / (GRID_SIDE as f64 - 1.0);
        let mut points = [[GeoPoint { lat: 0.0, lon: 0.0 }; GRID_SIDE]; GRID_SIDE];
        for row in 0..GRID_SIDE {
            for col in 0..GRID_SIDE {
                let lat = center.lat - half + row as f64 * step;
                let lon = center.lon - half + col as f64 * step;
                points[row][col] = GeoPoint { lat, lon };
            }
        }
        CoordinateGrid { points }
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> GeoPoint {
        self.points[row][col]
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, GeoPoint)> + '_ {
        (0..GRID_SIDE).flat_map(move |r| (0..GRID_SIDE).map(move |c| (r, c, self.points[r][c])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_grid_is_centered() {
        let center = GeoPoint::new(43.0, -73.0).unwrap();
        let grid = CoordinateGrid::centered_on(&center, DEFAULT_SPAN_DEG);
        let corner = grid.at(0, 0);
        assert!((corner.lat - (43.0 - DEFAULT_SPAN_DEG / 2.0)).abs() < 1e-9);
        assert!((corner.lon - (-73.0 - DEFAULT_SPAN_DEG / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn argmax_is_none_for_all_zero_grid() {
        let grid = Grid::zeroed();
        assert!(grid.argmax().is_none());
        assert!(grid.is_all_zero());
    }

    #[test]
    fn argmax_finds_highest_cell() {
        let mut grid = Grid::zeroed();
        grid.set(2, 3, 7.5);
        grid.set(0, 0, 1.0);
        let (r, c, v) = grid.argmax().unwrap();
        assert_eq!((r, c), (2, 3));
        assert_eq!(v, 7.5);
    }
}
