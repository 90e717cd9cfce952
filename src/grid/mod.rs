// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grid module - subdivide a footprint between two guide curves

mod cell;
mod divisions;

pub use cell::{Cell, ExteriorEdge, Side};
pub use divisions::{
    count_for_spacing, divisions_from_distances, equal_divisions, DivisionScheme, MAX_DIVISIONS,
};

use crate::error::{Axis, GeometryError, GridError};
use crate::geometry::{Curve, Line, Polygon};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Division schemes for both axes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub u: DivisionScheme,
    pub v: DivisionScheme,
}

impl GridConfig {
    pub fn new(u: DivisionScheme, v: DivisionScheme) -> Self {
        Self { u, v }
    }
}

/// Cells spanning a `bottom` and a `top` guide curve.
///
/// The u axis runs along the curves, the v axis across them. For each u
/// parameter the two curves are joined by a straight line which is then
/// split at the v parameters; adjacent lattice points form the cells.
#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    u_parameters: Vec<f64>,
    v_parameters: Vec<f64>,
    points: Vec<Vec<Point3<f64>>>,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid between two curves.
    ///
    /// The u axis is measured on `bottom`; the v axis on the span between
    /// the start points of the two curves.
    pub fn new<B, T>(
        bottom: &B,
        top: &T,
        u: &DivisionScheme,
        v: &DivisionScheme,
    ) -> Result<Self, GridError>
    where
        B: Curve + ?Sized,
        T: Curve + ?Sized,
    {
        let u_length = bottom.length();
        if u_length == 0.0 {
            return Err(GridError::ZeroLengthCurve { curve: "bottom" });
        }
        if top.length() == 0.0 {
            return Err(GridError::ZeroLengthCurve { curve: "top" });
        }
        let v_length = (top.start() - bottom.start()).norm();
        if v_length == 0.0 {
            return Err(GridError::ZeroLengthCurve { curve: "cross" });
        }

        let u_parameters = u.parameters(Axis::U, u_length)?;
        let v_parameters = v.parameters(Axis::V, v_length)?;
        let points = lattice(bottom, top, &u_parameters, &v_parameters);
        let cells = build_cells(&points);

        tracing::debug!(
            rows = u_parameters.len() - 1,
            columns = v_parameters.len() - 1,
            "Built grid"
        );

        Ok(Self {
            u_parameters,
            v_parameters,
            points,
            cells,
        })
    }

    /// Equal division into `u_count × v_count` cells
    pub fn with_counts<B, T>(
        bottom: &B,
        top: &T,
        u_count: usize,
        v_count: usize,
    ) -> Result<Self, GridError>
    where
        B: Curve + ?Sized,
        T: Curve + ?Sized,
    {
        Self::new(
            bottom,
            top,
            &DivisionScheme::Count(u_count),
            &DivisionScheme::Count(v_count),
        )
    }

    /// Fixed spacing on each axis
    pub fn with_spacing<B, T>(
        bottom: &B,
        top: &T,
        u_spacing: f64,
        v_spacing: f64,
    ) -> Result<Self, GridError>
    where
        B: Curve + ?Sized,
        T: Curve + ?Sized,
    {
        Self::new(
            bottom,
            top,
            &DivisionScheme::Spacing(u_spacing),
            &DivisionScheme::Spacing(v_spacing),
        )
    }

    /// Explicit interval lengths on each axis
    pub fn with_distances<B, T>(
        bottom: &B,
        top: &T,
        u_distances: &[f64],
        v_distances: &[f64],
    ) -> Result<Self, GridError>
    where
        B: Curve + ?Sized,
        T: Curve + ?Sized,
    {
        Self::new(
            bottom,
            top,
            &DivisionScheme::Distances(u_distances.to_vec()),
            &DivisionScheme::Distances(v_distances.to_vec()),
        )
    }

    pub fn from_config<B, T>(bottom: &B, top: &T, config: &GridConfig) -> Result<Self, GridError>
    where
        B: Curve + ?Sized,
        T: Curve + ?Sized,
    {
        Self::new(bottom, top, &config.u, &config.v)
    }

    /// Grid on a four-sided footprint: bottom is `v0 → v1`, top is `v3 → v2`
    pub fn from_quadrilateral(footprint: &Polygon, config: &GridConfig) -> Result<Self, GridError> {
        let v = footprint.vertices();
        if v.len() != 4 {
            return Err(GridError::NotQuadrilateral(v.len()));
        }
        let bottom = Line::new(v[0], v[1]);
        let top = Line::new(v[3], v[2]);
        Self::from_config(&bottom, &top, config)
    }

    pub fn u_parameters(&self) -> &[f64] {
        &self.u_parameters
    }

    pub fn v_parameters(&self) -> &[f64] {
        &self.v_parameters
    }

    /// Lattice points, indexed `[u][v]`
    pub fn points(&self) -> &[Vec<Point3<f64>>] {
        &self.points
    }

    /// Number of u intervals
    pub fn row_count(&self) -> usize {
        self.u_parameters.len() - 1
    }

    /// Number of v intervals
    pub fn column_count(&self) -> usize {
        self.v_parameters.len() - 1
    }

    /// All cells, row by row
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        if row < self.row_count() && column < self.column_count() {
            self.cells.get(row * self.column_count() + column)
        } else {
            None
        }
    }

    pub fn top_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_top())
    }

    pub fn bottom_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_bottom())
    }

    pub fn left_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_left())
    }

    pub fn right_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_right())
    }

    pub fn outer_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_outer())
    }

    pub fn inner_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_inner())
    }

    pub fn corner_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_corner())
    }

    /// Boundary of the whole lattice, in the same winding as the cells
    pub fn outer_polygon(&self) -> Result<Polygon, GeometryError> {
        let last_u = self.points.len() - 1;
        let last_v = self.points[0].len() - 1;

        let mut ring = Vec::with_capacity(2 * (last_u + last_v));
        ring.extend(self.points[0][..last_v].iter().copied());
        ring.extend((0..last_u).map(|i| self.points[i][last_v]));
        ring.extend(self.points[last_u][1..].iter().rev().copied());
        ring.extend((1..=last_u).rev().map(|i| self.points[i][0]));
        Polygon::new(ring)
    }

    /// Sum of cell areas
    pub fn area(&self) -> f64 {
        self.cells.iter().map(Cell::area).sum()
    }
}

fn lattice<B, T>(
    bottom: &B,
    top: &T,
    u_parameters: &[f64],
    v_parameters: &[f64],
) -> Vec<Vec<Point3<f64>>>
where
    B: Curve + ?Sized,
    T: Curve + ?Sized,
{
    u_parameters
        .iter()
        .map(|&u| {
            let across = Line::new(bottom.point_at(u), top.point_at(u));
            v_parameters.iter().map(|&v| across.point_at(v)).collect()
        })
        .collect()
}

fn build_cells(points: &[Vec<Point3<f64>>]) -> Vec<Cell> {
    let rows = points.len() - 1;
    let columns = points[0].len() - 1;

    let mut cells = Vec::with_capacity(rows * columns);
    for i in 0..rows {
        let (row_a, row_b) = (&points[i], &points[i + 1]);
        for j in 0..columns {
            let quad = [row_a[j], row_a[j + 1], row_b[j + 1], row_b[j]];
            cells.push(Cell::new(quad, i, j, rows, columns));
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_grid(u: usize, v: usize) -> Grid {
        let bottom = Line::from_xy(0.0, 0.0, 1.0, 0.0);
        let top = Line::from_xy(0.0, 1.0, 1.0, 1.0);
        Grid::with_counts(&bottom, &top, u, v).unwrap()
    }

    #[test]
    fn test_cell_lookup() {
        let grid = unit_grid(3, 2);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 2);
        let cell = grid.cell(2, 1).unwrap();
        assert_eq!((cell.row(), cell.column()), (2, 1));
        assert!(grid.cell(3, 0).is_none());
        assert!(grid.cell(0, 2).is_none());
    }

    #[test]
    fn test_zero_length_curves_rejected() {
        let point = Line::from_xy(0.0, 0.0, 0.0, 0.0);
        let top = Line::from_xy(0.0, 1.0, 1.0, 1.0);
        assert_eq!(
            Grid::with_counts(&point, &top, 1, 1).unwrap_err(),
            GridError::ZeroLengthCurve { curve: "bottom" }
        );
        assert_eq!(
            Grid::with_counts(&top, &point, 1, 1).unwrap_err(),
            GridError::ZeroLengthCurve { curve: "top" }
        );
        assert_eq!(
            Grid::with_counts(&top, &top, 1, 1).unwrap_err(),
            GridError::ZeroLengthCurve { curve: "cross" }
        );
    }

    #[test]
    fn test_outer_polygon_of_unit_grid() {
        let grid = unit_grid(2, 2);
        let outline = grid.outer_polygon().unwrap();
        assert_eq!(outline.vertex_count(), 8);
        assert!((outline.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_quadrilateral_requires_four_vertices() {
        let triangle = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(
            Grid::from_quadrilateral(&triangle, &GridConfig::default()).unwrap_err(),
            GridError::NotQuadrilateral(3)
        );
    }
}
