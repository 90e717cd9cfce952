// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grid cells and their boundary classification

use crate::geometry::{Line, Polygon};
use crate::utils::math::signed_area_xy;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Side of a cell, named after the grid boundary it would lie on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// `a → b`, at the first u parameter of the cell
    Left,
    /// `b → c`, at the last v parameter of the cell
    Top,
    /// `c → d`, at the last u parameter of the cell
    Right,
    /// `d → a`, at the first v parameter of the cell
    Bottom,
}

impl Side {
    /// Sides in vertex order
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Top => 1,
            Side::Right => 2,
            Side::Bottom => 3,
        }
    }
}

/// A cell side lying on the outside of the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExteriorEdge {
    pub side: Side,
    pub line: Line,
    /// Unit XY vector from the edge towards the cell interior
    pub towards_inside: Vector3<f64>,
}

/// One quadrilateral of a grid.
///
/// Vertices `a, b, c, d` sit at `(uᵢ, vⱼ)`, `(uᵢ, vⱼ₊₁)`, `(uᵢ₊₁, vⱼ₊₁)`,
/// `(uᵢ₊₁, vⱼ)`. `row` indexes u intervals and `column` indexes v intervals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    points: [Point3<f64>; 4],
    row: usize,
    column: usize,
    row_count: usize,
    column_count: usize,
}

impl Cell {
    pub(crate) fn new(
        points: [Point3<f64>; 4],
        row: usize,
        column: usize,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        debug_assert!(row < row_count && column < column_count);
        Self {
            points,
            row,
            column,
            row_count,
            column_count,
        }
    }

    pub fn points(&self) -> &[Point3<f64>; 4] {
        &self.points
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn is_bottom(&self) -> bool {
        self.column == 0
    }

    pub fn is_top(&self) -> bool {
        self.column == self.column_count - 1
    }

    pub fn is_left(&self) -> bool {
        self.row == 0
    }

    pub fn is_right(&self) -> bool {
        self.row == self.row_count - 1
    }

    pub fn is_outer(&self) -> bool {
        self.is_bottom() || self.is_top() || self.is_left() || self.is_right()
    }

    pub fn is_inner(&self) -> bool {
        !self.is_outer()
    }

    pub fn is_corner(&self) -> bool {
        (self.is_left() || self.is_right()) && (self.is_bottom() || self.is_top())
    }

    /// Whether `side` lies on the grid boundary.
    ///
    /// In a grid one cell wide this can hold for more sides than
    /// [`Cell::exterior_lines`] returns.
    pub fn is_exterior(&self, side: Side) -> bool {
        match side {
            Side::Left => self.is_left(),
            Side::Top => self.is_top(),
            Side::Right => self.is_right(),
            Side::Bottom => self.is_bottom(),
        }
    }

    pub fn side_line(&self, side: Side) -> Line {
        let i = side.index();
        Line::new(self.points[i], self.points[(i + 1) % 4])
    }

    /// Sides on the grid boundary.
    ///
    /// Corner cells return the two sides meeting at the corner vertex, the
    /// side arriving at it first. Other edge cells return one side and
    /// interior cells none. In a grid one cell wide, a cell touching several
    /// corners takes the first of `(0, 0)`, `(last, 0)`, `(0, last)`,
    /// `(last, last)` and an edge cell takes the first of left, right,
    /// bottom, top.
    pub fn exterior_lines(&self) -> Vec<Line> {
        self.exterior_sides()
            .into_iter()
            .map(|side| self.side_line(side))
            .collect()
    }

    /// Sides not returned by [`Cell::exterior_lines`], continuing the cyclic
    /// order after the exterior run. Interior cells start at `Top`.
    pub fn interior_lines(&self) -> Vec<Line> {
        self.interior_sides()
            .into_iter()
            .map(|side| self.side_line(side))
            .collect()
    }

    /// Exterior sides with the direction pointing back into the cell
    pub fn exterior_edges(&self) -> Vec<ExteriorEdge> {
        let center = self.center();
        self.exterior_sides()
            .into_iter()
            .map(|side| {
                let line = self.side_line(side);
                ExteriorEdge {
                    side,
                    line,
                    towards_inside: inward_normal(&line, &center),
                }
            })
            .collect()
    }

    fn exterior_sides(&self) -> Vec<Side> {
        let (left, right) = (self.is_left(), self.is_right());
        let (bottom, top) = (self.is_bottom(), self.is_top());

        if left && bottom {
            vec![Side::Bottom, Side::Left]
        } else if right && bottom {
            vec![Side::Right, Side::Bottom]
        } else if left && top {
            vec![Side::Left, Side::Top]
        } else if right && top {
            vec![Side::Top, Side::Right]
        } else if left {
            vec![Side::Left]
        } else if right {
            vec![Side::Right]
        } else if bottom {
            vec![Side::Bottom]
        } else if top {
            vec![Side::Top]
        } else {
            Vec::new()
        }
    }

    fn interior_sides(&self) -> Vec<Side> {
        let exterior = self.exterior_sides();
        let start = exterior.last().map_or(Side::Top.index(), |side| side.index() + 1);
        (0..4)
            .map(|k| Side::ALL[(start + k) % 4])
            .filter(|side| !exterior.contains(side))
            .collect()
    }

    pub fn center(&self) -> Point3<f64> {
        let sum = self
            .points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / 4.0)
    }

    pub fn signed_area(&self) -> f64 {
        signed_area_xy(&self.points)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Cell outline, or `None` when the cell has collapsed to zero area
    pub fn polygon(&self) -> Option<Polygon> {
        Polygon::new(self.points.to_vec()).ok()
    }
}

/// Unit XY normal of `line` pointing towards `target`
fn inward_normal(line: &Line, target: &Point3<f64>) -> Vector3<f64> {
    let d = line.direction();
    let normal = Vector3::new(-d.y, d.x, 0.0);
    let to_target = target - line.midpoint();
    if normal.dot(&to_target) < 0.0 {
        -normal
    } else {
        normal
    }
}
