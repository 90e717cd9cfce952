// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grid construction tests through the public API

use approx::assert_relative_eq;
use footprint::{DivisionScheme, Grid, GridConfig, GridError, Line, Polygon, Polyline, Side};
use nalgebra::Point3;

fn guides(width: f64, depth: f64) -> (Line, Line) {
    (
        Line::from_xy(0.0, 0.0, width, 0.0),
        Line::from_xy(0.0, depth, width, depth),
    )
}

#[test]
fn test_cell_count_is_rows_times_columns() {
    let (bottom, top) = guides(27.0, 18.0);
    for (u, v) in [(1, 1), (1, 5), (7, 1), (20, 3), (6, 9)] {
        let grid = Grid::with_counts(&bottom, &top, u, v).unwrap();
        assert_eq!(grid.cells().len(), u * v);
        assert_eq!(grid.row_count(), u);
        assert_eq!(grid.column_count(), v);
    }
}

#[test]
fn test_cells_cover_the_quadrilateral() {
    // trapezoid: bottom wider than top
    let bottom = Line::from_xy(0.0, 0.0, 12.0, 0.0);
    let top = Line::from_xy(2.0, 6.0, 10.0, 6.0);
    let grid = Grid::with_counts(&bottom, &top, 5, 4).unwrap();

    let quad = Polygon::new(vec![bottom.start, bottom.end, top.end, top.start]).unwrap();
    assert_relative_eq!(grid.area(), quad.area(), epsilon = 1e-9);
    assert_relative_eq!(grid.outer_polygon().unwrap().area(), quad.area(), epsilon = 1e-9);
}

#[test]
fn test_adjacent_cells_share_edges() {
    let (bottom, top) = guides(10.0, 4.0);
    let grid = Grid::with_counts(&bottom, &top, 3, 2).unwrap();

    for row in 0..grid.row_count() {
        for column in 0..grid.column_count() {
            let cell = grid.cell(row, column).unwrap();
            if let Some(next) = grid.cell(row, column + 1) {
                assert_eq!(cell.side_line(Side::Top), next.side_line(Side::Bottom).reversed());
            }
            if let Some(next) = grid.cell(row + 1, column) {
                assert_eq!(cell.side_line(Side::Right), next.side_line(Side::Left).reversed());
            }
        }
    }
}

#[test]
fn test_explicit_distances_end_with_a_single_one() {
    let (bottom, top) = guides(10.0, 4.0);

    // overshooting: 3 + 3 + 3 + 3 > 10
    let grid = Grid::with_distances(&bottom, &top, &[3.0, 3.0, 3.0, 3.0], &[1.0]).unwrap();
    let u = grid.u_parameters();
    assert_eq!(u.len(), 5);
    assert_relative_eq!(u[3], 0.9, epsilon = 1e-12);
    assert_eq!(u.iter().filter(|&&t| t == 1.0).count(), 1);
    assert_eq!(u.last(), Some(&1.0));

    // falling short: 2.5 + 2.5 < 10, remainder becomes the last interval
    let grid = Grid::with_distances(&bottom, &top, &[2.5, 2.5], &[1.0]).unwrap();
    assert_eq!(grid.u_parameters(), &[0.0, 0.25, 0.5, 1.0]);

    // v axis: a single 1 falls short of the 4 span
    assert_eq!(grid.v_parameters(), &[0.0, 0.25, 1.0]);
}

#[test]
fn test_spacing_covers_the_length() {
    let (bottom, top) = guides(27.0, 18.0);
    let grid = Grid::with_spacing(&bottom, &top, 1.35, 5.0).unwrap();
    assert_eq!(grid.row_count(), 20);
    assert_eq!(grid.column_count(), 4);
}

#[test]
fn test_exterior_line_counts_by_classification() {
    let (bottom, top) = guides(10.0, 10.0);
    let grid = Grid::with_counts(&bottom, &top, 4, 5).unwrap();

    assert_eq!(grid.corner_cells().count(), 4);
    for cell in grid.cells() {
        let expected = if cell.is_corner() {
            2
        } else if cell.is_outer() {
            1
        } else {
            0
        };
        assert_eq!(cell.exterior_lines().len(), expected);
        assert_eq!(cell.interior_lines().len(), 4 - expected);
    }

    assert_eq!(grid.inner_cells().count(), 2 * 3);
    assert_eq!(grid.outer_cells().count(), 20 - 6);
    assert_eq!(grid.bottom_cells().count(), 4);
    assert_eq!(grid.top_cells().count(), 4);
    assert_eq!(grid.left_cells().count(), 5);
    assert_eq!(grid.right_cells().count(), 5);
}

#[test]
fn test_thin_grids_keep_two_corner_lines() {
    let (bottom, top) = guides(10.0, 2.0);

    let grid = Grid::with_counts(&bottom, &top, 5, 1).unwrap();
    assert_eq!(grid.corner_cells().count(), 2);
    for cell in grid.cells() {
        let expected = if cell.is_corner() { 2 } else { 1 };
        assert_eq!(cell.exterior_lines().len(), expected);
        assert_eq!(cell.interior_lines().len(), 4 - expected);
    }

    let grid = Grid::with_counts(&bottom, &top, 1, 1).unwrap();
    let cell = grid.cell(0, 0).unwrap();
    assert_eq!(cell.exterior_lines().len(), 2);
    assert_eq!(cell.interior_lines().len(), 2);
}

#[test]
fn test_corner_lines_meet_at_the_grid_corner() {
    let (bottom, top) = guides(10.0, 10.0);
    let grid = Grid::with_counts(&bottom, &top, 3, 3).unwrap();
    let points = grid.points();

    let corners = [
        (0, 0, points[0][0]),
        (0, 2, points[0][3]),
        (2, 2, points[3][3]),
        (2, 0, points[3][0]),
    ];
    for (row, column, corner) in corners {
        let lines = grid.cell(row, column).unwrap().exterior_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].end, corner);
        assert_eq!(lines[1].start, corner);
    }
}

#[test]
fn test_towards_inside_points_into_the_footprint() {
    let (bottom, top) = guides(10.0, 10.0);
    let grid = Grid::with_counts(&bottom, &top, 3, 3).unwrap();
    let center = Point3::new(5.0, 5.0, 0.0);

    for cell in grid.outer_cells() {
        for edge in cell.exterior_edges() {
            let outward = edge.line.midpoint() - center;
            assert!(edge.towards_inside.dot(&outward) < 0.0);
            assert_relative_eq!(edge.towards_inside.norm(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_polyline_guides() {
    let bottom = Polyline::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(5.0, 0.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
    ])
    .unwrap();
    let top = Line::from_xy(0.0, 4.0, 10.0, 4.0);

    let grid = Grid::with_counts(&bottom, &top, 4, 2).unwrap();
    assert_eq!(grid.cells().len(), 8);
    assert_relative_eq!(grid.area(), 40.0, epsilon = 1e-9);
    assert_relative_eq!(grid.points()[1][0].x, 2.5, epsilon = 1e-12);
}

#[test]
fn test_quadrilateral_footprint() {
    let footprint = Polygon::rectangle(0.0, 0.0, 27.0, 18.0).unwrap();
    let config = GridConfig::new(DivisionScheme::Spacing(1.35), DivisionScheme::Count(3));
    let grid = Grid::from_quadrilateral(&footprint, &config).unwrap();

    assert_eq!(grid.cells().len(), 60);
    assert_relative_eq!(grid.area(), 486.0, epsilon = 1e-9);

    let triangle = Polygon::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ])
    .unwrap();
    assert_eq!(
        Grid::from_quadrilateral(&triangle, &config).unwrap_err(),
        GridError::NotQuadrilateral(3)
    );
}

#[test]
fn test_invalid_inputs() {
    let (bottom, top) = guides(10.0, 4.0);
    let point = Line::from_xy(0.0, 0.0, 0.0, 0.0);

    assert!(matches!(
        Grid::with_counts(&bottom, &top, 0, 1),
        Err(GridError::InvalidCount { .. })
    ));
    assert!(matches!(
        Grid::with_spacing(&bottom, &top, 1.0, -2.0),
        Err(GridError::InvalidSpacing { .. })
    ));
    assert!(matches!(
        Grid::with_distances(&bottom, &top, &[], &[1.0]),
        Err(GridError::EmptyDistances { .. })
    ));
    assert!(matches!(
        Grid::with_counts(&point, &top, 1, 1),
        Err(GridError::ZeroLengthCurve { curve: "bottom" })
    ));
    assert!(matches!(
        Grid::with_counts(&bottom, &bottom, 1, 1),
        Err(GridError::ZeroLengthCurve { curve: "cross" })
    ));
}
