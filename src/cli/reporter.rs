// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::grid::Grid;
use crate::loops::LevelOutline;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report the outlines rebuilt for each level
    pub fn report_outlines(file: &str, category: &str, outlines: &[LevelOutline], duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{} {}", "Category:".bold(), category.cyan());
        println!("{}", "━".repeat(80).bright_black());

        if outlines.is_empty() {
            println!("{} {}", "⚠️".yellow(), "No closed outline found".yellow().bold());
        }

        for outline in outlines {
            println!(
                "\n{} {} {}",
                "Level".bold(),
                outline.level.name.cyan().bold(),
                format!("(elevation {:.2})", outline.level.elevation).bright_black()
            );
            Self::print_metric(
                "Perimeter",
                &format!(
                    "{:.2} m² over {} vertices",
                    outline.perimeter.area(),
                    outline.perimeter.vertex_count()
                ),
            );
            Self::print_metric("Voids", &outline.voids.len().to_string());
            for (i, void) in outline.voids.iter().enumerate() {
                Self::print_metric(&format!("  #{}", i + 1), &format!("{:.2} m²", void.area()));
            }
            Self::print_metric("Net area", &format!("{:.2} m²", outline.net_area()));

            if outline.open_chains > 0 || outline.discarded > 0 {
                println!(
                    "  {} {} open chain(s), {} degenerate loop(s) dropped",
                    "⚠️".yellow(),
                    outline.open_chains.to_string().yellow(),
                    outline.discarded.to_string().yellow()
                );
            }
        }

        println!("\n{}", "Performance:".bold());
        println!(
            "  {} {}",
            "Assembly:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report facade modules sampled along a level perimeter
    pub fn report_modules(level: &str, module_length: f64, count: usize) {
        Self::print_metric(
            &format!("Modules {}", level),
            &format!("{} every {:.2} m", count, module_length),
        );
    }

    /// Report a grid and its cell classification
    pub fn report_grid(grid: &Grid, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!(
            "{} {} × {}",
            "Grid:".bold(),
            grid.row_count().to_string().cyan(),
            grid.column_count().to_string().cyan()
        );
        println!("{}", "━".repeat(80).bright_black());
        Self::print_metric("Cells", &grid.cells().len().to_string());
        Self::print_metric("Outer", &grid.outer_cells().count().to_string());
        Self::print_metric("Inner", &grid.inner_cells().count().to_string());
        Self::print_metric("Corners", &grid.corner_cells().count().to_string());
        Self::print_metric("Area", &format!("{:.2} m²", grid.area()));
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    fn print_metric(name: &str, value: &str) {
        println!("  {} {}", format!("{}:", name).bright_black(), value.cyan());
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(
            Reporter::format_duration(Duration::from_micros(500)),
            "500µs"
        );
        assert_eq!(
            Reporter::format_duration(Duration::from_millis(5)),
            "5.00ms"
        );
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }
}
