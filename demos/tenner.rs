//! Solves a small Tenner Grid instance.
//!
//! This program plays both external-collaborator roles around the engine: it
//! translates the puzzle into a [`Csp`] (cells become variables, rows/columns
//! and adjacency become extension constraints) and it drives a depth-first
//! backtracking search that calls the chosen propagation strategy between
//! decisions, rewinding the trail whenever it retreats.
//!
//! Each row of the grid holds ten distinct digits, vertically and diagonally
//! adjacent cells differ, and every column sums to its target.

use clap::Parser;
use finch::constraints;
use finch::propagate;
use finch::Csp;
use finch::PropagationStrategy;
use finch::Trail;
use finch::VariableId;

#[derive(Debug, Parser)]
struct Cli {
    /// The propagation strategy to use for the whole search.
    #[arg(short = 'S', long = "strategy", value_enum, default_value_t)]
    strategy: PropagationStrategy,
}

const ROWS: usize = 3;
const COLUMNS: usize = 10;

/// The puzzle; -1 marks a cell the search must fill.
const BOARD: [[i32; COLUMNS]; ROWS] = [
    [0, -1, 2, 3, -1, 5, 6, -1, 8, 9],
    [-1, 3, 4, -1, 6, 7, -1, 9, 0, -1],
    [4, -1, -1, 7, 8, -1, 0, 1, -1, 3],
];

const COLUMN_SUMS: [i32; COLUMNS] = [6, 9, 12, 15, 18, 21, 14, 17, 10, 13];

/// The cells diagonally below a cell: a single neighbour in an edge column,
/// two in an interior column.
#[derive(Clone, Copy, Debug)]
enum DiagonalNeighbours {
    Edge(VariableId),
    Interior(VariableId, VariableId),
}

fn diagonal_neighbours(grid: &[Vec<VariableId>], row: usize, column: usize) -> DiagonalNeighbours {
    let below = &grid[row + 1];
    if column == 0 {
        DiagonalNeighbours::Edge(below[column + 1])
    } else if column == COLUMNS - 1 {
        DiagonalNeighbours::Edge(below[column - 1])
    } else {
        DiagonalNeighbours::Interior(below[column - 1], below[column + 1])
    }
}

fn build_model() -> anyhow::Result<(Csp, Vec<Vec<VariableId>>)> {
    let mut csp = Csp::new("tenner");

    let mut grid = Vec::with_capacity(ROWS);
    for (row, cells) in BOARD.iter().enumerate() {
        let filled: Vec<i32> = cells.iter().copied().filter(|&value| value >= 0).collect();
        let blank_domain: Vec<i32> = (0..=9).filter(|value| !filled.contains(value)).collect();

        let mut row_variables = Vec::with_capacity(COLUMNS);
        for (column, &cell) in cells.iter().enumerate() {
            let name = format!("cell_{row}_{column}");
            let variable = if cell >= 0 {
                csp.new_variable(name, &[cell])
            } else {
                csp.new_variable(name, &blank_domain)
            };
            row_variables.push(variable);
        }
        grid.push(row_variables);
    }

    // The digits within a row are pairwise distinct.
    for (row, row_variables) in grid.iter().enumerate() {
        for first in 0..COLUMNS {
            for second in first + 1..COLUMNS {
                let name = format!("row_{row}_{first}_{second}");
                let constraint =
                    constraints::not_equal(&csp, name, row_variables[first], row_variables[second]);
                let _ = csp.add_constraint(constraint)?;
            }
        }
    }

    // Every column sums to its target.
    for column in 0..COLUMNS {
        let scope: Vec<VariableId> = grid
            .iter()
            .map(|row_variables| row_variables[column])
            .collect();
        let constraint =
            constraints::sum_equals(&csp, format!("column_{column}"), scope, COLUMN_SUMS[column]);
        let _ = csp.add_constraint(constraint)?;
    }

    // Vertically and diagonally adjacent cells differ.
    for row in 0..ROWS - 1 {
        for column in 0..COLUMNS {
            let cell = grid[row][column];
            let below = grid[row + 1][column];
            let constraint =
                constraints::not_equal(&csp, format!("vert_{row}_{column}"), cell, below);
            let _ = csp.add_constraint(constraint)?;

            match diagonal_neighbours(&grid, row, column) {
                DiagonalNeighbours::Edge(neighbour) => {
                    let constraint = constraints::not_equal(
                        &csp,
                        format!("diag_{row}_{column}_a"),
                        cell,
                        neighbour,
                    );
                    let _ = csp.add_constraint(constraint)?;
                }
                DiagonalNeighbours::Interior(left, right) => {
                    let constraint =
                        constraints::not_equal(&csp, format!("diag_{row}_{column}_a"), cell, left);
                    let _ = csp.add_constraint(constraint)?;
                    let constraint =
                        constraints::not_equal(&csp, format!("diag_{row}_{column}_b"), cell, right);
                    let _ = csp.add_constraint(constraint)?;
                }
            }
        }
    }

    Ok((csp, grid))
}

/// Depth-first search: assign, propagate, recurse; rewind the trail and
/// unassign on every retreat.
fn solve(
    csp: &mut Csp,
    trail: &mut Trail,
    order: &[VariableId],
    strategy: PropagationStrategy,
) -> bool {
    let Some(&variable) = order
        .iter()
        .find(|&&variable| !csp.variable(variable).is_assigned())
    else {
        return true;
    };

    for value in csp.variable(variable).current_domain() {
        csp.assign(variable, value);
        let checkpoint = trail.position();

        if propagate(csp, trail, strategy, Some(variable)).is_ok()
            && solve(csp, trail, order, strategy)
        {
            return true;
        }

        trail.restore_to(csp, checkpoint);
        csp.unassign(variable);
    }
    false
}

fn print_grid(csp: &Csp, grid: &[Vec<VariableId>]) {
    let row_separator = format!("{}+", "+---".repeat(COLUMNS));

    for row_variables in grid {
        println!("{row_separator}");
        for &variable in row_variables {
            let value = csp
                .variable(variable)
                .assigned_value()
                .expect("the grid is fully assigned");
            print!("| {value} ");
        }
        println!("|");
    }
    println!("{row_separator}");
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let Cli { strategy } = Cli::parse();

    let (mut csp, grid) = build_model()?;
    let mut trail = Trail::default();

    if propagate(&mut csp, &mut trail, strategy, None).is_err() {
        println!("The instance is unsatisfiable.");
        return Ok(());
    }

    let order: Vec<VariableId> = grid.iter().flatten().copied().collect();
    if solve(&mut csp, &mut trail, &order, strategy) {
        print_grid(&csp, &grid);
    } else {
        println!("The instance is unsatisfiable.");
    }

    Ok(())
}
