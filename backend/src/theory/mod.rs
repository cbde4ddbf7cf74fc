//! Closed-form steady-state solution of the M/M/m birth-death chain

mod solver;

pub use solver::{
    solve_theoretical, solve_theoretical_with_margin, TheoreticalSolution, DEFAULT_HORIZON_MARGIN,
};
