//! Numeric kernel and shared data model for the Stepwise equation engine.
//!
//! This crate holds everything the solvers and the explanation layer agree
//! on:
//!
//! - [`tolerance`]: the single `ε = 1e-10` used for every zero test
//! - [`poly`], [`arith`], [`linalg`], [`interval`], [`zeros`], [`bisection`]:
//!   pure numeric routines with no state
//! - [`Expr`]: the expression tree used in solution steps
//! - [`ProblemSpec`] and [`Problem`]: solver input
//! - [`Solution`]: solver output, one variant per problem family
//! - [`Error`]: failures that propagate to the caller

pub mod arith;
pub mod bisection;
pub mod interval;
pub mod linalg;
pub mod poly;
pub mod tolerance;
pub mod zeros;

mod error;
mod expr;
mod options;
mod problem;
mod root;
mod solution;

pub use error::Error;
pub use expr::{Expr, Relation};
pub use options::{ExplanationLevel, SolveOptions, VerificationDetail};
pub use problem::{
    LinearEquation, LinearEquation3, LinearInequality, Problem, ProblemSpec, ProblemType,
    SystemMethod,
};
pub use root::{Root, RootType, sort_roots};
pub use solution::*;
