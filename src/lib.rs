//! Synthetic CSV dataset generator for agricultural vehicle-routing
//! prototypes: one locations table, one dependent vehicles table.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod output;
