//! A command line harness library for the ant colony tour optimizer: reads distance matrices
//! and locations, applies a configuration file and writes results.

#![warn(missing_docs)]

pub mod extensions;
