//! Parser tests
//!
//! This module contains tests for the InfluxQL parser, covering
//! expressions, fields, sources, bound parameters and diagnostics.

mod diagnostics;
mod expressions;
mod fields;
mod params;
mod sources;
