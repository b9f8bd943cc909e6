#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot grid sampler
//!
//! The Mandelbrot set is the set of complex numbers `c` for which the
//! orbit of zero under `z <- z * z + c` stays bounded.  We can't run
//! an orbit forever, but we can run it for a while: if `|z|` ever
//! exceeds 2 the orbit is certain to diverge, and the step on which
//! that happens says something about how far from the set `c` lies.
//!
//! This crate lays a uniform grid over a rectangle of the complex
//! plane (a `Region`), runs that escape-time test for every sample,
//! and writes the results out as a flat text grid that external
//! plotting tools can reshape and color however they like.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
#[cfg(test)]
extern crate tempfile;

pub mod complex;
pub mod dump;
pub mod error;
pub mod iterate;
pub mod preview;
pub mod region;

pub use dump::{dump_region, load_grid, read_grid, write_grid, GridDump, GridRecord};
pub use error::GridError;
pub use iterate::{iterate_point, iterate_region, iterate_region_threaded, BOUNDED};
pub use preview::write_preview;
pub use region::Region;
