// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time engine.
//!
//! Starting from `z = 0`, a point `c` is repeatedly pushed through
//! `z <- z * z + c`.  Once `|z|` exceeds 2 the orbit is guaranteed to
//! run off to infinity, so the step on which that happens is the
//! point's result.  Points that survive the whole budget are presumed
//! to be in the set and get `BOUNDED` instead.
//!
//! Every point is independent of every other, which makes the region
//! driver trivially parallel: the threaded version hands each worker
//! its own contiguous stretch of the grid and joins them at the end.

extern crate crossbeam;

use num::Complex;

use complex::{add, modulus, multiply};
use error::GridError;
use region::Region;

/// Result recorded for a point that didn't escape within the budget.
pub const BOUNDED: i32 = -1;

/// Any orbit that gets farther than this from the origin diverges.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Returns the step on which the orbit of `c` first leaves the escape
/// radius, or `BOUNDED` if it hasn't after `max_steps` steps.  A budget
/// of zero (or less) never touches the recurrence.
pub fn iterate_point(c: Complex<f64>, max_steps: i32) -> i32 {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for step in 0..max_steps {
        z = multiply(z, z);
        z = add(z, c);
        if modulus(z) > ESCAPE_RADIUS {
            return step;
        }
    }
    BOUNDED
}

fn iterate_slice(points: &[Complex<f64>], it: &mut [i32], max_steps: i32) {
    for (c, n) in points.iter().zip(it.iter_mut()) {
        *n = iterate_point(*c, max_steps);
    }
}

/// Runs every sample in the region, in row-major order, and records
/// each result in the matching slot of the region's iteration buffer.
pub fn iterate_region(region: &mut Region, max_steps: i32) {
    let Region {
        ref points,
        ref mut it,
        ..
    } = *region;
    iterate_slice(points, it, max_steps);
    info!("iterated {} points at depth {}", points.len(), max_steps);
}

/// Same as `iterate_region`, but splits the grid into `threads`
/// contiguous chunks and runs each on its own scoped thread.  The
/// results are identical to the sequential version.
pub fn iterate_region_threaded(
    region: &mut Region,
    max_steps: i32,
    threads: usize,
) -> Result<(), GridError> {
    if threads == 0 {
        return Err(GridError::InvalidArgument(
            "at least one worker thread is required".to_string(),
        ));
    }

    let Region {
        ref points,
        ref mut it,
        ..
    } = *region;
    let chunk = (points.len() + threads - 1) / threads;

    crossbeam::scope(|spawner| {
        for (worker, (points, it)) in points.chunks(chunk).zip(it.chunks_mut(chunk)).enumerate() {
            debug!("worker {} takes {} points", worker, points.len());
            spawner.spawn(move |_| iterate_slice(points, it, max_steps));
        }
    })
    .map_err(|_| GridError::WorkerPanicked)?;

    info!(
        "iterated {} points at depth {} on {} threads",
        points.len(),
        max_steps,
        threads
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for n in [0, 1, 2, 10, 1000].iter() {
            assert_eq!(iterate_point(Complex::new(0.0, 0.0), *n), BOUNDED);
        }
    }

    #[test]
    fn zero_budget_is_always_bounded() {
        for c in [Complex::new(5.0, 5.0), Complex::new(-2.5, 0.0), Complex::new(0.3, 0.6)].iter() {
            assert_eq!(iterate_point(*c, 0), BOUNDED);
        }
    }

    #[test]
    fn negative_budget_is_always_bounded() {
        assert_eq!(iterate_point(Complex::new(10.0, 0.0), -4), BOUNDED);
    }

    #[test]
    fn far_points_escape_on_the_first_step() {
        for c in [
            Complex::new(2.5, 0.0),
            Complex::new(0.0, -2.1),
            Complex::new(-1.5, 1.5),
            Complex::new(100.0, 100.0),
        ]
        .iter()
        {
            for n in [1, 2, 50].iter() {
                assert_eq!(iterate_point(*c, *n), 0);
            }
        }
    }

    #[test]
    fn minus_two_sits_on_the_boundary() {
        // -2 -> 2 -> 2 -> ... never strictly exceeds the radius.
        assert_eq!(iterate_point(Complex::new(-2.0, 0.0), 500), BOUNDED);
    }

    #[test]
    fn one_escapes_on_the_second_step() {
        // 0 -> 1 -> 2 -> 5
        assert_eq!(iterate_point(Complex::new(1.0, 0.0), 10), 2);
        assert_eq!(iterate_point(Complex::new(1.0, 0.0), 2), BOUNDED);
    }

    #[test]
    fn region_iteration_overwrites_every_slot() {
        let mut r = Region::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0), 5, 5).unwrap();
        iterate_region(&mut r, 50);
        assert_eq!(r.steps(0, 0), 0);
        assert_eq!(r.steps(4, 4), 0);
        assert_eq!(r.steps(2, 2), BOUNDED);
        for (c, n) in r.points().iter().zip(r.iterations().iter()) {
            assert_eq!(*n, iterate_point(*c, 50));
        }
    }

    #[test]
    fn threaded_iteration_matches_sequential() {
        let lower = Complex::new(-2.1, -1.3);
        let upper = Complex::new(0.7, 1.3);
        let mut seq = Region::new(lower, upper, 37, 23).unwrap();
        iterate_region(&mut seq, 200);
        for threads in [1, 2, 3, 7, 64].iter() {
            let mut par = Region::new(lower, upper, 37, 23).unwrap();
            iterate_region_threaded(&mut par, 200, *threads).unwrap();
            assert_eq!(seq.iterations(), par.iterations());
        }
    }

    #[test]
    fn threaded_iteration_needs_a_thread() {
        let mut r = Region::new(Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0), 4, 4).unwrap();
        match iterate_region_threaded(&mut r, 10, 0) {
            Err(GridError::InvalidArgument(_)) => {}
            other => panic!("expected invalid argument, got {:?}", other),
        }
    }
}
