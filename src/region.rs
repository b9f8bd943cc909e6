// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Region struct, which describes a rectangular sample
//! grid laid over the complex plane, together with the escape-time
//! result for every sample.
//!
//! The grid is `im` samples wide and `jm` samples tall.  Samples are
//! stored row-major in a single flat buffer: `i` varies fastest, `j`
//! selects the row, so sample `(i, j)` lives at `j * im + i`.  The
//! first and last samples along each axis land exactly on the
//! corresponding components of the two corners.
use itertools::iproduct;
use num::Complex;

use error::GridError;

/// A sampled rectangle of the complex plane and its per-sample
/// iteration results.  A `Region` either exists with both buffers
/// fully populated, or it doesn't exist at all.
#[derive(Debug, Clone)]
pub struct Region {
    im: usize,
    jm: usize,
    lower: Complex<f64>,
    upper: Complex<f64>,
    pub(crate) points: Vec<Complex<f64>>,
    pub(crate) it: Vec<i32>,
}

/// Reserves exactly `len` slots, or reports that we couldn't.
fn reserve<T>(len: usize) -> Result<Vec<T>, GridError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| GridError::AllocationFailure(len))?;
    Ok(v)
}

fn axis_len(n: i64, axis: &str) -> Result<usize, GridError> {
    if n < 2 {
        return Err(GridError::InvalidArgument(format!(
            "the {} resolution must be at least 2 samples, got {}",
            axis, n
        )));
    }
    if n as u64 > usize::max_value() as u64 {
        return Err(GridError::AllocationFailure(usize::max_value()));
    }
    Ok(n as usize)
}

impl Region {
    /// Builds a grid of `im` by `jm` samples spanning the rectangle
    /// whose opposite corners are `lower` and `upper`.  The corners
    /// aren't required to be ordered; an inverted rectangle simply
    /// samples in the other direction.
    ///
    /// Fails with `InvalidArgument` if either resolution is below 2
    /// (a single sample would put a zero in the mapping's denominator),
    /// and with `AllocationFailure` if the buffers can't be had.
    pub fn new(
        lower: Complex<f64>,
        upper: Complex<f64>,
        im: i64,
        jm: i64,
    ) -> Result<Region, GridError> {
        let im = axis_len(im, "horizontal")?;
        let jm = axis_len(jm, "vertical")?;
        let len = im
            .checked_mul(jm)
            .ok_or(GridError::AllocationFailure(usize::max_value()))?;

        let mut points = reserve(len)?;
        let mut it = reserve(len)?;

        let dx = upper.re - lower.re;
        let dy = upper.im - lower.im;
        let (xs, ys) = ((im - 1) as f64, (jm - 1) as f64);
        points.extend(iproduct!(0..jm, 0..im).map(|(j, i)| {
            Complex::new(
                lower.re + dx * (i as f64 / xs),
                lower.im + dy * (j as f64 / ys),
            )
        }));
        it.resize(len, 0);

        debug!("built {}x{} region from {} to {}", im, jm, lower, upper);
        Ok(Region {
            im,
            jm,
            lower,
            upper,
            points,
            it,
        })
    }

    /// The flat offset of sample `(i, j)`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.im && j < self.jm);
        j * self.im + i
    }

    /// The complex value sampled at `(i, j)`.
    pub fn point(&self, i: usize, j: usize) -> Complex<f64> {
        self.points[self.index(i, j)]
    }

    /// The iteration result recorded for `(i, j)`.
    pub fn steps(&self, i: usize, j: usize) -> i32 {
        self.it[self.index(i, j)]
    }

    /// Every sample, row-major.
    pub fn points(&self) -> &[Complex<f64>] {
        &self.points
    }

    /// Every iteration result, index-aligned with `points()`.
    pub fn iterations(&self) -> &[i32] {
        &self.it
    }

    /// `(im, jm)`: samples per row, and number of rows.
    pub fn resolution(&self) -> (usize, usize) {
        (self.im, self.jm)
    }

    /// The two corners the region was built from, lower first.
    pub fn corners(&self) -> (Complex<f64>, Complex<f64>) {
        (self.lower, self.upper)
    }

    /// The total number of samples in the grid.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Describes that the grid has no samples, which `new` never builds.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
