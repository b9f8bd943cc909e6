// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A quick-look grayscale rendering of a region, for when firing up a
//! plotting package is more than the moment calls for.  Points that
//! never escaped are black; the faster a point escaped, the brighter
//! it is.  The upper corner's row goes at the top of the image.

use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::convert::TryFrom;
use std::fs::File;
use std::path::Path;

use error::GridError;
use iterate::BOUNDED;
use region::Region;

/// Gray level for an escape step, given the deepest step in the grid.
fn gray(n: i32, deepest: u64) -> u8 {
    if n == BOUNDED {
        return 0;
    }
    (255 - (n.max(0) as u64 * 254) / deepest) as u8
}

/// PNM headers carry 32-bit sizes.
fn image_side(n: usize, axis: &str) -> Result<u32, GridError> {
    u32::try_from(n).map_err(|_| {
        GridError::InvalidArgument(format!(
            "the {} resolution {} is too large for a preview image",
            axis, n
        ))
    })
}

/// Maps every iteration result to one gray byte, top row first.
pub fn shade(region: &Region) -> Vec<u8> {
    let (im, jm) = region.resolution();
    let deepest = region.iterations().iter().cloned().max().unwrap_or(0).max(1) as u64;
    let mut pixels = Vec::with_capacity(region.len());
    for j in (0..jm).rev() {
        for i in 0..im {
            pixels.push(gray(region.steps(i, j), deepest));
        }
    }
    pixels
}

/// Writes the shaded region as a binary PGM.
pub fn write_preview<P: AsRef<Path>>(region: &Region, path: P) -> Result<(), GridError> {
    let path = path.as_ref();
    let (im, jm) = region.resolution();
    let (width, height) = (image_side(im, "horizontal")?, image_side(jm, "vertical")?);
    let pixels = shade(region);
    let output = File::create(path).map_err(|e| GridError::io(path.display(), e))?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
    encoder
        .encode(&pixels[..], width, height, ColorType::Gray(8))
        .map_err(|e| GridError::io(path.display(), e))?;
    info!("wrote {}x{} preview to {}", im, jm, path.display());
    Ok(())
}
