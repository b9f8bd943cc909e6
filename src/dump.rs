// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a region out as a plain-text point grid that Tecplot,
//! gnuplot, and friends can read, and reads such a file back in.
//!
//! The layout is a few `#` comment lines describing the rectangle and
//! resolution, a `VARIABLES = x y n` line, a `ZONE` line carrying the
//! grid dimensions, and then one `re im n` line per sample in the same
//! row-major order the region stores them.  Coordinates are printed
//! with enough digits to come back bit-for-bit.

use num::Complex;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use error::GridError;
use region::Region;

/// One data line of a grid dump.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridRecord {
    /// The sampled point.
    pub point: Complex<f64>,
    /// Its escape step, or `BOUNDED`.
    pub steps: i32,
}

/// A grid dump read back into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct GridDump {
    /// Samples per row, from the `ZONE` line.
    pub im: usize,
    /// Number of rows, from the `ZONE` line.
    pub jm: usize,
    /// The data lines, in file order.
    pub records: Vec<GridRecord>,
}

/// Serializes `region` to `out`.
pub fn write_grid<W: Write>(region: &Region, out: &mut W) -> std::io::Result<()> {
    let (im, jm) = region.resolution();
    let (lower, upper) = region.corners();
    writeln!(out, "# mandelgrid escape-time grid")?;
    writeln!(out, "# lower corner pA = ({:.16e}, {:.16e})", lower.re, lower.im)?;
    writeln!(out, "# upper corner pB = ({:.16e}, {:.16e})", upper.re, upper.im)?;
    writeln!(out, "# resolution im x jm = {} x {}", im, jm)?;
    writeln!(out, "VARIABLES = x y n")?;
    writeln!(out, "ZONE I={}, J={}, F=POINT", im, jm)?;
    for (p, n) in region.points().iter().zip(region.iterations().iter()) {
        writeln!(out, "{:.16e} {:.16e} {}", p.re, p.im, n)?;
    }
    out.flush()
}

/// Creates (or truncates) `path` and writes the region's grid to it.
pub fn dump_region<P: AsRef<Path>>(region: &Region, path: P) -> Result<(), GridError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| GridError::io(path.display(), e))?;
    let mut out = BufWriter::new(file);
    write_grid(region, &mut out).map_err(|e| GridError::io(path.display(), e))?;
    info!("wrote {} grid lines to {}", region.len(), path.display());
    Ok(())
}

/// Pulls `I=` and `J=` out of a `ZONE` line.
fn parse_zone(line: &str, lineno: usize) -> Result<(usize, usize), GridError> {
    let mut dims = (None, None);
    for field in line["ZONE".len()..].split(',') {
        let field = field.trim();
        if field.starts_with("I=") {
            dims.0 = usize::from_str(&field[2..]).ok();
        } else if field.starts_with("J=") {
            dims.1 = usize::from_str(&field[2..]).ok();
        }
    }
    match dims {
        (Some(im), Some(jm)) => Ok((im, jm)),
        _ => Err(GridError::parse(lineno, "ZONE line lacks usable I= and J= sizes")),
    }
}

fn parse_record(line: &str, lineno: usize) -> Result<GridRecord, GridError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(GridError::parse(
            lineno,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    }
    let re = f64::from_str(fields[0])
        .map_err(|_| GridError::parse(lineno, format!("bad real part {:?}", fields[0])))?;
    let im = f64::from_str(fields[1])
        .map_err(|_| GridError::parse(lineno, format!("bad imaginary part {:?}", fields[1])))?;
    let steps = i32::from_str(fields[2])
        .map_err(|_| GridError::parse(lineno, format!("bad iteration count {:?}", fields[2])))?;
    Ok(GridRecord {
        point: Complex::new(re, im),
        steps,
    })
}

/// Parses a grid written by `write_grid`.  Comments and blank lines
/// are skipped; the number of data lines must agree with the `ZONE`
/// dimensions.
pub fn read_grid<R: BufRead>(input: R) -> Result<GridDump, GridError> {
    let mut dims = None;
    let mut records = Vec::new();
    let mut lineno = 0;

    for line in input.lines() {
        lineno += 1;
        let line = line.map_err(|e| GridError::io("<grid input>", e))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("VARIABLES") {
            continue;
        }
        if line.starts_with("ZONE") {
            dims = Some(parse_zone(line, lineno)?);
            continue;
        }
        if dims.is_none() {
            return Err(GridError::parse(lineno, "data before the ZONE line"));
        }
        records.push(parse_record(line, lineno)?);
    }

    let (im, jm) = dims.ok_or_else(|| GridError::parse(lineno, "no ZONE line"))?;
    let expected = im
        .checked_mul(jm)
        .ok_or_else(|| GridError::parse(lineno, "ZONE dimensions overflow"))?;
    if records.len() != expected {
        return Err(GridError::parse(
            lineno,
            format!("ZONE promises {} points, found {}", expected, records.len()),
        ));
    }
    Ok(GridDump { im, jm, records })
}

/// Opens `path` and parses it with `read_grid`.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<GridDump, GridError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| GridError::io(path.display(), e))?;
    read_grid(BufReader::new(file))
}
