// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while building, iterating, or dumping
//! a region.  None of these are fatal inside the library; the caller
//! decides whether to give up.

use std::io;

/// The error type shared by every fallible operation in the crate.
#[derive(Debug, Fail)]
pub enum GridError {
    /// A caller-supplied parameter was out of range, e.g. a
    /// resolution that doesn't leave at least two samples per axis.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),

    /// The backing storage for the requested number of grid entries
    /// could not be obtained.
    #[fail(display = "allocation failure: could not reserve {} grid entries", _0)]
    AllocationFailure(usize),

    /// A file could not be created, written, or read.
    #[fail(display = "I/O failure on {}: {}", path, cause)]
    Io {
        /// The file we were working on.
        path: String,
        /// What the OS told us.
        #[cause]
        cause: io::Error,
    },

    /// A grid dump didn't look like something `write_grid` produced.
    #[fail(display = "malformed grid file at line {}: {}", line, reason)]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// One of the iteration workers died.
    #[fail(display = "an iteration worker thread panicked")]
    WorkerPanicked,
}

impl GridError {
    pub(crate) fn io<P: ToString>(path: P, cause: io::Error) -> GridError {
        GridError::Io {
            path: path.to_string(),
            cause,
        }
    }

    pub(crate) fn parse<S: Into<String>>(line: usize, reason: S) -> GridError {
        GridError::Parse {
            line,
            reason: reason.into(),
        }
    }
}
