//! Error types with diagnostics using miette
//!
//! Only malformed input is an error here. Zero-radius circles, tangents that
//! fall outside a segment and empty intersections are ordinary results.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{NumericError, Point};

/// Errors raised by geometry construction and the drawing session
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeomError {
    #[error("degenerate segment: both endpoints are {point}")]
    #[diagnostic(
        code(canvas_geom::degenerate_segment),
        help("a segment needs two distinct endpoints; drag further before releasing")
    )]
    DegenerateSegment { point: Point },

    #[error("invalid {what}: {source}")]
    #[diagnostic(code(canvas_geom::invalid_numeric))]
    Numeric {
        what: &'static str,
        #[source]
        source: NumericError,
    },
}

impl GeomError {
    pub(crate) fn numeric(what: &'static str, source: NumericError) -> Self {
        GeomError::Numeric { what, source }
    }
}
