// Copyright 2025 the Shape Shifter Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::types::ShapeId;

/// Errors from scene and path editing.
#[derive(Debug)]
#[non_exhaustive]
pub enum SceneError {
    /// The id refers to a shape that has been removed.
    StaleShape(ShapeId),
    /// A segment index past the end of a path.
    SegmentOutOfRange {
        /// The requested index.
        index: u32,
        /// Number of segments in the path.
        len: usize,
    },
    /// Path data with more than one subpath.
    CompoundPath,
    /// An edit that needs a closed path, applied to an open one.
    OpenPath,
    /// SVG path data that failed to parse.
    #[cfg(feature = "std")]
    Svg(kurbo::SvgParseError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleShape(id) => write!(f, "shape {id:?} is no longer in the scene"),
            Self::SegmentOutOfRange { index, len } => {
                write!(f, "segment {index} out of range for a path of {len} segments")
            }
            Self::CompoundPath => f.write_str("compound paths are not supported"),
            Self::OpenPath => f.write_str("the path is open"),
            #[cfg(feature = "std")]
            Self::Svg(err) => write!(f, "invalid SVG path data: {err}"),
        }
    }
}

impl core::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "std")]
            Self::Svg(err) => Some(err),
            _ => None,
        }
    }
}
