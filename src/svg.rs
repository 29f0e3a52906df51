// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path-data emission for sampled curves.

use alloc::string::String;
use core::fmt;
use core::fmt::Write;

use crate::Point;

/// Format a sampled closed curve as SVG path data (`M … L … Z`).
///
/// An empty curve produces an empty string.
pub fn path_data(curve: &[Point]) -> String {
    let mut data = String::new();
    // String formatting only fails on allocation, which already aborts.
    write_path_data(&mut data, curve).unwrap();
    data
}

/// Write a sampled closed curve as SVG path data to a [`fmt::Write`].
///
/// # Errors
///
/// Returns any error produced by the underlying writer.
pub fn write_path_data<W: Write>(writer: &mut W, curve: &[Point]) -> fmt::Result {
    let mut points = curve.iter();
    if let Some(first) = points.next() {
        write!(writer, "M{} {}", first.x, first.y)?;
        for p in points {
            write!(writer, "L{} {}", p.x, p.y)?;
        }
        write!(writer, "Z")?;
    }
    Ok(())
}
