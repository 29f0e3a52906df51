// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a ripple fractal as an HTML page with inline SVG.
//!
//! Usage: `fractal_svg [order] [alpha] [omega]`, defaults `2 0.3 4`.
//! Redirect stdout to a file and open it in a browser.

use std::env;

use ringlet::{svg, Fractal, RippleParams};

fn main() {
    let mut params = RippleParams::default();
    let mut positional = 0;
    for arg in env::args().skip(1) {
        let ok = match positional {
            0 => arg.parse().map(|o| params.order = o).is_ok(),
            1 => arg.parse().map(|a| params.alpha = a).is_ok(),
            2 => arg.parse().map(|w| params.omega = w).is_ok(),
            _ => false,
        };
        if !ok {
            eprintln!("usage: fractal_svg [order] [alpha] [omega]");
            std::process::exit(1);
        }
        positional += 1;
    }

    let fractal = Fractal::generate(params);
    // Square viewport, 1.2x the largest coordinate.
    let half = 1.2 * fractal.bounding_radius();

    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<body>");
    println!(
        "<svg height=\"800\" width=\"800\" viewBox=\"{} {} {} {}\">",
        -half,
        -half,
        2.0 * half,
        2.0 * half
    );
    println!(
        "<title>Order-{} fractal with alpha = {} and omega = {}</title>",
        params.order, params.alpha, params.omega
    );
    // Flip y so the curve renders in math orientation.
    println!("  <g transform=\"scale(1,-1)\" stroke-width=\"{}\">", half / 400.0);
    if !fractal.prev.is_empty() {
        let path = svg::path_data(&fractal.prev);
        println!("    <path d=\"{path}\" stroke=\"#b3b3b3\" fill=\"none\" />");
    }
    let path = svg::path_data(&fractal.curve);
    println!("    <path d=\"{path}\" stroke=\"red\" fill=\"none\" />");
    println!("  </g>");
    println!("</svg>");
    println!("</body>");
    println!("</html>");
}
