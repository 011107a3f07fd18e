// SPDX-License-Identifier: MIT
//
// Color space conversions: sRGB ↔ linear sRGB → CIE XYZ (D65) → CIE Lab.
//
// Single-character variable names (r, g, b, x, y, z, l, a) are the
// standard convention in color science.
#![allow(clippy::many_single_char_names)]

// ─── Linear sRGB ─────────────────────────────────────────────────────────────
//
// sRGB stores channels through a piecewise transfer function. Luminance and
// every device-independent space are defined on the linear values.

/// Convert a single sRGB component in [0.0, 1.0] to linear light.
///
/// Uses the WCAG 2.x cutoff of 0.03928. For 8-bit inputs it selects the
/// same branch as the IEC 61966-2-1 cutoff of 0.04045, since no byte value
/// falls between the two.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Linear sRGB → XYZ ───────────────────────────────────────────────────────

/// Linear sRGB → CIE XYZ using the sRGB primaries and D65 white.
#[must_use]
pub fn linear_srgb_to_xyz(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let x = 0.180_437_5f64.mul_add(b, 0.412_456_4f64.mul_add(r, 0.357_576_1 * g));
    let y = 0.072_175_0f64.mul_add(b, 0.212_672_9f64.mul_add(r, 0.715_152_2 * g));
    let z = 0.950_304_1f64.mul_add(b, 0.019_333_9f64.mul_add(r, 0.119_192_0 * g));
    (x, y, z)
}

// ─── XYZ → Lab ───────────────────────────────────────────────────────────────

/// D65 reference white, Y normalized to 1.
pub const D65_WHITE: (f64, f64, f64) = (0.950_47, 1.0, 1.088_83);

/// A color in CIE L\*a\*b\*.
///
/// `l` runs from 0 (black) to 100 (diffuse white); `a` is the green–red
/// axis and `b` the blue–yellow axis, roughly ±128 for sRGB colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// CIE XYZ → CIE Lab against [`D65_WHITE`].
#[must_use]
pub fn xyz_to_lab(x: f64, y: f64, z: f64) -> Lab {
    let (xn, yn, zn) = D65_WHITE;
    let fx = lab_f(x / xn);
    let fy = lab_f(y / yn);
    let fz = lab_f(z / zn);
    Lab {
        l: 116.0f64.mul_add(fy, -16.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// The CIE Lab companding function.
#[inline]
fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
