//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Both functions are pure and recompute from the channel bytes on every
//! call.

use ck_color::Color;

/// Contrast of a color against itself.
pub const MIN_RATIO: f64 = 1.0;

/// Contrast of pure black against pure white.
pub const MAX_RATIO: f64 = 21.0;

/// Relative luminance: `0.2126 R + 0.7152 G + 0.0722 B` over the
/// linearized channels. Black is 0.0, white is 1.0.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r_lin, g_lin, b_lin) = color.to_linear();
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// `(L_max + 0.05) / (L_min + 0.05)`, clamped to [`MIN_RATIO`], [`MAX_RATIO`].
///
/// Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (max, min) = (la.max(lb), la.min(lb));
    ((max + 0.05) / (min + 0.05)).clamp(MIN_RATIO, MAX_RATIO)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Color::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-12), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Color::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-12), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_red() {
        let lum = relative_luminance(hex("#ff0000"));
        assert!(approx_eq(lum, 0.2126, 1e-9), "Red luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(hex("#00ff00"));
        assert!(approx_eq(lum, 0.7152, 1e-9), "Green luminance: {lum}");
    }

    #[test]
    fn luminance_pure_blue() {
        let lum = relative_luminance(hex("#0000ff"));
        assert!(approx_eq(lum, 0.0722, 1e-9), "Blue luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-6), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_exactly_1() {
        for s in ["#000000", "#777777", "#ffffff", "#3b82f6"] {
            let c = hex(s);
            assert_eq!(contrast_ratio(c, c), 1.0, "{s}");
        }
    }

    #[test]
    fn contrast_known_gray_on_white() {
        // #767676 is the lightest gray that passes AA on white.
        let ratio = contrast_ratio(hex("#767676"), Color::WHITE);
        assert!(approx_eq(ratio, 4.54, 0.01), "Gray on white: {ratio}");
        let ratio = contrast_ratio(hex("#777777"), Color::WHITE);
        assert!(ratio < 4.5, "#777777 on white: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let steps = [0u8, 17, 64, 119, 128, 200, 255];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let a = Color::rgb(r, g, b);
                    let other = Color::rgb(b, r, g.wrapping_add(91));
                    assert_eq!(
                        contrast_ratio(a, other),
                        contrast_ratio(other, a),
                        "{a} vs {other}"
                    );
                }
            }
        }
    }

    #[test]
    fn contrast_always_within_bounds() {
        let steps = [0u8, 40, 90, 160, 255];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let a = Color::rgb(r, g, b);
                    for other in [Color::BLACK, Color::WHITE, Color::rgb(g, b, r)] {
                        let ratio = contrast_ratio(a, other);
                        assert!((MIN_RATIO..=MAX_RATIO).contains(&ratio), "{a}/{other}: {ratio}");
                    }
                }
            }
        }
    }
}
