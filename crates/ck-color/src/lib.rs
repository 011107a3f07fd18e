// SPDX-License-Identifier: MIT
//
// ck-color — the color value type shared by every contrastkit crate.
//
// Colors cross the boundary as `#RRGGBB` strings and are parsed exactly
// once into a `Color`. Everything downstream (contrast evaluation, name
// matching, palette records) works on the parsed value and never sees an
// unchecked string again.
//
// Conversion pipeline:
//
//   "#RRGGBB" → Color (u8 channels) → linear sRGB → CIE XYZ (D65) → CIE Lab

pub mod color;
pub mod space;

pub use color::{Color, ParseColorError};
pub use space::{Lab, srgb_to_linear};
