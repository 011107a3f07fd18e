//! # ck-contrast — WCAG readability evaluation
//!
//! Answers one question about a pair of colors: is text in one color
//! legible on a background of the other? The answer is symmetric, so the
//! caller never has to say which color is which.
//!
//! # Pipeline
//!
//! ```text
//! "#RRGGBB", "#RRGGBB"
//!     │
//!     ▼
//! ck-color:  strict parse (InvalidColorFormat on failure)
//!     │
//!     ▼
//! wcag.rs:   relative luminance per color → contrast ratio in [1, 21]
//!     │
//!     ▼
//! rating.rs: AA verdict (>= 4.5) and 1–5 star rating
//! ```
//!
//! # Example
//!
//! ```
//! let result = ck_contrast::evaluate_contrast("#000000", "#FFFFFF").unwrap();
//! assert!(result.passes_aa);
//! assert_eq!(result.rating, 5);
//! assert_eq!(result.to_string(), "21.00:1");
//! ```

pub mod rating;
pub mod wcag;

pub use rating::{
    AA_NORMAL_TEXT, ContrastResult, Verdict, evaluate, evaluate_contrast, passes_aa,
    rating_for, readable_text_on,
};
pub use wcag::{MAX_RATIO, MIN_RATIO, contrast_ratio, relative_luminance};
