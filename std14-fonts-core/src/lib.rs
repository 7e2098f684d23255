//! # std14-fonts
//!
//! Glyph metrics and PDF font dictionaries for the 14 standard Type 1 fonts
//! every PDF reader ships with.
//!
//! ## Features
//!
//! - **AFM metrics**: Advance widths for every glyph of the Core 14 fonts
//! - **Pluggable encodings**: WinAnsi, MacRoman, Standard, the Symbol and
//!   ZapfDingbats built-ins, and `Differences`-based custom encodings
//! - **Font dictionaries**: `/Type /Font /Subtype /Type1` objects ready to be
//!   added to a document
//! - **Text measurement**: Width of encoded bytes or Unicode text at any size
//!
//! ## Quick Start
//!
//! ```rust
//! use std14_fonts::{StandardFont, Result};
//! use std14_fonts::writer::to_pdf_bytes;
//!
//! # fn main() -> Result<()> {
//! let font = StandardFont::from_name("Helvetica-BoldOblique")?;
//!
//! let a = font.glyph_metrics("A").expect("Helvetica has an A");
//! assert_eq!(a.wx, 722.0);
//!
//! let width = font.measure_text("Hello", 12.0).width;
//! assert!(width > 0.0);
//!
//! let bytes = to_pdf_bytes(font.to_pdf_object().object())?;
//! assert!(String::from_utf8_lossy(&bytes).contains("/BaseFont /Helvetica-BoldOblique"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom encodings
//!
//! ```rust
//! use std14_fonts::encoding::{BaseEncoding, DifferencesEncoder};
//! use std14_fonts::{StandardFont, Result};
//!
//! # fn main() -> Result<()> {
//! let mut font = StandardFont::times_roman();
//! font.set_encoder(
//!     DifferencesEncoder::over(BaseEncoding::WinAnsiEncoding)
//!         .with_run(0x80, &["Lslash", "lslash"])?,
//! );
//! assert_eq!(font.code_width(0x81), Some(278.0));
//! # Ok(())
//! # }
//! ```

pub mod encoding;
pub mod error;
pub mod fonts;
#[cfg(feature = "logging")]
pub mod logging;
pub mod objects;
pub mod writer;

pub use encoding::{
    BaseEncoding, DifferencesEncoder, EncodingRepresentation, SimpleEncoder, TextEncoder,
};
pub use error::{FontError, Result};
pub use fonts::{
    standard_font, FontFamily, GlyphMetrics, MetricsTable, StandardFont, StandardFontName,
    TextMeasurement,
};
pub use objects::{Dictionary, IndirectObject, Object, ObjectId};

/// Current version of std14-fonts
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
