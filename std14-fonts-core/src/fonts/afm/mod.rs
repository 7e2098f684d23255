//! Advance widths transcribed from the Adobe Core 14 AFM files.
//!
//! Oblique faces of Helvetica share their upright widths, and all Courier
//! faces share one fixed-pitch glyph set, so those variants point at the same
//! literal data. Each variant still gets its own [`MetricsTable`](super::MetricsTable).

pub(crate) mod courier;
pub(crate) mod helvetica;
pub(crate) mod helvetica_bold;
pub(crate) mod symbol;
pub(crate) mod times_bold;
pub(crate) mod times_bold_italic;
pub(crate) mod times_italic;
pub(crate) mod times_roman;
pub(crate) mod zapf_dingbats;
