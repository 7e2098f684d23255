//! The 14 standard Type 1 fonts: names, AFM metrics and font dictionaries.

mod afm;
mod measurement;
mod metrics;
mod name;
mod registry;
mod standard_font;

pub use measurement::TextMeasurement;
pub use metrics::{metrics_table, GlyphMetrics, MetricsTable};
pub use name::{FontFamily, StandardFontName};
pub use registry::{all_standard_fonts, is_standard_font, standard_font, standard_font_names};
pub use standard_font::{default_encoder, StandardFont};
