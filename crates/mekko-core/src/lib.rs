// File: crates/mekko-core/src/lib.rs
// Summary: Core library entry point; exports the Marimekko layout engine, its output bundle and
// the Skia rendering pipeline.

pub mod category;
pub mod chart;
pub mod color;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use category::Category;
pub use chart::{MarimekkoChart, RenderOptions};
pub use color::{parse_color, ColorError, ColorMap};
pub use dataset::{Dataset, Field, Record};
pub use engine::{compute, LayoutSpec, SortPolicy, TotalPolicy, XCategoryAggregate, DEFAULT_DISPLAY_DIVISOR};
pub use error::{AggregationError, ConfigurationError, Error, Result};
pub use layout::LayoutBundle;
pub use series::StackSeries;
pub use text::TextShaper;
pub use theme::Theme;
