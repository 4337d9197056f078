//! Concrete fold patterns built on the layout engine.

pub mod config;
pub mod kresling;
pub mod masu;
pub mod template;

pub use config::PatternConfig;
pub use kresling::{Kresling, KreslingParams, MeasureType, ParameterType};
pub use masu::{MasuBox, MasuParams};
pub use template::{Template, TemplateParams};
