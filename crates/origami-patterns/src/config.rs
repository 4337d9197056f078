//! Pattern selection from a configuration document.

use origami_layout::{generate, generate_flat, LayoutError, Pattern};
use serde::{Deserialize, Serialize};

use crate::kresling::{Kresling, KreslingParams};
use crate::masu::{MasuBox, MasuParams};
use crate::template::{Template, TemplateParams};

/// A pattern and its parameters, tagged by the `pattern` key:
///
/// ```yaml
/// pattern: kresling
/// measure_type: radius_external
/// measure_value: 10
/// cylinder:
///   sides: 8
///   rows: 4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum PatternConfig {
    Kresling(KreslingParams),
    CylindricalTemplate(TemplateParams),
    MasuBox(MasuParams),
}

impl PatternConfig {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PatternConfig::Kresling(_) => "kresling",
            PatternConfig::CylindricalTemplate(_) => "cylindrical_template",
            PatternConfig::MasuBox(_) => "masu_box",
        }
    }

    /// Build the pattern. Parameter warnings raised while resolving the generator come
    /// first, followed by those of the layout engine.
    pub fn generate(&self) -> Result<Pattern, LayoutError> {
        let mut warnings = Vec::new();
        let mut pattern = match self {
            PatternConfig::Kresling(params) => {
                let kresling = Kresling::new(params, &mut warnings)?;
                generate(&kresling, &params.cylinder)?
            }
            PatternConfig::CylindricalTemplate(params) => {
                let template = Template::new(params, &mut warnings)?;
                generate(&template, &params.cylinder)?
            }
            PatternConfig::MasuBox(params) => generate_flat(&MasuBox::new(params)?),
        };
        warnings.append(&mut pattern.warnings);
        pattern.warnings = warnings;
        tracing::debug!(
            pattern = self.name(),
            boundary = pattern.boundary.len(),
            vertices = pattern.vertices.len(),
            "generated"
        );
        Ok(pattern)
    }
}
