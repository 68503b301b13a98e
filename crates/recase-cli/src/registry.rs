//! Default case-style registry
//!
//! Maps style identifiers onto `convert_case` converters. The transform
//! implementations live entirely in that crate; this table only names them
//! and hands them to the core as its consumable mapping.

use convert_case::{Case, Casing};
use once_cell::sync::Lazy;
use recase_core::{CaseRegistry, CaseStyle};

/// Identifier, display title, and converter for every built-in style
const STYLES: &[(&str, &str, Case)] = &[
    ("camelCase", "Camel Case", Case::Camel),
    ("PascalCase", "Pascal Case", Case::Pascal),
    ("snake_case", "Snake Case", Case::Snake),
    ("CONSTANT_CASE", "Constant Case", Case::UpperSnake),
    ("kebab-case", "Kebab Case", Case::Kebab),
    ("Train-Case", "Train Case", Case::Train),
    ("COBOL-CASE", "Cobol Case", Case::Cobol),
    ("Title Case", "Title Case", Case::Title),
    ("flatcase", "Flat Case", Case::Flat),
    ("UPPERFLATCASE", "Upper Flat Case", Case::UpperFlat),
    ("UPPERCASE", "Upper Case", Case::Upper),
    ("lowercase", "Lower Case", Case::Lower),
    ("tOGGLE cASE", "Toggle Case", Case::Toggle),
    ("aLtErNaTiNg cAsE", "Alternating Case", Case::Alternating),
];

/// The registry handed to the core, built once per process
pub static DEFAULT_REGISTRY: Lazy<CaseRegistry> = Lazy::new(build);

fn build() -> CaseRegistry {
    let mut registry = CaseRegistry::new();
    for (id, title, case) in STYLES {
        let case = *case;
        registry.register(CaseStyle::new(*id, *title, move |input: &str| {
            input.to_case(case)
        }));
    }
    registry
}
