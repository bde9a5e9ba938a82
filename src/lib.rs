//! Accessor generation for PHP class files.
//!
//! Reads a source document containing a single class definition, finds the
//! declared properties, and splices generated getters and setters into the
//! class body, leaving every other byte of the document untouched. This is
//! pattern matching, not parsing: the class region is the first `class`
//! keyword to the last `}` in the file, which is only correct for
//! single-class files.

mod error;
mod policy;
mod render;
mod scan;
mod splice;

pub use error::GenerateError;
pub use policy::{AccessorKind, AccessorSpec, select_accessors};
pub use render::{render_getter, render_setter};
pub use scan::{
    ClassWrapper, extract_class_wrapper, extract_function_names, extract_property_names,
};
pub use splice::inject;

use serde::Serialize;
use std::collections::HashSet;

/// Configuration for accessor generation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Characters used for one level of indentation (default: 4x space)
    pub tabchar: String,
    /// Emit a docblock above each generated method
    pub docblock: bool,
    /// Generate getters
    pub getters: bool,
    /// Generate setters
    pub setters: bool,
    /// Properties that get no accessors at all
    pub ignore: HashSet<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tabchar: "    ".to_string(),
            docblock: true,
            getters: true,
            setters: true,
            ignore: HashSet::new(),
        }
    }
}

/// Result of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    /// The full modified document
    pub code: String,
    /// Names of the generated methods, in emission order
    pub generated: Vec<String>,
}

/// Generate accessors with default options.
pub fn generate(source: &str) -> Result<GenerateResult, GenerateError> {
    generate_with(source, &Options::default())
}

/// Generate accessors for every property that still needs one.
///
/// The class wrapper is extracted twice, once here for the class name and
/// once by the splicer, so the injection always works from the original
/// document rather than a partially modified one.
pub fn generate_with(source: &str, options: &Options) -> Result<GenerateResult, GenerateError> {
    let wrapper = scan::extract_class_wrapper(source)?;
    let class_name = wrapper.class_name();

    let properties = scan::extract_property_names(source)?;
    let functions = scan::extract_function_names(source);
    let specs = policy::select_accessors(&properties, &functions, options);

    let mut injection = String::new();
    let mut generated = Vec::with_capacity(specs.len());
    for spec in &specs {
        let text = match spec.kind {
            AccessorKind::Setter => {
                render::render_setter(&spec.property, &spec.function_name, class_name, options)
            }
            AccessorKind::Getter => {
                render::render_getter(&spec.property, &spec.function_name, options)
            }
        };
        injection.push_str(&text);
        generated.push(spec.function_name.clone());
    }

    let code = splice::inject(source, &injection)?;
    Ok(GenerateResult { code, generated })
}
