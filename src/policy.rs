use crate::Options;
use std::collections::HashSet;

/// Which accessor to generate for a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Setter,
    Getter,
}

/// One accessor selected for generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorSpec {
    pub property: String,
    pub function_name: String,
    pub kind: AccessorKind,
}

/// Uppercase the first character only; the remainder is untouched.
fn ucfirst(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pair each property with the accessor kinds still missing from the class.
///
/// Specs come out in property-appearance order, setter before getter within
/// a property. A function that already exists is never re-declared, and a
/// duplicated property declaration yields its accessors only once.
pub fn select_accessors(
    properties: &[String],
    functions: &HashSet<String>,
    options: &Options,
) -> Vec<AccessorSpec> {
    let mut specs = Vec::new();
    let mut planned = HashSet::new();

    for property in properties {
        if options.ignore.contains(property) {
            continue;
        }
        let pascal = ucfirst(property);

        if options.setters {
            let name = format!("set{pascal}");
            if !functions.contains(&name) && planned.insert(name.clone()) {
                specs.push(AccessorSpec {
                    property: property.clone(),
                    function_name: name,
                    kind: AccessorKind::Setter,
                });
            }
        }

        if options.getters {
            let name = format!("get{pascal}");
            if !functions.contains(&name) && planned.insert(name.clone()) {
                specs.push(AccessorSpec {
                    property: property.clone(),
                    function_name: name,
                    kind: AccessorKind::Getter,
                });
            }
        }
    }

    specs
}
