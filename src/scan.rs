use crate::error::GenerateError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Decomposition of a source document around its class body.
///
/// Reassembling `prefix + keyword + header + "{" + body + "}" + suffix`
/// reproduces the original document byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassWrapper<'a> {
    /// Everything before the class keyword
    pub prefix: &'a str,
    /// The keyword as written in the source (`class`, `Class`, ...)
    pub keyword: &'a str,
    /// Text between the keyword and the opening brace: name, extends clause, whitespace
    pub header: &'a str,
    /// Interior of the class body, from the first `{` to the last `}` (exclusive)
    pub body: &'a str,
    /// Everything after the closing brace
    pub suffix: &'a str,
}

impl<'a> ClassWrapper<'a> {
    /// Class name as it appears in generated docblocks: the first
    /// whitespace-delimited token of the header, so an extends clause is
    /// not dragged along.
    pub fn class_name(&self) -> &'a str {
        self.header.split_whitespace().next().unwrap_or("")
    }
}

lazy_static! {
    // Narrowest prefix up to the first `class`, lazy header up to the first `{`,
    // greedy body to the last `}` in the document. Only correct for files with
    // a single brace-delimited class region.
    static ref CLASS_WRAPPER: Regex =
        Regex::new(r"(?si)(.*?)(class)(.+?)\{(.*)\}(.*)").unwrap();
    // A visibility qualifier, a `$`-sigiled name, and an immediate `;`.
    // Declarations carrying a default value do not match.
    static ref PROPERTY: Regex =
        Regex::new(r"(?si)(protected|private|public|var)\s+\$(\S+);").unwrap();
    static ref FUNCTION: Regex = Regex::new(r"(?i)function\s+([a-z_]+)\s*\(").unwrap();
}

/// Split a document into the spans surrounding its class body.
pub fn extract_class_wrapper(doc: &str) -> Result<ClassWrapper<'_>, GenerateError> {
    let captures = CLASS_WRAPPER
        .captures(doc)
        .ok_or(GenerateError::MalformedInput)?;
    let span = |i: usize| captures.get(i).map_or("", |m| m.as_str());

    Ok(ClassWrapper {
        prefix: span(1),
        keyword: span(2),
        header: span(3),
        body: span(4),
        suffix: span(5),
    })
}

/// Every property declared in the document, in order of appearance.
///
/// Duplicates are preserved here; filtering them is the policy's concern.
pub fn extract_property_names(doc: &str) -> Result<Vec<String>, GenerateError> {
    let properties: Vec<String> = PROPERTY
        .captures_iter(doc)
        .filter_map(|c| c.get(2))
        .map(|m| m.as_str().to_string())
        .collect();

    if properties.is_empty() {
        return Err(GenerateError::NoPropertiesFound);
    }
    Ok(properties)
}

/// Names of every function defined in the document, for membership tests.
pub fn extract_function_names(doc: &str) -> HashSet<String> {
    FUNCTION
        .captures_iter(doc)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_roundtrip() {
        let doc = "<?php\n\nclass Customer\n{\n    protected $name;\n}\n";
        let w = extract_class_wrapper(doc).unwrap();
        assert_eq!(w.prefix, "<?php\n\n");
        assert_eq!(w.keyword, "class");
        assert_eq!(w.header, " Customer\n");
        assert_eq!(w.body, "\n    protected $name;\n");
        assert_eq!(w.suffix, "\n");
        let rebuilt = format!("{}{}{}{{{}}}{}", w.prefix, w.keyword, w.header, w.body, w.suffix);
        assert_eq!(rebuilt, doc);
    }

    #[test]
    fn test_wrapper_keeps_keyword_case() {
        let doc = "<?php\nClass Order\n{\n    public $id;\n}\n";
        let w = extract_class_wrapper(doc).unwrap();
        assert_eq!(w.keyword, "Class");
        assert_eq!(w.class_name(), "Order");
    }

    #[test]
    fn test_wrapper_body_spans_nested_braces() {
        let doc = "class A\n{\n    function f() { return 1; }\n}\n";
        let w = extract_class_wrapper(doc).unwrap();
        assert!(w.body.contains("{ return 1; }"));
        assert_eq!(w.suffix, "\n");
    }

    #[test]
    fn test_wrapper_missing_class() {
        assert_eq!(
            extract_class_wrapper("<?php\n$x = 1;\n").unwrap_err(),
            GenerateError::MalformedInput
        );
    }

    #[test]
    fn test_class_name_ignores_extends() {
        let doc = "class Foo extends Bar\n{\n    public $a;\n}\n";
        let w = extract_class_wrapper(doc).unwrap();
        assert_eq!(w.class_name(), "Foo");
    }

    #[test]
    fn test_properties_in_order_with_duplicates() {
        let doc = "protected $b;\nprivate $a;\nvar $b;\npublic $c;\n";
        let names = extract_property_names(doc).unwrap();
        assert_eq!(names, vec!["b", "a", "b", "c"]);
    }

    #[test]
    fn test_properties_skip_defaulted_declarations() {
        let doc = "protected $plain;\nprotected $valued = true;\n";
        assert_eq!(extract_property_names(doc).unwrap(), vec!["plain"]);
    }

    #[test]
    fn test_no_properties() {
        assert_eq!(
            extract_property_names("class Empty {}\n").unwrap_err(),
            GenerateError::NoPropertiesFound
        );
    }

    #[test]
    fn test_function_names() {
        let doc = "public function setName($n) {}\nFUNCTION getName() {}\nfunction util_helper ()\n";
        let names = extract_function_names(doc);
        assert!(names.contains("setName"));
        assert!(names.contains("getName"));
        assert!(names.contains("util_helper"));
        assert_eq!(names.len(), 3);
    }
}
