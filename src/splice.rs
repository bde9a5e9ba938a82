use crate::error::GenerateError;
use crate::scan;

/// Insert `injection` as the final block of the class body, immediately
/// before the closing brace, preceded by one newline.
///
/// The wrapper is re-derived from `doc` itself, never from a previously
/// computed decomposition, so injection is always a single textual rewrite
/// of the original document. Empty injection text is a no-op: the document
/// comes back unchanged.
pub fn inject(doc: &str, injection: &str) -> Result<String, GenerateError> {
    let wrapper = scan::extract_class_wrapper(doc)?;

    if injection.is_empty() {
        return Ok(doc.to_string());
    }

    Ok(format!(
        "{}{}{}{{{}\n{}}}{}",
        wrapper.prefix, wrapper.keyword, wrapper.header, wrapper.body, injection, wrapper.suffix
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<?php\nclass Cart\n{\n    public $items;\n}\n// eof\n";

    #[test]
    fn test_injection_lands_before_closing_brace() {
        let out = inject(DOC, "    // injected\n").unwrap();
        assert_eq!(
            out,
            "<?php\nclass Cart\n{\n    public $items;\n\n    // injected\n}\n// eof\n"
        );
    }

    #[test]
    fn test_empty_injection_is_noop() {
        assert_eq!(inject(DOC, "").unwrap(), DOC);
    }

    #[test]
    fn test_malformed_doc_rejected() {
        assert_eq!(
            inject("no braces here", "x").unwrap_err(),
            GenerateError::MalformedInput
        );
    }
}
