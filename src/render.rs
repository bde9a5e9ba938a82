use crate::Options;

/// Render a fluent setter: assigns the parameter and returns `$this`.
///
/// The docblock's return tag names the enclosing class, matching the
/// fluent-setter convention.
pub fn render_setter(
    property: &str,
    function_name: &str,
    class_name: &str,
    options: &Options,
) -> String {
    let tab = &options.tabchar;
    let mut out = String::new();

    if options.docblock {
        out.push_str(&format!("{tab}/**\n"));
        out.push_str(&format!("{tab} *\n"));
        out.push_str(&format!("{tab} * @param mixed ${property}\n"));
        out.push_str(&format!("{tab} *\n"));
        out.push_str(&format!("{tab} * @return {class_name}\n"));
        out.push_str(&format!("{tab} */\n"));
    }

    out.push_str(&format!("{tab}public function {function_name}(${property})\n"));
    out.push_str(&format!("{tab}{{\n"));
    out.push_str(&format!("{tab}{tab}$this->{property} = ${property};\n"));
    out.push_str(&format!("{tab}{tab}return $this;\n"));
    out.push_str(&format!("{tab}}}\n\n"));

    out
}

/// Render a getter returning the backing field.
pub fn render_getter(property: &str, function_name: &str, options: &Options) -> String {
    let tab = &options.tabchar;
    let mut out = String::new();

    if options.docblock {
        out.push_str(&format!("{tab}/**\n"));
        out.push_str(&format!("{tab} * @return mixed\n"));
        out.push_str(&format!("{tab} */\n"));
    }

    out.push_str(&format!("{tab}public function {function_name}()\n"));
    out.push_str(&format!("{tab}{{\n"));
    out.push_str(&format!("{tab}{tab}return $this->{property};\n"));
    out.push_str(&format!("{tab}}}\n\n"));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_shape() {
        let rendered = render_setter("name", "setName", "Customer", &Options::default());
        let expected = "    /**\n     *\n     * @param mixed $name\n     *\n     * @return Customer\n     */\n    public function setName($name)\n    {\n        $this->name = $name;\n        return $this;\n    }\n\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_getter_shape() {
        let rendered = render_getter("name", "getName", &Options::default());
        let expected = "    /**\n     * @return mixed\n     */\n    public function getName()\n    {\n        return $this->name;\n    }\n\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_docblock_disabled() {
        let options = Options {
            docblock: false,
            ..Options::default()
        };
        let rendered = render_getter("id", "getId", &options);
        assert!(!rendered.contains("/**"));
        assert!(rendered.starts_with("    public function getId()\n"));
    }

    #[test]
    fn test_tabchar_controls_nesting() {
        let options = Options {
            tabchar: "\t".to_string(),
            docblock: false,
            ..Options::default()
        };
        let rendered = render_setter("id", "setId", "Order", &options);
        assert!(rendered.contains("\tpublic function setId($id)\n"));
        assert!(rendered.contains("\t\t$this->id = $id;\n"));
        assert!(rendered.contains("\t\treturn $this;\n"));
    }
}
