//! Final source assembly: header comment, imports and the widget class.

use crate::options::GenerationOptions;
use forge_core::MATERIAL_IMPORT;
use std::collections::BTreeSet;

/// Import every generated file needs.
pub const BASE_IMPORT: &str = MATERIAL_IMPORT;

/// Indentation level of the `return` statement inside `build`.
pub const CLASS_BODY_LEVEL: usize = 2;

const HEADER: [&str; 2] = [
    "/// Generated Flutter widget.",
    "/// Produced from a visual builder widget tree.",
];

/// Wraps a rendered root expression into a complete source text.
pub struct CodeAssembler<'o> {
    options: &'o GenerationOptions,
}

impl<'o> CodeAssembler<'o> {
    pub fn new(options: &'o GenerationOptions) -> Self {
        Self { options }
    }

    /// Assemble the output. `root` must have been rendered at
    /// [`CLASS_BODY_LEVEL`] when the options wrap it in a class, and at level
    /// zero otherwise. The expression itself is never modified.
    pub fn assemble(&self, root: &str, imports: &BTreeSet<String>) -> String {
        let mut lines: Vec<String> = Vec::new();

        if self.options.include_comments {
            lines.extend(HEADER.iter().map(|line| line.to_string()));
            lines.push(String::new());
        }

        if self.options.include_imports {
            lines.extend(import_lines(imports));
            lines.push(String::new());
        }

        if self.options.wrap_in_class {
            if self.options.is_stateful {
                self.stateful_class(root, &mut lines);
            } else {
                self.stateless_class(root, &mut lines);
            }
        } else {
            lines.push(root.to_string());
        }

        lines.join("\n")
    }

    fn stateless_class(&self, root: &str, lines: &mut Vec<String>) {
        let name = &self.options.widget_name;
        let indent = self.indent(1);

        lines.push(format!("class {} extends StatelessWidget {{", name));
        lines.push(format!("{}const {}({{super.key}});", indent, name));
        lines.push(String::new());
        self.build_method(root, lines);
        lines.push("}".to_string());
    }

    fn stateful_class(&self, root: &str, lines: &mut Vec<String>) {
        let name = &self.options.widget_name;
        let state = format!("_{}State", name);
        let indent = self.indent(1);

        lines.push(format!("class {} extends StatefulWidget {{", name));
        lines.push(format!("{}const {}({{super.key}});", indent, name));
        lines.push(String::new());
        lines.push(format!("{}@override", indent));
        lines.push(format!("{}State<{}> createState() => {}();", indent, name, state));
        lines.push("}".to_string());
        lines.push(String::new());
        lines.push(format!("class {} extends State<{}> {{", state, name));
        self.build_method(root, lines);
        lines.push("}".to_string());
    }

    fn build_method(&self, root: &str, lines: &mut Vec<String>) {
        let indent = self.indent(1);
        lines.push(format!("{}@override", indent));
        lines.push(format!("{}Widget build(BuildContext context) {{", indent));
        lines.push(format!("{}return {};", self.indent(CLASS_BODY_LEVEL), root));
        lines.push(format!("{}}}", indent));
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(self.options.indent_size * level)
    }
}

/// `import` statements in sorted order.
pub fn import_lines(imports: &BTreeSet<String>) -> impl Iterator<Item = String> + '_ {
    imports.iter().map(|uri| format!("import '{}';", uri))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imports(uris: &[&str]) -> BTreeSet<String> {
        uris.iter().map(|uri| uri.to_string()).collect()
    }

    #[test]
    fn test_bare_expression() {
        let options = GenerationOptions {
            include_comments: false,
            include_imports: false,
            wrap_in_class: false,
            ..Default::default()
        };
        let code = CodeAssembler::new(&options).assemble("const Text('x')", &imports(&[BASE_IMPORT]));
        assert_eq!(code, "const Text('x')");
    }

    #[test]
    fn test_imports_are_sorted() {
        let options = GenerationOptions {
            include_comments: false,
            wrap_in_class: false,
            ..Default::default()
        };
        let code = CodeAssembler::new(&options).assemble(
            "Badge()",
            &imports(&["package:flutter/material.dart", "package:badges/badges.dart"]),
        );
        assert_eq!(
            code,
            "import 'package:badges/badges.dart';\nimport 'package:flutter/material.dart';\n\nBadge()"
        );
    }

    #[test]
    fn test_stateless_class() {
        let options = GenerationOptions {
            include_comments: false,
            include_imports: false,
            widget_name: "HomePage".to_string(),
            ..Default::default()
        };
        let code = CodeAssembler::new(&options).assemble("const Placeholder()", &BTreeSet::new());
        assert_eq!(
            code,
            "class HomePage extends StatelessWidget {\n  const HomePage({super.key});\n\n  @override\n  Widget build(BuildContext context) {\n    return const Placeholder();\n  }\n}"
        );
    }

    #[test]
    fn test_stateful_class_uses_indent_size() {
        let options = GenerationOptions {
            include_comments: false,
            include_imports: false,
            is_stateful: true,
            indent_size: 4,
            widget_name: "Counter".to_string(),
            ..Default::default()
        };
        let code = CodeAssembler::new(&options).assemble("const Placeholder()", &BTreeSet::new());
        assert_eq!(
            code,
            "class Counter extends StatefulWidget {\n    const Counter({super.key});\n\n    @override\n    State<Counter> createState() => _CounterState();\n}\n\nclass _CounterState extends State<Counter> {\n    @override\n    Widget build(BuildContext context) {\n        return const Placeholder();\n    }\n}"
        );
    }

    #[test]
    fn test_header_comment() {
        let options = GenerationOptions {
            include_imports: false,
            wrap_in_class: false,
            ..Default::default()
        };
        let code = CodeAssembler::new(&options).assemble("Placeholder()", &BTreeSet::new());
        assert!(code.starts_with("/// Generated Flutter widget.\n"));
        assert!(code.ends_with("\n\nPlaceholder()"));
    }
}
