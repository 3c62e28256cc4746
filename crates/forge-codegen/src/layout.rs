//! Argument-list layout shared by formatters and widget strategies.
//!
//! Every rendered expression starts unindented; its continuation lines carry
//! absolute indentation for the level the expression sits at. A caller that
//! places an expression as an argument at level `n + 1` therefore renders it
//! with `level = n + 1`.

use crate::options::{CodeFormat, GenerationOptions};

/// Compact layout joins at most this many arguments on one line.
pub const COMPACT_ARG_LIMIT: usize = 2;

/// Indentation and wrapping rules for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    indent_size: usize,
    format: CodeFormat,
}

impl Layout {
    pub fn new(indent_size: usize, format: CodeFormat) -> Self {
        Self {
            indent_size,
            format,
        }
    }

    pub fn from_options(options: &GenerationOptions) -> Self {
        Self::new(options.indent_size, options.format)
    }

    pub fn format(&self) -> CodeFormat {
        self.format
    }

    /// Leading whitespace for a line at `level`.
    pub fn pad(&self, level: usize) -> String {
        " ".repeat(self.indent_size * level)
    }

    /// Render a call with named arguments only.
    pub fn call(&self, name: &str, args: &[String], level: usize) -> String {
        self.call_with(name, None, args, level)
    }

    /// Render a call with an optional leading positional argument.
    ///
    /// Expanded layout keeps positional-only calls on one line and puts one
    /// argument per line otherwise. Compact layout joins up to
    /// [`COMPACT_ARG_LIMIT`] single-line arguments.
    pub fn call_with(&self, name: &str, positional: Option<&str>, named: &[String], level: usize) -> String {
        let args: Vec<&str> = positional
            .into_iter()
            .chain(named.iter().map(String::as_str))
            .collect();

        if args.is_empty() {
            return format!("{}()", name);
        }

        let single_line = args.iter().all(|arg| !arg.contains('\n'));
        let inline = match self.format {
            CodeFormat::Expanded => named.is_empty() && single_line,
            CodeFormat::Compact => args.len() <= COMPACT_ARG_LIMIT && single_line,
        };

        if inline {
            return format!("{}({})", name, args.join(", "));
        }

        let inner = self.pad(level + 1);
        let mut lines = Vec::with_capacity(args.len() + 2);
        lines.push(format!("{}(", name));
        for arg in args {
            lines.push(format!("{}{},", inner, arg));
        }
        lines.push(format!("{})", self.pad(level)));
        lines.join("\n")
    }

    /// Render a list literal, optionally typed (`<Widget>[...]`).
    pub fn list(&self, element_type: Option<&str>, items: &[String], level: usize) -> String {
        let prefix = element_type.map(|t| format!("<{}>", t)).unwrap_or_default();

        if items.is_empty() {
            return format!("{}[]", prefix);
        }

        let inline = self.format == CodeFormat::Compact
            && items.len() <= COMPACT_ARG_LIMIT
            && items.iter().all(|item| !item.contains('\n'));
        if inline {
            return format!("{}[{}]", prefix, items.join(", "));
        }

        let inner = self.pad(level + 1);
        let mut lines = Vec::with_capacity(items.len() + 2);
        lines.push(format!("{}[", prefix));
        for item in items {
            lines.push(format!("{}{},", inner, item));
        }
        lines.push(format!("{}]", self.pad(level)));
        lines.join("\n")
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_options(&GenerationOptions::default())
    }
}
