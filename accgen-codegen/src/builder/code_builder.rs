//! Code builder utility for generating properly indented source.

/// One indentation level (PSR-12).
const INDENT: &str = "    ";

/// Fluent API for building source with proper indentation.
///
/// # Example
///
/// ```
/// use accgen_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::php();
/// builder
///     .push_line("public function getName()")
///     .push_line("{")
///     .push_indent()
///     .push_line("return $this->name;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "public function getName()\n{\n    return $this->name;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 4-space indentation.
    pub fn php() -> Self {
        Self::default()
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `/** ... */` docblock, one ` * ` line per entry.
    ///
    /// Empty entries become a bare ` *` separator line.
    pub fn push_docblock<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            let line = line.as_ref();
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }

    /// Add a braced block on its own lines, the way PHP methods and classes
    /// are laid out.
    pub fn push_block<F>(&mut self, header: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_line("{").push_indent();
        f(self);
        self.push_dedent().push_line("}")
    }

    /// Consume the builder and return the generated source.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
