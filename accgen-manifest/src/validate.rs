//! Validation utilities for PHP identifiers and names

use accgen_ir::NAMESPACE_SEPARATOR;
use miette::SourceSpan;

use crate::{Error, Result};

/// Validation context that carries source information.
///
/// Path segments describe where in the manifest a value sits, e.g.
/// `App\Entity\User` for the properties of that class.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &'a str {
        self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    /// Get a context description for error messages.
    ///
    /// For example: "property name in 'App\Entity\User'" or just "class name".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path.join("."))
        }
    }

    /// Find the span of a quoted value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src, value)
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(&self, name: &str, kind: &str, reason: &str) -> Box<Error> {
        Error::invalid_identifier(
            name,
            self.context_for(kind),
            reason,
            self.src,
            self.filename,
            self.find_span(name),
        )
    }

    /// Create a validation error pointing at `value`.
    pub fn validation_error(&self, message: impl Into<String>, value: &str) -> Box<Error> {
        Error::validation(message, self.src, self.filename, self.find_span(value))
    }

    /// Validate that a name is a valid PHP identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match validate_identifier(name) {
            Some(reason) => Err(self.invalid_identifier_error(name, kind, reason)),
            None => Ok(()),
        }
    }

    /// Validate that a class name is usable for a class and its generated trait.
    pub fn validate_class_name(&self, name: &str, kind: &str) -> Result<()> {
        self.validate_name(name, kind)?;
        if is_php_reserved(name) {
            return Err(self.invalid_identifier_error(
                name,
                kind,
                "name is a PHP reserved word",
            ));
        }
        Ok(())
    }

    /// Validate a namespaced name (`App\Entity`), every segment an identifier.
    ///
    /// An empty namespace is the global namespace and is accepted.
    pub fn validate_namespace(&self, namespace: &str, kind: &str) -> Result<()> {
        if namespace.is_empty() {
            return Ok(());
        }
        for segment in namespace.split(NAMESPACE_SEPARATOR) {
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.invalid_identifier_error(namespace, kind, reason));
            }
        }
        Ok(())
    }
}

/// PHP reserved words that cannot name a class or trait
/// Source: https://www.php.net/manual/en/reserved.keywords.php
pub(crate) const PHP_RESERVED: &[&str] = &[
    "abstract", "and", "array", "as", "bool", "break", "callable", "case", "catch", "class",
    "clone", "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "false", "final", "finally", "float", "fn", "for", "foreach", "function",
    "global", "goto", "if", "implements", "include", "instanceof", "insteadof", "int",
    "interface", "isset", "iterable", "list", "match", "mixed", "namespace", "never", "new",
    "null", "object", "or", "parent", "print", "private", "protected", "public", "readonly",
    "require", "return", "self", "static", "string", "switch", "throw", "trait", "true", "try",
    "unset", "use", "var", "void", "while", "xor", "yield",
];

/// Check if a name is a PHP reserved word (case-insensitive, like PHP)
pub(crate) fn is_php_reserved(name: &str) -> bool {
    PHP_RESERVED.iter().any(|word| word.eq_ignore_ascii_case(name))
}

/// Find the span of a value in the TOML source
/// Searches for the quoted value first, then the bare text.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }

    let quoted = format!("\"{}\"", value.replace('\\', "\\\\"));
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, quoted.len() - 2)));
    }

    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}

/// Validate that a name is a valid PHP identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
