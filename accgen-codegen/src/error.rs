use accgen_ir::qualify;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error(
        "property '{property}' in class '{}' has no type set, nor could it be inferred",
        qualify(.namespace, .class)
    )]
    #[diagnostic(
        code(accgen::type_unknown),
        help("declare a type for '{property}', e.g. `type = \"string\"`")
    )]
    TypeUnknown {
        property: String,
        class: String,
        namespace: String,
    },
}

impl Error {
    /// Create a type unknown error for a property of a class
    pub fn type_unknown(
        property: impl Into<String>,
        class: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Error::TypeUnknown {
            property: property.into(),
            class: class.into(),
            namespace: namespace.into(),
        }
    }

    /// The property the error was raised for
    pub fn property(&self) -> &str {
        match self {
            Error::TypeUnknown { property, .. } => property,
        }
    }
}
