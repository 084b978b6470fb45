//! tslite_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Every diagnostic the front end can raise is declared in [`messages`] as a
//! coded template. A [`DiagnosticCollection`] is the sink one compilation
//! unit reports into; it is owned by the AST builder rather than shared
//! globally.

use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The source line the diagnostic refers to, when the reporter knows it.
    pub line: Option<u32>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            line: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic attached to a source line.
    pub fn at_line(line: u32, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            line: Some(line),
            ..Self::new(message, args)
        }
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }
        write!(f, "{} TSL{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// The diagnostics accumulated by one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Shorthand for `add(Diagnostic::new(message, args))`.
    pub fn report(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        self.add(Diagnostic::new(message, args));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Whether a diagnostic with `code` has been reported.
    pub fn contains_code(&self, code: u32) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
        ($code:expr, Message, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Message, message: $msg }
        };
    }

    // ========================================================================
    // Structural input errors (1000-1099)
    // ========================================================================
    pub const MISSING_NAME_FOR_0: DiagnosticMessage = diag!(1001, Error, "A name is required to build {0}.");
    pub const MISSING_KEY_FOR_OBJECT_ENTRY: DiagnosticMessage = diag!(1002, Error, "An object entry requires a key.");
    pub const CLASSIC_FOR_HAS_TWO_UPDATES: DiagnosticMessage = diag!(1003, Error, "A classic for header cannot have both an update expression and an increment/decrement.");
    pub const CLASSIC_FOR_HAS_NO_UPDATE: DiagnosticMessage = diag!(1004, Error, "A classic for header requires an update expression or an increment/decrement.");
    pub const UNEXPECTED_SEMANTIC_VALUE_0_FOR_1: DiagnosticMessage = diag!(1005, Error, "A {0} semantic value cannot be used to build {1}.");
    pub const UNION_TYPE_REQUIRES_MEMBERS: DiagnosticMessage = diag!(1006, Error, "A union type requires at least one member type.");

    // ========================================================================
    // Finalization errors (1100-1199)
    // ========================================================================
    pub const FINAL_CONTEXT_IS_NOT_DEFAULT_0: DiagnosticMessage = diag!(1100, Error, "The final context is not the default (0): {0}.");
    pub const PARSE_ABORTED_0: DiagnosticMessage = diag!(1101, Error, "Parsing was aborted: {0}");

    // ========================================================================
    // Type resolution (2000-2099)
    // ========================================================================
    pub const UNKNOWN_TYPE_0_DEFAULTS_TO_ANY: DiagnosticMessage = diag!(2001, Warning, "Unknown type '{0}' resolves to 'any'.");

    // ========================================================================
    // Informational (6000+)
    // ========================================================================
    pub const RELEASED_0_PARTIAL_FRAGMENTS: DiagnosticMessage = diag!(6001, Message, "Released {0} partially built fragment(s).");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let msg = format_message("A {0} semantic value cannot be used to build {1}.", &["lexeme", "Constant"]);
        assert_eq!(msg, "A lexeme semantic value cannot be used to build Constant.");
    }

    #[test]
    fn test_format_message_no_args() {
        let msg = format_message("An object entry requires a key.", &[]);
        assert_eq!(msg, "An object entry requires a key.");
    }

    #[test]
    fn test_collection_counts_errors_only() {
        let mut diags = DiagnosticCollection::new();
        diags.report(&messages::UNKNOWN_TYPE_0_DEFAULTS_TO_ANY, &["Foo"]);
        assert!(!diags.has_errors());
        diags.report(&messages::FINAL_CONTEXT_IS_NOT_DEFAULT_0, &["2"]);
        assert!(diags.has_errors());
        assert_eq!(diags.error_count(), 1);
        assert_eq!(diags.len(), 2);
        assert!(diags.contains_code(1100));
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::at_line(3, &messages::MISSING_NAME_FOR_0, &["FunctionDeclaration"]);
        assert_eq!(
            diag.to_string(),
            "line 3: error TSL1001: A name is required to build FunctionDeclaration."
        );
    }
}
