//! The semantic-action builder.
//!
//! A grammar engine calls one `AstBuilder` method per reduction. Each method
//! takes ownership of the already built children and returns the new node.
//! Methods that can fail validate their scalar inputs first; on failure the
//! children they were handed are released through the builder's
//! [`Releaser`], one error diagnostic is reported, and `Err` is returned.
//!
//! The builder methods are split by area across `expressions`,
//! `declarations` and `statements`. This module holds the state, type
//! resolution and program finalization.

use tslite_ast::types::{DataType, PromiseReturnType, TypeAnnotation, TypeList, TypeTag};
use tslite_ast::{Code, Fragment, Program, ReleaseLedger, Releaser};
use tslite_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use tslite_options::FrontendOptions;
use tslite_token::{ContextDepth, SemanticValue};

use crate::error::{BuildError, BuildResult};

/// The result of finalizing a program.
#[derive(Debug)]
pub struct FinalizedProgram {
    pub program: Program,
    /// False when the tokenizer ended inside a nested context. The tree is
    /// still produced.
    pub succeeded: bool,
}

pub struct AstBuilder {
    options: FrontendOptions,
    diagnostics: DiagnosticCollection,
    pub(crate) releaser: Releaser,
}

impl AstBuilder {
    pub fn new(options: FrontendOptions) -> Self {
        let releaser = Releaser::new().with_trace(options.log_releases());
        Self {
            options,
            diagnostics: DiagnosticCollection::new(),
            releaser,
        }
    }

    pub fn options(&self) -> &FrontendOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Nodes released so far by failed builders and `abandon`.
    pub fn ledger(&self) -> &ReleaseLedger {
        self.releaser.ledger()
    }

    pub fn take_ledger(&mut self) -> ReleaseLedger {
        self.releaser.take_ledger()
    }

    pub(crate) fn action(&self, name: &str) {
        if self.options.log_actions() {
            log::debug!("{}", name);
        }
    }

    /// Record the diagnostic for `error` and hand it back.
    pub(crate) fn fail(&mut self, error: BuildError) -> BuildError {
        log::debug!("build failed: {}", error);
        self.diagnostics.add(error.diagnostic());
        error
    }

    /// Report an error that did not originate in a builder method.
    pub fn report(&mut self, error: &BuildError) {
        self.diagnostics.add(error.diagnostic());
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// Resolve a type name (`number`, `string[]`, ...). Absent and unknown
    /// names resolve to `any`.
    pub fn type_tag(&mut self, name: Option<&str>) -> TypeTag {
        self.action("TypeTag");
        let Some(name) = name else {
            return TypeTag::default();
        };
        let name = name.trim();
        match name.strip_suffix("[]") {
            Some(element) => TypeTag::Array(self.data_type(element.trim_end())),
            None => TypeTag::Primitive(self.data_type(name)),
        }
    }

    fn data_type(&mut self, name: &str) -> DataType {
        match DataType::from_name(name) {
            Some(t) => t,
            None => {
                if self.options.warn_unknown_types() {
                    self.diagnostics
                        .add(Diagnostic::new(&messages::UNKNOWN_TYPE_0_DEFAULTS_TO_ANY, &[name]));
                }
                DataType::Any
            }
        }
    }

    /// A type tag from a tokenizer value: either an already resolved tag or
    /// a raw type name.
    pub fn type_tag_from_value(&mut self, value: SemanticValue) -> BuildResult<TypeTag> {
        match value {
            SemanticValue::Type(tag) => Ok(tag),
            SemanticValue::Lexeme(name) => Ok(self.type_tag(Some(&name))),
            other => Err(self.fail(BuildError::UnexpectedValue {
                expected: tslite_ast::NodeKind::VariableType,
                found: other.describe(),
            })),
        }
    }

    pub fn single_type(&mut self, tag: TypeTag) -> TypeAnnotation {
        self.action("SingleType");
        TypeAnnotation::Single(tag)
    }

    /// Prepend `tag` to the members of a union.
    pub fn type_list(&mut self, tag: TypeTag, rest: TypeList) -> TypeList {
        self.action("TypeList");
        rest.cons(tag)
    }

    pub fn union_type(&mut self, members: TypeList) -> BuildResult<TypeAnnotation> {
        self.action("UnionType");
        if members.is_empty() {
            return Err(self.fail(BuildError::EmptyUnion));
        }
        Ok(TypeAnnotation::Union(members))
    }

    pub fn promise_return_type(&mut self, resolved: TypeAnnotation) -> PromiseReturnType {
        self.action("PromiseReturnType");
        PromiseReturnType { resolved }
    }

    // ========================================================================
    // Program
    // ========================================================================

    /// Wrap the top-level chain into the program root. The tokenizer must
    /// have ended at context depth 0 for the compilation to succeed.
    pub fn finalize<D: ContextDepth + ?Sized>(
        &mut self,
        code: Code,
        context: &D,
    ) -> FinalizedProgram {
        self.action("Program");
        let depth = context.current_context_depth();
        let succeeded = depth == 0;
        if !succeeded {
            log::error!("The final context is not the default (0): {}", depth);
            let depth = depth.to_string();
            self.diagnostics.add(Diagnostic::new(
                &messages::FINAL_CONTEXT_IS_NOT_DEFAULT_0,
                &[depth.as_str()],
            ));
        }
        FinalizedProgram {
            program: Program { code },
            succeeded,
        }
    }

    /// Release partially built subtrees left over after a grammar abort.
    /// Returns the number of nodes released.
    pub fn abandon(&mut self, fragments: impl IntoIterator<Item = Fragment>) -> usize {
        let before = self.releaser.ledger().total();
        let mut count = 0usize;
        for fragment in fragments {
            if self.options.log_actions() {
                match fragment.node_kind() {
                    Some(kind) => log::debug!("abandoning {} fragment", kind),
                    None => log::debug!("abandoning type fragment"),
                }
            }
            self.releaser.release_fragment(fragment);
            count += 1;
        }
        if count > 0 {
            let count = count.to_string();
            self.diagnostics.add(Diagnostic::new(
                &messages::RELEASED_0_PARTIAL_FRAGMENTS,
                &[count.as_str()],
            ));
        }
        self.releaser.ledger().total() - before
    }

    /// Tear down a finished program through the ledger.
    pub fn release_program(&mut self, program: Program) {
        self.releaser.release_program(program);
    }
}

impl Default for AstBuilder {
    fn default() -> Self {
        Self::new(FrontendOptions::default())
    }
}

impl std::fmt::Debug for AstBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AstBuilder")
            .field("options", &self.options)
            .field("diagnostics", &self.diagnostics.len())
            .field("released", &self.releaser.ledger().total())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tslite_ast::Chain;
    use tslite_token::TokenBuffer;

    fn warning_builder() -> AstBuilder {
        AstBuilder::new(FrontendOptions {
            warn_unknown_types: Some(true),
            ..Default::default()
        })
    }

    #[test]
    fn test_type_tag_resolution() {
        let mut b = AstBuilder::default();
        assert_eq!(b.type_tag(Some("number")), TypeTag::Primitive(DataType::Number));
        assert_eq!(b.type_tag(Some("boolean[]")), TypeTag::Array(DataType::Boolean));
        assert_eq!(b.type_tag(Some("Widget")), TypeTag::Primitive(DataType::Any));
        assert_eq!(b.type_tag(None), TypeTag::Primitive(DataType::Any));
        assert!(b.diagnostics().is_empty());
    }

    #[test]
    fn test_unknown_type_warning_does_not_fail() {
        let mut b = warning_builder();
        assert_eq!(b.type_tag(Some("Widget[]")), TypeTag::Array(DataType::Any));
        assert_eq!(b.diagnostics().len(), 1);
        assert!(!b.diagnostics().has_errors());
        assert!(b.diagnostics().contains_code(messages::UNKNOWN_TYPE_0_DEFAULTS_TO_ANY.code));
    }

    #[test]
    fn test_empty_union_is_rejected() {
        let mut b = AstBuilder::default();
        assert_eq!(b.union_type(Chain::empty()), Err(BuildError::EmptyUnion));
        assert_eq!(b.diagnostics().error_count(), 1);

        let tag = b.type_tag(Some("string"));
        let members = b.type_list(tag, Chain::single(TypeTag::Primitive(DataType::Number)));
        let union = b.union_type(members).unwrap();
        assert_eq!(union.to_string(), "string | number");
    }

    #[test]
    fn test_type_tag_from_value() {
        let mut b = AstBuilder::default();
        let tag = b.type_tag_from_value(SemanticValue::Lexeme("void".to_string())).unwrap();
        assert_eq!(tag, TypeTag::Primitive(DataType::Void));
        assert!(b.type_tag_from_value(SemanticValue::Integer(1)).is_err());
    }

    #[test]
    fn test_finalize_checks_context_depth() {
        let mut b = AstBuilder::default();
        let ok = b.finalize(Code::empty(), &TokenBuffer::default());
        assert!(ok.succeeded);
        assert!(b.diagnostics().is_empty());

        let bad = b.finalize(Code::empty(), &TokenBuffer::default().with_context_depth(2));
        assert!(!bad.succeeded);
        assert!(b.diagnostics().contains_code(messages::FINAL_CONTEXT_IS_NOT_DEFAULT_0.code));
    }
}
