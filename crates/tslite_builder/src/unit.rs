//! Compilation units: one grammar run over one token stream.

use tslite_ast::{Code, Program, ReleaseLedger};
use tslite_diagnostics::Diagnostic;
use tslite_options::FrontendOptions;
use tslite_token::TokenSource;

use crate::builder::AstBuilder;
use crate::error::{BuildError, BuildResult};

/// A grammar engine. It pulls tokens, decides which builder fires for each
/// reduction, and returns the top-level statement chain.
///
/// On failure the grammar must hand any fragments it still holds to
/// [`AstBuilder::abandon`] before returning `Err`.
pub trait Grammar {
    fn parse(
        &mut self,
        tokens: &mut dyn TokenSource,
        builder: &mut AstBuilder,
    ) -> BuildResult<Code>;
}

/// Everything one compilation unit produced.
#[derive(Debug)]
pub struct FrontendOutcome {
    /// Present whenever the grammar completed, even if `succeeded` is false.
    pub program: Option<Program>,
    pub succeeded: bool,
    pub diagnostics: Vec<Diagnostic>,
    /// Nodes released while building: failed builders and abandoned fragments.
    pub ledger: ReleaseLedger,
}

impl FrontendOutcome {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompilationUnit {
    options: FrontendOptions,
}

impl CompilationUnit {
    pub fn new(options: FrontendOptions) -> Self {
        Self { options }
    }

    /// Options from the process environment.
    pub fn from_env() -> Self {
        Self::new(FrontendOptions::from_process_env())
    }

    pub fn options(&self) -> &FrontendOptions {
        &self.options
    }

    /// Run `grammar` over `tokens`, then finalize the program against the
    /// tokenizer's final context depth.
    pub fn compile(
        &self,
        grammar: &mut dyn Grammar,
        tokens: &mut dyn TokenSource,
    ) -> FrontendOutcome {
        let mut builder = AstBuilder::new(self.options.clone());
        let (program, succeeded) = match grammar.parse(tokens, &mut builder) {
            Ok(code) => {
                let finalized = builder.finalize(code, &*tokens);
                (Some(finalized.program), finalized.succeeded)
            }
            Err(error) => {
                // builder failures have already been reported
                if matches!(error, BuildError::Aborted(_)) {
                    builder.report(&error);
                }
                log::debug!("compilation failed: {}", error);
                (None, false)
            }
        };
        FrontendOutcome {
            program,
            succeeded,
            diagnostics: builder.take_diagnostics().into_diagnostics(),
            ledger: builder.take_ledger(),
        }
    }
}
