use rolo_diagnostics::{Diagnostic, Span};
use std::collections::BTreeMap;

/// Shorthand for building a `BTreeMap<String, String>` context from key-value
/// pairs.
///
/// ```ignore
/// ctx!("prefix" => "p/", "value" => raw)
/// ```
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        std::collections::BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

pub(crate) use ctx;

/// A terminal parse failure.
///
/// Wraps exactly one [`Diagnostic`]: the stable code identifies the failure
/// class, the message is the user-facing text surfaced verbatim, and the span
/// (when known) points at the offending bytes of the raw input. Parsing
/// short-circuits on the first failure of the applicable precedence, so a
/// parse call never produces more than one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .diagnostic.message)]
pub struct ParseError {
    diagnostic: Diagnostic,
}

impl ParseError {
    /// Create an error-severity failure with the given code and message.
    pub fn new(id: impl Into<std::borrow::Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::error(id, message, None),
        }
    }

    /// Attach the byte span of the offending input (builder pattern).
    pub fn with_span(mut self, span: Span) -> Self {
        self.diagnostic.span = Some(span);
        self
    }

    /// Attach machine-readable context metadata (builder pattern).
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.diagnostic.context = Some(ctx);
        self
    }

    /// The stable diagnostic code (e.g. `"RLO1004"`).
    pub fn code(&self) -> &str {
        &self.diagnostic.id
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.diagnostic.message
    }

    /// The byte span of the offending input, when known.
    pub fn span(&self) -> Option<Span> {
        self.diagnostic.span
    }

    /// Look up a context value by key.
    pub fn context_get(&self, key: &str) -> Option<&str> {
        self.diagnostic
            .context
            .as_ref()
            .and_then(|ctx| ctx.get(key))
            .map(String::as_str)
    }

    /// Borrow the underlying diagnostic.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// Consume the error, yielding the underlying diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }
}
