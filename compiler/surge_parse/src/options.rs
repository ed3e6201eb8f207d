//! Parse configuration and cooperative progress reporting.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use surge_ir::ast::ItemTag;
use surge_ir::Span;

/// Observer consulted between top-level items.
///
/// Implementations must be cheap: `is_cancelled` is polled once per item.
pub trait ProgressTracer {
    /// Called after each successfully parsed item.
    fn item_parsed(&self, _kind: ItemTag, _span: Span) {}

    /// When this returns `true` the parser stops before the next item and
    /// returns what it has so far.
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Flag-based cancellation for callers that only need to stop a parse.
#[derive(Default, Debug)]
pub struct Cancellation {
    cancelled: AtomicBool,
}

impl Cancellation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl ProgressTracer for Cancellation {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Options for [`crate::parse_file`].
#[derive(Copy, Clone)]
pub struct ParseOptions<'a> {
    /// Error cap for the diagnostic bag; 0 means unlimited.
    pub max_errors: usize,
    /// Maximum expression nesting before `SynExpressionTooDeep`.
    pub max_expr_depth: u32,
    pub tracer: Option<&'a dyn ProgressTracer>,
}

impl<'a> ParseOptions<'a> {
    pub const DEFAULT_MAX_ERRORS: usize = 100;
    pub const DEFAULT_MAX_EXPR_DEPTH: u32 = 256;

    pub fn new() -> Self {
        ParseOptions {
            max_errors: Self::DEFAULT_MAX_ERRORS,
            max_expr_depth: Self::DEFAULT_MAX_EXPR_DEPTH,
            tracer: None,
        }
    }

    #[must_use]
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    #[must_use]
    pub fn with_max_expr_depth(mut self, depth: u32) -> Self {
        self.max_expr_depth = depth;
        self
    }

    #[must_use]
    pub fn with_tracer(mut self, tracer: &'a dyn ProgressTracer) -> Self {
        self.tracer = Some(tracer);
        self
    }
}

impl Default for ParseOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParseOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("max_errors", &self.max_errors)
            .field("max_expr_depth", &self.max_expr_depth)
            .field("tracer", &self.tracer.is_some())
            .finish()
    }
}
