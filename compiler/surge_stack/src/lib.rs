//! Guards for deeply recursive front-end code.
//!
//! Two complementary tools:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand (via
//!   `stacker`) so deep but legitimate nesting does not overflow.
//! - [`DepthBudget`] is a cooperative counter that caps recursion depth so
//!   space stays bounded by a configured limit rather than by input size.
//!
//! On `wasm32` the stack cannot be grown and `ensure_sufficient_stack` is a
//! plain call.

/// Grow the stack when less than this much remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Error returned by [`DepthBudget::enter`] once the limit is reached.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DepthExceeded {
    pub limit: u32,
}

impl std::fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "nesting exceeds the limit of {}", self.limit)
    }
}

impl std::error::Error for DepthExceeded {}

/// Cooperative recursion counter.
///
/// Every successful [`enter`](Self::enter) must be paired with one
/// [`exit`](Self::exit) on all return paths. [`DepthBudget::scoped`] does the
/// pairing for closures that borrow the budget's owner mutably.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DepthBudget {
    depth: u32,
    limit: u32,
}

impl DepthBudget {
    pub const fn new(limit: u32) -> Self {
        DepthBudget { depth: 0, limit }
    }

    #[inline]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Take one level. Fails without changing the depth once the limit is hit.
    #[inline]
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if self.depth >= self.limit {
            return Err(DepthExceeded { limit: self.limit });
        }
        self.depth += 1;
        Ok(())
    }

    /// Give back one level.
    #[inline]
    pub fn exit(&mut self) {
        debug_assert!(self.depth > 0, "DepthBudget::exit without matching enter");
        self.depth = self.depth.saturating_sub(1);
    }

    /// Run `f` one level deeper with a grown stack, restoring the depth
    /// afterwards. `budget` projects the budget out of `owner`.
    pub fn scoped<T, R>(
        owner: &mut T,
        budget: impl Fn(&mut T) -> &mut DepthBudget,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, DepthExceeded> {
        budget(owner).enter()?;
        let result = ensure_sufficient_stack(|| f(owner));
        budget(owner).exit();
        Ok(result)
    }
}
