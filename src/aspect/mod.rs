mod chain;

pub use self::chain::Aspects;

use crate::message::{Request, Response};

/// Capability for the phase that runs before the business handler.
///
/// Returning `false` short-circuits the dispatch: the handler and every
/// after-hook are skipped, and response mutations made so far stand.
pub trait BeforeHook: Send + Sync {
    fn before(&self, req: &Request<'_>, res: &mut Response) -> bool;
}

/// Capability for the phase that runs after the business handler, in reverse
/// registration order. `result` is the handler's return value.
///
/// Returning `false` stops the remaining after-hooks; the handler has already
/// run at that point.
pub trait AfterHook<R = ()>: Send + Sync {
    fn after(&self, result: &R, req: &Request<'_>, res: &mut Response) -> bool;
}

/// Adapts a plain closure into a [`BeforeHook`].
pub struct BeforeFn<F>(pub F);

impl<F> BeforeHook for BeforeFn<F>
where
    F: Fn(&Request<'_>, &mut Response) -> bool + Send + Sync,
{
    fn before(&self, req: &Request<'_>, res: &mut Response) -> bool {
        (self.0)(req, res)
    }
}

/// Adapts a plain closure into an [`AfterHook`].
pub struct AfterFn<F>(pub F);

impl<F, R> AfterHook<R> for AfterFn<F>
where
    F: Fn(&R, &Request<'_>, &mut Response) -> bool + Send + Sync,
{
    fn after(&self, result: &R, req: &Request<'_>, res: &mut Response) -> bool {
        (self.0)(result, req, res)
    }
}
