use crate::aspect::Aspects;
use crate::message::{Request, Response};

use std::marker::PhantomData;
use std::sync::Arc;

/// The type-erased invocable stored by the routing table: the business
/// handler sealed together with its aspect chain.
pub(crate) type Invoker = Arc<dyn Fn(&Request<'_>, &mut Response) + Send + Sync>;

/// A route's business handler. `R` is the result value handed to after-hooks;
/// handlers that only write into the response use `R = ()`.
pub trait Handler<R>: Send + Sync {
    fn call(&self, req: &Request<'_>, res: &mut Response) -> R;
}

impl<F, R> Handler<R> for F
where
    F: Fn(&Request<'_>, &mut Response) -> R + Send + Sync,
{
    fn call(&self, req: &Request<'_>, res: &mut Response) -> R {
        (self)(req, res)
    }
}

/// Handler bound to a shared instance supplied at registration.
pub struct Bound<T, F> {
    owner: Arc<T>,
    f: F,
}

/// Binds `f` to `owner`; every invocation sees the same instance, so any
/// mutable state inside it must provide its own interior mutability.
pub fn bound<T, F, R>(owner: Arc<T>, f: F) -> Bound<T, F>
where
    T: Send + Sync,
    F: Fn(&T, &Request<'_>, &mut Response) -> R + Send + Sync,
{
    Bound { owner, f }
}

impl<T, F, R> Handler<R> for Bound<T, F>
where
    T: Send + Sync,
    F: Fn(&T, &Request<'_>, &mut Response) -> R + Send + Sync,
{
    fn call(&self, req: &Request<'_>, res: &mut Response) -> R {
        (self.f)(&self.owner, req, res)
    }
}

/// Handler that owns no instance: a fresh `T::default()` is constructed for
/// each invocation and discarded afterward.
pub struct PerRequest<T, F> {
    f: F,
    _owner: PhantomData<fn() -> T>,
}

pub fn per_request<T, F, R>(f: F) -> PerRequest<T, F>
where
    T: Default,
    F: Fn(&mut T, &Request<'_>, &mut Response) -> R + Send + Sync,
{
    PerRequest {
        f,
        _owner: PhantomData,
    }
}

impl<T, F, R> Handler<R> for PerRequest<T, F>
where
    T: Default,
    F: Fn(&mut T, &Request<'_>, &mut Response) -> R + Send + Sync,
{
    fn call(&self, req: &Request<'_>, res: &mut Response) -> R {
        let mut owner = T::default();
        (self.f)(&mut owner, req, res)
    }
}

/// Seals a handler and its aspect chain into the single invocable stored by
/// the routing table.
///
/// The sealed closure runs the full sequence: before-hooks in order (abort on
/// the first `false`), the handler, then after-hooks in reverse order. The
/// handler result lives exactly as long as the after phase.
pub(crate) fn seal<R, H>(handler: H, aspects: Aspects<R>) -> Invoker
where
    R: 'static,
    H: Handler<R> + 'static,
{
    Arc::new(move |req: &Request<'_>, res: &mut Response| {
        if !aspects.run_before(req, res) {
            return;
        }
        let result = handler.call(req, res);
        aspects.run_after(&result, req, res);
    })
}
