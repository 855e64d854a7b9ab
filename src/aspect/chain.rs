use super::{AfterHook, BeforeHook};
use crate::message::{Request, Response};

use std::sync::Arc;

use smallvec::SmallVec;

/// Ordered interceptor chain attached to a route.
///
/// The composition is fixed when the route is registered and never mutated
/// afterward. Each link records which hooks its interceptor actually has; a
/// missing hook is a no-op for that phase and can not abort the chain.
pub struct Aspects<R = ()> {
    links: SmallVec<[Link<R>; 4]>,
}

struct Link<R> {
    before: Option<Arc<dyn BeforeHook>>,
    after: Option<Arc<dyn AfterHook<R>>>,
}

impl<R> Default for Aspects<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Aspects<R> {
    pub fn new() -> Self {
        Self {
            links: SmallVec::new(),
        }
    }

    /// Appends an interceptor that only participates in the before phase.
    pub fn before(mut self, hook: impl BeforeHook + 'static) -> Self {
        self.links.push(Link {
            before: Some(Arc::new(hook)),
            after: None,
        });
        self
    }

    /// Appends an interceptor that only participates in the after phase.
    pub fn after(mut self, hook: impl AfterHook<R> + 'static) -> Self {
        self.links.push(Link {
            before: None,
            after: Some(Arc::new(hook)),
        });
        self
    }

    /// Appends an interceptor with both hooks; the value is shared between
    /// the two phases.
    pub fn around(mut self, hook: impl BeforeHook + AfterHook<R> + 'static) -> Self {
        let hook = Arc::new(hook);
        self.links.push(Link {
            before: Some(hook.clone()),
            after: Some(hook),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub(crate) fn run_before(&self, req: &Request<'_>, res: &mut Response) -> bool {
        for link in &self.links {
            if let Some(hook) = &link.before {
                if !hook.before(req, res) {
                    return false;
                }
            }
        }
        true
    }

    pub(crate) fn run_after(&self, result: &R, req: &Request<'_>, res: &mut Response) {
        for link in self.links.iter().rev() {
            if let Some(hook) = &link.after {
                if !hook.after(result, req, res) {
                    break;
                }
            }
        }
    }
}
