mod dispatch;
mod register;
mod router_macro;

use crate::handler::Invoker;
use crate::method_mask::MethodMask;

use std::collections::HashMap;
use std::fmt;

/// Reserved route name for the static-resource fallback: the route tried
/// once after every exact and wildcard lookup has missed.
pub const STATIC_RESOURCE: &str = "__static_resource__";

const STAR: char = '*';

/// Request-dispatch table: maps `(method, path)` to a registered handler
/// chain.
///
/// Exact routes are keyed by `"<METHOD> <path>"` in a hash map; wildcard
/// routes live in a separate list keyed by their path prefix and are matched
/// by substring containment in registration order.
///
/// Registration is a single-threaded setup phase; once requests are being
/// served, only [`route`](HttpRouter::route) may be called.
#[derive(Default)]
pub struct HttpRouter {
    exact: HashMap<Box<str>, RouteEntry>,
    wildcard: Vec<(Box<str>, RouteEntry)>,
}

pub(crate) struct RouteEntry {
    pub(crate) mask: MethodMask,
    pub(crate) invoke: Invoker,
}

impl fmt::Debug for HttpRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRouter")
            .field("exact", &self.exact.keys().collect::<Vec<_>>())
            .field(
                "wildcard",
                &self.wildcard.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .finish()
    }
}
