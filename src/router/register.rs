use super::{HttpRouter, RouteEntry, STAR, STATIC_RESOURCE};
use crate::aspect::Aspects;
use crate::handler::{seal, Handler};
use crate::method_mask::MethodMask;

use http::Method;
use tracing::debug;

impl HttpRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name` for the given method set.
    ///
    /// A trailing `'*'` selects wildcard storage under the name minus the
    /// marker; the [`STATIC_RESOURCE`] name selects the fallback route. An
    /// empty method set produces a route that exact dispatch can never reach.
    /// Re-registering a name silently replaces the previous entry.
    pub fn register_handler<R, H>(&mut self, name: &str, methods: &[Method], handler: H)
    where
        R: 'static,
        H: Handler<R> + 'static,
    {
        self.register_with_aspects(name, methods, handler, Aspects::new())
    }

    /// Like [`register_handler`](Self::register_handler), with an interceptor
    /// chain wrapped around every invocation of the handler.
    pub fn register_with_aspects<R, H>(
        &mut self,
        name: &str,
        methods: &[Method],
        handler: H,
        aspects: Aspects<R>,
    ) where
        R: 'static,
        H: Handler<R> + 'static,
    {
        let mask = MethodMask::of(methods);
        let invoke = seal(handler, aspects);

        if let Some(prefix) = name.strip_suffix(STAR) {
            debug!(prefix, "registering wildcard route");
            self.insert_wildcard(prefix, RouteEntry { mask, invoke });
            return;
        }

        if name == STATIC_RESOURCE {
            debug!("registering static-resource fallback route");
            self.exact.insert(name.into(), RouteEntry { mask, invoke });
            return;
        }

        if methods.is_empty() {
            // source-faithful unprefixed key: no valid method token can ever
            // produce it, and the mask is all-zero besides
            let key = format!(" {}", name);
            self.exact
                .insert(key.into_boxed_str(), RouteEntry { mask, invoke });
            return;
        }

        for m in methods {
            let key = format!("{} {}", m.as_str(), name);
            debug!(%key, "registering exact route");
            self.exact.insert(
                key.into_boxed_str(),
                RouteEntry {
                    mask,
                    invoke: invoke.clone(),
                },
            );
        }
    }

    /// Removes every exact-table entry registered under `name`, whatever
    /// method set it was registered with. Wildcard entries with the same base
    /// name are deliberately untouched.
    pub fn remove_handler(&mut self, name: &str) {
        self.exact.retain(|key, _| !key_is_for(key, name));
    }

    fn insert_wildcard(&mut self, prefix: &str, entry: RouteEntry) {
        match self.wildcard.iter_mut().find(|(p, _)| &**p == prefix) {
            Some((_, slot)) => *slot = entry,
            None => self.wildcard.push((prefix.into(), entry)),
        }
    }
}

/// Whether an exact-table `key` belongs to the route registered as `name`:
/// either the bare name (sentinel route) or `"<METHOD> <name>"`.
fn key_is_for(key: &str, name: &str) -> bool {
    if key == name {
        return true;
    }
    match key.strip_suffix(name) {
        Some(prefix) => prefix.ends_with(' '),
        None => false,
    }
}
