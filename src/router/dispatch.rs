use super::{HttpRouter, STATIC_RESOURCE};
use crate::message::{Request, Response};

use std::borrow::Cow;

use tracing::{debug, trace};

enum Exact {
    Invoked,
    MethodRejected,
    Missing,
}

impl HttpRouter {
    /// Resolves `(method, path)` and drives the matched handler chain.
    ///
    /// Returns `true` once a handler's invocation sequence was entered (even
    /// if a before-hook short-circuited it), `false` for no match — whether
    /// the key was absent, the method disallowed, or the method token
    /// malformed is not distinguished.
    pub fn route(&self, method: &str, path: &str, req: &Request<'_>, res: &mut Response) -> bool {
        let key = lookup_key(method, path, req);
        match self.try_exact(&key, method, req, res) {
            Exact::Invoked => true,
            Exact::MethodRejected => false,
            Exact::Missing => {
                if self.try_wildcard(path, req, res) {
                    return true;
                }
                // one extra attempt at the static-resource route, nothing more
                match self.try_exact(STATIC_RESOURCE, method, req, res) {
                    Exact::Invoked => true,
                    _ => {
                        trace!(method, path, "no route matched");
                        false
                    }
                }
            }
        }
    }

    /// Dispatches a request on its own method and path views.
    pub fn route_request(&self, req: &Request<'_>, res: &mut Response) -> bool {
        self.route(req.method(), req.path(), req, res)
    }

    fn try_exact(&self, key: &str, method: &str, req: &Request<'_>, res: &mut Response) -> Exact {
        let entry = match self.exact.get(key) {
            Some(entry) => entry,
            None => return Exact::Missing,
        };
        let leading_upper = method
            .as_bytes()
            .first()
            .map_or(false, u8::is_ascii_uppercase);
        if !leading_upper {
            return Exact::MethodRejected;
        }
        if !entry.mask.allows(method) {
            debug!(method, key, "method not allowed for route");
            return Exact::MethodRejected;
        }
        (entry.invoke)(req, res);
        Exact::Invoked
    }

    fn try_wildcard(&self, path: &str, req: &Request<'_>, res: &mut Response) -> bool {
        // first containment match wins; the permission mask is not consulted
        for (prefix, entry) in &self.wildcard {
            if path.contains(&**prefix) {
                (entry.invoke)(req, res);
                return true;
            }
        }
        false
    }
}

/// Builds the exact-table lookup key. When `method` and `path` are the
/// request's own views the key is the request head's `"<METHOD> <path>"`
/// span; otherwise it falls back to an owned concatenation.
fn lookup_key<'r>(method: &str, path: &str, req: &Request<'r>) -> Cow<'r, str> {
    let m = req.method();
    let p = req.path();
    let same_views = m.as_ptr() == method.as_ptr()
        && m.len() == method.len()
        && p.as_ptr() == path.as_ptr()
        && p.len() == path.len();
    if same_views {
        Cow::Borrowed(req.lookup_key())
    } else {
        trace!("method and path are not the request's own views; building an owned key");
        Cow::Owned(format!("{} {}", method, path))
    }
}
