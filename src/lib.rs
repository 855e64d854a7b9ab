#![forbid(unsafe_code)]

mod aspect;
mod handler;
mod message;
mod method_mask;
mod router;

pub use crate::aspect::{AfterFn, AfterHook, Aspects, BeforeFn, BeforeHook};
pub use crate::handler::{bound, per_request, Bound, Handler, PerRequest};
pub use crate::message::{HeadError, Request, Response};
pub use crate::method_mask::MethodMask;
pub use crate::router::{HttpRouter, STATIC_RESOURCE};

pub use http::Method;
