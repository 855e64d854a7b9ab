/// Registers a batch of routes on an existing [`HttpRouter`](crate::HttpRouter).
///
/// ```
/// use aspect_router::{HttpRouter, Request, Response, route_table};
///
/// fn index(_: &Request<'_>, res: &mut Response) {
///     res.set_body("index");
/// }
///
/// fn submit(_: &Request<'_>, res: &mut Response) {
///     res.set_status(201);
/// }
///
/// let mut router = HttpRouter::new();
/// route_table! { router,
///     [GET] "/" => index,
///     [POST, PUT] "/submit" => submit,
/// }
///
/// let req = Request::from_head("GET / HTTP/1.1").unwrap();
/// let mut res = Response::new();
/// assert!(router.route_request(&req, &mut res));
/// ```
#[macro_export]
macro_rules! route_table {
    {$router:expr, $([$($method:ident),+] $name:expr => $handler:expr),+ $(,)?} => {{
        $(
            $router.register_handler($name, &[$($crate::Method::$method),+], $handler);
        )+
    }};
}
