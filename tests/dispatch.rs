use aspect_router::{route_table, HttpRouter, Method, Request, Response, STATIC_RESOURCE};

fn ok(_: &Request<'_>, res: &mut Response) {
    res.set_body("ok");
}

fn first(_: &Request<'_>, res: &mut Response) {
    res.set_body("first");
}

fn second(_: &Request<'_>, res: &mut Response) {
    res.set_body("second");
}

fn asset(_: &Request<'_>, res: &mut Response) {
    res.set_body("asset");
}

fn fallback(_: &Request<'_>, res: &mut Response) {
    res.set_status(404);
    res.set_body("fallback");
}

fn dispatch(router: &HttpRouter, head: &str) -> (bool, Response) {
    let req = Request::from_head(head).unwrap();
    let mut res = Response::new();
    let matched = router.route_request(&req, &mut res);
    (matched, res)
}

#[test]
fn exact_route_honours_method_set() {
    let mut router = HttpRouter::new();
    router.register_handler("/greet", &[Method::GET, Method::POST], ok);

    let (matched, res) = dispatch(&router, "GET /greet HTTP/1.1");
    assert!(matched);
    assert_eq!(res.body(), b"ok");

    let (matched, _) = dispatch(&router, "POST /greet HTTP/1.1");
    assert!(matched);

    let (matched, res) = dispatch(&router, "DELETE /greet HTTP/1.1");
    assert!(!matched);
    assert!(res.body().is_empty());
}

#[test]
fn first_letter_ambiguity_on_method_agnostic_keys() {
    // the permission set is keyed by the method's first letter only; the
    // static-resource key carries no method prefix, so registering POST
    // there opens the route to the whole 'P' family
    let mut router = HttpRouter::new();
    router.register_handler(STATIC_RESOURCE, &[Method::POST], fallback);

    let (matched, res) = dispatch(&router, "PATCH /missing HTTP/1.1");
    assert!(matched);
    assert_eq!(res.body(), b"fallback");

    let (matched, _) = dispatch(&router, "PUT /missing HTTP/1.1");
    assert!(matched);

    let (matched, _) = dispatch(&router, "GET /missing HTTP/1.1");
    assert!(!matched);
}

#[test]
fn wildcard_matches_by_containment() {
    let mut router = HttpRouter::new();
    router.register_handler("/static/*", &[Method::GET], asset);

    let (matched, res) = dispatch(&router, "GET /static/app.js HTTP/1.1");
    assert!(matched);
    assert_eq!(res.body(), b"asset");

    // containment, not prefix: the registered prefix may sit anywhere
    let (matched, _) = dispatch(&router, "GET /other/static/x HTTP/1.1");
    assert!(matched);

    // wildcard dispatch does not consult the method set
    let (matched, _) = dispatch(&router, "DELETE /static/app.js HTTP/1.1");
    assert!(matched);
}

#[test]
fn wildcard_scan_is_registration_order() {
    let mut router = HttpRouter::new();
    router.register_handler("/a/*", &[Method::GET], first);
    router.register_handler("/a/b/*", &[Method::GET], second);

    let (matched, res) = dispatch(&router, "GET /a/b/c HTTP/1.1");
    assert!(matched);
    assert_eq!(res.body(), b"first");
}

#[test]
fn unmatched_requests_fall_back_once() {
    let mut router = HttpRouter::new();

    let (matched, _) = dispatch(&router, "GET /nowhere HTTP/1.1");
    assert!(!matched);

    router.register_handler(STATIC_RESOURCE, &[Method::GET], fallback);
    let (matched, res) = dispatch(&router, "GET /nowhere HTTP/1.1");
    assert!(matched);
    assert_eq!(res.status(), 404);
    assert_eq!(res.body(), b"fallback");

    // a matching wildcard wins over the fallback
    router.register_handler("/w/*", &[Method::GET], asset);
    let (matched, res) = dispatch(&router, "GET /w/x HTTP/1.1");
    assert!(matched);
    assert_eq!(res.body(), b"asset");
}

#[test]
fn reregistration_replaces_the_entry() {
    let mut router = HttpRouter::new();
    router.register_handler("/a", &[Method::GET], first);
    router.register_handler("/a", &[Method::GET], second);

    let (matched, res) = dispatch(&router, "GET /a HTTP/1.1");
    assert!(matched);
    assert_eq!(res.body(), b"second");
}

#[test]
fn remove_handler_leaves_wildcard_entries() {
    let mut router = HttpRouter::new();
    router.register_handler("/files", &[Method::GET, Method::POST], ok);
    router.register_handler("/files/*", &[Method::GET], asset);

    router.remove_handler("/files");

    let (matched, _) = dispatch(&router, "GET /files HTTP/1.1");
    assert!(!matched);
    let (matched, _) = dispatch(&router, "POST /files HTTP/1.1");
    assert!(!matched);

    let (matched, res) = dispatch(&router, "GET /files/report.txt HTTP/1.1");
    assert!(matched);
    assert_eq!(res.body(), b"asset");
}

#[test]
fn bare_registration_is_unreachable_by_exact_dispatch() {
    let mut router = HttpRouter::new();
    router.register_handler("/bare", &[], ok);

    let (matched, _) = dispatch(&router, "GET /bare HTTP/1.1");
    assert!(!matched);
}

#[test]
fn detached_method_and_path_still_route() {
    let mut router = HttpRouter::new();
    router.register_handler("/greet", &[Method::GET], ok);

    // method and path are not views into the request head here, so the
    // lookup key is built by copying instead of reusing the head span
    let req = Request::from_head("POST /elsewhere HTTP/1.1").unwrap();
    let mut res = Response::new();
    assert!(router.route("GET", "/greet", &req, &mut res));
    assert_eq!(res.body(), b"ok");
}

#[test]
fn route_table_macro_registers_method_sets() {
    let mut router = HttpRouter::new();
    route_table! { router,
        [GET] "/one" => first,
        [POST, PUT] "/two" => second,
    }

    let (matched, res) = dispatch(&router, "GET /one HTTP/1.1");
    assert!(matched);
    assert_eq!(res.body(), b"first");

    let (matched, _) = dispatch(&router, "POST /two HTTP/1.1");
    assert!(matched);
    let (matched, _) = dispatch(&router, "PUT /two HTTP/1.1");
    assert!(matched);
    let (matched, _) = dispatch(&router, "GET /two HTTP/1.1");
    assert!(!matched);
}

#[test]
fn router_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpRouter>();
}
