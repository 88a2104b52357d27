use crate::errors::ServerError;
use crate::router::{handle, serve};
use crate::tests::utils::{read_body, test_app, FakeOrigin};
use astra::{Body, Request};
use http::Method;
use std::sync::Arc;

#[test]
fn health_is_ok_without_touching_the_origin() {
    let origin = Arc::new(FakeOrigin::standard());
    let app = test_app(origin.clone(), true);

    let resp = serve(crate::tests::utils::get("/_health", None), &app);

    assert_eq!(resp.status(), 200);
    assert_eq!(read_body(resp), "ok");
    assert_eq!(origin.lookup_count(), 0);
}

#[test]
fn non_get_is_not_found() {
    let app = test_app(Arc::new(FakeOrigin::standard()), true);

    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::POST;
    *req.uri_mut() = "/".parse().unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::NotFound)));
}
