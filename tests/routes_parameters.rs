use bunner_path_router::{
    Context, Dispatch, Handler, HttpMethod, RadixError, RequestContext, Router, RouterError, Routes,
    handler_fn,
};

fn echo_params() -> Handler<RequestContext> {
    handler_fn(|ctx: &mut RequestContext| {
        let rendered: Vec<String> = ctx
            .params()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        ctx.response_mut().write(rendered.join("&"));
        Ok(())
    })
}

fn served(router: &Router, target: &str) -> (Dispatch, String) {
    let mut ctx = RequestContext::new(HttpMethod::Get, target);
    let outcome = router.serve(&mut ctx).expect("dispatch should not fail");
    (outcome, String::from_utf8_lossy(ctx.response().body()).into_owned())
}

#[test]
fn router_when_parameter_route_registered_then_extracts_values() {
    let router: Router = Router::new(None);
    router.get("/users/:id", echo_params()).expect("parameter route should register");

    let (outcome, body) = served(&router, "/users/42");
    assert_eq!(outcome, Dispatch::Handled);
    assert_eq!(body, "id=42");
}

#[test]
fn router_when_parameter_followed_by_more_path_then_miss() {
    let router: Router = Router::new(None);
    router.get("/users/:id", echo_params()).expect("route");

    let (outcome, body) = served(&router, "/users/42/extra");
    assert_eq!(outcome, Dispatch::NotFound);
    assert!(body.is_empty());
}

#[test]
fn router_when_several_parameters_then_captured_in_path_order() {
    let router: Router = Router::new(None);
    router
        .get("/info/:user/project/:project", echo_params())
        .expect("route");

    let (outcome, body) = served(&router, "/info/gordon/project/go");
    assert_eq!(outcome, Dispatch::Handled);
    assert_eq!(body, "user=gordon&project=go");
}

#[test]
fn router_when_parameter_shares_parent_with_suffixes_then_all_resolve() {
    let router: Router = Router::new(None);
    router.get("/cmd/:tool/:sub", echo_params()).expect("sub");
    router.get("/cmd/:tool/", echo_params()).expect("tool");
    router.get("/user_:name", echo_params()).expect("user");
    router.get("/user_:name/about", echo_params()).expect("about");

    assert_eq!(served(&router, "/cmd/test/").1, "tool=test");
    assert_eq!(served(&router, "/cmd/test/3").1, "tool=test&sub=3");
    assert_eq!(served(&router, "/user_gopher").1, "name=gopher");
    assert_eq!(served(&router, "/user_gopher/about").1, "name=gopher");
}

#[test]
fn router_when_parameter_value_is_empty_then_no_match() {
    let router: Router = Router::new(None);
    router.get("/a/:x/b", echo_params()).expect("route");

    let (outcome, _) = served(&router, "/a//b");
    assert_ne!(outcome, Dispatch::Handled);
}

#[test]
fn router_when_parameter_value_is_unicode_then_captured_whole() {
    let router: Router = Router::new(None);
    router.get("/tags/:tag", echo_params()).expect("route");

    assert_eq!(served(&router, "/tags/\u{d55c}\u{ae00}").1, "tag=\u{d55c}\u{ae00}");
}

#[test]
fn router_when_context_param_read_then_returns_value() {
    let router: Router = Router::new(None);
    router
        .get(
            "/posts/:slug",
            handler_fn(|ctx: &mut RequestContext| {
                assert_eq!(ctx.param("slug"), Some("hello-world"));
                assert_eq!(ctx.param("missing"), None);
                Ok(())
            }),
        )
        .expect("route");

    assert_eq!(served(&router, "/posts/hello-world").0, Dispatch::Handled);
}

#[test]
fn router_when_find_called_then_returns_params_without_running_handler() {
    let router: Router = Router::new(None);
    router.get("/orgs/:org/repos/:repo", echo_params()).expect("route");

    let matched = router
        .find(HttpMethod::Get, "/orgs/rust-lang/repos/cargo")
        .expect("route should match");
    assert_eq!(matched.params.len(), 2);
    assert_eq!(matched.params.get("org"), Some("rust-lang"));
    assert_eq!(matched.params.get("repo"), Some("cargo"));

    assert!(router.find(HttpMethod::Post, "/orgs/rust-lang/repos/cargo").is_none());
}

#[test]
fn router_when_duplicate_parameter_names_used_then_returns_error() {
    let router: Router = Router::new(None);
    let err = router.get("/:id/:id", echo_params());

    match err.expect_err("expected duplicate parameter error") {
        RouterError::Radix(RadixError::DuplicateParamName { param, .. }) => {
            assert_eq!(param, "id");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_two_names_for_same_parameter_slot_then_conflict() {
    let router: Router = Router::new(None);
    router.get("/a/:x", echo_params()).expect("first");

    match router.get("/a/:y", echo_params()).expect_err("expected conflict") {
        RouterError::Radix(RadixError::WildcardConflict {
            segment, wildcard, prefix, ..
        }) => {
            assert_eq!(segment, ":y");
            assert_eq!(wildcard, ":x");
            assert_eq!(prefix, "/a/:x");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(served(&router, "/a/1").1, "x=1");
}

#[test]
fn router_when_static_sibling_of_parameter_added_then_conflict() {
    let router: Router = Router::new(None);
    router.get("/users/:id", echo_params()).expect("param");

    match router.get("/users/new", echo_params()).expect_err("expected conflict") {
        RouterError::Radix(RadixError::WildcardConflict { segment, .. }) => {
            assert_eq!(segment, "new");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_parameter_added_beside_static_then_conflict() {
    let router: Router = Router::new(None);
    router.get("/users/new", echo_params()).expect("static");

    match router.get("/users/:id", echo_params()).expect_err("expected conflict") {
        RouterError::Radix(RadixError::WildcardLiteralConflict { wildcard, path }) => {
            assert_eq!(wildcard, ":id");
            assert_eq!(path, "/users/:id");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(served(&router, "/users/new").0, Dispatch::Handled);
}

#[test]
fn router_when_parameter_has_no_name_then_returns_error() {
    let router: Router = Router::new(None);

    match router.get("/users/:", echo_params()).expect_err("expected error") {
        RouterError::Radix(RadixError::EmptyWildcardName { path }) => {
            assert_eq!(path, "/users/:");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_segment_has_two_wildcards_then_returns_error() {
    let router: Router = Router::new(None);

    match router.get("/:a:b", echo_params()).expect_err("expected error") {
        RouterError::Radix(RadixError::MultipleWildcardsInSegment { segment, .. }) => {
            assert_eq!(segment, ":a:b");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_params_collected_into_map_then_keyed_by_name() {
    let router: Router = Router::new(None);
    router
        .get(
            "/orgs/:org/repos/:repo",
            handler_fn(|ctx: &mut RequestContext| {
                let map = ctx.params().to_map();
                let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
                keys.sort_unstable();
                let line = format!(
                    "{}|{}|{}",
                    keys.join(","),
                    map.get("org").map(String::as_str).unwrap_or_default(),
                    map.get("repo").map(String::as_str).unwrap_or_default()
                );
                ctx.response_mut().write(line);
                Ok(())
            }),
        )
        .expect("route");

    let (outcome, body) = served(&router, "/orgs/rust-lang/repos/cargo");
    assert_eq!(outcome, Dispatch::Handled);
    assert_eq!(body, "org,repo|rust-lang|cargo");
}
