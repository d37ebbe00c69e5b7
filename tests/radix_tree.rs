use bunner_path_router::{Lookup, Node, NodeKind, Params, RadixError};

const ROUTES: [&str; 16] = [
    "/",
    "/cmd/:tool/:sub",
    "/cmd/:tool/",
    "/src/*filepath",
    "/search/",
    "/search/:query",
    "/user_:name",
    "/user_:name/about",
    "/files/:dir/*filepath",
    "/doc/",
    "/doc/go_faq.html",
    "/doc/go1.html",
    "/info/:user/public",
    "/info/:user/project/:project",
    "/contact",
    "/co",
];

fn build(routes: &[&'static str]) -> Node<&'static str> {
    let mut root = Node::new();
    for route in routes {
        root.add_route(route, *route)
            .unwrap_or_else(|e| panic!("{route}: {e}"));
    }
    root
}

fn lookup(root: &Node<&'static str>, path: &str) -> (Option<&'static str>, Vec<(String, String)>) {
    let mut params = Params::new();
    let value = root.search(path, &mut params).value().copied();
    let captured = params
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    (value, captured)
}

fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn tree_when_searched_then_matches_expected_routes() {
    let root = build(&ROUTES);

    let cases: [(&str, Option<&str>, Vec<(String, String)>); 12] = [
        ("/", Some("/"), pairs(&[])),
        ("/cmd/test/", Some("/cmd/:tool/"), pairs(&[("tool", "test")])),
        ("/cmd/test/3", Some("/cmd/:tool/:sub"), pairs(&[("tool", "test"), ("sub", "3")])),
        ("/src/", Some("/src/*filepath"), pairs(&[("filepath", "")])),
        (
            "/src/some/file.png",
            Some("/src/*filepath"),
            pairs(&[("filepath", "some/file.png")]),
        ),
        ("/search/", Some("/search/"), pairs(&[])),
        (
            "/search/someth!ng+in+\u{fc}n\u{ec}code",
            Some("/search/:query"),
            pairs(&[("query", "someth!ng+in+\u{fc}n\u{ec}code")]),
        ),
        ("/user_gopher", Some("/user_:name"), pairs(&[("name", "gopher")])),
        ("/user_gopher/about", Some("/user_:name/about"), pairs(&[("name", "gopher")])),
        (
            "/files/js/inc/framework.js",
            Some("/files/:dir/*filepath"),
            pairs(&[("dir", "js"), ("filepath", "inc/framework.js")]),
        ),
        ("/info/gordon/public", Some("/info/:user/public"), pairs(&[("user", "gordon")])),
        (
            "/info/gordon/project/go",
            Some("/info/:user/project/:project"),
            pairs(&[("user", "gordon"), ("project", "go")]),
        ),
    ];

    for (path, expected, params) in cases {
        let (value, captured) = lookup(&root, path);
        assert_eq!(value, expected, "path {path}");
        assert_eq!(captured, params, "path {path}");
    }
}

#[test]
fn tree_when_path_unknown_then_missing_and_params_cleared() {
    let root = build(&ROUTES);
    let mut params = Params::new();

    for path in ["/cmd/test", "/search/someth!ng/extra", "/info/gordon", "/c", "/user_"] {
        let result = root.search(path, &mut params);
        assert!(!result.is_found(), "path {path}");
        assert!(params.is_empty(), "path {path}");
    }
}

#[test]
fn tree_when_trailing_slash_differs_then_recommends_it() {
    let root = build(&ROUTES);
    let mut params = Params::new();

    for path in ["/cmd/test", "/cmd/test/3/", "/search", "/src", "/doc", "/contact/", "/co/"] {
        assert!(root.search(path, &mut params).is_trailing_slash(), "path {path}");
    }
    for path in ["/no", "/_", "/doc/go1.html/x", "/info/gordon/"] {
        assert!(!root.search(path, &mut params).is_trailing_slash(), "path {path}");
    }
}

#[test]
fn tree_when_insertion_order_varies_then_results_identical() {
    let forward = build(&ROUTES);
    let mut reversed_routes = ROUTES;
    reversed_routes.reverse();
    let reversed = build(&reversed_routes);

    let probes = [
        "/",
        "/cmd/x/",
        "/cmd/x/y",
        "/src/a/b",
        "/search/q",
        "/user_bob/about",
        "/files/d/f",
        "/doc/go1.html",
        "/info/u/project/p",
        "/contact",
        "/co",
        "/nothing",
    ];
    for path in probes {
        assert_eq!(lookup(&forward, path), lookup(&reversed, path), "path {path}");
    }
}

#[test]
fn tree_when_built_then_priority_counts_routes_below() {
    let root = build(&ROUTES);
    assert_eq!(root.priority() as usize, ROUTES.len());
    assert_eq!(root.kind(), NodeKind::Root);

    let mut static_children_sorted = true;
    root.walk(|node| {
        if !node.has_wildcard_child() {
            assert_eq!(node.indices().len(), node.children().len());
            let priorities: Vec<u32> = node.children().iter().map(Node::priority).collect();
            static_children_sorted &= priorities.windows(2).all(|w| w[0] >= w[1]);
        }
    });
    assert!(static_children_sorted);
}

#[test]
fn tree_when_value_registered_twice_then_duplicate_and_first_kept() {
    let mut root = build(&["/a/:b"]);
    let err = root.add_route("/a/:b", "second").expect_err("duplicate");
    assert_eq!(
        err,
        RadixError::DuplicateRoute {
            path: "/a/:b".to_string()
        }
    );
    assert_eq!(lookup(&root, "/a/1").0, Some("/a/:b"));
}

#[test]
fn tree_when_wildcard_node_inspected_then_exposes_kind_and_name() {
    let root = build(&["/users/:id"]);
    assert_eq!(root.segment(), b"/users/");
    assert!(root.has_wildcard_child());

    let param = &root.children()[0];
    assert_eq!(param.kind(), NodeKind::Param);
    assert_eq!(param.param_name(), Some("id"));
    assert_eq!(param.value(), Some(&"/users/:id"));
}

#[test]
fn tree_when_search_result_is_lookup_then_variants_compare() {
    let root = build(&["/x"]);
    let mut params = Params::new();
    assert_eq!(root.search("/x", &mut params), Lookup::Found(&"/x"));
    assert_eq!(root.search("/x/", &mut params), Lookup::TrailingSlash);
    assert_eq!(root.search("/y", &mut params), Lookup::Missing);
}
