//! Dispatch integration tests: first-match scanning, OR semantics,
//! unsupported-condition skipping, and context resolution.

use waymark::testing::{RecordingProvider, StaticResolver, TestResource};
use waymark::{
    Action, Arg, ConditionRegistry, ConditionSet, GroupAttributes, Method, Request, Router,
};

#[derive(Debug, Clone, Default)]
struct WebRequest {
    front_page: bool,
    page_slug: Option<String>,
}

impl Request for WebRequest {}

fn site_registry() -> ConditionRegistry<WebRequest> {
    ConditionRegistry::builder()
        .register("front_page", |req: &WebRequest, _| req.front_page)
        .register("page", |req: &WebRequest, args| match args.first() {
            Some(arg) => arg.as_str() == req.page_slug.as_deref(),
            None => req.page_slug.is_some(),
        })
        .register("always", |_, _| true)
        .register("never", |_, _| false)
        .build()
}

#[test]
fn test_first_registered_route_wins() {
    let mut router = Router::new(site_registry(), StaticResolver::none());
    router.get("always", "First@show");
    router.get("always", "Second@show");

    let outcome = router.dispatch(Method::Get, &WebRequest::default());
    assert_eq!(
        outcome.action().and_then(|a| a.handler().uses()),
        Some("First@show")
    );
}

#[test]
fn test_arg_lists_are_or_combined() {
    let mut router = Router::new(site_registry(), StaticResolver::none());
    router.get(
        ConditionSet::new().when_any("page", ["about", "contact"]),
        "PageController@show",
    );

    // predicate("about") is false, predicate("contact") is true: still a match.
    let request = WebRequest {
        page_slug: Some("contact".to_string()),
        ..Default::default()
    };
    assert!(router.dispatch(Method::Get, &request).is_match());
}

#[test]
fn test_first_true_arg_list_short_circuits() {
    let provider = RecordingProvider::new(site_registry());
    let calls = provider.calls_handle();
    let mut router = Router::new(provider, StaticResolver::none());
    router.get(
        ConditionSet::new().when_any("page", ["about", "contact", "legal"]),
        "PageController@show",
    );

    let request = WebRequest {
        page_slug: Some("contact".to_string()),
        ..Default::default()
    };
    assert!(router.dispatch(Method::Get, &request).is_match());

    // "legal" is never tried once "contact" holds.
    let recorded = calls.lock().unwrap().clone();
    assert_eq!(
        recorded,
        vec![
            ("page".to_string(), vec![Arg::from("about")]),
            ("page".to_string(), vec![Arg::from("contact")]),
        ]
    );
}

#[test]
fn test_unknown_condition_is_skipped_not_fatal() {
    let provider = RecordingProvider::new(site_registry());
    let calls = provider.calls_handle();
    let mut router = Router::new(provider, StaticResolver::none());
    // "woocommerce_shop" exists only in hosts with that plugin installed.
    router.get(
        ConditionSet::new().when("woocommerce_shop").when("front_page"),
        "ShopOrHome@show",
    );

    let request = WebRequest {
        front_page: true,
        ..Default::default()
    };
    assert!(router.dispatch(Method::Get, &request).is_match());

    let recorded = calls.lock().unwrap().clone();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].0, "woocommerce_shop");
    assert_eq!(recorded[1].0, "front_page");
}

#[test]
fn test_route_with_no_conditions_never_matches() {
    let mut router = Router::new(site_registry(), StaticResolver::none());
    router.get(ConditionSet::new(), "Unreachable@show");

    assert!(!router.dispatch(Method::Get, &WebRequest::default()).is_match());
}

#[test]
fn test_empty_verb_bucket_is_no_match() {
    let router: Router<WebRequest, _, _> = Router::new(site_registry(), StaticResolver::none());

    let outcome = router.dispatch(Method::Get, &WebRequest::default());
    assert!(!outcome.is_match());
    assert!(outcome.action().is_none());
    assert!(outcome.context().is_none());
}

#[test]
fn test_verb_buckets_are_independent() {
    let mut router = Router::new(site_registry(), StaticResolver::none());
    router.post("always", "Submit@handle");

    assert!(!router.dispatch(Method::Get, &WebRequest::default()).is_match());
    assert!(router.dispatch(Method::Post, &WebRequest::default()).is_match());
}

#[test]
fn test_any_answers_all_six_verbs() {
    let mut router = Router::new(site_registry(), StaticResolver::none());
    router.any("always", "Everywhere@handle");

    for method in Method::ALL {
        assert!(router.dispatch(method, &WebRequest::default()).is_match());
    }
}

#[test]
fn test_context_carries_exactly_one_role() {
    let request = WebRequest::default();

    let mut router = Router::new(
        site_registry(),
        StaticResolver::of(TestResource::post(42).with_type("page")),
    );
    router.get("always", "A@a");
    let outcome = router.dispatch(Method::Get, &request);
    let context = outcome.context().unwrap();
    assert_eq!(context.post().map(|r| r.id()), Some(42));
    assert!(context.term().is_none());
    assert!(context.user().is_none());

    let mut router = Router::new(site_registry(), StaticResolver::of(TestResource::term(7)));
    router.get("always", "A@a");
    let outcome = router.dispatch(Method::Get, &request);
    assert_eq!(outcome.context().unwrap().term().map(|r| r.id()), Some(7));
    assert!(outcome.context().unwrap().post().is_none());

    let mut router = Router::new(site_registry(), StaticResolver::of(TestResource::user(3)));
    router.get("always", "A@a");
    let outcome = router.dispatch(Method::Get, &request);
    assert_eq!(outcome.context().unwrap().user().map(|r| r.id()), Some(3));

    let mut router = Router::new(site_registry(), StaticResolver::none());
    router.get("always", "A@a");
    let outcome = router.dispatch(Method::Get, &request);
    assert!(outcome.context().unwrap().is_empty());
}

#[test]
fn test_namespaced_group_qualifies_matched_action() {
    let mut router = Router::new(site_registry(), StaticResolver::none());
    router.group(GroupAttributes::new().namespace("App\\Http"), |r| {
        r.get("always", "Controller@action");
    });

    let outcome = router.dispatch(Method::Get, &WebRequest::default());
    assert_eq!(
        outcome.action().and_then(|a| a.handler().uses()),
        Some("App\\Http\\Controller@action")
    );
}

#[test]
fn test_group_middleware_runs_before_route_middleware() {
    let mut router = Router::new(site_registry(), StaticResolver::none());
    router.group(GroupAttributes::new().middleware(["a", "b"]), |r| {
        r.get("always", Action::uses("C@show").with_middleware(["c"]));
    });

    let outcome = router.dispatch(Method::Get, &WebRequest::default());
    assert_eq!(outcome.action().unwrap().middleware(), &["a", "b", "c"]);
}

#[test]
fn test_callback_actions_dispatch_unchanged() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in = Arc::clone(&hits);

    let mut router = Router::new(site_registry(), StaticResolver::none());
    router.group(GroupAttributes::new().namespace("App\\Http"), |r| {
        r.get(
            "always",
            Action::callback(move |_req: &WebRequest| {
                hits_in.fetch_add(1, Ordering::SeqCst);
            }),
        );
    });

    let outcome = router.dispatch(Method::Get, &WebRequest::default());
    let action = outcome.action().unwrap();
    // Namespace folding applies to named handlers only.
    assert!(action.handler().uses().is_none());
    if let waymark::Handler::Callback(f) = action.handler() {
        (**f)(&WebRequest::default());
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
