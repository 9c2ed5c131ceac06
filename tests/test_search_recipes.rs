use mockito::{Matcher, Server};
use recipe_search::{search_recipes, FunctionCall, RecipeSearch, SearchConfig, ToolOutcome};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

fn search_for(server: &Server) -> RecipeSearch {
    let config = SearchConfig::new("test_key").with_base_url(server.url());
    RecipeSearch::new(&config).unwrap()
}

#[test]
fn test_apple_pie_scenario() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/recipe")
        .match_header("x-api-key", "test_key")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "apple pie".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "title": "Apple Pie",
                "ingredients": "apples, sugar, flour",
                "servings": "8 servings",
                "instructions": "Bake at 350F for 45 minutes."
            }])
            .to_string(),
        )
        .create();

    let (result, metadata) =
        search_for(&server).search_recipes(&json!({"query": "apple pie", "offset": 0}));

    assert_eq!(
        result,
        Value::String(
            "Here are some recipes I found for you:\n\nTitle: Apple Pie\nIngredients: apples, sugar, flour\nInstructions: Bake at 350F for 45 minutes.\n"
                .to_string()
        )
    );
    assert!(metadata.is_empty());
    mock.assert();
}

#[test]
fn test_offset_defaults_to_zero_on_the_wire() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/recipe")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "ramen".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create();

    search_for(&server).search_recipes(&json!({"query": "ramen"}));
    mock.assert();
}

#[test]
fn test_pagination_offset_forwarded() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/recipe")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "ramen".into()),
            Matcher::UrlEncoded("offset".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create();

    search_for(&server).search_recipes(&json!({"query": "ramen", "offset": 10}));
    mock.assert();
}

#[test]
fn test_unauthorized_scenario() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/recipe")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error": "Invalid API Key."}"#)
        .create();

    let (result, metadata) = search_for(&server).search_recipes(&json!({"query": "apple pie"}));

    assert_eq!(result["kind"], "UpstreamStatusError");
    assert_eq!(result["status_code"], 401);
    // Upstream body is not surfaced
    assert!(!result["message"].as_str().unwrap().contains("Invalid API Key"));
    assert!(metadata.is_empty());
    mock.assert();
}

#[test]
fn test_server_errors_are_not_retried() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/recipe")
        .match_query(Matcher::Any)
        .with_status(503)
        .expect(1)
        .create();

    let outcome = search_for(&server).outcome(&json!({"query": "bread"}));

    match outcome {
        ToolOutcome::Failed(err) => assert_eq!(err.status_code, Some(503)),
        ToolOutcome::Answer(text) => panic!("expected failure, got {}", text),
    }
    mock.assert();
}

#[test]
fn test_empty_query_makes_no_request() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create();

    let (result, metadata) = search_for(&server).search_recipes(&json!({"query": ""}));

    assert_eq!(result["kind"], "InvalidArgument");
    assert!(result["status_code"].is_null());
    assert!(metadata.is_empty());
    mock.assert();
}

#[test]
fn test_empty_result_is_intro_only() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/v1/recipe")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create();

    let outcome = search_for(&server).outcome(&json!({"query": "unicorn steak"}));
    assert_eq!(
        outcome,
        ToolOutcome::Answer("Here are some recipes I found for you:".to_string())
    );
}

#[test]
fn test_many_recipes_keep_upstream_order() {
    let mut server = Server::new();
    let body = json!([
        {"title": "B", "ingredients": "b", "instructions": "b"},
        {"title": "A", "ingredients": "a"},
        {"title": "C", "instructions": "c"}
    ]);
    let _mock = server
        .mock("GET", "/v1/recipe")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body.to_string())
        .create();

    let outcome = search_for(&server).outcome(&json!({"query": "letters"}));
    let text = match outcome {
        ToolOutcome::Answer(text) => text,
        ToolOutcome::Failed(err) => panic!("unexpected failure: {:?}", err),
    };

    let expected = "Here are some recipes I found for you:\n\n\
                    Title: B\nIngredients: b\nInstructions: b\n\n\
                    Title: A\nIngredients: a\nInstructions: No instructions\n\n\
                    Title: C\nIngredients: No ingredients\nInstructions: c\n";
    assert_eq!(text, expected);
}

#[test]
fn test_shared_handle_serves_concurrent_calls() {
    const CALLS: usize = 8;

    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/recipe")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"title": "Shakshuka", "ingredients": "eggs, tomatoes", "instructions": "Simmer."}]"#)
        .expect(CALLS)
        .create();

    let search = Arc::new(search_for(&server));

    let handles: Vec<_> = (0..CALLS)
        .map(|i| {
            let search = Arc::clone(&search);
            thread::spawn(move || search.outcome(&json!({"query": "shakshuka", "offset": i})))
        })
        .collect();

    for handle in handles {
        match handle.join().unwrap() {
            ToolOutcome::Answer(text) => assert!(text.contains("Title: Shakshuka\n")),
            ToolOutcome::Failed(err) => panic!("unexpected failure: {:?}", err),
        }
    }
    mock.assert();
}

#[test]
fn test_connection_refused_is_transport_failure() {
    // Bind then drop a listener so its port is closed
    let url = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let mut config = SearchConfig::new("test_key").with_base_url(url);
    config.timeout = 5;

    let (result, metadata) = search_recipes(&config, &json!({"query": "soup"}));

    assert_eq!(result["kind"], "TransportFailure");
    assert!(result["status_code"].is_null());
    assert!(metadata.is_empty());
}

#[test]
fn test_dispatch_round_trip() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/v1/recipe")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"title": "Pancakes"}]"#)
        .create();

    let call: FunctionCall = serde_json::from_value(json!({
        "name": "search_recipes",
        "args": {"query": "pancakes", "offset": 0},
        "session_id": "abc",
        "app_name": "sous-chef",
        "metadata_token": "xyz"
    }))
    .unwrap();

    let response = search_for(&server).dispatch(call);
    let reply = serde_json::to_value(&response).unwrap();

    assert_eq!(reply["session_id"], "abc");
    assert_eq!(reply["app_name"], "sous-chef");
    assert_eq!(reply["metadata_token"], "xyz");
    assert_eq!(reply["metadata"], json!({}));
    assert!(reply["result"]
        .as_str()
        .unwrap()
        .contains("Title: Pancakes\nIngredients: No ingredients\nInstructions: No instructions\n"));
}
