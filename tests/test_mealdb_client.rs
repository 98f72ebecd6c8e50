use mockito::Matcher;
use recipe_finder::{
    build_request, Cuisine, Dietary, FinderError, MealDbClient, RecipeApi, RecipeSummary,
    RequestDescriptor, SearchState,
};

fn client_for(server: &mockito::Server) -> MealDbClient {
    MealDbClient::new(server.url(), None, "recipe-finder-tests").unwrap()
}

#[tokio::test]
async fn test_null_meals_is_empty_result() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", Matcher::Regex(r"^/search\.php".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let request = RequestDescriptor::SearchByName {
        term: "nothing matches this".to_string(),
    };
    let results = client_for(&server).execute(&request).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_missing_meals_field_is_empty_result() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", Matcher::Regex(r"^/filter\.php".to_string()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let request = build_request(&SearchState::default());
    let results = client_for(&server).execute(&request).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_filter_request_sends_params_in_order() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", Matcher::Regex(r"^/filter\.php".to_string()))
        .match_query(Matcher::Exact(
            "c=vegetarian&c=dessert&i=chocolate".to_string(),
        ))
        .with_status(200)
        .with_body(
            r#"{"meals": [
                {"strMeal": "Chocolate Gateau", "strMealThumb": "https://img/52776.jpg", "idMeal": "52776"},
                {"strMeal": "Chocolate Souffle", "strMealThumb": "https://img/52898.jpg", "idMeal": "52898"}
            ]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let mut state = SearchState {
        must_include_ingredients: "chocolate".to_string(),
        ..Default::default()
    };
    state.dietary_restrictions.select(Dietary::Vegetarian);
    state.cuisine_categories.select(Cuisine::Dessert);

    let results = client_for(&server)
        .execute(&build_request(&state))
        .await
        .unwrap();

    m.assert_async().await;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "52776");
    assert_eq!(results[0].title, "Chocolate Gateau");
    assert_eq!(results[1].thumbnail_url, "https://img/52898.jpg");
    assert!(results.iter().all(|r| !r.is_enriched()));
}

#[tokio::test]
async fn test_search_term_uses_search_endpoint_only() {
    let mut server = mockito::Server::new_async().await;
    let search = server
        .mock("GET", Matcher::Regex(r"^/search\.php".to_string()))
        .match_query(Matcher::UrlEncoded("s".to_string(), "Arrabiata".to_string()))
        .with_status(200)
        .with_body(
            r#"{"meals": [{"idMeal": "52771", "strMeal": "Spicy Arrabiata Penne", "strMealThumb": "https://img/52771.jpg", "strCategory": "Vegetarian"}]}"#,
        )
        .expect(1)
        .create_async()
        .await;
    let filter = server
        .mock("GET", Matcher::Regex(r"^/filter\.php".to_string()))
        .expect(0)
        .create_async()
        .await;

    let mut state = SearchState {
        search_term: "Arrabiata".to_string(),
        must_include_ingredients: "garlic".to_string(),
        ..Default::default()
    };
    state.cuisine_categories.select(Cuisine::Pasta);

    let results = client_for(&server)
        .execute(&build_request(&state))
        .await
        .unwrap();

    search.assert_async().await;
    filter.assert_async().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Spicy Arrabiata Penne");
    // Bulk responses never fill enrichment fields, even when present
    assert_eq!(results[0].category, None);
}

#[tokio::test]
async fn test_error_status_is_failure() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", Matcher::Regex(r"^/filter\.php".to_string()))
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let request = build_request(&SearchState::default());
    let err = client_for(&server).execute(&request).await.unwrap_err();

    assert!(matches!(err, FinderError::Status(500)));
}

#[tokio::test]
async fn test_malformed_body_is_failure() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", Matcher::Regex(r"^/filter\.php".to_string()))
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let request = build_request(&SearchState::default());
    let err = client_for(&server).execute(&request).await.unwrap_err();

    assert!(matches!(err, FinderError::Decode(_)));
}

#[tokio::test]
async fn test_lookup_and_enrich() {
    let mut server = mockito::Server::new_async().await;
    let _found = server
        .mock("GET", Matcher::Regex(r"^/lookup\.php".to_string()))
        .match_query(Matcher::UrlEncoded("i".to_string(), "52772".to_string()))
        .with_status(200)
        .with_body(
            r#"{"meals": [{"idMeal": "52772", "strMeal": "Teriyaki Chicken Casserole", "strCategory": "Chicken", "strSource": "https://example.com/teriyaki"}]}"#,
        )
        .create_async()
        .await;
    let _missing = server
        .mock("GET", Matcher::Regex(r"^/lookup\.php".to_string()))
        .match_query(Matcher::UrlEncoded("i".to_string(), "1".to_string()))
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.lookup("1").await.unwrap(), None);

    let summary = RecipeSummary {
        id: "52772".to_string(),
        title: "Teriyaki Chicken Casserole".to_string(),
        thumbnail_url: String::new(),
        category: None,
        source_url: None,
    };
    let enriched = client.enrich(summary).await;

    assert_eq!(enriched.category.as_deref(), Some("Chicken"));
    assert_eq!(
        enriched.source_url.as_deref(),
        Some("https://example.com/teriyaki")
    );
}

#[tokio::test]
async fn test_enrich_failure_leaves_summary_untouched() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", Matcher::Regex(r"^/lookup\.php".to_string()))
        .with_status(503)
        .create_async()
        .await;

    let summary = RecipeSummary {
        id: "52772".to_string(),
        title: "Teriyaki Chicken Casserole".to_string(),
        thumbnail_url: String::new(),
        category: None,
        source_url: None,
    };
    let enriched = client_for(&server).enrich(summary.clone()).await;

    assert_eq!(enriched, summary);
}
