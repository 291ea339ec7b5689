use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockito::{Matcher, Server};
use recipe_finder::{
    load_recipe, search_recipes, App, AppConfig, AppError, Command, FetchError, RecipeApi,
    RecipeData, RecipeSummary, ViewUpdate,
};

/// API serving one canned recipe, no network involved
struct CannedApi;

#[async_trait]
impl RecipeApi for CannedApi {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        Ok(vec![RecipeSummary {
            id: "1".to_string(),
            title: format!("{} soup", query),
            author: "Canned".to_string(),
            image: String::new(),
        }])
    }

    async fn recipe(&self, id: &str) -> Result<RecipeData, FetchError> {
        if id != "1" {
            return Err(FetchError::Status {
                status: 404,
                url: format!("canned://recipe/{}", id),
            });
        }
        Ok(RecipeData {
            title: "Tomato soup".to_string(),
            author: "Canned".to_string(),
            image: String::new(),
            ingredients: vec!["6 tomatoes".to_string(), "1 tbsp olive oil".to_string()],
            servings: Some(2),
            source_url: String::new(),
        })
    }
}

#[test]
fn test_builder_requires_api() {
    let result = App::builder().in_memory().build();
    assert!(matches!(result, Err(AppError::Builder(_))));
}

#[test]
fn test_builder_rejects_zero_page_size() {
    let result = App::builder()
        .api(Arc::new(CannedApi))
        .page_size(0)
        .build();
    assert!(matches!(result, Err(AppError::Builder(_))));
}

#[test]
fn test_builder_from_config() {
    let mut config = AppConfig::default();
    config.search.page_size = 3;
    config.recipe.minutes_per_ingredient = 10;

    let app = App::builder().config(&config).in_memory().build().unwrap();
    assert_eq!(app.settings().page_size, 3);
    assert_eq!(app.settings().minutes_per_ingredient, 10);
}

#[tokio::test]
async fn test_builder_with_custom_api() {
    let mut app = App::builder()
        .api(Arc::new(CannedApi))
        .minutes_per_ingredient(5)
        .build()
        .unwrap();

    let updates = app.dispatch(Command::SearchSubmitted("tomato".to_string())).await;
    match updates.as_slice() {
        [ViewUpdate::SearchResults(page)] => assert_eq!(page.items[0].title, "tomato soup"),
        other => panic!("unexpected updates: {:?}", other),
    }

    app.dispatch(Command::RecipeSelected("1".to_string())).await;
    assert_eq!(app.prep_time(), Some(10));
    assert_eq!(app.recipe().unwrap().servings(), 2);

    let updates = app.dispatch(Command::RecipeSelected("2".to_string())).await;
    assert_eq!(
        updates,
        vec![ViewUpdate::Notification("Error processing recipe!".to_string())]
    );
}

#[tokio::test]
async fn test_convenience_search_recipes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("q".into(), "mac cheese".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"recipes": [
                {"recipe_id": "a1", "title": "Mac &amp; Cheese", "publisher": "Pub", "image_url": "http://img/a1.jpg"}
            ]}"#,
        )
        .create_async()
        .await;

    let base_url = format!("{}/api", server.url());
    let search = search_recipes(&base_url, "mac cheese", Some(Duration::from_secs(5)))
        .await
        .unwrap();

    assert_eq!(search.query, "mac cheese");
    assert_eq!(search.results.len(), 1);
    assert_eq!(search.results[0].id, "a1");
    assert_eq!(search.results[0].title, "Mac & Cheese");
    assert_eq!(search.results[0].author, "Pub");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_convenience_load_recipe_wrapped() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/recipe/a1")
        .with_status(200)
        .with_body(
            r#"{"recipe": {
                "title": "Pancakes",
                "publisher": "Pub",
                "image_url": "http://img/a1.jpg",
                "source_url": "http://example.com/pancakes",
                "ingredients": ["1 1/2 cups flour", "2 eggs", "salt to taste"]
            }}"#,
        )
        .create_async()
        .await;

    let recipe = load_recipe(&server.url(), "a1", None).await.unwrap();

    assert_eq!(recipe.id, "a1");
    assert_eq!(recipe.source_url, "http://example.com/pancakes");
    assert_eq!(recipe.servings(), 4);
    assert_eq!(recipe.ingredients[0].count, Some(1.5));
    assert_eq!(recipe.ingredients[0].unit, "cup");
    assert_eq!(recipe.ingredients[2].count, None);
}

#[tokio::test]
async fn test_convenience_load_recipe_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/recipe/missing")
        .with_status(404)
        .create_async()
        .await;

    let result = load_recipe(&server.url(), "missing", None).await;
    match result {
        Err(AppError::Fetch(FetchError::Status { status, .. })) => assert_eq!(status, 404),
        other => panic!("expected a 404, got {:?}", other),
    }
}
