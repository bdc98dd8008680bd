//! Unit tests for the in-memory storage backends.

use trivia_cafe_api::cafe::models::Ingredient;
use trivia_cafe_api::cafe::storage::{
    CafeStore, MemoryCafeStore, StorageError as CafeStorageError,
};
use trivia_cafe_api::trivia::models::NewQuestion;
use trivia_cafe_api::trivia::storage::{MemoryTriviaStore, StorageError, TriviaStore};

fn new_question(text: &str, category: i32) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: "Answer".to_string(),
        category,
        difficulty: 2,
        rating: None,
    }
}

fn espresso() -> Vec<Ingredient> {
    vec![Ingredient {
        name: "espresso".to_string(),
        color: "#6f4e37".to_string(),
        parts: 1,
    }]
}

#[tokio::test]
async fn test_question_ids_are_sequential() {
    let store = MemoryTriviaStore::new();

    let first = store.create_question(new_question("First", 1)).await.unwrap();
    let second = store
        .create_question(new_question("Second", 1))
        .await
        .unwrap();

    assert_eq!(second.id, first.id + 1);
}

#[tokio::test]
async fn test_list_questions_ordered_by_id() {
    let store = MemoryTriviaStore::new();
    for i in 0..5 {
        store
            .create_question(new_question(&format!("Question {}", i), 1))
            .await
            .unwrap();
    }

    let questions = store.list_questions().await.unwrap();
    let ids: Vec<i32> = questions.iter().map(|q| q.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let store = MemoryTriviaStore::new();
    store
        .create_question(new_question("The Taj Mahal is in Agra", 1))
        .await
        .unwrap();

    assert_eq!(store.search_questions("taj").await.unwrap().len(), 1);
    assert_eq!(store.search_questions("TAJ").await.unwrap().len(), 1);
    assert!(store.search_questions("pyramid").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_questions_in_category_filters() {
    let store = MemoryTriviaStore::new();
    store.create_question(new_question("Science q", 1)).await.unwrap();
    store.create_question(new_question("Art q", 2)).await.unwrap();

    let science = store.questions_in_category(1).await.unwrap();
    assert_eq!(science.len(), 1);
    assert_eq!(science[0].category, 1);
}

#[tokio::test]
async fn test_delete_missing_question_is_not_found() {
    let store = MemoryTriviaStore::new();

    let err = store.delete_question(42).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn test_category_roundtrip() {
    let store = MemoryTriviaStore::new();

    let created = store.create_category("Science".to_string()).await.unwrap();
    let fetched = store.get_category(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.category_type, "Science");

    assert!(store.get_category(999).await.unwrap().is_none());
    assert_eq!(store.list_categories().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_drink_create_and_list() {
    let store = MemoryCafeStore::new();

    let drink = store
        .create_drink("Espresso".to_string(), espresso())
        .await
        .unwrap();
    assert_eq!(drink.id, 1);

    let drinks = store.list_drinks().await.unwrap();
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].title, "Espresso");
}

#[tokio::test]
async fn test_drink_titles_are_unique() {
    let store = MemoryCafeStore::new();
    store
        .create_drink("Espresso".to_string(), espresso())
        .await
        .unwrap();

    let err = store
        .create_drink("Espresso".to_string(), espresso())
        .await
        .unwrap_err();
    assert!(matches!(err, CafeStorageError::Conflict(_)));
}

#[tokio::test]
async fn test_drink_partial_update() {
    let store = MemoryCafeStore::new();
    let drink = store
        .create_drink("Espresso".to_string(), espresso())
        .await
        .unwrap();

    let updated = store
        .update_drink(drink.id, Some("Doppio".to_string()), None)
        .await
        .unwrap();
    assert_eq!(updated.title, "Doppio");
    assert_eq!(updated.recipe, espresso());

    let err = store
        .update_drink(999, Some("Ghost".to_string()), None)
        .await
        .unwrap_err();
    assert!(matches!(err, CafeStorageError::NotFound(999)));
}

#[tokio::test]
async fn test_drink_update_rejects_taken_title() {
    let store = MemoryCafeStore::new();
    store
        .create_drink("Espresso".to_string(), espresso())
        .await
        .unwrap();
    let latte = store
        .create_drink("Latte".to_string(), espresso())
        .await
        .unwrap();

    let err = store
        .update_drink(latte.id, Some("Espresso".to_string()), None)
        .await
        .unwrap_err();
    assert!(matches!(err, CafeStorageError::Conflict(_)));
}

#[tokio::test]
async fn test_drink_delete() {
    let store = MemoryCafeStore::new();
    let drink = store
        .create_drink("Espresso".to_string(), espresso())
        .await
        .unwrap();

    store.delete_drink(drink.id).await.unwrap();
    assert!(store.list_drinks().await.unwrap().is_empty());

    let err = store.delete_drink(drink.id).await.unwrap_err();
    assert!(matches!(err, CafeStorageError::NotFound(_)));
}
