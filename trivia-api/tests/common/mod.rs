#![allow(dead_code)]

use actix_web::{test, web, App};
use shared_types::{NewQuestion, Question};
use std::sync::Arc;
use trivia_api::handlers::AppState;
use trivia_api::helpers::database::open_in_memory_database;
use trivia_api::routes::configure_routes;
use trivia_api::storage::{SqliteTriviaStore, TriviaStore};

pub struct TestApp<S> {
    pub store: Arc<dyn TriviaStore>,
    pub app: S,
}

pub fn setup_test_store() -> anyhow::Result<Arc<dyn TriviaStore>> {
    let connection = open_in_memory_database()?;
    Ok(Arc::new(SqliteTriviaStore::new(connection)))
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let store = setup_test_store()?;
    let app = init_app(store.clone()).await;
    Ok(TestApp { store, app })
}

pub async fn init_app(
    store: Arc<dyn TriviaStore>,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(store)))
            .configure(configure_routes),
    )
    .await
}

pub fn new_question(text: &str, answer: &str, category: i64, difficulty: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

/// Inserts `count` numbered science questions
pub async fn seed_numbered_questions(
    store: &Arc<dyn TriviaStore>,
    count: usize,
) -> anyhow::Result<Vec<Question>> {
    let mut created = Vec::with_capacity(count);
    for i in 1..=count {
        let question = store
            .insert_question(new_question(&format!("Question number {}?", i), "yes", 1, 1))
            .await?;
        created.push(question);
    }
    Ok(created)
}

/// The two-question fixture: H2O in Science, the Mona Lisa in Art
pub async fn seed_example_questions(
    store: &Arc<dyn TriviaStore>,
) -> anyhow::Result<(Question, Question)> {
    let science = store
        .insert_question(new_question("What is H2O?", "Water", 1, 1))
        .await?;
    let art = store
        .insert_question(new_question(
            "Who painted the Mona Lisa?",
            "Leonardo da Vinci",
            2,
            3,
        ))
        .await?;
    Ok((science, art))
}

pub async fn read_json(resp: actix_web::dev::ServiceResponse) -> anyhow::Result<serde_json::Value> {
    let body_bytes = test::read_body(resp).await;
    Ok(serde_json::from_slice(&body_bytes)?)
}
