mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use common::{
    new_question, read_json, seed_example_questions, seed_numbered_questions, setup_test_app,
};
use serde_json::json;
use trivia_api::storage::TriviaStore;

#[actix_rt::test]
async fn test_get_questions_paginates_by_ten() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let created = seed_numbered_questions(&test_app.store, 23).await?;

    let req = TestRequest::get().uri("/questions").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert!(resp.status().is_success());

    let body = read_json(resp).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 23);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["questions"][0]["id"], created[0].id);
    assert_eq!(body["categories"]["1"], "Science");
    assert!(body["current_category"].is_null());

    let req = TestRequest::get().uri("/questions?page=3").to_request();
    let body = read_json(test::call_service(&test_app.app, req).await).await?;
    let page = body["questions"].as_array().unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(page[2]["id"], created[22].id);

    Ok(())
}

#[actix_rt::test]
async fn test_pages_concatenate_to_full_listing() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let created = seed_numbered_questions(&test_app.store, 25).await?;

    let mut ids = Vec::new();
    for page in 1..=3 {
        let req = TestRequest::get()
            .uri(&format!("/questions?page={}", page))
            .to_request();
        let body = read_json(test::call_service(&test_app.app, req).await).await?;
        for question in body["questions"].as_array().unwrap() {
            ids.push(question["id"].as_i64().unwrap());
        }
    }

    let expected: Vec<i64> = created.iter().map(|q| q.id).collect();
    assert_eq!(ids, expected);
    Ok(())
}

#[actix_rt::test]
async fn test_page_beyond_end_is_not_found() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed_numbered_questions(&test_app.store, 5).await?;

    let req = TestRequest::get().uri("/questions?page=2").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = read_json(resp).await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert!(body["message"].is_string());
    Ok(())
}

#[actix_rt::test]
async fn test_non_numeric_page_falls_back_to_first() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let created = seed_numbered_questions(&test_app.store, 12).await?;

    let req = TestRequest::get().uri("/questions?page=abc").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert!(resp.status().is_success());

    let body = read_json(resp).await?;
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["questions"][0]["id"], created[0].id);
    Ok(())
}

#[actix_rt::test]
async fn test_non_integer_ids_are_not_found() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    for req in [
        TestRequest::delete().uri("/questions/abc").to_request(),
        TestRequest::get().uri("/categories/abc/questions").to_request(),
    ] {
        let resp = test::call_service(&test_app.app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = read_json(resp).await?;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
    }
    Ok(())
}

#[actix_rt::test]
async fn test_delete_question() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    let (science, art) = seed_example_questions(&test_app.store).await?;

    let req = TestRequest::delete()
        .uri(&format!("/questions/{}", science.id))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert!(resp.status().is_success());

    let body = read_json(resp).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], science.id);

    let remaining = test_app.store.list_questions().await?;
    assert_eq!(remaining, vec![art]);

    let req = TestRequest::get().uri("/").to_request();
    let body = read_json(test::call_service(&test_app.app, req).await).await?;
    assert_eq!(body["total_questions"], 1);
    Ok(())
}

#[actix_rt::test]
async fn test_delete_missing_question_is_not_found() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::delete().uri("/questions/1000").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = read_json(resp).await?;
    assert_eq!(body["success"], false);
    Ok(())
}

#[actix_rt::test]
async fn test_create_question() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed_example_questions(&test_app.store).await?;

    let req = TestRequest::post()
        .uri("/questions")
        .set_json(json!({
            "question": "What is the largest planet?",
            "answer": "Jupiter",
            "difficulty": 2,
            "category": 1
        }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert!(resp.status().is_success());

    let body = read_json(resp).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 3);
    let created_id = body["created"].as_i64().unwrap();

    let req = TestRequest::get().uri("/questions?page=1").to_request();
    let body = read_json(test::call_service(&test_app.app, req).await).await?;
    assert_eq!(body["total_questions"], 3);
    let created = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|q| q["id"] == created_id)
        .expect("created question should be listed");
    assert_eq!(created["answer"], "Jupiter");
    assert_eq!(created["category"], 1);
    assert_eq!(created["difficulty"], 2);
    Ok(())
}

#[actix_rt::test]
async fn test_create_question_with_string_numbers() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/questions")
        .set_json(json!({
            "question": "Q?",
            "answer": "A",
            "difficulty": "2",
            "category": "1"
        }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert!(resp.status().is_success());

    let body = read_json(resp).await?;
    let created_id = body["created"].as_i64().unwrap();

    let req = TestRequest::get().uri("/").to_request();
    let body = read_json(test::call_service(&test_app.app, req).await).await?;
    let created = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|q| q["id"] == created_id)
        .expect("created question should be listed");
    assert_eq!(created["difficulty"], 2);
    assert_eq!(created["category"], 1);
    Ok(())
}

#[actix_rt::test]
async fn test_create_question_with_non_numeric_category_is_unprocessable() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/questions")
        .set_json(json!({
            "question": "Q?",
            "answer": "A",
            "difficulty": "2",
            "category": "science"
        }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = read_json(resp).await?;
    assert_eq!(body["error"], 422);
    Ok(())
}

#[actix_rt::test]
async fn test_create_question_missing_field_is_unprocessable() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let complete = json!({
        "question": "What is the largest planet?",
        "answer": "Jupiter",
        "difficulty": 2,
        "category": 1
    });

    for field in ["question", "answer", "difficulty", "category"] {
        let mut body = complete.clone();
        body.as_object_mut().unwrap().remove(field);

        let req = TestRequest::post().uri("/questions").set_json(&body).to_request();
        let resp = test::call_service(&test_app.app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "missing {}", field);

        let body = read_json(resp).await?;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 422);
    }

    assert!(test_app.store.list_questions().await?.is_empty());
    Ok(())
}

#[actix_rt::test]
async fn test_create_question_in_unknown_category_is_unprocessable() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/questions")
        .set_json(json!({
            "question": "Orphan?",
            "answer": "Yes",
            "difficulty": 1,
            "category": 999
        }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[actix_rt::test]
async fn test_search_is_case_insensitive() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed_example_questions(&test_app.store).await?;
    let (extra, _) = seed_example_questions(&test_app.store).await?;

    for term in ["h2o", "H2O", "h2O"] {
        let req = TestRequest::post()
            .uri("/questions")
            .set_json(json!({ "searchTerm": term }))
            .to_request();
        let resp = test::call_service(&test_app.app, req).await;
        assert!(resp.status().is_success());

        let body = read_json(resp).await?;
        assert_eq!(body["success"], true);
        assert_eq!(body["total_questions"], 2);
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1]["id"], extra.id);
    }
    Ok(())
}

#[actix_rt::test]
async fn test_search_folds_non_ascii_case() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed_example_questions(&test_app.store).await?;
    let ecole = test_app
        .store
        .insert_question(new_question("Which ÉCOLE is oldest?", "Sorbonne", 4, 3))
        .await?;

    let req = TestRequest::post()
        .uri("/questions")
        .set_json(json!({ "searchTerm": "école" }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert!(resp.status().is_success());

    let body = read_json(resp).await?;
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["id"], ecole.id);
    Ok(())
}

#[actix_rt::test]
async fn test_search_without_matches_is_not_found() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;
    seed_example_questions(&test_app.store).await?;

    let req = TestRequest::post()
        .uri("/questions")
        .set_json(json!({ "searchTerm": "zebra" }))
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[actix_rt::test]
async fn test_malformed_json_is_bad_request() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::post()
        .uri("/questions")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = read_json(resp).await?;
    assert_eq!(body["success"], false);
    Ok(())
}

#[actix_rt::test]
async fn test_unsupported_method_and_unknown_route() -> anyhow::Result<()> {
    let test_app = setup_test_app().await?;

    let req = TestRequest::put().uri("/questions").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let req = TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&test_app.app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = read_json(resp).await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    Ok(())
}
