mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn empty_tables_list_as_empty_arrays() {
    let app = TestApp::new();

    for (uri, key) in [
        ("/feedbacks", "feedbacks"),
        ("/sugestoes", "sugestoes"),
        ("/denuncias", "denuncias"),
    ] {
        let (status, body) = app.get_json(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({ key: [] }), "{uri}");
    }
}

#[tokio::test]
async fn feedback_round_trips_through_the_panel() {
    let app = TestApp::new();
    app.post_json("/feedback", json!({ "tipo": "bug", "mensagem": "login fails" }))
        .await;

    let (status, body) = app.get_json("/feedbacks").await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["feedbacks"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["id"], 1);
    assert_eq!(row["nome"], json!(null));
    assert_eq!(row["tipo"], "bug");
    assert_eq!(row["mensagem"], "login fails");
    assert!(row["data"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn suggestions_are_listed_in_creation_order() {
    let app = TestApp::new();
    for categoria in ["saude", "educacao", "transporte"] {
        let (status, _) = app
            .post_json(
                "/sugestao",
                json!({ "nome": "Ana", "categoria": categoria, "mensagem": "melhorar" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = app.get_json("/sugestoes").await;
    let categorias: Vec<&str> = body["sugestoes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["categoria"].as_str().unwrap())
        .collect();
    assert_eq!(categorias, ["saude", "educacao", "transporte"]);
    assert_eq!(body["sugestoes"][0]["nome"], "Ana");
}

#[tokio::test]
async fn complaint_omitted_contact_fields_are_null() {
    let app = TestApp::new();
    let (_, created) = app
        .post_json(
            "/denuncias",
            json!({ "tipo": "poluição", "descricao": "despejo irregular", "nome": "" }),
        )
        .await;

    let (status, body) = app.get_json("/denuncias").await;

    assert_eq!(status, StatusCode::OK);
    let row = &body["denuncias"][0];
    assert_eq!(row["id"], created["id"]);
    assert_eq!(row["tipo"], "poluição");
    assert_eq!(row["descricao"], "despejo irregular");
    for column in ["nome", "email", "telefone", "endereco"] {
        assert_eq!(row[column], json!(null), "{column}");
    }
}

#[tokio::test]
async fn rejected_submissions_never_reach_the_panel() {
    let app = TestApp::new();
    let (status, body) = app.post_json("/feedback", json!({ "tipo": "bug" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Campos obrigatórios." }));

    let (_, body) = app.get_json("/feedbacks").await;
    assert_eq!(body, json!({ "feedbacks": [] }));
}

#[tokio::test]
async fn list_failure_is_reported_as_server_error() {
    let app = TestApp::new();
    app.drop_table("feedbacks");

    let (status, body) = app.get_json("/feedbacks").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Erro ao carregar registros." }));
}
