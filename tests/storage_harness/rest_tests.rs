//! REST API test macro.
//!
//! The `rest_api_tests!` macro drives the full router over a given store
//! with `axum_test::TestServer`, checking status codes and JSON bodies for
//! every company and invoice route.

/// Generate an HTTP suite for a store.
///
/// `$factory` must produce a fresh, empty store implementing
/// `CompanyService + InvoiceService`.
#[macro_export]
macro_rules! rest_api_tests {
    ($factory:expr) => {
        mod rest_api_tests {
            use super::*;
            use axum::http::StatusCode;
            use serde_json::{Value, json};

            // -----------------------------------------------------------------
            // Companies
            // -----------------------------------------------------------------

            #[tokio::test]
            async fn test_list_companies() {
                let server = build_server($factory);
                seed_company(&server).await;

                let response = server.get("/companies").await;
                response.assert_status_ok();
                response.assert_json(&json!({
                    "companies": [{ "code": "test-company", "name": "Test Company" }]
                }));
            }

            #[tokio::test]
            async fn test_list_companies_empty() {
                let server = build_server($factory);
                let response = server.get("/companies").await;
                response.assert_status_ok();
                response.assert_json(&json!({ "companies": [] }));
            }

            #[tokio::test]
            async fn test_get_company() {
                let server = build_server($factory);
                seed_company(&server).await;

                let response = server.get("/companies/test-company").await;
                response.assert_status_ok();
                response.assert_json(&json!({
                    "company": {
                        "code": "test-company",
                        "name": "Test Company",
                        "description": "Company made for testing things."
                    }
                }));
            }

            #[tokio::test]
            async fn test_get_missing_company() {
                let server = build_server($factory);
                let response = server.get("/companies/does-not-exist").await;
                response.assert_status(StatusCode::NOT_FOUND);
                response.assert_json(&json!({
                    "error": {
                        "message": "There is no company with code 'does-not-exist'",
                        "status": 404
                    }
                }));
            }

            #[tokio::test]
            async fn test_create_company_derives_code() {
                let server = build_server($factory);
                let response = server
                    .post("/companies")
                    .json(&json!({ "name": "AT&T -- Mobility", "description": "Phones" }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                response.assert_json(&json!({
                    "company": {
                        "code": "at-t-mobility",
                        "name": "AT&T -- Mobility",
                        "description": "Phones"
                    }
                }));

                server.get("/companies/at-t-mobility").await.assert_status_ok();
            }

            #[tokio::test]
            async fn test_unicode_code_is_reachable_percent_encoded() {
                let server = build_server($factory);
                let response = server.post("/companies").json(&json!({ "name": "Café Noir" })).await;
                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(body["company"]["code"], "café-noir");

                let response = server.get("/companies/caf%C3%A9-noir").await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["company"]["name"], "Café Noir");
            }

            #[tokio::test]
            async fn test_create_company_without_description() {
                let server = build_server($factory);
                let response = server.post("/companies").json(&json!({ "name": "Test Co" })).await;
                response.assert_status(StatusCode::CREATED);
                response.assert_json(&json!({
                    "company": { "code": "test-co", "name": "Test Co", "description": null }
                }));
            }

            #[tokio::test]
            async fn test_create_company_missing_name() {
                let server = build_server($factory);
                let response = server
                    .post("/companies")
                    .json(&json!({ "description": "nameless" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["error"]["status"], 400);
            }

            #[tokio::test]
            async fn test_create_company_unsluggable_name() {
                let server = build_server($factory);
                let response = server.post("/companies").json(&json!({ "name": "!!!" })).await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_create_duplicate_company_is_internal() {
                let server = build_server($factory);
                seed_company(&server).await;

                let response = server
                    .post("/companies")
                    .json(&json!({ "name": "Test Company" }))
                    .await;
                response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
                response.assert_json(&json!({
                    "error": { "message": "Internal Server Error", "status": 500 }
                }));
            }

            #[tokio::test]
            async fn test_update_company() {
                let server = build_server($factory);
                seed_company(&server).await;

                let response = server
                    .put("/companies/test-company")
                    .json(&json!({ "name": "Renamed", "description": "Updated" }))
                    .await;
                response.assert_status_ok();
                response.assert_json(&json!({
                    "company": { "code": "test-company", "name": "Renamed", "description": "Updated" }
                }));

                let fetched: Value = server.get("/companies/test-company").await.json();
                assert_eq!(fetched["company"]["name"], "Renamed");
            }

            #[tokio::test]
            async fn test_update_missing_company_without_body() {
                let server = build_server($factory);
                let response = server.put("/companies/does-not-exist").await;
                response.assert_status(StatusCode::NOT_FOUND);
                let body: Value = response.json();
                assert_eq!(
                    body["error"]["message"],
                    "There is no company with code 'does-not-exist'"
                );
            }

            #[tokio::test]
            async fn test_update_existing_company_with_bad_body() {
                let server = build_server($factory);
                seed_company(&server).await;

                let response = server
                    .put("/companies/test-company")
                    .json(&json!({ "description": "no name" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_delete_company() {
                let server = build_server($factory);
                seed_company(&server).await;

                let response = server.delete("/companies/test-company").await;
                response.assert_status_ok();
                response.assert_json(&json!({ "status": "deleted" }));

                server
                    .delete("/companies/test-company")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
                server
                    .get("/companies/test-company")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            // -----------------------------------------------------------------
            // Invoices
            // -----------------------------------------------------------------

            #[tokio::test]
            async fn test_create_invoice() {
                let server = build_server($factory);
                seed_company(&server).await;

                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "test-company", "amt": 10 }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                let invoice = response.json::<Value>()["invoice"].clone();
                assert!(invoice["id"].is_i64());
                assert_eq!(invoice["comp_code"], "test-company");
                assert_eq!(invoice["amt"], 10.0);
                assert_eq!(invoice["paid"], false);
                assert!(invoice["add_date"].is_string());
                assert_eq!(invoice["paid_date"], Value::Null);
            }

            #[tokio::test]
            async fn test_create_invoice_for_unknown_company() {
                let server = build_server($factory);
                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "nobody", "amt": 10 }))
                    .await;
                response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
                response.assert_json(&json!({
                    "error": { "message": "Internal Server Error", "status": 500 }
                }));
            }

            #[tokio::test]
            async fn test_create_invoice_missing_amount() {
                let server = build_server($factory);
                seed_company(&server).await;

                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "test-company" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_list_invoices() {
                let server = build_server($factory);
                seed_company(&server).await;
                let first = seed_invoice(&server, "test-company", 10.0).await;
                let second = seed_invoice(&server, "test-company", 20.0).await;

                let response = server.get("/invoices").await;
                response.assert_status_ok();
                response.assert_json(&json!({
                    "invoices": [
                        { "id": first["id"], "comp_code": "test-company" },
                        { "id": second["id"], "comp_code": "test-company" }
                    ]
                }));
            }

            #[tokio::test]
            async fn test_get_invoice_embeds_company() {
                let server = build_server($factory);
                seed_company(&server).await;
                let invoice = seed_invoice(&server, "test-company", 10.0).await;
                let id = invoice["id"].as_i64().unwrap();

                let response = server.get(&format!("/invoices/{id}")).await;
                response.assert_status_ok();
                let body = response.json::<Value>()["invoice"].clone();
                assert_eq!(body["id"], id);
                assert_eq!(body["amt"], 10.0);
                assert!(body.get("comp_code").is_none());
                assert_eq!(
                    body["company"],
                    json!({
                        "code": "test-company",
                        "name": "Test Company",
                        "description": "Company made for testing things."
                    })
                );
            }

            #[tokio::test]
            async fn test_get_missing_invoice() {
                let server = build_server($factory);
                let response = server.get("/invoices/0").await;
                response.assert_status(StatusCode::NOT_FOUND);
                response.assert_json(&json!({
                    "error": { "message": "There is no invoice with id '0'", "status": 404 }
                }));
            }

            #[tokio::test]
            async fn test_get_invoice_with_non_numeric_id() {
                let server = build_server($factory);
                let response = server.get("/invoices/abc").await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["error"]["status"], 400);
            }

            #[tokio::test]
            async fn test_pay_and_unpay_invoice() {
                let server = build_server($factory);
                seed_company(&server).await;
                let invoice = seed_invoice(&server, "test-company", 10.0).await;
                let id = invoice["id"].as_i64().unwrap();

                let paid = server
                    .put(&format!("/invoices/{id}"))
                    .json(&json!({ "amt": 25, "paid": true }))
                    .await;
                paid.assert_status_ok();
                let body = paid.json::<Value>()["invoice"].clone();
                assert_eq!(body["amt"], 25.0);
                assert_eq!(body["paid"], true);
                assert_eq!(body["paid_date"], today_json());

                let unpaid = server
                    .put(&format!("/invoices/{id}"))
                    .json(&json!({ "amt": 25, "paid": false }))
                    .await;
                unpaid.assert_status_ok();
                let body = unpaid.json::<Value>()["invoice"].clone();
                assert_eq!(body["paid"], false);
                assert_eq!(body["paid_date"], Value::Null);
            }

            #[tokio::test]
            async fn test_invoice_created_paid_has_paid_date() {
                let server = build_server($factory);
                seed_company(&server).await;

                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "test-company", "amt": 10, "paid": true }))
                    .await;
                response.assert_status(StatusCode::CREATED);
                let created = response.json::<Value>()["invoice"].clone();
                assert_eq!(created["paid"], true);
                assert_eq!(created["paid_date"], today_json());
                assert_eq!(created["paid_date"], created["add_date"]);
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/invoices/{id}"))
                    .json(&json!({ "amt": 10, "paid": true }))
                    .await;
                response.assert_status_ok();
                let body = response.json::<Value>()["invoice"].clone();
                assert_eq!(body["paid"], true);
                assert_eq!(body["paid_date"], created["paid_date"]);

                let fetched = server.get(&format!("/invoices/{id}")).await.json::<Value>();
                assert_eq!(fetched["invoice"]["paid_date"], created["paid_date"]);
            }

            #[tokio::test]
            async fn test_paid_date_tracks_paid_from_creation() {
                let server = build_server($factory);
                seed_company(&server).await;

                for created_paid in [false, true] {
                    let response = server
                        .post("/invoices")
                        .json(&json!({ "comp_code": "test-company", "amt": 5, "paid": created_paid }))
                        .await;
                    response.assert_status(StatusCode::CREATED);
                    let invoice = response.json::<Value>()["invoice"].clone();
                    assert_eq!(invoice["paid_date"].is_null(), !created_paid);
                    let id = invoice["id"].as_i64().unwrap();

                    for requested in [true, true, false, false, true] {
                        let response = server
                            .put(&format!("/invoices/{id}"))
                            .json(&json!({ "amt": 5, "paid": requested }))
                            .await;
                        response.assert_status_ok();
                        let body = response.json::<Value>()["invoice"].clone();
                        assert_eq!(body["paid"], requested);
                        assert_eq!(body["paid_date"].is_null(), !requested);
                    }
                }
            }

            #[tokio::test]
            async fn test_update_amount_only_keeps_paid_state() {
                let server = build_server($factory);
                seed_company(&server).await;
                let invoice = seed_invoice(&server, "test-company", 10.0).await;
                let id = invoice["id"].as_i64().unwrap();

                server
                    .put(&format!("/invoices/{id}"))
                    .json(&json!({ "amt": 10, "paid": true }))
                    .await
                    .assert_status_ok();

                let response = server
                    .put(&format!("/invoices/{id}"))
                    .json(&json!({ "amt": 50 }))
                    .await;
                response.assert_status_ok();
                let body = response.json::<Value>()["invoice"].clone();
                assert_eq!(body["amt"], 50.0);
                assert_eq!(body["paid"], true);
                assert_eq!(body["paid_date"], today_json());
            }

            #[tokio::test]
            async fn test_update_missing_invoice_without_body() {
                let server = build_server($factory);
                let response = server.put("/invoices/0").await;
                response.assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_delete_invoice() {
                let server = build_server($factory);
                seed_company(&server).await;
                let invoice = seed_invoice(&server, "test-company", 10.0).await;
                let id = invoice["id"].as_i64().unwrap();

                let response = server.delete(&format!("/invoices/{id}")).await;
                response.assert_status_ok();
                response.assert_json(&json!({ "status": "deleted" }));

                server
                    .delete(&format!("/invoices/{id}"))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_company_delete_removes_its_invoices() {
                let server = build_server($factory);
                seed_company(&server).await;
                let invoice = seed_invoice(&server, "test-company", 10.0).await;
                let id = invoice["id"].as_i64().unwrap();

                server.delete("/companies/test-company").await.assert_status_ok();

                server
                    .get(&format!("/invoices/{id}"))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
                server.get("/invoices").await.assert_json(&json!({ "invoices": [] }));
            }
        }
    };
}
