// API Integration Tests
//
// Purpose: Exercise every endpoint through the router (no network)
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use hmpi_scorer_rust::{create_router, AppState, SampleEvaluator};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app with the built-in reference table
    fn create_test_app() -> axum::Router {
        create_router(AppState::new(SampleEvaluator::default()))
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health and standards
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_standards() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/standards").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let metals = body["metals"].as_array().unwrap();
        assert_eq!(metals.len(), 8);
        assert_eq!(metals[0]["symbol"], "Pb");
        assert_eq!(metals[0]["standard_limit"], 0.01);
        assert_eq!(body["active_scheme"], "standard");
        assert_eq!(
            body["classification"]["five_tier"]["categories"].as_array().unwrap().len(),
            5
        );
        assert_eq!(body["classification"]["five_tier"]["categories"][3]["category"], "High Risk");
    }

    // =========================================================================
    // Section 2: Direct calculation
    // =========================================================================

    #[tokio::test]
    async fn test_calculate_direct() {
        let request = post_json(
            "/calculate-direct",
            json!({
                "concentrations": {"Pb": 0.015, "Cd": 0.004, "Hg": 0.0012, "As": 0.012, "Cr": 0.08}
            }),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["results"]["hmpi"], 99.07);
        assert_eq!(body["results"]["risk_category"], "Good");
        assert_eq!(body["results"]["metal_evaluations"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_calculate_direct_five_tier_override() {
        let request = post_json(
            "/calculate-direct",
            json!({
                "sample_id": "well-12",
                "concentrations": {"Pb": 0.015, "Cd": 0.004, "Hg": 0.0012, "As": 0.012, "Cr": 0.08},
                "scheme": "five_tier"
            }),
        );
        let body = json_response(create_test_app().oneshot(request).await.unwrap()).await;
        assert_eq!(body["results"]["sample_id"], "well-12");
        assert_eq!(body["results"]["risk_category"], "High Risk");
        assert_eq!(body["results"]["risk"]["color"], "#ef4444");
    }

    #[tokio::test]
    async fn test_calculate_direct_rejects_empty() {
        let request = post_json("/calculate-direct", json!({"concentrations": {}}));
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert_eq!(body["error"], "No concentration data provided");
    }

    #[tokio::test]
    async fn test_calculate_direct_rejects_negative() {
        let request = post_json("/calculate-direct", json!({"concentrations": {"Pb": -0.2}}));
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("non-negative"));
    }

    // =========================================================================
    // Section 3: Batch calculation
    // =========================================================================

    #[tokio::test]
    async fn test_calculate_batch() {
        let request = post_json(
            "/calculate-batch",
            json!({
                "samples": [
                    {
                        "sample_id": "Mumbai",
                        "metadata": {"location": "Mumbai Industrial Area", "latitude": 19.076, "longitude": 72.8777},
                        "concentrations": {"Pb": 0.025, "Cd": 0.008, "Cr": 0.12, "Cu": 0.85, "Zn": 2.3, "As": 0.015}
                    },
                    {
                        "sample_id": "Clean",
                        "concentrations": {"Zn": 0.1}
                    },
                    {
                        "sample_id": "Blank",
                        "concentrations": {}
                    }
                ]
            }),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let samples = body["samples"].as_array().unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0]["sample_id"], "Mumbai");
        assert_eq!(samples[0]["metadata"]["location"], "Mumbai Industrial Area");
        assert_eq!(samples[2]["hmpi"], 0.0);

        let stats = &body["overall_statistics"];
        assert_eq!(stats["total_samples"], 3);
        assert_eq!(stats["risk_distribution"]["Poor"], 1);
        assert_eq!(stats["risk_distribution"]["Excellent"], 2);
    }

    #[tokio::test]
    async fn test_calculate_batch_names_bad_sample() {
        let request = post_json(
            "/calculate-batch",
            json!({
                "samples": [
                    {"sample_id": "ok", "concentrations": {"Pb": 0.01}},
                    {"sample_id": "bad", "concentrations": {"Cd": -1.0}}
                ]
            }),
        );
        let response = create_test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("sample 'bad'"));
    }
}
