#[cfg(test)]
mod integration_tests {
    use crate::handlers::health::BANNER;
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{setup_test_app, test_today};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Days;
    use common::{BillboardListResponse, ErrorResponse, PredictionResponse, TrafficLevel};

    fn server() -> TestServer {
        TestServer::new(setup_test_app()).unwrap()
    }

    #[tokio::test]
    async fn test_home_banner() {
        let response = server().get("/").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), BANNER);
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = server().get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.billboards, 20);
    }

    #[tokio::test]
    async fn test_get_billboards() {
        let response = server().get("/api/billboards").await;

        response.assert_status(StatusCode::OK);
        let body: BillboardListResponse = response.json();
        assert!(body.success);
        assert_eq!(body.data.len(), 20);
        assert_eq!(body.data[0].billboard_id, "B001");
        assert_eq!(body.data[0].kind, "Digital");
        assert_eq!(body.data[0].traffic_level, TrafficLevel::High);

        // Wire names follow the dashboard contract
        let raw: serde_json::Value = response.json();
        assert_eq!(raw["data"][0]["type"], "Digital");
        assert_eq!(raw["data"][0]["traffic_level"], "high");
        assert_eq!(raw["data"][0]["monthly_rate"], 250000.0);
    }

    #[tokio::test]
    async fn test_get_prediction_by_code() {
        let response = server().get("/api/predict/B003").await;

        response.assert_status(StatusCode::OK);
        let body: PredictionResponse = response.json();
        assert!(body.success);
        assert_eq!(body.billboard_id, "B003");
        assert_eq!(body.billboard.as_ref().map(|b| b.id), Some(3));
        assert_eq!(body.past_60_days.len(), 60);
        assert_eq!(body.predicted_7_days.len(), 7);

        let history = &body.detailed_data.historical_data;
        let total: u64 = body.past_60_days.iter().sum();
        assert_eq!(history.data.len(), 60);
        assert_eq!(history.summary.total_impressions, Some(total));
        assert_eq!(history.summary.average_daily, (total / 60) as f64);
        assert_eq!(history.summary.days_recorded, 60);

        let prediction = &body.detailed_data.prediction;
        assert_eq!(prediction.forecast.len(), 7);
        assert_eq!(prediction.average_confidence, 0.86);
        assert_eq!(
            prediction.total_predicted,
            body.predicted_7_days.iter().sum::<f64>()
        );
        assert_eq!(prediction.forecast[0].date, test_today() + Days::new(1));
        for pair in prediction.forecast.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[tokio::test]
    async fn test_get_prediction_by_numeric_id() {
        let response = server().get("/api/predict/12").await;

        response.assert_status(StatusCode::OK);
        let body: PredictionResponse = response.json();
        assert_eq!(body.billboard_id, "B012");
    }

    #[tokio::test]
    async fn test_prediction_is_deterministic() {
        let server = server();
        let first: PredictionResponse = server.get("/api/predict/B007").await.json();
        let second: PredictionResponse = server.get("/api/predict/7").await.json();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_billboard_is_not_found() {
        let server = server();
        for path in ["/api/predict/B999", "/api/predict/999", "/api/predict/abc"] {
            let response = server.get(path).await;

            response.assert_status(StatusCode::NOT_FOUND);
            let body: ErrorResponse = response.json();
            assert!(!body.success);
            assert_eq!(body.message, "Billboard not found");
        }
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let response = server().get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let doc: serde_json::Value = response.json();
        assert_eq!(doc["info"]["title"], "Billboard Dashboard API");
        assert!(doc["paths"]["/api/billboards"].is_object());
        assert!(doc["paths"]["/api/predict/{billboard_id}"].is_object());
        assert!(doc["components"]["schemas"]["PredictionResponse"].is_object());
    }
}

#[cfg(test)]
mod end_to_end_tests {
    use crate::cli::commands::forecast::render_forecast;
    use crate::test_utils::test_utils::spawn_test_server;
    use frontend::{
        BillboardApi, ClientSettings, Dashboard, FetchError, FetchErrorKind, HttpApiClient, Msg,
    };

    async fn client() -> HttpApiClient {
        let base_url = spawn_test_server().await;
        HttpApiClient::new(ClientSettings::new(base_url)).unwrap()
    }

    #[tokio::test]
    async fn test_client_lists_billboards() {
        let api = client().await;
        let records = api.list_billboards().await.unwrap();

        assert_eq!(records.len(), 20);
        assert_eq!(records[19].billboard_id, "B020");
    }

    #[tokio::test]
    async fn test_client_fetches_validated_prediction() {
        let api = client().await;
        let forecast = api.fetch_prediction("B003").await.unwrap();

        assert_eq!(forecast.billboard_id, "B003");
        assert_eq!(forecast.past_days.len(), 60);
        assert_eq!(forecast.forecast_detail.len(), 7);
        assert_eq!(forecast.prediction_summary.average_confidence, 0.86);
    }

    #[tokio::test]
    async fn test_client_maps_not_found() {
        let api = client().await;
        let err = api.fetch_prediction("B999").await.unwrap_err();

        assert_eq!(
            err,
            FetchError::Http {
                status: 404,
                reason: "Billboard not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_client_escapes_billboard_code_in_path() {
        let api = client().await;

        // Both codes must reach the prediction handler as a single segment
        for code in ["B 01", "B003/extra"] {
            let err = api.fetch_prediction(code).await.unwrap_err();
            assert_eq!(
                err,
                FetchError::Http {
                    status: 404,
                    reason: "Billboard not found".to_string()
                }
            );
        }
    }

    #[tokio::test]
    async fn test_dashboard_against_backend() {
        let api = client().await;
        let mut dashboard = Dashboard::new();

        dashboard.dispatch(&api, Msg::Refresh).await;
        assert_eq!(dashboard.total_count(), 20);

        dashboard.update(Msg::QueryChanged("colombo 5".to_string()));
        let codes: Vec<&str> = dashboard
            .visible()
            .iter()
            .map(|r| r.billboard_id.as_str())
            .collect();
        assert_eq!(codes, vec!["B013", "B014", "B018"]);

        dashboard.dispatch(&api, Msg::Select(14)).await;
        let forecast = dashboard.selection().forecast().unwrap().clone();
        let insights = dashboard.insights().unwrap();
        assert_eq!(insights.summary.billboard_id, "B014");
        assert_eq!(insights.trends.len(), 7);

        let rendered = render_forecast(&forecast, &insights);
        assert!(rendered.starts_with("Forecast for B014"));
        assert!(rendered.contains("Baseline"));
        assert!(rendered.contains("Avg confidence:       86%"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_keeps_store_empty() {
        // Nothing listens on a freshly released port
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let base_url = format!("http://{}", address);
        let api = HttpApiClient::new(ClientSettings::new(base_url.clone())).unwrap();
        let mut dashboard = Dashboard::new();
        dashboard.dispatch(&api, Msg::Refresh).await;

        assert!(dashboard.store().current().is_empty());
        assert_eq!(
            dashboard.store().error().map(FetchError::kind),
            Some(FetchErrorKind::Transport)
        );
        let message = dashboard.store().error_message(&base_url).unwrap();
        assert!(message.starts_with("Failed to load billboards: Request failed:"));
        assert!(message.ends_with(&format!("running on {}", base_url)));
    }
}
