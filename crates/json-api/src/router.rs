//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    cors::Cors,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    healthcheck, home,
    observability::{metrics_handler, request_logging},
    shipments,
    state::State,
};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Shipment and liveness routes, without middleware.
pub(crate) fn app_router() -> Router {
    Router::new()
        .get(home::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("create-shipment").post(shipments::create::handler))
        .push(Router::with_path("track/{tracking_number}").get(shipments::track::handler))
}

/// Full service: middleware, shipment routes, metrics and API docs.
pub(crate) fn app_service(state: Arc<State>) -> Service {
    let router = Router::new()
        .hoop(request_logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(app_router());

    let doc = OpenApi::new("Libam Shipping API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"));

    Service::new(router).hoop(Cors::permissive().into_handler())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use libam_app::context::AppContext;

    use crate::{
        errors::ErrorResponse, home::HOME_MESSAGE, shipments::create::ShipmentCreatedResponse,
    };

    use super::*;

    async fn sqlite_service(dir: &tempfile::TempDir) -> TestResult<Service> {
        let url = format!("sqlite://{}", dir.path().join("shipments.db").display());
        let app = AppContext::from_database_url(&url).await?;

        Ok(app_service(State::from_app_context(app)))
    }

    async fn create(service: &Service, body: &Value) -> TestResult<(Option<StatusCode>, Value)> {
        let mut res = TestClient::post("http://example.com/create-shipment")
            .json(body)
            .send(service)
            .await;

        let body: Value = res.take_json().await?;

        Ok((res.status_code, body))
    }

    #[tokio::test]
    async fn create_then_track_round_trip() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service = sqlite_service(&dir).await?;

        let mut res = TestClient::post("http://example.com/create-shipment")
            .json(&json!({ "sender": "Alice", "receiver": "Bob", "description": "Books" }))
            .send(&service)
            .await;

        let created: ShipmentCreatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(created.message, "Shipment created successfully");
        assert_eq!(created.tracking_number.len(), 12);
        assert!(created.tracking_number.starts_with("LIB"));
        assert!(
            created
                .tracking_number
                .strip_prefix("LIB")
                .is_some_and(|digits| digits.chars().all(|c| c.is_ascii_digit())),
            "expected digits after prefix, got {}",
            created.tracking_number
        );

        let mut res = TestClient::get(format!(
            "http://example.com/track/{}",
            created.tracking_number
        ))
        .send(&service)
        .await;

        let tracked: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(tracked["trackingNumber"], json!(created.tracking_number));
        assert_eq!(tracked["sender"], json!("Alice"));
        assert_eq!(tracked["receiver"], json!("Bob"));
        assert_eq!(tracked["description"], json!("Books"));
        assert_eq!(
            tracked["status"],
            json!("Shipment created - Awaiting pickup for \"Books\"")
        );
        assert!(tracked.get("id").is_none(), "id must not be exposed");

        let created_at = tracked["created_at"].as_str().unwrap_or_default();

        assert!(
            created_at.parse::<jiff::Timestamp>().is_ok(),
            "expected RFC 3339 created_at, got {created_at}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn repeated_creates_yield_distinct_tracking_numbers() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service = sqlite_service(&dir).await?;
        let body = json!({ "sender": "Alice", "receiver": "Bob", "description": "Books" });

        let (first_status, first) = create(&service, &body).await?;
        let (second_status, second) = create(&service, &body).await?;

        assert_eq!(first_status, Some(StatusCode::OK));
        assert_eq!(second_status, Some(StatusCode::OK));
        assert_ne!(first["trackingNumber"], second["trackingNumber"]);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_create_does_not_store_anything() -> TestResult {
        let dir = tempfile::tempdir()?;
        let url = format!("sqlite://{}", dir.path().join("shipments.db").display());
        let app = AppContext::from_database_url(&url).await?;
        let service = app_service(State::from_app_context(app.clone()));

        let (status, body) =
            create(&service, &json!({ "sender": "Alice", "receiver": "Bob" })).await?;

        assert_eq!(status, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body, json!({ "error": "Missing shipment details" }));
        assert_eq!(app.shipments.count_shipments().await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_tracking_number_returns_404() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service = sqlite_service(&dir).await?;

        let mut res = TestClient::get("http://example.com/track/LIB000000000")
            .send(&service)
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "Tracking number not found");

        Ok(())
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service = sqlite_service(&dir).await?;

        let (_, created) = create(
            &service,
            &json!({ "sender": "Alice", "receiver": "Bob", "description": "Books" }),
        )
        .await?;

        let lowered = created["trackingNumber"]
            .as_str()
            .unwrap_or_default()
            .to_lowercase();

        let res = TestClient::get(format!("http://example.com/track/{lowered}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn shipments_survive_a_restart() -> TestResult {
        let dir = tempfile::tempdir()?;

        let (_, created) = create(
            &sqlite_service(&dir).await?,
            &json!({ "sender": "Alice", "receiver": "Bob", "description": "Books" }),
        )
        .await?;

        let restarted = sqlite_service(&dir).await?;

        let res = TestClient::get(format!(
            "http://example.com/track/{}",
            created["trackingNumber"].as_str().unwrap_or_default()
        ))
        .send(&restarted)
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn root_reports_running() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service = sqlite_service(&dir).await?;

        let mut res = TestClient::get("http://example.com/").send(&service).await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, HOME_MESSAGE);

        Ok(())
    }

    #[tokio::test]
    async fn responses_allow_cross_origin_requests() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service = sqlite_service(&dir).await?;

        let res = TestClient::get("http://example.com/healthcheck")
            .add_header("origin", "http://localhost:5173", true)
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(
            res.headers().contains_key("access-control-allow-origin"),
            "expected CORS header"
        );

        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_lists_shipment_routes() -> TestResult {
        let dir = tempfile::tempdir()?;
        let service = sqlite_service(&dir).await?;

        let doc: Value = TestClient::get("http://example.com/api-doc/openapi.json")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert!(
            doc["paths"].get("/create-shipment").is_some(),
            "expected create-shipment path"
        );
        assert!(
            doc["paths"].get("/track/{tracking_number}").is_some(),
            "expected track path"
        );
        assert!(
            doc["paths"]["/create-shipment"]["post"]
                .get("requestBody")
                .is_some(),
            "expected create-shipment request body"
        );
        assert!(
            doc.to_string().contains("RFC 3339"),
            "expected created_at format to be documented"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unreadable_create_bodies_return_json_errors() -> TestResult {
        let dir = tempfile::tempdir()?;
        let url = format!("sqlite://{}", dir.path().join("shipments.db").display());
        let app = AppContext::from_database_url(&url).await?;
        let service = app_service(State::from_app_context(app.clone()));

        let requests = [
            TestClient::post("http://example.com/create-shipment"),
            TestClient::post("http://example.com/create-shipment").raw_json("{not json"),
            TestClient::post("http://example.com/create-shipment")
                .json(&json!({ "sender": 5, "receiver": "Bob", "description": "Books" })),
        ];

        for request in requests {
            let mut res = request.send(&service).await;

            let body: ErrorResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
            assert_eq!(body.error, "Missing shipment details");
        }

        assert_eq!(app.shipments.count_shipments().await?, 0);

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_are_all_stored() -> TestResult {
        const REQUESTS: usize = 100;

        let dir = tempfile::tempdir()?;
        let url = format!("sqlite://{}", dir.path().join("shipments.db").display());
        let app = AppContext::from_database_url(&url).await?;
        let service = Arc::new(app_service(State::from_app_context(app.clone())));

        let mut tasks = tokio::task::JoinSet::new();

        for n in 0..REQUESTS {
            let service = Arc::clone(&service);

            tasks.spawn(async move {
                TestClient::post("http://example.com/create-shipment")
                    .json(&json!({
                        "sender": format!("Sender {n}"),
                        "receiver": "Bob",
                        "description": "Books",
                    }))
                    .send(service.as_ref())
                    .await
                    .status_code
            });
        }

        let mut created = 0;

        while let Some(status) = tasks.join_next().await {
            assert_eq!(status?, Some(StatusCode::OK));

            created += 1;
        }

        assert_eq!(created, REQUESTS);
        assert_eq!(
            usize::try_from(app.shipments.count_shipments().await?)?,
            REQUESTS
        );

        Ok(())
    }
}
