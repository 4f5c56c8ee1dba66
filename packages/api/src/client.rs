//! # ApiClient — one typed method per backend operation
//!
//! A thin pass-through layer: each method resolves a URL template, issues
//! the request through the [`Transport`], and decodes the JSON response.
//! No retries, no caching, no request sequencing — calls issued
//! concurrently may complete in any order.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::*;
use crate::transport::{ApiRequest, HttpTransport, Method, Transport};

/// REST client for the expense tracker backend, generic over its
/// [`Transport`] so tests can substitute an in-memory fake.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport = HttpTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient {
    /// Client backed by a real HTTP transport.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            transport: HttpTransport::new(),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // ----- categories -----

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        self.get(&format!("/categories/{id}")).await
    }

    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.post("/categories", category).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        update: &CategoryUpdate,
    ) -> Result<Category, ApiError> {
        self.put(&format!("/categories/{id}"), update).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/categories/{id}")).await
    }

    // ----- expenses -----

    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        self.get("/expenses").await
    }

    pub async fn get_expense(&self, id: i64) -> Result<Expense, ApiError> {
        self.get(&format!("/expenses/{id}")).await
    }

    pub async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, ApiError> {
        self.post("/expenses", expense).await
    }

    pub async fn update_expense(
        &self,
        id: i64,
        update: &ExpenseUpdate,
    ) -> Result<Expense, ApiError> {
        self.put(&format!("/expenses/{id}"), update).await
    }

    pub async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/expenses/{id}")).await
    }

    // ----- statistics -----

    pub async fn summary_statistics(&self) -> Result<SummaryStatistics, ApiError> {
        self.get("/statistics/summary").await
    }

    pub async fn monthly_statistics(&self) -> Result<Vec<MonthlyTotal>, ApiError> {
        self.get("/statistics/monthly").await
    }

    pub async fn budget_statistics(&self) -> Result<BudgetInfo, ApiError> {
        self.get("/statistics/budget").await
    }

    pub async fn category_statistics(&self) -> Result<Vec<CategoryStatistics>, ApiError> {
        self.get("/statistics/by-category").await
    }

    // ----- audit logs -----

    pub async fn list_audit_logs(&self) -> Result<Vec<AuditLogEntry>, ApiError> {
        self.get("/audit-logs").await
    }

    // ----- request plumbing -----

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Get, path, None).await
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request(Method::Post, path, Some(body)).await
    }

    async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request(Method::Put, path, Some(body)).await
    }

    /// DELETE returns 204 with an empty body, so success is not decoded.
    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Method::Delete, path, None).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            })
        }
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let response = self.send(method, path, body).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<crate::transport::ApiResponse, ApiError> {
        let url = self.config.url(path);
        tracing::debug!(method = method.as_str(), url = %url, "api request");
        self.transport
            .send(ApiRequest { method, url, body })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fake::FakeTransport;
    use serde_json::json;

    fn client(transport: &FakeTransport) -> ApiClient<FakeTransport> {
        ApiClient::with_transport(ApiConfig::default(), transport.clone())
    }

    #[tokio::test]
    async fn test_list_categories_resolves_payload() {
        let transport = FakeTransport::new();
        transport.push_json(200, json!([{"id": 1, "name": "Food"}]));

        let categories = client(&transport).list_categories().await.unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].name, "Food");
        assert_eq!(categories[0].description, None);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].url, "http://localhost:8000/categories");
        assert_eq!(requests[0].body, None);
    }

    #[tokio::test]
    async fn test_update_expense_issues_put_with_partial_body() {
        let transport = FakeTransport::new();
        transport.push_json(
            200,
            json!({"id": 7, "description": "Lunch", "amount": 5.0, "category_id": 1}),
        );

        let update = ExpenseUpdate {
            amount: Some(5.0),
            ..Default::default()
        };
        let expense = client(&transport).update_expense(7, &update).await.unwrap();
        assert_eq!(expense.amount, 5.0);

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url, "http://localhost:8000/expenses/7");
        // Unset fields must not be serialized at all.
        assert_eq!(requests[0].body, Some(json!({"amount": 5.0})));
    }

    #[tokio::test]
    async fn test_create_category_posts_json_body() {
        let transport = FakeTransport::new();
        transport.push_json(201, json!({"id": 2, "name": "Travel"}));

        let created = client(&transport)
            .create_category(&NewCategory {
                name: "Travel".to_string(),
                description: None,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 2);

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://localhost:8000/categories");
        assert_eq!(requests[0].body, Some(json!({"name": "Travel"})));
    }

    #[tokio::test]
    async fn test_delete_expense_not_found_rejects_with_status() {
        let transport = FakeTransport::new();
        transport.push_raw(404, br#"{"detail":"Expense not found"}"#);

        let err = client(&transport).delete_expense(3).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("Expense not found"));
            }
            other => panic!("expected status error, got {other:?}"),
        }

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].url, "http://localhost:8000/expenses/3");
    }

    #[tokio::test]
    async fn test_delete_succeeds_on_204_empty_body() {
        let transport = FakeTransport::new();
        transport.push_raw(204, b"");

        client(&transport).delete_category(9).await.unwrap();
        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:8000/categories/9"
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let transport = FakeTransport::new();
        transport.push_raw(200, b"<html>proxy error</html>");

        let err = client(&transport).list_expenses().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unserializable_body_is_an_encode_error() {
        let transport = FakeTransport::new();
        // Non-string map keys cannot be represented in JSON.
        let bad_body = std::collections::HashMap::from([(vec![1u8], 1)]);

        let err = client(&transport)
            .post::<_, serde_json::Value>("/categories", &bad_body)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Encode(_)), "got {err:?}");
        assert!(err.to_string().starts_with("failed to encode request body"));
        // The request never reaches the transport.
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let transport = FakeTransport::new();
        transport.push_error(ApiError::Network("connection refused".to_string()));

        let err = client(&transport).summary_statistics().await.unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".to_string()));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_statistics_and_audit_urls() {
        let transport = FakeTransport::new();
        transport.push_json(
            200,
            json!({"expense_count": 4, "total_amount": 120.5, "average_amount": 30.125}),
        );
        transport.push_json(200, json!([{"month": "2025-07", "total_expenses": 80.0}]));
        transport.push_json(200, json!({"budget_id": 1, "total_spent_ever": 999.0}));
        transport.push_json(
            200,
            json!([{"category": "Food", "expense_count": 2, "total_amount": 40.0, "average_amount": 20.0}]),
        );
        transport.push_json(
            200,
            json!([{"log_id": 1, "operation": "INSERT", "expense_id": 3, "log_timestamp": "2025-07-01T10:00:00"}]),
        );

        let api = client(&transport);
        let summary = api.summary_statistics().await.unwrap();
        assert_eq!(summary.expense_count, 4);
        let monthly = api.monthly_statistics().await.unwrap();
        assert_eq!(monthly[0].month, "2025-07");
        let budget = api.budget_statistics().await.unwrap();
        assert_eq!(budget.total_spent_ever, 999.0);
        let by_category = api.category_statistics().await.unwrap();
        assert_eq!(by_category[0].category, "Food");
        let logs = api.list_audit_logs().await.unwrap();
        assert_eq!(logs[0].operation, "INSERT");
        assert_eq!(logs[0].old_amount, None);

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost:8000/statistics/summary",
                "http://localhost:8000/statistics/monthly",
                "http://localhost:8000/statistics/budget",
                "http://localhost:8000/statistics/by-category",
                "http://localhost:8000/audit-logs",
            ]
        );
    }

    #[tokio::test]
    async fn test_get_single_resource_interpolates_id() {
        let transport = FakeTransport::new();
        transport.push_json(200, json!({"id": 11, "name": "Rent"}));
        transport.push_json(
            200,
            json!({"id": 5, "description": "Bus", "amount": 2.75, "category_id": 11}),
        );

        let api = client(&transport);
        assert_eq!(api.get_category(11).await.unwrap().name, "Rent");
        assert_eq!(api.get_expense(5).await.unwrap().category, None);

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost:8000/categories/11",
                "http://localhost:8000/expenses/5",
            ]
        );
    }
}
