use reqwest::{Method, StatusCode, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};

use super::models::{
    ApiBodyMeasurement, ApiWeightEntry, ApiWorkout, BodyMeasurementPayload, ErrorBody,
    HealthStatus, WeightEntryPayload, WorkoutPayload,
};
use crate::error::{ClientError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// HTTP client for the fitness tracker API.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and decode the JSON reply.
    ///
    /// Returns `None` for `204 No Content`. A non-success status becomes
    /// [`ClientError::Api`] carrying the server's `error` message, or
    /// `HTTP error! status: N` when the body has none.
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let result = self.send(method.clone(), &url, body).await;
        if let Err(e) = &result {
            tracing::error!(%method, %url, "API request failed: {}", e);
        }

        result
    }

    async fn send<T, B>(&self, method: Method, url: &str, body: Option<&B>) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("HTTP error! status: {}", status.as_u16()),
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, None)
            .await?
            .ok_or(ClientError::EmptyBody)
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(method, path, Some(body))
            .await?
            .ok_or(ClientError::EmptyBody)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        self.request::<serde_json::Value, ()>(Method::DELETE, path, None)
            .await?;
        Ok(())
    }

    pub async fn weight_entries(&self) -> Result<Vec<ApiWeightEntry>> {
        self.get("/weight").await
    }

    pub async fn create_weight_entry(&self, entry: &WeightEntryPayload) -> Result<ApiWeightEntry> {
        self.send_json(Method::POST, "/weight", entry).await
    }

    pub async fn update_weight_entry(
        &self,
        id: i64,
        entry: &WeightEntryPayload,
    ) -> Result<ApiWeightEntry> {
        self.send_json(Method::PUT, &format!("/weight/{}", id), entry)
            .await
    }

    pub async fn delete_weight_entry(&self, id: i64) -> Result<()> {
        self.delete(&format!("/weight/{}", id)).await
    }

    pub async fn body_measurements(&self) -> Result<Vec<ApiBodyMeasurement>> {
        self.get("/measurements").await
    }

    pub async fn create_body_measurement(
        &self,
        measurement: &BodyMeasurementPayload,
    ) -> Result<ApiBodyMeasurement> {
        self.send_json(Method::POST, "/measurements", measurement)
            .await
    }

    pub async fn update_body_measurement(
        &self,
        id: i64,
        measurement: &BodyMeasurementPayload,
    ) -> Result<ApiBodyMeasurement> {
        self.send_json(Method::PUT, &format!("/measurements/{}", id), measurement)
            .await
    }

    pub async fn delete_body_measurement(&self, id: i64) -> Result<()> {
        self.delete(&format!("/measurements/{}", id)).await
    }

    pub async fn workouts(&self) -> Result<Vec<ApiWorkout>> {
        self.get("/workouts").await
    }

    pub async fn workout(&self, id: i64) -> Result<ApiWorkout> {
        self.get(&format!("/workouts/{}", id)).await
    }

    pub async fn create_workout(&self, workout: &WorkoutPayload) -> Result<ApiWorkout> {
        self.send_json(Method::POST, "/workouts", workout).await
    }

    pub async fn update_workout(&self, id: i64, workout: &WorkoutPayload) -> Result<ApiWorkout> {
        self.send_json(Method::PUT, &format!("/workouts/{}", id), workout)
            .await
    }

    pub async fn delete_workout(&self, id: i64) -> Result<()> {
        self.delete(&format!("/workouts/{}", id)).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
