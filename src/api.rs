use crate::errors::ApiError;
use crate::models::{AttendanceRecord, Employee, NewAttendance, NewEmployee};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::env;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub fn resolve_base_url() -> String {
    if let Ok(url) = env::var("HR_API_URL") {
        return url;
    }

    DEFAULT_BASE_URL.to_string()
}

/// Client for the remote HR API. Five operations, JSON over HTTP; the
/// server owns all validation and persistence.
#[derive(Clone)]
pub struct HrApi {
    client: Client,
    base_url: String,
}

impl HrApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_env() -> Self {
        Self::new(resolve_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self
            .client
            .get(format!("{}/employees", self.base_url))
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        let response = self
            .client
            .post(format!("{}/employees", self.base_url))
            .json(employee)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn delete_employee(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/employees/{id}", self.base_url))
            .send()
            .await?;
        read_ok(response).await
    }

    pub async fn list_attendance(&self, employee: u64) -> Result<Vec<AttendanceRecord>, ApiError> {
        let response = self
            .client
            .get(format!("{}/employees/{employee}/attendance", self.base_url))
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn mark_attendance(
        &self,
        employee: u64,
        entry: &NewAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let response = self
            .client
            .post(format!("{}/employees/{employee}/attendance", self.base_url))
            .json(entry)
            .send()
            .await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status.as_u16(), &body));
    }
    response.json().await.map_err(ApiError::from)
}

async fn read_ok(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status.as_u16(), &body));
    }
    Ok(())
}
