use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AckResponse, AuthResponse, CreateCustomerRequest, CreateEntryRequest, Customer,
    ForgotPasswordRequest, LoginRequest, MessageResponse, MilkEntry, Notification, OverviewData,
    PaymentListResponse, RegisterRequest, ReminderConfig, ResetPasswordRequest,
    SaveReminderRequest, Shift, TogglePaymentRequest, UnpaidResponse, UpdateCustomerRequest,
};
use thiserror::Error;

/// Failures surfaced to call sites. Transport and HTTP errors pass through
/// unchanged; nothing is retried and no response is rewritten.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

const AUTH_SEGMENT: &str = "/api/auth";

/// API client for the milk attendance backend. Carries the signed-in user
/// id explicitly so views never read it from ambient storage; the id is
/// attached as a query parameter to every non-auth call.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    user_id: Option<i64>,
}

impl ApiClient {
    pub fn new(user_id: Option<i64>) -> Self {
        Self::with_base_url("http://localhost:8080".to_string(), user_id)
    }

    pub fn with_base_url(base_url: String, user_id: Option<i64>) -> Self {
        Self { base_url, user_id }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    fn url(&self, path: &str) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !path.contains(AUTH_SEGMENT) {
            if let Some(user_id) = self.user_id {
                url.push(if path.contains('?') { '&' } else { '?' });
                url.push_str("userId=");
                url.push_str(&user_id.to_string());
            }
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Request::post(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = Request::put(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = Request::delete(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(http_error(response).await)
        }
    }

    /* ---------------- auth ---------------- */

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.post_json("/api/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.post_json("/api/auth/register", request).await
    }

    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> ApiResult<MessageResponse> {
        self.post_json("/api/auth/forgot", request).await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> ApiResult<MessageResponse> {
        self.post_json("/api/auth/reset", request).await
    }

    /* ---------------- customers ---------------- */

    pub async fn customers(&self, shift: Shift) -> ApiResult<Vec<Customer>> {
        self.get_json(&format!("/api/customers?shift={}", shift)).await
    }

    pub async fn create_customer(&self, request: &CreateCustomerRequest) -> ApiResult<Customer> {
        self.post_json("/api/customers", request).await
    }

    pub async fn update_customer(
        &self,
        id: i64,
        request: &UpdateCustomerRequest,
    ) -> ApiResult<Customer> {
        self.put_json(&format!("/api/customers/{}", id), request).await
    }

    pub async fn delete_customer(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/api/customers/{}", id)).await
    }

    /* ---------------- entries ---------------- */

    pub async fn entries(&self, shift: Shift) -> ApiResult<Vec<MilkEntry>> {
        self.get_json(&format!("/api/milk?shift={}", shift)).await
    }

    pub async fn create_entry(&self, request: &CreateEntryRequest) -> ApiResult<MilkEntry> {
        self.post_json("/api/milk", request).await
    }

    pub async fn delete_entry(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/api/milk/{}", id)).await
    }

    /* ---------------- overview ---------------- */

    pub async fn overview(&self, shift: Shift, month: u32, year: i32) -> ApiResult<OverviewData> {
        self.get_json(&format!(
            "/api/overview?shift={}&month={}&year={}",
            shift, month, year
        ))
        .await
    }

    /* ---------------- payments ---------------- */

    pub async fn payments(&self, shift: Shift) -> ApiResult<PaymentListResponse> {
        self.get_json(&format!("/api/payments/{}", shift)).await
    }

    pub async fn toggle_payment(&self, request: &TogglePaymentRequest) -> ApiResult<AckResponse> {
        self.post_json("/api/payments", request).await
    }

    pub async fn unpaid_rows(&self, shift: Shift) -> ApiResult<UnpaidResponse> {
        self.get_json(&format!("/api/payments/unpaid?shift={}", shift)).await
    }

    /* ---------------- reminders & notifications ---------------- */

    pub async fn reminder(&self, shift: Shift) -> ApiResult<ReminderConfig> {
        self.get_json(&format!("/api/customers/reminder?shift={}", shift)).await
    }

    pub async fn save_reminder(&self, request: &SaveReminderRequest) -> ApiResult<AckResponse> {
        self.post_json("/api/payments/save-reminder", request).await
    }

    pub async fn trigger_reminder(&self, shift: Shift) -> ApiResult<AckResponse> {
        self.post_empty(&format!("/api/payments/trigger-reminder?shift={}", shift))
            .await
    }

    pub async fn send_unpaid_email(&self, shift: Shift) -> ApiResult<AckResponse> {
        self.post_empty(&format!("/api/payments/email/unpaid?shift={}", shift))
            .await
    }

    pub async fn notifications(&self, shift: Shift) -> ApiResult<Vec<Notification>> {
        self.get_json(&format!("/api/notifications?shift={}", shift)).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(None)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        return Err(http_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ApiError::Http { status, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(user_id: Option<i64>) -> ApiClient {
        ApiClient::with_base_url("http://api.test".to_string(), user_id)
    }

    #[test]
    fn user_id_is_attached_to_non_auth_calls() {
        let api = client(Some(7));
        assert_eq!(api.url("/api/milk"), "http://api.test/api/milk?userId=7");
        assert_eq!(
            api.url("/api/customers?shift=Morning"),
            "http://api.test/api/customers?shift=Morning&userId=7"
        );
    }

    #[test]
    fn auth_calls_never_carry_the_user_id() {
        let api = client(Some(7));
        assert_eq!(api.url("/api/auth/login"), "http://api.test/api/auth/login");
        assert_eq!(api.url("/api/auth/reset"), "http://api.test/api/auth/reset");
    }

    #[test]
    fn anonymous_urls_are_left_untouched() {
        let api = client(None);
        assert_eq!(api.url("/api/milk"), "http://api.test/api/milk");
        assert_eq!(
            api.url("/api/overview?shift=Night&month=6&year=2025"),
            "http://api.test/api/overview?shift=Night&month=6&year=2025"
        );
    }
}
