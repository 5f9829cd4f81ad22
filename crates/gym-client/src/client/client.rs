use crate::client::envelope::ListEnvelope;
use crate::{ClientError, ClientResult};

use std::time::Duration;

use gym_core::{AssignmentReceipt, MembershipAssignment, MembershipPlan, PaymentMethod, UserAccount};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Default per-request bound; a hung server surfaces as a transport
/// error instead of wedging the console.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the membership REST API
///
/// One instance serves every view. The credential is injected at
/// construction; plan-catalog calls go out anonymous, everything else
/// carries `Authorization: Token <value>` when a token is present.
pub struct ApiClient {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client with the default request timeout
    ///
    /// # Arguments
    /// * `base_url` - API address (e.g., "http://localhost:8000")
    /// * `token` - Optional stored credential for authorized endpoints
    pub fn new(base_url: &str, token: Option<&str>) -> ClientResult<Self> {
        Self::with_timeout(base_url, token, DEFAULT_TIMEOUT)
    }

    /// Create a new client with an explicit request timeout
    pub fn with_timeout(
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client,
        })
    }

    /// Build a request carrying the credential header when one is stored
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.request_anonymous(method, path);

        if let Some(ref token) = self.token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Token {}", token));
        }

        req
    }

    /// Build a request without credentials (public plan catalog)
    fn request_anonymous(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute a request and decode the success body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a request whose success body is irrelevant
    async fn execute_empty(&self, req: reqwest::RequestBuilder) -> ClientResult<()> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }

        Ok(())
    }

    /// Execute a list request, accepting bare and paginated shapes
    async fn execute_list<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<Vec<T>> {
        let envelope: ListEnvelope<T> = self.execute(req).await?;
        Ok(envelope.into_records())
    }

    /// Turn a non-success response into an API error.
    ///
    /// The message is drawn from the body's `detail` field, then
    /// `error`, then a generic fallback when the body has neither or is
    /// not JSON at all.
    async fn error_from_response(status: StatusCode, response: reqwest::Response) -> ClientError {
        let body = response.text().await.unwrap_or_default();
        let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

        let message = ["detail", "error"]
            .iter()
            .find_map(|key| body.get(key).and_then(Value::as_str))
            .map(String::from)
            .unwrap_or_else(|| format!("server returned status {}", status.as_u16()));

        ClientError::api_error(status.as_u16(), message)
    }

    // =========================================================================
    // Membership Plan Operations (anonymous catalog)
    // =========================================================================

    /// List all membership plans
    pub async fn list_plans(&self) -> ClientResult<Vec<MembershipPlan>> {
        let req = self.request_anonymous(Method::GET, "/api/memberships/");
        self.execute_list(req).await
    }

    /// Create a membership plan
    pub async fn create_plan(
        &self,
        name: &str,
        price: &str,
        duration_days: i64,
    ) -> ClientResult<MembershipPlan> {
        #[derive(Serialize)]
        struct CreatePlanRequest<'a> {
            name: &'a str,
            price: &'a str,
            duration_days: i64,
        }

        let body = CreatePlanRequest {
            name,
            price,
            duration_days,
        };
        let req = self
            .request_anonymous(Method::POST, "/api/memberships/")
            .json(&body);
        self.execute(req).await
    }

    /// Update a membership plan
    pub async fn update_plan(
        &self,
        id: i64,
        name: &str,
        price: &str,
        duration_days: i64,
    ) -> ClientResult<MembershipPlan> {
        #[derive(Serialize)]
        struct UpdatePlanRequest<'a> {
            name: &'a str,
            price: &'a str,
            duration_days: i64,
        }

        let body = UpdatePlanRequest {
            name,
            price,
            duration_days,
        };
        let req = self
            .request_anonymous(Method::PUT, &format!("/api/memberships/{}/", id))
            .json(&body);
        self.execute(req).await
    }

    /// Delete a membership plan
    pub async fn delete_plan(&self, id: i64) -> ClientResult<()> {
        let req = self.request_anonymous(Method::DELETE, &format!("/api/memberships/{}/", id));
        self.execute_empty(req).await
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all customer accounts
    pub async fn list_users(&self) -> ClientResult<Vec<UserAccount>> {
        let req = self.request(Method::GET, "/api/users/");
        self.execute_list(req).await
    }

    /// Register a new customer together with their first membership
    #[allow(clippy::too_many_arguments)]
    pub async fn register_with_membership(
        &self,
        username: &str,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
        membership_id: i64,
        payment_method: PaymentMethod,
    ) -> ClientResult<()> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            username: &'a str,
            email: &'a str,
            password: &'a str,
            first_name: &'a str,
            last_name: &'a str,
            membership_id: i64,
            payment_method: PaymentMethod,
        }

        let body = RegisterRequest {
            username,
            email,
            password,
            first_name,
            last_name,
            membership_id,
            payment_method,
        };
        let req = self
            .request(Method::POST, "/api/users/register-with-membership/")
            .json(&body);
        self.execute_empty(req).await
    }

    // =========================================================================
    // Assignment Operations
    // =========================================================================

    /// List all membership assignments
    pub async fn list_assignments(&self) -> ClientResult<Vec<MembershipAssignment>> {
        let req = self.request(Method::GET, "/api/user-memberships/");
        self.execute_list(req).await
    }

    /// Assign (or renew) a membership for an existing customer
    pub async fn create_assignment(
        &self,
        user: i64,
        membership_type: i64,
    ) -> ClientResult<AssignmentReceipt> {
        #[derive(Serialize)]
        struct CreateAssignmentRequest {
            user: i64,
            membership_type: i64,
        }

        let body = CreateAssignmentRequest {
            user,
            membership_type,
        };
        let req = self.request(Method::POST, "/api/user-memberships/").json(&body);
        self.execute(req).await
    }
}
