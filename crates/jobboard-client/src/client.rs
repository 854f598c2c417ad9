//! Job board HTTP client.

use std::path::Path;
use std::time::Duration;

use jobboard_core::domain::{
    Application, ApplicationWithCandidate, ApplicationWithJob, Company, CompanyWithEmployer,
    EmployerJob, Job, JobFilter, JobWithRelations, UserInfo, UserSummary, UserWithProfile,
};
use jobboard_core::dto::{
    ApplyRequest, AuthResponse, CreateCompanyRequest, CreateJobRequest, LoginRequest,
    MessageResponse, PlatformStats, RegisterRequest, UpdateCompanyRequest, UpdateJobRequest,
    UpdateProfileRequest, UpdateStatusRequest, UploadResponse,
};
use jobboard_shared::EntityId;
use reqwest::{multipart, Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Configuration for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, e.g. `http://localhost:5000`
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Typed wrapper over every `/api` endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach a bearer token to every following request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn authed(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        if self.token.is_none() {
            return Err(ClientError::NotLoggedIn);
        }
        Ok(self.request(method, path))
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        debug!("{} {}", status, response.url());

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("Request failed").to_string()
                } else {
                    body
                }
            });

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.authed(Method::GET, path)?).await
    }

    async fn write<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.authed(method, path)?.json(body)).await
    }

    // ---- health ----

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.send(self.request(Method::GET, "/health")).await
    }

    // ---- auth ----

    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.send(self.request(Method::POST, "/api/auth/register").json(request))
            .await
    }

    pub async fn login(&self, request: &LoginRequest) -> ClientResult<AuthResponse> {
        self.send(self.request(Method::POST, "/api/auth/login").json(request))
            .await
    }

    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.get("/api/auth/me").await
    }

    // ---- jobs ----

    pub async fn list_jobs(&self, filter: &JobFilter) -> ClientResult<Vec<JobWithRelations>> {
        let mut url = Url::parse(&self.url("/api/jobs"))
            .map_err(|e| ClientError::InvalidInput(format!("bad base url: {}", e)))?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(search) = filter.search_term() {
                query.append_pair("search", search);
            }
            if let Some(company_id) = filter.company_id {
                query.append_pair("companyId", &company_id.to_string());
            }
        }
        let url = url.as_str().trim_end_matches('?').to_string();
        self.send(self.http.get(url)).await
    }

    pub async fn get_job(&self, id: EntityId) -> ClientResult<JobWithRelations> {
        self.send(self.request(Method::GET, &format!("/api/jobs/{}", id)))
            .await
    }

    pub async fn create_job(&self, request: &CreateJobRequest) -> ClientResult<Job> {
        self.write(Method::POST, "/api/jobs", request).await
    }

    pub async fn update_job(&self, id: EntityId, request: &UpdateJobRequest) -> ClientResult<Job> {
        self.write(Method::PUT, &format!("/api/jobs/{}", id), request)
            .await
    }

    pub async fn delete_job(&self, id: EntityId) -> ClientResult<MessageResponse> {
        self.send(self.authed(Method::DELETE, &format!("/api/jobs/{}", id))?)
            .await
    }

    pub async fn employer_jobs(&self) -> ClientResult<Vec<EmployerJob>> {
        self.get("/api/jobs/employer").await
    }

    // ---- companies ----

    pub async fn list_companies(&self) -> ClientResult<Vec<Company>> {
        self.send(self.request(Method::GET, "/api/companies")).await
    }

    pub async fn my_companies(&self) -> ClientResult<Vec<Company>> {
        self.get("/api/companies/my-companies").await
    }

    pub async fn get_company(&self, id: EntityId) -> ClientResult<CompanyWithEmployer> {
        self.send(self.request(Method::GET, &format!("/api/companies/{}", id)))
            .await
    }

    pub async fn create_company(&self, request: &CreateCompanyRequest) -> ClientResult<Company> {
        self.write(Method::POST, "/api/companies", request).await
    }

    pub async fn update_company(
        &self,
        id: EntityId,
        request: &UpdateCompanyRequest,
    ) -> ClientResult<Company> {
        self.write(Method::PUT, &format!("/api/companies/{}", id), request)
            .await
    }

    // ---- applications ----

    pub async fn apply(&self, request: &ApplyRequest) -> ClientResult<Application> {
        self.write(Method::POST, "/api/applications", request).await
    }

    pub async fn my_applications(&self) -> ClientResult<Vec<ApplicationWithJob>> {
        self.get("/api/applications/my").await
    }

    pub async fn employer_applications(&self) -> ClientResult<Vec<ApplicationWithCandidate>> {
        self.get("/api/applications/employer").await
    }

    pub async fn job_applications(
        &self,
        job_id: EntityId,
    ) -> ClientResult<Vec<ApplicationWithCandidate>> {
        self.get(&format!("/api/applications/job/{}", job_id)).await
    }

    pub async fn update_application_status(
        &self,
        id: EntityId,
        request: &UpdateStatusRequest,
    ) -> ClientResult<Application> {
        self.write(Method::PUT, &format!("/api/applications/{}/status", id), request)
            .await
    }

    // ---- profile ----

    pub async fn profile(&self) -> ClientResult<UserWithProfile> {
        self.get("/api/users/profile").await
    }

    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> ClientResult<UserWithProfile> {
        self.write(Method::PUT, "/api/users/profile", request).await
    }

    // ---- upload ----

    pub async fn upload(&self, path: &Path) -> ClientResult<UploadResponse> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ClientError::InvalidInput(format!("not a file: {}", path.display())))?
            .to_string();
        let data = tokio::fs::read(path).await?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        let part = multipart::Part::bytes(data)
            .file_name(file_name)
            .mime_str(mime.essence_str())?;
        let form = multipart::Form::new().part("file", part);

        self.send(self.authed(Method::POST, "/api/upload")?.multipart(form))
            .await
    }

    // ---- admin ----

    pub async fn admin_stats(&self) -> ClientResult<PlatformStats> {
        self.get("/api/admin/stats").await
    }

    pub async fn admin_users(&self) -> ClientResult<Vec<UserSummary>> {
        self.get("/api/admin/users").await
    }

    pub async fn admin_user(&self, id: EntityId) -> ClientResult<UserWithProfile> {
        self.get(&format!("/api/admin/users/{}", id)).await
    }

    pub async fn admin_delete_user(&self, id: EntityId) -> ClientResult<MessageResponse> {
        self.send(self.authed(Method::DELETE, &format!("/api/admin/users/{}", id))?)
            .await
    }
}
