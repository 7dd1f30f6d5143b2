use std::sync::Arc;

use admin_sdk::AdminClient;
use anyhow::{Context, Result};
use auraflow_http::{CookieJar, HttpClientBuilder, TransportSecurity};
use auraflow_sdk::{RedirectToLogin, RestClient};
use secrecy::ExposeSecret;
use url::Url;
use workflow_sdk::WorkflowClient;

use crate::config::AppConfig;

/// Everything a command needs to talk to the backend
///
/// All clients share one connection pool and one cookie jar. A 401 from any
/// call clears the jar and leaves a pending login redirect behind.
pub struct AppContext {
    pub admin: AdminClient,
    pub workflow: WorkflowClient,
    redirect: Arc<RedirectToLogin>,
}

impl AppContext {
    /// # Errors
    /// Fails on an unusable base or login URL, or when the HTTP client cannot
    /// be built.
    pub fn connect(config: &AppConfig) -> Result<Self> {
        let jar = CookieJar::new();
        if let Some(value) = &config.session.cookie_value {
            jar.set(config.session.cookie_name.as_str(), value.expose_secret());
        }

        let transport = if config.api.allow_insecure_http {
            TransportSecurity::AllowInsecureHttp
        } else {
            TransportSecurity::TlsOnly
        };
        let http = HttpClientBuilder::new()
            .timeout(config.api.request_timeout)
            .user_agent(config.api.user_agent.as_str())
            .max_body_size(config.api.max_body_size)
            .transport(transport)
            .session_cookies(jar.clone())
            .build()
            .context("failed to build HTTP client")?;

        let redirect = Arc::new(RedirectToLogin::new().with_cookie_jar(jar));
        let rest = RestClient::new(http, &config.api.base_url)
            .context("invalid api.base_url")?
            .with_login_url(&config.session.login_url)
            .context("invalid session.login_url")?
            .with_unauthorized_handler(redirect.clone());

        tracing::debug!(base_url = %rest.base_url(), "client ready");

        Ok(Self {
            admin: AdminClient::new(rest.clone()),
            workflow: WorkflowClient::new(rest),
            redirect,
        })
    }

    /// Login page to send the user to after a 401, if one happened
    pub fn take_redirect(&self) -> Option<Url> {
        self.redirect.take_redirect()
    }
}
