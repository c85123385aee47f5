use crate::frontend::utils::errors::{FrontendError, FrontendResult};
use http::{Method, StatusCode};
use leptos::prelude::use_context;
use log::info;
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, sync::LazyLock};

pub mod article;
pub mod comment;
pub mod user;

/// Base url of the RealWorld api. Can be overridden at build time with `CONDUIT_API_URL`.
pub const API_URL: &str = match option_env!("CONDUIT_API_URL") {
    Some(url) => url,
    None => "https://api.realworld.io/api",
};

pub static CLIENT: LazyLock<ApiClient> = LazyLock::new(|| ApiClient::new(API_URL));

/// Client provided by the server context, or the default one.
pub fn api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| CLIENT.clone())
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    #[cfg(feature = "ssr")]
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            #[cfg(feature = "ssr")]
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get<T>(&self, endpoint: &str, token: Option<&str>) -> FrontendResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.send(Method::GET, endpoint, token, None::<()>).await
    }

    async fn post<T, R>(&self, endpoint: &str, token: Option<&str>, body: R) -> FrontendResult<T>
    where
        T: for<'de> Deserialize<'de>,
        R: Serialize + Debug,
    {
        self.send(Method::POST, endpoint, token, Some(body)).await
    }

    async fn delete<T>(&self, endpoint: &str, token: Option<&str>) -> FrontendResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.send(Method::DELETE, endpoint, token, None::<()>).await
    }

    #[cfg(feature = "ssr")]
    async fn send<P, T>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<P>,
    ) -> FrontendResult<T>
    where
        P: Serialize + Debug,
        T: for<'de> Deserialize<'de>,
    {
        use reqwest::header::AUTHORIZATION;

        let mut req = self.client.request(method, self.request_endpoint(path));
        if let Some(body) = &body {
            req = req.json(body);
        }
        if let Some(token) = token {
            req = req.header(AUTHORIZATION, format!("Token {token}"));
        }
        let res = req.send().await?;
        let status = res.status();
        let url = res.url().to_string();
        let text = res.text().await?;
        Self::response(status.as_u16(), text, &url)
    }

    #[cfg(not(feature = "ssr"))]
    fn send<'a, P, T>(
        &'a self,
        method: Method,
        path: &'a str,
        token: Option<&'a str>,
        body: Option<P>,
    ) -> impl std::future::Future<Output = FrontendResult<T>> + Send + 'a
    where
        P: Serialize + Debug + 'a,
        T: for<'de> Deserialize<'de>,
    {
        use gloo_net::http::RequestBuilder;
        use send_wrapper::SendWrapper;

        SendWrapper::new(async move {
            let mut builder = RequestBuilder::new(&self.request_endpoint(path)).method(method);
            if let Some(token) = token {
                builder = builder.header("authorization", &format!("Token {token}"));
            }
            let req = match &body {
                Some(body) => builder
                    .header("content-type", "application/json")
                    .body(serde_json::to_string(body)?)?,
                None => builder.build()?,
            };
            let res = req.send().await?;
            let status = res.status();
            let text = res.text().await?;
            Self::response(status, text, &res.url())
        })
    }

    fn response<T>(status: u16, text: String, url: &str) -> FrontendResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let success = StatusCode::from_u16(status)
            .map(|s| s.is_success())
            .unwrap_or(false);
        if !success {
            info!("API error: {text} on {url} status {status}");
            return Err(FrontendError::new(format!("{status}: {text}")));
        }
        // delete endpoints may respond without body
        let text = if text.trim().is_empty() {
            "null".to_string()
        } else {
            text
        };
        serde_json::from_str(&text).map_err(|e| {
            info!("Failed to deserialize api response: {e} from {text} on {url}");
            FrontendError::new(text.clone())
        })
    }

    fn request_endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
