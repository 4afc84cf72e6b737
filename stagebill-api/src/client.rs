use leptos::prelude::*;
use leptos::task::spawn_local;
use reqwest::{Method, RequestBuilder, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::auth::{self, Credentials, SessionUser};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServerErr {
    #[error("server rejected the request with status {0}")]
    Rejected(u16),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("failed to decode server response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServerRes {
    User(SessionUser),
    Empty,
}

pub trait Api {
    fn provide_builder(&self, method: Method, path: &str) -> RequestBuilder;

    fn provide_signal_busy(&self) -> Option<RwSignal<bool>> {
        None
    }

    /// One credentials POST, to `/users` in sign-up mode or `/login`
    /// otherwise. `.json` sets the `Content-Type: application/json` header.
    fn submit(&self, sign_up: bool, credentials: Credentials) -> ApiReq {
        let builder = self
            .provide_builder(Method::POST, auth::submit_path(sign_up))
            .json(&credentials);
        ApiReq::from_api(self, builder)
    }

    fn authorized(&self) -> ApiReq {
        let builder = self.provide_builder(Method::GET, auth::PATH_AUTHORIZED);
        ApiReq::from_api(self, builder)
    }

    fn logout(&self) -> ApiReq {
        let builder = self.provide_builder(Method::DELETE, auth::PATH_LOGOUT);
        ApiReq::from_api(self, builder)
    }
}

pub struct ApiReq {
    pub builder: RequestBuilder,
    pub busy: Option<RwSignal<bool>>,
}

impl ApiReq {
    pub fn from_api<A>(api: &A, builder: RequestBuilder) -> Self
    where
        A: Api + ?Sized,
    {
        Self {
            builder,
            busy: api.provide_signal_busy(),
        }
    }

    /// Fire the request from the UI thread and hand the outcome to `fut`.
    /// Refuses to dispatch while a previous request on the same handle is
    /// still in flight.
    pub fn send_web<F, Fut>(self, fut: F)
    where
        F: FnOnce(Result<ServerRes, ServerErr>) -> Fut + 'static,
        Fut: Future<Output = ()>,
    {
        let builder = self.builder;
        let signal_busy = self.busy;
        if let Some(signal_busy) = signal_busy {
            if signal_busy.get_untracked() {
                warn!("trying to send while still pending");
                return;
            }
            signal_busy.set(true);
        }
        spawn_local(async move {
            let result = send(builder).await;
            fut(result).await;
            if let Some(signal_busy) = signal_busy {
                signal_busy.set(false);
            }
        });
    }
}

/// `Empty` is produced only for a 204; any other success status must carry
/// a JSON user body or it is a `Decode` error. Failure bodies are never
/// consumed.
async fn send(builder: RequestBuilder) -> Result<ServerRes, ServerErr> {
    let res = builder
        .send()
        .await
        .map_err(|err| ServerErr::Transport(err.to_string()))?;
    let status = res.status();
    debug!("server responded with {status}");
    if !status.is_success() {
        return Err(ServerErr::Rejected(status.as_u16()));
    }
    if status == StatusCode::NO_CONTENT {
        return Ok(ServerRes::Empty);
    }
    let user = res
        .json::<SessionUser>()
        .await
        .map_err(|err| ServerErr::Decode(err.to_string()))?;
    Ok(ServerRes::User(user))
}

/// Per-operation handle components hold on to. The `busy` signal makes the
/// in-flight window reactive without the component storing it itself.
#[derive(Clone, Copy, Default)]
pub struct ApiWeb {
    pub busy: RwSignal<bool>,
}

impl ApiWeb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending_tracked(&self) -> bool {
        self.busy.get()
    }
}

impl Api for ApiWeb {
    fn provide_builder(&self, method: Method, path: &str) -> RequestBuilder {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        reqwest::Client::new().request(method, format!("{origin}{path}"))
    }

    fn provide_signal_busy(&self) -> Option<RwSignal<bool>> {
        Some(self.busy)
    }
}
