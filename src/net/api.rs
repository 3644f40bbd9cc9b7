//! REST API helpers for the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` and the beacon API.
//! Server-side: stubs, since these endpoints only matter in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so an auth or
//! subscription failure degrades the affected control without breaking the
//! rest of the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthSnapshot, NewsletterError, SubscribeRequest, SubscribeResponse};
use crate::auth::AuthError;

/// Fetch the signed-in user from the `me` endpoint.
/// Returns `None` when signed out, on any failure, or off the browser.
pub async fn fetch_current_user(url: &str) -> Option<AuthSnapshot> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<super::types::MeResponse>()
            .await
            .ok()
            .map(|me| me.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        None
    }
}

/// Queue `POST {url}` with `navigator.sendBeacon` so the logout request
/// outlives the reload that follows sign-out.
///
/// # Errors
///
/// Returns [`AuthError::SignOutRejected`] if the browser refuses to queue the
/// beacon.
pub fn send_logout(url: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let window =
            web_sys::window().ok_or_else(|| AuthError::SignOutRejected("no window".to_owned()))?;
        match window.navigator().send_beacon(url) {
            Ok(true) => Ok(()),
            Ok(false) => Err(AuthError::SignOutRejected("beacon was not queued".to_owned())),
            Err(e) => Err(AuthError::SignOutRejected(format!("{e:?}"))),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Ok(())
    }
}

/// Subscribe an email address via `POST {url}`.
///
/// # Errors
///
/// [`NewsletterError::Rejected`] carries the server's message for non-2xx
/// responses; [`NewsletterError::Transport`] covers everything else.
pub async fn subscribe(url: &str, request: &SubscribeRequest) -> Result<SubscribeResponse, NewsletterError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(request)
            .map_err(|e| NewsletterError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| NewsletterError::Transport(e.to_string()))?;
        let ok = resp.ok();
        let body = resp.json::<SubscribeResponse>().await.unwrap_or_default();
        if ok {
            Ok(body)
        } else {
            Err(NewsletterError::Rejected { message: body.message })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, request);
        Err(NewsletterError::Transport("not available on server".to_owned()))
    }
}
