/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Request gateway: `reqwest` client construction and the single
//! uniform GET path every panel controller goes through.
//!
//! Address handling:
//! - `--addr` may be `host:port` (no scheme) or an explicit
//!   `http://...` / `https://...`.
//! - If a scheme is provided, it is treated as authoritative;
//!   otherwise plain HTTP is assumed (the demo backend serves HTTP).
//!
//! Every failure mode — transport error, non-2xx status, undecodable
//! body, or a backend-reported `{"error": ...}` payload — collapses
//! into `Err(message)`. Callers never distinguish the causes and
//! nothing escapes this boundary as a panic.

use std::time::Duration;

use serde::de::DeserializeOwned;

/// Split an address into an optional `http`/`https` scheme and the
/// remaining host part.
///
/// If `addr` starts with `https://` or `http://`, returns
/// `(Some(scheme), rest)`. Otherwise returns `(None, addr)`. The
/// returned `&str` values are slices of `addr`.
fn parse_addr(addr: &str) -> (Option<&str>, &str) {
    if let Some(host) = addr.strip_prefix("https://") {
        (Some("https"), host)
    } else if let Some(host) = addr.strip_prefix("http://") {
        (Some("http"), host)
    } else {
        (None, addr)
    }
}

/// Backend origin plus the shared HTTP client.
///
/// Cheap to clone; fetch tasks take a clone so the event loop never
/// blocks on a request.
#[derive(Clone)]
pub(crate) struct Gateway {
    /// Base URL including scheme (e.g. `http://127.0.0.1:8080`).
    pub(crate) base_url: String,
    client: reqwest::Client,
}

/// Build a [`Gateway`] from a CLI address.
///
/// `addr` may be a bare `host:port` or an explicit URL. The client
/// uses a 5 second timeout; no retries.
pub(crate) fn build_gateway(addr: &str) -> Gateway {
    let (explicit_scheme, host) = parse_addr(addr);
    let scheme = explicit_scheme.unwrap_or("http");
    let base_url = format!("{}://{}", scheme, host);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());
    Gateway { base_url, client }
}

impl Gateway {
    /// Issue one GET against `base_url + path` and decode the JSON
    /// body into `T`.
    ///
    /// Failure paths, all returned as `Err(message)`:
    /// - transport failure (unreachable, timeout, DNS);
    /// - non-2xx HTTP status, regardless of body content;
    /// - body that is not JSON;
    /// - a JSON object carrying a string `error` field (the backend
    ///   reports application failures in-band with status 200);
    /// - JSON that does not decode into `T`.
    pub(crate) async fn call<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status()));
        }
        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;
        if let Some(msg) = value.get("error").and_then(|v| v.as_str()) {
            return Err(msg.to_string());
        }
        serde_json::from_value(value).map_err(|e| format!("Parse error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::AsyncReadExt;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    use crate::model::PathsResponse;
    use crate::model::StatusResponse;

    use super::*;

    /// Serve exactly one canned HTTP/1.1 response, returning the
    /// address to point the gateway at.
    async fn one_shot_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut sock, _)) = listener.accept().await {
                let mut buf = [0u8; 2048];
                let _ = sock.read(&mut buf).await;
                let resp = format!(
                    "{}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = sock.write_all(resp.as_bytes()).await;
                let _ = sock.shutdown().await;
            }
        });
        addr.to_string()
    }

    #[test]
    fn parse_addr_bare_host() {
        assert_eq!(parse_addr("127.0.0.1:8080"), (None, "127.0.0.1:8080"));
    }

    #[test]
    fn parse_addr_explicit_schemes() {
        assert_eq!(parse_addr("http://h:1"), (Some("http"), "h:1"));
        assert_eq!(parse_addr("https://h:1"), (Some("https"), "h:1"));
    }

    #[test]
    fn build_gateway_defaults_to_http() {
        let gateway = build_gateway("10.0.0.1:9999");
        assert_eq!(gateway.base_url, "http://10.0.0.1:9999");
    }

    #[test]
    fn build_gateway_honors_explicit_scheme() {
        let gateway = build_gateway("https://10.0.0.1:9999");
        assert_eq!(gateway.base_url, "https://10.0.0.1:9999");
    }

    #[tokio::test]
    async fn ok_json_body_decodes() {
        let addr = one_shot_server(
            "HTTP/1.1 200 OK",
            r#"{"containers": [{"name": "x", "status": "Up 2 hours"}]}"#,
        )
        .await;
        let gateway = build_gateway(&addr);
        let resp: StatusResponse = gateway.call("/api/status").await.unwrap();
        assert_eq!(resp.containers.len(), 1);
        assert_eq!(resp.containers[0].name, "x");
        assert_eq!(resp.containers[0].status, "Up 2 hours");
    }

    #[tokio::test]
    async fn http_500_yields_err_with_status() {
        let addr = one_shot_server("HTTP/1.1 500 Internal Server Error", "{}").await;
        let gateway = build_gateway(&addr);
        let err = gateway.call::<StatusResponse>("/api/status").await.unwrap_err();
        assert!(err.contains("500"), "unexpected message: {}", err);
    }

    #[tokio::test]
    async fn transport_failure_yields_nonempty_err() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);
        let gateway = build_gateway(&addr);
        let err = gateway.call::<StatusResponse>("/api/status").await.unwrap_err();
        assert!(!err.is_empty());
    }

    #[tokio::test]
    async fn backend_error_payload_collapses_to_err() {
        let addr = one_shot_server("HTTP/1.1 200 OK", r#"{"error": "docker not running"}"#).await;
        let gateway = build_gateway(&addr);
        let err = gateway.call::<PathsResponse>("/api/paths").await.unwrap_err();
        assert_eq!(err, "docker not running");
    }

    #[tokio::test]
    async fn non_json_body_yields_parse_err() {
        let addr = one_shot_server("HTTP/1.1 200 OK", "not json").await;
        let gateway = build_gateway(&addr);
        let err = gateway.call::<StatusResponse>("/api/status").await.unwrap_err();
        assert!(err.starts_with("Parse error"), "unexpected message: {}", err);
    }
}
