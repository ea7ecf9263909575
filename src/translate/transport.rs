//! Transport translator
//!
//! Dispatches on the declared transport kind and re-encodes the selected
//! sub-settings into target-schema transport options. The input is treated
//! as read-only: the WebSocket path rewrite is a pure transform on a local
//! copy.

use std::str::FromStr;

use log::debug;
use url::Url;

use crate::common::{Result, TranslateError};
use crate::source::{StreamSettings, TransportKind, WsSettings};
use crate::target::{TransportOptions, TransportType, WebsocketOptions};

/// Target-schema header that carries early-data payloads
const EARLY_DATA_HEADER: &str = "Sec-WebSocket-Protocol";

/// Source-path query parameter holding the early-data byte budget
const EARLY_DATA_PARAM: &str = "ed";

/// Translate stream settings into target-schema transport options
///
/// Dispatch rules:
/// - no declared kind: the zero-valued options (type none), no error
/// - `tcp`: plain TCP needs no wrapper; a header-obfuscation configuration
///   has no target representation and fails with
///   [`TranslateError::UnsupportedFeature`]
/// - `http`: host, path and method are copied; only the first value of
///   each header survives (the target schema is single-valued)
/// - `ws`: headers are copied and the path is rewritten, extracting the
///   `ed` early-data budget from its query string
/// - `grpc` / `gun`: the service name is copied, preferring the gRPC
///   sub-settings when both are populated
/// - `quic`: type only, nothing else is copied
/// - anything else fails with [`TranslateError::UnsupportedTransport`]
pub fn translate_transport(settings: &StreamSettings) -> Result<TransportOptions> {
    let kind = match settings.network.as_deref() {
        Some(tag) => TransportKind::from_str(tag)?,
        None => return Ok(TransportOptions::default()),
    };

    debug!("Translating stream settings for transport kind '{}'", kind);

    let mut options = TransportOptions::default();

    match kind {
        TransportKind::Tcp => {
            if let Some(tcp_settings) = &settings.tcp_settings {
                if tcp_settings.header.is_some() {
                    return Err(TranslateError::UnsupportedFeature(
                        "TCP transport with header".to_string(),
                    ));
                }
            }
        }
        TransportKind::Http => {
            options.transport_type = TransportType::Http;
            if let Some(http_settings) = &settings.http_settings {
                if let Some(host) = &http_settings.host {
                    options.http.host = host.clone();
                }
                options.http.path = http_settings.path.clone();
                options.http.method = http_settings.method.clone();
                for (name, values) in &http_settings.headers {
                    // Single-valued target headers: extra values are dropped.
                    if let Some(first) = values.first() {
                        options.http.headers.insert(name.clone(), first.clone());
                    }
                }
            }
        }
        TransportKind::Ws => {
            options.transport_type = TransportType::Ws;
            if let Some(ws_settings) = &settings.ws_settings {
                options.websocket = translate_websocket(ws_settings)?;
            }
        }
        TransportKind::Grpc | TransportKind::Gun => {
            options.transport_type = TransportType::Grpc;
            if let Some(grpc_settings) = &settings.grpc_settings {
                options.grpc.service_name = grpc_settings.service_name.clone();
            } else if let Some(gun_settings) = &settings.gun_settings {
                options.grpc.service_name = gun_settings.service_name.clone();
            }
        }
        TransportKind::Quic => {
            options.transport_type = TransportType::Quic;
        }
    }

    Ok(options)
}

/// Translate WebSocket sub-settings, rewriting the handshake path
///
/// The path may carry an `ed` query parameter declaring the early-data
/// byte budget. When present and parseable as a u32 it is lifted into
/// `max_early_data` (with the fixed early-data header name) and stripped
/// from the re-serialized path. An absent or unparseable value is silently
/// ignored and the path passes through untouched; leniency here matches
/// the source schema's established behavior.
fn translate_websocket(settings: &WsSettings) -> Result<WebsocketOptions> {
    let mut options = WebsocketOptions {
        headers: settings.headers.clone(),
        ..Default::default()
    };

    if settings.path.is_empty() {
        return Ok(options);
    }

    let path = if settings.path.starts_with('/') {
        settings.path.clone()
    } else {
        format!("/{}", settings.path)
    };

    let mut url = parse_path(&path)?;

    let budget = url
        .query_pairs()
        .find(|(key, _)| *key == EARLY_DATA_PARAM)
        .and_then(|(_, value)| value.parse::<u32>().ok());

    match budget {
        Some(budget) => {
            options.max_early_data = budget;
            options.early_data_header_name = EARLY_DATA_HEADER.to_string();

            let remaining: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(key, _)| *key != EARLY_DATA_PARAM)
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect();

            url.set_query(None);
            if !remaining.is_empty() {
                url.query_pairs_mut().extend_pairs(remaining);
            }

            options.path = match url.query() {
                Some(query) => format!("{}?{}", url.path(), query),
                None => url.path().to_string(),
            };
        }
        None => {
            // No budget to strip: the path passes through byte for byte.
            // Re-serializing here would normalize dot segments and drop
            // authority components, which the contract forbids.
            options.path = path;
        }
    }

    Ok(options)
}

/// Parse a handshake path as a URL
///
/// The path is a relative reference, so it is resolved against a fixed
/// base; the base never leaks into the re-serialized output.
fn parse_path(path: &str) -> Result<Url> {
    let base = Url::parse("ws://localhost/").expect("static base URL is valid");
    base.join(path).map_err(|source| TranslateError::MalformedPath {
        path: path.to_string(),
        source,
    })
}
