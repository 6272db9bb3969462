//! Blocking HTTP entry point serving the demo page.
//!
//! Every request builds its own [`Generator`]; nothing mutable is shared
//! between requests.

use std::net::SocketAddr;

use tiny_http::{Header, Method, Request, Response, Server};

use crate::config::GeneratorConfig;
use crate::generator::Generator;
use crate::page;

/// A fully rendered response, independent of the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }
}

/// Serve until the process is stopped.
pub fn run_server(port: u16, config: GeneratorConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let server = Server::http(addr)?;

    eprintln!("stylegen server");
    eprintln!("  page:     http://localhost:{port}/");
    eprintln!("  css:      http://localhost:{port}/styles.css");
    eprintln!("  elements: http://localhost:{port}/elements.json");

    for request in server.incoming_requests() {
        let reply = route(request.method(), request.url(), &config);
        tracing::debug!(method = %request.method(), url = request.url(), status = reply.status, "request");
        if let Err(e) = respond(request, reply) {
            tracing::warn!(error = %e, "failed to send response");
        }
    }
    Ok(())
}

fn respond(request: Request, reply: Reply) -> std::io::Result<()> {
    let mut response = Response::from_string(reply.body).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
        response.add_header(header);
    }
    request.respond(response)
}

/// Map a request line to a reply.
pub fn route(method: &Method, url: &str, config: &GeneratorConfig) -> Reply {
    let path = url.split('?').next().unwrap_or(url);

    if *method != Method::Get {
        return Reply::html(405, page::build_error_page(&format!("method {method} not allowed")));
    }

    let generator = match path {
        "/" | "/index.html" | "/styles.css" | "/elements.json" => {
            match Generator::with_demo_elements(config.clone()) {
                Ok(generator) => generator,
                Err(e) => return Reply::html(500, page::build_error_page(&e.to_string())),
            }
        }
        _ => return Reply::html(404, page::build_error_page(&format!("no page at {path}"))),
    };

    match path {
        "/styles.css" => Reply {
            status: 200,
            content_type: "text/css; charset=utf-8",
            body: generator.stylesheet().to_string(),
        },
        "/elements.json" => match generator.to_json() {
            Ok(json) => Reply {
                status: 200,
                content_type: "application/json",
                body: json,
            },
            Err(e) => Reply::html(500, page::build_error_page(&e.to_string())),
        },
        _ => Reply::html(200, generator.generate_html_interface()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_serves_page() {
        let reply = route(&Method::Get, "/", &GeneratorConfig::default());
        assert_eq!(reply.status, 200);
        assert!(reply.content_type.starts_with("text/html"));
        assert!(reply.body.contains("sg-palette"));
    }

    #[test]
    fn stylesheet_route_is_raw_css() {
        let reply = route(&Method::Get, "/styles.css?v=2", &GeneratorConfig::default());
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, "text/css; charset=utf-8");
        assert!(reply.body.contains("'Segoe UI'"));
        assert!(!reply.body.contains("&#x27;"));
    }

    #[test]
    fn elements_route_lists_demo_elements() {
        let reply = route(&Method::Get, "/elements.json", &GeneratorConfig::default());
        let json: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
        let kinds: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["type"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(kinds, vec!["button", "input", "card"]);
    }

    #[test]
    fn unknown_path_is_404() {
        let reply = route(&Method::Get, "/nope", &GeneratorConfig::default());
        assert_eq!(reply.status, 404);
        assert!(reply.body.contains("no page at /nope"));
    }

    #[test]
    fn post_is_rejected() {
        let reply = route(&Method::Post, "/", &GeneratorConfig::default());
        assert_eq!(reply.status, 405);
    }

    #[test]
    fn invalid_config_renders_error_page() {
        let config = GeneratorConfig {
            palette: vec!["red;}".to_string()],
            ..GeneratorConfig::default()
        };
        let reply = route(&Method::Get, "/styles.css", &config);
        assert_eq!(reply.status, 500);
        assert!(reply.content_type.starts_with("text/html"));
        assert!(reply.body.contains("palette entry"));
        assert!(reply.body.contains("&#x27;red;}&#x27;"));
    }
}
