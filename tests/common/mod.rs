//! Shared helpers: a one-shot local HTTP server and verifier setup.

#![allow(dead_code)]

use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use nordcheck::{Config, Verifier};
use tiny_http::{Header, Response, Server};

/// A request as seen by [`MockServer`].
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub url: String,
    pub body: String,
    pub content_type: Option<String>,
}

/// Canned reply for one request.
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    pub fn html(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body: body.to_string(),
        }
    }

    pub fn xml(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/xml; charset=utf-8",
            body: body.to_string(),
        }
    }
}

/// Local HTTP server answering a fixed list of requests in order.
pub struct MockServer {
    pub base_url: String,
    handle: JoinHandle<Vec<Captured>>,
}

impl MockServer {
    pub fn serve(replies: Vec<Reply>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("bind mock server");
        let port = server
            .server_addr()
            .to_ip()
            .expect("mock server listens on TCP")
            .port();

        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for reply in replies {
                let mut request = server.recv().expect("mock server request");
                let mut body = String::new();
                request
                    .as_reader()
                    .read_to_string(&mut body)
                    .expect("request body");
                let content_type = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string());
                seen.push(Captured {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    body,
                    content_type,
                });

                let header = Header::from_bytes("Content-Type", reply.content_type)
                    .expect("content type header");
                let response = Response::from_string(reply.body)
                    .with_status_code(reply.status)
                    .with_header(header);
                request.respond(response).expect("mock server response");
            }
            seen
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            handle,
        }
    }

    /// Wait for all replies to be sent and return the requests.
    pub fn finish(self) -> Vec<Captured> {
        self.handle.join().expect("mock server thread")
    }
}

/// Base URL of a port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Config with every endpoint pointed at `base` and the log at `log`.
pub fn local_config(base: &str, log: &Path) -> Config {
    Config::default()
        .with_log_path(log)
        .with_vies_endpoint(format!("{base}/vies"))
        .with_norway_base(base)
        .with_sweden_base(base)
        .with_iceland_base(format!("{base}/leit"))
        .with_timeout(Duration::from_secs(5))
        .without_system_proxy()
}

pub fn verifier(base: &str, log: &Path) -> Verifier {
    Verifier::new(local_config(base, log)).expect("verifier")
}
