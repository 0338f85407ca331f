//! HTTP client for the agent backend
//!
//! Thin wrapper around a shared `reqwest::Client` bound to a base URL.
//! The body of a POST is an explicit [`RequestBody`] variant, which decides
//! the content type: JSON for plain structured payloads, `multipart/form-data`
//! for payloads that may carry a file.

use crate::error::{ClientError, ClientResult};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span, Instrument};
use uuid::Uuid;

/// A file part of a multipart payload
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    /// Form field name the file is sent under
    pub field_name: String,
    /// Location of the file on disk
    pub path: PathBuf,
}

/// Multipart payload: text fields plus an optional file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartPayload {
    /// Text fields, sent in order
    pub fields: Vec<(String, String)>,
    /// Optional file attachment
    pub file: Option<FilePart>,
}

impl MultipartPayload {
    /// Append a text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Attach a file under the given field name
    pub fn file(mut self, field_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.file = Some(FilePart {
            field_name: field_name.into(),
            path: path.into(),
        });
        self
    }

    async fn into_form(self) -> ClientResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        if let Some(file) = self.file {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|source| ClientError::ManualFile {
                    path: file.path.clone(),
                    source,
                })?;
            let file_name = file
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string());
            let part = Part::bytes(bytes)
                .file_name(file_name)
                .mime_str(mime_for_path(&file.path))?;
            form = form.part(file.field_name, part);
        }
        Ok(form)
    }
}

/// Body of a POST request
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Sent as `application/json`
    Json(serde_json::Value),
    /// Sent as `multipart/form-data`
    Multipart(MultipartPayload),
}

/// MIME type for an upload, derived from its extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// HTTP client bound to a backend base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client for the given base URL
    ///
    /// # Errors
    /// * Returns `ClientError::InvalidUrl` if the URL does not parse or cannot carry a path
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let parsed =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: parsed,
            client: reqwest::Client::new(),
        })
    }

    /// Resolve path segments against the base URL
    ///
    /// Segments are percent-encoded; an empty final segment yields a trailing slash.
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a JSON resource
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let url = self.endpoint(segments)?;
        let request = self.client.request(Method::GET, url.clone());
        self.execute(Method::GET, url, request).await
    }

    /// POST a body and decode the JSON response
    pub async fn post<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: RequestBody,
    ) -> ClientResult<T> {
        let url = self.endpoint(segments)?;
        let request = self.client.request(Method::POST, url.clone());
        let request = match body {
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(payload) => request.multipart(payload.into_form().await?),
        };
        self.execute(Method::POST, url, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let request_id = Uuid::new_v4().to_string();
        let span = debug_span!(
            "backend_request",
            request_id = %request_id,
            method = %method,
            url = %url,
        );

        async move {
            debug!("Sending request");
            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read error body".to_string());
                debug!(status = status.as_u16(), "Backend returned error status");
                return Err(ClientError::Status {
                    status: status.as_u16(),
                    body,
                });
            }

            let body = response.text().await?;
            debug!(status = status.as_u16(), body_len = body.len(), "Request completed");

            // empty body reads as null
            let text = if body.trim().is_empty() { "null" } else { body.as_str() };
            serde_json::from_str(text).map_err(|e| ClientError::Decode(format!("{e} - body: {body}")))
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpClient::new("mailto:someone@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_joins_and_encodes_segments() {
        let client = HttpClient::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.endpoint(&["agent", ""]).unwrap().as_str(),
            "http://localhost:8000/agent/"
        );
        assert_eq!(
            client.endpoint(&["chat", "Game Master/2"]).unwrap().as_str(),
            "http://localhost:8000/chat/Game%20Master%2F2"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = HttpClient::new("http://example.com/api/").unwrap();
        assert_eq!(
            client.endpoint(&["agent", "Bot"]).unwrap().as_str(),
            "http://example.com/api/agent/Bot"
        );
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("rules.PDF")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("notes.txt")), "text/plain");
        assert_eq!(mime_for_path(Path::new("blob")), "application/octet-stream");
    }

    #[tokio::test]
    #[serial]
    async fn test_get_decodes_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/items/")
            .with_status(200)
            .with_body(r#"[1, 2, 3]"#)
            .create_async()
            .await;

        let client = HttpClient::new(&server.url()).unwrap();
        let items: Vec<u32> = client.get(&["items", ""]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[tokio::test]
    #[serial]
    async fn test_get_empty_body_is_null() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/items/x")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let client = HttpClient::new(&server.url()).unwrap();
        let item: Option<u32> = client.get(&["items", "x"]).await.unwrap();
        assert!(item.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_error_status_is_reported() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/items/")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = HttpClient::new(&server.url()).unwrap();
        let result: ClientResult<Vec<u32>> = client.get(&["items", ""]).await;
        match result {
            Err(ClientError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_post_json_sets_content_type() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/echo")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"input": "hi"})))
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = HttpClient::new(&server.url()).unwrap();
        let value: serde_json::Value = client
            .post(&["echo"], RequestBody::Json(json!({"input": "hi"})))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(value["ok"], true);
    }

    #[tokio::test]
    #[serial]
    async fn test_post_multipart_sets_content_type_and_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "the rules of the game").unwrap();

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=.+".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="title""#.to_string()),
                Matcher::Regex(r#"name="manual_file"; filename=".+\.txt""#.to_string()),
                Matcher::Regex("the rules of the game".to_string()),
            ]))
            .with_status(201)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = HttpClient::new(&server.url()).unwrap();
        let payload = MultipartPayload::default()
            .text("title", "Rules")
            .file("manual_file", file.path());
        let _: serde_json::Value = client
            .post(&["upload"], RequestBody::Multipart(payload))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_multipart_missing_file() {
        let client = HttpClient::new("http://localhost:1").unwrap();
        let payload = MultipartPayload::default().file("manual_file", "/definitely/not/here.pdf");
        let result: ClientResult<serde_json::Value> =
            client.post(&["upload"], RequestBody::Multipart(payload)).await;
        assert!(matches!(result, Err(ClientError::ManualFile { .. })));
    }
}
