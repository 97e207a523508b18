//! Gemini model gateway implementation
//!
//! Calls `POST {base_url}/v1beta/models/{model}:generateContent` with the
//! whole conversation on every request; the API is stateless.

use super::convert::{build_request, convert_response};
use super::error::{GeminiError, Result};
use super::protocol::{ErrorEnvelope, GenerateContentResponse};
use async_trait::async_trait;
use hospital_application::ports::model_gateway::{GatewayError, ModelGateway, ModelRequest};
use hospital_domain::ModelResponse;
use hospital_domain::util::truncate_str;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for [`GeminiGateway`]
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Model gateway backed by the Gemini REST API
pub struct GeminiGateway {
    client: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiGateway {
    pub fn new(settings: GeminiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        info!("GeminiGateway initialized ({})", settings.base_url);
        Ok(Self::with_client(settings, client))
    }

    /// Create a gateway with an existing HTTP client
    pub fn with_client(settings: GeminiSettings, client: reqwest::Client) -> Self {
        Self { client, settings }
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate_content(&self, request: &ModelRequest<'_>) -> Result<ModelResponse> {
        let url = self.endpoint(request.model.as_str());
        let body = build_request(request);

        debug!(
            model = %request.model,
            mode = request.mode().as_str(),
            contents = body.contents.len(),
            "Calling Gemini generateContent"
        );
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(envelope) => envelope.error.message,
                Err(_) => truncate_str(&text, 300).to_string(),
            };
            return Err(GeminiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        let converted = convert_response(parsed)?;

        debug!(
            "Gemini responded in {}ms ({} blocks, finish: {:?})",
            start.elapsed().as_millis(),
            converted.content.len(),
            converted.finish_reason
        );
        Ok(converted)
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn generate(
        &self,
        request: ModelRequest<'_>,
    ) -> std::result::Result<ModelResponse, GatewayError> {
        self.generate_content(&request).await.map_err(GatewayError::from)
    }

    fn provider(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_domain::{Model, Turn};
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response and hand back the raw request.
    async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{}", addr), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn gateway(base_url: &str) -> GeminiGateway {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        GeminiGateway::with_client(
            GeminiSettings::new("test-key").with_base_url(base_url),
            client,
        )
    }

    #[test]
    fn test_endpoint() {
        let gateway = gateway("https://example.test/");
        assert_eq!(
            gateway.endpoint("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_sends_request_and_parses_call() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "functionCall": {
                        "name": "manage_patient",
                        "args": { "action": "admission", "patientName": "Budi Santoso" }
                    } }]
                },
                "finishReason": "STOP"
            }]
        })
        .to_string();
        let (base_url, server) = serve_once("200 OK", body).await;
        let gateway = gateway(&base_url);

        let model = Model::Gemini25Flash;
        let history = vec![Turn::user("Tolong daftarkan pasien baru bernama Budi Santoso")];
        let declarations = vec![json!({ "name": "manage_patient" })];
        let response = gateway
            .generate(ModelRequest::decision(
                &model,
                "Anda adalah orkestrator.",
                &history,
                &declarations,
            ))
            .await
            .unwrap();

        let call = response.first_call().unwrap();
        assert_eq!(call.capability_name, "manage_patient");
        assert_eq!(call.get_string("patientName"), Some("Budi Santoso"));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-2.5-flash:generateContent"));
        assert!(request.to_lowercase().contains("x-goog-api-key: test-key"));
        assert!(request.contains("\"functionDeclarations\""));
        assert!(request.contains("Budi Santoso"));
    }

    #[tokio::test]
    async fn test_generate_maps_auth_error() {
        let body = json!({
            "error": { "code": 403, "message": "API key not valid.", "status": "PERMISSION_DENIED" }
        })
        .to_string();
        let (base_url, _server) = serve_once("403 Forbidden", body).await;

        let model = Model::default();
        let history = vec![Turn::user("Halo")];
        let err = gateway(&base_url)
            .generate(ModelRequest::final_answer(&model, "", &history))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::AuthenticationFailed(m) if m == "API key not valid."));
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_body() {
        let (base_url, _server) = serve_once("200 OK", "not json".to_string()).await;

        let model = Model::default();
        let history = vec![Turn::user("Halo")];
        let err = gateway(&base_url)
            .generate(ModelRequest::final_answer(&model, "", &history))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let model = Model::default();
        let history = vec![Turn::user("Halo")];
        let err = gateway(&format!("http://{}", addr))
            .generate(ModelRequest::final_answer(&model, "", &history))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
