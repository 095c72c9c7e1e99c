use crate::{CrawlerError, Fetcher};
use tracing::debug;

/// Plain GET over a shared `reqwest::Client`, no headers, no retries.
#[derive(Debug, Default, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        HttpFetcher { client }
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, CrawlerError> {
        debug!("Visit {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlerError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Answers a single request with `status` and `body`, returns its url.
    async fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = vec![];
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/products/boston-fern", addr)
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let url = serve_once("200 OK", "<h1>Boston Fern</h1>").await;

        let body = fetcher().fetch(&url).await.unwrap();

        assert_eq!(body, "<h1>Boston Fern</h1>");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let url = serve_once("404 Not Found", "not found").await;

        let result = fetcher().fetch(&url).await;

        assert!(matches!(
            result,
            Err(CrawlerError::Status { ref url, status: 404 }) if url.ends_with("/products/boston-fern")
        ));
    }

    #[tokio::test]
    async fn server_error_is_an_error() {
        let url = serve_once("500 Internal Server Error", "").await;

        let result = fetcher().fetch(&url).await;

        assert!(matches!(
            result,
            Err(CrawlerError::Status { status: 500, .. })
        ));
    }
}
