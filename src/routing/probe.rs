/// One unauthenticated read against the backend root at boot. The result is
/// logged and nothing else; rendering never waits on it.
pub async fn probe_backend(base_url: &str) {
    match reqwest::get(base_url).await {
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::info!(%status, body = %body.trim(), "backend liveness probe");
        }
        Err(err) => {
            tracing::error!(error = %err, "backend liveness probe failed");
        }
    }
}
