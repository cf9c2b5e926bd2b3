use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::session_store;

const CALLBACK_PORT: u16 = 9876;

/// Run the interactive login flow:
/// 1. POST to the backend's /login?next=http://localhost:9876/callback
/// 2. Open the returned authorization URL in the system browser
/// 3. Wait for the browser to call back with ?token=<value>
/// 4. Save the token and return it
pub async fn run_login(api_url: &str) -> Result<String> {
    let callback_url = format!("http://localhost:{}/callback", CALLBACK_PORT);

    let auth_url = reqwest::Client::new()
        .post(format!("{}/login", api_url))
        .query(&[("next", &callback_url)])
        .send()
        .await
        .context("Failed to call /login. Is the backend running?")?
        .error_for_status()
        .context("POST /login returned error")?
        .text()
        .await
        .context("Failed to read /login response")?;
    let auth_url = auth_url.trim();

    println!("Opening browser for login...");
    println!("If the browser doesn't open, visit:\n  {}\n", auth_url);
    open_browser(auth_url);

    let token = wait_for_callback().await?;
    session_store::save_token(&token)?;
    println!("Login successful. Session saved.");

    Ok(token)
}

fn open_browser(url: &str) {
    #[cfg(target_os = "linux")]
    let _ = std::process::Command::new("xdg-open").arg(url).spawn();
    #[cfg(target_os = "macos")]
    let _ = std::process::Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let _ = std::process::Command::new("cmd").args(["/c", "start", url]).spawn();
}

/// Accept a single request to /callback?token=<value> and return the token.
async fn wait_for_callback() -> Result<String> {
    use tokio::net::TcpListener;

    let listener = TcpListener::bind(format!("127.0.0.1:{}", CALLBACK_PORT))
        .await
        .with_context(|| format!("Failed to bind to port {}", CALLBACK_PORT))?;

    println!("Waiting for browser callback on port {}...", CALLBACK_PORT);

    let (mut stream, _) = listener.accept().await.context("Failed to accept connection")?;

    let mut buf = vec![0u8; 4096];
    let n = stream.read(&mut buf).await.context("Failed to read from socket")?;
    let request = String::from_utf8_lossy(&buf[..n]);

    let token = parse_token(&request)
        .context("Callback did not contain a token. Login may have failed.")?;

    let response = "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n\
        <html><body><h2>Login successful!</h2><p>You can close this tab.</p></body></html>";
    stream
        .write_all(response.as_bytes())
        .await
        .context("Failed to write response")?;

    Ok(token)
}

/// Extract `token` from the request line, e.g.
/// `GET /callback?token=abc&state=x HTTP/1.1`.
fn parse_token(request: &str) -> Option<String> {
    let line = request.lines().next()?;
    let path = line.split_whitespace().nth(1)?;
    let (_, query) = path.split_once('?')?;
    query
        .split('&')
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| *name == "token")
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_from_request_line() {
        let request = "GET /callback?state=xyz&token=abc.123 HTTP/1.1\r\nHost: localhost\r\n\r\n";
        assert_eq!(parse_token(request).as_deref(), Some("abc.123"));
    }

    #[test]
    fn missing_or_empty_token_is_none() {
        assert_eq!(parse_token("GET /callback HTTP/1.1\r\n"), None);
        assert_eq!(parse_token("GET /callback?error=denied HTTP/1.1\r\n"), None);
        assert_eq!(parse_token("GET /callback?token= HTTP/1.1\r\n"), None);
        assert_eq!(parse_token(""), None);
    }
}
