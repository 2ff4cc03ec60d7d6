//! Transport behavior against canned local endpoints.

use cd_client::{ClientError, SolveClient};
use cd_params::{ParameterSet, ProblemSelection};
use cd_protocol::{compile, SolvePayload};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;

fn heat_payload() -> SolvePayload {
    compile(ProblemSelection::heat_1d(), &ParameterSet::default()).unwrap()
}

/// Drain one HTTP request: headers, then as much body as Content-Length
/// declares.
fn read_request(stream: &mut TcpStream) {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&data[..pos]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            let mut remaining = content_length.saturating_sub(data.len() - (pos + 4));
            while remaining > 0 {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => return,
                    Ok(n) => remaining = remaining.saturating_sub(n),
                }
            }
            return;
        }
    }
}

/// Serve exactly one request with the given status line and JSON body.
fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });
    format!("http://{addr}")
}

/// Serve one request by never answering it.
fn serve_hang(hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            read_request(&mut stream);
            std::thread::sleep(hold);
        }
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn solve_success_parses_result() {
    let base = serve_once(
        "200 OK",
        r#"{"x":[0.0,1.0],"t":[0.0,0.5],"u":[[0.0,0.0],[0.1,0.0]],"plots":{"animation":"QQ=="}}"#,
    );
    let client = SolveClient::new(base);
    let result = client.solve(&heat_payload()).await.unwrap();
    assert_eq!(result.t.as_ref().unwrap().len(), 2);
    assert_eq!(
        result.plots.unwrap().animation.as_deref(),
        Some("QQ==")
    );
}

#[tokio::test]
async fn failure_status_carries_solver_message() {
    let base = serve_once(
        "400 Bad Request",
        r#"{"error":"Stability criterion not met. Please reduce dt or increase dx."}"#,
    );
    let client = SolveClient::new(base);
    let err = client.solve(&heat_payload()).await.unwrap_err();
    match err {
        ClientError::Remote { status, message } => {
            assert_eq!(status, 400);
            assert!(message.starts_with("Stability criterion not met"));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn failure_status_without_message_falls_back() {
    let base = serve_once("500 Internal Server Error", "not json at all");
    let client = SolveClient::new(base);
    let err = client.solve(&heat_payload()).await.unwrap_err();
    match err {
        ClientError::Remote { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to solve equation");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn unanswered_request_times_out() {
    let base = serve_hang(Duration::from_secs(3));
    let client = SolveClient::new(base).with_timeout(Duration::from_millis(200));
    let err = client.solve(&heat_payload()).await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    // Grab a port that nothing listens on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = SolveClient::new(format!("http://127.0.0.1:{port}"))
        .with_timeout(Duration::from_secs(5));
    let err = client.solve(&heat_payload()).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn health_probe_reads_status() {
    let base = serve_once(
        "200 OK",
        r#"{"status":"healthy","message":"API is running and all required modules are available"}"#,
    );
    let client = SolveClient::new(base);
    let health = client.health().await.unwrap();
    assert!(health.is_healthy());
}
