//! End-to-end solve cycle against a canned local solver.

use cd_app::{run_solve, SolveClient, SolveRequest};
use cd_params::{ParameterSet, ProblemSelection};
use serde_json::json;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

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

/// Serve one request with a 200 JSON body.
fn serve_once(body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
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

#[tokio::test]
async fn cycle_projects_representative_snapshots() {
    let t: Vec<f64> = (0..20).map(|i| i as f64 * 0.05).collect();
    let u: Vec<Vec<f64>> = (0..20).map(|i| vec![0.0, i as f64, 0.0]).collect();
    let body = json!({
        "x": [0.0, 0.5, 1.0],
        "t": t.clone(),
        "u": u,
        "plots": {"animation": "QQ==", "individual": "Qg=="}
    })
    .to_string();

    let client = SolveClient::new(serve_once(body));
    let request = SolveRequest {
        selection: ProblemSelection::heat_1d(),
        params: ParameterSet::default(),
    };

    let outcome = run_solve(&client, &request).await.unwrap();
    assert_eq!(outcome.endpoint, "/api/heat-equation");
    assert_eq!(outcome.selected_times.len(), 5);
    assert_eq!(outcome.snapshots.len(), 5);

    // quartile positions of a 20-entry series
    let picked: Vec<f64> = [0, 5, 10, 15, 19].iter().map(|&i| t[i]).collect();
    assert_eq!(outcome.selected_times, picked);
    assert_eq!(outcome.snapshots[2].y, vec![0.0, 10.0, 0.0]);
    assert_eq!(outcome.snapshots[4].x, vec![0.0, 0.5, 1.0]);
}

#[tokio::test]
async fn cycle_without_raw_arrays_yields_no_snapshots() {
    let body = json!({"plots": {"mesh": "QQ==", "solution": "Qg=="}}).to_string();
    let client = SolveClient::new(serve_once(body));
    let request = SolveRequest {
        selection: ProblemSelection::heat_2d(),
        params: ParameterSet::default(),
    };

    let outcome = run_solve(&client, &request).await.unwrap();
    assert_eq!(outcome.endpoint, "/api/heat-equation-2d");
    assert!(outcome.selected_times.is_empty());
    assert!(outcome.snapshots.is_empty());
    assert_eq!(outcome.result.plots.unwrap().named().len(), 2);
}
