//! End-to-end tests over real TCP connections.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

mod common;

use common::{request, send_raw, start_server, start_server_with, test_config};

#[tokio::test]
async fn test_echo() {
    let dir = tempfile::tempdir().unwrap();
    let server = start_server(dir.path()).await;

    let res = request(server.addr, b"GET /echo/foo HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    assert_eq!(res.status_line, "HTTP/1.1 200 OK");
    assert_eq!(res.header("Content-Type"), Some("text/plain"));
    assert_eq!(res.header("Content-Length"), Some("3"));
    assert_eq!(res.body, b"foo");
}

#[tokio::test]
async fn test_user_agent() {
    let dir = tempfile::tempdir().unwrap();
    let server = start_server(dir.path()).await;

    let res = request(
        server.addr,
        b"GET /user-agent HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test-client/1.0\r\n\r\n",
    )
    .await;
    assert_eq!(res.status_line, "HTTP/1.1 200 OK");
    assert_eq!(res.header("Content-Type"), Some("text/plain"));
    assert_eq!(res.header("Content-Length"), Some("15"));
    assert_eq!(res.body_text(), "test-client/1.0");

    let res = request(server.addr, b"GET /user-agent HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    assert_eq!(res.status_line, "HTTP/1.1 400 BAD REQUEST");
    assert_eq!(res.header("Content-Type"), Some("text/plain"));
    assert_eq!(res.header("Content-Length"), Some(res.body.len().to_string().as_str()));
    assert!(res.body_text().contains("User-Agent"));
}

#[tokio::test]
async fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let server = start_server(dir.path()).await;

    let res = request(server.addr, b"GET /files/missing.txt HTTP/1.1\r\n\r\n").await;
    assert_eq!(res.status_line, "HTTP/1.1 400 BAD REQUEST");
    assert_eq!(res.header("Content-Type"), Some("text/plain"));
    assert_eq!(res.header("Content-Length"), Some(res.body.len().to_string().as_str()));
    assert!(res.body_text().contains("missing.txt"));
}

#[tokio::test]
async fn test_post_then_get_file() {
    let dir = tempfile::tempdir().unwrap();
    let server = start_server(dir.path()).await;

    let post = request(
        server.addr,
        b"POST /files/new.txt HTTP/1.1\r\nContent-Type: application/x-www-form-urlencoded\r\nContent-Length: 5\r\n\r\nhello",
    )
    .await;
    assert_eq!(post.status_line, "HTTP/1.1 201 CREATED");
    assert_eq!(post.header("Content-Length"), Some("0"));
    assert!(post.body.is_empty());
    assert_eq!(std::fs::read(dir.path().join("new.txt")).unwrap(), b"hello");

    let get = request(server.addr, b"GET /files/new.txt HTTP/1.1\r\n\r\n").await;
    assert_eq!(get.status_line, "HTTP/1.1 200 OK");
    assert_eq!(get.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(get.header("Content-Length"), Some("5"));
    assert_eq!(get.body, b"hello");
}

#[tokio::test]
async fn test_duplicate_post() {
    let dir = tempfile::tempdir().unwrap();
    let server = start_server(dir.path()).await;
    let raw = b"POST /files/dup.txt HTTP/1.1\r\nContent-Type: application/x-www-form-urlencoded\r\n\r\nabc";

    let first = request(server.addr, raw).await;
    assert_eq!(first.status_line, "HTTP/1.1 201 CREATED");

    let second = request(server.addr, raw).await;
    assert_eq!(second.status_line, "HTTP/1.1 400 BAD REQUEST");
    assert!(second.body_text().contains("dup.txt"));
    assert!(second.body_text().contains("already exists"));
}

#[tokio::test]
async fn test_text_body_cannot_create_file() {
    let dir = tempfile::tempdir().unwrap();
    let server = start_server(dir.path()).await;

    let res = request(
        server.addr,
        b"POST /files/t.txt HTTP/1.1\r\nContent-Type: text/plain\r\n\r\nhello",
    )
    .await;
    assert_eq!(res.status_line, "HTTP/1.1 400 BAD REQUEST");
    assert_eq!(res.header("Content-Type"), Some("text/plain"));
    assert_eq!(res.header("Content-Length"), Some(res.body.len().to_string().as_str()));
    assert!(res.body_text().contains("wrong format"));
    assert!(!dir.path().join("t.txt").exists());
}

#[tokio::test]
async fn test_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let server = start_server(dir.path()).await;

    let raw = send_raw(server.addr, b"PUT /elsewhere HTTP/1.1\r\n\r\n").await;
    assert_eq!(raw, b"HTTP/1.1 404 NOT FOUND\r\nContent-Length: 0\r\n\r\n".to_vec());
}

#[tokio::test]
async fn test_malformed_request_line() {
    let dir = tempfile::tempdir().unwrap();
    let server = start_server(dir.path()).await;

    let res = request(server.addr, b"GET /echo/foo\r\nHost: localhost\r\n\r\n").await;
    assert_eq!(res.status_line, "HTTP/1.1 400 BAD REQUEST");
    assert_eq!(res.header("Content-Type"), Some("text/plain"));
    assert!(res.body_text().starts_with("Error: "));
    assert_eq!(
        res.header("Content-Length"),
        Some(res.body.len().to_string().as_str())
    );
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("data.bin"), [0u8, 1, 2, 255, 254, 13, 10]).unwrap();
    let server = start_server(dir.path()).await;

    let first = send_raw(server.addr, b"GET /files/data.bin HTTP/1.1\r\n\r\n").await;
    let second = send_raw(server.addr, b"GET /files/data.bin HTTP/1.1\r\n\r\n").await;
    assert_eq!(first, second);
    assert!(first.ends_with(&[0u8, 1, 2, 255, 254, 13, 10]));
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let server = start_server(dir.path()).await;

    let res = request(server.addr, b"GET /echo/bye HTTP/1.1\r\n\r\n").await;
    assert_eq!(res.body, b"bye");

    server.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop");
    assert!(result.unwrap().is_ok());
}

#[tokio::test]
async fn test_shutdown_abandons_idle_client_after_deadline() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.listener.shutdown_timeout_secs = 1;
    let server = start_server_with(config).await;

    // connected but silent: its task blocks on the read forever
    let _idle = TcpStream::connect(server.addr).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    server.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server kept waiting on the idle client");
    assert!(result.unwrap().is_ok());
}

#[tokio::test]
async fn test_empty_request_gets_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let server = start_server(dir.path()).await;

    let mut stream = TcpStream::connect(server.addr).await.unwrap();
    stream.shutdown().await.unwrap();

    let mut out = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut out))
        .await
        .expect("server did not answer")
        .unwrap();
    assert!(out.starts_with(b"HTTP/1.1 400 BAD REQUEST\r\n"));
}
