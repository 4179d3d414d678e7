//! Concurrent access to the same file name.

use std::sync::{Arc, Barrier};
use std::thread;

use minihttp::http::StatusCode;
use minihttp::storage::{DiskStore, MemoryStore};
use minihttp::Router;

mod common;

const POST: &[u8] =
    b"POST /files/race.txt HTTP/1.1\r\nContent-Type: application/x-www-form-urlencoded\r\n\r\npayload";

fn race(router: Router, contenders: usize) -> Vec<StatusCode> {
    let barrier = Arc::new(Barrier::new(contenders));
    let handles: Vec<_> = (0..contenders)
        .map(|_| {
            let router = router.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                router.respond(POST).status()
            })
        })
        .collect();

    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

fn assert_single_winner(statuses: &[StatusCode]) {
    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let rejected = statuses.iter().filter(|s| **s == StatusCode::BAD_REQUEST).count();
    assert_eq!(created, 1, "statuses: {:?}", statuses);
    assert_eq!(rejected, statuses.len() - 1, "statuses: {:?}", statuses);
}

#[test]
fn concurrent_creates_on_disk_have_one_winner() {
    let dir = tempfile::tempdir().unwrap();
    let router = Router::new(Arc::new(DiskStore::new(dir.path())));

    assert_single_winner(&race(router, 8));
    assert_eq!(std::fs::read(dir.path().join("race.txt")).unwrap(), b"payload");
}

#[test]
fn concurrent_creates_in_memory_have_one_winner() {
    let store = Arc::new(MemoryStore::new());
    let router = Router::new(store.clone());

    assert_single_winner(&race(router, 8));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn concurrent_connections_are_served_independently() {
    let dir = tempfile::tempdir().unwrap();
    let server = common::start_server(dir.path()).await;

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let addr = server.addr;
            tokio::spawn(async move {
                let raw = format!("GET /echo/msg{} HTTP/1.1\r\n\r\n", i);
                (i, common::request(addr, raw.as_bytes()).await)
            })
        })
        .collect();

    for task in tasks {
        let (i, res) = task.await.unwrap();
        assert_eq!(res.status_line, "HTTP/1.1 200 OK");
        assert_eq!(res.body_text(), format!("msg{}", i));
    }
}
