#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

pub fn wfc() -> Command {
    cargo_bin_cmd!("wfclock")
}

/// Fresh HOME directory so config and credentials never leak between tests.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_wfclock_home"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Create a unique audit DB path inside the temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_wfclock.sqlite"));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a credentials file as `wfclock login` would.
pub fn write_credentials(home: &PathBuf, token: &str) -> PathBuf {
    let dir = home.join(".wfclock");
    fs::create_dir_all(&dir).expect("create config dir");
    let file = dir.join("credentials.yml");
    fs::write(&file, format!("access_token: {token}\n")).expect("write credentials");
    file
}

/// Command wired to a temp HOME, a temp audit DB and the given backend.
pub fn wfc_at(home: &PathBuf, db: &str, api: &str) -> Command {
    let mut cmd = wfc();
    cmd.env("HOME", home)
        .env_remove("RUST_LOG")
        .args(["--db", db, "--api", api]);
    cmd
}

#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

type Reply = (u16, String);

/// Scripted HTTP backend on a loopback port.
///
/// Each `METHOD path` key answers with its queue of replies in order; the
/// last reply repeats. Unknown routes answer 404.
pub struct StubServer {
    pub base: String,
    requests: Arc<Mutex<Vec<Captured>>>,
}

impl StubServer {
    pub fn start(routes: Vec<(&str, Vec<Reply>)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let mut table: HashMap<String, Vec<Reply>> = routes
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                handle(stream, &mut table, &seen);
            }
        });

        Self {
            base: format!("http://{addr}/api"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.requests.lock().expect("lock").clone()
    }

    pub fn writes(&self) -> Vec<Captured> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "POST")
            .collect()
    }
}

fn handle(stream: TcpStream, table: &mut HashMap<String, Vec<Reply>>, seen: &Mutex<Vec<Captured>>) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();
    let path = target.split('?').next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut authorization = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).is_err() || line.trim().is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.trim().parse().unwrap_or(0),
                "authorization" => authorization = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok();

    seen.lock().expect("lock").push(Captured {
        method: method.clone(),
        path: target.clone(),
        authorization,
        body: String::from_utf8_lossy(&body).to_string(),
    });

    let key = format!("{method} {path}");
    let (status, payload) = match table.get_mut(&key) {
        Some(queue) if queue.len() > 1 => queue.remove(0),
        Some(queue) if !queue.is_empty() => queue[0].clone(),
        _ => (404, r#"{"error":"not found"}"#.to_string()),
    };

    let response = format!(
        "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
        payload.len()
    );
    let mut stream = stream;
    stream.write_all(response.as_bytes()).ok();
    stream.flush().ok();
}

/// Reply helper: 200 with a JSON body.
pub fn ok(body: &str) -> Reply {
    (200, body.to_string())
}

/// Address nothing listens on.
pub fn unreachable_api() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}/api")
}
