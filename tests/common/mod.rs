#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use skim_request_machine::{HttpConnector, RequestTarget};

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub request_line: String,
    pub ldate: Option<String>,
    pub datamart: Option<String>,
}

/// Minimal keep-alive HTTP/1.1 responder answering with scripted statuses.
pub struct ExtractorStub {
    pub address: String,
    connections: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<SeenRequest>>>,
}

impl ExtractorStub {
    pub fn start(statuses: Vec<u16>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap().to_string();
        let connections = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let statuses = Arc::new(Mutex::new(statuses.into_iter()));

        let (conn_count, seen) = (connections.clone(), requests.clone());
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                conn_count.fetch_add(1, Ordering::SeqCst);
                let (seen, statuses) = (seen.clone(), statuses.clone());
                thread::spawn(move || serve(stream, &seen, &statuses));
            }
        });

        Self {
            address,
            connections,
            requests,
        }
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn serve(
    stream: TcpStream,
    seen: &Mutex<Vec<SeenRequest>>,
    statuses: &Mutex<std::vec::IntoIter<u16>>,
) {
    let mut writer = stream.try_clone().unwrap();
    let mut reader = BufReader::new(stream);

    loop {
        let mut request_line = String::new();
        match reader.read_line(&mut request_line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let mut request = SeenRequest {
            request_line: request_line.trim_end().to_string(),
            ldate: None,
            datamart: None,
        };
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 {
                return;
            }
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                match name.trim().to_ascii_lowercase().as_str() {
                    "ldate" => request.ldate = Some(value.trim().to_string()),
                    "datamart" => request.datamart = Some(value.trim().to_string()),
                    _ => {}
                }
            }
        }

        let body = format!("extracted {}", request.ldate.clone().unwrap_or_default());
        seen.lock().unwrap().push(request);

        let status = statuses.lock().unwrap().next().unwrap_or(200);
        let response = format!(
            "HTTP/1.1 {} Scripted\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        if writer.write_all(response.as_bytes()).is_err() {
            return;
        }
    }
}

pub fn connector() -> HttpConnector {
    HttpConnector::new(Duration::from_secs(10))
}

pub fn target(address: &str, dates: &[&str]) -> RequestTarget {
    RequestTarget::new(
        address,
        "datamart_c",
        dates.iter().map(|d| d.to_string()).collect(),
    )
}
