use crate::config::{AppState, Config};
use chrono::Local;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Text analysis server started");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    println!("CORS enabled: {}", config.http.enable_cors);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("  - GET  http://{addr}/         (liveness)");
    println!("  - POST http://{addr}/analyze  (text analysis)");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

/// One access-log line per handled request.
pub fn log_route(method: &str, path: &str, status: u16, state: &AppState) {
    if state.config.logging.access_log {
        let time = Local::now().format("%d/%b/%Y:%H:%M:%S %z");
        println!("[{time}] {method} {path} - {status}");
    }
}

pub fn log_warning(message: &str) {
    eprintln!("[Warn] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[Error] {message}");
}
