use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// A one-route HTTP server on an ephemeral port that answers every GET with the same
/// status and body.
pub struct Upstream {
    port: u16,
}

impl Upstream {
    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }
}

pub fn start_upstream(status: u16, reason: &'static str, body: String) -> Upstream {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind upstream");
    let port = listener.local_addr().expect("no local addr").port();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else {
                continue;
            };
            respond(stream, status, reason, &body);
        }
    });

    Upstream { port }
}

/// Like [`start_upstream`], but sends only `head` of a longer body and then goes
/// quiet for `stall` before closing the connection.
pub fn start_stalling_upstream(head: String, stall: Duration) -> Upstream {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind upstream");
    let port = listener.local_addr().expect("no local addr").port();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else {
                continue;
            };
            drain_request(&stream);

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\n\r\n{head}",
                head.len() * 2
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
            thread::sleep(stall);
        }
    });

    Upstream { port }
}

fn respond(mut stream: TcpStream, status: u16, reason: &str, body: &str) {
    drain_request(&stream);

    let head = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}

// Read the request head so the client sees a clean response.
fn drain_request(stream: &TcpStream) {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    while reader.read_line(&mut line).is_ok_and(|n| n > 0) {
        if line == "\r\n" {
            break;
        }
        line.clear();
    }
}
