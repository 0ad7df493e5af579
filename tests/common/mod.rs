#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use ghstars::error::{GhStarsError, Result};
use ghstars::models::{Repository, StarPage, StarredEntry};
use ghstars::pager::StarSource;
use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

pub fn entry(full_name: &str, description: &str, language: &str, stars: u64) -> StarredEntry {
    StarredEntry {
        starred_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
        repo: Repository {
            name: full_name.rsplit('/').next().unwrap_or(full_name).to_string(),
            full_name: full_name.to_string(),
            description: Some(description.to_string()).filter(|d| !d.is_empty()),
            language: Some(language.to_string()).filter(|l| !l.is_empty()),
            stargazers_count: stars,
            pushed_at: Some(Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap()),
            html_url: format!("https://github.com/{}", full_name),
            ..Default::default()
        },
    }
}

/// In-memory starred listing split into fixed pages.
pub struct FakeStars {
    pages: Vec<Vec<StarredEntry>>,
    fail_on: Option<u32>,
    pub requested: RefCell<Vec<u32>>,
}

impl FakeStars {
    /// Builds pages of the given sizes, entries named `owner/repo-<n>` in order.
    pub fn with_page_sizes(sizes: &[usize]) -> Self {
        let mut n = 0;
        let pages = sizes
            .iter()
            .map(|&size| {
                (0..size)
                    .map(|_| {
                        n += 1;
                        entry(&format!("owner/repo-{}", n), "", "", 0)
                    })
                    .collect()
            })
            .collect();
        FakeStars {
            pages,
            fail_on: None,
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.fail_on = Some(page);
        self
    }
}

impl StarSource for FakeStars {
    async fn fetch_page(&self, page: u32) -> Result<StarPage> {
        self.requested.borrow_mut().push(page);
        if self.fail_on == Some(page) {
            return Err(GhStarsError::ApiError(format!("page {} exploded", page)));
        }

        let idx = page as usize - 1;
        let entries = self.pages.get(idx).cloned().unwrap_or_default();
        let next_page = (idx + 1 < self.pages.len()).then_some(page + 1);
        Ok(StarPage { entries, next_page })
    }
}

/// Build a raw HTTP/1.1 response that closes the connection after the body.
pub fn http_response(status: &str, headers: &[(&str, String)], body: &str) -> String {
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        body.len()
    );
    for (name, value) in headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str("\r\n");
    response.push_str(body);
    response
}

/// A `200 OK` page of entries, with a `rel="next"` link when `next_page` is set.
pub fn star_page_response(base_url: &str, entries: &[StarredEntry], next_page: Option<u32>) -> String {
    let body = serde_json::to_string(entries).unwrap();
    let headers: Vec<(&str, String)> = next_page
        .map(|page| {
            vec![(
                "Link",
                format!("<{}/user/starred?per_page=100&page={}>; rel=\"next\"", base_url, page),
            )]
        })
        .unwrap_or_default();
    http_response("200 OK", &headers, &body)
}

/// Local HTTP server answering one connection per canned response, in order.
pub struct CannedServer {
    listener: TcpListener,
    pub base_url: String,
}

impl CannedServer {
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        CannedServer { listener, base_url }
    }

    /// Serve `responses`; the handle yields each request's head as received.
    pub fn serve(self, responses: Vec<String>) -> JoinHandle<Vec<String>> {
        thread::spawn(move || {
            let mut requests = Vec::new();
            for response in responses {
                let (mut stream, _) = self.listener.accept().unwrap();
                requests.push(read_request_head(&mut stream));
                stream.write_all(response.as_bytes()).unwrap();
            }
            requests
        })
    }
}

fn read_request_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&head).into_owned()
}
