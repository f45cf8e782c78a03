//! Fixtures shared by the integration test binaries.
#![allow(dead_code)]

use rusqlite::Connection;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;
use std::time::Duration;

use cities_to_sqlite::Config;

pub const HEADER: &str = "Geoname ID;Name;ASCII Name;Alternate Names;Feature Class;Feature Code;Country Code;Country name EN;Country Code 2;Admin1 Code;Admin2 Code;Admin3 Code;Admin4 Code;Population;Elevation;DIgital Elevation Model;Timezone;Modification date;LABEL EN;Coordinates";

pub fn city_line(id: u32, code: &str, country: &str, population: u64) -> String {
    format!(
        "{id};City {id};City {id};\"Alt {id},Alt;{id}\";P;PPL;{code};{country};;01;;;;{population};;12;Etc/UTC;2024-01-01;{country};1.0, 2.0"
    )
}

pub fn dataset_text(lines: &[String]) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Two cities in A (one a megapolis) and one in B
pub fn scenario_text() -> String {
    dataset_text(&[
        city_line(1, "A", "CountryA", 20_000_000),
        city_line(2, "A", "CountryA", 500),
        city_line(3, "B", "CountryB", 1000),
    ])
}

pub fn config_in(dir: &Path, url: String) -> Config {
    Config {
        url,
        database: dir.join("cities_database.db"),
        output: dir.join("countries_without_megapolis.tsv"),
        log_file: dir.join("cities.log"),
        timeout: Some(Duration::from_secs(10)),
    }
}

pub fn row_count(db: &Path) -> i64 {
    Connection::open(db)
        .unwrap()
        .query_row("SELECT COUNT(*) FROM cities", [], |row| row.get(0))
        .unwrap()
}

/// Answer a single HTTP request with the given status and body
pub fn serve_once(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind loopback listener");
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).ok();
        stream.flush().ok();
    });

    format!("http://{addr}/cities.csv")
}
