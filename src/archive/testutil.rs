//! In-memory tar fixtures for tests.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

const BLOCK_SIZE: usize = 512;

/// Builds ustar archives entry by entry.
#[derive(Default)]
pub struct TarBuilder {
    bytes: Vec<u8>,
}

impl TarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(self, path: &str, content: &[u8]) -> Self {
        self.raw(path, b'0', content)
    }

    pub fn dir(self, path: &str) -> Self {
        let path = if path.ends_with('/') { path.to_string() } else { format!("{}/", path) };
        self.raw(&path, b'5', &[])
    }

    pub fn symlink(mut self, path: &str, target: &str) -> Self {
        let mut header = build_header(path, b'2', 0);
        write_string(&mut header, 157, 100, target);
        seal(&mut header);
        self.bytes.extend_from_slice(&header);
        self
    }

    /// Append an entry with an arbitrary type flag.
    pub fn raw(mut self, path: &str, type_flag: u8, content: &[u8]) -> Self {
        let mut header = build_header(path, type_flag, content.len() as u64);
        seal(&mut header);
        self.bytes.extend_from_slice(&header);
        push_padded(&mut self.bytes, content);
        self
    }

    /// Append the end-of-archive marker.
    pub fn finish(mut self) -> Vec<u8> {
        self.bytes.extend(std::iter::repeat(0u8).take(BLOCK_SIZE * 2));
        self.bytes
    }
}

/// A GNU `././@LongLink` record naming the next header.
pub fn gnu_long_name(name: &str) -> Vec<u8> {
    let mut data = name.as_bytes().to_vec();
    data.push(0);
    let mut header = build_header("././@LongLink", b'L', data.len() as u64);
    header[257..265].copy_from_slice(b"ustar  \0");
    seal(&mut header);
    let mut bytes = header.to_vec();
    push_padded(&mut bytes, &data);
    bytes
}

/// A pax extended header carrying a `path` record for the next header.
pub fn pax_entry(path: &str) -> Vec<u8> {
    let body = format!(" path={}\n", path);
    // The length prefix counts its own digits.
    let mut len = body.len() + 1;
    while format!("{}{}", len, body).len() != len {
        len += 1;
    }
    let record = format!("{}{}", len, body);
    let mut header = build_header("PaxHeader/entry", b'x', record.len() as u64);
    seal(&mut header);
    let mut bytes = header.to_vec();
    push_padded(&mut bytes, record.as_bytes());
    bytes
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

fn push_padded(bytes: &mut Vec<u8>, content: &[u8]) {
    bytes.extend_from_slice(content);
    let remainder = content.len() % BLOCK_SIZE;
    if remainder != 0 {
        bytes.extend(std::iter::repeat(0u8).take(BLOCK_SIZE - remainder));
    }
}

fn build_header(path: &str, type_flag: u8, size: u64) -> [u8; BLOCK_SIZE] {
    let mut header = [0u8; BLOCK_SIZE];
    let (prefix, name) = split_path(path);
    write_string(&mut header, 0, 100, &name);
    write_octal(&mut header, 100, 8, if type_flag == b'5' { 0o755 } else { 0o644 });
    write_octal(&mut header, 108, 8, 0);
    write_octal(&mut header, 116, 8, 0);
    write_octal(&mut header, 124, 12, size);
    write_octal(&mut header, 136, 12, 1_700_000_000);
    header[156] = type_flag;
    header[257..263].copy_from_slice(b"ustar\0");
    header[263..265].copy_from_slice(b"00");
    write_string(&mut header, 265, 32, "root");
    write_string(&mut header, 297, 32, "root");
    write_string(&mut header, 345, 155, &prefix);
    header
}

/// Compute and store the checksum.
fn seal(header: &mut [u8; BLOCK_SIZE]) {
    header[148..156].copy_from_slice(b"        ");
    let sum: u32 = header.iter().map(|&b| u32::from(b)).sum();
    let cksum = format!("{:06o}\0 ", sum);
    header[148..156].copy_from_slice(&cksum.as_bytes()[..8]);
}

fn write_string(header: &mut [u8], offset: usize, len: usize, s: &str) {
    let bytes = s.as_bytes();
    let copy_len = bytes.len().min(len);
    header[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
}

fn write_octal(header: &mut [u8], offset: usize, len: usize, value: u64) {
    let s = format!("{:0>width$o}", value, width = len - 1);
    header[offset..offset + len - 1].copy_from_slice(s.as_bytes());
    header[offset + len - 1] = 0;
}

/// Split a path into ustar (prefix, name), name at most 100 bytes.
fn split_path(path: &str) -> (String, String) {
    if path.len() <= 100 {
        return (String::new(), path.to_string());
    }
    for (i, c) in path.char_indices() {
        if c == '/' && i <= 155 && path.len() - i - 1 <= 100 {
            return (path[..i].to_string(), path[i + 1..].to_string());
        }
    }
    (String::new(), path[..100].to_string())
}
