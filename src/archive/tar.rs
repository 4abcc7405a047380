// src/archive/tar.rs

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use super::{ArchiveError, ArchiveMember, ArchiveSource};

const BLOCK_SIZE: usize = 512;

/// Streaming reader over a tar archive's headers.
///
/// Member contents are skipped, never buffered. Supports ustar prefixes,
/// GNU long names and pax `path` records.
pub struct TarArchive<R> {
    reader: R,
    offset: u64,
    finished: bool,
    compressed: bool,
}

impl TarArchive<Box<dyn Read>> {
    /// Open an archive file, decompressing gzip transparently.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ArchiveError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Wrap any reader, sniffing the gzip magic bytes first.
    pub fn from_reader<R: Read + 'static>(reader: R) -> Result<Self, ArchiveError> {
        let mut buffered = BufReader::new(reader);
        let compressed = is_gzip(buffered.fill_buf()?);
        let reader: Box<dyn Read> = if compressed {
            Box::new(GzDecoder::new(buffered))
        } else {
            Box::new(buffered)
        };
        let mut archive = TarArchive::new(reader);
        archive.compressed = compressed;
        Ok(archive)
    }
}

impl<R: Read> TarArchive<R> {
    /// Read an uncompressed tar stream.
    pub fn new(reader: R) -> Self {
        Self { reader, offset: 0, finished: false, compressed: false }
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    fn read_err(&self, e: io::Error) -> ArchiveError {
        if self.compressed && e.kind() != io::ErrorKind::UnexpectedEof {
            ArchiveError::Decompress(e)
        } else {
            ArchiveError::Io(e)
        }
    }

    /// Fill `block`; `Ok(false)` on a clean end of stream before any byte.
    fn read_block(&mut self, block: &mut [u8; BLOCK_SIZE], context: &str) -> Result<bool, ArchiveError> {
        let mut filled = 0;
        while filled < BLOCK_SIZE {
            match self.reader.read(&mut block[filled..]) {
                Ok(0) if filled == 0 => return Ok(false),
                Ok(0) => {
                    return Err(ArchiveError::Truncated { path: context.to_string() });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(self.read_err(e)),
            }
        }
        self.offset += BLOCK_SIZE as u64;
        Ok(true)
    }

    /// Read a member's data plus its block padding.
    fn read_data(&mut self, size: u64, path: &str) -> Result<Vec<u8>, ArchiveError> {
        let mut data = Vec::new();
        let result = (&mut self.reader).take(size).read_to_end(&mut data);
        let copied = result.map_err(|e| self.read_err(e))?;
        if (copied as u64) < size {
            return Err(ArchiveError::Truncated { path: path.to_string() });
        }
        self.skip_padding(size)?;
        Ok(data)
    }

    /// Skip a member's data plus its block padding.
    fn skip_data(&mut self, size: u64, path: &str) -> Result<(), ArchiveError> {
        let result = io::copy(&mut (&mut self.reader).take(size), &mut io::sink());
        let skipped = result.map_err(|e| self.read_err(e))?;
        if skipped < size {
            return Err(ArchiveError::Truncated { path: path.to_string() });
        }
        self.skip_padding(size)
    }

    fn skip_padding(&mut self, size: u64) -> Result<(), ArchiveError> {
        let padding = padded_size(size) - size;
        // A missing tail of padding only matters if another header follows,
        // and the next read_block reports that.
        let result = io::copy(&mut (&mut self.reader).take(padding), &mut io::sink());
        result.map_err(|e| self.read_err(e))?;
        self.offset += padded_size(size);
        Ok(())
    }
}

impl<R: Read> ArchiveSource for TarArchive<R> {
    fn next_member(&mut self) -> Result<Option<ArchiveMember>, ArchiveError> {
        let mut long_name: Option<String> = None;

        loop {
            if self.finished {
                return Ok(None);
            }

            let header_offset = self.offset;
            let mut header = [0u8; BLOCK_SIZE];
            if !self.read_block(&mut header, "header")? || is_zero_block(&header) {
                // A zero block marks the end; the second one is optional.
                self.finished = true;
                return Ok(None);
            }

            if !verify_checksum(&header) {
                return Err(ArchiveError::InvalidHeader { offset: header_offset });
            }

            let header_path = header_path(&header);
            let size = read_number(&header, 124, 12);
            let type_flag = header[156];

            match type_flag {
                // GNU long name for the following header.
                b'L' => {
                    let data = self.read_data(size, &header_path)?;
                    long_name = Some(read_string(&data, 0, data.len()));
                }
                // pax extended header; only the path record matters here.
                b'x' | b'X' => {
                    let data = self.read_data(size, &header_path)?;
                    if let Some(path) = pax_path(&data) {
                        long_name = Some(path);
                    }
                }
                // pax global header and GNU long link name carry no member.
                b'g' | b'K' => self.skip_data(size, &header_path)?,
                _ => {
                    let path = long_name.take().unwrap_or(header_path);
                    let is_directory =
                        type_flag == b'5' || ((type_flag == 0 || type_flag == b'0') && path.ends_with('/'));
                    // Links and device nodes occupy no data blocks.
                    let data_size = match type_flag {
                        b'1' | b'2' | b'3' | b'4' | b'5' | b'6' => 0,
                        _ => size,
                    };
                    self.skip_data(data_size, &path)?;
                    log::trace!("tar member '{}' (dir: {})", path, is_directory);
                    return Ok(Some(ArchiveMember { path, is_directory }));
                }
            }
        }
    }
}

/// Check if data is gzip compressed (magic bytes 0x1f 0x8b).
pub fn is_gzip(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b
}

fn padded_size(size: u64) -> u64 {
    size.div_ceil(BLOCK_SIZE as u64) * BLOCK_SIZE as u64
}

/// Member path, joining the ustar prefix when the header is POSIX ustar.
fn header_path(header: &[u8; BLOCK_SIZE]) -> String {
    let name = read_string(header, 0, 100);
    // GNU headers ("ustar  \0") reuse the prefix area for other fields.
    if &header[257..263] != b"ustar\0" {
        return name;
    }
    let prefix = read_string(header, 345, 155);
    if prefix.is_empty() {
        name
    } else {
        format!("{}/{}", prefix, name)
    }
}

/// Read a null-terminated string from a fixed-size field.
fn read_string(data: &[u8], offset: usize, len: usize) -> String {
    let slice = &data[offset..offset + len];
    let end = slice.iter().position(|&b| b == 0).unwrap_or(len);
    String::from_utf8_lossy(&slice[..end]).to_string()
}

/// Read a numeric field: octal ASCII, or GNU base-256 when the high bit is set.
fn read_number(header: &[u8], offset: usize, len: usize) -> u64 {
    let field = &header[offset..offset + len];
    if field[0] & 0x80 != 0 {
        return field[1..]
            .iter()
            .fold(u64::from(field[0] & 0x7f), |acc, &b| (acc << 8) | u64::from(b));
    }
    let s = read_string(header, offset, len);
    let trimmed = s.trim_matches(|c: char| c == ' ' || c == '\0');
    if trimmed.is_empty() {
        return 0;
    }
    u64::from_str_radix(trimmed, 8).unwrap_or(0)
}

/// Check if a 512-byte block is all zeros (end-of-archive marker).
fn is_zero_block(block: &[u8]) -> bool {
    block.iter().all(|&b| b == 0)
}

/// Verify the stored header checksum.
///
/// The checksum field counts as spaces. Some old writers summed signed
/// bytes, so either sum is accepted.
fn verify_checksum(header: &[u8; BLOCK_SIZE]) -> bool {
    let stored = read_number(header, 148, 8) as i64;
    let mut unsigned: i64 = 0;
    let mut signed: i64 = 0;
    for (i, &byte) in header.iter().enumerate() {
        let b = if (148..156).contains(&i) { b' ' } else { byte };
        unsigned += i64::from(b);
        signed += i64::from(b as i8);
    }
    stored == unsigned || stored == signed
}

/// Extract the `path` record from pax extended header data.
///
/// Records have the form `"<len> <key>=<value>\n"`, `len` counting the
/// whole record.
fn pax_path(data: &[u8]) -> Option<String> {
    let mut rest = data;
    let mut path = None;
    while !rest.is_empty() {
        let space = rest.iter().position(|&b| b == b' ')?;
        let len: usize = std::str::from_utf8(&rest[..space]).ok()?.parse().ok()?;
        if len <= space || len > rest.len() {
            return path;
        }
        let record = &rest[space + 1..len];
        let record = record.strip_suffix(b"\n").unwrap_or(record);
        if let Some(value) = record.strip_prefix(b"path=") {
            path = Some(String::from_utf8_lossy(value).to_string());
        }
        rest = &rest[len..];
    }
    path
}
