//! Helpers shared by the integration tests.

#![allow(dead_code)]

use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Writer that keeps everything in memory so console output can be inspected.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Decodes every line of a JSONL log file.
pub fn read_records(path: &Path) -> Vec<Value> {
    let content = fs::read_to_string(path).unwrap_or_default();
    content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// `(level, msg)` pairs in file order.
pub fn levels_and_messages(path: &Path) -> Vec<(String, String)> {
    read_records(path)
        .into_iter()
        .map(|record| {
            (
                record["level"].as_str().unwrap().to_string(),
                record["msg"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}
