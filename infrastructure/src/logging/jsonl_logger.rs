//! JSONL file writer for conversation events.
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying `type`,
//! `timestamp` and a per-logger `seq`, merged with the event payload.
//! Files are opened in append mode so consecutive runs share one transcript.

use hospital_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

struct LogState {
    writer: BufWriter<File>,
    seq: u64,
}

/// Append-only JSONL conversation logger.
///
/// Thread-safe via a `Mutex`; every line is flushed as soon as it is written.
pub struct JsonlConversationLogger {
    state: Mutex<LogState>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating it and its parent directories.
    ///
    /// Returns `None` (after a warning) when the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create conversation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not open conversation log {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            state: Mutex::new(LogState {
                writer: BufWriter::new(file),
                seq: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn record(event: ConversationEvent, seq: u64) -> Value {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    let mut map = match event.payload {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    map.insert("type".to_string(), Value::String(event.event_type.to_string()));
    map.insert("timestamp".to_string(), Value::String(timestamp));
    map.insert("seq".to_string(), Value::from(seq));
    Value::Object(map)
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        state.seq += 1;
        let seq = state.seq;

        let Ok(line) = serde_json::to_string(&record(event, seq)) else {
            return;
        };
        let _ = writeln!(state.writer, "{}", line);
        let _ = state.writer.flush();
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            let _ = state.writer.flush();
        }
    }
}
