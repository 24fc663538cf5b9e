//! Append-only JSON-lines journal of quest events.
//!
//! One line per event:
//!
//! ```text
//! {"seq":3,"ts":1760000000000,"step":1,"action":"moveUp","type":"discovered","tag":"CUSP","shard":17}
//! ```
//!
//! The journal is opened before the terminal enters raw mode. While playing,
//! write failures are stored instead of interrupting the game; the first one
//! is reported on stderr after the terminal is restored.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::QuestEvent;
use crate::types::GameAction;

/// Serialized form of a [`QuestEvent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JournalEvent {
    Discovered {
        tag: &'static str,
        shard: u8,
    },
    Announced {
        shard: u8,
    },
    Teleported {
        shard: u8,
    },
    GeometryChanged {
        mode: &'static str,
    },
    Info {
        shard: u8,
    },
    StateUpdated {
        x: i64,
        y: i64,
        shard: u8,
        distance: f64,
        #[serde(rename = "bearingDegrees")]
        bearing_degrees: f64,
    },
}

impl From<&QuestEvent> for JournalEvent {
    fn from(event: &QuestEvent) -> Self {
        match *event {
            QuestEvent::Discovered { tag, shard } => JournalEvent::Discovered {
                tag: tag.as_str(),
                shard: shard.index(),
            },
            QuestEvent::Announced { shard } => JournalEvent::Announced {
                shard: shard.index(),
            },
            QuestEvent::Teleported { shard } => JournalEvent::Teleported {
                shard: shard.index(),
            },
            QuestEvent::GeometryChanged { mode } => JournalEvent::GeometryChanged {
                mode: mode.label(),
            },
            QuestEvent::Info { shard } => JournalEvent::Info {
                shard: shard.index(),
            },
            QuestEvent::StateUpdated(update) => JournalEvent::StateUpdated {
                x: update.position.x,
                y: update.position.y,
                shard: update.shard.index(),
                distance: update.distance,
                bearing_degrees: update.bearing_degrees,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalRecord {
    pub seq: u64,
    /// Milliseconds since the Unix epoch.
    pub ts: u64,
    pub step: u64,
    pub action: &'static str,
    #[serde(flatten)]
    pub event: JournalEvent,
}

pub struct Journal<W: Write = BufWriter<File>> {
    writer: W,
    seq: u64,
    buf: Vec<u8>,
    failure: Option<anyhow::Error>,
}

impl Journal<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening journal {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            seq: 0,
            buf: Vec::with_capacity(256),
            failure: None,
        }
    }

    /// Number of records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Append one line per event and flush.
    pub fn record(&mut self, step: u64, action: GameAction, events: &[QuestEvent]) -> Result<()> {
        let ts = now_ms();
        for event in events {
            self.seq += 1;
            let record = JournalRecord {
                seq: self.seq,
                ts,
                step,
                action: action.as_str(),
                event: JournalEvent::from(event),
            };
            self.buf.clear();
            serde_json::to_writer(&mut self.buf, &record)?;
            self.buf.push(b'\n');
            self.writer.write_all(&self.buf)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Like [`Journal::record`], but keeps the first failure and stops writing.
    pub fn record_best_effort(&mut self, step: u64, action: GameAction, events: &[QuestEvent]) {
        if self.failure.is_some() {
            return;
        }
        if let Err(err) = self.record(step, action, events) {
            self.failure = Some(err);
        }
    }

    pub fn failure(&self) -> Option<&anyhow::Error> {
        self.failure.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
