use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::betting::Street;
use crate::cards::Card;
use crate::rules::ValidatedAction;

/// One resolved action in a hand's history: which seat, on which
/// street, and what it did after validation (so all-ins and converted
/// short calls are recorded as what actually happened).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub street: Street,
    pub action: ValidatedAction,
}

/// Showdown details for hands that reach one.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats that won the pot (more than one on a split)
    pub winners: Vec<usize>,
    /// Optional notes (e.g. "split pot", "flush over straight")
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of one hand, serialized as a single JSONL line for
/// hand-history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed used for the shuffle (enables deterministic replay)
    pub seed: Option<u64>,
    /// Chronological list of every seat's actions
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board (up to 5)
    pub board: Vec<Card>,
    /// Final pot size in chips
    pub pot: u32,
    /// Winning seats
    pub winners: Vec<usize>,
    /// Human-readable result summary
    pub result: Option<String>,
    /// Timestamp when the hand finished (RFC3339)
    #[serde(default)]
    pub ts: Option<String>,
    /// Showdown information, absent when everyone else folded
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`HandRecord`]s to a JSONL file, one line per hand, flushed
/// after every write. File-less loggers (for tests) still hand out ids.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
