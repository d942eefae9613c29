//! CSV output backend.
//!
//! Writes a single table with header `,n_servers,seeds,rounds`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{Reader, StringRecord, Writer};

use crate::writer::ResultWriter;
use crate::{OutputError, OutputResult, ResultRecord};

/// Header row; the first (unnamed) column holds the row index.
pub const TABLE_HEADER: [&str; 4] = ["", "n_servers", "seeds", "rounds"];

fn bool_literal(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

fn parse_bool_literal(s: &str) -> Option<bool> {
    match s {
        "True" | "true" => Some(true),
        "False" | "false" => Some(false),
        _ => None,
    }
}

// ── Writer ────────────────────────────────────────────────────────────────────

/// Writes result records to a CSV table, numbering rows from 0.
pub struct CsvWriter<W: Write = File> {
    table:    Writer<W>,
    next_row: u64,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the table at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any `Write` sink and write the header row.
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        let mut table = Writer::from_writer(sink);
        table.write_record(TABLE_HEADER)?;
        Ok(Self {
            table,
            next_row: 0,
            finished: false,
        })
    }

    /// Number of data rows written so far.
    pub fn rows_written(&self) -> u64 {
        self.next_row
    }

    /// Flush and return the inner sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.table
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> ResultWriter for CsvWriter<W> {
    fn write_records(&mut self, rows: &[ResultRecord]) -> OutputResult<()> {
        for row in rows {
            self.table.write_record([
                self.next_row.to_string().as_str(),
                row.n_servers.to_string().as_str(),
                bool_literal(row.seeds),
                row.rounds.to_string().as_str(),
            ])?;
            self.next_row += 1;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.table.flush()?;
        Ok(())
    }
}

// ── Reader ────────────────────────────────────────────────────────────────────

/// Parse a result table written by [`CsvWriter`] from `path`.
pub fn read_records(path: &Path) -> OutputResult<Vec<ResultRecord>> {
    read_records_from(File::open(path)?)
}

/// Parse a result table from any reader.
///
/// The header must match [`TABLE_HEADER`] and the index column must count
/// up from 0.
pub fn read_records_from<R: Read>(source: R) -> OutputResult<Vec<ResultRecord>> {
    let mut rdr = Reader::from_reader(source);

    let headers = rdr.headers()?.clone();
    if headers.iter().ne(TABLE_HEADER) {
        return Err(OutputError::Parse {
            line:    1,
            message: format!("unexpected header {:?}", headers.iter().collect::<Vec<_>>()),
        });
    }

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = result?;
        let line = row.position().map_or(i as u64 + 2, |p| p.line());
        records.push(parse_row(&row, i as u64, line)?);
    }
    Ok(records)
}

fn parse_row(row: &StringRecord, expected_index: u64, line: u64) -> OutputResult<ResultRecord> {
    let parse_err = |message: String| OutputError::Parse { line, message };

    if row.len() != TABLE_HEADER.len() {
        return Err(parse_err(format!("expected {} fields, got {}", TABLE_HEADER.len(), row.len())));
    }

    let index: u64 = row[0]
        .parse()
        .map_err(|_| parse_err(format!("bad row index {:?}", &row[0])))?;
    if index != expected_index {
        return Err(parse_err(format!("row index {index}, expected {expected_index}")));
    }

    let n_servers = row[1]
        .parse()
        .map_err(|_| parse_err(format!("bad n_servers {:?}", &row[1])))?;
    let seeds = parse_bool_literal(&row[2])
        .ok_or_else(|| parse_err(format!("bad seeds literal {:?}", &row[2])))?;
    let rounds = row[3]
        .parse()
        .map_err(|_| parse_err(format!("bad rounds {:?}", &row[3])))?;

    Ok(ResultRecord { n_servers, seeds, rounds })
}
