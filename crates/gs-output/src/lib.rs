//! `gs-output` — result table for the gossip convergence sweep.
//!
//! One [`ResultRecord`] per simulation run, serialized as a CSV table:
//!
//! ```text
//! ,n_servers,seeds,rounds
//! 0,100,False,9
//! 1,100,True,8
//! ```
//!
//! The leading unnamed column is a zero-based row index; `seeds` is written
//! as a `True`/`False` literal.  Writers implement [`ResultWriter`]; the CSV
//! backend is [`CsvWriter`], and [`read_records`] parses a table back.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gs_output::{CsvWriter, ResultWriter};
//!
//! let mut writer = CsvWriter::create(Path::new("data.csv"))?;
//! writer.write_records(&records)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;


pub use csv::{read_records, read_records_from, CsvWriter, TABLE_HEADER};
pub use error::{OutputError, OutputResult};
pub use row::ResultRecord;
pub use writer::ResultWriter;
