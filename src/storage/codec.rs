//! CSV codec for the ticket data file
//!
//! The file has one header row followed by positional data rows:
//!
//! ```text
//! Ticket ID,Type,Date,Product,Setnumber
//! 1,Auto,2024-01-01,X,"1, 2, 3, 4, 5, 6"
//! ```

use crate::core::{KindTag, Ticket};
use crate::error::{LottoTicketError, Result};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::io::{Read, Write};

/// Header row written at the top of every data file
pub const HEADER: [&str; 5] = ["Ticket ID", "Type", "Date", "Product", "Setnumber"];

/// Column holding the variant tag
const TYPE_COLUMN: usize = 1;

/// Outcome of decoding one data row
#[derive(Debug)]
pub enum DecodedRow {
    Ticket { line: u64, ticket: Ticket },
    /// Row of a variant this build does not know about
    Unsupported { line: u64, tag: String },
}

/// Write the header and every ticket, returning the number of tickets written
pub fn write_tickets<'a, W, I>(writer: W, tickets: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Ticket>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    let mut written = 0;
    for ticket in tickets {
        writer.write_record(ticket.serialize())?;
        written += 1;
    }
    writer.flush()?;

    Ok(written)
}

/// Reader that skips the header and tolerates rows of any width
pub fn reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source)
}

/// Decode one row, dispatching on its `Type` column
pub fn decode_row(record: &StringRecord) -> Result<DecodedRow> {
    let line = record.position().map_or(0, csv::Position::line);

    let Some(tag) = record.get(TYPE_COLUMN) else {
        return Err(LottoTicketError::malformed(line, "missing Type column"));
    };
    let Ok(kind) = tag.parse::<KindTag>() else {
        return Ok(DecodedRow::Unsupported {
            line,
            tag: tag.to_string(),
        });
    };

    let fields: Vec<&str> = record.iter().collect();
    Ticket::deserialize(kind, &fields)
        .map(|ticket| DecodedRow::Ticket { line, ticket })
        .map_err(|e| with_line(e, line))
}

/// Convert a CSV read error into a malformed-row error
///
/// I/O failures while reading stay I/O errors.
pub fn read_error(err: csv::Error) -> LottoTicketError {
    let line = err.position().map_or(0, csv::Position::line);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LottoTicketError::Io(source),
        _ => LottoTicketError::malformed(line, reason),
    }
}

fn with_line(err: LottoTicketError, line: u64) -> LottoTicketError {
    match err {
        LottoTicketError::MalformedRecord { reason, .. } => {
            LottoTicketError::MalformedRecord { line, reason }
        },
        other => other,
    }
}
