//! Event export conversion.
//!
//! Turns a CSV export of chain events into a JSON object mapping each
//! event id (column 2) to its description (column 3). The header row is
//! skipped. Ids are parsed as integers and written back as JSON keys, so
//! `007` and `7` are the same event; a later row with the same id replaces
//! the earlier value but keeps its position.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::{Result, SetupError};

const ID_COLUMN: usize = 2;
const DESCRIPTION_COLUMN: usize = 3;

/// Build the id -> description map from a CSV export
pub fn convert_events<R: Read>(reader: R) -> Result<Map<String, Value>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut events = Map::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        let (Some(id), Some(description)) = (record.get(ID_COLUMN), record.get(DESCRIPTION_COLUMN))
        else {
            return Err(SetupError::InvalidEventRow {
                line,
                reason: format!("expected at least 4 columns, found {}", record.len()),
            });
        };

        let id: i64 = id.trim().parse().map_err(|e| SetupError::InvalidEventRow {
            line,
            reason: format!("event id '{}' is not an integer: {}", id, e),
        })?;
        events.insert(id.to_string(), Value::String(description.to_string()));
    }

    Ok(events)
}

/// Write the event map as JSON with a 4-space indent
pub fn write_events_json<W: Write>(writer: W, events: &Map<String, Value>) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    events.serialize(&mut serializer)
}

/// Convert `input` (CSV) into `output` (JSON); returns the number of events written
pub fn convert_events_file(input: &Path, output: &Path) -> Result<usize> {
    let file = File::open(input).map_err(|e| SetupError::io(input, e))?;
    let events = convert_events(BufReader::new(file))?;
    debug!("Parsed {} events from {:?}", events.len(), input);

    let file = File::create(output).map_err(|e| SetupError::io(output, e))?;
    let mut writer = BufWriter::new(file);
    write_events_json(&mut writer, &events).map_err(|source| SetupError::Json {
        path: output.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| SetupError::io(output, e))?;

    Ok(events.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_basic() {
        let csv = "provider,channel,event_id,description\nh1,t1,1,A\nh2,t2,2,B\n";
        let events = convert_events(csv.as_bytes()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events["1"], Value::String("A".to_string()));
        assert_eq!(events["2"], Value::String("B".to_string()));
    }

    #[test]
    fn test_later_duplicate_overwrites_in_place() {
        let csv = "a,b,id,desc\nx,y,5,first\nx,y,3,other\nx,y,005,second\n";
        let events = convert_events(csv.as_bytes()).unwrap();

        let keys: Vec<&str> = events.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["5", "3"]);
        assert_eq!(events["5"], Value::String("second".to_string()));
    }

    #[test]
    fn test_quoted_description() {
        let csv = "a,b,id,desc\nx,y,7,\"Logon, with comma\"\n";
        let events = convert_events(csv.as_bytes()).unwrap();
        assert_eq!(events["7"], Value::String("Logon, with comma".to_string()));
    }

    #[test]
    fn test_header_only() {
        let events = convert_events("a,b,id,desc\n".as_bytes()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_non_integer_id() {
        let csv = "a,b,id,desc\nx,y,seven,A\n";
        let err = convert_events(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SetupError::InvalidEventRow { line: 2, .. }));
    }

    #[test]
    fn test_short_row() {
        let csv = "a,b,id,desc\nx,y,1\n";
        let err = convert_events(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SetupError::InvalidEventRow { line: 2, .. }));
    }

    #[test]
    fn test_write_uses_four_space_indent() {
        let mut events = Map::new();
        events.insert("1".to_string(), Value::String("A".to_string()));

        let mut out = Vec::new();
        write_events_json(&mut out, &events).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n    \"1\": \"A\"\n}");
    }
}
