use crate::access_log::{LineParser, StatsAggregator};
use crate::source::LogSource;
use crate::source::error::SourceError;
use std::io::BufRead;

/// Feeds every source, in order, through `parser` into `aggregator`.
///
/// The first hard failure stops ingestion. Whatever was collected before it stays in
/// the aggregator.
pub fn ingest(
    sources: &[LogSource],
    parser: &LineParser,
    aggregator: &mut StatsAggregator,
) -> Result<(), SourceError> {
    for source in sources {
        ingest_source(source, parser, aggregator)?;
    }
    Ok(())
}

pub fn ingest_source(
    source: &LogSource,
    parser: &LineParser,
    aggregator: &mut StatsAggregator,
) -> Result<(), SourceError> {
    let name = source.name();
    aggregator.add_source(name.clone());

    tracing::info!(source = %name, "processing log source");

    let reader = source.open()?;
    ingest_lines(&name, reader, parser, aggregator)
}

/// Reads `reader` line by line. Bytes that are not valid UTF-8 are replaced, so such a
/// line reaches the parser and is skipped as unmatched instead of failing the source.
pub fn ingest_lines<R: BufRead>(
    name: &str,
    mut reader: R,
    parser: &LineParser,
    aggregator: &mut StatsAggregator,
) -> Result<(), SourceError> {
    let mut lines = 0usize;
    let mut records = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| SourceError::Read {
                name: name.to_string(),
                source,
            })?;
        if read == 0 {
            break;
        }
        lines += 1;

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        let record = parser.parse(&line).map_err(|source| SourceError::Parse {
            name: name.to_string(),
            line: lines,
            source,
        })?;

        if let Some(record) = record {
            aggregator.collect(&record);
            records += 1;
        }
    }

    tracing::info!(source = %name, lines, records, "finished log source");
    Ok(())
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
