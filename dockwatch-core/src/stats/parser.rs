//! Parser for `docker stats` table output
//!
//! Each record is a single line with fields separated by runs of two or
//! more spaces. Compound fields ("A / B") split on the literal " / ".
//! A record that does not decompose fails the whole refresh; no
//! partially-populated row is ever produced.

use crate::error::ParseError;

use super::model::{ByteCell, MetricRow, PercentCell};

/// Remote command producing the stats table, pre-sorted by name
pub const STATS_COMMAND: &str = "docker stats -a --no-stream | sort -k 2";

/// Leading token of the header record, which parses to no row
pub const HEADER_TOKEN: &str = "CONTAINER ID";

/// Expected field count of a stats record
const FIELD_COUNT: usize = 8;

/// Stateless parser for stats records
pub struct StatsParser;

impl StatsParser {
    /// Parses the complete output of [`STATS_COMMAND`] into rows.
    ///
    /// Blank lines are skipped; the header record is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for the first record that fails to
    /// decompose, identifying the offending raw line.
    pub fn parse_table(output: &str) -> Result<Vec<MetricRow>, ParseError> {
        let mut rows = Vec::new();
        for line in output.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            if let Some(row) = Self::parse_record(line)? {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    /// Parses one raw record into a row, or `None` for the header.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the record has the wrong field count,
    /// a malformed compound field, or a token that fails numeric
    /// decoding.
    pub fn parse_record(line: &str) -> Result<Option<MetricRow>, ParseError> {
        if line.starts_with(HEADER_TOKEN) {
            return Ok(None);
        }

        let fields = split_fields(line);
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
                line: line.to_string(),
            });
        }

        let (mem_usage, mem_limit) = split_compound(fields[3], line)?;
        let (net_input, net_output) = split_compound(fields[5], line)?;
        let (block_input, block_output) = split_compound(fields[6], line)?;

        let pids: u64 = fields[7]
            .parse()
            .map_err(|_| invalid_number(fields[7], line))?;

        Ok(Some(MetricRow {
            container_id: fields[0].to_string(),
            name: fields[1].to_string(),
            cpu_percent: percent_cell(fields[2], line)?,
            mem_usage: byte_cell(mem_usage, line)?,
            mem_limit: byte_cell(mem_limit, line)?,
            mem_percent: percent_cell(fields[4], line)?,
            net_input: byte_cell(net_input, line)?,
            net_output: byte_cell(net_output, line)?,
            block_input: byte_cell(block_input, line)?,
            block_output: byte_cell(block_output, line)?,
            pids,
            running: pids != 0,
        }))
    }
}

/// Splits a record on runs of two or more spaces.
///
/// Single spaces (inside compound fields) do not split.
fn split_fields(line: &str) -> Vec<&str> {
    line.split("  ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits a compound `"A / B"` field into its two sub-fields
fn split_compound<'a>(field: &'a str, line: &str) -> Result<(&'a str, &'a str), ParseError> {
    field.split_once(" / ").ok_or_else(|| ParseError::Compound {
        field: field.to_string(),
        line: line.to_string(),
    })
}

fn byte_cell(token: &str, line: &str) -> Result<ByteCell, ParseError> {
    ByteCell::decode(token).ok_or_else(|| invalid_number(token, line))
}

fn percent_cell(token: &str, line: &str) -> Result<PercentCell, ParseError> {
    PercentCell::decode(token).ok_or_else(|| invalid_number(token, line))
}

fn invalid_number(token: &str, line: &str) -> ParseError {
    ParseError::InvalidNumber {
        token: token.to_string(),
        line: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RECORD: &str =
        "abc123  web  1.50%  10MiB / 200MiB  5.00%  1kB / 2kB  0B / 0B  0";

    const SAMPLE_TABLE: &str = "\
CONTAINER ID   NAME      CPU %     MEM USAGE / LIMIT     MEM %     NET I/O           BLOCK I/O         PIDS
abc123         web       1.50%     10MiB / 200MiB        5.00%     1kB / 2kB         0B / 0B           12
def456         worker    0.00%     0B / 0B               0.00%     0B / 0B           0B / 0B           0
";

    #[test]
    fn test_header_parses_to_no_row() {
        let header = "CONTAINER ID  NAME  CPU %  MEM USAGE / LIMIT  MEM %  NET I/O  BLOCK I/O  PIDS";
        assert_eq!(StatsParser::parse_record(header).unwrap(), None);
    }

    #[test]
    fn test_sample_record_decodes() {
        let row = StatsParser::parse_record(SAMPLE_RECORD).unwrap().unwrap();
        assert_eq!(row.container_id, "abc123");
        assert_eq!(row.name, "web");
        assert!((row.cpu_percent.value - 1.5).abs() < f64::EPSILON);
        assert_eq!(row.mem_usage.bytes, 10_485_760);
        assert_eq!(row.mem_usage.display, "10MiB");
        assert_eq!(row.mem_limit.bytes, 200 * 1024 * 1024);
        assert!((row.mem_percent.value - 5.0).abs() < f64::EPSILON);
        assert_eq!(row.net_input.bytes, 1000);
        assert_eq!(row.net_output.bytes, 2000);
        assert_eq!(row.block_input.bytes, 0);
        assert_eq!(row.pids, 0);
        assert!(!row.running);
    }

    #[test]
    fn test_nonzero_pids_means_running() {
        let line = SAMPLE_RECORD.trim_end_matches('0').to_string() + "42";
        let row = StatsParser::parse_record(&line).unwrap().unwrap();
        assert_eq!(row.pids, 42);
        assert!(row.running);
    }

    #[test]
    fn test_table_skips_header_and_blanks() {
        let rows = StatsParser::parse_table(SAMPLE_TABLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "web");
        assert!(rows[0].running);
        assert_eq!(rows[1].name, "worker");
        assert!(!rows[1].running);
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let rows = StatsParser::parse_table(
            "CONTAINER ID   NAME   CPU %   MEM USAGE / LIMIT   MEM %   NET I/O   BLOCK I/O   PIDS\n",
        )
        .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_wrong_field_count_names_the_line() {
        let line = "abc123  web  1.50%";
        match StatsParser::parse_record(line).unwrap_err() {
            ParseError::FieldCount { found, line: l, .. } => {
                assert_eq!(found, 3);
                assert_eq!(l, line);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_compound_field() {
        let line = "abc123  web  1.50%  10MiB-200MiB  5.00%  1kB / 2kB  0B / 0B  3";
        assert!(matches!(
            StatsParser::parse_record(line).unwrap_err(),
            ParseError::FieldCount { .. } | ParseError::Compound { .. }
        ));
    }

    #[test]
    fn test_bad_token_aborts_the_record() {
        let line = "abc123  web  oops%x  10MiB / 200MiB  5.00%  1kB / 2kB  0B / 0B  3";
        match StatsParser::parse_record(line).unwrap_err() {
            ParseError::InvalidNumber { token, .. } => assert_eq!(token, "oops%x"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_record_aborts_the_table() {
        let output = format!("{SAMPLE_TABLE}garbage line\n");
        assert!(StatsParser::parse_table(&output).is_err());
    }
}
