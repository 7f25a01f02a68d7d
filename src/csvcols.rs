//! Build a CSV row from loose values, or select columns from CSV input.
//!
//! Row building takes each value as a column. A single value can instead be
//! split on a delimiter. Filtering reads records without a header row and
//! writes only the requested column numbers, counting from zero.

use std::io::{self, Read, Write};
use std::num::ParseIntError;

use csv::{ReaderBuilder, StringRecord, Writer};

#[derive(Debug, thiserror::Error)]
pub enum CsvColsError {
    #[error("expected a column number (0 - n), {arg:?}: {source}")]
    InvalidColumn {
        arg: String,
        #[source]
        source: ParseIntError,
    },

    #[error("bad CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// Parse column-number arguments.
///
/// Negative numbers are accepted; they select no column and yield an empty field.
pub fn parse_columns<S: AsRef<str>>(args: &[S]) -> Result<Vec<i64>, CsvColsError> {
    args.iter()
        .map(|arg| {
            let arg = arg.as_ref();
            arg.trim()
                .parse::<i64>()
                .map_err(|source| CsvColsError::InvalidColumn {
                    arg: arg.to_string(),
                    source,
                })
        })
        .collect()
}

/// Strip one pair of surrounding double quotes, then surrounding whitespace.
pub fn clean_field(value: &str) -> &str {
    let unquoted = if value.starts_with('"') && value.ends_with('"') {
        let value = value.strip_suffix('"').unwrap_or(value);
        value.strip_prefix('"').unwrap_or(value)
    } else {
        value
    };
    unquoted.trim()
}

/// Turn arguments into row fields.
///
/// With a non-empty delimiter and exactly one argument, that argument is
/// split on the delimiter. Every field is then cleaned.
pub fn row_fields(args: &[String], delimiter: Option<&str>) -> Vec<String> {
    match (delimiter, args) {
        (Some(delim), [single]) if !delim.is_empty() => single
            .split(delim)
            .map(|field| clean_field(field).to_string())
            .collect(),
        _ => args
            .iter()
            .map(|field| clean_field(field).to_string())
            .collect(),
    }
}

/// Write one CSV record, quoting fields where needed.
pub fn write_row<W: Write>(output: W, fields: &[String]) -> Result<(), CsvColsError> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(fields)?;
    writer.flush()?;
    Ok(())
}

/// Pick `columns` out of `record`. Missing or negative columns are empty.
pub fn select_columns<'r>(record: &'r StringRecord, columns: &[i64]) -> Vec<&'r str> {
    columns
        .iter()
        .map(|&col| {
            usize::try_from(col)
                .ok()
                .and_then(|i| record.get(i))
                .unwrap_or("")
        })
        .collect()
}

/// Copy CSV from `input` to `output`, keeping only `columns` in the given
/// order. Returns the number of rows written.
///
/// Every input record must have the same number of fields as the first.
pub fn filter_columns<R: Read, W: Write>(
    input: R,
    output: W,
    columns: &[i64],
) -> Result<usize, CsvColsError> {
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(input);
    let mut writer = Writer::from_writer(output);

    let mut rows = 0;
    for result in reader.records() {
        let record = result?;
        writer.write_record(select_columns(&record, columns))?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}
