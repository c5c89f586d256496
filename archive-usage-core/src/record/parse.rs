use crate::facet::{classify, dataset_id, file_id};
use crate::record::{MalformedReason, ParseError, Project, RequestEvent};
use chrono::NaiveDate;

//-----------------------------------------------------------------------------
// Positional layout
//-----------------------------------------------------------------------------

const MIN_FIELDS: usize = 12;

const FIELD_REQUESTER: usize = 0;
const FIELD_TIMESTAMP: usize = 3;
const FIELD_PATH: usize = 6;
const FIELD_STATUS: usize = 8;
const FIELD_BYTES: usize = 9;
const FIELD_ACCESS_TYPE: usize = 11;

const ENCODED_SEPARATOR: &str = "%2F";
const UNKNOWN_SIZE: &str = "-";
const TIMESTAMP_FORMAT: &str = "%d/%b/%Y";
const YEAR_DIGITS: usize = 4;

/// Parses one access-log line.
///
/// Example input:
///
/// ```text
/// 128.55.1.1 - - [15/Jul/2019:03:18:49 -0700] "GET /thredds/fileServer/user_pub_work/E3SM/.../file.nc HTTP/1.1" 200 2097152 "-" "Wget/1.14 (linux-gnu)"
/// ```
///
/// A path without the dataset marker segment is not an error; the event just
/// carries an empty dataset identifier and no facets.
pub fn parse_line(line: &str) -> Result<RequestEvent, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::malformed(
            line,
            MalformedReason::TooFewFields {
                expected: MIN_FIELDS,
                found: fields.len(),
            },
        ));
    }

    let date = parse_timestamp(fields[FIELD_TIMESTAMP])
        .ok_or_else(|| ParseError::timestamp(line, fields[FIELD_TIMESTAMP]))?;
    let http_status = parse_status(line, fields[FIELD_STATUS])?;
    let byte_count = parse_byte_count(line, fields[FIELD_BYTES])?;

    let url_path = fields[FIELD_PATH].replace(ENCODED_SEPARATOR, "/");
    let dataset_id = dataset_id(&url_path);
    let facets = classify(&dataset_id);

    Ok(RequestEvent {
        raw_line: line.trim_end().to_string(),
        date,
        requester_address: fields[FIELD_REQUESTER].to_string(),
        file_id: file_id(&url_path).to_string(),
        project: Project::from_path(&url_path),
        dataset_id,
        facets,
        url_path,
        access_type: fields[FIELD_ACCESS_TYPE].to_string(),
        http_status,
        byte_count,
    })
}

/// Extracts the calendar date from a raw timestamp field such as
/// `[15/Jul/2019:03:18:49`. The time of day is discarded.
///
/// The year must be exactly four digits; `%Y` alone would also take `19`,
/// `+2019` or `-0001`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let start = raw.find('[').map_or(0, |i| i + 1);
    let end = raw.find(':')?;
    let date = raw.get(start..end)?;

    let (_, year) = date.rsplit_once('/')?;
    if year.len() != YEAR_DIGITS || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    NaiveDate::parse_from_str(date, TIMESTAMP_FORMAT).ok()
}

fn parse_status(line: &str, raw: &str) -> Result<String, ParseError> {
    if raw.len() == 3 && raw.bytes().all(|b| b.is_ascii_digit()) {
        Ok(raw.to_string())
    } else {
        Err(ParseError::malformed(
            line,
            MalformedReason::InvalidStatus(raw.to_string()),
        ))
    }
}

fn parse_byte_count(line: &str, raw: &str) -> Result<u64, ParseError> {
    if raw == UNKNOWN_SIZE {
        return Ok(0);
    }

    raw.parse::<u64>().map_err(|_| {
        ParseError::malformed(line, MalformedReason::InvalidByteCount(raw.to_string()))
    })
}
