use crate::error::ReportError;
use crate::record::{RequestEvent, parse_line};
use crate::stream::{LineFilter, LogFiles, discover};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::{debug, info};

/// Where events come from: a set of roots plus the line filter. Each call to
/// [`EventSource::events`] starts a fresh pass over the files.
#[derive(Debug, Clone)]
pub struct EventSource {
    pub roots: Vec<PathBuf>,
    pub filter: LineFilter,
}

impl EventSource {
    pub fn new(roots: Vec<PathBuf>, filter: LineFilter) -> Self {
        Self { roots, filter }
    }

    pub fn events(&self) -> Result<EventStream<LogFiles>, ReportError> {
        Ok(EventStream::new(discover(&self.roots)?, self.filter))
    }
}

/// Parses every admitted line of every file yielded by `files`, in order.
///
/// The first parse or read failure is yielded as an `Err`; callers are
/// expected to stop there.
pub struct EventStream<F> {
    files: F,
    filter: LineFilter,
    current: Option<OpenLog>,
}

struct OpenLog {
    path: PathBuf,
    reader: BufReader<File>,
    buf: Vec<u8>,
    line_number: usize,
    admitted: u64,
    skipped: u64,
}

impl OpenLog {
    fn open(path: PathBuf) -> Result<Self, ReportError> {
        let file = File::open(&path).map_err(|e| ReportError::io(&path, e))?;
        debug!(path = %path.display(), "reading log file");

        Ok(Self {
            path,
            reader: BufReader::new(file),
            buf: Vec::new(),
            line_number: 0,
            admitted: 0,
            skipped: 0,
        })
    }

    /// Next line without its terminator. Invalid UTF-8 is replaced rather
    /// than failing the whole file.
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

impl<F> EventStream<F>
where
    F: Iterator<Item = PathBuf>,
{
    pub fn new(files: F, filter: LineFilter) -> Self {
        Self {
            files,
            filter,
            current: None,
        }
    }
}

impl<F> Iterator for EventStream<F>
where
    F: Iterator<Item = PathBuf>,
{
    type Item = Result<RequestEvent, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current.is_none() {
                let path = self.files.next()?;
                match OpenLog::open(path) {
                    Ok(log) => self.current = Some(log),
                    Err(e) => return Some(Err(e)),
                }
            }
            let Some(log) = self.current.as_mut() else {
                continue;
            };

            match log.next_line() {
                Ok(Some(line)) => {
                    if !self.filter.admits(&line) {
                        log.skipped += 1;
                        continue;
                    }
                    log.admitted += 1;

                    let event = parse_line(&line).map_err(|source| ReportError::Parse {
                        path: log.path.clone(),
                        line_number: log.line_number,
                        source,
                    });
                    return Some(event);
                }
                Ok(None) => {
                    debug!(
                        path = %log.path.display(),
                        admitted = log.admitted,
                        skipped = log.skipped,
                        "finished log file"
                    );
                    self.current = None;
                }
                Err(e) => {
                    let path = log.path.clone();
                    self.current = None;
                    return Some(Err(ReportError::io(path, e)));
                }
            }
        }
    }
}

/// Runs one full pass and collects the events.
///
/// # Errors
///
/// Fails on the first unparseable admitted line or unreadable file, and with
/// `ReportError::EmptyResult` when no line was admitted at all.
pub fn collect_events(source: &EventSource) -> Result<Vec<RequestEvent>, ReportError> {
    let events = source.events()?.collect::<Result<Vec<_>, _>>()?;

    if events.is_empty() {
        return Err(ReportError::EmptyResult {
            roots: source.roots.clone(),
        });
    }

    info!(events = events.len(), "parsed access logs");
    Ok(events)
}
