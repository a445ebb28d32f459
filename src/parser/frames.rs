//! Streaming readers for the dynamic animal and plant frame logs.
//!
//! Frame logs grow with one record per simulated tick and can reach
//! hundreds of megabytes, so the top-level JSON array is never
//! materialized. `JsonArrayReader` walks the array element by element,
//! decoding each record individually and yielding it to the caller.
//!
//! Numbers in the logs may be written with full decimal precision; they
//! are folded to `f64` at decode time and the precision loss is accepted.

use crate::utils::error::DataFormatError;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::marker::PhantomData;
use std::path::Path;

/// One frame of the dynamic animal log
#[derive(Debug, Clone, Deserialize)]
pub struct AnimalFrame {
    /// Snapshot of every living animal at this tick
    pub data: Vec<AnimalSnapshot>,
}

/// Per-animal state within a dynamic frame
#[derive(Debug, Clone, Deserialize)]
pub struct AnimalSnapshot {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub hunger: f64,
    pub health: f64,
}

/// One frame of the plant log
#[derive(Debug, Clone, Deserialize)]
pub struct PlantFrame {
    /// Snapshot of every plant at this tick
    pub plants: Vec<PlantSnapshot>,
}

/// Per-plant state within a plant frame
#[derive(Debug, Clone, Deserialize)]
pub struct PlantSnapshot {
    pub x: f64,
    pub y: f64,
    pub food: f64,
}

/// Stream position of the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    /// The opening '[' has not been consumed yet
    Start,
    /// Positioned at the start of the next element
    Elements,
    /// The closing ']' was consumed, or an error ended the stream
    Done,
}

/// Lazy, forward-only iterator over the elements of a JSON array
///
/// **Public** - the frame source for aggregation and scatter building
///
/// Yields `Result<T, DataFormatError>`; the first error ends the stream
/// (corrupt records are never skipped). Elements must be self-delimiting
/// JSON values (objects, arrays, strings) - a bare-number element would
/// swallow its trailing delimiter during decoding.
pub struct JsonArrayReader<R, T> {
    reader: R,
    path: String,
    index: usize,
    state: StreamState,
    _element: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: DeserializeOwned> JsonArrayReader<R, T> {
    /// Create a reader over `reader`, labelling errors with `path`
    ///
    /// **Public** - constructor; see also `animal_frames`/`plant_frames`
    pub fn new(reader: R, path: impl Into<String>) -> Self {
        Self {
            reader,
            path: path.into(),
            index: 0,
            state: StreamState::Start,
            _element: PhantomData,
        }
    }

    /// Number of elements decoded so far
    pub fn records_read(&self) -> usize {
        self.index
    }

    /// Skip whitespace and return the next byte without consuming it
    fn peek_nonws(&mut self) -> Result<Option<u8>, DataFormatError> {
        loop {
            let buf = self.reader.fill_buf().map_err(|source| DataFormatError::Io {
                path: self.path.clone(),
                source,
            })?;
            if buf.is_empty() {
                return Ok(None);
            }
            match buf
                .iter()
                .position(|b| !matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
            {
                Some(pos) => {
                    let byte = buf[pos];
                    self.reader.consume(pos);
                    return Ok(Some(byte));
                }
                None => {
                    let len = buf.len();
                    self.reader.consume(len);
                }
            }
        }
    }

    fn consume_byte(&mut self) {
        self.reader.consume(1);
    }

    fn eof_error(&self) -> DataFormatError {
        DataFormatError::UnexpectedEof {
            path: self.path.clone(),
        }
    }

    /// Decode the next element, tracking array structure around it
    fn try_next(&mut self) -> Result<Option<T>, DataFormatError> {
        if self.state == StreamState::Done {
            return Ok(None);
        }

        if self.state == StreamState::Start {
            match self.peek_nonws()? {
                Some(b'[') => self.consume_byte(),
                Some(_) => {
                    return Err(DataFormatError::NotAnArray {
                        path: self.path.clone(),
                    })
                }
                None => return Err(self.eof_error()),
            }
            if let Some(b']') = self.peek_nonws()? {
                self.consume_byte();
                self.state = StreamState::Done;
                return Ok(None);
            }
            self.state = StreamState::Elements;
        }

        // Decode exactly one element in place. The deserializer stops at
        // the element's closing token, leaving the delimiter for us.
        let element = {
            let mut de = serde_json::Deserializer::from_reader(&mut self.reader);
            T::deserialize(&mut de).map_err(|source| DataFormatError::Record {
                path: self.path.clone(),
                index: self.index,
                source,
            })?
        };

        match self.peek_nonws()? {
            Some(b',') => self.consume_byte(),
            Some(b']') => {
                self.consume_byte();
                self.state = StreamState::Done;
            }
            Some(other) => {
                return Err(DataFormatError::BadDelimiter {
                    path: self.path.clone(),
                    index: self.index,
                    found: other as char,
                })
            }
            None => return Err(self.eof_error()),
        }

        self.index += 1;
        Ok(Some(element))
    }
}

impl<R: BufRead, T: DeserializeOwned> Iterator for JsonArrayReader<R, T> {
    type Item = Result<T, DataFormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(element) => element.map(Ok),
            Err(err) => {
                self.state = StreamState::Done;
                Some(Err(err))
            }
        }
    }
}

/// A frame stream backed by a buffered file
pub type FrameFileReader<T> = JsonArrayReader<BufReader<File>, T>;

/// Open the dynamic animal log as a frame stream
///
/// **Public** - used by the trends and scatter commands
pub fn animal_frames(path: impl AsRef<Path>) -> Result<FrameFileReader<AnimalFrame>, DataFormatError> {
    open_frame_stream(path)
}

/// Open the plant log as a frame stream
///
/// **Public** - used by the trends and scatter commands
pub fn plant_frames(path: impl AsRef<Path>) -> Result<FrameFileReader<PlantFrame>, DataFormatError> {
    open_frame_stream(path)
}

/// Open any frame file as a lazy stream of decoded records
///
/// **Private** - shared by the typed constructors
fn open_frame_stream<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<FrameFileReader<T>, DataFormatError> {
    let path = path.as_ref();
    let label = path.display().to_string();

    let file = File::open(path).map_err(|source| DataFormatError::Io {
        path: label.clone(),
        source,
    })?;

    debug!("Streaming frame records from {}", label);

    Ok(JsonArrayReader::new(BufReader::new(file), label))
}
