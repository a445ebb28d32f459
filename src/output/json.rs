//! JSON artifact writers.
//!
//! Writes trends reports and scatter documents to disk with proper
//! formatting: reports are pretty-printed for humans, scatter documents
//! are compact because they scale with the log length.

use crate::parser::schema::{ScatterDocument, TrendsReport};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a trends report to a JSON file
///
/// **Public** - main entry point for report output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - path cannot be created or is invalid
pub fn write_report(report: &TrendsReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing trends report to: {}", output_path.display());

    let writer = create_output_file(output_path)?;
    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Write a scatter document to a JSON file (compact encoding)
///
/// **Public** - main entry point for scatter output
pub fn write_scatter(
    document: &ScatterDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!(
        "Writing scatter data ({} frames) to: {}",
        document.frames.len(),
        output_path.display()
    );

    let writer = create_output_file(output_path)?;
    serde_json::to_writer(writer, document).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a trends report from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - file read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<TrendsReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading trends report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: TrendsReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} animal frames",
        report.version, report.animal_frames
    );

    Ok(report)
}

/// Validate the path and open a buffered output file
///
/// **Private** - shared by the writers
fn create_output_file(path: &Path) -> Result<BufWriter<File>, OutputError> {
    validate_output_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(path).map_err(OutputError::WriteFailed)?;
    Ok(BufWriter::new(file))
}

/// Validate that the output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
