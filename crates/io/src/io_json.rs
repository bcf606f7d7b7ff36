use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use log::debug;

use dfarust_automaton::Dfa;
use dfarust_automaton::DfaError;

use crate::dump;
use crate::load;
use crate::DfaDocument;
use crate::IOError;

/// Loads an automaton from a JSON document, see [DfaDocument] for the format.
pub fn read_json(reader: impl Read) -> Result<Dfa, IOError> {
    let document: DfaDocument = serde_json::from_reader(reader).map_err(json_error)?;

    Ok(load(&document)?)
}

/// Writes the automaton as a pretty printed JSON document.
pub fn write_json(mut writer: impl Write, dfa: &Dfa) -> Result<(), IOError> {
    serde_json::to_writer_pretty(&mut writer, &dump(dfa)).map_err(json_error)?;
    writeln!(writer)?;

    Ok(())
}

/// Loads an automaton from the JSON file at the given path.
pub fn read_json_file(path: impl AsRef<Path>) -> Result<Dfa, IOError> {
    debug!("Reading automaton from {}", path.as_ref().display());

    let file = File::open(path)?;
    read_json(BufReader::new(file))
}

/// Writes the automaton as JSON to the file at the given path.
pub fn write_json_file(path: impl AsRef<Path>, dfa: &Dfa) -> Result<(), IOError> {
    debug!("Writing automaton to {}", path.as_ref().display());

    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, dfa)?;
    writer.flush()?;

    Ok(())
}

/// Syntax errors and missing fields make a malformed document, other errors
/// come from the underlying reader or writer.
fn json_error(error: serde_json::Error) -> IOError {
    if error.is_io() {
        IOError::Io(error.into())
    } else {
        DfaError::MalformedDocument(error.to_string()).into()
    }
}
