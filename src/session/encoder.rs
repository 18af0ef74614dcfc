//! Session encoder: [`Session`] -> bytes in either representation

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::Session;
use crate::record::{binary, text, RECORD_SIZE};
use crate::types::Representation;

/// Encode every record of the session, in order
pub fn encode(session: &Session, representation: Representation) -> Vec<u8> {
    match representation {
        Representation::Binary => {
            let mut out = Vec::with_capacity(session.len() * RECORD_SIZE);
            for record in session {
                binary::encode_into(record, &mut out);
            }
            out
        }
        Representation::Text => {
            let mut out = String::with_capacity(session.len() * 512);
            for record in session {
                text::encode_into(record, &mut out);
            }
            out.into_bytes()
        }
    }
}

/// Write the encoded session to `writer`
pub fn write_session<W: Write>(
    session: &Session,
    representation: Representation,
    mut writer: W,
) -> std::io::Result<()> {
    writer.write_all(&encode(session, representation))?;
    writer.flush()
}

/// Write the encoded session to a file, replacing it if present
pub fn save(
    session: &Session,
    representation: Representation,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_session(session, representation, BufWriter::new(file))?;
    tracing::debug!(
        "Wrote {} records to {} as {}",
        session.len(),
        path.display(),
        representation
    );
    Ok(())
}
