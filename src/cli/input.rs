//! Input acquisition for the CLI
//!
//! A path argument is read as an uploaded file; without one, stdin is read
//! as pasted text. This is the only asynchronous step: the parsers receive
//! a finished string.

use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

use crate::error::{BurnsimError, Result};
use crate::models::SourceType;

/// Source text plus the provenance the parsers need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText {
    pub text: String,
    pub source_type: SourceType,
    pub original_filename: String,
}

/// Decode input bytes, replacing invalid UTF-8 sequences with U+FFFD
fn decode_lossy(bytes: Vec<u8>, origin: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(error) => {
            warn!("{} is not valid UTF-8; undecodable bytes were replaced", origin);
            String::from_utf8_lossy(error.as_bytes()).into_owned()
        }
    }
}

/// Read a file as a `file` source; the provenance keeps only its name
pub async fn read_file(path: &Path) -> Result<InputText> {
    if !tokio::fs::try_exists(path).await? {
        return Err(BurnsimError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = tokio::fs::read(path).await?;
    let text = decode_lossy(bytes, &path.display().to_string());
    let original_filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!("Read {} bytes from {}", text.len(), path.display());

    Ok(InputText {
        text,
        source_type: SourceType::File,
        original_filename,
    })
}

/// Read everything from `reader` as a `paste` source
pub async fn read_paste<R>(mut reader: R) -> Result<InputText>
where
    R: AsyncRead + Unpin,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    let text = decode_lossy(bytes, "Pasted input");

    debug!("Read {} bytes of pasted input", text.len());

    Ok(InputText {
        text,
        source_type: SourceType::Paste,
        original_filename: String::new(),
    })
}

/// File when a path is given, stdin otherwise
pub async fn read_input(path: Option<&Path>) -> Result<InputText> {
    match path {
        Some(path) => read_file(path).await,
        None => read_paste(tokio::io::stdin()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_read_file_keeps_only_name() {
        let mut file = NamedTempFile::with_suffix(".eng").unwrap();
        write!(file, "C6 18 70 3 0.01 0.02 Estes\n0 0\n1 5\n").unwrap();

        let input = read_file(file.path()).await.unwrap();
        assert_eq!(input.source_type, SourceType::File);
        assert!(input.original_filename.ends_with(".eng"));
        assert!(!input.original_filename.contains('/'));
        assert!(input.text.starts_with("C6"));
    }

    #[tokio::test]
    async fn test_read_file_with_latin1_byte() {
        let mut file = NamedTempFile::with_suffix(".bsx").unwrap();
        file.write_all(b"<Motor Name=\"M\"><MotorNotes>cast at 90\xB0C</MotorNotes></Motor>")
            .unwrap();

        let input = read_file(file.path()).await.unwrap();
        assert!(input.text.contains("cast at 90\u{FFFD}C"));
        assert!(input.text.ends_with("</Motor>"));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let result = read_input(Some(Path::new("/nonexistent/motor.bsx"))).await;
        assert!(matches!(result, Err(BurnsimError::InputNotFound { .. })));
    }

    #[tokio::test]
    async fn test_read_paste() {
        let input = read_paste(&b"<Motor/>"[..]).await.unwrap();

        assert_eq!(input.text, "<Motor/>");
        assert_eq!(input.source_type, SourceType::Paste);
        assert_eq!(input.original_filename, "");
    }

    #[tokio::test]
    async fn test_read_paste_with_invalid_utf8() {
        let input = read_paste(&b"C6 \xFF 18"[..]).await.unwrap();
        assert_eq!(input.text, "C6 \u{FFFD} 18");
    }
}
