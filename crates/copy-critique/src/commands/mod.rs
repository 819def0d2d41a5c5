//! Command implementations.

use std::io::Read;

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;

use copy_critique_core::{Severity, Suggestion};

pub mod analyze;
pub mod critique;
pub mod info;
pub mod schema;
pub mod suggest;
pub mod tokenize;

/// Where the copy to critique comes from.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// File to analyze. Reads stdin when neither FILE nor --text is given.
    pub file: Option<Utf8PathBuf>,

    /// Analyze this text instead of a file.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
}

impl InputArgs {
    /// Label for log fields and messages.
    pub fn source(&self) -> String {
        match (&self.file, &self.text) {
            (Some(path), _) => path.to_string(),
            (None, Some(_)) => "--text".to_string(),
            (None, None) => "<stdin>".to_string(),
        }
    }

    /// Read the input and validate its size against the configured limit.
    pub fn read(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        let source = self.source();
        let content = match (&self.file, &self.text) {
            (Some(path), _) => {
                // Preflight: check file size via metadata before reading into memory.
                let metadata = std::fs::metadata(path.as_std_path())
                    .with_context(|| format!("failed to read {path}"))?;
                check_size(&source, metadata.len(), max_bytes)?;
                std::fs::read_to_string(path.as_std_path())
                    .with_context(|| format!("failed to read {path}"))?
            }
            (None, Some(text)) => text.clone(),
            (None, None) => read_stdin(&source, max_bytes)?,
        };
        check_size(&source, content.len() as u64, max_bytes)?;
        Ok(content)
    }
}

/// Read stdin as bytes so the size check runs before UTF-8 decoding.
fn read_stdin(source: &str, max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_capped(std::io::stdin().lock(), source, max_bytes)
}

fn read_capped<R: Read>(
    reader: R,
    source: &str,
    max_bytes: Option<usize>,
) -> anyhow::Result<String> {
    // One byte over the limit is enough to reject.
    let cap = max_bytes.map_or(u64::MAX, |max| (max as u64).saturating_add(1));
    let mut buf = Vec::new();
    reader
        .take(cap)
        .read_to_end(&mut buf)
        .with_context(|| format!("failed to read {source}"))?;
    check_size(source, buf.len() as u64, max_bytes)?;
    String::from_utf8(buf).with_context(|| format!("{source} is not valid UTF-8"))
}

fn check_size(source: &str, size: u64, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max as u64
    {
        bail!("input too large: {source} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}

/// Colored severity label, padded for alignment.
pub fn severity_label(severity: Severity) -> String {
    let padded = format!("{:<7}", severity.as_str());
    match severity {
        Severity::Error => padded.red().bold().to_string(),
        Severity::Warning => padded.yellow().to_string(),
        Severity::Info => padded.blue().to_string(),
    }
}

/// Print suggestions one per line: severity, tag, message.
pub fn print_suggestions(suggestions: &[Suggestion]) {
    for s in suggestions {
        println!("  {} {}: {}", severity_label(s.severity), s.tag.bold(), s.message);
    }
}

/// Fail when any suggestion reaches `threshold`.
pub fn check_fail_on(
    source: &str,
    max: Option<Severity>,
    threshold: Option<Severity>,
) -> anyhow::Result<()> {
    if let (Some(max), Some(threshold)) = (max, threshold)
        && max >= threshold
    {
        bail!("{source} has {max}-level suggestions (fail-on: {threshold}). Revise the copy.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_is_returned_as_is() {
        let input = InputArgs {
            file: None,
            text: Some("Bonjour".to_string()),
        };
        assert_eq!(input.read(None).unwrap(), "Bonjour");
        assert_eq!(input.source(), "--text");
    }

    #[test]
    fn text_input_respects_limit() {
        let input = InputArgs {
            file: None,
            text: Some("Bonjour".to_string()),
        };
        let err = input.read(Some(3)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn file_input_is_read() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "Découvrez").unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let input = InputArgs {
            file: Some(path),
            text: None,
        };
        assert_eq!(input.read(Some(100)).unwrap(), "Découvrez");
    }

    #[test]
    fn missing_file_errors() {
        let input = InputArgs {
            file: Some(Utf8PathBuf::from("/nonexistent/copy.txt")),
            text: None,
        };
        assert!(input.read(None).is_err());
    }

    #[test]
    fn largest_limit_does_not_overflow() {
        let text = read_capped("Bonjour".as_bytes(), "<stdin>", Some(usize::MAX)).unwrap();
        assert_eq!(text, "Bonjour");
    }

    #[test]
    fn limit_cutting_a_character_reports_size() {
        // "éé" is 4 bytes; a 2-byte limit reads 3 and splits the second "é"
        let err = read_capped("éé".as_bytes(), "<stdin>", Some(2)).unwrap_err();
        assert!(err.to_string().contains("input too large"), "{err}");
    }

    #[test]
    fn invalid_utf8_within_limit_is_reported() {
        let err = read_capped(&[0xff, 0xfe][..], "<stdin>", Some(10)).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err}");
    }

    #[test]
    fn fail_on_threshold() {
        assert!(check_fail_on("x", Some(Severity::Warning), Some(Severity::Error)).is_ok());
        assert!(check_fail_on("x", Some(Severity::Error), Some(Severity::Warning)).is_err());
        assert!(check_fail_on("x", Some(Severity::Info), Some(Severity::Info)).is_err());
        assert!(check_fail_on("x", None, Some(Severity::Info)).is_ok());
        assert!(check_fail_on("x", Some(Severity::Error), None).is_ok());
    }
}
