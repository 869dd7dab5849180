//! Capture streams, redirect file naming and line splitting.

use std::fmt;

/// One of the two validator output streams that get redirected to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureStream {
    Stdout,
    Stderr,
}

impl CaptureStream {
    pub const ALL: [CaptureStream; 2] = [CaptureStream::Stdout, CaptureStream::Stderr];

    /// Suffix appended to the fixture name to form the redirect file name.
    pub fn suffix(self) -> &'static str {
        match self {
            CaptureStream::Stdout => ".out",
            CaptureStream::Stderr => ".err",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CaptureStream::Stdout => "stdout",
            CaptureStream::Stderr => "stderr",
        }
    }
}

impl fmt::Display for CaptureStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name of the redirect file for `fixture` and `stream` (`<fixture>.out` / `<fixture>.err`).
pub fn capture_file_name(fixture: &str, stream: CaptureStream) -> String {
    let mut name = String::with_capacity(fixture.len() + 4);
    name.push_str(fixture);
    name.push_str(stream.suffix());
    name
}

/// Split captured text into lines, keeping each line's terminator.
///
/// Concatenating the result gives back `text`. A trailing fragment without a newline is kept as its own line and
/// empty input yields no lines. `\r\n` stays attached to its line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_file_names() {
        assert_eq!(capture_file_name("ValidDTD.xml", CaptureStream::Stdout), "ValidDTD.xml.out");
        assert_eq!(capture_file_name("ValidDTD.xml", CaptureStream::Stderr), "ValidDTD.xml.err");
    }

    #[test]
    fn test_capture_file_name_keeps_directories() {
        assert_eq!(
            capture_file_name("fixtures/a.xml", CaptureStream::Stdout),
            "fixtures/a.xml.out"
        );
    }

    #[test]
    fn test_split_lines_keeps_terminators() {
        assert_eq!(split_lines("OK\n"), vec!["OK\n"]);
        assert_eq!(split_lines("a\nb\n"), vec!["a\n", "b\n"]);
    }

    #[test]
    fn test_split_lines_unterminated_tail() {
        assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_blank_lines_preserved() {
        assert_eq!(split_lines("\n\nx\n"), vec!["\n", "\n", "x\n"]);
    }

    #[test]
    fn test_split_lines_crlf() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a\r\n", "b\r\n"]);
    }

    #[test]
    fn test_stream_display() {
        assert_eq!(CaptureStream::Stdout.to_string(), "stdout");
        assert_eq!(CaptureStream::Stderr.to_string(), "stderr");
    }
}
