//! Input resolution: a path argument, with `-` meaning standard input

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::Path;

use super::error::Error;

/// The conventional stdin sentinel
pub const STDIN_SENTINEL: &str = "-";

/// Open the input source as a buffered line reader.
///
/// `-` (the CLI default) binds to standard input; anything else is opened
/// as a file. An unopenable file is fatal and reported before any line is
/// processed. The reader is a single forward pass and closes on drop.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, Error> {
    if path.as_os_str() == STDIN_SENTINEL {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("matchline: reading from stdin (pipe data or press Ctrl-D when done)");
        }
        Ok(Box::new(stdin.lock()))
    } else {
        let file = File::open(path).map_err(|source| Error::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use super::*;

    #[test]
    fn opens_named_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "first").unwrap();
        writeln!(tmp, "second").unwrap();

        let reader = open_input(tmp.path()).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        // the Ok side is an unnameable reader, so take the Err side first
        let err = open_input(Path::new("/no/such/file")).err().unwrap();
        assert!(matches!(err, Error::FileAccess { .. }));
    }
}
