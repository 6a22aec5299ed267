//! Concat demuxer list file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{self, Path, PathBuf};

/// One manifest entry: `file '<path>'`.
///
/// Single quotes inside the path are written as `'\''` so the demuxer reads
/// the path back verbatim. Non-UTF-8 paths can't be written and are rejected.
pub fn manifest_line(path: &Path) -> io::Result<String> {
    let path = path.to_str().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("audio path is not valid UTF-8: {}", path.display()),
        )
    })?;
    Ok(format!("file '{}'", path.replace('\'', r"'\''")))
}

/// Write the manifest for `audio_paths`, one line per file in order.
///
/// The demuxer resolves relative entries against the manifest's own folder,
/// so relative paths are made absolute from the working directory first.
pub fn write_manifest(manifest_path: &Path, audio_paths: &[PathBuf]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(manifest_path)?);
    for audio in audio_paths {
        let audio = if audio.is_absolute() {
            audio.clone()
        } else {
            path::absolute(audio)?
        };
        writeln!(writer, "{}", manifest_line(&audio)?)?;
    }
    writer.flush()
}
