use std::io;

use crate::args::RunConfig;

/// The final component of a path string
///
/// Trailing separators are collapsed before the last component is taken,
/// so `/path/to/dir/` and `/path/to/dir///` both yield `dir`. An empty
/// path denotes the current directory (`.`), and a path made entirely of
/// separators reduces to the root (`/`). Paths are opaque strings; nothing
/// is resolved against the filesystem.
///
/// A non-empty `suffix` is removed from the end of the basename, except
/// when it matches the whole basename, which would leave nothing.
pub fn basename<'a>(path: &'a str, suffix: &str) -> &'a str {
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" };
    }

    let base = match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    };

    if !suffix.is_empty() && base != suffix {
        if let Some(stripped) = base.strip_suffix(suffix) {
            return stripped;
        }
    }

    base
}

/// Write one basename per path to `out`, each followed by the terminator.
///
/// Paths are processed in order in a single pass. The first failed write
/// aborts the run and surfaces the sink's error as-is.
pub fn write_basenames<'a, I, W>(paths: I, config: &RunConfig, mut out: W) -> io::Result<()>
where
    I: IntoIterator<Item = &'a str>,
    W: io::Write,
{
    let terminator = [config.terminator.byte()];

    for path in paths {
        out.write_all(basename(path, config.suffix).as_bytes())?;
        out.write_all(&terminator)?;
    }

    Ok(())
}
