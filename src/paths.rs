//! Lexical path decomposition into the names that get checked.
//!
//! Nothing here touches the filesystem. Both `/` and `\` count as separators
//! regardless of platform, so Windows-style input decomposes the same way on
//! every host.

/// Pieces of a path needed for naming checks, computed once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PathComponents {
    pub(crate) is_hidden: bool,
    pub(crate) base_name: String,
    pub(crate) folders: Vec<String>,
}

impl PathComponents {
    pub(crate) fn from_path(path: &str) -> Self {
        Self {
            is_hidden: is_hidden(path),
            base_name: base_name_without_extension(path),
            folders: folders_from_path(path),
        }
    }
}

fn is_separator(ch: char) -> bool {
    ch == '/' || ch == '\\'
}

/// Return the last segment of `path` after dropping trailing separators and
/// any drive volume.
///
/// An empty path yields `.`; a path with nothing left after trimming yields `/`.
fn final_segment(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let (_, trimmed) = split_volume(path.trim_end_matches(is_separator));
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind(is_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// True when the final segment starts with a dot and is not `.` or `..`.
///
/// # Examples
/// ```ignore
/// assert!(is_hidden("/path/to/.hidden"));
/// assert!(!is_hidden(".."));
/// ```
pub(crate) fn is_hidden(path: &str) -> bool {
    let name = final_segment(path);
    name.starts_with('.') && name != "." && name != ".."
}

/// Final segment with everything from its last dot onward removed.
pub(crate) fn base_name_without_extension(path: &str) -> String {
    let name = final_segment(path);
    match name.rfind('.') {
        Some(idx) => name[..idx].to_string(),
        None => name.to_string(),
    }
}

/// Folder names of the cleaned path, excluding the final segment.
pub(crate) fn folders_from_path(path: &str) -> Vec<String> {
    let mut segments = clean_segments(path);
    segments.pop();
    segments
}

/// Split off a leading drive volume such as `C:`.
fn split_volume(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        path.split_at(2)
    } else {
        ("", path)
    }
}

/// Lexically clean `path` and return its non-empty segments in order.
///
/// Repeated separators collapse, `.` drops out and `..` removes the segment
/// before it. A `..` that climbs above the root of a rooted path is dropped;
/// on a relative path it is kept. A drive volume is never removed.
fn clean_segments(path: &str) -> Vec<String> {
    let (volume, rest) = split_volume(path);
    let rooted = rest.starts_with(is_separator);

    let mut segments: Vec<&str> = Vec::new();
    for part in rest.split(is_separator) {
        match part {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let mut cleaned: Vec<String> = segments.into_iter().map(str::to_string).collect();
    if volume.is_empty() {
        return cleaned;
    }
    if rooted || cleaned.is_empty() {
        cleaned.insert(0, volume.to_string());
    } else {
        // `C:name` keeps the volume glued to the first segment.
        cleaned[0].insert_str(0, volume);
    }
    cleaned
}
