//! Conversion between file paths and `file://` URIs.
//!
//! Paths are split on both `/` and `\` and each segment is percent-encoded,
//! so Windows drive paths (`C:\rdflint`) and Unix paths convert the same way
//! on every platform.

const FILE_SCHEME: &str = "file://";

/// Convert a file path to a `file://` URI.
///
/// ```
/// use rdflint::uri::file_path_to_uri;
///
/// assert_eq!(file_path_to_uri("/home/user/rdflint"), "file:///home/user/rdflint");
/// assert_eq!(file_path_to_uri(r"C:\rdflint"), "file:///C%3A/rdflint");
/// ```
pub fn file_path_to_uri(path: &str) -> String {
    let encoded = path
        .split(['/', '\\'])
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");

    if path.starts_with('/') {
        format!("{}{}", FILE_SCHEME, encoded)
    } else {
        format!("{}/{}", FILE_SCHEME, encoded)
    }
}

/// Convert a `file://` URI back to a file path.
///
/// A leading drive segment (`C:`) yields a Windows path. Returns `None` for
/// other schemes or segments that do not decode to UTF-8.
///
/// ```
/// use rdflint::uri::uri_to_file_path;
///
/// assert_eq!(uri_to_file_path("file:///C%3A/rdflint").as_deref(), Some(r"C:\rdflint"));
/// assert_eq!(uri_to_file_path("http://example.com/a.ttl"), None);
/// ```
pub fn uri_to_file_path(uri: &str) -> Option<String> {
    let encoded = uri.strip_prefix(FILE_SCHEME)?;
    let segments = encoded
        .split('/')
        .map(|segment| urlencoding::decode(segment).ok().map(|s| s.into_owned()))
        .collect::<Option<Vec<_>>>()?;

    match segments.split_first() {
        Some((first, rest)) if first.is_empty() && rest.first().is_some_and(|s| is_drive(s)) => {
            Some(rest.join("\\"))
        }
        _ => Some(segments.join("/")),
    }
}

fn is_drive(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some(':'), None) if letter.is_ascii_alphabetic()
    )
}
