use crate::constants::{BODY_CLOSE, BODY_OPEN};

/// Slice between the first `<body>` and the first `</body>`.
///
/// Marker order is not validated: a missing `</body>` yields the rest of the
/// document and a `</body>` in front of `<body>` yields an empty slice.
///
/// A missing `</body>` keeps the last character of the document. Slicing to
/// a `-1` end position would cut it off (`<body>no closing` gave
/// `no closin`); the full tail is returned instead.
pub fn extract_body(document: &str) -> Option<&str> {
    let start = document.find(BODY_OPEN)? + BODY_OPEN.len();
    let end = document.find(BODY_CLOSE).unwrap_or(document.len());

    if end < start {
        return Some("");
    }

    Some(&document[start..end])
}
