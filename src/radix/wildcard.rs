use super::{RadixError, RadixResult};
use smallvec::SmallVec;

pub(super) const PARAM_MARKER: u8 = b':';
pub(super) const CATCH_ALL_MARKER: u8 = b'*';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Wildcard {
    /// Offset of the marker byte.
    pub start: usize,
    /// Offset of the next `/` after the marker, or the path length.
    pub end: usize,
}

impl Wildcard {
    #[inline]
    pub fn text<'p>(&self, path: &'p [u8]) -> &'p [u8] {
        &path[self.start..self.end]
    }

    #[inline]
    pub fn name<'p>(&self, path: &'p [u8]) -> &'p [u8] {
        &path[self.start + 1..self.end]
    }

    #[inline]
    pub fn is_catch_all(&self, path: &[u8]) -> bool {
        path[self.start] == CATCH_ALL_MARKER
    }
}

#[inline]
pub(super) fn is_wildcard_marker(byte: u8) -> bool {
    byte == PARAM_MARKER || byte == CATCH_ALL_MARKER
}

/// Locates the first wildcard at or after `from`.
pub(super) fn find_wildcard(path: &[u8], from: usize) -> Option<Wildcard> {
    let start = from + memchr::memchr2(PARAM_MARKER, CATCH_ALL_MARKER, path.get(from..)?)?;
    let end = memchr::memchr(b'/', &path[start + 1..])
        .map(|offset| start + 1 + offset)
        .unwrap_or(path.len());
    Some(Wildcard { start, end })
}

/// Wildcard bounds always sit next to ASCII bytes, so the text between them
/// is whole characters.
pub(super) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Checks wildcard syntax for a full route path before any node is touched,
/// so a rejected path never leaves a half-built branch behind.
pub(super) fn validate_route_path(path: &str) -> RadixResult<()> {
    if !path.starts_with('/') {
        return Err(RadixError::MissingLeadingSlash {
            path: path.to_string(),
        });
    }

    let bytes = path.as_bytes();
    let mut names: SmallVec<[&[u8]; 4]> = SmallVec::new();
    let mut cursor = 0;

    while let Some(wildcard) = find_wildcard(bytes, cursor) {
        let text = wildcard.text(bytes);
        if text.iter().skip(1).any(|&b| is_wildcard_marker(b)) {
            return Err(RadixError::MultipleWildcardsInSegment {
                segment: lossy(text),
                path: path.to_string(),
            });
        }
        if text.len() < 2 {
            return Err(RadixError::EmptyWildcardName {
                path: path.to_string(),
            });
        }
        if wildcard.is_catch_all(bytes) {
            if wildcard.end != bytes.len() {
                return Err(RadixError::CatchAllNotTerminal {
                    path: path.to_string(),
                });
            }
            if bytes[wildcard.start - 1] != b'/' {
                return Err(RadixError::CatchAllMissingSlash {
                    path: path.to_string(),
                });
            }
        }

        let name = wildcard.name(bytes);
        if names.contains(&name) {
            return Err(RadixError::DuplicateParamName {
                param: lossy(name),
                path: path.to_string(),
            });
        }
        names.push(name);
        cursor = wildcard.end;
    }

    Ok(())
}
