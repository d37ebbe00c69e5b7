use smallvec::SmallVec;

/// Returns the canonical form of a request path: a single leading `/`, no
/// empty, `.` or `..` elements, and a trailing `/` only if the input had one.
/// `..` never climbs above the root.
#[inline]
#[tracing::instrument(level = "trace", skip(path), fields(path_len = path.len() as u64))]
pub fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let mut elements: SmallVec<[&str; 8]> = SmallVec::new();
    let mut last = "";
    for element in path.split('/') {
        last = element;
        match element {
            "" | "." => {}
            ".." => {
                elements.pop();
            }
            other => elements.push(other),
        }
    }

    let trailing = (path.len() > 1 && path.ends_with('/')) || last == ".";

    let mut out = String::with_capacity(path.len() + 1);
    for element in elements.iter() {
        out.push('/');
        out.push_str(element);
    }
    if out.is_empty() || trailing {
        out.push('/');
    }
    out
}

/// Joins a group prefix and a route path.
pub fn join_paths(prefix: &str, path: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + path.len());
    out.push_str(prefix);
    out.push_str(path);
    out
}
