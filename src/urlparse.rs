//! Split a URL into delimited fields for shell scripts.
//!
//! Path fields follow slash-separated path rules, the same ones `dirname`
//! and `basename` apply, but always with `/` regardless of platform.

use url::Url;

/// One piece of a parsed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlField {
    /// Scheme, e.g. `http`
    Protocol,
    /// Host name, with `:port` when the URL names a non-default port
    Host,
    Path,
    /// Last element of the path
    Base,
    /// Everything but the last element of the path
    Dir,
    /// Extension of the last path element, including the dot
    Extension,
}

impl UrlField {
    /// Fields shown when none are requested.
    pub const DEFAULT: [UrlField; 3] = [UrlField::Protocol, UrlField::Host, UrlField::Path];

    /// Build the field list from CLI flags, always in display order.
    pub fn selected(
        protocol: bool,
        host: bool,
        path: bool,
        base: bool,
        dir: bool,
        extension: bool,
    ) -> Vec<UrlField> {
        [
            (protocol, UrlField::Protocol),
            (host, UrlField::Host),
            (path, UrlField::Path),
            (base, UrlField::Base),
            (dir, UrlField::Dir),
            (extension, UrlField::Extension),
        ]
        .into_iter()
        .filter_map(|(on, field)| on.then_some(field))
        .collect()
    }

    pub fn extract(&self, url: &Url) -> String {
        match self {
            UrlField::Protocol => url.scheme().to_string(),
            UrlField::Host => host_port(url),
            UrlField::Path => url.path().to_string(),
            UrlField::Base => base(url.path()),
            UrlField::Dir => dir(url.path()),
            UrlField::Extension => ext(url.path()).to_string(),
        }
    }
}

/// Join the requested fields of `url` with `delimiter`.
///
/// An empty field list shows protocol, host and path.
pub fn render(url: &Url, fields: &[UrlField], delimiter: &str) -> String {
    let fields = if fields.is_empty() {
        &UrlField::DEFAULT[..]
    } else {
        fields
    };
    fields
        .iter()
        .map(|field| field.extract(url))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Host with an explicit port appended.
pub fn host_port(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// Shortest equivalent path: repeated slashes, `.` elements and `..` after a
/// named element are removed. Empty input is `.`.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` above the root stays at the root
                _ if rooted => {}
                _ => parts.push(".."),
            },
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Last element of `path`, ignoring trailing slashes.
///
/// `""` is `.`, and a path of only slashes is `/`.
pub fn base(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    match trimmed.rfind('/') {
        Some(i) => trimmed[i + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Everything up to the last slash of `path`, cleaned.
pub fn dir(path: &str) -> String {
    let head = match path.rfind('/') {
        Some(i) => &path[..=i],
        None => "",
    };
    clean(head)
}

/// Extension of the last element, from its final dot. Empty if there is none.
pub fn ext(path: &str) -> &str {
    let last = match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    };
    match last.rfind('.') {
        Some(i) => &last[i..],
        None => "",
    }
}
