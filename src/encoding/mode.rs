use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which part of a URL a string is destined for.
///
/// Each variant carries its own set of characters that may stay literal; see
/// [`should_escape`](super::should_escape).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// A single path segment, e.g. `index.html`.
    #[default]
    PathSegment,
    /// A whole path, e.g. `/home/index.html`.
    Path,
    /// A key or value inside the query string.
    QueryComponent,
    /// A host name, optionally with `:port` or an `[ipv6]` literal.
    Host,
    /// An IPv6 zone identifier, e.g. the `eth0` in `[::1%25eth0]`.
    Zone,
    /// The `user:pass` credentials before the `@`.
    UserPassword,
    /// Everything after the `#`.
    Fragment,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid encoding: {0:?}")]
pub struct ParseModeError(pub String);

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::PathSegment,
        Mode::Path,
        Mode::QueryComponent,
        Mode::Host,
        Mode::Zone,
        Mode::UserPassword,
        Mode::Fragment,
    ];

    /// Single-letter code accepted by `-e`.
    pub fn code(self) -> &'static str {
        match self {
            Mode::PathSegment => "s",
            Mode::Path => "p",
            Mode::QueryComponent => "q",
            Mode::Host => "h",
            Mode::Zone => "z",
            Mode::UserPassword => "c",
            Mode::Fragment => "f",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::PathSegment => "path-segment",
            Mode::Path => "path",
            Mode::QueryComponent => "query",
            Mode::Host => "host",
            Mode::Zone => "zone",
            Mode::UserPassword => "cred",
            Mode::Fragment => "frag",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.code() == s || mode.name() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
