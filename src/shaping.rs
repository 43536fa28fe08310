//! Field-level reshaping of raw Give Food records.
//!
//! The directory stores coordinates as one `"<lat>,<lng>"` string and keeps
//! lists (needs, address lines) as newline-delimited text. These helpers turn
//! those into the shapes the GraphQL schema exposes. Both are total: they never
//! fail, whatever the input looks like.

/// A coordinate pair as found in the source, before any numeric coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// Split a combined `latt_long` value into its two parts.
///
/// No validation happens here. A value without a comma yields only `lat`, and
/// anything after a second comma is dropped. Absent or empty input yields an
/// empty pair.
pub fn parse_lat_lng(latt_long: Option<&str>) -> Coordinates {
    match latt_long {
        Some(value) if !value.is_empty() => {
            let mut parts = value.split(',');
            Coordinates {
                lat: parts.next().map(str::to_owned),
                lng: parts.next().map(str::to_owned),
            }
        }
        _ => Coordinates::default(),
    }
}

/// Split text on `\n` or `\r\n` line breaks, keeping empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(index) = rest.find('\n') {
        let line = &rest[..index];
        lines.push(line.strip_suffix('\r').unwrap_or(line).to_owned());
        rest = &rest[index + 1..];
    }
    lines.push(rest.to_owned());

    lines
}

/// Collapse a multi-line address into a single display line.
pub fn join_address(address: &str) -> String {
    split_lines(address).join(", ")
}
