//! report::format
//!
//! Rendering of the requested fields as long or short output.
//!
//! # Design
//!
//! Field order is always version, identifier, description, release,
//! codename, regardless of how the request was flagged. This matches the
//! legacy tool's positional convention, which matters for short output
//! since that is just the data values with no labels.

use super::derive::FieldSet;

/// Which fields to emit, and in which rendering mode.
///
/// Constructed once from the CLI flags and consumed by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub version: bool,
    pub identifier: bool,
    pub description: bool,
    pub release: bool,
    pub codename: bool,
    pub short: bool,
}

impl ReportRequest {
    /// Build a request from the legacy flag set.
    ///
    /// `all` forces every field. If no field was requested, the default is
    /// version only.
    pub fn from_flags(
        all: bool,
        codename: bool,
        description: bool,
        id: bool,
        release: bool,
        version: bool,
        short: bool,
    ) -> Self {
        let any = all || codename || description || id || release || version;
        Self {
            version: version || all || !any,
            identifier: id || all,
            description: description || all,
            release: release || all,
            codename: codename || all,
            short,
        }
    }
}

/// Render the requested fields as a single text block.
///
/// Long mode emits one `Label:\tvalue` line per field; short mode joins the
/// bare values with single spaces, quoting any value that contains
/// whitespace. No trailing separator follows the last field.
pub fn render(fields: &FieldSet, request: &ReportRequest) -> String {
    let mut segments = Vec::new();

    if request.version {
        segments.push(format_field("Version", &fields.version, request.short));
    }
    if request.identifier {
        segments.push(format_field(
            "Distributor ID",
            &fields.identifier,
            request.short,
        ));
    }
    if request.description {
        segments.push(format_field(
            "Description",
            &fields.description,
            request.short,
        ));
    }
    if request.release {
        segments.push(format_field("Release", &fields.release, request.short));
    }
    if request.codename {
        segments.push(format_field("Codename", &fields.codename, request.short));
    }

    segments.join(if request.short { " " } else { "\n" })
}

/// Format one field.
///
/// In short mode the result is a single unlabeled token, so values with
/// embedded whitespace are wrapped in double quotes to stay delineated.
fn format_field(label: &str, value: &str, short: bool) -> String {
    if short {
        if value.chars().any(char::is_whitespace) {
            format!("\"{}\"", value)
        } else {
            value.to_string()
        }
    } else {
        format!("{}:\t{}", label, value)
    }
}
