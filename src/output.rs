use serde_json::json;

use crate::engine::{MatchRecord, SearchRequest};
use crate::extract::Location;

/// Renders the match list as the plain report lines, one per match.
/// The same lines go to stdout and to the export file.
pub fn render_text(records: &[MatchRecord]) -> Vec<String> {
    records.iter().map(MatchRecord::to_string).collect()
}

/// Renders the match list as a JSON document.
pub fn render_json(request: &SearchRequest, records: &[MatchRecord]) -> String {
    let matches: Vec<_> = records
        .iter()
        .map(|record| {
            let location = match record.location {
                Location::Line(line) => json!({ "line": line }),
                Location::Page { page, line } => json!({ "page": page, "line": line }),
            };
            json!({
                "path": record.path.to_string_lossy(),
                "location": location,
                "text": record.line,
            })
        })
        .collect();

    let document = json!({
        "keyword": request.keyword,
        "root": request.root.to_string_lossy(),
        "total_matches": records.len(),
        "matches": matches,
    });

    serde_json::to_string_pretty(&document).unwrap()
}
