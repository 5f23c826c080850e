//! HTTP span helpers.

/// Route segments whose following segment is a caller-supplied identifier.
const PARAMETERISED_SEGMENTS: [(&str, &str); 1] = [("track", "{tracking_number}")];

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Replace identifier segments with their route placeholder so span names
/// and metric labels stay low-cardinality.
fn normalise_path_for_span_name(path: &str) -> String {
    let mut segments = Vec::new();
    let mut placeholder = None;

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        segments.push(placeholder.take().unwrap_or(segment));

        placeholder = PARAMETERISED_SEGMENTS
            .iter()
            .find(|(parent, _)| *parent == segment)
            .map(|(_, placeholder)| *placeholder);
    }

    format!("/{}", segments.join("/"))
}
