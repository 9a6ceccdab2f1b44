//! HTTP request/response tracing middleware.

use axum::extract::MatchedPath;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Span factory recording method, URI and the matched route template.
///
/// The route template (`/jet.fuel/{code}`) keeps redirect logs groupable even
/// though every short code produces a different URI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteSpan;

impl<B> MakeSpan<B> for RouteSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let route = request
            .extensions()
            .get::<MatchedPath>()
            .map(MatchedPath::as_str)
            .unwrap_or("<unmatched>");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            route
        )
    }
}

/// Creates the tracing middleware.
///
/// Logs one `INFO` line per response with status and latency in milliseconds,
/// and an `ERROR` line for 5xx responses.
///
/// ```text
/// INFO request{method=GET uri=/jet.fuel/2H1PG route=/jet.fuel/{code}}: finished processing request latency=3 ms status=302
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RouteSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RouteSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
