//! Error types for the Catalog Service client.

use thiserror::Error;

/// Errors that can occur when talking to the Catalog Service.
///
/// Transport failures, GraphQL-level errors, and malformed bodies are kept
/// distinct so callers can tell a dead network from a rejected query.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed before a body arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("catalog service returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Well-formed response carrying a GraphQL errors array.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// Non-JSON or envelope-violating body.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A 200 response with neither data nor errors.
    #[error("response contained no data")]
    MissingData,

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// User error from a mutation (e.g., invalid input).
    #[error("user error: {0}")]
    UserError(String),
}

/// A GraphQL error returned by the Catalog Service.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            if let Some(loc) = e.locations.first() {
                parts.push(format!("at line {}:{}", loc.line, loc.column));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
