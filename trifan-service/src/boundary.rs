//! Transport-agnostic boundary mapping for the triangulation endpoint
//!
//! The HTTP adapter owns sockets and routing; everything it needs to
//! decide (status codes, bodies, content types, method policy) lives
//! here. The error mapping matches the taxonomy exhaustively, so no
//! failure kind can reach the wire without a defined outcome.

use log::warn;
use serde::Serialize;
use trifan_core::{Error, PointSetId};

use crate::service::TriangulationService;

/// Content type of a successful mesh reply
pub const CONTENT_TYPE_BINARY: &str = "application/octet-stream";

/// Content type of an error reply
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// A fully rendered reply, ready for any HTTP adapter to serve
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// JSON body of an error reply.
///
/// 404 and 502 replies carry the code alone; detail text is attached
/// only where it cannot leak internal state (400 syntax diagnostics and
/// generic 500 failures).
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

fn error_reply(status: u16, code: &str, message: Option<&str>) -> HttpReply {
    let body = serde_json::to_vec(&ErrorBody { code, message })
        .expect("error body serialization cannot fail");
    HttpReply {
        status,
        content_type: CONTENT_TYPE_JSON,
        body,
    }
}

/// Map a core error onto its boundary outcome.
pub fn reply_for_error(err: &Error) -> HttpReply {
    match err {
        Error::PointSetNotFound => error_reply(404, "POINT_SET_NOT_FOUND", None),
        Error::InvalidPointSetId(detail) => {
            error_reply(400, "INVALID_POINT_SET_ID", Some(detail.as_str()))
        }
        Error::PointSetManagerUnavailable(detail) => {
            warn!("Upstream unavailable: {detail}");
            error_reply(502, "POINT_SET_MANAGER_UNAVAILABLE", None)
        }
        Error::Serialization(_) | Error::InvalidPointSet(_) | Error::Triangulation(_) => {
            let detail = err.to_string();
            error_reply(500, "TRIANGULATION_FAILED", Some(detail.as_str()))
        }
    }
}

/// Handle one GET on the triangulation endpoint.
///
/// The raw id is validated before either port is touched; a malformed id
/// is rejected without an upstream fetch.
pub fn handle_request(service: &TriangulationService, raw_id: &str) -> HttpReply {
    let id = match PointSetId::parse(raw_id) {
        Ok(id) => id,
        Err(err) => return reply_for_error(&err),
    };

    match service.handle(&id) {
        Ok(payload) => HttpReply {
            status: 200,
            content_type: CONTENT_TYPE_BINARY,
            body: payload,
        },
        Err(err) => reply_for_error(&err),
    }
}

/// Reject any method other than GET on the triangulation path.
pub fn reject_method(method: &str) -> Option<HttpReply> {
    if method.eq_ignore_ascii_case("GET") {
        None
    } else {
        Some(HttpReply {
            status: 405,
            content_type: CONTENT_TYPE_JSON,
            body: Vec::new(),
        })
    }
}
