//! Root greeting handler.

use crate::config::GREETING;

/// Root handler.
///
/// Returns the fixed greeting as `text/plain`, ignoring request headers and
/// query string. There is no failure path.
pub async fn index() -> &'static str {
    GREETING
}
