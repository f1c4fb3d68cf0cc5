/// GET /
/// Answers as soon as the listener is up, whether or not brochures are loaded.
pub async fn root_handler() -> &'static str {
    "The server is ready"
}
