use serde::Serialize;

/// Response payload for `POST /hackrx/run`.
#[derive(Debug, Serialize)]
pub struct RunResponse {
    /// One answer per question, same order as the request.
    pub answers: Vec<String>,
}
