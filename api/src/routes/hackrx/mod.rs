pub mod run_request;
pub mod run_response;
pub mod run_route;
