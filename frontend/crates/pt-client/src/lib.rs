//! pt-client
//!
//! HTTP side of the task and sprint composers: CSRF token lookup, the
//! transport seam, and the submitters that turn composed records into
//! save requests.

pub mod csrf;
pub mod error;
pub mod outcome;
pub mod responses;
pub mod sprint_submitter;
pub mod task_submitter;
pub mod transport;
pub mod user_suggestions;


pub use csrf::{CSRF_COOKIE_NAME, CSRF_HEADER, token_from_cookies};
pub use error::{ClientError, Result as ClientResult};
pub use outcome::SubmitOutcome;
pub use responses::{ExistsResponse, SaveResponse};
pub use sprint_submitter::SprintSubmitter;
pub use task_submitter::{SAVE_TASK_PATH, TaskSubmitter};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
pub use user_suggestions::{UserSuggestionClient, user_suggestions_path};
