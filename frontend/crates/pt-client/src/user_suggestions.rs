use crate::{ApiRequest, ClientResult, Transport};

use pt_core::{UserDirectory, UserSuggestion};

use log::debug;

/// Path of a project's participant suggestions
pub fn user_suggestions_path(project_id: &str) -> String {
    format!("/get_user_suggestions/{project_id}/")
}

/// Loads the participant list a `UserDirectory` is built from
pub struct UserSuggestionClient<T: Transport> {
    transport: T,
}

impl<T: Transport> UserSuggestionClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Project participants (excluding the owner), optionally narrowed by
    /// a server-side name filter
    pub async fn fetch(
        &self,
        project_id: &str,
        query: Option<&str>,
    ) -> ClientResult<Vec<UserSuggestion>> {
        let mut request = ApiRequest::get(user_suggestions_path(project_id));
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            request = request.with_query("query", query);
        }

        let users: Vec<UserSuggestion> = self.transport.send(request).await?.into_json()?;
        debug!(
            "Loaded {} user suggestions for project {project_id}",
            users.len()
        );
        Ok(users)
    }

    pub async fn directory(&self, project_id: &str) -> ClientResult<UserDirectory> {
        Ok(UserDirectory::new(self.fetch(project_id, None).await?))
    }
}
