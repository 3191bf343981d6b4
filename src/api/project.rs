use crate::{
    api::{request_failed, ApiClient, Transport},
    model::{
        api::DataEnvelope,
        project::{NewProject, ProjectDto},
    },
    Error,
};

impl<T: Transport> ApiClient<T> {
    /// `GET /api/project/get-all-projects`, customers populated
    pub async fn list_projects(&self) -> Result<Vec<ProjectDto>, Error> {
        self.get_json::<DataEnvelope<ProjectDto>>("/api/project/get-all-projects")
            .await
            .map(|envelope| envelope.data)
            .map_err(request_failed("Failed to load projects"))
    }

    pub async fn create_project(&self, project: &NewProject) -> Result<(), Error> {
        self.post_json("/api/project/create-project", project)
            .await
            .map(drop)
            .map_err(request_failed("Failed to create project. Please try again."))
    }
}
