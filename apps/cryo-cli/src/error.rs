//! Error type wrapping the backend crates for the CLI.

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Material error: {0}")]
    Material(String),

    #[error("Model assembly failed: {0}")]
    Assembly(String),

    #[error("Load curve error: {0}")]
    LoadCurve(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<cryo_project::ProjectError> for AppError {
    fn from(err: cryo_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<cryo_materials::MaterialError> for AppError {
    fn from(err: cryo_materials::MaterialError) -> Self {
        AppError::Material(err.to_string())
    }
}

impl From<cryo_net::NetError> for AppError {
    fn from(err: cryo_net::NetError) -> Self {
        AppError::Assembly(err.to_string())
    }
}

impl From<cryo_ptc::PtcError> for AppError {
    fn from(err: cryo_ptc::PtcError) -> Self {
        AppError::LoadCurve(err.to_string())
    }
}

impl From<cryo_sim::SimError> for AppError {
    fn from(err: cryo_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<cryo_results::ResultsError> for AppError {
    fn from(err: cryo_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
