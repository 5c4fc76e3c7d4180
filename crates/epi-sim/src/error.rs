use epi_core::{AgentId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no agent {id} in a population of {population}")]
    AgentNotFound { id: AgentId, population: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
