/// Failure reported by the bills store
///
/// The message is what the user sees; the variant only decides styling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Transport(String),
}

impl StoreError {
    /// Map a non-success HTTP status to the message shown in the error view
    pub fn from_status(status: u16) -> Self {
        let message = format!("Erreur {status}");
        if status == 404 {
            StoreError::NotFound(message)
        } else {
            StoreError::Server(message)
        }
    }

    pub fn message(&self) -> &str {
        match self {
            StoreError::NotFound(message)
            | StoreError::Server(message)
            | StoreError::Transport(message) => message,
        }
    }

    /// CSS modifier for the error view
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "not-found",
            StoreError::Server(_) => "server",
            StoreError::Transport(_) => "transport",
        }
    }
}

/// Reasons a submission fails before or during the create call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Aucune session active")]
    MissingSession,

    #[error("Montant invalide : {0}")]
    InvalidAmount(String),

    #[error("Taux invalide : {0}")]
    InvalidPct(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
