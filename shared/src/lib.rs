pub mod models {
    pub mod identity;
    pub mod stage;
    pub mod verification;
}

pub mod catalog;
pub mod error;
pub mod reveal;

// Re-export commonly used items
pub use error::{SharedError, Result};
pub use catalog::StageCatalog;
pub use reveal::{
    AnalyticsView, PageViewState, RevealController, RevealEffect, RevealTicket,
    REVEAL_DELAY_MS, SIGN_IN_PATH,
};

// Re-export models
pub use models::{
    identity::{AuthSource, Identity},
    stage::{reference_records, InformationalRecord, StageClass},
    verification::VerificationRequest,
};
