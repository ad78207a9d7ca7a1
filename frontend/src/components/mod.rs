pub mod nav;
pub mod auth {
    pub mod verification;
}
pub mod footer;
pub mod stage_card;
