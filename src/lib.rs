pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::models::question::Question;

#[derive(Clone)]
pub struct AppState {
    pub bank: &'static [Question],
}

impl AppState {
    pub fn new() -> Self {
        Self {
            bank: crate::models::bank::question_bank(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
