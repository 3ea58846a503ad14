use std::sync::Arc;

use crate::repos::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub version: String,
}
