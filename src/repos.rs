pub mod memory;
pub mod user;

pub use memory::InMemoryUserRepo;
pub use user::{PgUserRepo, UserRepository};
