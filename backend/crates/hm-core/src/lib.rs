pub mod models;
pub mod store;

pub use models::guest::Guest;
pub use models::guest_update::GuestUpdate;
pub use store::{IdentityStore, StoreError, StoreResult};

#[cfg(test)]
mod tests;
