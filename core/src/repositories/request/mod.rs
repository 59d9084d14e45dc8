pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockItemRequestRepository;
pub use r#trait::ItemRequestRepository;
