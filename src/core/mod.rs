pub mod r#move;
pub mod types;

pub use r#move::{MoveToken, Promotion};
pub use types::{Side, Square};
