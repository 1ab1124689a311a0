pub mod assets;
pub mod health;
pub mod products;
pub mod token;

pub use assets::{index, static_asset};
pub use health::status;
pub use products::{add_feedback, list_products};
pub use token::issue_token;
