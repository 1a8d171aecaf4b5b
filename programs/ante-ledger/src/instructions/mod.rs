pub mod initialize_config;
pub mod update_config;
pub mod create_ante;
pub mod deposit;
pub mod settle;
pub mod withdraw;
pub mod quote_odds;
pub mod lookup;

pub use initialize_config::*;
pub use update_config::*;
pub use create_ante::*;
pub use deposit::*;
pub use settle::*;
pub use withdraw::*;
pub use quote_odds::*;
pub use lookup::*;
