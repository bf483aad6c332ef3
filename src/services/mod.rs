pub mod bootstrap;
pub mod fee_quoter_view;

pub use bootstrap::*;
pub use fee_quoter_view::*;
