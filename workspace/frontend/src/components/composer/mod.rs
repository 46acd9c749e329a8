pub mod actions;
pub mod asset_row;
pub mod view;

pub use view::PortfolioComposer;
