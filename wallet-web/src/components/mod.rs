//! UI Components

pub mod account_menu;
pub mod navbar;
pub mod wallet_selection;

pub use account_menu::AccountMenu;
pub use navbar::Navbar;
pub use wallet_selection::WalletSelection;
