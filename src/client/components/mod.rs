pub mod character_card;
pub mod character_form;
pub mod character_list;
pub mod navbar;
pub mod page;
pub mod toast;

pub use character_card::RosterCard;
pub use character_form::CharacterForm;
pub use character_list::CharacterList;
pub use navbar::Navbar;
pub use page::Page;
pub use toast::ToastHost;
