//! UI Components
//!
//! Reusable Leptos components for both pages.

mod icon;
mod title_bar;
mod mobile_drawer;
mod confirm_button;
mod progress_bar;
mod toast_host;
mod docs_sidebar;
mod doc_section;
mod faq_accordion;
mod title_editor;
mod category_nav;
mod category_card;

pub use icon::Icon;
pub use title_bar::TitleBar;
pub use mobile_drawer::MobileDrawer;
pub use confirm_button::ConfirmButton;
pub use progress_bar::ProgressBar;
pub use toast_host::ToastHost;
pub use docs_sidebar::DocsSidebar;
pub use doc_section::DocSectionView;
pub use faq_accordion::FaqAccordion;
pub use title_editor::TitleEditor;
pub use category_nav::CategoryNav;
pub use category_card::CategoryCard;
