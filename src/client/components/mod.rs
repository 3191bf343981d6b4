pub mod inputs;
pub mod layout;
pub mod list;
pub mod page;
pub mod sidebar;
pub mod toast;
pub mod topbar;

pub use inputs::{choice_options, FormActions, SelectInput, TextArea, TextInput};
pub use layout::DashboardLayout;
pub use list::{Pagination, SearchBox, SortHeader};
pub use page::{Card, Page};
pub use sidebar::Sidebar;
pub use toast::ToastHost;
pub use topbar::TopBar;
