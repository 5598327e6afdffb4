mod window;
mod navigation;
mod main_page;
mod sidebar;
mod sidebar_row;
mod search_box;
mod suggestion_list;
mod course_page;

pub use self::window::Window;
pub use self::navigation::{Navigation, NavigationPage};
pub use self::main_page::MainPage;
pub use self::sidebar::Sidebar;
pub use self::sidebar_row::SidebarRow;
pub use self::search_box::SearchBox;
pub use self::suggestion_list::{SuggestionList, SuggestionRow};
pub use self::course_page::CoursePage;
