use super::widgets::{
    Window,
    Navigation,
    NavigationPage,
    MainPage,
    Sidebar,
    SearchBox,
    SuggestionList,
    CoursePage,
};

use std::rc::Rc;

#[derive(Clone)]
pub struct Ui {
    window: Rc<Window>,
}

impl Ui {

    pub fn new(window: Window) -> Self {
        Self { window: Rc::new(window) }
    }

    pub fn activate(&self) {
        self.window.navigation().replace_with_page(NavigationPage::Main);
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn navigation(&self) -> &Navigation {
        self.window.navigation()
    }

    pub fn main_page(&self) -> &MainPage {
        self.navigation().main_page()
    }

    pub fn sidebar(&self) -> &Sidebar {
        self.main_page().sidebar()
    }

    pub fn search_box(&self) -> &SearchBox {
        self.main_page().search_box()
    }

    pub fn suggestion_list(&self) -> &SuggestionList {
        self.main_page().suggestion_list()
    }

    pub fn course_page(&self) -> &CoursePage {
        self.navigation().course_page()
    }

}
