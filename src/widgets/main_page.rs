use crate::prelude::*;
use super::sidebar::Sidebar;
use super::search_box::SearchBox;
use super::suggestion_list::SuggestionList;

const ACTIVE_CSS_CLASS: &str = "active";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/course_compass/main_page.ui")]
    pub struct MainPage {
        #[template_child(id = "main-page-split-view")]
        pub split_view: TemplateChild<adw::OverlaySplitView>,
        #[template_child(id = "main-page-menu-button")]
        pub menu_button: TemplateChild<gtk::Button>,
        #[template_child(id = "main-page-sidebar")]
        pub sidebar: TemplateChild<Sidebar>,
        #[template_child(id = "main-page-search-box")]
        pub search_box: TemplateChild<SearchBox>,
        #[template_child(id = "main-page-suggestion-list")]
        pub suggestion_list: TemplateChild<SuggestionList>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for MainPage {
        const NAME: &'static str = "MainPage";
        type Type = super::MainPage;
        type ParentType = adw::NavigationPage;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for MainPage {
        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for MainPage {}
    impl NavigationPageImpl for MainPage {}
}

glib::wrapper! {
    pub struct MainPage(ObjectSubclass<imp::MainPage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl MainPage {

    pub fn sidebar(&self) -> &Sidebar {
        &self.imp().sidebar
    }

    pub fn search_box(&self) -> &SearchBox {
        &self.imp().search_box
    }

    pub fn suggestion_list(&self) -> &SuggestionList {
        &self.imp().suggestion_list
    }

    pub fn menu_button(&self) -> &gtk::Button {
        &self.imp().menu_button
    }

    // The open state is mirrored as an "active" class on both the toggle
    // control and the menu container.
    pub fn set_menu_active(&self, active: bool) {
        let imp = self.imp();

        if active {
            imp.menu_button.add_css_class(ACTIVE_CSS_CLASS);
            imp.sidebar.add_css_class(ACTIVE_CSS_CLASS);
        } else {
            imp.menu_button.remove_css_class(ACTIVE_CSS_CLASS);
            imp.sidebar.remove_css_class(ACTIVE_CSS_CLASS);
        }

        imp.split_view.set_show_sidebar(active);
    }

    pub fn menu_active(&self) -> bool {
        self.imp().menu_button.has_css_class(ACTIVE_CSS_CLASS)
    }

}
