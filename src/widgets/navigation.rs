use crate::prelude::*;
use super::main_page::MainPage;
use super::course_page::CoursePage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPage {
    Main,
    Course,
}

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/course_compass/navigation.ui")]
    pub struct Navigation {
        #[template_child(id = "navigation-view")]
        pub view: TemplateChild<adw::NavigationView>,
        #[template_child(id = "navigation-main-page")]
        pub main_page: TemplateChild<MainPage>,
        #[template_child(id = "navigation-course-page")]
        pub course_page: TemplateChild<CoursePage>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Navigation {
        const NAME: &'static str = "Navigation";
        type Type = super::Navigation;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Navigation {
        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for Navigation {}
    impl BinImpl for Navigation {}
}

glib::wrapper! {
    pub struct Navigation(ObjectSubclass<imp::Navigation>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl Navigation {
    pub fn main_page(&self) -> &MainPage {
        &self.imp().main_page
    }

    pub fn course_page(&self) -> &CoursePage {
        &self.imp().course_page
    }

    pub fn push_page(&self, page: NavigationPage) {
        let view: &adw::NavigationView = &self.imp().view;

        let widget: &adw::NavigationPage = match page {
            NavigationPage::Main => self.main_page().upcast_ref(),
            NavigationPage::Course => self.course_page().upcast_ref(),
        };

        view.push(widget);
    }

    pub fn replace_with_page(&self, page: NavigationPage) {
        let view: &adw::NavigationView = &self.imp().view;

        let widget: adw::NavigationPage = match page {
            NavigationPage::Main => self.main_page().clone().upcast(),
            NavigationPage::Course => self.course_page().clone().upcast(),
        };

        view.replace(&[widget]);
    }

    pub fn page(&self) -> Option<NavigationPage> {
        let view = &self.imp().view;
        let tag = view.visible_page()?.tag();

        if self.main_page().tag() == tag {
            Some(NavigationPage::Main)
        } else if self.course_page().tag() == tag {
            Some(NavigationPage::Course)
        } else {
            None
        }
    }
}
