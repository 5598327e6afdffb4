use crate::prelude::*;
use super::navigation::Navigation;

use gtk::gio::{ActionGroup, ActionMap};

const CLOSE_RESPONSE: &str = "close";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/course_compass/window.ui")]
    pub struct Window {
        #[template_child(id = "window-navigation")]
        pub navigation: TemplateChild<Navigation>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Window {
        const NAME: &'static str = "Window";
        type Type = super::Window;
        type ParentType = adw::ApplicationWindow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Window {
        fn constructed(&self) {
            self.parent_constructed();
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for Window {}
    impl WindowImpl for Window {}
    impl ApplicationWindowImpl for Window {}
    impl AdwApplicationWindowImpl for Window {}
}

glib::wrapper! {
    pub struct Window(ObjectSubclass<imp::Window>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager, ActionMap, ActionGroup;
}

impl Window {
    pub fn new(application: &adw::Application) -> Self {
        glib::Object::builder()
            .property("application", application)
            .build()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.imp().navigation
    }

    pub fn alert(&self, message: &str) {
        let dialog = adw::AlertDialog::new(None, Some(message));
        dialog.add_response(CLOSE_RESPONSE, "Close");
        dialog.set_default_response(Some(CLOSE_RESPONSE));
        dialog.set_close_response(CLOSE_RESPONSE);
        dialog.present(Some(self));
    }
}
