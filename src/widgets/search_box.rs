use crate::prelude::*;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/course_compass/search_box.ui")]
    pub struct SearchBox {
        #[template_child(id = "search-box-entry")]
        pub entry: TemplateChild<gtk::SearchEntry>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for SearchBox {
        const NAME: &'static str = "SearchBox";
        type Type = super::SearchBox;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for SearchBox {
        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for SearchBox {}
    impl BinImpl for SearchBox {}
}

glib::wrapper! {
    pub struct SearchBox(ObjectSubclass<imp::SearchBox>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl SearchBox {

    pub fn grab_entry_focus(&self) -> bool {
        self.imp().entry.grab_focus()
    }

    // GtkSearchEntry delays search-changed; the editable's changed signal
    // fires on every keystroke.
    pub fn connect_query_changed<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &str) + 'static,
    {
        let this_weak = self.downgrade();
        self.imp().entry.connect_changed(move |entry| {
            if let Some(this) = this_weak.upgrade() {
                callback(&this, &entry.text());
            }
        })
    }

    pub fn connect_submitted<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &str) + 'static,
    {
        let this_weak = self.downgrade();
        self.imp().entry.connect_activate(move |entry| {
            if let Some(this) = this_weak.upgrade() {
                callback(&this, &entry.text());
            }
        })
    }

}
