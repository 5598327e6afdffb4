use crate::prelude::*;
use super::sidebar_row::SidebarRow;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/course_compass/sidebar.ui")]
    pub struct Sidebar {
        #[template_child(id = "sidebar-list-box")]
        pub list_box: TemplateChild<gtk::ListBox>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Sidebar {
        const NAME: &'static str = "Sidebar";
        type Type = super::Sidebar;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Sidebar {
        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for Sidebar {}
    impl BoxImpl for Sidebar {}
}

glib::wrapper! {
    pub struct Sidebar(ObjectSubclass<imp::Sidebar>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl Sidebar {

    pub fn append_row(&self, row: SidebarRow) {
        self.imp().list_box.append(&row);
    }

    pub fn connect_row_activated<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, usize, &SidebarRow) + 'static,
    {
        let this_weak = self.downgrade();
        self.imp().list_box.connect_row_activated(move |_list, row| {
            if
                let Some(this) = this_weak.upgrade()
                && let Some(row) = row.downcast_ref::<SidebarRow>()
            {
                callback(&this, row.index() as usize, row);
            }
        })
    }

}
