use crate::prelude::*;
use crate::models::Course;

use std::cell::{Cell, RefCell};
use glib::{GString, Properties};

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, Properties)]
    #[template(resource = "/io/github/course_compass/sidebar_row.ui")]
    #[properties(wrapper_type = super::SidebarRow)]
    pub struct SidebarRow {
        #[template_child(id = "sidebar-row-label")]
        pub label_widget: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub label: RefCell<GString>,
        #[property(get, construct_only)]
        pub index: Cell<u32>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for SidebarRow {
        const NAME: &'static str = "SidebarRow";
        type Type = super::SidebarRow;
        type ParentType = gtk::ListBoxRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for SidebarRow {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.connect_label_notify(|row| {
                row.imp().label_widget.set_label(&row.label());
            });
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl ListBoxRowImpl for SidebarRow {}
    impl WidgetImpl for SidebarRow {}
}

glib::wrapper! {
    pub struct SidebarRow(ObjectSubclass<imp::SidebarRow>)
        @extends gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Actionable;
}

impl SidebarRow {
    pub fn from_course(course: &Course, index: usize) -> Self {
        glib::Object::builder::<Self>()
            .property("label", course.title)
            .property("index", index as u32)
            .build()
    }
}
