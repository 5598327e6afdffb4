use crate::prelude::*;
use crate::models::Course;

use std::cell::{Cell, RefCell};
use glib::{GString, Properties};

// SUGGESTION_LIST

mod suggestion_list {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/course_compass/suggestion_list.ui")]
    pub struct SuggestionList {
        #[template_child(id = "suggestion-list-box")]
        pub list_box: TemplateChild<gtk::ListBox>,

        pub rows: RefCell<Vec<super::SuggestionRow>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for SuggestionList {
        const NAME: &'static str = "SuggestionList";
        type Type = super::SuggestionList;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for SuggestionList {
        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for SuggestionList {}
    impl BinImpl for SuggestionList {}
}

glib::wrapper! {
    pub struct SuggestionList(ObjectSubclass<suggestion_list::SuggestionList>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl SuggestionList {

    pub fn clear(&self) {
        let imp = self.imp();
        for row in imp.rows.borrow_mut().drain(..) {
            imp.list_box.remove(&row);
        }
    }

    pub fn append_row(&self, row: SuggestionRow) {
        let imp = self.imp();
        imp.list_box.append(&row);
        imp.rows.borrow_mut().push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.imp().rows.borrow().is_empty()
    }

    pub fn connect_row_activated<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, usize, &SuggestionRow) + 'static,
    {
        let this_weak = self.downgrade();
        self.imp().list_box.connect_row_activated(move |_list, row| {
            if
                let Some(this) = this_weak.upgrade()
                && let Some(row) = row.downcast_ref::<SuggestionRow>()
            {
                callback(&this, row.index() as usize, row);
            }
        })
    }

}

// SUGGESTION_ROW

mod suggestion_row {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, Properties)]
    #[template(resource = "/io/github/course_compass/suggestion_row.ui")]
    #[properties(wrapper_type = super::SuggestionRow)]
    pub struct SuggestionRow {
        #[template_child(id = "suggestion-row-label")]
        pub label_widget: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub title: RefCell<GString>,
        #[property(get, construct_only)]
        pub index: Cell<u32>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for SuggestionRow {
        const NAME: &'static str = "SuggestionRow";
        type Type = super::SuggestionRow;
        type ParentType = gtk::ListBoxRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for SuggestionRow {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.connect_title_notify(|row| {
                row.imp().label_widget.set_label(&row.title());
            });
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl ListBoxRowImpl for SuggestionRow {}
    impl WidgetImpl for SuggestionRow {}
}

glib::wrapper! {
    pub struct SuggestionRow(ObjectSubclass<suggestion_row::SuggestionRow>)
        @extends gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Actionable;
}

impl SuggestionRow {
    pub fn from_course(course: &Course, index: usize) -> Self {
        glib::Object::builder::<Self>()
            .property("title", course.title)
            .property("index", index as u32)
            .build()
    }
}
