use crate::prelude::*;
use crate::models::Course;

use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/course_compass/course_page.ui")]
    pub struct CoursePage {
        #[template_child(id = "course-page-document-row")]
        pub document_row: TemplateChild<adw::ActionRow>,
        #[template_child(id = "course-page-topics-group")]
        pub topics_group: TemplateChild<adw::PreferencesGroup>,

        pub topic_rows: RefCell<Vec<adw::ActionRow>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CoursePage {
        const NAME: &'static str = "CoursePage";
        type Type = super::CoursePage;
        type ParentType = adw::NavigationPage;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for CoursePage {
        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for CoursePage {}
    impl NavigationPageImpl for CoursePage {}
}

glib::wrapper! {
    pub struct CoursePage(ObjectSubclass<imp::CoursePage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl CoursePage {

    // Fully repopulated on every navigation.
    pub fn set_course(&self, course: &Course) {
        self.set_title(course.title);
        self.imp().document_row.set_subtitle(course.page);

        self.remove_all_topic_rows();
        for &keyword in course.keywords {
            self.append_topic_row(keyword);
        }
    }

    fn append_topic_row(&self, topic: &str) {
        let imp = self.imp();
        let row = adw::ActionRow::builder().title(topic).build();
        imp.topics_group.add(&row);
        imp.topic_rows.borrow_mut().push(row);
    }

    fn remove_all_topic_rows(&self) {
        let imp = self.imp();
        for row in imp.topic_rows.borrow_mut().drain(..) {
            imp.topics_group.remove(&row);
        }
    }

}
