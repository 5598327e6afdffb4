use super::super::repository::Repository;
use super::super::widgets::NavigationPage;
use super::super::ui::Ui;

use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
    repository: Repository<'static>,
}

pub struct WeakCourseActivation {
    state: Weak<State>,
}

impl WeakCourseActivation {
    pub fn upgrade(&self) -> Option<CourseActivation> {
        self.state.upgrade().map(|state| CourseActivation { state })
    }
}

#[derive(Clone)]
pub struct CourseActivation {
    state: Rc<State>,
}

impl CourseActivation {

    pub fn new(ui: Ui, repository: Repository<'static>) -> Self {
        let state = State { ui, repository };
        let this = Self { state: Rc::new(state) };
        this.setup_suggestion_activation();
        this.setup_sidebar_activation();
        this
    }

    fn setup_suggestion_activation(&self) {
        let this_weak = self.downgrade();
        self.state.ui.suggestion_list().connect_row_activated(move |_, index, _| {
            if let Some(this) = this_weak.upgrade() {
                this.open_course(index);
            }
        });
    }

    fn setup_sidebar_activation(&self) {
        let this_weak = self.downgrade();
        self.state.ui.sidebar().connect_row_activated(move |_, index, _| {
            if let Some(this) = this_weak.upgrade() {
                this.open_course(index);
            }
        });
    }

    pub fn open_course(&self, index: usize) -> bool {
        let Some(course) = self.state.repository.course_by_index(index) else {
            return false;
        };

        let navigation = self.state.ui.navigation();
        self.state.ui.course_page().set_course(course);

        if navigation.page() != Some(NavigationPage::Course) {
            navigation.push_page(NavigationPage::Course);
        }

        true
    }

    pub fn downgrade(&self) -> WeakCourseActivation {
        let state = Rc::downgrade(&self.state);
        WeakCourseActivation { state }
    }

}
