use super::super::search_engine::{SearchEngine, SubmitOutcome};
use super::super::controllers::CourseActivationController;
use super::super::ui::Ui;
use super::super::constants;

use std::rc::{Rc, Weak};

const NO_COURSE_FOUND_MESSAGE: &str = "No course found";

struct State {
    ui: Ui,
    engine: SearchEngine,
    activation: CourseActivationController,
}

pub struct WeakSubmit {
    state: Weak<State>,
}

impl WeakSubmit {
    pub fn upgrade(&self) -> Option<Submit> {
        self.state.upgrade().map(|state| Submit { state })
    }
}

#[derive(Clone)]
pub struct Submit {
    state: Rc<State>,
}

impl Submit {

    pub fn new(ui: Ui, engine: SearchEngine, activation: CourseActivationController) -> Self {
        let state = State { ui, engine, activation };
        let this = Self { state: Rc::new(state) };
        this.setup_query_submitted();
        this
    }

    fn setup_query_submitted(&self) {
        let this_weak = self.downgrade();
        self.state.ui.search_box().connect_submitted(move |_, query| {
            if let Some(this) = this_weak.upgrade() {
                this.handle_submission(query);
            }
        });
    }

    // The entry text is left untouched on every outcome.
    fn handle_submission(&self, query: &str) {
        match self.state.engine.submit(query) {
            SubmitOutcome::EmptyQuery => (),
            SubmitOutcome::Match(index) => {
                if !self.state.activation.open_course(index) {
                    glib::g_warning!(
                        constants::APP_NAME,
                        "Search resolved index {index} outside the catalog"
                    );
                }
            }
            SubmitOutcome::NoMatch => {
                self.state.ui.window().alert(NO_COURSE_FOUND_MESSAGE);
            }
        }
    }

    pub fn downgrade(&self) -> WeakSubmit {
        let state = Rc::downgrade(&self.state);
        WeakSubmit { state }
    }

}
