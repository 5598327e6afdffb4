use super::super::search_engine::SearchEngine;
use super::super::repository::Repository;
use super::super::widgets::SuggestionRow;
use super::super::ui::Ui;
use super::super::prelude::*;

use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
    engine: SearchEngine,
    repository: Repository<'static>,
}

pub struct WeakSuggestions {
    state: Weak<State>,
}

impl WeakSuggestions {
    pub fn upgrade(&self) -> Option<Suggestions> {
        self.state.upgrade().map(|state| Suggestions { state })
    }
}

#[derive(Clone)]
pub struct Suggestions {
    state: Rc<State>,
}

impl Suggestions {

    pub fn new(ui: Ui, engine: SearchEngine, repository: Repository<'static>) -> Self {
        let state = State { ui, engine, repository };
        let this = Self { state: Rc::new(state) };
        this.setup_query_changed();
        this
    }

    fn setup_query_changed(&self) {
        let this_weak = self.downgrade();
        self.state.ui.search_box().connect_query_changed(move |_, query| {
            if let Some(this) = this_weak.upgrade() {
                this.refresh_suggestions(query);
            }
        });
    }

    // Every change discards the previous render and rebuilds from scratch.
    fn refresh_suggestions(&self, query: &str) {
        let suggestion_list = self.state.ui.suggestion_list();
        suggestion_list.clear();

        for index in self.state.engine.suggestions(query) {
            if let Some(course) = self.state.repository.course_by_index(index) {
                suggestion_list.append_row(SuggestionRow::from_course(course, index));
            }
        }

        suggestion_list.set_visible(!suggestion_list.is_empty());
    }

    pub fn downgrade(&self) -> WeakSuggestions {
        let state = Rc::downgrade(&self.state);
        WeakSuggestions { state }
    }

}
