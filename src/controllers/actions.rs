use super::super::prelude::*;
use super::super::ui::Ui;
use super::super::constants;

use std::rc::{Rc, Weak};

struct State {
    application: adw::Application,
    ui: Ui,
}

pub struct WeakActions {
    state: Weak<State>,
}

impl WeakActions {
    pub fn upgrade(&self) -> Option<Actions> {
        self.state.upgrade().map(|state| Actions { state })
    }
}

pub struct Actions {
    state: Rc<State>,
}

impl Actions {

    pub fn new(application: adw::Application, ui: Ui) -> Self {
        let state = State { application, ui };
        let this = Self { state: Rc::new(state) };
        this.setup_quit_action();
        this.setup_search_action();
        this.setup_about_action();
        this
    }

    fn setup_quit_action(&self) {
        let quit_action = gtk::gio::SimpleAction::new("quit", None);

        let application_weak = self.state.application.downgrade();
        quit_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                application.quit();
            }
        });

        self.state.application.add_action(&quit_action);
        self.state.application.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    fn setup_search_action(&self) {
        let search_action = gtk::gio::SimpleAction::new("search", None);

        let this_weak = self.downgrade();
        search_action.connect_activate(move |_action, _| {
            if let Some(this) = this_weak.upgrade() {
                this.state.ui.search_box().grab_entry_focus();
            }
        });

        self.state.application.add_action(&search_action);
        self.state.application.set_accels_for_action("app.search", &["<Ctrl>f"]);
    }

    fn setup_about_action(&self) {
        let about_action = gtk::gio::SimpleAction::new("about", None);

        let this_weak = self.downgrade();
        about_action.connect_activate(move |_action, _| {
            if let Some(this) = this_weak.upgrade() {
                this.present_about_dialog();
            }
        });

        self.state.application.add_action(&about_action);
    }

    fn present_about_dialog(&self) {
        let dialog = adw::AboutDialog::builder()
            .application_name(constants::APP_TITLE)
            .application_icon(constants::APP_ID)
            .version(constants::APP_VERSION)
            .comments(constants::APP_DESCRIPTION)
            .developers(constants::APP_AUTHORS.split(',').filter(|author| !author.is_empty()).collect::<Vec<_>>())
            .build();

        dialog.present(Some(self.state.ui.window()));
    }

    pub fn downgrade(&self) -> WeakActions {
        let state = Rc::downgrade(&self.state);
        WeakActions { state }
    }

}
