use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;
use super::constants;
use super::widgets::Window;
use super::repository::Repository;
use super::search_engine::SearchEngine;
use super::populator::Populator;
use super::ui::Ui;
use super::controllers::{
    ActionsController,
    CourseActivationController,
    MenuToggleController,
    SubmitController,
    SuggestionsController,
};

#[allow(dead_code)]
struct Controllers {
    suggestions: SuggestionsController,
    submit: SubmitController,
    course_activation: CourseActivationController,
    menu_toggle: MenuToggleController,
    actions: ActionsController,
}

struct ApplicationState {
    application: adw::Application,
    repository: Repository<'static>,
    controllers: RefCell<Option<Controllers>>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new() -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            adw::gio::ApplicationFlags::default()
        );

        let repository = Repository::new(&constants::APP_CATALOG);
        let state = Rc::new(ApplicationState {
            application,
            repository,
            controllers: RefCell::new(None),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_activate_event(state);
        Self::setup_startup_event(state);
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            this.setup_ui();
        });
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |_application| {
            if let Err(error) = Self::setup_resources() {
                eprintln!("Failed to initialize application resources: {error:#}");
                std::process::exit(1);
            }
        });
    }

    fn setup_ui(&self) {
        let window = Window::new(&self.state.application);
        let ui = Ui::new(window);
        let engine = SearchEngine::new(self.state.repository);

        Populator::populate(&ui, self.state.repository);

        let course_activation = CourseActivationController::new(ui.clone(), self.state.repository);
        let controllers = Controllers {
            suggestions: SuggestionsController::new(ui.clone(), engine.clone(), self.state.repository),
            submit: SubmitController::new(ui.clone(), engine, course_activation.clone()),
            menu_toggle: MenuToggleController::new(ui.clone()),
            actions: ActionsController::new(self.state.application.clone(), ui.clone()),
            course_activation,
        };
        self.state.controllers.replace(Some(controllers));

        ui.activate();
        ui.window().present();
    }

    fn setup_resources() -> Result<()> {
        gtk::glib::set_application_name(constants::APP_TITLE);
        gtk::glib::set_prgname(Some(constants::APP_NAME));
        gtk::gio::resources_register_include_impl(constants::APP_RESOURCES)?;

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_resource(&format!("{}/style.css", constants::APP_PREFIX));

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        let result = self.state.application.run();
        if matches!(result, adw::glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }

}
