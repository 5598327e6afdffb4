mod widgets;
mod constants;
mod models;
mod repository;
mod search_engine;
mod populator;
mod controllers;
mod application;
mod ui;
mod prelude;

fn main() -> anyhow::Result<()> {
    application::Application::new().activate()
}
