use super::repository::Repository;
use super::widgets::SidebarRow;
use super::ui::Ui;

pub struct Populator {}

impl Populator {

    pub fn populate(ui: &Ui, repository: Repository<'static>) {
        Self::populate_sidebar(ui, repository);
    }

    fn populate_sidebar(ui: &Ui, repository: Repository<'static>) {
        let sidebar = ui.sidebar();
        for (index, course) in repository.courses().iter().enumerate() {
            let row = SidebarRow::from_course(course, index);
            sidebar.append_row(row);
        }
    }

}
