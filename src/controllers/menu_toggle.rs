use super::super::prelude::*;
use super::super::ui::Ui;

use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
}

pub struct WeakMenuToggle {
    state: Weak<State>,
}

impl WeakMenuToggle {
    pub fn upgrade(&self) -> Option<MenuToggle> {
        self.state.upgrade().map(|state| MenuToggle { state })
    }
}

pub struct MenuToggle {
    state: Rc<State>,
}

impl MenuToggle {

    pub fn new(ui: Ui) -> Self {
        let state = State { ui };
        let this = Self { state: Rc::new(state) };
        this.setup_button_clicked();
        this.setup_link_activated();
        this.setup_outside_click();
        this
    }

    fn setup_button_clicked(&self) {
        let this_weak = self.downgrade();
        self.state.ui.main_page().menu_button().connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                let main_page = this.state.ui.main_page();
                main_page.set_menu_active(!main_page.menu_active());
            }
        });
    }

    // A navigation link closes the menu on top of its own activation.
    fn setup_link_activated(&self) {
        let this_weak = self.downgrade();
        self.state.ui.sidebar().connect_row_activated(move |_, _, _| {
            if let Some(this) = this_weak.upgrade() {
                this.state.ui.main_page().set_menu_active(false);
            }
        });
    }

    fn setup_outside_click(&self) {
        let gesture = gtk::GestureClick::new();
        gesture.set_propagation_phase(gtk::PropagationPhase::Capture);

        let this_weak = self.downgrade();
        gesture.connect_pressed(move |_gesture, _press_count, x, y| {
            if let Some(this) = this_weak.upgrade() {
                this.close_menu_on_outside_press(x, y);
            }
        });

        self.state.ui.main_page().add_controller(gesture);
    }

    fn close_menu_on_outside_press(&self, x: f64, y: f64) {
        let main_page = self.state.ui.main_page();

        if !main_page.menu_active() {
            return;
        }

        let Some(pressed) = main_page.pick(x, y, gtk::PickFlags::DEFAULT) else {
            return;
        };

        let inside_menu = Self::is_within(&pressed, self.state.ui.sidebar());
        let inside_toggle = Self::is_within(&pressed, main_page.menu_button());

        if !inside_menu && !inside_toggle {
            main_page.set_menu_active(false);
        }
    }

    fn is_within(widget: &gtk::Widget, container: &impl IsA<gtk::Widget>) -> bool {
        let container = container.upcast_ref::<gtk::Widget>();
        widget == container || widget.is_ancestor(container)
    }

    pub fn downgrade(&self) -> WeakMenuToggle {
        let state = Rc::downgrade(&self.state);
        WeakMenuToggle { state }
    }

}
