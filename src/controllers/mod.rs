mod suggestions;
mod submit;
mod course_activation;
mod menu_toggle;
mod actions;

pub use self::suggestions::Suggestions as SuggestionsController;
pub use self::submit::Submit as SubmitController;
pub use self::course_activation::CourseActivation as CourseActivationController;
pub use self::menu_toggle::MenuToggle as MenuToggleController;
pub use self::actions::Actions as ActionsController;
