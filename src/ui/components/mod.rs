mod help;
mod status;
mod placeholder;

/// Small reusable widgets shared by the tab views
pub struct UiComponent {}
