//! Page section visibility.
//!
//! DESIGN
//! ======
//! The page is one document whose sections are shown or hidden rather than
//! routed. Every transition starts from `hide_page_components` so no two
//! views are ever visible at once by accident.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which page sections are currently visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub stories_visible: bool,
    pub auth_forms_visible: bool,
    pub profile_visible: bool,
    /// The profile edit form; its toggle button shows when this is false.
    pub update_form_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            stories_visible: true,
            auth_forms_visible: false,
            profile_visible: false,
            update_form_visible: false,
        }
    }
}

impl UiState {
    pub fn hide_page_components(&mut self) {
        self.stories_visible = false;
        self.auth_forms_visible = false;
        self.profile_visible = false;
        self.update_form_visible = false;
    }

    /// Layout after a successful login, signup or remembered-user replay.
    pub fn show_logged_in(&mut self) {
        self.hide_page_components();
        self.stories_visible = true;
        self.profile_visible = true;
    }

    pub fn show_auth_forms(&mut self) {
        self.hide_page_components();
        self.auth_forms_visible = true;
    }

    pub fn show_home(&mut self, logged_in: bool) {
        if logged_in {
            self.show_logged_in();
        } else {
            self.hide_page_components();
            self.stories_visible = true;
        }
    }

    pub fn open_update_form(&mut self) {
        self.update_form_visible = true;
    }

    pub fn close_update_form(&mut self) {
        self.update_form_visible = false;
    }
}
