use crate::theme::Theme;

/// Transient presentation flags for one page view.
///
/// Both flags are independent; every combination is valid. Nothing here is
/// persisted, a reload starts from [`ViewState::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    dark_mode: bool,
    image_modal_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn image_modal_open(&self) -> bool {
        self.image_modal_open
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        log::debug!("theme toggled, dark_mode={}", self.dark_mode);
    }

    pub fn open_image_preview(&mut self) {
        if !self.image_modal_open {
            log::debug!("image preview opened");
        }
        self.image_modal_open = true;
    }

    pub fn close_image_preview(&mut self) {
        if self.image_modal_open {
            log::debug!("image preview closed");
        }
        self.image_modal_open = false;
    }
}
