//! The submission form: a title input plus a way to alert the user.

/// Title entry point injected into `TodoClient`.
pub trait Form {
    /// Current raw value of the title input.
    fn title(&self) -> String;

    fn clear_title(&mut self);

    /// Show a message to the user immediately.
    fn alert(&mut self, message: &str);
}

impl<F: Form + ?Sized> Form for &mut F {
    fn title(&self) -> String {
        (**self).title()
    }

    fn clear_title(&mut self) {
        (**self).clear_title()
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }
}

/// In-memory form that records alerts instead of showing them.
#[derive(Debug, Default, Clone)]
pub struct MemoryForm {
    pub input: String,
    pub alerts: Vec<String>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: &str) {
        self.input = title.to_string();
    }
}

impl Form for MemoryForm {
    fn title(&self) -> String {
        self.input.clone()
    }

    fn clear_title(&mut self) {
        self.input.clear();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
