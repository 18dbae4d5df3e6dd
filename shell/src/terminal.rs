//! Terminal presentation: the list goes to one writer, alerts to another.

use std::io::Write;

use todo_core::{Form, ListEntry, View};
use tracing::warn;

/// Prints the whole list every time it is replaced.
pub struct TerminalView<W> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn write_entries(&mut self, entries: &[ListEntry]) -> std::io::Result<()> {
        writeln!(self.out, "-- todos --")?;
        if entries.is_empty() {
            writeln!(self.out, "(empty)")?;
        }
        for entry in entries {
            let mark = if entry.is_completed() { "x" } else { " " };
            write!(self.out, "[{mark}] {}", entry.title)?;
            for control in &entry.controls {
                write!(self.out, "  <{}: {} {}>", control.label, control.action.kind, control.action.id)?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

impl<W: Write> View for TerminalView<W> {
    fn replace(&mut self, entries: Vec<ListEntry>) {
        if let Err(err) = self.write_entries(&entries) {
            warn!(error = %err, "failed to draw todo list");
        }
    }
}

/// Title input filled from the `add` command; alerts are written to `alerts`.
pub struct TerminalForm<W> {
    input: String,
    alerts: W,
}

impl<W: Write> TerminalForm<W> {
    pub fn new(alerts: W) -> Self {
        Self {
            input: String::new(),
            alerts,
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.input = title.to_string();
    }

    pub fn get_ref(&self) -> &W {
        &self.alerts
    }
}

impl<W: Write> Form for TerminalForm<W> {
    fn title(&self) -> String {
        self.input.clone()
    }

    fn clear_title(&mut self) {
        self.input.clear();
    }

    fn alert(&mut self, message: &str) {
        if let Err(err) = writeln!(self.alerts, "! {message}") {
            warn!(error = %err, "failed to show alert");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{entries, TodoId, TodoItem};

    fn printed(view: &TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.get_ref().clone()).unwrap()
    }

    #[test]
    fn empty_list_is_announced() {
        let mut view = TerminalView::new(Vec::new());
        view.replace(Vec::new());
        assert_eq!(printed(&view), "-- todos --\n(empty)\n");
    }

    #[test]
    fn completed_entries_are_checked() {
        let items = [
            TodoItem {
                id: TodoId::from(1),
                title: "Buy milk".to_string(),
                completed: false,
            },
            TodoItem {
                id: TodoId::from(2),
                title: "Walk dog".to_string(),
                completed: true,
            },
        ];
        let mut view = TerminalView::new(Vec::new());
        view.replace(entries(&items));
        assert_eq!(
            printed(&view),
            "-- todos --\n\
             [ ] Buy milk  <Complete: complete 1>  <Delete: delete 1>\n\
             [x] Walk dog  <Complete: complete 2>  <Delete: delete 2>\n"
        );
    }

    #[test]
    fn form_clears_and_alerts() {
        let mut form = TerminalForm::new(Vec::new());
        form.set_title("x");
        assert_eq!(form.title(), "x");
        form.clear_title();
        assert_eq!(form.title(), "");
        form.alert("Please enter a todo title.");
        assert_eq!(form.get_ref().as_slice(), b"! Please enter a todo title.\n");
    }
}
