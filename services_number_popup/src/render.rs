//! Popup rendering and output

use literal_view::{PopupAction, PopupContent, PopupView, TableView};

/// Width of the row label column
const LABEL_WIDTH: usize = 4;

/// Popup renderer
///
/// Draws popup content as plain text, suitable for a console or test
/// output. Hosts with a real popup draw the view model themselves.
pub struct PopupRenderer {
    /// Append the action list
    show_actions: bool,
}

impl PopupRenderer {
    pub fn new(show_actions: bool) -> Self {
        Self { show_actions }
    }

    /// Render popup content to a string
    pub fn render(&self, content: &PopupContent) -> String {
        match content {
            PopupContent::Number(view) => self.render_view(view),
            PopupContent::Table(table) => self.render_table(table),
        }
    }

    fn render_view(&self, view: &PopupView) -> String {
        let mut lines = Vec::new();
        lines.push(view.source.clone());

        for row in &view.rows {
            let marker = if row.current { '>' } else { ' ' };
            lines.push(Self::labelled(marker, row.label(), &row.text));
        }

        // Bit word and ruler line up with the row text
        let indent = " ".repeat(LABEL_WIDTH + 3);
        lines.push(format!("{}{}", indent, view.word.as_string()));
        lines.push(format!("{}{}", indent, view.ruler.render()));

        if let Some(extended) = &view.extended {
            if let Some(float32) = &extended.float32 {
                lines.push(Self::labelled(' ', "f32", float32));
            }
            if let Some(float64) = &extended.float64 {
                lines.push(Self::labelled(' ', "f64", float64));
            }
            if let Some(size) = &extended.byte_size {
                lines.push(Self::labelled(' ', "Size", size));
            }
        }

        if self.show_actions && !view.actions.is_empty() {
            let labels: Vec<String> = view.actions.iter().map(action_label).collect();
            lines.push(format!("[{}]", labels.join("] [")));
        }

        lines.join("\n")
    }

    fn render_table(&self, table: &TableView) -> String {
        table.lines().join("\n")
    }

    fn labelled(marker: char, label: &str, text: &str) -> String {
        format!("{} {:<width$} {}", marker, label, text, width = LABEL_WIDTH)
    }
}

impl Default for PopupRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Short button text for an action
pub fn action_label(action: &PopupAction) -> String {
    match action {
        PopupAction::ConvertBase { base } => format!("to {}", base.label()),
        PopupAction::ToggleBit { offset } => format!("bit {}", offset),
        PopupAction::SwapEndianness { bits } => format!("swap {}", bits.bits()),
    }
}
