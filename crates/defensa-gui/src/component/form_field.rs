//! Text field with label, character count and validation error.

use iced::widget::{Space, column, row, text, text_input};
use iced::{Element, Length};

use crate::theme::{DANGER, MUTED};

/// A text input field with label, optional character count and an inline
/// validation error.
pub struct TextField<M> {
    label: String,
    value: String,
    placeholder: String,
    on_change: Box<dyn Fn(String) -> M>,
    max_length: Option<usize>,
    required: bool,
    secure: bool,
    error: Option<String>,
}

impl<M: Clone + 'static> TextField<M> {
    pub fn new(
        label: impl Into<String>,
        value: &str,
        placeholder: impl Into<String>,
        on_change: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            placeholder: placeholder.into(),
            on_change: Box::new(on_change),
            max_length: None,
            required: false,
            secure: false,
            error: None,
        }
    }

    /// Show a character counter against this limit.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Mark the field as required in its label.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mask the input (passwords).
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Inline error message to display under the input.
    pub fn error(mut self, error: Option<impl Into<String>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'static, M> {
        let char_count = self.value.chars().count();
        let over = self.max_length.is_some_and(|max| char_count > max);

        let label_text = if self.required {
            format!("{} *", self.label)
        } else {
            self.label
        };

        let count_display: Element<'static, M> = if let Some(max) = self.max_length {
            text(format!("{char_count}/{max}"))
                .size(11)
                .color(if over { DANGER } else { MUTED })
                .into()
        } else {
            Space::new().width(0.0).into()
        };

        let error_display: Element<'static, M> = if let Some(error) = self.error {
            text(error).size(11).color(DANGER).into()
        } else if over {
            text("Máximo de caracteres excedido.")
                .size(11)
                .color(DANGER)
                .into()
        } else {
            Space::new().height(0.0).into()
        };

        let input = text_input(&self.placeholder, &self.value)
            .on_input(self.on_change)
            .secure(self.secure)
            .padding([10.0, 12.0])
            .size(14);

        column![
            row![
                text(label_text).size(12).color(MUTED),
                Space::new().width(Length::Fill),
                count_display,
            ],
            Space::new().height(4.0),
            input,
            error_display,
        ]
        .into()
    }
}

/// A labelled slot for non-text inputs (dropdowns, checkboxes).
pub fn labeled<'a, M: 'a>(label: &str, input: Element<'a, M>) -> Element<'a, M> {
    column![
        text(label.to_string()).size(12).color(MUTED),
        Space::new().height(4.0),
        input,
    ]
    .into()
}
