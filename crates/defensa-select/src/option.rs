use std::fmt;

/// One selectable entry: a display label and an opaque, equality-comparable
/// value. Values are unique within a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<V> {
    pub label: String,
    pub value: V,
}

impl<V> SelectOption<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

// Dropdown widgets render options through Display.
impl<V> fmt::Display for SelectOption<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
