/// Edit to an optional field: leave it, replace it, or remove it.
///
/// ```
/// use kanban_domain::FieldUpdate;
///
/// let mut description = Some("draft".to_string());
/// FieldUpdate::Set("final".to_string()).apply_to(&mut description);
/// assert_eq!(description.as_deref(), Some("final"));
///
/// FieldUpdate::<String>::Clear.apply_to(&mut description);
/// assert_eq!(description, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    NoChange,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }

    /// Builds an update from a command-line style pair of `--value` and
    /// `--clear` flags. A clear flag wins over a value.
    pub fn from_flags(value: Option<T>, clear: bool) -> Self {
        match (value, clear) {
            (_, true) => FieldUpdate::Clear,
            (Some(value), false) => FieldUpdate::Set(value),
            (None, false) => FieldUpdate::NoChange,
        }
    }
}
