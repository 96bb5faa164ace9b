use giveaway_core::saphira::DrawRequest;

/// Text shown in the result heading before any draw succeeds.
pub const PLACEHOLDER: &str = "Seu nome aparecerá aqui !!";

/// Message shown under the lecture id field when it is marked invalid.
pub const INVALID_ID_MESSAGE: &str = "Id inválido.";

/// What the result heading currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DrawResult {
    #[default]
    Placeholder,
    Winner(String),
}

impl DrawResult {
    pub fn display_text(&self) -> &str {
        match self {
            Self::Placeholder => PLACEHOLDER,
            Self::Winner(name) => name,
        }
    }

    pub fn is_winner(&self) -> bool {
        matches!(self, Self::Winner(_))
    }
}

#[derive(Debug, Default)]
pub struct DrawState {
    pub result: DrawResult,
}

/// Focusable controls, in focus ring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    LectureId,
    PresencialOnly,
    Action,
    ListToggle,
}

impl FormField {
    const RING: [FormField; 4] = [
        FormField::LectureId,
        FormField::PresencialOnly,
        FormField::Action,
        FormField::ListToggle,
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        Self::RING[(self.position() + Self::RING.len() - 1) % Self::RING.len()]
    }
}

/// Why the lecture id field is flagged.
///
/// Both render the same message; they are kept apart so logs and tests can
/// tell a local validation failure from a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    DrawFailed,
}

#[derive(Debug, Default, Clone)]
pub struct FormState {
    pub lecture_id: String,
    pub presencial_only: bool,
    pub error: Option<FieldError>,
    pub focus: FormField,
}

impl FormState {
    pub fn validate(&self) -> Result<DrawRequest, FieldError> {
        DrawRequest::new(&self.lecture_id, self.presencial_only).ok_or(FieldError::Required)
    }

    /// Flags the id field and moves focus to it.
    pub fn mark_invalid(&mut self, error: FieldError) {
        self.error = Some(error);
        self.focus = FormField::LectureId;
    }

    /// Clears field values and errors. Focus is left where it is.
    pub fn reset(&mut self) {
        self.lecture_id.clear();
        self.presencial_only = false;
        self.error = None;
    }

    pub fn push_char(&mut self, c: char) {
        self.lecture_id.push(c);
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        self.lecture_id.pop();
        self.error = None;
    }

    pub fn toggle_presencial_only(&mut self) {
        self.presencial_only = !self.presencial_only;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}

#[cfg(test)]
mod tests {
    use giveaway_core::saphira::DrawMode;

    use super::*;

    #[test]
    fn test_focus_ring_wraps() {
        assert_eq!(FormField::ListToggle.next(), FormField::LectureId);
        assert_eq!(FormField::LectureId.prev(), FormField::ListToggle);
        assert_eq!(FormField::LectureId.next(), FormField::PresencialOnly);
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        let form = FormState {
            lecture_id: "   ".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.validate(), Err(FieldError::Required));
    }

    #[test]
    fn test_validate_carries_mode() {
        let form = FormState {
            lecture_id: " 12 ".to_string(),
            presencial_only: true,
            ..FormState::default()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.lecture_id, "12");
        assert_eq!(request.mode, DrawMode::PresencialOnly);
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = FormState::default();
        form.mark_invalid(FieldError::Required);
        form.push_char('3');
        assert_eq!(form.error, None);
    }
}
