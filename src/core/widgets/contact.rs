//! Contact form with a simulated submission.
//!
//! Submitting never leaves the process. A complete form flips to
//! `Submitted` and the caller schedules `reset()` after the configured
//! delay.

use crate::core::content::CONTACT_SUBJECTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            ContactField::Name => "pages.contact.form.name",
            ContactField::Email => "pages.contact.form.email",
            ContactField::Phone => "pages.contact.form.phone",
            ContactField::Subject => "pages.contact.form.subject",
            ContactField::Message => "pages.contact.form.message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your full name",
            ContactField::Email => "your@email.com",
            ContactField::Phone => "+998 XX XXX XXXX",
            ContactField::Subject => "Select a subject",
            ContactField::Message => "How can we help you?",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Phone)
    }

    fn position(self) -> usize {
        self as usize
    }

    fn next(self) -> ContactField {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> ContactField {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEdit {
    Insert(char),
    Backspace,
    NextField,
    PrevField,
    Focus(ContactField),
    NextOption,
    PrevOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Index into `CONTACT_SUBJECTS`; unset until the user picks one.
    pub subject: Option<usize>,
    pub message: String,
    focus: Option<ContactField>,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    pub fn focus(&self) -> Option<ContactField> {
        self.focus
    }

    /// Value of the chosen subject, e.g. `"visit"`.
    pub fn subject_value(&self) -> Option<&'static str> {
        self.subject
            .and_then(|i| CONTACT_SUBJECTS.get(i))
            .map(|(value, _)| *value)
    }

    /// Display text of a field.
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => self
                .subject
                .and_then(|i| CONTACT_SUBJECTS.get(i))
                .map(|(_, label)| *label)
                .unwrap_or(""),
            ContactField::Message => &self.message,
        }
    }

    fn text_mut(&mut self, field: ContactField) -> Option<&mut String> {
        match field {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Phone => Some(&mut self.phone),
            ContactField::Message => Some(&mut self.message),
            ContactField::Subject => None,
        }
    }

    fn is_filled(&self, field: ContactField) -> bool {
        match field {
            ContactField::Subject => self.subject.is_some(),
            other => !self.value(other).trim().is_empty(),
        }
    }

    /// First required field that is still empty.
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|f| f.is_required() && !self.is_filled(*f))
    }

    /// Apply one edit. Ignored while the confirmation is showing.
    pub fn edit(&mut self, edit: FormEdit) {
        if self.is_submitted() {
            return;
        }
        let focus = self.focus.unwrap_or(ContactField::Name);
        match edit {
            FormEdit::Insert(c) => {
                if c == '\n' && focus != ContactField::Message {
                    return;
                }
                if c.is_control() && c != '\n' {
                    return;
                }
                if let Some(text) = self.text_mut(focus) {
                    text.push(c);
                }
                self.focus = Some(focus);
            }
            FormEdit::Backspace => {
                if focus == ContactField::Subject {
                    self.subject = None;
                } else if let Some(text) = self.text_mut(focus) {
                    text.pop();
                }
                self.focus = Some(focus);
            }
            FormEdit::NextField => {
                self.focus = Some(self.focus.map_or(ContactField::Name, ContactField::next));
            }
            FormEdit::PrevField => {
                self.focus = Some(self.focus.map_or(ContactField::Message, ContactField::prev));
            }
            FormEdit::Focus(field) => self.focus = Some(field),
            FormEdit::NextOption | FormEdit::PrevOption if focus == ContactField::Subject => {
                let n = CONTACT_SUBJECTS.len();
                self.subject = Some(match (edit, self.subject) {
                    (FormEdit::NextOption, None) => 0,
                    (FormEdit::NextOption, Some(i)) => (i + 1) % n,
                    (_, None) => n - 1,
                    (_, Some(i)) => (i + n - 1) % n,
                });
                self.focus = Some(focus);
            }
            FormEdit::NextOption | FormEdit::PrevOption => {}
        }
    }

    /// Try to submit.
    ///
    /// With a required field empty the form stays editable and focus jumps
    /// to that field. Returns true when the form is now `Submitted` and the
    /// reset must be scheduled.
    pub fn submit(&mut self) -> bool {
        if self.is_submitted() {
            return false;
        }
        if let Some(missing) = self.first_missing() {
            self.focus = Some(missing);
            return false;
        }
        self.status = FormStatus::Submitted;
        self.focus = None;
        true
    }

    /// Clear every field and return to `Editing`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
