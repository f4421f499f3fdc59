/// Why a single form field was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError<F> {
    pub field: F,
    pub reason: String,
}

/// Outcome of checking a form before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation<F> {
    errors: Vec<FieldError<F>>,
}

impl<F> Default for Validation<F> {
    fn default() -> Self {
        Self { errors: Vec::new() }
    }
}

impl<F: Copy + PartialEq> Validation<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field` as missing when `value` is blank.
    pub fn require(&mut self, field: F, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.reject(field, "campo obrigatório");
        }
        self
    }

    pub fn reject(&mut self, field: F, reason: impl Into<String>) -> &mut Self {
        self.errors.push(FieldError {
            field,
            reason: reason.into(),
        });
        self
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError<F>] {
        &self.errors
    }

    pub fn reason_for(&self, field: F) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.reason.as_str())
    }
}
