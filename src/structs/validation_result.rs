use crate::helpers::validators::is_blank;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Field-scoped validation outcome. Fields not listed are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn check(&mut self, field: &'static str, ok: bool, message: &'static str) -> &mut Self {
        if !ok {
            self.errors.push(FieldError { field, message });
        }
        self
    }

    pub fn require(&mut self, field: &'static str, value: &str) -> &mut Self {
        self.check(field, !is_blank(value), "Required")
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    /// Replaces the error for `field`: set when `message` is given, cleared otherwise.
    pub fn set_field(&mut self, field: &'static str, message: Option<&'static str>) {
        self.errors.retain(|e| e.field != field);
        if let Some(message) = message {
            self.errors.push(FieldError { field, message });
        }
    }

    pub fn print_summary(&self) {
        if self.is_valid() {
            println!("✅ All fields valid");
            return;
        }

        for error in &self.errors {
            println!("   ❌ {}: {}", error.field, error.message);
        }
    }
}
