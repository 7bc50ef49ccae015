/// Unvalidated input for create or update.
///
/// Every field is optional so that absence is reported as
/// `missing_field` by the validator rather than as a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCandidate {
    pub id: Option<i64>,
    pub given_names: Option<String>,
    pub surnames: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl UserCandidate {
    pub fn new(given_names: &str, surnames: &str, phone: &str, email: &str) -> Self {
        Self {
            id: None,
            given_names: Some(given_names.to_string()),
            surnames: Some(surnames.to_string()),
            phone: Some(phone.to_string()),
            email: Some(email.to_string()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
