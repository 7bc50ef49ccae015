use ud_core::UserRecord;

/// Delete prompt of the list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteConfirmation {
    #[default]
    Closed,
    Open { user: UserRecord },
}

impl DeleteConfirmation {
    pub fn open(&mut self, user: UserRecord) {
        *self = Self::Open { user };
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Close the prompt and hand back the user it was asking about
    pub fn confirm(&mut self) -> Option<UserRecord> {
        match std::mem::take(self) {
            Self::Open { user } => Some(user),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn pending(&self) -> Option<&UserRecord> {
        match self {
            Self::Open { user } => Some(user),
            Self::Closed => None,
        }
    }
}
