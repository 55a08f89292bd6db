//! Dialog precedence: at most one of confirmation, processing and success.

/// Which confirmation is being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationKind {
    Inactivate,
    Reactivate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub kind: ConfirmationKind,
    pub title: String,
    pub description: String,
}

/// Dialog requests gathered from one or more sources.
///
/// A single [`MutationFlowState`](super::MutationFlowState) only ever fills
/// one slot, but pages that track the three dialogs separately can fill
/// several at once; [`ModalSet::resolve`] still shows exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalSet {
    pub confirmation: Option<Confirmation>,
    pub processing: Option<String>,
    pub success: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalFlags {
    pub confirmation: bool,
    pub processing: bool,
    pub success: bool,
}

impl ModalFlags {
    pub fn count(&self) -> usize {
        usize::from(self.confirmation) + usize::from(self.processing) + usize::from(self.success)
    }

    pub fn none(&self) -> bool {
        self.count() == 0
    }
}

/// The one dialog to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveModal {
    Confirmation(Confirmation),
    Processing { message: String },
    Success { message: String },
}

impl ModalSet {
    pub fn flags(&self) -> ModalFlags {
        ModalFlags {
            confirmation: self.confirmation.is_some(),
            processing: self.processing.is_some(),
            success: self.success.is_some(),
        }
    }

    /// Success beats processing beats confirmation, so a late "still
    /// processing" never covers a result the user should see.
    pub fn resolve(self) -> Option<ActiveModal> {
        if let Some(message) = self.success {
            return Some(ActiveModal::Success { message });
        }
        if let Some(message) = self.processing {
            return Some(ActiveModal::Processing { message });
        }
        self.confirmation.map(ActiveModal::Confirmation)
    }
}
