use serde::{Deserialize, Serialize};

use crate::models::content::QrContentData;
use crate::models::qr_code::QrCodeType;
use crate::models::template::{QrTemplate, QrTemplatePatch};

pub const TOTAL_STEPS: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    TypeSelect,
    Content,
    Styling,
    Preview,
}

impl WizardStep {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(WizardStep::TypeSelect),
            1 => Some(WizardStep::Content),
            2 => Some(WizardStep::Styling),
            3 => Some(WizardStep::Preview),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::TypeSelect => 0,
            WizardStep::Content => 1,
            WizardStep::Styling => 2,
            WizardStep::Preview => 3,
        }
    }
}

/// State of the four-step QR creation flow
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardState {
    pub current_step: WizardStep,
    pub selected_type: Option<QrCodeType>,
    pub content: Option<QrContentData>,
    pub styling: QrTemplate,
    pub name: String,
    pub is_dirty: bool,
}

/// One edit to a wizard, as sent by a client
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WizardAction {
    Start {
        #[serde(rename = "type")]
        kind: Option<QrCodeType>,
        styling: Option<QrTemplate>,
    },
    SetStep {
        step: usize,
    },
    NextStep,
    PrevStep,
    SetType {
        #[serde(rename = "type")]
        kind: QrCodeType,
    },
    SetContent {
        content: QrContentData,
    },
    SetStyling {
        styling: QrTemplate,
    },
    UpdateStyling {
        patch: QrTemplatePatch,
    },
    SetName {
        name: String,
    },
    Reset,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl WizardState {
    /// Starting with a kind skips the type picker
    pub fn new(initial_type: Option<QrCodeType>, initial_styling: Option<QrTemplate>) -> Self {
        Self {
            current_step: if initial_type.is_some() {
                WizardStep::Content
            } else {
                WizardStep::TypeSelect
            },
            selected_type: initial_type,
            content: initial_type.map(QrContentData::default_for),
            styling: initial_styling.unwrap_or_default(),
            name: String::new(),
            is_dirty: false,
        }
    }

    /// Out-of-range indexes are ignored
    pub fn set_step(&mut self, index: usize) {
        if let Some(step) = WizardStep::from_index(index) {
            self.current_step = step;
        }
    }

    pub fn next_step(&mut self) {
        let next = (self.current_step.index() + 1).min(TOTAL_STEPS - 1);
        self.set_step(next);
    }

    pub fn prev_step(&mut self) {
        let prev = self.current_step.index().saturating_sub(1);
        self.set_step(prev);
    }

    pub fn set_type(&mut self, kind: QrCodeType) {
        self.selected_type = Some(kind);
        self.content = Some(QrContentData::default_for(kind));
        self.is_dirty = true;
    }

    pub fn set_content(&mut self, content: QrContentData) {
        self.content = Some(content);
        self.is_dirty = true;
    }

    pub fn set_styling(&mut self, styling: QrTemplate) {
        self.styling = styling;
        self.is_dirty = true;
    }

    pub fn update_styling(&mut self, patch: QrTemplatePatch) {
        self.styling.apply(patch);
        self.is_dirty = true;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.is_dirty = true;
    }

    pub fn reset(&mut self) {
        *self = Self::new(None, None);
    }

    pub fn apply(&mut self, action: WizardAction) {
        match action {
            WizardAction::Start { kind, styling } => *self = Self::new(kind, styling),
            WizardAction::SetStep { step } => self.set_step(step),
            WizardAction::NextStep => self.next_step(),
            WizardAction::PrevStep => self.prev_step(),
            WizardAction::SetType { kind } => self.set_type(kind),
            WizardAction::SetContent { content } => self.set_content(content),
            WizardAction::SetStyling { styling } => self.set_styling(styling),
            WizardAction::UpdateStyling { patch } => self.update_styling(patch),
            WizardAction::SetName { name } => self.set_name(name),
            WizardAction::Reset => self.reset(),
        }
    }

    pub fn can_proceed(&self) -> bool {
        match self.current_step {
            WizardStep::TypeSelect => self.selected_type.is_some(),
            WizardStep::Content => self.content.as_ref().is_some_and(|c| c.is_complete()),
            WizardStep::Styling => true,
            WizardStep::Preview => !self.name.trim().is_empty(),
        }
    }
}
