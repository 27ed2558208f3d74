use serde::{Deserialize, Serialize};

use crate::models::wizard::{WizardAction, WizardState};

#[derive(Deserialize)]
pub struct WizardRequest {
    // A missing state starts a fresh wizard
    #[serde(default)]
    pub state: Option<WizardState>,
    pub action: WizardAction,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardResponse {
    pub state: WizardState,
    pub step_index: usize,
    pub can_proceed: bool,
}

impl From<WizardState> for WizardResponse {
    fn from(state: WizardState) -> Self {
        Self {
            step_index: state.current_step.index(),
            can_proceed: state.can_proceed(),
            state,
        }
    }
}
