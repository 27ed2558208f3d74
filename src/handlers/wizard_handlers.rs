use actix_web::{HttpResponse, Responder, Result, web};
use log::debug;
use validator::Validate;

use crate::structs::wizard_request::{WizardRequest, WizardResponse};

/// Apply one action to a wizard and return the new state
pub async fn advance_wizard(web::Json(req): web::Json<WizardRequest>) -> Result<impl Responder> {
    let mut state = req.state.unwrap_or_default();
    debug!("Wizard action {:?} at step {:?}", req.action, state.current_step);
    state.apply(req.action);

    if let Err(errors) = state.styling.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }

    Ok(HttpResponse::Ok().json(WizardResponse::from(state)))
}
