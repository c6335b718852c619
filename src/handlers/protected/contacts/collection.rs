use axum::{extract::State, Json};
use serde_json::Value;

use super::representations::{contact_href, ContactDto, ContactInput, CONTACTS_PATH};
use crate::app::AppState;
use crate::hal::HalCollection;
use crate::handlers::{accept, context};
use crate::i18n::Locale;
use crate::middleware::{ApiResult, AuthUser, Created, JsonBody};
use crate::observer::{Operation, Resource};

/// GET /api/contacts - the caller's contacts, by last name then first name
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<HalCollection<ContactDto>>> {
    let contacts = state.store.contacts_of(auth.person()?).await?;
    let items: Vec<ContactDto> = contacts.iter().map(ContactDto::from).collect();

    Ok(Json(HalCollection::new("contacts", items, CONTACTS_PATH)))
}

/// POST /api/contacts
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    locale: Locale,
    JsonBody(body): JsonBody<Value>,
) -> ApiResult<Created<ContactDto>> {
    let owner_id = auth.person()?;

    let ctx = context(&state, Resource::ContactPerson, Operation::Create, body)?;
    let input: ContactInput = accept(&state, locale, ctx).await?;

    let mut contact = input.into_contact(owner_id);
    state.store.save_contact(&mut contact).await?;

    tracing::debug!("Contact {} recorded by {}", contact.id, auth.username);
    Ok(Created::new(contact_href(contact.id), ContactDto::from(&contact)))
}
