use nucard_derive::api_handler;
use nucard_domain::constants::SYSTEM_TAG;

pub(super) const GREETING: &str = "Drink with me, friend!";

#[api_handler(
    get,
    path = "/",
    responses((status = OK, description = "Service greeting", body = String)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn index_handler() -> &'static str {
    GREETING
}
