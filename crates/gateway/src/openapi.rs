//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::user_handler::ErrorMessage;
use domain::{User, UserPayload};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root_handler::hello,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            UserPayload,
            ErrorMessage,
        )
    ),
    tags(
        (name = "Root", description = "Greeting endpoint"),
        (name = "Users", description = "In-memory user records"),
    )
)]
pub struct ApiDoc;
