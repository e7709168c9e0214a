//! OpenAPI document, served through Swagger UI at /docs

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "notebox API",
        description = "Multi-user note-taking service with JWT authentication",
        version = "0.1.0"
    ),
    paths(
        crate::gateway::health_check,
        crate::auth::handlers::signup,
        crate::auth::handlers::login,
        crate::notes::handlers::create_note,
        crate::notes::handlers::list_notes,
        crate::notes::handlers::update_note,
        crate::notes::handlers::delete_note,
    ),
    components(schemas(
        crate::auth::service::SignupRequest,
        crate::auth::service::LoginRequest,
        crate::auth::service::SignupResponse,
        crate::auth::service::LoginResponse,
        crate::auth::service::UserProfile,
        crate::notes::models::Note,
        crate::notes::models::CreateNoteRequest,
        crate::notes::models::UpdateNoteRequest,
        crate::notes::handlers::MessageResponse,
    )),
    tags(
        (name = "Auth", description = "Signup and login"),
        (name = "Notes", description = "Ownership-scoped note CRUD"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
