// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Every route in this tier is mounted behind `jwt_auth_middleware`, which
// rejects the request with 401 before a handler runs unless a valid bearer
// token is present. Handlers receive the caller as `Extension<AuthUser>`.
//
// Security Level: JWT Authentication Required
// Route Prefix: /api/*

pub mod goals;
pub mod users;
