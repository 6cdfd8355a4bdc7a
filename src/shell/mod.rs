// Composition root for the users bounded context.
//
// - Read config from environment.
// - Instantiate the in-memory infrastructure.
// - Wire it into the create_user handler and expose the HTTP router.

pub mod config;
pub mod http;
pub mod request_context;
pub mod state;
