pub mod collaborators;
pub mod commands {
    pub mod create_user;
}
