/// Which dashboard pipeline to run. Selected once per refresh cycle from the
/// page context (for the CLI: the `--role` flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}
