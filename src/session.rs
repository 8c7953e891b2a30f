/// Session identity
///
/// The core treats the owner as an opaque precondition: no habit or log
/// operation runs without a resolved user. In place of a sign-in service,
/// this generates a user ID on first run and persists it in the data
/// directory.

use std::path::Path;

use crate::domain::UserId;
use crate::AppError;

const OWNER_FILE: &str = "owner";

/// The resolved identity for this process
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: UserId,
}

impl Session {
    /// Load the persisted owner ID, creating one on first run
    pub fn resolve(data_dir: &Path) -> Result<Self, AppError> {
        let path = data_dir.join(OWNER_FILE);

        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let user_id = UserId::from_string(contents.trim()).map_err(|_| {
                AppError::Session(format!("corrupt owner file at {}", path.display()))
            })?;
            Ok(Self { user_id })
        } else {
            std::fs::create_dir_all(data_dir)?;
            let user_id = UserId::new();
            std::fs::write(&path, user_id.to_string())?;
            tracing::info!("Created new user identity: {}", user_id);
            Ok(Self { user_id })
        }
    }
}
