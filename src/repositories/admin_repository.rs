use sqlx::PgPool;

use crate::models::admin_user::AdminUser;
use crate::utils::errors::AppError;

pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>, AppError> {
        let admin = sqlx::query_as::<_, AdminUser>(
            "SELECT id, username, password_hash FROM admin_users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }
}
