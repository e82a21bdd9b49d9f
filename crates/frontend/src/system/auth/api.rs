use crate::shared::api_utils::ApiClient;
use crate::shared::grid::GridError;
use contracts::system::auth::{LoginRequest, LoginResponse};

/// Login with username and password
pub async fn login(
    client: &ApiClient,
    username: String,
    password: String,
) -> Result<LoginResponse, GridError> {
    let request = LoginRequest { username, password };
    client.post_json("/auth/login", &request).await
}
