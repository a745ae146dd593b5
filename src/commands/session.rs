//! Session Commands

use shkola_api::domain::{Credentials, Profile};
use shkola_api::session::SessionClient;
use shkola_api::ApiResult;

use super::HttpTransport;

fn sessions() -> SessionClient<HttpTransport> {
    SessionClient::new(HttpTransport::default())
}

pub async fn login(credentials: &Credentials) -> ApiResult<()> {
    sessions().login(credentials).await
}

pub async fn me() -> ApiResult<Profile> {
    sessions().me().await
}

pub async fn logout() -> ApiResult<()> {
    sessions().logout().await
}
