//! Session Layer
//!
//! Login, "who am I" and logout. The session itself is a cookie the browser
//! keeps; all this side tracks is the role the navigation is keyed on.

use log::info;
use serde::{Deserialize, Serialize};

use crate::client::{decode_optional, execute};
use crate::domain::{Credentials, LoginResponse, Profile, Role};
use crate::error::{ApiError, ApiResult};
use crate::transport::{ApiRequest, Transport};

pub const LOGIN_PATH: &str = "auth/login";
pub const ME_PATH: &str = "auth/me";
pub const LOGOUT_PATH: &str = "auth/logout";

pub struct SessionClient<T> {
    transport: T,
}

impl<T: Transport> SessionClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Exchange credentials for a session cookie.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        let request = ApiRequest::post(LOGIN_PATH).with_body(serde_json::to_value(credentials)?);
        let response = execute(&self.transport, request).await?;
        match decode_optional::<LoginResponse>(&response)? {
            Some(reply) if !reply.success => Err(ApiError::Server {
                status: response.status,
                message: reply.message,
                field: reply.field,
            }),
            _ => {
                info!("Signed in as {}", credentials.phone);
                Ok(())
            }
        }
    }

    /// Profile of whoever the session cookie belongs to
    pub async fn me(&self) -> ApiResult<Profile> {
        let response = execute(&self.transport, ApiRequest::get(ME_PATH)).await?;
        decode_optional(&response)?
            .ok_or_else(|| ApiError::Decode("empty profile response".to_string()))
    }

    pub async fn logout(&self) -> ApiResult<()> {
        execute(&self.transport, ApiRequest::post(LOGOUT_PATH)).await?;
        info!("Signed out");
        Ok(())
    }
}

/// Process-wide session state: who is signed in, if anyone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub profile: Option<Profile>,
}

impl Session {
    pub fn role(&self) -> Option<&Role> {
        self.profile.as_ref().map(|p| &p.role)
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    /// Teacher id to stamp on new marks; only teachers and principals grade
    pub fn teacher_id(&self) -> Option<i32> {
        self.profile
            .as_ref()
            .filter(|p| matches!(p.role, Role::Teacher | Role::Principal))
            .and_then(|p| p.id)
    }

    pub fn sign_in(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    pub fn sign_out(&mut self) {
        self.profile = None;
    }
}
