//! The signed-in user and their roles.
//!
//! Role gating in the UI is presentation only: columns and buttons are
//! simply not constructed for non-admins. The backend remains the real
//! authorization boundary.

use campusdesk_states::{Command, Compute, QueryStatus, StateCtx, Updater};
use log::{error, info};
use serde::Deserialize;

use crate::{BusinessConfig, api};

/// A capability tag granted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Parse a backend authority string; unknown authorities are ignored.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "ROLE_ADMIN" => Some(Self::Admin),
            "ROLE_USER" => Some(Self::User),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::User => "ROLE_USER",
        }
    }
}

/// The current caller, as reported by `GET {api}/currentUser`.
///
/// `Default` is an anonymous caller with no roles, which gates off every
/// role-guarded affordance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUser {
    pub email: String,
    pub full_name: String,
    roles: Vec<Role>,
}

impl CurrentUser {
    pub fn with_roles(
        email: impl Into<String>,
        full_name: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// The pure authorization predicate: does this caller hold `role`?
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

/// Cache of the current-user query.
#[derive(Debug, Default)]
pub struct SessionCache {
    pub status: QueryStatus<CurrentUser>,
}

impl SessionCache {
    pub fn user(&self) -> Option<&CurrentUser> {
        self.status.value()
    }

    /// Convenience for render paths: anonymous while the query is unsettled.
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(CurrentUser::is_admin)
    }
}

impl Compute for SessionCache {}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserProfile {
    #[serde(default)]
    email: String,
    #[serde(default)]
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct CurrentUserResponse {
    #[serde(default)]
    user: UserProfile,
    #[serde(default)]
    roles: Vec<String>,
}

impl From<CurrentUserResponse> for CurrentUser {
    fn from(response: CurrentUserResponse) -> Self {
        Self::with_roles(
            response.user.email,
            response.user.full_name,
            response.roles.iter().filter_map(|tag| Role::parse(tag)),
        )
    }
}

/// GET `{api}/currentUser` into [`SessionCache`].
#[derive(Debug, Default)]
pub struct FetchCurrentUser;

impl Command for FetchCurrentUser {
    fn run(self: Box<Self>, ctx: &StateCtx, updater: Updater) {
        let config = ctx.state::<BusinessConfig>();
        let url = format!("{}/currentUser", config.api_url());

        updater.set(SessionCache {
            status: QueryStatus::Pending,
        });

        ehttp::fetch(ehttp::Request::get(&url), move |result| {
            let status = match result {
                Ok(response) if response.status == 200 => {
                    match api::parse_json::<CurrentUserResponse>(&response) {
                        Ok(body) => {
                            let user = CurrentUser::from(body);
                            info!("current user {} ({:?})", user.email, user.roles);
                            QueryStatus::Success(user)
                        }
                        Err(err) => {
                            error!("current user fetch: {err:#}");
                            QueryStatus::Error(format!("Parse error: {err}"))
                        }
                    }
                }
                Ok(response) => QueryStatus::Error(api::status_error(&response)),
                Err(err) => QueryStatus::Error(err),
            };
            updater.set(SessionCache { status });
        });
    }
}
