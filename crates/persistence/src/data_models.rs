// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ponto_ops_domain::{Filial, Role, ViewerProfile};

/// A portal account row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileData {
    /// Canonical profile identifier.
    pub profile_id: i64,
    /// Employee id, unique per account.
    pub matricula: String,
    /// Login email, stored lower-cased.
    pub email: String,
    /// Bcrypt hash of the account password.
    pub password_hash: String,
    /// Display name, copied from the registry at signup.
    pub nome: Option<String>,
    /// Home base code, copied from the registry at signup.
    pub filial: Option<String>,
    /// Job title, copied from the registry at signup.
    pub funcao: Option<String>,
    /// Stored role value.
    pub role: String,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
    /// Last successful login timestamp (ISO-8601).
    pub last_login_at: Option<String>,
}

impl ProfileData {
    /// Converts the stored account into the viewer identity the pipeline
    /// consumes.
    #[must_use]
    pub fn to_viewer_profile(&self) -> ViewerProfile {
        ViewerProfile {
            id: self.profile_id,
            matricula: self.matricula.clone(),
            nome: self.nome.clone(),
            filial: self
                .filial
                .as_deref()
                .map(Filial::new)
                .filter(|filial| !filial.is_empty()),
            funcao: self.funcao.clone(),
            role: Role::from_stored(Some(self.role.as_str())),
        }
    }
}

/// A session row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    /// Canonical session identifier.
    pub session_id: i64,
    /// Opaque bearer token.
    pub session_token: String,
    /// The owning profile.
    pub profile_id: i64,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
    /// Last activity timestamp (ISO-8601).
    pub last_activity_at: String,
    /// Expiry timestamp (ISO-8601).
    pub expires_at: String,
}

/// An employee registry row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColaboradorData {
    /// Employee id.
    pub matricula: String,
    /// Full name.
    pub nome: Option<String>,
    /// Home base code.
    pub filial: Option<String>,
    /// Job title.
    pub funcao: Option<String>,
}
