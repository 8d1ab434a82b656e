// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registry-gated signup.
//!
//! Accounts can only be created for matriculas present in the employee
//! registry, and only for management titles or explicitly allowlisted
//! matriculas. Allowlisted matriculas become admins; everyone else is a
//! plain user.

use serde::Deserialize;
use std::collections::BTreeSet;
use time::OffsetDateTime;
use tracing::info;

use ponto_ops_domain::Role;
use ponto_ops_persistence::{ColaboradorData, NewProfile, PersistenceError, SqlitePersistence};

use crate::challenge::ChallengeVerifier;
use crate::error::{ApiError, translate_persistence_error};

/// The message shown when a matricula is not eligible.
const NOT_ALLOWED_REASON: &str =
    "Cadastro permitido apenas para gerente, coordenador ou supervisor.";

fn default_admin_matriculas() -> BTreeSet<String> {
    ["521", "584", "140440", "160767", "690181", "690188", "770001"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_allowed_funcao_terms() -> Vec<String> {
    ["GERENTE", "COORDENADOR", "SUPERVISOR"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Signup eligibility tables.
///
/// Configuration data with production defaults, so the allowlist can grow
/// without a rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SignupPolicy {
    /// Matriculas that may always sign up, and do so as admins.
    pub admin_matriculas: BTreeSet<String>,
    /// Title substrings (upper-cased) that make a matricula eligible.
    pub allowed_funcao_terms: Vec<String>,
}

impl Default for SignupPolicy {
    fn default() -> Self {
        Self {
            admin_matriculas: default_admin_matriculas(),
            allowed_funcao_terms: default_allowed_funcao_terms(),
        }
    }
}

impl SignupPolicy {
    /// Returns whether the matricula is on the admin allowlist.
    #[must_use]
    pub fn is_admin(&self, matricula: &str) -> bool {
        self.admin_matriculas.contains(matricula.trim())
    }

    /// Returns whether the title makes the matricula eligible.
    #[must_use]
    pub fn title_allowed(&self, funcao: Option<&str>) -> bool {
        let funcao_upper: String = funcao.unwrap_or("").to_uppercase();
        self.allowed_funcao_terms
            .iter()
            .any(|term| funcao_upper.contains(term))
    }

    /// Decides eligibility and role for a registry entry.
    ///
    /// Allowlisted matriculas sign up as admins regardless of title;
    /// eligible titles sign up as users; everyone else is refused.
    #[must_use]
    pub fn decide(&self, colaborador: &ColaboradorData) -> Option<Role> {
        if self.is_admin(&colaborador.matricula) {
            Some(Role::Admin)
        } else if self.title_allowed(colaborador.funcao.as_deref()) {
            Some(Role::User)
        } else {
            None
        }
    }
}

/// Masks a registry name down to its first given name.
///
/// The lookup endpoint is reachable before authentication, so it never
/// echoes the full name.
#[must_use]
pub fn masked_name(nome: Option<&str>) -> String {
    nome.unwrap_or("")
        .trim()
        .split_whitespace()
        .next()
        .map_or_else(|| String::from("****"), |first| format!("{first} ****"))
}

/// The pre-signup registry lookup response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColaboradorLookup {
    /// Masked display name (`"Fulano ****"`).
    pub nome: String,
    /// Home base code, empty when the registry has none.
    pub filial: String,
    /// Job title, empty when the registry has none.
    pub funcao: String,
    /// Whether the matricula may sign up.
    pub allow_signup: bool,
    /// The refusal reason when signup is not allowed.
    pub allow_reason: Option<String>,
}

/// Looks a matricula up in the registry for the signup form.
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown matriculas and `Internal` for
/// database failures.
pub fn lookup_colaborador(
    persistence: &mut SqlitePersistence,
    policy: &SignupPolicy,
    matricula: &str,
) -> Result<ColaboradorLookup, ApiError> {
    let matricula: &str = matricula.trim();
    if matricula.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("matricula"),
            message: String::from("Matricula is required"),
        });
    }

    let colaborador: ColaboradorData = persistence
        .get_colaborador_by_matricula(matricula)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Colaborador"),
            message: format!("Matricula '{matricula}' not found"),
        })?;

    let allowed: bool = policy.decide(&colaborador).is_some();
    Ok(ColaboradorLookup {
        nome: masked_name(colaborador.nome.as_deref()),
        filial: colaborador.filial.unwrap_or_default(),
        funcao: colaborador.funcao.unwrap_or_default(),
        allow_signup: allowed,
        allow_reason: if allowed {
            None
        } else {
            Some(String::from(NOT_ALLOWED_REASON))
        },
    })
}

/// A signup request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    /// Employee id.
    pub matricula: String,
    /// Login email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Proof-of-humanity token.
    pub captcha_token: String,
    /// Client address forwarded to the challenge provider.
    #[serde(default)]
    pub remote_ip: Option<String>,
}

/// A successful signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResponse {
    /// The created profile's identifier.
    pub profile_id: i64,
    /// The role the account was created with.
    pub role: Role,
}

fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: String::from("Missing required field"),
        });
    }
    Ok(trimmed)
}

/// Creates a portal account for an eligible matricula.
///
/// The flow: required fields, challenge verification, registry membership,
/// eligibility, duplicate registration, then account creation with the
/// registry's name/base/title copied onto the profile.
///
/// # Errors
///
/// Returns the first failing check as an [`ApiError`].
pub fn signup(
    persistence: &mut SqlitePersistence,
    policy: &SignupPolicy,
    verifier: &dyn ChallengeVerifier,
    request: &SignupRequest,
) -> Result<SignupResponse, ApiError> {
    let matricula: &str = require("matricula", &request.matricula)?;
    let email: &str = require("email", &request.email)?;
    if request.password.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("password"),
            message: String::from("Missing required field"),
        });
    }
    let captcha_token: &str = require("captcha_token", &request.captcha_token)?;

    verifier.verify(captcha_token, request.remote_ip.as_deref())?;

    let colaborador: ColaboradorData = persistence
        .get_colaborador_by_matricula(matricula)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Colaborador"),
            message: format!("Matricula '{matricula}' not found"),
        })?;

    let role: Role = policy
        .decide(&colaborador)
        .ok_or_else(|| ApiError::SignupNotAllowed {
            message: String::from(NOT_ALLOWED_REASON),
        })?;

    if persistence
        .get_profile_by_matricula(matricula)
        .map_err(translate_persistence_error)?
        .is_some()
    {
        return Err(ApiError::AlreadyRegistered {
            matricula: matricula.to_string(),
        });
    }

    let created_at: String = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })?;

    let new_profile: NewProfile = NewProfile {
        matricula: colaborador.matricula.clone(),
        email: email.to_string(),
        password: request.password.clone(),
        nome: colaborador.nome,
        filial: colaborador.filial,
        funcao: colaborador.funcao,
        role: role.as_str().to_string(),
    };

    let created = persistence
        .create_profile(&new_profile, &created_at)
        .map_err(|e| match e {
            PersistenceError::UniqueViolation(_) => ApiError::AlreadyRegistered {
                matricula: matricula.to_string(),
            },
            other => translate_persistence_error(other),
        })?;

    info!(
        profile_id = created.profile_id,
        matricula = %created.matricula,
        role = %role,
        "Signup completed"
    );

    Ok(SignupResponse {
        profile_id: created.profile_id,
        role,
    })
}
