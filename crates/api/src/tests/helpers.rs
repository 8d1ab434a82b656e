// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ponto_ops_persistence::{ColaboradorData, SqlitePersistence};

use crate::{ChallengeError, ChallengeVerifier, SignupRequest};

/// Creates a fresh in-memory database.
pub fn test_db() -> SqlitePersistence {
    match SqlitePersistence::new_in_memory() {
        Ok(db) => db,
        Err(e) => panic!("failed to create in-memory database: {e}"),
    }
}

/// Creates a database seeded with a few registry entries:
/// an eligible supervisor, an allowlisted admin, and an ineligible agent.
pub fn db_with_registry() -> SqlitePersistence {
    let mut db: SqlitePersistence = test_db();
    let entries: [ColaboradorData; 3] = [
        ColaboradorData {
            matricula: String::from("160767"),
            nome: Some(String::from("Marcos Paulo Andrade")),
            filial: Some(String::from("GRU")),
            funcao: Some(String::from("SUPERVISOR DE AEROPORTO")),
        },
        ColaboradorData {
            matricula: String::from("521"),
            nome: Some(String::from("Ana Beatriz Lima")),
            filial: Some(String::from("SEDE")),
            funcao: Some(String::from("ANALISTA DE SISTEMAS")),
        },
        ColaboradorData {
            matricula: String::from("300123"),
            nome: Some(String::from("Joao Pedro Silva")),
            filial: Some(String::from("GRU")),
            funcao: Some(String::from("AGENTE DE RAMPA")),
        },
    ];
    for entry in &entries {
        db.upsert_colaborador(entry)
            .unwrap_or_else(|e| panic!("seed failed: {e}"));
    }
    db
}

/// A signup request for the given matricula.
pub fn signup_request(matricula: &str, email: &str) -> SignupRequest {
    SignupRequest {
        matricula: matricula.to_string(),
        email: email.to_string(),
        password: String::from("correta-batata-cavalo-grampo"),
        captcha_token: String::from("token-de-teste"),
        remote_ip: None,
    }
}

/// A verifier that accepts everything.
pub struct AcceptingVerifier;

impl ChallengeVerifier for AcceptingVerifier {
    fn verify(&self, _token: &str, _remote_ip: Option<&str>) -> Result<(), ChallengeError> {
        Ok(())
    }
}

/// A verifier that rejects everything.
pub struct RejectingVerifier;

impl ChallengeVerifier for RejectingVerifier {
    fn verify(&self, _token: &str, _remote_ip: Option<&str>) -> Result<(), ChallengeError> {
        Err(ChallengeError::Rejected {
            codes: String::from("invalid-input-response"),
        })
    }
}
