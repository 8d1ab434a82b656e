// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! - `cargo xtask ci` — format check, clippy, and the full test suite,
//!   exactly as CI runs them
//! - `cargo xtask seed` — provision a local `SQLite` database with demo
//!   registry entries and dashboard rows, standing in for the HR feed and
//!   the punch aggregation job during development

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing_log::AsTrace;

use ponto_ops_domain::{PunchRow, PunchStatus};
use ponto_ops_persistence::{ColaboradorData, SqlitePersistence};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the checks CI runs: fmt, clippy, tests.
    Ci,
    /// Seed a local database with demo data.
    Seed {
        /// Database file path. Defaults to `ponto-ops.db` in the workspace
        /// root.
        #[arg(short, long)]
        database: Option<String>,
    },
}

impl Args {
    fn run(&self) -> Result<()> {
        match &self.command {
            Command::Ci => run_ci(),
            Command::Seed { database } => run_seed(database.as_deref()),
        }
    }
}

fn run_ci() -> Result<()> {
    tracing::info!("cargo fmt --all -- --check");
    cmd!("cargo", "fmt", "--all", "--", "--check")
        .run()
        .wrap_err("format check failed")?;

    tracing::info!("cargo clippy --all-targets");
    cmd!("cargo", "clippy", "--all-targets", "--", "-D", "warnings")
        .run()
        .wrap_err("clippy failed")?;

    tracing::info!("cargo test");
    cmd!("cargo", "test").run().wrap_err("tests failed")?;

    tracing::info!("CI checks passed");
    Ok(())
}

fn default_database_path() -> Result<String> {
    let metadata = MetadataCommand::new()
        .exec()
        .wrap_err("failed to read cargo metadata")?;
    Ok(metadata
        .workspace_root
        .join("ponto-ops.db")
        .as_str()
        .to_string())
}

fn demo_registry() -> Vec<ColaboradorData> {
    let entries: [(&str, &str, &str, &str); 5] = [
        ("521", "Ana Beatriz Lima", "SEDE", "ANALISTA DE SISTEMAS"),
        (
            "160767",
            "Marcos Paulo Andrade",
            "GRU",
            "SUPERVISOR DE AEROPORTO",
        ),
        ("200311", "Joana Dias", "GRU", "AGENTE DE RAMPA"),
        ("200312", "Pedro Reis", "GRU", "AGENTE DE PASSAGENS"),
        ("300401", "Bruno Costa", "BSB", "OPERADOR DE EQUIPAMENTOS"),
    ];
    entries
        .into_iter()
        .map(|(matricula, nome, filial, funcao)| ColaboradorData {
            matricula: matricula.to_string(),
            nome: Some(nome.to_string()),
            filial: Some(filial.to_string()),
            funcao: Some(funcao.to_string()),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn demo_painel_row(colaborador: &ColaboradorData, index: usize) -> PunchRow {
    let worked: f64 = 4.0 + index as f64;
    PunchRow {
        matricula: Some(colaborador.matricula.clone()),
        nome: colaborador.nome.clone(),
        colaborador_filial: colaborador.filial.clone(),
        carga_horaria: Some(if index % 2 == 0 { 220 } else { 180 }),
        funcao: colaborador.funcao.clone(),
        entrada_escala: Some(String::from("2026-02-03T06:00:00-03:00")),
        saida_escala: Some(String::from("2026-02-03T14:00:00-03:00")),
        entrada1: Some(String::from("2026-02-03T06:02:00-03:00")),
        saida1: None,
        entrada2: None,
        saida2: None,
        intervalo_min: Some(60),
        horas_trabalhadas: Some(worked),
        expected_hours: Some(8.0),
        hora_extra: Some(if worked > 8.0 { worked - 8.0 } else { 0.0 }),
        status: Some(if worked > 8.0 {
            PunchStatus::TrabalhandoHoraExtra
        } else {
            PunchStatus::TrabalhandoOk
        }),
    }
}

fn run_seed(database: Option<&str>) -> Result<()> {
    let path: String = match database {
        Some(path) => path.to_string(),
        None => default_database_path()?,
    };
    tracing::info!(path, "Seeding database");

    let mut persistence =
        SqlitePersistence::new_with_file(&path).wrap_err("failed to open database")?;

    let registry: Vec<ColaboradorData> = demo_registry();
    for entry in &registry {
        persistence
            .upsert_colaborador(entry)
            .wrap_err("failed to seed colaborador")?;
    }

    persistence
        .clear_painel()
        .wrap_err("failed to clear painel")?;
    for (index, entry) in registry.iter().enumerate() {
        // Head-office staff have no punches on the demo dashboard.
        if entry.filial.as_deref() == Some("SEDE") {
            continue;
        }
        persistence
            .insert_painel_row(&demo_painel_row(entry, index))
            .wrap_err("failed to seed painel row")?;
    }

    tracing::info!(
        colaboradores = registry.len(),
        "Seed complete; sign up with an eligible matricula (e.g. 160767)"
    );
    Ok(())
}
