// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::RunQueryDsl;
use ponto_ops::fetch_all;
use ponto_ops_domain::PunchRow;

use crate::SqlitePersistence;
use crate::tests::helpers::{painel_row, test_db};

fn seeded_db(rows: usize) -> SqlitePersistence {
    let mut db: SqlitePersistence = test_db();
    for i in 0..rows {
        let filial: &str = if i % 2 == 0 { "GRU" } else { "BSB" };
        db.insert_painel_row(&painel_row(&format!("{i:06}"), "Fulano de Tal", filial))
            .unwrap_or_else(|e| panic!("insert failed: {e}"));
    }
    db
}

#[test]
fn test_pages_come_back_in_stable_order() {
    let mut db: SqlitePersistence = seeded_db(25);

    let first: Vec<PunchRow> = db
        .fetch_painel_page(0, 10)
        .unwrap_or_else(|e| panic!("fetch failed: {e}"));
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].matricula.as_deref(), Some("000000"));

    let second: Vec<PunchRow> = db
        .fetch_painel_page(10, 10)
        .unwrap_or_else(|e| panic!("fetch failed: {e}"));
    assert_eq!(second[0].matricula.as_deref(), Some("000010"));

    let last: Vec<PunchRow> = db
        .fetch_painel_page(20, 10)
        .unwrap_or_else(|e| panic!("fetch failed: {e}"));
    assert_eq!(last.len(), 5);
}

#[test]
fn test_feed_trait_paginates_to_completion() {
    let mut db: SqlitePersistence = seeded_db(25);
    let rows: Vec<PunchRow> = fetch_all(&mut db, 10).unwrap_or_default();
    assert_eq!(rows.len(), 25);
}

#[test]
fn test_empty_relation_yields_empty_feed() {
    let mut db: SqlitePersistence = test_db();
    let rows: Vec<PunchRow> = fetch_all(&mut db, 10).unwrap_or_else(|e| panic!("fetch failed: {e}"));
    assert!(rows.is_empty());
}

#[test]
fn test_unknown_status_degrades_to_none() {
    let mut db: SqlitePersistence = test_db();

    // A status value the enum does not know, as a newer aggregation job
    // might write.
    diesel::sql_query(
        "INSERT INTO painel_ponto (matricula, nome, colaborador_filial, entrada1, status) \
         VALUES ('000001', 'Fulano de Tal', 'GRU', '2026-02-03T06:02:00-03:00', 'em pausa')",
    )
    .execute(&mut db.conn)
    .unwrap_or_else(|e| panic!("raw insert failed: {e}"));

    let fetched: Vec<PunchRow> = db
        .fetch_painel_page(0, 10)
        .unwrap_or_else(|e| panic!("fetch failed: {e}"));
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].status, None);
    assert_eq!(fetched[0].matricula.as_deref(), Some("000001"));
}

#[test]
fn test_clear_painel_replaces_materialisation() {
    let mut db: SqlitePersistence = seeded_db(5);
    db.clear_painel()
        .unwrap_or_else(|e| panic!("clear failed: {e}"));

    let rows: Vec<PunchRow> = db
        .fetch_painel_page(0, 10)
        .unwrap_or_else(|e| panic!("fetch failed: {e}"));
    assert!(rows.is_empty());
}

#[test]
fn test_feed_round_trips_row_fields() {
    let mut db: SqlitePersistence = test_db();
    let row: PunchRow = painel_row("000042", "Joana Prado", "GRU");
    db.insert_painel_row(&row)
        .unwrap_or_else(|e| panic!("insert failed: {e}"));

    let mut fetched: Vec<PunchRow> = db
        .fetch_painel_page(0, 10)
        .unwrap_or_else(|e| panic!("fetch failed: {e}"));
    assert_eq!(fetched.pop(), Some(row));
}
