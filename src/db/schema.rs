//! Table and column names follow the existing `sql/expenses.db` layout so
//! databases created by earlier releases open unchanged.

pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS categorie (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    nome        TEXT NOT NULL UNIQUE,
    creato_il   TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS spese (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    data_spesa    TEXT NOT NULL
                  CHECK (data_spesa GLOB '[0-9][0-9][0-9][0-9]-[0-1][0-9]-[0-3][0-9]'),
    importo       TEXT NOT NULL CHECK (CAST(importo AS REAL) > 0),
    id_categoria  INTEGER NOT NULL,
    descrizione   TEXT,
    creato_il     TEXT NOT NULL DEFAULT (datetime('now')),
    FOREIGN KEY (id_categoria) REFERENCES categorie(id)
        ON UPDATE CASCADE
        ON DELETE RESTRICT
);

CREATE TABLE IF NOT EXISTS budget (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    mese          TEXT NOT NULL
                  CHECK (mese GLOB '[0-9][0-9][0-9][0-9]-[0-1][0-9]'),
    id_categoria  INTEGER NOT NULL,
    importo       TEXT NOT NULL CHECK (CAST(importo AS REAL) > 0),
    creato_il     TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE (mese, id_categoria),
    FOREIGN KEY (id_categoria) REFERENCES categorie(id)
        ON UPDATE CASCADE
        ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_spese_data ON spese(data_spesa);
CREATE INDEX IF NOT EXISTS idx_spese_categoria ON spese(id_categoria);
"#;

/// Stored in `PRAGMA user_version`.
pub(crate) const CURRENT_VERSION: i32 = 1;
