//! SQLite-backed trivia store.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::{TriviaError, TriviaResult};
use crate::store::{CategoryStore, QuestionStore};
use crate::types::{
    Category, NewQuestion, Question, DEFAULT_CATEGORIES, MAX_DIFFICULTY, MIN_DIFFICULTY,
};

/// SQLite-backed store for questions and categories.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a store at the given path.
    pub fn open(db_path: impl AsRef<Path>) -> TriviaResult<Self> {
        if let Some(parent) = db_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path.as_ref())?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn in_memory() -> TriviaResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create tables and seed default categories into an empty store.
    ///
    /// AUTOINCREMENT keeps question ids monotonic, so an id is never
    /// reused after a delete within the lifetime of the database.
    fn init_schema(&self) -> TriviaResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS questions (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                question   TEXT NOT NULL,
                answer     TEXT NOT NULL,
                difficulty INTEGER NOT NULL,
                category   INTEGER NOT NULL REFERENCES categories(id)
            );

            CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
        "#,
        )?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        if count == 0 {
            debug!("seeding default categories");
            for label in DEFAULT_CATEGORIES {
                conn.execute("INSERT INTO categories (type) VALUES (?1)", params![label])?;
            }
        }

        Ok(())
    }
}

fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        difficulty: row.get(3)?,
        category: row.get(4)?,
    })
}

fn category_exists(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM categories WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

impl QuestionStore for SqliteStore {
    fn list_all(&self) -> TriviaResult<Vec<Question>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, question, answer, difficulty, category
             FROM questions
             ORDER BY id ASC",
        )?;
        let questions = stmt.query_map([], row_to_question)?;
        Ok(questions.collect::<Result<Vec<_>, _>>()?)
    }

    fn list_by_category(&self, category_id: i64) -> TriviaResult<Vec<Question>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, question, answer, difficulty, category
             FROM questions
             WHERE category = ?1
             ORDER BY id ASC",
        )?;
        let questions = stmt.query_map(params![category_id], row_to_question)?;
        Ok(questions.collect::<Result<Vec<_>, _>>()?)
    }

    fn search(&self, term: &str) -> TriviaResult<Vec<Question>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(TriviaError::MissingSearchTerm);
        }

        // SQLite LIKE is case-insensitive for ASCII.
        let pattern = format!("%{term}%");
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, question, answer, difficulty, category
             FROM questions
             WHERE question LIKE ?1
             ORDER BY id ASC",
        )?;
        let questions = stmt.query_map(params![pattern], row_to_question)?;
        Ok(questions.collect::<Result<Vec<_>, _>>()?)
    }

    fn create(&self, new: NewQuestion) -> TriviaResult<Question> {
        if new.question.trim().is_empty() {
            return Err(TriviaError::validation("question text must not be empty"));
        }
        if new.answer.trim().is_empty() {
            return Err(TriviaError::validation("answer text must not be empty"));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&new.difficulty) {
            return Err(TriviaError::validation(format!(
                "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}"
            )));
        }

        let conn = self.conn.lock().unwrap();
        if !category_exists(&conn, new.category)? {
            return Err(TriviaError::invalid_reference(new.category));
        }

        conn.execute(
            "INSERT INTO questions (question, answer, difficulty, category)
             VALUES (?1, ?2, ?3, ?4)",
            params![new.question, new.answer, new.difficulty, new.category],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, "created question");

        Ok(Question {
            id,
            question: new.question,
            answer: new.answer,
            difficulty: new.difficulty,
            category: new.category,
        })
    }

    fn delete(&self, id: i64) -> TriviaResult<()> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(TriviaError::not_found(format!(
                "question with id {id} does not exist"
            )));
        }
        debug!(id, "deleted question");
        Ok(())
    }
}

impl CategoryStore for SqliteStore {
    fn list_all(&self) -> TriviaResult<Vec<Category>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY type ASC")?;
        let categories = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                kind: row.get(1)?,
            })
        })?;
        Ok(categories.collect::<Result<Vec<_>, _>>()?)
    }

    fn exists(&self, id: i64) -> TriviaResult<bool> {
        let conn = self.conn.lock().unwrap();
        Ok(category_exists(&conn, id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_are_seeded() {
        let store = SqliteStore::in_memory().unwrap();

        let categories = CategoryStore::list_all(&store).unwrap();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());

        // Ordered by label, not by id.
        let labels: Vec<&str> = categories.iter().map(|c| c.kind.as_str()).collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn test_create_and_list_round_trip() {
        let store = SqliteStore::in_memory().unwrap();

        let created = store
            .create(NewQuestion::new("What is the boiling point of water?", "100C", 1, 1))
            .unwrap();
        assert!(created.id > 0);

        let all = QuestionStore::list_all(&store).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created);
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let store = SqliteStore::in_memory().unwrap();

        let err = store
            .create(NewQuestion::new("q", "a", 1, 999))
            .unwrap_err();
        assert!(matches!(
            err,
            TriviaError::InvalidReference { category_id: 999 }
        ));
    }

    #[test]
    fn test_create_rejects_missing_fields_and_bad_difficulty() {
        let store = SqliteStore::in_memory().unwrap();

        let err = store.create(NewQuestion::new("", "a", 1, 1)).unwrap_err();
        assert!(matches!(err, TriviaError::Validation { .. }));

        let err = store.create(NewQuestion::new("q", "  ", 1, 1)).unwrap_err();
        assert!(matches!(err, TriviaError::Validation { .. }));

        let err = store.create(NewQuestion::new("q", "a", 6, 1)).unwrap_err();
        assert!(matches!(err, TriviaError::Validation { .. }));

        let err = store.create(NewQuestion::new("q", "a", 0, 1)).unwrap_err();
        assert!(matches!(err, TriviaError::Validation { .. }));
    }

    #[test]
    fn test_delete_removes_question() {
        let store = SqliteStore::in_memory().unwrap();

        let created = store.create(NewQuestion::new("q", "a", 2, 1)).unwrap();
        store.delete(created.id).unwrap();

        let all = QuestionStore::list_all(&store).unwrap();
        assert!(all.iter().all(|q| q.id != created.id));
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let store = SqliteStore::in_memory().unwrap();

        let err = store.delete(1000).unwrap_err();
        assert!(matches!(err, TriviaError::NotFound { .. }));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = SqliteStore::in_memory().unwrap();

        let first = store.create(NewQuestion::new("q1", "a1", 1, 1)).unwrap();
        store.delete(first.id).unwrap();

        let second = store.create(NewQuestion::new("q2", "a2", 1, 1)).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .create(NewQuestion::new("Which planet is closest to the sun?", "Mercury", 2, 1))
            .unwrap();
        store
            .create(NewQuestion::new("Who painted the Mona Lisa?", "Da Vinci", 3, 2))
            .unwrap();

        let hits = store.search("PLANET").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].answer, "Mercury");

        let hits = store.search("xyzzy").unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_requires_a_term() {
        let store = SqliteStore::in_memory().unwrap();

        assert!(matches!(
            store.search("").unwrap_err(),
            TriviaError::MissingSearchTerm
        ));
        assert!(matches!(
            store.search("   ").unwrap_err(),
            TriviaError::MissingSearchTerm
        ));
    }

    #[test]
    fn test_list_by_category_filters_and_orders() {
        let store = SqliteStore::in_memory().unwrap();
        let q1 = store.create(NewQuestion::new("q1", "a1", 1, 1)).unwrap();
        let q2 = store.create(NewQuestion::new("q2", "a2", 1, 2)).unwrap();
        let q3 = store.create(NewQuestion::new("q3", "a3", 1, 1)).unwrap();

        let science = store.list_by_category(1).unwrap();
        assert_eq!(
            science.iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![q1.id, q3.id]
        );

        let art = store.list_by_category(2).unwrap();
        assert_eq!(art.iter().map(|q| q.id).collect::<Vec<_>>(), vec![q2.id]);
    }

    #[test]
    fn test_category_exists() {
        let store = SqliteStore::in_memory().unwrap();

        assert!(store.exists(1).unwrap());
        assert!(!store.exists(999).unwrap());
    }
}
