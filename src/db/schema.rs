pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    is_completed INTEGER NOT NULL DEFAULT 0,
    completed_at INTEGER
);

CREATE INDEX IF NOT EXISTS idx_tasks_active ON tasks(id) WHERE is_completed = 0;
CREATE INDEX IF NOT EXISTS idx_tasks_completed_at ON tasks(completed_at);
"#;
