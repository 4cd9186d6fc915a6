/// Create the categories table; rows are read-only through the API
pub fn migration() -> String {
    r#"
CREATE TABLE categories (
    id INTEGER PRIMARY KEY,
    type TEXT NOT NULL
);
"#
    .to_string()
}
