/// Seed the standard trivia categories
pub fn migration() -> String {
    r#"
INSERT INTO categories (id, type) VALUES
    (1, 'Science'),
    (2, 'Art'),
    (3, 'Geography'),
    (4, 'History'),
    (5, 'Entertainment'),
    (6, 'Sports');
"#
    .to_string()
}
