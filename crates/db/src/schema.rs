use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create student_groups table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS student_groups (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create course_materials table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS course_materials (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create session_types table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS session_types (
            id SERIAL PRIMARY KEY,
            course_type_name VARCHAR(64) NOT NULL,
            course_material_id INTEGER NOT NULL REFERENCES course_materials(id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            id SERIAL PRIMARY KEY,
            date TIMESTAMP WITH TIME ZONE NOT NULL,
            group_id INTEGER NOT NULL REFERENCES student_groups(id),
            session_type_id INTEGER NOT NULL REFERENCES session_types(id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per prepared query
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_slots_date ON slots(date)",
        "CREATE INDEX IF NOT EXISTS idx_slots_group_id ON slots(group_id)",
        "CREATE INDEX IF NOT EXISTS idx_slots_session_type_id ON slots(session_type_id)",
        "CREATE INDEX IF NOT EXISTS idx_session_types_course_material_id ON session_types(course_material_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
