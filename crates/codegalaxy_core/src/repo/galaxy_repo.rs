//! Galaxy object repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Objects are insert-only; there is no update or delete path.
//! - List order is `created_at ASC`, insertion order on ties.

use crate::model::galaxy::{CelestialId, CelestialKind, CelestialObject, Position};
use crate::model::UserId;
use crate::repo::{parse_uuid_column, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const GALAXY_SELECT_SQL: &str = "SELECT
    uuid,
    user_id,
    type,
    position_x,
    position_y,
    position_z,
    color,
    size,
    task_uuid,
    created_at
FROM galaxy_objects";

pub trait GalaxyRepository {
    fn insert_object(&self, object: &CelestialObject) -> RepoResult<CelestialId>;
    fn list_objects(&self, user_id: UserId) -> RepoResult<Vec<CelestialObject>>;
    fn count_objects(&self, user_id: UserId) -> RepoResult<usize>;
}

/// SQLite-backed galaxy object repository.
pub struct SqliteGalaxyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGalaxyRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GalaxyRepository for SqliteGalaxyRepository<'_> {
    fn insert_object(&self, object: &CelestialObject) -> RepoResult<CelestialId> {
        object.validate()?;

        self.conn.execute(
            "INSERT INTO galaxy_objects (
                uuid,
                user_id,
                type,
                position_x,
                position_y,
                position_z,
                color,
                size,
                task_uuid,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                object.id.to_string(),
                object.user_id,
                object.kind.as_str(),
                object.position.x,
                object.position.y,
                object.position.z,
                object.color.as_str(),
                object.size,
                object.task_id.map(|id| id.to_string()),
                object.created_at,
            ],
        )?;

        Ok(object.id)
    }

    fn list_objects(&self, user_id: UserId) -> RepoResult<Vec<CelestialObject>> {
        let mut stmt = self.conn.prepare(&format!(
            "{GALAXY_SELECT_SQL}
             WHERE user_id = ?1
             ORDER BY created_at ASC, rowid ASC;"
        ))?;

        let mut rows = stmt.query([user_id])?;
        let mut objects = Vec::new();
        while let Some(row) = rows.next()? {
            objects.push(parse_object_row(row)?);
        }

        Ok(objects)
    }

    fn count_objects(&self, user_id: UserId) -> RepoResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM galaxy_objects WHERE user_id = ?1;",
            [user_id],
            |row| row.get(0),
        )?;
        usize::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative galaxy object count {count}")))
    }
}

fn parse_object_row(row: &Row<'_>) -> RepoResult<CelestialObject> {
    let uuid_text: String = row.get("uuid")?;
    let id = parse_uuid_column(&uuid_text, "galaxy_objects.uuid")?;

    let type_text: String = row.get("type")?;
    let kind = CelestialKind::parse(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid object type `{type_text}` in galaxy_objects.type"))
    })?;

    let task_id = match row.get::<_, Option<String>>("task_uuid")? {
        Some(value) => Some(parse_uuid_column(&value, "galaxy_objects.task_uuid")?),
        None => None,
    };

    let object = CelestialObject {
        id,
        user_id: row.get("user_id")?,
        kind,
        position: Position {
            x: row.get("position_x")?,
            y: row.get("position_y")?,
            z: row.get("position_z")?,
        },
        color: row.get("color")?,
        size: row.get("size")?,
        task_id,
        created_at: row.get("created_at")?,
    };
    object.validate()?;
    Ok(object)
}
