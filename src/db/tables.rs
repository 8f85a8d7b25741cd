use redb::TableDefinition;

/// Users table: lowercase username -> UserRecord (JSON-serialized)
pub const USERS: TableDefinition<&str, &[u8]> = TableDefinition::new("users");
