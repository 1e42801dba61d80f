use sea_orm::DbErr;

/// Parses a Discord snowflake stored as a string column.
///
/// # Arguments
/// - `column` - Column name, used in the error message
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(u64)` - Parsed id
/// - `Err(DbErr::Custom)` - The stored value is not a valid u64
pub fn parse_snowflake(column: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {} '{}': {}", column, value, e)))
}

/// Parses an optional snowflake column, keeping `None` as `None`.
pub fn parse_optional_snowflake(column: &str, value: Option<&str>) -> Result<Option<u64>, DbErr> {
    value.map(|v| parse_snowflake(column, v)).transpose()
}
