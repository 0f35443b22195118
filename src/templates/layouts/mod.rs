pub mod desktop;
pub mod plain;
