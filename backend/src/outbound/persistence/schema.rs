//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Profile records, one row per person.
    ///
    /// `id` is a `SERIAL` primary key assigned by the database on insert.
    users (id) {
        /// Primary key assigned at creation.
        id -> Int4,
        /// Person's name, unconstrained text.
        name -> Varchar,
        /// Birth date.
        birthdate -> Date,
        /// Free-form gender text.
        gender -> Varchar,
        /// Free-form country text.
        country -> Varchar,
        /// Self-reported happiness level, unconstrained integer.
        happiness_level -> Int4,
        /// Row creation timestamp.
        created_at -> Timestamptz,
    }
}
