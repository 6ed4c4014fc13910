//! Infrastructure layer - database connectivity.

pub mod db;
