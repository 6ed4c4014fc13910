//! Trust establishment: local JWT verification and delegated remote
//! validation, behind a common `TokenValidator` capability.

pub mod claims;
pub mod jwt;
pub mod local;
pub mod remote;
pub mod validator;
