//! Types and pure logic shared by the backend service and the browser app.

pub mod domain;
pub mod shared;
pub mod system;
