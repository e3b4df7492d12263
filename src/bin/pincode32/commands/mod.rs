pub mod config;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod recover;
pub mod text;
