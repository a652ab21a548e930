//! tg-digest: scan Telegram HTML chat exports, extract topic messages and
//! validate daily digest reports, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
