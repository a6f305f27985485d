#![allow(dead_code)]

#[cfg(test)]
#[macro_use]
extern crate lazy_static;

pub mod cipher;
pub mod config;
pub mod context;
pub mod error;
pub mod key_derivation;
pub mod option;
pub mod protection_profile;
pub mod replay_detector;
pub mod session;
pub mod stream;
