//! Room lifecycle bookkeeping and pure vote tallying
//!
//! Deliberately simple map mutations and counting — the request pipeline in
//! `werewolf-server` is where the interesting contracts live.

pub mod rooms;
pub mod vote;

pub use rooms::{Member, Room, RoomStore};
