#![no_std]

pub mod access;
pub mod ledger;
