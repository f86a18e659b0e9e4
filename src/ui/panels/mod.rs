// ArgMark - ui/panels/mod.rs

pub mod about;
pub mod annotate;
pub mod annotations;
pub mod compare;
pub mod options;
pub mod ratings;
pub mod structure;
