// src/lib.rs
//
// A chain of block rows that pulse one row per tap.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod models;
pub mod render;
pub mod views;
