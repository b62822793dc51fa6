//! Shared test helpers.

#![allow(dead_code)]

use chefmenu::menu::{Course, Draft, MenuItem, MenuStateMachine};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn draft(name: &str, description: &str, course: Course, price: &str) -> Draft {
    Draft::new(name, description, course, price)
}

/// Adds the Soup/Steak pair used throughout the examples.
pub fn soup_and_steak() -> (MenuStateMachine, MenuItem, MenuItem) {
    let mut machine = MenuStateMachine::new();
    let soup = machine
        .add_item(draft("Soup", "Hot", Course::Starters, "5.50"))
        .expect("soup is valid");
    let steak = machine
        .add_item(draft("Steak", "Grilled", Course::Mains, "20"))
        .expect("steak is valid");
    (machine, soup, steak)
}

/// Writes `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
