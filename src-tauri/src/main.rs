// Portfolio - Desktop Entry Point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    portfolio_lib::run()
}
