#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = stagehand_ui::run() {
        eprintln!("Stagehand failed: {err}");
        std::process::exit(1);
    }
}
