#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use rust_todo_app::app::TodoApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 760.0])
            .with_resizable(false)
            .with_title("Rust Todo"),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Todo",
        options,
        Box::new(|cc| Ok(Box::new(TodoApp::new(cc)))),
    )
}
