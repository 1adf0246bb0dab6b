use eframe::egui;

mod app;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([920.0, 680.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Marchzins-Bonus Tool",
        options,
        Box::new(|cc| Box::new(app::App::new(cc))),
    )
}
