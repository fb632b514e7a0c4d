use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints, VLine};

use rocket_apogee::cli::Args;
use rocket_apogee::io::charts::{flight_charts, Chart, Marker};
use rocket_apogee::io::report;
use rocket_apogee::sim;

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let args = Args::parse();
    let config = args.run_config().context("invalid configuration")?;
    let motor = config.load_motor().context("cannot load motor")?;
    let vehicle = config.build_vehicle(&motor);
    let result = sim::simulate(&vehicle, &motor, &config.simulation);

    report::write_report(&mut std::io::stdout().lock(), &motor, &vehicle, &result)?;

    let mut header = Vec::new();
    report::write_report(&mut header, &motor, &vehicle, &result)?;
    let app = FlightViz {
        charts: flight_charts(&motor, &result),
        summary: String::from_utf8_lossy(&header).into_owned(),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 1000.0]),
        ..Default::default()
    };
    eframe::run_native("Rocket Flight Simulator", options, Box::new(|_| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
}

struct FlightViz {
    charts: [Chart; 3],
    summary: String,
}

fn show_chart(ui: &mut egui::Ui, chart: &Chart, height: f32) {
    ui.label(&chart.title);
    let points: PlotPoints = chart.points.iter().copied().collect();
    Plot::new(chart.title.as_str())
        .height(height)
        .x_axis_label("Time (s)")
        .y_axis_label(chart.y_label.as_str())
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(chart.y_label.as_str(), points));
            for marker in &chart.markers {
                match marker {
                    Marker::Time { at, label } => plot_ui.vline(VLine::new(label.as_str(), *at)),
                    Marker::Level { at, label } => plot_ui.hline(HLine::new(label.as_str(), *at)),
                }
            }
        });
}

impl eframe::App for FlightViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("summary").show(ctx, |ui| {
            ui.monospace(&self.summary);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let height = ui.available_height() / 3.0 - 24.0;
            for chart in &self.charts {
                show_chart(ui, chart, height);
            }
        });
    }
}
