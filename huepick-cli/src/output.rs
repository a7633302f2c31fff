/// Output formatting: ranked terminal table, JSON, palette export.
use std::path::Path;

use huepick_core::{ColorId, ColorStatus, PickSession, SessionAnalytics};
use serde::Serialize;

use crate::render::{hex, hsl_to_rgb, swatch};

#[derive(Serialize)]
struct JsonColor {
    rank: usize,
    id: ColorId,
    hex: String,
    hue: f64,
    saturation: f64,
    lightness: f64,
    rating: f64,
    comparisons: usize,
    wins: usize,
    losses: usize,
    status: &'static str,
}

#[derive(Serialize)]
struct JsonOutput {
    colors: Vec<JsonColor>,
    rounds: usize,
    picks: usize,
    passes: usize,
    average_latency_secs: f64,
}

fn status_label(status: ColorStatus) -> &'static str {
    match status {
        ColorStatus::Active => "active",
        ColorStatus::Favorite => "favorite",
        ColorStatus::Eliminated => "eliminated",
    }
}

/// Print the ranking as a formatted terminal table.
pub fn print_table(session: &PickSession, top: usize, ascii: bool) {
    let ranked = session.top_colors(top);

    // Find the widest win-loss record for padding
    let record_width = ranked
        .iter()
        .map(|color| format!("{}-{}", color.wins, color.losses).len())
        .max()
        .unwrap_or(3)
        .max(3); // at least "W-L"

    println!(
        "  # | Swatch | Hex     |  Hue |  Rating | {:<record_width$} | Rounds",
        "W-L"
    );
    println!(
        "----|--------|---------|------|---------|-{}-|-------",
        "-".repeat(record_width)
    );

    for (i, color) in ranked.iter().enumerate() {
        let (r, g, b) = hsl_to_rgb(color.hue, color.saturation, color.lightness);
        let record = format!("{}-{}", color.wins, color.losses);
        let marker = match color.status {
            ColorStatus::Favorite => "  *",
            ColorStatus::Eliminated => "  x",
            ColorStatus::Active => "",
        };
        println!(
            " {:>2} | {} | {} | {:>4.0} | {:>7.1} | {:<record_width$} | {:>6}{marker}",
            i + 1,
            swatch(r, g, b, ascii),
            hex(r, g, b),
            color.hue,
            color.rating,
            record,
            color.comparisons,
        );
    }

    let favorites = session.favorites().len();
    let eliminated = session.eliminated().len();
    if favorites > 0 || eliminated > 0 {
        println!("\n  * favorite   x eliminated");
    }
}

/// One summary line with decision counts and pace.
pub fn print_summary(analytics: &SessionAnalytics) {
    println!(
        "\n{} rounds this session ({} picks, {} passes), {:.1}s average decision time",
        analytics.session_comparisons,
        analytics.picks,
        analytics.passes,
        analytics.average_latency(),
    );
}

/// Print the ranking as JSON.
pub fn print_json(session: &PickSession, top: usize) {
    let colors: Vec<JsonColor> = session
        .top_colors(top)
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let (r, g, b) = hsl_to_rgb(color.hue, color.saturation, color.lightness);
            JsonColor {
                rank: i + 1,
                id: color.id,
                hex: hex(r, g, b),
                hue: color.hue,
                saturation: color.saturation,
                lightness: color.lightness,
                rating: color.rating,
                comparisons: color.comparisons,
                wins: color.wins,
                losses: color.losses,
                status: status_label(color.status),
            }
        })
        .collect();

    let analytics = session.analytics();
    let output = JsonOutput {
        colors,
        rounds: analytics.session_comparisons,
        picks: analytics.picks,
        passes: analytics.passes,
        average_latency_secs: analytics.average_latency(),
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

/// Write the top colors as one hex code per line.
pub fn export_palette(session: &PickSession, top: usize, path: &Path) -> std::io::Result<()> {
    let mut lines = String::new();
    for color in session.top_colors(top) {
        let (r, g, b) = hsl_to_rgb(color.hue, color.saturation, color.lightness);
        lines.push_str(&hex(r, g, b));
        lines.push('\n');
    }
    std::fs::write(path, lines)
}
