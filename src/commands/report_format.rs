use crate::services::analysis_types::ReliabilityReport;

pub fn format_reliability_report(report: &ReliabilityReport) -> String {
    let seed = match report.seed {
        Some(value) => value.to_string(),
        None => "random".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Reliability Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Trials: {}", report.trials));
    lines.push(format!("Load levels: {}", report.load_levels));
    lines.push(format!("Generation units: {}", report.generation_units));
    lines.push(format!("Period: {:.0} h", report.period_hours));
    lines.push(format!("Seed: {seed}"));
    lines.push(String::new());
    lines.push(format!("PLOLE: {:.4} h", report.plole));
    lines.push(format!("PLOEE: {:.4} MWh", report.ploee));
    lines.push(format!(
        "Loss-of-load samples: {}",
        report.loss_of_load_samples
    ));
    lines.push(format!("Mean shortfall: {:.2} MW", report.mean_shortfall_mw));
    lines.push(format!("Minimum generation: {:.2} MW", report.min_generation_mw));
    lines.push(String::new());
    lines.push("Deficit percentiles:".to_string());
    lines.push("Percentile | MW".to_string());
    lines.push("-----------|---".to_string());
    lines.push(format_percentile_row("P50", report.deficit_percentiles.p50));
    lines.push(format_percentile_row("P85", report.deficit_percentiles.p85));
    lines.push(format_percentile_row("P100", report.deficit_percentiles.p100));

    lines.join("\n")
}

fn format_percentile_row(label: &str, value: f64) -> String {
    format!("{label} | {value:.2}")
}
