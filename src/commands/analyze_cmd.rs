use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::report_format::format_reliability_report;
use crate::services::analysis_types::AnalysisOutput;
use crate::services::reliability_analysis::{AnalysisOverrides, analyze_from_yaml_file};

/// Returns `false` when the analysis or writing its output failed.
pub fn analyze_command(cmd: Commands) -> bool {
    let Commands::Analyze {
        input,
        output,
        trials,
        period_hours,
        seed,
        format,
    } = cmd
    else {
        return false;
    };

    let overrides = AnalysisOverrides {
        trials,
        period_hours,
        seed,
    };
    let analysis = match analyze_from_yaml_file(&input, overrides) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Failed to run reliability analysis: {e}");
            return false;
        }
    };

    let contents = match serialize_output(&analysis, format) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize analysis output: {e}");
            return false;
        }
    };

    if let Err(e) = std::fs::write(&output, contents) {
        eprintln!("Failed to write analysis output: {e}");
        return false;
    }

    println!("{}", format_reliability_report(&analysis.report));
    println!(
        "Analysis of {} trials written to {output}",
        analysis.report.trials
    );
    true
}

fn serialize_output(
    analysis: &AnalysisOutput,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(analysis)?,
        OutputFormat::Json => serde_json::to_string_pretty(analysis)?,
    })
}
