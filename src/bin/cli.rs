use std::env;
use std::error::Error;
use std::process;

use judging_schedule::{
    Config, ConfigFile, SourceConfig,
    distribute::distribute,
    grid::write_grid_to_csv,
    load_config,
    source::{CsvSource, RowSource, SheetsSource, SourceError, load_projects},
    timeline::SlotTimeline,
};

fn print_usage() {
    println!(
        "Usage: cli [config.json]\n\nGenerates a judging schedule CSV from the configured project source.\nWithout an argument the built-in defaults apply: 4 judging groups,\n10 minute sessions, 5 minute breaks, 13:00-16:00, projects read from\nprojects.csv, output written to judging_assignments.csv."
    );
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match args.as_slice() {
        [] => ConfigFile::default().into_config(),
        [flag] if flag == "--help" || flag == "-h" => {
            print_usage();
            return;
        }
        [path] => load_config(path),
        _ => {
            print_usage();
            process::exit(2);
        }
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let source: Box<dyn RowSource> = match &config.source {
        SourceConfig::Sheets {
            sheet_id,
            credentials_path,
        } => {
            println!("Fetching projects from sheet {sheet_id}...");
            Box::new(SheetsSource::new(sheet_id.clone(), credentials_path.clone()))
        }
        SourceConfig::Csv { path } => {
            println!("Reading projects from {}...", path.display());
            Box::new(CsvSource::new(path.clone()))
        }
    };

    let report = match load_projects(source.as_ref(), config.name_column, config.link_column) {
        // Deliberate early exit: nothing to schedule, no output file.
        Err(SourceError::Empty) => {
            println!("No data found in the source.");
            return Ok(());
        }
        other => other?,
    };

    for skip in &report.skipped {
        println!("{skip}");
    }
    println!(
        "Found a total of {} projects to distribute.",
        report.projects.len()
    );

    println!(
        "Distributing projects into {} judging groups...",
        config.judging_groups
    );
    let groups = distribute(report.projects, config.judging_groups);

    let max_sessions = groups.iter().map(Vec::len).max().unwrap_or(0);
    println!("Schedule will have a maximum of {max_sessions} time slots.");

    let timeline = SlotTimeline::new(
        config.start_time,
        config.end_time,
        config.session,
        config.break_between,
    );

    println!(
        "Writing master schedule to {}...",
        config.output_path.display()
    );
    let summary = write_grid_to_csv(&config.output_path, &groups, &timeline)?;

    if summary.truncated() {
        println!(
            "WARNING: Reached end time {}. Stopping schedule. Not all projects may be scheduled.",
            config.end_time.format("%H:%M")
        );
    }
    println!(
        "Finished writing master schedule ({}).",
        summary.to_cli_summary()
    );
    Ok(())
}
