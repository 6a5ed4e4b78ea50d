use clap::{Parser, ValueEnum};
use flowlens::prelude::*;
use std::fs;
use std::time::Instant;

/// CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionCli {
    LeftToRight,
    TopToBottom,
}

/// Workflow graph validation, layout, and summary CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file (or a free-form transcript with --extract)
    workflow_path: String,

    /// Treat the input as free-form text and extract the first embedded workflow
    #[arg(short, long)]
    extract: bool,

    /// Rank direction of the layered layout
    #[arg(short, long, value_enum, default_value_t = DirectionCli::LeftToRight)]
    direction: DirectionCli,

    /// Print the positioned visual graph as JSON instead of the text report
    #[arg(short, long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    let input = fs::read_to_string(&cli.workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &cli.workflow_path, e
        ))
    });

    let workflow = if cli.extract {
        extract_workflow(&input)
            .unwrap_or_else(|| exit_with_error("No workflow found in the input text"))
    } else {
        Workflow::from_json(&input)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON: {}", e)))
    };

    let report = validate_detailed(&workflow);

    let mut graph = to_visual(&workflow);
    graph.annotate_warnings(&report);
    let options = LayoutOptions {
        direction: match cli.direction {
            DirectionCli::LeftToRight => Direction::LeftToRight,
            DirectionCli::TopToBottom => Direction::TopToBottom,
        },
        ..LayoutOptions::default()
    };
    let graph = apply_layout(graph, &options);

    if cli.json {
        let rendered = serde_json::to_string_pretty(&graph)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));
        println!("{}", rendered);
        return;
    }

    print_report(&workflow, &report);
    print_layout(&graph);
    print_summary(&summarize(&workflow));

    println!("\nAnalyzed in {:?}", total_start.elapsed());
}

fn print_report(workflow: &Workflow, report: &DetailedReport) {
    println!("--- Validation: \"{}\" ---", workflow.name);
    println!(
        "Valid: {}   Complexity: {}/10",
        report.valid, report.complexity_score
    );

    for error in &report.errors {
        println!("  error:   {}", error);
    }
    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }
    for (node, warnings) in &report.node_warnings {
        for warning in warnings {
            println!("  node \"{}\": {}", node, warning);
        }
    }
    if !report.credential_gaps.is_empty() {
        println!("Credential gaps: {}", report.credential_gaps.join(", "));
    }
}

fn print_layout(graph: &VisualGraph) {
    println!("\n--- Layout ---");
    for node in &graph.nodes {
        println!(
            "  {} [{}] at ({:.0}, {:.0})",
            node.label, node.category, node.position.x, node.position.y
        );
    }
    println!(
        "{} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );
}

fn print_summary(summary: &WorkflowSummary) {
    println!("\n--- {} ---", summary.title);
    for (index, step) in summary.steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
    if !summary.credential_requirements.is_empty() {
        println!(
            "Credentials needed: {}",
            summary.credential_requirements.join(", ")
        );
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
