//! Sample task file generator
//!
//! Produces a JSON task file with plausible content for exercising the viewer
//! without a backend. Output is deterministic for a given seed.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::path::Path;

use rtasks::{full_text_of, save_tasks, Task, COLOR_VALUES, PRIORITY_VALUES, STATUS_VALUES};

// Title pools - (activity, subject)
const ACTIVITIES: &[&str] = &[
    "Review", "Write", "Fix", "Update", "Plan", "Schedule", "Clean", "Organize",
    "Prepare", "Research", "Test", "Draft",
];

const SUBJECTS: &[&str] = &[
    "the quarterly report", "meeting notes", "the garden beds", "grocery list",
    "the release checklist", "tax documents", "the garage shelves", "vacation itinerary",
    "the onboarding guide", "bike maintenance", "the backup scripts", "birthday plans",
];

const DESCRIPTION_NOTES: &[&str] = &[
    "Needs to be done before Friday.",
    "Waiting on input from Sam.",
    "Half finished from last week.",
    "Low effort, good warm-up task.",
    "Check the shared folder for context.",
    "Remember to confirm the date first.",
];

struct Config {
    num_tasks: usize,
    seed: u64,
    output_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_tasks: 20,
            seed: 42,
            output_file: None,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-num" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-num requires an argument");
                }
                config.num_tasks = args[i].parse()?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Sample Task File Generator");
    println!("Usage: tasks-gen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -num <N>               Number of tasks to generate (default: 20)");
    println!("  -seed <N>              RNG seed for reproducible output (default: 42)");
    println!("  -out <FILE>            Output file path (default: tasks.json)");
    println!("  -h, -help, --help      Show this help message");
}

fn generate_tasks(config: &Config) -> Vec<Task> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut tasks = Vec::with_capacity(config.num_tasks);

    for id in 1..=config.num_tasks {
        let activity = ACTIVITIES[rng.gen_range(0..ACTIVITIES.len())];
        let subject = SUBJECTS[rng.gen_range(0..SUBJECTS.len())];
        let title = format!("{activity} {subject}");

        // Roughly a third of tasks carry no description
        let description = if rng.gen_bool(0.65) {
            Some(DESCRIPTION_NOTES[rng.gen_range(0..DESCRIPTION_NOTES.len())].to_string())
        } else {
            None
        };

        let full_text = full_text_of(&title, description.as_deref());

        tasks.push(Task {
            id: id as i64,
            title,
            description,
            status: STATUS_VALUES[rng.gen_range(0..STATUS_VALUES.len())].to_string(),
            priority: PRIORITY_VALUES[rng.gen_range(0..PRIORITY_VALUES.len())].to_string(),
            color: COLOR_VALUES[rng.gen_range(0..COLOR_VALUES.len())].to_string(),
            full_text,
        });
    }

    tasks
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let output_path = config
        .output_file
        .clone()
        .unwrap_or_else(|| "tasks.json".to_string());

    let tasks = generate_tasks(&config);
    save_tasks(Path::new(&output_path), &tasks)?;

    println!("{} tasks written to: {}", tasks.len(), output_path);

    Ok(())
}
