use anyhow::{anyhow, bail, Context, Result};
use clap::{arg, ArgMatches, Command};
use std::io::{self, BufRead, Read, Write};
use std::{fs, path::Path};
use tracing_subscriber::{fmt, EnvFilter};
use u_knapsack::demo::{demo_scenario, random_scenario, reference_checks};
use u_knapsack::input::{parse_capacity, parse_count, InputLimits, ItemCollector};
use u_knapsack::knapsack::ratio_order;
use u_knapsack::report::Report;
use u_knapsack::scenario::Scenario;

fn cli() -> Command {
    Command::new("relief")
        .about("Allocates transport capacity to relief items by urgency per kg")
        .arg_required_else_help(true)
        .subcommand(Command::new("demo").about("Solves the built-in six item demo"))
        .subcommand(Command::new("check").about("Runs the reference checks"))
        .subcommand(
            Command::new("solve")
                .about("Solves a scenario")
                .arg(
                    arg!(<SCENARIO> "Scenario json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--json "Print the solution as json")),
        )
        .subcommand(
            Command::new("random")
                .about("Solves a seeded random scenario")
                .arg(arg!(<N> "Number of items").value_parser(clap::value_parser!(usize)))
                .arg(arg!(--seed [SEED] "Random seed").value_parser(clap::value_parser!(u64)))
                .arg(arg!(--json "Print the solution as json")),
        )
        .subcommand(
            Command::new("interactive")
                .about("Prompts for capacity and items")
                .arg(
                    arg!(--"max-urgency" [MAX] "Largest accepted urgency score")
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn main() {
    init_logging();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("demo", _)) => run_demo(),
        Some(("check", _)) => run_checks(),
        Some(("solve", sub_m)) => run_solve(sub_m),
        Some(("random", sub_m)) => run_random(sub_m),
        Some(("interactive", sub_m)) => run_interactive(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_demo() -> Result<()> {
    let scenario = demo_scenario()?;
    println!("Transport Capacity: {} kg", scenario.capacity);
    println!("Available Items: {}", scenario.items.len());
    println!();
    println!("Items (sorted by ratio):");
    for index in ratio_order(&scenario.items) {
        let item = &scenario.items[index];
        println!("  - {}: Ratio = {:.2}", item.name(), item.ratio());
    }
    println!();
    render(&scenario, false)
}

fn run_checks() -> Result<()> {
    let mut failures = 0usize;
    for (i, check) in reference_checks()?.iter().enumerate() {
        let outcome = check.run();
        println!("Test {}: {}", i + 1, outcome.name);
        println!("  {outcome}");
        println!();
        if !outcome.passed() {
            failures += 1;
        }
    }
    if failures > 0 {
        bail!("{failures} reference check(s) failed");
    }
    Ok(())
}

fn run_solve(sub_m: &ArgMatches) -> Result<()> {
    let source = sub_m
        .get_one::<String>("SCENARIO")
        .ok_or_else(|| anyhow!("missing SCENARIO"))?;
    let scenario = load_scenario(source)?;
    render(&scenario, sub_m.get_flag("json"))
}

fn run_random(sub_m: &ArgMatches) -> Result<()> {
    let n = *sub_m
        .get_one::<usize>("N")
        .ok_or_else(|| anyhow!("missing N"))?;
    let seed = sub_m.get_one::<u64>("seed").copied().unwrap_or(42);
    let scenario = random_scenario(n, seed);
    render(&scenario, sub_m.get_flag("json"))
}

fn load_scenario(source: &str) -> Result<Scenario> {
    let text = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read scenario from stdin")?;
        buf
    } else if Path::new(source).is_file() {
        fs::read_to_string(source).with_context(|| format!("Failed to read file {source}"))?
    } else {
        source.to_owned()
    };
    serde_json::from_str(&text).context("Failed to parse scenario json")
}

fn render(scenario: &Scenario, json: bool) -> Result<()> {
    let solution = scenario.solve()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print!("{}", Report::new(&solution, &scenario.items));
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Operation cancelled: input ended");
    }
    Ok(line.trim().to_owned())
}

fn run_interactive(sub_m: &ArgMatches) -> Result<()> {
    let mut limits = InputLimits::default();
    if let Some(&max) = sub_m.get_one::<f64>("max-urgency") {
        limits = limits.with_max_value(max);
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", "=".repeat(50));
    println!("DISASTER RELIEF RESOURCE ALLOCATION SYSTEM");
    println!("{}", "=".repeat(50));
    println!();

    let capacity = parse_capacity(
        &prompt(&mut input, "Enter total transport capacity (kg): ")?,
        &limits,
    )?;
    let count = parse_count(&prompt(&mut input, "Enter number of relief items: ")?)?;

    if limits.is_large_batch(count) {
        let answer = prompt(&mut input, &format!("{count} items is a lot. Continue? (y/n): "))?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let mut collector = ItemCollector::new(limits.clone())?;
    for i in 0..count {
        println!();
        println!("Item #{}", i + 1);
        let name = prompt(&mut input, "  Name: ")?;
        collector.check_name(&name)?;
        let value = prompt(
            &mut input,
            &format!("  Urgency Score (1-{}): ", limits.max_value),
        )?;
        let weight = prompt(&mut input, "  Weight (kg): ")?;
        if let Some(dup) = collector.push_raw(&name, &value, &weight)? {
            println!("  Warning: {dup}");
        }
    }

    println!();
    let scenario = Scenario::new(capacity, collector.finish().items);
    render(&scenario, false)
}
