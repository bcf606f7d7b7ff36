use std::fs::File;
use std::io::stdout;
use std::io::BufWriter;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use log::info;

use dfarust_algebra::combine_with;
use dfarust_algebra::is_empty;
use dfarust_algebra::is_equivalent;
use dfarust_algebra::minimize;
use dfarust_algebra::AcceptRule;
use dfarust_automaton::Dfa;
use dfarust_io::io_dot::write_dot;
use dfarust_io::io_dot::DotConfig;
use dfarust_io::io_dot::RankDir;
use dfarust_io::io_json::read_json_file;
use dfarust_io::io_json::write_json;
use dfarust_io::io_json::write_json_file;
use dfarust_utilities::Timing;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Operation {
    Intersection,
    Union,
    Difference,
}

impl From<Operation> for AcceptRule {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Intersection => AcceptRule::Intersection,
            Operation::Union => AcceptRule::Union,
            Operation::Difference => AcceptRule::Difference,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Direction {
    #[value(name = "LR")]
    LeftRight,
    #[value(name = "TB")]
    TopBottom,
    #[value(name = "RL")]
    RightLeft,
    #[value(name = "BT")]
    BottomTop,
}

impl From<Direction> for RankDir {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::LeftRight => RankDir::LeftRight,
            Direction::TopBottom => RankDir::TopBottom,
            Direction::RightLeft => RankDir::RightLeft,
            Direction::BottomTop => RankDir::BottomTop,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dfatool", about = "A tool to inspect, minimize and combine deterministic finite automata")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print the time spent in every phase to stderr
    #[arg(long, global = true)]
    time: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print information about the automaton
    Info { filename: String },

    /// Run the automaton on the given words
    Run { filename: String, words: Vec<String> },

    /// Write the minimal automaton accepting the same language
    Minimize { filename: String, output: Option<String> },

    /// Write the product of two automata
    Combine {
        operation: Operation,
        left: String,
        right: String,
        output: Option<String>,
    },

    /// Decide whether two automata accept the same language
    Equivalent { left: String, right: String },

    /// Write the automaton in the Graphviz DOT format
    Dot {
        filename: String,
        output: Option<String>,

        #[arg(long, value_enum, default_value = "LR")]
        rankdir: Direction,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let mut timing = Timing::new();

    let exit_code = match cli.command {
        Commands::Info { filename } => {
            let dfa = read(&mut timing, &filename)?;

            println!("{dfa}");
            println!("Initial state: {}", dfa.initial_state().name());
            println!("Alphabet: {}", dfa.alphabet());
            println!("Accepting states: {}", dfa.accepting_states().count());
            println!("Empty language: {}", is_empty(&dfa));
            ExitCode::SUCCESS
        }
        Commands::Run { filename, words } => {
            let dfa = read(&mut timing, &filename)?;

            let timer = timing.start("run");
            for word in &words {
                let verdict = if dfa.accepts(word)? { "accepted" } else { "rejected" };
                println!("{word:?}: {verdict}");
            }
            timer.finish();
            ExitCode::SUCCESS
        }
        Commands::Minimize { filename, output } => {
            let dfa = read(&mut timing, &filename)?;

            let minimal = timing.measure("minimize", || minimize(&dfa));
            info!(
                "Reduced {} states to {} states",
                dfa.num_of_states(),
                minimal.num_of_states()
            );

            write(&mut timing, output, &minimal)?;
            ExitCode::SUCCESS
        }
        Commands::Combine {
            operation,
            left,
            right,
            output,
        } => {
            let left = read(&mut timing, &left)?;
            let right = read(&mut timing, &right)?;

            let product = timing.measure("combine", || combine_with(&left, &right, operation.into()))?;
            info!("The {} has {} states", AcceptRule::from(operation), product.num_of_states());

            write(&mut timing, output, &product)?;
            ExitCode::SUCCESS
        }
        Commands::Equivalent { left, right } => {
            let left = read(&mut timing, &left)?;
            let right = read(&mut timing, &right)?;

            if timing.measure("equivalence", || is_equivalent(&left, &right))? {
                println!("equivalent");
                ExitCode::SUCCESS
            } else {
                println!("not equivalent");
                ExitCode::FAILURE
            }
        }
        Commands::Dot {
            filename,
            output,
            rankdir,
        } => {
            let dfa = read(&mut timing, &filename)?;
            let config = DotConfig {
                rankdir: rankdir.into(),
                ..DotConfig::default()
            };

            if let Some(file) = output {
                let mut writer = BufWriter::new(File::create(file)?);
                write_dot(&mut writer, &dfa, &config)?;
                writeln!(writer)?;
                writer.flush()?;
            } else {
                let mut writer = stdout().lock();
                write_dot(&mut writer, &dfa, &config)?;
                writeln!(writer)?;
            }
            ExitCode::SUCCESS
        }
    };

    if cli.time {
        timing.print();
    }

    Ok(exit_code)
}

fn read(timing: &mut Timing, filename: &str) -> Result<Dfa> {
    let timer = timing.start("read");
    let dfa = read_json_file(filename)?;
    timer.finish();

    Ok(dfa)
}

/// Writes the automaton to the given file, or to stdout when no file is given.
fn write(timing: &mut Timing, output: Option<String>, dfa: &Dfa) -> Result<()> {
    let timer = timing.start("write");
    if let Some(file) = output {
        write_json_file(file, dfa)?;
    } else {
        write_json(stdout().lock(), dfa)?;
    }
    timer.finish();

    Ok(())
}
