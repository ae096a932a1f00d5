use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use brine_rowmap::{
    generate, generate_json, ColumnCase, ColumnNameSpec, GenerationRequest, ObjectToWriterRequest,
    ReaderToObjectRequest,
};
use brine_rowmap_compiler::error::RowMapError;

#[derive(Parser)]
#[command(name = "browmap")]
#[command(about = "Generate JDBC ResultSet and PreparedStatement mapping code from Java fields", long_about = None)]
struct Cli {
    /// Log parsing and emission details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate `obj.setX(rs.getX(...))` statements
    RsToObj {
        /// ResultSet variable name
        #[arg(short, long, default_value = "rs")]
        reader: String,

        /// Target object variable name
        #[arg(short = 'j', long, default_value = "obj")]
        object: String,

        #[command(flatten)]
        naming: NamingArgs,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Generate `ps.setX(i, obj.getX())` statements
    ObjToPs {
        /// PreparedStatement variable name
        #[arg(short, long, default_value = "ps")]
        writer: String,

        /// Source object variable name
        #[arg(short = 'j', long, default_value = "obj")]
        object: String,

        /// Use a running `int` counter instead of literal parameter positions
        #[arg(short, long)]
        counter: Option<String>,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Run a JSON generation request and print the JSON response
    Request {
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct NamingArgs {
    /// JSON file holding a column naming policy
    #[arg(long)]
    naming: Option<PathBuf>,

    /// Derive column names from field names
    #[arg(long)]
    column_names: bool,

    /// Split field names into words joined by this separator
    #[arg(long)]
    separator: Option<String>,

    /// Case applied to generated column names
    #[arg(long, value_enum)]
    case: Option<CaseArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseArg {
    Upper,
    Lower,
    Unchanged,
}

impl From<CaseArg> for ColumnCase {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Upper     => ColumnCase::Upper,
            CaseArg::Lower     => ColumnCase::Lower,
            CaseArg::Unchanged => ColumnCase::Unchanged,
        }
    }
}

impl NamingArgs {
    /// Loads the policy file, then applies any flags on top of it.
    fn resolve(&self) -> Result<ColumnNameSpec, RowMapError> {
        let mut spec = match &self.naming {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => ColumnNameSpec::default(),
        };
        if self.column_names {
            spec.generate_column_names = true;
        }
        if let Some(separator) = &self.separator {
            spec.use_separator = true;
            spec.separator = separator.clone();
        }
        if let Some(case) = self.case {
            spec.column_case = case.into();
        }
        debug!(?spec, "resolved column naming policy");
        Ok(spec)
    }
}

fn read_input(input: Option<&Path>) -> Result<String, RowMapError> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(output: Option<&Path>, code: &str) -> Result<(), RowMapError> {
    match output {
        Some(path) => {
            fs::write(path, code)?;
            eprintln!("Generated code written to {}", path.display());
        }
        None => println!("{}", code),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), RowMapError> {
    match cli.command {
        Commands::RsToObj { reader, object, naming, io } => {
            let request = GenerationRequest::ReaderToObject {
                request: ReaderToObjectRequest {
                    reader_id:   reader,
                    object_id:   object,
                    fields_text: read_input(io.input.as_deref())?,
                },
                naming: Some(naming.resolve()?),
            };
            write_output(io.output.as_deref(), &generate(&request)?)
        }

        Commands::ObjToPs { writer, object, counter, io } => {
            let request = GenerationRequest::ObjectToWriter(ObjectToWriterRequest {
                writer_id:   writer,
                object_id:   object,
                fields_text: read_input(io.input.as_deref())?,
                counter_id:  counter,
            });
            write_output(io.output.as_deref(), &generate(&request)?)
        }

        Commands::Request { io } => {
            let response = generate_json(&read_input(io.input.as_deref())?)?;
            write_output(io.output.as_deref(), &response)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
