use clap::{Args, Parser, Subcommand};
use eggmodel::*;
use log::{error, info};
use std::{
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

/// Egg.js Sequelize model generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate model files from parsed CREATE TABLE statements
    Generate(GenerateArgs),
    /// Print the generated models instead of writing them
    Render(RenderArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Path to the parser output (JSON). If empty, stdin will be used.
    input: Option<PathBuf>,
    /// Spaces per indentation level
    #[arg(long, default_value_t = DEFAULT_INDENT_WIDTH)]
    indent: usize,
    /// Extension of the generated files
    #[arg(long, default_value = DEFAULT_FILE_EXTENSION)]
    extension: String,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Directory the model files are written to
    #[arg(short, long, default_value = "./model")]
    output_dir: PathBuf,
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,
}

impl InputArgs {
    fn read(&self) -> Result<String, Error> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            }),
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|source| Error::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(buffer)
            }
        }
    }

    fn generator(&self) -> Generator {
        Generator::new(Options {
            indent_width: self.indent,
            file_extension: self.extension.clone(),
            ..Default::default()
        })
    }
}

/// Chunks are handled in order. A failing chunk writes nothing, and stops the run.
fn generate(args: GenerateArgs) -> Result<(), Error> {
    let input = args.input.read()?;
    let generator = args.input.generator();
    let mut count = 0;
    for chunk in parse_chunks(&input) {
        let files = generator.generate_statements(&chunk?)?;
        count += write_models(&args.output_dir, &files)?.len();
    }
    info!("{count} model(s) written to {}", args.output_dir.display());
    Ok(())
}

fn render(args: RenderArgs) -> Result<(), Error> {
    let input = args.input.read()?;
    let generator = args.input.generator();
    for chunk in parse_chunks(&input) {
        for file in generator.generate_statements(&chunk?)? {
            println!("// {}", file.file_name);
            println!("{}", file.content);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Cli::parse();
    let result = match args.command {
        Command::Generate(args) => generate(args),
        Command::Render(args) => render(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
