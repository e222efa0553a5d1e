use crate::terminal::Stylus;
use crate::{constants::*, utils::*};
use anyhow::{Context, Error};
use std::{fs, path::PathBuf};
use structopt::StructOpt;
use tptp_cnf::{
    document::Resolver,
    printer::Printer,
    syntax::Namespace,
    trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE},
};

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(
        name = "learn",
        about = "Learn the vocabulary of the CNF problems of a TPTP distribution"
    )]
    Learn {
        #[structopt(
            short = "t",
            long = "tptp",
            parse(from_os_str),
            help = "Path to the root of the TPTP distribution"
        )]
        tptp: PathBuf,
        #[structopt(
            short = "o",
            long = "output",
            parse(from_os_str),
            help = "Path to the vocabulary file to write after every problem"
        )]
        output: PathBuf,
        #[structopt(
            long = "vocabulary",
            parse(from_os_str),
            help = "Path to a vocabulary file to start from"
        )]
        vocabulary: Option<PathBuf>,
        #[structopt(
            long = "extendable",
            help = "Allow new symbols when starting from a vocabulary file."
        )]
        extendable: bool,
    },
    #[structopt(name = "print", about = "Print the clauses of a problem in normalized form")]
    Print {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input problem file"
        )]
        input: PathBuf,
        #[structopt(
            short = "b",
            long = "base",
            parse(from_os_str),
            help = "Directory of included files [default: the current directory]"
        )]
        base: Option<PathBuf>,
        #[structopt(
            long = "vocabulary",
            parse(from_os_str),
            help = "Path to a vocabulary file to start from"
        )]
        vocabulary: Option<PathBuf>,
        #[structopt(long = "strict", help = "Reject symbols missing from the vocabulary.")]
        strict: bool,
        #[structopt(
            short = "s",
            long = "save",
            parse(from_os_str),
            help = "Path to save the resulting vocabulary"
        )]
        save: Option<PathBuf>,
    },
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Learn {
                tptp,
                output,
                vocabulary,
                extendable,
            } => {
                // a fresh vocabulary has nothing to learn from unless it grows
                let extendable = extendable || vocabulary.is_none();
                let mut symbols = load_symbols(vocabulary.as_deref(), extendable)?;
                let resolver = Resolver::new(&tptp);
                let problems = collect_problems(&tptp)?;

                stylus.set(STYLE_INFO);
                println!("Learning the vocabulary of {} problems:", problems.len());
                println!();

                learn(&problems, &resolver, &mut symbols, &output, |problem| {
                    stylus.set(STYLE_PROBLEM);
                    print!("{}", problem);
                    stylus.set(STYLE_INFO);
                    println!(" done");
                })?;

                println!();
                println!(
                    "{} variables, {} functions and {} predicates were saved to `{}`.",
                    symbols.len(Namespace::Variables),
                    symbols.len(Namespace::Functions),
                    symbols.len(Namespace::Predicates),
                    output.display()
                );
                Ok(())
            }
            ProcessCommand::Print {
                input,
                base,
                vocabulary,
                strict,
                save,
            } => {
                let mut symbols = load_symbols(vocabulary.as_deref(), !strict)?;
                let resolver = Resolver::new(base.unwrap_or_else(|| PathBuf::from(".")));
                let clauses = resolver
                    .parse_file(&input, &mut symbols)
                    .with_context(|| format!("failed to parse `{}`", input.display()))?;

                stylus.set(STYLE_INFO);
                println!("{} clauses in `{}`:", clauses.len(), input.display());
                println!();

                let printer = Printer::new(&symbols);
                stylus.set(STYLE_CLAUSE);
                for clause in &clauses {
                    println!("{}", printer.print_clause(clause)?);
                }
                println!();

                if let Some(save) = save {
                    save_symbols(&symbols, &save)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "tptp-cnf",
    about = "A tool for learning the vocabulary of TPTP CNF problems"
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub(super) struct Command {
    #[structopt(subcommand)]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);

        if !self.no_color {
            stylus.set(STYLE_LOGO);
            println!("{}", ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = self.log {
            let log = if log.as_os_str().is_empty() {
                PathBuf::from(DEFAULT_JSON_LOG_FILE)
            } else {
                log
            };
            let file = fs::File::create(&log)
                .with_context(|| format!("cannot create the log file `{}`", log.display()))?;
            let logger = JsonLogger::new(file);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}
