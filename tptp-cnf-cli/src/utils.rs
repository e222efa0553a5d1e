use crate::{
    constants::*,
    terminal::{Style, Stylus},
};
use anyhow::{Context, Error};
use itertools::Itertools;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tptp_cnf::{document::Resolver, syntax::SymbolTable, trace::PROBLEM};

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new();
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_CLAUSE, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_PROBLEM,
            Style::new().foreground(252).attribute(term::Attr::Bold),
        );
    }

    stylus
}

/// Returns the sorted paths of the CNF problems of the TPTP distribution at `tptp`, that is
/// every `Problems/<domain>/<name>-<version>.p` outside the non-CNF domains.
pub(crate) fn collect_problems(tptp: &Path) -> Result<Vec<PathBuf>, Error> {
    let problems = tptp.join(PROBLEMS_DIR);
    let domains = fs::read_dir(&problems)
        .with_context(|| format!("failed to list the problems in `{}`", problems.display()))?;

    let mut result = Vec::new();
    for domain in domains {
        let domain = domain?.path();
        let cnf_domain = domain
            .file_name()
            .and_then(|d| d.to_str())
            .map(|d| !NON_CNF_DOMAINS.contains(&d))
            .unwrap_or(false);
        if !domain.is_dir() || !cnf_domain {
            continue;
        }

        let entries = fs::read_dir(&domain)
            .with_context(|| format!("failed to list the problems in `{}`", domain.display()))?;
        for entry in entries {
            let path = entry?.path();
            if is_problem_file(&path) {
                result.push(path);
            }
        }
    }

    Ok(result.into_iter().sorted())
}

fn is_problem_file(path: &Path) -> bool {
    let extension = path.extension().and_then(|e| e.to_str());
    let stem = path.file_stem().and_then(|s| s.to_str());
    match (extension, stem) {
        (Some(PROBLEM_EXTENSION), Some(stem)) => stem.contains('-') && path.is_file(),
        _ => false,
    }
}

/// Returns the name of a problem file without its directory and extension.
pub(crate) fn problem_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Loads the symbol table from `vocabulary` if given or creates a fresh one.
pub(crate) fn load_symbols(
    vocabulary: Option<&Path>,
    extendable: bool,
) -> Result<SymbolTable, Error> {
    if let Some(vocabulary) = vocabulary {
        SymbolTable::load(vocabulary, extendable).with_context(|| {
            format!("failed to load the vocabulary `{}`", vocabulary.display())
        })
    } else {
        Ok(SymbolTable::new(extendable))
    }
}

pub(crate) fn save_symbols(symbols: &SymbolTable, path: &Path) -> Result<(), Error> {
    symbols
        .save(path)
        .with_context(|| format!("failed to save the vocabulary `{}`", path.display()))
}

/// Parses `problems` in order with one shared symbol table and writes the vocabulary to
/// `output` after every problem. `done` is called with the name of each parsed problem.
pub(crate) fn learn<F>(
    problems: &[PathBuf],
    resolver: &Resolver,
    symbols: &mut SymbolTable,
    output: &Path,
    mut done: F,
) -> Result<(), Error>
where
    F: FnMut(&str),
{
    for path in problems {
        let problem = problem_name(path);
        resolver
            .parse_file(path, symbols)
            .with_context(|| format!("failed to parse problem `{}`", problem))?;
        save_symbols(symbols, output)?;

        info!(event = PROBLEM, problem = problem.as_str());
        done(&problem);
    }
    Ok(())
}
