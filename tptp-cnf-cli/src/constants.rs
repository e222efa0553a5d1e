use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
    ┌──────────────────────────────────┐
    │  cnf( label, role, p | ~ q ).    │
    ├──────────────────────────────────┤
    │  ▀█▀ █▀█ ▀█▀ █▀█   █▀▀ █▄ █ █▀▀  │
    │   █  █▀▀  █  █▀▀   █▄▄ █ ▀█ █▀   │
    └──────────────────────────────────┘
"#;

/// Problem domains of a TPTP distribution whose problems are not in clause normal form.
pub(crate) const NON_CNF_DOMAINS: [&str; 7] = ["CSR", "HWV", "KRS", "PLA", "SWV", "SYN", "SYO"];

pub(crate) const PROBLEMS_DIR: &str = "Problems";
pub(crate) const PROBLEM_EXTENSION: &str = "p";

pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_CLAUSE: StyleId = 2;
pub(crate) const STYLE_PROBLEM: StyleId = 3;
