use std::io;
use std::{fs, io::Read};

use ariadne::{Label, Report, ReportKind, Source};
use chumsky::Parser;
use kansetsu::analysis::analyze;
use kansetsu::error::ReportError;
use kansetsu::graph::Graph;
use kansetsu::parser::parser;
use kansetsu::report::{Reporter, TextReporter};

fn main() -> Result<(), io::Error> {
    let mut args = std::env::args();

    // Read the contents of a specified file or from stdio.
    let src = if args.len() >= 2 {
        let path = args.nth(1).unwrap();
        fs::read_to_string(path)?
    } else {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        s
    };

    let def = match parser().parse(src.as_str()) {
        Ok(def) => def,
        Err(errors) => {
            for e in errors {
                Report::build(ReportKind::Error, (), e.span().start)
                    .with_message("cannot parse the graph description")
                    .with_label(Label::new(e.span()).with_message(e.to_string()))
                    .finish()
                    .eprint(Source::from(src.as_str()))?;
            }
            std::process::exit(1);
        }
    };

    let graph = match Graph::from_def(&def) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = io::stdout();
    TextReporter::default()
        .report(&analyze(&graph), &mut stdout)
        .map_err(|ReportError::IoFailure(e)| e)
}
