/*!
Graph description EBNF
----------------------

```ebnf
program = SP, { path, SP } ;
path = identifier, { SP, "--", SP, identifier } ;
identifier = identifier_start, { identifier_continue } ;
identifier_start = "_" | letter ;
identifier_continue = "_" | letter | digit ;
letter = ? a-zA-Z ? ;
digit = ? 0-9 ? ;
comment = "#", { ? any - newline ? } ;
whitespace = ? whitespace ? | comment ;
SP = { whitespace } ;
```

A path of a single identifier declares an isolated node; a longer chain declares the edges along
the path. Statements need no terminator, a path simply ends at the last identifier that is not
followed by `--`.
*/

use chumsky::prelude::*;
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    pub nodes: SmallVec<[String; 4]>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDef {
    paths: Vec<PathExpr>,
}

impl GraphDef {
    pub fn paths(&self) -> impl ExactSizeIterator<Item = &PathExpr> {
        self.paths.iter()
    }
}

pub fn parser() -> impl Parser<char, GraphDef, Error = Simple<char>> {
    let comment = just('#')
        .then(filter(|c: &char| *c != '\n').repeated())
        .ignored();
    let sp = filter(|c: &char| c.is_whitespace())
        .ignored()
        .or(comment)
        .repeated();

    let path = text::ident()
        .then(
            sp.clone()
                .ignore_then(just("--"))
                .ignore_then(sp.clone())
                .ignore_then(text::ident())
                .repeated(),
        )
        .map(|(first, rest): (String, Vec<String>)| {
            let mut nodes = SmallVec::with_capacity(rest.len() + 1);
            nodes.push(first);
            nodes.extend(rest);
            PathExpr { nodes }
        });

    sp.clone()
        .ignore_then(path.then_ignore(sp).repeated())
        .then_ignore(end())
        .map(|paths| GraphDef { paths })
}
