use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("the node `{0}` is not declared in the graph")]
    UnknownNode(String),
    #[error("self-loop on node `{0}` is not supported")]
    SelfLoop(String),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O failure")]
    IoFailure(#[from] io::Error),
}
