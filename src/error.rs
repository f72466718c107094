use crate::parser::Rule;
use std::{io, num};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ParseError(#[from] pest::error::Error<Rule>),
    #[error(transparent)]
    ParseIntError(#[from] num::ParseIntError),

    #[error("could not find {} in table.", .0)]
    NotDefined(String),
    #[error("divide by zero")]
    DivideByZero,
    #[error(transparent)]
    IOError(#[from] io::Error),
}
