//! Static count of the widest `print` reachable from a program, including
//! prints buried in `EvalSeq` expressions.

use crate::{
    ast::{Exp, ExpList, Stm},
    error::Error,
};
use std::{cmp::max, io::Write};
use tracing::debug;

impl Stm {
    pub fn maxargs(&self) -> usize {
        let mut stm = self;
        let mut widest = 0;
        loop {
            match stm {
                Stm::Compound(s1, s2) => {
                    widest = max(widest, s1.maxargs());
                    stm = s2;
                }
                Stm::Assign { exp, .. } => return max(widest, exp.maxargs()),
                Stm::Print(exps) => return max(widest, max(exps.len(), exps.maxargs())),
            }
        }
    }
}

impl Exp {
    pub fn maxargs(&self) -> usize {
        match self {
            Exp::Id(_) | Exp::Num(_) => 0,
            Exp::BinOp { lhs, rhs, .. } => max(lhs.maxargs(), rhs.maxargs()),
            Exp::EvalSeq(stm, exp) => max(stm.maxargs(), exp.maxargs()),
        }
    }
}

impl ExpList {
    /// Widest print nested inside the elements. The list's own length is not
    /// counted here.
    pub fn maxargs(&self) -> usize {
        match self {
            ExpList::Pair(head, tail) => max(head.maxargs(), tail.maxargs()),
            ExpList::Last(exp) => exp.maxargs(),
        }
    }
}

pub fn maxargs(program: &Stm) -> usize {
    program.maxargs()
}

/// Writes the analysis headline for `program` and returns the count.
pub fn report<W: Write>(program: &Stm, mut out: W) -> Result<usize, Error> {
    let count = maxargs(program);
    debug!(count, "analyzed");
    writeln!(
        out,
        "Maximum number of arguments to any print statement: {}",
        count
    )?;
    Ok(count)
}
