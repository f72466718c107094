use crate::{
    ast::{Exp, ExpList, Op, Stm},
    env::Env,
    error::Error,
    maxargs,
};
use std::{
    cmp::max,
    io::{self, Write},
};
use tracing::trace;

/// Result of an expression together with the table it left behind.
#[derive(Debug, Clone)]
pub struct Evaluated {
    pub value: isize,
    pub env: Env,
}

pub fn apply(op: Op, lhs: isize, rhs: isize) -> Result<isize, Error> {
    Ok(match op {
        Op::Add => lhs.wrapping_add(rhs),
        Op::Sub => lhs.wrapping_sub(rhs),
        Op::Mul => lhs.wrapping_mul(rhs),
        Op::Div => {
            if rhs == 0 {
                return Err(Error::DivideByZero);
            }
            lhs.wrapping_div(rhs)
        }
    })
}

pub struct Interpreter<W> {
    out: W,
    widest_print: usize,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            widest_print: 0,
        }
    }

    /// Argument count of the widest `print` executed so far.
    pub fn widest_print(&self) -> usize {
        self.widest_print
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn exec(&mut self, mut stm: &Stm, mut env: Env) -> Result<Env, Error> {
        // Sequences nest to the right, so the spine is walked in a loop.
        loop {
            match stm {
                Stm::Compound(s1, s2) => {
                    env = self.exec(s1, env)?;
                    stm = s2;
                }
                Stm::Assign { id, exp } => {
                    let Evaluated { value, env } = self.eval(exp, env)?;
                    trace!(%id, value, "bind");
                    return Ok(env.bind(id.as_str(), value));
                }
                Stm::Print(exps) => {
                    self.widest_print = max(self.widest_print, exps.len());
                    return Ok(self.print_list(exps, env)?.env);
                }
            }
        }
    }

    pub fn eval(&mut self, exp: &Exp, env: Env) -> Result<Evaluated, Error> {
        match exp {
            Exp::Id(id) => Ok(Evaluated {
                value: env.lookup(id)?,
                env,
            }),
            Exp::Num(num) => Ok(Evaluated { value: *num, env }),
            Exp::BinOp { lhs, op, rhs } => {
                let lhs = self.eval(lhs, env)?;
                let rhs = self.eval(rhs, lhs.env)?;
                Ok(Evaluated {
                    value: apply(*op, lhs.value, rhs.value)?,
                    env: rhs.env,
                })
            }
            Exp::EvalSeq(stm, exp) => {
                let env = self.exec(stm, env)?;
                self.eval(exp, env)
            }
        }
    }

    fn print_list(&mut self, exps: &ExpList, env: Env) -> Result<Evaluated, Error> {
        match exps {
            ExpList::Pair(head, tail) => {
                let head = self.eval(head, env)?;
                write!(self.out, "{} ", head.value)?;
                self.print_list(tail, head.env)
            }
            ExpList::Last(exp) => {
                let last = self.eval(exp, env)?;
                writeln!(self.out, "{}", last.value)?;
                trace!(value = last.value, "print done");
                Ok(last)
            }
        }
    }
}

/// Runs `program` on an empty table, printing to stdout.
pub fn interp(program: &Stm) -> Result<Env, Error> {
    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(stdout.lock());
    let env = interpreter.exec(program, Env::new())?;
    interpreter.into_inner().flush()?;
    Ok(env)
}

/// Reports the widest print, then runs `program` on an empty table.
///
/// Output written before a failing statement stays in `out`.
pub fn run<W: Write>(program: &Stm, mut out: W) -> Result<Env, Error> {
    maxargs::report(program, &mut out)?;
    let mut interpreter = Interpreter::new(out);
    let env = interpreter.exec(program, Env::new())?;
    interpreter.into_inner().flush()?;
    Ok(env)
}
