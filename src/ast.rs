use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stm {
    Compound(Box<Self>, Box<Self>),
    Assign { id: String, exp: Exp },
    Print(ExpList),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Exp {
    Id(String),
    Num(isize),
    BinOp {
        lhs: Box<Self>,
        op: Op,
        rhs: Box<Self>,
    },
    /// Runs the statement for its effects, then yields the expression.
    EvalSeq(Box<Stm>, Box<Self>),
}

/// A print argument list. There is no empty variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpList {
    Pair(Exp, Box<Self>),
    Last(Exp),
}

impl Stm {
    pub fn compound(first: Stm, second: Stm) -> Self {
        Self::Compound(first.into(), second.into())
    }

    pub fn assign(id: impl Into<String>, exp: Exp) -> Self {
        Self::Assign { id: id.into(), exp }
    }

    pub fn print(exps: ExpList) -> Self {
        Self::Print(exps)
    }
}

impl Exp {
    pub fn id(name: impl Into<String>) -> Self {
        Self::Id(name.into())
    }

    pub fn num(value: isize) -> Self {
        Self::Num(value)
    }

    pub fn binop(lhs: Exp, op: Op, rhs: Exp) -> Self {
        Self::BinOp {
            lhs: lhs.into(),
            op,
            rhs: rhs.into(),
        }
    }

    pub fn eval_seq(stm: Stm, exp: Exp) -> Self {
        Self::EvalSeq(stm.into(), exp.into())
    }
}

impl ExpList {
    /// Builds `head, rest...` in order.
    pub fn new(head: Exp, rest: impl IntoIterator<Item = Exp>) -> Self {
        let mut rest: Vec<_> = rest.into_iter().collect();
        let mut list = match rest.pop() {
            Some(last) => Self::Last(last),
            None => return Self::Last(head),
        };
        while let Some(exp) = rest.pop() {
            list = Self::Pair(exp, list.into());
        }
        Self::Pair(head, list.into())
    }

    pub fn last(exp: Exp) -> Self {
        Self::Last(exp)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Self::Pair(_, tail) => 1 + tail.len(),
            Self::Last(_) => 1,
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(Some(self))
    }
}

pub struct Iter<'a>(Option<&'a ExpList>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Exp;

    fn next(&mut self) -> Option<Self::Item> {
        match self.0.take()? {
            ExpList::Pair(head, tail) => {
                self.0 = Some(&**tail);
                Some(head)
            }
            ExpList::Last(exp) => Some(exp),
        }
    }
}

impl<'a> IntoIterator for &'a ExpList {
    type Item = &'a Exp;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Stm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stm = self;
        while let Stm::Compound(first, second) = stm {
            write!(f, "{}; ", first)?;
            stm = second;
        }
        match stm {
            Stm::Compound(..) => unreachable!(),
            Stm::Assign { id, exp } => write!(f, "{} := {}", id, exp),
            Stm::Print(exps) => write!(f, "print({})", exps),
        }
    }
}

impl Display for Exp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exp::Id(id) => f.write_str(id),
            Exp::Num(num) => write!(f, "{}", num),
            Exp::BinOp { lhs, op, rhs } => {
                fmt_operand(lhs, f)?;
                write!(f, " {} ", op)?;
                fmt_operand(rhs, f)
            }
            Exp::EvalSeq(stm, exp) => write!(f, "({}, {})", stm, exp),
        }
    }
}

fn fmt_operand(exp: &Exp, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match exp {
        Exp::BinOp { .. } => write!(f, "({})", exp),
        _ => exp.fmt(f),
    }
}

impl Display for ExpList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, exp) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            exp.fmt(f)?;
        }
        Ok(())
    }
}
