use crate::{
    ast::{Exp, ExpList, Op, Stm},
    error::Error,
};
use lazy_static::lazy_static;
use pest::{
    iterators::{Pair, Pairs},
    pratt_parser::{Assoc, Op as PrattOp, PrattParser},
    Parser,
};

#[derive(Parser)]
#[grammar = "slp.pest"]
struct SlpParser;

lazy_static! {
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        .op(PrattOp::infix(Rule::add, Assoc::Left) | PrattOp::infix(Rule::sub, Assoc::Left))
        .op(PrattOp::infix(Rule::mul, Assoc::Left) | PrattOp::infix(Rule::div, Assoc::Left));
}

fn rule_to_op(rule: Rule) -> Op {
    match rule {
        Rule::add => Op::Add,
        Rule::sub => Op::Sub,
        Rule::mul => Op::Mul,
        Rule::div => Op::Div,
        _ => unreachable!(),
    }
}

fn parse_exp(pairs: Pairs<Rule>) -> Result<Exp, Error> {
    PRATT_PARSER
        .map_primary(|primary| -> Result<Exp, Error> {
            match primary.as_rule() {
                Rule::int => Ok(Exp::Num(primary.as_str().parse()?)),
                Rule::ident => Ok(Exp::Id(primary.as_str().into())),
                Rule::exp => parse_exp(primary.into_inner()),
                Rule::eseq => {
                    let mut pairs = primary.into_inner();
                    let stm = parse_stm(pairs.next().unwrap())?;
                    let exp = parse_exp(pairs.next().unwrap().into_inner())?;
                    Ok(Exp::eval_seq(stm, exp))
                }
                _ => unreachable!(),
            }
        })
        .map_infix(|lhs, op, rhs| Ok(Exp::binop(lhs?, rule_to_op(op.as_rule()), rhs?)))
        .parse(pairs)
}

fn parse_simple(pair: Pair<Rule>) -> Result<Stm, Error> {
    match pair.as_rule() {
        Rule::assign => {
            let mut pairs = pair.into_inner();
            let id = pairs.next().unwrap().as_str();
            Ok(Stm::assign(id, parse_exp(pairs.next().unwrap().into_inner())?))
        }
        Rule::print => {
            let mut exps = pair
                .into_inner()
                .map(|pair| parse_exp(pair.into_inner()))
                .collect::<Result<Vec<_>, _>>()?
                .into_iter();
            let head = exps.next().unwrap();
            Ok(Stm::print(ExpList::new(head, exps)))
        }
        _ => unreachable!(),
    }
}

/// `s1; s2; s3` nests to the right: `Compound(s1, Compound(s2, s3))`.
fn parse_stm(pair: Pair<Rule>) -> Result<Stm, Error> {
    let mut stms = pair
        .into_inner()
        .map(parse_simple)
        .collect::<Result<Vec<_>, _>>()?;
    let mut stm = stms.pop().unwrap();
    while let Some(prev) = stms.pop() {
        stm = Stm::compound(prev, stm);
    }
    Ok(stm)
}

pub fn parse(src: &str) -> Result<Stm, Error> {
    parse_stm(
        SlpParser::parse(Rule::main, src)?
            .next()
            .unwrap()
            .into_inner()
            .next()
            .unwrap(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prog::prog;

    #[test]
    fn test_sample() -> Result<(), Error> {
        assert_eq!(
            parse("a := 5+3; b := (print(a, a-1), 10*a); print(b)")?,
            prog()
        );
        assert_eq!(parse(&prog().to_string())?, prog());
        Ok(())
    }

    #[test]
    fn test_precedence() -> Result<(), Error> {
        let stm = parse("x := 1 + 2 * 3 - 4 / 2")?;
        let expected = Stm::assign(
            "x",
            Exp::binop(
                Exp::binop(
                    Exp::num(1),
                    Op::Add,
                    Exp::binop(Exp::num(2), Op::Mul, Exp::num(3)),
                ),
                Op::Sub,
                Exp::binop(Exp::num(4), Op::Div, Exp::num(2)),
            ),
        );
        assert_eq!(stm, expected);
        assert_eq!(
            parse("x := (1 + 2) * -3")?,
            Stm::assign(
                "x",
                Exp::binop(
                    Exp::binop(Exp::num(1), Op::Add, Exp::num(2)),
                    Op::Mul,
                    Exp::num(-3),
                ),
            )
        );
        Ok(())
    }

    #[test]
    fn test_compound_nests_right() -> Result<(), Error> {
        let stm = parse("a := 1; b := 2; c := 3;")?;
        assert_eq!(
            stm,
            Stm::compound(
                Stm::assign("a", Exp::num(1)),
                Stm::compound(
                    Stm::assign("b", Exp::num(2)),
                    Stm::assign("c", Exp::num(3))
                ),
            )
        );
        Ok(())
    }

    #[test]
    fn test_comments() -> Result<(), Error> {
        let stm = parse("/* set */ a := 1 // trailing\n; print(a)")?;
        assert_eq!(
            stm,
            Stm::compound(
                Stm::assign("a", Exp::num(1)),
                Stm::print(ExpList::last(Exp::id("a")))
            )
        );
        Ok(())
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse("a := "), Err(Error::ParseError(_))));
        assert!(matches!(parse("print()"), Err(Error::ParseError(_))));
        assert!(matches!(parse("print := 1"), Err(Error::ParseError(_))));
        assert!(matches!(parse("a := 1 b := 2"), Err(Error::ParseError(_))));
        assert!(matches!(
            parse("a := 99999999999999999999999999"),
            Err(Error::ParseIntError(_))
        ));
    }
}
