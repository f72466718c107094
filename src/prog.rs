use crate::ast::{Exp, ExpList, Op, Stm};

/// `a := 5 + 3; b := (print(a, a - 1), 10 * a); print(b)`
pub fn prog() -> Stm {
    Stm::compound(
        Stm::assign("a", Exp::binop(Exp::num(5), Op::Add, Exp::num(3))),
        Stm::compound(
            Stm::assign(
                "b",
                Exp::eval_seq(
                    Stm::print(ExpList::new(
                        Exp::id("a"),
                        [Exp::binop(Exp::id("a"), Op::Sub, Exp::num(1))],
                    )),
                    Exp::binop(Exp::num(10), Op::Mul, Exp::id("a")),
                ),
            ),
            Stm::print(ExpList::last(Exp::id("b"))),
        ),
    )
}
