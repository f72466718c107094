#[macro_use]
extern crate pest_derive;

pub mod ast;
pub mod env;
pub mod error;
pub mod eval;
pub mod maxargs;
pub mod parser;
pub mod prog;

#[cfg(test)]
mod tests {
    use super::*;
    use error::Error;
    use eval::Interpreter;
    use std::{fs, path::PathBuf};

    fn test_src(src: &str) -> Result<(usize, String), Error> {
        let program = parser::parse(src)?;
        let max = maxargs::maxargs(&program);
        let mut interpreter = Interpreter::new(Vec::new());
        interpreter.exec(&program, env::Env::new())?;
        assert_eq!(interpreter.widest_print(), max);
        Ok((max, String::from_utf8(interpreter.into_inner()).unwrap()))
    }

    fn test_sample(file_name: &str) -> Result<(usize, String), Error> {
        let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "samples", file_name]
            .iter()
            .collect();
        test_src(&fs::read_to_string(path).unwrap())
    }

    fn ok(max: usize, out: &str) -> Result<(usize, String), ()> {
        Ok((max, out.into()))
    }

    #[rustfmt::skip]
    #[test]
    fn test_samples() {
        assert_eq!(test_sample("prog1.slp").map_err(drop), ok(2, "8 7\n80\n"));
        assert_eq!(test_sample("shadow.slp").map_err(drop), ok(2, "11 1\n"));
        assert_eq!(test_sample("order.slp").map_err(drop), ok(2, "-1 2\n"));
        assert_eq!(test_sample("nested.slp").map_err(drop), ok(3, "1 2 3\n4 5\n"));
        assert_eq!(test_sample("division.slp").map_err(drop), ok(4, "3 -3 -3 3\n"));
        assert_eq!(test_sample("wide.slp").map_err(drop), ok(5, "1 2 3 4 5\n30\n"));
        assert!(matches!(test_sample("undefined.slp"), Err(Error::NotDefined(name)) if name == "b"));
        assert!(matches!(test_sample("divzero.slp"), Err(Error::DivideByZero)));
        assert!(matches!(test_sample("syntax.slp"), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_every_sample_parses_or_fails_cleanly() {
        let dir: PathBuf = [env!("CARGO_MANIFEST_DIR"), "samples"].iter().collect();
        for sample in fs::read_dir(dir).unwrap() {
            let sample = sample.unwrap();
            let src = fs::read_to_string(sample.path()).unwrap();
            if let Ok(program) = parser::parse(&src) {
                assert_eq!(
                    parser::parse(&program.to_string()).unwrap(),
                    program,
                    "{:?}",
                    sample.file_name()
                );
            }
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::NotDefined("b".into()).to_string(),
            "could not find b in table."
        );
        let err = parser::parse("a := ;").unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
        assert!(std::error::Error::source(&err).is_none());
    }
}
