use calc::interpreter::{parse, ParserError};

pub fn eval(source: &str) -> i64 {
    parse(source).expect("Expression should evaluate")
}

pub fn eval_err(source: &str) -> ParserError {
    parse(source).expect_err("Expression should fail")
}
