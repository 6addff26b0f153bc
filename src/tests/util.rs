macro_rules! standard_registry {
    () => { crate::OperatorRegistry::<f64>::standard() };
}

macro_rules! parse {
    ($s:expr) => { crate::parser::parse::<f64>($s, &standard_registry!()).unwrap() };
}

macro_rules! parse_err {
    ($s:expr) => { crate::parser::parse::<f64>($s, &standard_registry!()).unwrap_err() };
}

macro_rules! render {
    ($s:expr, $n:ident) => { parse!($s).render(crate::Notation::$n) };
}

macro_rules! operand {
    ($v:expr) => { crate::ExpressionNode::Operand($v as f64) };
}

macro_rules! nested {
    ([ $($x:tt),* ]) => { crate::flatten::Nested::List(vec![ $(nested!($x)),* ]) };
    ($x:expr) => { crate::flatten::Nested::Value($x) };
}
