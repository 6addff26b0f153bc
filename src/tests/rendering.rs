use crate::Notation;

#[test]
fn test_infix_round_trip() {
    assert_eq!(render!("((7 + ((3 - 2) x 5)) ÷ 6)", Infix), "((7 + ((3 - 2) x 5)) ÷ 6)");
}

#[test]
fn test_canonical_infix_from_any_notation() {
    assert_eq!(render!("((5 x 3) + 2)", Infix), "((5 x 3) + 2)");
    assert_eq!(render!("(+ (x 5  3)  2)", Infix), "((5 x 3) + 2)");
    assert_eq!(render!("((5  3 x)  2 +)", Infix), "((5 x 3) + 2)");
}

#[test]
fn test_cross_notation_from_one_tree() {
    let node = parse!("((7 + ((3 - 2) x 5)) ÷ 6)");
    assert_eq!(node.render(Notation::Prefix), "(÷ (+ 7 (x (- 3 2) 5)) 6)");
    assert_eq!(node.render(Notation::Postfix), "((7 ((3 2 -) 5 x) +) 6 ÷)");
}

#[test]
fn test_operand_renders_identically_in_every_notation() {
    let node = parse!("0");
    assert_eq!(node.render(Notation::Infix), "0");
    assert_eq!(node.render(Notation::Prefix), "0");
    assert_eq!(node.render(Notation::Postfix), "0");
}

#[test]
fn test_rendering_is_idempotent() {
    let node = parse!("((5 x 3) + 2)");
    let first = node.render(Notation::Postfix);
    let second = node.render(Notation::Postfix);
    assert_eq!(first, second);

    // The tree is untouched by rendering
    assert_eq!(node.render(Notation::Infix), "((5 x 3) + 2)");
}

#[test]
fn test_display_is_infix() {
    let node = parse!("(+ (x 5  3)  2)");
    assert_eq!(node.to_string(), "((5 x 3) + 2)");
}
