//! End-to-end tests for the stag-forest pipeline

use pretty_assertions::assert_eq;

use stag_forest::parser::{parse, Expr, InputFormat};
use stag_forest::{
    render, render_with_config, LatexConfig, LinkStyle, ParseError, RenderConfig, RenderError,
    Stylesheet,
};

fn flat() -> RenderConfig {
    RenderConfig::new().with_format(InputFormat::Flat)
}

fn named() -> RenderConfig {
    RenderConfig::new().with_format(InputFormat::Named)
}

#[test]
fn test_plain_pair_verbatim() {
    let tex = render("[NP [N dog]][VP [V barked]]").expect("Should render");
    assert_eq!(tex, "\\stagrule{[NP [N dog]]}{[VP [V barked]]}\n");
}

#[test]
fn test_flat_pair_boxed_links() {
    let tex = render_with_config("[NP(1)]#[N(1)]", flat()).expect("Should render");
    assert_eq!(tex, "\\stagrule{[NP\\boxed{1}]}{[N\\boxed{1}]}\n");
}

#[test]
fn test_odd_number_of_trees() {
    let err = render("[S [NP] [VP]]\n[S [VP] [NP]]\n[S]\n").unwrap_err();
    match err {
        RenderError::Parse(ParseError::InputCount { span }) => assert_eq!(span, 28..31),
        other => panic!("Expected InputCount, got {:?}", other),
    }
}

#[test]
fn test_odd_number_of_named_expressions() {
    let err = render_with_config("alpha [A] beta [B]\ngamma {[C] [D]}\n", named()).unwrap_err();
    assert!(matches!(err, RenderError::Parse(ParseError::InputCount { .. })));
}

#[test]
fn test_flat_blank_lines_do_not_shift_pairing() {
    let input = "\n[A(1)]#[B(1)]\n\n   \n[C]#[D]\n\n";
    let tex = render_with_config(input, flat()).expect("Should render");
    assert_eq!(
        tex,
        "\\stagrule{[A\\boxed{1}]}{[B\\boxed{1}]}\n\\stagrule{[C]}{[D]}\n"
    );
}

#[test]
fn test_flat_malformed_line() {
    let err = render_with_config("[A]#[B]\n[C][D]\n", flat()).unwrap_err();
    match err {
        RenderError::Parse(ParseError::MalformedLine {
            line,
            separators,
            content,
            ..
        }) => {
            assert_eq!(line, 2);
            assert_eq!(separators, 0);
            assert_eq!(content, "[C][D]");
        }
        other => panic!("Expected MalformedLine, got {:?}", other),
    }
}

#[test]
fn test_multiline_trees_are_trimmed() {
    let input = "\n[S\n  [NP(1) [N dog]]\n  [VP [V barked]]]\n\n[S [NP(1)] [VP]]\n";
    let tex = render(input).expect("Should render");
    assert_eq!(
        tex,
        "\\stagrule{[S\n  [NP\\boxed{1} [N dog]]\n  [VP [V barked]]]}{[S [NP\\boxed{1}] [VP]]}\n"
    );
}

#[test]
fn test_circled_mode() {
    let config = RenderConfig::new()
        .with_latex(LatexConfig::new().with_link_style(LinkStyle::Circled));
    let tex = render_with_config("[A(1) (a)] [B(1)]", config).expect("Should render");
    assert_eq!(tex, "\\stagrule{[A\\circled{1} (a)]}{[B\\circled{1}]}\n");
}

#[test]
fn test_mc_set_naming_rule() {
    let pairs = parse("{alice [NP] bob [NP]} {[NP] bob [NP]}", InputFormat::Named)
        .expect("Should parse");
    assert_eq!(pairs.len(), 1);
    assert!(matches!(
        &pairs[0].source.expr,
        Expr::NamedPair { left_name, right_name, .. } if left_name == "alice" && right_name == "bob"
    ));
    assert!(matches!(&pairs[0].target.expr, Expr::Pair(..)));
}

#[test]
fn test_named_composites() {
    let input = "
        [A] [B]
        alpha [C] [D]
        alpha [E] beta [F]
        [G] beta [H]
    ";
    let tex = render_with_config(input, named()).expect("Should render");
    let lines: Vec<&str> = tex.lines().collect();
    assert_eq!(
        lines,
        vec![
            "\\begin{adjustbox}{scale=0.6}",
            "\\stagpair{\\stagtree{[A]}}{\\stagtree{[B]}}",
            "\\namedsrcpair{alpha}{\\stagtree{[C]}}{\\stagtree{[D]}}",
            "\\namedpair{alpha}{\\stagtree{[E]}}{beta}{\\stagtree{[F]}}",
            "\\stagpair{\\stagtree{[G]}}{\\stagtree{[H]}}",
            "\\end{adjustbox}",
        ]
    );
}

#[test]
fn test_named_mc_set_links_substituted() {
    let input = "alpha {x [S(1) [NP(2)]] y [VP(3)]}\n{[S(1)] [VP(3)]}";
    let tex = render_with_config(input, named()).expect("Should render");
    assert!(tex.contains(
        "\\namedsrcpair{alpha}{\\namedmcset{x}{\\stagtree{[S\\boxed{1} [NP\\boxed{2}]]}}{y}{\\stagtree{[VP\\boxed{3}]}}}"
    ));
    assert!(tex.contains("{\\mcset{\\stagtree{[S\\boxed{1}]}}{\\stagtree{[VP\\boxed{3}]}}}"));
}

#[test]
fn test_unbalanced_mc_set() {
    let err = render_with_config("{[A] [B] [C] [D]", named()).unwrap_err();
    assert!(matches!(err, RenderError::Parse(ParseError::UnbalancedMcSet { .. })));
}

#[test]
fn test_scale_factor() {
    let config = named().with_latex(LatexConfig::new().with_scale(1.25));
    let tex = render_with_config("[A] [B]", config).expect("Should render");
    assert!(tex.starts_with("\\begin{adjustbox}{scale=1.25}\n"));
}

#[test]
fn test_stylesheet_renames_macros() {
    let stylesheet = Stylesheet::from_toml(
        r#"
[macros]
rule = "\\treepair"
boxed = "linkbox"

[preamble]
text = "\\input{mymacros}"
"#,
    )
    .expect("Should parse");
    let config = RenderConfig::new()
        .with_stylesheet(stylesheet)
        .with_latex(LatexConfig::new().with_preamble(true));
    let tex = render_with_config("[A(4)] [B]", config).expect("Should render");
    assert_eq!(tex, "\\input{mymacros}\n\\treepair{[A\\linkbox{4}]}{[B]}\n");
}

#[test]
fn test_error_report_points_at_source() {
    let source = "[A] [B]\n[C [D]\n";
    let err = stag_forest::parse(source, InputFormat::Bracket).unwrap_err();
    let report = err.format(source, "trees.txt");
    assert!(report.contains("trees.txt"));
    assert!(report.contains("malformed tree"));
}
