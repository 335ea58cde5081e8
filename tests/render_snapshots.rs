//! Snapshot tests of emitted LaTeX

use stag_forest::{render_with_config, InputFormat, LatexConfig, LinkStyle, RenderConfig};

#[test]
fn test_snapshot_bracket_pairs() {
    let source = "
[S(1) [NP(2) [N dog]] [VP(3) [V barked]]]
[S(1) [NP(2) [N chien]] [VP(3) [V aboyait]]]

[NP(1) [D the] [N dog]]
[NP(1) [D le] [N chien]]
";
    let tex = render_with_config(source, RenderConfig::new()).unwrap();
    insta::assert_snapshot!("bracket_pairs", tex);
}

#[test]
fn test_snapshot_named_circled() {
    let source = "
alpha {x [S(1) [NP] [VP(2)]]
       y [VP(2) [V]]}
beta  {u [S(1)] v [VP(2)]}

[NP(1)] gamma [NP(1)]
";
    let config = RenderConfig::new()
        .with_format(InputFormat::Named)
        .with_latex(LatexConfig::new().with_link_style(LinkStyle::Circled).with_scale(0.5));
    let tex = render_with_config(source, config).unwrap();
    insta::assert_snapshot!("named_circled", tex);
}
