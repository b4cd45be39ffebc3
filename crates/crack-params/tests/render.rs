//! 渲染输出：固定顺序、逐字段一行、格式稳定。

use crack_params::{CrackParamsBuilder, Schema, render, stanza};

#[test]
fn listing_follows_schema_order() {
    let text = render(&Default::default());
    let keys: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("  "))
        .filter_map(|line| line.split_once(" = ").map(|(key, _)| key))
        .collect();
    let expected: Vec<String> = Schema::standard()
        .fields()
        .map(|(namespace, field)| field.qualified_key(namespace))
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn overrides_are_rendered_with_stable_formatting() {
    let events = stanza(
        "crack_params",
        [
            ("io", vec![("print_properties", "pos:nn"), ("verbosity", "ANAL")]),
            ("selection", vec![("ellipse", "1 2 3.5")]),
            ("minim", vec![("mm_tol", "1e-7")]),
            ("simulation", vec![("classical", "true")]),
        ],
    );
    let outcome = CrackParamsBuilder::new().build(&events).expect("build");
    let text = outcome.params.to_string();

    assert!(text.starts_with("[crack]\n"));
    assert!(text.contains("  io_print_properties = species pos nn\n"));
    assert!(text.contains("  io_verbosity = ANAL\n"));
    assert!(text.contains("  selection_ellipse = 1.0 2.0 3.5\n"));
    assert!(text.contains("  minim_mm_tol = 1e-7\n"));
    assert!(text.contains("  simulation_classical = T\n"));
    assert_eq!(text, render(&outcome.params));
}

#[test]
fn render_is_deterministic() {
    let events = stanza("crack_params", [("md", vec![("sim_temp", "1200")])]);
    let first = CrackParamsBuilder::new().build(&events).expect("build");
    let second = CrackParamsBuilder::new().build(&events).expect("build");
    assert_eq!(render(&first.params), render(&second.params));
    assert!(render(&first.params).contains("  md_sim_temp = 1200.0\n"));
}

#[test]
fn multi_line_text_stays_on_one_line() {
    let events = stanza(
        "crack_params",
        [("classical", vec![("args", "IP SW\n  md_time_step = 9.0\r\n")])],
    );
    let outcome = CrackParamsBuilder::new().build(&events).expect("build");
    assert_eq!(outcome.params.classical.args, "IP SW\n  md_time_step = 9.0");

    let text = render(&outcome.params);
    let field_lines = text.lines().filter(|line| line.starts_with("  ")).count();
    assert_eq!(field_lines, Schema::standard().len());
    let time_step_lines = text
        .lines()
        .filter(|line| line.starts_with("  md_time_step = "))
        .count();
    assert_eq!(time_step_lines, 1);
    assert!(text.contains("  classical_args = IP SW\\n  md_time_step = 9.0\n"));
}
