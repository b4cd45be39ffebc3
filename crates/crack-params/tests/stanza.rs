//! 根节点状态机：进入、离开、未闭合与后出现者生效。

use crack_params::{
    BuildContext, BuildOptions, CrackParams, CrackParamsBuilder, Flow, IgnoredItem, MarkupEvent,
    ParseErrorKind, StanzaOutcome, UnknownPolicy, stanza,
};

fn start<'a>(element: &'a str, attributes: &[(&'a str, &'a str)]) -> MarkupEvent<'a> {
    MarkupEvent::start(element, attributes.iter().copied())
}

#[test]
fn events_outside_the_stanza_are_ignored() {
    let mut events = vec![
        start("md", &[("time_step", "7.0")]),
        MarkupEvent::end("md"),
    ];
    events.extend(stanza("crack_params", [("md", vec![("tau", "20.0")])]));
    events.push(start("md", &[("time_step", "8.0")]));

    let outcome = CrackParamsBuilder::new().build(&events).expect("build");
    assert_eq!(outcome.params.md.time_step, 1.0);
    assert_eq!(outcome.params.md.tau, 20.0);
    assert_eq!(outcome.report.stanza, StanzaOutcome::Closed);
    assert!(outcome.report.ignored.is_empty());
}

#[test]
fn unterminated_stanza_returns_partial_record() {
    let events = vec![
        start("crack_params", &[]),
        start("md", &[("time_step", "3.0")]),
        MarkupEvent::end("md"),
        start("crack", &[("width", "300.0")]),
    ];
    let outcome = CrackParamsBuilder::new().build(&events).expect("build");

    assert_eq!(outcome.params.md.time_step, 3.0);
    assert_eq!(outcome.params.crack.width, 300.0);
    assert_eq!(outcome.report.stanza, StanzaOutcome::Unterminated);
}

#[test]
fn later_elements_override_earlier_ones() {
    let events = stanza(
        "crack_params",
        [
            ("md", vec![("time_step", "1.0")]),
            ("md", vec![("time_step", "2.0")]),
        ],
    );
    let outcome = CrackParamsBuilder::new().build(&events).expect("build");
    assert_eq!(outcome.params.md.time_step, 2.0);
    assert_eq!(outcome.report.applied, 2);
}

#[test]
fn repeated_attribute_on_one_element_uses_the_last() {
    let events = stanza(
        "crack_params",
        [("md", vec![("time_step", "1.0"), ("time_step", "2.0")])],
    );
    let outcome = CrackParamsBuilder::new().build(&events).expect("build");
    assert_eq!(outcome.params.md.time_step, 2.0);
}

#[test]
fn nested_wrappers_do_not_leave_the_stanza() {
    let events = vec![
        start("crack_params", &[("version", "2")]),
        start("group", &[]),
        start("md", &[("tau", "250.0")]),
        MarkupEvent::end("md"),
        MarkupEvent::end("group"),
        start("qm", &[("buffer_hops", "5")]),
        MarkupEvent::end("qm"),
        MarkupEvent::end("crack_params"),
    ];
    let outcome = CrackParamsBuilder::new().build(&events).expect("build");

    assert_eq!(outcome.params.md.tau, 250.0);
    assert_eq!(outcome.params.qm.buffer_hops, 5);
    assert_eq!(outcome.report.stanza, StanzaOutcome::Closed);
    assert_eq!(
        outcome.report.ignored,
        [
            IgnoredItem {
                element: "crack_params".to_owned(),
                attribute: Some("version".to_owned()),
            },
            IgnoredItem {
                element: "group".to_owned(),
                attribute: None,
            },
        ]
    );
}

#[test]
fn nested_stanza_root_does_not_close_the_outer_stanza() {
    let mut events = vec![start("crack_params", &[])];
    events.extend(MarkupEvent::empty_element("crack_params", Vec::<(&str, &str)>::new()));
    events.extend(MarkupEvent::empty_element("md", [("time_step", "2.0")]));
    events.push(MarkupEvent::end("crack_params"));
    events.extend(MarkupEvent::empty_element("md", [("time_step", "9.0")]));

    let outcome = CrackParamsBuilder::new().build(&events).expect("build");
    assert_eq!(outcome.params.md.time_step, 2.0);
    assert_eq!(outcome.report.stanza, StanzaOutcome::Closed);
    assert_eq!(outcome.report.ignored.len(), 1);
    assert_eq!(outcome.report.ignored[0].element, "crack_params");
}

#[test]
fn deeply_nested_roots_close_only_on_the_matching_end() {
    let events = vec![
        start("crack_params", &[]),
        start("crack_params", &[]),
        start("crack_params", &[]),
        MarkupEvent::end("crack_params"),
        MarkupEvent::end("crack_params"),
        start("fit", &[("hops", "6")]),
        MarkupEvent::end("fit"),
    ];
    let outcome = CrackParamsBuilder::new().build(&events).expect("build");
    assert_eq!(outcome.params.fit.hops, 6);
    assert_eq!(outcome.report.stanza, StanzaOutcome::Unterminated);
}

#[test]
fn root_attributes_follow_the_unknown_policy() {
    let events = vec![
        start("crack_params", &[("version", "2")]),
        start("md", &[("tau", "30.0")]),
        MarkupEvent::end("md"),
        MarkupEvent::end("crack_params"),
    ];
    let outcome = CrackParamsBuilder::new()
        .with_unknown_policy(UnknownPolicy::Report)
        .build(&events)
        .expect("build");

    let [diagnostic] = outcome.report.diagnostics.as_slice() else {
        panic!("expected one diagnostic, got {:?}", outcome.report.diagnostics);
    };
    assert_eq!(diagnostic.element, "crack_params");
    assert_eq!(diagnostic.attribute.as_deref(), Some("version"));
    assert_eq!(diagnostic.kind, ParseErrorKind::UnknownAttribute);
    assert_eq!(outcome.params.md.tau, 30.0);
}

#[test]
fn events_after_the_stanza_closes_are_not_consumed() {
    let mut events = stanza("crack_params", [("fit", vec![("hops", "4")])]);
    events.extend(stanza("crack_params", [("fit", vec![("hops", "9")])]));

    let outcome = CrackParamsBuilder::new().build(&events).expect("build");
    assert_eq!(outcome.params.fit.hops, 4);
}

#[test]
fn explicit_context_drives_a_caller_owned_record() {
    let options = BuildOptions::default();
    let mut first = CrackParams::default();
    let mut second = CrackParams::default();

    let mut left = BuildContext::new(&mut first, &options);
    let mut right = BuildContext::new(&mut second, &options);
    let left_events = stanza("crack_params", [("md", vec![("tau", "1.0")])]);
    let right_events = stanza("crack_params", [("md", vec![("tau", "2.0")])]);

    for (l, r) in left_events.iter().zip(&right_events) {
        left.apply_event(l).expect("left");
        right.apply_event(r).expect("right");
    }
    assert_eq!(
        left.apply_event(&MarkupEvent::end("crack_params")),
        Ok(Flow::Finished)
    );
    let left_report = left.finish();
    let right_report = right.finish();

    assert_eq!(left_report.stanza, StanzaOutcome::Closed);
    assert_eq!(right_report.applied, 1);
    assert_eq!(first.md.tau, 1.0);
    assert_eq!(second.md.tau, 2.0);
}

#[test]
fn concurrent_builds_do_not_interfere() {
    let handles: Vec<_> = (1..=4)
        .map(|hops| {
            std::thread::spawn(move || {
                let raw = hops.to_string();
                let events = stanza("crack_params", [("fit", vec![("hops", raw.as_str())])]);
                CrackParamsBuilder::new()
                    .build(&events)
                    .expect("build")
                    .params
                    .fit
                    .hops
            })
        })
        .collect();

    let results: Vec<i64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread"))
        .collect();
    assert_eq!(results, [1, 2, 3, 4]);
}
