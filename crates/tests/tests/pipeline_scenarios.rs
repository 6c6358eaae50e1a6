use std::sync::Arc;

use desk_core::{
    Action, Department, InboundMessage, NamedEntity, Outcome, Salutation, TriagePipeline, Urgency,
};
use desk_ner::FixedEntitySource;
use desk_observability::AppMetrics;
use desk_triage::TriageDesk;

const WOHNGELD: &str = "Guten Tag, ich habe vor drei Wochen Wohngeld beantragt. \
    Wann kann ich mit einer Auszahlung rechnen? Meine Miete in Hoehe von 650 Euro ist faellig. \
    Viele Gruesse aus Essen-Ruettenscheid. Sabine Mueller";

const BAUANTRAG: &str = "Sehr geehrte Damen und Herren, anbei uebersende ich Informationen zum Bauantrag \
    mit dem Aktenzeichen AZ-2026-8871. Die Unterlagen reiche ich spaeter nach. \
    Gruss, Thomas Schmidt";

const SCHLAGLOCH: &str = "Hallo, auf der Kettwiger Strasse ist ein riesiges Schlagloch, \
    das repariert werden muss. Mein Vorgang dazu hat das Aktenzeichen AZ-2026-1004. \
    Bitte beheben Sie das bis zum 28.02.2026, da sonst Unfaelle drohen. \
    Der Schaden betraegt sicher schon 1500 Euro.";

fn stub_desk() -> TriageDesk {
    let source = FixedEntitySource::default()
        .with_text(
            WOHNGELD,
            vec![
                NamedEntity::new("Essen-Ruettenscheid", desk_core::EntityLabel::Location),
                NamedEntity::person("Sabine Mueller"),
            ],
        )
        .with_text(BAUANTRAG, vec![NamedEntity::person("Thomas Schmidt")])
        .with_text(
            SCHLAGLOCH,
            vec![
                NamedEntity::new("Kettwiger Strasse", desk_core::EntityLabel::Location),
                NamedEntity::date("28.02.2026"),
            ],
        );

    TriageDesk::new(Arc::new(source), TriagePipeline::default(), AppMetrics::shared())
}

#[test]
fn housing_request_without_reference_asks_for_it() {
    let desk = stub_desk();
    let report = desk.process_detailed(&InboundMessage::new("sabine.mueller@mail.de", WOHNGELD));

    assert_eq!(report.run.department, Department::SocialHousing);
    assert_eq!(report.run.decision.outcome(), Outcome::Reject);
    assert_eq!(
        report.run.decision.missing_items(),
        ["Case reference (format AZ-YYYY-NNNN)".to_string()]
    );
    assert_eq!(report.run.metadata.amounts, vec!["650 Euro"]);
    assert_eq!(
        report.run.salutation,
        Salutation::Female {
            family: "Mueller".to_string()
        }
    );

    let output = report.run.output;
    assert_eq!(output.action, Action::Reject);
    assert!(output.rendered_text.contains("To: sabine.mueller@mail.de\n"));
    assert!(output
        .rendered_text
        .contains("Subject: Re: Your request (Social & Housing) - documents incomplete\n"));
    assert!(output.rendered_text.contains("Dear Mrs. Mueller,\n"));
    assert!(output
        .rendered_text
        .contains("\n- Case reference (format AZ-YYYY-NNNN)\n"));
}

#[test]
fn building_request_without_attachment_only_misses_the_attachment() {
    let desk = stub_desk();
    let report =
        desk.process_detailed(&InboundMessage::new("architekt.schmidt@bau.de", BAUANTRAG));

    assert_eq!(report.run.department, Department::UrbanPlanningBuilding);
    assert_eq!(report.run.office_code, "FB 61");
    assert_eq!(
        report.run.metadata.case_reference.as_deref(),
        Some("AZ-2026-8871")
    );
    assert_eq!(
        report.run.decision.missing_items(),
        ["Required attachment (e.g., structural-analysis report)".to_string()]
    );
    assert_eq!(report.run.salutation.render(), "Dear Mr. Schmidt");
    assert!(report
        .run
        .output
        .rendered_text
        .contains("Dear Mr. Schmidt,\n"));
}

#[test]
fn complete_defect_report_is_routed_with_high_priority() {
    let desk = stub_desk();
    let report = desk.process_detailed(&InboundMessage::new("buerger123@web.de", SCHLAGLOCH));

    assert_eq!(report.run.department, Department::PublicOrderDefects);
    assert_eq!(report.run.decision.outcome(), Outcome::Accept);
    assert!(report.run.decision.missing_items().is_empty());
    assert_eq!(report.run.urgency, Urgency::High);
    assert_eq!(report.run.metadata.deadlines, vec!["28.02.2026"]);
    assert_eq!(report.run.metadata.amounts, vec!["1500 Euro"]);
    assert!(!report.run.fallback.any());

    let expected = "==================================================\n \
        CASEWORKER COCKPIT | NEW INBOUND\n\
        ==================================================\n \
        RESPONSIBLE:   Public Order/Defect Reporting\n \
        PRIORITY:      HIGH (check deadline!)\n \
        SYSTEM CHECK:  All mandatory fields present\n\
        --------------------------------------------------\n \
        SUMMARY (EXTRACTED FACTS):\n \
        - Case reference: AZ-2026-1004\n \
        - Deadlines/dates: 28.02.2026\n \
        - Amounts:        1500 Euro\n\
        ==================================================";
    assert_eq!(report.run.output.action, Action::Route);
    assert_eq!(report.run.output.rendered_text, expected);
}

#[test]
fn process_returns_only_the_output_record() {
    let desk = stub_desk();
    let output = desk.process("buerger123@web.de", SCHLAGLOCH);
    assert_eq!(output.action, Action::Route);
}

#[test]
fn entity_dates_make_a_message_urgent_when_text_has_none() {
    let text = "Die Laterne vor Nr. 5 ist defekt, AZ-2026-0500. Bitte bis Ende Maerz.";
    let source = FixedEntitySource::new(vec![NamedEntity::date("Ende Maerz")]);
    let desk = TriageDesk::new(Arc::new(source), TriagePipeline::default(), AppMetrics::shared());

    let report = desk.process_detailed(&InboundMessage::new("a@b.de", text));
    assert!(report.run.fallback.deadlines);
    assert_eq!(report.run.urgency, Urgency::High);
    assert!(report
        .run
        .output
        .rendered_text
        .contains(" - Deadlines/dates: Ende Maerz\n"));
    assert_eq!(desk.metrics().snapshot().deadline_fallback_total, 1);
}

#[test]
fn messages_are_independent_across_threads() {
    let desk = stub_desk();
    let inputs = [WOHNGELD, BAUANTRAG, SCHLAGLOCH];

    let outputs = std::thread::scope(|scope| {
        let handles = inputs
            .iter()
            .map(|text| {
                let desk = desk.clone();
                scope.spawn(move || desk.process("sender@example.org", text))
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker thread"))
            .collect::<Vec<_>>()
    });

    let sequential = inputs
        .iter()
        .map(|text| desk.process("sender@example.org", text))
        .collect::<Vec<_>>();
    assert_eq!(outputs, sequential);
    assert_eq!(desk.metrics().snapshot().messages_total, 6);
}

#[test]
fn report_serializes_for_the_cli() {
    let desk = stub_desk();
    let report = desk.process_detailed(&InboundMessage::new("buerger123@web.de", SCHLAGLOCH));
    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(value["department"], "public_order_defects");
    assert_eq!(value["office_code"], "Ordnungsamt");
    assert_eq!(value["urgency"], "high");
    assert_eq!(value["decision"]["outcome"], "ACCEPT");
    assert_eq!(value["output"]["action"], "ROUTE");
    assert_eq!(value["salutation"]["form"], "generic");
    assert_eq!(value["entity_source"], "fixed");
}
