use desk_core::{Action, Department, EntityLabel, InboundMessage, Outcome};
use desk_observability::AppMetrics;
use desk_triage::{DeskConfig, TriageDesk};

fn desk() -> TriageDesk {
    TriageDesk::from_config(&DeskConfig::default(), AppMetrics::shared())
        .expect("default configuration starts")
}

#[test]
fn signature_name_drives_the_salutation() {
    let report = desk().process_detailed(&InboundMessage::new(
        "sabine.mueller@mail.de",
        "Ich habe Wohngeld beantragt. Meine Miete von 650 Euro ist faellig. \
         Viele Gruesse, Sabine Mueller",
    ));

    assert_eq!(report.entity_source, "heuristic-gazetteer");
    assert!(report
        .entities
        .iter()
        .any(|entity| entity.label == EntityLabel::Person && entity.text == "Sabine Mueller"));
    assert_eq!(report.run.department, Department::SocialHousing);
    assert_eq!(report.run.salutation.render(), "Dear Mrs. Mueller");
    assert_eq!(report.run.output.action, Action::Reject);
}

#[test]
fn addressee_mentioned_first_does_not_win_over_signature() {
    let report = desk().process_detailed(&InboundMessage::new(
        "t.schmidt@bau.de",
        "Sehr geehrte Frau Petra Lang, zum Bauantrag AZ-2026-8871 liegt die Statik bei. \
         Gruss, Thomas Schmidt",
    ));

    assert_eq!(report.run.salutation.render(), "Dear Mr. Schmidt");
    assert_eq!(report.run.decision.outcome(), Outcome::Accept);
    assert_eq!(report.run.output.action, Action::Route);
}

#[test]
fn honorific_only_signature_falls_back_to_generic() {
    let report = desk().process_detailed(&InboundMessage::new(
        "anwohner@web.de",
        "Die Laterne ist defekt. Mit freundlichen Gruessen, Herr Yilmaz",
    ));

    assert_eq!(report.run.salutation.render(), "Dear Sir or Madam");
    assert!(report
        .run
        .output
        .rendered_text
        .contains("Dear Sir or Madam,\n"));
}

#[test]
fn written_dates_fill_deadlines_through_entities() {
    let report = desk().process_detailed(&InboundMessage::new(
        "buerger@web.de",
        "Schlagloch in der Rellinghauser Strasse, AZ-2026-2001. Bitte bis 15. Maerz 2026 beheben.",
    ));

    assert_eq!(report.run.metadata.deadlines, vec!["15. Maerz 2026"]);
    assert!(report.run.fallback.deadlines);
    assert_eq!(report.run.output.action, Action::Route);
    assert!(report
        .run
        .output
        .rendered_text
        .contains(" PRIORITY:      HIGH (check deadline!)\n"));
}
