use desk_core::InboundMessage;

pub fn demo_messages() -> Vec<InboundMessage> {
    vec![
        InboundMessage::new(
            "sabine.mueller@mail.de",
            "Guten Tag, ich habe vor drei Wochen Wohngeld beantragt. \
             Wann kann ich mit einer Auszahlung rechnen? Meine Miete in Hoehe von 650 Euro ist faellig. \
             Viele Gruesse aus Essen-Ruettenscheid. Sabine Mueller",
        ),
        InboundMessage::new(
            "architekt.schmidt@bau.de",
            "Sehr geehrte Damen und Herren, anbei uebersende ich Informationen zum Bauantrag \
             mit dem Aktenzeichen AZ-2026-8871. Die Unterlagen reiche ich spaeter nach. \
             Gruss, Thomas Schmidt",
        ),
        InboundMessage::new(
            "buerger123@web.de",
            "Hallo, auf der Kettwiger Strasse ist ein riesiges Schlagloch, \
             das repariert werden muss. Mein Vorgang dazu hat das Aktenzeichen AZ-2026-1004. \
             Bitte beheben Sie das bis zum 28.02.2026, da sonst Unfaelle drohen. \
             Der Schaden betraegt sicher schon 1500 Euro.",
        ),
    ]
}
